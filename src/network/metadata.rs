use serde::{Deserialize, Serialize};

/// Working resolution shared by the enhancer and the classifier.
pub const DEFAULT_INPUT_SIZE: u32 = 224;

/// Describes how to interpret the input fed to a Network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputType {
    /// RGB image resized to width×height, normalized to [0, 1], flattened as R,G,B,...
    ImageRgb { width: u32, height: u32 },
}

impl InputType {
    /// Number of network inputs, or `None` when a dimension is zero or the
    /// product does not fit in `usize`.
    pub fn input_len(&self) -> Option<usize> {
        match self {
            InputType::ImageRgb { width, height } => {
                if *width == 0 || *height == 0 {
                    return None;
                }
                (*width as usize).checked_mul(*height as usize)?.checked_mul(3)
            }
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            InputType::ImageRgb { width, height } => (*width, *height),
        }
    }
}

impl Default for InputType {
    fn default() -> Self {
        InputType::ImageRgb { width: DEFAULT_INPUT_SIZE, height: DEFAULT_INPUT_SIZE }
    }
}

/// Optional annotations attached to a saved Network.
/// All fields are Option<> so models without metadata deserialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModelMetadata {
    pub description: Option<String>,
    pub input_type: Option<InputType>,
}
