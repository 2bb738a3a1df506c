use leafmedic::{Classifier, Settings};

// ---------------------------------------------------------------------------
// Flash messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum FlashKind { Info, Error }

#[derive(Debug, Clone)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

impl FlashMessage {
    pub fn info(text: impl Into<String>) -> Self {
        FlashMessage { kind: FlashKind::Info, text: text.into() }
    }
    pub fn error(text: impl Into<String>) -> Self {
        FlashMessage { kind: FlashKind::Error, text: text.into() }
    }
}

// ---------------------------------------------------------------------------
// Main state struct
// ---------------------------------------------------------------------------

/// Everything a handler needs. Immutable after startup: nothing from one
/// upload is kept for the next.
pub struct StudioState {
    /// Loaded once in `main`; shared by reference with every request.
    pub classifier: Classifier,
    pub settings:   Settings,
}

impl StudioState {
    pub fn new(classifier: Classifier, settings: Settings) -> Self {
        StudioState { classifier, settings }
    }

    /// Clamps a requested top-K to what the loaded model supports.
    pub fn clamp_top_k(&self, requested: Option<usize>) -> usize {
        let n = self.classifier.labels().len();
        let k = requested.unwrap_or(self.settings.top_k);
        k.clamp(leafmedic::classify::MIN_TOP_K.min(n), n)
    }
}
