use std::path::Path;

use serde::{Serialize, Deserialize};
use tracing::info;

use crate::layers::dense::Layer;
use crate::error::{LoadError, NetworkError};
use crate::network::metadata::{InputType, ModelMetadata};

/// A frozen feed-forward network. Read-only after load, so a single instance
/// can be shared by reference between callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub metadata: Option<ModelMetadata>,
}

impl Network {
    pub fn with_input_type(mut self, input_type: InputType) -> Network {
        self.metadata.get_or_insert_with(ModelMetadata::default).input_type = Some(input_type);
        self
    }

    /// Declared input type, or the default 224×224 RGB image.
    pub fn input_type(&self) -> InputType {
        self.metadata.as_ref()
            .and_then(|m| m.input_type.clone())
            .unwrap_or_default()
    }

    pub fn input_len(&self) -> usize {
        self.layers.first().map(Layer::input_size).unwrap_or(0)
    }

    pub fn output_len(&self) -> usize {
        self.layers.last().map(|l| l.size).unwrap_or(0)
    }

    /// Checks that every layer is well-formed, that layers chain, and that
    /// the declared input type matches the first layer.
    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.layers.is_empty() {
            return Err(NetworkError::NoLayers);
        }
        let mut previous: Option<usize> = None;
        for (i, layer) in self.layers.iter().enumerate() {
            let w = &layer.weights;
            if !w.is_consistent() {
                return Err(NetworkError::WeightShape { layer: i, rows: w.rows, cols: w.cols, len: w.data.len() });
            }
            if layer.size != w.cols || layer.biases.len() != w.cols {
                return Err(NetworkError::LayerSize {
                    layer: i, size: layer.size, cols: w.cols, biases: layer.biases.len(),
                });
            }
            if let Some(prev) = previous {
                if w.rows != prev {
                    return Err(NetworkError::LayerChain { layer: i, expected: w.rows, actual: prev });
                }
            }
            previous = Some(w.cols);
        }

        let input_type = self.input_type();
        let (width, height) = input_type.dimensions();
        let expected = input_type.input_len()
            .ok_or(NetworkError::InputSize { width, height })?;
        if expected != self.input_len() {
            return Err(NetworkError::InputShape { width, height, expected, actual: self.input_len() });
        }
        Ok(())
    }

    /// Forward pass. `input.len()` must equal `input_len()`.
    pub fn forward(&self, input: &[f64]) -> Vec<f64> {
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current);
        }
        current
    }

    /// Serializes the network weights to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes and validates a network from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Network, LoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::ModelNotFound(path.to_path_buf()));
        }
        let file = std::fs::File::open(path)
            .map_err(|source| LoadError::ModelRead { path: path.to_path_buf(), source })?;
        let reader = std::io::BufReader::new(file);
        let network: Network = serde_json::from_reader(reader)
            .map_err(|source| LoadError::ModelDecode { path: path.to_path_buf(), source })?;
        network.validate()
            .map_err(|source| LoadError::InvalidModel { path: path.to_path_buf(), source })?;

        info!(
            path = %path.display(),
            layers = network.layers.len(),
            inputs = network.input_len(),
            outputs = network.output_len(),
            "loaded model"
        );
        Ok(network)
    }
}
