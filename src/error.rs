//! Error types.
//!
//! `LoadError` is fatal: a process that hits it at startup must not serve
//! predictions. The remaining per-call errors surface to the caller without
//! touching any loaded state.

use std::path::PathBuf;

use thiserror::Error;

/// Structural problems in a deserialized network.
#[derive(Debug, Error, PartialEq)]
pub enum NetworkError {
    #[error("network has no layers")]
    NoLayers,

    #[error("layer {layer}: weight matrix declares {rows}x{cols} but holds {len} values")]
    WeightShape { layer: usize, rows: usize, cols: usize, len: usize },

    #[error("layer {layer}: size is {size} but weights have {cols} columns and biases {biases} entries")]
    LayerSize { layer: usize, size: usize, cols: usize, biases: usize },

    #[error("layer {layer} expects {expected} inputs but the previous layer produces {actual}")]
    LayerChain { layer: usize, expected: usize, actual: usize },

    #[error("input type {width}x{height}x3 is not a usable input size")]
    InputSize { width: u32, height: u32 },

    #[error("input type {width}x{height}x3 needs {expected} inputs but the first layer takes {actual}")]
    InputShape { width: u32, height: u32, expected: usize, actual: usize },
}

/// Violations of the class-index invariant (index set is exactly `0..N`).
#[derive(Debug, Error, PartialEq)]
pub enum ClassIndexError {
    #[error("class index mapping is empty")]
    Empty,

    #[error("invalid class index for '{class}': {value}")]
    InvalidIndex { class: String, value: String },

    #[error("class index for '{class}' is {index}, outside 0..{len}")]
    OutOfRange { class: String, index: usize, len: usize },

    #[error("classes '{first}' and '{second}' share index {index}")]
    Duplicate { index: usize, first: String, second: String },

    #[error("class indices mapping is incomplete: no class has index {index}")]
    Gap { index: usize },
}

/// Fatal startup failures, each naming the artifact that failed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("model file not found at: {}", .0.display())]
    ModelNotFound(PathBuf),

    #[error("failed to read model {}: {source}", .path.display())]
    ModelRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to deserialize model {}: {source}", .path.display())]
    ModelDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("model {} is invalid: {source}", .path.display())]
    InvalidModel {
        path: PathBuf,
        #[source]
        source: NetworkError,
    },

    #[error("class index file not found at: {}", .0.display())]
    ClassIndexNotFound(PathBuf),

    #[error("failed to read class index {}: {source}", .path.display())]
    ClassIndexRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse class index {}: {source}", .path.display())]
    ClassIndexDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("class index is invalid: {0}")]
    InvalidClassIndex(#[from] ClassIndexError),

    #[error("network is invalid: {0}")]
    Network(#[from] NetworkError),

    #[error("model produces {outputs} scores but the class index names {classes} classes")]
    LabelCountMismatch { outputs: usize, classes: usize },
}

/// Failures decoding an uploaded image.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image data is too large: {0} bytes (max: {1} bytes)")]
    TooLarge(usize, usize),

    #[error("Image data is empty")]
    EmptyData,

    #[error("Unsupported image format")]
    UnsupportedFormat,

    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),

    #[error("Failed to encode image: {0}")]
    EncodeFailed(String),
}

/// Per-call classification failures.
#[derive(Debug, Error, PartialEq)]
pub enum ClassifyError {
    #[error("cannot classify an empty {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },

    #[error("model produced a non-finite score at output {index}")]
    NonFiniteScore { index: usize },
}

/// Anything that can go wrong between raw upload bytes and a diagnosis.
#[derive(Debug, Error)]
pub enum DiagnoseError {
    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),
}
