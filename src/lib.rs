pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod error;
pub mod config;
pub mod decode;
pub mod enhance;
pub mod classify;
pub mod report;
pub mod pipeline;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::{InputType, ModelMetadata, Network, DEFAULT_INPUT_SIZE};
pub use error::{ClassIndexError, ClassifyError, DiagnoseError, ImageError, LoadError, NetworkError};
pub use config::Settings;
pub use decode::{decode_image_bytes, encode_png};
pub use enhance::{detect_spots, draw_overlay, enhance, enhance_to, SpotBox};
pub use classify::{ClassIndex, Classifier, LabelVector, Prediction, RankedClass};
pub use report::{compose_report, readable_label, Severity};
pub use pipeline::{diagnose, diagnose_bytes, Diagnosis};
