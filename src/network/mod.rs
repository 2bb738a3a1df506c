pub mod metadata;
pub mod network;

pub use metadata::{InputType, ModelMetadata, DEFAULT_INPUT_SIZE};
pub use network::Network;
