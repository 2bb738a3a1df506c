//! Runtime settings, read from the environment with defaults.

use std::env;
use std::path::PathBuf;

use crate::classify::MIN_TOP_K;

/// Host configuration shared by the CLI and the studio.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Model JSON (default: model/disease_model.json)
    pub model_path: PathBuf,
    /// Class index JSON (default: model/class_indices.json)
    pub class_index_path: PathBuf,
    /// Studio listen address (default: 127.0.0.1:7878)
    pub bind_addr: String,
    /// Default size of the confidence explorer (default: 5)
    pub top_k: usize,
}

impl Settings {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Settings::default();
        Self {
            model_path: env::var("LEAFMEDIC_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            class_index_path: env::var("LEAFMEDIC_CLASS_INDEX_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.class_index_path),
            bind_addr: env::var("LEAFMEDIC_BIND_ADDR").unwrap_or(defaults.bind_addr),
            top_k: env::var("LEAFMEDIC_TOP_K")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.top_k),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.model_path.as_os_str().is_empty() {
            return Err("model_path must not be empty".to_string());
        }
        if self.class_index_path.as_os_str().is_empty() {
            return Err("class_index_path must not be empty".to_string());
        }
        if self.bind_addr.trim().is_empty() {
            return Err("bind_addr must not be empty".to_string());
        }
        if self.top_k < MIN_TOP_K {
            return Err(format!("top_k must be at least {MIN_TOP_K}"));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model").join("disease_model.json"),
            class_index_path: PathBuf::from("model").join("class_indices.json"),
            bind_addr: "127.0.0.1:7878".to_string(),
            top_k: 5,
        }
    }
}
