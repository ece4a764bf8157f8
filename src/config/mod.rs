//! Environment-backed configuration.
//!
//! Everything has a default. Override with `EXAMR_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_BATCH_SIZE, DEFAULT_MAX_SEQ_LEN};

/// Runtime configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `EXAMR_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Sentence-encoder model directory (`config.json`, `model.safetensors`, `tokenizer.json`).
    /// `None` runs the encoder in stub mode.
    pub model_path: Option<PathBuf>,

    /// Explicit tokenizer path. Defaults to `<model_path>/tokenizer.json`.
    pub tokenizer_path: Option<PathBuf>,

    /// Max tokens per text before truncation. Default: `512`.
    pub max_seq_len: usize,

    /// Texts per forward pass. Default: `32`.
    pub batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: None,
            tokenizer_path: None,
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Config {
    const ENV_MODEL_PATH: &'static str = "EXAMR_MODEL_PATH";
    const ENV_TOKENIZER_PATH: &'static str = "EXAMR_TOKENIZER_PATH";
    const ENV_MAX_SEQ_LEN: &'static str = "EXAMR_MAX_SEQ_LEN";
    const ENV_BATCH_SIZE: &'static str = "EXAMR_BATCH_SIZE";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let tokenizer_path = Self::parse_optional_path_from_env(Self::ENV_TOKENIZER_PATH);
        let max_seq_len = Self::parse_usize_from_env(Self::ENV_MAX_SEQ_LEN, defaults.max_seq_len)?;
        let batch_size = Self::parse_usize_from_env(Self::ENV_BATCH_SIZE, defaults.batch_size)?;

        Ok(Self {
            model_path,
            tokenizer_path,
            max_seq_len,
            batch_size,
        })
    }

    /// Validates paths and numeric invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_seq_len == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_MAX_SEQ_LEN,
            });
        }

        if self.batch_size == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_BATCH_SIZE,
            });
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if let Some(ref path) = self.tokenizer_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `true` when no model is configured and the encoder will run in stub mode.
    pub fn uses_stub_encoder(&self) -> bool {
        self.model_path.is_none()
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }
}
