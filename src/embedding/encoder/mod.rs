//! Sentence encoder (BERT safetensors + tokenizer).
//!
//! Use [`EncoderConfig::stub`] for tests and runs without model files.

/// Encoder configuration.
pub mod config;

#[cfg(test)]
mod tests;

pub use config::EncoderConfig;

use std::collections::BTreeMap;

use candle_core::{Device, Tensor};
use tokenizers::{Encoding, Tokenizer};
use tracing::{debug, info, warn};

use crate::embedding::bert::SentenceBert;
use crate::embedding::device::select_device;
use crate::embedding::error::EmbeddingError;
use crate::embedding::provider::{EmbeddingProvider, LanguageCode};
use crate::embedding::utils::{l2_normalize, load_batch_tokenizer, stub_vector};

enum EncoderBackend {
    Model {
        model: SentenceBert,
        tokenizer: Tokenizer,
        device: Device,
    },
    Stub,
}

/// Multilingual sentence encoder implementing [`EmbeddingProvider`] (supports stub mode).
pub struct SentenceEncoder {
    backend: EncoderBackend,
    config: EncoderConfig,
}

impl std::fmt::Debug for SentenceEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEncoder")
            .field(
                "backend",
                &match &self.backend {
                    EncoderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EncoderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.embedding_dim())
            .field("max_seq_len", &self.config.max_seq_len)
            .field("batch_size", &self.config.batch_size)
            .finish()
    }
}

impl SentenceEncoder {
    /// Loads the encoder from a config (stub mode is supported).
    pub fn load(config: EncoderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Sentence encoder running in STUB mode: only identical texts will match");
            return Ok(Self {
                backend: EncoderBackend::Stub,
                config,
            });
        }

        if !config.model_available() || !config.tokenizer_available() {
            return Err(EmbeddingError::ModelNotFound {
                path: config.model_dir.clone(),
            });
        }

        let device = select_device();
        debug!(?device, "Selected compute device for sentence encoder");

        let model = SentenceBert::load(&config.model_dir, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            }
        })?;

        let tokenizer =
            load_batch_tokenizer(&config.tokenizer_path, config.max_seq_len).map_err(|e| {
                EmbeddingError::TokenizationFailed {
                    reason: format!("Failed to load tokenizer: {}", e),
                }
            })?;

        info!(
            model_dir = %config.model_dir.display(),
            hidden_size = model.hidden_size(),
            max_seq_len = config.max_seq_len,
            batch_size = config.batch_size,
            "Sentence encoder loaded"
        );

        Ok(Self {
            backend: EncoderBackend::Model {
                model,
                tokenizer,
                device,
            },
            config,
        })
    }

    /// Shorthand for `load(EncoderConfig::stub())`.
    pub fn stub() -> Result<Self, EmbeddingError> {
        Self::load(EncoderConfig::stub())
    }

    /// Embeds already-normalised texts, preserving order.
    pub fn embed_texts(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        match &self.backend {
            EncoderBackend::Model {
                model,
                tokenizer,
                device,
            } => self.embed_with_model(texts, model, tokenizer, device),
            EncoderBackend::Stub => Ok(texts
                .iter()
                .map(|text| stub_vector(text, self.config.embedding_dim))
                .collect()),
        }
    }

    fn embed_with_model(
        &self,
        texts: &[&str],
        model: &SentenceBert,
        tokenizer: &Tokenizer,
        device: &Device,
    ) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let mut results = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(self.config.batch_size) {
            let encodings = tokenizer.encode_batch(chunk.to_vec(), true).map_err(|e| {
                EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                }
            })?;

            // BatchLongest padding: every encoding in the chunk has the same length.
            let seq_len = encodings.first().map(|e| e.get_ids().len()).unwrap_or(0);
            if seq_len == 0 {
                results.extend(chunk.iter().map(|_| vec![0.0; model.hidden_size()]));
                continue;
            }

            let shape = (chunk.len(), seq_len);
            let flatten = |select: fn(&Encoding) -> &[u32]| -> Vec<u32> {
                encodings.iter().flat_map(|e| select(e).iter().copied()).collect()
            };

            let input_ids = Tensor::from_vec(flatten(Encoding::get_ids), shape, device)?;
            let type_ids = Tensor::from_vec(flatten(Encoding::get_type_ids), shape, device)?;
            let attention_mask =
                Tensor::from_vec(flatten(Encoding::get_attention_mask), shape, device)?;

            debug!(
                batch = chunk.len(),
                seq_len, "Running sentence encoder forward pass"
            );

            let pooled = model
                .forward(&input_ids, &type_ids, &attention_mask)
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("Encoder forward pass failed: {}", e),
                })?;

            results.extend(pooled.to_vec2::<f32>()?.into_iter().map(l2_normalize));
        }

        Ok(results)
    }

    /// Output dimension: the model's hidden size, or the configured stub dimension.
    pub fn embedding_dim(&self) -> usize {
        match &self.backend {
            EncoderBackend::Model { model, .. } => model.hidden_size(),
            EncoderBackend::Stub => self.config.embedding_dim,
        }
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EncoderBackend::Stub)
    }

    /// Returns the encoder configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }
}

/// The encoder is multilingual and language-agnostic: language codes are only logged.
impl EmbeddingProvider for SentenceEncoder {
    fn embed(&self, inputs: &[(String, LanguageCode)]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let mut languages: BTreeMap<&str, usize> = BTreeMap::new();
        for (_, language) in inputs {
            *languages.entry(language.as_str()).or_default() += 1;
        }
        debug!(texts = inputs.len(), ?languages, "Embedding batch");

        let texts: Vec<&str> = inputs.iter().map(|(text, _)| text.as_str()).collect();
        self.embed_texts(&texts)
    }
}
