use std::collections::HashMap;

use parking_lot::Mutex;

use crate::embedding::error::EmbeddingError;
use crate::embedding::provider::{EmbeddingProvider, LanguageCode};
use crate::embedding::utils::stub_vector;
use crate::similarity::normalize_for_embedding;

/// Scripted [`EmbeddingProvider`] for tests.
///
/// Texts registered with [`with_vector`](Self::with_vector) return that vector; anything else
/// gets a hashed stub vector. Every `embed` call is recorded.
pub struct MockEmbeddingProvider {
    dim: usize,
    vectors: HashMap<String, Vec<f32>>,
    failure: Option<String>,
    calls: Mutex<Vec<Vec<(String, LanguageCode)>>>,
}

impl MockEmbeddingProvider {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            vectors: HashMap::new(),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Registers `vector` for `text`. The key is normalised the same way the builder
    /// normalises its inputs, so raw text can be passed here.
    pub fn with_vector(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(normalize_for_embedding(text), vector);
        self
    }

    /// Makes every `embed` call fail with `reason`.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Inputs of every recorded call, oldest first.
    pub fn calls(&self) -> Vec<Vec<(String, LanguageCode)>> {
        self.calls.lock().clone()
    }
}

impl EmbeddingProvider for MockEmbeddingProvider {
    fn embed(&self, inputs: &[(String, LanguageCode)]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.calls.lock().push(inputs.to_vec());

        if let Some(reason) = &self.failure {
            return Err(EmbeddingError::InferenceFailed {
                reason: reason.clone(),
            });
        }

        Ok(inputs
            .iter()
            .map(|(text, _)| {
                self.vectors
                    .get(text)
                    .cloned()
                    .unwrap_or_else(|| stub_vector(text, self.dim))
            })
            .collect())
    }
}
