use std::collections::HashMap;

use tracing::{debug, warn};

use crate::constants::SIMILARITY_ALERT_THRESHOLD;
use crate::embedding::{EmbeddingProvider, LanguageCode};
use crate::records::{HistoricalResponse, Response, ResponseField};

use super::alert::{Participant, ReviewAlert};
use super::error::SimilarityError;
use super::matrix::SimilarityMatrix;
use super::normalize::{cosine_similarity, normalize_for_embedding};

/// Matrix and alerts for one field (questions or answers) of a batch.
#[derive(Debug, Clone)]
pub struct FieldReview {
    pub field: ResponseField,
    pub matrix: SimilarityMatrix,
    pub alerts: Vec<ReviewAlert>,
}

/// Builds similarity matrices with one batched embedding call per matrix.
#[derive(Debug)]
pub struct SimilarityMatrixBuilder<P> {
    provider: P,
}

impl<P: EmbeddingProvider> SimilarityMatrixBuilder<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Computes the `N x (N + M)` matrix of `current_texts` against
    /// `current_texts ++ historical_texts`.
    ///
    /// Languages are identified on the raw texts; the provider embeds the normalised copies in
    /// a single call so every vector shares one space.
    pub fn build(
        &self,
        current_texts: &[&str],
        historical_texts: &[&str],
    ) -> Result<SimilarityMatrix, SimilarityError> {
        if current_texts.is_empty() {
            return Err(SimilarityError::EmptyCurrentSet);
        }

        let inputs: Vec<(String, LanguageCode)> = current_texts
            .iter()
            .chain(historical_texts.iter())
            .map(|text| {
                (
                    normalize_for_embedding(text),
                    self.provider.identify_language(text),
                )
            })
            .collect();

        debug!(
            current = current_texts.len(),
            historical = historical_texts.len(),
            "Embedding comparison set"
        );

        let vectors = self.provider.embed(&inputs)?;
        Self::check_vectors(&vectors, inputs.len())?;

        SimilarityMatrix::fill(current_texts.len(), historical_texts.len(), |x, y| {
            cosine_similarity(&vectors[x], &vectors[y])
        })
    }

    /// Builds the matrix for `field` and raises an alert for every pair above
    /// [`SIMILARITY_ALERT_THRESHOLD`].
    pub fn review(
        &self,
        field: ResponseField,
        current: &[Response],
        historical: &[HistoricalResponse],
    ) -> Result<FieldReview, SimilarityError> {
        let current_texts: Vec<&str> = current.iter().map(|r| r.text(field)).collect();
        let historical_texts: Vec<&str> = historical.iter().map(|r| r.text(field)).collect();

        let matrix = self.build(&current_texts, &historical_texts)?;

        // Participants are named by each student's first response, as in the report.
        let mut first_seen: HashMap<&str, &Response> = HashMap::new();
        for response in current {
            first_seen
                .entry(response.student_id.as_str())
                .or_insert(response);
        }
        let current_participant = |response: &Response| {
            match first_seen.get(response.student_id.as_str()) {
                Some(first) => Participant::current(first),
                None => Participant::current(response),
            }
        };

        let alerts: Vec<ReviewAlert> = matrix
            .pairs_above(SIMILARITY_ALERT_THRESHOLD)
            .map(|pair| {
                let left = &current[pair.row];
                let (right, right_text) = if matrix.is_historical_column(pair.column) {
                    let old = &historical[pair.column - current.len()];
                    (Participant::historical(old), old.text(field))
                } else {
                    let other = &current[pair.column];
                    (current_participant(other), other.text(field))
                };

                let alert = ReviewAlert {
                    field,
                    similarity: pair.similarity,
                    row: pair.row,
                    column: pair.column,
                    left: current_participant(left),
                    right,
                    left_text: left.text(field).to_string(),
                    right_text: right_text.to_string(),
                };

                warn!(
                    field = %field,
                    similarity = alert.similarity,
                    row = alert.row,
                    column = alert.column,
                    left = %alert.left,
                    right = %alert.right,
                    "Similarity above review threshold"
                );

                alert
            })
            .collect();

        Ok(FieldReview {
            field,
            matrix,
            alerts,
        })
    }

    fn check_vectors(vectors: &[Vec<f32>], expected: usize) -> Result<(), SimilarityError> {
        if vectors.len() != expected {
            return Err(SimilarityError::VectorCountMismatch {
                expected,
                actual: vectors.len(),
            });
        }

        let dim = vectors.first().map(Vec::len).unwrap_or_default();
        if dim == 0 {
            return Err(SimilarityError::EmptyVectors);
        }

        if let Some((index, vector)) = vectors.iter().enumerate().find(|(_, v)| v.len() != dim) {
            return Err(SimilarityError::DimensionMismatch {
                index,
                expected: dim,
                actual: vector.len(),
            });
        }

        Ok(())
    }
}
