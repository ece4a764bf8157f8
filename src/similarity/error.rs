use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum SimilarityError {
    #[error("cannot build a similarity matrix without current responses")]
    EmptyCurrentSet,

    #[error("embedding provider failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("embedding provider returned {actual} vectors for {expected} texts")]
    VectorCountMismatch { expected: usize, actual: usize },

    #[error("embedding {index} has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("embedding provider returned zero-length vectors")]
    EmptyVectors,
}
