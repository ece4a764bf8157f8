use thiserror::Error;

use crate::aggregate::AggregateError;
use crate::config::ConfigError;
use crate::embedding::EmbeddingError;
use crate::records::RecordError;
use crate::similarity::SimilarityError;

/// Errors that abort a review run. No report is written once one is raised.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("no current responses to review")]
    EmptyBatch,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Similarity(#[from] SimilarityError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}
