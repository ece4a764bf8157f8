//! Examr library crate (used by the `examr` binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`ReviewPipeline`], [`process_files`] - End-to-end batch review
//! - [`ReviewOutcome`], [`BatchSummary`] - What a run produces
//!
//! ## Core
//! - [`SimilarityMatrix`], [`SimilarityMatrixBuilder`] - Pairwise similarity
//! - [`ReviewAlert`] - Near-duplicate pairs for human review
//! - [`StudentLedger`], [`StudentRecord`] - Per-student aggregation
//! - [`formality`](formality::formality) - Formality heuristic
//!
//! ## Embedding
//! - [`EmbeddingProvider`], [`LanguageCode`] - Provider seam
//! - [`SentenceEncoder`], [`EncoderConfig`] - candle BERT encoder (with stub mode)
//!
//! ## Records
//! - [`Response`], [`HistoricalResponse`] - Input rows
//! - CSV readers and the report writer in [`records`]
//!
//! ## Test/Mock Support
//! [`MockEmbeddingProvider`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod formality;
pub mod records;
pub mod review;
pub mod similarity;

pub use aggregate::{AggregateError, StudentLedger, StudentRecord};
pub use config::{Config, ConfigError};
pub use constants::{REPORT_HEADERS, SIMILARITY_ALERT_THRESHOLD};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbeddingProvider;
pub use embedding::{
    EmbeddingError, EmbeddingProvider, EncoderConfig, LanguageCode, SentenceEncoder,
};
pub use records::{HistoricalResponse, RecordError, Response, ResponseField};
pub use review::{BatchSummary, ReviewError, ReviewOutcome, ReviewPipeline, process_files};
pub use similarity::{
    FieldReview, Participant, ReviewAlert, SimilarityError, SimilarityMatrix,
    SimilarityMatrixBuilder,
};
