//! End-to-end review of one exam batch.
//!
//! [`ReviewPipeline`] folds current responses into a
//! [`StudentLedger`](crate::aggregate::StudentLedger), builds question and answer similarity
//! matrices against the historical corpus, normalises per-student similarity and summarises
//! the batch. [`process_files`] wraps it with CSV input
//! and report output.

pub mod error;
pub mod pipeline;
pub mod summary;

#[cfg(test)]
mod tests;

pub use error::ReviewError;
pub use pipeline::{ReviewOutcome, ReviewPipeline, process_files};
pub use summary::BatchSummary;
