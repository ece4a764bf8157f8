//! Embedding provider and model utilities.
//!
//! - [`EmbeddingProvider`] is the seam the similarity builder calls.
//! - [`encoder`] provides the candle-backed [`SentenceEncoder`].
//! - [`language`] identifies the language of raw texts.

/// BERT encoder with mean pooling.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// Sentence encoder (model and stub backends).
pub mod encoder;
mod error;
/// Language identification.
pub mod language;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod provider;
/// Tokenizer loading and vector helpers.
pub mod utils;


pub use encoder::{EncoderConfig, SentenceEncoder};
pub use error::EmbeddingError;
pub use language::identify_language;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbeddingProvider;
pub use provider::{EmbeddingProvider, LanguageCode};
