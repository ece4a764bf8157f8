//! Pairwise similarity of current responses against current and historical ones.
//!
//! [`SimilarityMatrixBuilder`] normalises texts, embeds the whole comparison set through an
//! [`EmbeddingProvider`](crate::embedding::EmbeddingProvider) in one call, and fills a
//! [`SimilarityMatrix`] from cosine similarity. Pairs above
//! [`SIMILARITY_ALERT_THRESHOLD`](crate::constants::SIMILARITY_ALERT_THRESHOLD) become
//! [`ReviewAlert`]s for a human reviewer; they never change the matrix or any totals.

pub mod alert;
pub mod builder;
pub mod error;
pub mod matrix;
pub mod normalize;


pub use alert::{Participant, ReviewAlert};
pub use builder::{FieldReview, SimilarityMatrixBuilder};
pub use error::SimilarityError;
pub use matrix::{SimilarPair, SimilarityMatrix};
pub use normalize::{cosine_similarity, normalize_for_embedding};
