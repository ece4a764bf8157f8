//! Per-student aggregation of grades, lengths, formality and similarity.

pub mod error;
pub mod ledger;
pub mod record;


pub use error::AggregateError;
pub use ledger::StudentLedger;
pub use record::StudentRecord;
