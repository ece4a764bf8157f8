//! Response records and the tabular files they come from and go to.
//!
//! - [`reader`] ingests current and historical response CSVs (header row required).
//! - [`writer`] serialises the per-student analysis report.

pub mod error;
pub mod reader;
pub mod types;
pub mod writer;


pub use error::RecordError;
pub use reader::{read_historical, read_historical_from, read_responses, read_responses_from};
pub use types::{HistoricalResponse, Response, ResponseField};
pub use writer::{write_report, write_report_to};
