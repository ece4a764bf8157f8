use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading response files or writing the report.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("{origin} is missing required column '{column}'")]
    MissingColumn {
        origin: String,
        column: &'static str,
    },

    #[error("{origin} line {line}: '{value}' in column '{column}' is not a number")]
    InvalidGrade {
        origin: String,
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("failed to write report to {origin}: {source}")]
    Write {
        origin: String,
        #[source]
        source: csv::Error,
    },
}

impl RecordError {
    pub(crate) fn csv(origin: &str, source: csv::Error) -> Self {
        RecordError::Csv {
            origin: origin.to_string(),
            source,
        }
    }
}
