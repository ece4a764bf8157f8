//! Analysis report serialisation.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;
use tracing::info;

use crate::aggregate::{StudentLedger, StudentRecord};
use crate::constants::REPORT_HEADERS;

use super::error::RecordError;

/// One report line; field order matches [`REPORT_HEADERS`].
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    email: &'a str,
    firstname: &'a str,
    lastname: &'a str,
    total_average: f64,
    qa_count: u64,
    answer_length: u64,
    answer_formality: u64,
    answer_similarity: f64,
    question_length: u64,
    question_formality: u64,
    question_similarity: f64,
    combined_length: u64,
    question_average: f64,
    answer_average: f64,
}

impl<'a> ReportRow<'a> {
    fn new(email: &'a str, record: &'a StudentRecord) -> Self {
        Self {
            email,
            firstname: &record.firstname,
            lastname: &record.lastname,
            total_average: record.total_average(),
            qa_count: record.qa_count,
            answer_length: record.answer_length_total,
            answer_formality: record.answer_formality_total,
            answer_similarity: record.answer_similarity_sum,
            question_length: record.question_length_total,
            question_formality: record.question_formality_total,
            question_similarity: record.question_similarity_sum,
            combined_length: record.combined_length(),
            question_average: record.question_average(),
            answer_average: record.answer_average(),
        }
    }
}

/// Writes the report (header plus one row per student, first-seen order) to `path`.
pub fn write_report(path: &Path, ledger: &StudentLedger) -> Result<(), RecordError> {
    let file = File::create(path).map_err(|e| RecordError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_report_to(file, ledger, &path.display().to_string())?;
    info!(path = %path.display(), students = ledger.len(), "Analysis report written");
    Ok(())
}

/// Writes the report to any writer. `origin` names the destination in errors.
pub fn write_report_to<W: Write>(
    writer: W,
    ledger: &StudentLedger,
    origin: &str,
) -> Result<(), RecordError> {
    let to_error = |source| RecordError::Write {
        origin: origin.to_string(),
        source,
    };

    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(REPORT_HEADERS).map_err(to_error)?;

    for (email, record) in ledger.iter() {
        csv_writer
            .serialize(ReportRow::new(email, record))
            .map_err(to_error)?;
    }

    csv_writer.flush().map_err(|e| to_error(e.into()))?;
    Ok(())
}
