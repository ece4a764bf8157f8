//! CSV ingestion for current and historical response files.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::constants::{
    COLUMN_ANSWER, COLUMN_ANSWER_GRADE, COLUMN_FIRSTNAME, COLUMN_LASTNAME, COLUMN_QUESTION,
    COLUMN_QUESTION_GRADE, COLUMN_USERNAME,
};

use super::error::RecordError;
use super::types::{HistoricalResponse, Response};

/// Header positions resolved once per file.
struct Columns {
    username: usize,
    question: usize,
    answer: usize,
    question_grade: Option<usize>,
    answer_grade: Option<usize>,
    firstname: Option<usize>,
    lastname: Option<usize>,
}

impl Columns {
    fn resolve(
        headers: &StringRecord,
        origin: &str,
        with_grades: bool,
    ) -> Result<Self, RecordError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| {
            find(name).ok_or_else(|| RecordError::MissingColumn {
                origin: origin.to_string(),
                column: name,
            })
        };

        let username = require(COLUMN_USERNAME)?;
        let question = require(COLUMN_QUESTION)?;
        let answer = require(COLUMN_ANSWER)?;
        let (question_grade, answer_grade) = if with_grades {
            (
                Some(require(COLUMN_QUESTION_GRADE)?),
                Some(require(COLUMN_ANSWER_GRADE)?),
            )
        } else {
            (None, None)
        };

        // Historical names are all or nothing: one name column alone is ignored.
        let (firstname, lastname) = if with_grades {
            (find(COLUMN_FIRSTNAME), find(COLUMN_LASTNAME))
        } else {
            find(COLUMN_FIRSTNAME)
                .zip(find(COLUMN_LASTNAME))
                .map_or((None, None), |(first, last)| (Some(first), Some(last)))
        };

        Ok(Self {
            username,
            question,
            answer,
            question_grade,
            answer_grade,
            firstname,
            lastname,
        })
    }

    fn field(record: &StringRecord, idx: usize) -> String {
        record.get(idx).unwrap_or_default().to_string()
    }

    fn optional(record: &StringRecord, idx: Option<usize>) -> String {
        idx.map(|i| Self::field(record, i)).unwrap_or_default()
    }
}

fn parse_grade(
    record: &StringRecord,
    idx: Option<usize>,
    column: &'static str,
    origin: &str,
) -> Result<f64, RecordError> {
    let raw = idx.and_then(|i| record.get(i)).unwrap_or_default();
    raw.trim()
        .parse::<f64>()
        .map_err(|_| RecordError::InvalidGrade {
            origin: origin.to_string(),
            line: record.position().map(|p| p.line()).unwrap_or(0),
            column,
            value: raw.to_string(),
        })
}

fn open(path: &Path) -> Result<File, RecordError> {
    File::open(path).map_err(|e| RecordError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Reads the current-period responses file, preserving row order.
pub fn read_responses(path: &Path) -> Result<Vec<Response>, RecordError> {
    let file = open(path)?;
    read_responses_from(file, &path.display().to_string())
}

/// Reads current-period responses from any reader. `origin` names the source in errors.
pub fn read_responses_from<R: Read>(
    reader: R,
    origin: &str,
) -> Result<Vec<Response>, RecordError> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| RecordError::csv(origin, e))?
        .clone();
    let columns = Columns::resolve(&headers, origin, true)?;

    let mut responses = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| RecordError::csv(origin, e))?;

        responses.push(Response {
            student_id: Columns::field(&record, columns.username),
            firstname: Columns::optional(&record, columns.firstname),
            lastname: Columns::optional(&record, columns.lastname),
            question_text: Columns::field(&record, columns.question),
            answer_text: Columns::field(&record, columns.answer),
            question_grade: parse_grade(
                &record,
                columns.question_grade,
                COLUMN_QUESTION_GRADE,
                origin,
            )?,
            answer_grade: parse_grade(&record, columns.answer_grade, COLUMN_ANSWER_GRADE, origin)?,
        });
    }

    debug!(origin, rows = responses.len(), "Read current responses");
    Ok(responses)
}

/// Reads every historical file in order and concatenates their rows.
pub fn read_historical(paths: &[PathBuf]) -> Result<Vec<HistoricalResponse>, RecordError> {
    let mut all = Vec::new();
    for path in paths {
        info!(path = %path.display(), "Considering as old responses file");
        let file = open(path)?;
        all.extend(read_historical_from(file, &path.display().to_string())?);
    }
    Ok(all)
}

/// Reads historical responses from any reader. Grade columns are ignored if present.
pub fn read_historical_from<R: Read>(
    reader: R,
    origin: &str,
) -> Result<Vec<HistoricalResponse>, RecordError> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| RecordError::csv(origin, e))?
        .clone();
    let columns = Columns::resolve(&headers, origin, false)?;

    let mut responses = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| RecordError::csv(origin, e))?;

        responses.push(HistoricalResponse {
            student_id: Columns::field(&record, columns.username),
            firstname: Columns::optional(&record, columns.firstname),
            lastname: Columns::optional(&record, columns.lastname),
            question_text: Columns::field(&record, columns.question),
            answer_text: Columns::field(&record, columns.answer),
        });
    }

    debug!(origin, rows = responses.len(), "Read historical responses");
    Ok(responses)
}
