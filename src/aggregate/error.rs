use thiserror::Error;

use crate::records::ResponseField;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("student '{student_id}' has a similarity row but no folded response")]
    UnknownStudent { student_id: String },

    #[error(
        "{field} similarity matrix is {rows}x{columns}, expected {expected_rows}x{expected_columns}"
    )]
    ShapeMismatch {
        field: ResponseField,
        expected_rows: usize,
        expected_columns: usize,
        rows: usize,
        columns: usize,
    },

    #[error("similarity has already been assigned and normalised for this ledger")]
    AlreadyAssigned,
}
