use std::fmt;

use crate::records::{HistoricalResponse, Response, ResponseField};

/// Identity of one side of a flagged pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub student_id: String,
    pub firstname: String,
    pub lastname: String,
    /// Set when the text comes from a prior exam period.
    pub historical: bool,
}

impl Participant {
    pub fn current(response: &Response) -> Self {
        Self {
            student_id: response.student_id.clone(),
            firstname: response.firstname.clone(),
            lastname: response.lastname.clone(),
            historical: false,
        }
    }

    pub fn historical(response: &HistoricalResponse) -> Self {
        Self {
            student_id: response.student_id.clone(),
            firstname: response.firstname.clone(),
            lastname: response.lastname.clone(),
            historical: true,
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.student_id, self.firstname, self.lastname)?;
        if self.historical {
            f.write_str(" [old response]")?;
        }
        Ok(())
    }
}

/// A pair of texts similar enough to need human review. Not a verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewAlert {
    pub field: ResponseField,
    pub similarity: f32,
    /// Current-response index.
    pub row: usize,
    /// Column index; values `>= N` are historical.
    pub column: usize,
    pub left: Participant,
    pub right: Participant,
    /// Raw, non-normalised text of the row response.
    pub left_text: String,
    /// Raw, non-normalised text of the column response.
    pub right_text: String,
}

impl fmt::Display for ReviewAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} similarity {} at [{},{}]:",
            self.field, self.similarity, self.row, self.column
        )?;
        writeln!(f, "{}", self.left)?;
        writeln!(f, "{}", self.right)?;
        writeln!(f, "<<<\n{}\n---\n{}\n>>>", self.left_text, self.right_text)
    }
}
