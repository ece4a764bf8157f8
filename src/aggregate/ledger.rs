use std::collections::HashSet;

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::debug;

use crate::records::{Response, ResponseField};
use crate::similarity::SimilarityMatrix;

use super::error::AggregateError;
use super::record::StudentRecord;

/// Per-student accumulators keyed by student id, in first-seen order.
///
/// One ledger per run. Responses are folded in ingestion order, then similarity rows are
/// assigned and normalised exactly once.
#[derive(Debug, Clone, Default)]
pub struct StudentLedger {
    records: IndexMap<String, StudentRecord>,
    similarity_assigned: bool,
}

impl StudentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one response into its student's record, creating the record on first sight.
    pub fn fold(&mut self, response: &Response, question_formality: u64, answer_formality: u64) {
        match self.records.entry(response.student_id.clone()) {
            Entry::Occupied(mut entry) => {
                entry
                    .get_mut()
                    .absorb(response, question_formality, answer_formality);
            }
            Entry::Vacant(entry) => {
                entry.insert(StudentRecord::from_response(
                    response,
                    question_formality,
                    answer_formality,
                ));
            }
        }
    }

    /// Adds each current row's off-diagonal similarities to its student and normalises.
    ///
    /// `current_ids[x]` owns row `x` of both matrices. Every touched student's sums are
    /// divided by `N + M - 1` once, after all rows are summed; nothing is divided when the
    /// comparison set holds a single text.
    pub fn assign_similarity(
        &mut self,
        current_ids: &[&str],
        historical_ids: &[&str],
        question: &SimilarityMatrix,
        answer: &SimilarityMatrix,
    ) -> Result<(), AggregateError> {
        if self.similarity_assigned {
            return Err(AggregateError::AlreadyAssigned);
        }

        let total = current_ids.len() + historical_ids.len();
        Self::check_shape(ResponseField::Question, question, current_ids.len(), total)?;
        Self::check_shape(ResponseField::Answer, answer, current_ids.len(), total)?;

        if let Some(unknown) = current_ids.iter().find(|id| !self.records.contains_key(**id)) {
            return Err(AggregateError::UnknownStudent {
                student_id: unknown.to_string(),
            });
        }

        let mut touched: HashSet<&str> = HashSet::new();
        for (x, id) in current_ids.iter().enumerate() {
            let (Some(question_sum), Some(answer_sum)) =
                (question.off_diagonal_sum(x), answer.off_diagonal_sum(x))
            else {
                continue;
            };

            if let Some(record) = self.records.get_mut(*id) {
                record.question_similarity_sum += question_sum;
                record.answer_similarity_sum += answer_sum;
                touched.insert(*id);
            }
        }

        if total > 1 {
            let divisor = (total - 1) as f64;
            for id in &touched {
                if let Some(record) = self.records.get_mut(*id) {
                    record.question_similarity_sum /= divisor;
                    record.answer_similarity_sum /= divisor;
                }
            }
        }

        debug!(
            students = touched.len(),
            rows = current_ids.len(),
            columns = total,
            "Assigned similarity"
        );

        self.similarity_assigned = true;
        Ok(())
    }

    fn check_shape(
        field: ResponseField,
        matrix: &SimilarityMatrix,
        rows: usize,
        columns: usize,
    ) -> Result<(), AggregateError> {
        if matrix.current_len() != rows || matrix.total_len() != columns {
            return Err(AggregateError::ShapeMismatch {
                field,
                expected_rows: rows,
                expected_columns: columns,
                rows: matrix.current_len(),
                columns: matrix.total_len(),
            });
        }
        Ok(())
    }

    pub fn get(&self, student_id: &str) -> Option<&StudentRecord> {
        self.records.get(student_id)
    }

    /// Records in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StudentRecord)> {
        self.records.iter().map(|(id, record)| (id.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` once similarity has been assigned and normalised.
    pub fn similarity_assigned(&self) -> bool {
        self.similarity_assigned
    }
}
