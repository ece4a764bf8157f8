use tracing::info;

use crate::aggregate::StudentLedger;

/// Batch-wide statistics. Averages are per student.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BatchSummary {
    pub students: usize,
    pub total_qas: u64,
    pub average_qa_count: f64,
    pub average_answer_length: f64,
    pub average_answer_formality: f64,
    pub average_question_length: f64,
    pub average_question_formality: f64,
    pub average_combined_length: f64,
}

impl BatchSummary {
    /// Summarises a ledger. An empty ledger yields all zeros.
    pub fn from_ledger(ledger: &StudentLedger) -> Self {
        let students = ledger.len();
        if students == 0 {
            return Self::default();
        }

        let mut total_qas = 0u64;
        let mut answer_length = 0u64;
        let mut answer_formality = 0u64;
        let mut question_length = 0u64;
        let mut question_formality = 0u64;
        let mut combined_length = 0u64;

        for (_, record) in ledger.iter() {
            total_qas += record.qa_count;
            answer_length += record.answer_length_total;
            answer_formality += record.answer_formality_total;
            question_length += record.question_length_total;
            question_formality += record.question_formality_total;
            combined_length += record.combined_length();
        }

        let per_student = |total: u64| total as f64 / students as f64;

        Self {
            students,
            total_qas,
            average_qa_count: per_student(total_qas),
            average_answer_length: per_student(answer_length),
            average_answer_formality: per_student(answer_formality),
            average_question_length: per_student(question_length),
            average_question_formality: per_student(question_formality),
            average_combined_length: per_student(combined_length),
        }
    }

    pub fn log(&self) {
        info!(
            students = self.students,
            total_qas = self.total_qas,
            average_qa_count = self.average_qa_count,
            average_answer_length = self.average_answer_length,
            average_answer_formality = self.average_answer_formality,
            average_question_length = self.average_question_length,
            average_question_formality = self.average_question_formality,
            average_combined_length = self.average_combined_length,
            "Batch summary"
        );
    }
}
