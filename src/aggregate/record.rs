use crate::records::Response;

/// Running per-student totals for one review run.
///
/// Created from the student's first [`Response`]; `qa_count` is therefore never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub firstname: String,
    pub lastname: String,
    pub qa_count: u64,
    pub question_grade_total: f64,
    pub answer_grade_total: f64,
    pub question_length_total: u64,
    pub answer_length_total: u64,
    pub question_formality_total: u64,
    pub answer_formality_total: u64,
    /// Sum of off-diagonal question similarities; an average once the ledger is normalised.
    pub question_similarity_sum: f64,
    /// Sum of off-diagonal answer similarities; an average once the ledger is normalised.
    pub answer_similarity_sum: f64,
}

impl StudentRecord {
    /// Seeds a record from a student's first response.
    pub fn from_response(
        response: &Response,
        question_formality: u64,
        answer_formality: u64,
    ) -> Self {
        Self {
            firstname: response.firstname.clone(),
            lastname: response.lastname.clone(),
            qa_count: 1,
            question_grade_total: response.question_grade,
            answer_grade_total: response.answer_grade,
            question_length_total: response.question_length(),
            answer_length_total: response.answer_length(),
            question_formality_total: question_formality,
            answer_formality_total: answer_formality,
            question_similarity_sum: 0.0,
            answer_similarity_sum: 0.0,
        }
    }

    /// Adds another response. Names are first-seen and never overwritten.
    pub fn absorb(&mut self, response: &Response, question_formality: u64, answer_formality: u64) {
        self.qa_count += 1;
        self.question_grade_total += response.question_grade;
        self.answer_grade_total += response.answer_grade;
        self.question_length_total += response.question_length();
        self.answer_length_total += response.answer_length();
        self.question_formality_total += question_formality;
        self.answer_formality_total += answer_formality;
    }

    pub fn total_average(&self) -> f64 {
        (self.question_grade_total + self.answer_grade_total) / self.qa_count as f64 / 2.0
    }

    pub fn question_average(&self) -> f64 {
        self.question_grade_total / self.qa_count as f64
    }

    pub fn answer_average(&self) -> f64 {
        self.answer_grade_total / self.qa_count as f64
    }

    pub fn combined_length(&self) -> u64 {
        self.question_length_total + self.answer_length_total
    }
}
