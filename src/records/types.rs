use std::fmt;

/// Which text of a question/answer pair is being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseField {
    Question,
    Answer,
}

impl ResponseField {
    /// Capitalised label used in alerts and logs.
    pub fn label(&self) -> &'static str {
        match self {
            ResponseField::Question => "Question",
            ResponseField::Answer => "Answer",
        }
    }
}

impl fmt::Display for ResponseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One current-period question/answer submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Stable student identity (email / username).
    pub student_id: String,
    pub firstname: String,
    pub lastname: String,
    pub question_text: String,
    pub answer_text: String,
    pub question_grade: f64,
    pub answer_grade: f64,
}

impl Response {
    /// Creates a response without display names.
    pub fn new(
        student_id: impl Into<String>,
        question_text: impl Into<String>,
        answer_text: impl Into<String>,
        question_grade: f64,
        answer_grade: f64,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            firstname: String::new(),
            lastname: String::new(),
            question_text: question_text.into(),
            answer_text: answer_text.into(),
            question_grade,
            answer_grade,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        self.firstname = firstname.into();
        self.lastname = lastname.into();
        self
    }

    /// Raw text for `field`.
    pub fn text(&self, field: ResponseField) -> &str {
        match field {
            ResponseField::Question => &self.question_text,
            ResponseField::Answer => &self.answer_text,
        }
    }

    /// Character count of the raw question text.
    pub fn question_length(&self) -> u64 {
        self.question_text.chars().count() as u64
    }

    /// Character count of the raw answer text.
    pub fn answer_length(&self) -> u64 {
        self.answer_text.chars().count() as u64
    }
}

/// A submission from a prior exam period, used only as comparison background.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoricalResponse {
    pub student_id: String,
    pub firstname: String,
    pub lastname: String,
    pub question_text: String,
    pub answer_text: String,
}

impl HistoricalResponse {
    pub fn new(
        student_id: impl Into<String>,
        question_text: impl Into<String>,
        answer_text: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            question_text: question_text.into(),
            answer_text: answer_text.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        self.firstname = firstname.into();
        self.lastname = lastname.into();
        self
    }

    /// Raw text for `field`.
    pub fn text(&self, field: ResponseField) -> &str {
        match field {
            ResponseField::Question => &self.question_text,
            ResponseField::Answer => &self.answer_text,
        }
    }
}
