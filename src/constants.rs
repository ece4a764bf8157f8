//! Cross-cutting, shared constants.
//!
//! Report headers are part of the output contract and are spelled exactly as downstream
//! spreadsheets expect them (including `Totel Length of Q&As`).

/// Pairs whose cosine similarity is strictly above this value raise a review alert.
pub const SIMILARITY_ALERT_THRESHOLD: f32 = 0.95;

/// Similarity of every response with itself.
pub const SELF_SIMILARITY: f32 = 1.0;

/// Hidden size of the default multilingual sentence encoder (LaBSE / BERT-base).
pub const DEFAULT_EMBEDDING_DIM: usize = 768;

/// BERT position-embedding limit.
pub const DEFAULT_MAX_SEQ_LEN: usize = 512;

/// Number of texts per forward pass inside one provider call.
pub const DEFAULT_BATCH_SIZE: usize = 32;

/// Language code used when identification finds nothing.
pub const UNDETERMINED_LANGUAGE: &str = "und";

pub const COLUMN_USERNAME: &str = "Username";
pub const COLUMN_QUESTION: &str = "Ask Question";
pub const COLUMN_ANSWER: &str = "Answer Question";
pub const COLUMN_QUESTION_GRADE: &str = "Grade Question";
pub const COLUMN_ANSWER_GRADE: &str = "Grade Answer";
pub const COLUMN_FIRSTNAME: &str = "Firstname";
pub const COLUMN_LASTNAME: &str = "Lastname";

/// Columns every current-period responses file must carry.
pub const REQUIRED_RESPONSE_COLUMNS: [&str; 5] = [
    COLUMN_USERNAME,
    COLUMN_QUESTION,
    COLUMN_ANSWER,
    COLUMN_QUESTION_GRADE,
    COLUMN_ANSWER_GRADE,
];

/// Columns every historical responses file must carry.
pub const REQUIRED_HISTORICAL_COLUMNS: [&str; 3] =
    [COLUMN_USERNAME, COLUMN_QUESTION, COLUMN_ANSWER];

/// Analysis report header, in column order.
pub const REPORT_HEADERS: [&str; 14] = [
    "Google Apps Email",
    "Firstname",
    "Lastname",
    "Total Average",
    "Number of Q&As",
    "Length of Answers",
    "Formality of Answers",
    "Similarity of Answers",
    "Length of Questions",
    "Formality of Questions",
    "Similarity of Questions",
    "Totel Length of Q&As",
    "Question Average",
    "Answer Average",
];
