use std::fmt;

use crate::constants::UNDETERMINED_LANGUAGE;

use super::error::EmbeddingError;
use super::language::identify_language;

/// ISO 639-3 language code (e.g. `eng`, `deu`), or `und` when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn undetermined() -> Self {
        Self(UNDETERMINED_LANGUAGE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_undetermined(&self) -> bool {
        self.0 == UNDETERMINED_LANGUAGE
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns texts into fixed-length vectors in one shared space.
///
/// `embed` is a blocking batch call: one vector per input, in input order. Callers that compare
/// vectors must embed them in the same call.
pub trait EmbeddingProvider {
    /// Identifies the language of a raw (non-normalised) text.
    fn identify_language(&self, text: &str) -> LanguageCode {
        identify_language(text)
    }

    /// Embeds `(text, language)` pairs.
    fn embed(&self, inputs: &[(String, LanguageCode)]) -> Result<Vec<Vec<f32>>, EmbeddingError>;
}

impl<T: EmbeddingProvider + ?Sized> EmbeddingProvider for &T {
    fn identify_language(&self, text: &str) -> LanguageCode {
        (**self).identify_language(text)
    }

    fn embed(&self, inputs: &[(String, LanguageCode)]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        (**self).embed(inputs)
    }
}
