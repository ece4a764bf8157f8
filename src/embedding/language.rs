use super::provider::LanguageCode;

/// Detects the language of `text` with `whatlang`.
///
/// Unreliable detections are still returned; only texts with no detectable script
/// (empty, digits, punctuation) map to `und`.
pub fn identify_language(text: &str) -> LanguageCode {
    match whatlang::detect(text) {
        Some(info) => LanguageCode::new(info.lang().code()),
        None => LanguageCode::undetermined(),
    }
}
