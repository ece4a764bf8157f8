use std::sync::LazyLock;

use regex::Regex;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// Prepares a text for embedding: lowercase, lines joined by single spaces, and every run of
/// non-word characters replaced by one space.
///
/// Only the copy handed to the embedding provider is normalised; alerts and reports keep the
/// raw text.
pub fn normalize_for_embedding(text: &str) -> String {
    let lowered = text.to_lowercase();
    let joined = lowered.lines().collect::<Vec<_>>().join(" ");
    NON_WORD.replace_all(&joined, " ").into_owned()
}

/// Cosine similarity of two equal-length vectors, clamped to `[-1, 1]`.
///
/// Returns `0.0` for mismatched lengths, empty input, or a zero-norm vector.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
    }
}
