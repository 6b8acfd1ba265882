//! Category label sanitization for the restricted CATEGORIES field.
//!
//! Some clients (Outlook in particular) only accept letters A–Z/a–z, digits,
//! hyphens, and commas in CATEGORIES values.

use icu::normalizer::DecomposingNormalizer;

/// Reduce a label to the restricted character set.
///
/// The label is canonically decomposed first so accented letters keep their
/// base character; the combining marks then fall outside the allowed set and
/// are dropped along with every other disallowed character.
pub fn sanitize_category(label: &str) -> String {
    let decomposed = DecomposingNormalizer::new_nfd().normalize(label);
    decomposed
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | ','))
        .collect()
}
