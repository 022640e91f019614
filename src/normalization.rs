use crate::error::NidError;

/// Characters allowed as visual separators in a NID. Anything else is kept as-is.
const SEPARATORS: [char; 2] = ['-', ' '];

/// Strips the separators (`-` and ` `) from a raw NID.
///
/// Other punctuation is preserved on purpose: `"091179.4829"` stays 11
/// characters long and fails every later length or digit check.
pub fn normalize(raw: Option<&str>) -> Option<String> {
    raw.map(normalize_str)
}

pub(crate) fn normalize_str(raw: &str) -> String {
    raw.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// Number of characters (not bytes) in a normalized NID.
pub(crate) fn char_len(normalized: &str) -> usize {
    normalized.chars().count()
}

/// Reads the decimal digit at `position`, failing instead of panicking when the
/// string is too short or holds something else.
pub(crate) fn digit_at(normalized: &str, position: usize) -> Result<u32, NidError> {
    match normalized.chars().nth(position) {
        Some(c) => c
            .to_digit(10)
            .ok_or(NidError::NotADigit { position, found: c }),
        None if normalized.is_empty() => Err(NidError::Empty),
        None => Err(NidError::InvalidLength {
            actual: char_len(normalized),
        }),
    }
}

/// Reads the two-digit number starting at `position`.
pub(crate) fn two_digits_at(normalized: &str, position: usize) -> Result<u32, NidError> {
    Ok(digit_at(normalized, position)? * 10 + digit_at(normalized, position + 1)?)
}
