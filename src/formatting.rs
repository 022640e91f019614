use crate::normalization::{char_len, normalize_str};
use crate::NID_LENGTH;

pub const DEFAULT_DELIMITER: &str = "-";

/// Characters before the delimiter: the encoded date of birth.
const DATE_PART_LENGTH: usize = 6;

/// Formats a NID as `DDMMYY-NNNN`. See [`format_with_delimiter`].
pub fn format(raw: Option<&str>) -> String {
    format_with_delimiter(raw, DEFAULT_DELIMITER)
}

/// Inserts `delimiter` after the sixth character of the normalized NID.
///
/// Returns an empty string if the NID is absent or does not normalize to 10
/// characters. The content of those characters is not checked.
pub fn format_with_delimiter(raw: Option<&str>, delimiter: &str) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let normalized = normalize_str(raw);
    if char_len(&normalized) != NID_LENGTH {
        return String::new();
    }

    let mut chars = normalized.chars();
    let mut formatted = String::with_capacity(normalized.len() + delimiter.len());
    formatted.extend(chars.by_ref().take(DATE_PART_LENGTH));
    formatted.push_str(delimiter);
    formatted.extend(chars);
    formatted
}
