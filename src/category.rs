use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::NidError;
use crate::normalization::{digit_at, normalize_str};

/// Who a NID was issued to, decided by its first digit.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    /// First digit 0 to 3
    Individual,
    /// First digit 4 to 7
    Company,
}

impl Category {
    pub fn from_marker(marker: u32) -> Option<Self> {
        match marker {
            0..=3 => Some(Category::Individual),
            4..=7 => Some(Category::Company),
            _ => None,
        }
    }
}

/// Classifies a raw NID by its first digit only. Length and check digit are
/// not looked at.
///
/// Returns `Ok(None)` for the markers 8 and 9, which are neither individuals
/// nor companies.
pub fn category(raw: &str) -> Result<Option<Category>, NidError> {
    let marker = digit_at(&normalize_str(raw), 0)?;
    Ok(Category::from_marker(marker))
}

/// Absent input and a first character that is not a digit both count as "not an individual".
pub fn is_individual(raw: Option<&str>) -> bool {
    is_category(raw, Category::Individual)
}

/// Absent input and a first character that is not a digit both count as "not a company".
pub fn is_company(raw: Option<&str>) -> bool {
    is_category(raw, Category::Company)
}

fn is_category(raw: Option<&str>, expected: Category) -> bool {
    match raw.map(category) {
        Some(Ok(Some(found))) => found == expected,
        _ => false,
    }
}
