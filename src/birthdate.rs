use chrono::{Datelike, NaiveDate};

use crate::category::{category, Category};
use crate::error::NidError;
use crate::normalization::{char_len, digit_at, normalize_str, two_digits_at};
use crate::NID_LENGTH;

const DAY_POSITION: usize = 0;
const MONTH_POSITION: usize = 2;
const YEAR_POSITION: usize = 4;
const CENTURY_POSITION: usize = 9;

/// Returns the day of birth (digits 0 and 1) of an individual.
pub fn day_of_birth(raw: Option<&str>) -> Option<u32> {
    parse_day(&normalize_str(raw?)).ok()
}

/// Returns the month of birth (digits 2 and 3) of an individual.
pub fn month_of_birth(raw: Option<&str>) -> Option<u32> {
    parse_month(&normalize_str(raw?)).ok()
}

/// Returns the four-digit year of birth of an individual. Unlike the day and
/// the month, the year needs a full-length NID since the century is encoded
/// by the last digit.
pub fn year_of_birth(raw: Option<&str>) -> Option<i32> {
    parse_year(&normalize_str(raw?)).ok()
}

/// Builds the date of birth encoded in the NID.
///
/// Fails with [`NidError::InvalidDate`] if the digits do not form a real calendar
/// date (e.g. day 31 in a 30-day month) and with [`NidError::NotAnIndividual`]
/// for company NIDs.
pub fn date_of_birth(raw: Option<&str>) -> Result<Option<NaiveDate>, NidError> {
    raw.map(|raw| parse_date_of_birth(&normalize_str(raw)))
        .transpose()
}

/// Age of the individual at `reference`, absent if either argument is.
pub fn age(raw: Option<&str>, reference: Option<NaiveDate>) -> Result<Option<i32>, NidError> {
    let (Some(raw), Some(reference)) = (raw, reference) else {
        return Ok(None);
    };
    let birth_date = parse_date_of_birth(&normalize_str(raw))?;
    Ok(Some(age_at_date(birth_date, reference)))
}

/// Number of birthdays that have happened between `birth_date` and `date`.
///
/// The birthday counts as reached on the day itself.
pub fn age_at_date(birth_date: NaiveDate, date: NaiveDate) -> i32 {
    let years = date.year() - birth_date.year();

    let birthday_reached = birth_date.month() < date.month()
        || (birth_date.month() == date.month() && birth_date.day() <= date.day());

    if birthday_reached {
        years
    } else {
        years - 1
    }
}

/// First birthday on or after `current_date`. Invoked on the birthday itself,
/// this returns `current_date`.
pub fn next_birthday(
    current_date: NaiveDate,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, NidError> {
    raw.map(|raw| next_birthday_from(current_date, &normalize_str(raw)))
        .transpose()
}

pub(crate) fn next_birthday_from(
    current_date: NaiveDate,
    normalized: &str,
) -> Result<NaiveDate, NidError> {
    let birth_day = parse_day(normalized)?;
    let birth_month = parse_month(normalized)?;

    let mut year = current_date.year();
    if current_date.month() > birth_month
        || (current_date.month() == birth_month && current_date.day() > birth_day)
    {
        year += 1;
    }

    calendar_date(year, birth_month, birth_day)
}

pub(crate) fn parse_day(normalized: &str) -> Result<u32, NidError> {
    require_individual(normalized)?;
    two_digits_at(normalized, DAY_POSITION)
}

pub(crate) fn parse_month(normalized: &str) -> Result<u32, NidError> {
    require_individual(normalized)?;
    two_digits_at(normalized, MONTH_POSITION)
}

pub(crate) fn parse_year(normalized: &str) -> Result<i32, NidError> {
    require_individual(normalized)?;

    let actual = char_len(normalized);
    if actual != NID_LENGTH {
        return Err(NidError::InvalidLength { actual });
    }

    let century = century_start(digit_at(normalized, CENTURY_POSITION)?);
    let year_of_century = two_digits_at(normalized, YEAR_POSITION)?;
    Ok(century + year_of_century as i32)
}

pub(crate) fn parse_date_of_birth(normalized: &str) -> Result<NaiveDate, NidError> {
    let day = parse_day(normalized)?;
    let month = parse_month(normalized)?;
    let year = parse_year(normalized)?;
    calendar_date(year, month, day)
}

/// Marker 0 is the 2000s, any other marker `d` is the `1d00`s.
fn century_start(marker: u32) -> i32 {
    match marker {
        0 => 2000,
        marker => 1000 + 100 * marker as i32,
    }
}

fn require_individual(normalized: &str) -> Result<(), NidError> {
    match category(normalized)? {
        Some(Category::Individual) => Ok(()),
        _ => Err(NidError::NotAnIndividual),
    }
}

fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, NidError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(NidError::InvalidDate { year, month, day })
}
