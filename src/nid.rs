use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::birthdate::{self, age_at_date, next_birthday_from, parse_date_of_birth};
use crate::category::{self, Category};
use crate::checksum;
use crate::error::NidError;
use crate::formatting;
use crate::normalization::{char_len, digit_at, normalize_str};
use crate::NID_LENGTH;

/// A national identification number.
///
/// `Nid::new` wraps any string as-is and every accessor applies the same rules
/// as the free functions of this crate. Use [`Nid::parse`] to only accept
/// structurally valid NIDs.
///
/// Two NIDs are equal when their normalized forms are equal, so
/// `"091179-4829"` and `"0911794829"` compare equal.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(transparent)]
pub struct Nid(String);

impl Nid {
    pub fn new(nid: impl Into<String>) -> Self {
        Nid(nid.into())
    }

    pub fn of(nid: &str) -> Self {
        Nid::new(nid)
    }

    /// Accepts a NID only if it normalizes to 10 digits with a matching check
    /// digit. The normalized form is stored.
    pub fn parse(raw: &str) -> Result<Self, NidError> {
        let normalized = normalize_str(raw);

        let actual = char_len(&normalized);
        if actual == 0 {
            return Err(NidError::Empty);
        }
        if actual != NID_LENGTH {
            return Err(NidError::InvalidLength { actual });
        }
        // surfaces the first offending character
        for position in 0..NID_LENGTH {
            digit_at(&normalized, position)?;
        }
        if !checksum::validate(Some(&normalized)) {
            return Err(NidError::InvalidChecksum);
        }
        Ok(Nid(normalized))
    }

    /// The string this NID was created from.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn normalized(&self) -> String {
        normalize_str(&self.0)
    }

    pub fn category(&self) -> Result<Option<Category>, NidError> {
        category::category(&self.0)
    }

    pub fn is_individual(&self) -> bool {
        category::is_individual(Some(&self.0))
    }

    pub fn is_company(&self) -> bool {
        category::is_company(Some(&self.0))
    }

    pub fn is_valid(&self) -> bool {
        checksum::validate(Some(&self.0))
    }

    pub fn format(&self) -> String {
        formatting::format(Some(&self.0))
    }

    pub fn format_with_delimiter(&self, delimiter: &str) -> String {
        formatting::format_with_delimiter(Some(&self.0), delimiter)
    }

    pub fn day_of_birth(&self) -> Option<u32> {
        birthdate::day_of_birth(Some(&self.0))
    }

    pub fn month_of_birth(&self) -> Option<u32> {
        birthdate::month_of_birth(Some(&self.0))
    }

    pub fn year_of_birth(&self) -> Option<i32> {
        birthdate::year_of_birth(Some(&self.0))
    }

    pub fn date_of_birth(&self) -> Result<NaiveDate, NidError> {
        parse_date_of_birth(&self.normalized())
    }

    pub fn age(&self, reference: NaiveDate) -> Result<i32, NidError> {
        Ok(age_at_date(self.date_of_birth()?, reference))
    }

    /// Age as of today's date in the local time zone.
    pub fn age_today(&self) -> Result<i32, NidError> {
        self.age(Local::now().date_naive())
    }

    pub fn next_birthday(&self, current_date: NaiveDate) -> Result<NaiveDate, NidError> {
        next_birthday_from(current_date, &self.normalized())
    }
}

impl PartialEq for Nid {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Nid {}

impl FromStr for Nid {
    type Err = NidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Nid::parse(s)
    }
}

impl fmt::Display for Nid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Datelike;
    use serde_test::{assert_tokens, Token};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn should_expose_category() {
        let person = Nid::of("0911794829");
        assert!(person.is_individual());
        assert!(!person.is_company());
        assert_eq!(person.category(), Ok(Some(Category::Individual)));

        let company = Nid::of("570300-3340");
        assert!(company.is_company());
        assert!(!company.is_individual());
        assert_eq!(company.category(), Ok(Some(Category::Company)));
    }

    #[test]
    fn should_derive_birth_information() {
        let nid = Nid::new("091179 4829");
        assert_eq!(nid.day_of_birth(), Some(9));
        assert_eq!(nid.month_of_birth(), Some(11));
        assert_eq!(nid.year_of_birth(), Some(1979));
        assert_eq!(nid.date_of_birth(), Ok(date(1979, 11, 9)));
        assert_eq!(nid.age(date(2011, 1, 1)), Ok(31));
        assert_eq!(nid.next_birthday(date(2012, 1, 1)), Ok(date(2012, 11, 9)));
    }

    #[test]
    fn should_compute_age_today() {
        let nid = Nid::of("0911794829");
        let today = Local::now().date_naive();
        let age = nid.age_today().unwrap();
        assert!(age == today.year() - 1979 || age == today.year() - 1980);
    }

    #[test]
    fn should_fail_derivation_for_company() {
        let company = Nid::of("5703003340");
        assert_eq!(company.year_of_birth(), None);
        assert_eq!(company.date_of_birth(), Err(NidError::NotAnIndividual));
        assert_eq!(company.age(date(2011, 1, 1)), Err(NidError::NotAnIndividual));
        assert_eq!(
            company.next_birthday(date(2011, 1, 1)),
            Err(NidError::NotAnIndividual)
        );
    }

    #[test]
    fn should_format() {
        let nid = Nid::of("0911794829");
        assert_eq!(nid.format(), "091179-4829");
        assert_eq!(nid.format_with_delimiter(""), "0911794829");
        assert_eq!(Nid::of("091").format(), "");
    }

    #[test]
    fn should_compare_normalized() {
        assert_eq!(Nid::of("091179-4829"), Nid::of("0911794829"));
        assert_eq!(Nid::of("091179 4829"), Nid::of("091179-4829"));
        assert_ne!(Nid::of("091179.4829"), Nid::of("0911794829"));
        assert_eq!(Nid::of("091179-4829").as_str(), "091179-4829");
    }

    #[test]
    fn should_parse_valid_nids() {
        let nid = Nid::parse("091179-4829").unwrap();
        assert_eq!(nid.as_str(), "0911794829");
        assert!(nid.is_valid());
        assert_eq!("6005111490".parse::<Nid>(), Ok(Nid::of("6005111490")));
    }

    #[test]
    fn should_reject_invalid_nids() {
        assert_eq!(Nid::parse(""), Err(NidError::Empty));
        assert_eq!(Nid::parse(" - "), Err(NidError::Empty));
        assert_eq!(Nid::parse("AAA"), Err(NidError::InvalidLength { actual: 3 }));
        assert_eq!(
            Nid::parse("091179.4829"),
            Err(NidError::InvalidLength { actual: 11 })
        );
        assert_eq!(
            Nid::parse("BBBBBBBBBB"),
            Err(NidError::NotADigit {
                position: 0,
                found: 'B'
            })
        );
        assert_eq!(Nid::parse("0911794839"), Err(NidError::InvalidChecksum));
        assert_eq!(Nid::parse("4000000000"), Err(NidError::InvalidChecksum));
    }

    #[test]
    fn should_display_raw_string() {
        assert_eq!(Nid::of("091179 4829").to_string(), "091179 4829");
    }

    #[test]
    fn should_serialize_as_string() {
        assert_tokens(&Nid::of("091179-4829"), &[Token::Str("091179-4829")]);
        let nid: Nid = serde_json::from_str(r#""not a nid""#).unwrap();
        assert!(!nid.is_valid());
    }
}
