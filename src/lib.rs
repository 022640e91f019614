// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod birthdate;
mod category;
mod checksum;
mod config;
mod error;
mod formatting;
mod nid;
mod normalization;
mod observability;
mod processor;

/// Number of characters in a normalized NID.
pub const NID_LENGTH: usize = 10;

// This is the public API of the NID library
pub use birthdate::{
    age, age_at_date, date_of_birth, day_of_birth, month_of_birth, next_birthday, year_of_birth,
};
pub use category::{category, is_company, is_individual, Category};
pub use checksum::{check_digit, validate, NidChecksum, Validator};
pub use config::NidConfig;
pub use error::NidError;
pub use formatting::{format, format_with_delimiter, DEFAULT_DELIMITER};
pub use nid::Nid;
pub use normalization::normalize;
pub use processor::NidProcessor;
