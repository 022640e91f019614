use chrono::NaiveDate;

use crate::error::NidError;
use crate::observability::labels::Labels;
use crate::observability::metrics::Metrics;
use crate::{birthdate, category, checksum, formatting};

/// The free functions of this crate bundled with a configured delimiter and
/// metric reporting. Built from a [`crate::NidConfig`].
///
/// Holds no mutable state, so it can be shared between threads.
pub struct NidProcessor {
    delimiter: String,
    metrics: Metrics,
}

impl NidProcessor {
    pub(crate) fn new(delimiter: String, labels: &Labels) -> Self {
        Self {
            delimiter,
            metrics: Metrics::new(labels),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn is_individual(&self, raw: Option<&str>) -> bool {
        category::is_individual(raw)
    }

    pub fn is_company(&self, raw: Option<&str>) -> bool {
        category::is_company(raw)
    }

    pub fn validate(&self, raw: Option<&str>) -> bool {
        let is_valid = checksum::validate(raw);
        if raw.is_some() {
            self.metrics.record_checksum(is_valid);
        }
        is_valid
    }

    pub fn format(&self, raw: Option<&str>) -> String {
        formatting::format_with_delimiter(raw, &self.delimiter)
    }

    pub fn date_of_birth(&self, raw: Option<&str>) -> Result<Option<NaiveDate>, NidError> {
        self.observe(birthdate::date_of_birth(raw))
    }

    pub fn age(
        &self,
        raw: Option<&str>,
        reference: Option<NaiveDate>,
    ) -> Result<Option<i32>, NidError> {
        self.observe(birthdate::age(raw, reference))
    }

    pub fn next_birthday(
        &self,
        current_date: NaiveDate,
        raw: Option<&str>,
    ) -> Result<Option<NaiveDate>, NidError> {
        self.observe(birthdate::next_birthday(current_date, raw))
    }

    fn observe<T>(&self, result: Result<T, NidError>) -> Result<T, NidError> {
        if let Err(err) = &result {
            self.metrics.record_date_of_birth_error(err);
        }
        result
    }
}
