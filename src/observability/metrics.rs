use crate::error::NidError;
use crate::observability::labels::{Labels, NO_LABEL};
use metrics::{counter, Counter};

pub const CHECKSUM: &str = "nid.checksum";
pub const DATE_OF_BIRTH_ERRORS: &str = "nid.date_of_birth.errors";

const RESULT: &str = "result";
const TYPE: &str = "type";

pub struct Metrics {
    labels: Labels,
    pub valid_checksums: Counter,
    pub invalid_checksums: Counter,
}

impl Metrics {
    pub fn new(labels: &Labels) -> Self {
        Metrics {
            labels: labels.clone(),
            valid_checksums: counter!(CHECKSUM, labels.clone_with_labels(&[(RESULT, "valid")])),
            invalid_checksums: counter!(
                CHECKSUM,
                labels.clone_with_labels(&[(RESULT, "invalid")])
            ),
        }
    }

    pub fn record_checksum(&self, is_valid: bool) {
        if is_valid {
            self.valid_checksums.increment(1);
        } else {
            self.invalid_checksums.increment(1);
        }
    }

    /// The error kind is only known once the derivation fails, so the counter is
    /// registered lazily.
    pub fn record_date_of_birth_error(&self, error: &NidError) {
        counter!(
            DATE_OF_BIRTH_ERRORS,
            self.labels.clone_with_labels(&[(TYPE, error.kind())])
        )
        .increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics::new(&NO_LABEL)
    }
}
