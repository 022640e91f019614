use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NidError {
    #[error("The NID is empty")]
    Empty,

    #[error("Expected a digit at position {position}, found {found:?}")]
    NotADigit { position: usize, found: char },

    #[error("The NID must be 10 digits long, got {actual} characters")]
    InvalidLength { actual: usize },

    #[error("The NID does not belong to an individual")]
    NotAnIndividual,

    #[error("The check digit of the NID does not match")]
    InvalidChecksum,

    /// The encoded day, month and year do not form a real calendar date
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

impl NidError {
    /// Short identifier used as a metric label value
    pub fn kind(&self) -> &'static str {
        match self {
            NidError::Empty => "empty",
            NidError::NotADigit { .. } => "not_a_digit",
            NidError::InvalidLength { .. } => "invalid_length",
            NidError::NotAnIndividual => "not_an_individual",
            NidError::InvalidChecksum => "invalid_checksum",
            NidError::InvalidDate { .. } => "invalid_date",
        }
    }
}
