use crate::normalization::{char_len, normalize_str};
use crate::NID_LENGTH;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

/// Weights applied to the first eight digits, position 0 first.
const WEIGHTS: &[u32; 8] = &[3, 2, 7, 6, 5, 4, 3, 2];
const CHECK_DIGIT_POSITION: usize = 8;
const MODULO: u32 = 11;

/// Validates the check digit of a NID. Separators are stripped first, any other
/// character makes the match invalid.
pub struct NidChecksum;

impl Validator for NidChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        let Some(digits) = digits(&normalize_str(regex_match)) else {
            return false;
        };
        expected_check_digit(&digits) == digits[CHECK_DIGIT_POSITION]
    }
}

/// Returns true if the NID is 10 digits long and its check digit matches.
/// Validation failure is a normal outcome: absent or malformed input is `false`.
pub fn validate(raw: Option<&str>) -> bool {
    raw.is_some_and(|raw| NidChecksum.is_valid_match(raw))
}

/// Computes the check digit expected at position 8, or `None` if the
/// normalized NID is not made of exactly 10 digits.
///
/// When the weighted sum leaves a remainder of 1 the expected value is 10,
/// which no digit can match.
pub fn check_digit(raw: &str) -> Option<u32> {
    digits(&normalize_str(raw)).map(|digits| expected_check_digit(&digits))
}

fn digits(normalized: &str) -> Option<[u32; NID_LENGTH]> {
    if char_len(normalized) != NID_LENGTH {
        return None;
    }
    let mut digits = [0; NID_LENGTH];
    for (slot, c) in digits.iter_mut().zip(normalized.chars()) {
        *slot = c.to_digit(10)?;
    }
    Some(digits)
}

fn expected_check_digit(digits: &[u32; NID_LENGTH]) -> u32 {
    // sum(digits[i] * WEIGHTS[i]) for i in [0,8)
    let sum: u32 = digits
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(d, w)| d * w)
        .sum();

    match sum % MODULO {
        0 => 0, // 11 - 0 = 11 → 0
        remainder => MODULO - remainder,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_nids() {
        let valid_ids = vec![
            "1301102230",
            "0911794829",
            "6005111490",
            "091179-4829",
            "091179 4829",
            "130110-2230",
        ];
        for id in valid_ids {
            assert!(validate(Some(id)), "NID should be valid: {}", id);
            assert!(NidChecksum.is_valid_match(id), "NID should be valid: {}", id);
        }
    }

    #[test]
    fn test_invalid_nids() {
        let invalid_ids = vec![
            "0911794839",  // wrong check digit
            "1301102240",  // wrong check digit
            "BBBBBBBBBB",  // not digits
            "AAA",         // wrong length
            "091179482",   // too short
            "09117948290", // too long
            "091179.4829", // period is not a separator
            "",
        ];
        for id in invalid_ids {
            assert!(!validate(Some(id)), "NID should be invalid: {}", id);
        }
        assert!(!validate(None));
    }

    #[test]
    fn test_non_ascii_input_does_not_panic() {
        assert!(!validate(Some("091179482é")));
        assert!(!validate(Some("éééééééééé")));
        assert_eq!(check_digit("091179482é"), None);
    }

    #[test]
    fn test_check_digit() {
        assert_eq!(check_digit("0911794829"), Some(2));
        assert_eq!(check_digit("1301102230"), Some(3));
        assert_eq!(check_digit("6005111490"), Some(9));
        assert_eq!(check_digit("091179"), None);
    }

    #[test]
    fn test_remainder_zero_maps_to_zero() {
        // 0*3 + 0*2 + ... + 0*2 = 0
        assert_eq!(check_digit("0000000000"), Some(0));
        assert!(validate(Some("0000000000")));
    }

    #[test]
    fn test_remainder_ten_gives_check_digit_one() {
        // 3 + 2 + 7 + 6 + 5 + 4 + 3 + 2 = 32, 32 % 11 = 10
        assert_eq!(check_digit("1111111111"), Some(1));
        assert!(validate(Some("1111111111")));
        assert!(!validate(Some("1111111121")));
    }

    #[test]
    fn test_remainder_one_is_never_valid() {
        // 4 * 3 = 12, 12 % 11 = 1
        assert_eq!(check_digit("4000000000"), Some(10));
        for check in 0..=9 {
            let id = format!("40000000{}0", check);
            assert!(!validate(Some(&id)), "NID should be invalid: {}", id);
        }
    }

    #[test]
    fn test_suspicious_ids_follow_the_algorithm() {
        // 12 + 12 + 7 + 12 + 45 + 4 + 3 + 6 = 101, 101 % 11 = 2
        assert!(validate(Some("4612911399")));
        assert!(validate(Some("0000000000")));
    }
}
