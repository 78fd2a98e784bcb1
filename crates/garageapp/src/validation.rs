//! Field validation for vehicle input.
//!
//! Every validator takes the raw line the user typed and either returns the
//! cleaned, typed value or a [`ValidationError`] whose message tells the user
//! what was wrong and what is expected. Nothing here does I/O; the retry
//! loops live in [`crate::prompt`].
//!
//! Registrations follow the current UK format (2001 onwards): two letters,
//! two digits, an optional space, three letters, e.g. `CN18 YGG`.

use crate::model::Vehicle;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Highest mileage accepted for a vehicle.
pub const MAX_MILEAGE: u64 = 9_999_999;

static REGISTRATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}[0-9]{2}\s?[A-Z]{3}$").expect("registration pattern"));

/// Inclusive range of accepted vehicle years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

/// Error type for rejected field input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("This field cannot be empty. Please enter a value.")]
    Empty,

    #[error("Invalid input. Please enter a numeric year.")]
    YearNotNumeric,

    #[error("Please enter a valid year between {min} and {max}.")]
    YearOutOfRange { min: i32, max: i32 },

    #[error("Invalid input. Please enter a valid whole number.")]
    NotInteger,

    #[error("Invalid input. Please enter a valid number.")]
    NotNumber,

    #[error("Please enter a number greater than or equal to {0}.")]
    BelowMinimum(String),

    #[error("Please enter a number less than or equal to {0}.")]
    AboveMaximum(String),

    #[error("Invalid registration format. Please use the format AA12 ABC.")]
    RegistrationFormat,

    #[error("Registration {0} already exists in stock. Please enter a different one.")]
    DuplicateRegistration(String),

    #[error("Invalid choice. Please enter one of: {}.", .0.join(", "))]
    UnknownChoice(Vec<String>),

    #[error("Invalid choice. Please enter 'y' or 'n'.")]
    NotYesNo,
}

/// Trimmed, non-empty text.
pub fn validate_required(raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(value.to_string())
}

/// Capitalize the first letter of each word and lowercase the rest
/// (`"land rover"` → `"Land Rover"`, `"MCLAREN"` → `"Mclaren"`).
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut start_of_word = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if start_of_word {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            start_of_word = false;
        } else {
            out.push(ch);
            start_of_word = true;
        }
    }
    out
}

pub fn validate_year(raw: &str, range: YearRange) -> Result<i32, ValidationError> {
    let year: i32 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::YearNotNumeric)?;
    if !range.contains(year) {
        return Err(ValidationError::YearOutOfRange {
            min: range.min,
            max: range.max,
        });
    }
    Ok(year)
}

/// Whole number in `min..=max`.
pub fn validate_int_between(raw: &str, min: u64, max: u64) -> Result<u64, ValidationError> {
    // Negative input is a bound violation, not a format error
    let value: i128 = raw.trim().parse().map_err(|_| ValidationError::NotInteger)?;
    if value < i128::from(min) {
        return Err(ValidationError::BelowMinimum(min.to_string()));
    }
    if value > i128::from(max) {
        return Err(ValidationError::AboveMaximum(max.to_string()));
    }
    u64::try_from(value).map_err(|_| ValidationError::NotInteger)
}

/// Finite number at or above `min`.
pub fn validate_float_at_least(raw: &str, min: f64) -> Result<f64, ValidationError> {
    let value: f64 = raw.trim().parse().map_err(|_| ValidationError::NotNumber)?;
    if !value.is_finite() {
        return Err(ValidationError::NotNumber);
    }
    if value < min {
        return Err(ValidationError::BelowMinimum(min.to_string()));
    }
    Ok(value)
}

/// Uppercase and trim a registration as typed.
pub fn normalize_registration(raw: &str) -> String {
    raw.trim().to_uppercase()
}

pub fn is_valid_registration(reg: &str) -> bool {
    REGISTRATION.is_match(&reg.to_uppercase())
}

/// Format-valid registration not already present in `stock` (case-insensitive).
pub fn validate_registration(raw: &str, stock: &[Vehicle]) -> Result<String, ValidationError> {
    let reg = normalize_registration(raw);
    if !is_valid_registration(&reg) {
        return Err(ValidationError::RegistrationFormat);
    }
    if stock.iter().any(|v| v.reg_number.to_uppercase() == reg) {
        return Err(ValidationError::DuplicateRegistration(reg));
    }
    Ok(reg)
}

/// One of a fixed set of literal options, matched exactly.
pub fn validate_choice<'a>(raw: &str, options: &[&'a str]) -> Result<&'a str, ValidationError> {
    options
        .iter()
        .find(|opt| **opt == raw)
        .copied()
        .ok_or_else(|| ValidationError::UnknownChoice(options.iter().map(|o| o.to_string()).collect()))
}

/// `y` / `n`, case-insensitive.
pub fn validate_yes_no(raw: &str) -> Result<bool, ValidationError> {
    match raw.trim().to_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(ValidationError::NotYesNo),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{normalize, raw_row};

    fn stock_with(reg: &str) -> Vec<Vehicle> {
        normalize(&[raw_row(&[
            ("id", "1"),
            ("reg_number", reg),
            ("year", "2018"),
            ("mileage", "1"),
            ("purchase_price", "1"),
            ("sale_price", "1"),
        ])])
        .unwrap()
    }

    #[test]
    fn test_required_trims_and_rejects_blank() {
        assert_eq!(validate_required("  Ford "), Ok("Ford".to_string()));
        assert_eq!(validate_required(""), Err(ValidationError::Empty));
        assert_eq!(validate_required("   \t"), Err(ValidationError::Empty));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ford"), "Ford");
        assert_eq!(title_case("land rover"), "Land Rover");
        assert_eq!(title_case("MERCEDES-BENZ"), "Mercedes-Benz");
        assert_eq!(title_case("c4 picasso"), "C4 Picasso");
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        let range = YearRange::new(2001, 2036);
        assert_eq!(validate_year("2001", range), Ok(2001));
        assert_eq!(validate_year(" 2036 ", range), Ok(2036));
        assert_eq!(
            validate_year("2000", range),
            Err(ValidationError::YearOutOfRange {
                min: 2001,
                max: 2036
            })
        );
        assert_eq!(validate_year("2037", range).unwrap_err().to_string(),
            "Please enter a valid year between 2001 and 2036.");
    }

    #[test]
    fn test_year_rejects_non_numeric() {
        let range = YearRange::new(2001, 2036);
        assert_eq!(validate_year("twenty", range), Err(ValidationError::YearNotNumeric));
        assert_eq!(validate_year("2018.5", range), Err(ValidationError::YearNotNumeric));
    }

    #[test]
    fn test_int_between() {
        assert_eq!(validate_int_between("50000", 0, MAX_MILEAGE), Ok(50000));
        assert_eq!(validate_int_between("0", 0, MAX_MILEAGE), Ok(0));
        assert_eq!(validate_int_between("9999999", 0, MAX_MILEAGE), Ok(MAX_MILEAGE));
        assert_eq!(
            validate_int_between("-1", 0, MAX_MILEAGE),
            Err(ValidationError::BelowMinimum("0".into()))
        );
        assert_eq!(validate_int_between("12.5", 0, MAX_MILEAGE), Err(ValidationError::NotInteger));
        assert_eq!(validate_int_between("lots", 0, MAX_MILEAGE), Err(ValidationError::NotInteger));
    }

    #[test]
    fn test_int_between_rejects_huge_values() {
        for raw in ["10000000", "9223372036854775808", "18446744073709551615"] {
            assert_eq!(
                validate_int_between(raw, 0, MAX_MILEAGE),
                Err(ValidationError::AboveMaximum("9999999".into())),
                "{} should be refused",
                raw
            );
        }
    }

    #[test]
    fn test_float_at_least() {
        assert_eq!(validate_float_at_least("8000", 0.0), Ok(8000.0));
        assert_eq!(validate_float_at_least("99.95", 0.0), Ok(99.95));
        assert!(matches!(
            validate_float_at_least("-0.01", 0.0),
            Err(ValidationError::BelowMinimum(_))
        ));
        assert_eq!(validate_float_at_least("abc", 0.0), Err(ValidationError::NotNumber));
        assert_eq!(validate_float_at_least("inf", 0.0), Err(ValidationError::NotNumber));
        assert_eq!(validate_float_at_least("NaN", 0.0), Err(ValidationError::NotNumber));
    }

    #[test]
    fn test_valid_registrations() {
        for reg in ["CN18 YGG", "CN18YGG", "cn18 ygg", "ab51abc", "  LD21 XYZ  "] {
            assert!(
                validate_registration(reg, &[]).is_ok(),
                "expected {reg:?} to be accepted"
            );
        }
        assert_eq!(validate_registration("cn18 ygg", &[]), Ok("CN18 YGG".to_string()));
    }

    #[test]
    fn test_invalid_registrations() {
        for reg in ["", "CN1 YGG", "C18 YGG", "CN18 YG", "CN18  YGG", "1N18 YGG", "CN18-YGG", "CN18 YGGG"] {
            assert_eq!(
                validate_registration(reg, &[]),
                Err(ValidationError::RegistrationFormat),
                "expected {reg:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_duplicate_registration_is_case_insensitive() {
        let stock = stock_with("cn18 ygg");
        assert_eq!(
            validate_registration("CN18 YGG", &stock),
            Err(ValidationError::DuplicateRegistration("CN18 YGG".into()))
        );
        assert!(validate_registration("CN18 YGH", &stock).is_ok());
    }

    #[test]
    fn test_menu_choice() {
        let options = ["1", "2", "3", "4"];
        assert_eq!(validate_choice("3", &options), Ok("3"));
        assert!(validate_choice("5", &options).is_err());
        assert!(validate_choice(" 1", &options).is_err());
        assert_eq!(
            validate_choice("x", &options).unwrap_err().to_string(),
            "Invalid choice. Please enter one of: 1, 2, 3, 4."
        );
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(validate_yes_no("y"), Ok(true));
        assert_eq!(validate_yes_no(" Y "), Ok(true));
        assert_eq!(validate_yes_no("n"), Ok(false));
        assert_eq!(validate_yes_no("yes"), Err(ValidationError::NotYesNo));
    }
}
