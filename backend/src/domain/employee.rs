//! Employee data model and input validation.
//!
//! The newtypes here are the validation boundary: a request payload only
//! becomes an [`EmployeeDraft`] once the email parses and the employee
//! number passes the 4-digit rule, so the persistence layer never sees a
//! malformed record.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

/// Validation errors raised while constructing employee field newtypes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    InvalidEmail,
    EmployeeNumberNotPositive,
    EmployeeNumberOutOfRange,
}

impl fmt::Display for EmployeeValidationError {
    // The employee-number messages are surfaced verbatim to clients and
    // asserted by tests; keep the full stops.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "email must be a valid email address"),
            Self::EmployeeNumberNotPositive => {
                write!(f, "Employee number must be positive.")
            }
            Self::EmployeeNumberOutOfRange => {
                write!(f, "Employee number must be exactly 4 digits.")
            }
        }
    }
}

impl std::error::Error for EmployeeValidationError {}

/// Storage-generated employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i32);

impl EmployeeId {
    /// Access the raw identifier.
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl From<i32> for EmployeeId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Syntactically valid email address, unique per employee at the storage
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(value: impl Into<String>) -> Result<Self, EmployeeValidationError> {
        let raw = value.into();
        if !raw.validate_email() {
            return Err(EmployeeValidationError::InvalidEmail);
        }
        Ok(Self(raw))
    }

    /// Borrow the address as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmployeeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Inclusive lower bound of the employee-number range.
pub const EMPLOYEE_NUMBER_MIN: i32 = 1000;
/// Inclusive upper bound of the employee-number range.
pub const EMPLOYEE_NUMBER_MAX: i32 = 9999;

/// Unique employee number constrained to exactly four digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct EmployeeNumber(i32);

impl EmployeeNumber {
    /// Validate and construct an [`EmployeeNumber`].
    ///
    /// The positivity check runs first so that `-42` reports "must be
    /// positive" rather than the range message.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::EmployeeNumber;
    ///
    /// assert!(EmployeeNumber::new(1234).is_ok());
    /// assert!(EmployeeNumber::new(999).is_err());
    /// ```
    pub fn new(value: i32) -> Result<Self, EmployeeValidationError> {
        if value <= 0 {
            return Err(EmployeeValidationError::EmployeeNumberNotPositive);
        }
        if !(EMPLOYEE_NUMBER_MIN..=EMPLOYEE_NUMBER_MAX).contains(&value) {
            return Err(EmployeeValidationError::EmployeeNumberOutOfRange);
        }
        Ok(Self(value))
    }

    /// Access the raw number.
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for EmployeeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmployeeNumber> for i32 {
    fn from(value: EmployeeNumber) -> Self {
        value.0
    }
}

impl TryFrom<i32> for EmployeeNumber {
    type Error = EmployeeValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated employee input, ready for persistence.
///
/// Name, title, role, and organisation are free text; emptiness is
/// deliberately permitted there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub title: String,
    pub role: String,
    pub employee_number: EmployeeNumber,
    pub organisation: String,
}

/// Stored employee record including the generated identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub title: String,
    pub role: String,
    pub employee_number: EmployeeNumber,
    pub organisation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1000)]
    #[case(1234)]
    #[case(9999)]
    fn employee_number_accepts_four_digit_values(#[case] value: i32) {
        let number = EmployeeNumber::new(value).expect("four digit number");
        assert_eq!(number.value(), value);
    }

    #[rstest]
    #[case(999, EmployeeValidationError::EmployeeNumberOutOfRange)]
    #[case(10_000, EmployeeValidationError::EmployeeNumberOutOfRange)]
    #[case(0, EmployeeValidationError::EmployeeNumberNotPositive)]
    #[case(-42, EmployeeValidationError::EmployeeNumberNotPositive)]
    fn employee_number_rejects_values_outside_range(
        #[case] value: i32,
        #[case] expected: EmployeeValidationError,
    ) {
        assert_eq!(EmployeeNumber::new(value), Err(expected));
    }

    #[rstest]
    fn employee_number_messages_match_contract() {
        assert_eq!(
            EmployeeNumber::new(-1).expect_err("negative").to_string(),
            "Employee number must be positive."
        );
        assert_eq!(
            EmployeeNumber::new(10_000)
                .expect_err("five digits")
                .to_string(),
            "Employee number must be exactly 4 digits."
        );
    }

    #[rstest]
    #[case("jane@example.com")]
    #[case("first.last@sub.example.co.uk")]
    fn email_accepts_valid_addresses(#[case] value: &str) {
        let email = EmailAddress::new(value).expect("valid email");
        assert_eq!(email.as_str(), value);
    }

    #[rstest]
    #[case("")]
    #[case("not-an-email")]
    #[case("jane doe@example.com")]
    fn email_rejects_invalid_addresses(#[case] value: &str) {
        assert_eq!(
            EmailAddress::new(value),
            Err(EmployeeValidationError::InvalidEmail)
        );
    }

    #[rstest]
    fn employee_number_deserialises_through_validation() {
        let ok: Result<EmployeeNumber, _> = serde_json::from_str("1234");
        assert!(ok.is_ok());
        let err: Result<EmployeeNumber, _> = serde_json::from_str("7");
        assert!(err.is_err());
    }
}
