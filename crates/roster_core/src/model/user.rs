//! User record model.
//!
//! # Responsibility
//! - Define the record appended by the record store on successful add.
//! - Validate caller-supplied ages before any id is drawn.
//!
//! # Invariants
//! - `id` is unique per generator and never reused.
//! - `age` is non-negative; the unsigned field makes this unrepresentable
//!   otherwise, including on deserialize.
//! - Records are immutable once created.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier assigned from a sequencing service at creation time.
pub type UserId = u64;

/// Canonical in-memory user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: u32,
}

impl User {
    /// Builds a record from an already issued id and a validated age.
    pub fn new(id: UserId, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}

/// Validation errors for caller-supplied user fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    NegativeAge { age: i64 },
    AgeOutOfRange { age: i64 },
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAge { age } => write!(f, "age cannot be negative: {age}"),
            Self::AgeOutOfRange { age } => {
                write!(f, "age {age} exceeds supported maximum {}", u32::MAX)
            }
        }
    }
}

impl Error for UserValidationError {}

/// Checks a raw age and narrows it to the stored representation.
///
/// Must run before an id is drawn so a rejected add leaves the counter
/// untouched.
pub fn validate_age(age: i64) -> Result<u32, UserValidationError> {
    if age < 0 {
        return Err(UserValidationError::NegativeAge { age });
    }
    u32::try_from(age).map_err(|_| UserValidationError::AgeOutOfRange { age })
}

#[cfg(test)]
mod tests {
    use super::{validate_age, UserValidationError};

    #[test]
    fn validate_age_accepts_zero_and_positive() {
        assert_eq!(validate_age(0), Ok(0));
        assert_eq!(validate_age(42), Ok(42));
    }

    #[test]
    fn validate_age_rejects_negative() {
        assert_eq!(
            validate_age(-1),
            Err(UserValidationError::NegativeAge { age: -1 })
        );
    }

    #[test]
    fn validate_age_rejects_values_beyond_u32() {
        let age = i64::from(u32::MAX) + 1;
        assert_eq!(
            validate_age(age),
            Err(UserValidationError::AgeOutOfRange { age })
        );
    }

    #[test]
    fn negative_age_message_names_the_value() {
        let message = UserValidationError::NegativeAge { age: -7 }.to_string();
        assert!(message.contains("negative"));
        assert!(message.contains("-7"));
    }
}
