//! User-facing output block printed after a successful generation.

use std::fmt;

use crate::generator::Password;
use crate::types::StrengthRating;

/// Fixed advice printed after every password.
pub const ADVISORY_NOTES: [&str; 2] = [
    "For secure storage, hash passwords with a strong one-way function such as argon2 or PBKDF2.",
    "Enable Multi-Factor Authentication (MFA) for added security.",
];

/// A generated password together with its rating.
#[derive(Debug, Clone)]
pub struct Report {
    pub password: Password,
    pub rating: StrengthRating,
}

impl Report {
    pub fn new(password: Password, rating: StrengthRating) -> Self {
        Self { password, rating }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated Password: {}", self.password)?;
        writeln!(f, "Strength: {}", self.rating)?;
        for note in ADVISORY_NOTES {
            writeln!(f, "Note: {note}")?;
        }
        Ok(())
    }
}
