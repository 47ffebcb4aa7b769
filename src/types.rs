//! Type-safe vocabulary shared by the generator, the evaluator and the CLI.
//!
//! These enums replace stringly-typed tiers and ratings so that every match
//! over them is exhaustive. This file must stay free of `crate::` imports:
//! `build.rs` compiles it alongside `cli.rs` to render the man page.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// ASCII uppercase letters, in alphabet order.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// ASCII lowercase letters, in alphabet order.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Decimal digits.
pub const DIGITS: &str = "0123456789";
/// The 32 ASCII punctuation symbols.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// One of the four fixed character subsets an alphabet is built from.
///
/// Variant order is the concatenation order of an alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
    Punctuation,
}

impl CharClass {
    /// The characters belonging to this class.
    pub fn charset(&self) -> &'static str {
        match self {
            Self::Uppercase => UPPERCASE,
            Self::Lowercase => LOWERCASE,
            Self::Digits => DIGITS,
            Self::Punctuation => PUNCTUATION,
        }
    }

    /// Whether `c` counts toward this class when rating a password.
    ///
    /// Letters and digits are matched by Unicode category, so `'É'` is
    /// uppercase. Punctuation is the fixed ASCII set only.
    pub fn contains(&self, c: char) -> bool {
        match self {
            Self::Uppercase => c.is_uppercase(),
            Self::Lowercase => c.is_lowercase(),
            Self::Digits => c.is_numeric(),
            Self::Punctuation => c.is_ascii_punctuation(),
        }
    }
}

/// Requested tier on the command line.
///
/// A tier selects which character classes are enabled for generation. It is
/// not a rating the generated password is guaranteed to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StrengthTier {
    /// Enables no character class; generation fails with a configuration error
    Weak,
    /// Uppercase, lowercase and digits
    Medium,
    /// Uppercase, lowercase, digits and punctuation
    #[default]
    Strong,
}

/// Coarse rating of a password, ordered `Weak < Medium < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StrengthRating {
    Weak,
    Medium,
    Strong,
}
