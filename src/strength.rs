//! Coarse strength rating.
//!
//! The rating depends only on character count and on which character classes
//! appear. It is not monotonic in length: a long single-class password still
//! rates medium.

use strum::IntoEnumIterator;
use tracing::trace;

use crate::types::{CharClass, StrengthRating};

/// Below this many characters a password is weak.
pub const MEDIUM_MIN_LENGTH: usize = 8;
/// From this many characters a password may be strong.
pub const STRONG_MIN_LENGTH: usize = 12;

/// Classify `password`.
///
/// Class presence is decided per character with [`CharClass::contains`],
/// not by the alphabet the password came from.
pub fn evaluate(password: &str) -> StrengthRating {
    let length = password.chars().count();

    let rating = if length < MEDIUM_MIN_LENGTH {
        StrengthRating::Weak
    } else if length < STRONG_MIN_LENGTH {
        StrengthRating::Medium
    } else if has_every_class(password) {
        StrengthRating::Strong
    } else {
        StrengthRating::Medium
    };

    trace!(length, %rating, "Evaluated password strength");
    rating
}

fn has_every_class(password: &str) -> bool {
    CharClass::iter().all(|class| password.chars().any(|c| class.contains(c)))
}
