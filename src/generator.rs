//! Password generation with denylist rejection.
//!
//! Each attempt draws `length` characters independently and uniformly, with
//! replacement, from the alphabet. A candidate the denylist flags is thrown
//! away whole and the draw starts over. Attempts are capped so that an
//! alphabet/length pair fully covered by the denylist cannot spin forever.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, trace, warn};

use crate::alphabet::Alphabet;
use crate::denylist::{DenylistChecker, StaticDenylist};
use crate::error::{PassgenError, Result};

/// Default cap on full redraws before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// A generated password. Immutable once produced.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep secrets out of `{:?}` log output.
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Password").field(&"<redacted>").finish()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Draws passwords from an alphabet, rejecting denylisted candidates.
#[derive(Debug, Clone)]
pub struct PasswordGenerator<D = StaticDenylist> {
    denylist: D,
    max_attempts: usize,
}

impl PasswordGenerator<StaticDenylist> {
    /// Generator backed by the built-in denylist.
    pub fn new() -> Self {
        Self::with_denylist(StaticDenylist)
    }
}

impl Default for PasswordGenerator<StaticDenylist> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DenylistChecker> PasswordGenerator<D> {
    pub fn with_denylist(denylist: D) -> Self {
        Self {
            denylist,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Override the redraw cap. A value of 0 is treated as 1.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Generate using the thread-local random source.
    pub fn generate(&self, alphabet: &Alphabet, length: usize) -> Result<Password> {
        self.generate_with(alphabet, length, &mut rand::thread_rng())
    }

    /// Generate using the supplied random source.
    ///
    /// # Failure Modes
    ///
    /// - `length == 0`: [`PassgenError::InvalidLength`], nothing is drawn
    /// - every attempt denylisted: [`PassgenError::Generation`]
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        alphabet: &Alphabet,
        length: usize,
        rng: &mut R,
    ) -> Result<Password> {
        if length == 0 {
            return Err(PassgenError::invalid_length(
                "password length must be at least 1",
            ));
        }

        let chars = alphabet.chars();
        for attempt in 1..=self.max_attempts {
            let candidate: String = (0..length)
                .map(|_| chars.choose(&mut *rng).copied())
                .collect::<Option<String>>()
                .ok_or_else(|| PassgenError::configuration("alphabet is empty"))?;

            if self.denylist.is_compromised(&candidate) {
                debug!(attempt, "Candidate is denylisted, redrawing");
                continue;
            }

            trace!(attempt, length, "Accepted candidate");
            return Ok(Password(candidate));
        }

        warn!(
            attempts = self.max_attempts,
            length, "Every candidate was denylisted"
        );
        Err(PassgenError::generation(self.max_attempts))
    }
}
