//! Known-compromised password checks.
//!
//! The generator only depends on the [`DenylistChecker`] trait, so a live
//! breach lookup can replace the built-in list without touching generation.

/// Literal passwords rejected outright.
pub const COMMON_PASSWORDS: &[&str] = &["password", "123456", "qwerty", "admin"];

/// Capability answering whether a candidate is known to be compromised.
///
/// # Contract
///
/// - Must be a pure function of `candidate` for the duration of one
///   generation call.
/// - Matching is exact; no normalization is applied by the generator.
pub trait DenylistChecker {
    fn is_compromised(&self, candidate: &str) -> bool;
}

/// The fixed, built-in denylist.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDenylist;

impl StaticDenylist {
    pub fn entries(&self) -> &'static [&'static str] {
        COMMON_PASSWORDS
    }
}

impl DenylistChecker for StaticDenylist {
    fn is_compromised(&self, candidate: &str) -> bool {
        COMMON_PASSWORDS.contains(&candidate)
    }
}

impl<F> DenylistChecker for F
where
    F: Fn(&str) -> bool,
{
    fn is_compromised(&self, candidate: &str) -> bool {
        self(candidate)
    }
}
