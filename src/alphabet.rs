//! Alphabet construction from character-class selectors.
//!
//! An alphabet is the concatenation, in fixed order, of the enabled subsets:
//! uppercase, lowercase, digits, punctuation. The only way to obtain an
//! [`Alphabet`] is [`Alphabet::build`], so every value is non-empty.

use strum::IntoEnumIterator;
use tracing::debug;

use crate::error::{PassgenError, Result};
use crate::types::{CharClass, StrengthTier};

/// Four independent selectors, one per character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub punctuation: bool,
}

impl CharClasses {
    /// Every class enabled.
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            punctuation: true,
        }
    }

    /// Every class disabled. Building an alphabet from this fails.
    pub fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            digits: false,
            punctuation: false,
        }
    }

    /// Exactly one class enabled.
    pub fn only(class: CharClass) -> Self {
        Self::none().with(class, true)
    }

    /// Copy of `self` with one selector changed.
    pub fn with(mut self, class: CharClass, enabled: bool) -> Self {
        match class {
            CharClass::Uppercase => self.uppercase = enabled,
            CharClass::Lowercase => self.lowercase = enabled,
            CharClass::Digits => self.digits = enabled,
            CharClass::Punctuation => self.punctuation = enabled,
        }
        self
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Digits => self.digits,
            CharClass::Punctuation => self.punctuation,
        }
    }

    /// Enabled classes in concatenation order.
    pub fn enabled(&self) -> Vec<CharClass> {
        CharClass::iter().filter(|c| self.is_enabled(*c)).collect()
    }

    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.digits || self.punctuation)
    }
}

impl Default for CharClasses {
    fn default() -> Self {
        Self::all()
    }
}

/// Tier to selector derivation used by the command line.
///
/// The weak tier enables nothing, so it always ends in a configuration error
/// when the alphabet is built.
impl From<StrengthTier> for CharClasses {
    fn from(tier: StrengthTier) -> Self {
        let base = matches!(tier, StrengthTier::Medium | StrengthTier::Strong);
        Self {
            uppercase: base,
            lowercase: base,
            digits: base,
            punctuation: tier == StrengthTier::Strong,
        }
    }
}

/// Non-empty, ordered set of characters eligible for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    classes: CharClasses,
}

impl Alphabet {
    /// Build the alphabet for the given selectors.
    ///
    /// Fails with [`PassgenError::Configuration`] when no class is selected.
    pub fn build(classes: CharClasses) -> Result<Self> {
        if classes.is_empty() {
            return Err(PassgenError::configuration(
                "at least one character class must be selected",
            ));
        }

        let chars: Vec<char> = classes
            .enabled()
            .iter()
            .flat_map(|class| class.charset().chars())
            .collect();

        debug!(size = chars.len(), classes = ?classes.enabled(), "Built alphabet");
        Ok(Self { chars, classes })
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Selectors this alphabet was built from.
    pub fn classes(&self) -> CharClasses {
        self.classes
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DIGITS, LOWERCASE, PUNCTUATION, UPPERCASE};

    #[test]
    fn test_no_classes_is_configuration_error() {
        let err = Alphabet::build(CharClasses::none()).unwrap_err();
        assert!(matches!(err, PassgenError::Configuration(_)));
        assert!(err.to_string().contains("at least one character class"));
    }

    #[test]
    fn test_all_classes_in_fixed_order() {
        let alphabet = Alphabet::build(CharClasses::all()).unwrap();
        let expected = format!("{UPPERCASE}{LOWERCASE}{DIGITS}{PUNCTUATION}");
        assert_eq!(alphabet.to_string(), expected);
        assert_eq!(alphabet.len(), 94);
    }

    #[test]
    fn test_single_class_restricted_to_that_subset() {
        for class in CharClass::iter() {
            let alphabet = Alphabet::build(CharClasses::only(class)).unwrap();
            assert!(!alphabet.is_empty());
            assert_eq!(alphabet.to_string(), class.charset());
            assert!(alphabet.chars().iter().all(|c| class.contains(*c)));
        }
    }

    #[test]
    fn test_order_ignores_selector_order() {
        let classes = CharClasses::only(CharClass::Punctuation).with(CharClass::Uppercase, true);
        let alphabet = Alphabet::build(classes).unwrap();
        assert_eq!(alphabet.to_string(), format!("{UPPERCASE}{PUNCTUATION}"));
    }

    #[test]
    fn test_tier_derivation() {
        assert!(CharClasses::from(StrengthTier::Weak).is_empty());

        let medium = CharClasses::from(StrengthTier::Medium);
        assert!(medium.uppercase && medium.lowercase && medium.digits);
        assert!(!medium.punctuation);

        assert_eq!(CharClasses::from(StrengthTier::Strong), CharClasses::all());
    }

    #[test]
    fn test_weak_tier_cannot_build_alphabet() {
        let result = Alphabet::build(StrengthTier::Weak.into());
        assert!(matches!(result, Err(PassgenError::Configuration(_))));
    }

    #[test]
    fn test_contains() {
        let alphabet = Alphabet::build(CharClasses::only(CharClass::Digits)).unwrap();
        assert!(alphabet.contains('7'));
        assert!(!alphabet.contains('a'));
        assert_eq!(alphabet.classes(), CharClasses::only(CharClass::Digits));
    }
}
