//! Property-Based Tests for passgen
//!
//! These tests verify:
//! - Generated passwords have the requested length
//! - Every generated character comes from the alphabet used
//! - Denylisted values are never returned
//! - Strength evaluation is deterministic and respects its thresholds

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use passgen::{
    Alphabet, CharClass, CharClasses, DenylistChecker, PasswordGenerator, StaticDenylist,
    StrengthRating, evaluate,
};

// =============================================================================
// Strategies
// =============================================================================

/// Any selector combination with at least one class enabled
fn non_empty_classes_strategy() -> impl Strategy<Value = CharClasses> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>())
        .prop_filter("at least one class", |(u, l, d, p)| *u || *l || *d || *p)
        .prop_map(|(uppercase, lowercase, digits, punctuation)| CharClasses {
            uppercase,
            lowercase,
            digits,
            punctuation,
        })
}

fn char_class_strategy() -> impl Strategy<Value = CharClass> {
    prop_oneof![
        Just(CharClass::Uppercase),
        Just(CharClass::Lowercase),
        Just(CharClass::Digits),
        Just(CharClass::Punctuation),
    ]
}

// =============================================================================
// Generator Property Tests
// =============================================================================

proptest! {
    /// Output length always equals the requested length
    #[test]
    fn generated_length_matches_request(
        classes in non_empty_classes_strategy(),
        length in 1usize..128,
        seed in any::<u64>(),
    ) {
        let alphabet = Alphabet::build(classes).unwrap();
        let password = PasswordGenerator::new()
            .generate_with(&alphabet, length, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert_eq!(password.len(), length);
    }

    /// Every character is a member of the alphabet that produced it
    #[test]
    fn generated_chars_belong_to_alphabet(
        classes in non_empty_classes_strategy(),
        length in 1usize..128,
        seed in any::<u64>(),
    ) {
        let alphabet = Alphabet::build(classes).unwrap();
        let password = PasswordGenerator::new()
            .generate_with(&alphabet, length, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert!(password.as_str().chars().all(|c| alphabet.contains(c)));
    }

    /// Single-class alphabets contain exactly that class
    #[test]
    fn single_class_alphabet_is_exact(class in char_class_strategy()) {
        let alphabet = Alphabet::build(CharClasses::only(class)).unwrap();
        prop_assert_eq!(alphabet.to_string(), class.charset());
    }

    /// A checker that flags some candidates never lets them through
    #[test]
    fn flagged_candidates_are_never_returned(seed in any::<u64>()) {
        // Flag every candidate starting with a digit
        let checker = |candidate: &str| {
            candidate.chars().next().is_some_and(|c| c.is_ascii_digit())
        };
        let alphabet = Alphabet::build(
            CharClasses::only(CharClass::Digits).with(CharClass::Lowercase, true),
        )
        .unwrap();
        let generator = PasswordGenerator::with_denylist(checker).max_attempts(10_000);
        let password = generator
            .generate_with(&alphabet, 4, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert!(!checker.is_compromised(password.as_str()));
    }
}

#[test]
fn digit_passwords_never_hit_the_denylist() {
    // "123456" is reachable from a digits-only alphabet at length 6
    let alphabet = Alphabet::build(CharClasses::only(CharClass::Digits)).unwrap();
    let generator = PasswordGenerator::new();
    let denylist = StaticDenylist;
    for _ in 0..2_000 {
        let password = generator.generate(&alphabet, 6).unwrap();
        assert!(!denylist.is_compromised(password.as_str()));
    }
}

// =============================================================================
// Strength Evaluator Property Tests
// =============================================================================

proptest! {
    /// Evaluating twice yields the same rating
    #[test]
    fn evaluate_is_deterministic(password in ".{0,40}") {
        prop_assert_eq!(evaluate(&password), evaluate(&password));
    }

    /// Anything shorter than 8 characters is weak
    #[test]
    fn short_passwords_are_weak(password in "[ -~]{0,7}") {
        prop_assert_eq!(evaluate(&password), StrengthRating::Weak);
    }

    /// 8 to 11 characters is always medium
    #[test]
    fn mid_length_passwords_are_medium(password in "[ -~]{8,11}") {
        prop_assert_eq!(evaluate(&password), StrengthRating::Medium);
    }

    /// Long passwords without punctuation are never strong
    #[test]
    fn long_alphanumeric_passwords_are_medium(password in "[A-Za-z0-9]{12,40}") {
        prop_assert_eq!(evaluate(&password), StrengthRating::Medium);
    }

    /// A long password holding every class is strong
    #[test]
    fn long_diverse_passwords_are_strong(tail in "[A-Za-z0-9!-/]{8,30}") {
        let password = format!("Aa1!{tail}");
        prop_assert_eq!(evaluate(&password), StrengthRating::Strong);
    }
}
