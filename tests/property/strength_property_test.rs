//! Property-based tests for the strength scorer.

use proptest::prelude::*;
use rust_passtool::generators::{check_strength, strength_score};
use rust_passtool::models::StrengthLabel;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn scoring_is_deterministic(password in ".{0,40}") {
        prop_assert_eq!(check_strength(&password), check_strength(&password));
    }

    #[test]
    fn scoring_ignores_character_order(password in "[ -~]{0,40}") {
        let reversed: String = password.chars().rev().collect();
        let mut sorted: Vec<char> = password.chars().collect();
        sorted.sort_unstable();
        let sorted: String = sorted.into_iter().collect();

        prop_assert_eq!(check_strength(&password), check_strength(&reversed));
        prop_assert_eq!(check_strength(&password), check_strength(&sorted));
    }

    #[test]
    fn short_passwords_are_always_weak(password in "[ -~]{0,7}") {
        prop_assert_eq!(check_strength(&password), StrengthLabel::Weak);
    }

    #[test]
    fn eight_chars_with_all_categories_is_strong(
        lower in "[a-z]{2}",
        upper in "[A-Z]{2}",
        digits in "[0-9]{2}",
        symbols in "[!#%&*+?@]{2}",
    ) {
        let password = format!("{lower}{upper}{digits}{symbols}");
        prop_assert_eq!(strength_score(&password), 36);
        prop_assert_eq!(check_strength(&password), StrengthLabel::Strong);
    }

    #[test]
    fn seven_chars_with_all_categories_is_weak(
        lower in "[a-z]{2}",
        upper in "[A-Z]{2}",
        digits in "[0-9]{2}",
        symbol in "[!#%&*+?@]",
    ) {
        let password = format!("{lower}{upper}{digits}{symbol}");
        prop_assert_eq!(check_strength(&password), StrengthLabel::Weak);
    }
}

#[test]
fn reordered_example_matches() {
    assert_eq!(check_strength("aB3!"), check_strength("3!aB"));
}
