// src/generators/strength.rs
use crate::models::{Category, StrengthLabel};

const MIN_LENGTH: usize = 8;
const POINTS_PER_CHAR: usize = 2;
const CATEGORY_BONUS: usize = 5;
const STRONG_THRESHOLD: usize = 30;
const EXCELLENT_THRESHOLD: usize = 45;

/// Raw heuristic score: two points per character plus a flat bonus for each
/// category that appears at least once.
pub fn strength_score(password: &str) -> usize {
    let mut score = password.chars().count() * POINTS_PER_CHAR;

    for category in Category::ALL {
        if password.chars().any(|c| category.contains(c)) {
            score += CATEGORY_BONUS;
        }
    }

    score
}

// The short-password check wins over any score
pub fn check_strength(password: &str) -> StrengthLabel {
    let score = strength_score(password);

    if password.chars().count() < MIN_LENGTH {
        StrengthLabel::Weak
    } else if score < STRONG_THRESHOLD {
        StrengthLabel::Medium
    } else if score < EXCELLENT_THRESHOLD {
        StrengthLabel::Strong
    } else {
        StrengthLabel::Excellent
    }
}
