// src/models.rs
use std::fmt;

use serde::{Deserialize, Serialize};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A fixed character class usable in generation and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Lowercase,
        Category::Uppercase,
        Category::Digits,
        Category::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            Category::Lowercase => LOWERCASE,
            Category::Uppercase => UPPERCASE,
            Category::Digits => DIGITS,
            Category::Symbols => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl PasswordGenerationOptions {
    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Lowercase => self.include_lowercase,
            Category::Uppercase => self.include_uppercase,
            Category::Digits => self.include_numbers,
            Category::Symbols => self.include_symbols,
        }
    }

    pub fn enabled_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.is_enabled(*c))
    }
}

/// Qualitative strength rating, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLabel {
    #[serde(rename = "Weak (Too Short)")]
    Weak,
    Medium,
    Strong,
    Excellent,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak (Too Short)",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment specifiers work in the vault table
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordSource {
    Generated,
    #[serde(rename = "Manual Entry")]
    ManualEntry,
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSource::Generated => f.pad("Generated"),
            RecordSource::ManualEntry => f.pad("Manual Entry"),
        }
    }
}

/// One saved password, as persisted in the vault file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultRecord {
    pub password: String,
    pub strength: StrengthLabel,
    pub source: RecordSource,
}

/// A password paired with its computed strength, handed straight to a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessedPassword {
    pub password: String,
    pub strength: StrengthLabel,
}

impl AssessedPassword {
    pub fn into_record(self, source: RecordSource) -> VaultRecord {
        VaultRecord {
            password: self.password,
            strength: self.strength,
            source,
        }
    }
}
