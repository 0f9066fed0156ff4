// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use thiserror::Error;

use crate::generators::strength;
use crate::models::{AssessedPassword, PasswordGenerationOptions, StrengthLabel};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Error: Check length/options. ({0})")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        generate_password(options)
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthLabel {
        strength::check_strength(password)
    }

    /// Generate a password and rate it in one step.
    pub fn generate_assessed(
        &self,
        options: &PasswordGenerationOptions,
    ) -> Result<AssessedPassword> {
        let password = self.generate_password(options)?;
        let strength = self.analyze_password_strength(&password);
        log::debug!("Generated {}-character password rated {}", options.length, strength);
        Ok(AssessedPassword { password, strength })
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a raw, possibly negative, requested length.
pub fn requested_length(raw: i64) -> Result<usize> {
    if raw <= 0 {
        return Err(GeneratorError::InvalidRequest(format!(
            "length must be positive, got {}",
            raw
        )));
    }
    usize::try_from(raw)
        .map_err(|_| GeneratorError::InvalidRequest(format!("length {} is too large", raw)))
}

// Generate a password using the thread-local CSPRNG
pub fn generate_password(options: &PasswordGenerationOptions) -> Result<String> {
    generate_password_with(options, &mut rand::thread_rng())
}

pub fn generate_password_with<R: Rng + ?Sized>(
    options: &PasswordGenerationOptions,
    rng: &mut R,
) -> Result<String> {
    let chars: Vec<char> = options
        .enabled_categories()
        .flat_map(|category| category.alphabet().chars())
        .collect();

    if chars.is_empty() {
        return Err(GeneratorError::InvalidRequest(
            "at least one character category must be enabled".into(),
        ));
    }
    if options.length == 0 {
        return Err(GeneratorError::InvalidRequest(
            "length must be positive, got 0".into(),
        ));
    }

    let dist = Uniform::from(0..chars.len());
    Ok((0..options.length)
        .map(|_| chars[dist.sample(rng)])
        .collect())
}
