// src/cli/handlers.rs
use thiserror::Error;

use crate::core::vault::{Vault, VaultError};
use crate::generators::{self, GeneratorError, PasswordGenerator};
use crate::models::{AssessedPassword, PasswordGenerationOptions, RecordSource};
use crate::utils;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid input '{0}'. Length must be a number.")]
    InvalidLength(String),

    #[error("Enter or check a password first.")]
    EmptyPassword,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("Failed to save password: {0}")]
    Vault(#[from] VaultError),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Parse a typed length. Signs are accepted so that non-positive values reach
/// the generator and fail there as an invalid request.
pub fn parse_length(input: &str) -> std::result::Result<i64, InputError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::InvalidLength(input.to_string()))
}

pub fn handle_generate(
    generator: &PasswordGenerator,
    raw_length: i64,
    options: PasswordGenerationOptions,
) -> Result<AssessedPassword> {
    let options = PasswordGenerationOptions {
        length: generators::requested_length(raw_length)?,
        ..options
    };
    Ok(generator.generate_assessed(&options)?)
}

pub fn handle_check(password: &str) -> AssessedPassword {
    let strength = generators::check_strength(password);
    log::debug!("Checked password strength: {}", strength);
    AssessedPassword {
        password: password.to_string(),
        strength,
    }
}

/// Persist an assessed password and return the confirmation line.
pub fn handle_save(
    vault: &Vault,
    assessed: &AssessedPassword,
    source: RecordSource,
) -> Result<String> {
    if assessed.password.is_empty() {
        return Err(InputError::EmptyPassword.into());
    }
    vault.append(assessed.clone().into_record(source))?;
    Ok(utils::save_summary(&assessed.password, assessed.strength))
}

pub fn handle_list(vault: &Vault) -> String {
    utils::format_vault_table(&vault.load_all())
}
