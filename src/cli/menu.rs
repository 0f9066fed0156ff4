// src/cli/menu.rs
use std::fmt;

use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Select, Text};

use crate::cli::handlers;
use crate::core::{Config, Vault};
use crate::generators::{self, PasswordGenerator};
use crate::models::{AssessedPassword, PasswordGenerationOptions, RecordSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Generate,
    Check,
    View,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 4] = [
        MenuAction::Generate,
        MenuAction::Check,
        MenuAction::View,
        MenuAction::Exit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::Generate => "🔐  Generate a new password",
            MenuAction::Check => "💪  Check the strength of a password",
            MenuAction::View => "🗂️  View saved passwords",
            MenuAction::Exit => "❌  Exit",
        };
        f.write_str(label)
    }
}

pub fn run_cli_menu(
    vault: &Vault,
    generator: &PasswordGenerator,
    config: &Config,
) -> anyhow::Result<()> {
    println!("✨ Welcome to the Password Tool & Vault ✨");
    println!("Saved passwords are stored in plaintext at {}", vault.path().display());

    loop {
        let selection = match Select::new("Choose an option:", MenuAction::ALL.to_vec())
            .with_help_message(
                "Use arrow keys to navigate, Enter to select. Esc or Ctrl+C to exit.",
            )
            .prompt_skippable()
        {
            Ok(Some(selection)) => selection,
            Ok(None) => break,
            Err(InquireError::OperationInterrupted | InquireError::OperationCanceled) => break,
            Err(e) => return Err(e.into()),
        };

        let result = match selection {
            MenuAction::Generate => generate_flow(vault, generator, config),
            MenuAction::Check => check_flow(vault),
            MenuAction::View => {
                println!("\n--- Saved Passwords ---");
                println!("{}", handlers::handle_list(vault));
                Ok(())
            }
            MenuAction::Exit => break,
        };

        match result {
            Ok(()) => {}
            // Esc inside a sub-prompt returns to the main menu
            Err(InquireError::OperationCanceled) => println!("Cancelled."),
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("Thank you for using the tool. Goodbye!");
    log::info!("Interactive session ended");
    Ok(())
}

fn generate_flow(
    vault: &Vault,
    generator: &PasswordGenerator,
    config: &Config,
) -> Result<(), InquireError> {
    let default_length = config.default_password_length.to_string();
    let input = Text::new("Password length:")
        .with_default(&default_length)
        .prompt()?;

    let raw_length = match handlers::parse_length(&input) {
        Ok(length) => length,
        Err(e) => {
            println!("❌ {}", e);
            return Ok(());
        }
    };
    if let Err(e) = generators::requested_length(raw_length) {
        println!("❌ {}", e);
        return Ok(());
    }

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(true)
        .prompt()?;
    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(true)
        .prompt()?;
    let include_numbers = Confirm::new("Include numbers?")
        .with_default(true)
        .prompt()?;
    let include_symbols = Confirm::new("Include symbols?")
        .with_default(true)
        .prompt()?;

    let options = PasswordGenerationOptions {
        length: config.default_password_length,
        include_uppercase,
        include_lowercase,
        include_numbers,
        include_symbols,
    };

    match handlers::handle_generate(generator, raw_length, options) {
        Ok(assessed) => {
            println!("\n🔐 Generated Password: {}", assessed.password);
            println!("💪 Strength Rating: {}", assessed.strength);
            offer_save(vault, &assessed, RecordSource::Generated)
        }
        Err(e) => {
            println!("❌ Generation failed. {}", e);
            Ok(())
        }
    }
}

fn check_flow(vault: &Vault) -> Result<(), InquireError> {
    let password = Password::new("Enter the password you want to check:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    if password.is_empty() {
        println!("❌ Please enter a password to check.");
        return Ok(());
    }

    let assessed = handlers::handle_check(&password);
    println!("\n💪 Strength Rating: {}", assessed.strength);
    offer_save(vault, &assessed, RecordSource::ManualEntry)
}

// The password stays in hand until it is saved or the user gives up
fn offer_save(
    vault: &Vault,
    assessed: &AssessedPassword,
    source: RecordSource,
) -> Result<(), InquireError> {
    let save = Confirm::new("Save this password to the vault?")
        .with_default(false)
        .prompt()?;
    if !save {
        return Ok(());
    }

    loop {
        match handlers::handle_save(vault, assessed, source) {
            Ok(summary) => {
                println!("✅ {}", summary);
                println!("{} password saved to {}", source, vault.path().display());
                return Ok(());
            }
            Err(e) => {
                log::error!("Save failed: {}", e);
                println!("❌ {}", e);
                let retry = Confirm::new("Retry saving?")
                    .with_default(true)
                    .prompt()?;
                if !retry {
                    return Ok(());
                }
            }
        }
    }
}
