// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

use crate::core::{Config, Vault};
use crate::generators::PasswordGenerator;
use crate::models::{PasswordGenerationOptions, RecordSource};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate, rate and store passwords", long_about = None)]
pub struct Args {
    /// Vault file holding saved passwords
    #[arg(long, env = "VAULT_FILE")]
    pub vault: Option<PathBuf>,

    /// Command to execute; starts the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Run a single command, or the interactive menu when none was given.
pub fn run(command: Option<CliCommand>, config: &Config) -> anyhow::Result<()> {
    let vault = Vault::new(config.vault_file.clone());
    let generator = PasswordGenerator::new();

    let Some(command) = command else {
        return menu::run_cli_menu(&vault, &generator, config);
    };

    match command {
        CliCommand::Generate {
            length,
            no_lowercase,
            no_uppercase,
            no_digits,
            no_symbols,
            save,
        } => {
            let options = PasswordGenerationOptions {
                length: config.default_password_length,
                include_lowercase: !no_lowercase,
                include_uppercase: !no_uppercase,
                include_numbers: !no_digits,
                include_symbols: !no_symbols,
            };
            let raw_length = length.unwrap_or(config.default_password_length as i64);
            let assessed = handlers::handle_generate(&generator, raw_length, options)?;
            println!("Password: {}", assessed.password);
            println!("Strength: {}", assessed.strength);
            if save {
                let summary = handlers::handle_save(&vault, &assessed, RecordSource::Generated)?;
                println!("{}", summary);
            }
        }
        CliCommand::Check { password, save, verbose } => {
            let assessed = handlers::handle_check(&password);
            println!("Strength: {}", assessed.strength);
            if verbose {
                println!("Score: {}", crate::generators::strength_score(&password));
            }
            if save {
                let summary =
                    handlers::handle_save(&vault, &assessed, RecordSource::ManualEntry)?;
                println!("{}", summary);
            }
        }
        CliCommand::List => {
            println!("{}", handlers::handle_list(&vault));
        }
    }

    Ok(())
}
