// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password and rate its strength
    Generate {
        /// Password length (defaults to DEFAULT_PASSWORD_LENGTH or 12)
        #[arg(long, short, allow_negative_numbers = true)]
        length: Option<i64>,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_digits: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// Save the generated password to the vault
        #[arg(long)]
        save: bool,
    },

    /// Rate the strength of an existing password
    Check {
        /// Password to check
        #[arg(required = true, allow_hyphen_values = true)]
        password: String,

        /// Save the password to the vault as a manual entry
        #[arg(long)]
        save: bool,

        /// Also print the raw score
        #[arg(long, short)]
        verbose: bool,
    },

    /// List all saved passwords
    List,
}
