use clap::Parser;
use std::path::Path;

use rust_passtool::cli::{self, Args};
use rust_passtool::core::Config;
use rust_passtool::logging;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(vault) = args.vault {
        config.vault_file = vault;
    }

    logging::init(&config);
    for warning in &config.load_warnings {
        log::warn!("{}", warning);
    }
    log::info!("🔒 Starting password tool");
    log::debug!("Loaded config: {:?}", config);

    let result = cli::run(args.command, &config);
    if let Err(e) = &result {
        log::error!("{}", e);
    }
    result
}
