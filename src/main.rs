use anyhow::Result;
use clap::Parser;
use log::info;

use shop_admin_cli::api::LogLevel;
use shop_admin_cli::cli::commands::{handle_collection_command, handle_product_command, handle_store_command};
use shop_admin_cli::cli::{Cli, Commands};
use shop_admin_cli::config::Config;

const LOG_FILE: &str = "shop-admin-cli.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    info!("Starting shop-admin-cli");

    let store = cli.store.as_deref();
    let code = match cli.command {
        Commands::Product(cmd) => handle_product_command(cmd, store).await?,
        Commands::Collection(cmd) => handle_collection_command(cmd, store).await?,
        Commands::Store(cmd) => handle_store_command(cmd).await?,
    };

    info!("Exiting with code {}", code);
    std::process::exit(code);
}

/// Log to a file truncated on each run, or to stderr with `--verbose`.
/// `RUST_LOG` overrides the configured level.
fn init_logging(verbose: bool) -> Result<()> {
    let level = Config::load()
        .map(|config| config.settings.log_level)
        .unwrap_or(LogLevel::Info);

    let target = if verbose {
        env_logger::Target::Stderr
    } else {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(LOG_FILE)?;
        env_logger::Target::Pipe(Box::new(log_file))
    };

    env_logger::Builder::new()
        .filter_level(level.to_filter())
        .parse_env("RUST_LOG")
        .target(target)
        .init();
    Ok(())
}
