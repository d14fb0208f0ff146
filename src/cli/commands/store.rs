//! Store connection management

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;

use super::exit_codes;
use crate::config::Config;
use crate::ui::prompts;

#[derive(Args)]
pub struct StoreCommands {
    #[command(subcommand)]
    pub command: StoreSubcommands,
}

#[derive(Subcommand)]
pub enum StoreSubcommands {
    /// Add a store connection (prompts for anything not given)
    Add {
        /// Store name
        #[arg(long)]
        name: Option<String>,
        /// Shop domain, e.g. your-store.myshopify.com
        #[arg(long)]
        domain: Option<String>,
        /// Admin API access token
        #[arg(long)]
        token: Option<String>,
        /// Admin API version for this store (defaults to the global setting)
        #[arg(long)]
        api_version: Option<String>,
        /// Overwrite an existing store without asking
        #[arg(short, long)]
        force: bool,
    },
    /// List configured stores
    List,
    /// Select the current store
    Select {
        /// Store name to select
        name: Option<String>,
    },
    /// Remove a store
    Remove {
        /// Store name to remove
        name: String,
        /// Force removal without confirmation
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn handle_store_command(cmd: StoreCommands) -> Result<i32> {
    let mut config = Config::load()?;

    match cmd.command {
        StoreSubcommands::Add {
            name,
            domain,
            token,
            api_version,
            force,
        } => {
            let name = prompts::prompt_store_name(name)?;

            if config.stores.contains_key(&name) && !force && !prompts::prompt_overwrite_confirmation(&name)? {
                println!("{} Cancelled.", "❌".bright_red().bold());
                return Ok(exit_codes::SUCCESS);
            }

            let store = prompts::prompt_store_config(domain, token, api_version)?;
            if store.shop_domain.is_empty() || store.access_token.is_empty() {
                anyhow::bail!("Shop domain and access token are both required");
            }

            config.add_store(name.clone(), store);
            config.save()?;
            println!("{} Store '{}' added successfully", "✓".bright_green().bold(), name.bright_green().bold());
        }
        StoreSubcommands::List => list_stores(&config),
        StoreSubcommands::Select { name } => {
            let name = match name {
                Some(name) => name,
                None => {
                    let mut names: Vec<String> = config.stores.keys().cloned().collect();
                    if names.is_empty() {
                        anyhow::bail!("No stores configured. Add one with 'shop-admin-cli store add'");
                    }
                    names.sort();
                    prompts::prompt_store_selection(&names, config.current_store.as_deref())?
                }
            };

            config.select_store(&name)?;
            config.save()?;
            println!("{} Set '{}' as current store", "✓".bright_green().bold(), name.bright_green().bold());
        }
        StoreSubcommands::Remove { name, force } => {
            if !config.stores.contains_key(&name) {
                anyhow::bail!("Store '{}' not found", name);
            }
            if !force && !prompts::prompt_remove_confirmation(&name)? {
                println!("{} Cancelled.", "❌".bright_red().bold());
                return Ok(exit_codes::SUCCESS);
            }

            config.remove_store(&name)?;
            config.save()?;
            println!("{} Store '{}' removed", "✓".bright_green().bold(), name.bright_green().bold());
        }
    }

    Ok(exit_codes::SUCCESS)
}

fn list_stores(config: &Config) {
    if config.stores.is_empty() {
        println!("  {}", "⚠️  No stores configured".bright_yellow().bold());
        println!("  {}", "Add a store to get started.".dimmed());
        return;
    }

    let mut names: Vec<&String> = config.stores.keys().collect();
    names.sort();

    println!();
    println!("  {}", "Configured stores:".bright_white().bold());
    for name in names {
        let store = &config.stores[name];
        let version = store.api_version(&config.settings);
        if config.current_store.as_deref() == Some(name.as_str()) {
            println!(
                "  {} {} → {} ({}){}",
                "●".bright_green(),
                name.bright_green().bold(),
                store.shop_domain.cyan(),
                version.bright_yellow(),
                " (current)".bright_green()
            );
        } else {
            println!("  {} {} → {} ({})", "○".bright_green(), name.white(), store.shop_domain.cyan(), version.bright_yellow());
        }
    }
    println!();
}
