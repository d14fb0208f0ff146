//! Collection listing command

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;

use super::exit_codes;
use crate::api::AdminClient;
use crate::catalog;
use crate::config::Config;

#[derive(Args)]
pub struct CollectionCommands {
    #[command(subcommand)]
    pub command: CollectionSubcommands,
}

#[derive(Subcommand)]
pub enum CollectionSubcommands {
    /// List collections, e.g. to find an id for `product create --collection-id`
    List {
        /// Number of collections to fetch (1-250)
        #[arg(long, default_value_t = 10)]
        first: u32,
    },
}

pub async fn handle_collection_command(cmd: CollectionCommands, store: Option<&str>) -> Result<i32> {
    let config = Config::load()?;
    let store_config = config.resolve_store(store)?;
    let client = AdminClient::new(&store_config, &config.settings)?;

    match cmd.command {
        CollectionSubcommands::List { first } => {
            let collections = catalog::fetch_collections(&client, first).await?;

            if collections.is_empty() {
                println!("  {}", "No collections found".bright_yellow());
                return Ok(exit_codes::SUCCESS);
            }

            println!();
            println!("  {}", "Collections:".bright_white().bold());
            for collection in &collections {
                println!("  {} → {}", collection.title.bright_green(), collection.id.cyan());
            }
            println!();
        }
    }

    Ok(exit_codes::SUCCESS)
}
