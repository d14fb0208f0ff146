pub mod handler;

use clap::{Args, Subcommand};

pub use handler::handle_product_command;

#[derive(Args)]
pub struct ProductCommands {
    #[command(subcommand)]
    pub command: ProductSubcommands,
}

#[derive(Subcommand)]
pub enum ProductSubcommands {
    /// Create a product, price its variant, and attach it to a collection and an image
    Create(CreateArgs),
    /// List products in the store
    List {
        /// Number of products to fetch (1-250)
        #[arg(long, default_value_t = 10)]
        first: u32,
    },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Product title
    #[arg(long)]
    pub title: String,

    /// Variant price as a decimal string (e.g., '25.00')
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,

    /// Product description (HTML allowed)
    #[arg(long)]
    pub description: String,

    /// Collection GID to add the product to (see `collection list`)
    #[arg(long)]
    pub collection_id: String,

    /// Public image URL to attach; omitted or empty skips the media step
    #[arg(long)]
    pub image_url: Option<String>,

    /// Run the price, collection and media steps one after another
    #[arg(long)]
    pub sequential: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
