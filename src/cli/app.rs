use super::commands::collection::CollectionCommands;
use super::commands::product::ProductCommands;
use super::commands::store::StoreCommands;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shop-admin-cli")]
#[command(about = "A CLI tool for creating and browsing products through the Shopify Admin API")]
#[command(version)]
pub struct Cli {
    /// Configured store to use instead of the current one
    #[arg(long, global = true)]
    pub store: Option<String>,

    /// Log to stderr instead of shop-admin-cli.log
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create and list products
    Product(ProductCommands),
    /// List collections
    Collection(CollectionCommands),
    /// Store connection management
    Store(StoreCommands),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::product::ProductSubcommands;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_product_create() {
        let cli = Cli::try_parse_from([
            "shop-admin-cli",
            "--store",
            "dev",
            "product",
            "create",
            "--title",
            "Shirt",
            "--price",
            "25.00",
            "--description",
            "<p>Soft</p>",
            "--collection-id",
            "gid://shopify/Collection/1",
            "--sequential",
        ])
        .unwrap();

        assert_eq!(cli.store.as_deref(), Some("dev"));
        match cli.command {
            Commands::Product(ProductCommands {
                command: ProductSubcommands::Create(args),
            }) => {
                assert_eq!(args.title, "Shirt");
                assert_eq!(args.price, "25.00");
                assert!(args.sequential);
                assert!(!args.json);
                assert_eq!(args.image_url, None);
            }
            _ => panic!("expected product create"),
        }
    }

    #[test]
    fn test_product_create_requires_collection_id() {
        let result = Cli::try_parse_from([
            "shop-admin-cli",
            "product",
            "create",
            "--title",
            "Shirt",
            "--price",
            "25.00",
            "--description",
            "d",
        ]);

        assert_eq!(
            result.err().map(|e| e.kind()),
            Some(clap::error::ErrorKind::MissingRequiredArgument)
        );
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["shop-admin-cli", "collection", "list", "--verbose", "--first", "5"]).unwrap();
        assert!(cli.verbose);
    }
}
