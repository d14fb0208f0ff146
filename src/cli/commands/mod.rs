pub mod collection;
pub mod product;
pub mod store;

pub use collection::{CollectionCommands, handle_collection_command};
pub use product::{ProductCommands, handle_product_command};
pub use store::{StoreCommands, handle_store_command};

/// Process exit codes returned by command handlers
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const PARTIAL: i32 = 2;
}
