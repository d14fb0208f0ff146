//! Core Operation types for Admin API mutations and queries

use super::documents;
use crate::api::executor::GraphQLExecutor;
use crate::api::models::GraphQLResponse;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Media type sent with every product image attachment
pub const IMAGE_MEDIA_CONTENT_TYPE: &str = "IMAGE";

/// Represents a single GraphQL operation that can be executed against the Admin API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// Create a product (its first variant is created implicitly)
    CreateProduct {
        title: String,
        description_html: String,
    },
    /// Set the price of an existing variant
    UpdateVariantPrice {
        /// Variant GID returned by the create step
        variant_id: String,
        price: f64,
    },
    /// Attach products to a collection
    AddProductsToCollection {
        collection_id: String,
        product_ids: Vec<String>,
    },
    /// Attach an image to a product by remote URL
    CreateProductMedia {
        product_id: String,
        image_url: String,
    },
    /// List the first `first` products
    FetchProducts { first: u32 },
    /// List the first `first` collections
    FetchCollections { first: u32 },
}

impl Operation {
    /// Create a new CreateProduct operation
    pub fn create_product(title: impl Into<String>, description_html: impl Into<String>) -> Self {
        Self::CreateProduct {
            title: title.into(),
            description_html: description_html.into(),
        }
    }

    /// Create a new UpdateVariantPrice operation
    pub fn update_variant_price(variant_id: impl Into<String>, price: f64) -> Self {
        Self::UpdateVariantPrice {
            variant_id: variant_id.into(),
            price,
        }
    }

    /// Create a new AddProductsToCollection operation for a single product
    pub fn add_product_to_collection(collection_id: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self::AddProductsToCollection {
            collection_id: collection_id.into(),
            product_ids: vec![product_id.into()],
        }
    }

    /// Create a new CreateProductMedia operation
    pub fn create_product_media(product_id: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self::CreateProductMedia {
            product_id: product_id.into(),
            image_url: image_url.into(),
        }
    }

    /// The GraphQL document for this operation
    pub fn document(&self) -> &'static str {
        match self {
            Self::CreateProduct { .. } => documents::CREATE_PRODUCT,
            Self::UpdateVariantPrice { .. } => documents::UPDATE_VARIANT_PRICE,
            Self::AddProductsToCollection { .. } => documents::ADD_PRODUCTS_TO_COLLECTION,
            Self::CreateProductMedia { .. } => documents::CREATE_PRODUCT_MEDIA,
            Self::FetchProducts { .. } => documents::FETCH_PRODUCTS,
            Self::FetchCollections { .. } => documents::FETCH_COLLECTIONS,
        }
    }

    /// Variables object sent alongside the document
    pub fn variables(&self) -> Value {
        match self {
            Self::CreateProduct { title, description_html } => json!({
                "input": {
                    "title": title,
                    "descriptionHtml": description_html,
                }
            }),
            Self::UpdateVariantPrice { variant_id, price } => json!({
                "input": {
                    "id": variant_id,
                    "price": price,
                }
            }),
            Self::AddProductsToCollection { collection_id, product_ids } => json!({
                "id": collection_id,
                "productIds": product_ids,
            }),
            Self::CreateProductMedia { product_id, image_url } => json!({
                "productId": product_id,
                "media": {
                    "mediaContentType": IMAGE_MEDIA_CONTENT_TYPE,
                    "originalSource": image_url,
                }
            }),
            Self::FetchProducts { first } | Self::FetchCollections { first } => json!({
                "first": first,
            }),
        }
    }

    /// Operation name as declared in the document
    pub fn operation_name(&self) -> &'static str {
        match self {
            Self::CreateProduct { .. } => "populateProduct",
            Self::UpdateVariantPrice { .. } => "updateVariantPrice",
            Self::AddProductsToCollection { .. } => "addProductToCollection",
            Self::CreateProductMedia { .. } => "addProductImage",
            Self::FetchProducts { .. } => "fetchProducts",
            Self::FetchCollections { .. } => "fetchCollections",
        }
    }

    /// Top-level field under `data` that holds this operation's payload
    pub fn root_field(&self) -> &'static str {
        match self {
            Self::CreateProduct { .. } => "productCreate",
            Self::UpdateVariantPrice { .. } => "productVariantUpdate",
            Self::AddProductsToCollection { .. } => "collectionAddProducts",
            Self::CreateProductMedia { .. } => "productCreateMedia",
            Self::FetchProducts { .. } => "products",
            Self::FetchCollections { .. } => "collections",
        }
    }

    /// Name of the application-level error list in the payload, if the operation has one
    pub fn user_errors_field(&self) -> Option<&'static str> {
        match self {
            Self::CreateProduct { .. }
            | Self::UpdateVariantPrice { .. }
            | Self::AddProductsToCollection { .. } => Some("userErrors"),
            Self::CreateProductMedia { .. } => Some("mediaUserErrors"),
            Self::FetchProducts { .. } | Self::FetchCollections { .. } => None,
        }
    }

    /// Execute this operation against a GraphQL executor
    pub async fn execute<E: GraphQLExecutor + ?Sized>(&self, executor: &E) -> anyhow::Result<GraphQLResponse> {
        executor.execute_graphql(self.document(), self.variables()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_product_variables() {
        let op = Operation::create_product("Shirt", "<p>desc</p>");

        assert_eq!(
            op.variables(),
            json!({ "input": { "title": "Shirt", "descriptionHtml": "<p>desc</p>" } })
        );
        assert_eq!(op.root_field(), "productCreate");
        assert!(op.document().contains("variants(first: 1)"));
    }

    #[test]
    fn test_update_variant_price_sends_number() {
        let op = Operation::update_variant_price("gid://shopify/ProductVariant/1", 19.99);
        let vars = op.variables();

        assert_eq!(vars["input"]["id"], "gid://shopify/ProductVariant/1");
        assert_eq!(vars["input"]["price"], json!(19.99));
        assert!(vars["input"]["price"].is_number());
    }

    #[test]
    fn test_collection_variables_wrap_product_id() {
        let op = Operation::add_product_to_collection("C1", "P1");

        assert_eq!(op.variables(), json!({ "id": "C1", "productIds": ["P1"] }));
        assert_eq!(op.user_errors_field(), Some("userErrors"));
    }

    #[test]
    fn test_media_variables_and_error_field() {
        let op = Operation::create_product_media("P1", "http://x/y.png");

        assert_eq!(
            op.variables(),
            json!({
                "productId": "P1",
                "media": { "mediaContentType": "IMAGE", "originalSource": "http://x/y.png" }
            })
        );
        assert_eq!(op.user_errors_field(), Some("mediaUserErrors"));
    }

    #[test]
    fn test_documents_declare_operation_names() {
        let ops = [
            Operation::create_product("t", "d"),
            Operation::update_variant_price("v", 1.0),
            Operation::add_product_to_collection("c", "p"),
            Operation::create_product_media("p", "u"),
            Operation::FetchProducts { first: 10 },
            Operation::FetchCollections { first: 10 },
        ];

        for op in &ops {
            assert!(op.document().contains(op.operation_name()), "{}", op.operation_name());
            assert!(op.document().contains(&format!("{}(", op.root_field())), "{}", op.root_field());
        }
        assert_eq!(ops.iter().filter(|op| op.user_errors_field().is_some()).count(), 4);
    }
}
