//! Step 1: Create the product and capture its first variant

use super::super::error::invalid_input;
use super::super::execution::execute_step;
use super::super::helpers::{mutation_payload, optional_str, require_str};
use super::super::models::{CreatedProduct, CreationRequest, ProductVariant, Step, StepOutcome};
use crate::api::{GraphQLExecutor, GraphQLResponse, Operation};

pub async fn step1_create_product<E: GraphQLExecutor + ?Sized>(
    executor: &E,
    request: &CreationRequest,
) -> StepOutcome<CreatedProduct> {
    execute_step(executor, Step::CreateProduct, operation(request), interpret).await
}

pub fn operation(request: &CreationRequest) -> StepOutcome<Operation> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(invalid_input("title must not be empty"));
    }
    // Step 3 input, rejected before anything exists remotely
    if request.collection_id.trim().is_empty() {
        return Err(invalid_input("collection id is required"));
    }

    Ok(Operation::create_product(title, request.description_html.as_str()))
}

/// Both the product id and the first variant id must be present; the later
/// steps are keyed off them.
pub fn interpret(operation: &Operation, response: &GraphQLResponse) -> StepOutcome<CreatedProduct> {
    let payload = mutation_payload(response, operation)?;

    let id = require_str(payload, "/product/id")?;
    let variant_id = require_str(payload, "/product/variants/edges/0/node/id")?;

    Ok(CreatedProduct {
        id,
        title: optional_str(payload, "/product/title"),
        description_html: optional_str(payload, "/product/descriptionHtml"),
        variant: ProductVariant {
            id: variant_id,
            price: optional_str(payload, "/product/variants/edges/0/node/price"),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::models::ErrorKind;
    use serde_json::json;

    fn request() -> CreationRequest {
        CreationRequest::new("Shirt", "25.00", "<p>desc</p>", "C1")
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut request = request();
        request.title = "   ".to_string();

        assert_eq!(operation(&request).unwrap_err().kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn test_blank_collection_id_rejected() {
        let mut request = request();
        request.collection_id = " ".to_string();

        let failure = operation(&request).unwrap_err();
        assert_eq!(failure.kind, ErrorKind::InvalidInput);
        assert_eq!(failure.detail, "collection id is required");
    }

    #[test]
    fn test_interpret_extracts_ids() {
        let op = operation(&request()).unwrap();
        let response = GraphQLResponse::with_data(json!({
            "productCreate": {
                "product": {
                    "id": "gid://shopify/Product/1",
                    "title": "Shirt",
                    "descriptionHtml": "<p>desc</p>",
                    "variants": { "edges": [{ "node": { "id": "gid://shopify/ProductVariant/9", "price": "0.00" } }] }
                },
                "userErrors": []
            }
        }));

        let product = interpret(&op, &response).unwrap();
        assert_eq!(product.id, "gid://shopify/Product/1");
        assert_eq!(product.variant.id, "gid://shopify/ProductVariant/9");
        assert_eq!(product.variant.price.as_deref(), Some("0.00"));
    }

    #[test]
    fn test_missing_variant_is_shape_error() {
        let op = operation(&request()).unwrap();
        let response = GraphQLResponse::with_data(json!({
            "productCreate": {
                "product": { "id": "gid://shopify/Product/1", "variants": { "edges": [] } },
                "userErrors": []
            }
        }));

        let failure = interpret(&op, &response).unwrap_err();
        assert_eq!(failure.kind, ErrorKind::UnexpectedResponseShape);
        assert!(failure.detail.contains("variants"));
    }

    #[test]
    fn test_user_errors_on_create() {
        let op = operation(&request()).unwrap();
        let response = GraphQLResponse::with_data(json!({
            "productCreate": {
                "product": null,
                "userErrors": [{ "field": ["title"], "message": "Title can't be blank" }]
            }
        }));

        assert_eq!(interpret(&op, &response).unwrap_err().kind, ErrorKind::RemoteValidation);
    }
}
