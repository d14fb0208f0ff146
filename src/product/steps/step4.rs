//! Step 4: Attach an image to the product by URL

use super::super::execution::execute_step;
use super::super::helpers::{mutation_payload, require_str};
use super::super::models::{MediaAttachment, Step, StepOutcome};
use crate::api::{GraphQLExecutor, GraphQLResponse, Operation};

/// Only called with an image URL; an absent URL is handled by the
/// orchestrator as "not attempted".
pub async fn step4_attach_media<E: GraphQLExecutor + ?Sized>(
    executor: &E,
    product_id: &str,
    image_url: &str,
) -> StepOutcome<MediaAttachment> {
    execute_step(
        executor,
        Step::AttachMedia,
        Ok(Operation::create_product_media(product_id, image_url)),
        interpret,
    )
    .await
}

pub fn interpret(operation: &Operation, response: &GraphQLResponse) -> StepOutcome<MediaAttachment> {
    let payload = mutation_payload(response, operation)?;

    Ok(MediaAttachment {
        media_content_type: require_str(payload, "/media/0/mediaContentType")?,
        status: require_str(payload, "/media/0/status")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::models::ErrorKind;
    use serde_json::json;

    fn op() -> Operation {
        Operation::create_product_media("P1", "http://x/y.png")
    }

    #[test]
    fn test_interpret_media() {
        let response = GraphQLResponse::with_data(json!({
            "productCreateMedia": {
                "media": [{ "mediaContentType": "IMAGE", "status": "UPLOADED" }],
                "mediaUserErrors": []
            }
        }));

        let media = interpret(&op(), &response).unwrap();
        assert_eq!(media.media_content_type, "IMAGE");
        assert_eq!(media.status, "UPLOADED");
    }

    #[test]
    fn test_media_user_errors() {
        let response = GraphQLResponse::with_data(json!({
            "productCreateMedia": {
                "media": [],
                "mediaUserErrors": [{ "field": ["media", "0", "originalSource"], "message": "Image URL is invalid" }]
            }
        }));

        let failure = interpret(&op(), &response).unwrap_err();
        assert_eq!(failure.kind, ErrorKind::RemoteValidation);
        assert_eq!(failure.detail, "media.0.originalSource: Image URL is invalid");
    }

    #[test]
    fn test_empty_media_list() {
        let response = GraphQLResponse::with_data(json!({
            "productCreateMedia": { "media": [], "mediaUserErrors": [] }
        }));

        assert_eq!(interpret(&op(), &response).unwrap_err().kind, ErrorKind::UnexpectedResponseShape);
    }
}
