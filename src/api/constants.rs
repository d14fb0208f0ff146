//! API Constants and Configuration for the Shopify Admin GraphQL API

/// Admin API version used when neither the store nor the settings pin one
pub const DEFAULT_API_VERSION: &str = "2024-01";

/// Base path of the Admin API
pub const ADMIN_API_PATH: &str = "/admin/api";

/// GraphQL endpoint file name under the versioned path
pub const GRAPHQL_ENDPOINT: &str = "graphql.json";

/// Default page size for catalog listings (the admin app listed 10 at a time)
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page the Admin API accepts for connection fields
pub const MAX_PAGE_SIZE: u32 = 250;

/// Standard headers for Admin API requests
pub mod headers {
    /// Content type for JSON requests
    pub const CONTENT_TYPE_JSON: &str = "application/json";

    /// Header carrying the Admin API access token
    pub const ACCESS_TOKEN: &str = "X-Shopify-Access-Token";

    /// Correlation header echoed back in API logs
    pub const X_REQUEST_ID: &str = "X-Request-Id";
}

/// Full API path with version
pub fn api_path(api_version: &str) -> String {
    format!("{}/{}", ADMIN_API_PATH, api_version)
}

/// Build the GraphQL endpoint URL for a shop.
///
/// Accepts either a bare domain (`example.myshopify.com`) or one that already
/// carries a scheme; a trailing slash is ignored.
pub fn graphql_endpoint(shop_domain: &str, api_version: &str) -> String {
    let domain = shop_domain.trim().trim_end_matches('/');
    let base = if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{}", domain)
    };
    format!("{}{}/{}", base, api_path(api_version), GRAPHQL_ENDPOINT)
}
