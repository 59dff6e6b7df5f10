//! GraphQL-specific error types for the IKEA API client.
//!
//! The cart and purchase history services answer GraphQL requests with HTTP
//! 200 even when the operation failed, listing the failures in the body's
//! `errors` array. Those are surfaced as [`GraphqlError::Query`] rather than
//! being left for the caller to discover.
//!
//! # Example
//!
//! ```rust,ignore
//! use ikea_api::clients::graphql::GraphqlError;
//!
//! match client.query(CART_QUERY, variables).await {
//!     Ok(body) => println!("Cart: {}", body["data"]["cart"]),
//!     Err(GraphqlError::Query { messages, .. }) => {
//!         for message in messages {
//!             println!("GraphQL error: {message}");
//!         }
//!     }
//!     Err(GraphqlError::Http(e)) => println!("HTTP error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL operations.
///
/// # Example
///
/// ```rust
/// use ikea_api::clients::graphql::GraphqlError;
/// use ikea_api::clients::{HttpError, HttpResponseError};
/// use serde_json::json;
///
/// let http_error = HttpError::Response(HttpResponseError {
///     code: 401,
///     message: r#"{"message":"Unauthorized"}"#.to_string(),
///     body: json!({"message": "Unauthorized"}),
///     error_reference: None,
/// });
/// let graphql_error: GraphqlError = http_error.into();
/// assert!(graphql_error.to_string().contains("Unauthorized"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred.
    ///
    /// This includes network errors and non-2xx responses.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body carried a non-empty `errors` array.
    #[error("GraphQL query failed: {}", messages.join("; "))]
    Query {
        /// The `message` of each reported error.
        messages: Vec<String>,
        /// The full response body, for vendor error codes next to `errors`.
        body: serde_json::Value,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;
    use serde_json::json;

    #[test]
    fn test_graphql_error_http_variant_wraps_http_error() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 404,
            message: r#"{"message":"Not Found"}"#.to_string(),
            body: json!({}),
            error_reference: Some("abc-123".to_string()),
        });

        let graphql_error = GraphqlError::Http(http_error);
        assert!(graphql_error.to_string().contains("Not Found"));
    }

    #[test]
    fn test_query_error_joins_messages() {
        let error = GraphqlError::Query {
            messages: vec!["Cart not found".to_string(), "Invalid item".to_string()],
            body: json!({}),
        };
        assert_eq!(
            error.to_string(),
            "GraphQL query failed: Cart not found; Invalid item"
        );
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 500,
            message: "{}".to_string(),
            body: json!({}),
            error_reference: None,
        });

        let graphql_error: GraphqlError = http_error.into();
        assert!(matches!(graphql_error, GraphqlError::Http(_)));
    }
}
