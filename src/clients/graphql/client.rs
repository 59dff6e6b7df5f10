//! GraphQL client implementation.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! operations against a single vendor endpoint.

use crate::clients::graphql::GraphqlError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest};

/// GraphQL client for the IKEA cart and purchase history services.
///
/// Wraps an [`HttpClient`] already pointed at the service host and posts
/// `{"query", "variables"}` documents to a fixed path.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use ikea_api::clients::{GraphqlClient, HttpClient};
/// use serde_json::json;
///
/// let http_client = HttpClient::new("cart.oneweb.ingka.com", "", Some(&token), &config);
/// let client = GraphqlClient::new(http_client, "graphql");
///
/// let body = client
///     .query("query Cart($languageCode: String) { cart(languageCode: $languageCode) { currency } }",
///            Some(json!({ "languageCode": "ru" })))
///     .await?;
/// println!("Currency: {}", body["data"]["cart"]["currency"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Path of the GraphQL endpoint relative to the client's base path.
    path: String,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client posting to `path`.
    #[must_use]
    pub fn new(http_client: HttpClient, path: impl Into<String>) -> Self {
        Self {
            http_client,
            path: path.into(),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the absolute URL queries are posted to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.http_client.url_for(&self.path)
    }

    /// Executes a GraphQL query or mutation and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for HTTP-level errors (network errors,
    /// non-2xx responses), and [`GraphqlError::Query`] when the body reports
    /// errors, even with HTTP 200.
    pub async fn query(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, GraphqlError> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables.unwrap_or_else(|| serde_json::json!({}))
        });

        let request = HttpRequest::builder(HttpMethod::Post, self.path.as_str())
            .body(body)
            .build()
            .map_err(|e| GraphqlError::Http(e.into()))?;

        let response = self.http_client.request(request).await?;

        if let Some(messages) = Self::error_messages(&response.body) {
            tracing::debug!(errors = messages.len(), "GraphQL response reported errors");
            return Err(GraphqlError::Query {
                messages,
                body: response.body,
            });
        }

        Ok(response.body)
    }

    /// Extracts the messages of a non-empty `errors` array.
    fn error_messages(body: &serde_json::Value) -> Option<Vec<String>> {
        let errors = body.get("errors")?.as_array()?;
        if errors.is_empty() {
            return None;
        }

        Some(
            errors
                .iter()
                .map(|error| {
                    error
                        .get("message")
                        .and_then(serde_json::Value::as_str)
                        .map_or_else(|| error.to_string(), String::from)
                })
                .collect(),
        )
    }
}
