//! Endpoint clients for the IKEA services.
//!
//! - [`Cart`]: The shopping cart (GraphQL)
//! - [`OrderCapture`]: Checkout and delivery options (REST)
//! - [`Purchases`]: Purchase history and order details (GraphQL)
//! - [`IowsItems`]: The IOWS item catalog (REST)
//!
//! Each endpoint returns the raw response body; the functions in
//! [`crate::wrappers`] combine a call with its parser.
//!
//! # Error dispatch
//!
//! Every response, successful or not, is first offered to the endpoint's
//! [`ErrorHandler`]. Only when the handler does not claim it does generic
//! handling apply: HTTP 401 becomes [`ApiError::NotAuthenticated`] and other
//! failures are wrapped as they are.

mod cart;
mod errors;
mod iows_items;
mod order_capture;
mod purchases;

pub use cart::Cart;
pub use errors::ApiError;
pub use iows_items::IowsItems;
pub use order_capture::OrderCapture;
pub use purchases::Purchases;

use serde_json::Value;

use crate::clients::{GraphqlClient, GraphqlError, HttpClient, HttpError, HttpRequest, HttpResponse};

/// Maps vendor-specific error payloads to [`ApiError`]s.
pub trait ErrorHandler {
    /// Inspects a response and returns the error it represents, if any.
    ///
    /// Called for every response before generic handling. The default
    /// implementation claims nothing.
    fn handle_error(&self, status: u16, body: &Value) -> Option<ApiError> {
        let _ = (status, body);
        None
    }
}

fn claim<H: ErrorHandler + ?Sized>(handler: &H, status: u16, body: &Value) -> Option<ApiError> {
    let api_error = handler.handle_error(status, body)?;
    tracing::warn!(code = status, "Vendor error: {api_error}");
    Some(api_error)
}

fn dispatch<H: ErrorHandler + ?Sized>(handler: &H, error: HttpError) -> Result<ApiError, HttpError> {
    if let HttpError::Response(response) = &error {
        if let Some(api_error) = claim(handler, response.code, &response.body) {
            return Ok(api_error);
        }
        if response.code == 401 {
            return Ok(ApiError::NotAuthenticated);
        }
    }
    Err(error)
}

/// Returns the body of a successful response unless `handler` claims it.
pub(crate) fn accept<H: ErrorHandler + ?Sized>(
    handler: &H,
    response: HttpResponse,
) -> Result<Value, ApiError> {
    match claim(handler, response.code, &response.body) {
        Some(api_error) => Err(api_error),
        None => Ok(response.body),
    }
}

/// Converts a failed REST request into an [`ApiError`].
pub(crate) fn reject<H: ErrorHandler + ?Sized>(handler: &H, error: HttpError) -> ApiError {
    dispatch(handler, error).unwrap_or_else(ApiError::Http)
}

/// Sends a REST request, routing the outcome through `handler`.
pub(crate) async fn send<H: ErrorHandler + Sync + ?Sized>(
    handler: &H,
    client: &HttpClient,
    request: HttpRequest,
) -> Result<Value, ApiError> {
    match client.request(request).await {
        Ok(response) => accept(handler, response),
        Err(error) => Err(reject(handler, error)),
    }
}

/// Runs a GraphQL operation, routing the outcome through `handler`.
pub(crate) async fn query<H: ErrorHandler + Sync + ?Sized>(
    handler: &H,
    client: &GraphqlClient,
    document: &str,
    variables: Value,
) -> Result<Value, ApiError> {
    let outcome = client.query(document, Some(variables)).await;
    settle(handler, outcome)
}

/// Routes a GraphQL outcome through `handler`.
///
/// Bodies with an `errors` array are offered to the handler before they
/// become [`GraphqlError::Query`].
fn settle<H: ErrorHandler + ?Sized>(
    handler: &H,
    outcome: Result<Value, GraphqlError>,
) -> Result<Value, ApiError> {
    match outcome {
        Ok(body) => claim(handler, 200, &body).map_or(Ok(body), Err),
        Err(GraphqlError::Http(error)) => {
            Err(dispatch(handler, error).unwrap_or_else(|e| ApiError::Graphql(GraphqlError::Http(e))))
        }
        Err(GraphqlError::Query { messages, body }) => Err(claim(handler, 200, &body)
            .unwrap_or_else(|| ApiError::Graphql(GraphqlError::Query { messages, body }))),
    }
}

/// Reads `resourceId` from a successful order capture response.
pub(crate) fn resource_id(body: &Value, context: &'static str) -> Result<String, ApiError> {
    body.get("resourceId")
        .and_then(|id| match id {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        })
        .ok_or(ApiError::MissingField {
            field: "resourceId",
            context,
        })
}
