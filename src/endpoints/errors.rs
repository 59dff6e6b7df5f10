//! Error type returned by the endpoint clients and wrappers.
//!
//! Vendor error codes are mapped to semantic variants by each endpoint's
//! [`ErrorHandler`](crate::endpoints::ErrorHandler):
//!
//! - **`60004`** (order capture): [`ApiError::WrongZipCode`]
//! - **`60005`, `60006`** (order capture): [`ApiError::NoDeliveryOptionsAvailable`]
//! - **HTTP 401** (any endpoint): [`ApiError::NotAuthenticated`]
//! - **Other non-2xx**: [`ApiError::Http`] or [`ApiError::Graphql`]
//!
//! # Example
//!
//! ```rust,ignore
//! use ikea_api::{ApiError, OrderCapture};
//!
//! match order_capture.get_delivery_services().await {
//!     Ok(services) => println!("{services}"),
//!     Err(ApiError::WrongZipCode) => println!("Check the zip code"),
//!     Err(ApiError::NoDeliveryOptionsAvailable) => println!("No delivery here"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::{GraphqlError, HttpError};
use crate::parsers::ParseError;

/// Error type for endpoint operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The zip code is not served (order capture code `60004`).
    #[error("Wrong zip code")]
    WrongZipCode,

    /// There are no delivery options for the cart and zip code (order capture
    /// codes `60005` and `60006`).
    #[error("No delivery options available")]
    NoDeliveryOptionsAvailable,

    /// The token was rejected (HTTP 401).
    #[error("Not authenticated")]
    NotAuthenticated,

    /// A checkout was requested for an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A successful response lacked a field the next step depends on.
    #[error("No {field} in {context} response")]
    MissingField {
        /// The missing field, e.g. `"resourceId"`.
        field: &'static str,
        /// The operation whose response lacked it, e.g. `"checkout"`.
        context: &'static str,
    },

    /// A GraphQL-level error occurred.
    #[error(transparent)]
    Graphql(GraphqlError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(HttpError),

    /// The response could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ApiError {
    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::Response(e))
            | Self::Graphql(GraphqlError::Http(HttpError::Response(e))) => {
                e.error_reference.as_deref()
            }
            _ => None,
        }
    }
}

impl From<crate::clients::InvalidHttpRequestError> for ApiError {
    fn from(error: crate::clients::InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}
