//! HTTP client types for IKEA API communication.
//!
//! This module is the generic API base every endpoint is built on. It
//! performs authenticated requests and keeps enough of each failed response
//! for the endpoint layer to map vendor error codes to typed errors.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client bound to one vendor host
//! - [`HttpRequest`]: A request to be sent
//! - [`HttpResponse`]: A parsed response
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`graphql::GraphqlClient`]: GraphQL operations on top of [`HttpClient`]
//! - [`graphql::GraphqlError`]: GraphQL-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use ikea_api::{AccessToken, IkeaConfig};
//! use ikea_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = IkeaConfig::default();
//! let token = AccessToken::new("token").unwrap();
//! let client = HttpClient::new("ordercapture.ikea.ru", "/ordercaptureapi/ru", Some(&token), &config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "checkouts/abc")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Every request is sent once and failures propagate to the caller.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError};
