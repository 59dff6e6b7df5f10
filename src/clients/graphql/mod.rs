//! GraphQL client for the IKEA cart and purchase history services.
//!
//! - [`GraphqlClient`]: Posts queries and mutations, returns the raw body
//! - [`GraphqlError`]: HTTP failures and GraphQL-level `errors`
//!
//! # Response Structure
//!
//! A successful body contains `data`. A body whose `errors` array is
//! non-empty is turned into [`GraphqlError::Query`] regardless of the HTTP
//! status.

mod client;
mod errors;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
