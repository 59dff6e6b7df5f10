//! Configuration error types for the IKEA API client.
//!
//! All validated newtypes return `Result<T, ConfigError>` from their
//! constructors so invalid input is rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use ikea_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid IKEA bearer token.")]
    EmptyAccessToken,

    /// Country code is invalid.
    #[error("Invalid country code '{code}'. Expected two ASCII letters (e.g., 'ru').")]
    InvalidCountryCode {
        /// The invalid code that was provided.
        code: String,
    },

    /// Language code is invalid.
    #[error("Invalid language code '{code}'. Expected two ASCII letters (e.g., 'ru').")]
    InvalidLanguageCode {
        /// The invalid code that was provided.
        code: String,
    },

    /// Zip code is invalid.
    #[error("Invalid zip code '{zip_code}'. Expected up to 10 letters, digits, spaces or hyphens.")]
    InvalidZipCode {
        /// The invalid zip code that was provided.
        zip_code: String,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://www.ikea.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
