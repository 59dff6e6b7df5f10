//! # IKEA API Rust Client
//!
//! A Rust client for IKEA's e-commerce services: the shopping cart, order
//! capture (checkout and delivery options), purchase history and the IOWS
//! item catalog.
//!
//! ## Overview
//!
//! This crate provides:
//! - Locale and host configuration via [`IkeaConfig`] and [`IkeaConfigBuilder`]
//! - Validated newtypes for tokens, locale codes and zip codes
//! - Async HTTP and GraphQL clients ([`clients`])
//! - Endpoint clients that map vendor error codes to [`ApiError`] ([`endpoints`])
//! - Parsers that reshape vendor JSON into the types in [`types`] ([`parsers`])
//! - Wrappers combining a call with its parser ([`wrappers`])
//!
//! Callers supply a bearer token; obtaining one is out of scope.
//!
//! ## Quick Start
//!
//! ```rust
//! use ikea_api::{AccessToken, CountryCode, IkeaConfig, LanguageCode};
//!
//! let config = IkeaConfig::builder()
//!     .country_code(CountryCode::new("ru").unwrap())
//!     .language_code(LanguageCode::new("ru").unwrap())
//!     .build();
//!
//! let token = AccessToken::new("your-token").unwrap();
//! assert_eq!(format!("{token:?}"), "AccessToken(*****)");
//! ```
//!
//! ## Delivery Options
//!
//! ```rust,ignore
//! use ikea_api::{AccessToken, ApiError, IkeaConfig, OrderCapture, ZipCode};
//!
//! let config = IkeaConfig::default();
//! let token = AccessToken::new("your-token")?;
//! let order_capture = OrderCapture::new(&token, ZipCode::new(101_000)?, &config);
//!
//! match order_capture.get_delivery_services().await {
//!     Ok(services) => println!("{services}"),
//!     Err(ApiError::EmptyCart) => println!("Add something to the cart first"),
//!     Err(ApiError::WrongZipCode) => println!("Zip code is not served"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Catalog Items
//!
//! ```rust,ignore
//! use ikea_api::{wrappers, IkeaConfig, IowsItems};
//!
//! let items = IowsItems::new(&IkeaConfig::default());
//! let item = wrappers::get_item(&items, "40299687").await?;
//! println!("{}: {} ({} kg)", item.item_code, item.name, item.weight);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All clients are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No retries**: Every failure is returned to the caller as it happened

pub mod clients;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod parsers;
pub mod types;
pub mod wrappers;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, CountryCode, HostUrl, IkeaConfig, IkeaConfigBuilder, LanguageCode, ZipCode,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    GraphqlClient, GraphqlError, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError,
};

// Re-export endpoint types
pub use endpoints::{ApiError, Cart, ErrorHandler, IowsItems, OrderCapture, Purchases};
pub use parsers::ParseError;
