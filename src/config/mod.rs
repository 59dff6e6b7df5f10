//! Configuration types for the IKEA API client.
//!
//! # Overview
//!
//! - [`IkeaConfig`]: Locale and host settings shared by every endpoint
//! - [`IkeaConfigBuilder`]: A builder for constructing [`IkeaConfig`] instances
//! - [`AccessToken`]: A bearer token with masked debug output
//! - [`CountryCode`] / [`LanguageCode`]: Two-letter locale codes
//! - [`ZipCode`]: A validated postal code
//! - [`HostUrl`]: A validated URL with scheme and host
//!
//! # Example
//!
//! ```rust
//! use ikea_api::{IkeaConfig, CountryCode, LanguageCode};
//!
//! let config = IkeaConfig::builder()
//!     .country_code(CountryCode::new("de").unwrap())
//!     .language_code(LanguageCode::new("de").unwrap())
//!     .build();
//!
//! assert_eq!(config.base_locale_url(), "https://www.ikea.com/de/de");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, CountryCode, HostUrl, LanguageCode, ZipCode};

/// Public storefront used for product, category and image links.
pub const DEFAULT_BASE_URL: &str = "https://www.ikea.com";

/// Country used when none is configured.
pub const DEFAULT_COUNTRY_CODE: &str = "ru";

/// Language used when none is configured.
pub const DEFAULT_LANGUAGE_CODE: &str = "ru";

/// Locale and host configuration for the IKEA API client.
///
/// Configuration is instance-based and passed explicitly to every endpoint
/// constructor. It is `Clone`, `Send` and `Sync`.
///
/// # API host override
///
/// Every endpoint talks to its own vendor host. When `api_host` is set, the
/// scheme, host and port of every endpoint are replaced with the override's
/// origin while the endpoint's base path is kept. This is how requests are
/// routed through a proxy or to a local mock server.
#[derive(Clone, Debug)]
pub struct IkeaConfig {
    country_code: CountryCode,
    language_code: LanguageCode,
    base_url: HostUrl,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl IkeaConfig {
    /// Creates a new builder for constructing an `IkeaConfig`.
    #[must_use]
    pub fn builder() -> IkeaConfigBuilder {
        IkeaConfigBuilder::new()
    }

    /// Returns the country code.
    #[must_use]
    pub const fn country_code(&self) -> &CountryCode {
        &self.country_code
    }

    /// Returns the language code.
    #[must_use]
    pub const fn language_code(&self) -> &LanguageCode {
        &self.language_code
    }

    /// Returns the storefront base URL.
    #[must_use]
    pub const fn base_url(&self) -> &HostUrl {
        &self.base_url
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns `{base_url}/{country}/{language}`, the root of localized
    /// storefront links.
    #[must_use]
    pub fn base_locale_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.base_url, self.country_code, self.language_code
        )
    }

    /// Returns the `Accept-Language` value, e.g. `ru-RU`.
    #[must_use]
    pub fn accept_language(&self) -> String {
        format!(
            "{}-{}",
            self.language_code,
            self.country_code.as_ref().to_uppercase()
        )
    }
}

impl Default for IkeaConfig {
    fn default() -> Self {
        IkeaConfigBuilder::new().build()
    }
}

// Verify IkeaConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IkeaConfig>();
};

/// Builder for constructing [`IkeaConfig`] instances.
///
/// # Defaults
///
/// - `country_code`: `ru`
/// - `language_code`: `ru`
/// - `base_url`: `https://www.ikea.com`
/// - `api_host`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct IkeaConfigBuilder {
    country_code: Option<CountryCode>,
    language_code: Option<LanguageCode>,
    base_url: Option<HostUrl>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl IkeaConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the country code.
    #[must_use]
    pub fn country_code(mut self, code: CountryCode) -> Self {
        self.country_code = Some(code);
        self
    }

    /// Sets the language code.
    #[must_use]
    pub fn language_code(mut self, code: LanguageCode) -> Self {
        self.language_code = Some(code);
        self
    }

    /// Sets the storefront base URL used for links in parsed results.
    #[must_use]
    pub fn base_url(mut self, url: HostUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Routes every endpoint through the given origin.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`IkeaConfig`], filling unset fields with defaults.
    #[must_use]
    pub fn build(self) -> IkeaConfig {
        IkeaConfig {
            country_code: self
                .country_code
                .unwrap_or_else(|| CountryCode(DEFAULT_COUNTRY_CODE.to_string())),
            language_code: self
                .language_code
                .unwrap_or_else(|| LanguageCode(DEFAULT_LANGUAGE_CODE.to_string())),
            base_url: self.base_url.unwrap_or_else(HostUrl::default_base_url),
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}
