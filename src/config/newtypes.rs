//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An IKEA bearer token.
///
/// The token is obtained outside this crate (guest or authorized login) and
/// sent as `Authorization: Bearer <token>`.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)`.
///
/// # Example
///
/// ```rust
/// use ikea_api::AccessToken;
///
/// let token = AccessToken::new("eyJhbGciOi...").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty or blank.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token.to_string()))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

fn is_two_letter_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// A two-letter country code (e.g. `ru`, `de`), normalized to lowercase.
///
/// # Example
///
/// ```rust
/// use ikea_api::CountryCode;
///
/// let country = CountryCode::new("RU").unwrap();
/// assert_eq!(country.as_ref(), "ru");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CountryCode(pub(super) String);

impl CountryCode {
    /// Creates a new validated country code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCountryCode`] unless the code is exactly
    /// two ASCII letters.
    pub fn new(code: impl Into<String>) -> Result<Self, ConfigError> {
        let code: String = code.into();
        let code = code.trim().to_lowercase();
        if !is_two_letter_code(&code) {
            return Err(ConfigError::InvalidCountryCode { code });
        }
        Ok(Self(code))
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A two-letter language code (e.g. `ru`, `en`), normalized to lowercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LanguageCode(pub(super) String);

impl LanguageCode {
    /// Creates a new validated language code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLanguageCode`] unless the code is exactly
    /// two ASCII letters.
    pub fn new(code: impl Into<String>) -> Result<Self, ConfigError> {
        let code: String = code.into();
        let code = code.trim().to_lowercase();
        if !is_two_letter_code(&code) {
            return Err(ConfigError::InvalidLanguageCode { code });
        }
        Ok(Self(code))
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A postal code used to scope delivery options.
///
/// Accepts up to 10 characters of ASCII letters, digits, spaces and hyphens,
/// which covers the formats used across IKEA markets (`101000`, `10115`,
/// `SW1A 1AA`, `00-001`).
///
/// # Serialization
///
/// `ZipCode` serializes to the bare string and validates on deserialization.
///
/// # Example
///
/// ```rust
/// use ikea_api::ZipCode;
///
/// let zip = ZipCode::new(101000).unwrap();
/// assert_eq!(zip.as_ref(), "101000");
/// assert!(ZipCode::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZipCode(String);

impl ZipCode {
    const MAX_LEN: usize = 10;

    /// Creates a new validated zip code from anything printable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidZipCode`] if the value is empty, too long,
    /// or contains characters other than letters, digits, spaces or hyphens.
    pub fn new(zip_code: impl ToString) -> Result<Self, ConfigError> {
        let zip_code = zip_code.to_string().trim().to_string();

        let valid = !zip_code.is_empty()
            && zip_code.len() <= Self::MAX_LEN
            && zip_code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-');
        if !valid {
            return Err(ConfigError::InvalidZipCode { zip_code });
        }

        Ok(Self(zip_code))
    }
}

impl AsRef<str> for ZipCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ZipCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ZipCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated URL with scheme and host.
///
/// Used for the storefront base URL and for the optional API host override.
///
/// # Example
///
/// ```rust
/// use ikea_api::HostUrl;
///
/// let url = HostUrl::new("http://localhost:3000/some/path").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("localhost"));
/// assert_eq!(url.origin(), "http://localhost:3000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
    origin_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL. A trailing slash is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Origin also keeps the port
        let origin_end = remainder
            .find(['/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
            origin_end,
        })
    }

    /// The storefront URL used when none is configured.
    pub(super) fn default_base_url() -> Self {
        let url = super::DEFAULT_BASE_URL.to_string();
        let len = url.len();
        Self {
            url,
            scheme_end: "https".len(),
            host_start: "https://".len(),
            host_end: len,
            origin_end: len,
        }
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }

    /// Returns `scheme://host[:port]` without any path.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.url[..self.origin_end]
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
