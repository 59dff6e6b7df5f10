//! The IOWS item catalog.

use serde_json::Value;

use super::{accept, reject, send, ApiError, ErrorHandler};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::IkeaConfig;

const HOST: &str = "iows.ikea.com";
const ACCEPT: &str = "application/vnd.ikea.iows+json;version=2.0";
const CONSUMER: &str = "MAMMUT";
const CONTRACT: &str = "37249";

/// Client for the IOWS item catalog.
///
/// The catalog is public; no token is sent. Items are looked up as single
/// articles first and as combinations when no such article exists.
///
/// # Example
///
/// ```rust,ignore
/// use ikea_api::{IkeaConfig, IowsItems};
///
/// let items = IowsItems::new(&IkeaConfig::default());
/// let body = items.get_item("40299687").await?;
/// ```
#[derive(Debug)]
pub struct IowsItems {
    client: HttpClient,
    config: IkeaConfig,
}

// Verify IowsItems is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IowsItems>();
};

impl ErrorHandler for IowsItems {}

impl IowsItems {
    /// Creates a catalog client.
    #[must_use]
    pub fn new(config: &IkeaConfig) -> Self {
        let base_path = format!(
            "/retail/iows/{}/{}",
            config.country_code(),
            config.language_code()
        );
        let client = HttpClient::new(HOST, base_path, None, config)
            .with_header("Accept", ACCEPT)
            .with_header("Consumer", CONSUMER)
            .with_header("Contract", CONTRACT);

        Self {
            client,
            config: config.clone(),
        }
    }

    /// Returns the service URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.client.url_for("")
    }

    /// Returns the configuration links in parsed items are built from.
    #[must_use]
    pub const fn config(&self) -> &IkeaConfig {
        &self.config
    }

    /// Fetches an item, falling back to the combination (`spr`) catalog when
    /// no single article (`art`) has the code.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails for a reason other than a
    /// missing article, or if the combination lookup fails.
    pub async fn get_item(&self, item_code: &str) -> Result<Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, format!("catalog/items/art,{item_code}"))
            .build()?;

        match self.client.request(request).await {
            Ok(response) => accept(self, response),
            Err(HttpError::Response(error)) if error.code == 404 => {
                tracing::debug!(%item_code, "No such article, trying combinations");
                let request =
                    HttpRequest::builder(HttpMethod::Get, format!("catalog/items/spr,{item_code}"))
                        .build()?;
                send(self, &self.client, request).await
            }
            Err(error) => Err(reject(self, error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CountryCode, LanguageCode};

    #[test]
    fn test_endpoint() {
        let items = IowsItems::new(&IkeaConfig::default());
        assert_eq!(items.endpoint(), "https://iows.ikea.com/retail/iows/ru/ru");
    }

    #[test]
    fn test_endpoint_follows_locale() {
        let config = IkeaConfig::builder()
            .country_code(CountryCode::new("de").unwrap())
            .language_code(LanguageCode::new("en").unwrap())
            .build();
        let items = IowsItems::new(&config);
        assert_eq!(items.endpoint(), "https://iows.ikea.com/retail/iows/de/en");
    }

    #[test]
    fn test_iows_headers() {
        let items = IowsItems::new(&IkeaConfig::default());
        let headers = items.client.default_headers();

        assert_eq!(headers.get("Accept").map(String::as_str), Some(ACCEPT));
        assert_eq!(headers.get("Consumer").map(String::as_str), Some("MAMMUT"));
        assert_eq!(headers.get("Contract").map(String::as_str), Some("37249"));
        assert!(!headers.contains_key("Authorization"));
    }
}
