//! The order capture service: checkouts and delivery options.

use serde_json::{json, Value};

use super::{resource_id, send, ApiError, Cart, ErrorHandler};
use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::config::{AccessToken, IkeaConfig, ZipCode};
use crate::parsers::cart::parse_checkout_items;
use crate::types::CheckoutItem;

const RU_HOST: &str = "ordercapture.ikea.ru";
const HOST: &str = "ordercapture.ingka.com";
const CLIENT_ID: &str = "af2525c3-1779-49be-8d7d-adf32cac1934";
const CHECKOUT_CLIENT_ID: &str = "6a38e438-0bbb-4d4f-bc55-eb314c2e8e23";

const WRONG_ZIP_CODE: i64 = 60004;
const NO_DELIVERY_OPTIONS: [i64; 2] = [60005, 60006];

/// Client for the order capture service.
///
/// Used to find out which delivery services are available for the current
/// cart at a given zip code. The cart is read through a [`Cart`] client built
/// from the same token and configuration.
///
/// # Example
///
/// ```rust,ignore
/// use ikea_api::{AccessToken, IkeaConfig, OrderCapture, ZipCode};
///
/// let token = AccessToken::new("...")?;
/// let order_capture = OrderCapture::new(&token, ZipCode::new(101_000)?, &IkeaConfig::default());
///
/// let services = order_capture.get_delivery_services().await?;
/// ```
#[derive(Debug)]
pub struct OrderCapture {
    client: HttpClient,
    cart: Cart,
    zip_code: ZipCode,
    language_code: String,
}

// Verify OrderCapture is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OrderCapture>();
};

impl ErrorHandler for OrderCapture {
    fn handle_error(&self, _status: u16, body: &Value) -> Option<ApiError> {
        let code = body.get("errorCode")?.as_i64()?;
        if code == WRONG_ZIP_CODE {
            Some(ApiError::WrongZipCode)
        } else if NO_DELIVERY_OPTIONS.contains(&code) {
            Some(ApiError::NoDeliveryOptionsAvailable)
        } else {
            None
        }
    }
}

impl OrderCapture {
    /// Creates an order capture client for `zip_code`.
    #[must_use]
    pub fn new(token: &AccessToken, zip_code: ZipCode, config: &IkeaConfig) -> Self {
        let country: &str = config.country_code().as_ref();
        let host = if country == "ru" { RU_HOST } else { HOST };
        let client = HttpClient::new(host, format!("/ordercaptureapi/{country}"), Some(token), config)
            .with_header("X-Client-Id", CLIENT_ID);

        Self {
            client,
            cart: Cart::new(token, config),
            zip_code,
            language_code: config.language_code().to_string(),
        }
    }

    /// Returns the service URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.client.url_for("")
    }

    /// Returns the zip code delivery options are requested for.
    #[must_use]
    pub const fn zip_code(&self) -> &ZipCode {
        &self.zip_code
    }

    /// Reads the cart and returns its items in checkout shape.
    ///
    /// A cart body that carries no usable items yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the cart request fails.
    pub async fn checkout_items(&self) -> Result<Vec<CheckoutItem>, ApiError> {
        let body = self.cart.show().await?;
        Ok(parse_checkout_items(&body))
    }

    /// Opens a checkout for `items` and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingField`] if the response has no
    /// `resourceId`, or another [`ApiError`] if the request fails.
    pub async fn checkout(&self, items: &[CheckoutItem]) -> Result<String, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Post, "checkouts")
            .body(json!({
                "shoppingType": "ONLINE",
                "channel": "WEBAPP",
                "checkoutType": "STANDARD",
                "languageCode": self.language_code,
                "items": items,
                "deliveryArea": null,
            }))
            .header("X-Client-Id", CHECKOUT_CLIENT_ID)
            .build()?;

        let body = send(self, &self.client, request).await?;
        resource_id(&body, "checkout")
    }

    /// Creates a delivery area for the zip code within `checkout` and returns
    /// its id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::WrongZipCode`] if the zip code is not served,
    /// [`ApiError::MissingField`] if the response has no `resourceId`, or
    /// another [`ApiError`] if the request fails.
    pub async fn delivery_area(&self, checkout: &str) -> Result<String, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Post, format!("checkouts/{checkout}/delivery-areas"))
            .body(json!({
                "zipCode": self.zip_code,
                "enableRangeOfDays": false,
            }))
            .build()?;

        let body = send(self, &self.client, request).await?;
        resource_id(&body, "delivery area")
    }

    /// Lists the delivery services available for the cart at the zip code.
    ///
    /// Reads the cart, opens a checkout, creates a delivery area and fetches
    /// its services, one request after the other.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyCart`] before contacting order capture if the
    /// cart has no items, [`ApiError::WrongZipCode`] or
    /// [`ApiError::NoDeliveryOptionsAvailable`] for the matching vendor codes,
    /// or another [`ApiError`] if a request fails.
    pub async fn get_delivery_services(&self) -> Result<Value, ApiError> {
        let items = self.checkout_items().await?;
        if items.is_empty() {
            return Err(ApiError::EmptyCart);
        }

        let checkout = self.checkout(&items).await?;
        tracing::debug!(%checkout, "Checkout created");

        let delivery_area = self.delivery_area(&checkout).await?;
        tracing::debug!(%delivery_area, "Delivery area created");

        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("checkouts/{checkout}/delivery-areas/{delivery_area}/delivery-services"),
        )
        .build()?;

        send(self, &self.client, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CountryCode;

    fn create_order_capture(config: &IkeaConfig) -> OrderCapture {
        let token = AccessToken::new("token").unwrap();
        OrderCapture::new(&token, ZipCode::new("101000").unwrap(), config)
    }

    #[test]
    fn test_endpoint_for_russia() {
        let order_capture = create_order_capture(&IkeaConfig::default());
        assert_eq!(
            order_capture.endpoint(),
            "https://ordercapture.ikea.ru/ordercaptureapi/ru"
        );
    }

    #[test]
    fn test_endpoint_for_other_countries() {
        let config = IkeaConfig::builder()
            .country_code(CountryCode::new("de").unwrap())
            .build();
        let order_capture = create_order_capture(&config);
        assert_eq!(
            order_capture.endpoint(),
            "https://ordercapture.ingka.com/ordercaptureapi/de"
        );
    }

    #[test]
    fn test_handle_error_maps_vendor_codes() {
        let order_capture = create_order_capture(&IkeaConfig::default());

        assert!(matches!(
            order_capture.handle_error(400, &json!({"errorCode": 60004})),
            Some(ApiError::WrongZipCode)
        ));
        assert!(matches!(
            order_capture.handle_error(400, &json!({"errorCode": 60005})),
            Some(ApiError::NoDeliveryOptionsAvailable)
        ));
        assert!(matches!(
            order_capture.handle_error(200, &json!({"errorCode": 60006})),
            Some(ApiError::NoDeliveryOptionsAvailable)
        ));
        assert!(order_capture.handle_error(400, &json!({"errorCode": 1})).is_none());
        assert!(order_capture.handle_error(400, &json!({"message": "x"})).is_none());
    }
}
