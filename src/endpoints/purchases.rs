//! The purchase history service.

use serde_json::{json, Value};

use super::{query, ApiError, ErrorHandler};
use crate::clients::{GraphqlClient, HttpClient};
use crate::config::{AccessToken, IkeaConfig};

const HOST: &str = "purchase-history.ocp.ingka.ikea.com";

const HISTORY: &str = "
query History($skip: Int!, $take: Int!) {
  history(skip: $skip, take: $take) {
    id
    dateAndTime { time date formattedLocal formattedShortDate formattedLongDate formattedShortDateTime formattedLongDateTime }
    status
    storeName
    totalCost { code value formatted }
  }
}
";

const STATUS_BANNER_ORDER: &str = "
query StatusBannerOrder($orderNumber: String!, $liteId: String) {
  order(orderNumber: $orderNumber, liteId: $liteId) {
    id
    dateAndTime { time date formattedLocal formattedShortDate formattedLongDate formattedShortDateTime formattedLongDateTime }
    status
    deliveryMethods {
      id
      serviceId
      status
      type
      deliveryDate {
        actual { time date formattedLocal formattedShortDate formattedLongDate formattedShortDateTime formattedLongDateTime }
        estimatedFrom { time date formattedLocal formattedShortDate formattedLongDate formattedShortDateTime formattedLongDateTime }
        estimatedTo { time date formattedLocal formattedShortDate formattedLongDate formattedShortDateTime formattedLongDateTime }
      }
    }
  }
}
";

const COSTS_ORDER: &str = "
query CostsOrder($orderNumber: String!, $liteId: String) {
  order(orderNumber: $orderNumber, liteId: $liteId) {
    id
    costs {
      total { code value formatted }
      delivery { code value formatted }
      assembly { code value formatted }
      discount { code value formatted }
      sub { code value formatted }
      tax { code value formatted }
      taxRates { percentage name amount { code value formatted } }
    }
  }
}
";

/// Client for the purchase history service.
///
/// # Example
///
/// ```rust,ignore
/// use ikea_api::{AccessToken, IkeaConfig, Purchases};
///
/// let token = AccessToken::new("...")?;
/// let purchases = Purchases::new(&token, &IkeaConfig::default());
///
/// let history = purchases.history(5, 0).await?;
/// let (status_banner, costs) = purchases.order_info("111111110", None).await?;
/// ```
#[derive(Debug)]
pub struct Purchases {
    client: GraphqlClient,
    language_code: String,
}

// Verify Purchases is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Purchases>();
};

impl ErrorHandler for Purchases {}

impl Purchases {
    /// Creates a purchase history client authenticated with `token`.
    #[must_use]
    pub fn new(token: &AccessToken, config: &IkeaConfig) -> Self {
        let http_client = HttpClient::new(HOST, "", Some(token), config);

        Self {
            client: GraphqlClient::new(http_client, "graphql"),
            language_code: config.language_code().to_string(),
        }
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.client.endpoint()
    }

    /// Returns the language store names are translated to.
    #[must_use]
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// Fetches a page of the purchase history.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn history(&self, take: u32, skip: u32) -> Result<Value, ApiError> {
        query(self, &self.client, HISTORY, json!({ "take": take, "skip": skip })).await
    }

    /// Fetches the purchase and delivery dates of an order.
    ///
    /// `email` identifies orders placed without an account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn status_banner(
        &self,
        order_number: &str,
        email: Option<&str>,
    ) -> Result<Value, ApiError> {
        query(self, &self.client, STATUS_BANNER_ORDER, order_variables(order_number, email)).await
    }

    /// Fetches the costs of an order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn costs(&self, order_number: &str, email: Option<&str>) -> Result<Value, ApiError> {
        query(self, &self.client, COSTS_ORDER, order_variables(order_number, email)).await
    }

    /// Runs [`status_banner`](Self::status_banner) then [`costs`](Self::costs)
    /// for the same order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] encountered.
    pub async fn order_info(
        &self,
        order_number: &str,
        email: Option<&str>,
    ) -> Result<(Value, Value), ApiError> {
        let status_banner = self.status_banner(order_number, email).await?;
        let costs = self.costs(order_number, email).await?;
        Ok((status_banner, costs))
    }
}

fn order_variables(order_number: &str, email: Option<&str>) -> Value {
    let mut variables = json!({ "orderNumber": order_number });
    if let Some(email) = email {
        variables["liteId"] = json!(email);
    }
    variables
}
