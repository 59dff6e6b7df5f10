//! The shopping cart service.

use serde_json::{json, Value};

use super::{query, ApiError, ErrorHandler};
use crate::clients::{GraphqlClient, HttpClient};
use crate::config::{AccessToken, IkeaConfig};

const HOST: &str = "cart.oneweb.ingka.com";
const CLIENT_ID: &str = "66e4684a-dbcb-499c-8639-a72fa50ac0c3";

const CART_PROPS: &str = "
fragment CartProps on Cart {
  currency
  checksum
  context { userId isAnonymous retailId }
  coupon { code validFrom validTo description }
  items {
    itemNo
    quantity
    type
    fees { weee eco }
    isFamilyItem
    childItems { itemNo }
    regularPrice {
      unit { inclTax exclTax tax validFrom validTo isLowerPrice isTimeRestrictedOffer previousPrice }
      subTotalExclDiscount { inclTax exclTax tax }
      subTotalInclDiscount { inclTax exclTax tax }
    }
    familyPrice {
      unit { inclTax exclTax tax validFrom validTo }
      subTotalExclDiscount { inclTax exclTax tax }
      subTotalInclDiscount { inclTax exclTax tax }
    }
    product {
      name
      globalId
      isNew
      category
      description
      isBreathTaking
      formattedItemNo
      displayUnit { type imperial { unit value } metric { unit value } }
      unitCode
      measurements { metric imperial }
      technicalDetails { labelUrl }
      images { url quality width }
    }
  }
  regularTotalPrice {
    totalExclDiscount { inclTax exclTax tax }
    totalInclDiscount { inclTax exclTax tax }
    totalDiscount { amount }
    totalSavingsDetails { familyDiscounts }
  }
  familyTotalPrice {
    totalExclDiscount { inclTax exclTax tax }
    totalInclDiscount { inclTax exclTax tax }
    totalDiscount { amount }
    totalSavingsDetails { familyDiscounts }
  }
}
";

const SHOW: &str = "
query Cart($languageCode: String) {
  cart(languageCode: $languageCode) { ...CartProps }
}
";

const CLEAR: &str = "
mutation ClearItems($languageCode: String) {
  clearItems(languageCode: $languageCode) { ...CartProps }
}
";

const ADD_ITEMS: &str = "
mutation AddItems($items: [AddItemInput!]!, $languageCode: String) {
  addItems(items: $items, languageCode: $languageCode) { quantity }
}
";

const UPDATE_ITEMS: &str = "
mutation UpdateItems($items: [UpdateItemInput!]!, $languageCode: String) {
  updateItems(items: $items, languageCode: $languageCode) { ...CartProps }
}
";

const COPY_ITEMS: &str = "
mutation CopyItems($sourceUserId: ID!, $languageCode: String) {
  copyItems(sourceUserId: $sourceUserId, languageCode: $languageCode) { quantity }
}
";

const REMOVE_ITEMS: &str = "
mutation RemoveItems($itemNos: [ID!]!, $languageCode: String) {
  removeItems(itemNos: $itemNos, languageCode: $languageCode) { ...CartProps }
}
";

const SET_COUPON: &str = "
mutation SetCoupon($code: String!, $languageCode: String) {
  setCoupon(code: $code, languageCode: $languageCode) { ...CartProps }
}
";

const CLEAR_COUPON: &str = "
mutation ClearCoupon($languageCode: String) {
  clearCoupon(languageCode: $languageCode) { ...CartProps }
}
";

/// Client for the shopping cart.
///
/// Every operation sends the configured language as the `languageCode`
/// variable and returns the raw GraphQL response body.
///
/// # Example
///
/// ```rust,ignore
/// use ikea_api::{AccessToken, Cart, IkeaConfig};
///
/// let token = AccessToken::new("...")?;
/// let cart = Cart::new(&token, &IkeaConfig::default());
///
/// cart.add_items(&[("40299687", 2)]).await?;
/// let body = cart.show().await?;
/// ```
#[derive(Debug)]
pub struct Cart {
    client: GraphqlClient,
    language_code: String,
}

// Verify Cart is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Cart>();
};

impl ErrorHandler for Cart {}

impl Cart {
    /// Creates a cart client authenticated with `token`.
    #[must_use]
    pub fn new(token: &AccessToken, config: &IkeaConfig) -> Self {
        let http_client =
            HttpClient::new(HOST, "", Some(token), config).with_header("X-Client-Id", CLIENT_ID);

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

    async fn run(&self, operation: &str, mut variables: Value) -> Result<Value, ApiError> {
        variables["languageCode"] = json!(self.language_code);
        let document = if operation.contains("...CartProps") {
            format!("{operation}{CART_PROPS}")
        } else {
            operation.to_string()
        };
        query(self, &self.client, &document, variables).await
    }

    /// Fetches the cart.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn show(&self) -> Result<Value, ApiError> {
        self.run(SHOW, json!({})).await
    }

    /// Removes every item from the cart.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn clear(&self) -> Result<Value, ApiError> {
        self.run(CLEAR, json!({})).await
    }

    /// Adds `(item code, quantity)` pairs to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn add_items(&self, items: &[(&str, u32)]) -> Result<Value, ApiError> {
        self.run(ADD_ITEMS, json!({ "items": item_inputs(items) })).await
    }

    /// Sets the quantity of items already in the cart.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_items(&self, items: &[(&str, u32)]) -> Result<Value, ApiError> {
        self.run(UPDATE_ITEMS, json!({ "items": item_inputs(items) })).await
    }

    /// Copies the cart of another user into this one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn copy_items(&self, source_user_id: &str) -> Result<Value, ApiError> {
        self.run(COPY_ITEMS, json!({ "sourceUserId": source_user_id })).await
    }

    /// Removes items from the cart.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn remove_items(&self, item_codes: &[&str]) -> Result<Value, ApiError> {
        self.run(REMOVE_ITEMS, json!({ "itemNos": item_codes })).await
    }

    /// Applies a coupon code.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn set_coupon(&self, code: &str) -> Result<Value, ApiError> {
        self.run(SET_COUPON, json!({ "code": code })).await
    }

    /// Removes the applied coupon.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn clear_coupon(&self) -> Result<Value, ApiError> {
        self.run(CLEAR_COUPON, json!({})).await
    }
}

fn item_inputs(items: &[(&str, u32)]) -> Value {
    items
        .iter()
        .map(|(item_code, quantity)| json!({ "itemNo": item_code, "quantity": quantity }))
        .collect()
}
