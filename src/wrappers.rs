//! One call per function: fetch from an endpoint, then parse.
//!
//! # Example
//!
//! ```rust,ignore
//! use ikea_api::{wrappers, IkeaConfig, IowsItems};
//!
//! let items = IowsItems::new(&IkeaConfig::default());
//! let item = wrappers::get_item(&items, "40299687").await?;
//! println!("{} weighs {} kg", item.name, item.weight);
//! ```

use crate::endpoints::{ApiError, Cart, IowsItems, Purchases};
use crate::parsers::cart::parse_cart;
use crate::parsers::item_iows::parse_item;
use crate::parsers::purchases::{parse_costs_order, parse_history, parse_status_banner_order};
use crate::types::{CartItem, ParsedItem, PurchaseHistoryItem, PurchaseInfo};

/// Fetches the cart and returns its lines.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the body is not a cart.
pub async fn get_cart_items(cart: &Cart) -> Result<Vec<CartItem>, ApiError> {
    let body = cart.show().await?;
    Ok(parse_cart(&body)?.items)
}

/// Fetches a page of the purchase history.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the body cannot be parsed.
pub async fn get_purchase_history(
    purchases: &Purchases,
    take: u32,
    skip: u32,
) -> Result<Vec<PurchaseHistoryItem>, ApiError> {
    let body = purchases.history(take, skip).await?;
    Ok(parse_history(&body, purchases.language_code())?)
}

/// Fetches the dates and costs of an order.
///
/// # Errors
///
/// Returns [`ApiError`] if either request fails or either body cannot be
/// parsed.
pub async fn get_purchase_info(
    purchases: &Purchases,
    order_number: &str,
    email: Option<&str>,
) -> Result<PurchaseInfo, ApiError> {
    let (status_banner, costs) = purchases.order_info(order_number, email).await?;
    Ok(PurchaseInfo::new(
        parse_status_banner_order(&status_banner)?,
        parse_costs_order(&costs)?,
    ))
}

/// Fetches a catalog item.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the body cannot be parsed.
pub async fn get_item(items: &IowsItems, item_code: &str) -> Result<ParsedItem, ApiError> {
    let body = items.get_item(item_code).await?;
    Ok(parse_item(&body, items.config())?)
}
