//! Flattened result types produced by the parsers.
//!
//! These are the stable shapes callers work with; the vendor JSON they are
//! built from lives in the private schema structs of [`crate::parsers`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A line of the shopping cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Article number, e.g. `"40299687"`.
    pub item_code: String,
    /// Number of units in the cart.
    pub quantity: u32,
    /// Unit of measure, e.g. `"PIECE"`.
    pub unit_code: String,
}

/// The shopping cart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Cart lines in vendor order.
    pub items: Vec<CartItem>,
    /// Applied coupon code, if any.
    pub coupon: Option<String>,
    /// Currency code, e.g. `"RUB"`.
    pub currency: Option<String>,
}

/// An item as the order capture service expects it in a checkout request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItem {
    /// Article number.
    pub item_no: String,
    /// Number of units.
    pub quantity: u32,
    /// Unit of measure.
    pub uom: String,
}

impl From<CartItem> for CheckoutItem {
    fn from(item: CartItem) -> Self {
        Self {
            item_no: item.item_code,
            quantity: item.quantity,
            uom: item.unit_code,
        }
    }
}

/// Purchase and estimated delivery dates of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBannerOrder {
    /// Date the order was placed.
    pub purchase_date: NaiveDate,
    /// Earliest estimated delivery date.
    pub delivery_date: NaiveDate,
}

/// Costs of an order, in the smallest unit the vendor reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostsOrder {
    /// Delivery cost.
    pub delivery_cost: i64,
    /// Total cost including delivery.
    pub total_cost: i64,
}

/// Everything known about one order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseInfo {
    /// Date the order was placed.
    pub purchase_date: NaiveDate,
    /// Earliest estimated delivery date.
    pub delivery_date: NaiveDate,
    /// Delivery cost.
    pub delivery_cost: i64,
    /// Total cost including delivery.
    pub total_cost: i64,
}

impl PurchaseInfo {
    /// Merges the two order queries into one record.
    #[must_use]
    pub const fn new(status_banner: StatusBannerOrder, costs: CostsOrder) -> Self {
        Self {
            purchase_date: status_banner.purchase_date,
            delivery_date: status_banner.delivery_date,
            delivery_cost: costs.delivery_cost,
            total_cost: costs.total_cost,
        }
    }
}

/// One entry of the purchase history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseHistoryItem {
    /// Order number.
    pub id: String,
    /// Vendor status, e.g. `"COMPLETED"`.
    pub status: String,
    /// Total cost; `0` when the vendor does not report one.
    pub price: i64,
    /// `"{date}T{time}"` as reported by the vendor.
    pub datetime: String,
    /// Human-readable, localized date and time.
    pub datetime_formatted: String,
    /// Store name, translated for the configured language when known.
    pub store: String,
}

/// A component of a combination item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChildItem {
    /// Article number.
    pub item_code: String,
    /// Display name, e.g. `"БЕСТО, Каркас"`.
    pub name: String,
    /// Package weight in kilograms.
    pub weight: f64,
    /// Number of this component in the combination.
    pub qty: u32,
}

/// An item from the IOWS catalog, reshaped for display and shipping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParsedItem {
    /// Whether this is a combination (`SPR`) rather than a single article.
    pub is_combination: bool,
    /// Article number.
    pub item_code: String,
    /// Display name.
    pub name: String,
    /// Product image, if a suitable one exists.
    pub image_url: Option<String>,
    /// Package weight in kilograms.
    pub weight: f64,
    /// Components of a combination; empty for single articles.
    pub child_items: Vec<ChildItem>,
    /// Price as the vendor reports it; `0.0` when there is none.
    pub price: f64,
    /// Product page URL.
    pub url: String,
    /// Category name, if known.
    pub category_name: Option<String>,
    /// Category page URL, if known.
    pub category_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_item_from_cart_item() {
        let item = CartItem {
            item_code: "40299687".to_string(),
            quantity: 2,
            unit_code: "PIECE".to_string(),
        };

        let checkout_item = CheckoutItem::from(item);
        let json = serde_json::to_value(&checkout_item).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"itemNo": "40299687", "quantity": 2, "uom": "PIECE"})
        );
    }

    #[test]
    fn test_purchase_info_merges_orders() {
        let status_banner = StatusBannerOrder {
            purchase_date: NaiveDate::from_ymd_opt(2021, 4, 14).unwrap(),
            delivery_date: NaiveDate::from_ymd_opt(2021, 4, 20).unwrap(),
        };
        let costs = CostsOrder {
            delivery_cost: 399,
            total_cost: 12_999,
        };

        let info = PurchaseInfo::new(status_banner, costs);
        assert_eq!(info.purchase_date, status_banner.purchase_date);
        assert_eq!(info.delivery_date, status_banner.delivery_date);
        assert_eq!(info.delivery_cost, 399);
        assert_eq!(info.total_cost, 12_999);
    }
}
