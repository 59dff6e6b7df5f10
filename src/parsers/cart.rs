//! Parsers for the cart GraphQL responses.

use serde::Deserialize;
use serde_json::Value;

use super::{from_value, ParseError};
use crate::types::{Cart, CartItem, CheckoutItem};

#[derive(Debug, Deserialize)]
struct Response {
    data: Data,
}

#[derive(Debug, Deserialize)]
struct Data {
    cart: RawCart,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCart {
    #[serde(default)]
    items: Option<Vec<RawItem>>,
    coupon: Option<RawCoupon>,
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    item_no: String,
    quantity: u32,
    product: RawProduct,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProduct {
    unit_code: String,
}

#[derive(Debug, Deserialize)]
struct RawCoupon {
    code: Option<String>,
}

/// Parses a cart response (`{"data": {"cart": ...}}`).
///
/// # Errors
///
/// Returns [`ParseError::Schema`] if the body does not have the cart shape.
pub fn parse_cart(response: &Value) -> Result<Cart, ParseError> {
    let response: Response = from_value(response)?;
    let cart = response.data.cart;

    Ok(Cart {
        items: cart
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| CartItem {
                item_code: item.item_no,
                quantity: item.quantity,
                unit_code: item.product.unit_code,
            })
            .collect(),
        coupon: cart.coupon.and_then(|coupon| coupon.code),
        currency: cart.currency,
    })
}

/// Extracts the items to send in a checkout request.
///
/// A body without cart data, or with a cart in an unexpected shape, yields no
/// items.
#[must_use]
pub fn parse_checkout_items(response: &Value) -> Vec<CheckoutItem> {
    match parse_cart(response) {
        Ok(cart) => cart.items.into_iter().map(CheckoutItem::from).collect(),
        Err(error) => {
            tracing::debug!("Cart has no usable items: {error}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cart_response() -> Value {
        json!({
            "data": {
                "cart": {
                    "items": [
                        {
                            "itemNo": "40299687",
                            "quantity": 2,
                            "product": {"unitCode": "PIECE"}
                        },
                        {
                            "itemNo": "s29128569",
                            "quantity": 1,
                            "product": {"unitCode": "PIECE"}
                        }
                    ],
                    "coupon": {"code": "SPRING"},
                    "currency": "RUB"
                }
            }
        })
    }

    #[test]
    fn test_parse_cart() {
        let cart = parse_cart(&cart_response()).unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].item_code, "40299687");
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.items[0].unit_code, "PIECE");
        assert_eq!(cart.coupon.as_deref(), Some("SPRING"));
        assert_eq!(cart.currency.as_deref(), Some("RUB"));
    }

    #[test]
    fn test_parse_cart_without_optional_fields() {
        let cart = parse_cart(&json!({"data": {"cart": {"items": []}}})).unwrap();
        assert_eq!(cart, Cart::default());
    }

    #[test]
    fn test_parse_cart_with_null_items() {
        let response = json!({"data": {"cart": {"items": null, "currency": "RUB"}}});

        let cart = parse_cart(&response).unwrap();
        assert!(cart.items.is_empty());
        assert_eq!(cart.currency.as_deref(), Some("RUB"));
        assert!(parse_checkout_items(&response).is_empty());
    }

    #[test]
    fn test_parse_cart_rejects_wrong_shape() {
        let result = parse_cart(&json!({"data": null}));
        assert!(matches!(result, Err(ParseError::Schema(_))));
    }

    #[test]
    fn test_parse_checkout_items() {
        let items = parse_checkout_items(&cart_response());

        assert_eq!(
            serde_json::to_value(&items).unwrap(),
            json!([
                {"itemNo": "40299687", "quantity": 2, "uom": "PIECE"},
                {"itemNo": "s29128569", "quantity": 1, "uom": "PIECE"}
            ])
        );
    }

    #[test]
    fn test_parse_checkout_items_is_lenient() {
        assert!(parse_checkout_items(&json!({})).is_empty());
        assert!(parse_checkout_items(&json!({"data": {"cart": {"items": [{"itemNo": "1"}]}}})).is_empty());
    }
}
