//! Parsers for the purchase history GraphQL responses.

use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use super::{from_value, translate_from_dict, ParseError, TranslationTable};
use crate::types::{CostsOrder, PurchaseHistoryItem, StatusBannerOrder};

/// Store names as shown to customers, by language.
fn store_names() -> &'static TranslationTable {
    static STORE_NAMES: OnceLock<TranslationTable> = OnceLock::new();
    STORE_NAMES.get_or_init(|| {
        let mut ru = HashMap::new();
        ru.insert("IKEA", "Интернет-магазин");
        ru.insert("Санкт-Петербург: Парнас", "Парнас");

        let mut table = HashMap::new();
        table.insert("ru", ru);
        table
    })
}

#[derive(Debug, Deserialize)]
struct Response<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct OrderData<T> {
    order: T,
}

#[derive(Debug, Deserialize)]
struct DateAndTime {
    date: NaiveDate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EstimatedFrom {
    estimated_from: DateAndTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeliveryMethod {
    delivery_date: EstimatedFrom,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStatusBannerOrder {
    date_and_time: DateAndTime,
    delivery_methods: Vec<DeliveryMethod>,
}

#[derive(Debug, Deserialize)]
struct Cost {
    value: i64,
}

#[derive(Debug, Deserialize)]
struct Costs {
    delivery: Cost,
    total: Cost,
}

#[derive(Debug, Deserialize)]
struct RawCostsOrder {
    costs: Costs,
}

#[derive(Debug, Deserialize)]
struct HistoryData {
    history: Vec<HistoryItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryDateAndTime {
    date: String,
    time: String,
    formatted_long_date_time: String,
}

#[derive(Debug, Deserialize)]
struct HistoryTotalCost {
    value: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryItem {
    id: String,
    status: String,
    store_name: String,
    date_and_time: HistoryDateAndTime,
    total_cost: HistoryTotalCost,
}

/// Parses the `StatusBannerOrder` query response.
///
/// The delivery date is the estimate of the first delivery method.
///
/// # Errors
///
/// Returns [`ParseError::Schema`] on an unexpected shape and
/// [`ParseError::MissingField`] when the order has no delivery methods.
pub fn parse_status_banner_order(response: &Value) -> Result<StatusBannerOrder, ParseError> {
    let response: Response<OrderData<RawStatusBannerOrder>> = from_value(response)?;
    let order = response.data.order;
    let delivery_method = order
        .delivery_methods
        .into_iter()
        .next()
        .ok_or(ParseError::MissingField("deliveryMethods"))?;

    Ok(StatusBannerOrder {
        purchase_date: order.date_and_time.date,
        delivery_date: delivery_method.delivery_date.estimated_from.date,
    })
}

/// Parses the `CostsOrder` query response.
///
/// # Errors
///
/// Returns [`ParseError::Schema`] on an unexpected shape.
pub fn parse_costs_order(response: &Value) -> Result<CostsOrder, ParseError> {
    let response: Response<OrderData<RawCostsOrder>> = from_value(response)?;
    let costs = response.data.order.costs;

    Ok(CostsOrder {
        delivery_cost: costs.delivery.value,
        total_cost: costs.total.value,
    })
}

/// Joins a history entry's date and time as `"{date}T{time}"`.
#[must_use]
pub fn history_datetime(date: &str, time: &str) -> String {
    format!("{date}T{time}")
}

/// Parses the `History` query response.
///
/// Store names are translated for `language`. A missing total cost becomes `0`.
///
/// # Errors
///
/// Returns [`ParseError::Schema`] on an unexpected shape.
pub fn parse_history(response: &Value, language: &str) -> Result<Vec<PurchaseHistoryItem>, ParseError> {
    let response: Response<HistoryData> = from_value(response)?;

    Ok(response
        .data
        .history
        .into_iter()
        .map(|item| PurchaseHistoryItem {
            datetime: history_datetime(&item.date_and_time.date, &item.date_and_time.time),
            datetime_formatted: item.date_and_time.formatted_long_date_time,
            store: translate_from_dict(store_names(), language, &item.store_name),
            price: item.total_cost.value.unwrap_or(0),
            id: item.id,
            status: item.status,
        })
        .collect())
}
