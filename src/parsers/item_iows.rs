//! Parser for IOWS catalog items.
//!
//! IOWS answers with `{"RetailItemComm": {...}}` where every scalar is wrapped
//! as `{"$": value}` and most lists collapse to a bare object when they hold a
//! single element. [`parse_item`] unwraps the scalars with
//! [`get_rid_of_dollars`], validates the result against the schema below and
//! reshapes it into a [`ParsedItem`].
//!
//! # Example
//!
//! ```rust
//! use ikea_api::parsers::item_iows::parse_weight;
//!
//! assert_eq!(parse_weight("10.45 кг"), 10.45);
//! assert_eq!(parse_weight("some string"), 0.0);
//! ```

use std::sync::OnceLock;

use regex::Regex;
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

use super::{capitalize, from_value, OneOrMany, ParseError};
use crate::config::IkeaConfig;
use crate::types::{ChildItem, ParsedItem};

const COMBINATION_ITEM_TYPE: &str = "SPR";
const WEIGHT_MEASURE_TYPE: &str = "WEIGHT";
const LINE_DRAWING_IMAGE_TYPE: &str = "LINE DRAWING";
const PREFERRED_IMAGE_SIZE: &str = "S5";

fn number_regex() -> &'static Regex {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    NUMBER.get_or_init(|| Regex::new(r"\d+(?:[.,]\d+)*").expect("Invalid regex"))
}

/// Keeps the last separator as the decimal point and drops the others.
fn normalize_number(number: &str) -> String {
    let Some(decimal) = number.rfind(['.', ',']) else {
        return number.to_owned();
    };
    let (whole, fraction) = number.split_at(decimal);
    let whole: String = whole.chars().filter(char::is_ascii_digit).collect();
    format!("{whole}.{}", &fraction[1..])
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::String(value) => value,
        Raw::Number(value) => value.to_string(),
    })
}

fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        String(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::String(value) => value
            .trim()
            .replace(',', ".")
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid price '{value}'"))),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Response {
    retail_item_comm: RawItem,
}

/// A product image entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    /// e.g. `"PICTURE SINGLE"` or `"LINE DRAWING"`.
    #[serde(default)]
    pub image_type: String,
    /// e.g. `"S5"`.
    #[serde(default)]
    pub image_size: Option<String>,
    /// Path relative to the site root.
    #[serde(default)]
    pub image_url: String,
}

/// A package measurement such as weight or width.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageMeasure {
    /// e.g. `"WEIGHT"`.
    #[serde(default)]
    pub package_measure_type: String,
    /// Localized value with unit, e.g. `"10.45 кг"`.
    #[serde(default)]
    pub package_measure_text_metric: String,
}

/// A price entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Price {
    /// Price as the vendor reports it; some markets use decimals.
    #[serde(default, deserialize_with = "decimal")]
    pub price: f64,
}

/// A catalog element; name and id are usually strings but may be objects.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogElement {
    /// Category name.
    #[serde(default)]
    pub catalog_element_name: Value,
    /// Category id.
    #[serde(default)]
    pub catalog_element_id: Value,
}

/// Wrapper of one or more [`CatalogElement`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogElementList {
    /// The elements.
    #[serde(default)]
    pub catalog_element: OneOrMany<CatalogElement>,
}

/// A catalog the item is listed in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Catalog {
    /// Elements of the catalog the item belongs to.
    #[serde(default)]
    pub catalog_element_list: Option<CatalogElementList>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ImageList {
    #[serde(default)]
    retail_item_image: OneOrMany<Image>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PriceList {
    #[serde(default)]
    retail_item_comm_price: OneOrMany<Price>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CatalogRefList {
    #[serde(default)]
    catalog_ref: OneOrMany<Catalog>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ChildList {
    #[serde(default)]
    retail_item_comm_child: OneOrMany<RawChildItem>,
}

/// A component of a combination as IOWS describes it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawChildItem {
    /// Number of this component in the combination.
    pub quantity: u32,
    /// Article number.
    #[serde(deserialize_with = "string_or_number")]
    pub item_no: String,
    /// Product name, e.g. `"БЕСТО"`.
    #[serde(default)]
    pub product_name: String,
    /// Product type, e.g. `"каркас"`.
    #[serde(default)]
    pub product_type_name: String,
    /// Size, e.g. `"60x40x38 см"`.
    #[serde(default)]
    pub item_measure_reference_text_metric: Option<String>,
    /// Colour or finish.
    #[serde(default)]
    pub valid_design_text: Option<String>,
    /// Package measurements.
    #[serde(default)]
    pub retail_item_comm_package_measure_list: Option<PackageMeasures>,
}

/// Wrapper of one or more [`PackageMeasure`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageMeasures {
    /// The measurements.
    #[serde(default)]
    pub retail_item_comm_package_measure: OneOrMany<PackageMeasure>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawItem {
    #[serde(deserialize_with = "string_or_number")]
    item_no: String,
    #[serde(default)]
    item_type: String,
    #[serde(default)]
    product_name: String,
    #[serde(default)]
    product_type_name: String,
    #[serde(default)]
    item_measure_reference_text_metric: Option<String>,
    #[serde(default)]
    valid_design_text: Option<String>,
    #[serde(default)]
    retail_item_comm_package_measure_list: Option<PackageMeasures>,
    #[serde(default)]
    retail_item_image_list: Option<ImageList>,
    #[serde(default)]
    retail_item_comm_price_list: Option<PriceList>,
    #[serde(default)]
    catalog_ref_list: Option<CatalogRefList>,
    #[serde(default)]
    retail_item_comm_child_list: Option<ChildList>,
}

/// Replaces every object holding a `"$"` key with that key's value.
///
/// ```rust
/// use ikea_api::parsers::item_iows::get_rid_of_dollars;
/// use serde_json::json;
///
/// let value = get_rid_of_dollars(json!({"name": {"$": "The Name"}}));
/// assert_eq!(value, json!({"name": "The Name"}));
/// ```
#[must_use]
pub fn get_rid_of_dollars(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("$") {
            Some(inner) => get_rid_of_dollars(inner),
            None => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, get_rid_of_dollars(value)))
                    .collect(),
            ),
        },
        Value::Array(values) => Value::Array(values.into_iter().map(get_rid_of_dollars).collect()),
        other => other,
    }
}

/// Picks the product image: line drawings and files other than PNG or JPEG
/// are skipped, size `S5` is preferred, otherwise the first remaining image.
#[must_use]
pub fn get_image_url(images: &[Image], base_url: &str) -> Option<String> {
    let candidates: Vec<&Image> = images
        .iter()
        .filter(|image| image.image_type != LINE_DRAWING_IMAGE_TYPE)
        .filter(|image| {
            let url = image.image_url.to_lowercase();
            url.ends_with(".png") || url.ends_with(".jpg")
        })
        .collect();

    candidates
        .iter()
        .find(|image| image.image_size.as_deref() == Some(PREFERRED_IMAGE_SIZE))
        .or_else(|| candidates.first())
        .map(|image| format!("{base_url}{}", image.image_url))
}

/// Extracts the first number from a localized measurement such as
/// `"10,45 кг"`, or `0.0` if there is none.
///
/// The last `.` or `,` is the decimal point; earlier ones group thousands.
#[must_use]
pub fn parse_weight(value: &str) -> f64 {
    number_regex()
        .find(value)
        .and_then(|number| normalize_number(number.as_str()).parse().ok())
        .unwrap_or(0.0)
}

/// Sums the `WEIGHT` measurements, rounded to two decimals.
#[must_use]
pub fn get_weight(measurements: &[PackageMeasure]) -> f64 {
    let total: f64 = measurements
        .iter()
        .filter(|measure| measure.package_measure_type == WEIGHT_MEASURE_TYPE)
        .map(|measure| parse_weight(&measure.package_measure_text_metric))
        .sum();
    round_weight(total)
}

fn round_weight(weight: f64) -> f64 {
    (weight * 100.0).round() / 100.0
}

fn item_name(
    product_name: &str,
    product_type_name: &str,
    valid_design_text: Option<&str>,
    measure: Option<&str>,
) -> String {
    let type_name = capitalize(product_type_name);
    [Some(product_name), Some(type_name.as_str()), valid_design_text, measure]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reshapes the components of a combination.
#[must_use]
pub fn get_child_items(children: &[RawChildItem]) -> Vec<ChildItem> {
    children
        .iter()
        .map(|child| {
            let measurements = child
                .retail_item_comm_package_measure_list
                .as_ref()
                .map(|list| list.retail_item_comm_package_measure.clone().into_vec())
                .unwrap_or_default();

            ChildItem {
                item_code: child.item_no.clone(),
                name: item_name(
                    &child.product_name,
                    &child.product_type_name,
                    child.valid_design_text.as_deref(),
                    child.item_measure_reference_text_metric.as_deref(),
                ),
                weight: get_weight(&measurements),
                qty: child.quantity,
            }
        })
        .collect()
}

/// The first price of a list, the price of a lone entry, or `0.0`.
#[must_use]
pub fn get_price(prices: &OneOrMany<Price>) -> f64 {
    prices.first().map_or(0.0, |price| price.price)
}

/// Product page URL; combinations get an `s` before the article number.
#[must_use]
pub fn get_url(config: &IkeaConfig, item_code: &str, is_combination: bool) -> String {
    let prefix = if is_combination { "s" } else { "" };
    format!("{}/p/-{prefix}{item_code}", config.base_locale_url())
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        _ => None,
    }
}

/// Category name and page URL.
///
/// When the item is listed in several catalogs the second one is used, since
/// the first is the generic product range.
#[must_use]
pub fn get_category_name_and_url(
    catalogs: &OneOrMany<Catalog>,
    config: &IkeaConfig,
) -> (Option<String>, Option<String>) {
    let catalog = match catalogs {
        OneOrMany::Many(list) if list.len() > 1 => list.get(1),
        other => other.first(),
    };
    let Some(element) = catalog
        .and_then(|catalog| catalog.catalog_element_list.as_ref())
        .and_then(|list| list.catalog_element.first())
    else {
        return (None, None);
    };

    match (
        scalar_to_string(&element.catalog_element_name),
        scalar_to_string(&element.catalog_element_id),
    ) {
        (Some(name), Some(id)) => {
            let url = format!("{}/cat/-{id}", config.base_locale_url());
            (Some(name), Some(url))
        }
        _ => (None, None),
    }
}

/// Parses an IOWS `catalog/items` response.
///
/// # Errors
///
/// Returns [`ParseError::Schema`] if the unwrapped body does not have the
/// `RetailItemComm` shape.
pub fn parse_item(response: &Value, config: &IkeaConfig) -> Result<ParsedItem, ParseError> {
    let response: Response = from_value(&get_rid_of_dollars(response.clone()))?;
    let item = response.retail_item_comm;

    let is_combination = item.item_type == COMBINATION_ITEM_TYPE;
    let child_items = get_child_items(
        &item
            .retail_item_comm_child_list
            .unwrap_or_default()
            .retail_item_comm_child
            .into_vec(),
    );

    let measurements = item
        .retail_item_comm_package_measure_list
        .unwrap_or_default()
        .retail_item_comm_package_measure
        .into_vec();
    let mut weight = get_weight(&measurements);
    if weight.abs() < f64::EPSILON {
        weight = round_weight(
            child_items
                .iter()
                .map(|child| child.weight * f64::from(child.qty))
                .sum(),
        );
    }

    let images = item.retail_item_image_list.unwrap_or_default().retail_item_image.into_vec();
    let (category_name, category_url) = get_category_name_and_url(
        &item.catalog_ref_list.unwrap_or_default().catalog_ref,
        config,
    );

    Ok(ParsedItem {
        is_combination,
        name: item_name(
            &item.product_name,
            &item.product_type_name,
            item.valid_design_text.as_deref(),
            item.item_measure_reference_text_metric.as_deref(),
        ),
        image_url: get_image_url(&images, config.base_url().as_ref()),
        weight,
        child_items,
        price: get_price(&item.retail_item_comm_price_list.unwrap_or_default().retail_item_comm_price),
        url: get_url(config, &item.item_no, is_combination),
        item_code: item.item_no,
        category_name,
        category_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE_URL: &str = "https://www.ikea.com";

    fn image(size: &str, url: &str) -> Image {
        Image {
            image_type: "PICTURE SINGLE".to_string(),
            image_size: Some(size.to_string()),
            image_url: url.to_string(),
        }
    }

    fn measure(kind: &str, text: &str) -> PackageMeasure {
        PackageMeasure {
            package_measure_type: kind.to_string(),
            package_measure_text_metric: text.to_string(),
        }
    }

    fn catalog(name: Value, id: Value) -> Catalog {
        Catalog {
            catalog_element_list: Some(CatalogElementList {
                catalog_element: OneOrMany::One(CatalogElement {
                    catalog_element_name: name,
                    catalog_element_id: id,
                }),
            }),
        }
    }

    #[test]
    fn test_get_rid_of_dollars_nested() {
        let value = json!({
            "Item": {"No": {"$": 1}, "List": [{"Name": {"$": "a"}}, {"$": "b"}]}
        });
        assert_eq!(
            get_rid_of_dollars(value),
            json!({"Item": {"No": 1, "List": [{"Name": "a"}, "b"]}})
        );
    }

    #[test]
    fn test_get_image_url_filtered() {
        let images = vec![
            Image {
                image_type: "LINE DRAWING".to_string(),
                ..Image::default()
            },
            Image {
                image_type: "not LINE DRAWING".to_string(),
                image_url: "somename.notpngorjpg".to_string(),
                ..Image::default()
            },
        ];
        assert_eq!(get_image_url(&images, BASE_URL), None);
    }

    #[test]
    fn test_get_image_url_no_images() {
        assert_eq!(get_image_url(&[], BASE_URL), None);
    }

    #[test]
    fn test_get_image_url_matches() {
        for ext in [".png", ".jpg", ".PNG", ".JPG"] {
            let images = vec![image("S5", &format!("somename{ext}")), image("S5", "somename.notpngjpg")];
            assert_eq!(
                get_image_url(&images, BASE_URL),
                Some(format!("{BASE_URL}somename{ext}"))
            );
        }
    }

    #[test]
    fn test_get_image_url_prefers_s5() {
        let images = vec![image("S4", "/small.jpg"), image("S5", "/large.jpg")];
        assert_eq!(
            get_image_url(&images, BASE_URL),
            Some(format!("{BASE_URL}/large.jpg"))
        );
    }

    #[test]
    fn test_get_image_url_first() {
        let images = vec![image("S4", "somename.jpg")];
        assert_eq!(
            get_image_url(&images, BASE_URL),
            Some(format!("{BASE_URL}somename.jpg"))
        );
    }

    #[test]
    fn test_parse_weight() {
        assert!((parse_weight("10.3 кг") - 10.3).abs() < f64::EPSILON);
        assert!((parse_weight("10.45 кг") - 10.45).abs() < f64::EPSILON);
        assert!((parse_weight("10 кг") - 10.0).abs() < f64::EPSILON);
        assert!((parse_weight("9.415 кг") - 9.415).abs() < f64::EPSILON);
        assert!((parse_weight("10,45 кг") - 10.45).abs() < f64::EPSILON);
        assert!(parse_weight("some string").abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_weight_skips_stray_separators() {
        assert!((parse_weight("ca. 10 kg") - 10.0).abs() < f64::EPSILON);
        assert!((parse_weight("., 7,5 кг") - 7.5).abs() < f64::EPSILON);
        assert!((parse_weight("12 kg.") - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_weight_with_thousands_separators() {
        assert!((parse_weight("1,234.5 kg") - 1234.5).abs() < f64::EPSILON);
        assert!((parse_weight("1.234,5 kg") - 1234.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_get_weight_no_measurements() {
        assert!(get_weight(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_get_weight_no_weight() {
        let measurements = vec![measure("not WEIGHT", "10.45 м")];
        assert!(get_weight(&measurements).abs() < f64::EPSILON);
    }

    #[test]
    fn test_get_weight_with_input() {
        let measurements = vec![
            measure("not WEIGHT", "10.45 м"),
            measure("WEIGHT", "9.67 кг"),
            measure("WEIGHT", "0.33 кг"),
        ];
        assert!((get_weight(&measurements) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_get_child_items_no_input() {
        assert!(get_child_items(&[]).is_empty());
    }

    #[test]
    fn test_get_child_items_with_input() {
        let children: Vec<RawChildItem> = serde_json::from_value(json!([
            {
                "Quantity": 10,
                "ItemNo": "70299474",
                "ProductName": "БЕСТО",
                "ProductTypeName": "каркас",
                "RetailItemCommPackageMeasureList": {
                    "RetailItemCommPackageMeasure": [
                        {"PackageMeasureType": "WEIGHT", "PackageMeasureTextMetric": "17.95 кг"}
                    ]
                }
            },
            {
                "Quantity": 4,
                "ItemNo": 70_299_443,
                "ProductName": "БЕСТО",
                "ProductTypeName": "нажимные плавно закрывающиеся петли",
                "RetailItemCommPackageMeasureList": {
                    "RetailItemCommPackageMeasure":
                        {"PackageMeasureType": "WEIGHT", "PackageMeasureTextMetric": "13.19 кг"}
                }
            }
        ]))
        .unwrap();

        assert_eq!(
            get_child_items(&children),
            vec![
                ChildItem {
                    item_code: "70299474".to_string(),
                    name: "БЕСТО, Каркас".to_string(),
                    weight: 17.95,
                    qty: 10,
                },
                ChildItem {
                    item_code: "70299443".to_string(),
                    name: "БЕСТО, Нажимные плавно закрывающиеся петли".to_string(),
                    weight: 13.19,
                    qty: 4,
                },
            ]
        );
    }

    #[test]
    fn test_get_price() {
        assert!(get_price(&OneOrMany::Many(vec![])).abs() < f64::EPSILON);
        assert!(get_price(&OneOrMany::One(Price { price: 0.0 })).abs() < f64::EPSILON);
        assert!((get_price(&OneOrMany::One(Price { price: 10.0 })) - 10.0).abs() < f64::EPSILON);
        assert!(
            (get_price(&OneOrMany::Many(vec![Price { price: 5.0 }, Price { price: 20.0 }])) - 5.0)
                .abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn test_price_accepts_decimals_and_strings() {
        let prices: OneOrMany<Price> =
            serde_json::from_value(json!([{"Price": 129.99}, {"Price": "49,5"}, {"Price": 2999}]))
                .unwrap();
        let prices = prices.into_vec();

        assert!((prices[0].price - 129.99).abs() < f64::EPSILON);
        assert!((prices[1].price - 49.5).abs() < f64::EPSILON);
        assert!((prices[2].price - 2999.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_price_rejects_non_numeric_strings() {
        let result = serde_json::from_value::<Price>(json!({"Price": "free"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_item_with_fractional_price() {
        let config = IkeaConfig::default();
        let response = json!({
            "RetailItemComm": {
                "ItemNo": {"$": "40299687"},
                "ItemType": {"$": "ART"},
                "ProductName": {"$": "BESTÅ"},
                "ProductTypeName": {"$": "frame"},
                "RetailItemCommPriceList": {
                    "RetailItemCommPrice": {"Price": {"$": 129.99}}
                }
            }
        });

        let item = parse_item(&response, &config).unwrap();
        assert!((item.price - 129.99).abs() < f64::EPSILON);
    }

    #[test]
    fn test_get_url() {
        let config = IkeaConfig::default();
        assert_eq!(
            get_url(&config, "11111111", false),
            "https://www.ikea.com/ru/ru/p/-11111111"
        );
        assert_eq!(
            get_url(&config, "11111111", true),
            "https://www.ikea.com/ru/ru/p/-s11111111"
        );
    }

    #[test]
    fn test_get_category_name_and_url_no_category() {
        let config = IkeaConfig::default();
        let catalogs = OneOrMany::Many(vec![Catalog {
            catalog_element_list: Some(CatalogElementList {
                catalog_element: OneOrMany::Many(vec![]),
            }),
        }]);
        assert_eq!(get_category_name_and_url(&catalogs, &config), (None, None));
    }

    #[test]
    fn test_get_category_name_and_url_no_categories() {
        let config = IkeaConfig::default();
        assert_eq!(
            get_category_name_and_url(&OneOrMany::Many(vec![]), &config),
            (None, None)
        );
    }

    #[test]
    fn test_get_category_name_and_url_not_list() {
        let config = IkeaConfig::default();
        let catalogs = OneOrMany::One(catalog(json!("name"), json!("id")));
        assert_eq!(
            get_category_name_and_url(&catalogs, &config),
            (
                Some("name".to_string()),
                Some("https://www.ikea.com/ru/ru/cat/-id".to_string())
            )
        );
    }

    #[test]
    fn test_get_category_name_and_url_name_or_id_is_object() {
        let config = IkeaConfig::default();
        for (name, id) in [
            (json!("value"), json!({})),
            (json!({}), json!("value")),
            (json!({}), json!({})),
        ] {
            let catalogs = OneOrMany::Many(vec![catalog(name, id)]);
            assert_eq!(get_category_name_and_url(&catalogs, &config), (None, None));
        }
    }

    #[test]
    fn test_get_category_name_and_url_passes() {
        let config = IkeaConfig::default();
        let expected = (
            Some("name".to_string()),
            Some("https://www.ikea.com/ru/ru/cat/-id".to_string()),
        );

        let first = OneOrMany::Many(vec![catalog(json!("name"), json!("id"))]);
        assert_eq!(get_category_name_and_url(&first, &config), expected);

        let second = OneOrMany::Many(vec![Catalog::default(), catalog(json!("name"), json!("id"))]);
        assert_eq!(get_category_name_and_url(&second, &config), expected);
    }

    #[test]
    fn test_get_category_name_and_url_numeric_id() {
        let config = IkeaConfig::default();
        let catalogs = OneOrMany::One(catalog(json!("Шкафы"), json!(10_385)));
        assert_eq!(
            get_category_name_and_url(&catalogs, &config).1.as_deref(),
            Some("https://www.ikea.com/ru/ru/cat/-10385")
        );
    }

    #[test]
    fn test_parse_item_single_article() {
        let config = IkeaConfig::default();
        let response = json!({
            "RetailItemComm": {
                "ItemNo": {"$": "40299687"},
                "ItemType": {"$": "ART"},
                "ProductName": {"$": "БЕСТО"},
                "ProductTypeName": {"$": "каркас"},
                "ValidDesignText": {"$": "белый"},
                "ItemMeasureReferenceTextMetric": {"$": "60x40x38 см"},
                "RetailItemCommPackageMeasureList": {
                    "RetailItemCommPackageMeasure": [
                        {"PackageMeasureType": {"$": "WEIGHT"}, "PackageMeasureTextMetric": {"$": "9.67 кг"}},
                        {"PackageMeasureType": {"$": "WIDTH"}, "PackageMeasureTextMetric": {"$": "40 см"}}
                    ]
                },
                "RetailItemImageList": {
                    "RetailItemImage": [
                        {"ImageType": {"$": "LINE DRAWING"}, "ImageSize": {"$": "S5"}, "ImageUrl": {"$": "/line.png"}},
                        {"ImageType": {"$": "PICTURE SINGLE"}, "ImageSize": {"$": "S5"}, "ImageUrl": {"$": "/pic.JPG"}}
                    ]
                },
                "RetailItemCommPriceList": {
                    "RetailItemCommPrice": {"Price": {"$": 2999}}
                },
                "CatalogRefList": {
                    "CatalogRef": [
                        {"CatalogElementList": {"CatalogElement": {"CatalogElementName": {"$": "Серии"}, "CatalogElementId": {"$": "series"}}}},
                        {"CatalogElementList": {"CatalogElement": [
                            {"CatalogElementName": {"$": "Шкафы"}, "CatalogElementId": {"$": 10_385}},
                            {"CatalogElementName": {"$": "Другое"}, "CatalogElementId": {"$": 1}}
                        ]}}
                    ]
                }
            }
        });

        let item = parse_item(&response, &config).unwrap();

        assert!(!item.is_combination);
        assert_eq!(item.item_code, "40299687");
        assert_eq!(item.name, "БЕСТО, Каркас, белый, 60x40x38 см");
        assert_eq!(item.image_url.as_deref(), Some("https://www.ikea.com/pic.JPG"));
        assert!((item.weight - 9.67).abs() < f64::EPSILON);
        assert!(item.child_items.is_empty());
        assert!((item.price - 2999.0).abs() < f64::EPSILON);
        assert_eq!(item.url, "https://www.ikea.com/ru/ru/p/-40299687");
        assert_eq!(item.category_name.as_deref(), Some("Шкафы"));
        assert_eq!(
            item.category_url.as_deref(),
            Some("https://www.ikea.com/ru/ru/cat/-10385")
        );
    }

    #[test]
    fn test_parse_item_combination_weight_from_children() {
        let config = IkeaConfig::default();
        let response = json!({
            "RetailItemComm": {
                "ItemNo": {"$": "29128569"},
                "ItemType": {"$": "SPR"},
                "ProductName": {"$": "БЕСТО"},
                "ProductTypeName": {"$": "комбинация"},
                "RetailItemCommChildList": {
                    "RetailItemCommChild": [
                        {
                            "Quantity": {"$": 2},
                            "ItemNo": {"$": "70299474"},
                            "ProductName": {"$": "БЕСТО"},
                            "ProductTypeName": {"$": "каркас"},
                            "RetailItemCommPackageMeasureList": {
                                "RetailItemCommPackageMeasure": {"PackageMeasureType": {"$": "WEIGHT"}, "PackageMeasureTextMetric": {"$": "17.95 кг"}}
                            }
                        },
                        {
                            "Quantity": {"$": 4},
                            "ItemNo": {"$": "70299443"},
                            "ProductName": {"$": "БЕСТО"},
                            "ProductTypeName": {"$": "петли"},
                            "RetailItemCommPackageMeasureList": {
                                "RetailItemCommPackageMeasure": {"PackageMeasureType": {"$": "WEIGHT"}, "PackageMeasureTextMetric": {"$": "0.25 кг"}}
                            }
                        }
                    ]
                }
            }
        });

        let item = parse_item(&response, &config).unwrap();

        assert!(item.is_combination);
        assert_eq!(item.child_items.len(), 2);
        assert!((item.weight - 36.9).abs() < 1e-9);
        assert!(item.price.abs() < f64::EPSILON);
        assert_eq!(item.image_url, None);
        assert_eq!(item.url, "https://www.ikea.com/ru/ru/p/-s29128569");
        assert_eq!((item.category_name, item.category_url), (None, None));
    }

    #[test]
    fn test_parse_item_rejects_wrong_shape() {
        let config = IkeaConfig::default();
        let result = parse_item(&json!({"Other": {}}), &config);
        assert!(matches!(result, Err(ParseError::Schema(_))));
    }
}
