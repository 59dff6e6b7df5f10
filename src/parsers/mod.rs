//! Translation of raw vendor JSON into the types in [`crate::types`].
//!
//! Every parser first validates the payload against a private serde schema
//! mirroring the vendor shape, then reshapes it. Parsers are pure and
//! synchronous; they never perform I/O.
//!
//! Vendor payloads are irregular in a few recurring ways, handled here once:
//!
//! - fields that are usually arrays sometimes arrive as a single object
//!   ([`OneOrMany`]),
//! - IOWS wraps scalars as `{"$": value}` ([`item_iows::get_rid_of_dollars`]),
//! - store names and similar labels need per-language translation
//!   ([`translate_from_dict`]).

pub mod cart;
pub mod item_iows;
pub mod purchases;

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Error returned when a payload does not match the expected schema.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The payload failed schema validation.
    #[error("Unexpected response schema: {0}")]
    Schema(#[from] serde_json::Error),

    /// A field the result depends on was absent or empty.
    #[error("Missing field '{0}' in response")]
    MissingField(&'static str),
}

/// A value the vendor sends either as a single object or as an array.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// An array of values.
    Many(Vec<T>),
    /// A lone value.
    One(T),
}

impl<T> OneOrMany<T> {
    /// Normalizes to a list.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        match self {
            Self::Many(items) => items.first(),
            Self::One(item) => Some(item),
        }
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

/// Per-language lookup table: language code → (vendor value → translation).
pub type TranslationTable = HashMap<&'static str, HashMap<&'static str, &'static str>>;

/// Translates `value` for `language`, returning it unchanged when either the
/// language or the value is not in the table.
#[must_use]
pub fn translate_from_dict(table: &TranslationTable, language: &str, value: &str) -> String {
    table
        .get(language)
        .and_then(|translations| translations.get(value))
        .map_or_else(|| value.to_string(), |translated| (*translated).to_string())
}

/// Validates `value` against the schema `T`.
pub(crate) fn from_value<T: DeserializeOwned>(value: &serde_json::Value) -> Result<T, ParseError> {
    Ok(T::deserialize(value)?)
}

/// Uppercases the first character and lowercases the rest.
pub(crate) fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_one_or_many_accepts_both_shapes() {
        let many: OneOrMany<u32> = serde_json::from_value(json!([1, 2])).unwrap();
        assert_eq!(many.into_vec(), vec![1, 2]);

        let one: OneOrMany<u32> = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(one.first(), Some(&7));
        assert_eq!(one.into_vec(), vec![7]);
    }

    #[test]
    fn test_one_or_many_empty_list_has_no_first() {
        let empty: OneOrMany<u32> = serde_json::from_value(json!([])).unwrap();
        assert!(empty.first().is_none());
        assert!(OneOrMany::<u32>::default().into_vec().is_empty());
    }

    #[test]
    fn test_one_or_many_supports_eq() {
        fn assert_eq_impl<T: Eq>() {}
        assert_eq_impl::<OneOrMany<String>>();
        assert_eq!(OneOrMany::One(1), OneOrMany::One(1));
        assert_ne!(OneOrMany::One(1), OneOrMany::Many(vec![1]));
    }

    #[test]
    fn test_translate_from_dict() {
        let mut ru = HashMap::new();
        ru.insert("IKEA", "Интернет-магазин");
        let mut table: TranslationTable = HashMap::new();
        table.insert("ru", ru);

        assert_eq!(translate_from_dict(&table, "ru", "IKEA"), "Интернет-магазин");
        assert_eq!(translate_from_dict(&table, "ru", "Other"), "Other");
        assert_eq!(translate_from_dict(&table, "en", "IKEA"), "IKEA");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("каркас"), "Каркас");
        assert_eq!(
            capitalize("нажимные Плавно закрывающиеся петли"),
            "Нажимные плавно закрывающиеся петли"
        );
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_from_value_reports_schema_errors() {
        #[derive(Debug, Deserialize)]
        struct Schema {
            #[allow(dead_code)]
            id: String,
        }

        let result = from_value::<Schema>(&json!({"id": 5}));
        assert!(matches!(result, Err(ParseError::Schema(_))));
    }
}
