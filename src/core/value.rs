//! Conversions between raw payload values and domain attribute types.
//!
//! [`FromApiValue`] reads one attribute out of a decoded JSON value and
//! [`ApiRepr`] renders it back for the `Type(attr=value, ...)` form.

use crate::core::HydrationMode;
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde_json::Value;
use std::collections::BTreeMap;

/// Timezone-aware timestamp as carried by domain objects.
pub type Timestamp = DateTime<FixedOffset>;

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

const UTC_FORMATS: &[&str] = &["%Y-%m-%dT%H:%MZ", "%Y-%m-%dT%H:%M:%S%.fZ"];

/// Parses an ISO-8601 timestamp with an explicit offset.
///
/// RFC 3339 is tried first, then the shorter minute-precision forms the API
/// emits (`2016-01-30T23:50+00:00`). Naive timestamps are rejected.
pub fn parse_iso8601(input: &str) -> Option<Timestamp> {
    let input = input.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed);
    }

    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(input, format) {
            return Some(parsed);
        }
    }

    UTC_FORMATS.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(input, format)
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    })
}

/// Reason reported when `value` does not have the shape `T` expects.
pub fn type_mismatch<T: FromApiValue>(value: &Value) -> String {
    format!("expected {}, got {}", T::EXPECTED, value)
}

/// A type that can be read from a payload value.
///
/// `mode` is passed down to nested values, so a strict parse stays strict all
/// the way through nested objects and lists.
pub trait FromApiValue: Sized {
    /// Shape reported when a value is rejected.
    const EXPECTED: &'static str;

    fn from_api_value(value: &Value, mode: HydrationMode) -> Result<Self, String>;
}

impl FromApiValue for i64 {
    const EXPECTED: &'static str = "an integer";

    fn from_api_value(value: &Value, _mode: HydrationMode) -> Result<Self, String> {
        value.as_i64().ok_or_else(|| type_mismatch::<Self>(value))
    }
}

impl FromApiValue for f64 {
    const EXPECTED: &'static str = "a number";

    fn from_api_value(value: &Value, _mode: HydrationMode) -> Result<Self, String> {
        value.as_f64().ok_or_else(|| type_mismatch::<Self>(value))
    }
}

impl FromApiValue for bool {
    const EXPECTED: &'static str = "a boolean";

    fn from_api_value(value: &Value, _mode: HydrationMode) -> Result<Self, String> {
        value.as_bool().ok_or_else(|| type_mismatch::<Self>(value))
    }
}

impl FromApiValue for String {
    const EXPECTED: &'static str = "a string";

    fn from_api_value(value: &Value, _mode: HydrationMode) -> Result<Self, String> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| type_mismatch::<Self>(value))
    }
}

impl FromApiValue for Timestamp {
    const EXPECTED: &'static str = "an ISO-8601 timestamp";

    fn from_api_value(value: &Value, _mode: HydrationMode) -> Result<Self, String> {
        value
            .as_str()
            .and_then(parse_iso8601)
            .ok_or_else(|| type_mismatch::<Self>(value))
    }
}

impl FromApiValue for Value {
    const EXPECTED: &'static str = "any value";

    fn from_api_value(value: &Value, _mode: HydrationMode) -> Result<Self, String> {
        Ok(value.clone())
    }
}

impl FromApiValue for BTreeMap<String, String> {
    const EXPECTED: &'static str = "an object of strings";

    fn from_api_value(value: &Value, mode: HydrationMode) -> Result<Self, String> {
        let object = value.as_object().ok_or_else(|| type_mismatch::<Self>(value))?;

        let mut labels = BTreeMap::new();
        for (key, item) in object {
            match item.as_str() {
                Some(text) => {
                    labels.insert(key.clone(), text.to_owned());
                }
                None if mode == HydrationMode::Lenient => {
                    tracing::debug!(label = %key, "skipping non-string label");
                }
                None => return Err(format!("label `{}`: {}", key, type_mismatch::<String>(item))),
            }
        }
        Ok(labels)
    }
}

impl<T: FromApiValue> FromApiValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_api_value(value: &Value, mode: HydrationMode) -> Result<Self, String> {
        if value.is_null() {
            return Ok(None);
        }
        T::from_api_value(value, mode).map(Some)
    }
}

impl<T: FromApiValue> FromApiValue for Vec<T> {
    const EXPECTED: &'static str = "an array";

    /// Lenient parsing skips malformed entries; strict parsing fails on the
    /// first one.
    fn from_api_value(value: &Value, mode: HydrationMode) -> Result<Self, String> {
        let entries = value.as_array().ok_or_else(|| type_mismatch::<Self>(value))?;

        let mut items = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match T::from_api_value(entry, mode) {
                Ok(item) => items.push(item),
                Err(reason) if mode == HydrationMode::Lenient => {
                    tracing::debug!(index, %reason, "skipping malformed list entry");
                }
                Err(reason) => return Err(format!("entry {}: {}", index, reason)),
            }
        }
        Ok(items)
    }
}

impl<T: FromApiValue> FromApiValue for Box<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_api_value(value: &Value, mode: HydrationMode) -> Result<Self, String> {
        T::from_api_value(value, mode).map(Box::new)
    }
}

/// Diagnostic rendering of an attribute value.
pub trait ApiRepr {
    fn api_repr(&self) -> String;
}

impl ApiRepr for i64 {
    fn api_repr(&self) -> String {
        self.to_string()
    }
}

impl ApiRepr for f64 {
    fn api_repr(&self) -> String {
        format!("{:?}", self)
    }
}

impl ApiRepr for bool {
    fn api_repr(&self) -> String {
        let rendered = if *self { "True" } else { "False" };
        rendered.to_string()
    }
}

impl ApiRepr for str {
    fn api_repr(&self) -> String {
        let escaped = self.replace('\\', "\\\\").replace('\'', "\\'");
        format!("'{}'", escaped)
    }
}

impl ApiRepr for String {
    fn api_repr(&self) -> String {
        self.as_str().api_repr()
    }
}

impl ApiRepr for Timestamp {
    fn api_repr(&self) -> String {
        self.to_rfc3339()
    }
}

impl ApiRepr for Value {
    fn api_repr(&self) -> String {
        self.to_string()
    }
}

impl ApiRepr for BTreeMap<String, String> {
    fn api_repr(&self) -> String {
        let entries: Vec<String> = self
            .iter()
            .map(|(key, value)| format!("{}: {}", key.api_repr(), value.api_repr()))
            .collect();
        format!("{{{}}}", entries.join(", "))
    }
}

impl<T: ApiRepr> ApiRepr for Option<T> {
    fn api_repr(&self) -> String {
        match self {
            Some(inner) => inner.api_repr(),
            None => "None".to_string(),
        }
    }
}

impl<T: ApiRepr> ApiRepr for Vec<T> {
    fn api_repr(&self) -> String {
        let items: Vec<String> = self.iter().map(ApiRepr::api_repr).collect();
        format!("[{}]", items.join(", "))
    }
}

impl<T: ApiRepr + ?Sized> ApiRepr for Box<T> {
    fn api_repr(&self) -> String {
        (**self).api_repr()
    }
}
