//! JSON decoding of the countries feed.
//!
//! The feed is a flat array of objects:
//!
//! ```json
//! [{"name": "Testland", "region": "Testregion", "code": "TL", "capital": "Test City"}]
//! ```
//!
//! Fields are read leniently: a missing, null or non-string value becomes an
//! empty string. The array itself must be well formed.

use crate::domain::entities::CountryRecord;
use crate::error::{FetchError, FetchResult};
use serde_json::{Map, Value};

/// Decodes `bytes` into country records in feed order.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] if `bytes` is not JSON and
/// [`FetchError::InvalidShape`] if the top level is not an array or an
/// element is not an object.
pub fn parse_countries(bytes: &[u8]) -> FetchResult<Vec<CountryRecord>> {
    let value: Value = serde_json::from_slice(bytes)?;

    let Value::Array(items) = value else {
        return Err(FetchError::invalid_shape(format!(
            "expected a JSON array, found {}",
            kind(&value)
        )));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(record_from(fields)),
            other => Err(FetchError::invalid_shape(format!(
                "element {index} is {}, expected an object",
                kind(other)
            ))),
        })
        .collect()
}

fn record_from(fields: &Map<String, Value>) -> CountryRecord {
    CountryRecord::new(
        string_field(fields, "name"),
        string_field(fields, "region"),
        string_field(fields, "code"),
        string_field(fields, "capital"),
    )
}

fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
