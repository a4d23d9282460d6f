//! List envelope normalization for list endpoints.
//!
//! List endpoints answer either with a bare JSON array or with a paginated
//! envelope `{"count": .., "next": .., "previous": .., "results": [..]}`
//! depending on whether pagination is enabled for that view.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Flattens a list response into its records.
///
/// A bare array is returned as is, an envelope yields its `results`.
/// Anything else yields an empty list.
#[must_use]
pub fn normalize_list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => {
                warn!("list response without results array treated as empty");
                Vec::new()
            }
            Some(other) => {
                warn!(results = %other, "non-array results treated as empty");
                Vec::new()
            }
        },
        Value::Null => Vec::new(),
        other => {
            warn!(response = %other, "unexpected list response treated as empty");
            Vec::new()
        }
    }
}

/// Normalizes a list response and decodes every record.
///
/// Records that are not objects of the expected shape are skipped with a
/// warning so one bad row never blocks the rest of a report.
#[must_use]
pub fn decode_list<T: DeserializeOwned>(value: Value, resource: &str) -> Vec<T> {
    normalize_list(value)
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(resource, error = %e, "skipping undecodable record");
                None
            }
        })
        .collect()
}
