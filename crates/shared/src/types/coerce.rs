//! Lenient coercion of loosely-typed wire values.
//!
//! The backend sends amounts as JSON numbers or numeric strings, dates as
//! plain dates or timestamps, and optional fields as `null`, `""` or not at
//! all. Everything here is total: a value that cannot be read falls back to
//! its default and a warning is logged, since that always means an upstream
//! data issue.
//!
//! The [`lenient`] submodule exposes the same rules as `deserialize_with`
//! helpers for wire structs.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::warn;

/// Parses a decimal from a trimmed string, accepting scientific notation.
#[must_use]
pub fn parse_decimal_str(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Reads an optional decimal.
///
/// `null`, a missing value and `""` are absent. Anything else that is not
/// numeric is present but coerced to zero.
#[must_use]
pub fn optional_decimal(value: &Value, field: &str) -> Option<Decimal> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(parse_decimal_str(s).unwrap_or_else(|| {
            warn!(field, value = %s, "non-numeric amount coerced to zero");
            Decimal::ZERO
        })),
        Value::Number(n) => Some(parse_decimal_str(&n.to_string()).unwrap_or_else(|| {
            warn!(field, value = %n, "out-of-range amount coerced to zero");
            Decimal::ZERO
        })),
        other => {
            warn!(field, value = %other, "unexpected JSON type for amount coerced to zero");
            Some(Decimal::ZERO)
        }
    }
}

/// Reads a decimal, treating absent and unreadable values as zero.
#[must_use]
pub fn decimal_or_zero(value: &Value, field: &str) -> Decimal {
    optional_decimal(value, field).unwrap_or(Decimal::ZERO)
}

/// Parses a date or timestamp string.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (converted to UTC) and naive
/// `YYYY-MM-DDTHH:MM:SS[.f]` / `YYYY-MM-DD HH:MM:SS[.f]` timestamps.
#[must_use]
pub fn parse_datetime_str(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(ts.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}

/// Reads an optional date or timestamp.
#[must_use]
pub fn optional_datetime(value: &Value, field: &str) -> Option<NaiveDateTime> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => {
            let parsed = parse_datetime_str(s);
            if parsed.is_none() {
                warn!(field, value = %s, "unparsable date ignored");
            }
            parsed
        }
        other => {
            warn!(field, value = %other, "unexpected JSON type for date ignored");
            None
        }
    }
}

/// Reads an optional non-empty string. Numbers are rendered as text.
#[must_use]
pub fn optional_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads an optional integer from a number or numeric string.
#[must_use]
pub fn optional_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// `deserialize_with` helpers applying the coercion rules above.
pub mod lenient {
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;
    use serde::de::{self, DeserializeOwned};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use tracing::warn;

    /// Decimal, zero when absent or unreadable.
    pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(super::decimal_or_zero(&value, "amount"))
    }

    /// Decimal that distinguishes absent from zero.
    pub fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(super::optional_decimal(&value, "amount"))
    }

    /// Date or timestamp.
    pub fn opt_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(super::optional_datetime(&value, "date"))
    }

    /// Non-empty string or number rendered as text.
    pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(super::optional_string(&value))
    }

    /// Record ID from a number or numeric string. Unlike the other helpers
    /// this one fails, since a record without an ID cannot be referenced.
    pub fn id<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        super::optional_i64(&value)
            .ok_or_else(|| de::Error::custom(format!("invalid record id: {value}")))
    }

    /// Optional nested record. A value of the wrong shape is dropped.
    pub fn opt_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(serde_json::from_value(value.clone())
            .inspect_err(|e| warn!(value = %value, error = %e, "malformed nested record ignored"))
            .ok())
    }

    /// List of nested records. `null` or a non-array is an empty list and
    /// entries that fail to decode are skipped.
    pub fn vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let items = match Value::deserialize(deserializer)? {
            Value::Array(items) => items,
            Value::Null => return Ok(Vec::new()),
            other => {
                warn!(value = %other, "expected a list, treating as empty");
                return Ok(Vec::new());
            }
        };
        Ok(items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                serde_json::from_value(item)
                    .inspect_err(|e| warn!(index, error = %e, "skipping malformed nested entry"))
                    .ok()
            })
            .collect())
    }
}
