//! JSON decoding policies shared by every service model.
//!
//! Response decoding is forward compatible:
//!
//! - unknown members are skipped (serde's default; no model uses
//!   `deny_unknown_fields`);
//! - a member declared as an object, map or list that arrives with any other
//!   shape, `null` included, decodes as absent ([`object_or_absent`],
//!   [`list_or_absent`]);
//! - a top-level body that is not an object is an error ([`from_body`]).
//!
//! Timestamps travel as epoch seconds ([`epoch_seconds`]).

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a response body into an operation output.
///
/// An empty (or all-whitespace) body yields the default output. Anything
/// that is not a JSON object at the top level is rejected.
pub fn from_body<T>(body: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(serde_json::Error::custom(format!(
            "expected a JSON object at the top level, found {}",
            kind(&value)
        )));
    }
    T::deserialize(value)
}

/// Deserialize an optional structure or map member, treating any non-object
/// value as absent.
pub fn object_or_absent<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}

/// Deserialize an optional list member, treating any non-array value as
/// absent.
pub fn list_or_absent<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Array(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
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

/// Optional timestamps encoded as epoch seconds with millisecond precision.
///
/// Whole seconds are written as integers, anything finer as a fraction.
/// Decoding also accepts numeric strings and RFC 3339 strings, which some
/// services return in older API versions.
///
/// Use together with `#[serde(default)]`.
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    /// Serialize an optional timestamp.
    #[allow(clippy::ref_option, clippy::cast_precision_loss)]
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            None => serializer.serialize_none(),
            Some(ts) => {
                let millis = ts.timestamp_millis();
                if millis % 1000 == 0 {
                    serializer.serialize_i64(millis / 1000)
                } else {
                    serializer.serialize_f64(millis as f64 / 1000.0)
                }
            }
        }
    }

    /// Deserialize an optional timestamp.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => {
                let ts = if let Some(secs) = n.as_i64() {
                    DateTime::from_timestamp(secs, 0)
                } else {
                    n.as_f64().and_then(from_fractional_seconds)
                };
                ts.map(Some)
                    .ok_or_else(|| D::Error::custom(format!("timestamp {n} is out of range")))
            }
            Some(Value::String(s)) => parse_str(&s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp {s:?}"))),
            Some(other) => Err(D::Error::custom(format!(
                "expected epoch seconds, found {other}"
            ))),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_fractional_seconds(secs: f64) -> Option<DateTime<Utc>> {
        if !secs.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis((secs * 1000.0).round() as i64)
    }

    fn parse_str(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(secs) = s.parse::<f64>() {
            return from_fractional_seconds(secs);
        }
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
