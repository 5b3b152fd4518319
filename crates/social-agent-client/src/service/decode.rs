use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Pulls a list of `T` out of a response that is either a bare array or an
/// object holding the array under `key`. Entries that do not parse are
/// skipped.
pub(super) fn items<T: DeserializeOwned>(payload: &Value, key: &str, context: &str) -> Vec<T> {
    let raw: &[Value] = match payload {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => map.get(key).and_then(Value::as_array).map_or(&[][..], Vec::as_slice),
        _ => &[][..],
    };

    raw.iter()
        .filter_map(|item| match serde_json::from_value::<T>(item.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!(context, error = %e, "skipping malformed entry in response");
                None
            }
        })
        .collect()
}

/// A caption as the backends send it: bare text or a record carrying `caption`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CaptionText {
    Plain(String),
    Detailed { caption: String },
}

/// Caption text from either shape; `None` for anything else.
pub(super) fn caption(value: &Value) -> Option<String> {
    match serde_json::from_value::<CaptionText>(value.clone()).ok()? {
        CaptionText::Plain(text) | CaptionText::Detailed { caption: text } => Some(text),
    }
}

/// RFC 3339 timestamp, or a naive ISO-8601 one read as UTC.
pub(super) fn timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let text = value.as_str()?;
    DateTime::parse_from_rfc3339(text)
        .map(|t| t.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|n| n.and_utc())
        })
}
