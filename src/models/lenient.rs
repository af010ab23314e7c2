//! Forgiving field decoders for lawyer profile documents.
//!
//! Profiles come from storage written by several schema generations, so a
//! missing, null, or wrong-typed field falls back to its zero value instead
//! of rejecting the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode text, rendering numeric identifiers as strings; anything else is empty
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let text = match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    Ok(text)
}

/// Decode a number, accepting numeric strings; anything else is `0.0`
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(as_number).unwrap_or(0.0))
}

/// Decode a non-negative count; negatives and fractions are truncated toward zero
pub fn u32_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let count = value
        .as_ref()
        .and_then(as_number)
        .map(|n| n.clamp(0.0, u32::MAX as f64) as u32)
        .unwrap_or(0);
    Ok(count)
}

/// Decode a flag, accepting `"true"`/`"yes"`/`"1"` and non-zero numbers
pub fn bool_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let flag = match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1"
        ),
        _ => false,
    };
    Ok(flag)
}

/// Decode expertise labels from a list or a comma-separated string
///
/// Labels are trimmed, blanks dropped, and case-insensitive duplicates
/// collapsed onto their first spelling.
pub fn category_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let raw: Vec<String> = match value {
        Some(Value::String(s)) => s.split(',').map(str::to_string).collect(),
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    let mut labels: Vec<String> = Vec::with_capacity(raw.len());
    for label in raw {
        let label = label.trim();
        if label.is_empty() || labels.iter().any(|l| l.eq_ignore_ascii_case(label)) {
            continue;
        }
        labels.push(label.to_string());
    }
    Ok(labels)
}

fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}
