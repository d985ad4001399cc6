//! Accessors for the semi-structured feed shape.
//!
//! Every helper unwraps `{"value": …}` envelopes recursively before looking
//! at the payload, so callers never see the wrapping.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;

/// Strip nested `{"value": …}` envelopes down to the innermost payload.
pub fn unwrap_value(v: &Value) -> &Value {
    let mut current = v;
    while let Some(inner) = current.as_object().and_then(|o| o.get("value")) {
        current = inner;
    }
    current
}

/// Look up `key` on an (possibly wrapped) object and unwrap the result.
pub fn field<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let inner = unwrap_value(obj).as_object()?.get(key)?;
    let inner = unwrap_value(inner);
    if inner.is_null() { None } else { Some(inner) }
}

/// String-valued field. Numbers are stringified (account codes arrive both
/// ways); empty strings count as absent.
pub fn string_field(obj: &Value, key: &str) -> Option<String> {
    let v = field(obj, key)?;
    let s = match v {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if s.is_empty() { None } else { Some(s) }
}

/// Decimal-valued field. Accepts JSON numbers and numeric strings.
pub fn decimal_field(obj: &Value, key: &str) -> Option<Decimal> {
    match field(obj, key)? {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

/// Integer-valued field (sequence numbers, day counts).
pub fn int_field(obj: &Value, key: &str) -> Option<i32> {
    match field(obj, key)? {
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Date-valued field. Accepts `YYYY-MM-DD` as-is and longer timestamp forms
/// by their date prefix; anything unparseable is treated as absent.
pub fn date_field(obj: &Value, key: &str) -> Option<NaiveDate> {
    let s = string_field(obj, key)?;
    // get() rather than indexing: byte 10 may fall inside a multibyte
    // character, and a garbled date must read as absent, not panic.
    let prefix = s.get(..10).unwrap_or(&s);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Line items live under `lineItems.value.items.value` in current feeds, but
/// older exports carry `lineItems.value.items` or a bare `lineItems` array.
pub fn line_items(doc: &Value) -> Vec<Value> {
    let Some(raw) = unwrap_value(doc).as_object().and_then(|o| o.get("lineItems")) else {
        return Vec::new();
    };
    let unwrapped = unwrap_value(raw);
    if let Some(arr) = unwrapped.as_array() {
        return arr.clone();
    }
    unwrap_value(raw)
        .as_object()
        .and_then(|o| o.get("items"))
        .map(unwrap_value)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwraps_nested_value_envelopes() {
        let v = json!({"value": {"value": "inner"}});
        assert_eq!(unwrap_value(&v), &json!("inner"));
    }

    #[test]
    fn field_reads_wrapped_and_bare_shapes() {
        let wrapped = json!({"value": {"invoiceId": {"value": "A-1", "confidence": 0.8}}});
        let bare = json!({"invoiceId": "A-1"});
        assert_eq!(string_field(&wrapped, "invoiceId"), Some("A-1".to_string()));
        assert_eq!(string_field(&bare, "invoiceId"), Some("A-1".to_string()));
    }

    #[test]
    fn decimal_field_accepts_numbers_and_strings() {
        let obj = json!({"a": 12.5, "b": {"value": "7.25"}, "c": "oops"});
        assert_eq!(decimal_field(&obj, "a"), Some(Decimal::new(125, 1)));
        assert_eq!(decimal_field(&obj, "b"), Some(Decimal::new(725, 2)));
        assert_eq!(decimal_field(&obj, "c"), None);
    }

    #[test]
    fn date_field_takes_timestamp_prefix() {
        let obj = json!({"d": "2025-06-01T10:30:00Z", "bad": "June 2025"});
        assert_eq!(
            date_field(&obj, "d"),
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
        assert_eq!(date_field(&obj, "bad"), None);
    }

    #[test]
    fn date_field_tolerates_multibyte_garbage() {
        // The tenth byte lands inside 'é'; this must be absent, not a panic.
        let obj = json!({"d": "2025-06-1é extra", "e": "fälligkeit"});
        assert_eq!(date_field(&obj, "d"), None);
        assert_eq!(date_field(&obj, "e"), None);
    }

    #[test]
    fn line_items_found_in_all_three_layouts() {
        let nested = json!({"lineItems": {"value": {"items": {"value": [{"a": 1}]}}}});
        let flat = json!({"lineItems": {"value": {"items": [{"a": 1}]}}});
        let bare = json!({"lineItems": [{"a": 1}]});
        assert_eq!(line_items(&nested).len(), 1);
        assert_eq!(line_items(&flat).len(), 1);
        assert_eq!(line_items(&bare).len(), 1);
        assert!(line_items(&json!({})).is_empty());
    }
}
