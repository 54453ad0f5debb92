//! Helpers for looking at `serde_json::Value` input the way rules need it

use std::borrow::Cow;

use serde_json::Value;

/// Returns `true` if the value counts as absent.
///
/// Blank values are `null`, `false`, the number zero, the string `"0"`,
/// strings that are empty or whitespace only, and empty arrays or objects.
///
/// Optional fields holding a blank value are skipped entirely, and the
/// `notBlank` rule is the exact negation of this predicate.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.trim().is_empty() || text == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Returns the textual form a string rule should test.
///
/// Strings are borrowed, numbers are rendered in decimal; every other value
/// has no textual form.
pub fn as_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(text) => Some(Cow::Borrowed(text.as_str())),
        Value::Number(number) => Some(Cow::Owned(number.to_string())),
        _ => None,
    }
}

/// Returns the numeric form of a value, parsing numeric strings.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite()),
        _ => None,
    }
}

/// Returns the JSON type name of a value, for diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
