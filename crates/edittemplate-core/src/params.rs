//! Loosely-typed plugin parameters.
//!
//! The host's parameter storage hands plugin settings over as a JSON
//! object whose values may be strings, numbers, or booleans regardless of
//! the declared setting type: "1" and 1 are both valid booleans, "7" and 7
//! both valid ids, and multi-select values show up either as arrays or as
//! comma-separated strings. All of that looseness is normalized here; the
//! rest of the workspace only ever sees typed values.

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur when taking over a parameter document.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The parameter document was not a JSON object.
    #[error("Expected a JSON object of plugin parameters, got {0}")]
    NotAnObject(&'static str),
}

/// A bag of plugin parameters with typed, defaulting accessors.
///
/// Accessors never fail: a missing key, a null value, or a value that will
/// not coerce all yield the caller's default.
#[derive(Debug, Clone, Default)]
pub struct Params {
    values: Map<String, Value>,
}

impl Params {
    /// Take over a parameter document from the host.
    pub fn from_value(value: Value) -> Result<Self, ParamsError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(ParamsError::NotAnObject(json_type_name(&other))),
        }
    }

    /// An empty parameter bag; every accessor yields its default.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Raw access to a parameter value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String parameter with a default.
    ///
    /// Numbers and booleans coerce to their display form.
    pub fn str_or(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .and_then(coerce_str)
            .unwrap_or_else(|| default.to_string())
    }

    /// Integer parameter with a default.
    ///
    /// Numeric strings are trimmed and parsed; booleans coerce to 0/1.
    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        self.values
            .get(key)
            .and_then(coerce_int)
            .unwrap_or(default)
    }

    /// Boolean parameter with a default.
    ///
    /// Accepts "1"/"true"/"yes"/"on" and "0"/"false"/"no"/"off"/"" (ASCII
    /// case-insensitive) as well as numbers, where nonzero is true.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.values
            .get(key)
            .and_then(coerce_bool)
            .unwrap_or(default)
    }

    /// Integer-list parameter with a default.
    ///
    /// Accepts a JSON array of numbers or numeric strings, a
    /// comma-separated string, or a single scalar. Entries that will not
    /// coerce are skipped.
    pub fn int_list_or(&self, key: &str, default: &[i64]) -> Vec<i64> {
        match self.values.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(coerce_int).collect(),
            Some(Value::String(raw)) => raw
                .split(',')
                .filter_map(|entry| entry.trim().parse::<i64>().ok())
                .collect(),
            Some(other) => coerce_int(other)
                .map(|id| vec![id])
                .unwrap_or_else(|| default.to_vec()),
            None => default.to_vec(),
        }
    }
}

/// JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Coerce a single JSON value to an integer.
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

/// Coerce a single JSON value to a boolean.
fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "" | "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Coerce a single JSON value to a string.
fn coerce_str(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Params {
        Params::from_value(value).unwrap()
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(Params::from_value(json!([1, 2])).is_err());
        assert!(Params::from_value(json!("text")).is_err());
        assert!(Params::from_value(json!({})).is_ok());
    }

    #[test]
    fn test_int_coercion() {
        let p = params(json!({"a": 7, "b": "7", "c": " 7 ", "d": "junk", "e": true}));

        assert_eq!(p.int_or("a", 0), 7);
        assert_eq!(p.int_or("b", 0), 7);
        assert_eq!(p.int_or("c", 0), 7);
        assert_eq!(p.int_or("d", 3), 3);
        assert_eq!(p.int_or("e", 0), 1);
        assert_eq!(p.int_or("missing", 9), 9);
    }

    #[test]
    fn test_bool_coercion() {
        let p = params(json!({
            "a": 1, "b": "1", "c": "true", "d": true, "e": "ON",
            "f": 0, "g": "0", "h": "", "i": "maybe"
        }));

        assert!(p.bool_or("a", false));
        assert!(p.bool_or("b", false));
        assert!(p.bool_or("c", false));
        assert!(p.bool_or("d", false));
        assert!(p.bool_or("e", false));
        assert!(!p.bool_or("f", true));
        assert!(!p.bool_or("g", true));
        assert!(!p.bool_or("h", true));
        // Unrecognized strings fall back to the default
        assert!(p.bool_or("i", true));
        assert!(!p.bool_or("missing", false));
    }

    #[test]
    fn test_str_coercion() {
        let p = params(json!({"a": "css", "b": 12, "c": null}));

        assert_eq!(p.str_or("a", ""), "css");
        assert_eq!(p.str_or("b", ""), "12");
        assert_eq!(p.str_or("c", "x"), "x");
        assert_eq!(p.str_or("missing", "x"), "x");
    }

    #[test]
    fn test_int_list_from_array() {
        let p = params(json!({"ids": [12, "15", "junk", 20.0]}));

        assert_eq!(p.int_list_or("ids", &[]), vec![12, 15, 20]);
    }

    #[test]
    fn test_int_list_from_comma_string() {
        let p = params(json!({"ids": "12, 15,junk,20"}));

        assert_eq!(p.int_list_or("ids", &[]), vec![12, 15, 20]);
    }

    #[test]
    fn test_int_list_from_scalar_and_missing() {
        let p = params(json!({"one": 12, "none": null}));

        assert_eq!(p.int_list_or("one", &[]), vec![12]);
        assert_eq!(p.int_list_or("none", &[1]), vec![1]);
        assert_eq!(p.int_list_or("missing", &[1]), vec![1]);
    }
}
