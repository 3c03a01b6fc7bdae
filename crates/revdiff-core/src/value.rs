//! The record representation the path resolver and structural differ operate over.

use indexmap::IndexMap;
use std::fmt;

/// An owned, structurally recursive stand-in for "an arbitrary record".
///
/// Hosts with their own native record type convert into `Value` before calling
/// [`crate::differential`] — either by hand or via the [`From<serde_json::Value>`]
/// impl below. `Object` preserves insertion order so that change paths are
/// produced deterministically across runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The runtime "shape" used by the path resolver to decide how to navigate a
    /// segment: index into a sequence, look up a map/object key, or dereference.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(fields) => {
                write!(f, "{{")?;
                for (i, (k, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Converts any `Serialize` host type into a `Value` via a `serde_json::Value`
/// round-trip, for hosts that would rather derive `Serialize` than hand-build a
/// `Value` tree.
pub fn to_value<T: serde::Serialize>(value: &T) -> Value {
    Value::from(serde_json::to_value(value).unwrap_or(serde_json::Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_round_trips_field_order() {
        let json: serde_json::Value = serde_json::json!({"b": 1, "a": 2});
        let value = Value::from(json);
        let obj = value.as_object().unwrap();
        let keys: Vec<_> = obj.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn integers_stay_integers() {
        let json: serde_json::Value = serde_json::json!(64);
        assert_eq!(Value::from(json), Value::Int(64));
    }

    #[test]
    fn display_nested_object() {
        let mut fields = IndexMap::new();
        fields.insert("x".to_string(), Value::Int(1));
        let v = Value::Object(fields);
        assert_eq!(format!("{v}"), "{x: 1}");
    }
}
