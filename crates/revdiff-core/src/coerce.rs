//! Cross-kind value coercion.
//!
//! The evaluator compares a statement's literal (parsed from its own token text)
//! against a `Change`'s `to`/`from` value (already a live [`Value`]). The two
//! sides rarely agree on representation — a change's `to` might be a JSON number
//! where the literal is typed as a duration string — so comparison always goes
//! through this permissive coercion layer rather than requiring exact `Value`
//! equality.

use crate::value::Value;
use chrono::{DateTime, FixedOffset};
use std::time::Duration;

/// Coerces a live [`Value`] into the handful of scalar shapes a statement literal
/// can be. Every method returns `None` rather than erroring on a shape mismatch —
/// coercion failures fold into "this match does not satisfy the predicate", never
/// into a validation error.
pub trait Coerce {
    fn coerce_int(&self) -> Option<i64>;
    fn coerce_float(&self) -> Option<f64>;
    fn coerce_string(&self) -> Option<String>;
    fn coerce_duration(&self) -> Option<Duration>;
    fn coerce_time(&self) -> Option<DateTime<FixedOffset>>;
}

impl Coerce for Value {
    fn coerce_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f) => Some(*f as i64),
            Value::String(s) => s.parse().ok(),
            Value::Bool(b) => Some(*b as i64),
            _ => None,
        }
    }

    fn coerce_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    fn coerce_string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn coerce_duration(&self) -> Option<Duration> {
        match self {
            Value::String(s) => humantime::parse_duration(s).ok(),
            Value::Int(i) if *i >= 0 => Some(Duration::from_nanos(*i as u64)),
            _ => None,
        }
    }

    fn coerce_time(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Value::String(s) => DateTime::parse_from_rfc3339(s).ok(),
            _ => None,
        }
    }
}

/// Parses a literal's own text (as scanned by the lexer) into each coercible
/// shape — used on the statement side of a comparison, mirroring [`Coerce`] on
/// the change-value side.
pub fn parse_int(text: &str) -> Option<i64> {
    text.parse().ok()
}

pub fn parse_float(text: &str) -> Option<f64> {
    text.parse().ok()
}

pub fn parse_duration(text: &str) -> Option<Duration> {
    humantime::parse_duration(text).ok()
}

pub fn parse_time(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text).ok()
}
