//! Path resolver: navigates a dotted selector against a live record.
//!
//! Mirrors the reflection-based navigation of the original collaborator this
//! crate's evaluator depends on: at each segment, the resolver picks a navigation
//! strategy by the *current* value's runtime shape, not by any static schema.

use crate::value::Value;

/// Resolves `selector` (dotted segments) against `record`, returning the
/// terminal value.
///
/// Navigation per segment, by the shape of the value reached so far:
/// - `Array`: the segment is parsed as a non-negative integer index.
/// - `Object`: the segment is looked up as a key.
/// - anything else (`Null`, scalar): the segment cannot be resolved further.
///
/// Returns `None` on any unresolvable segment — a missing field, an out-of-range
/// index, or indexing into a scalar. Callers (principally sentinel expansion in
/// the evaluator) treat `None` as "leave this segment alone", never as a hard
/// error.
pub fn field_by_name<'a>(selector: &str, record: &'a Value) -> Option<&'a Value> {
    resolve_segments(&selector.split('.').collect::<Vec<_>>(), record)
}

/// Same navigation as [`field_by_name`] but over a pre-split segment list, used
/// by the evaluator when it already holds the cumulative prefix as segments.
pub fn resolve_segments<'a>(segments: &[&str], record: &'a Value) -> Option<&'a Value> {
    let mut current = record;
    for segment in segments {
        current = step(current, segment)?;
    }
    Some(current)
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Array(items) => {
            let idx: usize = segment.parse().ok()?;
            items.get(idx)
        }
        Value::Object(fields) => fields.get(segment),
        _ => None,
    }
}

/// Resolves `selector` and, if the terminal value is a sequence, returns its
/// length. Fails (returns `None`) for any selector whose terminal value is not
/// an array, including an unresolvable selector.
pub fn sequence_length(selector: &str, record: &Value) -> Option<usize> {
    field_by_name(selector, record).and_then(|v| v.as_array().map(<[Value]>::len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn sample() -> Value {
        let mut nested = IndexMap::new();
        nested.insert(
            "SS".to_string(),
            Value::Array(vec![
                Value::String("SS1U".into()),
                Value::String("SS2UX".into()),
            ]),
        );
        nested.insert("I".to_string(), Value::Int(12));
        Value::Object(nested)
    }

    #[test]
    fn resolves_field_by_name() {
        let record = sample();
        assert_eq!(field_by_name("I", &record), Some(&Value::Int(12)));
    }

    #[test]
    fn resolves_array_index() {
        let record = sample();
        assert_eq!(
            field_by_name("SS.0", &record),
            Some(&Value::String("SS1U".into()))
        );
    }

    #[test]
    fn reports_sequence_length() {
        let record = sample();
        assert_eq!(sequence_length("SS", &record), Some(2));
    }

    #[test]
    fn missing_field_resolves_to_none() {
        let record = sample();
        assert_eq!(field_by_name("Missing", &record), None);
    }

    #[test]
    fn out_of_range_index_resolves_to_none() {
        let record = sample();
        assert_eq!(field_by_name("SS.99", &record), None);
    }

    #[test]
    fn sequence_length_of_scalar_is_none() {
        let record = sample();
        assert_eq!(sequence_length("I", &record), None);
    }
}
