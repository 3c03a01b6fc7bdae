//! Wildcard path matching between an EVAL's (possibly sentinel-expanded) filter
//! and a [`crate::Change`]'s path.

/// True iff `filter` matches `path`: every segment of `filter` either equals the
/// corresponding segment of `path`, or is the wildcard `"*"`. `path` may be longer
/// than `filter` — trailing segments beyond the filter's length are unconstrained.
/// `path` shorter than `filter` never matches.
pub fn wildcard_path_match(filter: &[String], path: &[String]) -> bool {
    if path.len() < filter.len() {
        return false;
    }
    filter
        .iter()
        .zip(path.iter())
        .all(|(f, p)| f == "*" || f == p)
}
