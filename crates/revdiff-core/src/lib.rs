//! revdiff-core — validator and evaluator for revdiff statements.
//!
//! A statement asserts whether the diff between two records satisfies a
//! declarative boolean predicate: groups of `AND`/`OR` over `EVAL` leaves, each
//! comparing a (possibly wildcard- or sentinel-indexed) field path against a
//! typed literal. This crate owns everything past tokenisation — the record
//! model ([`Value`]), the change log a statement is evaluated against
//! ([`Change`], [`Diff`]), the path resolver, the structural validator, and the
//! stack-based evaluator — and consumes [`revdiff_lex`] for tokenisation.
//!
//! ```
//! use revdiff_core::{differential, Value};
//!
//! let before = Value::from(serde_json::json!({"status": "open"}));
//! let after = Value::from(serde_json::json!({"status": "closed"}));
//! let diff = differential(before, after);
//! assert_eq!(diff.evaluate(r#"EVAL(status => "closed")"#).unwrap(), true);
//! ```

pub mod change;
pub mod coerce;
pub mod edge_cases;
pub mod error;
pub mod path;
pub mod struct_diff;
pub mod validator;
pub mod value;
pub mod wildcard;

mod evaluator;

pub use change::{Change, ChangeKind};
pub use error::EvalError;
pub use value::{to_value, Value};

/// The collection of changes between two records, plus the records themselves.
///
/// This re-exports [`change::Diff`] at the crate root, since it is the crate's
/// primary entry point alongside [`differential`].
pub type Diff = change::Diff;

impl Diff {
    /// Validates and evaluates `statement` against this diff.
    ///
    /// Returns `Err` for any statement a careful caller should reject outright
    /// (mismatched parentheses, wrong EVAL arity, forbidden literal/operator
    /// combinations); returns `Ok(false)` for a well-formed statement whose
    /// predicate simply does not hold.
    pub fn evaluate(&self, statement: &str) -> Result<bool, EvalError> {
        let tokens = revdiff_lex::lex(statement);
        evaluator::evaluate(&tokens, self)
    }

    /// A human-readable rendering of every change in this diff, one per line, in
    /// `kind path: from -> to` form.
    ///
    /// This is deliberately the simplest possible pretty-printer: a host that
    /// wants a richer textual diff view is expected to build its own from
    /// [`Diff::changes`] (the pretty-printer is explicitly out of scope for this
    /// crate beyond this convenience).
    pub fn human_diff(&self) -> String {
        self.changes
            .iter()
            .map(|c| {
                format!(
                    "{:?} {}: {} -> {}",
                    c.kind,
                    c.path_key(),
                    c.from,
                    c.to
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Builds a [`Diff`] from two records using the crate's own structural differ.
///
/// A host with its own structural-diff implementation can instead construct a
/// `Diff` directly via [`change::Diff::from_changes`].
pub fn differential(a: impl Into<Value>, b: impl Into<Value>) -> Diff {
    let original = a.into();
    let new = b.into();
    let changes = struct_diff::diff(&original, &new);
    change::Diff::from_changes(original, new, changes)
}
