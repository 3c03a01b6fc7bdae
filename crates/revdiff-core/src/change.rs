//! The change log a statement is evaluated against.

use crate::value::Value;
use rustc_hash::FxHashMap;

/// What kind of edit a [`Change`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Create,
    Update,
    Delete,
}

/// A single field-level difference between the original and new record.
///
/// Immutable once produced by [`crate::differential`] or a host's own structural
/// differ.
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    pub kind: ChangeKind,
    pub path: Vec<String>,
    pub from: Value,
    pub to: Value,
}

impl Change {
    pub fn new(kind: ChangeKind, path: Vec<String>, from: Value, to: Value) -> Self {
        Self {
            kind,
            path,
            from,
            to,
        }
    }

    /// The dotted textual form of `path` (`"NTS.0.NSS.0"`), used as the key of
    /// [`Diff::index`].
    pub fn path_key(&self) -> String {
        self.path.join(".")
    }
}

/// The full result of comparing two records: every change between them, plus the
/// two records themselves so the path resolver can navigate the new record when
/// expanding `$first`/`$last` sentinels.
#[derive(Debug, Clone)]
pub struct Diff {
    pub changed: bool,
    pub changes: Vec<Change>,
    pub index: FxHashMap<String, Change>,
    pub original: Value,
    pub new: Value,
}

impl Diff {
    pub fn from_changes(original: Value, new: Value, changes: Vec<Change>) -> Self {
        let index = changes
            .iter()
            .map(|c| (c.path_key(), c.clone()))
            .collect();
        Self {
            changed: !changes.is_empty(),
            changes,
            index,
            original,
            new,
        }
    }

    /// Exact-path lookup into [`Diff::index`]. Provided for callers that only need
    /// equality checks against a known, wildcard-free path; the statement
    /// evaluator itself never calls this and always enumerates `changes` because
    /// statements may use wildcard or sentinel segments.
    pub fn change_at(&self, path: &str) -> Option<&Change> {
        self.index.get(path)
    }
}
