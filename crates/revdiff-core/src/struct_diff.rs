//! A minimal, deterministic structural differ over [`Value`] trees.
//!
//! The statement language itself treats "how the change log was produced" as an
//! external collaborator's problem. This module is the one concrete differ the
//! crate ships so its own test suite (and a host with no differ of its own) has
//! something real to call. It is not a generalized reflection engine over
//! arbitrary host types — a host with richer native records converts to [`Value`]
//! first.

use crate::change::{Change, ChangeKind};
use crate::value::Value;

/// Walks `a` and `b` and produces the flat list of field-level changes between
/// them, in a depth-first, key-order-stable traversal.
pub fn diff(a: &Value, b: &Value) -> Vec<Change> {
    let mut changes = Vec::new();
    diff_into(&mut Vec::new(), a, b, &mut changes);
    changes
}

fn diff_into(path: &mut Vec<String>, a: &Value, b: &Value, out: &mut Vec<Change>) {
    match (a, b) {
        (Value::Object(fa), Value::Object(fb)) => {
            for (key, bv) in fb {
                path.push(key.clone());
                match fa.get(key) {
                    Some(av) => diff_into(path, av, bv, out),
                    None => out.push(Change::new(
                        ChangeKind::Create,
                        path.clone(),
                        Value::Null,
                        bv.clone(),
                    )),
                }
                path.pop();
            }
            for (key, av) in fa {
                if fb.contains_key(key) {
                    continue;
                }
                path.push(key.clone());
                out.push(Change::new(
                    ChangeKind::Delete,
                    path.clone(),
                    av.clone(),
                    Value::Null,
                ));
                path.pop();
            }
        }
        (Value::Array(ia), Value::Array(ib)) => {
            let shared = ia.len().min(ib.len());
            for i in 0..shared {
                path.push(i.to_string());
                diff_into(path, &ia[i], &ib[i], out);
                path.pop();
            }
            for (i, bv) in ib.iter().enumerate().skip(shared) {
                path.push(i.to_string());
                out.push(Change::new(
                    ChangeKind::Create,
                    path.clone(),
                    Value::Null,
                    bv.clone(),
                ));
                path.pop();
            }
            for (i, av) in ia.iter().enumerate().skip(shared) {
                path.push(i.to_string());
                out.push(Change::new(
                    ChangeKind::Delete,
                    path.clone(),
                    av.clone(),
                    Value::Null,
                ));
                path.pop();
            }
        }
        _ => {
            if a != b {
                out.push(Change::new(
                    ChangeKind::Update,
                    path.clone(),
                    a.clone(),
                    b.clone(),
                ));
            }
        }
    }
}
