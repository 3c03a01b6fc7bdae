//! Cross-cutting edge-case tests for validation and evaluation.

#[cfg(test)]
mod tests {
    use crate::change::{Change, ChangeKind, Diff};
    use crate::error::EvalError;
    use crate::value::Value;

    fn diff_with(changes: Vec<Change>) -> Diff {
        Diff::from_changes(Value::Null, Value::Null, changes)
    }

    #[test]
    fn edge_empty_statement_is_rejected() {
        let diff = diff_with(vec![]);
        assert_eq!(diff.evaluate("").unwrap_err(), EvalError::EmptyStatement);
    }

    #[test]
    fn edge_whitespace_only_statement_is_rejected() {
        let diff = diff_with(vec![]);
        assert_eq!(
            diff.evaluate("   \n\t  ").unwrap_err(),
            EvalError::EmptyStatement
        );
    }

    #[test]
    fn edge_deeply_nested_groups_reduce_correctly() {
        let diff = diff_with(vec![Change::new(
            ChangeKind::Update,
            vec!["I".into()],
            Value::Int(1),
            Value::Int(2),
        )]);
        let stmt = "AND(OR(AND(EVAL(I => 2)), EVAL(I =GT> 99)))";
        assert_eq!(diff.evaluate(stmt), Ok(true));
    }

    #[test]
    fn edge_wrong_eval_arity_is_rejected() {
        let diff = diff_with(vec![]);
        let err = diff.evaluate(r#"EVAL(S, "x")"#).unwrap_err();
        assert!(matches!(err, EvalError::InvalidEvalArity(_)));
    }

    #[test]
    fn edge_comment_does_not_affect_evaluation() {
        let diff = diff_with(vec![Change::new(
            ChangeKind::Update,
            vec!["S".into()],
            Value::String("x".into()),
            Value::String("y".into()),
        )]);
        let stmt = r#"EVAL(S /* comment */ => "y")"#;
        assert_eq!(diff.evaluate(stmt), Ok(true));
    }

    #[test]
    fn edge_wildcard_with_no_matching_changes() {
        let diff = diff_with(vec![]);
        assert_eq!(diff.evaluate("EVAL(Missing.* => *)"), Ok(false));
        assert_eq!(diff.evaluate("EVAL(Missing.* =!> *)"), Ok(true));
    }

    #[test]
    fn edge_float_literal_with_trailing_zero() {
        let diff = diff_with(vec![Change::new(
            ChangeKind::Update,
            vec!["F".into()],
            Value::Float(1.0),
            Value::Float(2.50),
        )]);
        assert_eq!(diff.evaluate("EVAL(F => 2.50)"), Ok(true));
    }

    #[test]
    fn edge_negative_int_literal() {
        let diff = diff_with(vec![Change::new(
            ChangeKind::Update,
            vec!["I".into()],
            Value::Int(0),
            Value::Int(-5),
        )]);
        assert_eq!(diff.evaluate("EVAL(I => -5)"), Ok(true));
    }

    #[test]
    fn edge_nil_literal_matches_null_value() {
        let diff = diff_with(vec![Change::new(
            ChangeKind::Update,
            vec!["NTP".into()],
            Value::String("x".into()),
            Value::Null,
        )]);
        assert_eq!(diff.evaluate("EVAL(NTP => nil)"), Ok(true));
    }
}
