use crate::{
    predicate::{Predicate, eval},
    test_fixtures::row,
    value::Value,
};

#[test]
fn compare_eq_matches_present_values() {
    let row = row(&[("name", Value::Text("ice".to_string()))]);

    assert!(eval(&row, &Predicate::eq("name", "ice")));
    assert!(!eval(&row, &Predicate::eq("name", "fire")));
}

#[test]
fn missing_fields_never_match_comparisons() {
    let row = row(&[]);

    assert!(!eval(&row, &Predicate::eq("name", "ice")));
    assert!(!eval(&row, &Predicate::ne("name", "ice")));
}

#[test]
fn in_matches_list_membership() {
    let row = row(&[("age", Value::Int(2))]);
    let predicate = Predicate::in_("age", vec![Value::Int(1), Value::Int(2)]);

    assert!(eval(&row, &predicate));
}

#[test]
fn is_null_requires_a_present_absent_marker() {
    let with_null = row(&[("deleted_at", Value::None)]);
    let without = row(&[]);

    assert!(eval(&with_null, &Predicate::is_null("deleted_at")));
    assert!(!eval(&without, &Predicate::is_null("deleted_at")));
}

#[test]
fn is_missing_distinguishes_absent_fields() {
    let with_null = row(&[("deleted_at", Value::None)]);
    let without = row(&[]);

    assert!(!eval(&with_null, &Predicate::is_missing("deleted_at")));
    assert!(eval(&without, &Predicate::is_missing("deleted_at")));
}

#[test]
fn boolean_combinators_evaluate_recursively() {
    let row = row(&[
        ("a", Value::Int(1)),
        ("b", Value::Int(2)),
    ]);

    let both = Predicate::And(vec![Predicate::eq("a", 1_i64), Predicate::eq("b", 2_i64)]);
    let either = Predicate::Or(vec![Predicate::eq("a", 9_i64), Predicate::eq("b", 2_i64)]);
    let neither = Predicate::not(both.clone());

    assert!(eval(&row, &both));
    assert!(eval(&row, &either));
    assert!(!eval(&row, &neither));
}
