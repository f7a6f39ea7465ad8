use super::*;

#[test]
fn absent_marker_normalizes_to_empty_sequence() {
    assert!(Value::None.into_sequence().is_empty());
}

#[test]
fn scalar_normalizes_to_singleton() {
    let seq = Value::Text("fr".to_string()).into_sequence();
    assert_eq!(seq, vec![Value::Text("fr".to_string())]);
}

#[test]
fn list_normalizes_to_its_elements() {
    let seq = Value::List(vec![Value::Int(1), Value::None]).into_sequence();
    assert_eq!(seq, vec![Value::Int(1), Value::None]);
}

#[test]
fn text_coercion_renders_scalars() {
    assert_eq!(Value::Text("Hello".to_string()).to_text(), "Hello");
    assert_eq!(Value::Int(-7).to_text(), "-7");
    assert_eq!(Value::Uint(7).to_text(), "7");
    assert_eq!(Value::Bool(true).to_text(), "true");
}

#[test]
fn text_coercion_renders_absent_marker_as_empty() {
    assert_eq!(Value::None.to_text(), "");
}

#[test]
fn serde_round_trips_lists() {
    let value = Value::List(vec![Value::Text("a".to_string()), Value::None]);
    let encoded = serde_json::to_string(&value).unwrap();
    let decoded: Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, value);
}
