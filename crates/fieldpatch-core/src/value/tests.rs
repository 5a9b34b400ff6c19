use super::*;

#[test]
fn value_reports_its_exact_kind() {
    assert_eq!(Value::from(3u8).kind(), ValueKind::Uint8);
    assert_eq!(Value::from(3i64).kind(), ValueKind::Int64);
    assert_eq!(Value::from(1.5f32).kind(), ValueKind::Float32);
    assert_eq!(Value::from("abc").kind(), ValueKind::Text);
    assert_eq!(Value::from('x').kind(), ValueKind::Char);
}

#[test]
fn numeric_class_follows_width_and_sign() {
    assert_eq!(
        ValueKind::Int16.numeric_class(),
        Some(NumericClass::Signed { bits: 16 })
    );
    assert_eq!(
        ValueKind::Uint64.numeric_class(),
        Some(NumericClass::Unsigned { bits: 64 })
    );
    assert_eq!(
        ValueKind::Float32.numeric_class(),
        Some(NumericClass::Float { bits: 32 })
    );
    assert_eq!(
        ValueKind::Usize.numeric_class(),
        Some(NumericClass::Unsigned { bits: usize::BITS })
    );

    assert!(!ValueKind::Bool.is_numeric());
    assert!(!ValueKind::Char.is_numeric());
    assert!(!ValueKind::Text.is_numeric());
}

#[test]
fn kind_labels_name_the_native_type() {
    assert_eq!(ValueKind::Int32.to_string(), "i32");
    assert_eq!(ValueKind::Float64.label(), "f64");
    assert_eq!(ValueKind::Text.label(), "String");
}

#[test]
fn patch_value_tags_numeric_text_and_concrete_values() {
    let numeric = PatchValue::numeric("42");
    assert!(numeric.is_numeric());
    assert_eq!(numeric, PatchValue::from(NumericLiteral::from("42")));

    // decimal text given as &str is a string value, not a literal
    let text = PatchValue::from("42");
    assert!(!text.is_numeric());
    assert_eq!(text, PatchValue::Concrete(Value::Text("42".into())));

    assert_eq!(
        PatchValue::from(7u16),
        PatchValue::Concrete(Value::Uint16(7))
    );
}

#[test]
fn numeric_literal_serializes_as_plain_text() {
    let literal = NumericLiteral::new("-12.5");

    assert_eq!(literal.to_string(), "-12.5");
    assert_eq!(literal.as_str(), "-12.5");
    assert_eq!(serde_json::to_string(&literal).unwrap(), r#""-12.5""#);
}
