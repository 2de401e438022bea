use super::*;
use crate::format;
use pretty_assertions::assert_eq;

#[test]
fn test_type_names() {
    let arena = Bump::new();
    assert_eq!(Value::Undefined.type_name(), "undefined");
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::bool(true).type_name(), "boolean");
    assert_eq!(Value::int(1).type_name(), "number");
    assert_eq!(Value::str(&arena, "s").type_name(), "string");
    assert_eq!(Value::array(&arena, &[]).type_name(), "array");
}

#[test]
fn test_extractors() {
    let arena = Bump::new();
    assert_eq!(Value::number(1.5).as_number(), Ok(1.5));
    assert_eq!(Value::str(&arena, "hi").as_str(), Ok("hi"));
    assert_eq!(
        Value::Null.as_array().err(),
        Some(TypeError {
            expected: "array",
            found: "null",
        })
    );
    assert_eq!(
        Value::bool(true).as_number().unwrap_err().to_string(),
        "expected number, found boolean"
    );
    assert!(Value::int(3).as_function().is_err());
}

#[test]
fn test_truthiness() {
    let arena = Bump::new();
    let falsy = [
        Value::Undefined,
        Value::Null,
        Value::bool(false),
        Value::number(0.0),
        Value::number(-0.0),
        Value::number(f64::NAN),
        Value::str(&arena, ""),
    ];
    for value in falsy {
        assert!(!value.is_truthy(), "{value:?} should be falsy");
    }
    let truthy = [
        Value::bool(true),
        Value::number(-1.0),
        Value::number(f64::INFINITY),
        Value::str(&arena, "0"),
        Value::array(&arena, &[]),
    ];
    for value in truthy {
        assert!(value.is_truthy(), "{value:?} should be truthy");
    }
}

#[test]
fn test_strict_equality() {
    let arena = Bump::new();
    assert!(Value::number(f64::NAN) != Value::number(f64::NAN));
    assert!(Value::number(0.0) == Value::number(-0.0));
    assert!(Value::str(&arena, "a") == Value::str(&arena, "a"));
    assert!(Value::Null != Value::Undefined);
    assert!(Value::int(1) != Value::str(&arena, "1"));

    let array = Value::array(&arena, &[Value::int(1)]);
    let copy = Value::array(&arena, array.as_array().unwrap());
    assert!(array == array);
    assert!(array != copy);
}

#[test]
fn test_same_value_zero() {
    assert!(Value::number(f64::NAN).same_value_zero(&Value::number(f64::NAN)));
    assert!(Value::number(-0.0).same_value_zero(&Value::number(0.0)));
    assert!(!Value::number(1.0).same_value_zero(&Value::bool(true)));
}

#[test]
fn test_display() {
    let arena = Bump::new();
    let nested = Value::array(&arena, &[Value::int(2), Value::Null, Value::int(3)]);
    let array = Value::array(
        &arena,
        &[Value::int(1), Value::Undefined, Value::str(&arena, "a"), nested],
    );
    assert_eq!(format!("{}", array), "1,,a,2,,3");
    assert_eq!(format!("{}", Value::number(-0.0)), "0");
    assert_eq!(format!("{}", Value::number(2.5)), "2.5");
    assert_eq!(format!("{}", Value::number(1e20)), "100000000000000000000");
    assert_eq!(format!("{}", Value::number(f64::NEG_INFINITY)), "-Infinity");
}

#[test]
fn test_debug_is_literal_like() {
    let arena = Bump::new();
    let array = Value::array(
        &arena,
        &[
            Value::int(1),
            Value::str(&arena, "a\"b"),
            Value::Null,
            Value::array(&arena, &[Value::number(f64::NAN)]),
        ],
    );
    assert_eq!(format!("{:?}", array), r#"[1, "a\"b", null, [NaN]]"#);
}

#[test]
fn test_record_builder_sorts_and_rejects_duplicates() {
    let arena = Bump::new();
    let record = Value::record_builder(&arena)
        .bind("b", Value::int(2))
        .bind("a", Value::int(1))
        .build()
        .unwrap();
    assert_eq!(format!("{:?}", record), "{ a = 1, b = 2 }");
    let view = record.as_record().unwrap();
    assert_eq!(view.len(), 2);
    assert_eq!(view.get("b").and_then(|v| v.as_number().ok()), Some(2.0));
    assert!(view.get("c").is_none());

    let duplicate = Value::record_builder(&arena)
        .bind("x", Value::int(1))
        .bind("x", Value::int(2))
        .build();
    assert_eq!(
        duplicate.err(),
        Some(binder::Error::DuplicateBinding(vec!["x".to_string()]))
    );
}

#[test]
fn test_display_uses_exponent_outside_plain_range() {
    let render = |n: f64| format!("{}", Value::number(n));
    assert_eq!(render(1e21), "1e+21");
    assert_eq!(render(-1.5e300), "-1.5e+300");
    assert_eq!(render(1e-7), "1e-7");
    assert_eq!(render(1.23e-18), "1.23e-18");
    assert_eq!(render(0.000001), "0.000001");
    assert_eq!(render(123456.5), "123456.5");
}
