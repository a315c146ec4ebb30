use std::collections::HashMap;

use vector2d::*;

#[test]
fn constructor() {
    let v = ShortVector2d::new(3, 4).unwrap();
    assert_eq!(v.x(), 3.0f32);
    assert_eq!(v.y(), 4.0f32);
    assert!(ShortVector2d::new("three", 4).is_err());
    assert!(matches!(
        ShortVector2d::new(1e39, 0),
        Err(VectorError::OutOfRange {
            type_code: TypeCode::Single,
            ..
        })
    ));
}

#[test]
fn type_code() {
    assert_eq!(ShortVector2d::TYPE_CODE, TypeCode::Single);
    assert_eq!(ShortVector2d::TYPE_CODE.as_char(), 'f');
    let v = ShortVector2d::new(3, 4).unwrap();
    assert_eq!(v.to_bytes()[0], b'f');
}

#[test]
fn encoding_is_smaller() {
    let sv = ShortVector2d::new(3.14159, 2.71828).unwrap();
    let v = Vector2d::new(3.14159, 2.71828).unwrap();

    let sv_bytes = sv.to_bytes();
    let v_bytes = v.to_bytes();
    assert!(sv_bytes.len() < v_bytes.len());
    assert_eq!(sv_bytes.len(), 1 + 2 * 4);
    assert_eq!(v_bytes.len(), 1 + 2 * 8);
    assert_eq!(std::mem::size_of::<ShortVector2d>(), 8);
}

#[test]
fn bytes_round_trip() {
    let sv1 = ShortVector2d::new(3.14, 2.71).unwrap();
    let sv2 = ShortVector2d::from_bytes(&sv1.to_bytes()).unwrap();
    assert_eq!(sv1, sv2);
    assert!(sv2.fuzzy_eq_eps(&(3.14f64, 2.71f64), 1e-6));
}

#[test]
fn precision_differences() {
    let precise_value = 1.12345678901234;

    let sv = ShortVector2d::new(precise_value, precise_value).unwrap();
    let v = Vector2d::new(precise_value, precise_value).unwrap();

    let sv_bytes = sv.to_bytes();
    let sv2 = ShortVector2d::from_bytes(&sv_bytes).unwrap();
    let v2 = Vector2d::from_bytes(&v.to_bytes()).unwrap();

    assert_ne!(v2, sv2);
    assert_ne!(v2.x(), f64::from(sv2.x()));

    let mut sv_x_bytes = [0u8; 4];
    sv_x_bytes.copy_from_slice(&sv_bytes[1..5]);
    let sv_x = f64::from(f32::from_ne_bytes(sv_x_bytes));
    assert!((v2.x() - precise_value).abs() < (sv_x - precise_value).abs());
    assert!(((sv_x - precise_value) / precise_value).abs() < 1e-6);
}

#[test]
fn shared_behaviour() {
    let sv = ShortVector2d::new(3, 4).unwrap();
    assert_eq!(sv.magnitude(), 5.0);
    assert_eq!(sv.angle(), 4.0f32.atan2(3.0));
    assert_eq!(sv.format_with(".2fp").unwrap(), "<5.00, 0.93>");
    assert_eq!(format!("{:?}", sv), "ShortVector2d(3.0, 4.0)");
    assert_eq!(sv.to_string(), "(3.0, 4.0)");
    assert_eq!(sv.kind(), VectorKind::Other);
}

#[test]
fn short_repr_uses_single_precision_text() {
    let sv = ShortVector2d::new(0.1, 2.5).unwrap();
    assert_eq!(format!("{:?}", sv), "ShortVector2d(0.1, 2.5)");
}

#[test]
fn mixed_widths() {
    let sv = ShortVector2d::new(3, 4).unwrap();
    let v = Vector2d::new(1, 2).unwrap();

    assert_ne!(sv, v);
    assert_eq!(ShortVector2d::new(1, 2).unwrap(), v);
    assert_eq!(v, ShortVector2d::new(1, 2).unwrap());
    assert_eq!(
        ShortVector2d::new(1, 2).unwrap().hash_value(),
        v.hash_value()
    );

    let mut d = HashMap::new();
    d.insert(sv, "short_vector");
    assert!(d.contains_key(&ShortVector2d::new(3, 4).unwrap()));
}

#[test]
fn polymorphic_decode() {
    let sv = ShortVector2d::new(1, 2).unwrap();
    let v = Vector2d::new(1, 2).unwrap();

    match decode(&sv.to_bytes()).unwrap() {
        AnyVector2d::Single(decoded) => assert_eq!(decoded, sv),
        other => panic!("expected a short vector, got {:?}", other),
    }
    match decode(&v.to_bytes()).unwrap() {
        AnyVector2d::Double(decoded) => assert_eq!(decoded, v),
        other => panic!("expected a double vector, got {:?}", other),
    }

    // the base type reads either encoding
    assert_eq!(Vector2d::from_bytes(&sv.to_bytes()).unwrap(), v);
}
