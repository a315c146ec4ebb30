use vector2d::greeting::{add, hello, multiply};

#[test]
fn test_hello() {
    assert_eq!(hello(Some("World!")), "Hello World!");
    assert_eq!(hello(None), "Hello world");
}

#[test]
fn test_add() {
    assert_eq!(add(1, 2), 3);
    assert_eq!(add(i64::MAX, i64::MAX), 2 * i64::MAX as i128);
}

#[test]
fn test_multiply() {
    assert_eq!(multiply(2.5, 2), 5.0);
}
