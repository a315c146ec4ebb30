//! Small demonstration functions.

/// Name greeted by [hello] when none is given.
pub const DEFAULT_NAME: &str = "world";

/// Return a greeting for `name`, or for [DEFAULT_NAME] when `name` is `None`.
///
/// # Examples
///
/// ```
/// # use vector2d::greeting::hello;
/// assert_eq!(hello(Some("World!")), "Hello World!");
/// assert_eq!(hello(None), "Hello world");
/// ```
pub fn hello(name: Option<&str>) -> String {
    format!("Hello {}", name.unwrap_or(DEFAULT_NAME))
}

/// Sum of two integers, widened so every pair of inputs has an exact result.
///
/// ```
/// # use vector2d::greeting::add;
/// assert_eq!(add(i64::MAX, 1), i64::MAX as i128 + 1);
/// ```
#[inline]
pub fn add(a: i64, b: i64) -> i128 {
    i128::from(a) + i128::from(b)
}

/// Multiply a float by an integer.
#[inline]
pub fn multiply(a: f64, b: i64) -> f64 {
    a * b as f64
}
