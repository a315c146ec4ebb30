use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{format_spec::python_exponent, FormatSpec, TypeCode};
use crate::{
    core::traits::{FuzzyEq, IntoCoordinate, Real, Vector2Ref},
    error::{Result, VectorError},
};

/// Immutable two dimensional vector with coordinates stored at the width of `T`.
///
/// Use the [Vector2d] (double precision) and [ShortVector2d] (single precision) aliases rather
/// than naming `Vector2<T>` directly. Coordinates are private and there are no setters, a vector
/// never changes after construction:
///
/// ```compile_fail
/// # use vector2d::Vector2d;
/// let mut v = Vector2d::new(3, 4).unwrap();
/// v.x = 7.0;
/// ```
///
/// The layout is two packed coordinates with no other per instance state, the type code is a
/// property of `T`.
///
/// # Examples
///
/// ```
/// # use vector2d::Vector2d;
/// let v = Vector2d::new(3, 4)?;
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(format!("{:?}", v), "Vector2d(3.0, 4.0)");
/// assert_eq!(v.to_string(), "(3.0, 4.0)");
/// assert_eq!(v, (3.0f64, 4.0f64));
/// # Ok::<(), vector2d::VectorError>(())
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        try_from = "[T; 2]",
        into = "[T; 2]",
        bound(
            serialize = "T: Real + Serialize",
            deserialize = "T: Real + Deserialize<'de>"
        )
    )
)]
#[derive(Clone, Copy)]
#[repr(C)]
pub struct Vector2<T> {
    pub(super) x: T,
    pub(super) y: T,
}

/// Double precision vector, type code `'d'`.
pub type Vector2d = Vector2<f64>;

/// Single precision vector, type code `'f'`.
pub type ShortVector2d = Vector2<f32>;

impl<T> Vector2<T>
where
    T: Real,
{
    /// Type code used when packing this variant into bytes.
    pub const TYPE_CODE: TypeCode = T::TYPE_CODE;

    /// Create a new vector, converting both inputs to coordinates of width `T`.
    ///
    /// Fails with [VectorError::InvalidCoordinate] if either input is not a number and with
    /// [VectorError::OutOfRange] if a finite input does not fit the width.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vector2d::*;
    /// assert_eq!(Vector2d::new("3", 4.0)?, (3.0f64, 4.0f64));
    /// assert!(Vector2d::new("three", "four").is_err());
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn new<X, Y>(x: X, y: Y) -> Result<Self>
    where
        X: IntoCoordinate<T>,
        Y: IntoCoordinate<T>,
    {
        let x = x.into_coordinate()?;
        let y = y.into_coordinate()?;
        Ok(Vector2 { x, y })
    }

    /// Create a vector from coordinates already at width `T`, only NaN is rejected.
    pub(crate) fn from_coords(x: T, y: T) -> Result<Self> {
        if let Some(nan) = [x, y].iter().find(|c| c.widen().is_nan()) {
            return Err(VectorError::InvalidCoordinate {
                input: format!("{:?}", nan),
            });
        }

        Ok(Vector2 { x, y })
    }

    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// Coordinates as an `(x, y)` tuple, for destructuring and `match`.
    #[inline]
    pub fn components(&self) -> (T, T) {
        (self.x, self.y)
    }

    /// Name of this variant, `"Vector2d"` or `"ShortVector2d"`.
    #[inline]
    pub fn variant_name(&self) -> &'static str {
        T::TYPE_CODE.variant_name()
    }

    /// Euclidean length of the vector.
    ///
    /// Uses `hypot` so large or tiny coordinates do not overflow or underflow when squared.
    #[inline]
    pub fn magnitude(&self) -> T {
        num_traits::real::Real::hypot(self.x, self.y)
    }

    /// Angle in radians from the positive x axis, in the range (-π, π].
    #[inline]
    pub fn angle(&self) -> T {
        num_traits::real::Real::atan2(self.y, self.x)
    }

    /// Truth value of the vector, false only for the zero vector.
    #[inline]
    pub fn is_nonzero(&self) -> bool {
        self.magnitude() != T::zero()
    }

    /// Iterate the coordinates, x then y.
    #[inline]
    pub fn iter(&self) -> Coordinates<T> {
        Coordinates::new(*self)
    }

    /// Convert to another coordinate width.
    ///
    /// Widening always succeeds, narrowing fails with [VectorError::OutOfRange] if a coordinate
    /// overflows the target width.
    pub fn cast<U>(&self) -> Result<Vector2<U>>
    where
        U: Real,
    {
        let narrow = |value: T| {
            let value = value.widen();
            U::narrow(value).ok_or(VectorError::OutOfRange {
                value,
                type_code: U::TYPE_CODE,
            })
        };

        Ok(Vector2 {
            x: narrow(self.x)?,
            y: narrow(self.y)?,
        })
    }

    /// Hash of the coordinate pair, equal vectors always produce equal values.
    pub fn hash_value(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Fuzzy equal comparison with another pair using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps<V>(&self, other: &V, fuzzy_epsilon: f64) -> bool
    where
        V: Vector2Ref,
    {
        let (x1, y1) = self.widened();
        let (x2, y2) = other.widened();
        x1.fuzzy_eq_eps(x2, fuzzy_epsilon) && y1.fuzzy_eq_eps(y2, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another pair using the epsilon of `T`.
    #[inline]
    pub fn fuzzy_eq<V>(&self, other: &V) -> bool
    where
        V: Vector2Ref,
    {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon().widen())
    }
}

impl<T> Vector2Ref for Vector2<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn x(&self) -> T {
        self.x
    }

    #[inline]
    fn y(&self) -> T {
        self.y
    }
}

impl<T, V> PartialEq<V> for Vector2<T>
where
    T: Real,
    V: Vector2Ref,
{
    #[inline]
    fn eq(&self, other: &V) -> bool {
        self.widened() == other.widened()
    }
}

// NaN is rejected on construction so equality is reflexive.
impl<T> Eq for Vector2<T> where T: Real {}

/// Bits of `value` with `-0.0` folded into `0.0`, since the two compare equal.
#[inline]
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl<T> Hash for Vector2<T>
where
    T: Real,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (x, y) = self.widened();
        canonical_bits(x).hash(state);
        canonical_bits(y).hash(state);
    }
}

impl<T> fmt::Debug for Vector2<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {})",
            self.variant_name(),
            python_exponent(&format!("{:?}", self.x)),
            python_exponent(&format!("{:?}", self.y))
        )
    }
}

/// Writes `(x, y)`.
///
/// Width, fill, alignment, sign and precision flags apply to each component, the alternate flag
/// (`{:#}`) writes the polar form `<magnitude, angle>` instead.
impl<T> fmt::Display for Vector2<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_spec(&FormatSpec::from_formatter(f)))
    }
}

impl<T> From<Vector2<T>> for (T, T)
where
    T: Real,
{
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        v.components()
    }
}

impl<T> From<Vector2<T>> for [T; 2]
where
    T: Real,
{
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<T> TryFrom<(T, T)> for Vector2<T>
where
    T: Real,
{
    type Error = VectorError;

    #[inline]
    fn try_from((x, y): (T, T)) -> Result<Self> {
        Vector2::from_coords(x, y)
    }
}

impl<T> TryFrom<[T; 2]> for Vector2<T>
where
    T: Real,
{
    type Error = VectorError;

    #[inline]
    fn try_from([x, y]: [T; 2]) -> Result<Self> {
        Vector2::from_coords(x, y)
    }
}

/// An iterator over the coordinates of a vector, x then y.
#[derive(Debug, Clone)]
pub struct Coordinates<T> {
    coords: [T; 2],
    next_index: usize,
}

impl<T> Coordinates<T>
where
    T: Real,
{
    fn new(v: Vector2<T>) -> Self {
        Coordinates {
            coords: [v.x, v.y],
            next_index: 0,
        }
    }
}

impl<T> Iterator for Coordinates<T>
where
    T: Real,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let c = self.coords.get(self.next_index).copied()?;
        self.next_index += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.coords.len() - self.next_index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Coordinates<T> where T: Real {}

impl<T> FusedIterator for Coordinates<T> where T: Real {}

impl<T> IntoIterator for Vector2<T>
where
    T: Real,
{
    type Item = T;
    type IntoIter = Coordinates<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Coordinates::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Vector2<T>
where
    T: Real,
{
    type Item = T;
    type IntoIter = Coordinates<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn layout_is_two_packed_coordinates() {
        assert_eq!(std::mem::size_of::<Vector2d>(), 16);
        assert_eq!(std::mem::size_of::<ShortVector2d>(), 8);
    }

    #[test]
    fn negative_zero_hashes_like_zero() {
        let a = Vector2d::new(-0.0, 1.0).unwrap();
        let b = Vector2d::new(0.0, 1.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hash_value(), b.hash_value());
    }

    #[test]
    fn hash_is_order_sensitive() {
        let a = Vector2d::new(1, 2).unwrap();
        let b = Vector2d::new(2, 1).unwrap();
        assert_ne!(a.hash_value(), b.hash_value());
    }

    #[test]
    fn usable_as_map_and_set_key() {
        let v1 = Vector2d::new(3, 4).unwrap();
        let v2 = Vector2d::new(3, 4).unwrap();
        let v3 = Vector2d::new(3.01, 4).unwrap();

        let mut map = HashMap::new();
        map.insert(v1, "vector1");
        assert_eq!(map[&v2], "vector1");

        let set: HashSet<_> = vec![v1, v2, v3].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn from_coords_rejects_nan() {
        assert!(Vector2d::from_coords(f64::NAN, 0.0).is_err());
        assert!(ShortVector2d::from_coords(0.0, f32::NAN).is_err());
        assert!(Vector2d::from_coords(f64::INFINITY, 0.0).is_ok());
    }

    #[test]
    fn debug_components_match_display() {
        let v = Vector2d::new(1e16, 1e-5).unwrap();
        assert_eq!(format!("{:?}", v), "Vector2d(1e+16, 1e-05)");
        assert_eq!(v.to_string(), "(1e+16, 1e-05)");

        let rebuilt = Vector2d::new("1e+16", "1e-05").unwrap();
        assert_eq!(rebuilt, v);

        let inf = ShortVector2d::new(f32::NEG_INFINITY, 2).unwrap();
        assert_eq!(format!("{:?}", inf), "ShortVector2d(-inf, 2.0)");
    }

    #[test]
    fn iterator_reports_exact_size() {
        let v = Vector2d::new(1, 2).unwrap();
        let mut iter = v.iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(1.0));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(2.0));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn cast_between_widths() {
        let v = Vector2d::new(1.5, -2.25).unwrap();
        let short: ShortVector2d = v.cast().unwrap();
        assert_eq!(short, v);
        assert!(Vector2d::new(1e300, 0).unwrap().cast::<f32>().is_err());
    }
}
