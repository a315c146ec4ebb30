use super::Real;

/// Read only access to an ordered (x, y) pair.
///
/// Anything implementing this trait can be compared for equality against a
/// [Vector2](crate::Vector2), which is how a vector compares equal to plain tuples and
/// arrays holding the same coordinates.
pub trait Vector2Ref {
    type Num: Real;
    fn x(&self) -> Self::Num;
    fn y(&self) -> Self::Num;

    /// Both coordinates widened to `f64`.
    #[inline]
    fn widened(&self) -> (f64, f64) {
        (self.x().widen(), self.y().widen())
    }
}

impl<T> Vector2Ref for (T, T)
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn x(&self) -> T {
        self.0
    }

    #[inline]
    fn y(&self) -> T {
        self.1
    }
}

impl<T> Vector2Ref for [T; 2]
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn x(&self) -> T {
        self[0]
    }

    #[inline]
    fn y(&self) -> T {
        self[1]
    }
}
