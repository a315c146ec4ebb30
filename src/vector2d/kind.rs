use super::Vector2;
use crate::core::traits::Real;

/// Category of a vector by which coordinates are zero or equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorKind {
    /// Both coordinates are zero.
    Null,
    /// `x` is zero.
    Vertical,
    /// `y` is zero.
    Horizontal,
    /// `x == y`.
    Diagonal,
    Other,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Classify the vector, checks run in order so the zero vector is [VectorKind::Null] rather
    /// than vertical, horizontal or diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vector2d::*;
    /// assert_eq!(Vector2d::new(0, 5)?.kind(), VectorKind::Vertical);
    /// assert_eq!(Vector2d::new(3, 3)?.kind(), VectorKind::Diagonal);
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn kind(&self) -> VectorKind {
        let zero = T::zero();
        match self.components() {
            (x, y) if x == zero && y == zero => VectorKind::Null,
            (x, _) if x == zero => VectorKind::Vertical,
            (_, y) if y == zero => VectorKind::Horizontal,
            (x, y) if x == y => VectorKind::Diagonal,
            _ => VectorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector2d::{ShortVector2d, Vector2d};

    #[test]
    fn classify() {
        let kind = |x, y| Vector2d::new(x, y).unwrap().kind();
        assert_eq!(kind(0, 0), VectorKind::Null);
        assert_eq!(kind(0, 5), VectorKind::Vertical);
        assert_eq!(kind(5, 0), VectorKind::Horizontal);
        assert_eq!(kind(3, 3), VectorKind::Diagonal);
        assert_eq!(kind(3, 4), VectorKind::Other);
        assert_eq!(kind(-3, -3), VectorKind::Diagonal);
    }

    #[test]
    fn negative_zero_counts_as_zero() {
        let v = ShortVector2d::new(-0.0, 2.0).unwrap();
        assert_eq!(v.kind(), VectorKind::Vertical);
    }
}
