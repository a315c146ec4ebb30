/// Trait for fuzzy equality comparisons of floating point values.
pub trait FuzzyEq: Sized + Copy {
    /// Default epsilon used by [FuzzyEq::fuzzy_eq] and [FuzzyEq::fuzzy_eq_zero].
    fn fuzzy_epsilon() -> Self;

    /// Returns true if `self` and `other` differ by less than `fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($t:ty, $eps:expr) => {
        impl FuzzyEq for $t {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }

            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }

            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_eq!(f32, 1e-5);
impl_fuzzy_eq!(f64, 1e-8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuzzy_eq_uses_width_epsilon() {
        assert!(1.0f64.fuzzy_eq(1.0 + 1e-9));
        assert!(!1.0f64.fuzzy_eq(1.0 + 1e-7));
        assert!(1.0f32.fuzzy_eq(1.0 + 1e-6));
        assert!(!1.0f32.fuzzy_eq(1.0 + 1e-4));
    }

    #[test]
    fn fuzzy_eq_zero() {
        assert!(1e-10f64.fuzzy_eq_zero());
        assert!((-1e-10f64).fuzzy_eq_zero());
        assert!(!0.5f64.fuzzy_eq_zero_eps(0.1));
    }
}
