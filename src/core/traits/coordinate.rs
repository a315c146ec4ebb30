use super::Real;
use crate::error::{Result, VectorError};

/// Conversion of a constructor argument into a coordinate of width `T`.
///
/// Numbers convert directly, strings are trimmed and parsed as decimal floats. NaN is never a
/// valid coordinate and finite values that overflow `T` are rejected.
pub trait IntoCoordinate<T: Real> {
    fn into_coordinate(self) -> Result<T>;
}

fn coerce<T, F>(value: f64, describe: F) -> Result<T>
where
    T: Real,
    F: FnOnce() -> String,
{
    if value.is_nan() {
        let input = describe();
        tracing::debug!(%input, "rejected NaN coordinate");
        return Err(VectorError::InvalidCoordinate { input });
    }

    T::narrow(value).ok_or(VectorError::OutOfRange {
        value,
        type_code: T::TYPE_CODE,
    })
}

fn parse_coordinate<T: Real>(input: &str) -> Result<T> {
    match input.trim().parse::<f64>() {
        Ok(value) => coerce(value, || input.to_string()),
        Err(_) => {
            tracing::debug!(input, "rejected non-numeric coordinate");
            Err(VectorError::InvalidCoordinate {
                input: input.to_string(),
            })
        }
    }
}

impl<T: Real> IntoCoordinate<T> for f64 {
    #[inline]
    fn into_coordinate(self) -> Result<T> {
        coerce(self, || format!("{:?}", self))
    }
}

impl<T: Real> IntoCoordinate<T> for f32 {
    #[inline]
    fn into_coordinate(self) -> Result<T> {
        coerce(f64::from(self), || format!("{:?}", self))
    }
}

macro_rules! impl_into_coordinate_int {
    ($($t:ty),*) => {
        $(
            impl<T: Real> IntoCoordinate<T> for $t {
                #[inline]
                fn into_coordinate(self) -> Result<T> {
                    coerce(self as f64, || self.to_string())
                }
            }
        )*
    };
}

impl_into_coordinate_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: Real> IntoCoordinate<T> for &str {
    #[inline]
    fn into_coordinate(self) -> Result<T> {
        parse_coordinate(self)
    }
}

impl<T: Real> IntoCoordinate<T> for String {
    #[inline]
    fn into_coordinate(self) -> Result<T> {
        parse_coordinate(&self)
    }
}

impl<T: Real> IntoCoordinate<T> for &String {
    #[inline]
    fn into_coordinate(self) -> Result<T> {
        parse_coordinate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector2d::TypeCode;

    fn coord<T: Real, I: IntoCoordinate<T>>(input: I) -> Result<T> {
        input.into_coordinate()
    }

    #[test]
    fn numbers_convert() {
        assert_eq!(coord::<f64, _>(3), Ok(3.0));
        assert_eq!(coord::<f64, _>(3.5f32), Ok(3.5));
        assert_eq!(coord::<f32, _>(4.25f64), Ok(4.25f32));
        assert_eq!(coord::<f64, _>(u64::MAX), Ok(u64::MAX as f64));
    }

    #[test]
    fn strings_parse() {
        assert_eq!(coord::<f64, _>("3"), Ok(3.0));
        assert_eq!(coord::<f64, _>(" -4.5 "), Ok(-4.5));
        assert_eq!(coord::<f64, _>("1e3"), Ok(1000.0));
        assert_eq!(coord::<f64, _>(String::from("inf")), Ok(f64::INFINITY));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(
            coord::<f64, _>("three"),
            Err(VectorError::InvalidCoordinate {
                input: "three".to_string()
            })
        );
        assert!(coord::<f64, _>("").is_err());
        assert!(coord::<f64, _>("nan").is_err());
        assert!(coord::<f32, _>(f64::NAN).is_err());
    }

    #[test]
    fn overflow_is_rejected_for_short_width() {
        assert_eq!(
            coord::<f32, _>(1e300),
            Err(VectorError::OutOfRange {
                value: 1e300,
                type_code: TypeCode::Single
            })
        );
        assert_eq!(coord::<f64, _>(1e300), Ok(1e300));
    }
}
