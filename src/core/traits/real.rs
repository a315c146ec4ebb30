use std::fmt;

use byteorder::{ByteOrder, NativeEndian};

use super::FuzzyEq;
use crate::vector2d::TypeCode;

/// Floating point coordinate type used by [Vector2d](crate::Vector2d).
///
/// Implemented for `f64` (type code `'d'`) and `f32` (type code `'f'`). The type code fixes the
/// width used when packing a coordinate into bytes.
pub trait Real:
    num_traits::real::Real
    + Default
    + fmt::Debug
    + fmt::Display
    + FuzzyEq
    + Send
    + Sync
    + 'static
{
    /// Type code tagging this width in the binary encoding.
    const TYPE_CODE: TypeCode;

    /// Widen to `f64` without loss.
    fn widen(self) -> f64;

    /// Narrow an `f64` to this width, returns `None` if a finite value overflows the width.
    fn narrow(value: f64) -> Option<Self>;

    /// Write the value in native byte order, `buf` must be exactly `TYPE_CODE.width()` long.
    fn write_ne(self, buf: &mut [u8]);

    /// Read one value in native byte order, `buf` must be exactly `TYPE_CODE.width()` long.
    fn read_ne(buf: &[u8]) -> Self;
}

impl Real for f64 {
    const TYPE_CODE: TypeCode = TypeCode::Double;

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(value: f64) -> Option<Self> {
        Some(value)
    }

    #[inline]
    fn write_ne(self, buf: &mut [u8]) {
        NativeEndian::write_f64(buf, self)
    }

    #[inline]
    fn read_ne(buf: &[u8]) -> Self {
        NativeEndian::read_f64(buf)
    }
}

impl Real for f32 {
    const TYPE_CODE: TypeCode = TypeCode::Single;

    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn narrow(value: f64) -> Option<Self> {
        let narrowed = value as f32;
        if value.is_finite() && narrowed.is_infinite() {
            return None;
        }
        Some(narrowed)
    }

    #[inline]
    fn write_ne(self, buf: &mut [u8]) {
        NativeEndian::write_f32(buf, self)
    }

    #[inline]
    fn read_ne(buf: &[u8]) -> Self {
        NativeEndian::read_f32(buf)
    }
}
