//! Binary encoding of vectors.
//!
//! Layout is one type code byte (`b'd'` or `b'f'`) followed by x then y, each packed at the width
//! the type code names, in native byte order. A double precision vector encodes to 17 bytes and a
//! single precision vector to 9.
use std::io;

use super::{ShortVector2d, TypeCode, Vector2, Vector2d};
use crate::{
    core::traits::{Real, Vector2Ref},
    error::{Result, VectorError},
};

/// A decoded vector of whichever width the encoded type code named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyVector2d {
    Double(Vector2d),
    Single(ShortVector2d),
}

impl AnyVector2d {
    #[inline]
    pub fn type_code(&self) -> TypeCode {
        match self {
            AnyVector2d::Double(_) => TypeCode::Double,
            AnyVector2d::Single(_) => TypeCode::Single,
        }
    }

    /// Widen to a double precision vector, never loses precision.
    #[inline]
    pub fn to_double(&self) -> Vector2d {
        let (x, y) = self.widened();
        Vector2 { x, y }
    }

    /// Convert to width `T`, see [Vector2::cast].
    #[inline]
    pub fn cast<T>(&self) -> Result<Vector2<T>>
    where
        T: Real,
    {
        match self {
            AnyVector2d::Double(v) => v.cast(),
            AnyVector2d::Single(v) => v.cast(),
        }
    }

    #[inline]
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            AnyVector2d::Double(v) => v.to_bytes(),
            AnyVector2d::Single(v) => v.to_bytes(),
        }
    }
}

impl Vector2Ref for AnyVector2d {
    type Num = f64;

    #[inline]
    fn x(&self) -> f64 {
        match self {
            AnyVector2d::Double(v) => v.x(),
            AnyVector2d::Single(v) => v.x().widen(),
        }
    }

    #[inline]
    fn y(&self) -> f64 {
        match self {
            AnyVector2d::Double(v) => v.y(),
            AnyVector2d::Single(v) => v.y().widen(),
        }
    }
}

impl From<Vector2d> for AnyVector2d {
    fn from(v: Vector2d) -> Self {
        AnyVector2d::Double(v)
    }
}

impl From<ShortVector2d> for AnyVector2d {
    fn from(v: ShortVector2d) -> Self {
        AnyVector2d::Single(v)
    }
}

/// Decode a vector, the returned variant matches the leading type code.
///
/// # Examples
///
/// ```
/// # use vector2d::*;
/// let bytes = ShortVector2d::new(3, 4)?.to_bytes();
/// let decoded = decode(&bytes)?;
/// assert_eq!(decoded.type_code(), TypeCode::Single);
/// assert_eq!(decoded, AnyVector2d::Single(ShortVector2d::new(3, 4)?));
/// # Ok::<(), VectorError>(())
/// ```
pub fn decode(octets: &[u8]) -> Result<AnyVector2d> {
    let (&code, payload) = octets.split_first().ok_or(VectorError::EmptyInput)?;
    let type_code = TypeCode::try_from(code).map_err(|e| {
        tracing::debug!(code, "unknown type code");
        e
    })?;
    tracing::trace!(%type_code, len = octets.len(), "decoding vector");

    match type_code {
        TypeCode::Double => decode_payload::<f64>(payload).map(AnyVector2d::Double),
        TypeCode::Single => decode_payload::<f32>(payload).map(AnyVector2d::Single),
    }
}

fn decode_payload<T>(payload: &[u8]) -> Result<Vector2<T>>
where
    T: Real,
{
    let type_code = T::TYPE_CODE;
    let width = type_code.width();
    if payload.len() != 2 * width {
        tracing::debug!(
            %type_code,
            expected = type_code.encoded_len(),
            got = payload.len() + 1,
            "encoded vector has wrong length"
        );
        return Err(VectorError::LengthMismatch {
            type_code,
            expected: type_code.encoded_len(),
            got: payload.len() + 1,
        });
    }

    let (x, y) = payload.split_at(width);
    Vector2::from_coords(T::read_ne(x), T::read_ne(y))
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Encode as the type code byte followed by x and y in native byte order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vector2d::*;
    /// let bytes = Vector2d::new(3, 4)?.to_bytes();
    /// assert_eq!(bytes.len(), 17);
    /// assert_eq!(bytes[0], b'd');
    /// assert_eq!(&bytes[1..9], &3.0f64.to_ne_bytes());
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let type_code = T::TYPE_CODE;
        let width = type_code.width();
        let mut buf = vec![0u8; type_code.encoded_len()];
        buf[0] = type_code.as_byte();
        self.x.write_ne(&mut buf[1..1 + width]);
        self.y.write_ne(&mut buf[1 + width..]);
        buf
    }

    /// Write the encoding of [Vector2::to_bytes] to `writer`.
    pub fn encode_into<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        writer.write_all(&self.to_bytes())
    }

    /// Decode a vector of either width and convert it to width `T`.
    ///
    /// Bytes written by a double precision vector decode into a short vector (narrowing, fails
    /// with [VectorError::OutOfRange] on overflow) and the other way around.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vector2d::*;
    /// let v = Vector2d::new(3, 4)?;
    /// assert_eq!(Vector2d::from_bytes(&v.to_bytes())?, v);
    /// assert!(Vector2d::from_bytes(b"x").is_err());
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn from_bytes(octets: &[u8]) -> Result<Self> {
        decode(octets)?.cast()
    }
}
