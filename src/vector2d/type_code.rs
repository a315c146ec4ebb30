use std::fmt;

use crate::error::VectorError;

/// Single character tag naming the numeric width a vector packs its coordinates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeCode {
    /// `'d'`, double precision, 8 bytes per coordinate.
    Double = b'd',
    /// `'f'`, single precision, 4 bytes per coordinate.
    Single = b'f',
}

impl TypeCode {
    #[inline]
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn as_char(self) -> char {
        char::from(self.as_byte())
    }

    /// Bytes used per coordinate.
    #[inline]
    pub fn width(self) -> usize {
        match self {
            TypeCode::Double => 8,
            TypeCode::Single => 4,
        }
    }

    /// Total encoded size of a vector: the type code byte plus two coordinates.
    #[inline]
    pub fn encoded_len(self) -> usize {
        1 + 2 * self.width()
    }

    /// Name of the vector variant using this type code.
    #[inline]
    pub fn variant_name(self) -> &'static str {
        match self {
            TypeCode::Double => "Vector2d",
            TypeCode::Single => "ShortVector2d",
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<u8> for TypeCode {
    type Error = VectorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            b'd' => Ok(TypeCode::Double),
            b'f' => Ok(TypeCode::Single),
            other => Err(VectorError::UnknownTypeCode(char::from(other))),
        }
    }
}

impl TryFrom<char> for TypeCode {
    type Error = VectorError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'd' => Ok(TypeCode::Double),
            'f' => Ok(TypeCode::Single),
            other => Err(VectorError::UnknownTypeCode(other)),
        }
    }
}
