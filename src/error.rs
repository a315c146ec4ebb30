use crate::vector2d::TypeCode;

pub type Result<T> = std::result::Result<T, VectorError>;

/// Errors raised while constructing, decoding or formatting a vector.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VectorError {
    #[error("could not convert {input:?} to a coordinate")]
    InvalidCoordinate { input: String },
    #[error("coordinate {value} does not fit type code '{type_code}'")]
    OutOfRange { value: f64, type_code: TypeCode },
    #[error("cannot decode a vector from empty input")]
    EmptyInput,
    #[error("unknown type code {0:?}")]
    UnknownTypeCode(char),
    #[error("type code '{type_code}' needs {expected} bytes, got {got}")]
    LengthMismatch {
        type_code: TypeCode,
        expected: usize,
        got: usize,
    },
    #[error("invalid format specifier {spec:?}: {reason}")]
    InvalidFormatSpec { spec: String, reason: &'static str },
}

impl VectorError {
    /// True for errors produced while decoding bytes.
    #[inline]
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::UnknownTypeCode(_) | Self::LengthMismatch { .. }
        )
    }
}
