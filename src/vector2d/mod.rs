//! The vector value type, its formatting and its binary encoding.
mod codec;
mod format_spec;
mod kind;
mod type_code;
mod vector2;

pub use codec::{decode, AnyVector2d};
pub use format_spec::{Align, FormatSpec, Presentation, Sign, POLAR_MARKER};
pub use kind::VectorKind;
pub use type_code::TypeCode;
pub use vector2::{Coordinates, ShortVector2d, Vector2, Vector2d};
