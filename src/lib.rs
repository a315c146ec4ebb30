//! Immutable two dimensional vectors.
//!
//! [Vector2d] stores double precision coordinates and [ShortVector2d] single precision ones, both
//! are aliases of the generic [Vector2] so every operation is shared. Vectors compare equal to any
//! ordered pair holding the same coordinates, hash consistently with that equality, format in
//! cartesian or polar form and pack into a small fixed binary encoding:
//!
//! ```
//! use vector2d::*;
//!
//! let v = Vector2d::new(3, 4)?;
//! assert_eq!(v.magnitude(), 5.0);
//! assert_eq!(v.format_with(".2fp")?, "<5.00, 0.93>");
//!
//! let bytes = v.to_bytes();
//! assert_eq!(bytes.len(), 17);
//! assert_eq!(Vector2d::from_bytes(&bytes)?, v);
//!
//! let (x, y) = v.components();
//! assert_eq!((x, y), (3.0, 4.0));
//! # Ok::<(), VectorError>(())
//! ```
//!
//! Enable the `serde` feature to serialize vectors as `[x, y]`.
pub mod core;
mod error;
pub mod greeting;
mod vector2d;

pub use crate::core::traits::{FuzzyEq, IntoCoordinate, Real, Vector2Ref};
pub use error::{Result, VectorError};
pub use crate::vector2d::*;
