//! Core/common traits for use in vector2d.
mod coordinate;
mod fuzzy_eq;
mod real;
mod vector2ref;

pub use coordinate::IntoCoordinate;
pub use fuzzy_eq::FuzzyEq;
pub use real::Real;
pub use vector2ref::*;
