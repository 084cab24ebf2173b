//! # vecn
//! Fixed-size numeric vectors.
//!
//! A single generic [`Vector`] type covers every dimension. The storage layout
//! is chosen per dimension: 2, 3 and 4-dimensional vectors get named
//! components (`x`, `y`, `z`, `w`) and, for 2 and 3 dimensions, a cross
//! product; every other dimension falls back to a plain component buffer.
//!
//! All element-wise work is done by the loops in [`ops`], whose trip counts
//! are compile-time constants. Binary operations between vectors of different
//! dimensions only touch the shared prefix of both operands, and binary
//! operations between different scalar kinds convert the right-hand side into
//! the scalar kind of the left-hand side.
//!
//! ```
//! use vecn::{Vec2, Vec3};
//!
//! let a = Vec3::xyz(1.0, 2.0, 3.0);
//! let b = Vec2::xy(10.0, 20.0);
//! assert_eq!(a + b, Vec3::xyz(11.0, 22.0, 3.0));
//! assert_eq!(Vec3::xyz(1.0, 0.0, 0.0).cross(&Vec3::xyz(0.0, 1.0, 0.0)), Vec3::xyz(0.0, 0.0, 1.0));
//! ```
#![warn(missing_docs)]

pub mod dispatch;
mod error;
pub mod layout;
pub mod ops;
mod scalar;
mod vector;

pub use error::VectorError;
pub use layout::{Components, Generic, Layout, Xy, Xyz, Xyzw};
pub use scalar::{Scalar, Sqrt};
pub use vector::*;
