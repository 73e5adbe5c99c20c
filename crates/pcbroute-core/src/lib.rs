//! **pcbroute-core**: geometry primitives for board routing.
//!
//! This crate provides the types shared across the *pcbroute* workspace:
//! integer [`Point`]s, closed axis-aligned [`IntBox`]es, per-axis movement
//! [`Weights`], and the [`Shape`] capability that every routed or blocking
//! object exposes.

pub mod error;
pub mod geom;
pub mod shape;
pub mod weights;

pub use error::GeometryError;
pub use geom::{IntBox, Point};
pub use shape::Shape;
pub use weights::Weights;
