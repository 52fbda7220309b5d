//! Curve tessellation for drawing-interchange entities.
//!
//! Turns compact curve descriptions (bulge arcs, circular and elliptical
//! arcs, NURBS splines, bulge polylines) into ordered point sequences with
//! a controlled sampling density.

pub mod error;
pub mod geometry;
pub mod math;
pub mod tessellation;

pub use error::{CurvetessError, GeometryError, Result, TessellationError};
