pub mod curve;
pub mod pline;

pub use curve::{CircularArc, Curve, CurveDomain, EllipticalArc, LineSegment, NurbsCurve};
pub use pline::{Pline, PlineVertex};
