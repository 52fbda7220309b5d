use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::{CircularArc, Curve, EllipticalArc, LineSegment, NurbsCurve, Pline};
use crate::math::{Point2, Point3};

use super::{
    scale_point, ExpandBulge, Polyline, SampleArc, SamplingBudget, TessellatePline,
    TessellateSpline,
};

/// A drawing entity that flattens into a single polyline.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveEntity {
    /// A lone point.
    Point(Point2),
    /// A straight segment.
    Line(LineSegment),
    /// A single bulge-encoded arc between two points.
    Bulge {
        start: Point2,
        end: Point2,
        bulge: f64,
        /// Explicit segment count; `None` or zero uses one segment per ten degrees.
        segments: Option<usize>,
    },
    /// A circle or circular arc.
    Arc(CircularArc),
    /// An ellipse or elliptical arc.
    Ellipse(EllipticalArc),
    /// A NURBS curve.
    Spline(NurbsCurve),
    /// A polyline with bulge segments.
    Pline(Pline),
}

impl CurveEntity {
    /// Flattens this entity under the given budget.
    ///
    /// Full circles and ellipses repeat their first point at the end and
    /// are flagged as closed, as are splines whose ends meet.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity's own parameters are invalid or a
    /// sampler fails.
    pub fn tessellate(&self, budget: &SamplingBudget) -> Result<Polyline> {
        let scale = budget.scale_factor;
        match self {
            Self::Point(p) => Ok(Polyline::from_planar(&[scale_point(p, scale)], false)),
            Self::Line(line) => Ok(Polyline::from_planar(
                &[
                    scale_point(&line.evaluate(0.0)?, scale),
                    scale_point(&line.evaluate(1.0)?, scale),
                ],
                false,
            )),
            Self::Bulge {
                start,
                end,
                bulge,
                segments,
            } => {
                let mut op = ExpandBulge::new(*start, *end, *bulge).with_scale_factor(scale);
                if let Some(n) = segments {
                    op = op.with_segments(*n);
                }
                let mut points = op.execute();
                let end = scale_point(end, scale);
                points.push(Point3::new(end.x, end.y, 0.0));
                Ok(Polyline {
                    points,
                    closed: false,
                })
            }
            Self::Arc(arc) => {
                let points = SampleArc::new(*arc, budget).execute()?;
                Ok(Polyline::from_planar(&points, arc.is_closed()))
            }
            Self::Ellipse(ellipse) => {
                let points = SampleArc::new(*ellipse, budget).execute()?;
                Ok(Polyline::from_planar(&points, ellipse.is_closed()))
            }
            Self::Spline(curve) => {
                let points = TessellateSpline::new(curve, budget.spline_samples_per_segment)
                    .with_scale_factor(scale)
                    .execute()?;
                Ok(Polyline::from_planar(&points, curve.is_closed()))
            }
            Self::Pline(pline) => Ok(TessellatePline::new(pline).with_scale_factor(scale).execute()),
        }
    }
}

/// Flattens many entities in parallel.
///
/// Each entity is an independent task on the rayon pool. Results come back
/// in input order, and a failing entity only fails its own slot.
#[derive(Debug)]
pub struct TessellateBatch<'a> {
    entities: &'a [CurveEntity],
    budget: SamplingBudget,
}

impl<'a> TessellateBatch<'a> {
    /// Creates a new batch over `entities`.
    #[must_use]
    pub fn new(entities: &'a [CurveEntity], budget: &SamplingBudget) -> Self {
        Self {
            entities,
            budget: *budget,
        }
    }

    /// Executes the batch.
    ///
    /// # Errors
    ///
    /// Returns an error only if the shared budget is invalid. Per-entity
    /// failures are reported in the returned vector.
    pub fn execute(&self) -> Result<Vec<Result<Polyline>>> {
        self.budget.validate()?;

        let budget = &self.budget;
        let results: Vec<Result<Polyline>> = self
            .entities
            .par_iter()
            .map(|entity| entity.tessellate(budget))
            .collect();

        let mut failed = 0_usize;
        for (index, result) in results.iter().enumerate() {
            if let Err(err) = result {
                failed += 1;
                warn!(index, error = %err, "entity tessellation failed");
            }
        }
        debug!(entities = self.entities.len(), failed, "tessellated batch");
        Ok(results)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::PlineVertex;
    use approx::assert_abs_diff_eq;

    fn spline() -> NurbsCurve {
        NurbsCurve::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 3.0),
                Point2::new(4.0, 3.0),
                Point2::new(5.0, 0.0),
            ],
            2,
            vec![0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0],
            None,
        )
        .unwrap()
    }

    fn mixed() -> Vec<CurveEntity> {
        vec![
            CurveEntity::Point(Point2::new(1.0, 2.0)),
            CurveEntity::Line(LineSegment::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0))),
            CurveEntity::Bulge {
                start: Point2::new(0.0, 0.0),
                end: Point2::new(2.0, 0.0),
                bulge: 1.0,
                segments: None,
            },
            CurveEntity::Arc(CircularArc::circle(Point2::origin(), 10.0)),
            CurveEntity::Spline(spline()),
            CurveEntity::Pline(Pline::from_points(
                &[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)],
                true,
            )),
        ]
    }

    #[test]
    fn results_keep_input_order() {
        let budget = SamplingBudget::default().with_spline_samples(4);
        let results = TessellateBatch::new(&mixed(), &budget).execute().unwrap();
        let counts: Vec<usize> = results.iter().map(|r| r.as_ref().unwrap().points.len()).collect();
        assert_eq!(counts, vec![1, 2, 19, 25, 10, 3]);

        let circle = results[3].as_ref().unwrap();
        assert!(circle.closed);
        assert!(results[5].as_ref().unwrap().closed);
        assert!(!results[4].as_ref().unwrap().closed);
    }

    #[test]
    fn standalone_bulge_ends_at_end_point() {
        let budget = SamplingBudget::default().with_scale_factor(2.0);
        let entity = CurveEntity::Bulge {
            start: Point2::new(0.0, 0.0),
            end: Point2::new(2.0, 0.0),
            bulge: -1.0,
            segments: Some(8),
        };
        let polyline = entity.tessellate(&budget).unwrap();
        assert_eq!(polyline.points.len(), 9);
        assert_eq!(polyline.points[8], Point3::new(4.0, 0.0, 0.0));
        assert_abs_diff_eq!(polyline.points[4].y, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_entities_leave_siblings_intact() {
        let mut entities = mixed();
        entities.insert(
            1,
            CurveEntity::Arc(CircularArc::new(Point2::origin(), 1.0, 0.0, f64::NEG_INFINITY)),
        );
        entities.insert(
            2,
            CurveEntity::Ellipse(EllipticalArc::from_major_axis(
                Point2::origin(),
                crate::math::Vector2::new(10.0, 0.0),
                0.0,
                0.0,
                std::f64::consts::PI,
            )),
        );
        let budget = SamplingBudget::default().with_spline_samples(4);
        let results = TessellateBatch::new(&entities, &budget).execute().unwrap();
        let counts: Vec<usize> = results.iter().map(|r| r.as_ref().unwrap().points.len()).collect();
        assert_eq!(counts, vec![1, 2, 2, 2, 19, 25, 10, 3]);
        assert!(results[1].as_ref().unwrap().points.iter().all(|p| p.x.is_nan()));
    }

    #[test]
    fn zero_bulge_segments_use_default_count() {
        let entity = CurveEntity::Bulge {
            start: Point2::new(0.0, 0.0),
            end: Point2::new(2.0, 0.0),
            bulge: 1.0,
            segments: Some(0),
        };
        let polyline = entity.tessellate(&SamplingBudget::default()).unwrap();
        assert_eq!(polyline.points.len(), 19);
    }

    #[test]
    fn line_is_flattened_to_scaled_end_points() {
        let line = CurveEntity::Line(LineSegment::new(Point2::new(1.0, -1.0), Point2::new(3.0, 4.0)));
        let polyline = line.tessellate(&SamplingBudget::default().with_scale_factor(2.0)).unwrap();
        assert_eq!(
            polyline.points,
            vec![Point3::new(2.0, -2.0, 0.0), Point3::new(6.0, 8.0, 0.0)]
        );
        assert!(!polyline.closed);
    }

    #[test]
    fn invalid_budget_fails_whole_batch() {
        let budget = SamplingBudget::default().with_max_chord_length(-1.0);
        assert!(TessellateBatch::new(&mixed(), &budget).execute().is_err());
    }

    #[test]
    fn batch_matches_sequential_tessellation() {
        let budget = SamplingBudget::default().with_spline_samples(12);
        let entities = mixed();
        let parallel = TessellateBatch::new(&entities, &budget).execute().unwrap();
        for (entity, result) in entities.iter().zip(parallel) {
            assert_eq!(entity.tessellate(&budget).unwrap(), result.unwrap());
        }
    }

    #[test]
    fn closed_pline_with_arcs_is_flattened() {
        let pline = Pline {
            vertices: vec![PlineVertex::new(0.0, 0.0, 1.0), PlineVertex::new(2.0, 0.0, 1.0)],
            closed: true,
        };
        let polyline = CurveEntity::Pline(pline).tessellate(&SamplingBudget::default()).unwrap();
        assert_eq!(polyline.points.len(), 36);
        assert!(polyline.closed);
    }
}
