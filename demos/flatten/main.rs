//! Flattens a small mixed drawing and prints the point count of each entity.
//!
//! Usage:
//! ```text
//! cargo run --example flatten
//! RUST_LOG=curvetess=debug cargo run --example flatten
//! ```

use curvetess::geometry::{CircularArc, EllipticalArc, LineSegment, NurbsCurve, Pline, PlineVertex};
use curvetess::math::{Point2, Vector2};
use curvetess::tessellation::{CurveEntity, SamplingBudget, TessellateBatch};

fn main() -> curvetess::Result<()> {
    // Default: WARN for everything, INFO for curvetess.
    // Override with RUST_LOG env var (e.g. RUST_LOG=curvetess=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("curvetess=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let entities = vec![
        CurveEntity::Point(Point2::new(5.0, 5.0)),
        CurveEntity::Line(LineSegment::new(Point2::new(0.0, 0.0), Point2::new(40.0, 0.0))),
        CurveEntity::Bulge {
            start: Point2::new(0.0, 0.0),
            end: Point2::new(2.0, 0.0),
            bulge: 1.0,
            segments: None,
        },
        CurveEntity::Arc(CircularArc::circle(Point2::new(20.0, 20.0), 10.0)),
        CurveEntity::Ellipse(EllipticalArc::from_major_axis(
            Point2::origin(),
            Vector2::new(30.0, 10.0),
            0.5,
            0.0,
            std::f64::consts::PI,
        )),
        CurveEntity::Spline(NurbsCurve::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 30.0),
                Point2::new(40.0, 30.0),
                Point2::new(50.0, 0.0),
            ],
            2,
            vec![0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0],
            None,
        )?),
        CurveEntity::Pline(Pline {
            vertices: vec![
                PlineVertex::new(0.0, 0.0, 0.5),
                PlineVertex::line(10.0, 0.0),
                PlineVertex::line(10.0, 10.0),
            ],
            closed: true,
        }),
    ];

    let budget = SamplingBudget::new(5.0, 10.0_f64.to_radians(), 16)?.with_scale_factor(2.0);
    let results = TessellateBatch::new(&entities, &budget).execute()?;

    for (index, result) in results.iter().enumerate() {
        match result {
            Ok(polyline) => println!(
                "entity {index}: {} points{}",
                polyline.points.len(),
                if polyline.closed { " (closed)" } else { "" }
            ),
            Err(err) => println!("entity {index}: failed: {err}"),
        }
    }
    Ok(())
}
