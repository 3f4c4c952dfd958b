//! Segment primitives: straight lines and cubic Bezier curves.
//!
//! Both shapes expose the same contract: `position(t)` maps a normalized
//! parameter in [0, 1] to a world-space point, and `arclength()` reports the
//! segment's length in world units. Bezier arclength is estimated once at
//! construction by chord sampling; the parameterization is not arclength-
//! uniform, which is why traversal needs its corrective iteration.

use glam::DVec2;
use walker_core::constants::{BEZIER_COLLIDE_SAMPLES, BEZIER_LENGTH_SAMPLES};
use walker_core::enums::SegmentKind;
use walker_core::level::SegmentRecord;

use crate::geometry::point_near_segment;

/// Straight segment between two endpoints.
#[derive(Debug, Clone)]
pub struct Line {
    a: DVec2,
    b: DVec2,
    length: f64,
}

impl Line {
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self {
            a,
            b,
            length: a.distance(b),
        }
    }

    #[inline]
    pub fn start(&self) -> DVec2 {
        self.a
    }

    #[inline]
    pub fn end(&self) -> DVec2 {
        self.b
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Linear interpolation; `t` in [0, 1] maps exactly onto the segment.
    pub fn position(&self, t: f64) -> DVec2 {
        self.a + (self.b - self.a) * t
    }

    pub fn is_colliding(&self, point: DVec2, radius: f64) -> bool {
        point_near_segment(point, self.a, self.b, radius)
    }
}

/// Cubic Bezier segment over four control points.
#[derive(Debug, Clone)]
pub struct Bezier {
    points: [DVec2; 4],
    length: f64,
    collide_samples: u32,
}

impl Bezier {
    pub fn new(points: [DVec2; 4]) -> Self {
        Self::with_samples(points, BEZIER_LENGTH_SAMPLES, BEZIER_COLLIDE_SAMPLES)
    }

    /// Construct with explicit sample counts for arclength estimation and
    /// collision chords. Finer sampling costs more at construction time.
    pub fn with_samples(points: [DVec2; 4], length_samples: u32, collide_samples: u32) -> Self {
        let mut segment = Self {
            points,
            length: 0.0,
            collide_samples,
        };
        segment.length = segment.sample_length(length_samples);
        segment
    }

    #[inline]
    pub fn points(&self) -> &[DVec2; 4] {
        &self.points
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Cubic Bernstein evaluation of the curve at `t`.
    pub fn position(&self, t: f64) -> DVec2 {
        let [p1, p2, p3, p4] = self.points;
        let u = 1.0 - t;
        p1 * (u * u * u) + p2 * (3.0 * t * u * u) + p3 * (3.0 * t * t * u) + p4 * (t * t * t)
    }

    /// Chord-sum arclength estimate over `samples` uniform parameter steps.
    pub fn sample_length(&self, samples: u32) -> f64 {
        let mut length = 0.0;
        let mut last = self.position(0.0);
        for i in 1..=samples {
            let point = self.position(i as f64 / samples as f64);
            length += last.distance(point);
            last = point;
        }
        length
    }

    /// Tests the point against each chord of the sampled polyline.
    pub fn is_colliding(&self, point: DVec2, radius: f64) -> bool {
        let mut last = self.position(0.0);
        for i in 1..=self.collide_samples {
            let next = self.position(i as f64 / self.collide_samples as f64);
            if point_near_segment(point, last, next, radius) {
                return true;
            }
            last = next;
        }
        false
    }
}

/// Geometry of one segment, independent of layer assignment.
#[derive(Debug, Clone)]
pub enum SegmentShape {
    Line(Line),
    Bezier(Bezier),
}

/// One piece of a path: a shape plus the background layer it sits under.
#[derive(Debug, Clone)]
pub struct PathSegment {
    shape: SegmentShape,
    layer: u8,
}

impl PathSegment {
    pub fn new(shape: SegmentShape, layer: u8) -> Self {
        Self { shape, layer }
    }

    pub fn line(a: DVec2, b: DVec2, layer: u8) -> Self {
        Self::new(SegmentShape::Line(Line::new(a, b)), layer)
    }

    pub fn bezier(points: [DVec2; 4], layer: u8) -> Self {
        Self::new(SegmentShape::Bezier(Bezier::new(points)), layer)
    }

    #[inline]
    pub fn shape(&self) -> &SegmentShape {
        &self.shape
    }

    #[inline]
    pub fn layer(&self) -> u8 {
        self.layer
    }

    pub fn kind(&self) -> SegmentKind {
        match self.shape {
            SegmentShape::Line(_) => SegmentKind::Line,
            SegmentShape::Bezier(_) => SegmentKind::Bezier,
        }
    }

    /// World position at normalized parameter `t`.
    pub fn position(&self, t: f64) -> DVec2 {
        match &self.shape {
            SegmentShape::Line(line) => line.position(t),
            SegmentShape::Bezier(bezier) => bezier.position(t),
        }
    }

    /// Segment length in world units (estimated for Bezier shapes).
    pub fn arclength(&self) -> f64 {
        match &self.shape {
            SegmentShape::Line(line) => line.length(),
            SegmentShape::Bezier(bezier) => bezier.length(),
        }
    }

    /// The segment's first point, where entering travellers appear.
    pub fn origin(&self) -> DVec2 {
        self.position(0.0)
    }

    pub fn is_colliding(&self, point: DVec2, radius: f64) -> bool {
        match &self.shape {
            SegmentShape::Line(line) => line.is_colliding(point, radius),
            SegmentShape::Bezier(bezier) => bezier.is_colliding(point, radius),
        }
    }

    /// Serializable form used by level files and the path editor.
    pub fn to_record(&self) -> SegmentRecord {
        let points = match &self.shape {
            SegmentShape::Line(line) => vec![
                [line.start().x, line.start().y],
                [line.end().x, line.end().y],
            ],
            SegmentShape::Bezier(bezier) => bezier
                .points()
                .iter()
                .map(|p| [p.x, p.y])
                .collect(),
        };
        SegmentRecord {
            kind: self.kind(),
            layer: self.layer,
            points,
        }
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter_arc() -> [DVec2; 4] {
        // Cubic approximation of a radius-100 quarter circle.
        let k = 55.228_474_98;
        [
            DVec2::new(100.0, 0.0),
            DVec2::new(100.0, k),
            DVec2::new(k, 100.0),
            DVec2::new(0.0, 100.0),
        ]
    }

    #[test]
    fn test_line_position_is_exact() {
        let line = Line::new(DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0));
        assert_eq!(line.position(0.0), DVec2::new(0.0, 0.0));
        assert_eq!(line.position(0.25), DVec2::new(2.5, 0.0));
        assert_eq!(line.position(1.0), DVec2::new(10.0, 0.0));
        assert_eq!(line.length(), 10.0);
    }

    #[test]
    fn test_bezier_interpolates_endpoints() {
        let bezier = Bezier::new(quarter_arc());
        assert!(bezier.position(0.0).distance(DVec2::new(100.0, 0.0)) < 1e-12);
        assert!(bezier.position(1.0).distance(DVec2::new(0.0, 100.0)) < 1e-12);
    }

    #[test]
    fn test_collinear_bezier_length_is_exact() {
        // Control points at thirds of a straight run make x(t) = 90t, so the
        // chord sum is exact regardless of sample count.
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(30.0, 0.0),
            DVec2::new(60.0, 0.0),
            DVec2::new(90.0, 0.0),
        ];
        let coarse = Bezier::with_samples(points, 4, 4);
        let fine = Bezier::with_samples(points, 400, 4);
        assert!((coarse.length() - 90.0).abs() < 1e-9);
        assert!((fine.length() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_bezier_length_converges_under_refinement() {
        let points = quarter_arc();
        let chord = DVec2::new(100.0, 0.0).distance(DVec2::new(0.0, 100.0));
        let mut last = Bezier::with_samples(points, 25, 4).length();
        assert!(last > chord);
        for samples in [50, 100, 200, 400] {
            let length = Bezier::with_samples(points, samples, 4).length();
            // Nested refinement never shortens a chord sum.
            assert!(length >= last - 1e-12);
            last = length;
        }
        let reference = Bezier::with_samples(points, 6400, 4).length();
        assert!((last - reference).abs() < 0.01);
    }

    #[test]
    fn test_bezier_collision_uses_chords() {
        let bezier = Bezier::new(quarter_arc());
        let mid = bezier.position(0.5);
        assert!(bezier.is_colliding(mid + DVec2::new(1.0, 1.0), 5.0));
        assert!(!bezier.is_colliding(DVec2::new(0.0, 0.0), 5.0));
    }

    #[test]
    fn test_segment_record_round_trip() {
        let segment = PathSegment::line(DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0), 2);
        let record = segment.to_record();
        assert_eq!(record.kind, walker_core::enums::SegmentKind::Line);
        assert_eq!(record.layer, 2);
        assert_eq!(record.points, vec![[1.0, 2.0], [3.0, 4.0]]);

        let curve = PathSegment::bezier(quarter_arc(), 0);
        assert_eq!(curve.to_record().points.len(), 4);
    }

    #[test]
    fn test_origin_is_first_point() {
        let segment = PathSegment::line(DVec2::new(7.0, 8.0), DVec2::new(9.0, 9.0), 0);
        assert_eq!(segment.origin(), DVec2::new(7.0, 8.0));
    }
}
