//! Point-versus-segment proximity tests shared by path collision checks.

use glam::DVec2;

/// Returns true when `point` lies within `radius` of the segment `a`..`b`.
///
/// The test projects the point onto the segment's supporting line and
/// rejects projections that fall outside the segment span, so a point
/// hovering past an endpoint never collides even when it is closer than
/// `radius` to that endpoint. A zero-length segment collides with nothing.
pub fn point_near_segment(point: DVec2, a: DVec2, b: DVec2, radius: f64) -> bool {
    let d = b - a;
    let t = (point - a).dot(d) / d.length_squared();
    if !(0.0..=1.0).contains(&t) {
        return false;
    }
    let foot = a + d * t;
    foot.distance(point) < radius
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_on_segment_collides() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(10.0, 0.0);
        assert!(point_near_segment(DVec2::new(5.0, 0.0), a, b, 1.0));
    }

    #[test]
    fn test_point_within_radius_collides() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(10.0, 0.0);
        assert!(point_near_segment(DVec2::new(5.0, 2.9), a, b, 3.0));
        assert!(!point_near_segment(DVec2::new(5.0, 3.1), a, b, 3.0));
    }

    #[test]
    fn test_projection_outside_span_misses() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(10.0, 0.0);
        // Closer than the radius to the endpoint, but past the span.
        assert!(!point_near_segment(DVec2::new(10.5, 0.0), a, b, 3.0));
        assert!(!point_near_segment(DVec2::new(-0.5, 0.0), a, b, 3.0));
    }

    #[test]
    fn test_exact_radius_misses() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(10.0, 0.0);
        // Strict inequality: distance == radius is not a hit.
        assert!(!point_near_segment(DVec2::new(5.0, 3.0), a, b, 3.0));
    }

    #[test]
    fn test_degenerate_segment_never_collides() {
        let a = DVec2::new(4.0, 4.0);
        assert!(!point_near_segment(DVec2::new(4.0, 4.0), a, a, 10.0));
    }
}
