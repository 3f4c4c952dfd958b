//! An ordered sequence of segments forming one traversable route.

use glam::DVec2;
use walker_core::level::SegmentRecord;

use crate::segment::PathSegment;

/// A route travellers follow, addressed by segment index plus a normalized
/// parameter within that segment.
#[derive(Debug, Clone, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn segment(&self, index: usize) -> Option<&PathSegment> {
        self.segments.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Where entering travellers appear: the first segment's first point.
    pub fn origin(&self) -> Option<DVec2> {
        self.segments.first().map(|segment| segment.origin())
    }

    pub fn add_segment(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Removes and returns the segment at `index`; out-of-range indices are
    /// ignored so editor clicks on stale hover state cannot panic.
    pub fn remove_segment(&mut self, index: usize) -> Option<PathSegment> {
        if index < self.segments.len() {
            Some(self.segments.remove(index))
        } else {
            None
        }
    }

    /// Index of the first segment within `radius` of `point`, scanning in
    /// segment order.
    pub fn find_colliding_segment(&self, point: DVec2, radius: f64) -> Option<usize> {
        self.segments
            .iter()
            .position(|segment| segment.is_colliding(point, radius))
    }

    /// Serializable form of the whole path, segment order preserved.
    pub fn to_records(&self) -> Vec<SegmentRecord> {
        self.segments.iter().map(|s| s.to_record()).collect()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_path() -> Path {
        let mut path = Path::new();
        path.add_segment(PathSegment::line(
            DVec2::new(0.0, 0.0),
            DVec2::new(100.0, 0.0),
            0,
        ));
        path.add_segment(PathSegment::line(
            DVec2::new(100.0, 0.0),
            DVec2::new(100.0, 100.0),
            1,
        ));
        path
    }

    #[test]
    fn test_origin_is_first_segment_start() {
        let path = sample_path();
        assert_eq!(path.origin(), Some(DVec2::new(0.0, 0.0)));
        assert_eq!(Path::new().origin(), None);
    }

    #[test]
    fn test_find_colliding_segment_returns_first_match() {
        let path = sample_path();
        // The corner point sits on both segments; the first one wins.
        assert_eq!(
            path.find_colliding_segment(DVec2::new(99.0, 0.5), 2.0),
            Some(0)
        );
        assert_eq!(
            path.find_colliding_segment(DVec2::new(100.0, 50.0), 2.0),
            Some(1)
        );
        assert_eq!(path.find_colliding_segment(DVec2::new(500.0, 500.0), 2.0), None);
    }

    #[test]
    fn test_remove_segment_ignores_out_of_range() {
        let mut path = sample_path();
        assert!(path.remove_segment(5).is_none());
        assert_eq!(path.len(), 2);
        assert!(path.remove_segment(0).is_some());
        assert_eq!(path.len(), 1);
        // The surviving segment shifted down to index 0.
        assert_eq!(path.segment(0).map(|s| s.layer()), Some(1));
    }

    #[test]
    fn test_to_records_preserves_order() {
        let records = sample_path().to_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].points[0], [0.0, 0.0]);
        assert_eq!(records[1].points[1], [100.0, 100.0]);
    }
}
