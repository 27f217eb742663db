use crate::math::distance_2d::points_coincide_2d;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// An ordered run of 2D points joined by straight segments.
///
/// A path is *closed* when its first and last points coincide within a
/// tolerance; closure is always this derived predicate, never a stored flag.
/// Operations that need polygon semantics treat a cleaned path as implicitly
/// closed by the wraparound edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub points: Vec<Point2>,
}

impl Path {
    /// Creates a path from a point list.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// True when the first and last points coincide within `eps`.
    #[must_use]
    pub fn is_closed(&self, eps: f64) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) if self.points.len() > 2 => points_coincide_2d(a, b, eps),
            _ => false,
        }
    }

    /// Returns a copy with consecutive duplicate points collapsed and a
    /// trailing point that re-states the first removed.
    #[must_use]
    pub fn cleaned(&self, eps: f64) -> Self {
        let mut points: Vec<Point2> = Vec::with_capacity(self.points.len());
        for pt in &self.points {
            let dup = points
                .last()
                .is_some_and(|prev| points_coincide_2d(prev, pt, eps));
            if !dup {
                points.push(*pt);
            }
        }
        if points.len() > 2 && points_coincide_2d(&points[0], &points[points.len() - 1], eps) {
            points.pop();
        }
        Self { points }
    }

    /// Returns a copy with the point order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Shoelace signed area of the implicitly closed polygon.
    ///
    /// Positive for counter-clockwise order.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Number of segments when the path is treated as open or closed.
    #[must_use]
    pub fn segment_count(&self, closed: bool) -> usize {
        let n = self.points.len();
        if n < 2 {
            return 0;
        }
        if closed {
            n
        } else {
            n - 1
        }
    }

    /// Axis-aligned bounding box, or `None` for an empty path.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point2, Point2)> {
        let first = self.points.first()?;
        let mut min = *first;
        let mut max = *first;
        for pt in &self.points[1..] {
            min.x = min.x.min(pt.x);
            min.y = min.y.min(pt.y);
            max.x = max.x.max(pt.x);
            max.y = max.y.max(pt.y);
        }
        Some((min, max))
    }
}
