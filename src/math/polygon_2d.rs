use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Where a point sits relative to a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    OnBoundary,
    Outside,
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Rotates a closed polygon so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y. Ensures deterministic output for tests.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - TOLERANCE || ((pt.x - b.x).abs() < TOLERANCE && pt.y < b.y) {
            best = i;
        }
    }
    if best == 0 {
        return points.to_vec();
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Returns the leftmost-bottommost vertex of a polygon (for tie-breaking in sort).
#[must_use]
pub fn leftmost_bottom(points: &[Point2]) -> Point2 {
    let mut best = points[0];
    for &pt in &points[1..] {
        if pt.x < best.x - TOLERANCE || ((pt.x - best.x).abs() < TOLERANCE && pt.y < best.y) {
            best = pt;
        }
    }
    best
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = (d.x * d.x + d.y * d.y).sqrt();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "zero-length segment between ({}, {}) and ({}, {})",
            a.x, a.y, b.x, b.y
        ))
        .into());
    }
    Ok(Vector2::new(d.x / len, d.y / len))
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Signed side of the line through `a` and `b` the point `pt` falls on.
///
/// Positive when `pt` is left of the direction `a`→`b`, negative when right,
/// near zero when collinear.
#[must_use]
pub fn side_of_line_2d(pt: &Point2, a: &Point2, b: &Point2) -> f64 {
    (b.x - a.x) * (pt.y - a.y) - (pt.x - a.x) * (b.y - a.y)
}

/// Classifies a point against a closed polygon.
///
/// The polygon is implicitly closed (an edge from the last point back to the
/// first). Points within `eps` of any edge are `OnBoundary`. Otherwise the
/// interior test uses the nonzero winding rule when `nonzero` is true and
/// even-odd crossing parity when false; the two differ only for
/// self-intersecting polygons.
#[must_use]
pub fn point_in_polygon_2d(
    pt: &Point2,
    poly: &[Point2],
    nonzero: bool,
    eps: f64,
) -> PointClassification {
    let n = poly.len();
    for i in 0..n {
        let a = &poly[i];
        let b = &poly[(i + 1) % n];
        if super::distance_2d::point_segment_distance_2d(pt, a, b) <= eps {
            return PointClassification::OnBoundary;
        }
    }

    if nonzero {
        let mut winding = 0_i64;
        for i in 0..n {
            let a = &poly[i];
            let b = &poly[(i + 1) % n];
            if a.y <= pt.y {
                if b.y > pt.y && side_of_line_2d(pt, a, b) > 0.0 {
                    winding += 1;
                }
            } else if b.y <= pt.y && side_of_line_2d(pt, a, b) < 0.0 {
                winding -= 1;
            }
        }
        if winding != 0 {
            return PointClassification::Inside;
        }
    } else {
        let mut crossings = 0_u64;
        for i in 0..n {
            let a = &poly[i];
            let b = &poly[(i + 1) % n];
            if (a.y > pt.y) != (b.y > pt.y) {
                let x_int = a.x + (pt.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if x_int > pt.x {
                    crossings += 1;
                }
            }
        }
        if crossings % 2 == 1 {
            return PointClassification::Inside;
        }
    }
    PointClassification::Outside
}
