use super::{Point2, Vector2};

/// Intersects two infinite lines given in point + direction form.
///
/// Returns the parameters `(t1, t2)` such that `p1 + t1*d1 == p2 + t2*d2`,
/// or `None` when the directions are parallel within `eps` (the 2D cross
/// product of the directions is the solve's denominator).
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
    eps: f64,
) -> Option<(f64, f64)> {
    let denom = d1.x * d2.y - d1.y * d2.x;
    if denom.abs() < eps {
        return None;
    }

    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t1 = (dx * d2.y - dy * d2.x) / denom;
    let t2 = (dx * d1.y - dy * d1.x) / denom;
    Some((t1, t2))
}

/// Intersects the support lines of two segments `a0`→`a1` and `b0`→`b1`.
///
/// Returns `(point, t, u)` where `t` parametrizes the first segment and `u`
/// the second, both with 0 at the start point and 1 at the end point. The
/// parameters are **not** clamped or range-checked; callers apply their own
/// acceptance windows (crossing scans use different windows for self- and
/// region-crossings). Returns `None` for parallel segments.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    eps: f64,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;
    let (t, u) = line_line_intersect_2d(a0, &da, b0, &db, eps)?;
    Some((point_on_segment_2d(a0, a1, t), t, u))
}

/// Evaluates the point at parameter `t` on the segment `a`→`b`.
#[must_use]
pub fn point_on_segment_2d(a: &Point2, b: &Point2, t: f64) -> Point2 {
    Point2::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    // ── line_line_intersect_2d tests ──

    #[test]
    fn line_line_perpendicular() {
        // X axis and a vertical line through (3, 0).
        let r = line_line_intersect_2d(&p(0.0, 0.0), &v(1.0, 0.0), &p(3.0, -1.0), &v(0.0, 1.0), TOLERANCE);
        let (t1, t2) = r.unwrap();
        assert!((t1 - 3.0).abs() < TOLERANCE, "t1={t1}");
        assert!((t2 - 1.0).abs() < TOLERANCE, "t2={t2}");
    }

    #[test]
    fn line_line_parallel_is_none() {
        let r = line_line_intersect_2d(&p(0.0, 0.0), &v(1.0, 1.0), &p(0.0, 1.0), &v(2.0, 2.0), TOLERANCE);
        assert!(r.is_none());
    }

    #[test]
    fn line_line_diagonal() {
        // y = x and y = -x + 2 meet at (1, 1).
        let r = line_line_intersect_2d(&p(0.0, 0.0), &v(1.0, 1.0), &p(0.0, 2.0), &v(1.0, -1.0), TOLERANCE);
        let (t1, _) = r.unwrap();
        assert!((t1 - 1.0).abs() < TOLERANCE, "t1={t1}");
    }

    // ── segment_segment_intersect_2d tests ──

    #[test]
    fn segment_segment_crossing() {
        let r = segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(2.0, 2.0),
            &p(0.0, 2.0),
            &p(2.0, 0.0),
            TOLERANCE,
        );
        let (pt, t, u) = r.unwrap();
        assert!((pt.x - 1.0).abs() < TOLERANCE && (pt.y - 1.0).abs() < TOLERANCE);
        assert!((t - 0.5).abs() < TOLERANCE, "t={t}");
        assert!((u - 0.5).abs() < TOLERANCE, "u={u}");
    }

    #[test]
    fn segment_segment_unclamped_parameters() {
        // Support lines cross beyond the first segment's end: t > 1 is reported as-is.
        let r = segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(3.0, -1.0),
            &p(3.0, 1.0),
            TOLERANCE,
        );
        let (pt, t, u) = r.unwrap();
        assert!((pt.x - 3.0).abs() < TOLERANCE);
        assert!((t - 3.0).abs() < TOLERANCE, "t={t}");
        assert!((u - 0.5).abs() < TOLERANCE, "u={u}");
    }

    #[test]
    fn segment_segment_parallel_is_none() {
        let r = segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(0.0, 1.0),
            &p(1.0, 1.0),
            TOLERANCE,
        );
        assert!(r.is_none());
    }

    #[test]
    fn point_on_segment_interpolates() {
        let pt = point_on_segment_2d(&p(1.0, 1.0), &p(3.0, 5.0), 0.5);
        assert!((pt.x - 2.0).abs() < TOLERANCE && (pt.y - 3.0).abs() < TOLERANCE);
    }
}
