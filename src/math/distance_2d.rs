use super::Point2;

/// Tests whether two points coincide within `eps` (Euclidean distance).
#[must_use]
pub fn points_coincide_2d(a: &Point2, b: &Point2, eps: f64) -> bool {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy <= eps * eps
}

/// Returns the minimum distance from `p` to the line segment `a`→`b`.
#[must_use]
pub fn point_segment_distance_2d(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return ((p.x - a.x).powi(2) + (p.y - a.y).powi(2)).sqrt();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let closest_x = a.x + t * dx;
    let closest_y = a.y + t * dy;

    ((p.x - closest_x).powi(2) + (p.y - closest_y).powi(2)).sqrt()
}

/// Returns the minimum distance from `p` to a polyline.
///
/// When `closed` is true the wraparound edge from the last point back to the
/// first is included. A polyline with fewer than 2 points yields the distance
/// to its single point, or `f64::INFINITY` when empty.
#[must_use]
pub fn point_path_distance_2d(p: &Point2, points: &[Point2], closed: bool) -> f64 {
    match points.len() {
        0 => f64::INFINITY,
        1 => ((p.x - points[0].x).powi(2) + (p.y - points[0].y).powi(2)).sqrt(),
        n => {
            let segs = if closed { n } else { n - 1 };
            let mut best = f64::INFINITY;
            for i in 0..segs {
                let d = point_segment_distance_2d(p, &points[i], &points[(i + 1) % n]);
                if d < best {
                    best = d;
                }
            }
            best
        }
    }
}
