use std::f64::consts::TAU;

use super::Point2;

/// Reduces an angle into the range `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle % TAU;
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

/// Unsigned angle subtended at `center` by the points `from` and `to`.
///
/// Always in `[0, π]`.
#[must_use]
pub fn subtended_angle_2d(center: &Point2, from: &Point2, to: &Point2) -> f64 {
    let v1 = from - center;
    let v2 = to - center;
    let cross = v1.x * v2.y - v1.y * v2.x;
    let dot = v1.x * v2.x + v1.y * v2.y;
    cross.atan2(dot).abs()
}

/// Samples the minor arc from `from` to `to` about `center`.
///
/// Returns `n` points including both endpoints; the radius is taken from
/// `from` and the sweep never exceeds π, so the two endpoints must not be
/// antipodal. `n` below 2 is treated as 2.
#[must_use]
pub fn arc_points_2d(center: &Point2, from: &Point2, to: &Point2, n: usize) -> Vec<Point2> {
    let n = n.max(2);
    let v1 = from - center;
    let v2 = to - center;
    let radius = v1.norm();
    let start = v1.y.atan2(v1.x);
    let cross = v1.x * v2.y - v1.y * v2.x;
    let dot = v1.x * v2.x + v1.y * v2.y;
    let sweep = cross.atan2(dot);

    let mut points = Vec::with_capacity(n);
    #[allow(clippy::cast_precision_loss)]
    let step = sweep / (n - 1) as f64;
    for i in 0..n {
        #[allow(clippy::cast_precision_loss)]
        let a = start + step * i as f64;
        points.push(Point2::new(
            center.x + radius * a.cos(),
            center.y + radius * a.sin(),
        ));
    }
    points
}
