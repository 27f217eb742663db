use crate::geometry::Region;
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::Point2;

/// A transversal crossing between two edges of the same path.
#[derive(Debug, Clone, Copy)]
pub struct SelfIntersection {
    /// Index of the earlier edge.
    pub seg_i: usize,
    /// Index of the later edge.
    pub seg_j: usize,
    /// Parametric offset of the crossing along edge `seg_i`.
    pub t_i: f64,
    /// Parametric offset of the crossing along edge `seg_j`.
    pub t_j: f64,
    /// The crossing point.
    pub point: Point2,
}

/// Finds every point where a path crosses itself.
///
/// Tests each edge pair `(i, j)` with `i < j`; `closed` adds the wraparound
/// edge. A crossing is accepted only when both parametric offsets lie in
/// `(eps, 1+eps]`, so the shared endpoint of adjacent edges never counts and
/// a crossing landing exactly on a vertex is reported once, on the edge that
/// ends there. Parallel pairs are skipped. Output is sorted by
/// (first edge, offset). Cost O(n²).
#[must_use]
pub fn self_intersections(points: &[Point2], closed: bool, eps: f64) -> Vec<SelfIntersection> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    let segs = if closed { n } else { n - 1 };

    let mut found = Vec::new();
    for i in 0..segs {
        let a0 = &points[i];
        let a1 = &points[(i + 1) % n];
        for j in (i + 1)..segs {
            let b0 = &points[j];
            let b1 = &points[(j + 1) % n];
            let Some((point, t_i, t_j)) = segment_segment_intersect_2d(a0, a1, b0, b1, eps)
            else {
                continue;
            };
            if t_i > eps && t_i <= 1.0 + eps && t_j > eps && t_j <= 1.0 + eps {
                found.push(SelfIntersection {
                    seg_i: i,
                    seg_j: j,
                    t_i,
                    t_j,
                    point,
                });
            }
        }
    }

    found.sort_by(|a, b| {
        a.seg_i
            .cmp(&b.seg_i)
            .then(a.t_i.partial_cmp(&b.t_i).unwrap_or(std::cmp::Ordering::Equal))
    });
    found
}

/// Finds every crossing between a path's edges and a region's boundary.
///
/// Returns `(edge index, parametric offset)` records on the path side,
/// sorted and deduplicated within `eps`. Offsets are accepted on the closed
/// window `[-eps, 1+eps]`, so endpoint touches count on both sides.
#[must_use]
pub fn region_crossings(
    points: &[Point2],
    region: &Region,
    closed: bool,
    eps: f64,
) -> Vec<(usize, f64)> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let segs = if closed { n } else { n - 1 };

    let mut records: Vec<(usize, f64)> = Vec::new();
    for i in 0..segs {
        let a0 = &points[i];
        let a1 = &points[(i + 1) % n];
        for path in &region.paths {
            let m = path.points.len();
            for j in 0..m {
                let b0 = &path.points[j];
                let b1 = &path.points[(j + 1) % m];
                let Some((_, t, u)) = segment_segment_intersect_2d(a0, a1, b0, b1, eps) else {
                    continue;
                };
                if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
                    records.push((i, t));
                }
            }
        }
    }

    records.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then(a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    });
    records.dedup_by(|next, prev| next.0 == prev.0 && (next.1 - prev.1).abs() <= eps);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Path;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    // ── self_intersections tests ──

    #[test]
    fn square_has_no_self_crossings() {
        let square = vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)];
        assert!(self_intersections(&square, true, TOLERANCE).is_empty());
    }

    #[test]
    fn open_x_shape_crosses_once() {
        let path = vec![p(0.0, 0.0), p(4.0, 4.0), p(4.0, 0.0), p(0.0, 4.0)];
        let found = self_intersections(&path, false, TOLERANCE);
        assert_eq!(found.len(), 1);
        let c = &found[0];
        assert_eq!(c.seg_i, 0);
        assert_eq!(c.seg_j, 2);
        assert!((c.point.x - 2.0).abs() < TOLERANCE, "x={}", c.point.x);
        assert!((c.point.y - 2.0).abs() < TOLERANCE, "y={}", c.point.y);
    }

    #[test]
    fn pinched_hexagon_crosses_twice() {
        let path = vec![
            p(-100.0, 100.0),
            p(0.0, -50.0),
            p(100.0, 100.0),
            p(100.0, -100.0),
            p(0.0, 50.0),
            p(-100.0, -100.0),
        ];
        let found = self_intersections(&path, true, TOLERANCE);
        assert_eq!(found.len(), 2, "found {} crossings", found.len());

        let third = 100.0 / 3.0;
        assert_eq!(found[0].seg_i, 0);
        assert_eq!(found[0].seg_j, 4);
        assert!((found[0].point.x + third).abs() < 1e-9, "x={}", found[0].point.x);
        assert!(found[0].point.y.abs() < 1e-9, "y={}", found[0].point.y);

        assert_eq!(found[1].seg_i, 1);
        assert_eq!(found[1].seg_j, 3);
        assert!((found[1].point.x - third).abs() < 1e-9, "x={}", found[1].point.x);
        assert!(found[1].point.y.abs() < 1e-9, "y={}", found[1].point.y);
    }

    #[test]
    fn vertex_on_edge_counted_once() {
        // Edge 2 ends exactly on edge 0, and edge 3 starts there; only the
        // edge that ends at the touch point reports a crossing.
        let path = vec![
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 2.0),
            p(2.0, 0.0),
            p(2.0, -2.0),
        ];
        let found = self_intersections(&path, false, TOLERANCE);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].seg_i, 0);
        assert_eq!(found[0].seg_j, 2);
        assert!((found[0].t_i - 0.5).abs() < TOLERANCE, "t_i={}", found[0].t_i);
        assert!((found[0].t_j - 1.0).abs() < TOLERANCE, "t_j={}", found[0].t_j);
    }

    // ── region_crossings tests ──

    #[test]
    fn overlapping_squares_cross_twice() {
        let path = vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)];
        let region = Region::new(vec![Path::new(vec![
            p(1.0, 1.0),
            p(3.0, 1.0),
            p(3.0, 3.0),
            p(1.0, 3.0),
        ])]);
        let records = region_crossings(&path, &region, true, TOLERANCE);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].0, 1);
        assert!((records[0].1 - 0.5).abs() < TOLERANCE, "t={}", records[0].1);
        assert_eq!(records[1].0, 2);
        assert!((records[1].1 - 0.5).abs() < TOLERANCE, "t={}", records[1].1);
    }

    #[test]
    fn disjoint_squares_have_no_crossings() {
        let path = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let region = Region::new(vec![Path::new(vec![
            p(5.0, 5.0),
            p(6.0, 5.0),
            p(6.0, 6.0),
            p(5.0, 6.0),
        ])]);
        assert!(region_crossings(&path, &region, true, TOLERANCE).is_empty());
    }

    #[test]
    fn identical_squares_cross_at_every_corner() {
        let square = vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)];
        let region = Region::new(vec![Path::new(square.clone())]);
        let records = region_crossings(&square, &region, true, TOLERANCE);
        // Two records per edge, one at each end; coincident edges themselves
        // are parallel and contribute nothing.
        assert_eq!(records.len(), 8);
        for (seg, t) in records {
            assert!(t.abs() < TOLERANCE || (t - 1.0).abs() < TOLERANCE, "seg={seg} t={t}");
        }
    }
}
