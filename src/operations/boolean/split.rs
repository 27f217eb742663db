use crate::geometry::Region;
use crate::math::distance_2d::points_coincide_2d;
use crate::math::intersect_2d::point_on_segment_2d;
use crate::math::Point2;

use super::crossings::{region_crossings, self_intersections};

/// Splits a path into open fragments at its self-crossings.
///
/// Each crossing cuts both edges involved. A path with no self-crossings
/// comes back as a single fragment covering the whole path (including the
/// closure point when `closed`).
#[must_use]
pub fn split_path_at_self_crossings(
    points: &[Point2],
    closed: bool,
    eps: f64,
) -> Vec<Vec<Point2>> {
    let crossings = self_intersections(points, closed, eps);
    let mut cuts: Vec<(usize, f64)> = Vec::with_capacity(crossings.len() * 2);
    for c in &crossings {
        cuts.push((c.seg_i, c.t_i));
        cuts.push((c.seg_j, c.t_j));
    }
    cut_path(points, closed, cuts, eps)
}

/// Splits a path into open fragments at its crossings with a region's
/// boundary.
#[must_use]
pub fn split_path_at_region_crossings(
    points: &[Point2],
    region: &Region,
    closed: bool,
    eps: f64,
) -> Vec<Vec<Point2>> {
    let cuts = region_crossings(points, region, closed, eps);
    cut_path(points, closed, cuts, eps)
}

/// Cuts a path at sorted `(edge, offset)` positions.
///
/// The path start and end are added as bookend cuts, so consecutive cut
/// pairs each bound one fragment. Offsets are clamped to `[0, 1]`, cuts
/// closer than `eps` collapse, fragments are deduplicated pointwise and
/// dropped when fewer than 2 points remain.
fn cut_path(
    points: &[Point2],
    closed: bool,
    cuts: Vec<(usize, f64)>,
    eps: f64,
) -> Vec<Vec<Point2>> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let segs = if closed { n } else { n - 1 };

    let mut cuts: Vec<(usize, f64)> = cuts
        .into_iter()
        .map(|(seg, t)| (seg, t.clamp(0.0, 1.0)))
        .collect();
    cuts.push((0, 0.0));
    cuts.push((segs - 1, 1.0));
    cuts.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then(a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    });
    cuts.dedup_by(|next, prev| next.0 == prev.0 && (next.1 - prev.1).abs() <= eps);

    let mut fragments = Vec::with_capacity(cuts.len() - 1);
    for pair in cuts.windows(2) {
        let (s1, u1) = pair[0];
        let (s2, u2) = pair[1];

        let mut frag: Vec<Point2> = Vec::new();
        if u1 < 1.0 {
            frag.push(point_on_segment_2d(&points[s1], &points[(s1 + 1) % n], u1));
        }
        for pt in &points[(s1 + 1)..=s2] {
            frag.push(*pt);
        }
        if u2 > 0.0 {
            frag.push(point_on_segment_2d(&points[s2], &points[(s2 + 1) % n], u2));
        }

        let mut deduped: Vec<Point2> = Vec::with_capacity(frag.len());
        for pt in frag {
            let dup = deduped
                .last()
                .is_some_and(|prev| points_coincide_2d(prev, &pt, eps));
            if !dup {
                deduped.push(pt);
            }
        }
        if deduped.len() >= 2 {
            fragments.push(deduped);
        }
    }
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Path;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    // ── split_path_at_self_crossings tests ──

    #[test]
    fn simple_path_survives_as_one_fragment() {
        let square = vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)];
        let frags = split_path_at_self_crossings(&square, true, TOLERANCE);
        assert_eq!(frags.len(), 1);
        let frag = &frags[0];
        assert_eq!(frag.len(), 5);
        assert!(points_coincide_2d(&frag[0], &frag[4], TOLERANCE));
    }

    #[test]
    fn bowtie_splits_into_three_fragments() {
        let bowtie = vec![p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0), p(4.0, 4.0)];
        let frags = split_path_at_self_crossings(&bowtie, true, TOLERANCE);
        assert_eq!(frags.len(), 3, "got {} fragments", frags.len());

        // The middle fragment is the upper triangle, already closed at the
        // pinch point (2, 2).
        assert_eq!(frags[1].len(), 4);
        assert!(points_coincide_2d(&frags[1][0], &p(2.0, 2.0), TOLERANCE));
        assert!(points_coincide_2d(&frags[1][3], &p(2.0, 2.0), TOLERANCE));

        assert!(points_coincide_2d(&frags[0][0], &p(0.0, 0.0), TOLERANCE));
        assert!(points_coincide_2d(&frags[2][1], &p(0.0, 0.0), TOLERANCE));
    }

    #[test]
    fn open_path_keeps_its_endpoints() {
        let path = vec![p(0.0, 0.0), p(4.0, 4.0), p(4.0, 0.0), p(0.0, 4.0)];
        let frags = split_path_at_self_crossings(&path, false, TOLERANCE);
        assert_eq!(frags.len(), 3, "got {} fragments", frags.len());
        assert!(points_coincide_2d(&frags[0][0], &p(0.0, 0.0), TOLERANCE));
        // The middle fragment is the loop through (4,4) and (4,0), closed at
        // the crossing point (2, 2).
        assert_eq!(frags[1].len(), 4);
        assert!(points_coincide_2d(&frags[1][0], &p(2.0, 2.0), TOLERANCE));
        assert!(points_coincide_2d(&frags[1][3], &p(2.0, 2.0), TOLERANCE));
        assert!(points_coincide_2d(&frags[2][0], &p(2.0, 2.0), TOLERANCE));
        let last = &frags[2][frags[2].len() - 1];
        assert!(points_coincide_2d(last, &p(0.0, 4.0), TOLERANCE));
    }

    // ── split_path_at_region_crossings tests ──

    #[test]
    fn overlapping_squares_yield_three_fragments() {
        let path = vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)];
        let region = Region::new(vec![Path::new(vec![
            p(1.0, 1.0),
            p(3.0, 1.0),
            p(3.0, 3.0),
            p(1.0, 3.0),
        ])]);
        let frags = split_path_at_region_crossings(&path, &region, true, TOLERANCE);
        assert_eq!(frags.len(), 3);
        assert!(points_coincide_2d(&frags[0][2], &p(2.0, 1.0), TOLERANCE));
        assert!(points_coincide_2d(&frags[1][0], &p(2.0, 1.0), TOLERANCE));
        assert!(points_coincide_2d(&frags[1][2], &p(1.0, 2.0), TOLERANCE));
        // The last fragment returns to the path start.
        let last = &frags[2][frags[2].len() - 1];
        assert!(points_coincide_2d(last, &p(0.0, 0.0), TOLERANCE));
    }

    #[test]
    fn no_crossings_keeps_path_whole() {
        let path = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let region = Region::new(vec![Path::new(vec![
            p(5.0, 5.0),
            p(6.0, 5.0),
            p(6.0, 6.0),
            p(5.0, 6.0),
        ])]);
        let frags = split_path_at_region_crossings(&path, &region, true, TOLERANCE);
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].len(), 5);
    }
}
