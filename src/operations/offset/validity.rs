use crate::math::distance_2d::point_path_distance_2d;
use crate::math::intersect_2d::point_on_segment_2d;
use crate::math::Point2;

use super::OffsetSeg;

/// Keeps the shifted segments that still honor the offset clearance.
///
/// Each segment is probed at its endpoints plus `quality` evenly spaced
/// interior points. A probe is clear when it keeps at least `d_abs - eps`
/// distance to the whole original path; a single clear probe keeps the
/// segment. The endpoint probes of a healthy segment graze the adjacent
/// input edges near a corner, so only a segment whose every probe has fallen
/// inside the clearance band has folded over and is dropped.
pub fn filter(
    segs: Vec<OffsetSeg>,
    original: &[Point2],
    closed: bool,
    d_abs: f64,
    quality: u32,
    eps: f64,
) -> Vec<OffsetSeg> {
    segs.into_iter()
        .filter(|seg| {
            (0..=quality + 1).any(|k| {
                let t = f64::from(k) / f64::from(quality + 1);
                let probe = point_on_segment_2d(&seg.start, &seg.end, t);
                point_path_distance_2d(&probe, original, closed) >= d_abs - eps
            })
        })
        .collect()
}
