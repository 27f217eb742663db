use crate::error::Result;
use crate::geometry::Region;
use crate::math::polygon_2d::{
    left_normal, point_in_polygon_2d, segment_direction, PointClassification,
};
use crate::math::Point2;

use super::split::split_path_at_region_crossings;

/// Classification of a path fragment relative to a reference region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubpathTag {
    /// Strictly outside the region.
    Outside,
    /// Strictly inside the region.
    Inside,
    /// Runs along the region boundary with the same interior side.
    Shared,
    /// Runs along the region boundary with opposite interior sides.
    Unmatched,
}

/// Splits a closed path at its crossings with `region` and classifies each
/// fragment by the midpoint of its first edge.
///
/// Boundary fragments are disambiguated by a probe point displaced 0.01 to
/// the left of the first edge: when its strict interiority agrees between
/// the original path and the region the boundaries run the same way
/// (`Shared`), otherwise they oppose (`Unmatched`).
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if a fragment starts with a
/// zero-length edge.
pub fn tag_subpaths(
    points: &[Point2],
    region: &Region,
    eps: f64,
) -> Result<Vec<(SubpathTag, Vec<Point2>)>> {
    let fragments = split_path_at_region_crossings(points, region, true, eps);
    let mut tagged = Vec::with_capacity(fragments.len());
    for frag in fragments {
        let mid = Point2::new(
            (frag[0].x + frag[1].x) * 0.5,
            (frag[0].y + frag[1].y) * 0.5,
        );
        let tag = match region.point_in_region(&mid, eps) {
            PointClassification::Outside => SubpathTag::Outside,
            PointClassification::Inside => SubpathTag::Inside,
            PointClassification::OnBoundary => {
                let dir = segment_direction(&frag[0], &frag[1])?;
                let probe = mid + left_normal(dir) * 0.01;
                let in_path = point_in_polygon_2d(&probe, points, false, eps)
                    == PointClassification::Inside;
                let in_region =
                    region.point_in_region(&probe, eps) == PointClassification::Inside;
                if in_path == in_region {
                    SubpathTag::Shared
                } else {
                    SubpathTag::Unmatched
                }
            }
        };
        tagged.push((tag, frag));
    }
    Ok(tagged)
}
