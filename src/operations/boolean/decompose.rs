use crate::error::Result;
use crate::geometry::Path;
use crate::math::distance_2d::points_coincide_2d;
use crate::math::polygon_2d::{
    left_normal, point_in_polygon_2d, segment_direction, PointClassification,
};
use crate::math::Point2;

use super::assemble::assemble_loops;
use super::split::split_path_at_self_crossings;

/// Decomposes a self-crossing closed path into simple boundary loops.
///
/// The path is split at its self-crossings; fragments lying in the filled
/// interior are dropped and the surviving boundary fragments are reassembled
/// into closed loops. A fragment counts as interior when probe points on
/// *both* sides of its first-edge midpoint (displaced by 1/2048 of the edge
/// length along the edge normal) fall inside the original path, with the
/// winding rule selected by `nonzero` and the boundary itself counting as
/// inside. Already-closed fragments are emitted directly.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if a fragment starts with a
/// zero-length edge.
pub fn decompose_path(points: &[Point2], nonzero: bool, eps: f64) -> Result<Vec<Path>> {
    let fragments = split_path_at_self_crossings(points, true, eps);
    let mut loops: Vec<Vec<Point2>> = Vec::new();
    let mut open_bag: Vec<Vec<Point2>> = Vec::new();

    for frag in fragments {
        let dir = segment_direction(&frag[0], &frag[1])?;
        let edge_len = (frag[1] - frag[0]).norm();
        let mid = Point2::new(
            (frag[0].x + frag[1].x) * 0.5,
            (frag[0].y + frag[1].y) * 0.5,
        );
        let step = left_normal(dir) * (edge_len / 2048.0);

        let interior = [mid + step, mid - step].iter().all(|probe| {
            point_in_polygon_2d(probe, points, nonzero, eps) != PointClassification::Outside
        });
        if interior {
            continue;
        }

        let n = frag.len();
        if n > 2 && points_coincide_2d(&frag[0], &frag[n - 1], eps) {
            loops.push(frag);
        } else {
            open_bag.push(frag);
        }
    }

    loops.extend(assemble_loops(&open_bag, eps));
    Ok(loops
        .into_iter()
        .map(|pts| Path::new(pts).cleaned(eps))
        .filter(|path| path.points.len() >= 3)
        .collect())
}
