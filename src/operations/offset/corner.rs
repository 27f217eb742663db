use crate::error::{GeometryError, Result};
use crate::math::arc_2d::{arc_points_2d, subtended_angle_2d};
use crate::math::distance_2d::points_coincide_2d;
use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::polygon_2d::left_normal;
use crate::math::Point2;

use super::{CornerMode, OffsetSeg};

/// Computes the output points for the junction between two consecutive
/// surviving segments, in travel order.
///
/// Collinear neighbors share their common endpoint. Inside corners always
/// miter; outside corners miter, round, or chamfer per `mode`, with `vertex`
/// being the input vertex the junction stems from.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` when the neighbors are anti-parallel,
/// which leaves the miter undefined.
pub fn corner_points(
    prev: &OffsetSeg,
    next: &OffsetSeg,
    vertex: &Point2,
    d_abs: f64,
    mode: CornerMode,
    maxstep: f64,
    eps: f64,
) -> Result<Vec<Point2>> {
    if points_coincide_2d(&prev.end, &next.start, eps) {
        return Ok(vec![prev.end]);
    }

    let Some((t, _)) = line_line_intersect_2d(&prev.start, &prev.dir, &next.start, &next.dir, eps)
    else {
        return Err(GeometryError::Degenerate(
            "offset neighbors make a 180 degree turn".to_owned(),
        )
        .into());
    };
    let miter = prev.start + prev.dir * t;

    if !is_outside(prev, next) {
        return Ok(vec![miter]);
    }
    match mode {
        CornerMode::Sharp => Ok(vec![miter]),
        CornerMode::Round => Ok(round(prev, next, vertex, d_abs, maxstep, miter)),
        CornerMode::Chamfer => Ok(chamfer(prev, next, vertex, d_abs, eps, miter)),
    }
}

/// An outside corner is one where the shift pulled the neighbors apart: the
/// gap from `prev.end` to `next.start` runs forward along both directions.
fn is_outside(prev: &OffsetSeg, next: &OffsetSeg) -> bool {
    let gap = next.start - prev.end;
    gap.dot(&prev.dir) > 0.0 && gap.dot(&next.dir) > 0.0
}

/// Arc about the input vertex from `prev.end` to `next.start`, or the plain
/// miter when the subtense is too small to warrant more than 2 samples.
fn round(
    prev: &OffsetSeg,
    next: &OffsetSeg,
    vertex: &Point2,
    d_abs: f64,
    maxstep: f64,
    miter: Point2,
) -> Vec<Point2> {
    let theta = subtended_angle_2d(vertex, &prev.end, &next.start);
    let steps = (d_abs * theta / maxstep).ceil();
    if steps > 2.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = steps as usize;
        arc_points_2d(vertex, &prev.end, &next.start, n)
    } else {
        vec![miter]
    }
}

/// Cuts the corner with the tangent line at distance `d_abs` from the input
/// vertex, clipped against both neighbor lines. Falls back to the miter when
/// a clip is undefined.
fn chamfer(
    prev: &OffsetSeg,
    next: &OffsetSeg,
    vertex: &Point2,
    d_abs: f64,
    eps: f64,
    miter: Point2,
) -> Vec<Point2> {
    let chord = next.start - prev.end;
    let len = chord.norm();
    if len < eps {
        return vec![miter];
    }
    let chord_dir = chord / len;
    let mut normal = left_normal(chord_dir);
    if normal.dot(&(prev.end - vertex)) < 0.0 {
        normal = -normal;
    }
    let on_line = vertex + normal * d_abs;

    let clip_prev = line_line_intersect_2d(&on_line, &chord_dir, &prev.start, &prev.dir, eps);
    let clip_next = line_line_intersect_2d(&on_line, &chord_dir, &next.start, &next.dir, eps);
    match (clip_prev, clip_next) {
        (Some((t1, _)), Some((t2, _))) => {
            vec![on_line + chord_dir * t1, on_line + chord_dir * t2]
        }
        _ => vec![miter],
    }
}
