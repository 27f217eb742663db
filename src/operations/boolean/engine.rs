use crate::error::Result;
use crate::geometry::{Path, Region, Shape};
use crate::math::Point2;

use super::assemble::assemble_loops;
use super::tag::{tag_subpaths, SubpathTag};

/// The boolean operation applied to filled areas.
///
/// Exclusive-or is not tagged directly; it is composed from difference and
/// union by [`super::ExclusiveOr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Difference,
    Intersection,
}

/// Which operand of a pairwise boolean a fragment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperandSide {
    A,
    B,
}

/// Determines whether a tagged fragment belongs to the result boundary.
///
/// | Fragment | Tag vs other | Union   | Difference (A−B) | Intersection |
/// |----------|--------------|---------|------------------|--------------|
/// | from A   | `Outside`    | keep    | keep             | discard      |
/// | from A   | `Inside`     | discard | discard          | keep         |
/// | from A   | `Shared`     | keep    | discard          | keep         |
/// | from A   | `Unmatched`  | discard | keep             | discard      |
/// | from B   | `Outside`    | keep    | discard          | discard      |
/// | from B   | `Inside`     | discard | keep             | keep         |
/// | from B   | `Shared`     | discard | discard          | discard      |
/// | from B   | `Unmatched`  | discard | discard          | discard      |
///
/// Boundary stretches the operands have in common are carried by side A
/// alone, so the result states each shared edge exactly once.
#[allow(clippy::match_same_arms)]
fn should_keep_subpath(side: OperandSide, tag: SubpathTag, op: BooleanOp) -> bool {
    match (side, op, tag) {
        // Fragments from A, tagged against B
        (OperandSide::A, BooleanOp::Union, SubpathTag::Outside | SubpathTag::Shared) => true,
        (OperandSide::A, BooleanOp::Union, _) => false,
        (OperandSide::A, BooleanOp::Difference, SubpathTag::Outside | SubpathTag::Unmatched) => {
            true
        }
        (OperandSide::A, BooleanOp::Difference, _) => false,
        (OperandSide::A, BooleanOp::Intersection, SubpathTag::Inside | SubpathTag::Shared) => true,
        (OperandSide::A, BooleanOp::Intersection, _) => false,

        // Fragments from B, tagged against A
        (OperandSide::B, BooleanOp::Union, SubpathTag::Outside) => true,
        (OperandSide::B, BooleanOp::Union, _) => false,
        (OperandSide::B, BooleanOp::Difference, SubpathTag::Inside) => true,
        (OperandSide::B, BooleanOp::Difference, _) => false,
        (OperandSide::B, BooleanOp::Intersection, SubpathTag::Inside) => true,
        (OperandSide::B, BooleanOp::Intersection, _) => false,
    }
}

/// Answers trivially when the operand bounding boxes are strictly separated.
///
/// An empty operand counts as disjoint. Returns `None` when the boxes
/// overlap or touch and the full pipeline must run.
fn disjoint_fast_path(a: &Region, b: &Region, op: BooleanOp) -> Option<Region> {
    let disjoint = match (a.bounds(), b.bounds()) {
        (Some((a_min, a_max)), Some((b_min, b_max))) => {
            a_max.x < b_min.x || b_max.x < a_min.x || a_max.y < b_min.y || b_max.y < a_min.y
        }
        _ => true,
    };
    if !disjoint {
        return None;
    }
    Some(match op {
        BooleanOp::Union => {
            let mut paths = a.paths.clone();
            paths.extend(b.paths.iter().cloned());
            Region::new(paths)
        }
        BooleanOp::Difference => a.clone(),
        BooleanOp::Intersection => Region::empty(),
    })
}

/// Executes one pairwise boolean through the full arrangement pipeline.
///
/// Both operands are normalized to counter-clockwise winding, each operand's
/// paths are cut at crossings with the other operand and tagged, the kept
/// fragments are reassembled into closed loops, and the loops become the
/// constituent paths of the result.
pub(super) fn boolean_pair(a: &Region, b: &Region, op: BooleanOp, eps: f64) -> Result<Region> {
    let a = a.normalized_ccw();
    let b = b.normalized_ccw();

    if let Some(result) = disjoint_fast_path(&a, &b, op) {
        return Ok(result);
    }

    let mut kept: Vec<Vec<Point2>> = Vec::new();
    for path in &a.paths {
        for (tag, pts) in tag_subpaths(&path.points, &b, eps)? {
            if should_keep_subpath(OperandSide::A, tag, op) {
                kept.push(pts);
            }
        }
    }
    for path in &b.paths {
        for (tag, pts) in tag_subpaths(&path.points, &a, eps)? {
            if should_keep_subpath(OperandSide::B, tag, op) {
                kept.push(pts);
            }
        }
    }

    let paths = assemble_loops(&kept, eps)
        .into_iter()
        .map(|pts| Path::new(pts).cleaned(eps))
        .filter(|path| path.points.len() >= 3)
        .collect();
    Ok(Region::new(paths))
}

/// Resolves every input shape and folds the pairwise boolean across them in
/// argument order.
///
/// With no inputs the result is the empty region. With one input the result
/// is that input resolved, whatever the operation.
pub(super) fn boolean_execute(inputs: &[Shape], op: BooleanOp, eps: f64) -> Result<Region> {
    let mut regions = Vec::with_capacity(inputs.len());
    for shape in inputs {
        regions.push(shape.to_region(eps)?);
    }

    let mut iter = regions.into_iter();
    let Some(mut acc) = iter.next() else {
        return Ok(Region::empty());
    };
    for next in iter {
        acc = boolean_pair(&acc, &next, op, eps)?;
    }
    Ok(acc)
}
