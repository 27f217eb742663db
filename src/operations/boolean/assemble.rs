use slotmap::SlotMap;

use crate::math::arc_2d::normalize_angle;
use crate::math::distance_2d::points_coincide_2d;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Key into the fragment pool consumed during loop assembly.
    pub struct FragmentKey;
}

type FragmentPool = SlotMap<FragmentKey, Vec<Point2>>;

/// Which extreme of clockwise turn the assembler takes at a junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRule {
    /// Smallest clockwise turn from the incoming edge direction.
    Rightmost,
    /// Largest clockwise turn from the incoming edge direction.
    Leftmost,
}

/// Grows one loop from the fragment at `start`, consuming pool fragments.
///
/// Continuations are fragments whose start (forward) or end (reversed)
/// coincides with the current endpoint; among them the extreme turn wins,
/// first found on ties. A continuation landing on an earlier vertex closes a
/// sub-loop, which becomes the result while the unused prefix of the partial
/// path is returned to the pool (its key is handed back to the caller). With
/// no continuation the partial path is emitted as-is: malformed input is
/// tolerated, not reported.
fn assemble_one(
    pool: &mut FragmentPool,
    start: FragmentKey,
    turn: TurnRule,
    eps: f64,
) -> (Vec<Point2>, Option<FragmentKey>) {
    let Some(mut current) = pool.remove(start) else {
        return (Vec::new(), None);
    };

    loop {
        let len = current.len();
        if len > 2 && points_coincide_2d(&current[0], &current[len - 1], eps) {
            return (current, None);
        }

        let Some(key) = pick_continuation(pool, &current, turn, eps) else {
            return (current, None);
        };
        let Some(frag) = pool.remove(key) else {
            return (current, None);
        };
        let endpoint = current[current.len() - 1];
        let oriented = if points_coincide_2d(&frag[0], &endpoint, eps) {
            frag
        } else {
            let mut rev = frag;
            rev.reverse();
            rev
        };

        let tail = oriented[oriented.len() - 1];
        let revisit = current[..current.len() - 1]
            .iter()
            .position(|pt| points_coincide_2d(pt, &tail, eps));
        if let Some(i) = revisit {
            let mut looped: Vec<Point2> = current[i..current.len() - 1].to_vec();
            looped.extend_from_slice(&oriented);
            let requeued = if i >= 1 {
                Some(pool.insert(current[..=i].to_vec()))
            } else {
                None
            };
            return (looped, requeued);
        }

        current.extend_from_slice(&oriented[1..]);
    }
}

/// Picks the continuation with the extreme clockwise turn at the current
/// endpoint, or `None` when nothing connects.
fn pick_continuation(
    pool: &FragmentPool,
    current: &[Point2],
    turn: TurnRule,
    eps: f64,
) -> Option<FragmentKey> {
    let endpoint = current[current.len() - 1];
    let prev = current[current.len() - 2];
    let incoming = (endpoint.y - prev.y).atan2(endpoint.x - prev.x);

    let mut best: Option<(FragmentKey, f64)> = None;
    for (key, frag) in pool.iter() {
        let n = frag.len();
        let (first, second) = if points_coincide_2d(&frag[0], &endpoint, eps) {
            (frag[0], frag[1])
        } else if points_coincide_2d(&frag[n - 1], &endpoint, eps) {
            (frag[n - 1], frag[n - 2])
        } else {
            continue;
        };
        let outgoing = (second.y - first.y).atan2(second.x - first.x);
        let cw_turn = normalize_angle(incoming - outgoing);
        let better = match best {
            None => true,
            Some((_, b)) => match turn {
                TurnRule::Rightmost => cw_turn < b,
                TurnRule::Leftmost => cw_turn > b,
            },
        };
        if better {
            best = Some((key, cw_turn));
        }
    }
    best.map(|(key, _)| key)
}

/// Assembles a bag of open fragments into loops under one turn rule.
///
/// Each round seeds from the earliest unconsumed fragment in input order.
/// Fragments with fewer than 2 points are ignored. Emission order is
/// deterministic given input order but otherwise carries no meaning.
#[must_use]
pub fn assemble_fragments(
    fragments: &[Vec<Point2>],
    turn: TurnRule,
    eps: f64,
) -> Vec<Vec<Point2>> {
    let mut pool: FragmentPool = SlotMap::with_key();
    let mut order: Vec<FragmentKey> = Vec::with_capacity(fragments.len());
    for frag in fragments {
        if frag.len() >= 2 {
            order.push(pool.insert(frag.clone()));
        }
    }

    let mut loops = Vec::new();
    let mut cursor = 0;
    while cursor < order.len() {
        let key = order[cursor];
        cursor += 1;
        if !pool.contains_key(key) {
            continue;
        }
        let (loop_pts, requeued) = assemble_one(&mut pool, key, turn, eps);
        if !loop_pts.is_empty() {
            loops.push(loop_pts);
        }
        if let Some(k) = requeued {
            order.push(k);
        }
    }
    loops
}

/// Assembles loops the way the boolean engine consumes them.
///
/// Each round seeds at the fragment holding the smallest x coordinate and
/// runs the walk under both turn rules; the result with the smaller absolute
/// area wins and its pool state carries forward.
#[must_use]
pub fn assemble_loops(fragments: &[Vec<Point2>], eps: f64) -> Vec<Vec<Point2>> {
    let mut pool: FragmentPool = SlotMap::with_key();
    for frag in fragments {
        if frag.len() >= 2 {
            pool.insert(frag.clone());
        }
    }

    let mut loops = Vec::new();
    while !pool.is_empty() {
        let Some(seed) = min_x_fragment(&pool) else {
            break;
        };
        let mut left_pool = pool.clone();
        let (left, _) = assemble_one(&mut left_pool, seed, TurnRule::Leftmost, eps);
        let (right, _) = assemble_one(&mut pool, seed, TurnRule::Rightmost, eps);
        if signed_area_2d(&left).abs() < signed_area_2d(&right).abs() {
            pool = left_pool;
            if !left.is_empty() {
                loops.push(left);
            }
        } else if !right.is_empty() {
            loops.push(right);
        }
    }
    loops
}

/// Key of the fragment containing the smallest x coordinate, first on ties.
fn min_x_fragment(pool: &FragmentPool) -> Option<FragmentKey> {
    let mut best: Option<(FragmentKey, f64)> = None;
    for (key, frag) in pool.iter() {
        let min_x = frag.iter().map(|pt| pt.x).fold(f64::INFINITY, f64::min);
        if best.is_none() || min_x < best.map_or(f64::MAX, |(_, b)| b) {
            best = Some((key, min_x));
        }
    }
    best.map(|(key, _)| key)
}
