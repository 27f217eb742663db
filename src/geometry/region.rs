use super::Path;
use crate::math::distance_2d::points_coincide_2d;
use crate::math::polygon_2d::{point_in_polygon_2d, rotate_to_canonical_start, PointClassification};
use crate::math::Point2;

/// A set of closed paths; holes and islands are implicit in containment.
///
/// Membership is even-odd: a point is inside the region when it is inside an
/// odd number of constituent paths, so a path nested inside another cuts a
/// hole. Constituent order carries no meaning but is preserved for
/// determinism.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub paths: Vec<Path>,
}

impl Region {
    /// Creates a region from constituent closed paths.
    #[must_use]
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    /// The empty region (zero paths, empty point set).
    #[must_use]
    pub fn empty() -> Self {
        Self { paths: Vec::new() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Classifies a point against the region.
    ///
    /// A point within `eps` of any constituent boundary is `OnBoundary`;
    /// otherwise inside-ness is the even-odd parity of the per-path
    /// containment count.
    #[must_use]
    pub fn point_in_region(&self, pt: &Point2, eps: f64) -> PointClassification {
        let mut inside_count = 0_usize;
        for path in &self.paths {
            match point_in_polygon_2d(pt, &path.points, false, eps) {
                PointClassification::OnBoundary => return PointClassification::OnBoundary,
                PointClassification::Inside => inside_count += 1,
                PointClassification::Outside => {}
            }
        }
        if inside_count % 2 == 1 {
            PointClassification::Inside
        } else {
            PointClassification::Outside
        }
    }

    /// Returns a copy with every constituent path wound counter-clockwise.
    ///
    /// Even-odd membership is winding-independent, so this changes no
    /// semantics; it establishes the orientation convention the boolean
    /// tagging step relies on.
    #[must_use]
    pub fn normalized_ccw(&self) -> Self {
        let paths = self
            .paths
            .iter()
            .map(|p| if p.signed_area() < 0.0 { p.reversed() } else { p.clone() })
            .collect();
        Self { paths }
    }

    /// Containment depth of each constituent path: the number of *other*
    /// constituents containing its first point. Depth 0 is an outer island,
    /// odd depths are holes.
    #[must_use]
    pub fn nesting_depths(&self, eps: f64) -> Vec<usize> {
        self.paths
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let Some(first) = path.points.first() else {
                    return 0;
                };
                self.paths
                    .iter()
                    .enumerate()
                    .filter(|&(j, other)| {
                        j != i
                            && point_in_polygon_2d(first, &other.points, false, eps)
                                != PointClassification::Outside
                    })
                    .count()
            })
            .collect()
    }

    /// Total enclosed area; holes (odd containment depth) subtract.
    #[must_use]
    pub fn area(&self, eps: f64) -> f64 {
        let depths = self.nesting_depths(eps);
        self.paths
            .iter()
            .zip(depths)
            .map(|(path, depth)| {
                let a = path.signed_area().abs();
                if depth % 2 == 0 {
                    a
                } else {
                    -a
                }
            })
            .sum()
    }

    /// Axis-aligned bounding box over all constituents, `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point2, Point2)> {
        let mut acc: Option<(Point2, Point2)> = None;
        for path in &self.paths {
            if let Some((lo, hi)) = path.bounds() {
                acc = Some(match acc {
                    None => (lo, hi),
                    Some((min, max)) => (
                        Point2::new(min.x.min(lo.x), min.y.min(lo.y)),
                        Point2::new(max.x.max(hi.x), max.y.max(hi.y)),
                    ),
                });
            }
        }
        acc
    }

    /// Compares two regions up to per-path start rotation, winding direction,
    /// and constituent order.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        if self.paths.len() != other.paths.len() {
            return false;
        }
        let mine: Vec<Vec<Point2>> = self.paths.iter().map(canonical_loop).collect();
        let theirs: Vec<Vec<Point2>> = other.paths.iter().map(canonical_loop).collect();
        let mut used = vec![false; theirs.len()];
        for a in &mine {
            let matched = theirs.iter().enumerate().find(|&(j, b)| {
                !used[j]
                    && a.len() == b.len()
                    && a.iter().zip(b).all(|(pa, pb)| points_coincide_2d(pa, pb, eps))
            });
            match matched {
                Some((j, _)) => used[j] = true,
                None => return false,
            }
        }
        true
    }
}

/// Canonical comparison form of a closed path: counter-clockwise winding,
/// starting at the leftmost-bottom vertex.
fn canonical_loop(path: &Path) -> Vec<Point2> {
    let ccw = if path.signed_area() < 0.0 {
        path.reversed()
    } else {
        path.clone()
    };
    rotate_to_canonical_start(&ccw.points)
}
