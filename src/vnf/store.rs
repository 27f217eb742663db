use std::collections::HashMap;

use crate::math::Point3;

/// Vertex grid pitch used to deduplicate coordinates on insertion.
const QUANT: f64 = 1024.0;

fn quantize(point: &Point3) -> (i64, i64, i64) {
    #[allow(clippy::cast_possible_truncation)]
    let snap = |v: f64| (v * QUANT).round() as i64;
    (snap(point.x), snap(point.y), snap(point.z))
}

/// Indexed vertices-and-faces store for polyhedral meshes.
///
/// Vertices are shared: inserting a coordinate that already exists (to within
/// the 1/1024 snap grid) returns the existing index instead of growing the
/// vertex list. Faces are index lists of arbitrary arity wound
/// counterclockwise when viewed from outside the solid.
#[derive(Debug, Clone, Default)]
pub struct Vnf {
    pub points: Vec<Point3>,
    pub faces: Vec<Vec<usize>>,
    index: HashMap<(i64, i64, i64), usize>,
}

impl Vnf {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex unconditionally and returns its index.
    ///
    /// The lookup table only learns the coordinate if it was unknown, so an
    /// earlier vertex at the same spot keeps winning `get_or_insert_vertex`.
    pub(super) fn push_vertex(&mut self, point: Point3) -> usize {
        let idx = self.points.len();
        self.points.push(point);
        self.index.entry(quantize(&point)).or_insert(idx);
        idx
    }

    /// Returns the index of `point`, inserting it if no vertex within the
    /// snap grid exists yet.
    pub fn get_or_insert_vertex(&mut self, point: Point3) -> usize {
        match self.index.get(&quantize(&point)) {
            Some(&idx) => idx,
            None => self.push_vertex(point),
        }
    }

    /// Adds a polygonal face given by its corner coordinates.
    ///
    /// Corners resolve to vertex indices through `get_or_insert_vertex`. A
    /// trailing repeat of the first corner is dropped, consecutive duplicate
    /// indices collapse, and the face is kept only if at least three distinct
    /// indices remain; anything smaller is discarded without error.
    pub fn add_face(&mut self, corners: &[Point3]) {
        let mut face: Vec<usize> = corners
            .iter()
            .map(|p| self.get_or_insert_vertex(*p))
            .collect();
        face.dedup();
        while face.len() > 1 && face.first() == face.last() {
            face.pop();
        }
        let mut distinct = face.clone();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() >= 3 {
            self.faces.push(face);
        }
    }

    /// Appends another store's vertices and faces after this store's.
    ///
    /// Face indices are rebased past the existing vertices. No cross-store
    /// deduplication happens: coincident vertices from the two stores stay
    /// separate entries.
    pub fn append(&mut self, other: &Vnf) {
        let base = self.points.len();
        for point in &other.points {
            self.push_vertex(*point);
        }
        for face in &other.faces {
            self.faces.push(face.iter().map(|&i| i + base).collect());
        }
    }

    /// Concatenates several stores into one, in order.
    #[must_use]
    pub fn merge(stores: &[Vnf]) -> Vnf {
        let mut out = Vnf::new();
        for store in stores {
            out.append(store);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    // ── Vertex insertion tests ──

    #[test]
    fn repeated_coordinates_share_one_vertex() {
        let mut vnf = Vnf::new();
        let a = vnf.get_or_insert_vertex(p(1.0, 2.0, 3.0));
        let b = vnf.get_or_insert_vertex(p(1.0, 2.0, 3.0));
        assert_eq!(a, b);
        assert_eq!(vnf.points.len(), 1);
    }

    #[test]
    fn vertices_snap_to_the_quantization_grid() {
        let mut vnf = Vnf::new();
        let a = vnf.get_or_insert_vertex(p(0.0, 0.0, 0.0));
        let b = vnf.get_or_insert_vertex(p(0.0003, 0.0, 0.0));
        assert_eq!(a, b, "sub-grid jitter lands on the same vertex");
        let c = vnf.get_or_insert_vertex(p(0.001, 0.0, 0.0));
        assert_ne!(a, c, "a full grid step apart stays distinct");
        assert_eq!(vnf.points.len(), 2);
    }

    // ── Face insertion tests ──

    #[test]
    fn shared_corners_reference_one_vertex() {
        let mut vnf = Vnf::new();
        vnf.add_face(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]);
        vnf.add_face(&[p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(-1.0, 0.0, 0.0)]);
        assert_eq!(vnf.points.len(), 4);
        assert_eq!(vnf.faces.len(), 2);
        assert_eq!(vnf.faces[0], vec![0, 1, 2]);
        assert_eq!(vnf.faces[1], vec![0, 2, 3]);
    }

    #[test]
    fn closing_corner_is_dropped() {
        let mut vnf = Vnf::new();
        vnf.add_face(&[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 0.0),
        ]);
        assert_eq!(vnf.faces.len(), 1);
        assert_eq!(vnf.faces[0], vec![0, 1, 2]);
    }

    #[test]
    fn consecutive_duplicate_corners_collapse() {
        let mut vnf = Vnf::new();
        vnf.add_face(&[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]);
        assert_eq!(vnf.faces.len(), 1);
        assert_eq!(vnf.faces[0], vec![0, 1, 2]);
    }

    #[test]
    fn faces_below_three_distinct_corners_are_discarded() {
        let mut vnf = Vnf::new();
        vnf.add_face(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]);
        vnf.add_face(&[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
        ]);
        assert!(vnf.faces.is_empty());
        assert_eq!(vnf.points.len(), 2, "vertices are kept even when faces drop");
    }

    // ── Merge tests ──

    #[test]
    fn merge_rebases_indices_without_deduplicating() {
        let mut left = Vnf::new();
        left.add_face(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]);
        let mut right = Vnf::new();
        right.add_face(&[p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(-1.0, 0.0, 0.0)]);

        let merged = Vnf::merge(&[left, right]);
        assert_eq!(merged.points.len(), 6, "shared corners stay separate across stores");
        assert_eq!(merged.faces.len(), 2);
        assert_eq!(merged.faces[0], vec![0, 1, 2]);
        assert_eq!(merged.faces[1], vec![3, 4, 5]);
    }

    #[test]
    fn inserting_after_a_merge_reuses_the_earliest_vertex() {
        let mut left = Vnf::new();
        left.add_face(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]);
        let mut right = Vnf::new();
        right.add_face(&[p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(-1.0, 0.0, 0.0)]);

        let mut merged = Vnf::merge(&[left, right]);
        let idx = merged.get_or_insert_vertex(p(0.0, 0.0, 0.0));
        assert_eq!(idx, 0);
        assert_eq!(merged.points.len(), 6);
    }

    #[test]
    fn merge_of_nothing_is_empty() {
        let merged = Vnf::merge(&[]);
        assert!(merged.points.is_empty());
        assert!(merged.faces.is_empty());
    }
}
