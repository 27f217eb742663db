use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, InnerTag};
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{MeshError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::Vnf;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Rewrites every face with more than three corners as triangles.
///
/// Each such face is projected onto the plane of its dominant normal and
/// split with a constrained Delaunay pass. The emitted triangles reference
/// the input store's vertex indices and keep the face's winding, so the
/// result shares the input's vertex list. Faces must be simple loops;
/// self-crossing faces give undefined output.
///
/// # Errors
///
/// Returns `MeshError::Failed` when a face's normal vanishes or its
/// projection rejects a vertex.
pub fn triangulate(vnf: &Vnf) -> Result<Vnf> {
    let mut out = vnf.clone();
    out.faces.clear();
    for face in &vnf.faces {
        if face.len() <= 3 {
            out.faces.push(face.clone());
        } else {
            split_face(&vnf.points, face, &mut out.faces)?;
        }
    }
    Ok(out)
}

fn split_face(points: &[Point3], face: &[usize], out: &mut Vec<Vec<usize>>) -> Result<()> {
    let normal = newell_normal(points, face);
    if normal.norm() < TOLERANCE {
        return Err(
            MeshError::Failed("face normal vanished during triangulation".to_owned()).into(),
        );
    }
    let (u, v) = plane_basis(&normal);
    let origin = points[face[0]];

    let mut cdt = Cdt::new();
    let mut original_index = HashMap::new();
    let mut ring = Vec::with_capacity(face.len());
    for &idx in face {
        let rel = points[idx] - origin;
        let projected = SpadePoint2::new(rel.dot(&u), rel.dot(&v));
        let handle = cdt.insert(projected).map_err(|e: InsertionError| {
            MeshError::Failed(format!("face projection rejected a vertex: {e}"))
        })?;
        original_index.entry(handle.index()).or_insert(idx);
        ring.push(handle);
    }
    for (k, &from) in ring.iter().enumerate() {
        let to = ring[(k + 1) % ring.len()];
        if from != to {
            cdt.add_constraint(from, to);
        }
    }

    let inside = interior_faces(&cdt);
    for handle in cdt.inner_faces() {
        if !inside.contains(&handle.fix().index()) {
            continue;
        }
        let mut triangle = Vec::with_capacity(3);
        for vertex in handle.vertices() {
            let Some(&idx) = original_index.get(&vertex.fix().index()) else {
                return Err(MeshError::Failed(
                    "triangulation emitted an unknown vertex".to_owned(),
                )
                .into());
            };
            triangle.push(idx);
        }
        out.push(triangle);
    }
    Ok(())
}

/// Flood-fills constraint-crossing depth from the outer face; odd depth is
/// inside the constraint loop.
fn interior_faces(cdt: &Cdt) -> HashSet<usize> {
    let outer = cdt.outer_face().fix();
    let mut depth_of: HashMap<usize, u32> = HashMap::new();
    let mut pending: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();

    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer {
            continue;
        }
        if let Some(first) = edge.rev().face().as_inner() {
            let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            pending.push_back((first.fix(), depth));
        }
    }

    while let Some((fixed, depth)) = pending.pop_front() {
        if depth_of.contains_key(&fixed.index()) {
            continue;
        }
        depth_of.insert(fixed.index(), depth);
        for edge in cdt.face(fixed).adjacent_edges() {
            if let Some(neighbor) = edge.rev().face().as_inner() {
                let step = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
                pending.push_back((neighbor.fix(), depth + step));
            }
        }
    }

    depth_of
        .into_iter()
        .filter(|&(_, depth)| depth % 2 == 1)
        .map(|(index, _)| index)
        .collect()
}

/// Newell's method; the result's length is twice the face area, pointing
/// along the winding's right-hand normal.
fn newell_normal(points: &[Point3], face: &[usize]) -> Vector3 {
    let mut normal = Vector3::zeros();
    for k in 0..face.len() {
        let a = &points[face[k]];
        let b = &points[face[(k + 1) % face.len()]];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    normal
}

/// Right-handed in-plane basis, so a loop that winds counterclockwise about
/// the normal stays counterclockwise after projection.
fn plane_basis(normal: &Vector3) -> (Vector3, Vector3) {
    let n = normal.normalize();
    let seed = if n.x.abs() < 0.5 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    let u = n.cross(&seed).normalize();
    let v = n.cross(&u);
    (u, v)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn face_area_xy(points: &[Point3], face: &[usize]) -> f64 {
        let mut sum = 0.0;
        for k in 0..face.len() {
            let a = &points[face[k]];
            let b = &points[face[(k + 1) % face.len()]];
            sum += a.x * b.y - b.x * a.y;
        }
        sum / 2.0
    }

    #[test]
    fn triangles_pass_through_untouched() {
        let mut vnf = Vnf::new();
        vnf.add_face(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]);
        let result = triangulate(&vnf).unwrap();
        assert_eq!(result.points.len(), 3);
        assert_eq!(result.faces, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn a_quad_splits_into_two_ccw_triangles() {
        let mut vnf = Vnf::new();
        vnf.add_face(&[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]);
        let result = triangulate(&vnf).unwrap();
        assert_eq!(result.points.len(), 4, "the vertex list is shared");
        assert_eq!(result.faces.len(), 2);
        let mut covered = 0.0;
        for face in &result.faces {
            assert_eq!(face.len(), 3);
            let area = face_area_xy(&result.points, face);
            assert!(area > 0.0, "triangles keep the quad's winding, area={area}");
            covered += area;
        }
        assert_relative_eq!(covered, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn a_concave_face_is_not_filled_to_its_hull() {
        let mut vnf = Vnf::new();
        vnf.add_face(&[
            p(0.0, 0.0, 0.0),
            p(4.0, 0.0, 0.0),
            p(4.0, 2.0, 0.0),
            p(2.0, 2.0, 0.0),
            p(2.0, 4.0, 0.0),
            p(0.0, 4.0, 0.0),
        ]);
        let result = triangulate(&vnf).unwrap();
        assert_eq!(result.faces.len(), 4);
        let mut covered = 0.0;
        for face in &result.faces {
            let area = face_area_xy(&result.points, face);
            assert!(area > 0.0, "area={area}");
            covered += area;
        }
        assert_relative_eq!(covered, 12.0, epsilon = 1e-9);
    }

    #[test]
    fn a_tilted_face_keeps_its_orientation() {
        let mut vnf = Vnf::new();
        vnf.add_face(&[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 1.0),
            p(1.0, 1.0, 1.0),
            p(0.0, 1.0, 0.0),
        ]);
        let result = triangulate(&vnf).unwrap();
        assert_eq!(result.faces.len(), 2);
        let plane_normal = Vector3::new(-1.0, 0.0, 1.0);
        for face in &result.faces {
            let a = result.points[face[0]];
            let b = result.points[face[1]];
            let c = result.points[face[2]];
            let normal = (b - a).cross(&(c - a));
            assert!(normal.dot(&plane_normal) > 0.0, "normal={normal:?}");
        }
    }

    #[test]
    fn mixed_stores_only_rewrite_the_wide_faces() {
        let mut vnf = Vnf::new();
        vnf.add_face(&[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]);
        vnf.add_face(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 0.0, 1.0)]);
        let result = triangulate(&vnf).unwrap();
        assert_eq!(result.points.len(), 5);
        assert_eq!(result.faces.len(), 3);
        assert!(result.faces.contains(&vec![0, 1, 4]), "the triangle survives as-is");
    }

    #[test]
    fn a_collapsed_face_reports_failure() {
        let mut vnf = Vnf::new();
        vnf.faces.push(vec![0, 1, 2, 3]);
        vnf.points = vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(3.0, 0.0, 0.0),
        ];
        assert!(triangulate(&vnf).is_err());
    }
}
