use crate::error::{MeshError, Result};
use crate::math::Point3;

use super::Vnf;

/// Diagonal placement when a grid cell splits into triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexArrayStyle {
    /// Diagonal from the cell's low corner to its high corner.
    Quad,
    /// Diagonal across the other pair of corners.
    QuadAlt,
    /// Four triangles fanned around the cell's centroid.
    Quincunx,
}

/// Builds a mesh from a rectangular grid of vertices.
///
/// Each 2x2 neighborhood of the grid becomes one cell, split into triangles
/// per the configured style. Wrap flags connect the last column or row back
/// to the first; caps close the two open ends of a column-wrapped tube.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone)]
pub struct VertexArray {
    grid: Vec<Vec<Point3>>,
    style: VertexArrayStyle,
    col_wrap: bool,
    row_wrap: bool,
    cap_first: bool,
    cap_last: bool,
    flip: bool,
}

impl VertexArray {
    #[must_use]
    pub fn new(grid: Vec<Vec<Point3>>) -> Self {
        Self {
            grid,
            style: VertexArrayStyle::Quad,
            col_wrap: false,
            row_wrap: false,
            cap_first: false,
            cap_last: false,
            flip: false,
        }
    }

    #[must_use]
    pub fn style(mut self, style: VertexArrayStyle) -> Self {
        self.style = style;
        self
    }

    /// Connects the last column of every row back to the first.
    #[must_use]
    pub fn col_wrap(mut self, wrap: bool) -> Self {
        self.col_wrap = wrap;
        self
    }

    /// Connects the last row back to the first.
    #[must_use]
    pub fn row_wrap(mut self, wrap: bool) -> Self {
        self.row_wrap = wrap;
        self
    }

    /// Closes both ends of a column-wrapped tube with polygonal caps.
    #[must_use]
    pub fn caps(mut self, caps: bool) -> Self {
        self.cap_first = caps;
        self.cap_last = caps;
        self
    }

    #[must_use]
    pub fn cap_first(mut self, cap: bool) -> Self {
        self.cap_first = cap;
        self
    }

    #[must_use]
    pub fn cap_last(mut self, cap: bool) -> Self {
        self.cap_last = cap;
        self
    }

    /// Reverses the winding of every emitted face.
    #[must_use]
    pub fn flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    /// Meshes the grid.
    ///
    /// # Errors
    ///
    /// Returns `MeshError::InvalidInput` when the grid is smaller than 2x2 or
    /// ragged, or when caps are requested without column wrap (or with row
    /// wrap, which leaves no open ends to cap).
    pub fn execute(&self) -> Result<Vnf> {
        let rows = self.grid.len();
        if rows < 2 {
            return Err(MeshError::InvalidInput(format!(
                "vertex grid needs at least 2 rows, got {rows}"
            ))
            .into());
        }
        let cols = self.grid[0].len();
        if cols < 2 {
            return Err(MeshError::InvalidInput(format!(
                "vertex grid needs at least 2 columns, got {cols}"
            ))
            .into());
        }
        if self.grid.iter().any(|row| row.len() != cols) {
            return Err(MeshError::InvalidInput(
                "vertex grid rows must all have the same length".to_owned(),
            )
            .into());
        }
        if (self.cap_first || self.cap_last) && (!self.col_wrap || self.row_wrap) {
            return Err(MeshError::InvalidInput(
                "caps require column wrap and no row wrap".to_owned(),
            )
            .into());
        }

        let mut vnf = Vnf::new();
        for row in &self.grid {
            for point in row {
                vnf.push_vertex(*point);
            }
        }

        let row_cells = if self.row_wrap { rows } else { rows - 1 };
        let col_cells = if self.col_wrap { cols } else { cols - 1 };
        for r in 0..row_cells {
            for c in 0..col_cells {
                self.mesh_cell(&mut vnf, r, c, rows, cols);
            }
        }

        if self.cap_first {
            vnf.faces.push((0..cols).rev().collect());
        }
        if self.cap_last {
            let base = (rows - 1) * cols;
            vnf.faces.push((base..base + cols).collect());
        }

        if self.flip {
            for face in &mut vnf.faces {
                face.reverse();
            }
        }
        Ok(vnf)
    }

    fn mesh_cell(&self, vnf: &mut Vnf, r: usize, c: usize, rows: usize, cols: usize) {
        let r1 = (r + 1) % rows;
        let c1 = (c + 1) % cols;
        let i1 = r * cols + c;
        let i2 = r1 * cols + c;
        let i3 = r1 * cols + c1;
        let i4 = r * cols + c1;
        match self.style {
            VertexArrayStyle::Quad => {
                vnf.faces.push(vec![i1, i4, i3]);
                vnf.faces.push(vec![i1, i3, i2]);
            }
            VertexArrayStyle::QuadAlt => {
                vnf.faces.push(vec![i1, i4, i2]);
                vnf.faces.push(vec![i4, i3, i2]);
            }
            VertexArrayStyle::Quincunx => {
                let sum = self.grid[r][c].coords
                    + self.grid[r][c1].coords
                    + self.grid[r1][c1].coords
                    + self.grid[r1][c].coords;
                let i5 = vnf.push_vertex(Point3::from(sum / 4.0));
                vnf.faces.push(vec![i1, i4, i5]);
                vnf.faces.push(vec![i4, i3, i5]);
                vnf.faces.push(vec![i3, i2, i5]);
                vnf.faces.push(vec![i2, i1, i5]);
            }
        }
    }
}
