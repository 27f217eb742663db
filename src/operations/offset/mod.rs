mod corner;
mod faces;
mod region;
mod validity;

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Path, Shape};
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::{Point2, Vector2};

/// Treatment applied to the outside corners of an offset outline.
///
/// Inside corners and the endpoints of an open path are always left sharp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerMode {
    /// Extend the neighboring segments to their miter point.
    Sharp,
    /// Replace the corner with an arc about the original vertex.
    Round,
    /// Cut the corner with the tangent line at the offset distance.
    Chamfer,
}

/// One input edge shifted by the offset distance, still untrimmed.
#[derive(Debug, Clone, Copy)]
struct OffsetSeg {
    /// Index of the source edge (and of its start vertex) in the cleaned input.
    src: usize,
    start: Point2,
    end: Point2,
    dir: Vector2,
}

/// Offsets a path or region by a signed distance.
///
/// A positive amount pushes a closed boundary outward and an open path to the
/// left of its travel direction; a negative amount goes the other way. Holes
/// in a region offset opposite to their islands, so the whole region grows or
/// shrinks together.
#[derive(Debug)]
pub struct Offset {
    input: Shape,
    amount: f64,
    eps: f64,
    mode: CornerMode,
    quality: u32,
    maxstep: f64,
    check_valid: bool,
    closed: bool,
}

impl Offset {
    /// Creates an offset of `input` by `amount` with sharp corners.
    ///
    /// The input is treated as closed; call [`open`](Self::open) for an
    /// uncapped open-path offset.
    #[must_use]
    pub fn new(input: Shape, amount: f64, eps: f64) -> Self {
        Self {
            input,
            amount,
            eps,
            mode: CornerMode::Sharp,
            quality: 1,
            maxstep: 0.1,
            check_valid: true,
            closed: true,
        }
    }

    /// Sets the corner treatment.
    #[must_use]
    pub fn mode(mut self, mode: CornerMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the number of interior validity probes per shifted segment.
    ///
    /// The two endpoints are always probed; `quality` adds evenly spaced
    /// probes between them.
    #[must_use]
    pub fn quality(mut self, quality: u32) -> Self {
        self.quality = quality;
        self
    }

    /// Sets the maximum arc length between consecutive round-corner samples.
    #[must_use]
    pub fn maxstep(mut self, maxstep: f64) -> Self {
        self.maxstep = maxstep;
        self
    }

    /// Enables or disables the fold-over validity filter.
    #[must_use]
    pub fn check_valid(mut self, check_valid: bool) -> Self {
        self.check_valid = check_valid;
        self
    }

    /// Treats the input path as open; its endpoints are left uncapped.
    #[must_use]
    pub fn open(mut self) -> Self {
        self.closed = false;
        self
    }

    /// Executes the offset.
    ///
    /// A path input yields a path with the input's point order and winding
    /// preserved; a region input yields a region rebuilt through the boolean
    /// operators.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` when the input has too few
    /// distinct points or a region is offset as open, and
    /// `GeometryError::Degenerate` when the validity filter eliminates every
    /// segment or two surviving neighbors meet in a 180 degree turn.
    pub fn execute(&self) -> Result<Shape> {
        match &self.input {
            Shape::Path(path) => {
                let (points, _) = self.offset_path(path, self.amount)?;
                Ok(Shape::Path(Path::new(points)))
            }
            Shape::Region(region) => {
                if !self.closed {
                    return Err(OperationError::InvalidInput(
                        "open offset applies to bare paths only".to_owned(),
                    )
                    .into());
                }
                region::offset_region(region, self).map(Shape::Region)
            }
        }
    }

    /// Executes the offset and emits the side-wall triangles joining the
    /// input vertices to their offset points.
    ///
    /// The input ring is assumed to occupy indices
    /// `base_index..base_index + n` in the caller's vertex list with the
    /// returned offset points appended right after it, so the triangles index
    /// both rings directly. `flip` reverses every triangle.
    ///
    /// # Errors
    ///
    /// Side walls only exist for closed path inputs; open paths and regions
    /// return `OperationError::InvalidInput`. Degeneracies propagate as in
    /// [`execute`](Self::execute).
    pub fn execute_with_faces(
        &self,
        base_index: usize,
        flip: bool,
    ) -> Result<(Vec<Point2>, Vec<[usize; 3]>)> {
        let Shape::Path(path) = &self.input else {
            return Err(OperationError::InvalidInput(
                "side-wall faces require a single closed path".to_owned(),
            )
            .into());
        };
        if !self.closed {
            return Err(OperationError::InvalidInput(
                "side-wall faces require a closed path, got an open one".to_owned(),
            )
            .into());
        }
        let (points, counts) = self.offset_path(path, self.amount)?;
        let faces = faces::side_wall(base_index, &counts, flip);
        Ok((points, faces))
    }

    /// Offsets a single path by `amount`, returning the output points and the
    /// number of them produced at each input vertex (zero where the validity
    /// filter dropped the vertex).
    fn offset_path(&self, path: &Path, amount: f64) -> Result<(Vec<Point2>, Vec<usize>)> {
        let cleaned = path.cleaned(self.eps);
        let n = cleaned.points.len();
        let minimum = if self.closed { 3 } else { 2 };
        if n < minimum {
            return Err(OperationError::InvalidInput(format!(
                "offset input needs at least {minimum} distinct points, got {n}"
            ))
            .into());
        }

        if amount.abs() < self.eps {
            return Ok((cleaned.points.clone(), vec![1; n]));
        }

        // Step 1: Resolve the signed shift distance against the winding, so
        // a positive amount always moves the boundary outward.
        let d = if self.closed && cleaned.signed_area() > 0.0 {
            -amount
        } else {
            amount
        };

        // Step 2: Shift every edge along its left unit normal.
        let segs = self.shifted_segments(&cleaned.points, d)?;

        // Step 3: Drop segments that folded over onto the far side of the
        // input.
        let kept = if self.check_valid {
            validity::filter(segs, &cleaned.points, self.closed, d.abs(), self.quality, self.eps)
        } else {
            segs
        };
        if kept.is_empty() {
            return Err(GeometryError::Degenerate(
                "offset eliminated every segment".to_owned(),
            )
            .into());
        }

        // Step 4: Join the survivors corner by corner.
        self.join_corners(&kept, &cleaned.points, d.abs())
    }

    fn shifted_segments(&self, points: &[Point2], d: f64) -> Result<Vec<OffsetSeg>> {
        let nseg = if self.closed {
            points.len()
        } else {
            points.len() - 1
        };
        let mut segs = Vec::with_capacity(nseg);
        for src in 0..nseg {
            let a = &points[src];
            let b = &points[(src + 1) % points.len()];
            let dir = segment_direction(a, b)?;
            let shift = left_normal(dir) * d;
            segs.push(OffsetSeg {
                src,
                start: a + shift,
                end: b + shift,
                dir,
            });
        }
        Ok(segs)
    }

    fn join_corners(
        &self,
        kept: &[OffsetSeg],
        original: &[Point2],
        d_abs: f64,
    ) -> Result<(Vec<Point2>, Vec<usize>)> {
        let mut points = Vec::new();
        let mut counts = vec![0; original.len()];

        if self.closed {
            for (j, next) in kept.iter().enumerate() {
                let prev = &kept[(j + kept.len() - 1) % kept.len()];
                let group = corner::corner_points(
                    prev,
                    next,
                    &original[next.src],
                    d_abs,
                    self.mode,
                    self.maxstep,
                    self.eps,
                )?;
                counts[next.src] = group.len();
                points.extend(group);
            }
        } else {
            // Open paths keep their uncapped endpoints sharp; only interior
            // junctions get corner treatment.
            points.push(kept[0].start);
            counts[kept[0].src] = 1;
            for j in 1..kept.len() {
                let (prev, next) = (&kept[j - 1], &kept[j]);
                let group = corner::corner_points(
                    prev,
                    next,
                    &original[next.src],
                    d_abs,
                    self.mode,
                    self.maxstep,
                    self.eps,
                )?;
                counts[next.src] = group.len();
                points.extend(group);
            }
            let last = &kept[kept.len() - 1];
            points.push(last.end);
            counts[last.src + 1] = 1;
        }

        Ok((points, counts))
    }
}
