use crate::error::Result;
use crate::geometry::{Region, Shape};

use super::engine::{boolean_pair, BooleanOp};

/// Computes the symmetric difference of any number of shapes.
///
/// Pairwise, the result covers the area in exactly one operand; folded over
/// more inputs it covers the area inside an odd number of them.
pub struct ExclusiveOr {
    inputs: Vec<Shape>,
    eps: f64,
}

impl ExclusiveOr {
    /// Creates a new `ExclusiveOr` operation.
    #[must_use]
    pub fn new(inputs: Vec<Shape>, eps: f64) -> Self {
        Self { inputs, eps }
    }

    /// Executes the exclusive-or, folding pairwise in argument order.
    ///
    /// # Errors
    ///
    /// Returns an error if any input fails to resolve to a region.
    pub fn execute(&self) -> Result<Region> {
        let mut regions = Vec::with_capacity(self.inputs.len());
        for shape in &self.inputs {
            regions.push(shape.to_region(self.eps)?);
        }

        let mut iter = regions.into_iter();
        let Some(mut acc) = iter.next() else {
            return Ok(Region::empty());
        };
        for next in iter {
            acc = xor_pair(&acc, &next, self.eps)?;
        }
        Ok(acc)
    }
}

/// One symmetric difference: `(a − b) ∪ (b − a)`.
fn xor_pair(a: &Region, b: &Region, eps: f64) -> Result<Region> {
    let a_minus_b = boolean_pair(a, b, BooleanOp::Difference, eps)?;
    let b_minus_a = boolean_pair(b, a, BooleanOp::Difference, eps)?;
    boolean_pair(&a_minus_b, &b_minus_a, BooleanOp::Union, eps)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Path;
    use crate::math::{Point2, TOLERANCE};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square(x: f64, y: f64, s: f64) -> Shape {
        Path::new(vec![p(x, y), p(x + s, y), p(x + s, y + s), p(x, y + s)]).into()
    }

    #[test]
    fn xor_of_overlapping_squares_drops_the_overlap() {
        let out = ExclusiveOr::new(vec![square(0.0, 0.0, 2.0), square(1.0, 1.0, 2.0)], TOLERANCE)
            .execute()
            .unwrap();
        assert_eq!(out.paths.len(), 2, "got {} paths", out.paths.len());
        let area = out.area(TOLERANCE);
        assert!((area - 6.0).abs() < TOLERANCE, "area={area}");
    }

    #[test]
    fn xor_with_self_is_empty() {
        let out = ExclusiveOr::new(vec![square(0.0, 0.0, 2.0), square(0.0, 0.0, 2.0)], TOLERANCE)
            .execute()
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn xor_of_disjoint_squares_is_their_union() {
        let out = ExclusiveOr::new(vec![square(0.0, 0.0, 1.0), square(5.0, 0.0, 1.0)], TOLERANCE)
            .execute()
            .unwrap();
        assert_eq!(out.paths.len(), 2);
        let area = out.area(TOLERANCE);
        assert!((area - 2.0).abs() < TOLERANCE, "area={area}");
    }
}
