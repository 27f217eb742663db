use crate::error::Result;
use crate::geometry::{Region, Shape};

use super::engine::{boolean_execute, BooleanOp};

/// Computes the area common to all input shapes.
pub struct Intersection {
    inputs: Vec<Shape>,
    eps: f64,
}

impl Intersection {
    /// Creates a new `Intersection` operation.
    #[must_use]
    pub fn new(inputs: Vec<Shape>, eps: f64) -> Self {
        Self { inputs, eps }
    }

    /// Executes the intersection, producing the shared region.
    ///
    /// # Errors
    ///
    /// Returns an error if any input fails to resolve to a region.
    pub fn execute(&self) -> Result<Region> {
        boolean_execute(&self.inputs, BooleanOp::Intersection, self.eps)
    }
}
