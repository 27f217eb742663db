use crate::error::Result;
use crate::geometry::{Region, Shape};

use super::engine::{boolean_execute, BooleanOp};

/// Computes the boolean union of any number of shapes.
pub struct Union {
    inputs: Vec<Shape>,
    eps: f64,
}

impl Union {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(inputs: Vec<Shape>, eps: f64) -> Self {
        Self { inputs, eps }
    }

    /// Executes the union, producing the combined region.
    ///
    /// # Errors
    ///
    /// Returns an error if any input fails to resolve to a region.
    pub fn execute(&self) -> Result<Region> {
        boolean_execute(&self.inputs, BooleanOp::Union, self.eps)
    }
}
