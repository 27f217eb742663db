use crate::error::Result;
use crate::geometry::{Region, Shape};

use super::engine::{boolean_execute, BooleanOp};

/// Subtracts every subsequent shape from the first.
pub struct Difference {
    inputs: Vec<Shape>,
    eps: f64,
}

impl Difference {
    /// Creates a new `Difference` operation.
    #[must_use]
    pub fn new(inputs: Vec<Shape>, eps: f64) -> Self {
        Self { inputs, eps }
    }

    /// Executes the difference, producing what remains of the first shape.
    ///
    /// # Errors
    ///
    /// Returns an error if any input fails to resolve to a region.
    pub fn execute(&self) -> Result<Region> {
        boolean_execute(&self.inputs, BooleanOp::Difference, self.eps)
    }
}
