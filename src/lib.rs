pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod vnf;

pub use error::{PlanixError, Result};
