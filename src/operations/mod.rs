pub mod boolean;
pub mod offset;

pub use boolean::{decompose_path, BooleanOp, Difference, ExclusiveOr, Intersection, Union};
pub use offset::{CornerMode, Offset};
