mod assemble;
mod crossings;
mod decompose;
mod difference;
mod engine;
mod exclusive_or;
mod intersection;
mod split;
mod tag;
mod union;

pub use assemble::{assemble_fragments, assemble_loops, TurnRule};
pub use crossings::{region_crossings, self_intersections, SelfIntersection};
pub use decompose::decompose_path;
pub use difference::Difference;
pub use engine::BooleanOp;
pub use exclusive_or::ExclusiveOr;
pub use intersection::Intersection;
pub use split::{split_path_at_region_crossings, split_path_at_self_crossings};
pub use tag::{tag_subpaths, SubpathTag};
pub use union::Union;
