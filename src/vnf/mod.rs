mod store;
mod triangulate;
mod vertex_array;

pub use store::Vnf;
pub use triangulate::triangulate;
pub use vertex_array::{VertexArray, VertexArrayStyle};
