pub mod path;
pub mod region;
pub mod shape;

pub use path::Path;
pub use region::Region;
pub use shape::Shape;
