mod bbox;
mod transform;
mod types;

pub use bbox::{BoundingBox, BoundingBoxBuilder};
pub use transform::Transform;
pub use types::Point;
