pub mod camera;
pub mod material;
pub mod ray;

pub use camera::Camera;
pub use material::{MaterialId, MaterialLibrary};
pub use ray::{Ray, RayHit, Shape, nearest_hit};
