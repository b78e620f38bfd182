pub mod box_shape;
pub mod cylinder;
pub mod sphere;

pub use box_shape::create_box;
pub use cylinder::{create_cylinder, CylinderOptions};
pub use sphere::{create_sphere, SphereOptions};
