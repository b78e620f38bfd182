//! Resource module: CPU-side geometry, materials and mesh components.

pub mod geometry;
pub mod material;
pub mod mesh;
pub mod primitives;

pub use geometry::Geometry;
pub use material::StandardMaterial;
pub use mesh::Mesh;
