use crate::resources::geometry::Geometry;
use crate::resources::material::StandardMaterial;

/// A renderable mesh: geometry plus an owned material instance.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub name: String,
    pub geometry: Geometry,
    pub material: StandardMaterial,
}

impl Mesh {
    #[must_use]
    pub fn new(name: &str, geometry: Geometry, material: StandardMaterial) -> Self {
        Self {
            name: name.to_string(),
            geometry,
            material,
        }
    }
}
