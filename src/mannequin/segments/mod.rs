//! Segment mesh factories.
//!
//! Segments are the mannequin's renderable volumes, parented under joint
//! pivots so they follow the pose. Every segment mesh owns a fresh
//! material instance; shared materials would make per-region highlighting
//! impossible.

pub mod head;
pub mod limbs;
pub mod torso;

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::mannequin::SegmentName;
use crate::resources::material::color_from_hex;
use crate::resources::{Geometry, Mesh, StandardMaterial};
use crate::scene::{MeshKey, NodeHandle, Scene};

/// Resting surface tone shared by every segment.
pub const BASE_COLOR: u32 = 0x00D0_D0D0;

/// Matte skin-like material, one fresh instance per call.
#[must_use]
pub fn base_material() -> StandardMaterial {
    let mut material = StandardMaterial::new(color_from_hex(BASE_COLOR));
    material.roughness = 0.85;
    material.metalness = 0.0;
    material
}

/// Inserts `geometry` as a mesh node under `parent` at a local offset.
pub(crate) fn attach_part(
    scene: &mut Scene,
    parent: NodeHandle,
    name: &str,
    geometry: Geometry,
    position: Vec3,
) -> MeshKey {
    let mesh_key = scene
        .meshes
        .insert(Mesh::new(name, geometry, base_material()));
    scene
        .build_node(name)
        .with_position(position.x, position.y, position.z)
        .with_parent(parent)
        .with_mesh(mesh_key)
        .build();
    mesh_key
}

/// Same as [`attach_part`] but registers the mesh as a highlightable
/// segment.
pub(crate) fn attach_segment(
    scene: &mut Scene,
    parent: NodeHandle,
    segment: SegmentName,
    geometry: Geometry,
    position: Vec3,
    segments: &mut FxHashMap<SegmentName, MeshKey>,
) -> MeshKey {
    let key = attach_part(scene, parent, segment.as_str(), geometry, position);
    segments.insert(segment, key);
    key
}
