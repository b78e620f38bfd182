use rustc_hash::FxHashMap;

use crate::mannequin::segments::base_material;
use crate::mannequin::SegmentName;
use crate::resources::primitives::{create_cylinder, create_sphere, CylinderOptions, SphereOptions};
use crate::resources::Mesh;
use crate::scene::{MeshKey, NodeHandle, Scene};

/// Attaches the neck column under the neck joint and the elongated head
/// sphere under the head joint.
pub fn attach_head_segments(
    scene: &mut Scene,
    neck: NodeHandle,
    head: NodeHandle,
    segments: &mut FxHashMap<SegmentName, MeshKey>,
) {
    let neck_geometry = create_cylinder(CylinderOptions {
        radius_top: 0.055,
        radius_bottom: 0.065,
        height: 0.1,
        radial_segments: 12,
    });
    let neck_key = scene.meshes.insert(Mesh::new(
        SegmentName::Neck.as_str(),
        neck_geometry,
        base_material(),
    ));
    scene
        .build_node(SegmentName::Neck.as_str())
        .with_position(0.0, 0.05, 0.0)
        .with_parent(neck)
        .with_mesh(neck_key)
        .build();
    segments.insert(SegmentName::Neck, neck_key);

    // Skull shape: a sphere stretched taller and flattened front-to-back.
    let head_geometry = create_sphere(SphereOptions {
        radius: 0.11,
        width_segments: 16,
        height_segments: 16,
    });
    let head_key = scene.meshes.insert(Mesh::new(
        SegmentName::Head.as_str(),
        head_geometry,
        base_material(),
    ));
    scene
        .build_node(SegmentName::Head.as_str())
        .with_position(0.0, 0.12, 0.0)
        .with_scale(1.0, 1.2, 0.95)
        .with_parent(head)
        .with_mesh(head_key)
        .build();
    segments.insert(SegmentName::Head, head_key);
}
