use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::mannequin::segments::{attach_part, attach_segment};
use crate::mannequin::SegmentName;
use crate::resources::primitives::{create_cylinder, create_sphere, CylinderOptions, SphereOptions};
use crate::scene::{MeshKey, NodeHandle, Scene};

/// Attaches the trunk segments (glutes, lower back, abdomen, core front,
/// chest) plus the shoulder and hip connector spheres under the pelvis
/// joint.
pub fn attach_torso_segments(
    scene: &mut Scene,
    pelvis: NodeHandle,
    segments: &mut FxHashMap<SegmentName, MeshKey>,
) {
    // Glutes sit just below the pelvis pivot, nudged forward.
    attach_segment(
        scene,
        pelvis,
        SegmentName::Glutes,
        create_cylinder(CylinderOptions {
            radius_top: 0.14,
            radius_bottom: 0.16,
            height: 0.18,
            ..CylinderOptions::default()
        }),
        Vec3::new(0.0, -0.04, 0.01),
        segments,
    );

    attach_segment(
        scene,
        pelvis,
        SegmentName::LowerBack,
        create_cylinder(CylinderOptions {
            radius_top: 0.12,
            radius_bottom: 0.14,
            height: 0.12,
            ..CylinderOptions::default()
        }),
        Vec3::new(0.0, 0.06, -0.02),
        segments,
    );

    // Abdomen, pelvis up to the chest.
    attach_segment(
        scene,
        pelvis,
        SegmentName::Torso,
        create_cylinder(CylinderOptions {
            radius_top: 0.13,
            radius_bottom: 0.14,
            height: 0.22,
            ..CylinderOptions::default()
        }),
        Vec3::new(0.0, 0.18, 0.0),
        segments,
    );

    // Ab region, pushed slightly forward of the torso column.
    attach_segment(
        scene,
        pelvis,
        SegmentName::CoreFront,
        create_cylinder(CylinderOptions {
            radius_top: 0.11,
            radius_bottom: 0.13,
            height: 0.18,
            ..CylinderOptions::default()
        }),
        Vec3::new(0.0, 0.16, 0.03),
        segments,
    );

    attach_segment(
        scene,
        pelvis,
        SegmentName::Chest,
        create_cylinder(CylinderOptions {
            radius_top: 0.16,
            radius_bottom: 0.13,
            height: 0.22,
            ..CylinderOptions::default()
        }),
        Vec3::new(0.0, 0.38, 0.0),
        segments,
    );

    // Connector spheres are visual only, not highlightable.
    let shoulder_sphere = || {
        create_sphere(SphereOptions {
            radius: 0.075,
            width_segments: 12,
            height_segments: 12,
        })
    };
    attach_part(
        scene,
        pelvis,
        "l_shoulder_cap",
        shoulder_sphere(),
        Vec3::new(0.22, 0.44, 0.0),
    );
    attach_part(
        scene,
        pelvis,
        "r_shoulder_cap",
        shoulder_sphere(),
        Vec3::new(-0.22, 0.44, 0.0),
    );

    let hip_sphere = || {
        create_sphere(SphereOptions {
            radius: 0.07,
            width_segments: 12,
            height_segments: 12,
        })
    };
    attach_part(
        scene,
        pelvis,
        "l_hip_cap",
        hip_sphere(),
        Vec3::new(0.1, -0.06, 0.0),
    );
    attach_part(
        scene,
        pelvis,
        "r_hip_cap",
        hip_sphere(),
        Vec3::new(-0.1, -0.06, 0.0),
    );
}
