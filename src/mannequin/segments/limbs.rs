use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::mannequin::segments::{attach_part, attach_segment};
use crate::mannequin::{SegmentName, Side};
use crate::resources::primitives::{
    create_box, create_cylinder, create_sphere, CylinderOptions, SphereOptions,
};
use crate::scene::{MeshKey, NodeHandle, Scene};

fn small_sphere(radius: f32) -> crate::resources::Geometry {
    create_sphere(SphereOptions {
        radius,
        width_segments: 10,
        height_segments: 10,
    })
}

/// Attaches one arm's segments: the upper arm under the shoulder joint,
/// the forearm (with wrist nub and hand block) under the elbow joint.
pub fn attach_arm(
    scene: &mut Scene,
    side: Side,
    shoulder: NodeHandle,
    elbow: NodeHandle,
    segments: &mut FxHashMap<SegmentName, MeshKey>,
) {
    let (upper_arm, forearm) = match side {
        Side::Left => (SegmentName::UpperArmL, SegmentName::ForearmL),
        Side::Right => (SegmentName::UpperArmR, SegmentName::ForearmR),
    };
    let prefix = match side {
        Side::Left => "l",
        Side::Right => "r",
    };

    attach_segment(
        scene,
        shoulder,
        upper_arm,
        create_cylinder(CylinderOptions {
            radius_top: 0.042,
            radius_bottom: 0.038,
            height: 0.28,
            radial_segments: 12,
        }),
        Vec3::new(0.0, -0.14, 0.0),
        segments,
    );
    attach_part(
        scene,
        shoulder,
        &format!("{prefix}_elbow_cap"),
        small_sphere(0.038),
        Vec3::new(0.0, -0.28, 0.0),
    );

    attach_segment(
        scene,
        elbow,
        forearm,
        create_cylinder(CylinderOptions {
            radius_top: 0.034,
            radius_bottom: 0.028,
            height: 0.26,
            radial_segments: 12,
        }),
        Vec3::new(0.0, -0.13, 0.0),
        segments,
    );
    attach_part(
        scene,
        elbow,
        &format!("{prefix}_wrist_cap"),
        small_sphere(0.028),
        Vec3::new(0.0, -0.26, 0.0),
    );
    attach_part(
        scene,
        elbow,
        &format!("{prefix}_hand"),
        create_box(0.07, 0.09, 0.025),
        Vec3::new(0.0, -0.31, 0.0),
    );
}

/// Attaches one leg's segments: the thigh under the hip joint, the shin
/// (with ankle sphere and foot block) under the knee joint.
pub fn attach_leg(
    scene: &mut Scene,
    side: Side,
    hip: NodeHandle,
    knee: NodeHandle,
    segments: &mut FxHashMap<SegmentName, MeshKey>,
) {
    let (thigh, shin) = match side {
        Side::Left => (SegmentName::ThighL, SegmentName::ShinL),
        Side::Right => (SegmentName::ThighR, SegmentName::ShinR),
    };
    let prefix = match side {
        Side::Left => "l",
        Side::Right => "r",
    };

    attach_segment(
        scene,
        hip,
        thigh,
        create_cylinder(CylinderOptions {
            radius_top: 0.07,
            radius_bottom: 0.055,
            height: 0.42,
            radial_segments: 12,
        }),
        Vec3::new(0.0, -0.21, 0.0),
        segments,
    );
    attach_part(
        scene,
        hip,
        &format!("{prefix}_knee_cap"),
        small_sphere(0.052),
        Vec3::new(0.0, -0.42, 0.0),
    );

    attach_segment(
        scene,
        knee,
        shin,
        create_cylinder(CylinderOptions {
            radius_top: 0.048,
            radius_bottom: 0.038,
            height: 0.4,
            radial_segments: 12,
        }),
        Vec3::new(0.0, -0.2, 0.0),
        segments,
    );
    attach_part(
        scene,
        knee,
        &format!("{prefix}_ankle_cap"),
        small_sphere(0.038),
        Vec3::new(0.0, -0.40, 0.0),
    );
    attach_part(
        scene,
        knee,
        &format!("{prefix}_foot"),
        create_box(0.08, 0.04, 0.18),
        Vec3::new(0.0, -0.44, 0.05),
    );
}
