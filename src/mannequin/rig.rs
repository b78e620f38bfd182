use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::mannequin::segments::{head, limbs, torso};
use crate::mannequin::{JointName, SegmentName, Side};
use crate::scene::{MeshKey, NodeHandle, Scene};

/// Handles into the scene for one built mannequin.
///
/// `root` is the pelvis joint; removing it from the scene tears down the
/// whole figure. `joints` are the animation pivots, `segments` the
/// highlightable mesh regions.
#[derive(Debug)]
pub struct MannequinRig {
    pub root: NodeHandle,
    pub joints: FxHashMap<JointName, NodeHandle>,
    pub segments: FxHashMap<SegmentName, MeshKey>,
}

impl MannequinRig {
    /// Pivot handle for a joint. Every [`JointName`] is present in a rig
    /// built by [`build_mannequin`].
    #[must_use]
    pub fn joint(&self, name: JointName) -> Option<NodeHandle> {
        self.joints.get(&name).copied()
    }

    /// Whether the rig owns a joint node with this exact name string.
    #[must_use]
    pub fn has_joint_named(&self, scene: &Scene, name: &str) -> bool {
        self.joints
            .values()
            .any(|&handle| scene.get_node(handle).is_some_and(|n| n.name == name))
    }

    /// World position of a joint, valid after the scene's matrices have
    /// been updated.
    #[must_use]
    pub fn joint_world_position(&self, scene: &Scene, name: JointName) -> Option<Vec3> {
        self.joint(name)
            .and_then(|handle| scene.node_world_position(handle))
    }
}

/// Builds the mannequin joint hierarchy and attaches segment meshes.
///
/// Joint tree (parent to child):
///
/// ```text
/// pelvis
/// ├── spine
/// │   └── chest
/// │       ├── neck
/// │       │   └── head
/// │       ├── l_shoulder ── l_elbow ── l_wrist
/// │       └── r_shoulder ── r_elbow ── r_wrist
/// ├── l_hip ── l_knee ── l_ankle
/// └── r_hip ── r_knee ── r_ankle
/// ```
///
/// The figure stands with feet near y=0 and a total height around 1.75m.
/// Left is the +X side from the mannequin's own perspective.
pub fn build_mannequin(scene: &mut Scene) -> MannequinRig {
    let mut joints = FxHashMap::default();
    let mut segments = FxHashMap::default();

    let mut joint = |scene: &mut Scene,
                     name: JointName,
                     offset: Vec3,
                     parent: Option<NodeHandle>|
     -> NodeHandle {
        let mut builder = scene
            .build_node(name.as_str())
            .with_position(offset.x, offset.y, offset.z);
        if let Some(parent) = parent {
            builder = builder.with_parent(parent);
        }
        let handle = builder.build();
        joints.insert(name, handle);
        handle
    };

    // Trunk chain. Pelvis height puts the feet on the ground:
    // feet(0) -> ankle(0.06) -> knee(0.46) -> hip(0.92) -> pelvis(0.97).
    let pelvis = joint(scene, JointName::Pelvis, Vec3::new(0.0, 0.97, 0.0), None);
    let spine = joint(
        scene,
        JointName::Spine,
        Vec3::new(0.0, 0.12, 0.0),
        Some(pelvis),
    );
    let chest = joint(
        scene,
        JointName::Chest,
        Vec3::new(0.0, 0.28, 0.0),
        Some(spine),
    );
    let neck = joint(
        scene,
        JointName::Neck,
        Vec3::new(0.0, 0.24, 0.0),
        Some(chest),
    );
    let head = joint(
        scene,
        JointName::Head,
        Vec3::new(0.0, 0.12, 0.0),
        Some(neck),
    );

    // Arm chains hang off the chest.
    let l_shoulder = joint(
        scene,
        JointName::LShoulder,
        Vec3::new(0.22, 0.2, 0.0),
        Some(chest),
    );
    let l_elbow = joint(
        scene,
        JointName::LElbow,
        Vec3::new(0.0, -0.28, 0.0),
        Some(l_shoulder),
    );
    joint(
        scene,
        JointName::LWrist,
        Vec3::new(0.0, -0.26, 0.0),
        Some(l_elbow),
    );

    let r_shoulder = joint(
        scene,
        JointName::RShoulder,
        Vec3::new(-0.22, 0.2, 0.0),
        Some(chest),
    );
    let r_elbow = joint(
        scene,
        JointName::RElbow,
        Vec3::new(0.0, -0.28, 0.0),
        Some(r_shoulder),
    );
    joint(
        scene,
        JointName::RWrist,
        Vec3::new(0.0, -0.26, 0.0),
        Some(r_elbow),
    );

    // Leg chains hang off the pelvis.
    let l_hip = joint(
        scene,
        JointName::LHip,
        Vec3::new(0.1, -0.06, 0.0),
        Some(pelvis),
    );
    let l_knee = joint(
        scene,
        JointName::LKnee,
        Vec3::new(0.0, -0.42, 0.0),
        Some(l_hip),
    );
    joint(
        scene,
        JointName::LAnkle,
        Vec3::new(0.0, -0.40, 0.0),
        Some(l_knee),
    );

    let r_hip = joint(
        scene,
        JointName::RHip,
        Vec3::new(-0.1, -0.06, 0.0),
        Some(pelvis),
    );
    let r_knee = joint(
        scene,
        JointName::RKnee,
        Vec3::new(0.0, -0.42, 0.0),
        Some(r_hip),
    );
    joint(
        scene,
        JointName::RAnkle,
        Vec3::new(0.0, -0.40, 0.0),
        Some(r_knee),
    );

    // Segment meshes ride on the joints they belong to.
    torso::attach_torso_segments(scene, pelvis, &mut segments);
    head::attach_head_segments(scene, neck, head, &mut segments);
    limbs::attach_arm(scene, Side::Left, l_shoulder, l_elbow, &mut segments);
    limbs::attach_arm(scene, Side::Right, r_shoulder, r_elbow, &mut segments);
    limbs::attach_leg(scene, Side::Left, l_hip, l_knee, &mut segments);
    limbs::attach_leg(scene, Side::Right, r_hip, r_knee, &mut segments);

    MannequinRig {
        root: pelvis,
        joints,
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rig_has_all_joints_and_segments() {
        let mut scene = Scene::new();
        let rig = build_mannequin(&mut scene);

        for name in JointName::ALL {
            assert!(rig.joint(name).is_some(), "missing joint {name:?}");
            assert!(rig.has_joint_named(&scene, name.as_str()));
        }
        for name in SegmentName::ALL {
            assert!(
                rig.segments.contains_key(&name),
                "missing segment {name:?}"
            );
        }
    }

    #[test]
    fn feet_rest_near_ground() {
        let mut scene = Scene::new();
        let rig = build_mannequin(&mut scene);
        scene.update_matrix_world();

        let ankle = rig
            .joint_world_position(&scene, JointName::LAnkle)
            .unwrap();
        assert!((ankle.y - 0.09).abs() < 1e-5, "ankle at {}", ankle.y);
        assert!((ankle.x - 0.1).abs() < 1e-5);

        let head = rig.joint_world_position(&scene, JointName::Head).unwrap();
        assert!((head.y - 1.73).abs() < 1e-5, "head at {}", head.y);
    }

    #[test]
    fn segments_own_distinct_materials() {
        let mut scene = Scene::new();
        let rig = build_mannequin(&mut scene);

        let thigh = rig.segments[&SegmentName::ThighL];
        let shin = rig.segments[&SegmentName::ShinL];
        scene.meshes[thigh].material.set_color(glam::Vec4::ONE);
        assert_ne!(
            scene.meshes[thigh].material.color(),
            scene.meshes[shin].material.color()
        );
    }
}
