//! Exercise Catalog Tests
//!
//! Every registered exercise is validated against the live rig: tracks
//! must resolve to real joints, loops must be seamless, and the authored
//! key poses must land where the biomechanics notes say.

use std::sync::Arc;

use glam::{EulerRot, Quat};

use formcheck::animation::clip::TrackData;
use formcheck::animation::{AnimationController, Binder};
use formcheck::exercises::{get_exercise, REGISTRY};
use formcheck::mannequin::{build_mannequin, JointName};
use formcheck::scene::Scene;

const EPSILON: f32 = 1e-5;

fn quat_approx(a: Quat, b: Quat) -> bool {
    a.dot(b).abs() > 1.0 - EPSILON
}

#[test]
fn catalog_has_the_expected_exercises() {
    let ids: Vec<_> = REGISTRY.iter().map(|d| d.id).collect();
    assert_eq!(
        ids,
        ["squat", "deadlift", "bench-press", "pushup", "plank"]
    );
}

#[test]
fn every_track_resolves_to_a_rig_joint() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);

    for def in REGISTRY {
        let clip = (def.build_animation)(&rig);
        let bindings = Binder::bind(&scene, rig.root, &clip);
        assert_eq!(
            bindings.len(),
            clip.tracks.len(),
            "{}: dangling track target",
            def.id
        );
    }
}

#[test]
fn every_clip_loops_seamlessly() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);

    for def in REGISTRY {
        let clip = (def.build_animation)(&rig);
        assert!(clip.duration > 0.0, "{}: empty clip", def.id);

        for track in &clip.tracks {
            let TrackData::Quaternion(keyframes) = &track.data else {
                continue;
            };
            let first = keyframes.sample(0.0);
            let last = keyframes.sample(clip.duration);
            assert!(
                quat_approx(first, last),
                "{}: track \"{}\" has a loop seam",
                def.id,
                track.meta.node_name
            );
            // Times must be in playback order.
            for pair in keyframes.times.windows(2) {
                assert!(pair[0] <= pair[1], "{}: unsorted keyframes", def.id);
            }
        }
    }
}

#[test]
fn every_keyframe_is_a_unit_quaternion() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);

    for def in REGISTRY {
        let clip = (def.build_animation)(&rig);
        for track in &clip.tracks {
            let TrackData::Quaternion(keyframes) = &track.data else {
                continue;
            };
            for q in &keyframes.values {
                assert!((q.length() - 1.0).abs() < 1e-4, "{}: non-unit key", def.id);
            }
        }
    }
}

#[test]
fn squat_bottom_pose_matches_biomechanics() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);
    let def = get_exercise("squat").unwrap();

    let mut controller = AnimationController::new(rig.root);
    controller.play(&mut scene, Arc::new((def.build_animation)(&rig)));
    controller.set_time(&mut scene, 1.5);

    // Left hip at the bottom: 92 deg flexion with 6 deg external rotation.
    let hip = rig.joint(JointName::LHip).unwrap();
    let rotation = scene.get_node(hip).unwrap().transform.rotation;
    let expected = Quat::from_euler(
        EulerRot::ZYX,
        6.0_f32.to_radians(),
        0.0,
        92.0_f32.to_radians(),
    );
    assert!(quat_approx(rotation, expected));

    let knee = rig.joint(JointName::LKnee).unwrap();
    let rotation = scene.get_node(knee).unwrap().transform.rotation;
    let expected = Quat::from_rotation_x(125.0_f32.to_radians());
    assert!(quat_approx(rotation, expected));
}

#[test]
fn squat_standing_pose_is_nearly_upright() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);
    let def = get_exercise("squat").unwrap();

    let mut controller = AnimationController::new(rig.root);
    controller.play(&mut scene, Arc::new((def.build_animation)(&rig)));

    // Standing frame: knees straight, hips hold only their 5 deg stance
    // rotation.
    let knee = rig.joint(JointName::LKnee).unwrap();
    let rotation = scene.get_node(knee).unwrap().transform.rotation;
    assert!(quat_approx(rotation, Quat::IDENTITY));

    let hip = rig.joint(JointName::LHip).unwrap();
    let rotation = scene.get_node(hip).unwrap().transform.rotation;
    let expected = Quat::from_rotation_z(5.0_f32.to_radians());
    assert!(quat_approx(rotation, expected));
}

#[test]
fn clip_durations_match_their_definitions() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);

    let expected = [
        ("squat", 3.0),
        ("deadlift", 3.0),
        ("bench-press", 3.0),
        ("pushup", 2.5),
        ("plank", 4.0),
    ];
    for (id, duration) in expected {
        let def = get_exercise(id).unwrap();
        let clip = (def.build_animation)(&rig);
        assert!((clip.duration - duration).abs() < EPSILON, "{id}");
    }
}

#[test]
fn coaching_metadata_is_complete() {
    for def in REGISTRY {
        assert!(!def.name.is_empty());
        assert!(
            (3..=5).contains(&def.form_steps.len()),
            "{}: form steps out of range",
            def.id
        );
        assert!(
            def.common_mistakes.len() >= 2,
            "{}: needs at least two mistakes",
            def.id
        );
        assert!(!def.primary_muscles.is_empty(), "{}", def.id);
        // Registry exercises all drive the procedural rig.
        assert!(def.model_path.is_none(), "{}", def.id);
    }
}

#[test]
fn form_cues_anchor_to_real_joints() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);

    for def in REGISTRY {
        for cue in def.form_cues {
            assert!(
                rig.joint(cue.joint).is_some(),
                "{}: cue \"{}\" anchors to a missing joint",
                def.id,
                cue.text
            );
            assert!(
                rig.has_joint_named(&scene, cue.joint.as_str()),
                "{}: joint name mismatch",
                def.id
            );
        }
    }
}
