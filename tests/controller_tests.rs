//! Animation Controller Tests
//!
//! Tests for the play/pause/speed/seek state machine: immediate pose
//! application on play, scrubbing via set_time, speed multipliers,
//! rebinding hygiene across consecutive plays, and disposal.

use std::sync::Arc;

use glam::Quat;

use formcheck::animation::keyframes::{build_clip, quat_track, EulerKeyframe};
use formcheck::animation::{AnimationClip, AnimationController};
use formcheck::mannequin::{build_mannequin, JointName, MannequinRig};
use formcheck::scene::Scene;

const EPSILON: f32 = 1e-5;

fn quat_approx(a: Quat, b: Quat) -> bool {
    a.dot(b).abs() > 1.0 - EPSILON
}

fn ramp_clip(duration: f32, max_deg: f32) -> Arc<AnimationClip> {
    Arc::new(build_clip(
        "ramp",
        vec![quat_track(
            JointName::LKnee,
            &[
                EulerKeyframe::new(0.0, 0.0, 0.0, 0.0),
                EulerKeyframe::new(duration, max_deg, 0.0, 0.0),
            ],
        )],
        Some(duration),
    ))
}

fn knee_rotation(scene: &Scene, rig: &MannequinRig) -> Quat {
    let knee = rig.joint(JointName::LKnee).unwrap();
    scene.get_node(knee).unwrap().transform.rotation
}

#[test]
fn play_applies_initial_pose_immediately() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);
    let mut controller = AnimationController::new(rig.root);

    // Clip that starts away from rest.
    let clip = Arc::new(build_clip(
        "offset",
        vec![quat_track(
            JointName::LKnee,
            &[
                EulerKeyframe::new(0.0, 70.0, 0.0, 0.0),
                EulerKeyframe::new(1.0, 70.0, 0.0, 0.0),
            ],
        )],
        Some(1.0),
    ));
    controller.play(&mut scene, clip);

    let expected = Quat::from_rotation_x(70.0_f32.to_radians());
    assert!(quat_approx(knee_rotation(&scene, &rig), expected));
}

#[test]
fn advance_moves_pose_with_speed_multiplier() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);
    let mut controller = AnimationController::new(rig.root);

    controller.play(&mut scene, ramp_clip(4.0, 90.0));
    controller.set_speed(2.0);
    controller.advance(&mut scene, 1.0);

    // 1s of wall time at 2x = 2s of clip time = halfway up the ramp.
    assert!((controller.time() - 2.0).abs() < EPSILON);
    let expected = Quat::from_rotation_x(45.0_f32.to_radians());
    assert!(quat_approx(knee_rotation(&scene, &rig), expected));
}

#[test]
fn speed_set_while_idle_applies_to_next_play() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);
    let mut controller = AnimationController::new(rig.root);

    controller.set_speed(0.5);
    controller.play(&mut scene, ramp_clip(2.0, 90.0));
    controller.advance(&mut scene, 1.0);
    assert!((controller.time() - 0.5).abs() < EPSILON);
}

#[test]
fn set_time_round_trips_including_duration() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);
    let mut controller = AnimationController::new(rig.root);
    controller.play(&mut scene, ramp_clip(3.0, 90.0));

    controller.set_time(&mut scene, 1.7);
    assert!((controller.time() - 1.7).abs() < EPSILON);

    // Scrub slider can land exactly on the end; time must not wrap to 0.
    controller.set_time(&mut scene, 3.0);
    assert!((controller.time() - 3.0).abs() < EPSILON);
    let expected = Quat::from_rotation_x(90.0_f32.to_radians());
    assert!(quat_approx(knee_rotation(&scene, &rig), expected));
}

#[test]
fn set_time_rewrites_pose_while_paused() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);
    let mut controller = AnimationController::new(rig.root);
    controller.play(&mut scene, ramp_clip(2.0, 90.0));

    controller.set_paused(true);
    controller.set_time(&mut scene, 1.0);

    let expected = Quat::from_rotation_x(45.0_f32.to_radians());
    assert!(quat_approx(knee_rotation(&scene, &rig), expected));

    // Paused: advancing is a no-op, pose and time stay put.
    controller.advance(&mut scene, 0.5);
    assert!((controller.time() - 1.0).abs() < EPSILON);
    assert!(quat_approx(knee_rotation(&scene, &rig), expected));
}

#[test]
fn pause_resume_preserves_position() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);
    let mut controller = AnimationController::new(rig.root);
    controller.play(&mut scene, ramp_clip(4.0, 90.0));

    controller.advance(&mut scene, 1.0);
    controller.set_paused(true);
    controller.advance(&mut scene, 10.0);
    controller.set_paused(false);
    controller.advance(&mut scene, 1.0);

    assert!((controller.time() - 2.0).abs() < EPSILON);
}

#[test]
fn playback_loops_past_duration() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);
    let mut controller = AnimationController::new(rig.root);
    controller.play(&mut scene, ramp_clip(3.0, 90.0));

    controller.advance(&mut scene, 2.0);
    controller.advance(&mut scene, 2.0);
    assert!((controller.time() - 1.0).abs() < EPSILON);
}

#[test]
fn replay_resets_previous_rotations_to_identity() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);
    let mut controller = AnimationController::new(rig.root);

    // First clip bends the knee and holds it there.
    controller.play(&mut scene, ramp_clip(1.0, 90.0));
    controller.set_time(&mut scene, 1.0);
    assert!(!quat_approx(knee_rotation(&scene, &rig), Quat::IDENTITY));

    // Second clip animates a different joint. The knee must snap back.
    let pelvis_only = Arc::new(build_clip(
        "pelvis",
        vec![quat_track(
            JointName::Pelvis,
            &[
                EulerKeyframe::new(0.0, 10.0, 0.0, 0.0),
                EulerKeyframe::new(1.0, 10.0, 0.0, 0.0),
            ],
        )],
        Some(1.0),
    ));
    controller.play(&mut scene, pelvis_only);

    assert!(quat_approx(knee_rotation(&scene, &rig), Quat::IDENTITY));
}

#[test]
fn dispose_returns_to_idle_and_rest_pose() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);
    let mut controller = AnimationController::new(rig.root);

    controller.play(&mut scene, ramp_clip(1.0, 90.0));
    controller.set_time(&mut scene, 0.5);
    controller.dispose(&mut scene);

    assert!(controller.is_idle());
    assert!((controller.time()).abs() < EPSILON);
    assert!((controller.duration()).abs() < EPSILON);
    assert!(quat_approx(knee_rotation(&scene, &rig), Quat::IDENTITY));

    // Translation offsets are rig rest state and must survive disposal.
    let knee = rig.joint(JointName::LKnee).unwrap();
    let position = scene.get_node(knee).unwrap().transform.position;
    assert!((position.y - -0.42).abs() < EPSILON);

    // Idempotent.
    controller.dispose(&mut scene);
    assert!(controller.is_idle());
}

#[test]
fn idle_controller_ignores_queries_and_seeks() {
    let mut scene = Scene::new();
    let rig = build_mannequin(&mut scene);
    let mut controller = AnimationController::new(rig.root);

    assert!(controller.is_idle());
    controller.set_time(&mut scene, 2.0);
    controller.advance(&mut scene, 1.0);
    assert!((controller.time()).abs() < EPSILON);
    assert!((controller.duration()).abs() < EPSILON);
}
