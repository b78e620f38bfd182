//! Exercise Session Tests
//!
//! End-to-end checks over the scene + rig + controller bundle: exercise
//! switching tear-down, tick ordering, scrubbing, and error paths.

use formcheck::mannequin::{JointName, SegmentName};
use formcheck::session::ExerciseSession;
use formcheck::FormCheckError;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn session_starts_playing_the_requested_exercise() {
    init_logging();
    let session = ExerciseSession::new("squat").unwrap();

    assert_eq!(session.current_exercise().id, "squat");
    assert!(!session.controller().is_idle());
    assert!((session.controller().duration() - 3.0).abs() < 1e-5);
}

#[test]
fn unknown_exercise_is_rejected() {
    init_logging();
    let err = ExerciseSession::new("burpee").unwrap_err();
    assert!(matches!(err, FormCheckError::ExerciseNotFound { .. }));
}

#[test]
fn switch_replaces_rig_and_keeps_scene_consistent() {
    init_logging();
    let mut session = ExerciseSession::new("squat").unwrap();
    let old_root = session.rig().root;
    let mesh_count = session.scene.meshes.len();

    session.switch_exercise("plank").unwrap();

    assert_eq!(session.current_exercise().id, "plank");
    assert_ne!(session.rig().root, old_root);
    // Old rig fully removed: same mesh census as a single fresh rig.
    assert!(session.scene.get_node(old_root).is_none());
    assert_eq!(session.scene.meshes.len(), mesh_count);
    assert!(session.rig().segments.contains_key(&SegmentName::Torso));
}

#[test]
fn failed_switch_leaves_session_untouched() {
    init_logging();
    let mut session = ExerciseSession::new("deadlift").unwrap();
    let root = session.rig().root;

    let err = session.switch_exercise("burpee").unwrap_err();
    assert!(matches!(err, FormCheckError::ExerciseNotFound { .. }));
    assert_eq!(session.current_exercise().id, "deadlift");
    assert_eq!(session.rig().root, root);
    assert!(!session.controller().is_idle());
}

#[test]
fn tick_refreshes_world_matrices_after_pose() {
    init_logging();
    let mut session = ExerciseSession::new("squat").unwrap();

    // Scrub to the bottom of the squat and check a world-space effect:
    // flexed hips and knees pull the ankle forward and up relative to
    // standing.
    let standing = session
        .rig()
        .joint_world_position(&session.scene, JointName::LAnkle)
        .unwrap();
    session.seek(1.5);
    let bottom = session
        .rig()
        .joint_world_position(&session.scene, JointName::LAnkle)
        .unwrap();

    assert!(
        (bottom - standing).length() > 0.05,
        "pose change never reached world space"
    );
}

#[test]
fn scrubbing_suspends_clock_advancement() {
    init_logging();
    let mut session = ExerciseSession::new("squat").unwrap();

    session.seek(1.0);
    let before = session.controller().time();
    session.tick(true);
    assert!((session.controller().time() - before).abs() < 1e-5);
}

#[test]
fn progress_is_normalized() {
    init_logging();
    let mut session = ExerciseSession::new("pushup").unwrap();
    session.seek(1.25);
    assert!((session.progress() - 0.5).abs() < 1e-5);
}
