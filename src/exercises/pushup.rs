//! Pushup, performed prone.
//!
//! The pelvis holds 90° X so the figure faces the floor in a straight
//! line; elbows flex to 90° at the bottom while the shoulders open
//! slightly. 2.5 s per rep.

use crate::animation::keyframes::{build_clip, quat_track, EulerKeyframe as Key};
use crate::animation::AnimationClip;
use crate::mannequin::{JointName, MannequinRig, MuscleId};

use super::{Difficulty, ExerciseDefinition};

fn build_pushup_clip(_rig: &MannequinRig) -> AnimationClip {
    let tracks = vec![
        quat_track(
            JointName::Pelvis,
            &[Key::new(0.0, 90.0, 0.0, 0.0), Key::new(2.5, 90.0, 0.0, 0.0)],
        ),
        quat_track(
            JointName::Spine,
            &[Key::new(0.0, 0.0, 0.0, 0.0), Key::new(2.5, 0.0, 0.0, 0.0)],
        ),
        quat_track(
            JointName::LShoulder,
            &[
                Key::new(0.0, -90.0, 0.0, -10.0),
                Key::new(0.6, -80.0, 0.0, -15.0),
                Key::new(1.25, -70.0, 0.0, -20.0),
                Key::new(1.9, -80.0, 0.0, -15.0),
                Key::new(2.5, -90.0, 0.0, -10.0),
            ],
        ),
        quat_track(
            JointName::RShoulder,
            &[
                Key::new(0.0, -90.0, 0.0, 10.0),
                Key::new(0.6, -80.0, 0.0, 15.0),
                Key::new(1.25, -70.0, 0.0, 20.0),
                Key::new(1.9, -80.0, 0.0, 15.0),
                Key::new(2.5, -90.0, 0.0, 10.0),
            ],
        ),
        quat_track(
            JointName::LElbow,
            &[
                Key::new(0.0, 5.0, 0.0, 0.0),
                Key::new(0.6, 40.0, 0.0, 0.0),
                Key::new(1.25, 90.0, 0.0, 0.0),
                Key::new(1.9, 40.0, 0.0, 0.0),
                Key::new(2.5, 5.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::RElbow,
            &[
                Key::new(0.0, 5.0, 0.0, 0.0),
                Key::new(0.6, 40.0, 0.0, 0.0),
                Key::new(1.25, 90.0, 0.0, 0.0),
                Key::new(1.9, 40.0, 0.0, 0.0),
                Key::new(2.5, 5.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::LHip,
            &[Key::new(0.0, 0.0, 0.0, 3.0), Key::new(2.5, 0.0, 0.0, 3.0)],
        ),
        quat_track(
            JointName::RHip,
            &[Key::new(0.0, 0.0, 0.0, -3.0), Key::new(2.5, 0.0, 0.0, -3.0)],
        ),
        quat_track(
            JointName::LKnee,
            &[Key::new(0.0, 0.0, 0.0, 0.0), Key::new(2.5, 0.0, 0.0, 0.0)],
        ),
        quat_track(
            JointName::RKnee,
            &[Key::new(0.0, 0.0, 0.0, 0.0), Key::new(2.5, 0.0, 0.0, 0.0)],
        ),
        // Toes stay planted on the ground.
        quat_track(
            JointName::LAnkle,
            &[
                Key::new(0.0, -80.0, 0.0, 0.0),
                Key::new(2.5, -80.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::RAnkle,
            &[
                Key::new(0.0, -80.0, 0.0, 0.0),
                Key::new(2.5, -80.0, 0.0, 0.0),
            ],
        ),
    ];

    build_clip("pushup", tracks, Some(2.5))
}

pub static PUSHUP: ExerciseDefinition = ExerciseDefinition {
    id: "pushup",
    name: "Pushup",
    primary_muscles: &[MuscleId::Chest, MuscleId::Triceps, MuscleId::FrontDelts],
    secondary_muscles: &[MuscleId::Core],
    difficulty: Difficulty::Beginner,
    form_steps: &[
        "Start in a high plank with hands slightly wider than shoulder-width",
        "Keep your body in a straight line from head to ankles",
        "Lower your chest toward the floor by bending your elbows to ~90 degrees",
        "Keep elbows at about 45 degrees from your torso, not flared out",
        "Push back up to full arm extension, squeezing your chest at the top",
    ],
    common_mistakes: &[
        "Sagging hips: engage core to keep body in a straight line",
        "Flaring elbows wide: tuck elbows to ~45 degrees to protect shoulders",
        "Incomplete range of motion: lower until chest is near the floor",
    ],
    form_cues: &[],
    has_ghost_equipment: false,
    model_path: None,
    animation_clip_name: None,
    build_animation: build_pushup_clip,
};
