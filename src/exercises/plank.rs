//! Forearm plank, a static hold.
//!
//! The only motion over the 4 s loop is a ~1° pelvis and spine
//! oscillation that reads as breathing, so a viewer can tell playback is
//! live.

use crate::animation::keyframes::{build_clip, quat_track, EulerKeyframe as Key};
use crate::animation::AnimationClip;
use crate::mannequin::{JointName, MannequinRig, MuscleId};

use super::{Difficulty, ExerciseDefinition, FormCue};

fn build_plank_clip(_rig: &MannequinRig) -> AnimationClip {
    let tracks = vec![
        quat_track(
            JointName::Pelvis,
            &[
                Key::new(0.0, 90.0, 0.0, 0.0),
                Key::new(1.0, 91.0, 0.0, 0.0),
                Key::new(2.0, 90.0, 0.0, 0.0),
                Key::new(3.0, 91.0, 0.0, 0.0),
                Key::new(4.0, 90.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::Spine,
            &[
                Key::new(0.0, 0.0, 0.0, 0.0),
                Key::new(1.0, 1.0, 0.0, 0.0),
                Key::new(2.0, 0.0, 0.0, 0.0),
                Key::new(3.0, 1.0, 0.0, 0.0),
                Key::new(4.0, 0.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::LShoulder,
            &[
                Key::new(0.0, -90.0, 0.0, -5.0),
                Key::new(4.0, -90.0, 0.0, -5.0),
            ],
        ),
        quat_track(
            JointName::RShoulder,
            &[
                Key::new(0.0, -90.0, 0.0, 5.0),
                Key::new(4.0, -90.0, 0.0, 5.0),
            ],
        ),
        // Forearms flat on the floor.
        quat_track(
            JointName::LElbow,
            &[Key::new(0.0, 90.0, 0.0, 0.0), Key::new(4.0, 90.0, 0.0, 0.0)],
        ),
        quat_track(
            JointName::RElbow,
            &[Key::new(0.0, 90.0, 0.0, 0.0), Key::new(4.0, 90.0, 0.0, 0.0)],
        ),
        quat_track(
            JointName::LHip,
            &[Key::new(0.0, 0.0, 0.0, 3.0), Key::new(4.0, 0.0, 0.0, 3.0)],
        ),
        quat_track(
            JointName::RHip,
            &[Key::new(0.0, 0.0, 0.0, -3.0), Key::new(4.0, 0.0, 0.0, -3.0)],
        ),
        quat_track(
            JointName::LKnee,
            &[Key::new(0.0, 0.0, 0.0, 0.0), Key::new(4.0, 0.0, 0.0, 0.0)],
        ),
        quat_track(
            JointName::RKnee,
            &[Key::new(0.0, 0.0, 0.0, 0.0), Key::new(4.0, 0.0, 0.0, 0.0)],
        ),
        quat_track(
            JointName::LAnkle,
            &[
                Key::new(0.0, -80.0, 0.0, 0.0),
                Key::new(4.0, -80.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::RAnkle,
            &[
                Key::new(0.0, -80.0, 0.0, 0.0),
                Key::new(4.0, -80.0, 0.0, 0.0),
            ],
        ),
    ];

    build_clip("plank", tracks, Some(4.0))
}

pub static PLANK: ExerciseDefinition = ExerciseDefinition {
    id: "plank",
    name: "Plank",
    primary_muscles: &[MuscleId::Core, MuscleId::FrontDelts],
    secondary_muscles: &[MuscleId::Glutes, MuscleId::Quads],
    difficulty: Difficulty::Beginner,
    form_steps: &[
        "Place forearms on the ground with elbows directly under shoulders",
        "Extend legs back, balancing on toes with feet hip-width apart",
        "Keep your body in a perfectly straight line from head to heels",
        "Engage your core by pulling your belly button toward your spine",
        "Breathe steadily, never holding your breath during the hold",
    ],
    common_mistakes: &[
        "Hips sagging toward the floor: squeeze glutes and brace core harder",
        "Hips piked too high: lower your hips until body forms a straight line",
        "Looking straight ahead: keep neck neutral, gaze at the floor below you",
    ],
    form_cues: &[
        FormCue {
            joint: JointName::Neck,
            text: "Neutral neck",
        },
        FormCue {
            joint: JointName::Pelvis,
            text: "Core engaged",
        },
        FormCue {
            joint: JointName::LHip,
            text: "Squeeze glutes",
        },
    ],
    has_ghost_equipment: false,
    model_path: None,
    animation_clip_name: None,
    build_animation: build_plank_clip,
};
