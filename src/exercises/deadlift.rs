//! Conventional deadlift: a standing hip hinge.
//!
//! The pelvis tilts forward to ~65° at the bottom while the spine holds
//! slight extension to stay neutral; knees bend only ~25° and the arms
//! hang straight. 3 s per rep, seamless loop.

use crate::animation::keyframes::{build_clip, quat_track, EulerKeyframe as Key};
use crate::animation::AnimationClip;
use crate::mannequin::{JointName, MannequinRig, MuscleId};

use super::{Difficulty, ExerciseDefinition, FormCue};

fn build_deadlift_clip(_rig: &MannequinRig) -> AnimationClip {
    let tracks = vec![
        quat_track(
            JointName::Pelvis,
            &[
                Key::new(0.0, 0.0, 0.0, 0.0),
                Key::new(0.5, 20.0, 0.0, 0.0),
                Key::new(1.0, 45.0, 0.0, 0.0),
                Key::new(1.5, 65.0, 0.0, 0.0),
                Key::new(2.0, 45.0, 0.0, 0.0),
                Key::new(2.5, 18.0, 0.0, 0.0),
                Key::new(3.0, 0.0, 0.0, 0.0),
            ],
        ),
        // Slight extension counteracts the pelvis tilt to keep a flat back.
        quat_track(
            JointName::Spine,
            &[
                Key::new(0.0, 0.0, 0.0, 0.0),
                Key::new(0.5, -3.0, 0.0, 0.0),
                Key::new(1.0, -5.0, 0.0, 0.0),
                Key::new(1.5, -6.0, 0.0, 0.0),
                Key::new(2.0, -5.0, 0.0, 0.0),
                Key::new(2.5, -3.0, 0.0, 0.0),
                Key::new(3.0, 0.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::LHip,
            &[
                Key::new(0.0, 0.0, 0.0, 3.0),
                Key::new(0.5, 8.0, 0.0, 3.0),
                Key::new(1.0, 15.0, 0.0, 3.0),
                Key::new(1.5, 20.0, 0.0, 3.0),
                Key::new(2.0, 15.0, 0.0, 3.0),
                Key::new(2.5, 6.0, 0.0, 3.0),
                Key::new(3.0, 0.0, 0.0, 3.0),
            ],
        ),
        quat_track(
            JointName::RHip,
            &[
                Key::new(0.0, 0.0, 0.0, -3.0),
                Key::new(0.5, 8.0, 0.0, -3.0),
                Key::new(1.0, 15.0, 0.0, -3.0),
                Key::new(1.5, 20.0, 0.0, -3.0),
                Key::new(2.0, 15.0, 0.0, -3.0),
                Key::new(2.5, 6.0, 0.0, -3.0),
                Key::new(3.0, 0.0, 0.0, -3.0),
            ],
        ),
        quat_track(
            JointName::LKnee,
            &[
                Key::new(0.0, 0.0, 0.0, 0.0),
                Key::new(0.5, 8.0, 0.0, 0.0),
                Key::new(1.0, 18.0, 0.0, 0.0),
                Key::new(1.5, 25.0, 0.0, 0.0),
                Key::new(2.0, 18.0, 0.0, 0.0),
                Key::new(2.5, 6.0, 0.0, 0.0),
                Key::new(3.0, 0.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::RKnee,
            &[
                Key::new(0.0, 0.0, 0.0, 0.0),
                Key::new(0.5, 8.0, 0.0, 0.0),
                Key::new(1.0, 18.0, 0.0, 0.0),
                Key::new(1.5, 25.0, 0.0, 0.0),
                Key::new(2.0, 18.0, 0.0, 0.0),
                Key::new(2.5, 6.0, 0.0, 0.0),
                Key::new(3.0, 0.0, 0.0, 0.0),
            ],
        ),
        // Arms hang straight; static tracks hold the joints at rest.
        quat_track(
            JointName::LShoulder,
            &[
                Key::new(0.0, 0.0, 0.0, 0.0),
                Key::new(1.5, 0.0, 0.0, 0.0),
                Key::new(3.0, 0.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::RShoulder,
            &[
                Key::new(0.0, 0.0, 0.0, 0.0),
                Key::new(1.5, 0.0, 0.0, 0.0),
                Key::new(3.0, 0.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::LElbow,
            &[Key::new(0.0, 0.0, 0.0, 0.0), Key::new(3.0, 0.0, 0.0, 0.0)],
        ),
        quat_track(
            JointName::RElbow,
            &[Key::new(0.0, 0.0, 0.0, 0.0), Key::new(3.0, 0.0, 0.0, 0.0)],
        ),
    ];

    build_clip("deadlift", tracks, Some(3.0))
}

pub static DEADLIFT: ExerciseDefinition = ExerciseDefinition {
    id: "deadlift",
    name: "Deadlift",
    primary_muscles: &[MuscleId::Hamstrings, MuscleId::Glutes, MuscleId::LowerBack],
    secondary_muscles: &[MuscleId::Quads, MuscleId::Core, MuscleId::Traps],
    difficulty: Difficulty::Intermediate,
    form_steps: &[
        "Stand with feet hip-width apart, bar over mid-foot",
        "Hinge at the hips and grip the bar just outside your knees",
        "Flatten your back, brace your core, and pull slack out of the bar",
        "Drive through your feet, extending hips and knees together",
        "Lock out by squeezing glutes at the top, shoulders back",
    ],
    common_mistakes: &[
        "Rounding the lower back: maintain a neutral spine throughout the lift",
        "Jerking the bar off the floor: build tension gradually before pulling",
        "Bar drifting away from body: keep the bar close to your shins and thighs",
    ],
    form_cues: &[
        FormCue {
            joint: JointName::Spine,
            text: "Neutral spine",
        },
        FormCue {
            joint: JointName::LAnkle,
            text: "Push floor away",
        },
        FormCue {
            joint: JointName::LWrist,
            text: "Bar close to body",
        },
    ],
    has_ghost_equipment: false,
    model_path: None,
    animation_clip_name: None,
    build_animation: build_deadlift_clip,
};
