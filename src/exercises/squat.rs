//! Barbell back squat.
//!
//! Biomechanics targets at the bottom position: ~92° hip flexion, ~125°
//! knee flexion, ~15° ankle dorsiflexion, ~22° anterior pelvic tilt with
//! ~12° additional spine lean. One rep takes 3 s (1.5 s down, 1.5 s up)
//! and the keyframes are spaced non-linearly so the descent slows into
//! the catch at the bottom.

use crate::animation::keyframes::{build_clip, quat_track, EulerKeyframe as Key};
use crate::animation::AnimationClip;
use crate::mannequin::{JointName, MannequinRig, MuscleId};

use super::{Difficulty, ExerciseDefinition};

fn build_squat_clip(_rig: &MannequinRig) -> AnimationClip {
    // Positive X flexes forward, Z gives the slight external rotation that
    // keeps knees tracking over toes. First and last frames match so the
    // loop restarts seamlessly.
    let tracks = vec![
        quat_track(
            JointName::Pelvis,
            &[
                Key::new(0.0, 0.0, 0.0, 0.0),
                Key::new(0.6, 10.0, 0.0, 0.0),
                Key::new(1.2, 18.0, 0.0, 0.0),
                Key::new(1.5, 22.0, 0.0, 0.0),
                Key::new(2.1, 18.0, 0.0, 0.0),
                Key::new(2.7, 8.0, 0.0, 0.0),
                Key::new(3.0, 0.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::Spine,
            &[
                Key::new(0.0, 0.0, 0.0, 0.0),
                Key::new(0.6, 5.0, 0.0, 0.0),
                Key::new(1.2, 10.0, 0.0, 0.0),
                Key::new(1.5, 12.0, 0.0, 0.0),
                Key::new(2.1, 10.0, 0.0, 0.0),
                Key::new(2.7, 4.0, 0.0, 0.0),
                Key::new(3.0, 0.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::LHip,
            &[
                Key::new(0.0, 0.0, 0.0, 5.0),
                Key::new(0.6, 30.0, 0.0, 5.0),
                Key::new(1.2, 65.0, 0.0, 5.0),
                Key::new(1.5, 92.0, 0.0, 6.0),
                Key::new(2.1, 65.0, 0.0, 5.0),
                Key::new(2.7, 25.0, 0.0, 5.0),
                Key::new(3.0, 0.0, 0.0, 5.0),
            ],
        ),
        quat_track(
            JointName::RHip,
            &[
                Key::new(0.0, 0.0, 0.0, -5.0),
                Key::new(0.6, 30.0, 0.0, -5.0),
                Key::new(1.2, 65.0, 0.0, -5.0),
                Key::new(1.5, 92.0, 0.0, -6.0),
                Key::new(2.1, 65.0, 0.0, -5.0),
                Key::new(2.7, 25.0, 0.0, -5.0),
                Key::new(3.0, 0.0, 0.0, -5.0),
            ],
        ),
        quat_track(
            JointName::LKnee,
            &[
                Key::new(0.0, 0.0, 0.0, 0.0),
                Key::new(0.6, 35.0, 0.0, 0.0),
                Key::new(1.2, 80.0, 0.0, 0.0),
                Key::new(1.5, 125.0, 0.0, 0.0),
                Key::new(2.1, 80.0, 0.0, 0.0),
                Key::new(2.7, 30.0, 0.0, 0.0),
                Key::new(3.0, 0.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::RKnee,
            &[
                Key::new(0.0, 0.0, 0.0, 0.0),
                Key::new(0.6, 35.0, 0.0, 0.0),
                Key::new(1.2, 80.0, 0.0, 0.0),
                Key::new(1.5, 125.0, 0.0, 0.0),
                Key::new(2.1, 80.0, 0.0, 0.0),
                Key::new(2.7, 30.0, 0.0, 0.0),
                Key::new(3.0, 0.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::LAnkle,
            &[
                Key::new(0.0, 0.0, 0.0, 0.0),
                Key::new(0.6, -5.0, 0.0, 0.0),
                Key::new(1.2, -12.0, 0.0, 0.0),
                Key::new(1.5, -15.0, 0.0, 0.0),
                Key::new(2.1, -12.0, 0.0, 0.0),
                Key::new(2.7, -4.0, 0.0, 0.0),
                Key::new(3.0, 0.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::RAnkle,
            &[
                Key::new(0.0, 0.0, 0.0, 0.0),
                Key::new(0.6, -5.0, 0.0, 0.0),
                Key::new(1.2, -12.0, 0.0, 0.0),
                Key::new(1.5, -15.0, 0.0, 0.0),
                Key::new(2.1, -12.0, 0.0, 0.0),
                Key::new(2.7, -4.0, 0.0, 0.0),
                Key::new(3.0, 0.0, 0.0, 0.0),
            ],
        ),
    ];

    build_clip("squat", tracks, Some(3.0))
}

pub static SQUAT: ExerciseDefinition = ExerciseDefinition {
    id: "squat",
    name: "Squat",
    primary_muscles: &[MuscleId::Quads, MuscleId::Glutes],
    secondary_muscles: &[MuscleId::Hamstrings, MuscleId::Core, MuscleId::LowerBack],
    difficulty: Difficulty::Beginner,
    form_steps: &[
        "Feet shoulder-width apart, toes angled out 15-30 degrees",
        "Brace your core and take a deep breath before descending",
        "Push hips back and bend knees simultaneously, tracking over your toes",
        "Descend until thighs are parallel to the floor (or slightly below)",
        "Drive through your heels to stand, keeping chest up throughout",
    ],
    common_mistakes: &[
        "Knees caving inward: actively push knees out over your pinky toes",
        "Heels rising off the floor: keep your weight distributed through your whole foot",
        "Excessive forward lean: improve ankle mobility and keep chest up",
    ],
    form_cues: &[],
    has_ghost_equipment: false,
    model_path: None,
    animation_clip_name: None,
    build_animation: build_squat_clip,
};
