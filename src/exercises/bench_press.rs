//! Barbell bench press, pressed supine.
//!
//! The pelvis holds -90° X so the figure lies on its back; shoulders and
//! elbows carry all the motion, lowering from lockout to the chest and
//! pressing back up over 3 s.

use crate::animation::keyframes::{build_clip, quat_track, EulerKeyframe as Key};
use crate::animation::AnimationClip;
use crate::mannequin::{JointName, MannequinRig, MuscleId};

use super::{Difficulty, ExerciseDefinition};

fn build_bench_press_clip(_rig: &MannequinRig) -> AnimationClip {
    let tracks = vec![
        quat_track(
            JointName::Pelvis,
            &[
                Key::new(0.0, -90.0, 0.0, 0.0),
                Key::new(3.0, -90.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::Spine,
            &[Key::new(0.0, 0.0, 0.0, 0.0), Key::new(3.0, 0.0, 0.0, 0.0)],
        ),
        // Shoulder Z widens as the bar descends, tucking the elbows.
        quat_track(
            JointName::LShoulder,
            &[
                Key::new(0.0, -90.0, 0.0, -10.0),
                Key::new(0.8, -75.0, 0.0, -15.0),
                Key::new(1.5, -60.0, 0.0, -20.0),
                Key::new(2.2, -75.0, 0.0, -15.0),
                Key::new(3.0, -90.0, 0.0, -10.0),
            ],
        ),
        quat_track(
            JointName::RShoulder,
            &[
                Key::new(0.0, -90.0, 0.0, 10.0),
                Key::new(0.8, -75.0, 0.0, 15.0),
                Key::new(1.5, -60.0, 0.0, 20.0),
                Key::new(2.2, -75.0, 0.0, 15.0),
                Key::new(3.0, -90.0, 0.0, 10.0),
            ],
        ),
        quat_track(
            JointName::LElbow,
            &[
                Key::new(0.0, 5.0, 0.0, 0.0),
                Key::new(0.8, 40.0, 0.0, 0.0),
                Key::new(1.5, 90.0, 0.0, 0.0),
                Key::new(2.2, 40.0, 0.0, 0.0),
                Key::new(3.0, 5.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::RElbow,
            &[
                Key::new(0.0, 5.0, 0.0, 0.0),
                Key::new(0.8, 40.0, 0.0, 0.0),
                Key::new(1.5, 90.0, 0.0, 0.0),
                Key::new(2.2, 40.0, 0.0, 0.0),
                Key::new(3.0, 5.0, 0.0, 0.0),
            ],
        ),
        quat_track(
            JointName::LHip,
            &[Key::new(0.0, 0.0, 0.0, 5.0), Key::new(3.0, 0.0, 0.0, 5.0)],
        ),
        quat_track(
            JointName::RHip,
            &[Key::new(0.0, 0.0, 0.0, -5.0), Key::new(3.0, 0.0, 0.0, -5.0)],
        ),
        // Knees bent so the feet plant on the floor beside the bench.
        quat_track(
            JointName::LKnee,
            &[Key::new(0.0, 70.0, 0.0, 0.0), Key::new(3.0, 70.0, 0.0, 0.0)],
        ),
        quat_track(
            JointName::RKnee,
            &[Key::new(0.0, 70.0, 0.0, 0.0), Key::new(3.0, 70.0, 0.0, 0.0)],
        ),
    ];

    build_clip("bench-press", tracks, Some(3.0))
}

pub static BENCH_PRESS: ExerciseDefinition = ExerciseDefinition {
    id: "bench-press",
    name: "Bench Press",
    primary_muscles: &[MuscleId::Chest, MuscleId::Triceps, MuscleId::FrontDelts],
    secondary_muscles: &[MuscleId::Core],
    difficulty: Difficulty::Beginner,
    form_steps: &[
        "Lie flat on the bench with eyes under the bar",
        "Grip the bar slightly wider than shoulder-width, wrists straight",
        "Unrack and hold the bar over your chest with arms extended",
        "Lower the bar to mid-chest, keeping elbows at ~45 degrees from torso",
        "Press the bar up and slightly back to lockout over your shoulders",
    ],
    common_mistakes: &[
        "Flaring elbows to 90 degrees: keep them at 45 to protect shoulders",
        "Bouncing bar off chest: pause briefly at the bottom for control",
        "Lifting hips off bench: maintain contact to protect lower back",
    ],
    form_cues: &[],
    has_ghost_equipment: false,
    model_path: None,
    animation_clip_name: None,
    build_animation: build_bench_press_clip,
};
