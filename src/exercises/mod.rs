//! Exercise catalog.
//!
//! Each exercise is a static [`ExerciseDefinition`]: coaching metadata,
//! muscle involvement, and a clip builder that authors the looping
//! animation against the mannequin's joint names. The registry is the
//! single lookup point; adding an exercise means writing one module here
//! and appending it to [`REGISTRY`].

pub mod bench_press;
pub mod deadlift;
pub mod plank;
pub mod pushup;
pub mod squat;

use crate::animation::AnimationClip;
use crate::errors::{FormCheckError, Result};
use crate::mannequin::{JointName, MannequinRig, MuscleId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A short coaching label anchored to a joint on the mannequin.
#[derive(Debug, Clone, Copy)]
pub struct FormCue {
    pub joint: JointName,
    pub text: &'static str,
}

/// The typed contract every exercise satisfies.
#[derive(Debug)]
pub struct ExerciseDefinition {
    /// Unique machine-readable id, the registry key.
    pub id: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// Muscles doing the most work, tinted strongest.
    pub primary_muscles: &'static [MuscleId],
    /// Stabilisers, tinted dimmer.
    pub secondary_muscles: &'static [MuscleId],
    pub difficulty: Difficulty,
    /// Step-by-step coaching cues, in order.
    pub form_steps: &'static [&'static str],
    /// Mistakes paired with their corrective cue.
    pub common_mistakes: &'static [&'static str],
    /// Joint-anchored labels; empty when the exercise has none.
    pub form_cues: &'static [FormCue],
    /// Whether a ghost equipment overlay accompanies the figure.
    pub has_ghost_equipment: bool,
    /// External animated model to load instead of the procedural rig.
    pub model_path: Option<&'static str>,
    /// Clip to select from the external model; first clip when `None`.
    pub animation_clip_name: Option<&'static str>,
    /// Authors the looping clip for this exercise.
    pub build_animation: fn(&MannequinRig) -> AnimationClip,
}

/// Every registered exercise, in catalog order.
pub static REGISTRY: [&ExerciseDefinition; 5] = [
    &squat::SQUAT,
    &deadlift::DEADLIFT,
    &bench_press::BENCH_PRESS,
    &pushup::PUSHUP,
    &plank::PLANK,
];

/// Looks up an exercise by id.
///
/// # Errors
///
/// Returns [`FormCheckError::ExerciseNotFound`] listing the registered
/// ids when no exercise matches.
pub fn get_exercise(id: &str) -> Result<&'static ExerciseDefinition> {
    REGISTRY
        .iter()
        .find(|def| def.id == id)
        .copied()
        .ok_or_else(|| FormCheckError::ExerciseNotFound {
            id: id.to_string(),
            available: REGISTRY
                .iter()
                .map(|def| def.id)
                .collect::<Vec<_>>()
                .join(", "),
        })
}
