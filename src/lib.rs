//! FormCheck core: a procedural exercise mannequin with keyframe
//! animation playback and muscle-group highlighting.
//!
//! The pipeline, front to back:
//!
//! 1. [`mannequin`] builds the 17-joint figure out of primitive meshes in
//!    a [`scene::Scene`].
//! 2. [`exercises`] holds the static catalog; each definition authors a
//!    looping [`animation::AnimationClip`] from Euler-degree keyframes.
//! 3. [`animation::AnimationController`] binds a clip to the rig by node
//!    name and drives play/pause/speed/seek.
//! 4. [`mannequin::apply_muscle_highlights`] recolors segment materials
//!    for the active exercise.
//!
//! [`session::ExerciseSession`] wires these together for a frame loop;
//! [`store::AppStore`] carries the shared UI flags.

pub mod animation;
pub mod assets;
pub mod errors;
pub mod exercises;
pub mod mannequin;
pub mod resources;
pub mod scene;
pub mod session;
pub mod store;
pub mod utils;

pub use animation::{AnimationAction, AnimationClip, AnimationController, Binder, EulerKeyframe};
pub use errors::{FormCheckError, Result};
pub use exercises::{get_exercise, ExerciseDefinition, REGISTRY};
pub use mannequin::{
    apply_muscle_highlights, build_mannequin, JointName, MannequinRig, MuscleId, SegmentName,
};
pub use resources::{Geometry, Mesh, StandardMaterial};
pub use scene::{Node, NodeHandle, Scene};
pub use session::ExerciseSession;
pub use store::{AppState, AppStore};
