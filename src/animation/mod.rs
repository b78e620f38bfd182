//! Keyframe animation module.
//!
//! Pipeline: exercise data → [`keyframes`] (Euler degrees → quaternion
//! tracks) → [`clip::AnimationClip`] → [`binder`] (name-based node
//! resolution) → [`controller::AnimationController`] (play/pause/speed/seek
//! over a bound clip).

mod values;

pub mod action;
pub mod binder;
pub mod binding;
pub mod clip;
pub mod controller;
pub mod keyframes;
pub mod tracks;

pub use action::AnimationAction;
pub use binder::Binder;
pub use binding::{PropertyBinding, TargetPath};
pub use clip::{AnimationClip, Track, TrackData, TrackMeta};
pub use controller::AnimationController;
pub use keyframes::{build_clip, quat_track, EulerKeyframe};
pub use tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
pub use values::Interpolatable;
