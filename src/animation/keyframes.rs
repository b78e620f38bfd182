//! Keyframe track construction from Euler-angle samples.
//!
//! Exercise clips are authored as per-joint (time, x, y, z) rotations in
//! degrees and converted to unit quaternions here. The axis-application
//! order is intrinsic Z→Y→X throughout — the fixed biomechanical convention
//! of the whole catalog. Playback interpolates with shortest-path slerp.

use glam::{EulerRot, Quat};

use crate::animation::binding::TargetPath;
use crate::animation::clip::{AnimationClip, Track, TrackData, TrackMeta};
use crate::animation::tracks::{InterpolationMode, KeyframeTrack};
use crate::mannequin::JointName;

/// A single rotation keyframe as Euler angles in degrees (Z-Y-X order).
#[derive(Debug, Clone, Copy)]
pub struct EulerKeyframe {
    /// Seconds from clip start, non-negative, non-decreasing per track.
    pub time: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl EulerKeyframe {
    #[must_use]
    pub fn new(time: f32, x: f32, y: f32, z: f32) -> Self {
        Self { time, x, y, z }
    }

    /// Converts to a unit quaternion (intrinsic Z→Y→X).
    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::ZYX,
            self.z.to_radians(),
            self.y.to_radians(),
            self.x.to_radians(),
        )
    }
}

/// Builds a quaternion rotation track for one joint.
///
/// The track targets the joint by its frozen name string; it binds at
/// playback by exact match against [`crate::scene::Node::name`]. For a
/// seamless loop the first and last keyframe must carry identical angles.
#[must_use]
pub fn quat_track(joint: JointName, keyframes: &[EulerKeyframe]) -> Track {
    let mut times = Vec::with_capacity(keyframes.len());
    let mut values = Vec::with_capacity(keyframes.len());

    for kf in keyframes {
        times.push(kf.time);
        values.push(kf.to_quat());
    }

    Track {
        meta: TrackMeta {
            node_name: joint.as_str().to_string(),
            target: TargetPath::Rotation,
        },
        data: TrackData::Quaternion(KeyframeTrack::new(
            times,
            values,
            InterpolationMode::Linear,
        )),
    }
}

/// Assembles a named clip from tracks.
///
/// `duration`: `Some(seconds)` for an explicit length, `None` to derive it
/// as the maximum keyframe time across all tracks.
#[must_use]
pub fn build_clip(name: &str, tracks: Vec<Track>, duration: Option<f32>) -> AnimationClip {
    match duration {
        Some(d) => AnimationClip::with_duration(name.to_string(), tracks, d),
        None => AnimationClip::new(name.to_string(), tracks),
    }
}
