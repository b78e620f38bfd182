use glam::{Quat, Vec3};

/// Value types a [`crate::animation::KeyframeTrack`] can interpolate.
///
/// `Default` doubles as the degenerate-track value: sampling a track with
/// no keyframes yields `T::default()` rather than panicking.
pub trait Interpolatable: Copy + Clone + Default + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    /// Shortest-path spherical interpolation. Component-wise lerp would pop
    /// visibly when adjacent keys are antipodal-equivalent.
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t)
    }
}
