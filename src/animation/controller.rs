use std::sync::Arc;

use glam::Quat;

use crate::animation::action::{AnimationAction, TrackValue};
use crate::animation::binding::TargetPath;
use crate::animation::binder::Binder;
use crate::animation::clip::AnimationClip;
use crate::scene::{NodeHandle, Scene};
use crate::utils::Timer;

/// Playback controller for one animated hierarchy.
///
/// Owns at most one active [`AnimationAction`] bound to the subtree rooted
/// at `root`. State machine:
///
/// - idle (no clip) → [`Self::play`] → playing (infinite loop)
/// - playing ⇄ paused via [`Self::set_paused`], position preserved
/// - [`Self::set_time`] snaps to an explicit time and immediately rewrites
///   the pose, bypassing the clock (scrubbing)
/// - [`Self::dispose`] releases the binding; safe to call when idle
///
/// [`Self::update`] advances by the controller's own clock; call it once
/// per render tick while playing. While paused it is a no-op. Rebinding
/// via `play` resets every joint the previous clip rotated back to identity
/// rotation, so no pose leaks between clips.
#[derive(Debug)]
pub struct AnimationController {
    root: NodeHandle,
    action: Option<AnimationAction>,
    speed: f32,
    clock: Timer,
}

impl AnimationController {
    /// Creates an idle controller for the hierarchy rooted at `root`.
    #[must_use]
    pub fn new(root: NodeHandle) -> Self {
        Self {
            root,
            action: None,
            speed: 1.0,
            clock: Timer::new(),
        }
    }

    /// Stops whatever was bound and plays `clip` from t=0 on infinite loop.
    ///
    /// The initial pose is written immediately so the hierarchy reflects
    /// the clip even before the first `update`.
    pub fn play(&mut self, scene: &mut Scene, clip: Arc<AnimationClip>) {
        self.unbind_current(scene);

        log::debug!("Playing clip \"{}\" ({}s)", clip.name, clip.duration);

        let mut action = AnimationAction::new(clip);
        action.time_scale = self.speed;
        action.bindings = Binder::bind(scene, self.root, action.clip());
        self.action = Some(action);

        self.apply_pose(scene);
    }

    /// Advances playback by the internal clock. Call once per render tick.
    pub fn update(&mut self, scene: &mut Scene) {
        self.clock.tick();
        let dt = self.clock.dt_seconds();
        self.advance(scene, dt);
    }

    /// Advances playback by an explicit delta (seconds of wall time; the
    /// speed multiplier applies on top). No-op while paused or idle.
    pub fn advance(&mut self, scene: &mut Scene, dt: f32) {
        let Some(action) = self.action.as_mut() else {
            return;
        };
        if action.paused {
            return;
        }

        action.update(dt);
        self.apply_pose(scene);
    }

    /// Seeks to `t` and rewrites the pose with zero clock advancement, so
    /// the visible pose reflects `t` even while paused.
    pub fn set_time(&mut self, scene: &mut Scene, t: f32) {
        if let Some(action) = self.action.as_mut() {
            action.time = t;
            self.apply_pose(scene);
        }
    }

    /// Sets the playback speed multiplier for subsequent ticks. Does not
    /// affect seeking.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
        if let Some(action) = self.action.as_mut() {
            action.time_scale = speed;
        }
    }

    /// Pauses or resumes without losing position.
    pub fn set_paused(&mut self, paused: bool) {
        if let Some(action) = self.action.as_mut() {
            action.paused = paused;
        }
    }

    /// Current playback time of the active clip, 0 when idle.
    #[must_use]
    pub fn time(&self) -> f32 {
        self.action.as_ref().map_or(0.0, |a| a.time)
    }

    /// Duration of the active clip, 0 when idle.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.action.as_ref().map_or(0.0, |a| a.clip().duration)
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.action.is_none()
    }

    /// Stops playback and releases the clip binding. Idempotent.
    pub fn dispose(&mut self, scene: &mut Scene) {
        self.unbind_current(scene);
    }

    /// Resets every joint the current clip rotated back to identity, then
    /// drops the action. Translation/scale targets keep their last value:
    /// the rig's rest offsets live in node positions and must not be
    /// clobbered.
    fn unbind_current(&mut self, scene: &mut Scene) {
        let Some(action) = self.action.take() else {
            return;
        };

        for binding in &action.bindings {
            if binding.target == TargetPath::Rotation
                && let Some(node) = scene.get_node_mut(binding.node_handle)
            {
                node.transform.rotation = Quat::IDENTITY;
                node.transform.mark_dirty();
            }
        }
    }

    /// Samples every bound track at the action's current time and writes
    /// the results into node transforms.
    fn apply_pose(&mut self, scene: &mut Scene) {
        let Some(action) = self.action.as_mut() else {
            return;
        };

        for b_idx in 0..action.bindings.len() {
            let (track_index, node_handle, target) = {
                let b = &action.bindings[b_idx];
                (b.track_index, b.node_handle, b.target)
            };

            let Some(value) = action.sample_track(track_index) else {
                continue;
            };

            let Some(node) = scene.get_node_mut(node_handle) else {
                continue;
            };

            match (value, target) {
                (TrackValue::Quaternion(q), TargetPath::Rotation) => {
                    node.transform.rotation = q;
                    node.transform.mark_dirty();
                }
                (TrackValue::Vector3(v), TargetPath::Translation) => {
                    node.transform.position = v;
                    node.transform.mark_dirty();
                }
                (TrackValue::Vector3(v), TargetPath::Scale) => {
                    node.transform.scale = v;
                    node.transform.mark_dirty();
                }
                _ => {}
            }
        }
    }
}
