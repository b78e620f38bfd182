//! One running exercise demonstration: scene, rig, controller.
//!
//! The session owns the ordering rules the frame loop depends on. Within
//! a tick, pose advancement runs before the world-matrix update so the
//! frame never renders stale geometry. When the exercise changes, the
//! old controller is disposed and the old rig removed from the scene
//! before the new one is built, so at most one bound animation exists per
//! root at any moment.

use std::sync::Arc;

use crate::animation::AnimationController;
use crate::errors::Result;
use crate::exercises::{get_exercise, ExerciseDefinition};
use crate::mannequin::{apply_muscle_highlights, build_mannequin, MannequinRig};
use crate::scene::Scene;

#[derive(Debug)]
pub struct ExerciseSession {
    pub scene: Scene,
    rig: MannequinRig,
    controller: AnimationController,
    current: &'static ExerciseDefinition,
}

impl ExerciseSession {
    /// Builds the mannequin, highlights and starts the given exercise.
    ///
    /// # Errors
    ///
    /// Fails when `exercise_id` is not registered.
    pub fn new(exercise_id: &str) -> Result<Self> {
        let definition = get_exercise(exercise_id)?;

        let mut scene = Scene::new();
        let rig = build_mannequin(&mut scene);
        let mut controller = AnimationController::new(rig.root);

        apply_muscle_highlights(
            &mut scene,
            &rig,
            definition.primary_muscles,
            definition.secondary_muscles,
        );
        let clip = Arc::new((definition.build_animation)(&rig));
        controller.play(&mut scene, clip);
        scene.update_matrix_world();

        Ok(Self {
            scene,
            rig,
            controller,
            current: definition,
        })
    }

    #[must_use]
    pub fn rig(&self) -> &MannequinRig {
        &self.rig
    }

    #[must_use]
    pub fn controller(&self) -> &AnimationController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut AnimationController {
        &mut self.controller
    }

    #[must_use]
    pub fn current_exercise(&self) -> &'static ExerciseDefinition {
        self.current
    }

    /// Swaps to another exercise.
    ///
    /// Tear-down is synchronous and strictly ordered: dispose the old
    /// controller, remove the old rig subtree, then build the fresh one.
    /// A failed lookup leaves the running session untouched.
    ///
    /// # Errors
    ///
    /// Fails when `exercise_id` is not registered.
    pub fn switch_exercise(&mut self, exercise_id: &str) -> Result<()> {
        let definition = get_exercise(exercise_id)?;

        log::info!(
            "Switching exercise: {} -> {}",
            self.current.id,
            definition.id
        );

        self.controller.dispose(&mut self.scene);
        self.scene.remove_node(self.rig.root);

        self.rig = build_mannequin(&mut self.scene);
        self.controller = AnimationController::new(self.rig.root);
        self.current = definition;

        apply_muscle_highlights(
            &mut self.scene,
            &self.rig,
            definition.primary_muscles,
            definition.secondary_muscles,
        );
        let clip = Arc::new((definition.build_animation)(&self.rig));
        self.controller.play(&mut self.scene, clip);
        self.scene.update_matrix_world();

        Ok(())
    }

    /// Per-frame tick: advance the pose, then refresh world matrices.
    ///
    /// `scrubbing` suspends clock advancement so a slider drag fully owns
    /// the playback time.
    pub fn tick(&mut self, scrubbing: bool) {
        if !scrubbing {
            self.controller.update(&mut self.scene);
        }
        self.scene.update_matrix_world();
    }

    /// Scrubs playback to `t` seconds and refreshes matrices.
    pub fn seek(&mut self, t: f32) {
        self.controller.set_time(&mut self.scene, t);
        self.scene.update_matrix_world();
    }

    /// Normalized playback progress in `[0, 1)`, 0 while idle.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let duration = self.controller.duration();
        if duration > 0.0 {
            self.controller.time() / duration
        } else {
            0.0
        }
    }
}
