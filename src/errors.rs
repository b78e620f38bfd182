//! Error Types
//!
//! The main error type [`FormCheckError`] covers the crate's failure modes:
//! exercise registry lookups and externally authored animation assets.
//!
//! All public APIs that can fail return [`Result<T>`], an alias for
//! `std::result::Result<T, FormCheckError>`.

use thiserror::Error;

/// The main error type for the FormCheck core.
#[derive(Error, Debug)]
pub enum FormCheckError {
    // ========================================================================
    // Registry Errors
    // ========================================================================
    /// The requested exercise id is not registered. Callers must not fall
    /// back to another exercise; the message lists every valid id.
    #[error("Exercise \"{id}\" not found in registry. Available exercises: {available}")]
    ExerciseNotFound {
        /// The id that was requested
        id: String,
        /// Comma-separated list of registered ids
        available: String,
    },

    // ========================================================================
    // External Asset Errors
    // ========================================================================
    /// An externally authored model carried no animation clips at all.
    #[error("Model at {path} contains no animation clips")]
    ModelHasNoAnimations {
        /// Asset path the model was loaded from
        path: String,
    },

    /// The clip requested by name is absent from the loaded model.
    #[error("Animation clip \"{name}\" not found in model at {path}")]
    AnimationClipNotFound {
        /// Asset path the model was loaded from
        path: String,
        /// The clip name that was requested
        name: String,
    },
}

/// Alias for `Result<T, FormCheckError>`.
pub type Result<T> = std::result::Result<T, FormCheckError>;
