//! Externally authored animated models.
//!
//! Most exercises drive the procedural mannequin, but a definition may
//! instead name a model asset that ships with its own skinned figure and
//! embedded clips. Decoding the asset bytes is a collaborator's concern;
//! this module owns the shape of a decoded model and the clip selection
//! rules.

use std::sync::Arc;

use crate::animation::AnimationClip;
use crate::errors::{FormCheckError, Result};
use crate::scene::NodeHandle;

/// A decoded external model: its root in the scene plus every clip the
/// asset embedded.
pub struct LoadedModel {
    pub root: NodeHandle,
    pub clips: Vec<Arc<AnimationClip>>,
}

/// Picks the clip to play from a loaded model.
///
/// `name` selects by exact match; `None` takes the model's first clip.
///
/// # Errors
///
/// [`FormCheckError::ModelHasNoAnimations`] when the model embeds no
/// clips at all, [`FormCheckError::AnimationClipNotFound`] when `name`
/// matches none of them. Both carry `path` so the message points at the
/// offending asset.
pub fn select_clip<'a>(
    clips: &'a [Arc<AnimationClip>],
    path: &str,
    name: Option<&str>,
) -> Result<&'a Arc<AnimationClip>> {
    if clips.is_empty() {
        return Err(FormCheckError::ModelHasNoAnimations {
            path: path.to_string(),
        });
    }

    match name {
        None => Ok(&clips[0]),
        Some(wanted) => clips
            .iter()
            .find(|clip| clip.name == wanted)
            .ok_or_else(|| FormCheckError::AnimationClipNotFound {
                path: path.to_string(),
                name: wanted.to_string(),
            }),
    }
}
