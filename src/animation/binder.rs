use crate::animation::binding::PropertyBinding;
use crate::animation::clip::AnimationClip;
use crate::scene::{NodeHandle, Scene};

pub struct Binder;

impl Binder {
    /// Resolves a clip's tracks to node handles within the subtree rooted
    /// at `root_node`, by exact name match.
    ///
    /// Tracks whose target name is absent from the subtree get no binding:
    /// they stay inert during playback. That is deliberate — externally
    /// authored clips may carry tracks for nodes this rig does not have —
    /// but it is also the failure mode of a typo'd joint name, so it is
    /// logged.
    #[must_use]
    pub fn bind(scene: &Scene, root_node: NodeHandle, clip: &AnimationClip) -> Vec<PropertyBinding> {
        let mut bindings = Vec::with_capacity(clip.tracks.len());

        for (track_idx, track) in clip.tracks.iter().enumerate() {
            let node_name = &track.meta.node_name;
            let target = track.meta.target;

            if let Some(node_handle) = find_node_by_name(scene, root_node, node_name) {
                bindings.push(PropertyBinding {
                    track_index: track_idx,
                    node_handle,
                    target,
                });
            } else {
                log::warn!(
                    "Clip \"{}\": track targets \"{node_name}\" but no such node exists under the bound root; track will not play",
                    clip.name
                );
            }
        }

        bindings
    }
}

fn find_node_by_name(scene: &Scene, current: NodeHandle, name: &str) -> Option<NodeHandle> {
    if let Some(node) = scene.get_node(current) {
        if node.name == name {
            return Some(current);
        }
        for &child in node.children() {
            if let Some(found) = find_node_by_name(scene, child, name) {
                return Some(found);
            }
        }
    }
    None
}
