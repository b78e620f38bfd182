use glam::Vec3;
use slotmap::SlotMap;

use crate::resources::Mesh;
use crate::scene::node::Node;
use crate::scene::transform_system;
use crate::scene::{MeshKey, NodeHandle};

/// Scene graph container.
///
/// Pure data layer: node hierarchy plus the mesh pool. Meshes own their
/// material instance, so mutating one mesh's material can never affect
/// another.
#[derive(Debug)]
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,

    // ==== Component pool ====
    pub meshes: SlotMap<MeshKey, Mesh>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            meshes: SlotMap::with_key(),
        }
    }

    /// Starts building a node with the fluent [`NodeBuilder`].
    pub fn build_node(&'_ mut self, name: &str) -> NodeBuilder<'_> {
        NodeBuilder::new(self, name)
    }

    /// Removes a node and its whole subtree, releasing attached meshes.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        let children = if let Some(node) = self.nodes.get(handle) {
            node.children.clone()
        } else {
            return;
        };

        for child in children {
            self.remove_node(child);
        }

        // Unlink from parent or the root list.
        let parent_opt = self.nodes.get(handle).and_then(|n| n.parent);
        if let Some(parent_handle) = parent_opt {
            if let Some(parent) = self.nodes.get_mut(parent_handle)
                && let Some(pos) = parent.children.iter().position(|&x| x == handle)
            {
                parent.children.remove(pos);
            }
        } else if let Some(pos) = self.root_nodes.iter().position(|&x| x == handle) {
            self.root_nodes.remove(pos);
        }

        // Release components.
        if let Some(node) = self.nodes.get(handle) {
            if let Some(mesh_key) = node.mesh {
                self.meshes.remove(mesh_key);
            }
        }

        self.nodes.remove(handle);
    }

    /// Re-parents `child_handle` under `parent_handle`.
    ///
    /// This is how externally loaded model roots are grafted under an
    /// existing pivot. The child keeps its local transform; its world
    /// matrix is recomputed under the new parent on the next update.
    pub fn attach(&mut self, child_handle: NodeHandle, parent_handle: NodeHandle) {
        if child_handle == parent_handle {
            log::warn!("Ignoring attach of a node to itself");
            return;
        }

        // Unlink from the old parent or the root list.
        let old_parent = self.nodes.get(child_handle).and_then(|n| n.parent);
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p)
                && let Some(i) = n.children.iter().position(|&x| x == child_handle)
            {
                n.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == child_handle) {
            self.root_nodes.remove(i);
        }

        if let Some(p) = self.nodes.get_mut(parent_handle) {
            p.children.push(child_handle);
        } else {
            log::error!("Attach target no longer exists; keeping child as a root node");
            self.root_nodes.push(child_handle);
            if let Some(c) = self.nodes.get_mut(child_handle) {
                c.parent = None;
            }
            return;
        }

        if let Some(c) = self.nodes.get_mut(child_handle) {
            c.parent = Some(parent_handle);
            c.transform.mark_dirty();
        }
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// World position of a node, read from its cached world matrix.
    ///
    /// Collaborators use this to anchor annotation labels to joints; the
    /// value is current after [`Self::update_matrix_world`].
    #[must_use]
    pub fn node_world_position(&self, handle: NodeHandle) -> Option<Vec3> {
        self.nodes
            .get(handle)
            .map(|n| n.transform.world_matrix.translation.into())
    }

    // ========================================================================
    // Matrix update pipeline
    // ========================================================================

    /// Updates world matrices for the whole scene.
    ///
    /// Must run after pose advancement and before rendering each frame.
    pub fn update_matrix_world(&mut self) {
        transform_system::update_hierarchy_iterative(&mut self.nodes, &self.root_nodes);
    }

    /// Updates world matrices for a single subtree.
    pub fn update_subtree(&mut self, root_handle: NodeHandle) {
        transform_system::update_subtree(&mut self.nodes, root_handle);
    }
}

/// Fluent builder for inserting configured nodes.
pub struct NodeBuilder<'a> {
    scene: &'a mut Scene,
    node: Node,
    parent: Option<NodeHandle>,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(scene: &'a mut Scene, name: &str) -> Self {
        Self {
            scene,
            node: Node::new(name),
            parent: None,
        }
    }

    #[must_use]
    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.node.transform.position = Vec3::new(x, y, z);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, x: f32, y: f32, z: f32) -> Self {
        self.node.transform.scale = Vec3::new(x, y, z);
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: NodeHandle) -> Self {
        self.parent = Some(parent);
        self
    }

    #[must_use]
    pub fn with_mesh(mut self, mesh: MeshKey) -> Self {
        self.node.mesh = Some(mesh);
        self
    }

    /// Inserts the node into the scene and returns its handle.
    pub fn build(self) -> NodeHandle {
        let handle = self.scene.nodes.insert(self.node);

        if let Some(parent_handle) = self.parent {
            if let Some(p) = self.scene.nodes.get_mut(parent_handle) {
                p.children.push(handle);
            }
            if let Some(c) = self.scene.nodes.get_mut(handle) {
                c.parent = Some(parent_handle);
            }
        } else {
            self.scene.root_nodes.push(handle);
        }

        handle
    }
}
