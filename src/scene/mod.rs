//! Scene graph module.
//!
//! Manages the node hierarchy and attached components:
//! - [`Node`]: a named pivot in the tree (parent/children + transform)
//! - [`Transform`]: position/rotation/scale with cached matrices
//! - [`Scene`]: node arena, mesh pool, and the world-matrix update pipeline
//! - [`transform_system`]: decoupled hierarchy matrix propagation

pub mod node;
pub mod scene;
pub mod transform;
pub mod transform_system;

pub use node::Node;
pub use scene::{NodeBuilder, Scene};
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Handle to a [`Node`] in a [`Scene`].
    pub struct NodeHandle;
    /// Handle to a [`crate::resources::Mesh`] in a [`Scene`].
    pub struct MeshKey;
}
