use glam::Affine3A;

use crate::scene::transform::Transform;
use crate::scene::{MeshKey, NodeHandle};

/// A scene node: a named pivot with hierarchy and transform.
///
/// # Naming
///
/// `name` is the animation binding contract: keyframe tracks address nodes
/// by exact string match against this field. Joint pivots use the frozen
/// [`crate::mannequin::JointName`] values; renaming a node after tracks have
/// been authored makes those tracks silently inert.
///
/// # Hierarchy
///
/// Nodes form a tree through parent-child relationships:
/// - `parent`: optional handle to the parent node (None for root nodes)
/// - `children`: list of child node handles
#[derive(Debug, Clone)]
pub struct Node {
    /// Node name; exact-match target for animation track binding.
    pub name: String,

    // === Core Hierarchy ===
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    // === Core Spatial Data ===
    /// Transform component (hot data, mutated every animation tick)
    pub transform: Transform,

    // === Components ===
    /// Attached mesh, if this node carries renderable geometry.
    pub mesh: Option<MeshKey>,
}

impl Node {
    /// Creates a new detached node with a default transform.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            mesh: None,
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Returns the world transformation matrix.
    ///
    /// Valid after [`crate::scene::Scene::update_matrix_world`] has run.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}
