//! Scene Graph Tests
//!
//! Tests for:
//! - NodeBuilder insertion and root-list bookkeeping
//! - attach: re-parenting, self-attach, missing-parent fallback
//! - remove_node: subtree removal and mesh release
//! - World matrix recomputation after re-parenting

use glam::Vec3;

use formcheck::resources::material::color_from_hex;
use formcheck::resources::{Geometry, Mesh, StandardMaterial};
use formcheck::scene::Scene;

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

fn flat_mesh(name: &str) -> Mesh {
    Mesh::new(
        name,
        Geometry::new(),
        StandardMaterial::new(color_from_hex(0x00D0_D0D0)),
    )
}

// ============================================================================
// Insertion
// ============================================================================

#[test]
fn builder_links_parent_and_child() {
    let mut scene = Scene::new();
    let parent = scene.build_node("parent").build();
    let child = scene.build_node("child").with_parent(parent).build();

    assert!(scene.root_nodes.contains(&parent));
    assert!(!scene.root_nodes.contains(&child));
    assert_eq!(scene.get_node(child).unwrap().parent(), Some(parent));
    assert!(scene.get_node(parent).unwrap().children().contains(&child));
}

// ============================================================================
// Re-parenting
// ============================================================================

#[test]
fn attach_moves_child_between_parents() {
    let mut scene = Scene::new();
    let parent_a = scene.build_node("a").build();
    let parent_b = scene.build_node("b").build();
    let child = scene.build_node("child").with_parent(parent_a).build();

    scene.attach(child, parent_b);

    assert!(
        !scene.get_node(parent_a).unwrap().children().contains(&child),
        "child should leave the old parent"
    );
    assert!(scene.get_node(parent_b).unwrap().children().contains(&child));
    assert_eq!(scene.get_node(child).unwrap().parent(), Some(parent_b));
}

#[test]
fn attach_pulls_a_root_under_a_parent() {
    let mut scene = Scene::new();
    let parent = scene.build_node("parent").build();
    let loose = scene.build_node("loose").build();
    assert!(scene.root_nodes.contains(&loose));

    scene.attach(loose, parent);

    assert!(!scene.root_nodes.contains(&loose));
    assert_eq!(scene.get_node(loose).unwrap().parent(), Some(parent));
}

#[test]
fn attach_to_self_is_ignored() {
    let mut scene = Scene::new();
    let node = scene.build_node("node").build();

    scene.attach(node, node);

    assert_eq!(scene.get_node(node).unwrap().parent(), None);
    assert!(scene.root_nodes.contains(&node));
}

#[test]
fn attach_to_a_removed_parent_keeps_child_at_root() {
    let mut scene = Scene::new();
    let parent = scene.build_node("parent").build();
    let child = scene.build_node("child").build();
    scene.remove_node(parent);

    scene.attach(child, parent);

    assert!(scene.root_nodes.contains(&child));
    assert_eq!(scene.get_node(child).unwrap().parent(), None);
}

#[test]
fn attach_recomputes_world_matrices_under_the_new_parent() {
    let mut scene = Scene::new();
    let anchor = scene.build_node("anchor").with_position(0.0, 1.0, 0.0).build();
    let prop = scene.build_node("prop").with_position(0.0, 0.5, 0.0).build();

    scene.update_matrix_world();
    let before = scene.node_world_position(prop).unwrap();
    assert!(vec3_approx(before, Vec3::new(0.0, 0.5, 0.0)));

    scene.attach(prop, anchor);
    scene.update_matrix_world();

    let after = scene.node_world_position(prop).unwrap();
    assert!(
        vec3_approx(after, Vec3::new(0.0, 1.5, 0.0)),
        "local offset should compose under the new parent, got {after:?}"
    );
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn remove_node_releases_subtree_meshes() {
    let mut scene = Scene::new();
    let parent = scene.build_node("parent").build();

    let upper_key = scene.meshes.insert(flat_mesh("upper"));
    let upper = scene
        .build_node("upper")
        .with_parent(parent)
        .with_mesh(upper_key)
        .build();
    let lower_key = scene.meshes.insert(flat_mesh("lower"));
    scene
        .build_node("lower")
        .with_parent(upper)
        .with_mesh(lower_key)
        .build();

    scene.remove_node(parent);

    assert!(scene.get_node(parent).is_none());
    assert!(scene.get_node(upper).is_none());
    assert!(scene.meshes.is_empty(), "meshes must be released with their nodes");
    assert!(scene.root_nodes.is_empty());
}
