//! Draw-list extraction
//!
//! The simulation does not own a window or GPU. Hosts either upload
//! [`CircleInstance`]s and draw SDF circles, or take ready-made triangles from
//! [`shapes`]. Both are produced in store order, so later bodies draw on top.

pub mod shapes;
pub mod vertex;

pub use vertex::{CircleInstance, Vertex};

use crate::sim::BodyStore;

/// One instance per body, in draw order
pub fn extract_instances(store: &BodyStore) -> Vec<CircleInstance> {
    store.iter().map(CircleInstance::from_body).collect()
}

/// Triangle list for the whole scene (background quad first)
pub fn scene_vertices(store: &BodyStore, width: f32, height: f32, segments: u32) -> Vec<Vertex> {
    let mut vertices = shapes::rect(0.0, 0.0, width, height, vertex::colors::BACKGROUND);
    for body in store {
        vertices.extend(shapes::circle(
            body.center(),
            body.radius(),
            body.color.to_rgba(),
            segments,
        ));
    }
    vertices
}
