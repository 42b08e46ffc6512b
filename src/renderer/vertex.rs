//! Vertex and instance types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::Body;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Per-body instance data for SDF circle rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    /// Center in canvas pixels
    pub center: [f32; 2],
    pub radius: f32,
    _pad: f32, // keep color 16-byte aligned
    pub color: [f32; 4],
}

impl CircleInstance {
    pub fn new(center: [f32; 2], radius: f32, color: [f32; 4]) -> Self {
        Self {
            center,
            radius,
            _pad: 0.0,
            color,
        }
    }

    pub fn from_body(body: &Body) -> Self {
        Self::new(body.center().to_array(), body.radius(), body.color.to_rgba())
    }
}

/// Colors for scene elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
