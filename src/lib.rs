//! Ballpit - fixed-step 2D circle physics
//!
//! Core modules:
//! - `sim`: Deterministic simulation (body store, integration, bounds, collisions, spawning)
//! - `params`: Tunable physics parameters with JSON loading
//! - `renderer`: Draw-list extraction for an external renderer

pub mod params;
pub mod renderer;
pub mod sim;

pub use params::Params;
pub use sim::{BodyId, BodyStore, FrameInput, SimState, tick};

/// Simulation configuration constants
pub mod consts {
    /// Canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Velocity added to `vel.y` every frame (pixels/frame²)
    pub const GRAVITY: f32 = 0.5;
    /// Fraction of velocity kept after hitting a wall, ceiling or floor
    pub const WALL_RESTITUTION: f32 = 0.6;
    /// Horizontal velocity multiplier while touching the floor
    pub const FLOOR_FRICTION: f32 = 0.995;
    /// Velocity components below this snap to zero
    pub const STOP_THRESHOLD: f32 = 0.2;
    /// Restitution for body-body impacts
    pub const PAIR_RESTITUTION: f32 = 0.8;

    /// Radius of spawned bodies
    pub const SPAWN_RADIUS: f32 = 20.0;
    /// Bodies created at simulation start
    pub const INITIAL_BODIES: u32 = 5;
    /// Spawn speed range per axis (inclusive, pixels/frame)
    pub const SPAWN_SPEED_MIN: i32 = 1;
    pub const SPAWN_SPEED_MAX: i32 = 5;
    /// Keep-out margin for the initial random placement
    pub const INITIAL_MARGIN: f32 = 20.0;
}

/// Zero `v` if its magnitude is below `threshold`
#[inline]
pub fn snap_to_zero(v: f32, threshold: f32) -> f32 {
    if v.abs() < threshold { 0.0 } else { v }
}
