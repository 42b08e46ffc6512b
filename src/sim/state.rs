//! Simulation state and core body types
//!
//! Positions are stored as the top-left corner of each body's bounding square.
//! Only the collision pass works in center coordinates (see [`Body::center`]).

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::store::BodyStore;
use crate::params::Params;

/// Stable body handle, assigned in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// 8-bit RGB fill color (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA for GPU upload
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// A circular body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    /// Top-left corner of the bounding square
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    radius: f32,
    pub color: Rgb,
}

impl Body {
    pub(super) fn new(id: BodyId, pos: Vec2, vel: Vec2, radius: f32, color: Rgb) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Radius, fixed at creation
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Width and height of the bounding square
    #[inline]
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    /// Geometric center
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }

    /// Kinetic energy assuming unit mass
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.vel.length_squared()
    }
}

/// Lifecycle of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Frames advance normally
    Running,
    /// Host requested close; ticks are ignored
    Closed,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    /// Seed used for spawn colors, velocities and initial placement
    pub seed: u64,
    pub rng_state: RngState,
    pub rng: Pcg32,
    pub params: Params,
    pub store: BodyStore,
    pub phase: SimPhase,
    /// Frames advanced so far
    pub time_ticks: u64,
}

impl SimState {
    /// Create an empty simulation (no initial bodies)
    pub fn empty(seed: u64, params: Params) -> Self {
        let rng_state = RngState::new(seed);
        Self {
            seed,
            rng: rng_state.to_rng(),
            rng_state,
            store: BodyStore::with_policy(params.capacity),
            params,
            phase: SimPhase::Running,
            time_ticks: 0,
        }
    }

    /// Create a simulation with the configured initial body set
    pub fn new(seed: u64, params: Params) -> Self {
        let mut state = Self::empty(seed, params);
        let count = state.params.initial_bodies;
        super::spawn::spawn_initial(&mut state, count);
        log::info!(
            "Simulation started: seed={}, bodies={}, canvas={}x{}",
            seed,
            state.store.len(),
            state.params.canvas_width,
            state.params.canvas_height
        );
        state
    }

    pub fn is_running(&self) -> bool {
        self.phase == SimPhase::Running
    }

    /// Total kinetic energy of all bodies (unit mass)
    pub fn kinetic_energy(&self) -> f32 {
        self.store.total_kinetic_energy()
    }
}
