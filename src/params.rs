//! Physics tuning parameters
//!
//! Loaded from JSON when the host provides a file; anything missing or invalid
//! falls back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Bounds, CapacityPolicy};

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Forces ===
    /// Per-frame velocity increment on y (not scaled by dt)
    pub gravity: f32,

    // === Contacts ===
    /// Wall, ceiling and floor bounce factor
    pub wall_restitution: f32,
    /// Horizontal damping while in floor contact
    pub floor_friction: f32,
    /// Velocity components below this snap to zero after a bounce or friction
    pub stop_threshold: f32,
    /// Body-body bounce factor (equal mass)
    pub pair_restitution: f32,

    // === Spawning ===
    pub spawn_radius: f32,
    pub initial_bodies: u32,
    pub capacity: CapacityPolicy,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            gravity: GRAVITY,

            wall_restitution: WALL_RESTITUTION,
            floor_friction: FLOOR_FRICTION,
            stop_threshold: STOP_THRESHOLD,
            pair_restitution: PAIR_RESTITUTION,

            spawn_radius: SPAWN_RADIUS,
            initial_bodies: INITIAL_BODIES,
            capacity: CapacityPolicy::Unbounded,
        }
    }
}

impl Params {
    /// Parse parameters from JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Params>(json) {
            Ok(params) => params.sanitized(),
            Err(e) => {
                log::warn!("Invalid params JSON ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Load parameters from a JSON file, falling back to defaults on error
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded params from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Could not read {} ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> String {
        // Only plain numbers and a unit/struct enum; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Replace out-of-range values with their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        fn fix(name: &str, ok: bool, value: &mut f32, default: f32) {
            if !ok {
                log::warn!("Param {name}={value} out of range, using {default}");
                *value = default;
            }
        }

        let positive = |v: f32| v.is_finite() && v > 0.0;
        let unit = |v: f32| v.is_finite() && (0.0..=1.0).contains(&v);

        fix("canvas_width", positive(self.canvas_width), &mut self.canvas_width, defaults.canvas_width);
        fix("canvas_height", positive(self.canvas_height), &mut self.canvas_height, defaults.canvas_height);
        fix("gravity", self.gravity.is_finite(), &mut self.gravity, defaults.gravity);
        fix("wall_restitution", unit(self.wall_restitution), &mut self.wall_restitution, defaults.wall_restitution);
        fix("floor_friction", unit(self.floor_friction), &mut self.floor_friction, defaults.floor_friction);
        fix("stop_threshold", self.stop_threshold.is_finite() && self.stop_threshold >= 0.0, &mut self.stop_threshold, defaults.stop_threshold);
        fix("pair_restitution", unit(self.pair_restitution), &mut self.pair_restitution, defaults.pair_restitution);
        fix("spawn_radius", positive(self.spawn_radius), &mut self.spawn_radius, defaults.spawn_radius);

        // A body wider than the canvas can never satisfy the clamp
        if 2.0 * self.spawn_radius > self.canvas_width.min(self.canvas_height) {
            log::warn!(
                "spawn_radius {} does not fit a {}x{} canvas, using {}",
                self.spawn_radius,
                self.canvas_width,
                self.canvas_height,
                defaults.spawn_radius
            );
            self.spawn_radius = defaults.spawn_radius;
        }

        self
    }

    /// Canvas rectangle used by the boundary pass
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.canvas_width, self.canvas_height)
    }
}
