//! Body spawning
//!
//! Click spawns and the initial body set share the same rules: fixed radius,
//! random color, random velocity with each axis in `SPAWN_SPEED_MIN..=SPAWN_SPEED_MAX`.
//! All randomness comes from the simulation's seeded RNG.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{BodyId, Rgb, SimState};
use super::store::BodyStore;
use crate::consts::{INITIAL_MARGIN, SPAWN_SPEED_MAX, SPAWN_SPEED_MIN};

/// Random opaque color
pub fn random_color(rng: &mut Pcg32) -> Rgb {
    Rgb::new(rng.random(), rng.random(), rng.random())
}

/// Random launch velocity, whole pixels per frame on each axis
pub fn random_velocity(rng: &mut Pcg32) -> Vec2 {
    Vec2::new(
        rng.random_range(SPAWN_SPEED_MIN..=SPAWN_SPEED_MAX) as f32,
        rng.random_range(SPAWN_SPEED_MIN..=SPAWN_SPEED_MAX) as f32,
    )
}

/// Insert a body with its top-left corner at `point`
///
/// The point is not validated; off-canvas spawns are pulled in by the next
/// boundary pass. Returns `None` only when the store's capacity policy refuses.
pub fn spawn_at(store: &mut BodyStore, rng: &mut Pcg32, point: Vec2, radius: f32) -> Option<BodyId> {
    if store.is_full() {
        log::debug!("Spawn at {point:?} rejected: store full ({} bodies)", store.len());
        return None;
    }

    let color = random_color(rng);
    let vel = random_velocity(rng);
    let id = store.create_body(point, vel, radius, color);
    log::debug!("Spawned {id:?} at {point:?} vel={vel:?}");
    Some(id)
}

/// Uniform sample in `[lo, hi)`, or `lo` when the range is empty
fn sample_axis(rng: &mut Pcg32, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

/// Create the starting bodies at random positions inside the canvas margin
pub fn spawn_initial(state: &mut SimState, count: u32) {
    let width = state.params.canvas_width;
    let height = state.params.canvas_height;
    let radius = state.params.spawn_radius;

    for _ in 0..count {
        let x = sample_axis(&mut state.rng, INITIAL_MARGIN, width - INITIAL_MARGIN);
        let y = sample_axis(&mut state.rng, INITIAL_MARGIN, height - INITIAL_MARGIN);
        let color = random_color(&mut state.rng);
        let vel = random_velocity(&mut state.rng);
        state.store.create_body(Vec2::new(x, y), vel, radius, color);
    }
}
