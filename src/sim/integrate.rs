//! Fixed-step integration
//!
//! Gravity is a per-frame velocity increment, not an acceleration scaled by a
//! time step, so the simulation speed is tied to the host frame rate.

use super::state::Body;
use super::store::BodyStore;

/// Advance one body by one frame: gravity first, then displacement
#[inline]
pub fn integrate_body(body: &mut Body, gravity: f32) {
    body.vel.y += gravity;
    body.pos += body.vel;
}

/// Advance every body in the store by one frame
pub fn integrate(store: &mut BodyStore, gravity: f32) {
    store.for_each_body(|body| integrate_body(body, gravity));
}
