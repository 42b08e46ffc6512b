//! Rectangular canvas bounds: wall, ceiling and floor response
//!
//! Checks run in a fixed order per body (side walls, ceiling, floor, hard clamp)
//! because later steps may correct positions an earlier one left out of range.
//!
//! Detection is discrete, so a body fast enough to cross a wall within one frame
//! is not swept back; the hard clamp only guarantees it ends up inside.

use serde::{Deserialize, Serialize};

use super::state::Body;
use super::store::BodyStore;
use crate::snap_to_zero;

/// Canvas rectangle, origin at the top-left, y pointing down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if the body satisfies the post-resolve position invariant
    pub fn contains(&self, body: &Body) -> bool {
        body.pos.x >= 0.0
            && body.pos.x + body.diameter() <= self.width
            && body.pos.y + body.diameter() <= self.height
    }
}

/// Contact coefficients for the boundary pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsResponse {
    /// Bounce factor for walls, ceiling and floor
    pub restitution: f32,
    /// Horizontal damping during floor contact
    pub friction: f32,
    pub stop_threshold: f32,
}

/// Per-frame boundary contact counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundsReport {
    pub wall_hits: u32,
    pub ceiling_hits: u32,
    pub floor_contacts: u32,
    pub clamped: u32,
}

/// Resolve one body against the canvas
pub fn resolve_body(body: &mut Body, bounds: Bounds, resp: &BoundsResponse, report: &mut BoundsReport) {
    let size = body.diameter();

    // Side walls
    if body.pos.x <= 0.0 || body.pos.x + size >= bounds.width {
        body.vel.x = snap_to_zero(-body.vel.x * resp.restitution, resp.stop_threshold);
        report.wall_hits += 1;
    }

    // Ceiling
    if body.pos.y <= 0.0 {
        body.vel.y = snap_to_zero(-body.vel.y * resp.restitution, resp.stop_threshold);
        report.ceiling_hits += 1;
    }

    // Floor: snap out of the ground, bounce, then rolling friction
    if body.pos.y + size >= bounds.height {
        body.pos.y = bounds.height - size;
        body.vel.y = snap_to_zero(-body.vel.y * resp.restitution, resp.stop_threshold);
        body.vel.x = snap_to_zero(body.vel.x * resp.friction, resp.stop_threshold);
        report.floor_contacts += 1;
    }

    // Hard horizontal clamp
    if body.pos.x < 0.0 {
        body.pos.x = 0.0;
        report.clamped += 1;
    }
    if body.pos.x + size > bounds.width {
        body.pos.x = bounds.width - size;
        report.clamped += 1;
    }
}

/// Resolve every body in the store against the canvas
pub fn resolve_bounds(store: &mut BodyStore, bounds: Bounds, resp: &BoundsResponse) -> BoundsReport {
    let mut report = BoundsReport::default();
    store.for_each_body(|body| resolve_body(body, bounds, resp, &mut report));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Rgb;
    use glam::Vec2;
    use proptest::prelude::*;

    const BOUNDS: Bounds = Bounds::new(800.0, 600.0);
    const RESP: BoundsResponse = BoundsResponse {
        restitution: 0.6,
        friction: 0.995,
        stop_threshold: 0.2,
    };

    fn single(pos: Vec2, vel: Vec2) -> BodyStore {
        let mut store = BodyStore::new();
        store.create_body(pos, vel, 20.0, Rgb::default());
        store
    }

    #[test]
    fn test_interior_body_untouched() {
        let mut store = single(Vec2::new(300.0, 200.0), Vec2::new(3.0, -2.0));
        let report = resolve_bounds(&mut store, BOUNDS, &RESP);
        assert_eq!(report, BoundsReport::default());
        assert_eq!(store.bodies()[0].vel, Vec2::new(3.0, -2.0));
        assert_eq!(store.bodies()[0].pos, Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_right_wall_reflects_and_clamps() {
        let mut store = single(Vec2::new(770.0, 200.0), Vec2::new(5.0, 0.0));
        let report = resolve_bounds(&mut store, BOUNDS, &RESP);
        let b = &store.bodies()[0];
        assert_eq!(b.vel.x, -5.0 * 0.6);
        assert_eq!(b.pos.x, 760.0);
        assert_eq!(report.wall_hits, 1);
        assert_eq!(report.clamped, 1);
    }

    #[test]
    fn test_left_wall_small_bounce_stops() {
        let mut store = single(Vec2::new(-1.0, 200.0), Vec2::new(-0.3, 0.0));
        resolve_bounds(&mut store, BOUNDS, &RESP);
        let b = &store.bodies()[0];
        // 0.3 * 0.6 = 0.18 < 0.2
        assert_eq!(b.vel.x, 0.0);
        assert_eq!(b.pos.x, 0.0);
    }

    #[test]
    fn test_ceiling_reflects_without_clamp() {
        let mut store = single(Vec2::new(300.0, -4.0), Vec2::new(0.0, -10.0));
        let report = resolve_bounds(&mut store, BOUNDS, &RESP);
        let b = &store.bodies()[0];
        assert_eq!(b.vel.y, 10.0 * 0.6);
        // Vertical lower bound is not clamped
        assert_eq!(b.pos.y, -4.0);
        assert_eq!(report.ceiling_hits, 1);
    }

    #[test]
    fn test_floor_snaps_bounces_and_applies_friction() {
        let mut store = single(Vec2::new(300.0, 575.0), Vec2::new(4.0, 10.0));
        let report = resolve_bounds(&mut store, BOUNDS, &RESP);
        let b = &store.bodies()[0];
        assert_eq!(b.pos.y, 560.0);
        assert_eq!(b.vel.y, -10.0 * 0.6);
        assert_eq!(b.vel.x, 4.0 * 0.995);
        assert_eq!(report.floor_contacts, 1);
    }

    #[test]
    fn test_no_friction_in_the_air() {
        let mut store = single(Vec2::new(300.0, 100.0), Vec2::new(4.0, 1.0));
        resolve_bounds(&mut store, BOUNDS, &RESP);
        assert_eq!(store.bodies()[0].vel.x, 4.0);
    }

    #[test]
    fn test_stop_threshold_holds_at_rest() {
        // Resting on the floor; friction takes 0.15 below the threshold
        let mut store = single(Vec2::new(300.0, 560.0), Vec2::new(0.15, 0.0));
        resolve_bounds(&mut store, BOUNDS, &RESP);
        assert_eq!(store.bodies()[0].vel.x, 0.0);

        // A further frame without gravity must not reintroduce drift
        crate::sim::integrate::integrate(&mut store, 0.0);
        resolve_bounds(&mut store, BOUNDS, &RESP);
        let b = &store.bodies()[0];
        assert_eq!(b.vel, Vec2::ZERO);
        assert_eq!(b.pos, Vec2::new(300.0, 560.0));
    }

    #[test]
    fn test_resting_body_stays_resting_under_gravity() {
        let mut store = single(Vec2::new(300.0, 560.0), Vec2::ZERO);
        for _ in 0..10 {
            crate::sim::integrate::integrate(&mut store, 0.5);
            resolve_bounds(&mut store, BOUNDS, &RESP);
        }
        let b = &store.bodies()[0];
        // Gravity presses it into the floor every frame; the snap holds it there
        assert_eq!(b.pos.y, 560.0);
        assert_eq!(b.vel.x, 0.0);
    }

    #[test]
    fn test_origin_spawn_stays_put() {
        let mut store = single(Vec2::ZERO, Vec2::new(3.0, 2.0));
        resolve_bounds(&mut store, BOUNDS, &RESP);
        let b = &store.bodies()[0];
        assert_eq!(b.pos, Vec2::ZERO);
        assert!(BOUNDS.contains(b));
    }

    #[test]
    fn test_tunneling_is_clamped_inside() {
        let mut store = single(Vec2::new(5000.0, 100.0), Vec2::new(4000.0, 0.0));
        resolve_bounds(&mut store, BOUNDS, &RESP);
        let b = &store.bodies()[0];
        assert_eq!(b.pos.x, 760.0);
        assert!(b.vel.x < 0.0);
    }

    proptest! {
        #[test]
        fn prop_position_invariant_after_resolve(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            vx in -100.0f32..100.0,
            vy in -100.0f32..100.0,
            r in 1.0f32..200.0,
        ) {
            let mut store = BodyStore::new();
            store.create_body(Vec2::new(x, y), Vec2::new(vx, vy), r, Rgb::default());
            resolve_bounds(&mut store, BOUNDS, &RESP);
            let b = &store.bodies()[0];
            prop_assert!(b.pos.x >= 0.0);
            prop_assert!(b.pos.x + 2.0 * r <= BOUNDS.width + 1e-3);
            prop_assert!(b.pos.y + 2.0 * r <= BOUNDS.height + 1e-3);
        }

        #[test]
        fn prop_resolve_never_gains_speed(
            x in -200.0f32..1000.0,
            y in -200.0f32..800.0,
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
        ) {
            let mut store = BodyStore::new();
            store.create_body(Vec2::new(x, y), Vec2::new(vx, vy), 20.0, Rgb::default());
            let before = store.total_kinetic_energy();
            resolve_bounds(&mut store, BOUNDS, &RESP);
            prop_assert!(store.total_kinetic_energy() <= before);
        }
    }
}
