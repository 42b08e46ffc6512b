//! Fixed-step frame advance
//!
//! Per frame: spawn requests, integration, boundary response, pairwise collisions.

use glam::Vec2;

use super::bounds::{BoundsReport, BoundsResponse, resolve_bounds};
use super::collision::{CollisionReport, resolve_collisions};
use super::integrate::integrate;
use super::spawn::spawn_at;
use super::state::{SimPhase, SimState};

/// Input events drained by the host for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer clicks; each spawns a body with its top-left corner at the point
    pub spawns: Vec<Vec2>,
    /// Window closed
    pub close: bool,
}

impl FrameInput {
    pub fn click(x: f32, y: f32) -> Self {
        Self {
            spawns: vec![Vec2::new(x, y)],
            ..Default::default()
        }
    }

    pub fn close() -> Self {
        Self {
            close: true,
            ..Default::default()
        }
    }
}

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub spawned: u32,
    pub rejected: u32,
    pub bounds: BoundsReport,
    pub collisions: CollisionReport,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState, input: &FrameInput) -> FrameReport {
    let mut report = FrameReport::default();

    if state.phase == SimPhase::Closed {
        return report;
    }

    if input.close {
        state.phase = SimPhase::Closed;
        log::info!(
            "Simulation closed after {} frames with {} bodies",
            state.time_ticks,
            state.store.len()
        );
        return report;
    }

    let params = &state.params;

    for &point in &input.spawns {
        match spawn_at(&mut state.store, &mut state.rng, point, params.spawn_radius) {
            Some(_) => report.spawned += 1,
            None => report.rejected += 1,
        }
    }

    integrate(&mut state.store, params.gravity);

    let resp = BoundsResponse {
        restitution: params.wall_restitution,
        friction: params.floor_friction,
        stop_threshold: params.stop_threshold,
    };
    report.bounds = resolve_bounds(&mut state.store, params.bounds(), &resp);
    report.collisions = resolve_collisions(&mut state.store, params.pair_restitution);

    state.time_ticks += 1;
    log::trace!("Frame {}: {:?}", state.time_ticks, report);

    report
}
