//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed per-frame step only
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod collision;
pub mod integrate;
pub mod spawn;
pub mod state;
pub mod store;
pub mod tick;

pub use bounds::{Bounds, BoundsReport, BoundsResponse, resolve_bounds};
pub use collision::{CollisionReport, Contact, PairOutcome, circle_contact, resolve_collisions};
pub use integrate::integrate;
pub use spawn::{spawn_at, spawn_initial};
pub use state::{Body, BodyId, Rgb, SimPhase, SimState};
pub use store::{BodyStore, CapacityPolicy};
pub use tick::{FrameInput, FrameReport, tick};
