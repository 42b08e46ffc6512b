//! Pairwise circle collision detection and response
//!
//! Bodies are stored by their top-left corner; this pass converts to centers,
//! pushes overlapping pairs apart symmetrically and applies an equal-mass
//! impulse along the contact normal.
//!
//! Each pair is resolved once per frame, in store order. Clusters of three or
//! more overlapping bodies may need several frames to fully separate.

use glam::Vec2;

use super::state::Body;
use super::store::BodyStore;

/// Normal used when two centers coincide exactly
pub const DEGENERATE_NORMAL: Vec2 = Vec2::X;

/// Overlap between two circles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from A's center toward B's center
    pub normal: Vec2,
    /// Total overlap along the normal (`min_dist - dist`)
    pub penetration: f32,
    /// Centers coincided; `normal` is [`DEGENERATE_NORMAL`]
    pub degenerate: bool,
}

/// Result of resolving one pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// Circles do not overlap
    Apart,
    /// Pushed apart; already separating so velocities were left alone
    Separated { degenerate: bool },
    /// Pushed apart and an impulse was applied
    Bounced { degenerate: bool },
}

/// Per-frame collision statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub pairs_tested: u32,
    pub contacts: u32,
    pub impulses: u32,
    pub degenerate: u32,
}

/// Check two circles for overlap
///
/// Touching circles (`dist == r_a + r_b`) do not count as a contact.
pub fn circle_contact(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> Option<Contact> {
    let delta = center_b - center_a;
    let dist = delta.length();
    let min_dist = radius_a + radius_b;

    if dist >= min_dist {
        return None;
    }

    if dist == 0.0 {
        return Some(Contact {
            normal: DEGENERATE_NORMAL,
            penetration: min_dist,
            degenerate: true,
        });
    }

    Some(Contact {
        normal: delta / dist,
        penetration: min_dist - dist,
        degenerate: false,
    })
}

/// Move both bodies half the penetration apart along the normal
#[inline]
pub fn separate(a: &mut Body, b: &mut Body, contact: &Contact) {
    let push = contact.normal * (contact.penetration / 2.0);
    a.pos -= push;
    b.pos += push;
}

/// Equal-mass impulse along `normal` with restitution `e`
///
/// Returns false when the bodies are already separating or moving in parallel.
pub fn apply_impulse(a: &mut Body, b: &mut Body, normal: Vec2, e: f32) -> bool {
    // Negative means B closes in on A along the normal
    let vel_along_normal = (b.vel - a.vel).dot(normal);
    if vel_along_normal >= 0.0 {
        return false;
    }

    let j = -(1.0 + e) * vel_along_normal / 2.0;
    let impulse = normal * j;
    a.vel -= impulse;
    b.vel += impulse;
    true
}

/// Detect and resolve one pair
pub fn resolve_pair(a: &mut Body, b: &mut Body, restitution: f32) -> PairOutcome {
    let Some(contact) = circle_contact(a.center(), a.radius(), b.center(), b.radius()) else {
        return PairOutcome::Apart;
    };

    if contact.degenerate {
        log::warn!(
            "Bodies {:?} and {:?} share a center at {:?}; separating along +x",
            a.id,
            b.id,
            a.center()
        );
    }

    let degenerate = contact.degenerate;
    separate(a, b, &contact);
    if apply_impulse(a, b, contact.normal, restitution) {
        PairOutcome::Bounced { degenerate }
    } else {
        PairOutcome::Separated { degenerate }
    }
}

/// Resolve every unordered pair `(i, j)`, `i < j`, in store order
pub fn resolve_collisions(store: &mut BodyStore, restitution: f32) -> CollisionReport {
    let mut report = CollisionReport::default();
    let n = store.len();

    for i in 0..n {
        for j in (i + 1)..n {
            report.pairs_tested += 1;
            let (a, b) = store.pair_mut(i, j);
            let degenerate = match resolve_pair(a, b, restitution) {
                PairOutcome::Apart => continue,
                PairOutcome::Separated { degenerate } => degenerate,
                PairOutcome::Bounced { degenerate } => {
                    report.impulses += 1;
                    degenerate
                }
            };
            report.contacts += 1;
            if degenerate {
                report.degenerate += 1;
            }
        }
    }

    report
}
