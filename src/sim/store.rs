//! Body storage
//!
//! The store is the only owner of body state. Every pass borrows it mutably and
//! walks bodies in insertion order, which is also the collision pair order and
//! the draw order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Body, BodyId, Rgb};

/// What the spawner does once the store holds many bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CapacityPolicy {
    /// Grow without limit
    #[default]
    Unbounded,
    /// Refuse spawn requests once `max_bodies` are stored
    Reject { max_bodies: usize },
}

/// Insertion-ordered set of bodies
#[derive(Debug, Clone)]
pub struct BodyStore {
    bodies: Vec<Body>,
    policy: CapacityPolicy,
    next_id: u32,
}

impl BodyStore {
    pub fn new() -> Self {
        Self::with_policy(CapacityPolicy::Unbounded)
    }

    pub fn with_policy(policy: CapacityPolicy) -> Self {
        Self {
            bodies: Vec::new(),
            policy,
            next_id: 1,
        }
    }

    /// Insert a body and return its id
    ///
    /// Always succeeds; the capacity policy is only consulted by the spawner.
    pub fn create_body(&mut self, pos: Vec2, vel: Vec2, radius: f32, color: Rgb) -> BodyId {
        debug_assert!(radius > 0.0, "body radius must be positive");
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body::new(id, pos, vel, radius, color));
        id
    }

    /// Apply `f` to every body in insertion order
    pub fn for_each_body(&mut self, mut f: impl FnMut(&mut Body)) {
        for body in &mut self.bodies {
            f(body);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Body> {
        self.bodies.iter_mut()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        // Ids are assigned sequentially and never removed
        let index = id.0.checked_sub(1)? as usize;
        self.bodies.get(index).filter(|b| b.id == id)
    }

    /// Two distinct bodies by index, `i < j`
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Body, &mut Body) {
        assert!(i < j, "pair_mut requires i < j");
        let (head, tail) = self.bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// True when the capacity policy would refuse another spawn
    pub fn is_full(&self) -> bool {
        match self.policy {
            CapacityPolicy::Unbounded => false,
            CapacityPolicy::Reject { max_bodies } => self.bodies.len() >= max_bodies,
        }
    }

    /// Sum of per-body kinetic energy (unit mass)
    pub fn total_kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}

impl Default for BodyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a BodyStore {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
