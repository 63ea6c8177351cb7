//! The fixed body collection
//!
//! Bodies are built once at composition time and never created or destroyed
//! by the engine. Iteration order is by id.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::{Body, Shape};
use super::config::EngineConfig;
use super::error::SimError;
use super::frame::{BodyView, Frame};
use crate::consts::CONTACT_EPSILON;
use crate::math;

/// All simulated bodies plus the tick counter
#[derive(Debug, Clone, Default)]
pub struct World {
    /// Bodies sorted by id
    pub bodies: Vec<Body>,
    /// Completed ticks
    pub time_ticks: u64,
}

impl World {
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Body> {
        self.bodies
            .binary_search_by_key(&id, |b| b.id)
            .ok()
            .map(|i| &self.bodies[i])
    }

    /// Immutable copy of every body for the render side
    pub fn snapshot(&self) -> Frame {
        Frame {
            tick: self.time_ticks,
            bodies: self.bodies.iter().map(BodyView::from).collect(),
        }
    }
}

/// Composition-time builder for a [`World`]
///
/// New bodies accelerate with the configured gravity unless added with an
/// explicit acceleration through [`WorldBuilder::add_body`].
#[derive(Debug, Clone)]
pub struct WorldBuilder {
    gravity: DVec2,
    ground_y: f64,
    bodies: Vec<Body>,
    next_id: u32,
}

impl WorldBuilder {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            gravity: config.gravity,
            ground_y: config.ground_y,
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new body ID
    fn next_body_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a box falling under the configured gravity
    pub fn add_box(&mut self, pos: DVec2, vel: DVec2, size: DVec2) -> u32 {
        let id = self.next_body_id();
        self.bodies
            .push(Body::boxed(id, pos, vel, self.gravity, size));
        id
    }

    /// Add a circle falling under the configured gravity
    pub fn add_circle(&mut self, pos: DVec2, vel: DVec2, radius: f64) -> u32 {
        let id = self.next_body_id();
        self.bodies
            .push(Body::circle(id, pos, vel, self.gravity, radius));
        id
    }

    /// Add a body with its own acceleration; its id is reassigned
    pub fn add_body(&mut self, mut body: Body) -> u32 {
        let id = self.next_body_id();
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Scatter `count` boxes above the floor from a seed
    pub fn scatter(&mut self, seed: u64, count: usize) -> &mut Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ceiling = self.ground_y - 400.0;
        for _ in 0..count {
            let pos = DVec2::new(
                rng.random_range(0.0..800.0),
                rng.random_range(ceiling..self.ground_y),
            );
            let vel = DVec2::new(
                rng.random_range(-200.0..200.0),
                rng.random_range(-600.0..600.0),
            );
            let side = rng.random_range(5.0..30.0);
            self.add_box(pos, vel, DVec2::splat(side));
        }
        self
    }

    /// Validate and freeze the collection
    pub fn build(mut self) -> Result<World, SimError> {
        for body in &self.bodies {
            if !(math::is_finite(body.pos) && math::is_finite(body.vel) && math::is_finite(body.accel))
            {
                return Err(SimError::inconsistent(body.id, "non-finite initial state"));
            }
            if body.pos.y > self.ground_y + CONTACT_EPSILON {
                return Err(SimError::BodyBelowBoundary {
                    id: body.id,
                    y: body.pos.y,
                    ground_y: self.ground_y,
                });
            }
            if let Shape::Box { size } = body.shape
                && (size.x < 0.0 || size.y < 0.0)
            {
                return Err(SimError::inconsistent(body.id, "negative box size"));
            }
        }
        self.bodies.sort_by_key(|b| b.id);
        Ok(World {
            bodies: self.bodies,
            time_ticks: 0,
        })
    }
}
