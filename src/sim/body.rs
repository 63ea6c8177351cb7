//! Bodies and their shapes
//!
//! Physics treats every body the same; the shape only matters to the
//! render adapter.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Closed set of drawable extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned rectangle anchored at the body position (top-left)
    Box { size: DVec2 },
    /// Circle centred on the body position
    Circle { radius: f64 },
}

impl Shape {
    /// Axis-aligned bounding size
    pub fn extent(&self) -> DVec2 {
        match *self {
            Shape::Box { size } => size,
            Shape::Circle { radius } => DVec2::splat(radius * 2.0),
        }
    }
}

/// A rigid body moving under constant acceleration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub pos: DVec2,
    pub vel: DVec2,
    /// Constant unless changed from outside the engine
    pub accel: DVec2,
    pub shape: Shape,
}

impl Body {
    pub fn new(id: u32, pos: DVec2, vel: DVec2, accel: DVec2, shape: Shape) -> Self {
        Self {
            id,
            pos,
            vel,
            accel,
            shape,
        }
    }

    /// A box body
    pub fn boxed(id: u32, pos: DVec2, vel: DVec2, accel: DVec2, size: DVec2) -> Self {
        Self::new(id, pos, vel, accel, Shape::Box { size })
    }

    /// A circle body
    pub fn circle(id: u32, pos: DVec2, vel: DVec2, accel: DVec2, radius: f64) -> Self {
        Self::new(id, pos, vel, accel, Shape::Circle { radius })
    }

    #[inline]
    pub fn extent(&self) -> DVec2 {
        self.shape.extent()
    }

    /// Kinetic energy per unit mass
    pub fn specific_kinetic_energy(&self) -> f64 {
        0.5 * self.vel.length_squared()
    }
}
