//! Exact floor crossing and elastic bounce
//!
//! The vertical trajectory inside a tick is `f(t) = a·t² + b·t + c` with
//! `a = accel.y / 2`, `b = vel.y`, `c = pos.y - ground_y`. A body that starts
//! at or above the floor (`c <= 0`) and ends below it crosses where `f` has a
//! root with `f'(t) >= 0`. Depending on the signs of `a` and `c` that can be
//! either root, so both are computed and the earliest entering one wins.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::CONTACT_EPSILON;
use crate::math;

/// Which solve produced the crossing time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolvePath {
    Quadratic,
    /// Zero vertical acceleration: `b·t + c = 0`
    Linear,
}

/// Result of searching a time window for a floor crossing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossing {
    /// Body enters the floor `t` seconds into the window
    At { t: f64, path: SolvePath },
    /// Body sits on the floor with no vertical speed
    Resting,
}

/// Why no crossing time could be produced
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CrossingError {
    #[error("non-finite trajectory coefficients (a = {a}, b = {b}, c = {c})")]
    NonFinite { a: f64, b: f64, c: f64 },
    #[error("body is {depth} below the floor at the start of the window")]
    StartsBelow { depth: f64 },
    #[error("negative discriminant {disc} despite penetration")]
    NegativeDiscriminant { disc: f64 },
    #[error("no entering root within [0, {horizon}]")]
    NoRoot { horizon: f64 },
}

/// Find when a body at `pos_y` first enters the floor within `horizon` seconds
pub fn crossing_time(
    pos_y: f64,
    vel_y: f64,
    accel_y: f64,
    ground_y: f64,
    horizon: f64,
) -> Result<Crossing, CrossingError> {
    let a = 0.5 * accel_y;
    let b = vel_y;
    let c = pos_y - ground_y;

    if !(a.is_finite() && b.is_finite() && c.is_finite() && horizon.is_finite()) {
        return Err(CrossingError::NonFinite { a, b, c });
    }
    if c > CONTACT_EPSILON {
        return Err(CrossingError::StartsBelow { depth: c });
    }
    // Residue from the previous snap
    let c = c.min(0.0);

    if c.abs() <= CONTACT_EPSILON && b.abs() <= CONTACT_EPSILON {
        return Ok(Crossing::Resting);
    }

    let (roots, path) = if a == 0.0 {
        if b == 0.0 {
            return Err(CrossingError::NoRoot { horizon });
        }
        ([-c / b, -c / b], SolvePath::Linear)
    } else {
        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return Err(CrossingError::NegativeDiscriminant { disc });
        }
        // Stable form: avoids cancellation between -b and sqrt(disc)
        let q = -0.5 * (b + b.signum() * disc.sqrt());
        let (r1, r2) = if q == 0.0 { (0.0, 0.0) } else { (q / a, c / q) };
        ([r1.min(r2), r1.max(r2)], SolvePath::Quadratic)
    };

    let slack = CONTACT_EPSILON * horizon.max(1.0);
    roots
        .into_iter()
        .filter(|t| *t >= -slack && *t <= horizon + slack)
        .map(|t| t.clamp(0.0, horizon))
        .find(|t| 2.0 * a * t + b >= 0.0)
        .map(|t| Crossing::At { t, path })
        .ok_or(CrossingError::NoRoot { horizon })
}

/// One exact floor contact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    /// Seconds since the start of the tick
    pub time: f64,
    /// Contact point, `y` exactly on the floor
    pub position: DVec2,
    pub velocity_in: DVec2,
    /// Reflected velocity (vertical flipped, horizontal kept)
    pub velocity_out: DVec2,
}

/// Evaluate the contact `t` seconds after (`pos`, `vel`) and reflect
pub fn impact_at(pos: DVec2, vel: DVec2, accel: DVec2, t: f64, ground_y: f64) -> Impact {
    let mut position = math::position_after(pos, vel, accel, t);
    position.y = ground_y;
    let velocity_in = math::velocity_after(vel, accel, t);
    Impact {
        time: t,
        position,
        velocity_in,
        velocity_out: math::reflect_vertical(velocity_in),
    }
}
