//! Fixed timestep simulation tick
//!
//! Each body moves along the exact constant-acceleration trajectory. When the
//! candidate end-of-tick position is below the floor, the tick is split at
//! the exact crossing time, the vertical velocity is reflected, and the
//! rest of the tick is integrated from the contact point. This repeats until
//! the remainder of the tick stays above the floor.

use glam::DVec2;

use super::body::Body;
use super::bounce::{Crossing, Impact, SolvePath, crossing_time, impact_at};
use super::config::EngineConfig;
use super::error::{SimError, StepFault};
use super::world::World;
use crate::consts::CONTACT_EPSILON;
use crate::math;

/// What happened to one body during a tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub id: u32,
    /// Floor contacts in time order
    pub impacts: Vec<Impact>,
}

/// New kinematic state for a body, not yet committed
#[derive(Debug, Clone, PartialEq)]
pub struct Advance {
    pub pos: DVec2,
    pub vel: DVec2,
    pub impacts: Vec<Impact>,
}

/// Result of stepping every body once
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// World tick count after this tick
    pub tick: u64,
    pub outcomes: Vec<StepOutcome>,
    /// Bodies left at their pre-tick state
    pub faults: Vec<StepFault>,
}

impl TickReport {
    pub fn is_ok(&self) -> bool {
        self.faults.is_empty()
    }

    pub fn impact_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.impacts.len()).sum()
    }

    /// Fail with the first fault, if any
    pub fn into_result(self) -> Result<Self, SimError> {
        match self.faults.first() {
            Some(fault) => Err(fault.error.clone()),
            None => Ok(self),
        }
    }
}

/// Compute where `body` ends up after one tick of `config.dt`
///
/// Pure: the body is not modified.
pub fn advance_body(body: &Body, config: &EngineConfig) -> Result<Advance, SimError> {
    let id = body.id;
    let ground_y = config.ground_y;
    let accel = body.accel;

    if !(math::is_finite(body.pos) && math::is_finite(body.vel) && math::is_finite(accel)) {
        return Err(SimError::inconsistent(id, "non-finite kinematic state"));
    }
    let depth = body.pos.y - ground_y;
    if depth > CONTACT_EPSILON {
        return Err(SimError::inconsistent(
            id,
            format!("starts {depth} below the floor"),
        ));
    }

    let mut pos = body.pos;
    let mut vel = body.vel;
    let mut remaining = config.dt;
    let mut impacts = Vec::new();

    loop {
        let candidate = math::position_after(pos, vel, accel, remaining);
        if candidate.y <= ground_y {
            pos = candidate;
            vel = math::velocity_after(vel, accel, remaining);
            break;
        }

        if impacts.len() as u32 >= config.max_bounces_per_tick {
            log::debug!(
                "body {id}: {} impacts in one tick, settling on the floor",
                impacts.len()
            );
            (pos, vel) = settle(pos, vel, accel, remaining, ground_y);
            break;
        }

        match crossing_time(pos.y, vel.y, accel.y, ground_y, remaining) {
            Ok(Crossing::At { t, path }) => {
                if path == SolvePath::Linear {
                    log::trace!("body {id}: zero vertical acceleration, linear crossing");
                }
                let elapsed = config.dt - remaining;
                let mut impact = impact_at(pos, vel, accel, t, ground_y);
                pos = impact.position;
                vel = impact.velocity_out;
                remaining = (remaining - t).max(0.0);
                impact.time = elapsed + t;
                impacts.push(impact);
            }
            Ok(Crossing::Resting) => {
                (pos, vel) = settle(pos, vel, accel, remaining, ground_y);
                break;
            }
            Err(err) => {
                // Rounding pushed the candidate a hair past the floor
                if candidate.y - ground_y <= CONTACT_EPSILON {
                    pos = DVec2::new(candidate.x, ground_y);
                    vel = math::velocity_after(vel, accel, remaining);
                    break;
                }
                return Err(SimError::inconsistent(id, err.to_string()));
            }
        }
    }

    if !(math::is_finite(pos) && math::is_finite(vel)) {
        return Err(SimError::inconsistent(id, "non-finite result"));
    }

    Ok(Advance { pos, vel, impacts })
}

/// Keep the body on the floor with no vertical speed; horizontal motion continues
fn settle(pos: DVec2, vel: DVec2, accel: DVec2, t: f64, ground_y: f64) -> (DVec2, DVec2) {
    let horizontal = |v: DVec2| DVec2::new(v.x, 0.0);
    let mut pos = math::position_after(pos, horizontal(vel), horizontal(accel), t);
    pos.y = ground_y;
    (pos, math::velocity_after(horizontal(vel), horizontal(accel), t))
}

/// Fixed-step physics engine
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Validate `config` and build an engine
    pub fn new(config: EngineConfig) -> Result<Self, SimError> {
        config.validate()?;
        log::debug!(
            "Engine: dt={}s gravity={} ground_y={}",
            config.dt,
            config.gravity,
            config.ground_y
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn dt(&self) -> f64 {
        self.config.dt
    }

    /// Advance one body by one tick; on error the body is unchanged
    pub fn step_body(&self, body: &mut Body) -> Result<StepOutcome, SimError> {
        let advance = advance_body(body, &self.config)?;
        body.pos = advance.pos;
        body.vel = advance.vel;
        Ok(StepOutcome {
            id: body.id,
            impacts: advance.impacts,
        })
    }

    /// Advance every body by exactly one `dt`
    pub fn tick(&self, world: &mut World) -> TickReport {
        #[cfg(feature = "parallel")]
        let results: Vec<_> = {
            use rayon::prelude::*;
            world
                .bodies
                .par_iter_mut()
                .map(|body| (body.id, self.step_body(body)))
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let results: Vec<_> = world
            .bodies
            .iter_mut()
            .map(|body| (body.id, self.step_body(body)))
            .collect();

        world.time_ticks += 1;

        let mut report = TickReport {
            tick: world.time_ticks,
            outcomes: Vec::with_capacity(results.len()),
            faults: Vec::new(),
        };
        for (id, result) in results {
            match result {
                Ok(outcome) => {
                    for impact in &outcome.impacts {
                        log::debug!(
                            "tick {}: body {id} hit floor at +{:.6}s, speed {:.3}",
                            report.tick,
                            impact.time,
                            impact.velocity_in.length()
                        );
                    }
                    report.outcomes.push(outcome);
                }
                Err(error) => {
                    log::warn!("tick {}: body {id} not advanced: {error}", report.tick);
                    report.faults.push(StepFault { id, error });
                }
            }
        }

        report
    }
}
