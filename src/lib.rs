//! Bounce Sim - rigid boxes falling onto a floor, stepped exactly
//!
//! Core modules:
//! - `math`: Vector helpers and closed-form constant-acceleration kinematics
//! - `sim`: Deterministic simulation (bodies, world, engine tick, floor bounce)
//! - `renderer`: Frame-to-vertex adapter for an external renderer

pub mod math;
pub mod renderer;
pub mod sim;

pub use math::{ORIGIN, Vector2};
pub use sim::{
    Body, Engine, EngineConfig, Frame, FrameSlot, Shape, SimError, TickReport, World, WorldBuilder,
};

/// Simulation defaults
pub mod consts {
    use glam::DVec2;

    /// Fixed simulation timestep (100 Hz)
    pub const DEFAULT_DT: f64 = 0.01;
    /// Downward gravity in pixels/s² (+y points down)
    pub const DEFAULT_GRAVITY: DVec2 = DVec2::new(0.0, 1500.0);
    /// Floor line
    pub const DEFAULT_GROUND_Y: f64 = 600.0;
    /// Impacts resolved inside one tick before the body is settled on the floor
    pub const DEFAULT_MAX_BOUNCES_PER_TICK: u32 = 16;

    /// Maximum ticks per driver call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock frame the driver will bank (seconds)
    pub const MAX_FRAME_TIME: f64 = 0.1;

    /// Tolerance for "exactly on the floor" and root clamping
    pub const CONTACT_EPSILON: f64 = 1e-9;
}
