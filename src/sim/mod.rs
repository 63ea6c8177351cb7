//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Exact constant-acceleration integration, no Euler steps
//! - Stable iteration order (by body ID)
//! - No rendering or platform dependencies

pub mod body;
pub mod bounce;
pub mod config;
pub mod driver;
pub mod error;
pub mod frame;
pub mod tick;
pub mod world;

pub use body::{Body, Shape};
pub use bounce::{Crossing, CrossingError, Impact, SolvePath, crossing_time};
pub use config::{ConfigError, EngineConfig};
pub use driver::FixedStepper;
pub use error::{SimError, StepFault};
pub use frame::{BodyView, Frame, FrameSlot};
pub use tick::{Advance, Engine, StepOutcome, TickReport, advance_body};
pub use world::{World, WorldBuilder};
