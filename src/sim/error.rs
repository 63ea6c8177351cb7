//! Simulation error types

use thiserror::Error;

/// Errors raised by engine construction and stepping
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Engine configuration rejected before any tick runs
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Body state cannot be advanced without producing non-finite values
    #[error("inconsistent state for body {id}: {reason}")]
    InconsistentState { id: u32, reason: String },
    /// Body placed under the floor at composition time
    #[error("body {id} starts below the floor (y = {y}, ground_y = {ground_y})")]
    BodyBelowBoundary { id: u32, y: f64, ground_y: f64 },
}

impl SimError {
    pub(crate) fn inconsistent(id: u32, reason: impl Into<String>) -> Self {
        SimError::InconsistentState {
            id,
            reason: reason.into(),
        }
    }
}

/// A body whose tick failed; its state was left untouched
#[derive(Debug, Clone, PartialEq)]
pub struct StepFault {
    pub id: u32,
    pub error: SimError,
}
