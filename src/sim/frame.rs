//! Render hand-off
//!
//! The renderer never reads live bodies. The engine side publishes whole
//! [`Frame`]s into a [`FrameSlot`]; readers clone the latest `Arc<Frame>`,
//! so position and velocity of a body are always from the same tick.

use std::sync::{Arc, PoisonError, RwLock};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Shape};

/// One body as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyView {
    pub id: u32,
    pub pos: DVec2,
    pub vel: DVec2,
    pub shape: Shape,
}

impl From<&Body> for BodyView {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            pos: body.pos,
            vel: body.vel,
            shape: body.shape,
        }
    }
}

/// Snapshot of the world after a completed tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub bodies: Vec<BodyView>,
}

/// Shared latest-frame slot (double buffer between physics and render)
#[derive(Debug, Clone, Default)]
pub struct FrameSlot {
    inner: Arc<RwLock<Arc<Frame>>>,
}

impl FrameSlot {
    pub fn new(frame: Frame) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(frame))),
        }
    }

    /// Replace the current frame
    pub fn publish(&self, frame: Frame) {
        let frame = Arc::new(frame);
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = frame;
    }

    /// Latest complete frame
    pub fn latest(&self) -> Arc<Frame> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }
}
