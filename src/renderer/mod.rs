//! Render adapter
//!
//! Turns a [`Frame`] into triangle-list vertices. Drawing them is up to the
//! host; physics never calls into this module.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::sim::Frame;
use glam::DVec2;

/// Segments used to tessellate circles
pub const CIRCLE_SEGMENTS: u32 = 24;
/// Floor band thickness in pixels
pub const FLOOR_THICKNESS: f64 = 2.0;

/// Vertices for the floor and every body in `frame`
pub fn frame_vertices(frame: &Frame, ground_y: f64, arena_width: f64) -> Vec<Vertex> {
    let mut vertices = shapes::rect(
        DVec2::new(0.0, ground_y),
        DVec2::new(arena_width, FLOOR_THICKNESS),
        colors::FLOOR,
    );
    for view in &frame.bodies {
        vertices.extend(shapes::body(view, CIRCLE_SEGMENTS));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::ORIGIN;
    use crate::sim::{EngineConfig, WorldBuilder};

    #[test]
    fn test_frame_vertices() {
        let config = EngineConfig::default();
        let mut builder = WorldBuilder::new(&config);
        builder.add_box(DVec2::new(0.0, 300.0), ORIGIN, DVec2::splat(10.0));
        builder.add_circle(DVec2::new(50.0, 300.0), ORIGIN, 5.0);
        let world = builder.build().unwrap();

        let vertices = frame_vertices(&world.snapshot(), config.ground_y, 800.0);
        assert_eq!(vertices.len(), 6 + 6 + 3 * CIRCLE_SEGMENTS as usize);
        // Floor band comes first, bodies are colored by speed
        assert!(vertices[..6].iter().all(|v| v.color == colors::FLOOR));
        assert!(vertices[6..].iter().all(|v| v.color != colors::FLOOR));
        assert_eq!(
            Vertex::as_bytes(&vertices).len(),
            vertices.len() * std::mem::size_of::<Vertex>()
        );
    }
}
