//! Shape generation for 2D primitives

use glam::DVec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::{BodyView, Shape};

/// Speed mapped to the hot end of the gradient (pixels/s)
pub const MAX_DISPLAY_SPEED: f64 = 1000.0;

/// Interpolate color based on speed (slow=blue, medium=green, fast=red/orange)
pub fn velocity_color(speed: f64, alpha: f32) -> [f32; 4] {
    let t = (speed / MAX_DISPLAY_SPEED).clamp(0.0, 1.0) as f32;

    // Gradient: blue (rest) -> cyan -> green -> yellow -> orange -> red (fast)
    let (r, g, b) = if t < 0.25 {
        // Blue to cyan
        let u = t / 0.25;
        (0.2, 0.4 + 0.4 * u, 1.0)
    } else if t < 0.5 {
        // Cyan to green
        let u = (t - 0.25) / 0.25;
        (0.2, 0.8, 1.0 - 0.6 * u)
    } else if t < 0.75 {
        // Green to yellow
        let u = (t - 0.5) / 0.25;
        (0.2 + 0.8 * u, 0.8, 0.4 - 0.2 * u)
    } else {
        // Yellow to red/orange
        let u = (t - 0.75) / 0.25;
        (1.0, 0.8 - 0.5 * u, 0.2)
    };

    [r, g, b, alpha]
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: DVec2, size: DVec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (min.x as f32, min.y as f32);
    let (x1, y1) = ((min.x + size.x) as f32, (min.y + size.y) as f32);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: DVec2, radius: f64, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let (cx, cy, radius) = (center.x as f32, center.y as f32, radius as f32);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(cx, cy, color));
        vertices.push(Vertex::new(
            cx + radius * theta1.cos(),
            cy + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            cx + radius * theta2.cos(),
            cy + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Vertices for one body, colored by speed
pub fn body(view: &BodyView, segments: u32) -> Vec<Vertex> {
    let color = velocity_color(view.vel.length(), 1.0);
    match view.shape {
        Shape::Box { size } => rect(view.pos, size, color),
        Shape::Circle { radius } => circle(view.pos, radius, color, segments),
    }
}
