//! Vector math and exact kinematics
//!
//! Vectors are `glam::DVec2` values; every helper here is pure and returns a
//! new value.

use glam::DVec2;

/// 2D vector used for positions, velocities and accelerations
pub type Vector2 = DVec2;

/// Shared origin
pub const ORIGIN: Vector2 = DVec2::ZERO;

/// Uniform scaling of both components
#[inline]
pub fn multiply(v: Vector2, scalar: f64) -> Vector2 {
    multiply_axes(v, scalar, scalar)
}

/// Independent per-axis scaling
#[inline]
pub fn multiply_axes(v: Vector2, sx: f64, sy: f64) -> Vector2 {
    DVec2::new(v.x * sx, v.y * sy)
}

/// Componentwise sum
#[inline]
pub fn add(a: Vector2, b: Vector2) -> Vector2 {
    DVec2::new(a.x + b.x, a.y + b.y)
}

/// Flip the vertical component only
#[inline]
pub fn reflect_vertical(v: Vector2) -> Vector2 {
    multiply_axes(v, 1.0, -1.0)
}

/// Position after `t` seconds of constant acceleration:
/// `pos + vel·t + accel·½t²`
#[inline]
pub fn position_after(pos: Vector2, vel: Vector2, accel: Vector2, t: f64) -> Vector2 {
    add(add(pos, multiply(vel, t)), multiply(accel, 0.5 * t * t))
}

/// Velocity after `t` seconds of constant acceleration
#[inline]
pub fn velocity_after(vel: Vector2, accel: Vector2, t: f64) -> Vector2 {
    add(vel, multiply(accel, t))
}

/// Both components finite
#[inline]
pub fn is_finite(v: Vector2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_is_uniform() {
        let v = DVec2::new(3.0, -4.0);
        assert_eq!(multiply(v, 2.0), DVec2::new(6.0, -8.0));
        assert_eq!(multiply(v, 2.0), multiply_axes(v, 2.0, 2.0));
    }

    #[test]
    fn test_reflect_vertical_keeps_horizontal() {
        let v = DVec2::new(12.5, 300.0);
        let r = reflect_vertical(v);
        assert_eq!(r.x, 12.5);
        assert_eq!(r.y, -300.0);
        // Operand untouched
        assert_eq!(v.y, 300.0);
    }

    #[test]
    fn test_position_after_matches_free_fall() {
        let g = DVec2::new(0.0, 1500.0);
        let p = position_after(DVec2::new(0.0, 300.0), ORIGIN, g, 0.2);
        // 300 + 0.5 * 1500 * 0.04
        assert!((p.y - 330.0).abs() < 1e-12);
        assert_eq!(p.x, 0.0);
    }

    #[test]
    fn test_velocity_after() {
        let v = velocity_after(DVec2::new(5.0, -10.0), DVec2::new(0.0, 100.0), 0.5);
        assert_eq!(v, DVec2::new(5.0, 40.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(is_finite(DVec2::new(1.0, 2.0)));
        assert!(!is_finite(DVec2::new(f64::NAN, 2.0)));
        assert!(!is_finite(DVec2::new(0.0, f64::INFINITY)));
    }
}
