//! Circular orbit kinematics

use bevy::prelude::*;
use std::f32::consts::TAU;

/// Spin added to each planet per frame (radians about its own Y axis)
pub const PLANET_SPIN_PER_FRAME: f32 = 0.02;

/// Position on a circular orbit of radius `distance` in the XZ plane
pub fn orbit_position(angle: f32, distance: f32) -> Vec3 {
    Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance)
}

/// Angle after one frame at `speed`, where `time_scale` is radians per unit speed
pub fn advance_angle(angle: f32, speed: f32, time_scale: f32) -> f32 {
    angle + speed * time_scale
}

/// Wrap an angle into [0, TAU) for display and long sessions
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_orbit_position_cardinal_angles() {
        assert!((orbit_position(0.0, 15.0) - Vec3::new(15.0, 0.0, 0.0)).length() < EPSILON);
        assert!((orbit_position(FRAC_PI_2, 15.0) - Vec3::new(0.0, 0.0, 15.0)).length() < EPSILON);
        assert!((orbit_position(PI, 15.0) - Vec3::new(-15.0, 0.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_orbit_position_stays_on_circle() {
        for i in 0..64 {
            let angle = i as f32 * 0.37;
            let p = orbit_position(angle, 42.0);
            assert_eq!(p.y, 0.0);
            assert!((p.length() - 42.0).abs() < EPSILON);
            assert!((p.x - 42.0 * angle.cos()).abs() < EPSILON);
            assert!((p.z - 42.0 * angle.sin()).abs() < EPSILON);
        }
    }

    #[test]
    fn test_advance_angle_scales_with_speed() {
        assert!((advance_angle(1.0, 4.7, 0.01) - 1.047).abs() < EPSILON);
        assert_eq!(advance_angle(1.0, 0.0, 0.01), 1.0);
    }

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < EPSILON);
        assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < EPSILON);
    }
}
