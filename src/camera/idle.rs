//! Slow idle camera orbit

use bevy::prelude::*;

use crate::camera::MainCamera;

/// Wall-clock angular rate of the idle orbit (radians per second)
const IDLE_ORBIT_RATE: f64 = 0.1;
/// Amplitude of the sideways sweep as a fraction of camera distance
const IDLE_ORBIT_SWAY: f32 = 0.1;

/// Camera position after the idle sway for wall-clock time `elapsed_secs`
pub fn idle_orbit_position(position: Vec3, elapsed_secs: f64) -> Vec3 {
    let phase = (elapsed_secs * IDLE_ORBIT_RATE).cos() as f32;
    Vec3::new(phase * position.length() * IDLE_ORBIT_SWAY, position.y, position.z)
}

pub fn idle_camera_orbit(
    time: Res<Time<Real>>,
    mut cameras: Query<&mut Transform, With<MainCamera>>,
) {
    for mut transform in &mut cameras {
        transform.translation = idle_orbit_position(transform.translation, time.elapsed_secs_f64());
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }
}
