//! Wheel zoom with a clamped camera distance

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::config::{AppConfig, ZoomConfig};

/// Pixels per scroll line, matching a typical browser wheel notch
const PIXELS_PER_LINE: f32 = 100.0;

/// Browser-style `deltaY` for a wheel event: positive zooms out
pub fn wheel_delta_pixels(unit: MouseScrollUnit, y: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => -y * PIXELS_PER_LINE,
        MouseScrollUnit::Pixel => -y,
    }
}

/// Scale the camera distance by one wheel delta, clamped to the configured
/// range. The direction from the origin never changes, even when a large
/// negative delta drives the scale factor to zero or below.
pub fn apply_zoom(position: Vec3, delta_y: f32, cfg: &ZoomConfig) -> Vec3 {
    let factor = 1.0 + delta_y * cfg.speed * 0.001;
    let distance = (position.length() * factor).clamp(cfg.min_distance, cfg.max_distance);
    position.normalize_or_zero() * distance
}

/// Apply each wheel event in turn. Registered behind a run condition that
/// skips it while egui owns the pointer.
pub fn zoom_camera(
    mut wheel: MessageReader<MouseWheel>,
    config: Res<AppConfig>,
    mut cameras: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = cameras.single_mut() else {
        wheel.clear();
        return;
    };
    for ev in wheel.read() {
        let delta = wheel_delta_pixels(ev.unit, ev.y);
        transform.translation = apply_zoom(transform.translation, delta, &config.zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_egui::input::{EguiWantsInput, egui_wants_any_pointer_input};

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_zoom_in_clamps_to_min_distance() {
        let cfg = ZoomConfig::default();
        let start = Vec3::new(0.0, 30.0, 80.0);
        let zoomed = apply_zoom(start, -9000.0, &cfg);
        assert!((zoomed.length() - 20.0).abs() < EPSILON);
        assert!((zoomed.normalize() - start.normalize()).length() < EPSILON);
    }

    #[test]
    fn test_huge_zoom_in_keeps_direction() {
        let cfg = ZoomConfig::default();
        let start = Vec3::new(0.0, 30.0, 80.0);
        // Factor 0 and factor -1: neither collapses to the origin nor flips.
        for delta in [-10_000.0, -20_000.0, -1.0e9] {
            let zoomed = apply_zoom(start, delta, &cfg);
            assert!((zoomed.length() - 20.0).abs() < EPSILON, "delta {delta}");
            assert!((zoomed.normalize() - start.normalize()).length() < EPSILON, "delta {delta}");
        }
    }

    #[test]
    fn test_zoom_out_clamps_to_max_distance() {
        let cfg = ZoomConfig::default();
        let start = Vec3::new(10.0, 30.0, 80.0);
        let zoomed = apply_zoom(start, 50_000.0, &cfg);
        assert!((zoomed.length() - 150.0).abs() < EPSILON);
        assert!((zoomed.normalize() - start.normalize()).length() < EPSILON);
    }

    #[test]
    fn test_zoom_within_range_scales_linearly() {
        let cfg = ZoomConfig::default();
        let start = Vec3::new(0.0, 30.0, 80.0);
        // One wheel notch down (100px) grows the distance by 1%.
        let zoomed = apply_zoom(start, 100.0, &cfg);
        assert!((zoomed - start * 1.01).length() < EPSILON);
    }

    #[test]
    fn test_wheel_units_convert_to_browser_delta() {
        assert_eq!(wheel_delta_pixels(MouseScrollUnit::Line, 1.0), -100.0);
        assert_eq!(wheel_delta_pixels(MouseScrollUnit::Pixel, -12.0), 12.0);
    }

    fn wheel(y: f32) -> MouseWheel {
        MouseWheel {
            unit: MouseScrollUnit::Pixel,
            x: 0.0,
            y,
            window: Entity::PLACEHOLDER,
        }
    }

    fn zoom_app() -> App {
        let mut app = App::new();
        app.insert_resource(AppConfig::default())
            .insert_resource(EguiWantsInput::default())
            .add_message::<MouseWheel>()
            .add_systems(
                Update,
                zoom_camera.run_if(not(egui_wants_any_pointer_input)),
            );
        app.world_mut()
            .spawn((MainCamera, Transform::from_xyz(0.0, 30.0, 80.0)));
        app
    }

    fn camera_translation(app: &mut App) -> Vec3 {
        let mut q = app.world_mut().query_filtered::<&Transform, With<MainCamera>>();
        q.single(app.world()).expect("camera").translation
    }

    #[test]
    fn test_events_apply_one_at_a_time() {
        let mut app = zoom_app();
        let start = camera_translation(&mut app);

        // Pixel y = -100 is deltaY = +100: each event grows the distance by 1%.
        app.world_mut().write_message(wheel(-100.0));
        app.world_mut().write_message(wheel(-100.0));
        app.update();

        assert!((camera_translation(&mut app) - start * 1.01 * 1.01).length() < EPSILON);
    }

    #[test]
    fn test_burst_of_zoom_in_events_stops_at_min_distance() {
        let mut app = zoom_app();
        let start = camera_translation(&mut app);

        for _ in 0..4 {
            app.world_mut().write_message(wheel(5_000.0));
        }
        app.update();

        let end = camera_translation(&mut app);
        assert!((end.length() - 20.0).abs() < EPSILON);
        assert!((end.normalize() - start.normalize()).length() < EPSILON);
    }
}
