//! Camera module
//!
//! Spawns the main perspective camera and owns everything that moves it:
//! wheel zoom, the idle orbit and planet focus transitions.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy_egui::input::egui_wants_any_pointer_input;

pub mod focus;
pub mod idle;
pub mod zoom;

pub use focus::{FocusAnimator, FocusRequest};

use crate::config::AppConfig;
use crate::core::FrameSet;
use crate::ui::state::animation_running;

pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 30.0, 80.0);

/// Marker component for the main 3D camera
#[derive(Component)]
pub struct MainCamera;

/// Plugin for camera setup and motion
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        let policy = app
            .world()
            .get_resource::<AppConfig>()
            .map(|config| config.focus.policy)
            .unwrap_or_default();

        app.insert_resource(FocusAnimator::new(policy))
            .add_message::<FocusRequest>()
            .add_systems(Startup, spawn_main_camera)
            .add_systems(
                Update,
                zoom::zoom_camera
                    .run_if(not(egui_wants_any_pointer_input))
                    .in_set(FrameSet::Input),
            )
            .add_systems(
                Update,
                (
                    idle::idle_camera_orbit.run_if(animation_running),
                    focus::begin_focus_transitions,
                    focus::drive_focus_transitions,
                )
                    .chain()
                    .in_set(FrameSet::Camera),
            );
    }
}

fn spawn_main_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEG.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Tonemapping::TonyMcMapface,
        Transform::from_translation(CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
        Name::new("Main Camera"),
    ));
}
