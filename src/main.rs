use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod camera;
mod config;
mod core;
mod input;
mod planets;
mod ui;
mod visualization;

use camera::CameraPlugin;
use config::ConfigPlugin;
use crate::core::FrameSet;
use crate::core::color::color_from_hex;
use input::InputPlugin;
use planets::PlanetsPlugin;
use ui::UiPlugin;
use ui::state::DARK_BACKGROUND;
use visualization::VisualizationPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "bevysolar — solar system".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(color_from_hex(DARK_BACKGROUND)))
    .configure_sets(
        Update,
        (FrameSet::Input, FrameSet::Simulate, FrameSet::Camera).chain(),
    );

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Config first: the planet and scene plugins read it while building.
    app.add_plugins(ConfigPlugin);
    app.add_plugins(UiPlugin);
    app.add_plugins(PlanetsPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(CameraPlugin);
    app.add_plugins(InputPlugin);

    app.run();
}
