//! User interface module
//!
//! This module handles UI state management, the control panel model and the
//! egui systems that render the panel and the planet tooltip.

use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

pub mod controls;
pub mod panels;
pub mod state;
pub mod systems;

pub use controls::ControlPanel;
pub use state::{HoverState, Playback, Theme, UIState};
pub use systems::ui_system;

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .init_resource::<UIState>()
            .init_resource::<Playback>()
            .init_resource::<Theme>()
            .init_resource::<HoverState>()
            .init_resource::<ControlPanel>()
            .add_systems(Startup, controls::build_control_panel)
            .add_systems(Update, systems::apply_theme)
            .add_systems(EguiPrimaryContextPass, ui_system);
    }
}
