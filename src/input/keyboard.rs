//! Keyboard shortcuts mirroring the panel buttons

use bevy::prelude::*;

use crate::ui::state::{Playback, Theme, UIState};

pub fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut playback: ResMut<Playback>,
    mut theme: ResMut<Theme>,
    mut ui_state: ResMut<UIState>,
) {
    if keys.just_pressed(KeyCode::Space) {
        playback.toggle();
        info!("Animation {}", if playback.paused { "paused" } else { "resumed" });
    }
    if keys.just_pressed(KeyCode::KeyT) {
        theme.toggle();
        info!("Theme set to {}", if theme.dark { "dark" } else { "light" });
    }
    if keys.just_pressed(KeyCode::KeyH) {
        ui_state.show_control_panel = !ui_state.show_control_panel;
    }
}
