//! UI systems for the egui interface

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::core::color::color_from_hex;
use crate::planets::PlanetRegistry;
use crate::ui::controls::ControlPanel;
use crate::ui::panels::{render_control_panel, render_tooltip};
use crate::ui::state::{HoverState, Playback, Theme, UIState};

/// Main UI system that renders the control panel and the hover tooltip
pub fn ui_system(
    mut contexts: EguiContexts,
    ui_state: Res<UIState>,
    mut panel: ResMut<ControlPanel>,
    mut registry: ResMut<PlanetRegistry>,
    mut playback: ResMut<Playback>,
    mut theme: ResMut<Theme>,
    hover: Res<HoverState>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    if ctx.style().visuals.dark_mode != theme.dark {
        ctx.set_visuals(if theme.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }

    if ui_state.show_control_panel {
        egui::Window::new("Planet Speeds")
            .default_pos(egui::pos2(10.0, 10.0))
            .resizable(false)
            .show(ctx, |ui| {
                render_control_panel(ui, &mut panel, &mut registry, &mut playback, &mut theme);
            });
    }

    if let Some(planet) = hover.planet.and_then(|id| registry.get(id)) {
        render_tooltip(ctx, planet, hover.cursor);
        ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
    }
}

/// Keep the scene clear color in step with the theme
pub fn apply_theme(theme: Res<Theme>, mut clear_color: ResMut<ClearColor>) {
    if theme.is_changed() {
        clear_color.0 = color_from_hex(theme.background());
    }
}
