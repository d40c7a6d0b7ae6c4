//! UI panel components
use bevy::prelude::*;
use bevy_egui::egui;

use crate::core::color::color32_from_hex;
use crate::planets::resources::{MAX_SPEED, MIN_SPEED};
use crate::planets::{PlanetRegistry, PlanetState};
use crate::ui::controls::{ColorChip, ControlPanel};
use crate::ui::state::{Playback, Theme};

/// Tooltip offset from the cursor, in logical pixels
pub const TOOLTIP_OFFSET: Vec2 = Vec2::new(10.0, -10.0);

const LABEL_WIDTH: f32 = 64.0;
const CHIP_RADIUS: f32 = 6.0;

/// Tooltip lines for a hovered planet
pub fn tooltip_lines(planet: &PlanetState) -> [String; 3] {
    [
        planet.name.to_string(),
        format!("Distance: {} AU", planet.distance),
        format!("Speed: {:.1}x", planet.speed),
    ]
}

fn color_chip(ui: &mut egui::Ui, chip: &ColorChip) {
    let size = egui::vec2(CHIP_RADIUS * 2.0, CHIP_RADIUS * 2.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), CHIP_RADIUS, color32_from_hex(chip.color));
    response.on_hover_text(format!("{} {}", chip.title, chip.hex));
}

pub fn render_control_panel(
    ui: &mut egui::Ui,
    panel: &mut ControlPanel,
    registry: &mut PlanetRegistry,
    playback: &mut Playback,
    theme: &mut Theme,
) {
    ui.horizontal(|ui| {
        if ui.button(playback.button_label()).clicked() {
            playback.toggle();
            info!("Animation {}", if playback.paused { "paused" } else { "resumed" });
        }
        if ui.button(theme.button_label()).clicked() {
            theme.toggle();
            info!("Theme set to {}", if theme.dark { "dark" } else { "light" });
        }
    });

    ui.separator();
    ui.heading("Orbital speed");

    for index in 0..panel.len() {
        ui.horizontal(|ui| {
            if let Some(chip) = panel.chips.get(index) {
                color_chip(ui, chip);
            }

            let slider = &panel.sliders[index];
            ui.add_sized(
                [LABEL_WIDTH, ui.spacing().interact_size.y],
                egui::Label::new(slider.label),
            );
            let mut value = slider.value;
            let changed = ui
                .add(
                    egui::Slider::new(&mut value, MIN_SPEED..=MAX_SPEED)
                        .step_by(0.1)
                        .show_value(false),
                )
                .changed();
            if changed {
                panel.set_speed(index, value, registry);
            }
            ui.label(panel.sliders[index].readout.as_str());
        });
    }
}

/// Floating planet info box next to the cursor
pub fn render_tooltip(ctx: &egui::Context, planet: &PlanetState, cursor: Vec2) {
    let pos = cursor + TOOLTIP_OFFSET;
    let [name, distance, speed] = tooltip_lines(planet);

    egui::Area::new(egui::Id::new("planet_tooltip"))
        .order(egui::Order::Tooltip)
        .fixed_pos(egui::pos2(pos.x, pos.y))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(name).strong());
                ui.label(distance);
                ui.label(speed);
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planets::PlanetId;
    use crate::planets::data::PLANET_TABLE;

    #[test]
    fn test_tooltip_lines() {
        let mut earth = PlanetState::new(PlanetId(2), &PLANET_TABLE[2], 0.0);
        assert_eq!(
            tooltip_lines(&earth),
            ["Earth".to_string(), "Distance: 25 AU".to_string(), "Speed: 3.0x".to_string()]
        );

        earth.speed = 6.27;
        assert_eq!(tooltip_lines(&earth)[2], "Speed: 6.3x");
    }
}
