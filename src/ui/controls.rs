//! Control panel model: one speed slider and one color chip per planet

use bevy::prelude::*;

use crate::core::color::css_hex;
use crate::planets::resources::{MAX_SPEED, MIN_SPEED};
use crate::planets::{PlanetId, PlanetRegistry};

/// Slider steps per unit of speed (a step of 0.1)
pub const SPEED_STEPS_PER_UNIT: f32 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SpeedSlider {
    pub planet: PlanetId,
    pub label: &'static str,
    pub value: f32,
    /// Value as displayed next to the slider
    pub readout: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColorChip {
    pub planet: PlanetId,
    pub color: u32,
    /// `#rrggbb`
    pub hex: String,
    /// Hover title
    pub title: &'static str,
}

/// Sliders and chips, index-aligned with the planet registry
#[derive(Resource, Default, Debug)]
pub struct ControlPanel {
    pub sliders: Vec<SpeedSlider>,
    pub chips: Vec<ColorChip>,
}

pub fn format_readout(value: f32) -> String {
    format!("{value:.1}")
}

/// Clamp to the slider range and snap to its step
pub fn snap_speed(value: f32) -> f32 {
    let clamped = value.clamp(MIN_SPEED, MAX_SPEED);
    (clamped * SPEED_STEPS_PER_UNIT).round() / SPEED_STEPS_PER_UNIT
}

impl ControlPanel {
    pub fn from_registry(registry: &PlanetRegistry) -> Self {
        let sliders = registry
            .iter()
            .map(|p| SpeedSlider {
                planet: p.id,
                label: p.name,
                value: p.base_speed,
                readout: format_readout(p.base_speed),
            })
            .collect();
        let chips = registry
            .iter()
            .map(|p| ColorChip {
                planet: p.id,
                color: p.color,
                hex: css_hex(p.color),
                title: p.name,
            })
            .collect();
        Self { sliders, chips }
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    /// Apply slider `index` to its planet's live speed and refresh the readout.
    /// Returns the value actually applied.
    pub fn set_speed(&mut self, index: usize, value: f32, registry: &mut PlanetRegistry) -> Option<f32> {
        let slider = self.sliders.get_mut(index)?;
        let applied = registry.set_speed(slider.planet, snap_speed(value))?;
        slider.value = applied;
        slider.readout = format_readout(applied);
        Some(applied)
    }
}

pub fn build_control_panel(mut commands: Commands, registry: Res<PlanetRegistry>) {
    let panel = ControlPanel::from_registry(&registry);
    debug!("Control panel built with {} sliders", panel.len());
    commands.insert_resource(panel);
}
