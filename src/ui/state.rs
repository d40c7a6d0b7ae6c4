//! UI state management

use bevy::prelude::*;

use crate::planets::resources::PlanetId;

pub const DARK_BACKGROUND: u32 = 0x000011;
pub const LIGHT_BACKGROUND: u32 = 0x87ceeb;

/// Animation pause flag
#[derive(Resource, Default, Debug)]
pub struct Playback {
    pub paused: bool,
}

impl Playback {
    pub fn toggle(&mut self) {
        self.paused = !self.paused;
    }

    pub fn button_label(&self) -> &'static str {
        if self.paused { "▶️ Resume" } else { "⏸️ Pause" }
    }
}

/// Run condition: orbits, spins and the idle camera orbit advance only while running
pub fn animation_running(playback: Res<Playback>) -> bool {
    !playback.paused
}

/// Light/dark theme flag
#[derive(Resource, Debug)]
pub struct Theme {
    pub dark: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self { dark: true }
    }
}

impl Theme {
    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    /// Scene clear color as 0xRRGGBB
    pub fn background(&self) -> u32 {
        if self.dark { DARK_BACKGROUND } else { LIGHT_BACKGROUND }
    }

    pub fn button_label(&self) -> &'static str {
        if self.dark { "🌙 Dark" } else { "☀️ Light" }
    }
}

/// Planet currently under the pointer, written from picking events
#[derive(Resource, Default, Debug)]
pub struct HoverState {
    pub planet: Option<PlanetId>,
    /// Pointer position in logical window pixels
    pub cursor: Vec2,
}

impl HoverState {
    pub fn enter(&mut self, planet: PlanetId, cursor: Vec2) {
        self.planet = Some(planet);
        self.cursor = cursor;
    }

    /// Clear the hover, unless another planet has already taken over
    pub fn leave(&mut self, planet: PlanetId) {
        if self.planet == Some(planet) {
            self.planet = None;
        }
    }
}

/// Panel visibility
#[derive(Resource, Debug)]
pub struct UIState {
    pub show_control_panel: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            show_control_panel: true,
        }
    }
}
