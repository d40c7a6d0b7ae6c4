//! Visualization module
//!
//! Builds the static scene once at startup (lighting, starfield, sun, orbit
//! rings) and spins the sun each frame.

use bevy::prelude::*;

pub mod lighting;
pub mod orbit_rings;
pub mod starfield;
pub mod sun;

use crate::config::AppConfig;
use crate::core::FrameSet;
use crate::ui::state::animation_running;

/// Plugin for scene construction and sun rotation
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                lighting::spawn_lighting,
                starfield::spawn_starfield,
                sun::spawn_sun,
                orbit_rings::spawn_orbit_rings.run_if(show_orbit_rings),
            ),
        )
        .add_systems(
            Update,
            sun::spin_sun
                .run_if(animation_running)
                .in_set(FrameSet::Simulate),
        );
    }
}

fn show_orbit_rings(config: Res<AppConfig>) -> bool {
    config.show_orbit_rings
}
