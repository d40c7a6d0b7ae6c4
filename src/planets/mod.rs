//! Planet management module
//!
//! This module owns the planet registry (the explicit per-planet state),
//! spawns the planet meshes and drives their orbital motion each frame.

use bevy::prelude::*;

pub mod components;
pub mod data;
pub mod orbit;
pub mod resources;
pub mod systems;

pub use components::{OrbitRing, PlanetBody, Sun};
pub use resources::{PlanetId, PlanetRegistry, PlanetState};
pub use systems::{advance_orbits, spawn_planets};

use crate::config::AppConfig;
use crate::core::FrameSet;
use crate::ui::state::animation_running;
use data::PLANET_TABLE;

const PLANET_RNG_SALT: u64 = 0x706c_616e;

/// Plugin for the planet registry and orbital motion
pub struct PlanetsPlugin;

impl Plugin for PlanetsPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<AppConfig>()
            .cloned()
            .unwrap_or_default();
        let registry = PlanetRegistry::from_table(PLANET_TABLE, &mut config.rng(PLANET_RNG_SALT));

        app.insert_resource(registry)
            .add_systems(Startup, spawn_planets)
            .add_systems(
                Update,
                advance_orbits
                    .run_if(animation_running)
                    .in_set(FrameSet::Simulate),
            );
    }
}
