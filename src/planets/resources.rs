//! Planet resources for managing planet data

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::planets::data::PlanetSpec;
use crate::planets::orbit::orbit_position;

/// Slider bounds for a planet's live speed
pub const MIN_SPEED: f32 = 0.0;
pub const MAX_SPEED: f32 = 10.0;

/// Stable identifier of a planet: its index in the registry
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlanetId(pub usize);

/// Live state of one planet
#[derive(Clone, Debug)]
pub struct PlanetState {
    pub id: PlanetId,
    pub name: &'static str,
    pub radius: f32,
    pub distance: f32,
    /// Current angular speed, adjusted from the control panel
    pub speed: f32,
    pub base_speed: f32,
    /// Accumulated orbital angle in radians
    pub angle: f32,
    pub color: u32,
    /// World position derived from `angle` and `distance`
    pub position: Vec3,
    pub entity: Option<Entity>,
}

impl PlanetState {
    pub fn new(id: PlanetId, spec: &PlanetSpec, angle: f32) -> Self {
        Self {
            id,
            name: spec.name,
            radius: spec.radius,
            distance: spec.distance,
            speed: spec.speed,
            base_speed: spec.speed,
            angle,
            color: spec.color,
            position: orbit_position(angle, spec.distance),
            entity: None,
        }
    }
}

/// Resource for storing all planets, index-aligned with [`PlanetId`]
#[derive(Resource, Default, Debug)]
pub struct PlanetRegistry {
    pub planets: Vec<PlanetState>,
}

impl PlanetRegistry {
    /// Build the registry from a table, drawing each starting angle uniformly from [0, TAU)
    pub fn from_table(table: &[PlanetSpec], rng: &mut impl Rng) -> Self {
        let planets = table
            .iter()
            .enumerate()
            .map(|(i, spec)| PlanetState::new(PlanetId(i), spec, rng.gen_range(0.0..TAU)))
            .collect();
        Self { planets }
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    pub fn get(&self, id: PlanetId) -> Option<&PlanetState> {
        self.planets.get(id.0)
    }

    pub fn get_mut(&mut self, id: PlanetId) -> Option<&mut PlanetState> {
        self.planets.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanetState> {
        self.planets.iter()
    }

    /// Set a planet's live speed, clamped to the slider range. Returns the applied value.
    pub fn set_speed(&mut self, id: PlanetId, speed: f32) -> Option<f32> {
        let planet = self.get_mut(id)?;
        planet.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        Some(planet.speed)
    }
}
