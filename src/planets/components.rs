//! Planet components for the Bevy ECS system

use bevy::prelude::*;

use crate::planets::resources::PlanetId;

/// Links a rendered planet mesh to its entry in the planet registry
#[derive(Component, Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlanetBody(pub PlanetId);

/// Component marker for the sun mesh
#[derive(Component)]
pub struct Sun;

/// Orbit guide ring for one planet
#[derive(Component, Copy, Clone, Debug)]
pub struct OrbitRing(pub PlanetId);
