//! Planet systems for spawning and orbital motion

use bevy::prelude::*;

use crate::config::AppConfig;
use crate::core::color::color_from_hex;
use crate::planets::components::PlanetBody;
use crate::planets::orbit::{PLANET_SPIN_PER_FRAME, advance_angle, orbit_position, wrap_angle};
use crate::planets::resources::PlanetRegistry;

/// Spawn one sphere per registry entry and record its entity
pub fn spawn_planets(
    mut registry: ResMut<PlanetRegistry>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for planet in registry.planets.iter_mut() {
        let mesh = meshes.add(Sphere::new(planet.radius).mesh().uv(32, 32));
        let material = materials.add(StandardMaterial {
            base_color: color_from_hex(planet.color),
            perceptual_roughness: 1.0,
            metallic: 0.0,
            reflectance: 0.1,
            ..default()
        });

        let entity = commands
            .spawn((
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::from_translation(planet.position),
                PlanetBody(planet.id),
                Name::new(planet.name),
            ))
            .id();
        planet.entity = Some(entity);
    }

    info!("Spawned {} planets", registry.len());
}

/// Advance every planet one frame along its orbit and spin it about its own axis
pub fn advance_orbits(
    config: Res<AppConfig>,
    mut registry: ResMut<PlanetRegistry>,
    mut bodies: Query<(&PlanetBody, &mut Transform)>,
) {
    for planet in registry.planets.iter_mut() {
        planet.angle = wrap_angle(advance_angle(planet.angle, planet.speed, config.time_scale));
        planet.position = orbit_position(planet.angle, planet.distance);
    }

    for (body, mut transform) in bodies.iter_mut() {
        if let Some(planet) = registry.get(body.0) {
            transform.translation = planet.position;
            transform.rotate_y(PLANET_SPIN_PER_FRAME);
        }
    }
}
