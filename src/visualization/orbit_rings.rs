//! Orbit guide rings

use bevy::light::NotShadowCaster;
use bevy::picking::Pickable;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::core::color::color_from_hex;
use crate::planets::{OrbitRing, PlanetRegistry};

const RING_HALF_WIDTH: f32 = 0.1;
const RING_SEGMENTS: u32 = 64;
const RING_COLOR: u32 = 0x444444;
const RING_OPACITY: f32 = 0.3;

/// Inner and outer radius of the guide ring for an orbit
pub fn ring_radii(distance: f32) -> (f32, f32) {
    (distance - RING_HALF_WIDTH, distance + RING_HALF_WIDTH)
}

pub fn spawn_orbit_rings(
    registry: Res<PlanetRegistry>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: color_from_hex(RING_COLOR).with_alpha(RING_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    for planet in registry.iter() {
        let (inner, outer) = ring_radii(planet.distance);
        let mesh = meshes.add(Annulus::new(inner, outer).mesh().resolution(RING_SEGMENTS));

        // Annulus meshes face +Z; rotate them flat into the orbital (XZ) plane.
        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material.clone()),
            Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            NotShadowCaster,
            Pickable::IGNORE,
            OrbitRing(planet.id),
            Name::new(format!("{} Orbit", planet.name)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_radii_straddle_orbit() {
        let (inner, outer) = ring_radii(25.0);
        assert!((inner - 24.9).abs() < 1e-5);
        assert!((outer - 25.1).abs() < 1e-5);
    }

    #[test]
    fn test_ring_rotation_lies_in_xz_plane() {
        let rotation = Quat::from_rotation_x(-FRAC_PI_2);
        let normal = rotation * Vec3::Z;
        assert!((normal - Vec3::Y).length() < 1e-5);
    }
}
