//! Scene lighting

use bevy::light::{GlobalAmbientLight, PointLightShadowMap};
use bevy::prelude::*;

use crate::core::color::color_from_hex;

const AMBIENT_COLOR: u32 = 0x404040;
const SUN_LIGHT_RANGE: f32 = 200.0;
const SUN_LIGHT_INTENSITY: f32 = 4_000_000.0;
const SHADOW_MAP_SIZE: usize = 2048;

/// Marker component for the point light at the sun's position
#[derive(Component)]
pub struct SunLight;

/// Dim ambient fill plus a shadow-casting point light at the origin
pub fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: color_from_hex(AMBIENT_COLOR),
        brightness: 80.0,
        ..default()
    });
    commands.insert_resource(PointLightShadowMap {
        size: SHADOW_MAP_SIZE,
    });

    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: SUN_LIGHT_INTENSITY,
            range: SUN_LIGHT_RANGE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        SunLight,
        Name::new("Sun Light"),
    ));
}
