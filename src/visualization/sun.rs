//! Sun mesh and rotation

use bevy::light::NotShadowCaster;
use bevy::picking::Pickable;
use bevy::prelude::*;

use crate::core::color::color_from_hex;
use crate::planets::Sun;

pub const SUN_RADIUS: f32 = 4.0;
const SUN_COLOR: u32 = 0xffaa00;
/// Spin added to the sun per frame (radians about Y)
pub const SUN_SPIN_PER_FRAME: f32 = 0.01;

pub fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: color_from_hex(SUN_COLOR),
        unlit: true,
        ..default()
    });

    // The point light sits inside the sun and planets behind it stay pickable.
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS).mesh().uv(32, 32))),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, 0.0, 0.0),
        NotShadowCaster,
        Pickable::IGNORE,
        Sun,
        Name::new("Sun"),
    ));
}

pub fn spin_sun(mut query: Query<&mut Transform, With<Sun>>) {
    for mut transform in &mut query {
        transform.rotate_y(SUN_SPIN_PER_FRAME);
    }
}
