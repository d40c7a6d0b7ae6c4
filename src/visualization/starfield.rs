//! Static background starfield rendered as a single point-list mesh

use bevy::asset::RenderAssetUsages;
use bevy::light::NotShadowCaster;
use bevy::picking::Pickable;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use rand::Rng;

use crate::config::AppConfig;

const STAR_RNG_SALT: u64 = 0x7374_6172;

/// Marker component for the starfield entity
#[derive(Component)]
pub struct Starfield;

/// Scatter `count` points uniformly inside an axis-aligned cube of side `extent` centered on the origin
pub fn generate_star_positions(count: usize, extent: f32, rng: &mut impl Rng) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                (rng.gen_range(0.0..1.0) - 0.5) * extent,
                (rng.gen_range(0.0..1.0) - 0.5) * extent,
                (rng.gen_range(0.0..1.0) - 0.5) * extent,
            ]
        })
        .collect()
}

/// Build the point-list mesh for a set of star positions
pub fn starfield_mesh(positions: Vec<[f32; 3]>) -> Mesh {
    let normals = vec![[0.0, 1.0, 0.0]; positions.len()];
    Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD)
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
}

pub fn spawn_starfield(
    config: Res<AppConfig>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = config.rng(STAR_RNG_SALT);
    let positions = generate_star_positions(config.star_count, config.star_field_extent, &mut rng);
    let count = positions.len();

    commands.spawn((
        Mesh3d(meshes.add(starfield_mesh(positions))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        NotShadowCaster,
        Pickable::IGNORE,
        Starfield,
        Name::new("Starfield"),
    ));

    info!("Spawned starfield with {} stars", count);
}
