//! Static planet table

/// Authoring data for one planet
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetSpec {
    pub name: &'static str,
    pub radius: f32,
    /// Orbital radius in scene units (shown as AU in the tooltip)
    pub distance: f32,
    /// Base angular speed multiplier
    pub speed: f32,
    /// 0xRRGGBB
    pub color: u32,
}

/// The eight planets, innermost first
pub const PLANET_TABLE: &[PlanetSpec] = &[
    PlanetSpec { name: "Mercury", radius: 0.8, distance: 15.0, speed: 4.7, color: 0x8c7853 },
    PlanetSpec { name: "Venus", radius: 1.2, distance: 20.0, speed: 3.5, color: 0xffc649 },
    PlanetSpec { name: "Earth", radius: 1.3, distance: 25.0, speed: 3.0, color: 0x6b93d6 },
    PlanetSpec { name: "Mars", radius: 1.0, distance: 30.0, speed: 2.4, color: 0xc1440e },
    PlanetSpec { name: "Jupiter", radius: 3.5, distance: 40.0, speed: 1.3, color: 0xd8ca9d },
    PlanetSpec { name: "Saturn", radius: 3.0, distance: 50.0, speed: 1.0, color: 0xfad5a5 },
    PlanetSpec { name: "Uranus", radius: 2.0, distance: 60.0, speed: 0.7, color: 0x4fd0e4 },
    PlanetSpec { name: "Neptune", radius: 2.0, distance: 70.0, speed: 0.5, color: 0x4b70dd },
];
