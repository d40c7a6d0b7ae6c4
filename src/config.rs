//! Application configuration
//!
//! Tunables are read from a JSON file in the platform config directory:
//! - macOS: ~/Library/Application Support/bevysolar/config.json
//! - Linux: ~/.config/bevysolar/config.json
//! - Windows: %APPDATA%\bevysolar\config\config.json
//!
//! Every field is optional; anything missing falls back to the default scene.

use anyhow::Context;
use bevy::prelude::*;
use directories::ProjectDirs;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";

/// How a new planet selection interacts with a focus transition already running
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusPolicy {
    /// Drop the running transition and start over from the current camera position
    #[default]
    Restart,
    /// Keep every transition alive; each one writes the camera until it finishes
    Overlap,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min_distance: f32,
    pub max_distance: f32,
    pub speed: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_distance: 20.0,
            max_distance: 150.0,
            speed: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    pub duration_secs: f32,
    /// Height of the focus target above the planet
    pub height_offset: f32,
    /// Fraction of the orbital distance the camera backs off along +Z
    pub distance_factor: f32,
    pub policy: FocusPolicy,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            duration_secs: 2.0,
            height_offset: 10.0,
            distance_factor: 0.3,
            policy: FocusPolicy::default(),
        }
    }
}

/// Top-level configuration resource
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub star_count: usize,
    pub star_field_extent: f32,
    /// Fixed RNG seed for the starfield and initial orbital angles
    pub seed: Option<u64>,
    /// Orbital angle advanced per frame per unit of planet speed (radians)
    pub time_scale: f32,
    pub show_orbit_rings: bool,
    pub zoom: ZoomConfig,
    pub focus: FocusConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            star_count: 2000,
            star_field_extent: 400.0,
            seed: None,
            time_scale: 0.01,
            show_orbit_rings: true,
            zoom: ZoomConfig::default(),
            focus: FocusConfig::default(),
        }
    }
}

impl AppConfig {
    /// Resolve the platform config file path
    pub fn default_path() -> Result<PathBuf, anyhow::Error> {
        let proj_dirs = ProjectDirs::from("", "", "bevysolar")
            .ok_or_else(|| anyhow::anyhow!("Failed to resolve config directory"))?;
        Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the config from a specific file
    ///
    /// Returns Ok(None) if the file doesn't exist.
    /// Returns Err if the file exists but cannot be read or parsed.
    pub fn load_from_path(path: &Path) -> Result<Option<Self>, anyhow::Error> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;

        Ok(Some(config.sanitized()))
    }

    /// RNG for one scene concern. With a fixed `seed`, each `salt` yields a
    /// reproducible stream; otherwise the stream comes from OS entropy.
    pub fn rng(&self, salt: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ salt),
            None => StdRng::from_entropy(),
        }
    }

    /// Keep ranges ordered and positive so downstream math never divides by zero
    fn sanitized(mut self) -> Self {
        if self.zoom.min_distance > self.zoom.max_distance {
            std::mem::swap(&mut self.zoom.min_distance, &mut self.zoom.max_distance);
        }
        self.zoom.min_distance = self.zoom.min_distance.max(0.1);
        self.focus.duration_secs = self.focus.duration_secs.max(f32::EPSILON);
        self
    }
}

/// Where the active configuration came from, logged once at startup
#[derive(Resource, Debug)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
    Failed(String),
}

/// Loads [`AppConfig`] while the app is being built so later plugins can read it
pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let (config, source) = match AppConfig::default_path()
            .and_then(|path| Ok((AppConfig::load_from_path(&path)?, path)))
        {
            Ok((Some(config), path)) => (config, ConfigSource::File(path)),
            Ok((None, _)) => (AppConfig::default(), ConfigSource::Defaults),
            Err(err) => (AppConfig::default(), ConfigSource::Failed(format!("{err:#}"))),
        };

        app.insert_resource(config)
            .insert_resource(source)
            .add_systems(Startup, report_config_source);
    }
}

fn report_config_source(source: Res<ConfigSource>) {
    match &*source {
        ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
        ConfigSource::Defaults => info!("No config file found; using defaults"),
        ConfigSource::Failed(err) => warn!("Failed to load config, using defaults: {}", err),
    }
}
