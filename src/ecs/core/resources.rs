use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ecs::core::components::VisualKey;
use crate::ecs::core::error::MapError;
use crate::ecs::core::map_data::MapConfiguration;

/// Environment variable that overrides where map settings are read from.
pub const MAP_CONFIG_ENV: &str = "MAP_CONFIG";
pub const DEFAULT_MAP_CONFIG_PATH: &str = "assets/maps.json";

/// Manager-level visuals, used when a map doesn't bring its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapVisuals {
    pub start_marker: Option<VisualKey>,
    pub end_marker: Option<VisualKey>,
    pub barrier: Option<VisualKey>,
    pub placement_spot: Option<VisualKey>,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Map loaded on startup.
    pub selected_index: usize,
    pub visuals: MapVisuals,
    /// How often the debug plugin logs the map state, in seconds.
    pub debug_interval_secs: f32,
    pub maps: Vec<MapConfiguration>,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            selected_index: 0,
            visuals: MapVisuals {
                start_marker: None,
                end_marker: None,
                barrier: Some(VisualKey::new("barrier")),
                placement_spot: Some(VisualKey::new("placement_spot")),
            },
            debug_interval_secs: 5.0,
            maps: vec![
                MapConfiguration::new(
                    "Meadow",
                    Vec3::new(-5.0, 0.0, 0.0),
                    Vec3::new(5.0, 0.0, 0.0),
                )
                .with_barriers([Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, -2.0)])
                .with_placement_spots([Vec3::new(-2.0, 0.0, 1.5), Vec3::new(2.0, 0.0, -1.5)])
                .with_placement_limit(2),
            ],
        }
    }
}

impl MapSettings {
    pub fn from_json(json: &str) -> Result<Self, MapError> {
        serde_json::from_str(json).map_err(|e| MapError::Parse(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| MapError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// Path from `MAP_CONFIG`, or `assets/maps.json`.
    pub fn config_path() -> PathBuf {
        std::env::var_os(MAP_CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MAP_CONFIG_PATH))
    }

    /// Loads settings from [`MapSettings::config_path`], falling back to the
    /// built-in demo map when the file is missing or malformed.
    pub fn load_or_default() -> Self {
        let path = Self::config_path();
        match Self::load(&path) {
            Ok(settings) => {
                info!("Loaded {} map(s) from {}", settings.maps.len(), path.display());
                settings
            }
            Err(e) => {
                warn!("{e}. Using built-in map settings.");
                Self::default()
            }
        }
    }
}
