use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a visual asset ("prefab") the host knows how to present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisualKey(pub String);

impl VisualKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visual asset attached to a spawned map object.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MapVisual(pub VisualKey);

/// Built-in geometry used when a marker has no visual assigned.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderShape {
    Sphere,
    Cube,
}

impl fmt::Display for PlaceholderShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderShape::Sphere => f.write_str("sphere"),
            PlaceholderShape::Cube => f.write_str("cube"),
        }
    }
}

/// What a spawned map object stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnRole {
    StartMarker,
    EndMarker,
    Barrier,
    PlacementSpot,
    PathVisual,
}

impl SpawnRole {
    /// Entity name given to objects spawned for this role.
    pub fn object_name(self) -> &'static str {
        match self {
            SpawnRole::StartMarker => "Start Marker",
            SpawnRole::EndMarker => "End Marker",
            SpawnRole::Barrier => "Barrier",
            SpawnRole::PlacementSpot => "Placement Spot",
            SpawnRole::PathVisual => "Monster Path Visual",
        }
    }
}

impl fmt::Display for SpawnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnRole::StartMarker => f.write_str("start marker"),
            SpawnRole::EndMarker => f.write_str("end marker"),
            SpawnRole::Barrier => f.write_str("barrier"),
            SpawnRole::PlacementSpot => f.write_str("placement spot"),
            SpawnRole::PathVisual => f.write_str("path"),
        }
    }
}

/// Tags every entity owned by the map manager.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapObject {
    pub role: SpawnRole,
}
