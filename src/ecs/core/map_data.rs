use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ecs::core::components::VisualKey;

/// Fixed layout of one map: monster path endpoints, barriers and the spots
/// where heroes may be placed.
///
/// The manager only ever reads a configuration. Registries share them as
/// `Arc<MapConfiguration>`, so the active one is a non-owning reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfiguration {
    pub name: String,
    pub start_point: Vec3,
    pub end_point: Vec3,
    pub barrier_positions: Vec<Vec3>,
    /// Waypoints between `start_point` and `end_point`.
    pub path_positions: Vec<Vec3>,
    pub placement_spots: Vec<Vec3>,
    /// Max number of heroes allowed on this map. Not enforced here.
    pub placement_limit: u32,

    // Map-specific visuals, taking precedence over the manager defaults
    pub barrier_visual: Option<VisualKey>,
    pub placement_spot_visual: Option<VisualKey>,
    pub path_visual: Option<VisualKey>,
}

impl Default for MapConfiguration {
    fn default() -> Self {
        Self {
            name: "New Map".to_string(),
            start_point: Vec3::new(-5.0, 0.0, 0.0),
            end_point: Vec3::new(5.0, 0.0, 0.0),
            barrier_positions: Vec::new(),
            path_positions: Vec::new(),
            placement_spots: Vec::new(),
            placement_limit: 1,
            barrier_visual: None,
            placement_spot_visual: None,
            path_visual: None,
        }
    }
}

impl MapConfiguration {
    pub fn new(name: impl Into<String>, start_point: Vec3, end_point: Vec3) -> Self {
        Self {
            name: name.into(),
            start_point,
            end_point,
            ..Default::default()
        }
    }

    pub fn with_barriers(mut self, positions: impl IntoIterator<Item = Vec3>) -> Self {
        self.barrier_positions = positions.into_iter().collect();
        self
    }

    pub fn with_path(mut self, waypoints: impl IntoIterator<Item = Vec3>) -> Self {
        self.path_positions = waypoints.into_iter().collect();
        self
    }

    pub fn with_placement_spots(mut self, spots: impl IntoIterator<Item = Vec3>) -> Self {
        self.placement_spots = spots.into_iter().collect();
        self
    }

    pub fn with_placement_limit(mut self, limit: u32) -> Self {
        self.placement_limit = limit;
        self
    }

    pub fn with_barrier_visual(mut self, visual: impl Into<String>) -> Self {
        self.barrier_visual = Some(VisualKey::new(visual));
        self
    }

    pub fn with_placement_spot_visual(mut self, visual: impl Into<String>) -> Self {
        self.placement_spot_visual = Some(VisualKey::new(visual));
        self
    }

    pub fn with_path_visual(mut self, visual: impl Into<String>) -> Self {
        self.path_visual = Some(VisualKey::new(visual));
        self
    }

    /// Start point, waypoints, end point, in walking order.
    pub fn path(&self) -> Vec<Vec3> {
        let mut path = Vec::with_capacity(self.path_positions.len() + 2);
        path.push(self.start_point);
        path.extend(self.path_positions.iter().copied());
        path.push(self.end_point);
        path
    }
}
