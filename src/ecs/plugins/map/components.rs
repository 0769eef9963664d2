use bevy::prelude::*;
use std::sync::Arc;
use crate::ecs::core::{MapConfiguration, SpawnRole};

// ============================================================================
// SPAWN SET
// ============================================================================

/// Live entity handles the map manager owns for the active map.
#[derive(Debug, Default)]
pub struct SpawnSet {
    entries: Vec<(SpawnRole, Entity)>,
}

impl SpawnSet {
    pub fn insert(&mut self, role: SpawnRole, entity: Entity) {
        self.entries.push((role, entity));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, role: SpawnRole) -> usize {
        self.entries.iter().filter(|(r, _)| *r == role).count()
    }

    /// Entities spawned for `role`, in spawn order.
    pub fn entities(&self, role: SpawnRole) -> impl Iterator<Item = Entity> + '_ {
        self.entries
            .iter()
            .filter(move |(r, _)| *r == role)
            .map(|(_, entity)| *entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpawnRole, Entity)> + '_ {
        self.entries.iter().copied()
    }

    /// Hands every handle over for destruction, leaving the set empty.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = (SpawnRole, Entity)> + '_ {
        self.entries.drain(..)
    }
}

// ============================================================================
// EVENTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSelection {
    Index(usize),
    Name(String),
}

/// Request to switch to a map from the registry.
#[derive(Event, Debug, Clone)]
pub struct SelectMapEvent {
    pub selection: MapSelection,
}

/// Request to load an explicit configuration, which may be absent.
#[derive(Event, Debug, Clone)]
pub struct LoadMapEvent {
    pub configuration: Option<Arc<MapConfiguration>>,
}

/// Sent after a map finished loading.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct MapLoadedEvent {
    pub index: Option<usize>,
    pub name: String,
}
