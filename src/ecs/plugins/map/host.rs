/*!
# Scene Host

The instantiate/destroy facility the map manager spawns through.

The manager never touches entities directly: it asks a [`SceneHost`] to
create objects and hands back the [`Entity`] handles when tearing down.
`World` is the host used by the running app.
*/

use bevy::prelude::*;
use crate::ecs::core::{MapObject, MapVisual, PlaceholderShape, SpawnRole, VisualKey};

pub trait SceneHost {
    /// Spawns an object presenting `visual`.
    fn instantiate(
        &mut self,
        visual: &VisualKey,
        transform: Transform,
        role: SpawnRole,
        name: &str,
    ) -> Entity;

    /// Spawns a built-in placeholder shape.
    fn spawn_placeholder(
        &mut self,
        shape: PlaceholderShape,
        transform: Transform,
        role: SpawnRole,
        name: &str,
    ) -> Entity;

    /// Destroys `entity`. Returns `false` if it was already gone.
    fn destroy(&mut self, entity: Entity) -> bool;
}

impl SceneHost for World {
    fn instantiate(
        &mut self,
        visual: &VisualKey,
        transform: Transform,
        role: SpawnRole,
        name: &str,
    ) -> Entity {
        self.spawn((
            transform,
            MapObject { role },
            MapVisual(visual.clone()),
            Name::new(name.to_string()),
        ))
        .id()
    }

    fn spawn_placeholder(
        &mut self,
        shape: PlaceholderShape,
        transform: Transform,
        role: SpawnRole,
        name: &str,
    ) -> Entity {
        self.spawn((transform, MapObject { role }, shape, Name::new(name.to_string())))
            .id()
    }

    fn destroy(&mut self, entity: Entity) -> bool {
        if !self.entities().contains(entity) {
            return false;
        }
        self.despawn(entity)
    }
}
