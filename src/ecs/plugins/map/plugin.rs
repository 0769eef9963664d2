use bevy::prelude::*;
use crate::ecs::core::{CorePlugin, MapSettings};
use crate::ecs::plugins::map::components::*;
use crate::ecs::plugins::map::manager::MapManager;
use crate::ecs::plugins::map::systems::*;

/// Builds the [`MapManager`] from [`MapSettings`] and drives it from events.
pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<CorePlugin>() {
            app.add_plugins(CorePlugin);
        }

        let manager = MapManager::from_settings(app.world().resource::<MapSettings>());

        app.insert_resource(manager)
            .add_event::<SelectMapEvent>()
            .add_event::<LoadMapEvent>()
            .add_event::<MapLoadedEvent>()
            .add_systems(Startup, initialize_map_system)
            .add_systems(Update, map_selection_system)
            .add_systems(Last, map_teardown_system);
    }
}
