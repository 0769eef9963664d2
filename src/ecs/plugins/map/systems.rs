use bevy::prelude::*;
use crate::ecs::plugins::map::components::*;
use crate::ecs::plugins::map::manager::{LoadReport, MapManager};

fn announce(world: &mut World, result: Result<LoadReport, crate::ecs::core::MapError>) {
    // Failures were logged by the manager
    if let Ok(report) = result {
        world.send_event(MapLoadedEvent {
            index: report.index,
            name: report.name,
        });
    }
}

/// Startup: load the selected map.
pub fn initialize_map_system(world: &mut World) {
    world.resource_scope(|world, mut manager: Mut<MapManager>| {
        let result = manager.initialize(world);
        announce(world, result);
    });
}

/// Applies queued selection requests, then explicit load requests.
pub fn map_selection_system(world: &mut World) {
    let selections: Vec<SelectMapEvent> =
        world.resource_mut::<Events<SelectMapEvent>>().drain().collect();
    let loads: Vec<LoadMapEvent> = world.resource_mut::<Events<LoadMapEvent>>().drain().collect();
    if selections.is_empty() && loads.is_empty() {
        return;
    }

    world.resource_scope(|world, mut manager: Mut<MapManager>| {
        for event in selections {
            let result = match event.selection {
                MapSelection::Index(index) => manager.select_by_index(world, index),
                MapSelection::Name(name) => manager.select_by_name(world, &name),
            };
            announce(world, result);
        }

        for event in loads {
            let result = manager.load(world, event.configuration);
            announce(world, result);
        }
    });
}

/// Destroys the map objects once the app is asked to exit.
pub fn map_teardown_system(world: &mut World) {
    let exiting = world
        .get_resource::<Events<AppExit>>()
        .is_some_and(|events| !events.is_empty());
    if !exiting {
        return;
    }

    world.resource_scope(|world, mut manager: Mut<MapManager>| {
        manager.teardown(world);
    });
}
