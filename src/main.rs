/*!
# Map Instance Server

Scene configuration for a tower-defence map, built with Bevy ECS.

## Architecture Overview

- **CorePlugin**: Map settings, shared components and the map data model
- **MapPlugin**: The `MapManager` resource, which owns every entity spawned
  for the active map and swaps them out when another map is selected
- **DebugPlugin**: Periodic log summary of the loaded map

## How It Works

1. Map settings are read from `assets/maps.json` (or `$MAP_CONFIG`)
2. On startup the selected map is loaded: start/end markers, barriers,
   hero placement spots and an optional path visual are spawned
3. Other systems send `SelectMapEvent` / `LoadMapEvent` to switch maps;
   the previous map's entities are destroyed before the new ones spawn
4. Collaborators read the monster path from `MapManager`
   (`active_start_point`, `active_end_point`, `active_path`)
*/

use bevy::log::LogPlugin;
use bevy::prelude::*;

mod ecs;

use ecs::core::MapSettings;
use ecs::plugins::map::MapManager;
use ecs::{DebugPlugin, MapPlugin};

/// Main entry point.
///
/// Sets up the Bevy app, loads the map settings and starts the update loop.
fn main() {
    println!("🚀 Starting Map Instance Server...");

    let mut app = App::new();
    app
        // Bevy's minimal plugins (no graphics/audio needed)
        .add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default());

    // Logging is up, so settings problems get reported
    let settings = MapSettings::load_or_default();

    app.insert_resource(settings)
        .add_plugins(MapPlugin)
        .add_plugins(DebugPlugin)
        .add_systems(PostStartup, setup_game_world)
        .run();
}

/// Print startup information once the first map is in place.
fn setup_game_world(manager: Res<MapManager>) {
    println!("🌍 Game world initialized!");
    println!("🗺️  Maps available: {}", manager.registry().len());
    match manager.active_configuration() {
        Some(config) => println!(
            "📍 Active map '{}': {} -> {}",
            config.name,
            manager.active_start_point(),
            manager.active_end_point()
        ),
        None => println!("📭 No map loaded"),
    }
    println!();
}
