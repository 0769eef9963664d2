/*!
# Debug Systems

Development tools for watching the map manager while the app runs.

The summary goes through `info!`, so it can be silenced with `RUST_LOG`.
*/

use bevy::prelude::*;
use crate::ecs::core::{MapObject, SpawnRole};
use crate::ecs::plugins::map::MapManager;

/// Fallback print interval (in seconds) when no settings are present
pub const DEFAULT_DEBUG_INTERVAL: f32 = 5.0;

/// Tracks when we last printed debug info
#[derive(Resource, Debug)]
pub struct DebugTimer {
    interval: f32,
    last_print_time: f32,
}

impl DebugTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            last_print_time: 0.0,
        }
    }

    /// Whether a summary is due at `now`; restarts the interval if so.
    fn tick(&mut self, now: f32) -> bool {
        if now - self.last_print_time > self.interval {
            self.last_print_time = now;
            true
        } else {
            false
        }
    }
}

/// Logs the active map and how many objects it spawned, per role.
///
/// The live count comes from the world, so it also shows objects destroyed
/// behind the manager's back.
pub fn map_debug_system(
    manager: Res<MapManager>,
    objects: Query<&MapObject>,
    time: Res<Time>,
    mut debug_timer: ResMut<DebugTimer>,
) {
    if !debug_timer.tick(time.elapsed_secs()) {
        return;
    }

    let Some(config) = manager.active_configuration() else {
        info!("=== Map State: no map loaded ({} available) ===", manager.registry().len());
        return;
    };

    let spawned = manager.spawned();
    info!(
        "=== Map State: '{}' (index {:?}) start {} end {} limit {} ===",
        config.name,
        manager.active_index(),
        manager.active_start_point(),
        manager.active_end_point(),
        manager.active_placement_limit(),
    );
    info!(
        "barriers {} | placement spots {} | path visual {} | tracked {} | live {}",
        spawned.count(SpawnRole::Barrier),
        spawned.count(SpawnRole::PlacementSpot),
        spawned.count(SpawnRole::PathVisual) > 0,
        spawned.len(),
        objects.iter().count(),
    );
}
