use bevy::prelude::*;
use crate::ecs::core::MapSettings;
use crate::ecs::plugins::debug::systems::*;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        let interval = app
            .world()
            .get_resource::<MapSettings>()
            .map_or(DEFAULT_DEBUG_INTERVAL, |settings| settings.debug_interval_secs);

        app.insert_resource(DebugTimer::new(interval))
            .add_systems(Update, map_debug_system);
    }
}
