use bevy::prelude::*;
use crate::ecs::core::resources::MapSettings;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        // Keep settings inserted by the host, otherwise use the built-in map
        app.init_resource::<MapSettings>();
    }
}
