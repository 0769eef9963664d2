pub mod components;
pub mod error;
pub mod map_data;
pub mod plugin;
pub mod resources;

pub use components::*;
pub use error::MapError;
pub use map_data::MapConfiguration;
pub use plugin::CorePlugin;
pub use resources::{MapSettings, MapVisuals};
