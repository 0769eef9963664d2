pub mod components;
pub mod host;
pub mod manager;
pub mod plugin;
pub mod systems;

pub use components::{LoadMapEvent, MapLoadedEvent, MapSelection, SelectMapEvent, SpawnSet};
pub use host::SceneHost;
pub use manager::{LoadReport, MapManager};
pub use plugin::MapPlugin;
