pub mod debug;
pub mod map;

pub use debug::DebugPlugin;
pub use map::MapPlugin;
