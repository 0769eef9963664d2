pub mod core;
pub mod plugins;

pub use plugins::{DebugPlugin, MapPlugin};
