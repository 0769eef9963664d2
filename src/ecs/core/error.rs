use std::path::PathBuf;
use thiserror::Error;

use crate::ecs::core::components::{PlaceholderShape, SpawnRole};

/// Everything that can go wrong while selecting or loading a map.
///
/// None of these are fatal: the manager always stays in a well-defined state
/// and the error is logged where it happens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("no maps available in the map manager")]
    EmptyRegistry,

    #[error("map index {index} is out of range ({len} maps available)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no map named '{0}'")]
    NameNotFound(String),

    #[error("attempted to load a missing map configuration")]
    NullConfiguration,

    #[error("no {kind} visual assigned, {positions} {kind} object(s) will not be spawned")]
    MissingVisualAsset { kind: SpawnRole, positions: usize },

    #[error("no {kind} visual assigned, spawned a default {shape}")]
    PlaceholderSubstituted {
        kind: SpawnRole,
        shape: PlaceholderShape,
    },

    #[error("failed to read map settings from {path:?}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("failed to parse map settings: {0}")]
    Parse(String),
}

impl MapError {
    /// Warnings still let a load complete; everything else rejects the request.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            MapError::MissingVisualAsset { .. } | MapError::PlaceholderSubstituted { .. }
        )
    }
}
