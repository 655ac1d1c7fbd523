use std::error::Error;
use std::fmt;

use delve_board::CellCoord;
use delve_tiles::ResolveError;

/// Generation failure. Always a content problem; generation is deterministic,
/// so retrying without fixing the tile set gives the same error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MeshError {
    Resolve {
        cell: CellCoord,
        source: ResolveError,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::Resolve { cell, source } => write!(
                f,
                "tile at ({}, {}) cannot be meshed: {}",
                cell.x, cell.y, source
            ),
        }
    }
}

impl Error for MeshError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MeshError::Resolve { source, .. } => Some(source),
        }
    }
}
