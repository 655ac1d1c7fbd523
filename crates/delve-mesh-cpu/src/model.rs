use delve_board::Board;
use delve_tiles::TileSetRegistry;

use crate::{BoardMeshCPU, MeshError, build_board_mesh};

/// Owns a board and the last mesh successfully built from it.
///
/// Edits go through `board_mut`, which marks the mesh stale. `regenerate`
/// swaps in a new mesh only once it is complete; on error the previous mesh
/// stays in place.
#[derive(Default, Debug)]
pub struct BoardModel {
    board: Board,
    mesh: Option<BoardMeshCPU>,
    rev: u64,
    built: Option<u64>,
}

impl BoardModel {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            mesh: None,
            rev: 0,
            built: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        self.rev = self.rev.wrapping_add(1);
        &mut self.board
    }

    #[inline]
    pub fn mesh(&self) -> Option<&BoardMeshCPU> {
        self.mesh.as_ref()
    }

    /// True when the board changed since the current mesh was built (or none exists).
    pub fn is_stale(&self) -> bool {
        self.built != Some(self.rev)
    }

    pub fn regenerate<R: TileSetRegistry + ?Sized>(
        &mut self,
        registry: &R,
    ) -> Result<&BoardMeshCPU, MeshError> {
        let mesh = build_board_mesh(&self.board, registry)?;
        self.built = Some(self.rev);
        Ok(self.mesh.insert(mesh))
    }
}
