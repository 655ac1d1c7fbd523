//! CPU board mesher: adjacency-driven part placement and per-tile-set batching.
#![forbid(unsafe_code)]

use delve_board::Board;
use delve_geom::{Aabb, Vec2, Vec3};
use delve_tiles::{MaterialId, TileSetId, TileSetRegistry};

pub mod adjacency;
pub mod batch;
mod error;
pub mod mesh_build;
mod model;
pub mod placement;

pub use adjacency::{SideWalls, WallHalf, plan_board};
pub use batch::{MeshBatcher, PlacementSink};
pub use error::MeshError;
pub use mesh_build::MeshBuild;
pub use model::BoardModel;
pub use placement::{Placement, PlacementStats};

/// A contiguous slice of the combined buffers drawn with one material.
/// Indices in the slice are relative to `base_vertex`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubMesh {
    pub base_vertex: u32,
    pub vertex_count: u32,
    pub index_start: u32,
    pub index_count: u32,
}

/// Combined board mesh ready for upload: shared vertex streams plus one
/// partition, material and tile set per bucket (all in the same order).
#[derive(Clone, Debug, Default)]
pub struct BoardMeshCPU {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
    pub submeshes: Vec<SubMesh>,
    pub materials: Vec<MaterialId>,
    pub tile_sets: Vec<TileSetId>,
    pub stats: PlacementStats,
}

impl BoardMeshCPU {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.submeshes.is_empty()
    }

    /// Bucket-local indices of partition `i`.
    pub fn submesh_indices(&self, i: usize) -> &[u32] {
        let sm = self.submeshes[i];
        let start = sm.index_start as usize;
        &self.indices[start..start + sm.index_count as usize]
    }

    /// Triangles of partition `i` as indices into the combined vertex streams.
    pub fn submesh_triangles(&self, i: usize) -> impl Iterator<Item = [u32; 3]> + '_ {
        let base = self.submeshes[i].base_vertex;
        self.submesh_indices(i)
            .chunks_exact(3)
            .map(move |t| [base + t[0], base + t[1], base + t[2]])
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.positions.iter().copied())
    }
}

/// Builds the whole board from scratch.
///
/// Fails without producing anything if an occupied tile's tile set does not
/// resolve (unknown handle, missing floor, ceiling or wall part, or a part with
/// mismatched buffers or out-of-range indices).
pub fn build_board_mesh<R: TileSetRegistry + ?Sized>(
    board: &Board,
    registry: &R,
) -> Result<BoardMeshCPU, MeshError> {
    let mut batcher = MeshBatcher::new();
    plan_board(board, registry, &mut batcher)?;
    let buckets = batcher.bucket_count();
    let mesh = batcher.finish();
    log::debug!(
        "board mesh: {} vertices, {} indices, {} submeshes from {} placements",
        mesh.vertex_count(),
        mesh.index_count(),
        buckets,
        mesh.stats.total()
    );
    Ok(mesh)
}
