use hashbrown::HashMap;

use delve_geom::{Vec2, Vec3};
use delve_tiles::{MaterialId, TileSetId};

use crate::BoardMeshCPU;
use crate::SubMesh;
use crate::mesh_build::MeshBuild;
use crate::placement::{Placement, PlacementStats};

/// Consumer of placements produced by the adjacency pass.
pub trait PlacementSink<'a> {
    fn place(&mut self, p: Placement<'a>);
}

impl<'a> PlacementSink<'a> for Vec<Placement<'a>> {
    #[inline]
    fn place(&mut self, p: Placement<'a>) {
        self.push(p);
    }
}

#[derive(Clone, Debug)]
struct Bucket {
    tile_set: TileSetId,
    material: MaterialId,
    build: MeshBuild,
}

/// Groups placements into one `MeshBuild` per tile set, in first-seen order.
#[derive(Default, Debug)]
pub struct MeshBatcher {
    buckets: Vec<Bucket>,
    by_tile_set: HashMap<TileSetId, usize>,
    stats: PlacementStats,
}

impl MeshBatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn stats(&self) -> PlacementStats {
        self.stats
    }

    pub fn get_build_mut(&mut self, tile_set: TileSetId, material: MaterialId) -> &mut MeshBuild {
        let buckets = &mut self.buckets;
        let ix = *self.by_tile_set.entry(tile_set).or_insert_with(|| {
            buckets.push(Bucket {
                tile_set,
                material,
                build: MeshBuild::default(),
            });
            buckets.len() - 1
        });
        &mut self.buckets[ix].build
    }

    /// Flattens the buckets into one vertex buffer with a partition per bucket.
    pub fn finish(self) -> BoardMeshCPU {
        let total_v: usize = self.buckets.iter().map(|b| b.build.vertex_count()).sum();
        let total_i: usize = self.buckets.iter().map(|b| b.build.index_count()).sum();
        let mut positions: Vec<Vec3> = Vec::with_capacity(total_v);
        let mut normals: Vec<Vec3> = Vec::with_capacity(total_v);
        let mut uvs: Vec<Vec2> = Vec::with_capacity(total_v);
        let mut indices: Vec<u32> = Vec::with_capacity(total_i);
        let mut submeshes = Vec::with_capacity(self.buckets.len());
        let mut materials = Vec::with_capacity(self.buckets.len());
        let mut tile_sets = Vec::with_capacity(self.buckets.len());
        for bucket in self.buckets {
            let b = bucket.build;
            submeshes.push(SubMesh {
                base_vertex: positions.len() as u32,
                vertex_count: b.pos.len() as u32,
                index_start: indices.len() as u32,
                index_count: b.idx.len() as u32,
            });
            positions.extend_from_slice(&b.pos);
            normals.extend_from_slice(&b.norm);
            uvs.extend_from_slice(&b.uv);
            indices.extend_from_slice(&b.idx);
            materials.push(bucket.material);
            tile_sets.push(bucket.tile_set);
        }
        BoardMeshCPU {
            positions,
            normals,
            uvs,
            indices,
            submeshes,
            materials,
            tile_sets,
            stats: self.stats,
        }
    }
}

impl<'a> PlacementSink<'a> for MeshBatcher {
    #[inline]
    fn place(&mut self, p: Placement<'a>) {
        self.stats.record(p.kind);
        self.get_build_mut(p.tile_set, p.material).add_placed(&p);
    }
}
