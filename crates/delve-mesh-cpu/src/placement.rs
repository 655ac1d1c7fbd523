use delve_board::{CellCoord, TILE_SIZE, cell_to_world_origin};
use delve_geom::{QuarterTurn, Vec3};
use delve_tiles::{MaterialId, PartKind, PartMesh, ResolvedTileSet, TileSetId};

/// One part instance: which mesh, whose bucket, and how to move it into the world.
#[derive(Clone, Copy, Debug)]
pub struct Placement<'a> {
    pub part: &'a PartMesh,
    pub kind: PartKind,
    pub tile_set: TileSetId,
    pub material: MaterialId,
    pub cell: CellCoord,
    pub turns: QuarterTurn,
    /// Scale -1 on local x before rotating.
    pub mirrored: bool,
}

impl<'a> Placement<'a> {
    pub fn new(
        ts: &ResolvedTileSet<'a>,
        part: &'a PartMesh,
        kind: PartKind,
        cell: CellCoord,
        turns: QuarterTurn,
        mirrored: bool,
    ) -> Self {
        Self {
            part,
            kind,
            tile_set: ts.id,
            material: ts.material,
            cell,
            turns,
            mirrored,
        }
    }

    /// World position of the part's local origin: the cell centre on the floor.
    #[inline]
    pub fn offset(&self) -> Vec3 {
        cell_to_world_origin(self.cell.x, self.cell.y) + Vec3::new(0.5, 0.0, 0.5) * TILE_SIZE
    }

    #[inline]
    pub fn transform_position(&self, p: Vec3) -> Vec3 {
        let p = if self.mirrored { p.mirror_x() } else { p };
        self.turns.rotate(p) + self.offset()
    }

    /// Normals take the same linear part as positions: reflect, then rotate.
    #[inline]
    pub fn transform_normal(&self, n: Vec3) -> Vec3 {
        let n = if self.mirrored { n.mirror_x() } else { n };
        self.turns.rotate(n)
    }

    /// Appends this instance's triangles to `out`, offset by `base`.
    /// Mirrored instances swap the 2nd and 3rd index of each triangle.
    pub fn write_indices(&self, base: u32, out: &mut Vec<u32>) {
        out.reserve(self.part.indices.len());
        for tri in self.part.indices.chunks_exact(3) {
            if self.mirrored {
                out.extend_from_slice(&[base + tri[0], base + tri[2], base + tri[1]]);
            } else {
                out.extend_from_slice(&[base + tri[0], base + tri[1], base + tri[2]]);
            }
        }
    }
}

/// Instance counts per part kind for one generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlacementStats {
    counts: [usize; 6],
}

impl PlacementStats {
    #[inline]
    pub fn record(&mut self, kind: PartKind) {
        self.counts[kind.index()] += 1;
    }

    #[inline]
    pub fn count(&self, kind: PartKind) -> usize {
        self.counts[kind.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn from_placements<'p, 'a: 'p>(
        placements: impl IntoIterator<Item = &'p Placement<'a>>,
    ) -> Self {
        let mut s = PlacementStats::default();
        for p in placements {
            s.record(p.kind);
        }
        s
    }
}
