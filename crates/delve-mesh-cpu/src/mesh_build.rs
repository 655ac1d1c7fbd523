use delve_geom::{Vec2, Vec3};

use crate::placement::Placement;

/// Vertex and index buffers for one bucket. Indices are local to this build.
#[derive(Default, Clone, Debug)]
pub struct MeshBuild {
    pub pos: Vec<Vec3>,
    pub norm: Vec<Vec3>,
    pub uv: Vec<Vec2>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.idx.len()
    }

    /// Appends one placed part: transformed vertices, then its triangles rebased
    /// onto this build's running vertex count.
    pub fn add_placed(&mut self, p: &Placement<'_>) {
        let base = self.pos.len() as u32;
        let part = p.part;
        self.pos.reserve(part.positions.len());
        self.norm.reserve(part.normals.len());
        self.pos
            .extend(part.positions.iter().map(|&v| p.transform_position(v)));
        self.norm
            .extend(part.normals.iter().map(|&n| p.transform_normal(n)));
        self.uv.extend_from_slice(&part.uvs);
        p.write_indices(base, &mut self.idx);
    }
}
