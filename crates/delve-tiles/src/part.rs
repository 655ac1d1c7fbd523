use std::fmt;

use delve_geom::{Vec2, Vec3};

/// The role a part mesh plays in a tile set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PartKind {
    Floor = 0,
    Ceiling = 1,
    Wall = 2,
    Corner = 3,
    Inset = 4,
    Gate = 5,
}

impl PartKind {
    pub const ALL: [PartKind; 6] = [
        PartKind::Floor,
        PartKind::Ceiling,
        PartKind::Wall,
        PartKind::Corner,
        PartKind::Inset,
        PartKind::Gate,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case substring a model child's name must contain to be picked for this kind.
    #[inline]
    pub fn needle(self) -> &'static str {
        match self {
            PartKind::Floor => "floor",
            PartKind::Ceiling => "ceiling",
            PartKind::Wall => "wall",
            PartKind::Corner => "corner",
            PartKind::Inset => "inset",
            PartKind::Gate => "gate",
        }
    }

    #[inline]
    pub fn is_required(self) -> bool {
        matches!(self, PartKind::Floor | PartKind::Ceiling | PartKind::Wall)
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.needle())
    }
}

/// Geometry for one reusable piece, in part-local space centred on the cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartMesh {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl PartMesh {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Appends a quad `a,b,c,d` (in order around the edge) with per-vertex UVs.
    /// Triangles are wound so that their geometric normal agrees with `n`.
    pub fn add_quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3, n: Vec3, uvs: [Vec2; 4]) {
        let base = self.positions.len() as u32;
        let mut vs = [a, b, c, d];
        let mut uvs = uvs;
        let cross = (vs[1] - vs[0]).cross(vs[2] - vs[0]);
        if cross.dot(n) < 0.0 {
            vs.swap(1, 3);
            uvs.swap(1, 3);
        }
        for i in 0..4 {
            self.positions.push(vs[i]);
            self.uvs.push(uvs[i]);
            self.normals.push(n);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Checks that the buffers are parallel and the triangle list is well formed.
    pub fn validate(&self) -> Result<(), String> {
        let n = self.positions.len();
        if self.uvs.len() != n || self.normals.len() != n {
            return Err(format!(
                "buffer lengths differ: {} positions, {} uvs, {} normals",
                n,
                self.uvs.len(),
                self.normals.len()
            ));
        }
        if self.indices.len() % 3 != 0 {
            return Err(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            ));
        }
        if let Some(bad) = self.indices.iter().find(|&&i| i as usize >= n) {
            return Err(format!("index {} out of range for {} vertices", bad, n));
        }
        Ok(())
    }
}

/// A named child of a tile set's model.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedPart {
    pub name: String,
    pub mesh: PartMesh,
}

impl NamedPart {
    pub fn new(name: impl Into<String>, mesh: PartMesh) -> Self {
        Self {
            name: name.into(),
            mesh,
        }
    }
}

/// A bundle of named part meshes from which a tile set's parts are discovered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub name: String,
    pub parts: Vec<NamedPart>,
}

impl Model {
    pub fn new(name: impl Into<String>, parts: Vec<NamedPart>) -> Self {
        Self {
            name: name.into(),
            parts,
        }
    }

    /// First child whose lower-cased name contains the kind's needle.
    ///
    /// `wall` skips children that also name another kind ("WallCorner",
    /// "inset_wall"), so those never shadow the plain half-wall.
    pub fn find(&self, kind: PartKind) -> Option<&PartMesh> {
        self.parts
            .iter()
            .find(|p| {
                let name = p.name.to_lowercase();
                if !name.contains(kind.needle()) {
                    return false;
                }
                kind != PartKind::Wall
                    || ![PartKind::Corner, PartKind::Inset, PartKind::Gate]
                        .iter()
                        .any(|k| name.contains(k.needle()))
            })
            .map(|p| &p.mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> PartMesh {
        PartMesh {
            positions: vec![Vec3::ZERO, Vec3::RIGHT, Vec3::UP],
            uvs: vec![Vec2::default(); 3],
            normals: vec![Vec3::FORWARD; 3],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn find_is_case_insensitive_substring() {
        let model = Model::new(
            "kit",
            vec![
                NamedPart::new("TheFloor2", tri()),
                NamedPart::new("CEILING", tri()),
            ],
        );
        assert!(model.find(PartKind::Floor).is_some());
        assert!(model.find(PartKind::Ceiling).is_some());
        assert!(model.find(PartKind::Gate).is_none());
    }

    #[test]
    fn wall_is_not_shadowed_by_variants() {
        let mut corner = tri();
        corner.positions[0] = Vec3::new(9.0, 0.0, 0.0);
        let model = Model::new(
            "kit",
            vec![
                NamedPart::new("WallCorner", corner.clone()),
                NamedPart::new("HalfWall", tri()),
            ],
        );
        assert_eq!(model.find(PartKind::Wall), Some(&tri()));
        assert_eq!(model.find(PartKind::Corner), Some(&corner));
    }

    #[test]
    fn add_quad_winds_toward_normal() {
        let mut m = PartMesh::new();
        let n = Vec3::UP;
        // Deliberately clockwise when seen from +Y.
        m.add_quad(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
            n,
            [Vec2::default(); 4],
        );
        for t in m.indices.chunks_exact(3) {
            let (a, b, c) = (
                m.positions[t[0] as usize],
                m.positions[t[1] as usize],
                m.positions[t[2] as usize],
            );
            assert!((b - a).cross(c - a).dot(n) > 0.0);
        }
        assert!(m.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_buffers() {
        let mut m = tri();
        m.indices.push(7);
        assert!(m.validate().is_err());
        let mut m = tri();
        m.uvs.pop();
        assert!(m.validate().is_err());
    }
}
