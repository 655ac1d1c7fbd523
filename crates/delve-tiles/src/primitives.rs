//! Builtin part meshes so a tile set can be authored without model files.
//!
//! Everything is in part-local space: the cell spans x,z in [-0.5, 0.5] and the
//! room spans y in [0, WALL_HEIGHT]. Half-wall pieces occupy local x in
//! [0, 0.5] on the z = 0.5 edge and face back into the cell (-Z); the mesher
//! mirrors them to cover the other half.

use delve_geom::{Vec2, Vec3};

use crate::part::PartMesh;

pub const WALL_HEIGHT: f32 = 1.0;
const LINTEL_DEPTH: f32 = 0.2;
const TRIM: f32 = 0.1;

pub const BUILTIN_NAMES: [&str; 6] = [
    "floor",
    "ceiling",
    "half_wall",
    "half_corner",
    "half_inset",
    "gate",
];

pub fn builtin(name: &str) -> Option<PartMesh> {
    let mesh = match name {
        "floor" => floor(),
        "ceiling" => ceiling(),
        "half_wall" => half_wall(),
        "half_corner" => half_corner(),
        "half_inset" => half_inset(),
        "gate" => gate(),
        _ => return None,
    };
    Some(mesh)
}

fn uv_rect(u0: f32, v0: f32, u1: f32, v1: f32) -> [Vec2; 4] {
    [
        Vec2::new(u0, v0),
        Vec2::new(u1, v0),
        Vec2::new(u1, v1),
        Vec2::new(u0, v1),
    ]
}

fn horizontal(y: f32, n: Vec3) -> PartMesh {
    let mut m = PartMesh::new();
    m.add_quad(
        Vec3::new(-0.5, y, -0.5),
        Vec3::new(0.5, y, -0.5),
        Vec3::new(0.5, y, 0.5),
        Vec3::new(-0.5, y, 0.5),
        n,
        uv_rect(0.0, 0.0, 1.0, 1.0),
    );
    m
}

/// Vertical panel on the z = `z` plane between `x0` and `x1`.
fn panel_z(m: &mut PartMesh, x0: f32, x1: f32, y0: f32, y1: f32, z: f32, n: Vec3) {
    m.add_quad(
        Vec3::new(x0, y0, z),
        Vec3::new(x1, y0, z),
        Vec3::new(x1, y1, z),
        Vec3::new(x0, y1, z),
        n,
        uv_rect(x0 + 0.5, y0, x1 + 0.5, y1),
    );
}

pub fn floor() -> PartMesh {
    horizontal(0.0, Vec3::UP)
}

pub fn ceiling() -> PartMesh {
    horizontal(WALL_HEIGHT, -Vec3::UP)
}

pub fn half_wall() -> PartMesh {
    let mut m = PartMesh::new();
    panel_z(&mut m, 0.0, 0.5, 0.0, WALL_HEIGHT, 0.5, -Vec3::FORWARD);
    m
}

/// Half wall ending in a short return that faces the open diagonal.
pub fn half_corner() -> PartMesh {
    let mut m = PartMesh::new();
    panel_z(&mut m, 0.0, 0.5, 0.0, WALL_HEIGHT, 0.5, -Vec3::FORWARD);
    m.add_quad(
        Vec3::new(0.5, 0.0, 0.5 - TRIM),
        Vec3::new(0.5, 0.0, 0.5),
        Vec3::new(0.5, WALL_HEIGHT, 0.5),
        Vec3::new(0.5, WALL_HEIGHT, 0.5 - TRIM),
        Vec3::RIGHT,
        uv_rect(0.0, 0.0, TRIM, WALL_HEIGHT),
    );
    m
}

/// Shortened half wall with a chamfer into the inside corner.
pub fn half_inset() -> PartMesh {
    let mut m = PartMesh::new();
    let edge = 0.5 - TRIM;
    panel_z(&mut m, 0.0, edge, 0.0, WALL_HEIGHT, 0.5, -Vec3::FORWARD);
    m.add_quad(
        Vec3::new(edge, 0.0, 0.5),
        Vec3::new(0.5, 0.0, edge),
        Vec3::new(0.5, WALL_HEIGHT, edge),
        Vec3::new(edge, WALL_HEIGHT, 0.5),
        Vec3::new(-1.0, 0.0, -1.0).normalized(),
        uv_rect(edge + 0.5, 0.0, 1.0, WALL_HEIGHT),
    );
    m
}

/// Two-sided lintel spanning the whole doorway edge.
pub fn gate() -> PartMesh {
    let mut m = PartMesh::new();
    let y0 = WALL_HEIGHT - LINTEL_DEPTH;
    panel_z(&mut m, -0.5, 0.5, y0, WALL_HEIGHT, 0.5, -Vec3::FORWARD);
    panel_z(&mut m, -0.5, 0.5, y0, WALL_HEIGHT, 0.5, Vec3::FORWARD);
    m
}
