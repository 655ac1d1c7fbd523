//! Wavefront OBJ dump of a combined board mesh, one `usemtl` group per submesh,
//! plus the matching MTL library.

use std::io::{self, Write};

use delve_mesh_cpu::BoardMeshCPU;
use delve_tiles::{MaterialCatalog, MaterialId};

fn material_name(materials: &MaterialCatalog, mat: MaterialId) -> String {
    match materials.key_of(mat) {
        Some(key) => key.to_string(),
        None => format!("material_{}", mat.0),
    }
}

/// `mtllib`, when given, names the library written by [`write_mtl`].
pub fn write_obj(
    mesh: &BoardMeshCPU,
    materials: &MaterialCatalog,
    mtllib: Option<&str>,
    out: &mut impl Write,
) -> io::Result<()> {
    if let Some(lib) = mtllib {
        writeln!(out, "mtllib {}", lib)?;
    }
    writeln!(out, "o board")?;
    for p in &mesh.positions {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for uv in &mesh.uvs {
        writeln!(out, "vt {} {}", uv.x, uv.y)?;
    }
    for n in &mesh.normals {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for (i, &mat) in mesh.materials.iter().enumerate() {
        writeln!(out, "usemtl {}", material_name(materials, mat))?;
        // OBJ indices are global and 1-based.
        for [a, b, c] in mesh.submesh_triangles(i) {
            let (a, b, c) = (a + 1, b + 1, c + 1);
            writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
        }
    }
    out.flush()
}

/// One `newmtl` per material the mesh uses, in first-use order. The first
/// texture candidate becomes the diffuse map.
pub fn write_mtl(
    mesh: &BoardMeshCPU,
    materials: &MaterialCatalog,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut seen: Vec<MaterialId> = Vec::new();
    for &mat in &mesh.materials {
        if seen.contains(&mat) {
            continue;
        }
        seen.push(mat);
        writeln!(out, "newmtl {}", material_name(materials, mat))?;
        writeln!(out, "Kd 1 1 1")?;
        let texture = materials
            .get(mat)
            .and_then(|m| m.texture_candidates.first());
        match texture {
            Some(path) => writeln!(out, "map_Kd {}", path.display())?,
            None => log::warn!("material {:?} has no texture candidates", mat),
        }
        writeln!(out)?;
    }
    out.flush()
}
