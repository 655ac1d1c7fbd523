use std::collections::HashMap;

use serde::Deserialize;

use crate::material::MaterialEntry;

/// Top-level tile-set catalog file.
#[derive(Clone, Debug, Deserialize)]
pub struct TileSetsConfig {
    #[serde(default)]
    pub materials: HashMap<String, MaterialEntry>,
    #[serde(default)]
    pub tilesets: Vec<TileSetDef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TileSetDef {
    pub name: String,
    pub material: String,
    #[serde(default)]
    pub gate_priority: i32,
    #[serde(default)]
    pub glyph: Option<char>,
    /// Model name used in diagnostics; defaults to the tile set's name.
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub parts: Vec<PartDef>,
}

/// One model child: either a builtin primitive or inline geometry.
#[derive(Clone, Debug, Deserialize)]
pub struct PartDef {
    pub name: String,
    #[serde(default)]
    pub builtin: Option<String>,
    #[serde(default)]
    pub positions: Vec<[f32; 3]>,
    #[serde(default)]
    pub uvs: Vec<[f32; 2]>,
    #[serde(default)]
    pub normals: Vec<[f32; 3]>,
    #[serde(default)]
    pub indices: Vec<u32>,
}
