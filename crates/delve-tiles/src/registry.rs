use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use super::config::{PartDef, TileSetDef, TileSetsConfig};
use super::material::MaterialCatalog;
use super::part::{Model, NamedPart, PartKind, PartMesh};
use super::primitives;
use super::types::{MaterialId, NO_GATE, TileSetId};

/// Source of tile-set bundles for the mesher.
///
/// `resolve` is called at least once per generation for every tile set on the
/// board; implementations may rebuild the bundle each time since authoring
/// tools can edit parts between generations.
pub trait TileSetRegistry {
    fn resolve(&self, id: TileSetId) -> Result<ResolvedTileSet<'_>, ResolveError>;
}

/// A tile set with every part looked up; mandatory parts are guaranteed present.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedTileSet<'a> {
    pub id: TileSetId,
    pub name: &'a str,
    pub material: MaterialId,
    pub gate_priority: i32,
    pub floor: &'a PartMesh,
    pub ceiling: &'a PartMesh,
    pub wall: &'a PartMesh,
    pub corner: Option<&'a PartMesh>,
    pub inset: Option<&'a PartMesh>,
    pub gate: Option<&'a PartMesh>,
}

impl<'a> ResolvedTileSet<'a> {
    pub fn part(&self, kind: PartKind) -> Option<&'a PartMesh> {
        match kind {
            PartKind::Floor => Some(self.floor),
            PartKind::Ceiling => Some(self.ceiling),
            PartKind::Wall => Some(self.wall),
            PartKind::Corner => self.corner,
            PartKind::Inset => self.inset,
            PartKind::Gate => self.gate,
        }
    }

    /// Checks every present part's buffers; the mesher trusts them afterwards.
    pub fn validate(&self) -> Result<(), ResolveError> {
        for kind in PartKind::ALL {
            let Some(mesh) = self.part(kind) else {
                continue;
            };
            mesh.validate().map_err(|reason| ResolveError::InvalidPart {
                tile_set: self.name.to_string(),
                part: kind,
                reason,
            })?;
        }
        Ok(())
    }

    #[inline]
    pub fn initiates_gates(&self) -> bool {
        self.gate.is_some() && self.gate_priority != NO_GATE
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveError {
    UnknownTileSet(TileSetId),
    MissingPart {
        tile_set: String,
        model: String,
        part: PartKind,
    },
    InvalidPart {
        tile_set: String,
        part: PartKind,
        reason: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnknownTileSet(id) => write!(f, "unknown tile set id {}", id.0),
            ResolveError::MissingPart {
                tile_set,
                model,
                part,
            } => write!(
                f,
                "tile set '{}': model '{}' has no part whose name contains '{}'",
                tile_set,
                model,
                part.needle()
            ),
            ResolveError::InvalidPart {
                tile_set,
                part,
                reason,
            } => write!(f, "tile set '{}': {} part is invalid: {}", tile_set, part, reason),
        }
    }
}

impl Error for ResolveError {}

/// An authored tile set: material, gate priority and the model its parts are found in.
#[derive(Clone, Debug)]
pub struct TileSet {
    pub id: TileSetId,
    pub name: String,
    pub material: MaterialId,
    pub gate_priority: i32,
    pub glyph: Option<char>,
    pub model: Model,
}

impl TileSet {
    pub fn resolve(&self) -> Result<ResolvedTileSet<'_>, ResolveError> {
        let required = |kind: PartKind| {
            self.model
                .find(kind)
                .ok_or_else(|| ResolveError::MissingPart {
                    tile_set: self.name.clone(),
                    model: self.model.name.clone(),
                    part: kind,
                })
        };
        Ok(ResolvedTileSet {
            id: self.id,
            name: &self.name,
            material: self.material,
            gate_priority: self.gate_priority,
            floor: required(PartKind::Floor)?,
            ceiling: required(PartKind::Ceiling)?,
            wall: required(PartKind::Wall)?,
            corner: self.model.find(PartKind::Corner),
            inset: self.model.find(PartKind::Inset),
            gate: self.model.find(PartKind::Gate),
        })
    }
}

#[derive(Default, Clone, Debug)]
pub struct TileSetCatalog {
    pub materials: MaterialCatalog,
    pub tile_sets: Vec<TileSet>,
    pub by_name: HashMap<String, TileSetId>,
}

impl TileSetCatalog {
    pub fn new() -> Self {
        Self {
            materials: MaterialCatalog::new(),
            tile_sets: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    #[inline]
    pub fn get(&self, id: TileSetId) -> Option<&TileSet> {
        self.tile_sets.get(id.0 as usize)
    }

    /// Mutable access for authoring tools that edit bundles between generations.
    #[inline]
    pub fn get_mut(&mut self, id: TileSetId) -> Option<&mut TileSet> {
        self.tile_sets.get_mut(id.0 as usize)
    }

    pub fn id_by_name(&self, name: &str) -> Option<TileSetId> {
        self.by_name.get(name).copied()
    }

    pub fn id_by_glyph(&self, glyph: char) -> Option<TileSetId> {
        self.tile_sets
            .iter()
            .find(|t| t.glyph == Some(glyph))
            .map(|t| t.id)
    }

    pub fn len(&self) -> usize {
        self.tile_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tile_sets.is_empty()
    }

    /// Adds a tile set and returns its handle. Handles are dense, in insertion order.
    pub fn add(
        &mut self,
        name: &str,
        material: MaterialId,
        gate_priority: i32,
        glyph: Option<char>,
        model: Model,
    ) -> TileSetId {
        let id = TileSetId(self.tile_sets.len() as u16);
        self.by_name.insert(name.to_string(), id);
        self.tile_sets.push(TileSet {
            id,
            name: name.to_string(),
            material,
            gate_priority,
            glyph,
            model,
        });
        id
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: TileSetsConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn from_config(cfg: TileSetsConfig) -> Result<Self, Box<dyn Error>> {
        let mut cat = TileSetCatalog {
            materials: MaterialCatalog::from_entries(cfg.materials),
            tile_sets: Vec::new(),
            by_name: HashMap::new(),
        };
        for def in cfg.tilesets.into_iter() {
            if cat.by_name.contains_key(&def.name) {
                return Err(format!("duplicate tile set '{}'", def.name).into());
            }
            let material = cat.materials.get_id(&def.material).ok_or_else(|| {
                format!(
                    "tile set '{}' references unknown material '{}'",
                    def.name, def.material
                )
            })?;
            let model = compile_model(&def)?;
            cat.add(&def.name, material, def.gate_priority, def.glyph, model);
        }
        Ok(cat)
    }
}

impl TileSetRegistry for TileSetCatalog {
    fn resolve(&self, id: TileSetId) -> Result<ResolvedTileSet<'_>, ResolveError> {
        self.get(id)
            .ok_or(ResolveError::UnknownTileSet(id))?
            .resolve()
    }
}

fn compile_model(def: &TileSetDef) -> Result<Model, Box<dyn Error>> {
    let parts = def
        .parts
        .iter()
        .map(|p| compile_part(&def.name, p).map(|mesh| NamedPart::new(p.name.clone(), mesh)))
        .collect::<Result<Vec<_>, _>>()?;
    let name = def.model.clone().unwrap_or_else(|| def.name.clone());
    Ok(Model::new(name, parts))
}

fn compile_part(tile_set: &str, def: &PartDef) -> Result<PartMesh, Box<dyn Error>> {
    if let Some(b) = &def.builtin {
        return primitives::builtin(b).ok_or_else(|| {
            format!(
                "tile set '{}', part '{}': unknown builtin '{}' (expected one of {:?})",
                tile_set,
                def.name,
                b,
                primitives::BUILTIN_NAMES
            )
            .into()
        });
    }
    let mesh = PartMesh {
        positions: def.positions.iter().map(|&p| p.into()).collect(),
        uvs: def.uvs.iter().map(|&p| p.into()).collect(),
        normals: def.normals.iter().map(|&p| p.into()).collect(),
        indices: def.indices.clone(),
    };
    mesh.validate()
        .map_err(|e| format!("tile set '{}', part '{}': {}", tile_set, def.name, e))?;
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIT: &str = r##"
        [materials]
        stone = ["textures/stone.png"]
        wood = ["textures/wood.png"]

        [[tilesets]]
        name = "hall"
        material = "stone"
        glyph = "#"
        model = "hall_kit"
        parts = [
            { name = "Hall_Floor", builtin = "floor" },
            { name = "Hall_Ceiling", builtin = "ceiling" },
            { name = "Hall_HalfWall", builtin = "half_wall" },
            { name = "Hall_Corner", builtin = "half_corner" },
        ]

        [[tilesets]]
        name = "door"
        material = "wood"
        gate_priority = 2
        glyph = "+"
        parts = [
            { name = "floor", builtin = "floor" },
            { name = "ceiling", builtin = "ceiling" },
            { name = "wall", positions = [[0, 0, 0.5], [0.5, 0, 0.5], [0.5, 1, 0.5]], uvs = [[0, 0], [1, 0], [1, 1]], normals = [[0, 0, -1], [0, 0, -1], [0, 0, -1]], indices = [0, 1, 2] },
            { name = "gate", builtin = "gate" },
        ]
    "##;

    #[test]
    fn loads_and_resolves() {
        let cat = TileSetCatalog::from_toml_str(KIT).unwrap();
        assert_eq!(cat.len(), 2);
        let hall = cat.id_by_name("hall").unwrap();
        let door = cat.id_by_glyph('+').unwrap();
        assert_eq!(hall, TileSetId(0));
        assert_eq!(door, TileSetId(1));

        let r = cat.resolve(hall).unwrap();
        assert_eq!(r.material, cat.materials.get_id("stone").unwrap());
        assert!(r.corner.is_some());
        assert!(r.inset.is_none());
        assert!(!r.initiates_gates());

        let d = cat.resolve(door).unwrap();
        assert_eq!(d.wall.vertex_count(), 3);
        assert_eq!(d.gate_priority, 2);
        assert!(d.initiates_gates());
    }

    #[test]
    fn missing_required_part_names_model_and_kind() {
        let mut cat = TileSetCatalog::from_toml_str(KIT).unwrap();
        let hall = cat.id_by_name("hall").unwrap();
        cat.get_mut(hall)
            .unwrap()
            .model
            .parts
            .retain(|p| !p.name.contains("Ceiling"));
        let err = cat.resolve(hall).unwrap_err();
        assert_eq!(
            err,
            ResolveError::MissingPart {
                tile_set: "hall".into(),
                model: "hall_kit".into(),
                part: PartKind::Ceiling,
            }
        );
        assert!(err.to_string().contains("ceiling"));
    }

    #[test]
    fn resolved_parts_are_validated() {
        let mut cat = TileSetCatalog::from_toml_str(KIT).unwrap();
        let door = cat.id_by_name("door").unwrap();
        assert_eq!(cat.resolve(door).unwrap().validate(), Ok(()));
        let gate = cat
            .get_mut(door)
            .unwrap()
            .model
            .parts
            .iter_mut()
            .find(|p| p.name == "gate")
            .unwrap();
        gate.mesh.normals.pop();
        let err = cat.resolve(door).unwrap().validate().unwrap_err();
        assert!(matches!(
            err,
            ResolveError::InvalidPart { part: PartKind::Gate, .. }
        ));
        assert!(err.to_string().contains("door"));
    }

    #[test]
    fn unknown_id_is_an_error() {
        let cat = TileSetCatalog::new();
        assert_eq!(
            cat.resolve(TileSetId(3)).unwrap_err(),
            ResolveError::UnknownTileSet(TileSetId(3))
        );
    }

    #[test]
    fn rejects_unknown_material_and_builtin() {
        let bad_mat = r#"
            [[tilesets]]
            name = "x"
            material = "nope"
        "#;
        assert!(TileSetCatalog::from_toml_str(bad_mat).is_err());

        let bad_builtin = r#"
            [materials]
            m = ["a.png"]
            [[tilesets]]
            name = "x"
            material = "m"
            parts = [{ name = "floor", builtin = "stairs" }]
        "#;
        let err = TileSetCatalog::from_toml_str(bad_builtin).unwrap_err();
        assert!(err.to_string().contains("stairs"));
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let src = r#"
            [materials]
            m = ["a.png"]
            [[tilesets]]
            name = "x"
            material = "m"
            parts = [{ name = "floor", positions = [[0, 0, 0]], uvs = [[0, 0]], normals = [[0, 1, 0]], indices = [0, 0, 4] }]
        "#;
        assert!(TileSetCatalog::from_toml_str(src).is_err());
    }
}
