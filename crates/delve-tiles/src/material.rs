use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::types::MaterialId;

#[derive(Clone, Debug)]
pub struct Material {
    pub id: MaterialId,
    pub key: String,
    pub texture_candidates: Vec<PathBuf>,
}

#[derive(Default, Clone, Debug)]
pub struct MaterialCatalog {
    pub materials: Vec<Material>,
    pub by_key: HashMap<String, MaterialId>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    pub fn get_id(&self, key: &str) -> Option<MaterialId> {
        self.by_key.get(key).copied()
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize)
    }

    pub fn key_of(&self, id: MaterialId) -> Option<&str> {
        self.get(id).map(|m| m.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Registers `key` (or returns its existing id).
    pub fn insert(&mut self, key: &str, texture_candidates: Vec<PathBuf>) -> MaterialId {
        if let Some(id) = self.get_id(key) {
            return id;
        }
        let id = MaterialId(self.materials.len() as u16);
        self.by_key.insert(key.to_string(), id);
        self.materials.push(Material {
            id,
            key: key.to_string(),
            texture_candidates,
        });
        id
    }

    pub fn from_entries(entries: HashMap<String, MaterialEntry>) -> Self {
        let mut catalog = MaterialCatalog::new();
        let mut entries: Vec<(String, MaterialEntry)> = entries.into_iter().collect();
        // HashMap iteration order is nondeterministic; sort keys so MaterialId assignment is stable.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, entry) in entries {
            let paths = match entry {
                MaterialEntry::Paths(v) => v,
                MaterialEntry::Detail { paths } => paths,
            };
            catalog.insert(&key, paths.into_iter().map(PathBuf::from).collect());
        }
        catalog
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: MaterialsConfig = toml::from_str(toml_str)?;
        Ok(Self::from_entries(cfg.materials))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct MaterialsConfig {
    pub materials: HashMap<String, MaterialEntry>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum MaterialEntry {
    // Simple: material = ["textures/foo.png", ...]
    Paths(Vec<String>),
    // Detailed: material = { paths = ["..."] }
    Detail { paths: Vec<String> },
}
