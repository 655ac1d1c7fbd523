//! Tile sets, part meshes, materials, and the registry that resolves them.
#![forbid(unsafe_code)]

pub mod config;
pub mod material;
pub mod part;
pub mod primitives;
pub mod registry;
pub mod types;

pub use material::MaterialCatalog;
pub use part::{Model, NamedPart, PartKind, PartMesh};
pub use registry::{ResolveError, ResolvedTileSet, TileSet, TileSetCatalog, TileSetRegistry};
pub use types::{MaterialId, TileSetId};
