/// Stable handle for a tile set; the mesher groups buckets by it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileSetId(pub u16);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u16);

/// Gate priority meaning "never initiates a gate".
pub const NO_GATE: i32 = 0;
