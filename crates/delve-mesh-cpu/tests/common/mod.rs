#![allow(dead_code)]

use delve_board::Board;
use delve_tiles::primitives;
use delve_tiles::{Model, NamedPart, TileSetCatalog, TileSetId};

#[derive(Clone, Copy)]
pub struct Kit {
    pub corner: bool,
    pub inset: bool,
    pub gate: bool,
    pub priority: i32,
}

impl Kit {
    pub const PLAIN: Kit = Kit {
        corner: false,
        inset: false,
        gate: false,
        priority: 0,
    };
    pub const FULL: Kit = Kit {
        corner: true,
        inset: true,
        gate: false,
        priority: 0,
    };

    pub fn gate(priority: i32) -> Kit {
        Kit {
            gate: true,
            priority,
            ..Kit::PLAIN
        }
    }
}

pub fn model(prefix: &str, kit: Kit) -> Model {
    let mut parts = vec![
        NamedPart::new(format!("{prefix}_Floor"), primitives::floor()),
        NamedPart::new(format!("{prefix}_Ceiling"), primitives::ceiling()),
        NamedPart::new(format!("{prefix}_HalfWall"), primitives::half_wall()),
    ];
    if kit.corner {
        parts.push(NamedPart::new(format!("{prefix}_Corner"), primitives::half_corner()));
    }
    if kit.inset {
        parts.push(NamedPart::new(format!("{prefix}_Inset"), primitives::half_inset()));
    }
    if kit.gate {
        parts.push(NamedPart::new(format!("{prefix}_Gate"), primitives::gate()));
    }
    Model::new(format!("{prefix}_kit"), parts)
}

/// One material per tile set unless `shared_material` is set.
pub fn catalog(kits: &[Kit], shared_material: bool) -> TileSetCatalog {
    let mut cat = TileSetCatalog::new();
    for (i, kit) in kits.iter().enumerate() {
        let key = if shared_material {
            "shared".to_string()
        } else {
            format!("mat{i}")
        };
        let material = cat.materials.insert(&key, Vec::new());
        let name = format!("ts{i}");
        cat.add(&name, material, kit.priority, None, model(&name, *kit));
    }
    cat
}

pub fn paint(board: &mut Board, cells: &[(i32, i32, u16)]) {
    for &(x, y, ts) in cells {
        board.set_tile_set(x, y, Some(TileSetId(ts)));
    }
}
