//! Board storage: a fixed-size grid of tiles, each optionally painted with a tile set.
#![forbid(unsafe_code)]

use core::ops::{Add, Sub};

use delve_geom::Vec3;
use delve_tiles::TileSetId;

pub const TILE_SIZE: f32 = 1.0;
pub const DEFAULT_WIDTH: usize = 64;
pub const DEFAULT_HEIGHT: usize = 64;

/// Integer cell coordinate. `y` is the board row and maps to world Z.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for CellCoord {
    type Output = CellCoord;
    #[inline]
    fn add(self, rhs: CellCoord) -> CellCoord {
        CellCoord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for CellCoord {
    type Output = CellCoord;
    #[inline]
    fn sub(self, rhs: CellCoord) -> CellCoord {
        CellCoord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pub tile_set: Option<TileSetId>,
}

impl Tile {
    pub const EMPTY: Tile = Tile { tile_set: None };
}

#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::EMPTY; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Row-major index. Caller guarantees the coordinate is valid.
    #[inline]
    pub fn idx(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.is_valid_coord(x, y), "({x}, {y}) outside board");
        x as usize + y as usize * self.width
    }

    #[inline]
    pub fn is_valid_coord(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// False for empty tiles and for anything off the board; never panics.
    #[inline]
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.is_valid_coord(x, y) && self.tiles[self.idx(x, y)].tile_set.is_some()
    }

    #[inline]
    pub fn is_walkable_at(&self, c: CellCoord) -> bool {
        self.is_walkable(c.x, c.y)
    }

    /// Unchecked read: the coordinate must be valid.
    #[inline]
    pub fn tile_set(&self, x: i32, y: i32) -> Option<TileSetId> {
        self.tiles[self.idx(x, y)].tile_set
    }

    /// Unchecked write: the coordinate must be valid.
    #[inline]
    pub fn set_tile_set(&mut self, x: i32, y: i32, tile_set: Option<TileSetId>) {
        let i = self.idx(x, y);
        self.tiles[i].tile_set = tile_set;
    }

    /// Reallocates to `new_width` x `new_height`, keeping the overlapping region.
    /// Tiles outside the new bounds are dropped.
    pub fn resize(&mut self, new_width: usize, new_height: usize) {
        let mut tiles = vec![Tile::EMPTY; new_width * new_height];
        let keep_w = self.width.min(new_width);
        let keep_h = self.height.min(new_height);
        for y in 0..keep_h {
            let src = y * self.width;
            let dst = y * new_width;
            tiles[dst..dst + keep_w].copy_from_slice(&self.tiles[src..src + keep_w]);
        }
        self.width = new_width;
        self.height = new_height;
        self.tiles = tiles;
    }

    pub fn clear(&mut self) {
        self.tiles.fill(Tile::EMPTY);
    }

    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.tile_set.is_some()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    /// Occupied cells, `x` outer and `y` inner.
    pub fn occupied(&self) -> impl Iterator<Item = (CellCoord, TileSetId)> + '_ {
        (0..self.width as i32).flat_map(move |x| {
            (0..self.height as i32).filter_map(move |y| {
                self.tile_set(x, y).map(|ts| (CellCoord::new(x, y), ts))
            })
        })
    }
}

/// Minimum corner of a cell in world space.
#[inline]
pub fn cell_to_world_origin(x: i32, y: i32) -> Vec3 {
    Vec3::new(x as f32, 0.0, y as f32) * TILE_SIZE
}

/// Floors a world position onto the cell containing it.
#[inline]
pub fn world_to_cell(pos: Vec3) -> CellCoord {
    let p = pos / TILE_SIZE;
    CellCoord::new(p.x.floor() as i32, p.z.floor() as i32)
}

/// Rounds a (near-)axis direction to a one-cell step.
#[inline]
pub fn direction_to_cell_delta(dir: Vec3) -> CellCoord {
    CellCoord::new(dir.x.round() as i32, dir.z.round() as i32)
}

/// Snaps a world position to the centre of its cell (y is reset to the floor).
#[inline]
pub fn world_to_cell_center(pos: Vec3) -> Vec3 {
    let c = world_to_cell(pos);
    cell_to_world_origin(c.x, c.y) + Vec3::new(0.5, 0.0, 0.5) * TILE_SIZE
}
