//! ASCII layout painting for the demo driver.
//!
//! Each line is a board row (`y`), each character a tile (`x`). A character
//! equal to some tile set's glyph paints that tile set; `.` and spaces leave
//! the tile empty.

use delve_board::Board;
use delve_tiles::TileSetCatalog;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutReport {
    pub painted: usize,
    /// Characters that match no glyph; left empty.
    pub unknown: usize,
    /// Non-empty characters outside the board.
    pub clipped: usize,
}

pub fn paint_layout(board: &mut Board, text: &str, catalog: &TileSetCatalog) -> LayoutReport {
    let mut report = LayoutReport::default();
    for (y, line) in text.lines().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            if ch == '.' || ch == ' ' {
                continue;
            }
            let (x, y) = (x as i32, y as i32);
            if !board.is_valid_coord(x, y) {
                report.clipped += 1;
                continue;
            }
            match catalog.id_by_glyph(ch) {
                Some(id) => {
                    board.set_tile_set(x, y, Some(id));
                    report.painted += 1;
                }
                None => {
                    log::warn!("layout ({}, {}): no tile set uses glyph {:?}", x, y, ch);
                    report.unknown += 1;
                }
            }
        }
    }
    if report.clipped > 0 {
        log::warn!(
            "layout is larger than the {}x{} board; {} tiles dropped",
            board.width(),
            board.height(),
            report.clipped
        );
    }
    report
}
