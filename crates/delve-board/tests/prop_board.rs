use delve_board::Board;
use delve_tiles::TileSetId;
use proptest::prelude::*;

fn dim() -> impl Strategy<Value = usize> {
    1usize..=12
}

fn paint() -> impl Strategy<Value = Vec<Option<u16>>> {
    prop::collection::vec(prop::option::of(0u16..4), 144)
}

fn painted(w: usize, h: usize, cells: &[Option<u16>]) -> Board {
    let mut b = Board::new(w, h);
    for y in 0..h {
        for x in 0..w {
            b.set_tile_set(x as i32, y as i32, cells[x + y * w].map(TileSetId));
        }
    }
    b
}

proptest! {
    // Nothing outside [0,w) x [0,h) is ever walkable, whatever is painted inside.
    #[test]
    fn off_board_never_walkable(w in dim(), h in dim(), cells in paint(), x in -20i32..40, y in -20i32..40) {
        let b = painted(w, h, &cells);
        if !b.is_valid_coord(x, y) {
            prop_assert!(!b.is_walkable(x, y));
        } else {
            prop_assert_eq!(b.is_walkable(x, y), b.tile_set(x, y).is_some());
        }
    }

    // idx is a bijection onto the storage.
    #[test]
    fn idx_unique_and_in_range(w in dim(), h in dim()) {
        let b = Board::new(w, h);
        let mut seen = vec![false; w * h];
        for y in 0..h as i32 { for x in 0..w as i32 {
            let i = b.idx(x, y);
            prop_assert!(i < w * h);
            prop_assert!(!seen[i]);
            seen[i] = true;
        }}
        prop_assert!(seen.into_iter().all(|s| s));
    }

    // Resize keeps exactly the overlap at the same coordinates and empties the rest.
    #[test]
    fn resize_keeps_overlap(w in dim(), h in dim(), nw in dim(), nh in dim(), cells in paint()) {
        let before = painted(w, h, &cells);
        let mut after = before.clone();
        after.resize(nw, nh);
        prop_assert_eq!(after.size(), (nw, nh));
        for y in 0..nh as i32 { for x in 0..nw as i32 {
            let expect = if before.is_valid_coord(x, y) { before.tile_set(x, y) } else { None };
            prop_assert_eq!(after.tile_set(x, y), expect);
        }}
    }

    // Clearing leaves every tile empty and keeps the size.
    #[test]
    fn clear_empties(w in dim(), h in dim(), cells in paint()) {
        let mut b = painted(w, h, &cells);
        b.clear();
        prop_assert_eq!(b.size(), (w, h));
        prop_assert_eq!(b.occupied_count(), 0);
        prop_assert_eq!(b.occupied().count(), 0);
    }
}
