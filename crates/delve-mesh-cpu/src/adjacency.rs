//! Per-cell part selection: floor, ceiling, wall halves and gates.

use hashbrown::HashMap;

use delve_board::{Board, CellCoord, direction_to_cell_delta};
use delve_geom::QuarterTurn;
use delve_tiles::{
    PartKind, PartMesh, ResolvedTileSet, TileSetId, TileSetRegistry, types::NO_GATE,
};

use crate::batch::PlacementSink;
use crate::error::MeshError;
use crate::placement::Placement;

/// Which piece fills one half of a wall side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WallHalf {
    Plain,
    Corner,
    Inset,
}

/// The two halves of a blocked side. `left` is placed as authored, `right` mirrored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SideWalls {
    pub left: WallHalf,
    pub right: WallHalf,
}

/// Unit cell steps for a side: `(forward, right)`.
#[inline]
fn side_axes(turn: QuarterTurn) -> (CellCoord, CellCoord) {
    (
        direction_to_cell_delta(turn.forward()),
        direction_to_cell_delta(turn.right()),
    )
}

/// Decides the wall halves for the side of `cell` facing `turn`, or `None` when
/// the neighbor that way is walkable.
///
/// Each half looks at the straight neighbor beside `cell` and the diagonal
/// beside the blocked neighbor on its own side. Inset wins over corner, corner
/// over plain; a variant is only chosen when the tile set has that part.
pub fn wall_halves(
    board: &Board,
    cell: CellCoord,
    turn: QuarterTurn,
    has_corner: bool,
    has_inset: bool,
) -> Option<SideWalls> {
    let (forward, right) = side_axes(turn);
    let front = cell + forward;
    if board.is_walkable_at(front) {
        return None;
    }
    let pick = |diagonal: CellCoord, straight: CellCoord| {
        if has_inset && !board.is_walkable_at(straight) {
            WallHalf::Inset
        } else if has_corner && board.is_walkable_at(diagonal) {
            WallHalf::Corner
        } else {
            WallHalf::Plain
        }
    };
    Some(SideWalls {
        left: pick(front + right, cell + right),
        right: pick(front - right, cell - right),
    })
}

/// Tile set across the side facing `turn` when that side is a clean doorway:
/// the neighbor is walkable, painted with a different tile set, and both cells
/// beside the neighbor are blocked. Priority is checked by the caller.
pub fn gate_candidate(
    board: &Board,
    cell: CellCoord,
    turn: QuarterTurn,
    here: TileSetId,
) -> Option<(CellCoord, TileSetId)> {
    let (forward, right) = side_axes(turn);
    let front = cell + forward;
    if !board.is_walkable_at(front) {
        return None;
    }
    let there = board.tile_set(front.x, front.y)?;
    if there == here {
        return None;
    }
    if board.is_walkable_at(front + right) || board.is_walkable_at(front - right) {
        return None;
    }
    Some((front, there))
}

/// Strictly-greater, non-zero priority: only one side of a doorway draws the gate.
#[inline]
pub fn wins_gate(here: i32, there: i32) -> bool {
    here != NO_GATE && here > there
}

fn half_part<'a>(ts: &ResolvedTileSet<'a>, half: WallHalf) -> (&'a PartMesh, PartKind) {
    match (half, ts.inset, ts.corner) {
        (WallHalf::Inset, Some(m), _) => (m, PartKind::Inset),
        (WallHalf::Corner, _, Some(m)) => (m, PartKind::Corner),
        _ => (ts.wall, PartKind::Wall),
    }
}

/// Resolves and validates each tile set once per generation.
pub struct ResolveCache<'r, R: TileSetRegistry + ?Sized> {
    registry: &'r R,
    resolved: HashMap<TileSetId, ResolvedTileSet<'r>>,
}

impl<'r, R: TileSetRegistry + ?Sized> ResolveCache<'r, R> {
    pub fn new(registry: &'r R) -> Self {
        Self {
            registry,
            resolved: HashMap::new(),
        }
    }

    pub fn get(&mut self, id: TileSetId, cell: CellCoord) -> Result<ResolvedTileSet<'r>, MeshError> {
        if let Some(ts) = self.resolved.get(&id) {
            return Ok(*ts);
        }
        let ts = self
            .registry
            .resolve(id)
            .and_then(|ts| ts.validate().map(|()| ts))
            .map_err(|source| MeshError::Resolve { cell, source })?;
        self.resolved.insert(id, ts);
        Ok(ts)
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}

/// Emits every placement for one occupied cell.
pub fn plan_cell<'r, R: TileSetRegistry + ?Sized>(
    board: &Board,
    cell: CellCoord,
    here: &ResolvedTileSet<'r>,
    cache: &mut ResolveCache<'r, R>,
    sink: &mut impl PlacementSink<'r>,
) -> Result<(), MeshError> {
    sink.place(Placement::new(
        here,
        here.floor,
        PartKind::Floor,
        cell,
        QuarterTurn::ZERO,
        false,
    ));
    sink.place(Placement::new(
        here,
        here.ceiling,
        PartKind::Ceiling,
        cell,
        QuarterTurn::ZERO,
        false,
    ));

    for turn in QuarterTurn::ALL {
        let Some(side) = wall_halves(
            board,
            cell,
            turn,
            here.corner.is_some(),
            here.inset.is_some(),
        ) else {
            continue;
        };
        let (left, left_kind) = half_part(here, side.left);
        let (right, right_kind) = half_part(here, side.right);
        sink.place(Placement::new(here, left, left_kind, cell, turn, false));
        sink.place(Placement::new(here, right, right_kind, cell, turn, true));
    }

    let Some(gate) = here.gate else {
        return Ok(());
    };
    for turn in QuarterTurn::ALL {
        let Some((front, other)) = gate_candidate(board, cell, turn, here.id) else {
            continue;
        };
        let there = cache.get(other, front)?;
        if wins_gate(here.gate_priority, there.gate_priority) {
            sink.place(Placement::new(here, gate, PartKind::Gate, cell, turn, true));
        }
    }
    Ok(())
}

/// Runs the adjacency pass over every occupied cell, `x` outer and `y` inner.
/// Stops at the first tile set that fails to resolve.
pub fn plan_board<'r, R: TileSetRegistry + ?Sized>(
    board: &Board,
    registry: &'r R,
    sink: &mut impl PlacementSink<'r>,
) -> Result<(), MeshError> {
    let mut cache = ResolveCache::new(registry);
    for (cell, id) in board.occupied() {
        let here = cache.get(id, cell)?;
        plan_cell(board, cell, &here, &mut cache, sink)?;
    }
    log::debug!(
        "planned {} occupied cells using {} tile sets",
        board.occupied_count(),
        cache.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(i32, i32)]) -> Board {
        let mut b = Board::new(5, 5);
        for &(x, y) in cells {
            b.set_tile_set(x, y, Some(TileSetId(0)));
        }
        b
    }

    #[test]
    fn open_side_has_no_wall() {
        let b = board_with(&[(2, 2), (2, 3)]);
        // Turn 0 faces +y on the board.
        assert_eq!(wall_halves(&b, CellCoord::new(2, 2), QuarterTurn::ZERO, true, true), None);
    }

    #[test]
    fn isolated_cell_gets_plain_or_inset() {
        let b = board_with(&[(2, 2)]);
        let c = CellCoord::new(2, 2);
        for t in QuarterTurn::ALL {
            let plain = wall_halves(&b, c, t, true, false).unwrap();
            assert_eq!(plain, SideWalls { left: WallHalf::Plain, right: WallHalf::Plain });
            let inset = wall_halves(&b, c, t, true, true).unwrap();
            assert_eq!(inset, SideWalls { left: WallHalf::Inset, right: WallHalf::Inset });
        }
    }

    #[test]
    fn corner_needs_open_diagonal_and_part() {
        // L-shape: (2,2) -> (3,2) -> (3,3). North of (2,2) is blocked, its
        // right (+x) diagonal (3,3) is open.
        let b = board_with(&[(2, 2), (3, 2), (3, 3)]);
        let c = CellCoord::new(2, 2);
        let side = wall_halves(&b, c, QuarterTurn::ZERO, true, true).unwrap();
        assert_eq!(side.left, WallHalf::Corner);
        assert_eq!(side.right, WallHalf::Inset);
        let no_corner = wall_halves(&b, c, QuarterTurn::ZERO, false, false).unwrap();
        assert_eq!(no_corner.left, WallHalf::Plain);
    }

    #[test]
    fn inset_beats_corner() {
        // Diagonal (3,3) is open but the straight neighbor (3,2) is blocked.
        let b = board_with(&[(2, 2), (3, 3)]);
        let side = wall_halves(&b, CellCoord::new(2, 2), QuarterTurn::ZERO, true, true).unwrap();
        assert_eq!(side.left, WallHalf::Inset);
        let side = wall_halves(&b, CellCoord::new(2, 2), QuarterTurn::ZERO, true, false).unwrap();
        assert_eq!(side.left, WallHalf::Corner);
    }

    #[test]
    fn gate_requires_clean_doorway() {
        let mut b = Board::new(5, 5);
        b.set_tile_set(1, 2, Some(TileSetId(0)));
        b.set_tile_set(2, 2, Some(TileSetId(1)));
        let c = CellCoord::new(1, 2);
        let east = QuarterTurn::new(1);
        assert_eq!(
            gate_candidate(&b, c, east, TileSetId(0)),
            Some((CellCoord::new(2, 2), TileSetId(1)))
        );
        // Same tile set: no gate.
        assert_eq!(gate_candidate(&b, c, east, TileSetId(1)), None);
        // Opening beside the neighbor spoils the doorway.
        b.set_tile_set(2, 3, Some(TileSetId(1)));
        assert_eq!(gate_candidate(&b, c, east, TileSetId(0)), None);
    }

    #[test]
    fn gate_priority_is_strict() {
        assert!(wins_gate(3, 1));
        assert!(!wins_gate(2, 2));
        assert!(!wins_gate(1, 3));
        assert!(!wins_gate(0, -1));
    }
}
