use tracing::debug;

use super::error::LevelError;
use super::flood_fill::flood_fill;
use super::grid::TileGrid;
use super::normalize::LevelDraft;
use super::types::{TilePosition, TileType};

/// Cells per tile type, indexed by [`TileType::ordinal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileCensus {
    counts: [usize; TileType::COUNT],
}

impl TileCensus {
    pub fn of(grid: &TileGrid) -> Self {
        let mut counts = [0usize; TileType::COUNT];
        for cell in grid.cells() {
            counts[cell.ordinal()] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, tile: TileType) -> usize {
        self.counts[tile.ordinal()]
    }

    pub fn is_fully_classified(&self) -> bool {
        self.count(TileType::Undefined) == 0 && self.count(TileType::Wall) == 0
    }
}

/// Floods the player's region with `Floor`, then checks every box and
/// destination landed on it.
pub fn fill_floor(mut draft: LevelDraft) -> Result<LevelDraft, LevelError> {
    let filled = flood_fill(&mut draft.grid, draft.actors.player, TileType::Floor)?;
    for (actor, position) in draft.actors.iter_placed() {
        let found = draft.grid.get_at(position)?;
        if found != TileType::Floor {
            return Err(LevelError::ActorOffFloor {
                actor,
                position: position + draft.offset.negated(),
                found,
            });
        }
    }
    debug!(filled, "floor_filled");
    Ok(draft)
}

const CORNER: TilePosition = TilePosition::new(0, 0);

fn ensure_corner_void_eligible(grid: &TileGrid) -> Result<(), LevelError> {
    let found = grid.get_at(CORNER)?;
    if found != TileType::Undefined {
        return Err(LevelError::CornerNotVoidEligible { found });
    }
    Ok(())
}

/// Floods the outside region from the corner with `Void`.
pub fn fill_void(mut draft: LevelDraft) -> Result<LevelDraft, LevelError> {
    ensure_corner_void_eligible(&draft.grid)?;
    let filled = flood_fill(&mut draft.grid, CORNER, TileType::Void)?;
    debug!(filled, "void_filled");
    Ok(draft)
}

/// Turns every remaining enclosed pocket into its own `Water` fill.
pub fn fill_ponds(mut draft: LevelDraft) -> Result<LevelDraft, LevelError> {
    let mut ponds = 0usize;
    for y in 0..draft.grid.rows() as i32 {
        for x in 0..draft.grid.columns() as i32 {
            if draft.grid.get(x, y) == Some(TileType::Undefined) {
                flood_fill(&mut draft.grid, TilePosition::new(x, y), TileType::Water)?;
                ponds += 1;
            }
        }
    }
    debug!(ponds, "ponds_filled");
    Ok(draft)
}

/// Used instead of the void and pond fills when ponds are disabled. The
/// corner rule still applies so a finished level never has floor at (0, 0).
pub fn fill_remaining_void(mut draft: LevelDraft) -> Result<LevelDraft, LevelError> {
    ensure_corner_void_eligible(&draft.grid)?;
    let relabeled = draft.grid.replace_all(TileType::Undefined, TileType::Void);
    debug!(relabeled, "remaining_void_filled");
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::normalize::{add_border, pad_rows, remove_walls};
    use crate::level::parser::parse_level_body;
    use crate::level::types::{ActorKind, TileOffset};

    fn draft_of(body: &str) -> LevelDraft {
        pad_rows(parse_level_body(body, 1).expect("parse"))
    }

    #[test]
    fn floor_fill_covers_tiny_level_interior() {
        let draft = fill_floor(draft_of("#####\n#@$.#\n#####")).expect("floor");
        for x in 1..=3 {
            assert_eq!(draft.grid.get(x, 1), Some(TileType::Floor));
        }
        assert_eq!(draft.grid.get(0, 1), Some(TileType::Wall));
        assert_eq!(TileCensus::of(&draft.grid).count(TileType::Floor), 3);
    }

    #[test]
    fn walled_off_box_is_off_floor() {
        let err = fill_floor(draft_of("######\n#@#$.#\n######")).expect_err("err");
        assert_eq!(
            err,
            LevelError::ActorOffFloor {
                actor: ActorKind::Box,
                position: TilePosition::new(3, 1),
                found: TileType::Undefined
            }
        );
    }

    #[test]
    fn off_floor_position_is_reported_in_source_coordinates() {
        let draft = add_border(draft_of("######\n#@.#$#\n######"), false);
        assert_eq!(draft.offset, TileOffset::new(1, 1));
        let err = fill_floor(draft).expect_err("err");
        assert_eq!(
            err,
            LevelError::ActorOffFloor {
                actor: ActorKind::Box,
                position: TilePosition::new(4, 1),
                found: TileType::Undefined
            }
        );
    }

    #[test]
    fn enclosed_pocket_becomes_water_not_void() {
        let body = "#####\n#@  #\n# # #\n# $.#\n#####";
        let draft = add_border(draft_of(body), false);
        let draft = remove_walls(fill_floor(draft).expect("floor"));
        let draft = fill_ponds(fill_void(draft).expect("void")).expect("ponds");

        // Interior wall at (2, 2) shifted by the border.
        assert_eq!(draft.grid.get(3, 3), Some(TileType::Water));
        assert_eq!(draft.grid.get(0, 0), Some(TileType::Void));
        assert_eq!(draft.grid.get(1, 1), Some(TileType::Void));
        let census = TileCensus::of(&draft.grid);
        assert!(census.is_fully_classified());
        assert_eq!(census.count(TileType::Water), 1);
    }

    #[test]
    fn each_pocket_is_filled_separately() {
        let body = "#######\n#@    #\n# # # #\n# $.  #\n#######";
        let draft = add_border(draft_of(body), false);
        let draft = remove_walls(fill_floor(draft).expect("floor"));
        let draft = fill_ponds(fill_void(draft).expect("void")).expect("ponds");
        assert_eq!(TileCensus::of(&draft.grid).count(TileType::Water), 2);
    }

    #[test]
    fn corner_floor_is_rejected() {
        let draft = fill_floor(draft_of("@$.")).expect("floor");
        let err = fill_void(draft).expect_err("err");
        assert_eq!(
            err,
            LevelError::CornerNotVoidEligible {
                found: TileType::Floor
            }
        );
    }

    #[test]
    fn bulk_fallback_leaves_only_floor_and_void() {
        let body = "#####\n#@  #\n# # #\n# $.#\n#####";
        let draft = add_border(draft_of(body), false);
        let draft =
            fill_remaining_void(remove_walls(fill_floor(draft).expect("floor"))).expect("void");
        let census = TileCensus::of(&draft.grid);
        assert!(census.is_fully_classified());
        assert_eq!(census.count(TileType::Water), 0);
        assert_eq!(census.count(TileType::Floor), 8);
    }
}
