use tracing::debug;

use super::grid::TileGrid;
use super::parser::RawLevel;
use super::types::{ActorPositions, TileOffset, TileType};

/// Extra rows below the level when stacked pillar art hangs off the floor.
pub const PILLAR_BOTTOM_ROWS: usize = 3;

/// A level between pipeline stages. Each stage takes the draft by value and
/// hands back the reshaped one; `offset` accumulates every shift applied to
/// the actors since parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDraft {
    pub grid: TileGrid,
    pub actors: ActorPositions,
    pub offset: TileOffset,
}

impl LevelDraft {
    fn shift(&mut self, offset: TileOffset) {
        self.actors.shift_all(offset);
        self.offset = self.offset + offset;
    }
}

pub fn pad_rows(raw: RawLevel) -> LevelDraft {
    LevelDraft {
        grid: TileGrid::from_ragged_rows(raw.rows, TileType::Undefined),
        actors: raw.actors,
        offset: TileOffset::ZERO,
    }
}

pub fn remove_walls(mut draft: LevelDraft) -> LevelDraft {
    let removed = draft.grid.replace_all(TileType::Wall, TileType::Undefined);
    debug!(removed, "walls_removed");
    draft
}

/// Drops leading rows and columns that no stage has touched yet, i.e. whose
/// cells are all still `Undefined` and hold no actor. Trailing ones are left
/// for the border.
pub fn trim_leading_empty(mut draft: LevelDraft) -> LevelDraft {
    let grid = &draft.grid;
    let actors = &draft.actors;
    let holds_actor = |x: Option<i32>, y: Option<i32>| {
        std::iter::once(actors.player)
            .chain(actors.boxes.iter().copied())
            .chain(actors.destinations.iter().copied())
            .any(|p| x.map_or(true, |x| p.x == x) && y.map_or(true, |y| p.y == y))
    };
    let empty_rows = (0..grid.rows())
        .take_while(|&y| {
            grid.row_all(y, TileType::Undefined) && !holds_actor(None, Some(y as i32))
        })
        .count();
    let empty_columns = (0..grid.columns())
        .take_while(|&x| {
            grid.column_all(x, TileType::Undefined) && !holds_actor(Some(x as i32), None)
        })
        .count();

    draft.grid.drop_leading(empty_columns, empty_rows);
    draft.shift(TileOffset::new(-(empty_columns as i32), -(empty_rows as i32)));
    debug!(empty_rows, empty_columns, "leading_empty_trimmed");
    draft
}

/// Rings the level with void-eligible cells so the corner always seeds the
/// outside region. Pillar art needs [`PILLAR_BOTTOM_ROWS`] below the level.
pub fn add_border(mut draft: LevelDraft, pillars: bool) -> LevelDraft {
    let bottom = if pillars { PILLAR_BOTTOM_ROWS } else { 1 };
    draft.grid.surround(TileType::Undefined, 1, bottom, 1);
    draft.shift(TileOffset::new(1, 1));
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::parser::parse_level_body;
    use crate::level::types::TilePosition;

    fn draft_of(body: &str) -> LevelDraft {
        pad_rows(parse_level_body(body, 1).expect("parse"))
    }

    #[test]
    fn ragged_rows_are_padded_with_undefined() {
        let draft = draft_of("###\n#@$.#\n#");
        assert_eq!((draft.grid.columns(), draft.grid.rows()), (5, 3));
        assert_eq!(draft.grid.get(4, 0), Some(TileType::Undefined));
        assert_eq!(draft.grid.get(0, 2), Some(TileType::Wall));
        assert_eq!(draft.grid.get(1, 2), Some(TileType::Undefined));
    }

    #[test]
    fn leading_blank_rows_and_column_are_trimmed() {
        let draft = draft_of("      \n      \n #####\n #@$.#\n #####");
        let before = draft.actors.clone();
        let draft = trim_leading_empty(draft);

        assert_eq!((draft.grid.columns(), draft.grid.rows()), (5, 3));
        assert_eq!(draft.offset, TileOffset::new(-1, -2));
        assert_eq!(draft.actors.player, before.player + TileOffset::new(-1, -2));
        assert_eq!(draft.actors.player, TilePosition::new(1, 1));
        assert_eq!(draft.actors.boxes, vec![TilePosition::new(2, 1)]);
        assert_eq!(draft.actors.destinations, vec![TilePosition::new(3, 1)]);
    }

    #[test]
    fn rows_holding_actors_are_never_trimmed() {
        let draft = trim_leading_empty(draft_of("  \n@$."));
        assert_eq!((draft.grid.columns(), draft.grid.rows()), (3, 1));
        assert_eq!(draft.offset, TileOffset::new(0, -1));
        assert_eq!(draft.actors.player, TilePosition::new(0, 0));
    }

    #[test]
    fn trailing_blank_rows_are_kept() {
        let draft = trim_leading_empty(draft_of("#@$.#\n     "));
        assert_eq!(draft.grid.rows(), 2);
        assert_eq!(draft.offset, TileOffset::ZERO);
    }

    #[test]
    fn border_shifts_actors_and_pillars_extend_bottom() {
        let plain = add_border(draft_of("#@$.#"), false);
        assert_eq!((plain.grid.columns(), plain.grid.rows()), (7, 3));
        assert_eq!(plain.actors.player, TilePosition::new(2, 1));

        let pillars = add_border(draft_of("#@$.#"), true);
        assert_eq!(pillars.grid.rows(), 1 + 1 + PILLAR_BOTTOM_ROWS);
        assert_eq!(pillars.grid.get(0, 0), Some(TileType::Undefined));
        assert_eq!(pillars.offset, TileOffset::new(1, 1));
    }

    #[test]
    fn walls_become_undefined() {
        let draft = remove_walls(draft_of("#@$.#"));
        assert!(draft
            .grid
            .cells()
            .iter()
            .all(|cell| *cell == TileType::Undefined));
    }
}
