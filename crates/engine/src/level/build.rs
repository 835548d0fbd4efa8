use tracing::debug;

use crate::options::ClassifyOptions;

use super::classify::{fill_floor, fill_ponds, fill_remaining_void, fill_void, TileCensus};
use super::error::LevelError;
use super::model::Level;
use super::normalize::{add_border, pad_rows, remove_walls, trim_leading_empty};
use super::parser::{parse_level_body, LevelDefinition};
use super::types::TileType;

/// Runs a single definition through parse, normalize and classify.
pub fn build_level(
    definition: &LevelDefinition,
    options: &ClassifyOptions,
) -> Result<Level, LevelError> {
    let raw = parse_level_body(&definition.body, definition.line)?;
    let draft = add_border(trim_leading_empty(pad_rows(raw)), options.pillars);
    let draft = remove_walls(fill_floor(draft)?);
    let draft = if options.pond_fill {
        fill_ponds(fill_void(draft)?)?
    } else {
        fill_remaining_void(draft)?
    };

    let census = TileCensus::of(&draft.grid);
    debug!(
        name = %definition.name,
        columns = draft.grid.columns(),
        rows = draft.grid.rows(),
        floor = census.count(TileType::Floor),
        void = census.count(TileType::Void),
        water = census.count(TileType::Water),
        "level_classified"
    );
    Ok(Level::from_draft(definition.name.clone(), draft))
}

/// Builds a level from a bare body, e.g. one held in memory by an editor.
pub fn build_level_from_body(
    name: &str,
    body: &str,
    options: &ClassifyOptions,
) -> Result<Level, LevelError> {
    let definition = LevelDefinition {
        index: 0,
        name: name.to_string(),
        body: body.to_string(),
        line: 1,
    };
    build_level(&definition, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::types::{TileOffset, TilePosition};

    const PONDS: ClassifyOptions = ClassifyOptions {
        pond_fill: true,
        pillars: false,
    };
    const NO_PONDS: ClassifyOptions = ClassifyOptions {
        pond_fill: false,
        pillars: false,
    };
    const PILLARS: ClassifyOptions = ClassifyOptions {
        pond_fill: true,
        pillars: true,
    };

    const ROOM: &str = "  #######\n  #@    #\n  # ##  #\n  # $.  #\n  #######";

    fn assert_classified(level: &Level) {
        let census = TileCensus::of(level.tile_type_map());
        assert!(census.is_fully_classified());
        assert!(!level.is_tile_type_at(0, 0, TileType::Floor));
        assert_eq!(level.box_positions().len(), level.destination_positions().len());
        assert!(!level.box_positions().is_empty());
        for position in level
            .box_positions()
            .iter()
            .chain(level.destination_positions())
        {
            assert!(level.is_tile_type_at(position.x, position.y, TileType::Floor));
        }
    }

    #[test]
    fn tiny_level_is_bordered_and_classified() {
        let level = build_level_from_body("Tiny", "#####\n#@$.#\n#####", &PONDS).expect("level");
        assert_classified(&level);
        assert_eq!((level.columns(), level.rows()), (7, 5));
        assert_eq!(level.player_position(), TilePosition::new(2, 2));
        assert_eq!(level.box_positions(), &[TilePosition::new(3, 2)]);
        assert_eq!(level.destination_positions(), &[TilePosition::new(4, 2)]);
        assert_eq!(level.name(), "Tiny");
        assert_eq!(
            level.to_ascii(),
            "       \n       \n  @$.  \n       \n       \n"
        );
    }

    #[test]
    fn player_position_round_trips_through_offsets() {
        let raw = parse_level_body(ROOM, 1).expect("parse");
        let level = build_level_from_body("Room", ROOM, &PONDS).expect("level");
        assert_eq!(level.source_offset(), TileOffset::new(-2 + 1, 1));
        assert_eq!(
            level.player_position(),
            raw.actors.player + level.source_offset()
        );
    }

    #[test]
    fn interior_obstacles_become_ponds() {
        let level = build_level_from_body("Room", ROOM, &PONDS).expect("level");
        assert_classified(&level);
        let water = TileCensus::of(level.tile_type_map()).count(TileType::Water);
        assert_eq!(water, 2);
        assert!(level.to_ascii().contains("~~"));
    }

    #[test]
    fn without_ponds_obstacles_become_void() {
        let level = build_level_from_body("Room", ROOM, &NO_PONDS).expect("level");
        assert_classified(&level);
        assert_eq!(TileCensus::of(level.tile_type_map()).count(TileType::Water), 0);
    }

    #[test]
    fn pillars_add_bottom_rows() {
        let flat = build_level_from_body("Room", ROOM, &PONDS).expect("flat");
        let tall = build_level_from_body("Room", ROOM, &PILLARS).expect("tall");
        assert_eq!(tall.rows(), flat.rows() + 2);
        assert_eq!(tall.player_position(), flat.player_position());
        assert_classified(&tall);
    }

    #[test]
    fn leaking_floor_is_rejected_in_both_modes() {
        let body = "####\n#@$.\n####";
        for options in [PONDS, NO_PONDS] {
            let err = build_level_from_body("Leak", body, &options).expect_err("err");
            assert_eq!(
                err,
                LevelError::CornerNotVoidEligible {
                    found: TileType::Floor
                }
            );
        }
    }

    #[test]
    fn pattern_query_marks_floor_edges() {
        let level = build_level_from_body("Tiny", "#####\n#@$.#\n#####", &PONDS).expect("level");
        assert_eq!(level.pattern_at(3, 2, TileType::Floor), "10101111");
        assert_eq!(level.pattern_at(2, 2, TileType::Floor), "10111111");
        assert!(!level.is_tile_type_at(-1, 0, TileType::Void));
        assert!(level.tile_type_at(99, 0).is_err());
    }
}
