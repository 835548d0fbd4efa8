use serde::Serialize;

use crate::tiles::NeighborSignature;

use super::error::LevelError;
use super::grid::TileGrid;
use super::normalize::LevelDraft;
use super::types::{TileOffset, TilePosition, TileType};

/// A fully classified level. Every cell is `Floor`, `Void` or `Water`, every
/// box and destination sits on `Floor`, and (0, 0) is never `Floor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Level {
    name: String,
    tile_type_map: TileGrid,
    player_position: TilePosition,
    box_position_list: Vec<TilePosition>,
    destination_position_list: Vec<TilePosition>,
    source_offset: TileOffset,
}

impl Level {
    pub(crate) fn from_draft(name: String, draft: LevelDraft) -> Self {
        let LevelDraft {
            grid,
            actors,
            offset,
        } = draft;
        Self {
            name,
            tile_type_map: grid,
            player_position: actors.player,
            box_position_list: actors.boxes,
            destination_position_list: actors.destinations,
            source_offset: offset,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tile_type_map(&self) -> &TileGrid {
        &self.tile_type_map
    }

    pub fn rows(&self) -> usize {
        self.tile_type_map.rows()
    }

    pub fn columns(&self) -> usize {
        self.tile_type_map.columns()
    }

    pub fn player_position(&self) -> TilePosition {
        self.player_position
    }

    pub fn box_positions(&self) -> &[TilePosition] {
        &self.box_position_list
    }

    pub fn destination_positions(&self) -> &[TilePosition] {
        &self.destination_position_list
    }

    /// Sum of every shift applied since parsing; source + offset = here.
    pub fn source_offset(&self) -> TileOffset {
        self.source_offset
    }

    pub fn tile_type_at(&self, x: i32, y: i32) -> Result<TileType, LevelError> {
        self.tile_type_map.get_at(TilePosition::new(x, y))
    }

    pub fn is_tile_type_at(&self, x: i32, y: i32, tile: TileType) -> bool {
        self.tile_type_map.get(x, y) == Some(tile)
    }

    pub fn signature_at(&self, x: i32, y: i32, reference: TileType) -> NeighborSignature {
        NeighborSignature::of(&self.tile_type_map, x, y, reference)
    }

    pub fn pattern_at(&self, x: i32, y: i32, reference: TileType) -> String {
        self.signature_at(x, y, reference).to_string()
    }

    pub fn to_ascii(&self) -> String {
        let mut output = String::with_capacity((self.columns() + 1) * self.rows());
        for y in 0..self.rows() as i32 {
            for x in 0..self.columns() as i32 {
                output.push(self.glyph_at(TilePosition::new(x, y)));
            }
            output.push('\n');
        }
        output
    }

    fn glyph_at(&self, position: TilePosition) -> char {
        let has_box = self.box_position_list.contains(&position);
        let has_destination = self.destination_position_list.contains(&position);
        if position == self.player_position {
            return if has_destination { '+' } else { '@' };
        }
        match (has_box, has_destination) {
            (true, true) => '*',
            (true, false) => '$',
            (false, true) => '.',
            (false, false) => match self.tile_type_map.get(position.x, position.y) {
                Some(TileType::Floor) => '_',
                Some(TileType::Water) => '~',
                _ => ' ',
            },
        }
    }
}
