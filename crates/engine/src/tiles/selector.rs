use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::level::{Level, TilePosition, TileType};

use super::error::TileSelectError;
use super::pattern::{PatternTable, TileLayer};
use super::tables::{FLOOR_TABLE, LEDGE_TABLE, PILLAR_TABLE, SHORE_TABLE};
use super::weighted::WeightTable;

/// Layers to draw for every cell of a level, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    pub columns: usize,
    pub rows: usize,
    pub cells: Vec<Vec<TileLayer>>,
}

impl RenderPlan {
    pub fn layers_at(&self, x: i32, y: i32) -> Option<&[TileLayer]> {
        if x < 0 || y < 0 || x as usize >= self.columns || y as usize >= self.rows {
            return None;
        }
        self.cells
            .get(y as usize * self.columns + x as usize)
            .map(Vec::as_slice)
    }

    pub fn layer_count(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSelector {
    floor: WeightTable,
    water: PatternTable,
    void: PatternTable,
}

impl TileSelector {
    /// Built-in tables; `pillars` swaps the ledge table for the pillar one.
    pub fn new(pillars: bool) -> Self {
        let void = if pillars { PILLAR_TABLE } else { LEDGE_TABLE };
        Self::with_tables(FLOOR_TABLE, SHORE_TABLE, void)
    }

    pub fn with_tables(floor: WeightTable, water: PatternTable, void: PatternTable) -> Self {
        Self { floor, water, void }
    }

    pub fn select<R: Rng + ?Sized>(
        &self,
        level: &Level,
        rng: &mut R,
    ) -> Result<RenderPlan, TileSelectError> {
        let mut cells = Vec::with_capacity(level.columns() * level.rows());
        for y in 0..level.rows() as i32 {
            for x in 0..level.columns() as i32 {
                cells.push(self.select_cell(level, TilePosition::new(x, y), rng)?);
            }
        }

        let plan = RenderPlan {
            columns: level.columns(),
            rows: level.rows(),
            cells,
        };
        debug!(
            name = level.name(),
            layers = plan.layer_count(),
            "tiles_selected"
        );
        Ok(plan)
    }

    fn select_cell<R: Rng + ?Sized>(
        &self,
        level: &Level,
        position: TilePosition,
        rng: &mut R,
    ) -> Result<Vec<TileLayer>, TileSelectError> {
        let found = level.tile_type_map().get_at(position).map_err(|_| {
            TileSelectError::Unclassified {
                position,
                found: TileType::Undefined,
            }
        })?;
        match found {
            TileType::Floor => Ok(vec![TileLayer::flat(self.floor.pick(rng)?)]),
            TileType::Water => lookup(&self.water, level, position, TileType::Water),
            TileType::Void => lookup(&self.void, level, position, TileType::Void),
            TileType::Undefined | TileType::Wall => {
                Err(TileSelectError::Unclassified { position, found })
            }
        }
    }
}

impl Default for TileSelector {
    fn default() -> Self {
        Self::new(false)
    }
}

fn lookup(
    table: &PatternTable,
    level: &Level,
    position: TilePosition,
    reference: TileType,
) -> Result<Vec<TileLayer>, TileSelectError> {
    let signature = level.signature_at(position.x, position.y, reference);
    table
        .lookup(signature)
        .map(<[TileLayer]>::to_vec)
        .ok_or(TileSelectError::UnmatchedPattern {
            table: table.name,
            signature,
            position,
        })
}
