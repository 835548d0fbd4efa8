use serde::Serialize;
use thiserror::Error;

use super::error::LevelError;
use super::types::{TilePosition, TileType};

/// Row-major rectangular grid of tile types.
///
/// Coordinates are signed so that positions produced by offset arithmetic can
/// be checked instead of wrapping; anything outside `0..columns` x `0..rows`
/// is simply not on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileGrid {
    columns: usize,
    rows: usize,
    cells: Vec<TileType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("tile count mismatch: expected {expected}, got {actual}")]
    TileCountMismatch { expected: usize, actual: usize },
}

impl TileGrid {
    pub fn new(columns: usize, rows: usize, cells: Vec<TileType>) -> Result<Self, GridError> {
        let expected = columns * rows;
        let actual = cells.len();
        if expected != actual {
            return Err(GridError::TileCountMismatch { expected, actual });
        }
        Ok(Self {
            columns,
            rows,
            cells,
        })
    }

    pub fn filled(columns: usize, rows: usize, tile: TileType) -> Self {
        Self {
            columns,
            rows,
            cells: vec![tile; columns * rows],
        }
    }

    /// Right-pads every row with `fill` up to the longest row.
    pub(crate) fn from_ragged_rows(rows: Vec<Vec<TileType>>, fill: TileType) -> Self {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(columns * row_count);
        for mut row in rows {
            row.resize(columns, fill);
            cells.extend(row);
        }
        Self {
            columns,
            rows: row_count,
            cells,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.columns || y >= self.rows {
            return None;
        }
        Some(y * self.columns + x)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<TileType> {
        self.index_of(x, y)
            .and_then(|index| self.cells.get(index).copied())
    }

    pub fn get_at(&self, position: TilePosition) -> Result<TileType, LevelError> {
        self.get(position.x, position.y)
            .ok_or_else(|| self.out_of_bounds(position))
    }

    pub fn set(&mut self, x: i32, y: i32, tile: TileType) -> Result<(), LevelError> {
        let index = self
            .index_of(x, y)
            .ok_or_else(|| self.out_of_bounds(TilePosition::new(x, y)))?;
        self.cells[index] = tile;
        Ok(())
    }

    pub fn row(&self, y: usize) -> &[TileType] {
        let start = y * self.columns;
        &self.cells[start..start + self.columns]
    }

    pub fn row_all(&self, y: usize, tile: TileType) -> bool {
        self.row(y).iter().all(|cell| *cell == tile)
    }

    pub fn column_all(&self, x: usize, tile: TileType) -> bool {
        (0..self.rows).all(|y| self.cells[y * self.columns + x] == tile)
    }

    pub fn cells(&self) -> &[TileType] {
        &self.cells
    }

    pub fn replace_all(&mut self, from: TileType, to: TileType) -> usize {
        let mut replaced = 0usize;
        for cell in self.cells.iter_mut().filter(|cell| **cell == from) {
            *cell = to;
            replaced += 1;
        }
        replaced
    }

    /// Keeps the sub-grid starting at (`skip_columns`, `skip_rows`).
    pub(crate) fn drop_leading(&mut self, skip_columns: usize, skip_rows: usize) {
        if skip_columns == 0 && skip_rows == 0 {
            return;
        }
        let columns = self.columns.saturating_sub(skip_columns);
        let rows = self.rows.saturating_sub(skip_rows);
        let mut cells = Vec::with_capacity(columns * rows);
        for y in skip_rows..self.rows {
            cells.extend_from_slice(&self.row(y)[skip_columns..]);
        }
        self.columns = columns;
        self.rows = rows;
        self.cells = cells;
    }

    /// Surrounds the grid with `fill`; `bottom` rows are added below.
    pub(crate) fn surround(&mut self, fill: TileType, top: usize, bottom: usize, sides: usize) {
        let columns = self.columns + sides * 2;
        let rows = self.rows + top + bottom;
        let mut cells = Vec::with_capacity(columns * rows);
        cells.resize(columns * top, fill);
        for y in 0..self.rows {
            cells.extend(std::iter::repeat(fill).take(sides));
            cells.extend_from_slice(self.row(y));
            cells.extend(std::iter::repeat(fill).take(sides));
        }
        cells.resize(columns * rows, fill);
        self.columns = columns;
        self.rows = rows;
        self.cells = cells;
    }

    fn out_of_bounds(&self, position: TilePosition) -> LevelError {
        LevelError::OutOfBounds {
            position,
            columns: self.columns,
            rows: self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_wrong_cell_count() {
        let err = TileGrid::new(2, 2, vec![TileType::Void; 3]).expect_err("err");
        assert_eq!(
            err,
            GridError::TileCountMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn index_and_bounds() {
        let grid = TileGrid::filled(3, 2, TileType::Undefined);
        assert_eq!(grid.index_of(0, 0), Some(0));
        assert_eq!(grid.index_of(2, 1), Some(5));
        assert_eq!(grid.index_of(3, 0), None);
        assert_eq!(grid.index_of(0, 2), None);
        assert_eq!(grid.index_of(-1, 0), None);
    }

    #[test]
    fn set_out_of_bounds_reports_position() {
        let mut grid = TileGrid::filled(2, 2, TileType::Undefined);
        let err = grid.set(5, 1, TileType::Floor).expect_err("err");
        assert_eq!(
            err,
            LevelError::OutOfBounds {
                position: TilePosition::new(5, 1),
                columns: 2,
                rows: 2
            }
        );
    }

    #[test]
    fn drop_leading_keeps_lower_right() {
        let mut grid = TileGrid::filled(3, 3, TileType::Undefined);
        grid.set(2, 2, TileType::Wall).expect("set");
        grid.drop_leading(1, 2);
        assert_eq!((grid.columns(), grid.rows()), (2, 1));
        assert_eq!(grid.get(1, 0), Some(TileType::Wall));
    }

    #[test]
    fn surround_adds_ring() {
        let mut grid = TileGrid::filled(1, 1, TileType::Floor);
        grid.surround(TileType::Undefined, 1, 3, 1);
        assert_eq!((grid.columns(), grid.rows()), (3, 5));
        assert_eq!(grid.get(1, 1), Some(TileType::Floor));
        assert_eq!(
            grid.replace_all(TileType::Undefined, TileType::Void),
            3 * 5 - 1
        );
    }
}
