use super::error::LevelError;
use super::grid::TileGrid;
use super::types::{TilePosition, TileType};

/// Scanline paint-bucket fill.
///
/// Relabels the 4-connected region sharing the start cell's current type with
/// `target` and returns how many cells changed. Each popped seed walks up to
/// the top of its column run and then paints downward, pushing at most one
/// seed per contiguous run on either side.
pub fn flood_fill(
    grid: &mut TileGrid,
    start: TilePosition,
    target: TileType,
) -> Result<usize, LevelError> {
    let source = grid.get_at(start)?;
    if source == target {
        return Ok(0);
    }

    let mut filled = 0usize;
    let mut stack = vec![start];
    while let Some(seed) = stack.pop() {
        let x = seed.x;
        let mut y = seed.y;
        while grid.get(x, y - 1) == Some(source) {
            y -= 1;
        }

        let mut reach_left = false;
        let mut reach_right = false;
        while grid.get(x, y) == Some(source) {
            grid.set(x, y, target)?;
            filled += 1;

            if grid.get(x - 1, y) == Some(source) {
                if !reach_left {
                    stack.push(TilePosition::new(x - 1, y));
                    reach_left = true;
                }
            } else {
                reach_left = false;
            }

            if grid.get(x + 1, y) == Some(source) {
                if !reach_right {
                    stack.push(TilePosition::new(x + 1, y));
                    reach_right = true;
                }
            } else {
                reach_right = false;
            }

            y += 1;
        }
    }

    Ok(filled)
}
