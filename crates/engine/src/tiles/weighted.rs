use rand::Rng;

use super::error::TileSelectError;
use super::pattern::TileIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedTile {
    pub tile: TileIndex,
    pub weight: u32,
}

impl WeightedTile {
    pub const fn new(tile: TileIndex, weight: u32) -> Self {
        Self { tile, weight }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightTable {
    pub name: &'static str,
    pub entries: &'static [WeightedTile],
}

impl WeightTable {
    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|entry| u64::from(entry.weight)).sum()
    }

    /// Draws `1..=total` and returns the first entry whose running weight
    /// meets or exceeds the draw.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TileIndex, TileSelectError> {
        if self.entries.is_empty() {
            return Err(TileSelectError::EmptyWeightTable { table: self.name });
        }
        let total = self.total_weight();
        if total == 0 {
            return Err(TileSelectError::ZeroTotalWeight { table: self.name });
        }

        let draw = rng.gen_range(1..=total);
        let mut cumulative = 0u64;
        for entry in self.entries {
            cumulative += u64::from(entry.weight);
            if cumulative >= draw {
                return Ok(entry.tile);
            }
        }
        Err(TileSelectError::ZeroTotalWeight { table: self.name })
    }
}
