use thiserror::Error;

use crate::level::{TilePosition, TileType};

use super::pattern::NeighborSignature;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileSelectError {
    /// The table is missing a rule for a signature the level produced.
    #[error("pattern table '{table}' has no rule for signature {signature} at {position}")]
    UnmatchedPattern {
        table: &'static str,
        signature: NeighborSignature,
        position: TilePosition,
    },
    #[error("weight table '{table}' has no entries")]
    EmptyWeightTable { table: &'static str },
    #[error("weight table '{table}' has zero total weight")]
    ZeroTotalWeight { table: &'static str },
    #[error("cell at {position} is {found:?}; only classified levels can be tiled")]
    Unclassified {
        position: TilePosition,
        found: TileType,
    },
}
