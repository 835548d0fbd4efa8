//! Sprite selection for classified levels.

mod error;
mod pattern;
mod selector;
pub mod tables;
mod weighted;

pub use error::TileSelectError;
pub use pattern::{
    NeighborSignature, PatternRule, PatternTable, PixelOffset, TileIndex, TileLayer,
    NEIGHBOR_OFFSETS,
};
pub use selector::{RenderPlan, TileSelector};
pub use weighted::{WeightTable, WeightedTile};
