//! Level documents: parsing, normalization and region classification.

mod build;
mod catalog;
mod classify;
mod error;
mod fingerprint;
mod flood_fill;
mod grid;
mod model;
mod normalize;
mod parser;
mod types;

pub use build::{build_level, build_level_from_body};
pub use catalog::{load_level_document, BatchPolicy, CatalogEntry, LevelCatalog};
pub use classify::{fill_floor, fill_ponds, fill_remaining_void, fill_void, TileCensus};
pub use error::{LevelError, LevelLoadError};
pub use fingerprint::LevelFingerprint;
pub use flood_fill::flood_fill;
pub use grid::{GridError, TileGrid};
pub use model::Level;
pub use normalize::{
    add_border, pad_rows, remove_walls, trim_leading_empty, LevelDraft, PILLAR_BOTTOM_ROWS,
};
pub use parser::{extract_definitions, parse_level_body, LevelDefinition, RawLevel};
pub use types::{ActorKind, ActorPositions, TileOffset, TilePosition, TileType};
