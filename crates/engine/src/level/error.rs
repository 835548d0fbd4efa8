use thiserror::Error;

use super::types::{ActorKind, TilePosition, TileType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level defines more than one player: first at {first}, another at {second}")]
    MultiplePlayers {
        first: TilePosition,
        second: TilePosition,
    },
    #[error("level has no player '@'")]
    MissingPlayer,
    #[error("level has no boxes ('$' or '*')")]
    MissingBoxes,
    #[error("level has no destinations ('.' or '*')")]
    MissingDestinations,
    #[error("level has {boxes} boxes but {destinations} destinations")]
    BoxDestinationCountMismatch { boxes: usize, destinations: usize },
    #[error("{actor} at {position} is not reachable floor (found {found:?})")]
    ActorOffFloor {
        actor: ActorKind,
        position: TilePosition,
        found: TileType,
    },
    #[error("corner cell (0, 0) is {found:?}; the floor region must not touch the level edge")]
    CornerNotVoidEligible { found: TileType },
    #[error("unknown character {character:?} at line {line}, column {column}")]
    UnknownCharacter {
        character: char,
        line: usize,
        column: usize,
    },
    #[error("position {position} is outside the {columns}x{rows} grid")]
    OutOfBounds {
        position: TilePosition,
        columns: usize,
        rows: usize,
    },
}

/// A definition in a level document that failed to parse or classify.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("level #{index} '{name}' (line {line}): {error}")]
pub struct LevelLoadError {
    pub index: usize,
    pub name: String,
    pub line: usize,
    #[source]
    pub error: LevelError,
}
