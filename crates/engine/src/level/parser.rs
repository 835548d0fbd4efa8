use tracing::{debug, warn};

use super::error::LevelError;
use super::types::{ActorPositions, TilePosition, TileType};

/// One `body ; name` definition cut out of a level document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDefinition {
    pub index: usize,
    pub name: String,
    pub body: String,
    /// 1-based document line of the first body row.
    pub line: usize,
}

/// Scanned level before any reshaping: ragged rows plus actor lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLevel {
    pub rows: Vec<Vec<TileType>>,
    pub actors: ActorPositions,
}

impl RawLevel {
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

pub fn extract_definitions(document: &str) -> Vec<LevelDefinition> {
    let text = document.replace("\r\n", "\n");
    let mut definitions = Vec::<LevelDefinition>::new();
    let mut line = 1usize;
    let mut rest = text.as_str();

    while let Some(terminator) = rest.find(';') {
        let chunk = &rest[..terminator];
        let after = &rest[terminator + 1..];
        let (name, remainder, name_newline) = match after.find('\n') {
            Some(newline) => (&after[..newline], &after[newline + 1..], 1),
            None => (after, "", 0),
        };

        let body_start = chunk.trim_start_matches('\n');
        let leading_newlines = chunk.len() - body_start.len();
        definitions.push(LevelDefinition {
            index: definitions.len(),
            name: name.trim().to_string(),
            body: body_start.trim_end_matches('\n').to_string(),
            line: line + leading_newlines,
        });

        line += chunk.matches('\n').count() + name_newline;
        rest = remainder;
    }

    if !rest.trim().is_empty() {
        warn!(
            line,
            chars = rest.trim().chars().count(),
            "document_trailing_text_ignored"
        );
    }

    definitions
}

/// Scans a level body row by row. `first_line` is only used for diagnostics.
pub fn parse_level_body(body: &str, first_line: usize) -> Result<RawLevel, LevelError> {
    let mut rows = Vec::<Vec<TileType>>::new();
    let mut current = Vec::<TileType>::new();
    let mut player: Option<TilePosition> = None;
    let mut boxes = Vec::<TilePosition>::new();
    let mut destinations = Vec::<TilePosition>::new();

    for ch in body.chars() {
        if ch == '\n' {
            rows.push(std::mem::take(&mut current));
            continue;
        }

        let position = TilePosition::new(current.len() as i32, rows.len() as i32);
        let tile = match ch {
            '#' => TileType::Wall,
            ' ' => TileType::Undefined,
            '@' => {
                if let Some(first) = player {
                    return Err(LevelError::MultiplePlayers {
                        first,
                        second: position,
                    });
                }
                player = Some(position);
                TileType::Undefined
            }
            '$' => {
                boxes.push(position);
                TileType::Undefined
            }
            '.' => {
                destinations.push(position);
                TileType::Undefined
            }
            '*' => {
                boxes.push(position);
                destinations.push(position);
                TileType::Undefined
            }
            other => {
                return Err(LevelError::UnknownCharacter {
                    character: other,
                    line: first_line + rows.len(),
                    column: current.len() + 1,
                })
            }
        };
        current.push(tile);
    }
    rows.push(current);

    let Some(player) = player else {
        return Err(LevelError::MissingPlayer);
    };
    if boxes.is_empty() {
        return Err(LevelError::MissingBoxes);
    }
    if destinations.is_empty() {
        return Err(LevelError::MissingDestinations);
    }
    if boxes.len() != destinations.len() {
        return Err(LevelError::BoxDestinationCountMismatch {
            boxes: boxes.len(),
            destinations: destinations.len(),
        });
    }

    let raw = RawLevel {
        rows,
        actors: ActorPositions {
            player,
            boxes,
            destinations,
        },
    };
    debug!(
        rows = raw.height(),
        columns = raw.width(),
        boxes = raw.actors.boxes.len(),
        "level_parsed"
    );
    Ok(raw)
}
