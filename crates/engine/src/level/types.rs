use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Cell classification. `Undefined` and `Wall` only exist while a level is
/// being built; a finished [`Level`](super::Level) holds `Floor`, `Void` and
/// `Water` exclusively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Undefined,
    Wall,
    Floor,
    Void,
    Water,
}

impl TileType {
    pub const COUNT: usize = 5;

    pub fn ordinal(self) -> usize {
        match self {
            TileType::Undefined => 0,
            TileType::Wall => 1,
            TileType::Floor => 2,
            TileType::Void => 3,
            TileType::Water => 4,
        }
    }

    pub fn is_final(self) -> bool {
        matches!(self, TileType::Floor | TileType::Void | TileType::Water)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TileType::Undefined => "undefined",
            TileType::Wall => "wall",
            TileType::Floor => "floor",
            TileType::Void => "void",
            TileType::Water => "water",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePosition {
    pub x: i32,
    pub y: i32,
}

impl TilePosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn shift(&mut self, offset: TileOffset) {
        self.x += offset.dx;
        self.y += offset.dy;
    }
}

impl Add<TileOffset> for TilePosition {
    type Output = TilePosition;

    fn add(self, offset: TileOffset) -> TilePosition {
        TilePosition {
            x: self.x + offset.dx,
            y: self.y + offset.dy,
        }
    }
}

impl fmt::Display for TilePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TileOffset {
    pub dx: i32,
    pub dy: i32,
}

impl TileOffset {
    pub const ZERO: TileOffset = TileOffset { dx: 0, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn negated(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

impl Add for TileOffset {
    type Output = TileOffset;

    fn add(self, other: TileOffset) -> TileOffset {
        TileOffset {
            dx: self.dx + other.dx,
            dy: self.dy + other.dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Box,
    Destination,
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorKind::Player => write!(f, "player"),
            ActorKind::Box => write!(f, "box"),
            ActorKind::Destination => write!(f, "destination"),
        }
    }
}

/// Player, box and destination coordinates, kept together so every grid
/// reshaping step moves all of them by the same offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorPositions {
    pub player: TilePosition,
    pub boxes: Vec<TilePosition>,
    pub destinations: Vec<TilePosition>,
}

impl ActorPositions {
    pub fn shift_all(&mut self, offset: TileOffset) {
        self.player.shift(offset);
        for position in self.boxes.iter_mut().chain(self.destinations.iter_mut()) {
            position.shift(offset);
        }
    }

    pub fn iter_placed(&self) -> impl Iterator<Item = (ActorKind, TilePosition)> + '_ {
        let boxes = self.boxes.iter().map(|p| (ActorKind::Box, *p));
        let destinations = self
            .destinations
            .iter()
            .map(|p| (ActorKind::Destination, *p));
        boxes.chain(destinations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_dense() {
        let all = [
            TileType::Undefined,
            TileType::Wall,
            TileType::Floor,
            TileType::Void,
            TileType::Water,
        ];
        for (idx, tile) in all.iter().enumerate() {
            assert_eq!(tile.ordinal(), idx);
        }
        assert_eq!(all.len(), TileType::COUNT);
    }

    #[test]
    fn shift_all_moves_every_actor() {
        let mut actors = ActorPositions {
            player: TilePosition::new(3, 4),
            boxes: vec![TilePosition::new(5, 4)],
            destinations: vec![TilePosition::new(6, 4)],
        };
        actors.shift_all(TileOffset::new(-2, 1));
        assert_eq!(actors.player, TilePosition::new(1, 5));
        assert_eq!(actors.boxes, vec![TilePosition::new(3, 5)]);
        assert_eq!(actors.destinations, vec![TilePosition::new(4, 5)]);
    }

    #[test]
    fn offsets_compose() {
        let total = TileOffset::new(-2, -1) + TileOffset::new(1, 1);
        assert_eq!(total, TileOffset::new(-1, 0));
        assert_eq!(TilePosition::new(4, 4) + total, TilePosition::new(3, 4));
        assert_eq!(total.negated(), TileOffset::new(1, 0));
    }
}
