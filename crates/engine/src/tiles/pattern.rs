use std::fmt;

use serde::Serialize;

use crate::level::{TileGrid, TileType};

/// Neighbor order for signatures: N, E, S, W, NW, NE, SE, SW.
/// Neighbor `i` maps to bit `7 - i`, so the 8-char form reads in this order.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (-1, -1),
    (1, -1),
    (1, 1),
    (-1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NeighborSignature(pub u8);

impl NeighborSignature {
    /// A bit is set when that neighbor is not `reference`; off-grid
    /// neighbors always count as different.
    pub fn of(grid: &TileGrid, x: i32, y: i32, reference: TileType) -> Self {
        let mut bits = 0u8;
        for (i, (dx, dy)) in NEIGHBOR_OFFSETS.iter().enumerate() {
            if grid.get(x + dx, y + dy) != Some(reference) {
                bits |= 0x80 >> i;
            }
        }
        Self(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl fmt::Display for NeighborSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08b}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileIndex(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PixelOffset {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileLayer {
    pub tile: TileIndex,
    pub offset_px: PixelOffset,
}

impl TileLayer {
    pub const fn at(tile: TileIndex, x: i32, y: i32) -> Self {
        Self {
            tile,
            offset_px: PixelOffset { x, y },
        }
    }

    pub const fn flat(tile: TileIndex) -> Self {
        Self::at(tile, 0, 0)
    }
}

/// Wildcard rule over a signature: `signature & mask == value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    pub value: u8,
    pub mask: u8,
    pub layers: &'static [TileLayer],
}

impl PatternRule {
    /// Compiles an 8-char pattern of `0`, `1` and `*` (don't care).
    pub const fn new(pattern: &str, layers: &'static [TileLayer]) -> Self {
        let bytes = pattern.as_bytes();
        assert!(bytes.len() == 8, "neighbor pattern must have 8 characters");
        assert!(!layers.is_empty(), "pattern rule must yield at least one layer");
        let mut value = 0u8;
        let mut mask = 0u8;
        let mut i = 0;
        while i < 8 {
            let bit = 0x80u8 >> i;
            match bytes[i] {
                b'0' => mask |= bit,
                b'1' => {
                    mask |= bit;
                    value |= bit;
                }
                b'*' => {}
                _ => panic!("neighbor pattern characters must be 0, 1 or *"),
            }
            i += 1;
        }
        Self {
            value,
            mask,
            layers,
        }
    }

    pub fn matches(&self, signature: NeighborSignature) -> bool {
        signature.0 & self.mask == self.value
    }
}

/// Ordered rule list; the first matching rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternTable {
    pub name: &'static str,
    pub rules: &'static [PatternRule],
}

impl PatternTable {
    pub fn lookup(&self, signature: NeighborSignature) -> Option<&'static [TileLayer]> {
        self.rules
            .iter()
            .find(|rule| rule.matches(signature))
            .map(|rule| rule.layers)
    }

    /// Signatures (of all 256) that no rule matches.
    pub fn unmatched_signatures(&self) -> Vec<NeighborSignature> {
        (0..=u8::MAX)
            .map(NeighborSignature)
            .filter(|signature| self.lookup(*signature).is_none())
            .collect()
    }
}
