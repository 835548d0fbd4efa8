//! Built-in sprite-sheet tables.
//!
//! Pattern strings use the neighbor order N, E, S, W, NW, NE, SE, SW; `1`
//! means "this neighbor is not the table's reference type". Every table ends
//! with a catch-all so lookups are total over all 256 signatures.

use super::pattern::{PatternRule, PatternTable, TileIndex, TileLayer};
use super::weighted::{WeightTable, WeightedTile};

pub const TILE_SIZE_PX: i32 = 16;

pub const FLOOR_PLAIN: TileIndex = TileIndex(0);
pub const FLOOR_CRACKED: TileIndex = TileIndex(1);
pub const FLOOR_MOSSY: TileIndex = TileIndex(2);

pub const VOID_BLANK: TileIndex = TileIndex(8);
pub const LEDGE_FACE: TileIndex = TileIndex(9);
pub const LEDGE_SHADOW_EAST: TileIndex = TileIndex(10);
pub const LEDGE_SHADOW_WEST: TileIndex = TileIndex(11);

pub const PILLAR_CAP: TileIndex = TileIndex(12);
pub const PILLAR_SHAFT: TileIndex = TileIndex(13);
pub const PILLAR_BASE: TileIndex = TileIndex(14);

pub const WATER_OPEN: TileIndex = TileIndex(16);
pub const WATER_PUDDLE: TileIndex = TileIndex(17);
pub const SHORE_N: TileIndex = TileIndex(18);
pub const SHORE_E: TileIndex = TileIndex(19);
pub const SHORE_S: TileIndex = TileIndex(20);
pub const SHORE_W: TileIndex = TileIndex(21);
pub const SHORE_NE: TileIndex = TileIndex(22);
pub const SHORE_SE: TileIndex = TileIndex(23);
pub const SHORE_SW: TileIndex = TileIndex(24);
pub const SHORE_NW: TileIndex = TileIndex(25);
pub const SHORE_INNER_NW: TileIndex = TileIndex(26);
pub const SHORE_INNER_NE: TileIndex = TileIndex(27);
pub const SHORE_INNER_SE: TileIndex = TileIndex(28);
pub const SHORE_INNER_SW: TileIndex = TileIndex(29);

const fn flat(tile: TileIndex) -> [TileLayer; 1] {
    [TileLayer::flat(tile)]
}

const WATER_PUDDLE_LAYERS: [TileLayer; 1] = flat(WATER_PUDDLE);
const SHORE_NE_LAYERS: [TileLayer; 1] = flat(SHORE_NE);
const SHORE_SE_LAYERS: [TileLayer; 1] = flat(SHORE_SE);
const SHORE_SW_LAYERS: [TileLayer; 1] = flat(SHORE_SW);
const SHORE_NW_LAYERS: [TileLayer; 1] = flat(SHORE_NW);
const SHORE_N_LAYERS: [TileLayer; 1] = flat(SHORE_N);
const SHORE_E_LAYERS: [TileLayer; 1] = flat(SHORE_E);
const SHORE_S_LAYERS: [TileLayer; 1] = flat(SHORE_S);
const SHORE_W_LAYERS: [TileLayer; 1] = flat(SHORE_W);
const SHORE_INNER_NW_LAYERS: [TileLayer; 1] = flat(SHORE_INNER_NW);
const SHORE_INNER_NE_LAYERS: [TileLayer; 1] = flat(SHORE_INNER_NE);
const SHORE_INNER_SE_LAYERS: [TileLayer; 1] = flat(SHORE_INNER_SE);
const SHORE_INNER_SW_LAYERS: [TileLayer; 1] = flat(SHORE_INNER_SW);
const WATER_OPEN_LAYERS: [TileLayer; 1] = flat(WATER_OPEN);

const SHORE_RULES: [PatternRule; 14] = [
    PatternRule::new("1111****", &WATER_PUDDLE_LAYERS),
    PatternRule::new("11******", &SHORE_NE_LAYERS),
    PatternRule::new("*11*****", &SHORE_SE_LAYERS),
    PatternRule::new("**11****", &SHORE_SW_LAYERS),
    PatternRule::new("1**1****", &SHORE_NW_LAYERS),
    PatternRule::new("1*******", &SHORE_N_LAYERS),
    PatternRule::new("*1******", &SHORE_E_LAYERS),
    PatternRule::new("**1*****", &SHORE_S_LAYERS),
    PatternRule::new("***1****", &SHORE_W_LAYERS),
    PatternRule::new("00001***", &SHORE_INNER_NW_LAYERS),
    PatternRule::new("0000*1**", &SHORE_INNER_NE_LAYERS),
    PatternRule::new("0000**1*", &SHORE_INNER_SE_LAYERS),
    PatternRule::new("0000***1", &SHORE_INNER_SW_LAYERS),
    PatternRule::new("********", &WATER_OPEN_LAYERS),
];

/// Water cells, reference type Water.
pub const SHORE_TABLE: PatternTable = PatternTable {
    name: "shore",
    rules: &SHORE_RULES,
};

const LEDGE_FACE_LAYERS: [TileLayer; 1] = flat(LEDGE_FACE);
const LEDGE_SHADOW_EAST_LAYERS: [TileLayer; 1] = flat(LEDGE_SHADOW_EAST);
const LEDGE_SHADOW_WEST_LAYERS: [TileLayer; 1] = flat(LEDGE_SHADOW_WEST);
const VOID_BLANK_LAYERS: [TileLayer; 1] = flat(VOID_BLANK);

const LEDGE_RULES: [PatternRule; 4] = [
    PatternRule::new("1*******", &LEDGE_FACE_LAYERS),
    PatternRule::new("0***1***", &LEDGE_SHADOW_EAST_LAYERS),
    PatternRule::new("0****1**", &LEDGE_SHADOW_WEST_LAYERS),
    PatternRule::new("********", &VOID_BLANK_LAYERS),
];

/// Void cells, reference type Void: a cliff face under any non-void cell.
pub const LEDGE_TABLE: PatternTable = PatternTable {
    name: "ledge",
    rules: &LEDGE_RULES,
};

const PILLAR_LAYERS: [TileLayer; 3] = [
    TileLayer::at(PILLAR_CAP, 0, 0),
    TileLayer::at(PILLAR_SHAFT, 0, TILE_SIZE_PX),
    TileLayer::at(PILLAR_BASE, 0, TILE_SIZE_PX * 2),
];

const PILLAR_RULES: [PatternRule; 4] = [
    PatternRule::new("1*******", &PILLAR_LAYERS),
    PatternRule::new("0***1***", &LEDGE_SHADOW_EAST_LAYERS),
    PatternRule::new("0****1**", &LEDGE_SHADOW_WEST_LAYERS),
    PatternRule::new("********", &VOID_BLANK_LAYERS),
];

/// Ledge variant drawing a pillar that hangs two extra tiles down.
pub const PILLAR_TABLE: PatternTable = PatternTable {
    name: "pillar",
    rules: &PILLAR_RULES,
};

const FLOOR_VARIANTS: [WeightedTile; 3] = [
    WeightedTile::new(FLOOR_PLAIN, 12),
    WeightedTile::new(FLOOR_CRACKED, 3),
    WeightedTile::new(FLOOR_MOSSY, 1),
];

pub const FLOOR_TABLE: WeightTable = WeightTable {
    name: "floor",
    entries: &FLOOR_VARIANTS,
};

pub const PATTERN_TABLES: [PatternTable; 3] = [SHORE_TABLE, LEDGE_TABLE, PILLAR_TABLE];
