//! Core game constants
//!
//! Generation bounds and gameplay odds live here so the tuning knobs are in
//! one place.

/// Room dimension limits (rooms need to fit on screen)
pub const MIN_ROOM_DIM: u8 = 6;
pub const MAX_ROOM_DIM: u8 = 20;

/// Smallest dimension a custom configuration may request
pub const ABS_MIN_ROOM_DIM: u8 = 3;

/// Chance of a debris glyph per interior floor cell (1 in N)
pub const DEBRIS_CHANCE: u32 = 12;

/// Chance of a monster encounter per successful floor step (1 in N)
pub const ENCOUNTER_CHANCE: u32 = 10;

/// Chance of finding an item per successful floor step (1 in N)
pub const ITEM_CHANCE: u32 = 12;

/// Drop table: percentage of item finds that are bread, the rest are axes
pub const BREAD_DROP_PERCENT: u32 = 80;

/// Starting player stats
pub const PLAYER_HP: i32 = 20;
pub const PLAYER_STAMINA: i32 = 10;
pub const PLAYER_ATTACK: i32 = 3;

/// What a loaf of bread restores
pub const BREAD_HP: i32 = 4;
pub const BREAD_STAMINA: i32 = 2;

/// Stamina cost of one weapon swing
pub const SWING_STAMINA_COST: i32 = 1;

/// Map symbols
pub const S_FLOOR: char = '.';
pub const S_DEBRIS: char = ',';
pub const S_WALL: char = '#';
pub const S_DOOR: char = '+';
pub const S_PASSAGE: char = '\'';
pub const S_STAIRS: char = '>';
pub const S_PLAYER: char = '@';
pub const S_CHEST: char = '$';
