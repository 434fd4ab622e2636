//! Player commands and movement resolution

mod movement;

pub use movement::{MoveOutcome, do_move};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Player command types fed in by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Wait,

    // Combat
    Attack,
    Flee,

    // Pack
    Eat,
    Wield,
    OpenChest,

    // Meta
    Quit,
}

/// Movement directions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Get the delta (dx, dy) for this direction
    pub const fn delta(&self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Name used in movement messages
    pub const fn label(&self) -> &'static str {
        match self {
            Direction::North => "up",
            Direction::South => "down",
            Direction::East => "right",
            Direction::West => "left",
        }
    }
}
