//! Dungeon generation: cells, rooms, and stages

mod cell;
mod room;
mod stage;

pub use cell::{CellType, WallSide};
pub use room::{Doorway, Room};
pub use stage::Stage;
