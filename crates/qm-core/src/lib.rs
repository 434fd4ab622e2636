//! qm-core: Core game logic for the Quest Master dungeon crawler
//!
//! This crate contains all game logic with no I/O dependencies.
//! It is designed to be pure and testable: the terminal UI in `qm-tui`
//! only feeds commands in and renders the resulting state.

pub mod action;
pub mod combat;
pub mod dungeon;
pub mod monster;
pub mod object;
pub mod player;

mod config;
mod consts;
mod errors;
mod gameloop;
mod rng;

pub use config::{GameConfig, RoomBounds};
pub use consts::*;
pub use errors::GameError;
pub use gameloop::{GameLoopResult, GameState};
pub use rng::GameRng;
