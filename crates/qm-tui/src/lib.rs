//! qm-tui: Terminal UI layer using ratatui
//!
//! Provides the terminal interface for the game: it renders the core state
//! and translates key events into commands. All game rules live in qm-core.

pub mod app;
pub mod display;
pub mod input;

pub use app::{App, UiMode};
