//! Application state and main UI controller

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Frame;

use qm_core::action::Command;
use qm_core::{GameLoopResult, GameState};

use crate::display;
use crate::input::key_to_command;

/// UI mode - what the app is currently displaying/waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// Normal exploration
    Normal,
    /// Showing the pack (read-only)
    Inventory,
    /// An encounter is running; attack or flee
    Combat,
    /// Death screen with the cause of death
    DeathScreen { cause: String },
}

/// Application state
pub struct App {
    state: GameState,
    mode: UiMode,
    should_quit: bool,
}

impl App {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            mode: UiMode::Normal,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Translate a terminal event into a command for the current mode.
    pub fn handle_event(&mut self, event: Event) -> Option<Command> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match &self.mode {
            UiMode::DeathScreen { .. } => {
                // Any key leaves the crypt.
                self.should_quit = true;
                None
            }
            UiMode::Inventory => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('i')) {
                    self.mode = UiMode::Normal;
                }
                None
            }
            UiMode::Combat => self.combat_key(key),
            UiMode::Normal => {
                if key.code == KeyCode::Char('i') {
                    self.mode = UiMode::Inventory;
                    return None;
                }
                key_to_command(key)
            }
        }
    }

    fn combat_key(&mut self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Char('a') | KeyCode::Enter => Some(Command::Attack),
            KeyCode::Char('f') | KeyCode::Esc => Some(Command::Flee),
            KeyCode::Char('e') => Some(Command::Eat),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        }
    }

    /// Run one command through the game loop and keep the UI mode in sync.
    pub fn execute(&mut self, command: Command) -> GameLoopResult {
        let result = self.state.step(command);
        match &result {
            GameLoopResult::PlayerDied(cause) => {
                self.mode = UiMode::DeathScreen {
                    cause: cause.clone(),
                };
            }
            GameLoopResult::PlayerQuit => {
                self.should_quit = true;
            }
            GameLoopResult::Continue | GameLoopResult::StageCleared => {
                self.mode = if self.state.encounter.is_some() {
                    UiMode::Combat
                } else {
                    UiMode::Normal
                };
            }
        }
        result
    }

    pub fn render(&self, frame: &mut Frame) {
        display::render(frame, self);
    }
}
