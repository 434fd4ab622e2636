//! Main game loop state
//!
//! `GameState` owns the player, the active stage, and the RNG, and advances
//! one command at a time. One key press in the UI becomes one `step` call
//! followed by one redraw; there is no other mutation path.

use serde::{Deserialize, Serialize};

use crate::action::{Command, Direction, MoveOutcome, do_move};
use crate::combat::{monster_strike, player_strike};
use crate::config::{GameConfig, RoomBounds};
use crate::dungeon::Stage;
use crate::errors::GameError;
use crate::monster::Monster;
use crate::object::ItemKind;
use crate::player::Player;
use crate::rng::GameRng;

/// Result of one game loop step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Keep playing
    Continue,
    /// The stage was cleared; a new one has been generated
    StageCleared,
    /// The player died with a parting message
    PlayerDied(String),
    /// The player quit
    PlayerQuit,
}

/// Main game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Player character
    pub player: Player,

    /// The active floor
    pub stage: Stage,

    /// Generation bounds, reused for every subsequent stage
    pub bounds: RoomBounds,

    /// Random number generator
    pub rng: GameRng,

    /// Turn counter
    pub turns: u64,

    /// Live monster while an encounter is running
    pub encounter: Option<Monster>,

    /// Whether this stage's chest has been found yet
    chest_found: bool,

    /// Messages for the current turn
    #[serde(skip)]
    messages: Vec<String>,

    /// Permanent message history
    #[serde(skip)]
    pub message_history: Vec<String>,
}

impl GameState {
    /// Start a new game from a validated configuration.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let stage = Stage::new(config.level, config.bounds, &mut rng)?;

        let name = config.name.clone().unwrap_or_else(|| "Adventurer".into());
        let mut player = Player::new(name);
        player.pos = stage.current_room().entry_position();

        let mut state = Self {
            player,
            stage,
            bounds: config.bounds,
            rng,
            turns: 0,
            encounter: None,
            chest_found: false,
            messages: Vec::new(),
            message_history: Vec::new(),
        };
        state.message(format!(
            "Welcome, {}! You descend into the dungeon.",
            state.player.name
        ));
        state.message("Find the stairs. Mind the locals.");
        Ok(state)
    }

    /// Queue a message for the current turn.
    pub fn message(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        self.messages.push(msg.clone());
        self.message_history.push(msg);
    }

    /// Messages produced by the last step.
    pub fn turn_messages(&self) -> &[String] {
        &self.messages
    }

    /// Advance the game by one command.
    pub fn step(&mut self, command: Command) -> GameLoopResult {
        self.messages.clear();
        match command {
            Command::Quit => GameLoopResult::PlayerQuit,
            Command::Wait => {
                self.turns += 1;
                self.message("You wait.");
                GameLoopResult::Continue
            }
            Command::Move(dir) => {
                if let Some(monster) = &self.encounter {
                    let name = monster.kind.name();
                    self.message(format!("The {name} blocks your way!"));
                    return GameLoopResult::Continue;
                }
                self.turns += 1;
                self.resolve_move(dir)
            }
            Command::Attack => self.attack(),
            Command::Flee => self.flee(),
            Command::Eat => {
                if self.player.eat_bread() {
                    self.message("You eat some bread. Delicious.");
                } else {
                    self.message("You have no bread.");
                }
                GameLoopResult::Continue
            }
            Command::Wield => {
                match self.player.wield_from_pack() {
                    Some(kind) => self.message(format!("You wield the {}.", kind.name())),
                    None => self.message("Nothing in your pack beats what you hold."),
                }
                GameLoopResult::Continue
            }
            Command::OpenChest => {
                match self.player.open_chest() {
                    Some(kind) => self.message(format!(
                        "The lock clicks open. Inside: a {}!",
                        kind.name()
                    )),
                    None => self.message("You have no chest to open."),
                }
                GameLoopResult::Continue
            }
        }
    }

    fn resolve_move(&mut self, dir: Direction) -> GameLoopResult {
        match do_move(self, dir) {
            MoveOutcome::Blocked => {
                self.message("You can't move there!");
                GameLoopResult::Continue
            }
            MoveOutcome::Moved => {
                self.message(format!("You moved {}!", dir.label()));
                GameLoopResult::Continue
            }
            MoveOutcome::EnteredRoom { .. } => {
                self.message("You moved to a new room!");
                if self.stage.in_last_room() && !self.chest_found {
                    self.chest_found = true;
                    self.player.add_item(ItemKind::BigLock);
                    self.message("A Big Locked Chest sits in the corner. You take it.");
                }
                GameLoopResult::Continue
            }
            MoveOutcome::FoundItem(kind) => {
                self.message(format!("You got {}.", kind.name()));
                GameLoopResult::Continue
            }
            MoveOutcome::Encounter(kind) => {
                self.message(format!("You enter combat with a {}!", kind.name()));
                GameLoopResult::Continue
            }
            MoveOutcome::StairsReached => self.next_stage(),
        }
    }

    /// Generate the next floor and move the player to its entrance.
    fn next_stage(&mut self) -> GameLoopResult {
        let level = self.stage.level() + 1;
        match Stage::new(level, self.bounds, &mut self.rng) {
            Ok(stage) => {
                self.stage = stage;
                self.player.pos = self.stage.current_room().entry_position();
                self.chest_found = false;
                self.message(format!(
                    "You take the stairs down. Stage {level} awaits."
                ));
                GameLoopResult::StageCleared
            }
            Err(err) => {
                // Bounds were validated at construction; this is unreachable
                // in practice, but surfacing it beats corrupt state.
                self.message(format!("The stairs crumble: {err}"));
                GameLoopResult::Continue
            }
        }
    }

    fn attack(&mut self) -> GameLoopResult {
        let Some(mut monster) = self.encounter.take() else {
            self.message("There is nothing to attack.");
            return GameLoopResult::Continue;
        };
        self.turns += 1;

        let report = player_strike(&mut self.player, &mut monster, &mut self.rng);
        let name = monster.kind.name();
        if report.winded {
            self.message(format!(
                "Winded, you hit the {name} for {} damage.",
                report.damage
            ));
        } else {
            self.message(format!("You hit the {name} for {} damage.", report.damage));
        }
        if report.weapon_broke {
            self.message("Your weapon breaks! You raise your fists.");
        }

        if monster.is_dead() {
            self.message(format!("You defeated the {name}!"));
            return GameLoopResult::Continue;
        }

        let damage = monster_strike(&monster, &mut self.player, &mut self.rng);
        self.message(format!("The {name} hits you for {damage} damage."));
        if self.player.is_dead() {
            return GameLoopResult::PlayerDied(format!("Slain by a {name}."));
        }
        self.encounter = Some(monster);
        GameLoopResult::Continue
    }

    fn flee(&mut self) -> GameLoopResult {
        let Some(monster) = self.encounter.take() else {
            self.message("Nothing is chasing you.");
            return GameLoopResult::Continue;
        };
        self.turns += 1;

        if self.rng.one_in(2) {
            self.message(format!("You slip away from the {}.", monster.kind.name()));
            return GameLoopResult::Continue;
        }

        let name = monster.kind.name();
        let damage = monster_strike(&monster, &mut self.player, &mut self.rng);
        self.message(format!(
            "The {name} cuts off your escape and hits you for {damage} damage."
        ));
        if self.player.is_dead() {
            return GameLoopResult::PlayerDied(format!("Slain by a {name} while fleeing."));
        }
        self.encounter = Some(monster);
        GameLoopResult::Continue
    }
}
