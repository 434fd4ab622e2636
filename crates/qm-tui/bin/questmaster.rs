//! Quest Master
//!
//! Main entry point for the game.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use qm_core::{GameConfig, GameState, RoomBounds};
use qm_tui::App;

/// Quest Master - a small turn-based dungeon crawler
#[derive(Parser, Debug)]
#[command(name = "questmaster")]
#[command(author, version, about = "Quest Master - explore the rooms!", long_about = None)]
struct Args {
    /// Player name
    #[arg(short = 'u', long = "name")]
    name: Option<String>,

    /// Difficulty level of the first stage
    #[arg(short = 'l', long = "level", default_value_t = 0)]
    level: u32,

    /// RNG seed for a reproducible floor layout
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Smallest generated room dimension
    #[arg(long = "min-room")]
    min_room: Option<u8>,

    /// Largest generated room dimension
    #[arg(long = "max-room")]
    max_room: Option<u8>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let defaults = RoomBounds::default();
    let config = GameConfig {
        name: args.name,
        level: args.level,
        seed: args.seed,
        bounds: RoomBounds {
            min: args.min_room.unwrap_or(defaults.min),
            max: args.max_room.unwrap_or(defaults.max),
        },
    };

    // Validate configuration before touching the terminal.
    let state = match GameState::new(&config) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("questmaster: {err}");
            std::process::exit(2);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, App::new(state));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main loop: one key event becomes one command becomes one redraw.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            if let Some(command) = app.handle_event(event) {
                app.execute(command);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
