//! Frame rendering
//!
//! Layout: status line on top, the current room in the middle, recent
//! messages at the bottom. Inventory, combat, and death screens draw as
//! centered popups over the room view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use qm_core::GameState;
use qm_core::player::Player;

use crate::app::{App, UiMode};

/// How many recent messages fit in the log pane
const MESSAGE_ROWS: u16 = 4;

pub fn render(frame: &mut Frame, app: &App) {
    let [status_area, room_area, message_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(10),
        Constraint::Length(MESSAGE_ROWS + 2),
    ])
    .areas(frame.area());

    render_status(frame, status_area, app.state());
    render_room(frame, room_area, app.state());
    render_messages(frame, message_area, app.state());

    match app.mode() {
        UiMode::Inventory => render_inventory(frame, app.state()),
        UiMode::Combat => render_combat(frame, app.state()),
        UiMode::DeathScreen { cause } => render_death(frame, app.state(), cause),
        UiMode::Normal => {}
    }
}

/// Name, stage and the stat line: HP, stamina, attack, weapon strength.
fn render_status(frame: &mut Frame, area: Rect, state: &GameState) {
    let player = &state.player;
    let line1 = Line::from(vec![
        Span::styled(
            format!("{} ", player.name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "- Stage {}  Room {}/{}  T:{}",
            state.stage.level(),
            state.stage.current() + 1,
            state.stage.room_count(),
            state.turns,
        )),
    ]);
    let line2 = Line::from(Span::styled(
        format!(
            "HP:{}/{}  Stamina:{}/{}  Attack:{}  {}:{}",
            player.hp,
            player.hp_max,
            player.stamina,
            player.stamina_max,
            player.attack,
            player.weapon.kind().name(),
            player.weapon.durability(),
        ),
        Style::default().fg(Color::Yellow),
    ));
    frame.render_widget(Paragraph::new(vec![line1, line2]), area);
}

/// The current room as text graphics, player glyph overlaid, centered.
fn render_room(frame: &mut Frame, area: Rect, state: &GameState) {
    let room = state.stage.current_room();
    let text = room.render_with_player(Some(state.player.pos));

    let width = room.width() as u16;
    let height = room.height() as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let centered = Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    };

    let lines: Vec<Line> = text.lines().map(Line::from).collect();
    frame.render_widget(Paragraph::new(lines), centered);
}

fn render_messages(frame: &mut Frame, area: Rect, state: &GameState) {
    let recent: Vec<Line> = state
        .message_history
        .iter()
        .rev()
        .take(MESSAGE_ROWS as usize)
        .rev()
        .map(|m| Line::from(m.as_str()))
        .collect();
    let block = Block::default().borders(Borders::TOP).title("Messages");
    frame.render_widget(Paragraph::new(recent).block(block), area);
}

fn render_inventory(frame: &mut Frame, state: &GameState) {
    let area = centered_rect(40, 14, frame.area());
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = inventory_lines(&state.player)
        .into_iter()
        .map(ListItem::new)
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Pack (i/Esc to close) "),
    );
    frame.render_widget(list, area);
}

fn inventory_lines(player: &Player) -> Vec<String> {
    let mut lines = vec![format!(
        "Wielded: {} ({})",
        player.weapon.kind().name(),
        player.weapon.durability()
    )];
    if player.pack.is_empty() {
        lines.push("The pack is empty.".into());
    } else {
        for item in &player.pack {
            lines.push(format!("{} {} [{}]", item.symbol(), item.name(), item.category()));
        }
    }
    lines
}

fn render_combat(frame: &mut Frame, state: &GameState) {
    let Some(monster) = &state.encounter else {
        return;
    };
    let area = centered_rect(44, 7, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            format!("{} ({})", monster.kind.name(), monster.kind.symbol()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("HP: {}/{}", monster.hp, monster.hp_max)),
        Line::from(""),
        Line::from("[a]ttack  [f]lee  [e]at"),
    ];
    let block = Block::default().borders(Borders::ALL).title(" Combat! ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_death(frame: &mut Frame, state: &GameState, cause: &str) {
    let area = centered_rect(46, 8, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "You have died.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(cause.to_string()),
        Line::from(format!(
            "Stage {} after {} turns.",
            state.stage.level(),
            state.turns
        )),
        Line::from(""),
        Line::from("Press any key to exit."),
    ];
    let block = Block::default().borders(Borders::ALL).title(" R.I.P. ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// A fixed-size rect centered in `base`, clipped to fit.
fn centered_rect(width: u16, height: u16, base: Rect) -> Rect {
    let width = width.min(base.width);
    let height = height.min(base.height);
    Rect {
        x: base.x + (base.width - width) / 2,
        y: base.y + (base.height - height) / 2,
        width,
        height,
    }
}
