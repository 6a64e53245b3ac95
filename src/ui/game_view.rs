use super::app::{App, Screen};
use super::board_widget::board_lines;
use crate::game::Player;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(11),    // Board
            Constraint::Length(4),  // Message
            Constraint::Length(3),  // Controls
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_board(frame, app, chunks[1]);
    render_message(frame, app, chunks[2]);
    render_controls(frame, app, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.game_state();
    let current = state.current_player();

    let status = if app.screen() == Screen::GameOver {
        format!("Game Over  |  {}", app.mode_label())
    } else if app.awaiting_cpu() {
        format!("{current} (CPU) is thinking...  |  {}", app.mode_label())
    } else {
        format!(
            "Current Player: {current} ({})  |  {}",
            current.symbol(),
            app.mode_label()
        )
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(current))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let selected = (app.screen() == Screen::Playing && !app.awaiting_cpu())
        .then(|| app.selected_column());
    let board = Paragraph::new(board_lines(app.game_state().board(), selected))
        .alignment(Alignment::Center);
    frame.render_widget(board, area);
}

fn render_message(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app.message().unwrap_or("").lines().map(Line::from).collect();
    if let Some(result) = app.result() {
        lines.push(Line::styled(
            result.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let msg_widget = Paragraph::new(lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let text = if app.screen() == Screen::GameOver {
        "Press any key to return to the main menu"
    } else {
        "←/→: Move  |  1-7 / Enter: Drop  |  Esc: Menu"
    };

    let controls = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
