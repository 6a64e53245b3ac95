//! Main menu, rules and difficulty screens.

use super::app::{App, MENU_ITEMS};
use crate::ai::Difficulty;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const RULES: [&str; 5] = [
    "Two players take turns dropping pieces into a 7 column, 6 row grid.",
    "A piece falls to the lowest empty cell of its column.",
    "Player 1 plays X and always moves first; Player 2 plays O.",
    "Four of your pieces in a line wins: across, up and down, or diagonally.",
    "If the grid fills up before anyone connects four, the game is a draw.",
];

/// Numbered list with the highlighted entry picked out in cyan.
fn options<'a>(labels: impl Iterator<Item = &'a str>, selected: usize) -> Vec<Line<'a>> {
    labels
        .enumerate()
        .map(|(i, label)| {
            let text = format!("{}. {label}", i + 1);
            if i == selected {
                Line::styled(
                    format!("> {text}"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::from(format!("  {text}"))
            }
        })
        .collect()
}

fn layout(frame: &Frame) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(frame.area());
    [chunks[0], chunks[1], chunks[2]]
}

fn render_frame(frame: &mut Frame, title: &str, body: Vec<Line>, footer: &str) {
    let [header, main, controls] = layout(frame);

    let header_widget = Paragraph::new("Welcome to Connect 4!")
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(header_widget, header);

    let body_widget = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(body_widget, main);

    let footer_widget = Paragraph::new(footer)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(footer_widget, controls);
}

pub fn render_menu(frame: &mut Frame, app: &App) {
    render_frame(
        frame,
        "Main Menu",
        options(MENU_ITEMS.into_iter(), app.menu_index()),
        "↑/↓: Move  |  Enter or 1-4: Select  |  Q: Quit",
    );
}

pub fn render_rules(frame: &mut Frame) {
    let mut body: Vec<Line> = RULES.into_iter().map(Line::from).collect();
    body.push(Line::from(""));
    body.push(Line::from("Controls: ←/→ choose a column, Enter drops a piece, or press 1-7."));
    render_frame(frame, "Rules", body, "Press any key to return");
}

pub fn render_difficulty(frame: &mut Frame, app: &App) {
    let selected = Difficulty::ALL
        .iter()
        .position(|&d| d == app.difficulty())
        .unwrap_or(0);
    let mut body = vec![Line::from("Select CPU difficulty:"), Line::from("")];
    body.extend(options(Difficulty::ALL.iter().map(|d| d.name()), selected));
    render_frame(
        frame,
        "Difficulty",
        body,
        "↑/↓: Move  |  Enter or 1-3: Start  |  Esc: Back",
    );
}
