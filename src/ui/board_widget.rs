use crate::game::{Board, Cell, Column, COLS, ROWS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn cell_span(cell: Cell) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::PlayerOne => (" X ", Color::Red),
        Cell::PlayerTwo => (" O ", Color::Yellow),
    };
    Span::styled(symbol, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

/// Board framed with column numbers above and, if a column is selected, a
/// marker beneath it.
pub fn board_lines(board: &Board, selected: Option<Column>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(ROWS + 4);

    let mut numbers = vec![Span::raw("   ")]; // Padding to match "  ║"
    for column in Column::all() {
        let label = format!(" {column} ");
        if Some(column) == selected {
            numbers.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            numbers.push(Span::raw(label));
        }
    }
    numbers.push(Span::raw("  "));
    lines.push(Line::from(numbers));

    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(COLS * 3 + 1))));
    for row in 0..ROWS {
        let mut spans = vec![Span::raw("  ║")];
        spans.extend((0..COLS).map(|col| cell_span(board.get(row, col))));
        spans.push(Span::raw(" ║"));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(COLS * 3 + 1))));

    let mut indicator = vec![Span::raw("   ")];
    for column in Column::all() {
        if Some(column) == selected {
            indicator.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator.push(Span::raw("   "));
        }
    }
    indicator.push(Span::raw("  "));
    lines.push(Line::from(indicator));

    lines
}
