use crate::game::{Board, Cell, Position};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Symbol and colour for one cell.
pub fn cell_style(cell: Cell) -> (&'static str, Color) {
    match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Red => (" \u{25cf} ", Color::Red),
        Cell::Yellow => (" \u{25cf} ", Color::Yellow),
    }
}

/// One line per board row, framed by `left`/`right`. Cells in `highlight`
/// are drawn reversed.
pub fn board_lines(
    board: &Board,
    highlight: &[Position],
    left: &'static str,
    right: &'static str,
) -> Vec<Line<'static>> {
    (0..board.rows())
        .map(|row| {
            let mut spans = vec![Span::raw(left)];
            for col in 0..board.cols() {
                let (symbol, color) = cell_style(board.get(row, col));
                let mut style = Style::default().fg(color);
                if highlight.contains(&Position::new(row, col)) {
                    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                spans.push(Span::styled(symbol, style));
            }
            spans.push(Span::raw(right));
            Line::from(spans)
        })
        .collect()
}
