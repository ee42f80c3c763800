use std::time::Duration;

use crate::game::{GameState, Player};
use crate::scores::ScoreBoard;
use crate::session::Session;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::board_widget::board_lines;

/// Everything the game screen shows, borrowed from the app for one frame.
pub struct GameView<'a> {
    pub session: &'a Session,
    pub selected_column: usize,
    pub message: Option<&'a str>,
    pub mode: String,
    pub scores: ScoreBoard,
    pub time_left: Duration,
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

pub fn render(frame: &mut Frame, view: &GameView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board + sidebar
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(44)])
        .split(chunks[1]);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(middle[1]);

    render_header(frame, view, chunks[0]);
    render_board(frame, view, middle[0]);
    render_scores(frame, view.scores, sidebar[0]);
    render_log(frame, view.session, sidebar[1]);
    render_message(frame, view.message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, view: &GameView, area: Rect) {
    let session = view.session;
    let current = session.current_player();

    let (status, color) = match session.state() {
        GameState::InProgress => (
            format!(
                "Current Player: {}  |  {}s left  |  {}",
                current.name(),
                view.time_left.as_secs(),
                view.mode
            ),
            player_color(current),
        ),
        GameState::Won { player, .. } => (
            format!("{} wins!  |  {}", player.name(), view.mode),
            player_color(*player),
        ),
        GameState::Draw => (format!("It's a draw!  |  {}", view.mode), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Connect Four  -  Game {}", session.game_number())),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, view: &GameView, area: Rect) {
    let board = view.session.board();
    let cols = board.cols();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == view.selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(cols * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));
    lines.extend(board_lines(
        board,
        view.session.state().winning_cells(),
        "  ║",
        " ║",
    ));
    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == view.selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_scores(frame: &mut Frame, scores: ScoreBoard, area: Rect) {
    let line = Line::from(vec![
        Span::styled("Red ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(format!("{}", scores.red)),
        Span::raw("   "),
        Span::styled(
            "Yellow ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{}", scores.yellow)),
    ]);
    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Scores"));
    frame.render_widget(widget, area);
}

fn render_log(frame: &mut Frame, session: &Session, area: Rect) {
    // Newest entries that fit, keeping chronological order.
    let visible = area.height.saturating_sub(2) as usize;
    let log = session.log();
    let items: Vec<ListItem> = log
        .entries()
        .skip(log.len().saturating_sub(visible))
        .map(|entry| ListItem::new(entry.to_string()))
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Game Log"));
    frame.render_widget(list, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  U: Undo  |  R: Restart  |  Q: Quit");
    let line2 = Line::from("C: Computer  |  1/2/3: Easy/Medium/Hard  |  S: Board size  |  T: Turn limit");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
