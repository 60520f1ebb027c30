use crate::session::Session;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::board_widget;

/// Draw the whole game screen. Returns the area the board was drawn into,
/// which mouse clicks are mapped against.
pub fn render(frame: &mut Frame, session: &Session, message: &Option<String>) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board + table
            Constraint::Length(3), // Solution step
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    render_header(frame, session, chunks[0]);
    let board_area = render_board(frame, session, main[0]);
    render_hypothetical_times(frame, session, main[1]);
    render_solution(frame, session, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);

    board_area
}

fn render_header(frame: &mut Frame, session: &Session, area: Rect) {
    let puzzle = session.puzzle();
    let min_moves = session
        .min_moves()
        .map_or_else(|| "?".to_string(), |m| m.to_string());

    let status = Line::from(vec![
        Span::raw(format!("Disks: {}", session.disk_count())),
        Span::raw("  |  "),
        Span::styled(
            format!("Moves: {}", puzzle.moves()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::raw(format!("Minimum moves: {min_moves}")),
    ]);

    let header = Paragraph::new(status)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Tower of Hanoi"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, session: &Session, area: Rect) -> Rect {
    let title = match session.puzzle().selection() {
        Some(sel) => format!("Board (holding disk {} from peg {})", sel.disk, sel.peg + 1),
        None => "Board".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    board_widget::render_board(frame, &session.draw_commands(), inner);
    inner
}

fn render_hypothetical_times(frame: &mut Frame, session: &Session, area: Rect) {
    let rows: Vec<Row> = session
        .hypothetical_times()
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.disks.to_string()),
                Cell::from(row.moves.to_string()),
                Cell::from(row.time.clone()),
            ])
        })
        .collect();

    let header = Row::new(vec!["Disks", "Moves", "Time (1 move/s)"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(16),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("By Hand"));

    frame.render_widget(table, area);
}

fn render_solution(frame: &mut Frame, session: &Session, area: Rect) {
    let player = session.player();
    let (text, title) = if player.is_visible() {
        let title = if player.is_empty() {
            "Solution".to_string()
        } else {
            format!("Solution (step {}/{})", player.cursor() + 1, player.len())
        };
        (player.current_step().to_string(), title)
    } else {
        ("Press S to fetch the optimal solution".to_string(), "Solution".to_string())
    };

    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(
        "Click: Pick/Drop  |  S: Solution  |  N: Next Step  |  +/-: Disks  |  R: Restart  |  Q: Quit",
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
