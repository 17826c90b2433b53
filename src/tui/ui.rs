//! Stateless UI rendering: status line, board grid, move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::game::{GameStatus, Player, Position, SortOrder, Square, WinLine};

use super::app::{App, Focus};

/// Renders the whole frame from application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status
            Constraint::Min(14),   // Board and move list
            Constraint::Length(3), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let status = Paragraph::new(app.session().status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    draw_board(frame, body[0], app);
    draw_moves(frame, body[1], app);

    let help = Paragraph::new("Arrows: move   Enter: play/jump   Tab: panel   o: order   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let focused = *app.focus() == Focus::Board;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(panel_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let win = match app.session().status() {
        GameStatus::Won(line) => Some(line),
        _ => None,
    };

    let board_area = center_rect(inner, 25, 12);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // column labels
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_column_labels(frame, rows[0], app);
    draw_row(
        frame,
        rows[1],
        app,
        win,
        &[Position::TopLeft, Position::TopCenter, Position::TopRight],
    );
    draw_separator(frame, rows[2]);
    draw_row(
        frame,
        rows[3],
        app,
        win,
        &[Position::MiddleLeft, Position::Center, Position::MiddleRight],
    );
    draw_separator(frame, rows[4]);
    draw_row(
        frame,
        rows[5],
        app,
        win,
        &[
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
    );
}

const CELL_COLUMNS: [Constraint; 6] = [
    Constraint::Length(2), // row label gutter
    Constraint::Length(7),
    Constraint::Length(1),
    Constraint::Length(7),
    Constraint::Length(1),
    Constraint::Length(7),
];

fn draw_column_labels(frame: &mut Frame, area: Rect, app: &App) {
    if !*app.show_coordinates() {
        return;
    }
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(CELL_COLUMNS)
        .split(area);
    for (slot, label) in [(1, "1"), (3, "2"), (5, "3")] {
        let paragraph = Paragraph::new(label)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, cols[slot]);
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    win: Option<WinLine>,
    positions: &[Position; 3],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(CELL_COLUMNS)
        .split(area);

    if *app.show_coordinates() {
        let label = Paragraph::new(positions[0].row().to_string())
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(label, cols[0]);
    }

    draw_cell(frame, cols[1], app, win, positions[0]);
    draw_separator_vertical(frame, cols[2]);
    draw_cell(frame, cols[3], app, win, positions[1]);
    draw_separator_vertical(frame, cols[4]);
    draw_cell(frame, cols[5], app, win, positions[2]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, win: Option<WinLine>, pos: Position) {
    let (symbol, base_style) = match app.session().board().get(pos) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let winning = win.is_some_and(|line| line.contains(pos));
    let style = if *app.focus() == Focus::Board && pos == *app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);
    let sep = Paragraph::new("─".repeat(cols[1].width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, cols[1]);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let focused = *app.focus() == Focus::Moves;
    let records = app.session().moves();
    let current = app.session().timeline().cursor();

    let mut items = Vec::with_capacity(records.len());
    for row in 0..records.len() {
        let number = app.move_number_at(row);
        let record = &records[number];
        let is_current = number == current;

        let text = if is_current {
            record.describe_current()
        } else {
            record.describe()
        };

        let mut style = if is_current {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        if focused && row == *app.selected_row() {
            style = style.bg(Color::White).fg(Color::Black);
        }

        items.push(ListItem::new(text).style(style));
    }

    let title = match app.session().order() {
        SortOrder::Ascending => "Moves (oldest first)",
        SortOrder::Descending => "Moves (newest first)",
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(panel_style(focused)),
    );
    frame.render_widget(list, area);
}

fn panel_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
