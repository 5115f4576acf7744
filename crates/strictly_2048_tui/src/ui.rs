//! Stateless UI rendering for the 2048 board.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strictly_2048::{Board, Cell, SIZE};

const CELL_WIDTH: u16 = 8;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * SIZE as u16 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * SIZE as u16 + 2;

const EMPTY: Color = Color::Rgb(0xcd, 0xc1, 0xb4);
const FRAME: Color = Color::Rgb(0xbb, 0xad, 0xa0);
const DARK_TEXT: Color = Color::Rgb(0x77, 0x6e, 0x65);
const LIGHT_TEXT: Color = Color::Rgb(0xf9, 0xf6, 0xf2);

/// Background colour for a tile value.
pub fn tile_color(value: u32) -> Color {
    match value {
        2 => Color::Rgb(0xee, 0xe4, 0xda),
        4 => Color::Rgb(0xed, 0xe0, 0xc8),
        8 => Color::Rgb(0xf2, 0xb1, 0x79),
        16 => Color::Rgb(0xf5, 0x95, 0x63),
        32 => Color::Rgb(0xf6, 0x7c, 0x5f),
        64 => Color::Rgb(0xf6, 0x5e, 0x3b),
        128 => Color::Rgb(0xed, 0xcf, 0x72),
        256 => Color::Rgb(0xed, 0xcc, 0x61),
        512 => Color::Rgb(0xed, 0xc8, 0x50),
        1024 => Color::Rgb(0xed, 0xc5, 0x3f),
        2048 => Color::Rgb(0xed, 0xc2, 0x2e),
        _ => Color::Rgb(0x3c, 0x3a, 0x32),
    }
}

/// Full style for a tile: palette background, dark text on the two
/// smallest values, light text above.
pub fn tile_style(value: u32) -> Style {
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    Style::default()
        .bg(tile_color(value))
        .fg(fg)
        .add_modifier(Modifier::BOLD)
}

/// Renders the whole screen.
pub fn draw<R>(frame: &mut Frame, app: &App<R>) {
    let area = frame.area();
    let game = app.game();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(1),            // Stats
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly 2048")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let stats = Paragraph::new(Line::from(vec![
        Span::styled("Score ", Style::default().fg(Color::DarkGray)),
        Span::styled(game.score().to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled("Best ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.best().to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled("Moves ", Style::default().fg(Color::DarkGray)),
        Span::raw(game.move_count().to_string()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(stats, chunks[1]);

    let board_area = center_rect(chunks[2], BOARD_WIDTH, BOARD_HEIGHT);
    draw_board(frame, board_area, game.board());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("arrows/wasd/hjkl move · n new game · c continue · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if game.is_over() {
        draw_game_over(frame, board_area, game.score(), game.snapshot().is_some());
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FRAME));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); SIZE])
        .split(inner);

    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); SIZE])
            .split(*row_area);
        for (c, cell_area) in cols.iter().enumerate() {
            draw_cell(frame, *cell_area, board.value_at(Cell::new(r, c)));
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, value: Option<u32>) {
    let (label, style) = match value {
        Some(v) => (v.to_string(), tile_style(v)),
        None => (String::new(), Style::default().bg(EMPTY)),
    };

    let paragraph = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(label, style)),
        Line::raw(""),
    ])
    .style(style)
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_game_over(frame: &mut Frame, board_area: Rect, score: u32, can_continue: bool) {
    let area = center_rect(board_area, BOARD_WIDTH.saturating_sub(4), 6);
    let offer = if can_continue {
        "[c] continue   [n] new game"
    } else {
        "[n] new game"
    };

    let overlay = Paragraph::new(vec![
        Line::from(Span::styled(
            "Game over!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::raw(format!("Score: {}", score)),
        Line::raw(""),
        Line::raw(offer),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(Clear, area);
    frame.render_widget(overlay, area);
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
