//! Board grid rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use twenty48::{Board, Cell};

const CELL_WIDTH: u16 = 8;
const CELL_HEIGHT: u16 = 3;

/// Renders the N×N board centered in the given area.
pub fn render_board(f: &mut Frame, area: Rect, board: &Board) {
    let n = board.size() as u16;
    let board_area = center_rect(area, n * CELL_WIDTH, n * CELL_HEIGHT);
    let row_constraints: Vec<Constraint> = (0..n).map(|_| Constraint::Length(CELL_HEIGHT)).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(board_area);

    for (row, row_area) in rows.iter().enumerate() {
        let col_constraints: Vec<Constraint> =
            (0..n).map(|_| Constraint::Length(CELL_WIDTH)).collect();
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            render_cell(f, *cell_area, board.get(row, col).unwrap_or(Cell::Empty));
        }
    }
}

fn render_cell(f: &mut Frame, area: Rect, cell: Cell) {
    let (text, style) = match cell {
        Cell::Empty => (String::new(), Style::default().fg(Color::DarkGray)),
        Cell::Tile(value) => (
            value.to_string(),
            tile_style(value).add_modifier(Modifier::BOLD),
        ),
    };
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn tile_style(value: u32) -> Style {
    let color = match value {
        2 => Color::Gray,
        4 => Color::White,
        8 => Color::LightYellow,
        16 => Color::Yellow,
        32 => Color::LightRed,
        64 => Color::Red,
        128 => Color::LightGreen,
        256 => Color::Green,
        512 => Color::LightCyan,
        1024 => Color::Cyan,
        2048 => Color::LightMagenta,
        _ => Color::Magenta,
    };
    Style::default().fg(color)
}

/// Centers a `width` by `height` rectangle inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
