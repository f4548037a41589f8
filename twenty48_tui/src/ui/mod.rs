//! UI rendering using ratatui.

mod board;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, Dialog};

pub use board::render_board;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("2048")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_board(f, chunks[1], app.board());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows: Move | 2-9: Grid size | N: New game | H: Rules | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);

    if let Some(dialog) = app.dialog() {
        render_dialog(f, dialog);
    }
}

fn render_dialog(f: &mut Frame, dialog: Dialog) {
    let (title, lines, height) = match dialog {
        Dialog::Won => (
            "You win!",
            vec![
                Line::from("A tile reached 2048."),
                Line::from(""),
                Line::from("Press Enter for a new game."),
            ],
            7,
        ),
        Dialog::Lost => (
            "Game over",
            vec![
                Line::from("The board is full and no tiles can merge."),
                Line::from(""),
                Line::from("Press Enter for a new game."),
            ],
            7,
        ),
        Dialog::Rules => (
            "Rules",
            vec![
                Line::from("Slide tiles with the arrow keys. Tiles that"),
                Line::from("collide with an equal tile merge into one of"),
                Line::from("double the value. Each move that changes the"),
                Line::from("board spawns a new 2-tile in a random empty"),
                Line::from("cell. Reach 2048 to win; the game ends when"),
                Line::from("the board is full and no merge is possible."),
                Line::from(""),
                Line::from("Press 2-9 to pick a grid size, N for a new"),
                Line::from("game. Good luck!"),
            ],
            13,
        ),
    };
    let area = board::center_rect(f.area(), 50, height);
    f.render_widget(Clear, area);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}
