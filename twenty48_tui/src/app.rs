//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, info, instrument, warn};
use twenty48::{Board, BoardError, Direction, GameStatus};

/// Modal dialog blocking the board until acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// A merge reached 2048.
    Won,
    /// Board is full with no moves left.
    Lost,
    /// Rules and key bindings.
    Rules,
}

/// The result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running.
    Stay,
    /// Exit the application.
    Quit,
}

/// Main application state: one board plus presentation concerns.
#[derive(Debug)]
pub struct App {
    board: Board,
    status_message: String,
    dialog: Option<Dialog>,
}

impl App {
    /// Creates the application with a fresh board of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeOutOfRange`] for sizes outside 2..=9.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let mut rng = rand::thread_rng();
        let board = Board::with_start_tiles(size, &mut rng)?;
        let status_message = Self::play_message(&board);
        Ok(Self {
            board,
            status_message,
            dialog: None,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns the open dialog, if any.
    pub fn dialog(&self) -> Option<Dialog> {
        self.dialog
    }

    /// Handles a key event and returns the resulting [`Transition`].
    ///
    /// While a dialog is open every key is swallowed except the
    /// acknowledgment, which closes it; acknowledging a win or loss
    /// dialog resets the board before further input is processed.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        if let Some(dialog) = self.dialog {
            self.handle_dialog_key(dialog, key);
            return Transition::Stay;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Transition::Quit,
            KeyCode::Char('n') => {
                self.new_game();
                Transition::Stay
            }
            KeyCode::Char('h') => {
                self.dialog = Some(Dialog::Rules);
                Transition::Stay
            }
            KeyCode::Char(c @ '2'..='9') => {
                self.change_size(c as usize - '0' as usize);
                Transition::Stay
            }
            KeyCode::Up => self.step(Direction::Up),
            KeyCode::Down => self.step(Direction::Down),
            KeyCode::Left => self.step(Direction::Left),
            KeyCode::Right => self.step(Direction::Right),
            _ => Transition::Stay,
        }
    }

    fn handle_dialog_key(&mut self, dialog: Dialog, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                if matches!(dialog, Dialog::Won | Dialog::Lost) {
                    self.new_game();
                }
                self.dialog = None;
            }
            _ => {}
        }
    }

    fn step(&mut self, dir: Direction) -> Transition {
        let mut rng = rand::thread_rng();
        match self.board.step(dir, &mut rng) {
            GameStatus::Playing => {
                self.status_message = Self::play_message(&self.board);
            }
            GameStatus::Won => {
                info!("Reached the winning tile");
                self.status_message = "You win!".to_string();
                self.dialog = Some(Dialog::Won);
            }
            GameStatus::Lost => {
                info!("No moves left");
                self.status_message = "Game over.".to_string();
                self.dialog = Some(Dialog::Lost);
            }
        }
        Transition::Stay
    }

    fn new_game(&mut self) {
        debug!("Starting new game");
        let mut rng = rand::thread_rng();
        self.board.reset(&mut rng);
        self.status_message = Self::play_message(&self.board);
    }

    fn change_size(&mut self, size: usize) {
        let mut rng = rand::thread_rng();
        match Board::with_start_tiles(size, &mut rng) {
            Ok(board) => {
                info!(size, "Changed grid size");
                self.board = board;
                self.status_message = Self::play_message(&self.board);
            }
            Err(e) => warn!(error = %e, "Rejected grid size"),
        }
    }

    fn play_message(board: &Board) -> String {
        match board.max_tile() {
            Some(max) => format!("{0}x{0} grid. Largest tile: {1}.", board.size(), max),
            None => format!("{0}x{0} grid.", board.size()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twenty48::Cell;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    /// An app whose 2x2 board is full with no adjacent equal pair.
    fn stuck_app() -> App {
        let mut board = Board::new(2).expect("Valid size");
        board.set(0, 0, Cell::Tile(2)).expect("In bounds");
        board.set(0, 1, Cell::Tile(4)).expect("In bounds");
        board.set(1, 0, Cell::Tile(8)).expect("In bounds");
        board.set(1, 1, Cell::Tile(16)).expect("In bounds");
        App {
            board,
            status_message: String::new(),
            dialog: None,
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(4).expect("Valid size");
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Transition::Quit);
        let mut app = App::new(4).expect("Valid size");
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Transition::Quit);
    }

    #[test]
    fn test_size_keys_rebuild_the_board() {
        let mut app = App::new(4).expect("Valid size");
        app.handle_key(key(KeyCode::Char('7')));
        assert_eq!(app.board().size(), 7);
        assert_eq!(app.board().occupied_count(), 2);
    }

    #[test]
    fn test_new_game_resets_the_board() {
        let mut app = App::new(3).expect("Valid size");
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.board().size(), 3);
        assert_eq!(app.board().occupied_count(), 2);
    }

    #[test]
    fn test_rules_dialog_swallows_input() {
        let mut app = App::new(4).expect("Valid size");
        app.handle_key(key(KeyCode::Char('h')));
        assert_eq!(app.dialog(), Some(Dialog::Rules));
        // Movement and quit keys are swallowed while the dialog is open.
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Transition::Stay);
        assert_eq!(app.dialog(), Some(Dialog::Rules));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.dialog(), None);
    }

    #[test]
    fn test_loss_dialog_acknowledgment_resets_the_board() {
        let mut app = stuck_app();
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.dialog(), Some(Dialog::Lost));
        // Further input is swallowed until the dialog is acknowledged.
        assert_eq!(app.handle_key(key(KeyCode::Left)), Transition::Stay);
        assert_eq!(app.dialog(), Some(Dialog::Lost));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.dialog(), None);
        assert_eq!(app.board().occupied_count(), 2);
        for cell in app.board().cells() {
            assert!(matches!(cell, Cell::Empty | Cell::Tile(2)));
        }
    }

    #[test]
    fn test_win_dialog_acknowledgment_resets_the_board() {
        let mut app = stuck_app();
        app.board.set(0, 0, Cell::Tile(1024)).expect("In bounds");
        app.board.set(0, 1, Cell::Tile(1024)).expect("In bounds");
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.dialog(), Some(Dialog::Won));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.dialog(), None);
        assert_eq!(app.board().occupied_count(), 2);
        for cell in app.board().cells() {
            assert!(matches!(cell, Cell::Empty | Cell::Tile(2)));
        }
    }

    #[test]
    fn test_arrow_keys_keep_running() {
        let mut app = App::new(4).expect("Valid size");
        assert_eq!(app.handle_key(key(KeyCode::Left)), Transition::Stay);
    }
}
