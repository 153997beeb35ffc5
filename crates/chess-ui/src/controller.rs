//! The session controller.
//!
//! One owner for the live game: session, selection, history, the player's
//! chosen color, and the injected save store. Presentation shells call the
//! `on_*` operations and read state back through the snapshot accessors;
//! they never touch the session directly.

use crate::history::MoveHistory;
use crate::selection::{ClickOutcome, Selection};
use chess_session::{color_name, Color, FenError, Outcome, Session, Square};
use chess_store::{SaveRecord, SaveStore, StoreError};
use thiserror::Error;

/// Error from [`GameController::on_load_requested`].
///
/// Loading is all-or-nothing: on any of these the live session, history,
/// and player color are untouched.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("saved position is invalid: {0}")]
    Position(#[from] FenError),
}

/// Owns one live game and the save slot behind it.
pub struct GameController<S> {
    session: Session,
    selection: Selection,
    history: MoveHistory,
    player_color: Color,
    store: S,
}

impl<S: SaveStore> GameController<S> {
    /// Creates a controller with a fresh game and the given save store.
    pub fn new(store: S) -> Self {
        GameController {
            session: Session::new(),
            selection: Selection::new(),
            history: MoveHistory::new(),
            player_color: Color::White,
            store,
        }
    }

    /// Routes one square click through the interaction state machine and
    /// records the move on success.
    pub fn on_square_clicked(&mut self, square: Square) -> ClickOutcome {
        let outcome = self.selection.handle_click(&mut self.session, square);
        if let ClickOutcome::Moved(text) = &outcome {
            self.history.push(text);
            tracing::debug!(%square, mv = %text, "move applied");
        }
        outcome
    }

    /// Resigns the game for the side to move.
    pub fn on_resign(&mut self) {
        self.session.resign();
        self.selection.clear();
        tracing::info!(outcome = %self.session.outcome(), "player resigned");
    }

    /// Starts a fresh game with the player behind `color`. Clears the
    /// selection and the history; the save slot is left alone.
    pub fn on_new_game(&mut self, color: Color) {
        self.session = Session::new();
        self.selection.clear();
        self.history.reset();
        self.player_color = color;
        tracing::info!(player = color_name(color), "new game");
    }

    /// Writes the current game to the save slot.
    ///
    /// On failure the in-memory game is untouched and stays authoritative;
    /// the error is for the shell to report.
    pub fn on_save_requested(&self) -> Result<(), StoreError> {
        let record = SaveRecord::new(
            self.session.to_fen(),
            self.player_color.into(),
            self.history.as_lines().to_vec(),
            self.session.resigned(),
        );
        self.store.save(&record)
    }

    /// Replaces the live game with the saved one.
    ///
    /// The replacement session is fully constructed before anything live is
    /// touched, so a failed load leaves the current game exactly as it was.
    pub fn on_load_requested(&mut self) -> Result<(), LoadError> {
        let record = self.store.load()?;
        let session = Session::restore(&record.fen, record.resigned)?;

        self.session = session;
        self.history = MoveHistory::from_lines(record.history);
        self.player_color = record.player_color.into();
        self.selection.clear();
        tracing::info!(fen = %self.session.to_fen(), "saved game loaded");
        Ok(())
    }

    /// Deletes the save slot.
    pub fn discard_save(&self) -> Result<(), StoreError> {
        self.store.clear()
    }

    /// True if the save slot holds a game to continue.
    pub fn has_saved_game(&self) -> bool {
        self.store.exists()
    }

    // --- snapshots for the presentation shell ---

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn history_lines(&self) -> impl Iterator<Item = &str> {
        self.history.lines()
    }

    pub fn player_color(&self) -> Color {
        self.player_color
    }

    pub fn turn(&self) -> Color {
        self.session.turn()
    }

    pub fn is_check(&self) -> bool {
        self.session.is_check()
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    pub fn outcome(&self) -> Outcome {
        self.session.outcome()
    }

    /// The outcome as display text.
    pub fn result_text(&self) -> String {
        self.session.outcome().to_string()
    }

    /// The line the status bar shows: the result once the game is over,
    /// otherwise whose move it is.
    pub fn status_line(&self) -> String {
        if self.session.is_over() {
            self.session.outcome().to_string()
        } else if self.session.is_check() {
            format!("{} to move — check!", color_name(self.session.turn()))
        } else {
            format!("{} to move", color_name(self.session.turn()))
        }
    }
}
