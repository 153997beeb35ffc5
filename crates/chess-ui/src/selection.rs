//! The click-to-move interaction state machine.
//!
//! Two states: idle, or one square selected with its legal destinations
//! cached. Destinations are queried fresh from the session on every
//! selection, never carried across moves, since legality changes after any
//! move (checks, pins, en-passant rights).
//!
//! Policy for a click on a different own-side piece while something is
//! selected: the new piece is selected immediately. A click anywhere else
//! that is not a legal destination just drops the selection.

use chess_session::{Rank, Role, Session, Square};

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing happened: empty or opponent square while idle, or the game
    /// is already over.
    Ignored,
    /// A piece of the side to move is now selected.
    Selected,
    /// The selection was dropped without a move.
    Deselected,
    /// A move was applied; carries the move text that was played.
    Moved(String),
    /// A destination click was refused by the session. Destinations are
    /// pre-validated, so this indicates a stale selection; the selection is
    /// dropped and nothing else changes.
    Rejected,
}

/// Selection state over the board grid.
#[derive(Debug, Default)]
pub struct Selection {
    picked: Option<Picked>,
}

#[derive(Debug)]
struct Picked {
    from: Square,
    targets: Vec<Square>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        self.picked.as_ref().map(|p| p.from)
    }

    /// Legal destinations of the selected piece; empty when idle.
    pub fn targets(&self) -> &[Square] {
        self.picked.as_ref().map_or(&[], |p| p.targets.as_slice())
    }

    /// True if `square` is a legal destination of the current selection.
    pub fn is_target(&self, square: Square) -> bool {
        self.targets().contains(&square)
    }

    /// Drops the selection.
    pub fn clear(&mut self) {
        self.picked = None;
    }

    /// Feeds one square click through the state machine.
    ///
    /// On a successful move the selection returns to idle and the applied
    /// move text is handed back so the caller can record it.
    pub fn handle_click(&mut self, session: &mut Session, square: Square) -> ClickOutcome {
        if session.is_over() {
            return ClickOutcome::Ignored;
        }

        let Some(picked) = self.picked.take() else {
            return if self.try_pick(session, square) {
                ClickOutcome::Selected
            } else {
                ClickOutcome::Ignored
            };
        };

        if picked.from == square {
            return ClickOutcome::Deselected;
        }

        if picked.targets.contains(&square) {
            let mut text = format!("{}{}", picked.from, square);
            if promotes(session, picked.from, square) {
                text.push('q');
            }
            return if session.attempt_move(&text) {
                ClickOutcome::Moved(text)
            } else {
                ClickOutcome::Rejected
            };
        }

        // Not a destination: switch to the clicked piece if it belongs to
        // the side to move, otherwise stay idle.
        if self.try_pick(session, square) {
            ClickOutcome::Selected
        } else {
            ClickOutcome::Deselected
        }
    }

    fn try_pick(&mut self, session: &Session, square: Square) -> bool {
        match session.piece_at(square) {
            Some(piece) if piece.color == session.turn() => {
                let targets = session.board().destinations_from(square);
                self.picked = Some(Picked {
                    from: square,
                    targets,
                });
                true
            }
            _ => false,
        }
    }
}

/// True if this click moves a pawn onto the first or last rank, which needs
/// a promotion suffix in the move text.
fn promotes(session: &Session, from: Square, to: Square) -> bool {
    session
        .piece_at(from)
        .is_some_and(|piece| piece.role == Role::Pawn)
        && (to.rank() == Rank::First || to.rank() == Rank::Eighth)
}
