//! One game between two players.

use crate::board::{Board, FenError};
use crate::outcome::Outcome;
use shakmaty::{Color, Piece, Square};

/// A game session: one position plus a resignation flag.
///
/// The resignation flag is monotonic; only constructing a new session
/// clears it. Everything else about the game lives in the [`Board`].
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    resigned: bool,
}

impl Session {
    /// Starts a session at the standard starting position.
    pub fn new() -> Self {
        Session {
            board: Board::new(),
            resigned: false,
        }
    }

    /// Starts a session at the position described by `fen`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Session {
            board: Board::from_fen(fen)?,
            resigned: false,
        })
    }

    /// Rebuilds a session from a save record's fields.
    pub fn restore(fen: &str, resigned: bool) -> Result<Self, FenError> {
        Ok(Session {
            board: Board::from_fen(fen)?,
            resigned,
        })
    }

    /// Attempts a move given as UCI text; returns whether it was applied.
    ///
    /// Malformed and illegal text both fail silently with no state change.
    /// Four-character text that fails is retried once with a queen-promotion
    /// suffix, so callers never have to ask for a promotion piece: clicking a
    /// pawn onto the last rank just promotes to a queen.
    pub fn attempt_move(&mut self, text: &str) -> bool {
        if self.is_over() {
            return false;
        }
        if self.board.play_uci(text).is_ok() {
            return true;
        }
        if text.len() == 4 {
            let queen = format!("{text}q");
            if self.board.play_uci(&queen).is_ok() {
                return true;
            }
        }
        false
    }

    /// True if the game has ended by resignation or a terminal position.
    pub fn is_over(&self) -> bool {
        self.resigned || self.board.is_terminal()
    }

    /// How the game stands.
    ///
    /// Resignation is decided without consulting the board; among board
    /// conditions checkmate wins over stalemate, which wins over the draw
    /// rules, so overlapping conditions report deterministically.
    pub fn outcome(&self) -> Outcome {
        if self.resigned {
            return Outcome::Resignation {
                winner: self.board.turn().other(),
            };
        }
        if self.board.is_checkmate() {
            Outcome::Checkmate {
                winner: self.board.turn().other(),
            }
        } else if self.board.is_stalemate() {
            Outcome::Stalemate
        } else if self.board.is_insufficient_material() {
            Outcome::InsufficientMaterial
        } else if self.board.is_seventyfive_moves() {
            Outcome::SeventyFiveMoves
        } else if self.board.is_fivefold_repetition() {
            Outcome::FivefoldRepetition
        } else {
            Outcome::InProgress
        }
    }

    /// Resigns on behalf of the side to move. Idempotent.
    pub fn resign(&mut self) {
        self.resigned = true;
    }

    /// True if a player has resigned.
    pub fn resigned(&self) -> bool {
        self.resigned
    }

    /// Whose move it is.
    pub fn turn(&self) -> Color {
        self.board.turn()
    }

    /// True if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.board.is_check()
    }

    /// The piece on a square, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    /// Read access to the underlying board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Encodes the current position as FEN.
    pub fn to_fen(&self) -> String {
        self.board.to_fen()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session() {
        let session = Session::new();
        assert!(!session.is_over());
        assert_eq!(session.turn(), Color::White);
        assert_eq!(session.outcome(), Outcome::InProgress);
    }

    #[test]
    fn attempt_move_applies_legal_text() {
        let mut session = Session::new();
        assert!(session.attempt_move("e2e4"));
        assert_eq!(session.turn(), Color::Black);
    }

    #[test]
    fn attempt_move_rejects_illegal_and_malformed() {
        let mut session = Session::new();
        let before = session.to_fen();
        assert!(!session.attempt_move("e2e5"));
        assert!(!session.attempt_move("x"));
        assert!(!session.attempt_move(""));
        assert!(!session.attempt_move("e2e4e5"));
        assert_eq!(session.to_fen(), before);
    }

    #[test]
    fn bare_promotion_defaults_to_queen() {
        let mut session = Session::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
        assert!(session.attempt_move("a7a8"));
        assert_eq!(
            session.piece_at(Square::A8).map(|p| p.role),
            Some(crate::Role::Queen)
        );
    }

    #[test]
    fn explicit_promotion_suffix_is_honored() {
        let mut session = Session::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
        assert!(session.attempt_move("a7a8n"));
        assert_eq!(
            session.piece_at(Square::A8).map(|p| p.role),
            Some(crate::Role::Knight)
        );
    }

    #[test]
    fn queen_retry_only_helps_when_queen_variant_is_legal() {
        // The a7 pawn is blocked by the rook on a8; neither "a7a8" nor the
        // retried "a7a8q" is legal.
        let mut session = Session::from_fen("r6k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let before = session.to_fen();
        assert!(!session.attempt_move("a7a8"));
        assert_eq!(session.to_fen(), before);
    }

    #[test]
    fn non_promotion_move_is_not_retried() {
        let mut session = Session::new();
        // "e2e5q" is five characters and illegal; no retry applies.
        assert!(!session.attempt_move("e2e5q"));
    }

    #[test]
    fn fools_mate_outcome() {
        let mut session = Session::new();
        for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            assert!(session.attempt_move(mv));
        }
        assert!(session.is_over());
        assert_eq!(
            session.outcome(),
            Outcome::Checkmate {
                winner: Color::Black
            }
        );
        assert_eq!(session.outcome().to_string(), "Checkmate! Black wins");
    }

    #[test]
    fn no_moves_after_game_over() {
        let mut session = Session::new();
        for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            session.attempt_move(mv);
        }
        assert!(!session.attempt_move("a2a3"));
    }

    #[test]
    fn resignation_is_idempotent_and_names_winner() {
        let mut session = Session::new();
        session.resign();
        assert!(session.is_over());
        let first = session.outcome();
        session.resign();
        assert_eq!(session.outcome(), first);
        assert_eq!(
            first,
            Outcome::Resignation {
                winner: Color::Black
            }
        );
        assert_eq!(first.to_string(), "Black wins by resignation");
    }

    #[test]
    fn resignation_as_black_names_white() {
        let mut session = Session::new();
        assert!(session.attempt_move("e2e4"));
        session.resign();
        assert_eq!(
            session.outcome(),
            Outcome::Resignation {
                winner: Color::White
            }
        );
    }

    #[test]
    fn no_moves_after_resignation() {
        let mut session = Session::new();
        session.resign();
        assert!(!session.attempt_move("e2e4"));
    }

    #[test]
    fn stalemate_outcome() {
        let session = Session::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(session.is_over());
        assert_eq!(session.outcome(), Outcome::Stalemate);
    }

    #[test]
    fn insufficient_material_outcome() {
        let session = Session::from_fen("8/8/8/8/8/8/8/4K2k w - - 0 1").unwrap();
        assert_eq!(session.outcome(), Outcome::InsufficientMaterial);
    }

    #[test]
    fn seventyfive_move_outcome() {
        let session = Session::from_fen("8/8/8/8/8/8/8/R3K2k w Q - 150 1").unwrap();
        assert_eq!(session.outcome(), Outcome::SeventyFiveMoves);
    }

    #[test]
    fn restore_keeps_resignation() {
        let session = Session::restore(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            true,
        )
        .unwrap();
        assert!(session.is_over());
        assert!(session.resigned());
    }
}
