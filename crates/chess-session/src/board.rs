//! Adapter over the `shakmaty` rules library.
//!
//! A `shakmaty` position is a standalone snapshot: it answers legality,
//! check, mate, stalemate, and material questions, but repetition draws need
//! the history of positions the game has passed through. [`Board`] owns one
//! position together with that history and exposes the subset of the rules
//! library the rest of the application needs.

use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, File, Move, Piece, Position, Square};
use thiserror::Error;

/// Error for move text handed to [`Board::play_uci`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The text could not be parsed as a UCI move.
    #[error("unparseable move text: {0}")]
    Malformed(String),
    /// The move parsed but is not legal in the current position.
    #[error("illegal move: {0}")]
    Illegal(String),
}

/// Error for FEN text handed to [`Board::from_fen`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid FEN: {0}")]
pub struct FenError(String);

/// One chess position plus the history needed for repetition detection.
#[derive(Debug, Clone)]
pub struct Board {
    position: Chess,
    /// Repetition key of every position reached so far, current included.
    seen: Vec<String>,
}

impl Board {
    /// Creates a board at the standard starting position.
    pub fn new() -> Self {
        let position = Chess::default();
        let key = repetition_key(&position);
        Board {
            position,
            seen: vec![key],
        }
    }

    /// Creates a board from a FEN string.
    ///
    /// The repetition history starts fresh at the given position; positions
    /// reached before the FEN was taken are unknown and not counted.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed: Fen = fen.parse().map_err(|_| FenError(fen.to_string()))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| FenError(e.to_string()))?;
        let key = repetition_key(&position);
        Ok(Board {
            position,
            seen: vec![key],
        })
    }

    /// Encodes the current position as FEN.
    pub fn to_fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }

    /// Whose move it is.
    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    /// True if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.position.is_check()
    }

    /// The piece on a square, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    /// The king square of the given color, if on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.position.board().king_of(color)
    }

    /// Destination squares of every legal move starting on `from`.
    ///
    /// Castling is reported as the king's destination square (g1/c1, g8/c8),
    /// which is also what the UCI encoding of the move expects.
    pub fn destinations_from(&self, from: Square) -> Vec<Square> {
        self.position
            .legal_moves()
            .iter()
            .filter(|m| m.from() == Some(from))
            .map(destination)
            .collect()
    }

    /// Parses and applies a move given in UCI notation.
    ///
    /// On success the position advances and the repetition history grows by
    /// one entry. On failure nothing changes.
    pub fn play_uci(&mut self, uci: &str) -> Result<(), MoveError> {
        let parsed: UciMove = uci
            .parse()
            .map_err(|_| MoveError::Malformed(uci.to_string()))?;
        let m = parsed
            .to_move(&self.position)
            .map_err(|_| MoveError::Illegal(uci.to_string()))?;
        self.position = self
            .position
            .clone()
            .play(&m)
            .map_err(|_| MoveError::Illegal(uci.to_string()))?;
        self.seen.push(repetition_key(&self.position));
        Ok(())
    }

    /// True if the side to move is checkmated.
    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    /// True if the side to move has no legal move but is not in check.
    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    /// True if neither side can possibly deliver mate.
    pub fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    /// True if 75 full moves have passed without a capture or pawn move.
    pub fn is_seventyfive_moves(&self) -> bool {
        self.position.halfmoves() >= 150
    }

    /// True if the current position has occurred five times.
    pub fn is_fivefold_repetition(&self) -> bool {
        self.occurrences_of_current() >= 5
    }

    /// True if any terminal condition holds.
    pub fn is_terminal(&self) -> bool {
        self.is_checkmate()
            || self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_seventyfive_moves()
            || self.is_fivefold_repetition()
    }

    /// How many times the current position has occurred, itself included.
    pub fn occurrences_of_current(&self) -> usize {
        // The current position's key is always the last entry.
        match self.seen.last() {
            Some(current) => self.seen.iter().filter(|k| *k == current).count(),
            None => 0,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Key identifying a position for repetition purposes: the FEN without its
/// move counters. The en-passant field only appears when a legal en-passant
/// capture exists, matching the FIDE definition of "same position".
fn repetition_key(position: &Chess) -> String {
    let fen = Fen::from_position(position.clone(), EnPassantMode::Legal).to_string();
    fen.split_whitespace()
        .take(4)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The square a move lands on from the mover's point of view.
fn destination(m: &Move) -> Square {
    match m {
        // shakmaty encodes castling king-takes-rook; the board shows the
        // king's destination square instead.
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() {
                File::G
            } else {
                File::C
            };
            Square::from_coords(file, king.rank())
        }
        _ => m.to(),
    }
}
