//! Game outcome reporting.

use crate::color_name;
use shakmaty::Color;
use std::fmt;

/// Why a game ended, or that it has not.
///
/// The display text is what the status line shows the players, so checkmate
/// and resignation name the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move is mated; the other side wins.
    Checkmate { winner: Color },
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// Neither side can possibly deliver mate.
    InsufficientMaterial,
    /// 75 full moves without a capture or pawn move.
    SeventyFiveMoves,
    /// The same position occurred five times.
    FivefoldRepetition,
    /// A player resigned; the other side wins.
    Resignation { winner: Color },
    /// No terminal condition holds.
    InProgress,
}

impl Outcome {
    /// True if the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning side, if the outcome has one.
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } | Outcome::Resignation { winner } => Some(winner),
            _ => None,
        }
    }

    /// True if the game ended without a winner.
    pub fn is_draw(self) -> bool {
        matches!(
            self,
            Outcome::Stalemate
                | Outcome::InsufficientMaterial
                | Outcome::SeventyFiveMoves
                | Outcome::FivefoldRepetition
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => {
                write!(f, "Checkmate! {} wins", color_name(*winner))
            }
            Outcome::Stalemate => write!(f, "Stalemate! Draw"),
            Outcome::InsufficientMaterial => write!(f, "Draw! Insufficient material"),
            Outcome::SeventyFiveMoves => write!(f, "Draw! Seventy-five move rule"),
            Outcome::FivefoldRepetition => write!(f, "Draw! Fivefold repetition"),
            Outcome::Resignation { winner } => {
                write!(f, "{} wins by resignation", color_name(*winner))
            }
            Outcome::InProgress => write!(f, "Game in progress"),
        }
    }
}
