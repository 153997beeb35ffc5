//! Game-session state for two-player chess.
//!
//! This crate provides the rules-facing half of the application:
//! - [`Board`], a thin adapter over the `shakmaty` rules library that adds
//!   the position history needed for repetition draws
//! - [`Session`], one game: a board plus a resignation flag
//! - [`Outcome`], why a game ended (or that it has not)
//!
//! All move legality, check and mate detection, and FEN/UCI encoding are
//! delegated to `shakmaty`; nothing in this crate generates moves itself.

mod board;
mod outcome;
mod session;

pub use board::{Board, FenError, MoveError};
pub use outcome::Outcome;
pub use session::Session;

// Board vocabulary comes straight from the rules library; re-export the
// types that appear in this crate's public API so downstream crates do not
// need a direct shakmaty dependency.
pub use shakmaty::{Color, File, Piece, Rank, Role, Square};

/// English name of a color, capitalized for display.
pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

/// Builds a square from zero-based file and rank coordinates.
///
/// Returns `None` if either coordinate is outside 0..8, so shells can feed
/// raw grid coordinates through without their own bounds checks.
pub fn square_at(file: u8, rank: u8) -> Option<Square> {
    if file < 8 && rank < 8 {
        Some(Square::from_coords(
            File::new(u32::from(file)),
            Rank::new(u32::from(rank)),
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_at_maps_coordinates() {
        assert_eq!(square_at(4, 3), Some(Square::E4));
        assert_eq!(square_at(0, 0), Some(Square::A1));
        assert_eq!(square_at(7, 7), Some(Square::H8));
    }

    #[test]
    fn square_at_rejects_out_of_range() {
        assert_eq!(square_at(8, 0), None);
        assert_eq!(square_at(0, 8), None);
        assert_eq!(square_at(255, 255), None);
    }

    #[test]
    fn color_names() {
        assert_eq!(color_name(Color::White), "White");
        assert_eq!(color_name(Color::Black), "Black");
    }

    mod props {
        use crate::square_at;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn square_at_round_trips_coords(file in 0u8..8, rank in 0u8..8) {
                let square = square_at(file, rank).unwrap();
                prop_assert_eq!(u32::from(square.file()), u32::from(file));
                prop_assert_eq!(u32::from(square.rank()), u32::from(rank));
            }
        }
    }
}
