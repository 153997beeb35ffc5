//! The saved-game record and its serializable color type.

use serde::{Deserialize, Serialize};

/// Current save schema version, stored in every record so a future layout
/// change can be detected instead of misread.
pub const SAVE_VERSION: u32 = 1;

/// The color a human picked to sit behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    White,
    Black,
}

impl From<shakmaty::Color> for PlayerColor {
    fn from(color: shakmaty::Color) -> Self {
        match color {
            shakmaty::Color::White => PlayerColor::White,
            shakmaty::Color::Black => PlayerColor::Black,
        }
    }
}

impl From<PlayerColor> for shakmaty::Color {
    fn from(color: PlayerColor) -> Self {
        match color {
            PlayerColor::White => shakmaty::Color::White,
            PlayerColor::Black => shakmaty::Color::Black,
        }
    }
}

/// Everything needed to resume a game: the position encoding, which side the
/// player sits behind, the displayed move history, and the resignation flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub version: u32,
    pub fen: String,
    pub player_color: PlayerColor,
    pub history: Vec<String>,
    pub resigned: bool,
}

impl SaveRecord {
    /// Builds a record at the current schema version.
    pub fn new(fen: String, player_color: PlayerColor, history: Vec<String>, resigned: bool) -> Self {
        SaveRecord {
            version: SAVE_VERSION,
            fen,
            player_color,
            history,
            resigned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let record = SaveRecord::new(
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1".to_string(),
            PlayerColor::Black,
            vec!["1. e2e4".to_string()],
            false,
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: SaveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.version, SAVE_VERSION);
    }

    #[test]
    fn color_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PlayerColor::White).unwrap(),
            "\"white\""
        );
        assert_eq!(
            serde_json::to_string(&PlayerColor::Black).unwrap(),
            "\"black\""
        );
    }

    #[test]
    fn color_conversions() {
        assert_eq!(PlayerColor::from(shakmaty::Color::White), PlayerColor::White);
        assert_eq!(shakmaty::Color::from(PlayerColor::Black), shakmaty::Color::Black);
    }
}
