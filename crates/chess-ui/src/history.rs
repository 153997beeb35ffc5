//! The numbered move-history log.
//!
//! Moves are shown as white/black pairs: `"1. e2e4"` while White's move
//! stands alone, `"1. e2e4 - e7e5"` once Black answers, then an empty line
//! separating it from the next pair. Promotion suffixes are dropped for
//! display, so every shown move is four characters.

/// Display log of the moves played so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    lines: Vec<String>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a history from previously saved display lines.
    pub fn from_lines(lines: Vec<String>) -> Self {
        MoveHistory { lines }
    }

    /// Records one played move given as UCI text.
    pub fn push(&mut self, move_text: &str) {
        // Four characters: from-square and to-square, no promotion suffix.
        let shown: String = move_text.chars().take(4).collect();
        if self.lines.len() % 2 == 0 {
            let pair = self.lines.len() / 2 + 1;
            self.lines.push(format!("{pair}. {shown}"));
        } else if let Some(open) = self.lines.last_mut() {
            open.push_str(" - ");
            open.push_str(&shown);
            self.lines.push(String::new());
        }
    }

    /// The display lines, in order. Restartable: each call iterates from the
    /// first line again.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// The display lines as a slice, for saving.
    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of half-moves recorded.
    pub fn ply_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| if line.contains(" - ") { 2 } else { 1 })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Clears the log.
    pub fn reset(&mut self) {
        self.lines.clear();
    }
}
