//! Tile colors for the Simon board.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the four tiles on the board.
///
/// The computer's sequence and the player's guesses are both
/// ordered lists of colors, compared positionally.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Red tile (top-left).
    Red,
    /// Green tile (top-right).
    Green,
    /// Blue tile (bottom-left).
    Blue,
    /// Yellow tile (bottom-right).
    Yellow,
}

impl Color {
    /// All four colors, in board order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Lowercase label, as used by input events.
    pub fn label(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
        }
    }

    /// Keyboard shortcut for this tile.
    pub fn shortcut(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Yellow => 'y',
        }
    }

    /// Parses a label, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything that is not one of the four colors.
    #[instrument]
    pub fn from_label(s: &str) -> Option<Color> {
        let s = s.trim().to_lowercase();
        <Color as strum::IntoEnumIterator>::iter().find(|color| color.label() == s)
    }

    /// Looks a color up by its keyboard shortcut.
    pub fn from_shortcut(c: char) -> Option<Color> {
        let c = c.to_ascii_lowercase();
        Self::ALL.into_iter().find(|color| color.shortcut() == c)
    }

    /// Draws a color uniformly at random.
    ///
    /// Draws are independent, so repeats are legal.
    #[instrument(skip(rng))]
    pub fn random<R: Rng>(rng: &mut R) -> Color {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
