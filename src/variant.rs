//! # Game Variants
//!
//! Preset board configurations for the classic members of the family.
//! Each variant fixes the grid dimensions and the winning run length;
//! custom boards go through [`GameBoard::new`] directly.

use std::fmt;
use std::str::FromStr;

use crate::board::GameBoard;

/// The shipped board presets.
///
/// All three use a winning run of four; the variants differ in grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameVariant {
    /// Classic 7×6 board
    ConnectFour,
    /// 7×7 board
    ConnectFive,
    /// 8×8 board
    ConnectSix,
}

impl GameVariant {
    /// Board width for this variant.
    pub fn cols(self) -> usize {
        match self {
            GameVariant::ConnectFour | GameVariant::ConnectFive => 7,
            GameVariant::ConnectSix => 8,
        }
    }

    /// Board height for this variant.
    pub fn rows(self) -> usize {
        match self {
            GameVariant::ConnectFour => 6,
            GameVariant::ConnectFive => 7,
            GameVariant::ConnectSix => 8,
        }
    }

    /// Winning run length for this variant.
    pub fn in_a_row(self) -> usize {
        4
    }

    /// Creates a fresh board with this variant's configuration.
    pub fn board(self) -> GameBoard {
        GameBoard::new(self.cols(), self.rows(), self.in_a_row())
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameVariant::ConnectFour => "Connect Four",
            GameVariant::ConnectFive => "Connect Five",
            GameVariant::ConnectSix => "Connect Six",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for GameVariant {
    type Err = String;

    /// Parses a variant name as given on the command line.
    ///
    /// Accepts the number ("4") or the word ("four", case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "4" | "four" => Ok(GameVariant::ConnectFour),
            "5" | "five" => Ok(GameVariant::ConnectFive),
            "6" | "six" => Ok(GameVariant::ConnectSix),
            other => Err(format!(
                "unknown variant '{}' (expected four, five, or six)",
                other
            )),
        }
    }
}
