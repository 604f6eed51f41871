//! # Connect-N Board Game Engine
//!
//! A turn-based, gravity-drop connect-N engine: two players alternate
//! dropping colored pieces into the columns of a vertical grid, and a
//! player wins by lining up a configured number of same-colored pieces
//! horizontally, vertically, or diagonally.
//!
//! The engine owns all game state and logic; rendering is a separate,
//! thin consumer that feeds column selections in and reads cells, turn,
//! and winner verdicts back out (see the `play` binary for one such
//! consumer).
//!
//! ## Core pieces
//! - [`GameBoard`]: grid, turn tracker, gravity placement, reset
//! - [`GameBoard::winner_at`]: directional run scanning from a coordinate
//! - [`GameVariant`]: Connect Four / Five / Six presets
//! - [`PlaceError`]: placement failure taxonomy
//!
//! ## Example
//! ```
//! use connect_n::{GameVariant, PieceColor};
//!
//! let mut board = GameVariant::ConnectFour.board();
//! let (col, row) = board.place_piece(3, 0).unwrap();
//! assert_eq!(board.piece_at(col, row), Some(PieceColor::Red));
//! assert!(board.winner_at(col, row).is_none());
//! ```

pub mod board;
pub mod error;
pub mod scan;
pub mod variant;

pub use board::{GameBoard, PieceColor};
pub use error::PlaceError;
pub use scan::{EvaluationDirection, WinningPlay};
pub use variant::GameVariant;
