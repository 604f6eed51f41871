//! # Game Board
//!
//! This module implements the board state machine for the gravity-drop
//! connect-N family of games. Players take turns dropping pieces into
//! columns; a piece falls to the lowest blank cell in its column.
//!
//! ## Rules
//! - Players alternate dropping pieces into columns, Red moves first
//! - Pieces fall to the lowest available spot in the column due to gravity
//! - First player to line up `in_a_row` pieces wins (see [`crate::scan`])
//! - The board fills up with no winner in a draw

use std::fmt;

use crate::error::PlaceError;

/// The color held by a single board cell.
///
/// `Blank` marks an empty cell and never forms a winning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceColor {
    Blank,
    Red,
    Yellow,
}

impl PieceColor {
    /// Returns the color that moves after this one.
    ///
    /// `Blank` has no opponent and is returned unchanged.
    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::Red => PieceColor::Yellow,
            PieceColor::Yellow => PieceColor::Red,
            PieceColor::Blank => PieceColor::Blank,
        }
    }

    pub fn is_blank(self) -> bool {
        self == PieceColor::Blank
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceColor::Blank => "Blank",
            PieceColor::Red => "Red",
            PieceColor::Yellow => "Yellow",
        };
        write!(f, "{}", name)
    }
}

/// The complete state of one connect-N game
///
/// Owns the grid, the turn tracker, and the immutable configuration
/// (`cols`, `rows`, `in_a_row`) fixed at construction. Cells are addressed
/// by `(column, row)` with column 0 at the left and row 0 at the top;
/// pieces fall toward row `rows - 1`.
///
/// The board never tracks a "won" state itself: callers run
/// [`winner_at`](GameBoard::winner_at) after each placement and decide
/// when to stop feeding moves in. Placements after a completed run are
/// accepted like any other.
#[derive(Debug, Clone)]
pub struct GameBoard {
    /// The grid as a flat vector (row-major)
    cells: Vec<PieceColor>,
    /// Board width (number of columns)
    cols: usize,
    /// Board height (number of rows)
    rows: usize,
    /// Number of pieces needed in a row to win
    in_a_row: usize,
    /// Color to move next
    turn: PieceColor,
}

impl GameBoard {
    /// Creates a new board with the specified configuration.
    ///
    /// Every cell starts `Blank` and Red moves first. Dimensions are
    /// trusted configuration; an unsatisfiable `in_a_row` is allowed and
    /// simply never produces a winner.
    pub fn new(cols: usize, rows: usize, in_a_row: usize) -> Self {
        Self {
            cells: vec![PieceColor::Blank; cols * rows],
            cols,
            rows,
            in_a_row,
            turn: PieceColor::Red,
        }
    }

    /// Board width (number of columns).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Board height (number of rows).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Run length required to win.
    pub fn in_a_row(&self) -> usize {
        self.in_a_row
    }

    /// The color permitted to place the next piece.
    pub fn turn(&self) -> PieceColor {
        self.turn
    }

    /// Reads the cell at `(column, row)`, or `None` out of bounds.
    pub fn piece_at(&self, column: usize, row: usize) -> Option<PieceColor> {
        if column < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + column])
        } else {
            None
        }
    }

    /// Returns true if `column` has no blank cell left.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= self.cols {
            return true;
        }
        self.cells[column] != PieceColor::Blank
    }

    /// Returns true if no column can accept another piece.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|c| self.is_column_full(c))
    }

    /// Drops the current turn's piece into `column`.
    ///
    /// The event at the boundary is "a click landed in column N"; `row_hint`
    /// accompanies it from the click payload and is validated against the
    /// board height, but gravity alone chooses the landing cell — the hint
    /// never selects it. Arguments are signed so out-of-range indices from
    /// either side surface as errors instead of wrapping.
    ///
    /// On success the piece lands in the lowest blank cell of the column,
    /// the turn flips, and the landing `(column, row)` is returned for
    /// feeding into [`winner_at`](GameBoard::winner_at). On any error the
    /// board and turn are left untouched.
    pub fn place_piece(&mut self, column: i32, row_hint: i32) -> Result<(usize, usize), PlaceError> {
        if column < 0 || column as usize >= self.cols {
            return Err(PlaceError::ColumnOutOfRange {
                column,
                cols: self.cols,
            });
        }
        if row_hint < 0 || row_hint as usize >= self.rows {
            return Err(PlaceError::RowOutOfRange {
                row: row_hint,
                rows: self.rows,
            });
        }

        let column = column as usize;
        for row in (0..self.rows).rev() {
            let idx = row * self.cols + column;
            if self.cells[idx] == PieceColor::Blank {
                self.cells[idx] = self.turn;
                self.turn = self.turn.opponent();
                return Ok((column, row));
            }
        }

        Err(PlaceError::ColumnFull { column })
    }

    /// Erases the board back to its freshly constructed state.
    ///
    /// Every cell becomes `Blank` and the turn returns to Red. Idempotent.
    pub fn reset(&mut self) {
        self.cells.fill(PieceColor::Blank);
        self.turn = PieceColor::Red;
    }
}

impl Default for GameBoard {
    /// A standard Connect Four board (7×6, four in a row).
    fn default() -> Self {
        crate::variant::GameVariant::ConnectFour.board()
    }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let symbol = match self.cells[r * self.cols + c] {
                    PieceColor::Red => "R",
                    PieceColor::Yellow => "Y",
                    PieceColor::Blank => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
