//! # Win Scanner
//!
//! Directional run-length scanning from a single coordinate. After each
//! placement the consumer hands the landing coordinate back to
//! [`GameBoard::winner_at`]; the scanner walks the four line axes through
//! that point and reports the first run that reaches the configured
//! threshold.

use crate::board::{GameBoard, PieceColor};

/// One of the four line axes a winning run can lie along.
///
/// Each axis is walked in both senses from the origin cell; the step
/// returned by [`step`](EvaluationDirection::step) is the forward sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvaluationDirection {
    Vertical,
    Horizontal,
    DiagonalUp,
    DiagonalDown,
}

impl EvaluationDirection {
    /// All axes in the order the scanner evaluates them.
    ///
    /// The order is fixed so that a move completing runs on several axes at
    /// once always reports the same one.
    pub const ALL: [EvaluationDirection; 4] = [
        EvaluationDirection::Vertical,
        EvaluationDirection::Horizontal,
        EvaluationDirection::DiagonalUp,
        EvaluationDirection::DiagonalDown,
    ];

    /// Unit step `(column delta, row delta)` for the forward sense.
    ///
    /// Row indices grow downward, so `DiagonalUp` steps right and up the
    /// board with a negative row delta.
    pub fn step(self) -> (i32, i32) {
        match self {
            EvaluationDirection::Vertical => (0, 1),
            EvaluationDirection::Horizontal => (1, 0),
            EvaluationDirection::DiagonalUp => (1, -1),
            EvaluationDirection::DiagonalDown => (1, 1),
        }
    }
}

/// The outcome of a successful win scan.
///
/// A query result, never stored by the board: it lists the full contiguous
/// run through the scanned cell (which may be longer than the configured
/// threshold), ordered from the backward extreme of the axis to the forward
/// extreme, plus the axis it lies on and the color that formed it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WinningPlay {
    /// The `(column, row)` coordinates of the run, in walking order
    pub winning_moves: Vec<(usize, usize)>,
    /// The axis the run was found along
    pub winning_direction: EvaluationDirection,
    /// The color of every piece in the run
    pub winning_color: PieceColor,
}

impl GameBoard {
    /// Checks whether the piece at `(column, row)` completes a winning run.
    ///
    /// Safe to call on any coordinate: a blank or out-of-bounds cell is
    /// simply not a winner. Axes are evaluated in the fixed order of
    /// [`EvaluationDirection::ALL`] and the first one whose run reaches
    /// `in_a_row` is returned, so simultaneous wins resolve
    /// deterministically.
    pub fn winner_at(&self, column: usize, row: usize) -> Option<WinningPlay> {
        let color = self.piece_at(column, row)?;
        if color.is_blank() {
            return None;
        }
        EvaluationDirection::ALL
            .into_iter()
            .find_map(|direction| self.scan_axis(column, row, color, direction))
    }

    /// Walks one axis through `(column, row)` and returns the run if it
    /// reaches the threshold.
    fn scan_axis(
        &self,
        column: usize,
        row: usize,
        color: PieceColor,
        direction: EvaluationDirection,
    ) -> Option<WinningPlay> {
        let (dc, dr) = direction.step();

        // Back up to the far end of the run, then collect forward across it.
        let (mut c, mut r) = (column as i32, row as i32);
        while self.matches(c - dc, r - dr, color) {
            c -= dc;
            r -= dr;
        }

        let mut run = Vec::new();
        while self.matches(c, r, color) {
            run.push((c as usize, r as usize));
            c += dc;
            r += dr;
        }

        if run.len() >= self.in_a_row() {
            Some(WinningPlay {
                winning_moves: run,
                winning_direction: direction,
                winning_color: color,
            })
        } else {
            None
        }
    }

    /// True if `(column, row)` is in bounds and holds `color`.
    fn matches(&self, column: i32, row: i32, color: PieceColor) -> bool {
        column >= 0
            && row >= 0
            && self.piece_at(column as usize, row as usize) == Some(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> GameBoard {
        GameBoard::new(7, 6, 4)
    }

    /// Drops pieces into the given columns in order, alternating colors.
    fn play(board: &mut GameBoard, columns: &[i32]) -> (usize, usize) {
        let mut last = (0, 0);
        for &c in columns {
            last = board.place_piece(c, 0).unwrap();
        }
        last
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        let board = board();
        for c in 0..7 {
            for r in 0..6 {
                assert_eq!(board.winner_at(c, r), None);
            }
        }
    }

    #[test]
    fn test_no_winner_out_of_bounds() {
        let board = board();
        assert_eq!(board.winner_at(7, 0), None);
        assert_eq!(board.winner_at(0, 6), None);
    }

    #[test]
    fn test_no_winner_below_threshold() {
        let mut board = board();
        // Red stacks three in column 0, one short of the threshold.
        let (c, r) = play(&mut board, &[0, 1, 0, 1, 0]);
        assert_eq!((c, r), (0, 3));
        assert_eq!(board.winner_at(c, r), None);
    }

    #[test]
    fn test_vertical_win_reports_run() {
        let mut board = board();
        let (c, r) = play(&mut board, &[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!((c, r), (0, 2));

        let play = board.winner_at(c, r).expect("vertical win");
        assert_eq!(play.winning_color, PieceColor::Red);
        assert_eq!(play.winning_direction, EvaluationDirection::Vertical);
        assert_eq!(play.winning_moves, vec![(0, 2), (0, 3), (0, 4), (0, 5)]);
    }

    #[test]
    fn test_horizontal_win_reports_run() {
        let mut board = board();
        let (c, r) = play(&mut board, &[0, 0, 1, 1, 2, 2, 3]);
        assert_eq!((c, r), (3, 5));

        let play = board.winner_at(c, r).expect("horizontal win");
        assert_eq!(play.winning_color, PieceColor::Red);
        assert_eq!(play.winning_direction, EvaluationDirection::Horizontal);
        assert_eq!(play.winning_moves, vec![(0, 5), (1, 5), (2, 5), (3, 5)]);
    }

    #[test]
    fn test_win_detected_from_middle_of_run() {
        let mut board = board();
        play(&mut board, &[0, 0, 1, 1, 2, 2, 3]);

        // Scanning any cell of the run finds the same play.
        let from_middle = board.winner_at(1, 5).expect("win from middle");
        assert_eq!(
            from_middle.winning_moves,
            vec![(0, 5), (1, 5), (2, 5), (3, 5)]
        );
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = board();
        // Red climbs a / staircase from (1,5) to (4,2).
        let (c, r) = play(&mut board, &[1, 2, 2, 3, 3, 4, 5, 4, 3, 4, 4]);
        assert_eq!((c, r), (4, 2));

        let play = board.winner_at(c, r).expect("diagonal-up win");
        assert_eq!(play.winning_color, PieceColor::Red);
        assert_eq!(play.winning_direction, EvaluationDirection::DiagonalUp);
        assert_eq!(play.winning_moves, vec![(1, 5), (2, 4), (3, 3), (4, 2)]);
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = board();
        // Yellow descends a \ staircase from (2,2) to (5,5).
        let (c, r) = play(&mut board, &[4, 5, 3, 4, 2, 1, 3, 3, 2, 1, 2, 2]);
        assert_eq!((c, r), (2, 2));

        let play = board.winner_at(c, r).expect("diagonal-down win");
        assert_eq!(play.winning_color, PieceColor::Yellow);
        assert_eq!(play.winning_direction, EvaluationDirection::DiagonalDown);
        assert_eq!(play.winning_moves, vec![(2, 2), (3, 3), (4, 4), (5, 5)]);
    }

    #[test]
    fn test_run_longer_than_threshold_reported_in_full() {
        let mut board = GameBoard::new(7, 6, 4);
        // Red lands columns 0,1,2,4 then completes five in a row with 3.
        let (c, r) = play(&mut board, &[0, 0, 1, 1, 2, 2, 4, 4, 3]);
        assert_eq!((c, r), (3, 5));

        let play = board.winner_at(c, r).expect("five-long horizontal run");
        assert_eq!(
            play.winning_moves,
            vec![(0, 5), (1, 5), (2, 5), (3, 5), (4, 5)]
        );
    }

    #[test]
    fn test_simultaneous_axes_prefer_vertical() {
        // Threshold 3 on a wide board lets one move finish a vertical and a
        // horizontal run at once.
        let mut board = GameBoard::new(7, 6, 3);
        // Red takes the bottom row 0..=2 and stacks column 2; Yellow
        // answers above and in column 3.
        let (c, r) = play(&mut board, &[0, 0, 1, 1, 2, 3, 2, 3, 2]);
        assert_eq!((c, r), (2, 3));

        // Move (2,3) completes the vertical stack in column 2; the bottom
        // cell (2,5) also completes horizontal 0..=2. Scanning the bottom
        // cell must still pick the fixed axis order.
        let bottom = board.winner_at(2, 5).expect("win at bottom cell");
        assert_eq!(bottom.winning_direction, EvaluationDirection::Vertical);

        let placed = board.winner_at(c, r).expect("win at placed cell");
        assert_eq!(placed.winning_direction, EvaluationDirection::Vertical);
        assert_eq!(placed.winning_color, PieceColor::Red);
    }

    #[test]
    fn test_unsatisfiable_threshold_never_wins() {
        let mut board = GameBoard::new(2, 2, 5);
        for c in 0..2 {
            for _ in 0..2 {
                board.place_piece(c, 0).unwrap();
            }
        }
        for c in 0..2 {
            for r in 0..2 {
                assert_eq!(board.winner_at(c, r), None);
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_winning_play_serializes() {
        let play = WinningPlay {
            winning_moves: vec![(0, 5), (1, 5)],
            winning_direction: EvaluationDirection::Horizontal,
            winning_color: PieceColor::Red,
        };
        let json = serde_json::to_string(&play).unwrap();
        assert!(json.contains("\"Horizontal\""));
        assert!(json.contains("\"Red\""));
    }
}
