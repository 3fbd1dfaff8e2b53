//! This module contains the tic-tac-toe [Board] data model, the state space
//! explored by the [minimax](crate::minimax) player.

use crate::error::{BoardError, BoardResult};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// The number of cells on a [Board].
pub const CELL_COUNT: usize = 9;

/// The indices of all completed lines on a [Board]: three rows, three
/// columns, and the two diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6]
];

/// One of the two markers that can occupy a [Board] cell.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Marker {

    /// The marker of the player who conventionally moves first.
    X,

    /// The marker of the player who conventionally moves second.
    O
}

impl Marker {

    /// Gets the opposing marker.
    pub fn opponent(self) -> Marker {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X
        }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Marker::X => write!(f, "x"),
            Marker::O => write!(f, "o")
        }
    }
}

/// The result of a finished game on a [Board].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {

    /// The given marker completed a row, column, or diagonal.
    Win(Marker),

    /// The board is full and no marker completed a line.
    Tie
}

/// A tic-tac-toe board of 9 cells, indexed 0 to 8 in row-major order:
///
/// ```text
/// | 0 | 1 | 2 |
/// | 3 | 4 | 5 |
/// | 6 | 7 | 8 |
/// ```
///
/// The board caches its winner, which is updated by [Board::place] and
/// cleared again by [Board::retract], so a search that places and retracts a
/// marker leaves the board in exactly its prior state. A winner is only ever
/// set after a full row, column, or diagonal of identical markers.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Board {
    cells: [Option<Marker>; CELL_COUNT],
    winner: Option<Marker>
}

impl Board {

    /// Creates a new, empty board.
    pub fn new() -> Board {
        Board {
            cells: [None; CELL_COUNT],
            winner: None
        }
    }

    /// Gets the content of the specified cell.
    ///
    /// # Errors
    ///
    /// If `cell` is greater than or equal to 9. In that case,
    /// `BoardError::OutOfBounds` is returned.
    pub fn get(&self, cell: usize) -> BoardResult<Option<Marker>> {
        self.cells.get(cell)
            .copied()
            .ok_or(BoardError::OutOfBounds)
    }

    /// Places the given marker on the specified cell and updates the cached
    /// winner using [Board::check_winner_after_move].
    ///
    /// # Errors
    ///
    /// * `BoardError::OutOfBounds` If `cell` is greater than or equal to 9.
    /// * `BoardError::CellOccupied` If the cell already contains a marker. In
    /// that case, the board is unchanged.
    pub fn place(&mut self, cell: usize, marker: Marker) -> BoardResult<()> {
        if self.get(cell)?.is_some() {
            return Err(BoardError::CellOccupied);
        }

        self.cells[cell] = Some(marker);

        if self.check_winner_after_move(cell, marker) {
            self.winner = Some(marker);
        }

        Ok(())
    }

    /// Clears the specified cell and the cached winner. This is the inverse
    /// of [Board::place]: placing a marker and retracting it leaves the board
    /// in its prior state, which is what allows a game-tree search to explore
    /// hypothetical continuations on a single board.
    ///
    /// # Errors
    ///
    /// If `cell` is greater than or equal to 9. In that case,
    /// `BoardError::OutOfBounds` is returned.
    pub fn retract(&mut self, cell: usize) -> BoardResult<()> {
        if cell >= CELL_COUNT {
            return Err(BoardError::OutOfBounds);
        }

        self.cells[cell] = None;
        self.winner = None;
        Ok(())
    }

    /// Indicates whether placing `marker` on `cell` completed a line. Only
    /// the row, column, and (if applicable) diagonals through `cell` are
    /// checked, so this is the cheap check to use after a single move. For a
    /// board of unknown history, use [Board::recompute_winner] instead.
    ///
    /// The cell is assumed to already contain `marker`; out-of-range cells
    /// yield `false`.
    pub fn check_winner_after_move(&self, cell: usize, marker: Marker)
            -> bool {
        if cell >= CELL_COUNT {
            return false;
        }

        let row = cell / 3;
        let column = cell % 3;

        if (0..3).all(|i| self.cells[row * 3 + i] == Some(marker)) {
            return true;
        }

        if (0..3).all(|i| self.cells[column + i * 3] == Some(marker)) {
            return true;
        }

        if [0, 4, 8].contains(&cell) &&
                [0, 4, 8].iter().all(|&i| self.cells[i] == Some(marker)) {
            return true;
        }

        if [2, 4, 6].contains(&cell) &&
                [2, 4, 6].iter().all(|&i| self.cells[i] == Some(marker)) {
            return true;
        }

        false
    }

    /// Recomputes the cached winner by scanning all eight lines of the
    /// board. This is the full-board counterpart of
    /// [Board::check_winner_after_move], meant for boards whose move history
    /// is unknown, e.g. after deserialization.
    pub fn recompute_winner(&mut self) {
        self.winner = None;

        for line in &LINES {
            if let Some(marker) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(marker) &&
                        self.cells[line[2]] == Some(marker) {
                    self.winner = Some(marker);
                    return;
                }
            }
        }
    }

    /// Gets the marker that completed a line, if any.
    pub fn winner(&self) -> Option<Marker> {
        self.winner
    }

    /// Gets the outcome of the game, if it is finished. A `Tie` is derived
    /// from a full board without a winner; `None` means the game is still in
    /// progress.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(winner) = self.winner {
            Some(Outcome::Win(winner))
        }
        else if self.is_full() {
            Some(Outcome::Tie)
        }
        else {
            None
        }
    }

    /// Gets the indices of all empty cells in ascending order. These are the
    /// legal moves on this board.
    pub fn available_cells(&self) -> Vec<usize> {
        self.cells.iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Counts the empty cells on this board.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Indicates whether this board is full, i.e. no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Indicates whether this board is empty, i.e. no cell contains a
    /// marker.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            write!(f, "|")?;

            for column in 0..3 {
                match self.cells[row * 3 + column] {
                    Some(marker) => write!(f, " {} |", marker)?,
                    None => write!(f, "   |")?
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
