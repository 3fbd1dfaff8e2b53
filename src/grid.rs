//! This module contains the definition of the Sudoku [Grid], the mutable
//! state space explored by the [solver](crate::solver).

use crate::error::{
    GridError,
    GridParseError,
    GridParseResult,
    GridResult
};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// The number of cells in one row, column, or box of a [Grid].
pub const SIZE: usize = 9;

/// The width and height of one box of a [Grid].
pub const BOX_SIZE: usize = 3;

/// The total number of cells in a [Grid].
pub const CELL_COUNT: usize = SIZE * SIZE;

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

/// A classic 9x9 Sudoku grid, divided into 9 non-overlapping 3x3 boxes. Each
/// cell may or may not be occupied by a digit from 1 to 9.
///
/// Grids are constructed from a comma-separated code by [Grid::parse] and
/// solved in place by a [Solver](crate::solver::Solver). At any point during
/// solving, every filled cell satisfies row, column, and box uniqueness
/// against the other filled cells, as long as digits are only entered after
/// checking [Grid::is_digit_valid].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Grid {
    cells: Vec<Option<u8>>
}

fn to_char(cell: Option<u8>) -> char {
    if let Some(digit) = cell {
        (b'0' + digit) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BOX_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &Grid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.cells[index(x, y)]), ' ', '║', true)
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BOX_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<u8>) -> String {
    if let Some(digit) = cell {
        digit.to_string()
    }
    else {
        String::from("")
    }
}

impl Grid {

    /// Creates a new, empty grid.
    pub fn new() -> Grid {
        Grid {
            cells: vec![None; CELL_COUNT]
        }
    }

    /// Parses a code encoding a grid. The code is a comma-separated list of
    /// up to 81 entries, which are either empty or a digit from 1 to 9. The
    /// entries are assigned left-to-right, top-to-bottom, where each row is
    /// completed before the next one is started. Whitespace in the entries is
    /// ignored to allow for more intuitive formatting. If less than 81
    /// entries are provided, the remaining cells are left empty.
    ///
    /// As an example, the code `5,3,,,7` yields a grid whose first row starts
    /// with the digits 5 and 3, a 7 in the fifth column, and everything else
    /// empty.
    ///
    /// # Errors
    ///
    /// Any specialization of `GridParseError` (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<Grid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() > CELL_COUNT {
            return Err(GridParseError::TooManyCells);
        }

        let mut grid = Grid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let digit = entry.parse::<u8>()?;

            if digit == 0 || digit > SIZE as u8 {
                return Err(GridParseError::InvalidDigit);
            }

            grid.cells[i] = Some(digit);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change.
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `GridError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> GridResult<Option<u8>> {
        if column >= SIZE || row >= SIZE {
            Err(GridError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position contains the
    /// given digit. This will return `false` if there is a different digit in
    /// that cell or it is empty.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are greater than or equal to 9. In that
    /// case, `GridError::OutOfBounds` is returned.
    pub fn has_digit(&self, column: usize, row: usize, digit: u8)
            -> GridResult<bool> {
        Ok(self.get_cell(column, row)? == Some(digit))
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `GridError::OutOfBounds` If either `column` or `row` are not in the
    /// specified range.
    /// * `GridError::InvalidDigit` If `digit` is not in the specified range.
    pub fn set_cell(&mut self, column: usize, row: usize, digit: u8)
            -> GridResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(GridError::OutOfBounds);
        }

        if digit == 0 || digit > SIZE as u8 {
            return Err(GridError::InvalidDigit);
        }

        self.cells[index(column, row)] = Some(digit);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are greater than or equal to 9. In that
    /// case, `GridError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize) -> GridResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(GridError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Finds the first empty cell in row-major order, that is, rows are
    /// scanned top to bottom and each row is scanned left to right. Returns
    /// its coordinates in the form `(column, row)`, or `None` if every cell
    /// is filled.
    pub fn next_empty(&self) -> Option<(usize, usize)> {
        self.cells.iter()
            .position(|c| c.is_none())
            .map(|i| (i % SIZE, i / SIZE))
    }

    /// Indicates whether the given digit would keep row, column, and box
    /// uniqueness intact if it were entered into the cell at the specified
    /// position. The checked cell itself is ignored, so a digit is always
    /// valid in a cell that already contains it.
    ///
    /// This checks the 9 cells of the row, the column, and the box containing
    /// the specified cell, so its cost is constant.
    ///
    /// # Errors
    ///
    /// * `GridError::OutOfBounds` If either `column` or `row` are greater
    /// than or equal to 9.
    /// * `GridError::InvalidDigit` If `digit` is not in the range `[1, 9]`.
    pub fn is_digit_valid(&self, column: usize, row: usize, digit: u8)
            -> GridResult<bool> {
        if column >= SIZE || row >= SIZE {
            return Err(GridError::OutOfBounds);
        }

        if digit == 0 || digit > SIZE as u8 {
            return Err(GridError::InvalidDigit);
        }

        for i in 0..SIZE {
            if i != column && self.cells[index(i, row)] == Some(digit) {
                return Ok(false);
            }

            if i != row && self.cells[index(column, i)] == Some(digit) {
                return Ok(false);
            }
        }

        let box_column = column / BOX_SIZE * BOX_SIZE;
        let box_row = row / BOX_SIZE * BOX_SIZE;

        for other_row in box_row..(box_row + BOX_SIZE) {
            for other_column in box_column..(box_column + BOX_SIZE) {
                if (other_column, other_row) != (column, row) &&
                        self.cells[index(other_column, other_row)] ==
                            Some(digit) {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// Indicates whether every filled cell satisfies row, column, and box
    /// uniqueness against the other filled cells. Callers should reject
    /// invalid grids before handing them to a
    /// [Solver](crate::solver::Solver), which assumes valid givens.
    pub fn is_valid(&self) -> bool {
        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Some(digit) = self.cells[index(column, row)] {
                    if !self.is_digit_valid(column, row, digit).unwrap() {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c.is_none())
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<u8>> {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new()
    }
}
