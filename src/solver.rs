//! This module contains the logic for solving Sudoku grids.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally usable
//! implementation.

use crate::grid::Grid;

/// A trait for structs which have the ability to solve Sudoku grids in place.
/// A solver mutates the grid it is given and signals by its return value
/// whether a full, valid assignment was reached.
pub trait Solver {

    /// Solves, or attempts to solve, the provided grid. On success, `true` is
    /// returned and `grid` holds a full assignment in which every row,
    /// column, and box contains each digit from 1 to 9 exactly once. On
    /// failure, `false` is returned; the grid is not guaranteed to be in any
    /// particular state, so callers that need the original must clone it
    /// first.
    ///
    /// The solver assumes that the givens in `grid` are valid (see
    /// [Grid::is_valid]). Callers must reject invalid grids beforehand.
    fn solve(&self, grid: &mut Grid) -> bool;
}

/// A perfect [Solver](trait.Solver.html) which solves grids by recursively
/// testing all valid digits for each empty cell, clearing the cell again when
/// a candidate leads to a dead end. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be slow if the grid
/// has many missing digits.
/// * It finds a solution for every solvable grid and terminates on every
/// unsolvable one, since each recursive call strictly reduces the number of
/// empty cells.
///
/// The first solution encountered is kept; solutions are not enumerated
/// beyond that.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_rec(grid: &mut Grid) -> bool {
        let (column, row) = match grid.next_empty() {
            Some(cell) => cell,
            None => return true
        };

        for digit in 1..=9 {
            if grid.is_digit_valid(column, row, digit).unwrap() {
                grid.set_cell(column, row, digit).unwrap();

                if BacktrackingSolver::solve_rec(grid) {
                    return true;
                }

                grid.clear_cell(column, row).unwrap();
            }
        }

        false
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, grid: &mut Grid) -> bool {
        BacktrackingSolver::solve_rec(grid)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::grid::SIZE;

    fn assert_solved(grid: &Grid) {
        assert!(grid.is_full());
        assert!(grid.is_valid());
    }

    #[test]
    fn solves_classic_puzzle() {
        let mut grid = Grid::parse(
            "5,3,,,7,,,,,\
             6,,,1,9,5,,,,\
             ,9,8,,,,,6,,\
             8,,,,6,,,,3,\
             4,,,8,,3,,,1,\
             7,,,,2,,,,6,\
             ,6,,,,,2,8,,\
             ,,,4,1,9,,,5,\
             ,,,,8,,,7,9").unwrap();
        assert!(grid.is_valid());
        assert!(BacktrackingSolver.solve(&mut grid));
        assert_solved(&grid);

        // the givens survive in the solution
        assert_eq!(Some(5), grid.get_cell(0, 0).unwrap());
        assert_eq!(Some(9), grid.get_cell(8, 8).unwrap());
    }

    #[test]
    fn solution_rows_columns_boxes_are_permutations() {
        let mut grid = Grid::parse("1,2,3,4,5,6,7,8,9").unwrap();
        assert!(BacktrackingSolver.solve(&mut grid));

        for i in 0..SIZE {
            let mut row_digits = [false; SIZE];
            let mut column_digits = [false; SIZE];

            for j in 0..SIZE {
                let row_digit = grid.get_cell(j, i).unwrap().unwrap();
                let column_digit = grid.get_cell(i, j).unwrap().unwrap();
                row_digits[(row_digit - 1) as usize] = true;
                column_digits[(column_digit - 1) as usize] = true;
            }

            assert!(row_digits.iter().all(|&d| d));
            assert!(column_digits.iter().all(|&d| d));
        }

        for box_row in (0..SIZE).step_by(3) {
            for box_column in (0..SIZE).step_by(3) {
                let mut box_digits = [false; SIZE];

                for row in box_row..(box_row + 3) {
                    for column in box_column..(box_column + 3) {
                        let digit = grid.get_cell(column, row).unwrap()
                            .unwrap();
                        box_digits[(digit - 1) as usize] = true;
                    }
                }

                assert!(box_digits.iter().all(|&d| d));
            }
        }
    }

    #[test]
    fn empty_grid_is_solvable() {
        let mut grid = Grid::new();
        assert!(BacktrackingSolver.solve(&mut grid));
        assert_solved(&grid);
    }

    #[test]
    fn full_grid_succeeds_trivially() {
        let mut grid = Grid::new();
        assert!(BacktrackingSolver.solve(&mut grid));

        let mut solved = grid.clone();
        assert!(BacktrackingSolver.solve(&mut solved));
        assert_eq!(grid, solved);
    }

    #[test]
    fn unsolvable_grid_fails() {
        // the top-left cell is empty, but its row holds 2 to 6, its column 7
        // and 8, and its box 1 and 9, so no candidate remains
        let mut grid = Grid::parse(
            ",,,2,3,4,5,6,,\
             ,9,,,,,,,,\
             ,,1,,,,,,,\
             7,,,,,,,,,\
             8,,,,,,,,").unwrap();
        assert!(grid.is_valid());
        assert!(!BacktrackingSolver.solve(&mut grid));
    }
}
