// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements three small, self-contained engines that explore a
//! finite discrete state space:
//!
//! * A [backtracking solver](solver) that fills a 9x9 Sudoku
//! [Grid](grid::Grid) by exhaustively assigning digits under row, column,
//! and box uniqueness, undoing assignments on dead ends.
//! * A [minimax player](minimax) for tic-tac-toe that recursively explores
//! all continuations of a [Board](board::Board), scores terminal states, and
//! backs up the best score for the side to move.
//! * A [weighted graph walk](composer) that builds a token-adjacency
//! [Graph](graph::Graph) from a corpus and composes new token sequences by
//! weighted random traversal.
//!
//! The engines are independent, but they share one pattern: explore a
//! discrete state space, either by mutate-then-undo recursion or by weighted
//! sampling, with well-defined termination and scoring rules.
//!
//! # Solving Sudoku
//!
//! A grid is parsed from a comma-separated list of up to 81 entries in
//! row-major order, where empty entries denote empty cells. The
//! [BacktrackingSolver](solver::BacktrackingSolver) mutates the grid in
//! place and reports by its return value whether a solution was reached.
//!
//! ```
//! use statespace::grid::Grid;
//! use statespace::solver::{BacktrackingSolver, Solver};
//!
//! let mut grid = Grid::parse(
//!     "5,3,,,7,,,,,\
//!      6,,,1,9,5,,,,\
//!      ,9,8,,,,,6,,\
//!      8,,,,6,,,,3,\
//!      4,,,8,,3,,,1,\
//!      7,,,,2,,,,6,\
//!      ,6,,,,,2,8,,\
//!      ,,,4,1,9,,,5,\
//!      ,,,,8,,,7,9").unwrap();
//!
//! // the solver assumes valid givens, so check them first
//! assert!(grid.is_valid());
//! assert!(BacktrackingSolver.solve(&mut grid));
//! assert!(grid.is_full());
//! println!("{}", grid);
//! ```
//!
//! # Choosing tic-tac-toe moves
//!
//! The [MinimaxPlayer](minimax::MinimaxPlayer) searches the full game tree
//! and returns the cell index of the optimal move. The board it observes is
//! unchanged as a net effect.
//!
//! ```
//! use statespace::board::{Board, Marker};
//! use statespace::minimax::MinimaxPlayer;
//!
//! // x x . / o o . / . . .  with x to move
//! let mut board = Board::new();
//! board.place(0, Marker::X).unwrap();
//! board.place(3, Marker::O).unwrap();
//! board.place(1, Marker::X).unwrap();
//! board.place(4, Marker::O).unwrap();
//!
//! let mut player = MinimaxPlayer::new_default();
//! let cell = player.choose_move(&mut board, Marker::X).unwrap();
//! assert_eq!(2, cell);
//! ```
//!
//! # Composing text
//!
//! A [Graph](graph::Graph) accumulates edge weights from consecutive token
//! pairs of a corpus, and a [Composer](composer::Composer) walks it with
//! transition probabilities proportional to those weights.
//!
//! ```
//! use statespace::composer::Composer;
//! use statespace::graph::Graph;
//!
//! let graph = Graph::from_text(
//!     "the quick brown fox jumps over the lazy dog");
//! let mut composer = Composer::new_default();
//! let composition = composer.compose(&graph, 10).unwrap();
//!
//! assert_eq!(10, composition.len());
//! println!("{}", composition.join(" "));
//! ```
//!
//! All three engines are single-threaded and CPU-bound. Recursion depth is
//! bounded by 81 for the solver and 9 for the minimax search. Concurrent
//! callers must give each thread its own grid or board instance, since the
//! backtracking engines rely on exclusive in-place mutation and undo.

pub mod board;
pub mod composer;
pub mod error;
pub mod graph;
pub mod grid;
pub mod minimax;
pub mod solver;

#[cfg(test)]
mod fix_tests;
