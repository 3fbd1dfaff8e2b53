//! This module contains the error and result definitions used in this crate.

use std::num::ParseIntError;

/// Miscellaneous errors that can occur when accessing or mutating a
/// [Grid](crate::grid::Grid). This does not include errors that occur when
/// parsing a grid code, see [GridParseError](enum.GridParseError.html) for
/// that.
#[derive(Debug, Eq, PartialEq)]
pub enum GridError {

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the grid. This is the case if they are greater than or equal to 9.
    OutOfBounds,

    /// Indicates that some digit is invalid for a grid cell. This is the case
    /// if it is less than 1 or greater than 9.
    InvalidDigit
}

/// Syntactic sugar for `Result<V, GridError>`.
pub type GridResult<V> = Result<V, GridError>;

/// An enumeration of the errors that may occur when parsing a
/// [Grid](crate::grid::Grid) from its comma-separated code.
#[derive(Debug, Eq, PartialEq)]
pub enum GridParseError {

    /// Indicates that the code contains more than 81 comma-separated entries.
    /// Codes with less than 81 entries are padded with empty cells instead.
    TooManyCells,

    /// Indicates that one of the entries could not be parsed as a number.
    DigitFormatError,

    /// Indicates that a cell is filled with an invalid digit (0 or more
    /// than 9).
    InvalidDigit
}

impl From<ParseIntError> for GridParseError {
    fn from(_: ParseIntError) -> Self {
        GridParseError::DigitFormatError
    }
}

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;

/// An enumeration of the errors that can occur when operating on a
/// [Board](crate::board::Board).
#[derive(Debug, Eq, PartialEq)]
pub enum BoardError {

    /// Indicates that the specified cell index lies outside the board. This
    /// is the case if it is greater than or equal to 9.
    OutOfBounds,

    /// Indicates that a marker was to be placed on a cell that already
    /// contains a marker.
    CellOccupied,

    /// Indicates that a move was requested on a board that has no empty
    /// cells left. Callers must check availability before asking a player
    /// for a move.
    NoAvailableMoves
}

/// Syntactic sugar for `Result<V, BoardError>`.
pub type BoardResult<V> = Result<V, BoardError>;

/// An enumeration of the errors that can occur when building or walking a
/// [Graph](crate::graph::Graph).
#[derive(Debug, Eq, PartialEq)]
pub enum GraphError {

    /// Indicates that a transition was requested from a vertex that has no
    /// outgoing edges. This happens for the last token of a corpus if it
    /// occurs nowhere else in the token sequence.
    DeadEnd,

    /// Indicates that the requested vertex, whether specified by label or by
    /// id, is not part of the graph.
    UnknownVertex,

    /// Indicates that a random seed vertex was requested from a graph that
    /// was built from an empty token sequence.
    EmptyCorpus
}

/// Syntactic sugar for `Result<V, GraphError>`.
pub type GraphResult<V> = Result<V, GraphError>;
