//! This module contains the minimax game-tree search used by the strategic
//! tic-tac-toe computer player.
//!
//! The search is a full-depth, pruning-free exploration of all continuations
//! of a [Board](crate::board::Board). On a 3x3 board there are at most `9!`
//! leaf paths, so neither memoization nor alpha-beta pruning is needed for
//! tractability.

use crate::board::{Board, Marker};
use crate::error::{BoardError, BoardResult};

use rand::Rng;
use rand::rngs::ThreadRng;

const CORNERS: [usize; 4] = [0, 2, 6, 8];
const SIDES: [usize; 4] = [1, 3, 5, 7];
const CENTER: usize = 4;

/// The strategy used by a [MinimaxPlayer] for its first move on an empty
/// board. Full minimax on an empty board is well-defined but scores every
/// cell equally (perfect play always ties), so the opening is conventionally
/// replaced by a fixed or random choice for performance and variety.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpeningStrategy {

    /// Choose any of the nine cells uniformly at random.
    Random,

    /// Choose one of the four corner cells at random.
    Corner,

    /// Choose one of the four side cells at random.
    Side,

    /// Always choose the center cell.
    Center
}

/// A computer player that chooses moves by exhaustive minimax search. The
/// root player maximizes the score, the opponent minimizes it, and terminal
/// scores scale with the number of remaining empty cells so that faster wins
/// are preferred and faster losses avoided.
///
/// For most cases, sensible defaults are provided by
/// [MinimaxPlayer::new_default].
pub struct MinimaxPlayer<R: Rng> {
    rng: R,
    opening: OpeningStrategy
}

impl MinimaxPlayer<ThreadRng> {

    /// Creates a new minimax player that uses a [ThreadRng] and a uniformly
    /// random opening move.
    pub fn new_default() -> MinimaxPlayer<ThreadRng> {
        MinimaxPlayer::new(rand::thread_rng(), OpeningStrategy::Random)
    }
}

impl<R: Rng> MinimaxPlayer<R> {

    /// Creates a new minimax player that uses the given random number
    /// generator for its opening move and the given [OpeningStrategy] on an
    /// empty board. All non-opening moves are deterministic.
    pub fn new(rng: R, opening: OpeningStrategy) -> MinimaxPlayer<R> {
        MinimaxPlayer {
            rng,
            opening
        }
    }

    fn opening_move(&mut self) -> usize {
        match self.opening {
            OpeningStrategy::Random => self.rng.gen_range(0..9),
            OpeningStrategy::Corner => CORNERS[self.rng.gen_range(0..4)],
            OpeningStrategy::Side => SIDES[self.rng.gen_range(0..4)],
            OpeningStrategy::Center => CENTER
        }
    }

    /// Chooses the cell on which `mover` should place its marker, assuming
    /// optimal play by both sides. On an empty board the configured
    /// [OpeningStrategy] is used instead of running the search.
    ///
    /// The board is mutated during exploration, but every placement is
    /// retracted before this method returns, so the board observed by the
    /// caller is unchanged as a net effect.
    ///
    /// Among equally scored moves, the one with the lowest cell index is
    /// kept.
    ///
    /// # Errors
    ///
    /// If the board has no empty cell, `BoardError::NoAvailableMoves` is
    /// returned.
    pub fn choose_move(&mut self, board: &mut Board, mover: Marker)
            -> BoardResult<usize> {
        let available = board.available_cells();

        if available.is_empty() {
            return Err(BoardError::NoAvailableMoves);
        }

        if board.is_empty() {
            return Ok(self.opening_move());
        }

        let mut best_cell = available[0];
        let mut best_score = i32::MIN;

        for cell in available {
            board.place(cell, mover)?;
            let score = score_rec(board, mover.opponent(), mover);
            board.retract(cell)?;

            if score > best_score {
                best_score = score;
                best_cell = cell;
            }
        }

        Ok(best_cell)
    }
}

/// Recursively scores the current board from the perspective of `maximizer`,
/// with `to_move` being the player whose turn it is. Each placement is
/// retracted before the call returns, including the cached winner.
fn score_rec(board: &mut Board, to_move: Marker, maximizer: Marker) -> i32 {
    // the winner, if any, is the opponent of to_move, since it placed the
    // most recent marker
    if let Some(winner) = board.winner() {
        let magnitude = board.empty_count() as i32 + 1;

        return if winner == maximizer {
            magnitude
        }
        else {
            -magnitude
        };
    }

    if board.is_full() {
        return 0;
    }

    let maximizing = to_move == maximizer;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for cell in board.available_cells() {
        board.place(cell, to_move).unwrap();
        let score = score_rec(board, to_move.opponent(), maximizer);
        board.retract(cell).unwrap();

        best = if maximizing {
            best.max(score)
        }
        else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
mod tests {

    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn player() -> MinimaxPlayer<ChaCha8Rng> {
        MinimaxPlayer::new(ChaCha8Rng::seed_from_u64(42),
            OpeningStrategy::Random)
    }

    /// Plays the given cells, alternating markers starting with `X`.
    fn board_with_moves(moves: &[usize]) -> Board {
        let mut board = Board::new();
        let mut marker = Marker::X;

        for &cell in moves {
            board.place(cell, marker).unwrap();
            marker = marker.opponent();
        }

        board
    }

    #[test]
    fn takes_forced_win() {
        // x x . / o o . / . . .  with x to move
        let mut board = board_with_moves(&[0, 3, 1, 4]);
        let cell = player().choose_move(&mut board, Marker::X).unwrap();
        assert_eq!(2, cell);
    }

    #[test]
    fn blocks_immediate_threat() {
        // o o . / . x . / . . x  with x to move; o threatens cell 2
        let mut board = board_with_moves(&[4, 0, 8, 1]);
        let cell = player().choose_move(&mut board, Marker::X).unwrap();
        assert_eq!(2, cell);
    }

    #[test]
    fn prefers_faster_win() {
        // x o . / . x . / o . .  with x to move: cell 8 wins immediately,
        // so its depth-scaled score beats every slower forced win on a
        // lower-indexed cell
        let mut board = board_with_moves(&[0, 1, 4, 6]);
        let cell = player().choose_move(&mut board, Marker::X).unwrap();
        assert_eq!(8, cell);
    }

    #[test]
    fn does_not_mutate_board() {
        let mut board = board_with_moves(&[4, 0, 8, 1]);
        let snapshot = board.clone();
        player().choose_move(&mut board, Marker::X).unwrap();
        assert_eq!(snapshot, board);
    }

    #[test]
    fn full_board_is_an_error() {
        let mut board = board_with_moves(&[0, 1, 2, 5, 3, 6, 4, 8, 7]);
        assert_eq!(Err(BoardError::NoAvailableMoves),
            player().choose_move(&mut board, Marker::X));
    }

    #[test]
    fn opening_strategies_pick_their_cells() {
        let mut board = Board::new();

        let mut center = MinimaxPlayer::new(ChaCha8Rng::seed_from_u64(0),
            OpeningStrategy::Center);
        assert_eq!(4, center.choose_move(&mut board, Marker::X).unwrap());

        let mut corner = MinimaxPlayer::new(ChaCha8Rng::seed_from_u64(0),
            OpeningStrategy::Corner);
        let cell = corner.choose_move(&mut board, Marker::X).unwrap();
        assert!(CORNERS.contains(&cell));

        let mut side = MinimaxPlayer::new(ChaCha8Rng::seed_from_u64(0),
            OpeningStrategy::Side);
        let cell = side.choose_move(&mut board, Marker::X).unwrap();
        assert!(SIDES.contains(&cell));

        let mut random = MinimaxPlayer::new(ChaCha8Rng::seed_from_u64(0),
            OpeningStrategy::Random);
        let cell = random.choose_move(&mut board, Marker::X).unwrap();
        assert!(cell < 9);
        assert!(board.is_empty());
    }

    #[test]
    fn perfect_play_ties() {
        let mut board = Board::new();
        let mut x_player = MinimaxPlayer::new(ChaCha8Rng::seed_from_u64(7),
            OpeningStrategy::Center);
        let mut o_player = MinimaxPlayer::new(ChaCha8Rng::seed_from_u64(8),
            OpeningStrategy::Random);
        let mut marker = Marker::X;

        while board.outcome().is_none() {
            let cell = if marker == Marker::X {
                x_player.choose_move(&mut board, marker).unwrap()
            }
            else {
                o_player.choose_move(&mut board, marker).unwrap()
            };

            board.place(cell, marker).unwrap();
            marker = marker.opponent();
        }

        assert_eq!(Some(crate::board::Outcome::Tie), board.outcome());
    }
}
