//! End-to-end tests for all three engines on curated, fixed inputs.

use crate::board::{Board, Marker, Outcome};
use crate::composer::Composer;
use crate::graph::Graph;
use crate::grid::Grid;
use crate::minimax::{MinimaxPlayer, OpeningStrategy};
use crate::solver::{BacktrackingSolver, Solver};

use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

const CLASSIC_PUZZLE: &str =
    "5,3,,,7,,,,,\
     6,,,1,9,5,,,,\
     ,9,8,,,,,6,,\
     8,,,,6,,,,3,\
     4,,,8,,3,,,1,\
     7,,,,2,,,,6,\
     ,6,,,,,2,8,,\
     ,,,4,1,9,,,5,\
     ,,,,8,,,7,9";

const CLASSIC_SOLUTION: &str =
    "5,3,4,6,7,8,9,1,2,\
     6,7,2,1,9,5,3,4,8,\
     1,9,8,3,4,2,5,6,7,\
     8,5,9,7,6,1,4,2,3,\
     4,2,6,8,5,3,7,9,1,\
     7,1,3,9,2,4,8,5,6,\
     9,6,1,5,3,7,2,8,4,\
     2,8,7,4,1,9,6,3,5,\
     3,4,5,2,8,6,1,7,9";

#[test]
fn classic_puzzle_solves_to_known_solution() {
    let mut grid = Grid::parse(CLASSIC_PUZZLE).unwrap();
    assert!(grid.is_valid());

    assert!(BacktrackingSolver.solve(&mut grid));

    let expected = Grid::parse(CLASSIC_SOLUTION).unwrap();
    assert_eq!(expected, grid);
}

#[test]
fn conflicting_givens_are_rejected_before_solving() {
    // the classic puzzle with an additional 5 in the first row
    let mut conflicting = Grid::parse(CLASSIC_PUZZLE).unwrap();
    conflicting.set_cell(8, 0, 5).unwrap();

    // the caller-side check catches the conflict
    assert!(!conflicting.is_valid());

    // a well-formed but contradictory grid simply fails to solve
    let mut unsolvable = Grid::parse(
        ",,,2,3,4,5,6,,\
         ,9,,,,,,,,\
         ,,1,,,,,,,\
         7,,,,,,,,,\
         8,,,,,,,,").unwrap();
    assert!(unsolvable.is_valid());
    assert!(!BacktrackingSolver.solve(&mut unsolvable));
}

#[test]
fn minimax_game_against_itself_ties() {
    let mut board = Board::new();
    let mut x_player = MinimaxPlayer::new(ChaCha8Rng::seed_from_u64(1),
        OpeningStrategy::Corner);
    let mut o_player = MinimaxPlayer::new(ChaCha8Rng::seed_from_u64(2),
        OpeningStrategy::Random);
    let mut marker = Marker::X;

    while board.outcome().is_none() {
        let snapshot = board.clone();
        let cell = if marker == Marker::X {
            x_player.choose_move(&mut board, marker).unwrap()
        }
        else {
            o_player.choose_move(&mut board, marker).unwrap()
        };

        // choosing a move never mutates the board as a net effect
        assert_eq!(snapshot, board);

        board.place(cell, marker).unwrap();
        marker = marker.opponent();
    }

    assert_eq!(Some(Outcome::Tie), board.outcome());
}

#[test]
fn graph_build_and_walk_small_corpus() {
    let graph = Graph::from_tokens(["a", "b", "a", "c"]);
    let a = graph.vertex_id("a").unwrap();
    let b = graph.vertex_id("b").unwrap();
    let c = graph.vertex_id("c").unwrap();

    let a_vertex = graph.vertex(a).unwrap();
    assert_eq!(&[(b, 1), (c, 1)], a_vertex.edges());
    assert_eq!(2, a_vertex.total_weight());

    let mut composer = Composer::new(ChaCha8Rng::seed_from_u64(0));
    assert_eq!(vec![String::from("a")],
        composer.compose_from(&graph, "a", 1).unwrap());
}

#[test]
fn composition_is_reproducible_with_fixed_seed() {
    let graph = Graph::from_text(
        "it was the best of times it was the worst of times");

    let first = Composer::new(ChaCha8Rng::seed_from_u64(99))
        .compose(&graph, 30)
        .unwrap();
    let second = Composer::new(ChaCha8Rng::seed_from_u64(99))
        .compose(&graph, 30)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(30, first.len());
}
