//! This module contains the [Composer], which generates new token sequences
//! by a weighted random walk over a [Graph](crate::graph::Graph).

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

use rand::Rng;
use rand::rngs::ThreadRng;

/// A composer performs weighted random walks over a [Graph] and collects the
/// visited token labels into a new sequence. It owns the random number
/// generator, so independent composers produce independent sequences, while
/// a composer with a seeded generator reproduces the same sequence for the
/// same graph.
///
/// For most cases, sensible defaults are provided by
/// [Composer::new_default].
pub struct Composer<R: Rng> {
    rng: R
}

impl Composer<ThreadRng> {

    /// Creates a new composer that uses a [ThreadRng] to drive the walk.
    pub fn new_default() -> Composer<ThreadRng> {
        Composer::new(rand::thread_rng())
    }
}

impl<R: Rng> Composer<R> {

    /// Creates a new composer that uses the given random number generator to
    /// drive the walk.
    pub fn new(rng: R) -> Composer<R> {
        Composer {
            rng
        }
    }

    fn label_of(&self, graph: &Graph, id: usize) -> GraphResult<String> {
        Ok(String::from(graph.vertex(id)
            .ok_or(GraphError::UnknownVertex)?
            .label()))
    }

    /// Composes a sequence of exactly `length` tokens. The walk is seeded by
    /// a random token occurrence (see [Graph::random_occurrence]), so tokens
    /// that occur more often in the corpus are more likely starting points.
    /// Whenever the walk runs into a dead end before `length` tokens were
    /// emitted, it restarts from a fresh random seed.
    ///
    /// # Errors
    ///
    /// If `graph` was built from an empty token sequence and `length` is
    /// greater than 0. In that case, `GraphError::EmptyCorpus` is returned.
    pub fn compose(&mut self, graph: &Graph, length: usize)
            -> GraphResult<Vec<String>> {
        let mut composition = Vec::with_capacity(length);

        if length == 0 {
            return Ok(composition);
        }

        let mut current = graph.random_occurrence(&mut self.rng)?;

        loop {
            composition.push(self.label_of(graph, current)?);

            if composition.len() == length {
                return Ok(composition);
            }

            current = match graph.step(current, &mut self.rng) {
                Ok(next) => next,
                Err(GraphError::DeadEnd) =>
                    graph.random_occurrence(&mut self.rng)?,
                Err(error) => return Err(error)
            };
        }
    }

    /// Composes a sequence of up to `length` tokens, starting from the
    /// vertex with the given label. The start label itself is the first
    /// emitted token. If the walk runs into a dead end, the sequence stops
    /// early instead of being reseeded, so the result may be shorter than
    /// `length`.
    ///
    /// # Errors
    ///
    /// If no vertex with the label `start` exists in `graph`. In that case,
    /// `GraphError::UnknownVertex` is returned.
    pub fn compose_from(&mut self, graph: &Graph, start: &str, length: usize)
            -> GraphResult<Vec<String>> {
        let mut current =
            graph.vertex_id(start).ok_or(GraphError::UnknownVertex)?;
        let mut composition = Vec::with_capacity(length);

        while composition.len() < length {
            composition.push(self.label_of(graph, current)?);

            if composition.len() == length {
                break;
            }

            current = match graph.step(current, &mut self.rng) {
                Ok(next) => next,
                Err(GraphError::DeadEnd) => break,
                Err(error) => return Err(error)
            };
        }

        Ok(composition)
    }
}
