//! This module contains the weighted token-adjacency [Graph] used for
//! markov-chain text composition.
//!
//! Vertices are stored in an arena and addressed by integer id, with a
//! separate label lookup table. Adjacency is stored as `(destination id,
//! weight)` lists, which keeps the weighted transition in [Graph::step] free
//! of allocations.

use crate::error::{GraphError, GraphResult};

use rand::Rng;

use std::collections::HashMap;

/// Splits a text into normalized tokens: everything is case-folded, ASCII
/// punctuation is stripped, and the remainder is split on whitespace. Words
/// that consist entirely of punctuation disappear.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.chars()
            .filter(|c| !c.is_ascii_punctuation())
            .flat_map(char::to_lowercase)
            .collect::<String>())
        .filter(|word| !word.is_empty())
        .collect()
}

/// A single vertex of a [Graph], holding its token label and its outgoing
/// edges. Edge weights count how often the transition to the destination was
/// observed in the corpus; repeated observations increment the weight rather
/// than adding a parallel edge.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vertex {
    label: String,
    edges: Vec<(usize, u64)>,
    total_weight: u64
}

impl Vertex {
    fn new(label: String) -> Vertex {
        Vertex {
            label,
            edges: Vec::new(),
            total_weight: 0
        }
    }

    fn add_edge(&mut self, destination: usize, weight: u64) {
        match self.edges.iter_mut().find(|(d, _)| *d == destination) {
            Some((_, edge_weight)) => *edge_weight += weight,
            None => self.edges.push((destination, weight))
        }

        self.total_weight += weight;
    }

    /// Gets the token label of this vertex.
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Gets the outgoing edges of this vertex as `(destination id, weight)`
    /// pairs, in first-observed order.
    pub fn edges(&self) -> &[(usize, u64)] {
        self.edges.as_slice()
    }

    /// Gets the sum of all outgoing edge weights. A vertex with a total
    /// weight of 0 is a dead end.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }
}

/// A directed graph of token adjacency with accumulated integer edge
/// weights. Every vertex has a unique label; the edge weight from one vertex
/// to another is the number of times that token transition was observed in
/// the corpus.
///
/// A graph is built once with [Graph::from_tokens] or [Graph::from_text] and
/// is read-only afterwards, so any number of
/// [Composers](crate::composer::Composer) can walk it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    vertices: Vec<Vertex>,
    ids: HashMap<String, usize>,
    occurrences: Vec<usize>
}

impl Graph {

    /// Creates a new, empty graph.
    pub fn new() -> Graph {
        Graph {
            vertices: Vec::new(),
            ids: HashMap::new(),
            occurrences: Vec::new()
        }
    }

    /// Builds a graph from an ordered token sequence. Both vertices of each
    /// consecutive pair are created on first reference and the edge weight
    /// from the earlier to the later token is incremented by 1. Self-loops
    /// are allowed, i.e. a token followed by itself yields an edge from its
    /// vertex to itself.
    pub fn from_tokens<I, T>(tokens: I) -> Graph
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>
    {
        let mut graph = Graph::new();
        let mut prev: Option<usize> = None;

        for token in tokens {
            let id = graph.intern(token.as_ref());
            graph.occurrences.push(id);

            if let Some(prev_id) = prev {
                graph.vertices[prev_id].add_edge(id, 1);
            }

            prev = Some(id);
        }

        graph
    }

    /// Builds a graph from raw text, which is normalized with [tokenize]
    /// first.
    pub fn from_text(text: &str) -> Graph {
        Graph::from_tokens(tokenize(text))
    }

    fn intern(&mut self, label: &str) -> usize {
        if let Some(&id) = self.ids.get(label) {
            id
        }
        else {
            let id = self.vertices.len();
            self.vertices.push(Vertex::new(String::from(label)));
            self.ids.insert(String::from(label), id);
            id
        }
    }

    /// Gets the number of vertices in this graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Gets the number of token occurrences this graph was built from. This
    /// counts every token of the corpus, not only distinct ones.
    pub fn occurrence_count(&self) -> usize {
        self.occurrences.len()
    }

    /// Gets the vertex with the given id, or `None` if the id was not issued
    /// by this graph.
    pub fn vertex(&self, id: usize) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Looks up the id of the vertex with the given label, or `None` if no
    /// token with that label was observed.
    pub fn vertex_id(&self, label: &str) -> Option<usize> {
        self.ids.get(label).copied()
    }

    /// Chooses a random transition out of the given vertex, with probability
    /// proportional to edge weight, and returns the destination id.
    ///
    /// # Errors
    ///
    /// * `GraphError::UnknownVertex` If `id` was not issued by this graph.
    /// * `GraphError::DeadEnd` If the vertex has no outgoing edges, i.e. its
    /// token only occurred as the very last token of the corpus.
    pub fn step<R: Rng>(&self, id: usize, rng: &mut R) -> GraphResult<usize> {
        let vertex = self.vertices.get(id).ok_or(GraphError::UnknownVertex)?;

        if vertex.total_weight == 0 {
            return Err(GraphError::DeadEnd);
        }

        let mut remaining = rng.gen_range(0..vertex.total_weight);

        for &(destination, weight) in &vertex.edges {
            if remaining < weight {
                return Ok(destination);
            }

            remaining -= weight;
        }

        // the edge weights sum to total_weight, so the loop always returns
        unreachable!()
    }

    /// Chooses the id of a random token occurrence, so tokens that occur
    /// more often in the corpus are proportionally more likely to be picked.
    /// This is the seed selection for
    /// [Composer::compose](crate::composer::Composer::compose).
    ///
    /// # Errors
    ///
    /// If the graph was built from an empty token sequence. In that case,
    /// `GraphError::EmptyCorpus` is returned.
    pub fn random_occurrence<R: Rng>(&self, rng: &mut R)
            -> GraphResult<usize> {
        if self.occurrences.is_empty() {
            return Err(GraphError::EmptyCorpus);
        }

        Ok(self.occurrences[rng.gen_range(0..self.occurrences.len())])
    }
}

impl Default for Graph {
    fn default() -> Graph {
        Graph::new()
    }
}
