//! Maximum cardinality search.
//!
//! A maximum cardinality search (MCS) visits the nodes of an undirected
//! graph one at a time, always picking a node with the largest number of
//! already visited neighbors. The resulting sequence is what makes chordal
//! graphs tractable: reversed, it is a perfect elimination order exactly
//! when the graph is chordal (Tarjan, Yannakakis, *Simple linear-time
//! algorithms to test chordality of graphs*, 1984).
//!
//! The search keeps every unvisited node in a bucket indexed by its current
//! visited-neighbor count, together with a cursor on the highest occupied
//! bucket. Each visit pops from the top bucket, then promotes each
//! uncounted unvisited neighbor one bucket up, which can raise the cursor
//! by at most one; the cursor only walks downward when its bucket empties.
//! Over a whole run the cursor moves O(|V| + |E|) steps, so the search is
//! linear in the size of the graph.

use bitvec::vec::BitVec;

use crate::chordality::ChordalityError;
use crate::pseudograph::{NodeIndex, Pseudograph};

/// One-shot iterator over the nodes of a graph in maximum cardinality order.
///
/// The iterator borrows the graph for its whole lifetime, so the structure
/// cannot change mid-search. It is not restartable: once exhausted it only
/// yields `None`, and a fresh search must be built to iterate again. Ties
/// between equally good candidates are broken arbitrarily; no particular
/// choice is promised.
///
/// ```
/// use simplicial::pseudograph::Pseudograph;
/// use simplicial::traverse::MaxCardinalitySearch;
///
/// let graph = Pseudograph::from_pairs(3, &[(0, 1), (1, 2), (2, 0)]);
/// let search = MaxCardinalitySearch::new(&graph).unwrap();
/// let order: Vec<_> = search.collect();
/// assert_eq!(order.len(), 3);
/// ```
pub struct MaxCardinalitySearch<'a, E, V> {
    graph: &'a Pseudograph<E, V>,
    buckets: Vec<Vec<NodeIndex>>, // bucket k holds the unvisited nodes with k visited neighbors
    cardinality: Vec<usize>,      // node -> index of its bucket
    slot: Vec<usize>,             // node -> position inside its bucket
    visited: BitVec,
    counted: BitVec, // scratch, neighbors already counted for the current visit
    max_cardinality: usize,
    remaining: usize,
}

impl<'a, E, V> MaxCardinalitySearch<'a, E, V> {
    /// Sets up the bucket structure with every node in bucket zero.
    ///
    /// Fails with [`ChordalityError::NotUndirected`] when any edge carries a
    /// direction.
    pub fn new(graph: &'a Pseudograph<E, V>) -> Result<Self, ChordalityError> {
        if !graph.is_undirected() {
            return Err(ChordalityError::NotUndirected(graph.kind()));
        }
        let n = graph.n_nodes();
        let mut buckets = vec![Vec::new(); n];
        if n > 0 {
            buckets[0] = graph.node_indices().collect();
        }
        Ok(MaxCardinalitySearch {
            graph,
            buckets,
            cardinality: vec![0; n],
            slot: (0..n).collect(),
            visited: BitVec::repeat(false, n),
            counted: BitVec::repeat(false, n),
            max_cardinality: 0,
            remaining: n,
        })
    }

    /// Nodes not yet emitted.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Moves `node` one bucket up, tracking the highest occupied bucket.
    fn promote(&mut self, node: NodeIndex) {
        let k = self.cardinality[node.0];
        let s = self.slot[node.0];
        let moved = self.buckets[k].swap_remove(s);
        debug_assert_eq!(moved, node);
        if let Some(&displaced) = self.buckets[k].get(s) {
            self.slot[displaced.0] = s;
        }
        self.cardinality[node.0] = k + 1;
        self.slot[node.0] = self.buckets[k + 1].len();
        self.buckets[k + 1].push(node);
        if k + 1 > self.max_cardinality {
            self.max_cardinality = k + 1;
        }
    }
}

impl<E, V> Iterator for MaxCardinalitySearch<'_, E, V> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let vertex = self.buckets[self.max_cardinality].pop()?;
        self.visited.set(vertex.0, true);
        self.remaining -= 1;

        if self.remaining > 0 {
            while self.max_cardinality > 0 && self.buckets[self.max_cardinality].is_empty() {
                self.max_cardinality -= 1;
            }
            // each unvisited neighbor gains one visited neighbor, counted
            // once no matter how many parallel edges carry it
            for dart in self.graph.incidences(vertex) {
                let u = self.graph.opposite(dart);
                if self.visited[u.0] || self.counted[u.0] {
                    continue;
                }
                self.counted.set(u.0, true);
                self.promote(u);
            }
            for dart in self.graph.incidences(vertex) {
                let u = self.graph.opposite(dart);
                self.counted.set(u.0, false);
            }
        }

        Some(vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E, V> ExactSizeIterator for MaxCardinalitySearch<'_, E, V> {}

impl<E, V> std::iter::FusedIterator for MaxCardinalitySearch<'_, E, V> {}
