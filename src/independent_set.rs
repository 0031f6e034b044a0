//! Maximum independent set on chordal graphs.
//!
//! Finding a maximum independent set is NP-hard in general, but on a
//! chordal graph a perfect elimination order makes it greedy (Gavril,
//! *Algorithms for minimum coloring, maximum clique, minimum covering by
//! cliques, and maximum independent set of a chordal graph*, 1972). Walk
//! the elimination order and take every node not yet restricted, then
//! restrict its neighbors. The first unrestricted node is always simplicial
//! in what remains, and some maximum independent set contains each
//! simplicial node, so the greedy choice never costs anything.
//!
//! Non-chordal graphs get no answer rather than a wrong one: the entry
//! points return [`Option`], with `None` standing for "this exact method
//! does not apply here".

use bitvec::vec::BitVec;
use indexmap::IndexSet;
use itertools::Itertools;

use crate::chordality::{ChordalityError, ChordalityInspector};
use crate::pseudograph::{NodeIndex, Pseudograph};

impl<E, V> ChordalityInspector<'_, E, V> {
    /// A maximum independent set of the graph, or `None` when the graph is
    /// not chordal.
    ///
    /// Runs the search on first use, like [`is_chordal`](Self::is_chordal).
    /// The nodes come back in elimination order, so for a fixed graph the
    /// result is reproducible across calls on the same inspector. Self-loops
    /// do not exclude a node from the set: independence is about edges
    /// between distinct nodes.
    ///
    /// O(|V| + |E|) on top of the memoized chordality run.
    pub fn maximum_independent_set(&mut self) -> Option<IndexSet<NodeIndex>> {
        if !self.is_chordal() {
            return None;
        }
        let elimination = self.perfect_elimination_order().ok()?;
        let graph = self.graph();

        let mut selected = IndexSet::new();
        let mut restricted: BitVec = BitVec::repeat(false, graph.n_nodes());
        for &v in elimination {
            if restricted[v.0] {
                continue;
            }
            selected.insert(v);
            for dart in graph.incidences(v) {
                let u = graph.opposite(dart);
                if u != v {
                    restricted.set(u.0, true);
                }
            }
        }
        debug_assert!(
            selected
                .iter()
                .tuple_combinations()
                .all(|(&a, &b)| !graph.adjacent(a, b)),
            "greedy selection over an elimination order must be independent"
        );
        Some(selected)
    }
}

impl<E, V> Pseudograph<E, V> {
    /// One-off maximum independent set, for callers that do not need the
    /// inspector afterwards.
    ///
    /// `Err` for directed or mixed graphs, `Ok(None)` for undirected graphs
    /// that are not chordal.
    pub fn maximum_independent_set(
        &self,
    ) -> Result<Option<IndexSet<NodeIndex>>, ChordalityError> {
        let mut inspector = ChordalityInspector::new(self)?;
        Ok(inspector.maximum_independent_set())
    }
}
