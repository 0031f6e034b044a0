//! Chordal graph recognition.
//!
//! A graph is *chordal* when every cycle of four or more nodes has a chord,
//! an edge between two nodes of the cycle that are not consecutive on it.
//! Equivalently, the graph admits a *perfect elimination order*: an
//! arrangement of the nodes such that for every node, the neighbors that
//! come later in the order form a clique. Chordality is what lets several
//! NP-hard problems collapse to polynomial time, see
//! [`maximum_independent_set`](ChordalityInspector::maximum_independent_set).
//!
//! Recognition runs in O(|V| + |E|): a [`MaxCardinalitySearch`] produces a
//! visit sequence whose reversal is a perfect elimination order if and only
//! if the graph is chordal, so one search plus one verification settles the
//! question. The [`ChordalityInspector`] owns that pipeline, runs it at most
//! once, and hands out the computed orders afterwards. When the verdict is
//! negative it also produces a certificate: a *hole*, a chordless cycle of
//! length at least four.
//!
//! Self-loops and parallel edges never affect any of this. A self-loop lies
//! on no cycle of length four, and a parallel edge duplicates an adjacency
//! that is already there, so both are ignored wherever they appear.

use std::collections::VecDeque;

use bitvec::vec::BitVec;
use thiserror::Error;

use crate::pseudograph::{GraphKind, NodeIndex, Pseudograph};
use crate::traverse::MaxCardinalitySearch;

/// Ways a chordality question can be ill-posed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChordalityError {
    /// Chords are undirected structure, so directed and mixed graphs are
    /// rejected up front rather than silently read as undirected.
    #[error("chordality is only defined for undirected graphs, got a {0} graph")]
    NotUndirected(GraphKind),
    /// A candidate order must mention every node exactly once.
    #[error("candidate order has {got} entries for a graph with {expected} nodes")]
    OrderLengthMismatch { expected: usize, got: usize },
    #[error("candidate order names node {0}, which is not in the graph")]
    UnknownVertex(NodeIndex),
    #[error("candidate order lists node {0} more than once")]
    DuplicateVertex(NodeIndex),
    /// The computed orders exist only after [`ChordalityInspector::is_chordal`]
    /// has run the search.
    #[error("no maximum cardinality search has been run yet")]
    NotYetComputed,
    #[error("the graph is not chordal, so it has no perfect elimination order")]
    NotChordal,
}

/// Everything the one-shot search run settles, kept for later queries.
struct Verdict {
    chordal: bool,
    search: Vec<NodeIndex>,      // maximum cardinality visit sequence
    elimination: Vec<NodeIndex>, // the search, reversed
    hole: Option<Vec<NodeIndex>>,
}

/// Decides chordality of a borrowed graph, at most once.
///
/// The inspector holds an unconsumed [`MaxCardinalitySearch`] until the
/// first call to [`is_chordal`](Self::is_chordal) or
/// [`hole`](Self::hole) drains it, verifies the resulting order and caches
/// the verdict. Everything after that is a lookup. Borrowing the graph for
/// the inspector's lifetime is what makes the caching sound: the graph
/// cannot change under a cached verdict.
///
/// ```
/// use simplicial::chordality::ChordalityInspector;
/// use simplicial::pseudograph::Pseudograph;
///
/// // the diamond: a four-cycle plus one chord
/// let graph = Pseudograph::from_pairs(4, &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]);
/// let mut inspector = ChordalityInspector::new(&graph).unwrap();
/// assert!(inspector.is_chordal());
/// assert_eq!(inspector.perfect_elimination_order().unwrap().len(), 4);
/// assert!(inspector.hole().is_none());
/// ```
pub struct ChordalityInspector<'a, E, V> {
    graph: &'a Pseudograph<E, V>,
    engine: Option<MaxCardinalitySearch<'a, E, V>>,
    verdict: Option<Verdict>,
}

impl<'a, E, V> ChordalityInspector<'a, E, V> {
    /// Prepares an inspector without running anything yet.
    ///
    /// Fails with [`ChordalityError::NotUndirected`] when the graph has
    /// directed edges.
    pub fn new(graph: &'a Pseudograph<E, V>) -> Result<Self, ChordalityError> {
        let engine = MaxCardinalitySearch::new(graph)?;
        Ok(ChordalityInspector {
            graph,
            engine: Some(engine),
            verdict: None,
        })
    }

    /// Whether the graph is chordal.
    ///
    /// The first call drains the search and verifies its order; repeated
    /// calls return the cached verdict.
    pub fn is_chordal(&mut self) -> bool {
        self.ensure_decided();
        matches!(&self.verdict, Some(verdict) if verdict.chordal)
    }

    /// Whether the verdict has been computed yet.
    pub fn is_computed(&self) -> bool {
        self.verdict.is_some()
    }

    /// The graph under inspection.
    pub fn graph(&self) -> &'a Pseudograph<E, V> {
        self.graph
    }

    /// The node sequence of the finished search, in visit order.
    ///
    /// Errors with [`ChordalityError::NotYetComputed`] until
    /// [`is_chordal`](Self::is_chordal) has run. The order exists for every
    /// undirected graph, chordal or not.
    pub fn search_order(&self) -> Result<&[NodeIndex], ChordalityError> {
        match &self.verdict {
            Some(verdict) => Ok(&verdict.search),
            None => Err(ChordalityError::NotYetComputed),
        }
    }

    /// The perfect elimination order certifying chordality, which is the
    /// search order reversed.
    ///
    /// Errors with [`ChordalityError::NotYetComputed`] before the search has
    /// run, and with [`ChordalityError::NotChordal`] when it ran and failed,
    /// since a non-chordal graph has no such order.
    pub fn perfect_elimination_order(&self) -> Result<&[NodeIndex], ChordalityError> {
        match &self.verdict {
            None => Err(ChordalityError::NotYetComputed),
            Some(verdict) if verdict.chordal => Ok(&verdict.elimination),
            Some(_) => Err(ChordalityError::NotChordal),
        }
    }

    /// A chordless cycle of length at least four, certifying a negative
    /// verdict. Runs the search if it has not run yet. `None` when the
    /// graph is chordal.
    ///
    /// Listed in cyclic order without repeating the starting node. No
    /// promise of a shortest hole overall.
    pub fn hole(&mut self) -> Option<&[NodeIndex]> {
        self.ensure_decided();
        self.verdict.as_ref().and_then(|verdict| verdict.hole.as_deref())
    }

    /// Checks a caller-supplied order against the elimination property:
    /// for every node, the neighbors appearing later in `candidate` must be
    /// pairwise adjacent.
    ///
    /// The candidate must list every node of the graph exactly once, else
    /// one of the validation errors comes back. This check is independent
    /// of the inspector's own search and caches nothing.
    pub fn is_perfect_elimination_order(
        &self,
        candidate: &[NodeIndex],
    ) -> Result<bool, ChordalityError> {
        let position = self.position_map(candidate)?;
        Ok(self.first_violation(candidate, &position).is_none())
    }

    fn ensure_decided(&mut self) {
        let Some(engine) = self.engine.take() else {
            return;
        };
        let search: Vec<NodeIndex> = engine.collect();
        let mut elimination = search.clone();
        elimination.reverse();
        let mut position = vec![0usize; elimination.len()];
        for (i, &v) in elimination.iter().enumerate() {
            position[v.0] = i;
        }
        let (chordal, hole) = match self.first_violation(&elimination, &position) {
            None => (true, None),
            Some((center, parent, witness)) => {
                (false, self.hole_through(&position, center, parent, witness))
            }
        };
        self.verdict = Some(Verdict {
            chordal,
            search,
            elimination,
            hole,
        });
    }

    /// Inverts a candidate permutation, rejecting anything that is not a
    /// permutation of the node set.
    fn position_map(&self, order: &[NodeIndex]) -> Result<Vec<usize>, ChordalityError> {
        let n = self.graph.n_nodes();
        if order.len() != n {
            return Err(ChordalityError::OrderLengthMismatch {
                expected: n,
                got: order.len(),
            });
        }
        let mut position = vec![usize::MAX; n];
        for (i, &v) in order.iter().enumerate() {
            if v.0 >= n {
                return Err(ChordalityError::UnknownVertex(v));
            }
            if position[v.0] != usize::MAX {
                return Err(ChordalityError::DuplicateVertex(v));
            }
            position[v.0] = i;
        }
        Ok(position)
    }

    /// Scans `order` for the first node whose later neighbors fail to form
    /// a clique.
    ///
    /// It suffices to test every later neighbor against the *parent*, the
    /// later neighbor eliminated soonest: checked over the whole order this
    /// transitively covers all pairs (Tarjan, Yannakakis 1984), keeping the
    /// scan at O(|V| + |E|). On failure, returns the triple of the failing
    /// node, its parent and the later neighbor not adjacent to the parent.
    fn first_violation(
        &self,
        order: &[NodeIndex],
        position: &[usize],
    ) -> Option<(NodeIndex, NodeIndex, NodeIndex)> {
        let n = order.len();
        let mut seen: BitVec = BitVec::repeat(false, n);
        let mut later: Vec<NodeIndex> = Vec::new();
        for (i, &v) in order.iter().enumerate() {
            later.clear();
            for dart in self.graph.incidences(v) {
                let u = self.graph.opposite(dart);
                if u != v && position[u.0] > i && !seen[u.0] {
                    seen.set(u.0, true);
                    later.push(u);
                }
            }
            let mut violation = None;
            if let Some(parent) = later.iter().copied().min_by_key(|u| position[u.0]) {
                violation = later
                    .iter()
                    .copied()
                    .filter(|&w| w != parent)
                    .find(|&w| !self.graph.adjacent(parent, w))
                    .map(|w| (v, parent, w));
            }
            for &u in &later {
                seen.set(u.0, false);
            }
            if violation.is_some() {
                return violation;
            }
        }
        None
    }

    /// Closes a hole through a violation triple.
    ///
    /// `parent` and `witness` are later neighbors of `center` with no edge
    /// between them, so `witness`-`center`-`parent` is an induced path. A
    /// shortest path from `parent` back to `witness` that stays strictly
    /// later in the order and off the rest of `center`'s neighborhood
    /// closes the cycle, and shortest paths are induced, so no chord can
    /// survive: the result is a hole of length at least four. Such a path
    /// always exists when the triple came from a maximum cardinality order.
    fn hole_through(
        &self,
        position: &[usize],
        center: NodeIndex,
        parent: NodeIndex,
        witness: NodeIndex,
    ) -> Option<Vec<NodeIndex>> {
        let n = self.graph.n_nodes();
        let cutoff = position[center.0];
        let mut predecessor: Vec<Option<NodeIndex>> = vec![None; n];
        predecessor[parent.0] = Some(parent);
        let mut queue = VecDeque::from([parent]);
        'search: while let Some(x) = queue.pop_front() {
            for dart in self.graph.incidences(x) {
                let u = self.graph.opposite(dart);
                if u == witness {
                    predecessor[u.0] = Some(x);
                    break 'search;
                }
                if position[u.0] <= cutoff
                    || predecessor[u.0].is_some()
                    || self.graph.adjacent(u, center)
                {
                    continue;
                }
                predecessor[u.0] = Some(x);
                queue.push_back(u);
            }
        }
        predecessor[witness.0]?;
        let mut hole = vec![witness];
        let mut cursor = witness;
        while cursor != parent {
            cursor = predecessor[cursor.0]?;
            hole.push(cursor);
        }
        hole.push(center);
        hole.reverse();
        Some(hole)
    }
}

impl<E, V> Pseudograph<E, V> {
    /// One-off chordality test, for callers that do not need the orders or
    /// the hole afterwards.
    pub fn is_chordal(&self) -> Result<bool, ChordalityError> {
        let mut inspector = ChordalityInspector::new(self)?;
        Ok(inspector.is_chordal())
    }
}
