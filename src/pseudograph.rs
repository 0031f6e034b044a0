use std::ops::{Index, IndexMut};

use ahash::AHashSet;
use itertools::Itertools;

use involution::Involution;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeIndex(pub usize);

impl std::fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeIndex(pub usize);

impl std::fmt::Display for EdgeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub mod involution;
pub use involution::{Dart, Orientation};

/// Directedness of a graph as a whole, derived from its edges at build time.
///
/// A graph with no edges counts as undirected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GraphKind {
    Undirected,
    Directed,
    Mixed,
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphKind::Undirected => write!(f, "undirected"),
            GraphKind::Directed => write!(f, "directed"),
            GraphKind::Mixed => write!(f, "mixed"),
        }
    }
}

pub mod builder;

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct EdgeRecord<E> {
    source: Dart,
    sink: Dart,
    orientation: Orientation,
    data: E,
}

/// A multigraph with self-loops and parallel edges, frozen after build.
///
/// Every edge is a pair of darts related by an involution; each dart anchors
/// at a node. Structure is fixed once [`builder::PseudographBuilder::build`]
/// returns, only node and edge payloads stay mutable (through `IndexMut`).
/// Adjacency queries are backed by a hash set of endpoint pairs built up
/// front, so `adjacent` is O(1).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pseudograph<E = (), V = ()> {
    involution: Involution,            // dart pairing
    dart_anchor: Vec<NodeIndex>,       // dart -> node it is attached to
    incidence: Vec<Vec<Dart>>,         // node -> attached darts, a loop contributes two
    node_data: Vec<V>,                 // same length as incidence
    edges: Vec<EdgeRecord<E>>,         // edge records in insertion order
    adjacency: AHashSet<(NodeIndex, NodeIndex)>, // normalised endpoint pairs
    kind: GraphKind,                   // derived from edge orientations
}

// Accessors
impl<E, V> Pseudograph<E, V> {
    pub fn n_nodes(&self) -> usize {
        self.node_data.len()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn n_darts(&self) -> usize {
        self.involution.len()
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_undirected(&self) -> bool {
        self.kind == GraphKind::Undirected
    }

    /// The dart on the other end of `dart`'s edge.
    pub fn inv(&self, dart: Dart) -> Dart {
        self.involution.inv(dart)
    }

    /// The node `dart` is attached to.
    pub fn anchor(&self, dart: Dart) -> NodeIndex {
        self.dart_anchor[dart.0]
    }

    /// The node on the other end of `dart`'s edge.
    ///
    /// For a dart of a self-loop this is the anchor itself.
    pub fn opposite(&self, dart: Dart) -> NodeIndex {
        self.dart_anchor[self.involution.inv(dart).0]
    }

    pub fn edge_of(&self, dart: Dart) -> EdgeIndex {
        EdgeIndex(dart.0 / 2)
    }

    pub fn endpoints(&self, edge: EdgeIndex) -> (NodeIndex, NodeIndex) {
        let record = &self.edges[edge.0];
        (self.dart_anchor[record.source.0], self.dart_anchor[record.sink.0])
    }

    pub fn orientation(&self, edge: EdgeIndex) -> Orientation {
        self.edges[edge.0].orientation
    }

    pub fn is_loop(&self, edge: EdgeIndex) -> bool {
        let (a, b) = self.endpoints(edge);
        a == b
    }

    /// Number of darts at `node`; a self-loop counts twice.
    pub fn degree(&self, node: NodeIndex) -> usize {
        self.incidence[node.0].len()
    }

    /// O(1) adjacency test. `adjacent(v, v)` is true exactly when `v`
    /// carries a self-loop.
    pub fn adjacent(&self, a: NodeIndex, b: NodeIndex) -> bool {
        let pair = if a <= b { (a, b) } else { (b, a) };
        self.adjacency.contains(&pair)
    }
}

// Iteration
impl<E, V> Pseudograph<E, V> {
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.node_data.len()).map(NodeIndex)
    }

    pub fn edge_indices(&self) -> impl Iterator<Item = EdgeIndex> {
        (0..self.edges.len()).map(EdgeIndex)
    }

    /// Darts attached to `node`, in insertion order.
    pub fn incidences(&self, node: NodeIndex) -> impl Iterator<Item = Dart> + '_ {
        self.incidence[node.0].iter().copied()
    }

    /// Neighbors of `node` with multiplicity: a parallel edge contributes its
    /// endpoint once per copy and a self-loop contributes `node` twice.
    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.incidences(node).map(|dart| self.opposite(dart))
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = (EdgeIndex, (NodeIndex, NodeIndex), &E)> + '_ {
        self.edges.iter().enumerate().map(|(k, record)| {
            (
                EdgeIndex(k),
                (
                    self.dart_anchor[record.source.0],
                    self.dart_anchor[record.sink.0],
                ),
                &record.data,
            )
        })
    }
}

impl Pseudograph {
    /// Unit-payload undirected graph from an edge list over nodes `0..n_nodes`.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint in `pairs` is `n_nodes` or larger.
    pub fn from_pairs(n_nodes: usize, pairs: &[(usize, usize)]) -> Self {
        let mut builder = builder::PseudographBuilder::new();
        let nodes: Vec<NodeIndex> = (0..n_nodes).map(|_| builder.add_node(())).collect();
        for &(a, b) in pairs {
            builder.add_edge(nodes[a], nodes[b], (), false);
        }
        builder.build()
    }
}

impl<E, V> Index<NodeIndex> for Pseudograph<E, V> {
    type Output = V;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.node_data[index.0]
    }
}

impl<E, V> IndexMut<NodeIndex> for Pseudograph<E, V> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        &mut self.node_data[index.0]
    }
}

impl<E, V> Index<EdgeIndex> for Pseudograph<E, V> {
    type Output = E;

    fn index(&self, index: EdgeIndex) -> &Self::Output {
        &self.edges[index.0].data
    }
}

impl<E, V> IndexMut<EdgeIndex> for Pseudograph<E, V> {
    fn index_mut(&mut self, index: EdgeIndex) -> &mut Self::Output {
        &mut self.edges[index.0].data
    }
}

impl<E, V> Index<Dart> for Pseudograph<E, V> {
    type Output = NodeIndex;

    fn index(&self, index: Dart) -> &Self::Output {
        &self.dart_anchor[index.0]
    }
}

impl<E, V> std::fmt::Display for Pseudograph<E, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let edges = self
            .edges
            .iter()
            .map(|record| {
                let a = self.dart_anchor[record.source.0];
                let b = self.dart_anchor[record.sink.0];
                match record.orientation {
                    Orientation::Undirected => format!("{a}--{b}"),
                    Orientation::Default => format!("{a}->{b}"),
                    Orientation::Reversed => format!("{a}<-{b}"),
                }
            })
            .join(", ");
        write!(f, "{} nodes; {}", self.n_nodes(), edges)
    }
}

#[cfg(test)]
pub(crate) mod test_graphs;
