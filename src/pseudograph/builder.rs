use ahash::AHashSet;

use super::{
    involution::{Involution, Orientation},
    Dart, EdgeRecord, GraphKind, NodeIndex, Pseudograph,
};

pub struct PseudographNodeBuilder<V> {
    data: V,
    darts: Vec<Dart>,
}

/// Accumulates nodes and edges, then freezes them into a [`Pseudograph`].
///
/// Indexing with a `NodeIndex` that was not returned by [`add_node`] panics.
///
/// [`add_node`]: PseudographBuilder::add_node
pub struct PseudographBuilder<E = (), V = ()> {
    nodes: Vec<PseudographNodeBuilder<V>>,
    involution: Involution,
    edges: Vec<(Orientation, E)>,
}

impl<E, V> PseudographBuilder<E, V> {
    pub fn new() -> Self {
        PseudographBuilder {
            nodes: Vec::new(),
            involution: Involution::new(),
            edges: Vec::new(),
        }
    }

    pub fn add_node(&mut self, data: V) -> NodeIndex {
        let index = NodeIndex(self.nodes.len());
        self.nodes.push(PseudographNodeBuilder {
            data,
            darts: Vec::new(),
        });
        index
    }

    /// Adds an edge between `a` and `b`; `a == b` makes a self-loop, and
    /// repeated calls with the same endpoints make parallel edges.
    pub fn add_edge(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
        data: E,
        directed: impl Into<Orientation>,
    ) {
        let (source, sink) = self.involution.add_pair();
        self.nodes[a.0].darts.push(source);
        self.nodes[b.0].darts.push(sink);
        self.edges.push((directed.into(), data));
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn build(self) -> Pseudograph<E, V> {
        self.into()
    }
}

impl<E, V> Default for PseudographBuilder<E, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, V> From<PseudographBuilder<E, V>> for Pseudograph<E, V> {
    fn from(builder: PseudographBuilder<E, V>) -> Self {
        let n_darts = builder.involution.len();

        let mut dart_anchor = vec![NodeIndex(0); n_darts];
        let mut incidence = Vec::with_capacity(builder.nodes.len());
        let mut node_data = Vec::with_capacity(builder.nodes.len());
        for (i, node) in builder.nodes.into_iter().enumerate() {
            for &dart in &node.darts {
                dart_anchor[dart.0] = NodeIndex(i);
            }
            incidence.push(node.darts);
            node_data.push(node.data);
        }

        let mut edges = Vec::with_capacity(builder.edges.len());
        let mut adjacency = AHashSet::with_capacity(builder.edges.len());
        let mut any_directed = false;
        let mut any_undirected = false;
        for (k, (orientation, data)) in builder.edges.into_iter().enumerate() {
            let source = Dart(2 * k);
            let sink = builder.involution.inv(source);
            let a = dart_anchor[source.0];
            let b = dart_anchor[sink.0];
            adjacency.insert(if a <= b { (a, b) } else { (b, a) });
            if orientation.is_undirected() {
                any_undirected = true;
            } else {
                any_directed = true;
            }
            edges.push(EdgeRecord {
                source,
                sink,
                orientation,
                data,
            });
        }

        let kind = match (any_directed, any_undirected) {
            (false, _) => GraphKind::Undirected,
            (true, false) => GraphKind::Directed,
            (true, true) => GraphKind::Mixed,
        };

        Pseudograph {
            involution: builder.involution,
            dart_anchor,
            incidence,
            node_data,
            edges,
            adjacency,
            kind,
        }
    }
}
