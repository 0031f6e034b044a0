use std::fmt::Display;

/// One half of an edge.
///
/// Every edge is split into two darts, one anchored at each endpoint (a
/// self-loop anchors both at the same node). Darts are indexed densely in
/// order of edge insertion, so the darts of edge `e` are `2e` and `2e + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dart(pub usize);

impl Display for Dart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction attached to an edge at construction.
///
/// `Default` points from the first endpoint given to the builder towards the
/// second, `Reversed` the other way, `Undirected` carries no direction. The
/// chordality machinery only ever accepts graphs whose edges are all
/// `Undirected`; the other two variants exist so that mixed input can be
/// recognised and rejected instead of silently reinterpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Default,
    Reversed,
    Undirected,
}

impl Orientation {
    pub fn reverse(self) -> Orientation {
        match self {
            Orientation::Default => Orientation::Reversed,
            Orientation::Reversed => Orientation::Default,
            Orientation::Undirected => Orientation::Undirected,
        }
    }

    pub fn is_undirected(self) -> bool {
        matches!(self, Orientation::Undirected)
    }
}

impl From<bool> for Orientation {
    fn from(value: bool) -> Self {
        if value {
            Orientation::Default
        } else {
            Orientation::Undirected
        }
    }
}

/// Fixed-point-free pairing of darts.
///
/// `inv[d]` is the dart on the other end of `d`'s edge. Applying it twice is
/// the identity, which is the only structural invariant the type maintains.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Involution {
    inv: Vec<Dart>,
}

impl Involution {
    pub fn new() -> Self {
        Involution { inv: Vec::new() }
    }

    pub fn with_capacity(edges: usize) -> Self {
        Involution {
            inv: Vec::with_capacity(2 * edges),
        }
    }

    /// Appends a fresh pair of darts mapped to each other.
    ///
    /// Returns `(source, sink)` in insertion order.
    pub fn add_pair(&mut self) -> (Dart, Dart) {
        let source = Dart(self.inv.len());
        let sink = Dart(self.inv.len() + 1);
        self.inv.push(sink);
        self.inv.push(source);
        (source, sink)
    }

    /// The dart paired with `dart`.
    pub fn inv(&self, dart: Dart) -> Dart {
        self.inv[dart.0]
    }

    pub fn len(&self) -> usize {
        self.inv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inv.is_empty()
    }

    pub fn iter_darts(&self) -> impl Iterator<Item = Dart> {
        (0..self.inv.len()).map(Dart)
    }

    /// True when the map is involutive and has no fixed points.
    pub fn is_consistent(&self) -> bool {
        self.iter_darts()
            .all(|d| self.inv(d) != d && self.inv(self.inv(d)) == d)
    }
}
