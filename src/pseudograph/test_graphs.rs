//! Fixture graphs and reference oracles shared by the unit tests.

use ahash::AHashSet;
use itertools::Itertools;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use super::Pseudograph;

/// Two triangles glued along the edge 1-2.
pub(crate) fn diamond() -> Pseudograph {
    Pseudograph::from_pairs(4, &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)])
}

pub(crate) fn two_triangles() -> Pseudograph {
    Pseudograph::from_pairs(6, &[(0, 1), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5)])
}

/// Ring of triangles around vertex chains, chordal, with one parallel edge
/// and a pendant vertex.
pub(crate) fn ten_vertex_chordal() -> Pseudograph {
    Pseudograph::from_pairs(
        10,
        &[
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 3),
            (2, 4),
            (3, 4),
            (4, 5),
            (4, 6),
            (5, 6),
            (6, 7),
            (6, 8),
            (7, 8),
            (8, 0),
            (8, 0),
            (9, 0),
            (2, 6),
            (0, 6),
        ],
    )
}

/// An octagon braced into two diagonal squares: an inner 4-cycle, spokes to
/// an outer ring, and the two long diagonals. Not chordal.
pub(crate) fn braced_octagon() -> Pseudograph {
    Pseudograph::from_pairs(
        8,
        &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (0, 4),
            (4, 1),
            (1, 5),
            (5, 2),
            (2, 6),
            (6, 3),
            (3, 7),
            (7, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            (4, 6),
            (5, 7),
        ],
    )
}

pub(crate) fn square() -> Pseudograph {
    Pseudograph::from_pairs(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])
}

pub(crate) fn complete(n: usize) -> Pseudograph {
    let mut pairs = Vec::new();
    for i in 0..n {
        for j in 0..i {
            pairs.push((j, i));
        }
    }
    Pseudograph::from_pairs(n, &pairs)
}

pub(crate) fn path(n: usize) -> Pseudograph {
    let pairs: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    Pseudograph::from_pairs(n, &pairs)
}

pub(crate) fn long_cycle(n: usize) -> Pseudograph {
    let pairs: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    Pseudograph::from_pairs(n, &pairs)
}

/// A triangle dressed up with a self-loop and parallel edges. Chordal.
pub(crate) fn chordal_pseudograph() -> Pseudograph {
    Pseudograph::from_pairs(3, &[(0, 0), (0, 1), (0, 1), (0, 2), (2, 0), (1, 2)])
}

/// Loops and parallel edges around a chordless 4-cycle 1-2-3-4.
pub(crate) fn nonchordal_pseudograph() -> Pseudograph {
    Pseudograph::from_pairs(
        5,
        &[
            (0, 0),
            (0, 1),
            (1, 0),
            (1, 1),
            (2, 2),
            (3, 3),
            (1, 2),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 1),
        ],
    )
}

/// Chordal chain of overlapping cliques on ten vertices.
pub(crate) fn chain_of_cliques() -> Pseudograph {
    Pseudograph::from_pairs(
        10,
        &[
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 2),
            (2, 3),
            (2, 4),
            (2, 5),
            (3, 4),
            (4, 5),
            (5, 6),
            (5, 7),
            (5, 8),
            (6, 7),
            (7, 8),
            (7, 9),
            (8, 9),
        ],
    )
}

/// Larger chordal graph on twelve vertices with one parallel edge.
pub(crate) fn wide_chordal() -> Pseudograph {
    Pseudograph::from_pairs(
        12,
        &[
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 2),
            (2, 3),
            (2, 3),
            (2, 4),
            (2, 5),
            (2, 6),
            (3, 4),
            (4, 5),
            (4, 6),
            (5, 6),
            (5, 7),
            (6, 8),
            (6, 9),
            (6, 10),
            (8, 9),
            (8, 10),
            (8, 11),
            (9, 10),
            (10, 11),
        ],
    )
}

/// Strip of triangles on six vertices. Chordal.
pub(crate) fn triangle_strip() -> Pseudograph {
    Pseudograph::from_pairs(
        6,
        &[
            (0, 1),
            (0, 2),
            (1, 2),
            (1, 3),
            (2, 3),
            (2, 4),
            (3, 4),
            (3, 5),
            (4, 5),
        ],
    )
}

/// Triangles sharing vertices so that 1-3-5-7-9 closes a chordless 5-cycle.
pub(crate) fn chordless_five_ring() -> Pseudograph {
    Pseudograph::from_pairs(
        10,
        &[
            (0, 1),
            (1, 2),
            (1, 3),
            (2, 3),
            (3, 4),
            (3, 5),
            (4, 5),
            (5, 6),
            (5, 7),
            (6, 7),
            (7, 8),
            (7, 9),
            (8, 9),
            (9, 0),
            (9, 1),
        ],
    )
}

/// Chordal chain 0-1-2-3-4 buried under self-loops and parallel edges.
pub(crate) fn looped_chain() -> Pseudograph {
    Pseudograph::from_pairs(
        5,
        &[
            (0, 0),
            (0, 1),
            (0, 1),
            (1, 2),
            (1, 2),
            (0, 2),
            (2, 2),
            (2, 3),
            (2, 3),
            (3, 3),
            (3, 3),
            (3, 4),
            (3, 4),
        ],
    )
}

/// Intersection graph of `n` random intervals. Always chordal.
pub(crate) fn random_interval_graph(n: usize, seed: u64) -> Pseudograph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let intervals: Vec<(u32, u32)> = (0..n)
        .map(|_| {
            let a = rng.gen_range(0..1000u32);
            let b = rng.gen_range(0..1000u32);
            (a.min(b), a.max(b))
        })
        .collect();
    let mut pairs = Vec::new();
    for i in 0..n {
        for j in 0..i {
            let (lo_i, hi_i) = intervals[i];
            let (lo_j, hi_j) = intervals[j];
            if lo_i.max(lo_j) <= hi_i.min(hi_j) {
                pairs.push((j, i));
            }
        }
    }
    Pseudograph::from_pairs(n, &pairs)
}

/// Every simple graph on `n` labeled nodes, one per subset of the possible
/// edges. There are 2^(n(n-1)/2) of them, hence the tiny cap.
pub(crate) fn all_simple_graphs(n: usize) -> impl Iterator<Item = Pseudograph> {
    assert!(n <= 6, "exhaustive enumeration only meant for tiny graphs");
    let mut pairs = Vec::new();
    for i in 0..n {
        for j in 0..i {
            pairs.push((j, i));
        }
    }
    pairs
        .into_iter()
        .powerset()
        .map(move |edges| Pseudograph::from_pairs(n, &edges))
}

/// Erdos-Renyi style graph, for cross-checking against the oracles.
pub(crate) fn random_graph(n: usize, edge_prob: f64, seed: u64) -> Pseudograph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut pairs = Vec::new();
    for i in 0..n {
        for j in 0..i {
            if rng.gen_bool(edge_prob) {
                pairs.push((j, i));
            }
        }
    }
    Pseudograph::from_pairs(n, &pairs)
}

/// Deduplicated neighbor sets, self excluded. Shared by the oracles below.
pub(crate) fn simple_neighbor_sets(graph: &Pseudograph) -> Vec<AHashSet<usize>> {
    let mut sets = vec![AHashSet::new(); graph.n_nodes()];
    for node in graph.node_indices() {
        for other in graph.neighbors(node) {
            if other != node {
                sets[node.0].insert(other.0);
            }
        }
    }
    sets
}

/// Chordality oracle independent of maximum cardinality search: repeatedly
/// strip a simplicial vertex; the graph is chordal iff this empties it.
pub(crate) fn is_chordal_by_elimination(graph: &Pseudograph) -> bool {
    let n = graph.n_nodes();
    let mut neighbors = simple_neighbor_sets(graph);
    let mut alive = vec![true; n];

    for _ in 0..n {
        let mut simplicial = None;
        'candidates: for v in 0..n {
            if !alive[v] {
                continue;
            }
            let nb: Vec<usize> = neighbors[v].iter().copied().collect();
            for (i, &a) in nb.iter().enumerate() {
                for &b in &nb[..i] {
                    if !neighbors[a].contains(&b) {
                        continue 'candidates;
                    }
                }
            }
            simplicial = Some(v);
            break;
        }
        match simplicial {
            None => return false,
            Some(v) => {
                alive[v] = false;
                let nb: Vec<usize> = neighbors[v].iter().copied().collect();
                for u in nb {
                    neighbors[u].remove(&v);
                }
                neighbors[v].clear();
            }
        }
    }
    true
}

/// Exhaustive maximum independent set size; self-loops do not disqualify a
/// vertex, mirroring the greedy's convention.
pub(crate) fn brute_force_mis_size(graph: &Pseudograph) -> usize {
    let n = graph.n_nodes();
    assert!(n <= 20, "exhaustive search only meant for small graphs");
    let neighbors = simple_neighbor_sets(graph);
    let masks: Vec<u64> = neighbors
        .iter()
        .map(|set| set.iter().fold(0u64, |m, &u| m | (1 << u)))
        .collect();

    let mut best = 0;
    for subset in 0u64..(1 << n) {
        let mut independent = true;
        for v in 0..n {
            if subset & (1 << v) != 0 && masks[v] & subset != 0 {
                independent = false;
                break;
            }
        }
        if independent {
            best = best.max(subset.count_ones() as usize);
        }
    }
    best
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn elimination_oracle_agrees_on_the_fixtures() {
        assert!(is_chordal_by_elimination(&diamond()));
        assert!(is_chordal_by_elimination(&two_triangles()));
        assert!(is_chordal_by_elimination(&ten_vertex_chordal()));
        assert!(is_chordal_by_elimination(&chordal_pseudograph()));
        assert!(is_chordal_by_elimination(&chain_of_cliques()));
        assert!(is_chordal_by_elimination(&wide_chordal()));
        assert!(is_chordal_by_elimination(&triangle_strip()));
        assert!(is_chordal_by_elimination(&complete(5)));
        assert!(is_chordal_by_elimination(&path(7)));
        assert!(is_chordal_by_elimination(&Pseudograph::from_pairs(0, &[])));

        assert!(!is_chordal_by_elimination(&square()));
        assert!(!is_chordal_by_elimination(&braced_octagon()));
        assert!(!is_chordal_by_elimination(&nonchordal_pseudograph()));
        assert!(!is_chordal_by_elimination(&chordless_five_ring()));
        assert!(!is_chordal_by_elimination(&long_cycle(9)));
    }

    #[test]
    fn brute_force_sizes_on_known_graphs() {
        assert_eq!(brute_force_mis_size(&complete(4)), 1);
        assert_eq!(brute_force_mis_size(&path(4)), 2);
        assert_eq!(brute_force_mis_size(&square()), 2);
        assert_eq!(brute_force_mis_size(&Pseudograph::from_pairs(3, &[])), 3);
        assert_eq!(brute_force_mis_size(&looped_chain()), 2);
    }

    #[test]
    fn interval_graphs_are_chordal() {
        for seed in 0..20 {
            let graph = random_interval_graph(9, seed);
            assert!(
                is_chordal_by_elimination(&graph),
                "interval graph from seed {seed} must be chordal"
            );
        }
    }
}
