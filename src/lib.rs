//! # Simplicial
//!
//! Simplicial is a Rust library for recognizing chordal graphs and for
//! exploiting the structure that chordality provides. It represents
//! undirected, directed and mixed pseudographs through a half-edge
//! involution that tolerates self-loops and parallel edges, runs maximum
//! cardinality search to produce candidate elimination orders, and
//! verifies them to settle chordality with a certificate either way: a
//! perfect elimination order when the graph is chordal, a chordless cycle
//! of length at least four when it is not.
//!
//! On top of the verdict, the elimination order powers exact polynomial
//! solutions to problems that are NP-hard in general, such as the maximum
//! independent set.

pub mod chordality;
pub mod independent_set;
pub mod pseudograph;
pub mod traverse;
