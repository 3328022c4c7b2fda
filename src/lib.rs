//! Mutable directed graphs with arbitrary vertex and edge payloads.
//!
//! The central type is [`MapDigraph`](storage::MapDigraph), an adjacency-map
//! digraph: every vertex maps to the map of its out-neighbors and the payloads
//! of the corresponding edges. There is at most one edge per ordered pair of
//! vertices, self-loops are allowed and vertices are added implicitly when
//! they appear in an edge.
//!
//! The backing maps are chosen per instance through
//! [strategies](storage::order): insertion order or an order given by a
//! [comparator](storage::order::Comparator).
//!
//! Everything that is not storage-specific is written against the traits in
//! [`core`], so the [algorithms](algo) and the [read-only
//! adapter](adapt::ReadOnly) work with any implementation.
//!
//! # Examples
//!
//! ```
//! use mapgraph::{core::{DigraphMut, DigraphRef}, storage::MapDigraph};
//!
//! let mut graph = MapDigraph::new();
//!
//! graph.put_edge("a", "b", 1);
//! graph.put_edge("b", "c", 2);
//! graph.add_vertex("d");
//!
//! assert_eq!(graph.vertex_count(), 4);
//! assert_eq!(graph.edge_count(), 2);
//! assert!(graph.is_acyclic());
//!
//! graph.remove_vertex(&"b");
//!
//! assert_eq!(graph.edge_count(), 0);
//! assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec!["a", "c", "d"]);
//! ```

pub mod adapt;
pub mod algo;
mod common;
pub mod core;
pub mod infra;
pub mod storage;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        adapt::Freeze,
        core::{Cursor, DeriveDigraph, DigraphFactory, DigraphMut, DigraphRef},
    };
}
