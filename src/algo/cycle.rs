//! Find a [cycle] in a digraph.
//!
//! A digraph is acyclic when no vertex can reach itself by following edges.
//! A self-loop is a cycle of length one.
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use mapgraph::{algo::{is_acyclic, Cycle}, core::DigraphMut, storage::MapDigraph};
//!
//! let mut graph = MapDigraph::new();
//!
//! graph.put_edge("a", "b", ());
//! graph.put_edge("b", "c", ());
//! graph.put_edge("c", "d", ());
//!
//! assert!(is_acyclic(&graph));
//!
//! graph.put_edge("d", "b", ());
//!
//! let cycle = Cycle::on(&graph).run().unwrap();
//! assert_eq!(cycle.collect(&graph).len(), 3);
//! ```

use std::fmt;

use crate::core::DigraphRef;

use self::{bfs::bfs_collect, dfs::dfs_find};

mod bfs;
mod builder;
mod dfs;

pub use builder::CycleBuilder;

/// Cycle in a digraph, identified by one of its edges.
///
/// See [module](self) documentation for more details and example.
pub struct Cycle<'a, V> {
    /// Source of an edge that is part of the cycle.
    pub from: &'a V,
    /// Target of the same edge.
    pub to: &'a V,
}

impl<V: fmt::Debug> fmt::Debug for Cycle<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cycle")
            .field("from", self.from)
            .field("to", self.to)
            .finish()
    }
}

impl<V> Clone for Cycle<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Cycle<'_, V> {}

impl<V: PartialEq> PartialEq for Cycle<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl<V: Eq> Eq for Cycle<'_, V> {}

impl<'a, V> Cycle<'a, V> {
    /// Collects the vertices of the whole cycle, starting at `to` and ending
    /// at `from`.
    ///
    /// Returns an empty vector if the edge is not part of a cycle in `graph`.
    pub fn collect<E, G>(&self, graph: &'a G) -> Vec<&'a V>
    where
        G: DigraphRef<V, E> + ?Sized,
    {
        bfs_collect(graph, self.from, self.to)
    }
}

/// Returns `true` if the digraph contains no cycle.
pub fn is_acyclic<V, E, G>(graph: &G) -> bool
where
    G: DigraphRef<V, E> + ?Sized,
{
    dfs_find(graph).is_none()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        core::DigraphMut,
        infra::proptest::digraph,
        storage::MapDigraph,
    };

    fn from_edges(edges: &[(u32, u32)]) -> MapDigraph<u32, ()> {
        let mut graph = MapDigraph::new();
        for &(source, target) in edges {
            graph.put_edge(source, target, ());
        }
        graph
    }

    #[test]
    fn empty() {
        assert!(is_acyclic(&MapDigraph::<u32, ()>::new()));
    }

    #[test]
    fn path() {
        let graph = from_edges(&[(1, 2), (2, 3), (3, 4)]);
        assert!(is_acyclic(&graph));
        assert!(graph.is_acyclic());
    }

    #[test]
    fn diamond() {
        let graph = from_edges(&[(1, 2), (1, 3), (2, 4), (3, 4)]);
        assert!(is_acyclic(&graph));
    }

    #[test]
    fn self_loop() {
        let mut graph = from_edges(&[(1, 2)]);
        graph.put_edge(2, 2, ());

        let cycle = Cycle::on(&graph).run().unwrap();
        assert_eq!(cycle, Cycle { from: &2, to: &2 });
        assert_eq!(cycle.collect(&graph), vec![&2]);
    }

    #[test]
    fn two_cycle() {
        let graph = from_edges(&[(1, 2), (2, 1)]);
        assert!(!is_acyclic(&graph));
    }

    #[test]
    fn cycle_in_second_component() {
        let graph = from_edges(&[(1, 2), (3, 4), (4, 5), (5, 3)]);

        let cycle = Cycle::on(&graph).run().unwrap();
        let mut collected = cycle.collect(&graph);
        collected.sort_unstable();

        assert_eq!(collected, vec![&3, &4, &5]);
    }

    #[test]
    fn collect_ends_with_witness_edge() {
        let graph = from_edges(&[(1, 2), (2, 3), (3, 4), (4, 2)]);

        let cycle = Cycle::on(&graph).run().unwrap();
        let collected = cycle.collect(&graph);

        assert_eq!(collected.first(), Some(&cycle.to));
        assert_eq!(collected.last(), Some(&cycle.from));
        assert_eq!(collected.len(), 3);
    }

    #[test]
    fn collect_on_other_graph() {
        let cyclic = from_edges(&[(1, 2), (2, 1)]);
        let acyclic = from_edges(&[(1, 2)]);

        let cycle = Cycle::on(&cyclic).run().unwrap();
        assert_eq!(cycle, Cycle { from: &2, to: &1 });

        assert!(cycle.collect(&acyclic).is_empty());
        assert!(Cycle { from: &3, to: &3 }.collect(&acyclic).is_empty());
    }

    #[test]
    fn removing_vertex_breaks_cycle() {
        let mut graph = from_edges(&[(1, 2), (2, 3), (3, 1)]);
        assert!(!graph.is_acyclic());

        graph.remove_vertex(&2);
        assert!(graph.is_acyclic());
    }

    #[test]
    fn long_path_does_not_overflow() {
        let mut graph = MapDigraph::new();
        for i in 0..100_000u32 {
            graph.put_edge(i, i + 1, ());
        }

        assert!(is_acyclic(&graph));

        graph.put_edge(100_000, 0, ());
        assert!(!is_acyclic(&graph));
    }

    #[test]
    fn float_vertices() {
        let mut graph = MapDigraph::<f64, (), _>::sorted_by(f64::total_cmp);
        graph.put_edge(0.5, 1.5, ());
        graph.put_edge(1.5, 2.5, ());
        graph.put_edge(0.5, 2.5, ());
        assert!(is_acyclic(&graph));

        graph.put_edge(2.5, 0.5, ());
        let cycle = Cycle::on(&graph).run().unwrap();
        assert_eq!(cycle, Cycle { from: &2.5, to: &0.5 });
        assert_eq!(cycle.collect(&graph), vec![&0.5, &2.5]);
    }

    #[test]
    fn comparator_identifies_vertices() {
        let case_insensitive = |a: &String, b: &String| {
            let lower = |s: &String| s.bytes().map(|c| c.to_ascii_lowercase()).collect::<Vec<_>>();
            lower(a).cmp(&lower(b))
        };
        let mut graph = MapDigraph::<String, (), _>::sorted_by(case_insensitive);

        graph.put_edge("A".to_string(), "b".to_string(), ());
        graph.put_edge("B".to_string(), "c".to_string(), ());
        assert!(is_acyclic(&graph));

        graph.put_edge("C".to_string(), "a".to_string(), ());
        assert_eq!(graph.vertex_count(), 3);
        assert!(!is_acyclic(&graph));

        let cycle = Cycle::on(&graph).run().unwrap();
        assert_eq!(cycle.collect(&graph).len(), 3);
    }

    proptest! {
        #[test]
        fn acyclic_strategy(graph in digraph(0..32u32, Just(())).acyclic()) {
            prop_assert!(is_acyclic(&graph));
        }

        #[test]
        fn witness_is_edge_on_cycle(graph in digraph(0..12u32, Just(())).allow_loops()) {
            if let Some(cycle) = Cycle::on(&graph).run() {
                prop_assert!(graph.contains_edge(cycle.from, cycle.to));

                let collected = cycle.collect(&graph);
                prop_assert!(!collected.is_empty());
                for pair in collected.windows(2) {
                    prop_assert!(graph.contains_edge(pair[0], pair[1]));
                }
            }
        }
    }
}
