use crate::{
    common::trace,
    core::{DigraphFactory, DigraphMut, DigraphRef},
};

/// Returns a digraph with the same vertices and every edge flipped.
///
/// The vertices are added to the result in the order of `graph` before any
/// edge, so that isolated vertices keep their relative position. The payload
/// of the edge `(u, v)` becomes the payload of `(v, u)`.
///
/// # Examples
///
/// ```
/// use mapgraph::{algo::reverse, core::{DigraphMut, DigraphRef}, storage::MapDigraph};
///
/// let mut graph = MapDigraph::new();
/// graph.put_edge("a", "b", 1);
/// graph.put_edge("a", "c", 2);
///
/// let reversed: MapDigraph<_, _> = reverse(&graph, &MapDigraph::new);
///
/// assert_eq!(reversed.edge(&"c", &"a"), Some(&2));
/// assert_eq!(reversed.out_degree(&"a"), 0);
/// ```
pub fn reverse<V, E, G, H, F>(graph: &G, factory: &F) -> H
where
    G: DigraphRef<V, E> + ?Sized,
    H: DigraphMut<V, E>,
    F: DigraphFactory<H> + ?Sized,
    V: Clone,
    E: Clone,
{
    let mut reversed = factory.create();

    for vertex in graph.vertices() {
        reversed.add_vertex(vertex.clone());
    }

    for (source, target, edge) in graph.edges() {
        reversed.put_edge(target.clone(), source.clone(), edge.clone());
    }

    trace!(
        vertices = reversed.vertex_count(),
        edges = reversed.edge_count(),
        "reversed digraph"
    );

    reversed
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        core::{structurally_eq, DeriveDigraph},
        infra::{proptest::digraph, testing::check_consistency},
        storage::MapDigraph,
    };

    #[test]
    fn flips_edges() {
        let mut graph = MapDigraph::new();
        graph.put_edge(1, 2, 'a');
        graph.put_edge(2, 3, 'b');
        graph.put_edge(3, 3, 'c');
        graph.add_vertex(4);

        let reversed: MapDigraph<_, _> = reverse(&graph, &MapDigraph::new);

        assert_eq!(reversed.vertices().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(reversed.edge_count(), 3);
        assert_eq!(reversed.edge(&2, &1), Some(&'a'));
        assert_eq!(reversed.edge(&3, &2), Some(&'b'));
        assert_eq!(reversed.edge(&3, &3), Some(&'c'));
        assert_eq!(reversed.edge(&1, &2), None);
        check_consistency(&reversed).unwrap();
    }

    #[test]
    fn into_other_strategy() {
        let mut graph = MapDigraph::new();
        graph.put_edge(3, 1, ());
        graph.put_edge(2, 1, ());

        let reversed: MapDigraph<_, _, _> = reverse(&graph, &MapDigraph::sorted);

        assert_eq!(reversed.vertices().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(reversed.targets(&1).copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn empty() {
        let graph = MapDigraph::<u32, ()>::new();
        let reversed = graph.reverse();

        assert_eq!(reversed.vertex_count(), 0);
        assert_eq!(reversed.edge_count(), 0);
    }

    proptest! {
        #[test]
        fn reverse_twice_is_identity(graph in digraph(0..16u32, any::<i8>())) {
            let twice = graph.reverse().reverse();

            prop_assert!(structurally_eq(&graph, &twice));
            prop_assert_eq!(
                graph.vertices().collect::<Vec<_>>(),
                twice.vertices().collect::<Vec<_>>()
            );
        }

        #[test]
        fn reverse_preserves_counts(graph in digraph(0..16u32, any::<i8>())) {
            let reversed = graph.reverse();

            prop_assert_eq!(reversed.vertex_count(), graph.vertex_count());
            prop_assert_eq!(reversed.edge_count(), graph.edge_count());
            for (source, target, edge) in graph.edges() {
                prop_assert_eq!(reversed.edge(target, source), Some(edge));
            }
        }
    }
}
