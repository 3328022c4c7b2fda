use crate::{
    common::trace,
    core::{DigraphFactory, DigraphMut, DigraphRef},
};

/// Returns the subgraph of `graph` induced by the given vertices.
///
/// The result contains the given vertices that exist in `graph`, in the given
/// order, and every edge of `graph` between two of them. Vertices that do not
/// exist in `graph` are ignored.
///
/// # Examples
///
/// ```
/// use mapgraph::{algo::subgraph, core::{DigraphMut, DigraphRef}, storage::MapDigraph};
///
/// let mut graph = MapDigraph::new();
/// graph.put_edge(1, 2, ());
/// graph.put_edge(2, 3, ());
/// graph.put_edge(3, 1, ());
///
/// let sub: MapDigraph<_, _> = subgraph(&graph, &[3, 1, 7], &MapDigraph::new);
///
/// assert_eq!(sub.vertices().copied().collect::<Vec<_>>(), vec![3, 1]);
/// assert!(sub.contains_edge(&3, &1));
/// assert_eq!(sub.edge_count(), 1);
/// ```
pub fn subgraph<'v, V, E, G, H, F, I>(graph: &G, vertices: I, factory: &F) -> H
where
    G: DigraphRef<V, E> + ?Sized,
    H: DigraphMut<V, E>,
    F: DigraphFactory<H> + ?Sized,
    I: IntoIterator<Item = &'v V>,
    V: Clone + 'v,
    E: Clone,
{
    let mut subgraph = factory.create();

    for vertex in vertices {
        if graph.contains_vertex(vertex) {
            subgraph.add_vertex(vertex.clone());
        }
    }

    for source in graph.vertices() {
        if !subgraph.contains_vertex(source) {
            continue;
        }

        for target in graph.targets(source) {
            if !subgraph.contains_vertex(target) {
                continue;
            }

            if let Some(edge) = graph.edge(source, target) {
                subgraph.put_edge(source.clone(), target.clone(), edge.clone());
            }
        }
    }

    trace!(
        vertices = subgraph.vertex_count(),
        edges = subgraph.edge_count(),
        "induced subgraph"
    );

    subgraph
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

    fn example() -> MapDigraph<u32, &'static str> {
        let mut graph = MapDigraph::new();
        graph.put_edge(1, 2, "a");
        graph.put_edge(2, 3, "b");
        graph.put_edge(3, 1, "c");
        graph.put_edge(3, 3, "d");
        graph.put_edge(4, 1, "e");
        graph
    }

    #[test]
    fn induced_edges() {
        let graph = example();
        let sub = graph.subgraph(&[3, 1]);

        assert_eq!(sub.vertices().copied().collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(sub.edge_count(), 2);
        assert_eq!(sub.edge(&3, &1), Some(&"c"));
        assert_eq!(sub.edge(&3, &3), Some(&"d"));
        check_consistency(&sub).unwrap();
    }

    #[test]
    fn unknown_vertices_ignored() {
        let graph = example();
        let sub = graph.subgraph(&[7, 8]);

        assert_eq!(sub.vertex_count(), 0);
        assert_eq!(sub.edge_count(), 0);
    }

    #[test]
    fn empty_vertex_set() {
        let graph = example();
        let sub = graph.subgraph(&[] as &[u32]);

        assert_eq!(sub.vertex_count(), 0);
        assert_eq!(sub.edge_count(), 0);
        assert_eq!(sub.vertices().count(), 0);
        check_consistency(&sub).unwrap();

        let empty = MapDigraph::<u32, &str>::new();
        assert_eq!(empty.subgraph(&[1, 2]).vertex_count(), 0);
    }

    #[test]
    fn isolated_vertex_kept() {
        let graph = example();
        let sub = graph.subgraph(&[2, 4]);

        assert_eq!(sub.vertex_count(), 2);
        assert_eq!(sub.edge_count(), 0);
    }

    #[test]
    fn source_untouched() {
        let graph = example();
        let _ = graph.subgraph(&[1]);

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 5);
    }

    proptest! {
        #[test]
        fn all_vertices_is_equal(graph in digraph(0..16u32, any::<i8>())) {
            let vertices = graph.vertices().copied().collect::<Vec<_>>();
            let sub = graph.subgraph(&vertices);

            prop_assert!(structurally_eq(&graph, &sub));
        }

        #[test]
        fn edges_are_induced(
            graph in digraph(0..16u32, any::<i8>()),
            selected in prop::collection::vec(0..16u32, 0..16),
        ) {
            let sub = graph.subgraph(&selected);

            for (source, target, edge) in graph.edges() {
                let inside = selected.contains(source) && selected.contains(target);
                prop_assert_eq!(sub.edge(source, target), inside.then_some(edge));
            }
            for (source, target, _) in sub.edges() {
                prop_assert!(graph.contains_edge(source, target));
            }
        }
    }
}
