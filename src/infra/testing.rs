use thiserror::Error;

use crate::core::DigraphRef;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyCheckError {
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("vertex number {0} (zero-based) of vertices iterator is not contained")]
    VertexNotContained(usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("sum of out-degrees ({0}) is not equal to edge count ({1})")]
    OutDegreeSumMismatch(usize, usize),
    #[error("targets iterator count ({0}) of vertex number {2} (zero-based) is not equal to its out-degree ({1})")]
    TargetsOutDegreeMismatch(usize, usize, usize),
    #[error("target of an edge from vertex number {0} (zero-based) is not contained")]
    DanglingEdge(usize),
    #[error("edge from vertex number {0} (zero-based) has no payload")]
    MissingPayload(usize),
}

/// Checks that the counts, the iterators and the lookups of the digraph agree
/// with each other.
pub fn check_consistency<V, E, G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    G: DigraphRef<V, E> + ?Sized,
{
    fn cmp<F>(actual: usize, expected: usize, error: F) -> Result<(), ConsistencyCheckError>
    where
        F: FnOnce(usize, usize) -> ConsistencyCheckError,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();

    cmp(
        graph.vertices().count(),
        vertex_count,
        ConsistencyCheckError::VerticesVertexCountMismatch,
    )?;

    let mut out_deg_sum = 0;

    for (i, vertex) in graph.vertices().enumerate() {
        if !graph.contains_vertex(vertex) {
            return Err(ConsistencyCheckError::VertexNotContained(i));
        }

        let out_deg = graph.out_degree(vertex);
        out_deg_sum += out_deg;

        cmp(graph.targets(vertex).count(), out_deg, |actual, expected| {
            ConsistencyCheckError::TargetsOutDegreeMismatch(actual, expected, i)
        })?;

        for target in graph.targets(vertex) {
            if !graph.contains_vertex(target) {
                return Err(ConsistencyCheckError::DanglingEdge(i));
            }

            if graph.edge(vertex, target).is_none() {
                return Err(ConsistencyCheckError::MissingPayload(i));
            }
        }
    }

    cmp(
        out_deg_sum,
        edge_count,
        ConsistencyCheckError::OutDegreeSumMismatch,
    )?;

    cmp(
        graph.edges().count(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::DigraphMut, storage::MapDigraph};

    // Digraph that claims more edges than it has.
    struct Broken(MapDigraph<u32, ()>);

    impl DigraphRef<u32, ()> for Broken {
        type VerticesIter<'a> = <MapDigraph<u32, ()> as DigraphRef<u32, ()>>::VerticesIter<'a>;
        type TargetsIter<'a> = <MapDigraph<u32, ()> as DigraphRef<u32, ()>>::TargetsIter<'a>;
        type VisitMap<'a, T> = <MapDigraph<u32, ()> as DigraphRef<u32, ()>>::VisitMap<'a, T>;

        fn vertices(&self) -> Self::VerticesIter<'_> {
            self.0.vertices()
        }

        fn targets(&self, source: &u32) -> Self::TargetsIter<'_> {
            self.0.targets(source)
        }

        fn edge(&self, source: &u32, target: &u32) -> Option<&()> {
            self.0.edge(source, target)
        }

        fn contains_vertex(&self, vertex: &u32) -> bool {
            self.0.contains_vertex(vertex)
        }

        fn vertex_count(&self) -> usize {
            self.0.vertex_count()
        }

        fn out_degree(&self, vertex: &u32) -> usize {
            self.0.out_degree(vertex)
        }

        fn edge_count(&self) -> usize {
            self.0.edge_count() + 1
        }

        fn visit_map<T>(&self) -> Self::VisitMap<'_, T> {
            self.0.visit_map()
        }
    }

    #[test]
    fn consistent() {
        let mut graph = MapDigraph::new();
        graph.put_edge(1, 2, ());
        graph.put_edge(2, 2, ());

        assert_eq!(check_consistency(&graph), Ok(()));
    }

    #[test]
    fn edge_count_mismatch() {
        let mut graph = MapDigraph::new();
        graph.put_edge(1, 2, ());

        assert_eq!(
            check_consistency(&Broken(graph)),
            Err(ConsistencyCheckError::OutDegreeSumMismatch(1, 2))
        );
    }
}
