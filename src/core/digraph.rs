use std::marker::PhantomData;

use super::{
    cursor::Cursor,
    error::{AddVertexError, PutEdgeError, RemoveError},
    visit::VertexMap,
};

/// Read access to a digraph.
///
/// Lookups of vertices or edges that do not exist are a normal outcome and
/// never panic.
pub trait DigraphRef<V, E> {
    type VerticesIter<'a>: Iterator<Item = &'a V>
    where
        Self: 'a,
        V: 'a;

    type TargetsIter<'a>: Iterator<Item = &'a V>
    where
        Self: 'a,
        V: 'a;

    type VisitMap<'a, T>: VertexMap<'a, V, T>
    where
        Self: 'a,
        V: 'a;

    /// Returns an iterator over all vertices in the order of the digraph.
    fn vertices(&self) -> Self::VerticesIter<'_>;

    /// Returns an iterator over the out-neighbors of `source`.
    ///
    /// The iterator is empty if `source` does not exist or has no outgoing
    /// edges.
    fn targets(&self, source: &V) -> Self::TargetsIter<'_>;

    /// Returns the payload of the edge from `source` to `target`, if any.
    fn edge(&self, source: &V, target: &V) -> Option<&E>;

    fn contains_vertex(&self, vertex: &V) -> bool;

    fn contains_edge(&self, source: &V, target: &V) -> bool {
        self.edge(source, target).is_some()
    }

    fn vertex_count(&self) -> usize;

    /// Returns the number of outgoing edges of `vertex`, zero if it does not
    /// exist.
    fn out_degree(&self, vertex: &V) -> usize;

    fn edge_count(&self) -> usize;

    /// Returns an empty map keyed by the vertices of this digraph, with the
    /// digraph's notion of vertex identity.
    fn visit_map<T>(&self) -> Self::VisitMap<'_, T>;

    /// Returns an iterator over all `(source, target, payload)` triples, in
    /// the order of sources and then in the order of their targets.
    fn edges(&self) -> Edges<'_, V, E, Self> {
        Edges::new(self)
    }

    /// Returns `true` if the digraph has no directed cycle, self-loops
    /// included.
    ///
    /// See [`algo::cycle`](crate::algo::cycle) for details.
    fn is_acyclic(&self) -> bool {
        crate::algo::is_acyclic(self)
    }
}

/// Mutation of a digraph.
///
/// Every operation comes in two flavors. The `try_` methods report rejected
/// mutations as errors and hand the moved-in values back, the others panic
/// with the error message. Only restricted views such as
/// [`ReadOnly`](crate::adapt::ReadOnly) reject mutations.
pub trait DigraphMut<V, E>: DigraphRef<V, E> {
    type VerticesCursor<'a>: Cursor<V, Removed = V>
    where
        Self: 'a,
        V: 'a;

    type TargetsCursor<'a>: Cursor<V, Removed = (V, E)>
    where
        Self: 'a,
        V: 'a;

    /// Adds an isolated vertex.
    ///
    /// Returns `false` if the vertex already exists, in which case nothing
    /// changes.
    fn try_add_vertex(&mut self, vertex: V) -> Result<bool, AddVertexError<V>>;

    /// Inserts the edge from `source` to `target` or replaces its payload.
    ///
    /// Both endpoints are added if they do not exist yet. Returns the previous
    /// payload of the edge.
    fn try_put_edge(
        &mut self,
        source: V,
        target: V,
        edge: E,
    ) -> Result<Option<E>, PutEdgeError<V, E>>;

    /// Removes the edge from `source` to `target` and returns its payload.
    ///
    /// The endpoints stay in the digraph.
    fn try_remove_edge(&mut self, source: &V, target: &V) -> Result<Option<E>, RemoveError>;

    /// Removes the vertex together with all its outgoing and incoming edges.
    ///
    /// Returns `false` if the vertex did not exist.
    fn try_remove_vertex(&mut self, vertex: &V) -> Result<bool, RemoveError>;

    /// Removes all given vertices together with their edges.
    ///
    /// Equivalent to removing the vertices one by one. Vertices that do not
    /// exist are skipped.
    fn try_remove_vertices<'v, I>(&mut self, vertices: I) -> Result<(), RemoveError>
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v;

    /// Returns a cursor over all vertices that can remove the current one.
    fn vertices_mut(&mut self) -> Self::VerticesCursor<'_>;

    /// Returns a cursor over the out-neighbors of `source` that can remove the
    /// edge to the current one.
    fn targets_mut(&mut self, source: &V) -> Self::TargetsCursor<'_>;

    fn add_vertex(&mut self, vertex: V) -> bool {
        match self.try_add_vertex(vertex) {
            Ok(added) => added,
            Err(error) => panic!("{error}"),
        }
    }

    fn put_edge(&mut self, source: V, target: V, edge: E) -> Option<E> {
        match self.try_put_edge(source, target, edge) {
            Ok(previous) => previous,
            Err(error) => panic!("{error}"),
        }
    }

    fn remove_edge(&mut self, source: &V, target: &V) -> Option<E> {
        match self.try_remove_edge(source, target) {
            Ok(removed) => removed,
            Err(error) => panic!("{error}"),
        }
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        match self.try_remove_vertex(vertex) {
            Ok(removed) => removed,
            Err(error) => panic!("{error}"),
        }
    }

    fn remove_vertices<'v, I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
    {
        if let Err(error) = self.try_remove_vertices(vertices) {
            panic!("{error}");
        }
    }

    /// Keeps only the vertices for which `keep` returns `true`.
    fn retain_vertices<F>(&mut self, mut keep: F)
    where
        F: FnMut(&V) -> bool,
    {
        let mut cursor = self.vertices_mut();
        while let Some(vertex) = cursor.next() {
            if !keep(vertex) {
                cursor.remove_current();
            }
        }
    }

    /// Keeps only the edges from `source` whose target satisfies `keep`.
    fn retain_targets<F>(&mut self, source: &V, mut keep: F)
    where
        F: FnMut(&V) -> bool,
    {
        let mut cursor = self.targets_mut(source);
        while let Some(target) = cursor.next() {
            if !keep(target) {
                cursor.remove_current();
            }
        }
    }
}

/// Construction of new digraphs derived from an existing one.
///
/// The results are created by the implementation's own factory, so they use
/// the same backing strategy.
pub trait DeriveDigraph<V, E>: DigraphRef<V, E> {
    type Output: DigraphMut<V, E>;

    /// Returns the digraph with the same vertices and all edges flipped.
    fn reverse(&self) -> Self::Output;

    /// Returns the subgraph induced by the given vertices.
    fn subgraph<'v, I>(&self, vertices: I) -> Self::Output
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v;
}

/// Iterator over all edges of a digraph.
///
/// See [`DigraphRef::edges`].
pub struct Edges<'a, V, E, G>
where
    G: DigraphRef<V, E> + ?Sized + 'a,
    V: 'a,
{
    graph: &'a G,
    sources: G::VerticesIter<'a>,
    current: Option<(&'a V, G::TargetsIter<'a>)>,
    ty: PhantomData<fn() -> E>,
}

impl<'a, V, E, G> Edges<'a, V, E, G>
where
    G: DigraphRef<V, E> + ?Sized + 'a,
    V: 'a,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            sources: graph.vertices(),
            current: None,
            ty: PhantomData,
        }
    }
}

impl<'a, V, E, G> Iterator for Edges<'a, V, E, G>
where
    G: DigraphRef<V, E> + ?Sized + 'a,
    V: 'a,
    E: 'a,
{
    type Item = (&'a V, &'a V, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((source, targets)) = self.current.as_mut() {
                let source = *source;
                for target in targets.by_ref() {
                    if let Some(edge) = self.graph.edge(source, target) {
                        return Some((source, target, edge));
                    }
                }
            }

            let source = self.sources.next()?;
            self.current = Some((source, self.graph.targets(source)));
        }
    }
}

/// Returns `true` if both digraphs have the same vertices and the same edges
/// with equal payloads.
///
/// The order in which the digraphs iterate their elements does not matter.
pub fn structurally_eq<V, E, G1, G2>(lhs: &G1, rhs: &G2) -> bool
where
    G1: DigraphRef<V, E> + ?Sized,
    G2: DigraphRef<V, E> + ?Sized,
    E: PartialEq,
{
    lhs.vertex_count() == rhs.vertex_count()
        && lhs.edge_count() == rhs.edge_count()
        && lhs.vertices().all(|vertex| rhs.contains_vertex(vertex))
        && lhs
            .edges()
            .all(|(source, target, edge)| rhs.edge(source, target) == Some(edge))
}

mod imp {
    use super::*;

    impl<V, E, G> DigraphRef<V, E> for &G
    where
        G: DigraphRef<V, E> + ?Sized,
    {
        type VerticesIter<'a> = G::VerticesIter<'a>
        where
            Self: 'a,
            V: 'a;

        type TargetsIter<'a> = G::TargetsIter<'a>
        where
            Self: 'a,
            V: 'a;

        type VisitMap<'a, T> = G::VisitMap<'a, T>
        where
            Self: 'a,
            V: 'a;

        fn vertices(&self) -> Self::VerticesIter<'_> {
            (**self).vertices()
        }

        fn targets(&self, source: &V) -> Self::TargetsIter<'_> {
            (**self).targets(source)
        }

        fn edge(&self, source: &V, target: &V) -> Option<&E> {
            (**self).edge(source, target)
        }

        fn contains_vertex(&self, vertex: &V) -> bool {
            (**self).contains_vertex(vertex)
        }

        fn contains_edge(&self, source: &V, target: &V) -> bool {
            (**self).contains_edge(source, target)
        }

        fn vertex_count(&self) -> usize {
            (**self).vertex_count()
        }

        fn out_degree(&self, vertex: &V) -> usize {
            (**self).out_degree(vertex)
        }

        fn edge_count(&self) -> usize {
            (**self).edge_count()
        }

        fn visit_map<T>(&self) -> Self::VisitMap<'_, T> {
            (**self).visit_map()
        }
    }

    impl<V, E, G> DeriveDigraph<V, E> for &G
    where
        G: DeriveDigraph<V, E> + ?Sized,
    {
        type Output = G::Output;

        fn reverse(&self) -> Self::Output {
            (**self).reverse()
        }

        fn subgraph<'v, I>(&self, vertices: I) -> Self::Output
        where
            I: IntoIterator<Item = &'v V>,
            V: 'v,
        {
            (**self).subgraph(vertices)
        }
    }
}
