//! Read-only view of a digraph.
//!
//! [`ReadOnly`] forwards every query to the wrapped digraph and rejects every
//! mutation, including removals through its cursors, with
//! [`MutationErrorKind::ReadOnly`]. The rejected values are handed back in
//! the error.
//!
//! # Examples
//!
//! ```
//! use mapgraph::{
//!     adapt::Freeze,
//!     core::{error::MutationErrorKind, DigraphMut, DigraphRef},
//!     storage::MapDigraph,
//! };
//!
//! let mut graph = MapDigraph::new();
//! graph.put_edge(1, 2, "a");
//!
//! let mut view = graph.read_only();
//!
//! assert_eq!(view.edge(&1, &2), Some(&"a"));
//!
//! let error = view.try_put_edge(2, 3, "b").unwrap_err();
//! assert_eq!(error.kind, MutationErrorKind::ReadOnly);
//! assert_eq!(error.edge, "b");
//! assert_eq!(view.edge_count(), 1);
//! ```

use std::{marker::PhantomData, ops::Deref};

use crate::core::{
    error::{AddVertexError, MutationErrorKind, PutEdgeError, RemoveError},
    Cursor, DeriveDigraph, DigraphMut, DigraphRef,
};

/// Wrapper that exposes the queries of a digraph and rejects its mutations.
///
/// Wrapping a reference (`ReadOnly<&G>`) gives a view that reflects later
/// changes of the underlying digraph. Wrapping an owned digraph freezes it,
/// [`into_inner`](ReadOnly::into_inner) unfreezes it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadOnly<G> {
    inner: G,
}

impl<G> ReadOnly<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G> From<G> for ReadOnly<G> {
    fn from(inner: G) -> Self {
        Self::new(inner)
    }
}

impl<G> Deref for ReadOnly<G> {
    type Target = G;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Conversion of a digraph into its [read-only view](ReadOnly).
pub trait Freeze<V, E>: DigraphRef<V, E> {
    fn read_only(self) -> ReadOnly<Self>
    where
        Self: Sized,
    {
        ReadOnly::new(self)
    }
}

impl<V, E, G> Freeze<V, E> for G where G: DigraphRef<V, E> {}

impl<V, E, G> DigraphRef<V, E> for ReadOnly<G>
where
    G: DigraphRef<V, E>,
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
        self.inner.vertices()
    }

    fn targets(&self, source: &V) -> Self::TargetsIter<'_> {
        self.inner.targets(source)
    }

    fn edge(&self, source: &V, target: &V) -> Option<&E> {
        self.inner.edge(source, target)
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.inner.contains_vertex(vertex)
    }

    fn contains_edge(&self, source: &V, target: &V) -> bool {
        self.inner.contains_edge(source, target)
    }

    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn out_degree(&self, vertex: &V) -> usize {
        self.inner.out_degree(vertex)
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn visit_map<T>(&self) -> Self::VisitMap<'_, T> {
        self.inner.visit_map()
    }
}

impl<V, E, G> DigraphMut<V, E> for ReadOnly<G>
where
    G: DigraphRef<V, E>,
{
    type VerticesCursor<'a> = ReadOnlyCursor<'a, V, G::VerticesIter<'a>, V>
    where
        Self: 'a,
        V: 'a;

    type TargetsCursor<'a> = ReadOnlyCursor<'a, V, G::TargetsIter<'a>, (V, E)>
    where
        Self: 'a,
        V: 'a;

    fn try_add_vertex(&mut self, vertex: V) -> Result<bool, AddVertexError<V>> {
        Err(AddVertexError::new(vertex, MutationErrorKind::ReadOnly))
    }

    fn try_put_edge(
        &mut self,
        source: V,
        target: V,
        edge: E,
    ) -> Result<Option<E>, PutEdgeError<V, E>> {
        Err(PutEdgeError::new(
            source,
            target,
            edge,
            MutationErrorKind::ReadOnly,
        ))
    }

    fn try_remove_edge(&mut self, _source: &V, _target: &V) -> Result<Option<E>, RemoveError> {
        Err(RemoveError::new(MutationErrorKind::ReadOnly))
    }

    fn try_remove_vertex(&mut self, _vertex: &V) -> Result<bool, RemoveError> {
        Err(RemoveError::new(MutationErrorKind::ReadOnly))
    }

    fn try_remove_vertices<'v, I>(&mut self, _vertices: I) -> Result<(), RemoveError>
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
    {
        Err(RemoveError::new(MutationErrorKind::ReadOnly))
    }

    fn vertices_mut(&mut self) -> Self::VerticesCursor<'_> {
        ReadOnlyCursor::new(self.inner.vertices())
    }

    fn targets_mut(&mut self, source: &V) -> Self::TargetsCursor<'_> {
        ReadOnlyCursor::new(self.inner.targets(source))
    }
}

impl<V, E, G> DeriveDigraph<V, E> for ReadOnly<G>
where
    G: DeriveDigraph<V, E>,
{
    type Output = G::Output;

    fn reverse(&self) -> Self::Output {
        self.inner.reverse()
    }

    fn subgraph<'v, I>(&self, vertices: I) -> Self::Output
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
    {
        self.inner.subgraph(vertices)
    }
}

/// Cursor of a [`ReadOnly`] digraph.
///
/// Iterates like the underlying iterator, every removal fails.
pub struct ReadOnlyCursor<'a, V, I, R> {
    inner: I,
    ty: PhantomData<(&'a V, fn() -> R)>,
}

impl<V, I, R> ReadOnlyCursor<'_, V, I, R> {
    fn new(inner: I) -> Self {
        Self {
            inner,
            ty: PhantomData,
        }
    }
}

impl<'a, V, I, R> Cursor<V> for ReadOnlyCursor<'a, V, I, R>
where
    I: Iterator<Item = &'a V>,
{
    type Removed = R;

    fn next(&mut self) -> Option<&V> {
        self.inner.next()
    }

    fn try_remove_current(&mut self) -> Result<Option<R>, RemoveError> {
        Err(RemoveError::new(MutationErrorKind::ReadOnly))
    }
}
