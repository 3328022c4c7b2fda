//! Adjacency-map digraph.

use std::fmt::{self, Write as _};

use crate::{
    algo,
    common::{debug, trace},
    core::{
        error::{AddVertexError, PutEdgeError, RemoveError},
        structurally_eq, Cursor, DeriveDigraph, DigraphMut, DigraphRef,
    },
};

use super::order::{InsertionOrder, MapFactory, OrderedMap, SortedOrder};

const DISPLAY_LIMIT: usize = 1000;

type EdgeMap<V, E, EF> = <EF as MapFactory<V>>::Map<E>;
type AdjacencyMap<V, E, VF, EF> = <VF as MapFactory<V>>::Map<Slot<V, E, EF>>;

type VertexPosition<V, E, VF, EF> =
    <AdjacencyMap<V, E, VF, EF> as OrderedMap<V, Slot<V, E, EF>>>::Position;
type TargetPosition<V, E, EF> = <EdgeMap<V, E, EF> as OrderedMap<V, E>>::Position;

// `None` stands for a vertex without outgoing edges. The edge map is created
// on the first outgoing edge and dropped again when its last edge goes away.
type Slot<V, E, EF> = Option<EdgeMap<V, E, EF>>;

/// Digraph storing, for every vertex, the map of its out-neighbors to the edge
/// payloads.
///
/// The vertex map is created by the vertex factory `VF`, the per-vertex edge
/// maps by the edge factory `EF`. The factories decide the iteration order of
/// [`vertices`](DigraphRef::vertices) and [`targets`](DigraphRef::targets), see
/// [`order`](super::order).
///
/// Vertices are used as map keys and are cloned when an edge is inserted or a
/// set of vertices is removed. Use cheaply clonable vertex types, such as
/// integers, shared strings or `Rc`s.
///
/// # Examples
///
/// ```
/// use mapgraph::{core::{DigraphMut, DigraphRef}, storage::MapDigraph};
///
/// let mut graph = MapDigraph::sorted();
///
/// graph.put_edge(3, 1, "x");
/// graph.put_edge(2, 3, "y");
///
/// assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(graph.to_string(), "MapDigraph(1[], 2[3], 3[1])");
/// ```
pub struct MapDigraph<V, E, VF = InsertionOrder, EF = VF>
where
    VF: MapFactory<V>,
    EF: MapFactory<V>,
{
    vertices: AdjacencyMap<V, E, VF, EF>,
    edge_count: usize,
    vertex_factory: VF,
    edge_factory: EF,
}

impl<V, E, VF, EF> MapDigraph<V, E, VF, EF>
where
    VF: MapFactory<V>,
    EF: MapFactory<V>,
{
    /// Creates an empty digraph with maps created by the given factories.
    pub fn with_factories(vertex_factory: VF, edge_factory: EF) -> Self {
        Self {
            vertices: vertex_factory.create(),
            edge_count: 0,
            vertex_factory,
            edge_factory,
        }
    }

    /// Returns a factory for empty digraphs with the same strategies as this
    /// one.
    pub fn digraph_factory(&self) -> MapDigraphFactory<VF, EF>
    where
        VF: Clone,
        EF: Clone,
    {
        MapDigraphFactory::new(self.vertex_factory.clone(), self.edge_factory.clone())
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.vertices = self.vertex_factory.create();
        self.edge_count = 0;
    }

    // Finishes the removal of a vertex that is already gone from the vertex
    // map, given its former edge map.
    fn detach(&mut self, vertex: &V, edges: Slot<V, E, EF>) {
        let outgoing = edges.map_or(0, |edges| edges.len());
        let mut incoming = 0;

        for slot in self.vertices.values_mut() {
            if Self::unlink(slot, |edges| edges.remove(vertex)).is_some() {
                incoming += 1;
            }
        }

        self.edge_count -= outgoing + incoming;
        trace!(outgoing = outgoing, incoming = incoming, "detached vertex");
    }

    // Removes an entry from the edge map in the slot and collapses the slot
    // when the map becomes empty.
    fn unlink<R, F>(slot: &mut Slot<V, E, EF>, take: F) -> Option<R>
    where
        F: FnOnce(&mut EdgeMap<V, E, EF>) -> Option<R>,
    {
        let edges = slot.as_mut()?;
        let removed = take(edges)?;
        if edges.is_empty() {
            *slot = None;
        }
        Some(removed)
    }
}

impl<V, E> MapDigraph<V, E>
where
    InsertionOrder: MapFactory<V>,
{
    /// Creates an empty digraph that iterates its vertices and targets in
    /// insertion order.
    pub fn new() -> Self {
        Self::with_factories(InsertionOrder, InsertionOrder)
    }
}

impl<V: Ord + Clone, E> MapDigraph<V, E, SortedOrder> {
    /// Creates an empty digraph that iterates its vertices and targets in
    /// ascending order.
    pub fn sorted() -> Self {
        Self::with_factories(SortedOrder::natural(), SortedOrder::natural())
    }
}

impl<V, E, C> MapDigraph<V, E, SortedOrder<C>>
where
    SortedOrder<C>: MapFactory<V> + Clone,
{
    /// Creates an empty digraph that iterates its vertices and targets in the
    /// order given by the comparator.
    ///
    /// Two vertices are the same vertex if the comparator considers them equal.
    pub fn sorted_by(comparator: C) -> Self {
        let order = SortedOrder::by(comparator);
        Self::with_factories(order.clone(), order)
    }
}

impl<V, E, VF, EF> Default for MapDigraph<V, E, VF, EF>
where
    VF: MapFactory<V> + Default,
    EF: MapFactory<V> + Default,
{
    fn default() -> Self {
        Self::with_factories(VF::default(), EF::default())
    }
}

impl<V, E, VF, EF> DigraphRef<V, E> for MapDigraph<V, E, VF, EF>
where
    VF: MapFactory<V>,
    EF: MapFactory<V>,
{
    type VerticesIter<'a> = <AdjacencyMap<V, E, VF, EF> as OrderedMap<V, Slot<V, E, EF>>>::Keys<'a>
    where
        Self: 'a,
        V: 'a;

    type TargetsIter<'a> = TargetsIter<<EdgeMap<V, E, EF> as OrderedMap<V, E>>::Keys<'a>>
    where
        Self: 'a,
        V: 'a;

    type VisitMap<'a, T> = VF::VisitMap<'a, T>
    where
        Self: 'a,
        V: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.vertices.keys()
    }

    fn targets(&self, source: &V) -> Self::TargetsIter<'_> {
        TargetsIter {
            inner: self
                .vertices
                .get(source)
                .and_then(Option::as_ref)
                .map(|edges| edges.keys()),
        }
    }

    fn edge(&self, source: &V, target: &V) -> Option<&E> {
        self.vertices.get(source)?.as_ref()?.get(target)
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn out_degree(&self, vertex: &V) -> usize {
        self.vertices
            .get(vertex)
            .and_then(Option::as_ref)
            .map_or(0, |edges| edges.len())
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn visit_map<T>(&self) -> Self::VisitMap<'_, T> {
        self.vertex_factory.create_visit_map()
    }
}

impl<V, E, VF, EF> DigraphMut<V, E> for MapDigraph<V, E, VF, EF>
where
    V: Clone,
    VF: MapFactory<V>,
    EF: MapFactory<V>,
{
    type VerticesCursor<'a> = VerticesCursor<'a, V, E, VF, EF>
    where
        Self: 'a,
        V: 'a;

    type TargetsCursor<'a> = TargetsCursor<'a, V, E, VF, EF>
    where
        Self: 'a,
        V: 'a;

    fn try_add_vertex(&mut self, vertex: V) -> Result<bool, AddVertexError<V>> {
        if self.vertices.contains_key(&vertex) {
            return Ok(false);
        }

        self.vertices.insert(vertex, None);
        Ok(true)
    }

    fn try_put_edge(
        &mut self,
        source: V,
        target: V,
        edge: E,
    ) -> Result<Option<E>, PutEdgeError<V, E>> {
        let previous = match self.vertices.get_mut(&source) {
            Some(Some(edges)) => edges.insert(target.clone(), edge),
            Some(slot) => {
                let mut edges = self.edge_factory.create_for(&source);
                edges.insert(target.clone(), edge);
                *slot = Some(edges);
                None
            }
            None => {
                let mut edges = self.edge_factory.create_for(&source);
                edges.insert(target.clone(), edge);
                self.vertices.insert(source, Some(edges));
                None
            }
        };

        if previous.is_none() {
            self.edge_count += 1;

            if !self.vertices.contains_key(&target) {
                self.vertices.insert(target, None);
            }
        }

        Ok(previous)
    }

    fn try_remove_edge(&mut self, source: &V, target: &V) -> Result<Option<E>, RemoveError> {
        let Some(slot) = self.vertices.get_mut(source) else {
            return Ok(None);
        };

        let removed = Self::unlink(slot, |edges| edges.remove(target));
        if removed.is_some() {
            self.edge_count -= 1;
        }

        Ok(removed)
    }

    fn try_remove_vertex(&mut self, vertex: &V) -> Result<bool, RemoveError> {
        match self.vertices.remove(vertex) {
            Some(edges) => {
                self.detach(vertex, edges);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn try_remove_vertices<'v, I>(&mut self, vertices: I) -> Result<(), RemoveError>
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
    {
        // Set of the removed vertices, ordered the same way as the vertex map
        // so that no additional bounds on the vertex type are needed.
        let mut removed = self.vertex_factory.create::<()>();

        for vertex in vertices {
            if let Some(edges) = self.vertices.remove(vertex) {
                self.edge_count -= edges.map_or(0, |edges| edges.len());
                removed.insert(vertex.clone(), ());
            }
        }

        if removed.is_empty() {
            return Ok(());
        }

        let mut incoming = 0;
        for slot in self.vertices.values_mut() {
            if let Some(edges) = slot {
                let before = edges.len();
                edges.retain(|target, _| !removed.contains_key(target));
                incoming += before - edges.len();

                if edges.is_empty() {
                    *slot = None;
                }
            }
        }

        self.edge_count -= incoming;
        debug!(
            vertices = removed.len(),
            incoming = incoming,
            "removed vertices"
        );

        Ok(())
    }

    fn vertices_mut(&mut self) -> Self::VerticesCursor<'_> {
        VerticesCursor {
            graph: self,
            last: None,
            current: false,
        }
    }

    fn targets_mut(&mut self, source: &V) -> Self::TargetsCursor<'_> {
        TargetsCursor {
            source: self.vertices.position_of(source),
            graph: self,
            last: None,
            current: false,
        }
    }
}

impl<V, E, VF, EF> DeriveDigraph<V, E> for MapDigraph<V, E, VF, EF>
where
    V: Clone,
    E: Clone,
    VF: MapFactory<V> + Clone,
    EF: MapFactory<V> + Clone,
{
    type Output = Self;

    fn reverse(&self) -> Self::Output {
        algo::reverse(self, &self.digraph_factory())
    }

    fn subgraph<'v, I>(&self, vertices: I) -> Self::Output
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
    {
        algo::subgraph(self, vertices, &self.digraph_factory())
    }
}

/// Iterator over the out-neighbors of a vertex.
pub struct TargetsIter<I> {
    inner: Option<I>,
}

impl<I: Iterator> Iterator for TargetsIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), |inner| inner.size_hint())
    }
}

/// Cursor over the vertices of a [`MapDigraph`].
///
/// See [`DigraphMut::vertices_mut`].
pub struct VerticesCursor<'a, V, E, VF, EF>
where
    VF: MapFactory<V>,
    EF: MapFactory<V>,
{
    graph: &'a mut MapDigraph<V, E, VF, EF>,
    // Position the next vertex is searched after, `None` for the first one.
    last: Option<VertexPosition<V, E, VF, EF>>,
    // Whether the vertex at `last` was produced and not removed yet.
    current: bool,
}

impl<V, E, VF, EF> Cursor<V> for VerticesCursor<'_, V, E, VF, EF>
where
    VF: MapFactory<V>,
    EF: MapFactory<V>,
{
    type Removed = V;

    fn next(&mut self) -> Option<&V> {
        let Some(position) = self.graph.vertices.next_position(self.last.as_ref()) else {
            self.current = false;
            return None;
        };

        self.current = true;
        let position = self.last.insert(position);
        self.graph.vertices.get_at(position).map(|(vertex, _)| vertex)
    }

    fn try_remove_current(&mut self) -> Result<Option<V>, RemoveError> {
        if !self.current {
            return Ok(None);
        }

        self.current = false;

        let Some(position) = self.last.take() else {
            return Ok(None);
        };
        let Some((vertex, edges, next)) = self.graph.vertices.remove_at(position) else {
            return Ok(None);
        };

        self.last = next;
        self.graph.detach(&vertex, edges);
        Ok(Some(vertex))
    }
}

/// Cursor over the out-neighbors of a vertex in a [`MapDigraph`].
///
/// See [`DigraphMut::targets_mut`].
pub struct TargetsCursor<'a, V, E, VF, EF>
where
    VF: MapFactory<V>,
    EF: MapFactory<V>,
{
    graph: &'a mut MapDigraph<V, E, VF, EF>,
    // Position of the source in the vertex map, `None` if it does not exist.
    source: Option<VertexPosition<V, E, VF, EF>>,
    last: Option<TargetPosition<V, E, EF>>,
    current: bool,
}

impl<V, E, VF, EF> Cursor<V> for TargetsCursor<'_, V, E, VF, EF>
where
    VF: MapFactory<V>,
    EF: MapFactory<V>,
{
    type Removed = (V, E);

    fn next(&mut self) -> Option<&V> {
        let edges = self
            .source
            .as_ref()
            .and_then(|source| self.graph.vertices.get_at(source))
            .and_then(|(_, slot)| slot.as_ref());

        let Some(position) = edges.and_then(|edges| edges.next_position(self.last.as_ref())) else {
            self.current = false;
            return None;
        };

        self.current = true;
        let position = self.last.insert(position);
        edges?.get_at(position).map(|(target, _)| target)
    }

    fn try_remove_current(&mut self) -> Result<Option<(V, E)>, RemoveError> {
        if !self.current {
            return Ok(None);
        }

        self.current = false;

        let Some(position) = self.last.take() else {
            return Ok(None);
        };
        let Some((_, slot)) = self
            .source
            .as_ref()
            .and_then(|source| self.graph.vertices.get_at_mut(source))
        else {
            return Ok(None);
        };

        let removed = MapDigraph::<V, E, VF, EF>::unlink(slot, |edges| edges.remove_at(position));
        let Some((target, edge, next)) = removed else {
            return Ok(None);
        };

        self.last = next;
        self.graph.edge_count -= 1;
        Ok(Some((target, edge)))
    }
}

/// Factory of empty [`MapDigraph`]s with fixed strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapDigraphFactory<VF, EF = VF> {
    vertex_factory: VF,
    edge_factory: EF,
}

impl<VF, EF> MapDigraphFactory<VF, EF> {
    pub fn new(vertex_factory: VF, edge_factory: EF) -> Self {
        Self {
            vertex_factory,
            edge_factory,
        }
    }
}

impl<V, E, VF, EF> crate::core::DigraphFactory<MapDigraph<V, E, VF, EF>>
    for MapDigraphFactory<VF, EF>
where
    VF: MapFactory<V> + Clone,
    EF: MapFactory<V> + Clone,
{
    fn create(&self) -> MapDigraph<V, E, VF, EF> {
        MapDigraph::with_factories(self.vertex_factory.clone(), self.edge_factory.clone())
    }
}

impl<V, E, VF, EF> Clone for MapDigraph<V, E, VF, EF>
where
    VF: MapFactory<V> + Clone,
    EF: MapFactory<V> + Clone,
    AdjacencyMap<V, E, VF, EF>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            edge_count: self.edge_count,
            vertex_factory: self.vertex_factory.clone(),
            edge_factory: self.edge_factory.clone(),
        }
    }
}

impl<V, E, VF1, EF1, VF2, EF2> PartialEq<MapDigraph<V, E, VF2, EF2>> for MapDigraph<V, E, VF1, EF1>
where
    E: PartialEq,
    VF1: MapFactory<V>,
    EF1: MapFactory<V>,
    VF2: MapFactory<V>,
    EF2: MapFactory<V>,
{
    fn eq(&self, other: &MapDigraph<V, E, VF2, EF2>) -> bool {
        structurally_eq(self, other)
    }
}

impl<V, E, VF, EF> fmt::Debug for MapDigraph<V, E, VF, EF>
where
    V: fmt::Debug,
    E: fmt::Debug,
    VF: MapFactory<V>,
    EF: MapFactory<V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugEdges<'a, V, E, G: ?Sized> {
            graph: &'a G,
            source: &'a V,
            ty: std::marker::PhantomData<fn() -> E>,
        }

        impl<V: fmt::Debug, E: fmt::Debug, G: DigraphRef<V, E> + ?Sized> fmt::Debug
            for DebugEdges<'_, V, E, G>
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map()
                    .entries(self.graph.targets(self.source).filter_map(|target| {
                        self.graph
                            .edge(self.source, target)
                            .map(|edge| (target, edge))
                    }))
                    .finish()
            }
        }

        f.debug_map()
            .entries(self.vertices().map(|source| {
                let edges = DebugEdges {
                    graph: self,
                    source,
                    ty: std::marker::PhantomData::<fn() -> E>,
                };
                (source, edges)
            }))
            .finish()
    }
}

impl<V, E, VF, EF> fmt::Display for MapDigraph<V, E, VF, EF>
where
    V: fmt::Display,
    VF: MapFactory<V>,
    EF: MapFactory<V>,
{
    /// Formats the adjacency as `MapDigraph(a[b, c], b[], c[a])`.
    ///
    /// Very large digraphs are cut off with `...` after about a thousand
    /// characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::from("MapDigraph(");
        let mut vertices = self.vertices().peekable();

        while let Some(vertex) = vertices.next() {
            write!(out, "{vertex}[")?;
            for (i, target) in self.targets(vertex).enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write!(out, "{target}")?;
            }
            out.push(']');

            if vertices.peek().is_some() {
                out.push_str(", ");
                if out.len() > DISPLAY_LIMIT {
                    out.push_str("...");
                    break;
                }
            }
        }

        out.push(')');
        f.write_str(&out)
    }
}
