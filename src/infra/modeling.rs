//! Naive digraph used as the reference in randomized tests.
//!
//! Vertices are kept in a vector in insertion order and edges in a vector in
//! insertion order, every operation is a linear scan. The observable order is
//! the one of an insertion-ordered [`MapDigraph`](crate::storage::MapDigraph).

use std::slice;

use crate::core::{
    error::{AddVertexError, PutEdgeError, RemoveError},
    Cursor, DigraphMut, DigraphRef, VertexMap,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Model<V, E> {
    vertices: Vec<V>,
    edges: Vec<(V, V, E)>,
}

impl<V, E> Default for Model<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Model<V, E> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<V: PartialEq, E> Model<V, E> {
    fn edge_position(&self, source: &V, target: &V) -> Option<usize> {
        self.edges
            .iter()
            .position(|(s, t, _)| s == source && t == target)
    }

    // Position in the edge vector of the edge to the `nth` target of `source`.
    fn target_position(&self, source: &V, nth: usize) -> Option<usize> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, (s, _, _))| s == source)
            .nth(nth)
            .map(|(i, _)| i)
    }

    fn remove_vertex_at(&mut self, position: usize) -> V {
        let vertex = self.vertices.remove(position);
        self.edges
            .retain(|(source, target, _)| source != &vertex && target != &vertex);
        vertex
    }
}

impl<V: PartialEq, E> DigraphRef<V, E> for Model<V, E> {
    type VerticesIter<'a> = slice::Iter<'a, V>
    where
        Self: 'a,
        V: 'a;

    type TargetsIter<'a> = TargetsIter<'a, V, E>
    where
        Self: 'a,
        V: 'a;

    type VisitMap<'a, T> = VisitMap<'a, V, T>
    where
        Self: 'a,
        V: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.vertices.iter()
    }

    fn targets(&self, source: &V) -> Self::TargetsIter<'_> {
        TargetsIter {
            edges: self.edges.iter(),
            source: self.vertices.iter().find(|vertex| *vertex == source),
        }
    }

    fn edge(&self, source: &V, target: &V) -> Option<&E> {
        self.edge_position(source, target)
            .map(|i| &self.edges[i].2)
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn out_degree(&self, vertex: &V) -> usize {
        self.edges.iter().filter(|(s, _, _)| s == vertex).count()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn visit_map<T>(&self) -> Self::VisitMap<'_, T> {
        VisitMap {
            entries: Vec::new(),
        }
    }
}

impl<V: PartialEq + Clone, E> DigraphMut<V, E> for Model<V, E> {
    type VerticesCursor<'a> = VerticesCursor<'a, V, E>
    where
        Self: 'a,
        V: 'a;

    type TargetsCursor<'a> = TargetsCursor<'a, V, E>
    where
        Self: 'a,
        V: 'a;

    fn try_add_vertex(&mut self, vertex: V) -> Result<bool, AddVertexError<V>> {
        if self.vertices.contains(&vertex) {
            return Ok(false);
        }

        self.vertices.push(vertex);
        Ok(true)
    }

    fn try_put_edge(
        &mut self,
        source: V,
        target: V,
        edge: E,
    ) -> Result<Option<E>, PutEdgeError<V, E>> {
        if let Some(i) = self.edge_position(&source, &target) {
            return Ok(Some(std::mem::replace(&mut self.edges[i].2, edge)));
        }

        self.try_add_vertex(source.clone()).ok();
        self.try_add_vertex(target.clone()).ok();
        self.edges.push((source, target, edge));
        Ok(None)
    }

    fn try_remove_edge(&mut self, source: &V, target: &V) -> Result<Option<E>, RemoveError> {
        Ok(self
            .edge_position(source, target)
            .map(|i| self.edges.remove(i).2))
    }

    fn try_remove_vertex(&mut self, vertex: &V) -> Result<bool, RemoveError> {
        match self.vertices.iter().position(|v| v == vertex) {
            Some(i) => {
                self.remove_vertex_at(i);
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
        for vertex in vertices {
            self.try_remove_vertex(vertex)?;
        }
        Ok(())
    }

    fn vertices_mut(&mut self) -> Self::VerticesCursor<'_> {
        VerticesCursor {
            model: self,
            position: 0,
            current: false,
        }
    }

    fn targets_mut(&mut self, source: &V) -> Self::TargetsCursor<'_> {
        TargetsCursor {
            source: source.clone(),
            model: self,
            position: 0,
            current: false,
        }
    }
}

pub struct TargetsIter<'a, V, E> {
    edges: slice::Iter<'a, (V, V, E)>,
    source: Option<&'a V>,
}

impl<'a, V: PartialEq, E> Iterator for TargetsIter<'a, V, E> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source?;
        self.edges
            .by_ref()
            .find(|(s, _, _)| s == source)
            .map(|(_, target, _)| target)
    }
}

pub struct VisitMap<'a, V, T> {
    entries: Vec<(&'a V, T)>,
}

impl<'a, V: PartialEq, T> VertexMap<'a, V, T> for VisitMap<'a, V, T> {
    fn insert(&mut self, vertex: &'a V, value: T) -> Option<T> {
        match self.entries.iter_mut().find(|(v, _)| *v == vertex) {
            Some((_, old)) => Some(std::mem::replace(old, value)),
            None => {
                self.entries.push((vertex, value));
                None
            }
        }
    }

    fn get(&self, vertex: &'a V) -> Option<&T> {
        self.entries
            .iter()
            .find(|(v, _)| *v == vertex)
            .map(|(_, value)| value)
    }

    fn remove(&mut self, vertex: &'a V) -> Option<T> {
        let i = self.entries.iter().position(|(v, _)| *v == vertex)?;
        Some(self.entries.swap_remove(i).1)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

pub struct VerticesCursor<'a, V, E> {
    model: &'a mut Model<V, E>,
    position: usize,
    current: bool,
}

impl<V: PartialEq, E> Cursor<V> for VerticesCursor<'_, V, E> {
    type Removed = V;

    fn next(&mut self) -> Option<&V> {
        let vertex = self.model.vertices.get(self.position);
        self.current = vertex.is_some();
        if self.current {
            self.position += 1;
        }
        vertex
    }

    fn try_remove_current(&mut self) -> Result<Option<V>, RemoveError> {
        if !self.current {
            return Ok(None);
        }

        self.current = false;
        self.position -= 1;
        Ok(Some(self.model.remove_vertex_at(self.position)))
    }
}

pub struct TargetsCursor<'a, V, E> {
    model: &'a mut Model<V, E>,
    source: V,
    position: usize,
    current: bool,
}

impl<V: PartialEq, E> Cursor<V> for TargetsCursor<'_, V, E> {
    type Removed = (V, E);

    fn next(&mut self) -> Option<&V> {
        let i = self.model.target_position(&self.source, self.position);
        self.current = i.is_some();
        if self.current {
            self.position += 1;
        }
        i.map(|i| &self.model.edges[i].1)
    }

    fn try_remove_current(&mut self) -> Result<Option<(V, E)>, RemoveError> {
        if !self.current {
            return Ok(None);
        }

        self.current = false;
        self.position -= 1;

        Ok(self
            .model
            .target_position(&self.source, self.position)
            .map(|i| {
                let (_, target, edge) = self.model.edges.remove(i);
                (target, edge)
            }))
    }
}
