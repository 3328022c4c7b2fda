/// Map from borrowed vertices of a digraph to algorithm state.
///
/// Created by [`DigraphRef::visit_map`](super::DigraphRef::visit_map), so two
/// vertices are the same key exactly when the digraph considers them the same
/// vertex. No bounds on the vertex type are needed beyond what the digraph
/// itself requires.
pub trait VertexMap<'a, V: 'a, T> {
    fn insert(&mut self, vertex: &'a V, value: T) -> Option<T>;
    fn get(&self, vertex: &'a V) -> Option<&T>;
    fn remove(&mut self, vertex: &'a V) -> Option<T>;
    fn len(&self) -> usize;

    fn contains(&self, vertex: &'a V) -> bool {
        self.get(vertex).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
