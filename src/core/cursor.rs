use super::error::RemoveError;

/// A live view over a sequence of vertices that can remove the element it
/// last produced.
///
/// Unlike an [`Iterator`], a cursor lends the produced vertex only until the
/// next call on the cursor, which allows it to hold the digraph mutably
/// borrowed. Removing through a cursor has the same effect as the
/// corresponding direct removal on the digraph.
///
/// # Examples
///
/// ```
/// use mapgraph::{core::{Cursor, DigraphMut, DigraphRef}, storage::MapDigraph};
///
/// let mut graph = MapDigraph::new();
/// graph.put_edge(1, 2, ());
/// graph.put_edge(2, 3, ());
/// graph.put_edge(3, 1, ());
///
/// let mut cursor = graph.vertices_mut();
/// while let Some(vertex) = cursor.next() {
///     if *vertex % 2 == 1 {
///         cursor.remove_current();
///     }
/// }
///
/// assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![&2]);
/// assert_eq!(graph.edge_count(), 0);
/// ```
pub trait Cursor<V> {
    /// What the removal returns.
    type Removed;

    /// Advances the cursor and returns the next vertex.
    fn next(&mut self) -> Option<&V>;

    /// Removes the vertex last returned by [`next`](Cursor::next).
    ///
    /// Returns `Ok(None)` when there is no such vertex, either because
    /// `next` was not called yet, it returned `None` or the vertex was already
    /// removed. The following call to `next` returns the vertex after the
    /// removed one.
    fn try_remove_current(&mut self) -> Result<Option<Self::Removed>, RemoveError>;

    fn remove_current(&mut self) -> Option<Self::Removed> {
        match self.try_remove_current() {
            Ok(removed) => removed,
            Err(error) => panic!("{error}"),
        }
    }
}
