use std::marker::PhantomData;

use crate::core::DigraphRef;

use super::{dfs::dfs_find, Cycle};

/// Builder for [`Cycle`].
pub struct CycleBuilder<'a, V, E, G: ?Sized> {
    graph: &'a G,
    ty: PhantomData<fn() -> (V, E)>,
}

impl<'a, V> Cycle<'a, V> {
    /// Prepares the search for a cycle in the digraph.
    pub fn on<E, G>(graph: &'a G) -> CycleBuilder<'a, V, E, G>
    where
        G: DigraphRef<V, E> + ?Sized,
    {
        CycleBuilder {
            graph,
            ty: PhantomData,
        }
    }
}

impl<'a, V, E, G> CycleBuilder<'a, V, E, G>
where
    G: DigraphRef<V, E> + ?Sized,
{
    /// Runs the search and returns a cycle, if there is any.
    ///
    /// The search is a depth-first traversal starting from every vertex in
    /// the order of the digraph. The first edge closing a cycle is returned.
    pub fn run(self) -> Option<Cycle<'a, V>> {
        dfs_find(self.graph)
    }
}
