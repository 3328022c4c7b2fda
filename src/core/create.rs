//! Initialization of digraphs.

/// Creates empty digraphs of a particular kind.
///
/// Algorithms that produce a new digraph take a factory instead of a concrete
/// type, so that the result can use the same backing strategy as the input or
/// any other one. Every closure returning a digraph is a factory.
pub trait DigraphFactory<G> {
    fn create(&self) -> G;
}

impl<G, F> DigraphFactory<G> for F
where
    F: Fn() -> G,
{
    fn create(&self) -> G {
        self()
    }
}
