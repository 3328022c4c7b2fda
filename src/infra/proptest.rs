use std::{fmt, hash::Hash};

use proptest::{
    prelude::Rng,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashMap;

use crate::{
    core::DigraphMut,
    storage::MapDigraph,
};

pub fn digraph<V: Strategy, E: Strategy>(vertex: V, edge: E) -> DigraphStrategy<V, E> {
    DigraphStrategy::new(vertex, edge)
}

pub struct DigraphStrategy<V, E> {
    vertex: V,
    edge: E,
    params: StrategyParams,
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for DigraphStrategy<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigraphStrategy")
            .field("vertex", &self.vertex)
            .field("edge", &self.edge)
            .field("params", &self.params)
            .finish()
    }
}

impl<V: Strategy, E: Strategy> DigraphStrategy<V, E> {
    pub fn new(vertex: V, edge: E) -> Self {
        Self::with_params(vertex, edge, StrategyParams::default())
    }

    pub fn with_params(vertex: V, edge: E, params: StrategyParams) -> Self {
        Self {
            vertex,
            edge,
            params,
        }
    }

    // Builder on the strategy itself, as in `digraph(0..10, 0..10).acyclic()`.
    pub fn max_size(self, max_size: usize) -> Self {
        Self {
            params: self.params.max_size(max_size),
            ..self
        }
    }

    pub fn acyclic(self) -> Self {
        Self {
            params: self.params.acyclic(),
            ..self
        }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            params: self.params.allow_loops(),
            ..self
        }
    }

    pub fn density(self, density: f64) -> Self {
        Self {
            params: self.params.density(density),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    acyclic: bool,
    allow_loops: bool,
    // (0, 1], the upper bound for the probability of an edge between a pair
    density: f64,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 64,
            acyclic: false,
            allow_loops: false,
            density: 0.5,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn acyclic(self) -> Self {
        Self {
            acyclic: true,
            ..self
        }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }

    pub fn density(self, density: f64) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }
}

impl<V: Strategy, E: Strategy> Strategy for DigraphStrategy<V, E>
where
    V::Value: Clone + Eq + Hash,
{
    type Tree = DigraphValueTree<V::Tree, E::Tree>;
    type Value = MapDigraph<V::Value, E::Value>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let n = runner.rng().gen_range(0..=self.params.max_size);
        let p = runner.rng().gen::<f64>() * self.params.density;

        let mut vertices = Vec::with_capacity(n);
        while vertices.len() < n {
            vertices.push(self.vertex.new_tree(runner)?);
        }

        let mut edges = Vec::new();
        for source in 0..n {
            for target in 0..n {
                let allowed = if self.params.acyclic {
                    source < target
                } else {
                    source != target || self.params.allow_loops
                };

                if allowed && runner.rng().gen_bool(p) {
                    edges.push((source, target, self.edge.new_tree(runner)?));
                }
            }
        }

        Ok(DigraphValueTree::new(vertices, edges, self.params))
    }
}

#[derive(Debug, Clone, Copy)]
enum Shrink {
    Edge(usize),
    Vertex(usize),
}

#[derive(Debug, Clone)]
pub struct DigraphValueTree<V, E> {
    vertices: Vec<V>,
    edges: Vec<(usize, usize, E)>,
    removed_vertices: Vec<bool>,
    removed_edges: Vec<bool>,
    // Next candidate for removal.
    next: Shrink,
    last: Option<Shrink>,
    params: StrategyParams,
}

impl<V, E> DigraphValueTree<V, E> {
    fn new(vertices: Vec<V>, edges: Vec<(usize, usize, E)>, params: StrategyParams) -> Self {
        Self {
            removed_vertices: vec![false; vertices.len()],
            removed_edges: vec![false; edges.len()],
            vertices,
            edges,
            next: Shrink::Edge(0),
            last: None,
            params,
        }
    }
}

impl<V: ValueTree, E: ValueTree> ValueTree for DigraphValueTree<V, E>
where
    V::Value: Clone + Eq + Hash,
{
    type Value = MapDigraph<V::Value, E::Value>;

    fn current(&self) -> Self::Value {
        let mut graph = MapDigraph::new();

        // Equal vertex values collapse into one vertex. Edges are checked
        // against the position of its first occurrence.
        let mut canonical = FxHashMap::default();
        let mut positions = vec![None; self.vertices.len()];

        for (i, vertex) in self.vertices.iter().enumerate() {
            if self.removed_vertices[i] {
                continue;
            }

            let vertex = vertex.current();
            let position = *canonical.entry(vertex.clone()).or_insert(i);
            positions[i] = Some((position, vertex.clone()));
            graph.add_vertex(vertex);
        }

        for (i, (source, target, edge)) in self.edges.iter().enumerate() {
            if self.removed_edges[i] {
                continue;
            }

            let (Some((source_pos, source)), Some((target_pos, target))) =
                (&positions[*source], &positions[*target])
            else {
                continue;
            };

            let allowed = if self.params.acyclic {
                source_pos < target_pos
            } else {
                source_pos != target_pos || self.params.allow_loops
            };

            if !allowed {
                continue;
            }

            graph.put_edge(source.clone(), target.clone(), edge.current());
        }

        graph
    }

    fn simplify(&mut self) -> bool {
        loop {
            match self.next {
                Shrink::Edge(i) if i < self.edges.len() => {
                    self.next = Shrink::Edge(i + 1);
                    if !self.removed_edges[i] {
                        self.removed_edges[i] = true;
                        self.last = Some(Shrink::Edge(i));
                        return true;
                    }
                }
                Shrink::Edge(_) => self.next = Shrink::Vertex(0),
                Shrink::Vertex(i) if i < self.vertices.len() => {
                    self.next = Shrink::Vertex(i + 1);
                    if !self.removed_vertices[i] {
                        self.removed_vertices[i] = true;
                        self.last = Some(Shrink::Vertex(i));
                        return true;
                    }
                }
                Shrink::Vertex(_) => return false,
            }
        }
    }

    fn complicate(&mut self) -> bool {
        match self.last.take() {
            Some(Shrink::Edge(i)) => {
                self.removed_edges[i] = false;
                true
            }
            Some(Shrink::Vertex(i)) => {
                self.removed_vertices[i] = false;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{core::DigraphRef, infra::testing::check_consistency};

    proptest! {
        #[test]
        fn generated_digraphs_are_consistent(graph in digraph(any::<u8>(), any::<u8>())) {
            prop_assert!(check_consistency(&graph).is_ok());
        }

        #[test]
        fn max_size(graph in digraph(any::<u32>(), Just(())).max_size(5)) {
            prop_assert!(graph.vertex_count() <= 5);
        }

        #[test]
        fn no_loops_by_default(graph in digraph(any::<u32>(), Just(()))) {
            for vertex in graph.vertices() {
                prop_assert!(!graph.contains_edge(vertex, vertex));
            }
        }

        #[test]
        fn acyclic_with_collapsed_vertices(graph in digraph(0..4u8, Just(())).acyclic()) {
            prop_assert!(graph.is_acyclic());
        }
    }
}
