#![allow(dead_code)]

use fastrand::Rng;
use mapgraph::{
    prelude::*,
    storage::{MapDigraph, SortedOrder},
};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Generates pairs of the G(n, p) model without iterating all pairs.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }
}

/// Fills the digraph with vertices `0..vertex_count` and random edges
/// oriented from the higher vertex to the lower one.
pub fn fill_random<G>(graph: &mut G, vertex_count: usize, density: f32, rng: &mut Rng)
where
    G: DigraphMut<u32, f32>,
{
    for vertex in 0..vertex_count {
        graph.add_vertex(vertex as u32);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.put_edge(u as u32, v as u32, rng.f32());
    }
}

pub fn random_insertion(vertex_count: usize, density: f32, rng: &mut Rng) -> MapDigraph<u32, f32> {
    let mut graph = MapDigraph::new();
    fill_random(&mut graph, vertex_count, density, rng);
    graph
}

pub fn random_sorted(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> MapDigraph<u32, f32, SortedOrder> {
    let mut graph = MapDigraph::sorted();
    fill_random(&mut graph, vertex_count, density, rng);
    graph
}
