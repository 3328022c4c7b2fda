use std::collections::VecDeque;

use crate::core::{DigraphRef, VertexMap};

// Shortest path from `to` back to `from`, which together with the edge
// `(from, to)` forms the cycle.
pub fn bfs_collect<'a, V, E, G>(graph: &'a G, from: &'a V, to: &'a V) -> Vec<&'a V>
where
    G: DigraphRef<V, E> + ?Sized,
{
    if !graph.contains_edge(from, to) {
        return Vec::new();
    }

    // Vertices are compared only through the digraph's own maps.
    let mut goal = graph.visit_map::<()>();
    goal.insert(from, ());

    let mut pred = graph.visit_map::<Option<&'a V>>();
    let mut queue = VecDeque::new();

    pred.insert(to, None);
    queue.push_back(to);

    while let Some(vertex) = queue.pop_front() {
        if goal.contains(vertex) {
            let mut current = vertex;
            let mut path = vec![current];
            while let Some(&Some(previous)) = pred.get(current) {
                path.push(previous);
                current = previous;
            }

            path.reverse();
            return path;
        }

        for target in graph.targets(vertex) {
            if !pred.contains(target) {
                pred.insert(target, Some(vertex));
                queue.push_back(target);
            }
        }
    }

    Vec::new()
}
