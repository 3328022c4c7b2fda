use crate::{
    common::trace,
    core::{DigraphRef, VertexMap},
};

use super::Cycle;

// Iterative depth-first search. An edge to a vertex that is still on the stack
// closes a cycle.
pub fn dfs_find<'a, V, E, G>(graph: &'a G) -> Option<Cycle<'a, V>>
where
    G: DigraphRef<V, E> + ?Sized,
    V: 'a,
{
    // `true` while the vertex is on the stack, `false` once it is finished.
    let mut state = graph.visit_map::<bool>();
    let mut stack: Vec<(&'a V, G::TargetsIter<'a>)> = Vec::new();

    for root in graph.vertices() {
        if state.contains(root) {
            continue;
        }

        state.insert(root, true);
        stack.push((root, graph.targets(root)));

        while let Some((vertex, targets)) = stack.last_mut() {
            match targets.next() {
                Some(target) => match state.get(target) {
                    Some(true) => {
                        let cycle = Cycle {
                            from: *vertex,
                            to: target,
                        };
                        trace!(depth = stack.len(), "found back edge");
                        return Some(cycle);
                    }
                    Some(false) => {}
                    None => {
                        state.insert(target, true);
                        stack.push((target, graph.targets(target)));
                    }
                },
                None => {
                    state.insert(*vertex, false);
                    stack.pop();
                }
            }
        }
    }

    trace!(visited = state.len(), "no cycle");
    None
}
