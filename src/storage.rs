//! Digraph storage.
//!
//! The [adjacency-map digraph](map_digraph) keeps, for every vertex, the map
//! of its out-neighbors to the payloads of the corresponding edges. Both levels
//! of maps are created by [strategies](order) chosen when the digraph is
//! constructed:
//!
//! |                | **[InsertionOrder]** | **[SortedOrder]** |
//! |----------------|----------------------|-------------------|
//! | iteration      | first insertion      | comparator        |
//! | lookup         | _O(1)_               | _O(log n)_        |
//! | insert new     | _O*(1)_              | _O(log n)_        |
//! | remove         | _O(n)_               | _O(log n)_        |
//! | vertex bound   | `Eq + Hash`          | [`Comparator`], `Clone` |
//!
//! * _n_ – size of the particular map (vertex count or out-degree)
//! * _O*(..)_ – amortized complexity
//!
//! Removals keep the order of the remaining elements, which is why they are
//! linear for insertion order.
//!
//! [InsertionOrder]: order::InsertionOrder
//! [SortedOrder]: order::SortedOrder
//! [`Comparator`]: order::Comparator

pub mod map_digraph;
pub mod order;
pub mod sorted_map;

#[doc(inline)]
pub use self::{
    map_digraph::{MapDigraph, MapDigraphFactory},
    order::{InsertionOrder, SortedOrder},
    sorted_map::SortedMap,
};

#[cfg(test)]
pub(crate) mod tests {
    use crate::{
        core::{Cursor, DigraphMut},
        infra::testing::check_consistency,
    };

    pub fn test_basic<G>(mut graph: G)
    where
        G: DigraphMut<u32, i32>,
    {
        assert!(graph.add_vertex(0));
        assert!(!graph.add_vertex(0));

        assert_eq!(graph.put_edge(0, 1, 1), None);
        assert_eq!(graph.put_edge(0, 2, 2), None);
        assert_eq!(graph.put_edge(0, 3, 3), None);
        assert_eq!(graph.put_edge(2, 1, 4), None);
        assert_eq!(graph.put_edge(2, 3, 5), None);
        assert_eq!(graph.put_edge(3, 3, 6), None);

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 6);
        check_consistency(&graph).unwrap();

        assert_eq!(graph.remove_edge(&0, &3), Some(3));
        assert_eq!(graph.remove_edge(&0, &3), None);
        assert!(graph.remove_vertex(&1));
        assert!(!graph.remove_vertex(&1));

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        check_consistency(&graph).unwrap();

        let mut out_deg = graph
            .vertices()
            .map(|vertex| graph.out_degree(vertex))
            .collect::<Vec<_>>();
        out_deg.sort_unstable();
        assert_eq!(out_deg, vec![1, 1, 1]);

        assert_eq!(graph.edge(&2, &3), Some(&5));
        assert_eq!(graph.edge(&3, &2), None);
        assert!(graph.contains_edge(&3, &3));
        assert!(!graph.is_acyclic());

        graph.remove_vertices([&3, &0, &3, &7]);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![&2]);
        assert_eq!(graph.edge_count(), 0);
        check_consistency(&graph).unwrap();
    }

    pub fn test_put_replaces<G>(mut graph: G)
    where
        G: DigraphMut<u32, i32>,
    {
        graph.put_edge(1, 2, 10);
        graph.put_edge(1, 3, 20);

        assert_eq!(graph.put_edge(1, 2, 30), Some(10));
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge(&1, &2), Some(&30));
        assert_eq!(graph.targets(&1).collect::<Vec<_>>(), vec![&2, &3]);
    }

    pub fn test_missing<G>(mut graph: G)
    where
        G: DigraphMut<u32, i32>,
    {
        graph.put_edge(1, 2, 0);

        assert_eq!(graph.targets(&7).count(), 0);
        assert_eq!(graph.targets(&2).count(), 0);
        assert_eq!(graph.out_degree(&7), 0);
        assert_eq!(graph.edge(&7, &1), None);
        assert!(!graph.contains_vertex(&7));
        assert_eq!(graph.remove_edge(&7, &1), None);
        assert_eq!(graph.remove_edge(&2, &1), None);

        let mut cursor = graph.targets_mut(&7);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.remove_current(), None);
    }

    pub fn test_cursors<G>(mut graph: G)
    where
        G: DigraphMut<u32, i32>,
    {
        for (source, target) in [(1, 2), (1, 3), (2, 1), (3, 3), (4, 1), (1, 4)] {
            graph.put_edge(source, target, (source * 10 + target) as i32);
        }

        {
            let mut cursor = graph.vertices_mut();
            assert_eq!(cursor.remove_current(), None);
            while let Some(vertex) = cursor.next() {
                if *vertex == 1 {
                    assert_eq!(cursor.remove_current(), Some(1));
                    assert_eq!(cursor.remove_current(), None);
                }
            }
        }

        assert!(!graph.contains_vertex(&1));
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge(&3, &3));
        check_consistency(&graph).unwrap();

        graph.put_edge(2, 3, 23);
        graph.put_edge(2, 4, 24);

        let mut removed = Vec::new();
        {
            let mut cursor = graph.targets_mut(&2);
            while let Some(target) = cursor.next() {
                if *target == 3 {
                    removed.extend(cursor.remove_current());
                }
            }
        }

        assert_eq!(removed, vec![(3, 23)]);
        assert_eq!(graph.targets(&2).collect::<Vec<_>>(), vec![&4]);
        assert_eq!(graph.edge_count(), 2);
        check_consistency(&graph).unwrap();

        graph.retain_targets(&2, |_| false);
        assert_eq!(graph.out_degree(&2), 0);
        assert_eq!(graph.edge_count(), 1);

        graph.retain_vertices(|vertex| *vertex != 3);
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        check_consistency(&graph).unwrap();
    }
}
