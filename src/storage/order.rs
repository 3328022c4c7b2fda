//! Backing-map strategies.
//!
//! A strategy is a [`MapFactory`]: it creates the maps a digraph stores its
//! vertices and edges in. The map type decides the iteration order.
//!
//! * [`InsertionOrder`] creates hash maps that remember the order in which
//!   keys were first inserted. Replacing the value of an existing key keeps its
//!   position.
//! * [`SortedOrder`] creates [sorted maps](SortedMap) ordered by a
//!   [`Comparator`], either the [natural](Natural) order of the keys or a
//!   closure.

use std::{
    cmp::Ordering,
    hash::{BuildHasher, BuildHasherDefault, Hash},
    sync::Arc,
};

use indexmap::IndexMap;
use rustc_hash::FxHasher;

use crate::core::VertexMap;

use super::sorted_map::{ByRef, SortedMap};

pub type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Ordered associative container used as a vertex map or an edge map.
///
/// Besides lookups, the map supports iteration by [positions](Self::Position)
/// that survive the removal of the entry they point to, which is what the
/// digraph cursors are built on.
pub trait OrderedMap<K, T> {
    type Keys<'a>: Iterator<Item = &'a K>
    where
        Self: 'a,
        K: 'a;

    type ValuesMut<'a>: Iterator<Item = &'a mut T>
    where
        Self: 'a,
        T: 'a;

    /// Location of an entry.
    type Position;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, key: &K) -> Option<&T>;
    fn get_mut(&mut self, key: &K) -> Option<&mut T>;

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Inserts the value and returns the previous one.
    ///
    /// An existing key keeps its position and the originally inserted key.
    fn insert(&mut self, key: K, value: T) -> Option<T>;

    /// Removes the entry and keeps the order of the remaining ones.
    fn remove(&mut self, key: &K) -> Option<T>;

    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&K, &mut T) -> bool;

    fn keys(&self) -> Self::Keys<'_>;
    fn values_mut(&mut self) -> Self::ValuesMut<'_>;

    fn position_of(&self, key: &K) -> Option<Self::Position>;

    /// Returns the position of the entry following `after`, or of the first
    /// entry if `after` is `None`.
    fn next_position(&self, after: Option<&Self::Position>) -> Option<Self::Position>;

    fn get_at(&self, position: &Self::Position) -> Option<(&K, &T)>;
    fn get_at_mut(&mut self, position: &Self::Position) -> Option<(&K, &mut T)>;

    /// Removes the entry at `position`.
    ///
    /// Besides the entry, returns the position to pass to
    /// [`next_position`](Self::next_position) to continue with the entry that
    /// followed the removed one.
    fn remove_at(&mut self, position: Self::Position) -> Option<(K, T, Option<Self::Position>)>;
}

/// Creates empty [ordered maps](OrderedMap) keyed by `K`.
pub trait MapFactory<K> {
    type Map<T>: OrderedMap<K, T>;

    /// Map keyed by borrowed keys, ordered and compared the same way as
    /// [`Map`](Self::Map).
    type VisitMap<'a, T>: VertexMap<'a, K, T>
    where
        K: 'a;

    fn create<T>(&self) -> Self::Map<T>;

    /// Creates the map of outgoing edges of `source`.
    ///
    /// Digraphs create edge maps only through this method, so a factory can
    /// choose the map per source vertex.
    fn create_for<T>(&self, source: &K) -> Self::Map<T> {
        let _ = source;
        self.create()
    }

    fn create_visit_map<'a, T>(&self) -> Self::VisitMap<'a, T>
    where
        K: 'a;
}

/// Total order over values of type `T`.
///
/// Implemented for [`Natural`] and for every closure `Fn(&T, &T) -> Ordering`.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

/// The order given by the [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}

/// Strategy creating insertion-ordered hash maps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InsertionOrder;

impl<K: Hash + Eq> MapFactory<K> for InsertionOrder {
    type Map<T> = IndexMap<K, T, FxBuildHasher>;

    type VisitMap<'a, T> = IndexMap<&'a K, T, FxBuildHasher>
    where
        K: 'a;

    fn create<T>(&self) -> Self::Map<T> {
        IndexMap::default()
    }

    fn create_visit_map<'a, T>(&self) -> Self::VisitMap<'a, T>
    where
        K: 'a,
    {
        IndexMap::default()
    }
}

/// Strategy creating maps sorted by a comparator.
///
/// All maps created by one strategy share its comparator.
#[derive(Debug)]
pub struct SortedOrder<C = Natural> {
    comparator: Arc<C>,
}

impl SortedOrder<Natural> {
    pub fn natural() -> Self {
        Self::by(Natural)
    }
}

impl<C> SortedOrder<C> {
    pub fn by(comparator: C) -> Self {
        Self {
            comparator: Arc::new(comparator),
        }
    }
}

impl<C> Clone for SortedOrder<C> {
    fn clone(&self) -> Self {
        Self {
            comparator: Arc::clone(&self.comparator),
        }
    }
}

impl<C: Default> Default for SortedOrder<C> {
    fn default() -> Self {
        Self::by(C::default())
    }
}

impl<K, C> MapFactory<K> for SortedOrder<C>
where
    K: Clone,
    C: Comparator<K>,
{
    type Map<T> = SortedMap<K, T, C>;

    type VisitMap<'a, T> = SortedMap<&'a K, T, ByRef<C>>
    where
        K: 'a;

    fn create<T>(&self) -> Self::Map<T> {
        SortedMap::with_shared(Arc::clone(&self.comparator))
    }

    fn create_visit_map<'a, T>(&self) -> Self::VisitMap<'a, T>
    where
        K: 'a,
    {
        SortedMap::with_comparator(ByRef::new(Arc::clone(&self.comparator)))
    }
}

impl<K, T, S> OrderedMap<K, T> for IndexMap<K, T, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Keys<'a> = indexmap::map::Keys<'a, K, T>
    where
        Self: 'a,
        K: 'a;

    type ValuesMut<'a> = indexmap::map::ValuesMut<'a, K, T>
    where
        Self: 'a,
        T: 'a;

    type Position = usize;

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&T> {
        IndexMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut T> {
        IndexMap::get_mut(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        IndexMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: T) -> Option<T> {
        IndexMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<T> {
        IndexMap::shift_remove(self, key)
    }

    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&K, &mut T) -> bool,
    {
        IndexMap::retain(self, keep)
    }

    fn keys(&self) -> Self::Keys<'_> {
        IndexMap::keys(self)
    }

    fn values_mut(&mut self) -> Self::ValuesMut<'_> {
        IndexMap::values_mut(self)
    }

    fn position_of(&self, key: &K) -> Option<usize> {
        IndexMap::get_index_of(self, key)
    }

    fn next_position(&self, after: Option<&usize>) -> Option<usize> {
        let next = after.map_or(0, |index| index + 1);
        (next < IndexMap::len(self)).then_some(next)
    }

    fn get_at(&self, position: &usize) -> Option<(&K, &T)> {
        IndexMap::get_index(self, *position)
    }

    fn get_at_mut(&mut self, position: &usize) -> Option<(&K, &mut T)> {
        IndexMap::get_index_mut(self, *position).map(|(key, value)| (&*key, value))
    }

    fn remove_at(&mut self, position: usize) -> Option<(K, T, Option<usize>)> {
        let (key, value) = IndexMap::shift_remove_index(self, position)?;
        Some((key, value, position.checked_sub(1)))
    }
}

impl<'a, V, T, S> VertexMap<'a, V, T> for IndexMap<&'a V, T, S>
where
    V: Hash + Eq + 'a,
    S: BuildHasher,
{
    fn insert(&mut self, vertex: &'a V, value: T) -> Option<T> {
        IndexMap::insert(self, vertex, value)
    }

    fn get(&self, vertex: &'a V) -> Option<&T> {
        IndexMap::get(self, &vertex)
    }

    fn remove(&mut self, vertex: &'a V) -> Option<T> {
        IndexMap::swap_remove(self, &vertex)
    }

    fn len(&self) -> usize {
        IndexMap::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill<M: OrderedMap<i32, &'static str>>(map: &mut M) {
        map.insert(3, "c");
        map.insert(1, "a");
        map.insert(2, "b");
        map.insert(1, "A");
    }

    fn keys<M: OrderedMap<i32, &'static str>>(map: &M) -> Vec<i32> {
        map.keys().copied().collect()
    }

    fn walk<M: OrderedMap<i32, &'static str>>(map: &M) -> Vec<i32> {
        let mut keys = Vec::new();
        let mut position = map.next_position(None);
        while let Some(current) = position {
            keys.extend(map.get_at(&current).map(|(key, _)| *key));
            position = map.next_position(Some(&current));
        }
        keys
    }

    // Removes every entry with an even key while walking by positions.
    fn remove_even<M: OrderedMap<i32, &'static str>>(map: &mut M) -> Vec<i32> {
        let mut removed = Vec::new();
        let mut last = None;
        while let Some(position) = map.next_position(last.as_ref()) {
            let key = map.get_at(&position).map(|(key, _)| *key);
            if key.map_or(false, |key| key % 2 == 0) {
                let (key, _, next) = map.remove_at(position).unwrap();
                removed.push(key);
                last = next;
            } else {
                last = Some(position);
            }
        }
        removed
    }

    #[test]
    fn insertion_order() {
        let mut map = MapFactory::<i32>::create(&InsertionOrder);
        fill(&mut map);

        assert_eq!(keys(&map), vec![3, 1, 2]);
        assert_eq!(walk(&map), vec![3, 1, 2]);
        assert_eq!(OrderedMap::get(&map, &1), Some(&"A"));

        assert_eq!(OrderedMap::remove(&mut map, &3), Some("c"));
        map.insert(3, "c");
        assert_eq!(keys(&map), vec![1, 2, 3]);
    }

    #[test]
    fn natural_order() {
        let mut map = MapFactory::<i32>::create(&SortedOrder::natural());
        fill(&mut map);

        assert_eq!(keys(&map), vec![1, 2, 3]);
        assert_eq!(walk(&map), vec![1, 2, 3]);
        assert_eq!(map.get(&1), Some(&"A"));
    }

    #[test]
    fn comparator_order() {
        let mut map = MapFactory::<i32>::create(&SortedOrder::by(|a: &i32, b: &i32| b.cmp(a)));
        fill(&mut map);

        assert_eq!(keys(&map), vec![3, 2, 1]);
    }

    #[test]
    fn removal_during_walk_insertion() {
        let mut map = MapFactory::<i32>::create(&InsertionOrder);
        for key in [4, 1, 2, 6, 3, 8] {
            map.insert(key, "");
        }

        assert_eq!(remove_even(&mut map), vec![4, 2, 6, 8]);
        assert_eq!(keys(&map), vec![1, 3]);
    }

    #[test]
    fn removal_during_walk_sorted() {
        let mut map = MapFactory::<i32>::create(&SortedOrder::natural());
        for key in [4, 1, 2, 6, 3, 8] {
            map.insert(key, "");
        }

        assert_eq!(remove_even(&mut map), vec![2, 4, 6, 8]);
        assert_eq!(keys(&map), vec![1, 3]);
    }

    #[test]
    fn position_of() {
        let mut map = MapFactory::<i32>::create(&InsertionOrder);
        fill(&mut map);

        let position = OrderedMap::position_of(&map, &1).unwrap();
        assert_eq!(OrderedMap::get_at(&map, &position), Some((&1, &"A")));
        assert_eq!(OrderedMap::position_of(&map, &7), None);
    }

    fn identifies<'a, M: VertexMap<'a, i32, ()>>(mut visited: M, one: &'a i32, other: &'a i32) -> bool {
        assert_eq!(visited.insert(one, ()), None);
        let found = visited.contains(other);
        assert_eq!(visited.remove(one), Some(()));
        assert!(visited.is_empty());
        found
    }

    #[test]
    fn visit_maps_follow_strategy_identity() {
        let by_abs = SortedOrder::by(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
        let (one, minus_one) = (1, -1);

        let visited = MapFactory::<i32>::create_visit_map::<()>(&by_abs);
        assert!(identifies(visited, &one, &minus_one));

        let visited = MapFactory::<i32>::create_visit_map::<()>(&InsertionOrder);
        assert!(!identifies(visited, &one, &minus_one));
    }
}
