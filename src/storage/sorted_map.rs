//! Map kept sorted by a [`Comparator`].

use std::{
    cmp::Ordering,
    collections::{btree_map, BTreeMap},
    fmt,
    ops::Bound,
    sync::Arc,
};

use crate::core::VertexMap;

use self::key::{KeyRef, Keyed, Lookup};

use super::order::{Comparator, Natural, OrderedMap};

/// Map backed by a B-tree ordered by a comparator.
///
/// Two keys are considered the same key when the comparator returns
/// [`Equal`](std::cmp::Ordering::Equal) for them. Lookups, insertions and
/// removals are logarithmic.
///
/// The comparator is shared by all stored keys and by all maps created by the
/// same [`SortedOrder`](super::SortedOrder).
pub struct SortedMap<K, T, C = Natural> {
    entries: BTreeMap<Keyed<K, C>, T>,
    comparator: Arc<C>,
}

impl<K, T> SortedMap<K, T, Natural> {
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, T> Default for SortedMap<K, T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T, C> SortedMap<K, T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_shared(Arc::new(comparator))
    }

    pub(crate) fn with_shared(comparator: Arc<C>) -> Self {
        Self {
            entries: BTreeMap::new(),
            comparator,
        }
    }
}

impl<K: Clone, T: Clone, C> Clone for SortedMap<K, T, C> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            comparator: Arc::clone(&self.comparator),
        }
    }
}

impl<K: fmt::Debug, T: fmt::Debug, C> fmt::Debug for SortedMap<K, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(keyed, value)| (&keyed.key, value)))
            .finish()
    }
}

impl<K, T, C> OrderedMap<K, T> for SortedMap<K, T, C>
where
    K: Clone,
    C: Comparator<K>,
{
    type Keys<'a> = Keys<'a, K, T, C>
    where
        Self: 'a,
        K: 'a;

    type ValuesMut<'a> = ValuesMut<'a, K, T, C>
    where
        Self: 'a,
        T: 'a;

    /// The key of the entry.
    type Position = K;

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, key: &K) -> Option<&T> {
        let lookup: &dyn Lookup<K, C> = &KeyRef::new(key, &*self.comparator);
        self.entries.get(lookup)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut T> {
        let lookup: &dyn Lookup<K, C> = &KeyRef::new(key, &*self.comparator);
        self.entries.get_mut(lookup)
    }

    fn insert(&mut self, key: K, value: T) -> Option<T> {
        let keyed = Keyed {
            key,
            comparator: Arc::clone(&self.comparator),
        };
        self.entries.insert(keyed, value)
    }

    fn remove(&mut self, key: &K) -> Option<T> {
        let lookup: &dyn Lookup<K, C> = &KeyRef::new(key, &*self.comparator);
        self.entries.remove(lookup)
    }

    fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut T) -> bool,
    {
        self.entries.retain(|keyed, value| keep(&keyed.key, value));
    }

    fn keys(&self) -> Self::Keys<'_> {
        Keys {
            inner: self.entries.keys(),
        }
    }

    fn values_mut(&mut self) -> Self::ValuesMut<'_> {
        ValuesMut {
            inner: self.entries.values_mut(),
        }
    }

    fn position_of(&self, key: &K) -> Option<K> {
        let lookup: &dyn Lookup<K, C> = &KeyRef::new(key, &*self.comparator);
        self.entries
            .get_key_value(lookup)
            .map(|(keyed, _)| keyed.key.clone())
    }

    fn next_position(&self, after: Option<&K>) -> Option<K> {
        let next = match after {
            None => self.entries.keys().next(),
            Some(after) => {
                let lookup: &dyn Lookup<K, C> = &KeyRef::new(after, &*self.comparator);
                self.entries
                    .range::<dyn Lookup<K, C> + '_, _>((Bound::Excluded(lookup), Bound::Unbounded))
                    .next()
                    .map(|(keyed, _)| keyed)
            }
        };

        next.map(|keyed| keyed.key.clone())
    }

    fn get_at(&self, position: &K) -> Option<(&K, &T)> {
        let lookup: &dyn Lookup<K, C> = &KeyRef::new(position, &*self.comparator);
        self.entries
            .get_key_value(lookup)
            .map(|(keyed, value)| (&keyed.key, value))
    }

    fn get_at_mut(&mut self, position: &K) -> Option<(&K, &mut T)> {
        let lookup: &dyn Lookup<K, C> = &KeyRef::new(position, &*self.comparator);
        self.entries
            .range_mut::<dyn Lookup<K, C> + '_, _>((Bound::Included(lookup), Bound::Included(lookup)))
            .next()
            .map(|(keyed, value)| (&keyed.key, value))
    }

    fn remove_at(&mut self, position: K) -> Option<(K, T, Option<K>)> {
        let lookup: &dyn Lookup<K, C> = &KeyRef::new(&position, &*self.comparator);
        let (keyed, value) = self.entries.remove_entry(lookup)?;
        // Entries after the removed key follow it also when it is gone.
        Some((keyed.key, value, Some(position)))
    }
}

impl<'a, V, T, C> VertexMap<'a, V, T> for SortedMap<&'a V, T, C>
where
    V: 'a,
    C: Comparator<&'a V>,
{
    fn insert(&mut self, vertex: &'a V, value: T) -> Option<T> {
        OrderedMap::insert(self, vertex, value)
    }

    fn get(&self, vertex: &'a V) -> Option<&T> {
        OrderedMap::get(self, &vertex)
    }

    fn remove(&mut self, vertex: &'a V) -> Option<T> {
        OrderedMap::remove(self, &vertex)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Comparator of references ordering them by the referenced values.
pub struct ByRef<C>(Arc<C>);

impl<C> ByRef<C> {
    pub(crate) fn new(comparator: Arc<C>) -> Self {
        Self(comparator)
    }
}

impl<'k, K: ?Sized, C> Comparator<&'k K> for ByRef<C>
where
    C: Comparator<K>,
{
    fn compare(&self, lhs: &&'k K, rhs: &&'k K) -> Ordering {
        self.0.compare(lhs, rhs)
    }
}

pub struct Keys<'a, K, T, C> {
    inner: btree_map::Keys<'a, Keyed<K, C>, T>,
}

impl<'a, K, T, C> Iterator for Keys<'a, K, T, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|keyed| &keyed.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, T, C> ExactSizeIterator for Keys<'_, K, T, C> {}

pub struct ValuesMut<'a, K, T, C> {
    inner: btree_map::ValuesMut<'a, Keyed<K, C>, T>,
}

impl<'a, K, T, C> Iterator for ValuesMut<'a, K, T, C> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, T, C> ExactSizeIterator for ValuesMut<'_, K, T, C> {}

mod key {
    use std::{borrow::Borrow, cmp::Ordering, sync::Arc};

    use super::Comparator;

    /// Stored key carrying the comparator of its map.
    pub struct Keyed<K, C> {
        pub key: K,
        pub comparator: Arc<C>,
    }

    impl<K: Clone, C> Clone for Keyed<K, C> {
        fn clone(&self) -> Self {
            Self {
                key: self.key.clone(),
                comparator: Arc::clone(&self.comparator),
            }
        }
    }

    /// Borrowed key used for lookups.
    pub struct KeyRef<'a, K, C> {
        key: &'a K,
        comparator: &'a C,
    }

    impl<'a, K, C> KeyRef<'a, K, C> {
        pub fn new(key: &'a K, comparator: &'a C) -> Self {
            Self { key, comparator }
        }
    }

    /// Common view of stored and borrowed keys, so that the tree can be
    /// searched without an owned key.
    pub trait Lookup<K, C> {
        fn key(&self) -> &K;
        fn comparator(&self) -> &C;
    }

    impl<K, C> Lookup<K, C> for Keyed<K, C> {
        fn key(&self) -> &K {
            &self.key
        }

        fn comparator(&self) -> &C {
            &self.comparator
        }
    }

    impl<K, C> Lookup<K, C> for KeyRef<'_, K, C> {
        fn key(&self) -> &K {
            self.key
        }

        fn comparator(&self) -> &C {
            self.comparator
        }
    }

    impl<'a, K: 'a, C: 'a> Borrow<dyn Lookup<K, C> + 'a> for Keyed<K, C> {
        fn borrow(&self) -> &(dyn Lookup<K, C> + 'a) {
            self
        }
    }

    impl<K, C: Comparator<K>> Ord for dyn Lookup<K, C> + '_ {
        fn cmp(&self, other: &Self) -> Ordering {
            self.comparator().compare(self.key(), other.key())
        }
    }

    impl<K, C: Comparator<K>> PartialOrd for dyn Lookup<K, C> + '_ {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl<K, C: Comparator<K>> PartialEq for dyn Lookup<K, C> + '_ {
        fn eq(&self, other: &Self) -> bool {
            self.cmp(other) == Ordering::Equal
        }
    }

    impl<K, C: Comparator<K>> Eq for dyn Lookup<K, C> + '_ {}

    impl<K, C: Comparator<K>> Ord for Keyed<K, C> {
        fn cmp(&self, other: &Self) -> Ordering {
            self.comparator.compare(&self.key, &other.key)
        }
    }

    impl<K, C: Comparator<K>> PartialOrd for Keyed<K, C> {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl<K, C: Comparator<K>> PartialEq for Keyed<K, C> {
        fn eq(&self, other: &Self) -> bool {
            self.cmp(other) == Ordering::Equal
        }
    }

    impl<K, C: Comparator<K>> Eq for Keyed<K, C> {}
}
