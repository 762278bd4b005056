//! Randomized membership set.
//!
//! An ordered-by-nothing set supporting O(1) expected add, remove,
//! membership test, and uniform-random pick. Backed by a dense vector plus
//! a reverse index from element to vector position; removal swaps the
//! victim with the last element so the vector stays dense. This sits on the
//! hot path of work dispatch, hence the O(1) requirement on every op.

use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A set with uniform-random retrieval.
///
/// Picking is decoupled from removal: [`RandomSet::pick_random`] leaves the
/// set untouched so a caller whose downstream step fails can leave state
/// unchanged. Serializes as a plain element vector; the index is rebuilt on
/// deserialize.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "Vec<T>", into = "Vec<T>")]
pub struct RandomSet<T>
where
    T: Clone + Eq + Hash,
{
    /// Dense element storage; position of each element is tracked in `index`.
    items: Vec<T>,
    /// Reverse index: `index[x] == i` iff `items[i] == x`.
    index: HashMap<T, usize>,
}

impl<T> RandomSet<T>
where
    T: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert an element. Returns `false` (no-op) if already present.
    pub fn insert(&mut self, item: T) -> bool {
        if self.index.contains_key(&item) {
            return false;
        }
        self.index.insert(item.clone(), self.items.len());
        self.items.push(item);
        true
    }

    /// Remove an element via swap-with-last. Returns `false` (no-op) if absent.
    pub fn remove(&mut self, item: &T) -> bool {
        let pos = match self.index.remove(item) {
            Some(pos) => pos,
            None => return false,
        };
        self.items.swap_remove(pos);
        if pos < self.items.len() {
            // The former last element now lives at `pos`.
            self.index.insert(self.items[pos].clone(), pos);
        }
        true
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index.contains_key(item)
    }

    /// Pick an element with uniform probability over current members.
    ///
    /// Does not remove the element; removal is the caller's separate call.
    pub fn pick_random(&self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        let i = rand::thread_rng().gen_range(0..self.items.len());
        self.items.get(i)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Snapshot of current members. Order is unspecified and not meaningful;
    /// intended for debugging and test observation only.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Default for RandomSet<T>
where
    T: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for RandomSet<T>
where
    T: Clone + Eq + Hash,
{
    fn from(items: Vec<T>) -> Self {
        let mut set = Self::new();
        for item in items {
            set.insert(item);
        }
        set
    }
}

impl<T> From<RandomSet<T>> for Vec<T>
where
    T: Clone + Eq + Hash,
{
    fn from(set: RandomSet<T>) -> Self {
        set.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_set_is_empty() {
        let set: RandomSet<u32> = RandomSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.pick_random(), None);
    }

    #[test]
    fn insert_and_contains() {
        let mut set = RandomSet::new();
        assert!(set.insert(7u32));
        assert!(set.contains(&7));
        assert!(!set.contains(&8));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn duplicate_insert_is_noop() {
        let mut set = RandomSet::new();
        assert!(set.insert(7u32));
        assert!(!set.insert(7));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut set: RandomSet<u32> = RandomSet::new();
        assert!(!set.remove(&7));
        assert!(set.is_empty());
    }

    #[test]
    fn remove_middle_keeps_index_consistent() {
        let mut set = RandomSet::new();
        for i in 0u32..10 {
            set.insert(i);
        }
        // Remove a middle element; the swapped-in last element must stay reachable.
        assert!(set.remove(&4));
        assert_eq!(set.len(), 9);
        assert!(!set.contains(&4));
        for i in (0u32..10).filter(|&i| i != 4) {
            assert!(set.contains(&i), "lost element {} after swap-remove", i);
        }
        // Every survivor must also still be removable.
        for i in (0u32..10).filter(|&i| i != 4) {
            assert!(set.remove(&i));
        }
        assert!(set.is_empty());
    }

    #[test]
    fn remove_last_element() {
        let mut set = RandomSet::new();
        set.insert(1u32);
        set.insert(2);
        assert!(set.remove(&2));
        assert!(set.contains(&1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn pick_random_is_member_and_does_not_remove() {
        let mut set = RandomSet::new();
        for i in 0u32..5 {
            set.insert(i);
        }
        for _ in 0..50 {
            let picked = *set.pick_random().unwrap();
            assert!(set.contains(&picked));
            assert_eq!(set.len(), 5);
        }
    }

    #[test]
    fn pick_random_reaches_every_member() {
        let mut set = RandomSet::new();
        set.insert(1u32);
        set.insert(2);
        set.insert(3);
        let mut seen = [false; 3];
        // 200 draws over 3 elements; missing one is astronomically unlikely.
        for _ in 0..200 {
            seen[(*set.pick_random().unwrap() - 1) as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn to_vec_matches_membership() {
        let mut set = RandomSet::new();
        set.insert(3u32);
        set.insert(1);
        set.insert(2);
        let mut snapshot = set.to_vec();
        snapshot.sort_unstable();
        assert_eq!(snapshot, vec![1, 2, 3]);
        assert_eq!(set.iter().count(), 3);
    }

    #[test]
    fn bincode_round_trip_rebuilds_index() {
        let mut set = RandomSet::new();
        for i in 0u32..8 {
            set.insert(i);
        }
        let encoded = bincode::serialize(&set).unwrap();
        let mut decoded: RandomSet<u32> = bincode::deserialize(&encoded).unwrap();

        assert_eq!(decoded.len(), 8);
        for i in 0u32..8 {
            assert!(decoded.contains(&i));
        }
        // The rebuilt index must support removal, not just lookups.
        assert!(decoded.remove(&3));
        assert!(!decoded.contains(&3));
        assert_eq!(decoded.len(), 7);
    }

    #[test]
    fn from_vec_deduplicates() {
        let set = RandomSet::from(vec![1u32, 2, 2, 3, 1]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(&1));
        assert!(set.contains(&2));
        assert!(set.contains(&3));
    }
}
