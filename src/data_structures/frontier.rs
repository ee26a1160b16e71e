use num_traits::Float;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::{Error, Result};

/// Stale heap slots tolerated per live entry before the heap is rebuilt
const COMPACT_FACTOR: usize = 4;
/// Heaps smaller than this are never compacted
const COMPACT_MIN: usize = 64;

/// A node together with its tentative priority
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierEntry<K, P> {
    pub key: K,
    pub priority: P,
}

/// Heap slot ordered so that `BinaryHeap` pops the lowest priority first,
/// and among equal priorities the earliest stamp.
#[derive(Debug)]
struct HeapSlot<K, P: Float> {
    priority: OrderedFloat<P>,
    stamp: u64,
    key: K,
}

impl<K, P: Float> Ord for HeapSlot<K, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.stamp.cmp(&self.stamp))
    }
}

impl<K, P: Float> PartialOrd for HeapSlot<K, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, P: Float> PartialEq for HeapSlot<K, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K, P: Float> Eq for HeapSlot<K, P> {}

/// The open set of a shortest-path search.
///
/// Holds at most one live entry per key. Updating a key pushes a fresh heap
/// slot and leaves the old one behind; the index records which stamp is
/// current so superseded slots are skipped on extraction. This keeps
/// `insert_or_update` at O(log n) and `contains`/`peek` at O(1) expected.
///
/// Ties between equal priorities go to whichever key was inserted or last
/// updated first, so a fixed sequence of operations always extracts in the
/// same order.
#[derive(Debug)]
pub struct Frontier<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Float + Debug,
{
    heap: BinaryHeap<HeapSlot<K, P>>,
    /// Live priority and stamp for every key in the frontier
    index: HashMap<K, (P, u64)>,
    next_stamp: u64,
}

impl<K, P> Frontier<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Float + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            index: HashMap::new(),
            next_stamp: 0,
        }
    }

    /// Creates an empty frontier with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            next_stamp: 0,
        }
    }

    /// Returns true if the frontier holds no live entries
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the number of live entries
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if `key` is currently in the frontier
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the current priority of `key`, if it is in the frontier
    pub fn peek(&self, key: &K) -> Option<P> {
        self.index.get(key).map(|&(priority, _)| priority)
    }

    /// Adds `key` or overwrites its priority, returning the new size.
    ///
    /// The frontier does not check that updates decrease the priority; that
    /// is up to the caller.
    pub fn insert_or_update(&mut self, key: K, priority: P) -> Result<usize> {
        if priority.is_nan() {
            return Err(Error::InvalidPriority(format!("{:?}", priority)));
        }

        let stamp = self.next_stamp;
        self.next_stamp += 1;

        self.index.insert(key.clone(), (priority, stamp));
        self.heap.push(HeapSlot {
            priority: OrderedFloat(priority),
            stamp,
            key,
        });

        if self.heap.len() > COMPACT_MIN && self.heap.len() > COMPACT_FACTOR * self.index.len() {
            self.compact();
        }

        Ok(self.index.len())
    }

    /// Removes and returns the entry with the lowest priority
    pub fn extract_min(&mut self) -> Result<FrontierEntry<K, P>> {
        while let Some(slot) = self.heap.pop() {
            if self.is_live(&slot) {
                self.index.remove(&slot.key);
                return Ok(FrontierEntry {
                    key: slot.key,
                    priority: slot.priority.into_inner(),
                });
            }
        }
        Err(Error::EmptyFrontier)
    }

    /// Returns the entry `extract_min` would return next, without removing it.
    ///
    /// Takes `&mut self` because superseded slots sitting on top of the heap
    /// are discarded on the way; the live entries are left untouched.
    pub fn peek_min(&mut self) -> Option<FrontierEntry<K, P>> {
        while let Some(slot) = self.heap.peek() {
            if self.is_live(slot) {
                return Some(FrontierEntry {
                    key: slot.key.clone(),
                    priority: slot.priority.into_inner(),
                });
            }
            self.heap.pop();
        }
        None
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    fn is_live(&self, slot: &HeapSlot<K, P>) -> bool {
        matches!(self.index.get(&slot.key), Some(&(_, stamp)) if stamp == slot.stamp)
    }

    /// Drops every superseded heap slot
    fn compact(&mut self) {
        let index = &self.index;
        self.heap
            .retain(|slot| matches!(index.get(&slot.key), Some(&(_, stamp)) if stamp == slot.stamp));
    }
}

impl<K, P> Default for Frontier<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
