//! Min-priority frontier for best-first search.
//!
//! A binary heap over a caller-supplied total order. The smallest element
//! sits at index 0. Sift-up moves an element while it is strictly smaller
//! than its parent; sift-down stops as soon as the element is smaller than
//! or equal to its smaller child. Equal keys therefore never swap, which
//! keeps the pop order stable for a given insertion history.

use std::cmp::Ordering;
use std::fmt;

/// Returned by [`Frontier::extract_min`] when the queue holds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueue;

impl fmt::Display for EmptyQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("extract_min on an empty frontier")
    }
}

impl std::error::Error for EmptyQueue {}

/// A min-heap ordered by a comparator.
///
/// Storage starts at the capacity given to the constructor and doubles each
/// time it fills up, so [`insert`](Self::insert) never fails.
pub struct Frontier<T, F = fn(&T, &T) -> Ordering> {
    items: Vec<T>,
    cmp: F,
}

impl<T: Ord> Frontier<T> {
    /// Create a frontier ordered by `T`'s own [`Ord`].
    pub fn new(capacity: usize) -> Self {
        Self::with_comparator(capacity, <T as Ord>::cmp)
    }
}

impl<T, F> Frontier<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Create a frontier ordered by `cmp`, which must be a total order.
    pub fn with_comparator(capacity: usize, cmp: F) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the frontier is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements the frontier can hold before growing again.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// The smallest element, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Add an element.
    pub fn insert(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            let extra = self.items.capacity().max(1);
            self.items.reserve_exact(extra);
        }
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the smallest element.
    pub fn extract_min(&mut self) -> Result<T, EmptyQueue> {
        if self.items.is_empty() {
            return Err(EmptyQueue);
        }
        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Drop every queued element. The allocation is kept for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if (self.cmp)(&self.items[idx], &self.items[parent]) != Ordering::Less {
                break;
            }
            self.items.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        let half = len / 2;
        while idx < half {
            let mut child = 2 * idx + 1;
            let right = child + 1;
            if right < len && (self.cmp)(&self.items[right], &self.items[child]) == Ordering::Less
            {
                child = right;
            }
            if (self.cmp)(&self.items[idx], &self.items[child]) != Ordering::Greater {
                break;
            }
            self.items.swap(idx, child);
            idx = child;
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Frontier<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frontier")
            .field("len", &self.items.len())
            .field("capacity", &self.items.capacity())
            .field("min", &self.items.first())
            .finish()
    }
}
