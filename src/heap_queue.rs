//! HeapQueue: array-backed binary max-heap under a caller-supplied
//! strict "greater priority" relation.
//!
//! The backing `Vec` is the heap: root at 0, `left(i) = 2i+1`,
//! `right(i) = 2i+2`, `parent(i) = (i-1)/2`. Heap order is only
//! well-defined by repeated extraction, so the ordered views
//! (`ordered`, `HeapCursor`) drain an owned snapshot, while the
//! cursor's `remove` repairs the live heap in place by percolating
//! from the vacated slot in both directions.

use crate::epoch::{Lineage, Stamp};
use crate::error::{CursorError, Empty, ResolveError};
use crate::resolve::{resolve, Priority};
use core::fmt;
use core::mem;

// Index helpers over the flat layout.
fn left(i: usize) -> usize {
    2 * i + 1
}
fn right(i: usize) -> usize {
    2 * i + 2
}
fn parent(i: usize) -> usize {
    (i - 1) / 2
}
fn is_root(i: usize) -> bool {
    i == 0
}

pub struct HeapQueue<T> {
    gt: Priority<T>,
    data: Vec<T>,
    lineage: Lineage,
}

impl<T> HeapQueue<T> {
    pub fn new(gt: Priority<T>) -> Self {
        Self {
            gt,
            data: Vec::new(),
            lineage: Lineage::new(),
        }
    }

    pub fn with_capacity(gt: Priority<T>, capacity: usize) -> Self {
        Self {
            gt,
            data: Vec::with_capacity(capacity),
            lineage: Lineage::new(),
        }
    }

    /// Seed from an arbitrary sequence, then establish the heap
    /// invariant with one O(n) heapify pass.
    pub fn from_values<I>(gt: Priority<T>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut pq = Self {
            gt,
            data: values.into_iter().collect(),
            lineage: Lineage::new(),
        };
        pq.heapify();
        pq
    }

    pub fn builder() -> HeapQueueBuilder<T> {
        HeapQueueBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The highest-priority element, without removing it.
    pub fn peek(&self) -> Result<&T, Empty> {
        self.data.first().ok_or(Empty)
    }

    pub fn enqueue(&mut self, value: T) {
        self.data.push(value);
        let i = self.data.len() - 1;
        self.percolate_up(i);
        self.lineage.bump();
    }

    pub fn enqueue_all<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut count = 0;
        for v in values {
            self.enqueue(v);
            count += 1;
        }
        count
    }

    pub fn dequeue(&mut self) -> Result<T, Empty> {
        let last = self.data.pop().ok_or(Empty)?;
        let top = if self.data.is_empty() {
            last
        } else {
            // Move the last element into the root slot and sift it.
            let top = mem::replace(&mut self.data[0], last);
            self.percolate_down(0);
            top
        };
        self.lineage.bump();
        Ok(top)
    }

    /// Drops every element; keeps the backing capacity.
    pub fn clear(&mut self) {
        self.data.clear();
        self.lineage.bump();
    }

    fn in_heap(&self, i: usize) -> bool {
        i < self.data.len()
    }

    fn percolate_up(&mut self, mut i: usize) {
        while !is_root(i) && (self.gt)(&self.data[i], &self.data[parent(i)]) {
            self.data.swap(i, parent(i));
            i = parent(i);
        }
    }

    fn percolate_down(&mut self, mut i: usize) {
        loop {
            let l = left(i);
            if !self.in_heap(l) {
                break;
            }
            let r = right(i);
            // Favored child: left, unless the right child is in the
            // heap and strictly greater.
            let child = if self.in_heap(r) && (self.gt)(&self.data[r], &self.data[l]) {
                r
            } else {
                l
            };
            if !(self.gt)(&self.data[child], &self.data[i]) {
                break;
            }
            self.data.swap(i, child);
            i = child;
        }
    }

    /// O(n) repair from an arbitrary array: percolate down every index
    /// from the last to the root.
    fn heapify(&mut self) {
        for i in (0..self.data.len()).rev() {
            self.percolate_down(i);
        }
    }
}

impl<T: Clone> HeapQueue<T> {
    /// Copy under a possibly different priority relation. The heap
    /// property is relation-specific: an identical function copies the
    /// array verbatim, a different one re-heapifies.
    pub fn with_priority(&self, gt: Priority<T>) -> Self {
        let mut pq = Self {
            gt,
            data: self.data.clone(),
            lineage: Lineage::new(),
        };
        if gt != self.gt {
            pq.heapify();
        }
        pq
    }

    /// Owned elements in strict priority order, drained from a
    /// snapshot; the live heap is untouched.
    pub fn ordered(&self) -> Ordered<T> {
        Ordered {
            drain: self.clone(),
        }
    }

    /// Detached cursor holding an owned snapshot consumed in priority
    /// order as the cursor advances.
    pub fn cursor(&self) -> HeapCursor<T> {
        HeapCursor {
            stamp: self.lineage.stamp(),
            drain: self.clone(),
            removed: false,
        }
    }
}

impl<T: Clone> Clone for HeapQueue<T> {
    fn clone(&self) -> Self {
        Self {
            gt: self.gt,
            data: self.data.clone(),
            lineage: Lineage::new(),
        }
    }
}

impl<T: Clone + PartialEq> PartialEq for HeapQueue<T> {
    /// Same size, identical priority function, and equal extraction
    /// order, checked by draining clones in lock-step.
    fn eq(&self, other: &Self) -> bool {
        if self.data.len() != other.data.len() || self.gt != other.gt {
            return false;
        }
        let mut a = self.clone();
        let mut b = other.clone();
        while let (Ok(x), Ok(y)) = (a.dequeue(), b.dequeue()) {
            if x != y {
                return false;
            }
        }
        true
    }
}

impl<T: fmt::Debug> fmt::Debug for HeapQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T> Extend<T> for HeapQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.enqueue_all(values);
    }
}

/// Snapshot-drain iterator returned by [`HeapQueue::ordered`].
pub struct Ordered<T> {
    drain: HeapQueue<T>,
}

impl<T> Iterator for Ordered<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.drain.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.drain.len();
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Ordered<T> {}

/// Builder carrying the two priority-function slots plus an initial
/// capacity.
pub struct HeapQueueBuilder<T> {
    default_priority: Option<Priority<T>>,
    priority: Option<Priority<T>>,
    capacity: usize,
}

impl<T> HeapQueueBuilder<T> {
    pub fn new() -> Self {
        Self {
            default_priority: None,
            priority: None,
            capacity: 0,
        }
    }

    /// The type-level analog: the relation the queue was "declared" with.
    pub fn default_priority(mut self, gt: Priority<T>) -> Self {
        self.default_priority = Some(gt);
        self
    }

    /// The construction-time analog: the relation supplied by the caller.
    pub fn priority(mut self, gt: Priority<T>) -> Self {
        self.priority = Some(gt);
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn build(self) -> Result<HeapQueue<T>, ResolveError> {
        let gt = resolve(self.default_priority, self.priority)?;
        Ok(HeapQueue::with_capacity(gt, self.capacity))
    }
}

impl<T> Default for HeapQueueBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Detached cursor over a `HeapQueue`.
///
/// Iteration order is strictly priority order: the cursor owns a
/// snapshot of the whole heap and dequeues it to advance. `remove`
/// mutates the live heap instead: the current front value is located
/// in the live array, the last element moves into its slot, and the
/// slot is repaired in both directions since the replacement's correct
/// position relative to the gap is unknown.
#[derive(Debug)]
pub struct HeapCursor<T> {
    stamp: Stamp,
    drain: HeapQueue<T>,
    removed: bool,
}

impl<T> HeapCursor<T> {
    pub fn peek<'a>(&'a self, owner: &HeapQueue<T>) -> Result<&'a T, CursorError> {
        self.stamp.check(&owner.lineage)?;
        if self.removed {
            return Err(CursorError::AlreadyRemoved);
        }
        self.drain.peek().map_err(|_| CursorError::Exhausted)
    }

    /// Step to the next element; a no-op at the end. After a `remove`,
    /// the snapshot front already names the next element, so the first
    /// advance only clears the removed flag.
    pub fn advance(&mut self, owner: &HeapQueue<T>) -> Result<(), CursorError> {
        self.stamp.check(&owner.lineage)?;
        if self.removed {
            self.removed = false;
            return Ok(());
        }
        let _ = self.drain.dequeue();
        Ok(())
    }

    pub fn is_exhausted(&self, owner: &HeapQueue<T>) -> Result<bool, CursorError> {
        self.stamp.check(&owner.lineage)?;
        Ok(self.drain.is_empty())
    }

    pub fn same_position(
        &self,
        other: &HeapCursor<T>,
        owner: &HeapQueue<T>,
    ) -> Result<bool, CursorError> {
        self.stamp.check(&owner.lineage)?;
        other.stamp.check(&owner.lineage)?;
        // Same epoch means both snapshots drain the same sequence, so
        // remaining length determines the position.
        Ok(self.drain.len() == other.drain.len() && self.removed == other.removed)
    }
}

impl<T: PartialEq> HeapCursor<T> {
    /// Remove the current front value from the live heap. The cursor
    /// is re-stamped, so it survives its own mutation while any
    /// sibling cursor goes stale.
    pub fn remove(&mut self, owner: &mut HeapQueue<T>) -> Result<T, CursorError> {
        self.stamp.check(&owner.lineage)?;
        if self.removed {
            return Err(CursorError::AlreadyRemoved);
        }
        let value = self.drain.dequeue().map_err(|_| CursorError::Exhausted)?;
        let index = owner
            .data
            .iter()
            .position(|v| *v == value)
            .ok_or(CursorError::Invalidated)?;
        owner.data.swap_remove(index);
        if index < owner.data.len() {
            owner.percolate_down(index);
            owner.percolate_up(index);
        }
        owner.lineage.bump();
        self.stamp.refresh(&owner.lineage);
        self.removed = true;
        Ok(value)
    }
}
