//! epoch-collections: four generic containers sharing one storage and
//! iteration discipline, each with erase-during-iteration support.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: build the containers in safe, verifiable layers so each
//!   piece can be reasoned about independently.
//! - Layers:
//!   - epoch: `Lineage` (per-container owner id + epoch counter) and
//!     `Stamp` (cursor-side snapshot). Every structural mutation bumps
//!     the epoch; every cursor operation revalidates owner then epoch.
//!   - resolve: policy-function aliases (ordering, priority, hash) and
//!     the once-per-construction resolution of the default slot vs the
//!     directly-supplied slot. Applied by each builder.
//!   - Containers: `BucketMap` (chained hash map over an explicit bin
//!     array), `TreeMap` (unbalanced BST, in-order iteration),
//!     `HeapQueue` (array-backed max-heap), `LinkedQueue` (singly
//!     linked FIFO). Linked and chained structures store nodes in
//!     slotmap arenas behind generational keys; the heap is a plain
//!     `Vec`.
//!   - Cursors: detached tokens in the manner of a handle. Every
//!     operation takes the owning container by reference and validates
//!     owner identity, epoch, and position, in that order, so two
//!     cursors over one container coexist and misuse surfaces as a
//!     `CursorError` at runtime instead of being prevented by borrows.
//!
//! Iteration strategies (deliberately not unified)
//! - Cursor-over-live-structure for `BucketMap` and `LinkedQueue`:
//!   positions are generational node keys plus chain bookkeeping.
//! - Snapshot for `TreeMap`: the in-order key sequence is captured at
//!   cursor creation and chased through the live tree on access.
//! - Snapshot-drain for `HeapQueue`: the cursor owns a clone consumed
//!   by dequeue, because heap order is only well-defined by repeated
//!   extraction; its `remove` repairs the live heap from the vacated
//!   slot in both percolation directions.
//!
//! Constraints
//! - Single-actor access: no internal synchronization; concurrent
//!   structural mutation is the caller's bug, and the epoch protocol
//!   reports it when it happens through another path than the cursor.
//! - A cursor's own `remove` re-stamps that cursor; sibling cursors
//!   over the same container go stale.
//! - Every mutating operation either fully succeeds or leaves the
//!   container in its prior valid state.
//!
//! Why arenas?
//! - Nodes addressed by generational keys make every link `Copy` and
//!   every stale reference detectable, which keeps the cursor protocol
//!   in safe code; ownership of all nodes stays with the container.

mod epoch;
mod error;
mod resolve;

pub mod bucket_map;
pub mod heap_queue;
pub mod linked_queue;
pub mod tree_map;

// Public surface
pub use bucket_map::{BucketCursor, BucketMap, BucketMapBuilder};
pub use error::{CursorError, Empty, MissingKey, ResolveError};
pub use heap_queue::{HeapCursor, HeapQueue, HeapQueueBuilder, Ordered};
pub use linked_queue::{LinkedQueue, QueueCursor};
pub use resolve::{KeyHash, KeyOrder, Priority};
pub use tree_map::{TreeCursor, TreeMap, TreeMapBuilder};
