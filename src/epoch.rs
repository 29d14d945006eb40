//! Container lineage and cursor stamps.
//!
//! Every container owns a `Lineage`: a process-unique owner id plus an
//! epoch counter bumped on every structural mutation (never on reads).
//! A cursor captures a `Stamp` at creation and revalidates it before
//! every operation, so a mutation made through any path other than the
//! cursor itself is reported instead of producing a stale position.

use crate::error::CursorError;
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_OWNER: AtomicU64 = AtomicU64::new(0);

#[derive(Debug)]
pub(crate) struct Lineage {
    owner: u64,
    epoch: u64,
}

impl Lineage {
    pub(crate) fn new() -> Self {
        Self {
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            epoch: 0,
        }
    }

    /// Record a structural mutation.
    pub(crate) fn bump(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    pub(crate) fn stamp(&self) -> Stamp {
        Stamp {
            owner: self.owner,
            epoch: self.epoch,
        }
    }
}

/// Cursor-side snapshot of a container's lineage.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Stamp {
    owner: u64,
    epoch: u64,
}

impl Stamp {
    /// Owner identity first, then epoch equality.
    pub(crate) fn check(&self, lineage: &Lineage) -> Result<(), CursorError> {
        if self.owner != lineage.owner {
            return Err(CursorError::WrongContainer);
        }
        if self.epoch != lineage.epoch {
            return Err(CursorError::Invalidated);
        }
        Ok(())
    }

    /// Re-arm after a mutation made through the owning cursor itself.
    /// Sibling cursors keep their old epoch and go stale.
    pub(crate) fn refresh(&mut self, lineage: &Lineage) {
        self.epoch = lineage.epoch;
    }
}
