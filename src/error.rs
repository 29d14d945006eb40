//! Failure taxonomy. Plain per-site error types; a failed operation
//! leaves its container in the prior valid state.

use core::fmt;

/// Builder-time policy-function resolution failure. Fatal: the
/// container is never constructed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ResolveError {
    /// Neither the default slot nor the direct slot was set.
    Missing,
    /// Both slots were set, with functions that differ by identity.
    Conflicting,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Missing => f.write_str("policy function: neither specified"),
            ResolveError::Conflicting => {
                f.write_str("policy function: both specified and different")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Erase of a key that is not in the map.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MissingKey;

impl fmt::Display for MissingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key not in map")
    }
}

impl std::error::Error for MissingKey {}

/// Peek or dequeue on an empty container.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Empty;

impl fmt::Display for Empty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("container is empty")
    }
}

impl std::error::Error for Empty {}

/// Cursor operation rejected by validation. Checks run in order: owner
/// identity, epoch, position.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CursorError {
    /// The container mutated through a path other than this cursor
    /// since the cursor was created or last advanced.
    Invalidated,
    /// The cursor is past the last element.
    Exhausted,
    /// The current element was removed through this cursor and the
    /// cursor has not been advanced yet.
    AlreadyRemoved,
    /// The container (or the other cursor) is not this cursor's owner.
    WrongContainer,
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorError::Invalidated => f.write_str("container modified outside this cursor"),
            CursorError::Exhausted => f.write_str("cursor is past the last element"),
            CursorError::AlreadyRemoved => {
                f.write_str("current element already removed; advance first")
            }
            CursorError::WrongContainer => f.write_str("cursor used with a different container"),
        }
    }
}

impl std::error::Error for CursorError {}
