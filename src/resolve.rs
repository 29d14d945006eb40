//! Policy-function aliases and the once-per-construction resolution
//! rule shared by every builder.

use crate::error::ResolveError;

/// Strict "less" ordering over `TreeMap` keys.
pub type KeyOrder<K> = fn(&K, &K) -> bool;

/// Strict "greater priority" relation over `HeapQueue` elements.
pub type Priority<T> = fn(&T, &T) -> bool;

/// Hash over `BucketMap` keys. The result may be negative; bin
/// compression takes the absolute value.
pub type KeyHash<K> = fn(&K) -> i64;

/// Resolve the default slot and the directly-supplied slot into the
/// one function the container stores for its lifetime. Neither set is
/// an error; both set and different (by fn identity) is an error;
/// otherwise the unique function wins.
pub(crate) fn resolve<F>(default: Option<F>, supplied: Option<F>) -> Result<F, ResolveError>
where
    F: Copy + PartialEq,
{
    match (default, supplied) {
        (None, None) => Err(ResolveError::Missing),
        (Some(d), Some(s)) if d != s => Err(ResolveError::Conflicting),
        (Some(d), _) => Ok(d),
        (None, Some(s)) => Ok(s),
    }
}
