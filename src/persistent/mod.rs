//! Persistent (immutable) data structures.
//!
//! This module provides [`PersistentOrderedSet`], an immutable ordered set
//! backed by a left-leaning red-black tree.
//!
//! # Structural Sharing
//!
//! Every insertion rebuilds only the nodes on the path from the root to the
//! new element. All other subtrees are shared between the old and the new
//! version, so keeping many versions alive costs O(log N) memory per version.
//!
//! # Examples
//!
//! ```rust
//! use lexitree::persistent::PersistentOrderedSet;
//!
//! let words = PersistentOrderedSet::new()
//!     .insert("banana")
//!     .insert("apple")
//!     .insert("cherry");
//!
//! // Elements are always in sorted order
//! let sorted: Vec<&&str> = words.iter().collect();
//! assert_eq!(sorted, vec![&"apple", &"banana", &"cherry"]);
//!
//! // Structural sharing: the original set is preserved
//! let extended = words.insert("date");
//! assert_eq!(words.len(), 3);    // Original unchanged
//! assert_eq!(extended.len(), 4); // New version
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod ordered_set;

pub use ordered_set::InvariantViolation;
pub use ordered_set::PersistentOrderedSet;
pub use ordered_set::PersistentOrderedSetIntoIterator;
pub use ordered_set::PersistentOrderedSetIterator;
pub use ordered_set::PersistentOrderedSetRangeIterator;

// =============================================================================
// Tests
// =============================================================================
