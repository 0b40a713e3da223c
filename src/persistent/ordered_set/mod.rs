//! Persistent (immutable) ordered set based on a left-leaning red-black tree.
//!
//! This module provides [`PersistentOrderedSet`], an immutable ordered set
//! that uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! Every [`insert`](PersistentOrderedSet::insert) returns a new version of the
//! set. The previous version stays valid and unchanged, and both versions
//! share every subtree that the insertion did not touch.
//!
//! - O(log N) insert
//! - O(log N) contains
//! - O(log N) min/max
//! - O(log N + k) range queries where k is the number of results
//! - O(1) len, `is_empty` and clone
//!
//! # Examples
//!
//! ```rust
//! use lexitree::persistent::PersistentOrderedSet;
//!
//! let version1: PersistentOrderedSet<i32> = [10, 20].into_iter().collect();
//! let version2 = version1.insert(15);
//!
//! assert_eq!(version1.to_sorted_vec(), vec![10, 20]);
//! assert_eq!(version2.to_sorted_vec(), vec![10, 15, 20]);
//! ```
//!
//! # Internal Structure
//!
//! The tree maintains the following invariants after every insertion:
//! 1. Every node is either red or black
//! 2. The root is black
//! 3. Red nodes have only black children
//! 4. Every path from the root to an empty position has the same number of black nodes
//! 5. Red links lean left (the left-leaning discipline used while rebuilding)
//!
//! These invariants keep the tree height below 2·log2(N + 1).
//!
//! Nodes carry no parent pointer. An insertion rebuilds the search path by
//! returning new subtrees from the recursion, so nothing reachable from an
//! older version is ever written to.

mod balance;
mod iter;
mod node;
mod validate;

use super::ReferenceCounter;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::RangeBounds;

use node::{Color, Link, Node};

pub use iter::{
    PersistentOrderedSetIntoIterator, PersistentOrderedSetIterator,
    PersistentOrderedSetRangeIterator,
};
pub use validate::InvariantViolation;

// =============================================================================
// PersistentOrderedSet Definition
// =============================================================================

/// A persistent (immutable) ordered set based on a left-leaning red-black tree.
///
/// Elements must implement `Ord`. The set keeps its elements sorted and
/// free of duplicates, and every version is independently traversable for as
/// long as a handle to it is held.
///
/// # Time Complexity
///
/// | Operation       | Complexity        |
/// |-----------------|-------------------|
/// | `new`           | O(1)              |
/// | `insert`        | O(log N)          |
/// | `contains`      | O(log N)          |
/// | `min`/`max`     | O(log N)          |
/// | `range`         | O(log N + k)      |
/// | `iter`          | O(N)              |
/// | `to_sorted_vec` | O(N)              |
/// | `len`           | O(1)              |
/// | `clone`         | O(1)              |
///
/// # Examples
///
/// ```rust
/// use lexitree::persistent::PersistentOrderedSet;
///
/// let set = PersistentOrderedSet::new()
///     .insert(5)
///     .insert(3)
///     .insert(7)
///     .insert(3);
///
/// assert_eq!(set.to_sorted_vec(), vec![3, 5, 7]);
/// ```
#[derive(Clone)]
pub struct PersistentOrderedSet<T> {
    /// Root node of the tree
    root: Link<T>,
    /// Number of elements
    length: usize,
}

impl<T> PersistentOrderedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexitree::persistent::PersistentOrderedSet;
    ///
    /// let set: PersistentOrderedSet<String> = PersistentOrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns `true` if both versions share the same root node.
    ///
    /// Re-inserting an element that is already present returns a version
    /// for which this holds, since no node is rebuilt.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexitree::persistent::PersistentOrderedSet;
    ///
    /// let set = PersistentOrderedSet::new().insert(1).insert(2);
    /// assert!(set.ptr_eq(&set.insert(2)));
    /// assert!(!set.ptr_eq(&set.insert(3)));
    /// ```
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// An empty set has height 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexitree::persistent::PersistentOrderedSet;
    ///
    /// let set: PersistentOrderedSet<u32> = (1..=1000).collect();
    /// assert!(set.height() <= 2 * 10);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        Self::height_of(self.root.as_ref())
    }

    fn height_of(node: Option<&ReferenceCounter<Node<T>>>) -> usize {
        node.map_or(0, |node_ref| {
            1 + Self::height_of(node_ref.left.as_ref()).max(Self::height_of(node_ref.right.as_ref()))
        })
    }

    /// Returns the number of black nodes on the path from the root to the
    /// leftmost empty position.
    ///
    /// On a valid tree every root-to-empty path has this many black nodes.
    #[must_use]
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut current = self.root.as_ref();
        while let Some(node_ref) = current {
            if node_ref.color == Color::Black {
                count += 1;
            }
            current = node_ref.left.as_ref();
        }
        count
    }
}

impl<T: Clone + Ord> PersistentOrderedSet<T> {
    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexitree::persistent::PersistentOrderedSet;
    ///
    /// let set = PersistentOrderedSet::singleton("apple");
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&"apple"));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().insert(element)
    }

    /// Returns `true` if the set contains the element.
    ///
    /// The element may be any borrowed form of the set's element type, but
    /// the ordering on the borrowed form must match the ordering on the
    /// element type.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexitree::persistent::PersistentOrderedSet;
    ///
    /// let set = PersistentOrderedSet::new().insert("hello".to_string());
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_ref();
        while let Some(node_ref) = current {
            current = match element.cmp(node_ref.element.borrow()) {
                Ordering::Less => node_ref.left.as_ref(),
                Ordering::Greater => node_ref.right.as_ref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Inserts an element, returning the new version of the set.
    ///
    /// Only the nodes on the path from the root to the new element are
    /// rebuilt; the rest of the tree is shared with `self`, which is left
    /// unchanged. If the element is already present, no node is allocated
    /// and the returned version shares `self`'s root.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexitree::persistent::PersistentOrderedSet;
    ///
    /// let set1 = PersistentOrderedSet::new().insert(1);
    /// let set2 = set1.insert(2);
    ///
    /// assert_eq!(set1.len(), 1); // Original unchanged
    /// assert_eq!(set2.len(), 2); // New version
    /// ```
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        Self::insert_into_node(self.root.as_ref(), element).map_or_else(
            || self.clone(),
            |new_root| Self {
                root: Some(ReferenceCounter::new(new_root.recolored(Color::Black))),
                length: self.length + 1,
            },
        )
    }

    /// Recursive helper for insert.
    ///
    /// Returns the rebuilt, balanced subtree root, or `None` when the element
    /// is already present and the subtree is reused as is.
    fn insert_into_node(node: Option<&ReferenceCounter<Node<T>>>, element: T) -> Option<Node<T>> {
        let Some(node_ref) = node else {
            return Some(Node::new_red(element));
        };

        let rebuilt = match element.cmp(&node_ref.element) {
            Ordering::Less => {
                let new_left = Self::insert_into_node(node_ref.left.as_ref(), element)?;
                node_ref
                    .copied()
                    .with_left(Some(ReferenceCounter::new(new_left)))
            }
            Ordering::Greater => {
                let new_right = Self::insert_into_node(node_ref.right.as_ref(), element)?;
                node_ref
                    .copied()
                    .with_right(Some(ReferenceCounter::new(new_right)))
            }
            Ordering::Equal => return None,
        };

        Some(balance::balance(rebuilt))
    }

    /// Returns the smallest element.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexitree::persistent::PersistentOrderedSet;
    ///
    /// let set: PersistentOrderedSet<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        let mut current = self.root.as_ref()?;
        while let Some(left) = current.left.as_ref() {
            current = left;
        }
        Some(&current.element)
    }

    /// Returns the largest element.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexitree::persistent::PersistentOrderedSet;
    ///
    /// let set: PersistentOrderedSet<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        let mut current = self.root.as_ref()?;
        while let Some(right) = current.right.as_ref() {
            current = right;
        }
        Some(&current.element)
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// The iterator walks the tree lazily with an explicit stack, so it can
    /// be created and dropped cheaply and called again any number of times
    /// on the same version.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexitree::persistent::PersistentOrderedSet;
    ///
    /// let set: PersistentOrderedSet<i32> = [3, 1, 2].into_iter().collect();
    ///
    /// let ascending: Vec<&i32> = set.iter().collect();
    /// assert_eq!(ascending, vec![&1, &2, &3]);
    ///
    /// let descending: Vec<&i32> = set.iter().rev().collect();
    /// assert_eq!(descending, vec![&3, &2, &1]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PersistentOrderedSetIterator<'_, T> {
        PersistentOrderedSetIterator::new(self.root.as_ref(), self.length)
    }

    /// Returns the elements of this version as a sorted, duplicate-free vector.
    ///
    /// An empty set yields an empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexitree::persistent::PersistentOrderedSet;
    ///
    /// let words = PersistentOrderedSet::new()
    ///     .insert("banana")
    ///     .insert("apple")
    ///     .insert("cherry")
    ///     .insert("apple");
    /// assert_eq!(words.to_sorted_vec(), vec!["apple", "banana", "cherry"]);
    /// ```
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.length);
        elements.extend(self.iter().cloned());
        elements
    }

    /// Returns an iterator over the elements within the specified range.
    ///
    /// The range is specified using Rust's range syntax:
    /// - `a..b` - from a (inclusive) to b (exclusive)
    /// - `a..=b` - from a (inclusive) to b (inclusive)
    /// - `a..` - from a (inclusive) to the end
    /// - `..b` - from the start to b (exclusive)
    /// - `..` - all elements
    ///
    /// # Complexity
    ///
    /// O(log N + k) where k is the number of elements in the range
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexitree::persistent::PersistentOrderedSet;
    ///
    /// let set: PersistentOrderedSet<i32> = (1..=5).collect();
    ///
    /// let range: Vec<&i32> = set.range(2..=4).collect();
    /// assert_eq!(range, vec![&2, &3, &4]);
    /// ```
    pub fn range<Q, R>(&self, range: R) -> PersistentOrderedSetRangeIterator<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
        R: RangeBounds<Q>,
    {
        PersistentOrderedSetRangeIterator::new(self.root.as_ref(), &range)
    }

    /// Checks every structural invariant of this version.
    ///
    /// Returns the black height of the tree on success.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found, walking the tree in
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexitree::persistent::PersistentOrderedSet;
    ///
    /// let set: PersistentOrderedSet<u32> = (1..=100).collect();
    /// assert_eq!(set.validate(), Ok(set.black_height()));
    /// ```
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        validate::validate(self.root.as_ref(), self.length)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for PersistentOrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> FromIterator<T> for PersistentOrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, element| set.insert(element))
    }
}

impl<T: Clone + Ord> IntoIterator for PersistentOrderedSet<T> {
    type Item = T;
    type IntoIter = PersistentOrderedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        PersistentOrderedSetIntoIterator::new(self.root, self.length)
    }
}

impl<'a, T: Clone + Ord> IntoIterator for &'a PersistentOrderedSet<T> {
    type Item = &'a T;
    type IntoIter = PersistentOrderedSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + Ord> PartialEq for PersistentOrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && (self.ptr_eq(other) || self.iter().eq(other.iter()))
    }
}

impl<T: Clone + Ord> Eq for PersistentOrderedSet<T> {}

/// Computes a hash value for this set.
///
/// The length is hashed first, then each element in ascending order, so
/// two sets holding the same elements hash equally whatever order they were
/// inserted in.
impl<T: Clone + Ord + Hash> Hash for PersistentOrderedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: Clone + Ord + fmt::Debug> fmt::Debug for PersistentOrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Clone + Ord + fmt::Display> fmt::Display for PersistentOrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for PersistentOrderedSet<T>
where
    T: serde::Serialize + Clone + Ord,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct PersistentOrderedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentOrderedSetVisitor<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    type Value = PersistentOrderedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = PersistentOrderedSet::new();
        while let Some(element) = access.next_element()? {
            set = set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentOrderedSet<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentOrderedSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Thread Safety (arc feature only)
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentOrderedSet<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentOrderedSet<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentOrderedSet<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
