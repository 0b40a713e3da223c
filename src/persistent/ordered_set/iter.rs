//! In-order traversal of a [`PersistentOrderedSet`](super::PersistentOrderedSet).
//!
//! All iterators walk the tree with an explicit stack of pending ancestors
//! instead of recursion. The stack never holds more than one entry per
//! level, and the tree height is bounded by 2·log2(N + 1), so the inline
//! capacity below covers any set that fits in memory in practice without
//! touching the heap.

use std::borrow::Borrow;
use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};

use smallvec::SmallVec;

use super::super::ReferenceCounter;
use super::node::{Link, Node};

/// Inline capacity of the traversal stacks.
const STACK_CAPACITY: usize = 48;

type NodeStack<'a, T> = SmallVec<[&'a ReferenceCounter<Node<T>>; STACK_CAPACITY]>;

/// Pushes `node` and its chain of left descendants.
fn push_left_spine<'a, T>(stack: &mut NodeStack<'a, T>, mut node: Option<&'a ReferenceCounter<Node<T>>>) {
    while let Some(node_ref) = node {
        stack.push(node_ref);
        node = node_ref.left.as_ref();
    }
}

/// Pushes `node` and its chain of right descendants.
fn push_right_spine<'a, T>(stack: &mut NodeStack<'a, T>, mut node: Option<&'a ReferenceCounter<Node<T>>>) {
    while let Some(node_ref) = node {
        stack.push(node_ref);
        node = node_ref.right.as_ref();
    }
}

// =============================================================================
// Borrowing Iterator
// =============================================================================

/// An iterator over references to the elements of a
/// [`PersistentOrderedSet`](super::PersistentOrderedSet), in ascending order.
///
/// Iterating from both ends is supported; the two ends never cross because
/// the iterator tracks how many elements are left.
pub struct PersistentOrderedSetIterator<'a, T> {
    /// Ancestors still to be visited from the front
    front: NodeStack<'a, T>,
    /// Ancestors still to be visited from the back
    back: NodeStack<'a, T>,
    /// Number of elements not yet returned from either end
    remaining: usize,
}

impl<'a, T> PersistentOrderedSetIterator<'a, T> {
    pub(super) fn new(root: Option<&'a ReferenceCounter<Node<T>>>, length: usize) -> Self {
        let mut front = NodeStack::new();
        let mut back = NodeStack::new();
        push_left_spine(&mut front, root);
        push_right_spine(&mut back, root);
        Self {
            front,
            back,
            remaining: length,
        }
    }
}

impl<T> Clone for PersistentOrderedSetIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for PersistentOrderedSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front.pop()?;
        push_left_spine(&mut self.front, node.right.as_ref());
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for PersistentOrderedSetIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back.pop()?;
        push_right_spine(&mut self.back, node.left.as_ref());
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<T> ExactSizeIterator for PersistentOrderedSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for PersistentOrderedSetIterator<'_, T> {}

// =============================================================================
// Range Iterator
// =============================================================================

/// An iterator over the elements of a
/// [`PersistentOrderedSet`](super::PersistentOrderedSet) that fall inside a
/// range, in ascending order.
pub struct PersistentOrderedSetRangeIterator<'a, T> {
    stack: NodeStack<'a, T>,
    /// The largest element inside the range; iteration stops after it.
    last: Option<&'a T>,
}

impl<'a, T: Ord> PersistentOrderedSetRangeIterator<'a, T> {
    pub(super) fn new<Q, R>(root: Option<&'a ReferenceCounter<Node<T>>>, range: &R) -> Self
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
        R: RangeBounds<Q>,
    {
        let mut stack = NodeStack::new();
        let mut node = root;
        while let Some(node_ref) = node {
            if satisfies_start(node_ref.element.borrow(), range.start_bound()) {
                stack.push(node_ref);
                node = node_ref.left.as_ref();
            } else {
                node = node_ref.right.as_ref();
            }
        }

        let mut last = None;
        let mut node = root;
        while let Some(node_ref) = node {
            if satisfies_end(node_ref.element.borrow(), range.end_bound()) {
                last = Some(&node_ref.element);
                node = node_ref.right.as_ref();
            } else {
                node = node_ref.left.as_ref();
            }
        }

        let non_empty = matches!(
            (stack.last(), last),
            (Some(first), Some(last)) if first.element <= *last
        );
        if !non_empty {
            stack.clear();
        }

        Self { stack, last }
    }
}

fn satisfies_start<Q: Ord + ?Sized>(element: &Q, bound: Bound<&Q>) -> bool {
    match bound {
        Bound::Included(start) => element >= start,
        Bound::Excluded(start) => element > start,
        Bound::Unbounded => true,
    }
}

fn satisfies_end<Q: Ord + ?Sized>(element: &Q, bound: Bound<&Q>) -> bool {
    match bound {
        Bound::Included(end) => element <= end,
        Bound::Excluded(end) => element < end,
        Bound::Unbounded => true,
    }
}

impl<'a, T> Iterator for PersistentOrderedSetRangeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if self.last.is_some_and(|last| std::ptr::eq(last, &node.element)) {
            self.stack.clear();
        } else {
            push_left_spine(&mut self.stack, node.right.as_ref());
        }
        Some(&node.element)
    }
}

impl<T> FusedIterator for PersistentOrderedSetRangeIterator<'_, T> {}

// =============================================================================
// Owning Iterator
// =============================================================================

/// An owning iterator over the elements of a
/// [`PersistentOrderedSet`](super::PersistentOrderedSet), in ascending order.
///
/// Nodes may still be shared with other versions, so elements are cloned out
/// of them.
pub struct PersistentOrderedSetIntoIterator<T> {
    stack: SmallVec<[ReferenceCounter<Node<T>>; STACK_CAPACITY]>,
    remaining: usize,
}

impl<T> PersistentOrderedSetIntoIterator<T> {
    pub(super) fn new(root: Link<T>, length: usize) -> Self {
        let mut iterator = Self {
            stack: SmallVec::new(),
            remaining: length,
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut node: Link<T>) {
        while let Some(node_ref) = node {
            node = node_ref.left.clone();
            self.stack.push(node_ref);
        }
    }
}

impl<T: Clone> Iterator for PersistentOrderedSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.clone());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.element.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentOrderedSetIntoIterator<T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T: Clone> FusedIterator for PersistentOrderedSetIntoIterator<T> {}
