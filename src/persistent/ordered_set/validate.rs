//! Structural invariant checks.

use thiserror::Error;

use super::super::ReferenceCounter;
use super::node::{Color, Node, is_red};

/// A broken red-black tree invariant, reported by
/// [`PersistentOrderedSet::validate`](super::PersistentOrderedSet::validate).
///
/// None of these can be produced through the public API; they exist to make
/// the invariants checkable from tests and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The root of a non-empty tree is red.
    #[error("root node is red")]
    RedRoot,

    /// A red node has a red child.
    #[error("red node has a red child")]
    RedViolation,

    /// Two sibling subtrees contain different numbers of black nodes.
    #[error("black height differs between subtrees: left {left}, right {right}")]
    BlackHeightMismatch {
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },

    /// An element is out of order with respect to one of its ancestors, or
    /// equal to one.
    #[error("elements are not strictly increasing in order")]
    OrderViolation,

    /// The recorded element count does not match the number of nodes.
    #[error("set records {recorded} elements but the tree holds {counted}")]
    LengthMismatch {
        /// Length cached in the set handle.
        recorded: usize,
        /// Number of nodes found by walking the tree.
        counted: usize,
    },
}

/// Checks the whole tree and returns its black height.
pub(super) fn validate<T: Ord>(
    root: Option<&ReferenceCounter<Node<T>>>,
    recorded: usize,
) -> Result<usize, InvariantViolation> {
    if is_red(root) {
        return Err(InvariantViolation::RedRoot);
    }

    let mut counted = 0;
    let black_height = check_subtree(root, None, None, &mut counted)?;

    if counted == recorded {
        Ok(black_height)
    } else {
        Err(InvariantViolation::LengthMismatch { recorded, counted })
    }
}

/// Recursively checks a subtree whose elements must lie strictly between
/// `lower` and `upper`, returning its black height.
fn check_subtree<T: Ord>(
    node: Option<&ReferenceCounter<Node<T>>>,
    lower: Option<&T>,
    upper: Option<&T>,
    counted: &mut usize,
) -> Result<usize, InvariantViolation> {
    let Some(node_ref) = node else {
        return Ok(0);
    };

    let element = &node_ref.element;
    if lower.is_some_and(|lower| element <= lower) || upper.is_some_and(|upper| element >= upper) {
        return Err(InvariantViolation::OrderViolation);
    }

    if node_ref.is_red() && (is_red(node_ref.left.as_ref()) || is_red(node_ref.right.as_ref())) {
        return Err(InvariantViolation::RedViolation);
    }

    *counted += 1;
    let left = check_subtree(node_ref.left.as_ref(), lower, Some(element), counted)?;
    let right = check_subtree(node_ref.right.as_ref(), Some(element), upper, counted)?;

    if left != right {
        return Err(InvariantViolation::BlackHeightMismatch { left, right });
    }

    Ok(left + usize::from(node_ref.color == Color::Black))
}
