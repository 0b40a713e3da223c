//! Left-leaning red-black rebalancing.
//!
//! Every node rebuilt by an insertion passes through [`balance`] exactly once
//! on the way back up. The three rules run in a fixed order because each
//! one relies on the shape left behind by the previous one:
//!
//! 1. A red right child with a black left sibling is rotated to the left.
//! 2. Two consecutive red left links are rotated to the right.
//! 3. Two red children are split by flipping all three colors, which pushes
//!    the red link one level up.
//!
//! All functions take the node being rebuilt by value. It has not been
//! published yet, so it may be taken apart freely. Its children may still be
//! shared with older versions and are only copied when their own child set
//! or color changes.

use super::node::{Color, Node, is_red, take_node};
use super::super::ReferenceCounter;

/// Restores the left-leaning red-black shape of a freshly rebuilt node.
pub(super) fn balance<T: Clone>(node: Node<T>) -> Node<T> {
    let node = if is_red(node.right.as_ref()) && !is_red(node.left.as_ref()) {
        rotate_left(node)
    } else {
        node
    };

    let node = if node
        .left
        .as_ref()
        .is_some_and(|left| left.is_red() && is_red(left.left.as_ref()))
    {
        rotate_right(node)
    } else {
        node
    };

    if is_red(node.left.as_ref()) && is_red(node.right.as_ref()) {
        flip_colors(node)
    } else {
        node
    }
}

/// Rotates the tree to the left around the given node.
///
/// The right child becomes the subtree root and takes over the color of
/// `node`, which is demoted to a red left child.
pub(super) fn rotate_left<T: Clone>(node: Node<T>) -> Node<T> {
    let Node {
        element,
        color,
        left,
        right,
    } = node;

    let Some(right) = right else {
        return Node {
            element,
            color,
            left,
            right: None,
        };
    };

    let promoted = take_node(right);
    let demoted = Node {
        element,
        color: Color::Red,
        left,
        right: promoted.left,
    };

    Node {
        element: promoted.element,
        color,
        left: Some(ReferenceCounter::new(demoted)),
        right: promoted.right,
    }
}

/// Rotates the tree to the right around the given node.
///
/// Mirror image of [`rotate_left`].
pub(super) fn rotate_right<T: Clone>(node: Node<T>) -> Node<T> {
    let Node {
        element,
        color,
        left,
        right,
    } = node;

    let Some(left) = left else {
        return Node {
            element,
            color,
            left: None,
            right,
        };
    };

    let promoted = take_node(left);
    let demoted = Node {
        element,
        color: Color::Red,
        left: promoted.right,
        right,
    };

    Node {
        element: promoted.element,
        color,
        left: promoted.left,
        right: Some(ReferenceCounter::new(demoted)),
    }
}

/// Inverts the color of the node and of both of its children.
pub(super) fn flip_colors<T: Clone>(node: Node<T>) -> Node<T> {
    let color = node.color.flipped();
    let left = node.left.map(flip_child);
    let right = node.right.map(flip_child);

    Node {
        element: node.element,
        color,
        left,
        right,
    }
}

fn flip_child<T: Clone>(child: ReferenceCounter<Node<T>>) -> ReferenceCounter<Node<T>> {
    let child = take_node(child);
    let color = child.color.flipped();
    ReferenceCounter::new(child.recolored(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn leaf(element: i32, color: Color) -> Option<ReferenceCounter<Node<i32>>> {
        Some(ReferenceCounter::new(Node::new_red(element).recolored(color)))
    }

    fn element_of(link: Option<&ReferenceCounter<Node<i32>>>) -> Option<i32> {
        link.map(|node| node.element)
    }

    #[rstest]
    fn test_rotate_left_promotes_right_child() {
        // 2(B) with left 1(B) and right 4(R){3(B), 5(B)}
        let right = Node::new_red(4)
            .with_left(leaf(3, Color::Black))
            .with_right(leaf(5, Color::Black));
        let node = Node::new_red(2)
            .recolored(Color::Black)
            .with_left(leaf(1, Color::Black))
            .with_right(Some(ReferenceCounter::new(right)));

        let rotated = rotate_left(node);

        assert_eq!(rotated.element, 4);
        assert_eq!(rotated.color, Color::Black);
        assert_eq!(element_of(rotated.right.as_ref()), Some(5));

        let demoted = rotated.left.as_ref().expect("demoted node");
        assert_eq!(demoted.element, 2);
        assert_eq!(demoted.color, Color::Red);
        assert_eq!(element_of(demoted.left.as_ref()), Some(1));
        assert_eq!(element_of(demoted.right.as_ref()), Some(3));
    }

    #[rstest]
    fn test_rotate_right_promotes_left_child() {
        // 4(B) with left 2(R){1(B), 3(B)} and right 5(B)
        let left = Node::new_red(2)
            .with_left(leaf(1, Color::Black))
            .with_right(leaf(3, Color::Black));
        let node = Node::new_red(4)
            .recolored(Color::Black)
            .with_left(Some(ReferenceCounter::new(left)))
            .with_right(leaf(5, Color::Black));

        let rotated = rotate_right(node);

        assert_eq!(rotated.element, 2);
        assert_eq!(rotated.color, Color::Black);
        assert_eq!(element_of(rotated.left.as_ref()), Some(1));

        let demoted = rotated.right.as_ref().expect("demoted node");
        assert_eq!(demoted.element, 4);
        assert_eq!(demoted.color, Color::Red);
        assert_eq!(element_of(demoted.left.as_ref()), Some(3));
        assert_eq!(element_of(demoted.right.as_ref()), Some(5));
    }

    #[rstest]
    fn test_rotate_shares_untouched_subtrees() {
        let outer = leaf(5, Color::Black);
        let right = Node::new_red(4).with_right(outer.clone());
        let node = Node::new_red(2)
            .recolored(Color::Black)
            .with_right(Some(ReferenceCounter::new(right)));

        let rotated = rotate_left(node);

        let outer = outer.expect("outer leaf");
        let kept = rotated.right.expect("right subtree");
        assert!(ReferenceCounter::ptr_eq(&outer, &kept));
    }

    #[rstest]
    fn test_rotate_without_child_is_identity() {
        let node = Node::new_red(1).recolored(Color::Black);
        let rotated = rotate_left(node);
        assert_eq!(rotated.element, 1);
        assert_eq!(rotated.color, Color::Black);

        let rotated = rotate_right(rotated);
        assert_eq!(rotated.element, 1);
        assert!(rotated.left.is_none() && rotated.right.is_none());
    }

    #[rstest]
    fn test_flip_colors_leaves_shared_children_untouched() {
        let left = leaf(1, Color::Red);
        let right = leaf(3, Color::Red);
        let node = Node::new_red(2)
            .recolored(Color::Black)
            .with_left(left.clone())
            .with_right(right.clone());

        let flipped = flip_colors(node);

        assert_eq!(flipped.color, Color::Red);
        assert!(flipped.left.as_ref().is_some_and(|node| !node.is_red()));
        assert!(flipped.right.as_ref().is_some_and(|node| !node.is_red()));
        assert!(left.as_ref().is_some_and(|node| node.is_red()));
        assert!(right.as_ref().is_some_and(|node| node.is_red()));
    }

    #[rstest]
    fn test_balance_right_leaning_red_rotates_left() {
        let node = Node::new_red(1)
            .recolored(Color::Black)
            .with_right(leaf(2, Color::Red));

        let balanced = balance(node);

        assert_eq!(balanced.element, 2);
        assert_eq!(balanced.color, Color::Black);
        assert!(is_red(balanced.left.as_ref()));
        assert!(balanced.right.is_none());
    }

    #[rstest]
    fn test_balance_two_left_reds_split_into_black_children() {
        let left = Node::new_red(2).with_left(leaf(1, Color::Red));
        let node = Node::new_red(3)
            .recolored(Color::Black)
            .with_left(Some(ReferenceCounter::new(left)));

        let balanced = balance(node);

        assert_eq!(balanced.element, 2);
        assert_eq!(balanced.color, Color::Red);
        assert_eq!(element_of(balanced.left.as_ref()), Some(1));
        assert_eq!(element_of(balanced.right.as_ref()), Some(3));
        assert!(!is_red(balanced.left.as_ref()));
        assert!(!is_red(balanced.right.as_ref()));
    }

    #[rstest]
    fn test_balance_leaves_valid_node_alone() {
        let node = Node::new_red(2)
            .recolored(Color::Black)
            .with_left(leaf(1, Color::Red));

        let balanced = balance(node);

        assert_eq!(balanced.element, 2);
        assert_eq!(balanced.color, Color::Black);
        assert!(is_red(balanced.left.as_ref()));
    }
}
