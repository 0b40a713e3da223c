//! Tree nodes and their color.

use super::super::ReferenceCounter;

/// Shared, read-only link to a subtree. `None` is an empty position.
pub(super) type Link<T> = Option<ReferenceCounter<Node<T>>>;

/// The color of a red-black tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns the opposite color.
    pub(super) const fn flipped(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }
}

/// Internal node structure for the red-black tree.
///
/// A node never points back at its parent: the same node can sit under
/// different parents in different versions.
#[derive(Clone)]
pub(super) struct Node<T> {
    pub(super) element: T,
    pub(super) color: Color,
    pub(super) left: Link<T>,
    pub(super) right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a new red node with no children.
    pub(super) const fn new_red(element: T) -> Self {
        Self {
            element,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    /// Consumes this node and returns it with a new color.
    pub(super) fn recolored(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Consumes this node and returns it with a new left child.
    pub(super) fn with_left(self, left: Link<T>) -> Self {
        Self { left, ..self }
    }

    /// Consumes this node and returns it with a new right child.
    pub(super) fn with_right(self, right: Link<T>) -> Self {
        Self { right, ..self }
    }

    /// Checks if this node is red.
    pub(super) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

impl<T: Clone> Node<T> {
    /// Copies this node, sharing both children with the original.
    pub(super) fn copied(&self) -> Self {
        self.clone()
    }
}

/// Helper function to check if an optional node is red.
///
/// Empty positions count as black.
pub(super) fn is_red<T>(node: Option<&ReferenceCounter<Node<T>>>) -> bool {
    node.is_some_and(|node| node.is_red())
}

/// Takes ownership of a linked node, cloning it only if another version
/// still holds it.
pub(super) fn take_node<T: Clone>(link: ReferenceCounter<Node<T>>) -> Node<T> {
    ReferenceCounter::unwrap_or_clone(link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Color::Red, Color::Black)]
    #[case(Color::Black, Color::Red)]
    fn test_color_flipped(#[case] color: Color, #[case] expected: Color) {
        assert_eq!(color.flipped(), expected);
    }

    #[rstest]
    fn test_new_node_is_red_leaf() {
        let node = Node::new_red(1);
        assert!(node.is_red());
        assert!(node.left.is_none());
        assert!(node.right.is_none());
    }

    #[rstest]
    fn test_empty_position_is_not_red() {
        assert!(!is_red::<i32>(None));
    }

    #[rstest]
    fn test_copied_shares_children() {
        let child = ReferenceCounter::new(Node::new_red(1));
        let parent = Node::new_red(2).with_left(Some(child.clone()));
        let copy = parent.copied();

        let copied_child = copy.left.as_ref().map(ReferenceCounter::as_ptr);
        assert_eq!(copied_child, Some(ReferenceCounter::as_ptr(&child)));
        assert_eq!(ReferenceCounter::strong_count(&child), 3);
    }

    #[rstest]
    fn test_take_node_clones_shared_link() {
        let link = ReferenceCounter::new(Node::new_red(7));
        let retained = link.clone();
        let owned = take_node(link).recolored(Color::Black);

        assert!(!owned.is_red());
        assert!(retained.is_red());
    }
}
