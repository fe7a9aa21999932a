//! Binary trees with values at the leaves, and leaf labelling.
//!
//! Labelling replaces every leaf, left to right, with a fresh integer. It
//! is written twice: [`Tree::label_from`] threads the counter by hand, and
//! [`Tree::label`] lets the [`State`] monad thread it.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::effect::Tree;
//!
//! let tree = Tree::node(Tree::leaf('a'), Tree::node(Tree::leaf('b'), Tree::leaf('c')));
//! let (labelled, next) = tree.label().run(0);
//! assert_eq!(labelled.to_string(), "[0, [1, 2]]");
//! assert_eq!(next, 3);
//! ```

use std::fmt;
use std::rc::Rc;

use super::State;
use crate::persistent::List;
use crate::variant::{Pattern, Tag, Variant};

/// A binary tree carrying values only at its leaves. Subtrees are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree<T> {
    /// A single value.
    Leaf(T),
    /// Two subtrees.
    Node(Rc<Tree<T>>, Rc<Tree<T>>),
}

/// Constructor tags of [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeTag {
    /// [`Tree::Leaf`].
    Leaf,
    /// [`Tree::Node`].
    Node,
}

impl Tag for TreeTag {
    fn name(self) -> &'static str {
        match self {
            Self::Leaf => "leaf",
            Self::Node => "node",
        }
    }
}

impl<T> Tree<T> {
    /// A leaf holding `value`.
    pub const fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    /// A node with the given subtrees.
    pub fn node(left: Self, right: Self) -> Self {
        Self::Node(Rc::new(left), Rc::new(right))
    }

    /// Applies `function` to every leaf value, keeping the shape.
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> Tree<B>
    where
        F: Fn(&T) -> B,
    {
        self.map_with(&function)
    }

    fn map_with<B, F>(&self, function: &F) -> Tree<B>
    where
        F: Fn(&T) -> B,
    {
        match self {
            Self::Leaf(value) => Tree::Leaf(function(value)),
            Self::Node(left, right) => Tree::node(left.map_with(function), right.map_with(function)),
        }
    }

    /// Number of leaves.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Node(left, right) => left.size() + right.size(),
        }
    }

    /// Relabels the leaves left to right with `start`, `start + 1`, and so
    /// on, returning the new tree and the next unused label.
    #[must_use]
    pub fn label_from(&self, start: i64) -> (Tree<i64>, i64) {
        match self {
            Self::Leaf(_) => (Tree::Leaf(start), start + 1),
            Self::Node(left, right) => {
                let (left, after_left) = left.label_from(start);
                let (right, after_right) = right.label_from(after_left);
                (Tree::node(left, right), after_right)
            }
        }
    }
}

impl<T: Clone> Tree<T> {
    /// The leaf values, left to right.
    #[must_use]
    pub fn leaves(&self) -> List<T> {
        let mut collected = Vec::new();
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            match tree {
                Self::Leaf(value) => collected.push(value.clone()),
                Self::Node(left, right) => {
                    pending.push(right);
                    pending.push(left);
                }
            }
        }
        collected.into_iter().collect()
    }
}

impl<T: 'static> Tree<T> {
    /// Relabels the leaves left to right with fresh integers drawn from the state.
    #[must_use]
    pub fn label(&self) -> State<i64, Tree<i64>> {
        match self {
            Self::Leaf(_) => State::fresh().fmap(Tree::Leaf),
            Self::Node(left, right) => {
                let right = Rc::clone(right);
                left.label().flat_map(move |left| {
                    right
                        .label()
                        .fmap(move |right| Tree::node(left.clone(), right))
                })
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(value) => write!(formatter, "{value}"),
            Self::Node(left, right) => write!(formatter, "[{left}, {right}]"),
        }
    }
}

/// Borrowed shape of a [`Tree`].
#[derive(Debug)]
pub enum TreeView<'a, T> {
    /// A leaf and its value.
    Leaf(&'a T),
    /// A node and its subtrees.
    Node(&'a Tree<T>, &'a Tree<T>),
}

impl<T> Variant for Tree<T> {
    type Tag = TreeTag;
    type View<'a>
        = TreeView<'a, T>
    where
        T: 'a;

    const TAGS: &'static [TreeTag] = &[TreeTag::Leaf, TreeTag::Node];

    fn tag(&self) -> TreeTag {
        match self {
            Self::Leaf(_) => TreeTag::Leaf,
            Self::Node(..) => TreeTag::Node,
        }
    }

    fn view(&self) -> TreeView<'_, T> {
        match self {
            Self::Leaf(value) => TreeView::Leaf(value),
            Self::Node(left, right) => TreeView::Node(left, right),
        }
    }
}

impl<'v, T: 'v, R> Pattern<'v, Tree<T>, R> {
    /// Registers the handler for leaves.
    #[must_use]
    pub fn on_leaf<H>(self, handler: H) -> Self
    where
        H: FnOnce(&'v T) -> R + 'v,
    {
        self.on(TreeTag::Leaf, move |view| match view {
            TreeView::Leaf(value) => handler(value),
            TreeView::Node(..) => unreachable!("leaf handler dispatched on a node"),
        })
    }

    /// Registers the handler for nodes.
    #[must_use]
    pub fn on_node<H>(self, handler: H) -> Self
    where
        H: FnOnce(&'v Tree<T>, &'v Tree<T>) -> R + 'v,
    {
        self.on(TreeTag::Node, move |view| match view {
            TreeView::Node(left, right) => handler(left, right),
            TreeView::Leaf(_) => unreachable!("node handler dispatched on a leaf"),
        })
    }
}
