//! Immutable two-element product.

use std::fmt;

use crate::variant::{Pattern, Tag, Variant};

/// The single constructor tag of [`Pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairTag {
    /// `cons(left, right)`.
    Cons,
}

impl Tag for PairTag {
    fn name(self) -> &'static str {
        "cons"
    }
}

/// An immutable pair of values.
///
/// # Examples
///
/// ```rust
/// use monadkit::persistent::Pair;
///
/// let pair = Pair::new(1, "one");
/// assert_eq!(*pair.left(), 1);
/// assert_eq!(*pair.right(), "one");
/// assert_eq!(pair.into_tuple(), (1, "one"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
    left: A,
    right: B,
}

impl<A, B> Pair<A, B> {
    /// Creates a pair.
    #[inline]
    pub const fn new(left: A, right: B) -> Self {
        Self { left, right }
    }

    /// The first component.
    #[inline]
    pub const fn left(&self) -> &A {
        &self.left
    }

    /// The second component.
    #[inline]
    pub const fn right(&self) -> &B {
        &self.right
    }

    /// Consumes the pair and returns the first component.
    #[inline]
    pub fn into_left(self) -> A {
        self.left
    }

    /// Consumes the pair and returns the second component.
    #[inline]
    pub fn into_right(self) -> B {
        self.right
    }

    /// Consumes the pair and returns both components.
    #[inline]
    pub fn into_tuple(self) -> (A, B) {
        (self.left, self.right)
    }

    /// Exchanges the components.
    #[must_use]
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.right, self.left)
    }

    /// Transforms the first component.
    pub fn map_left<C, F: FnOnce(A) -> C>(self, function: F) -> Pair<C, B> {
        Pair::new(function(self.left), self.right)
    }

    /// Transforms the second component.
    pub fn map_right<C, F: FnOnce(B) -> C>(self, function: F) -> Pair<A, C> {
        Pair::new(self.left, function(self.right))
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((left, right): (A, B)) -> Self {
        Self::new(left, right)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_tuple()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.left, self.right)
    }
}

impl<A, B> Variant for Pair<A, B> {
    type Tag = PairTag;
    type View<'a>
        = (&'a A, &'a B)
    where
        Self: 'a;

    const TAGS: &'static [PairTag] = &[PairTag::Cons];

    fn tag(&self) -> PairTag {
        PairTag::Cons
    }

    fn view(&self) -> (&A, &B) {
        (&self.left, &self.right)
    }
}

impl<'v, A: 'v, B: 'v, R> Pattern<'v, Pair<A, B>, R> {
    /// Registers the handler for the pair, called with both components.
    #[must_use]
    pub fn on_pair<H>(self, handler: H) -> Self
    where
        H: FnOnce(&'v A, &'v B) -> R + 'v,
    {
        self.on(PairTag::Cons, move |(left, right)| handler(left, right))
    }
}
