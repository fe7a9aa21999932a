//! Stateful cursors over persistent sequences.
//!
//! A [`Cursor`] owns a handle on the unvisited suffix of a [`List`] or a
//! [`Stream`] and yields one element per step. Advancing a cursor never
//! modifies the underlying sequence; other handles keep seeing every
//! element. Once the suffix is empty every further step yields `None`.
//!
//! [`List`]: super::List
//! [`Stream`]: super::Stream

/// A sequence that can be split into its first element and the rest.
pub trait Pull: Sized {
    /// The element type.
    type Item;

    /// Returns the first element and the remaining sequence, or `None` if
    /// the sequence is empty.
    fn pull(&self) -> Option<(Self::Item, Self)>;
}

/// A single-owner cursor over a persistent sequence.
///
/// # Examples
///
/// ```rust
/// use monadkit::persistent::List;
///
/// let list: List<i32> = (1..=2).collect();
/// let mut cursor = list.generate();
/// assert_eq!(cursor.advance(), Some(1));
/// assert_eq!(cursor.advance(), Some(2));
/// assert_eq!(cursor.advance(), None);
/// assert_eq!(cursor.advance(), None);
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Debug)]
pub struct Cursor<S> {
    remaining: S,
}

impl<S: Pull> Cursor<S> {
    /// Creates a cursor positioned before the first element of `sequence`.
    #[inline]
    pub const fn new(sequence: S) -> Self {
        Self {
            remaining: sequence,
        }
    }

    /// Returns the next element and moves past it.
    pub fn advance(&mut self) -> Option<S::Item> {
        let (item, rest) = self.remaining.pull()?;
        self.remaining = rest;
        Some(item)
    }

    /// The part of the sequence not yet visited.
    #[inline]
    pub const fn remaining(&self) -> &S {
        &self.remaining
    }

    /// Consumes the cursor and returns the unvisited part of the sequence.
    #[inline]
    pub fn into_remaining(self) -> S {
        self.remaining
    }
}

impl<S: Pull> Iterator for Cursor<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistent::{List, Stream};
    use rstest::rstest;

    #[rstest]
    fn cursor_over_empty_list_is_exhausted() {
        let mut cursor = Cursor::new(List::<i32>::new());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.advance(), None);
    }

    #[rstest]
    fn cursor_leaves_list_untouched() {
        let list: List<i32> = (1..=3).collect();
        let mut cursor = list.generate();
        assert_eq!(cursor.advance(), Some(1));
        assert_eq!(cursor.remaining().to_vec(), vec![2, 3]);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn cursor_is_an_iterator() {
        let list: List<char> = List::from_string("abc");
        let collected: String = list.generate().collect();
        assert_eq!(collected, "abc");
    }

    #[rstest]
    fn cursor_over_infinite_stream_yields_prefix() {
        let cursor = Stream::integers_from(10).generate();
        let prefix: Vec<i64> = cursor.take(3).collect();
        assert_eq!(prefix, vec![10, 11, 12]);
    }

    #[rstest]
    fn into_remaining_returns_suffix() {
        let list: List<i32> = (1..=4).collect();
        let mut cursor = list.generate();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.into_remaining().to_vec(), vec![3, 4]);
    }
}
