//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`List`], an immutable cons-list that shares
//! structure between versions.
//!
//! # Overview
//!
//! - O(1) prepend (`cons`), head and tail access
//! - O(n) index access, append and reverse
//! - every operation returns a new list and leaves its inputs unchanged
//! - traversals, folds and drops are iterative, so long lists do not
//!   exhaust the call stack
//!
//! # Examples
//!
//! ```rust
//! use monadkit::persistent::{List, cons, empty};
//!
//! let list = cons(1, &cons(2, &cons(3, &empty())));
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.len(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! let squares: List<i32> = list.map(|x| x * x);
//! assert_eq!(squares.to_string(), "[1, 4, 9]");
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::rc::Rc;

use super::cursor::{Cursor, Pull};
use crate::error::{AdtError, Result};
use crate::typeclass::{Functor, Monad, Monoid, Semigroup, TypeConstructor};
use crate::variant::{Pattern, SequenceTag, Variant};

struct Node<T> {
    element: T,
    next: Option<Rc<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`     | O(1)       |
/// | `cons`    | O(1)       |
/// | `head`    | O(1)       |
/// | `tail`    | O(1)       |
/// | `len`     | O(1)       |
/// | `at`      | O(n)       |
/// | `append`  | O(n)       |
/// | `reverse` | O(n)       |
pub struct List<T> {
    head: Option<Rc<Node<T>>>,
    /// Cached length for O(1) access.
    length: usize,
}

/// Returns the empty list.
#[inline]
pub const fn empty<T>() -> List<T> {
    List::new()
}

/// Returns a list with `head` in front of `tail`. `tail` is shared, not copied.
#[inline]
pub fn cons<T>(head: T, tail: &List<T>) -> List<T> {
    tail.cons(head)
}

/// The shape of a list, as seen by pattern handlers.
#[derive(Debug)]
pub enum ListView<'a, T> {
    /// The empty list.
    Empty,
    /// The first element and the list that follows it.
    Cons(&'a T, List<T>),
}

impl<T> List<T> {
    /// Creates a new empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: None,
            })),
            length: 1,
        }
    }

    /// Lifts a value into a one-element list.
    #[inline]
    #[must_use]
    pub fn unit(element: T) -> Self {
        Self::singleton(element)
    }

    /// Prepends an element, sharing `self` as the tail of the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::persistent::List;
    ///
    /// let list = List::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns the first element, or `None` if the list is empty.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element, or `None` if the list
    /// is empty. The result shares structure with `self`.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Option<Self> {
        self.head.as_ref().map(|node| Self {
            head: node.next.clone(),
            length: self.length - 1,
        })
    }

    /// Decomposes the list into its head and tail.
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length - 1,
            };
            (&node.element, tail)
        })
    }

    /// Returns the element at `index`, or `None` if it is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut current = &self.head;
        let mut remaining = index;

        while let Some(node) = current {
            if remaining == 0 {
                return Some(&node.element);
            }
            remaining -= 1;
            current = &node.next;
        }
        None
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::InvalidIndex`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::persistent::List;
    ///
    /// let list: List<char> = List::from_string("abc");
    /// assert_eq!(list.at(2), Ok(&'c'));
    /// assert!(list.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        self.get(index).ok_or(AdtError::InvalidIndex {
            index,
            length: self.length,
        })
    }

    /// Returns the last element, or `None` if the list is empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Counts the elements with a right fold instead of the cached length.
    #[must_use]
    pub fn length_by_fold(&self) -> usize {
        self.foldr(0, |_, count| count + 1)
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> ListIterator<'_, T> {
        ListIterator {
            current: self.head.as_ref(),
        }
    }

    /// Returns `true` if any element satisfies `predicate`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    /// The empty list satisfies every predicate.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Applies `function` to every element, front to back.
    ///
    /// The function is called exactly once per element, in list order.
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> List<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }

    /// Folds from the right: `glue(x1, glue(x2, ... glue(xn, initial)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::persistent::List;
    ///
    /// let list: List<i32> = (1..=3).collect();
    /// let rendered = list.foldr(String::from("nil"), |x, rest| format!("({x} {rest})"));
    /// assert_eq!(rendered, "(1 (2 (3 nil)))");
    /// ```
    pub fn foldr<B, F>(&self, initial: B, mut glue: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let elements: Vec<&T> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(initial, |accumulator, element| glue(element, accumulator))
    }

    /// Folds from the left: `glue(... glue(glue(initial, x1), x2) ..., xn)`.
    pub fn foldl<B, F>(&self, initial: B, glue: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(initial, glue)
    }

    /// Returns the shape of the list for pattern dispatch.
    #[must_use]
    pub fn view(&self) -> ListView<'_, T> {
        self.uncons()
            .map_or(ListView::Empty, |(head, tail)| ListView::Cons(head, tail))
    }

    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head = None;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }
}

impl<T: Clone> List<T> {
    /// Returns the elements of `self` followed by the elements of `other`.
    ///
    /// `other` is shared by the result; the elements of `self` are copied.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut elements: Vec<T> = self.iter().cloned().collect();
        let mut head = other.head.clone();
        let length = self.length + other.length;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }

    /// Returns the list in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut result = Self::new();
        for element in self {
            result = result.cons(element.clone());
        }
        result
    }

    /// Keeps the elements satisfying `predicate`, in order.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Maps every element to a list and concatenates the results in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::persistent::List;
    ///
    /// let list: List<i32> = (1..=3).collect();
    /// let signed = list.flat_map(|x| List::from_iter([x, -x]));
    /// assert_eq!(signed.to_vec(), vec![1, -1, 2, -2, 3, -3]);
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> List<B>
    where
        B: Clone,
        F: FnMut(T) -> List<B>,
    {
        let parts: Vec<List<B>> = self.into_iter().map(function).collect();
        parts
            .iter()
            .rev()
            .fold(List::new(), |accumulator, part| part.append(&accumulator))
    }

    /// Returns every element except the last, or `None` if the list is empty.
    #[must_use]
    pub fn init(&self) -> Option<Self> {
        if self.is_empty() {
            return None;
        }
        let mut elements: Vec<T> = self.iter().cloned().collect();
        elements.pop();
        Some(Self::build_from_vec(elements))
    }

    /// Pairs up the elements of two lists. The result is as long as the
    /// shorter input.
    #[must_use]
    pub fn zip<U: Clone>(&self, other: &List<U>) -> List<(T, U)> {
        self.iter()
            .zip(other.iter())
            .map(|(left, right)| (left.clone(), right.clone()))
            .collect()
    }

    /// Copies the elements into a `Vec`, front to back.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns a cursor positioned before the first element.
    #[must_use]
    pub fn generate(&self) -> Cursor<Self> {
        Cursor::new(self.clone())
    }
}

impl List<i64> {
    /// The integers from `from` to `to`, both inclusive. Empty when `from > to`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::persistent::List;
    ///
    /// assert_eq!(List::enum_from_to(1, 4).to_vec(), vec![1, 2, 3, 4]);
    /// assert!(List::enum_from_to(3, 2).is_empty());
    /// ```
    #[must_use]
    pub fn enum_from_to(from: i64, to: i64) -> Self {
        (from..=to).collect()
    }
}

impl List<char> {
    /// Builds a list of the characters of `text`.
    #[must_use]
    pub fn from_string(text: &str) -> Self {
        text.chars().collect()
    }
}

// =============================================================================
// Specialized Methods for Nested Lists
// =============================================================================

impl<T: Clone> List<List<T>> {
    /// Concatenates the inner lists, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::persistent::List;
    ///
    /// let nested: List<List<i32>> = vec![
    ///     List::from_iter([1, 2]),
    ///     List::new(),
    ///     List::from_iter([3]),
    /// ]
    /// .into_iter()
    /// .collect();
    /// assert_eq!(nested.concat().to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn concat(&self) -> List<T> {
        self.foldr(List::new(), |part, accumulator| part.append(&accumulator))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`List`].
pub struct ListIterator<'a, T> {
    current: Option<&'a Rc<Node<T>>>,
}

impl<'a, T> Iterator for ListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            &node.element
        })
    }
}

impl<T: Clone> Pull for List<T> {
    type Item = T;

    fn pull(&self) -> Option<(T, Self)> {
        self.uncons().map(|(head, tail)| (head.clone(), tail))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            current = match Rc::try_unwrap(node) {
                Ok(mut node) => node.next.take(),
                Err(_) => None,
            };
        }
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = Cursor<Self>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Cursor::new(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = ListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Variant Implementation
// =============================================================================

impl<T> Variant for List<T> {
    type Tag = SequenceTag;
    type View<'a>
        = ListView<'a, T>
    where
        Self: 'a;

    const TAGS: &'static [SequenceTag] = &[SequenceTag::Empty, SequenceTag::Cons];

    fn tag(&self) -> SequenceTag {
        if self.is_empty() {
            SequenceTag::Empty
        } else {
            SequenceTag::Cons
        }
    }

    fn view(&self) -> ListView<'_, T> {
        Self::view(self)
    }
}

impl<'v, T: 'v, R> Pattern<'v, List<T>, R> {
    /// Registers the handler for the empty list.
    #[must_use]
    pub fn on_empty<H>(self, handler: H) -> Self
    where
        H: FnOnce() -> R + 'v,
    {
        self.on(SequenceTag::Empty, move |_| handler())
    }

    /// Registers the handler for a non-empty list, called with the head
    /// and the tail.
    #[must_use]
    pub fn on_cons<H>(self, handler: H) -> Self
    where
        H: FnOnce(&'v T, List<T>) -> R + 'v,
    {
        self.on(SequenceTag::Cons, move |view| match view {
            ListView::Cons(head, tail) => handler(head, tail),
            ListView::Empty => unreachable!("cons handler dispatched on an empty list"),
        })
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for List<T> {
    type Inner = T;
    type WithType<B> = List<B>;
}

impl<T: Clone> Functor for List<T> {
    fn fmap<B, F>(self, function: F) -> List<B>
    where
        B: Clone + 'static,
        F: Fn(T) -> B + 'static,
    {
        self.map(|element| function(element.clone()))
    }
}

impl<T: Clone> Monad for List<T> {
    #[inline]
    fn unit(value: T) -> Self {
        Self::singleton(value)
    }

    fn flat_map<B, F>(self, function: F) -> List<B>
    where
        B: Clone + 'static,
        F: Fn(T) -> List<B> + 'static,
    {
        Self::flat_map(self, function)
    }
}

impl<T: Clone> Semigroup for List<T> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<T: Clone> Monoid for List<T> {
    fn empty() -> Self {
        Self::new()
    }
}

static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = List<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(List::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for List<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_list() {
        let list: List<i32> = (1..=3).collect();
        assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2,3]");
    }

    #[rstest]
    fn test_deserialize_list() {
        let list: List<i32> = serde_json::from_str("[4,5]").unwrap();
        assert_eq!(list.to_vec(), vec![4, 5]);
        assert_eq!(list.len(), 2);
    }

    #[rstest]
    fn test_serialize_empty() {
        let list: List<String> = List::new();
        assert_eq!(serde_json::to_string(&list).unwrap(), "[]");
    }
}
