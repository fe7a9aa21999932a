//! Lazy, possibly infinite, persistent streams.
//!
//! A [`Stream`] is either empty or a cons cell holding an evaluated head
//! and a deferred tail. The tail is computed the first time it is forced
//! and cached, so every later access observes the same stream without
//! recomputation.
//!
//! Combinators (`map`, `filter`, `append`, `flatten`, `flat_map`, `take`)
//! are productive: they force only as much of their input as is needed to
//! produce the next cell of their output, so they work on infinite
//! streams. Consumers (`to_vec`, `foldr`, `for_each`) walk the whole stream
//! and do not terminate on an infinite one.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::persistent::Stream;
//!
//! let evens = Stream::integers_from(1).filter(|n| n % 2 == 0);
//! assert_eq!(evens.take(3).to_vec(), vec![2, 4, 6]);
//!
//! let ones = Stream::repeat(1);
//! assert_eq!(ones.take(4).to_vec(), vec![1, 1, 1, 1]);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::cursor::{Cursor, Pull};
use super::list::List;
use crate::control::Lazy;
use crate::typeclass::{Functor, Monad, TypeConstructor};
use crate::variant::{Pattern, SequenceTag, Variant};

type TailThunk<T> = Box<dyn FnOnce() -> Stream<T>>;

/// The input a derived cell resumes from. The cell and its thunk share the
/// slot; the thunk empties it when it runs.
type Upstream<T> = Rc<RefCell<Stream<T>>>;

struct StreamNode<T> {
    head: T,
    tail: Lazy<Stream<T>, TailThunk<T>>,
    upstream: Option<Upstream<T>>,
}

impl<T> StreamNode<T> {
    fn upstream_node(&self) -> Option<Rc<Self>> {
        self.upstream
            .as_ref()
            .and_then(|slot| slot.borrow().node.clone())
    }

    /// Forces the tail. Unforced upstream cells are forced first, deepest
    /// first, so that each thunk finds its input already evaluated and a
    /// long chain of derived cells never nests thunk calls.
    fn force_tail(&self) -> Stream<T> {
        if !self.tail.is_initialized() {
            let mut pending = Vec::new();
            let mut current = self.upstream_node();
            while let Some(node) = current {
                if node.tail.is_initialized() {
                    break;
                }
                current = node.upstream_node();
                pending.push(node);
            }
            for node in pending.iter().rev() {
                drop(node.tail.force());
            }
        }
        self.tail.force().clone()
    }
}

/// A lazy, persistent, possibly infinite sequence.
///
/// Cloning a stream is O(1) and shares every cell, including the cached
/// tails.
pub struct Stream<T> {
    node: Option<Rc<StreamNode<T>>>,
}

/// The deferred tail of a stream cell, as seen by pattern handlers.
pub struct DeferredTail<'a, T> {
    node: &'a StreamNode<T>,
}

impl<T> DeferredTail<'_, T> {
    /// Forces the tail, running its thunk on the first call only.
    pub fn force(&self) -> Stream<T> {
        self.node.force_tail()
    }

    /// Returns `true` if the tail has already been forced.
    pub fn is_forced(&self) -> bool {
        self.node.tail.is_initialized()
    }
}

impl<T> fmt::Debug for DeferredTail<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DeferredTail")
            .field("forced", &self.is_forced())
            .finish()
    }
}

/// The shape of a stream, as seen by pattern handlers.
#[derive(Debug)]
pub enum StreamView<'a, T> {
    /// The empty stream.
    Empty,
    /// The head and the deferred tail.
    Cons(&'a T, DeferredTail<'a, T>),
}

impl<T> Stream<T> {
    /// Creates the empty stream.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { node: None }
    }

    /// Creates a cell with an evaluated head and a deferred tail.
    ///
    /// `tail` is not called here; it runs at most once, when the tail is
    /// first forced.
    pub fn cons<F>(head: T, tail: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        let tail: TailThunk<T> = Box::new(tail);
        Self {
            node: Some(Rc::new(StreamNode {
                head,
                tail: Lazy::new(tail),
                upstream: None,
            })),
        }
    }

    /// Returns the first element, or `None` if the stream is empty.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.node.as_ref().map(|node| &node.head)
    }

    /// Forces and returns the tail, or `None` if the stream is empty.
    ///
    /// The tail thunk runs on the first call only; later calls return the
    /// cached stream.
    #[must_use]
    pub fn tail(&self) -> Option<Self> {
        self.node.as_ref().map(|node| node.force_tail())
    }

    /// Returns `true` if the stream has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Returns `true` if this cell's tail has already been forced.
    /// The empty stream reports `false`.
    #[must_use]
    pub fn is_tail_forced(&self) -> bool {
        self.node
            .as_ref()
            .is_some_and(|node| node.tail.is_initialized())
    }

    /// Returns the shape of the stream for pattern dispatch. The tail is
    /// not forced.
    #[must_use]
    pub fn view(&self) -> StreamView<'_, T> {
        match &self.node {
            None => StreamView::Empty,
            Some(node) => StreamView::Cons(&node.head, DeferredTail { node }),
        }
    }

    /// Calls `action` on every element, front to back.
    ///
    /// Does not terminate on an infinite stream.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&T),
    {
        let mut current = self.clone();
        while let Some(node) = current.node.clone() {
            action(&node.head);
            current = node.force_tail();
        }
    }

    /// Returns `true` if the stream is non-empty and every element
    /// satisfies `predicate`. The empty stream yields `false`.
    ///
    /// Stops at the first failing element, so it terminates on an infinite
    /// stream that contains one.
    pub fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        if self.is_empty() {
            return false;
        }
        let mut current = self.clone();
        while let Some(node) = current.node.clone() {
            if !predicate(&node.head) {
                return false;
            }
            current = node.force_tail();
        }
        true
    }

    /// Returns `true` if some element satisfies `predicate`.
    ///
    /// Stops at the first match, so it terminates on an infinite stream
    /// that contains one.
    pub fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self.clone();
        while let Some(node) = current.node.clone() {
            if predicate(&node.head) {
                return true;
            }
            current = node.force_tail();
        }
        false
    }

    /// Folds from the right: `glue(x1, glue(x2, ... glue(xn, initial)))`.
    ///
    /// Does not terminate on an infinite stream.
    pub fn foldr<B, F>(&self, initial: B, mut glue: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let mut cells = Vec::new();
        let mut current = self.clone();
        while let Some(node) = current.node.clone() {
            current = node.force_tail();
            cells.push(node);
        }
        cells
            .iter()
            .rev()
            .fold(initial, |accumulator, node| glue(&node.head, accumulator))
    }
}

impl<T: Clone + 'static> Stream<T> {
    /// Lifts a value into a one-element stream.
    #[must_use]
    pub fn unit(value: T) -> Self {
        Self::cons(value, Self::new)
    }

    /// Returns the first `count` elements, lazily.
    ///
    /// Forces at most `count` cells of `self`.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        let Some(head) = self.head().cloned() else {
            return Self::new();
        };
        match count {
            0 => Self::new(),
            1 => Self::cons(head, Self::new),
            _ => Self::resume_from(head, self.clone(), move |upstream| {
                rest_of(&upstream).take(count - 1)
            }),
        }
    }

    /// Applies `function` to every element, lazily.
    ///
    /// `function` runs for a cell when that cell is first produced, and
    /// never again for the same cell.
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> Stream<B>
    where
        B: 'static,
        F: Fn(&T) -> B + 'static,
    {
        map_shared(self, Rc::new(function))
    }

    /// Keeps the elements satisfying `predicate`, lazily.
    ///
    /// Producing a cell forces the input up to the next match. On an
    /// infinite stream with no further match this does not terminate.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        filter_shared(self.clone(), Rc::new(predicate))
    }

    /// Returns the elements of `self` followed by those of `other`.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        let other = other.clone();
        append_deferred(self.clone(), Box::new(move || other))
    }

    /// Returns the elements of `self` followed by the stream `later`
    /// produces. `later` runs only once `self` is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::persistent::Stream;
    ///
    /// // The second half is never built: only two elements are demanded.
    /// let stream = Stream::integers_from(1)
    ///     .take(2)
    ///     .append_with(|| panic!("not demanded"));
    /// assert_eq!(stream.head(), Some(&1));
    /// ```
    #[must_use]
    pub fn append_with<F>(&self, later: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        append_deferred(self.clone(), Box::new(later))
    }

    /// Maps every element to a stream and concatenates the results, lazily.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::persistent::Stream;
    ///
    /// let pairs = Stream::integers_from(1).flat_map(|n| Stream::repeat(n).take(2));
    /// assert_eq!(pairs.take(5).to_vec(), vec![1, 1, 2, 2, 3]);
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> Stream<B>
    where
        B: Clone + 'static,
        F: Fn(T) -> Stream<B> + 'static,
    {
        self.map(move |element| function(element.clone())).flatten()
    }

    /// Pairs elements of two streams with `function`. The result ends when
    /// either input ends.
    #[must_use]
    pub fn zip_with<U, V, F>(&self, other: &Stream<U>, function: F) -> Stream<V>
    where
        U: Clone + 'static,
        V: 'static,
        F: Fn(&T, &U) -> V + 'static,
    {
        zip_with_shared(self, other, Rc::new(function))
    }

    /// Returns the element at `index`, forcing the stream up to it.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.generate().nth(index)
    }

    /// Copies the elements into a `Vec`.
    ///
    /// Does not terminate on an infinite stream.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.generate().collect()
    }

    /// Copies the elements into a [`List`].
    ///
    /// Does not terminate on an infinite stream.
    #[must_use]
    pub fn to_list(&self) -> List<T> {
        self.generate().collect()
    }

    /// Builds a stream over the elements of `list`. Cells are produced on
    /// demand.
    #[must_use]
    pub fn from_list(list: &List<T>) -> Self {
        match list.uncons() {
            None => Self::new(),
            Some((head, tail)) => Self::cons(head.clone(), move || Self::from_list(&tail)),
        }
    }

    /// The infinite stream `value, value, value, ...`.
    #[must_use]
    pub fn repeat(value: T) -> Self {
        Self::cons(value.clone(), move || Self::repeat(value))
    }

    /// The infinite stream `seed, f(seed), f(f(seed)), ...`.
    #[must_use]
    pub fn iterate<F>(seed: T, function: F) -> Self
    where
        F: Fn(&T) -> T + 'static,
    {
        iterate_shared(seed, Rc::new(function))
    }

    /// Returns a cursor positioned before the first element.
    #[must_use]
    pub fn generate(&self) -> Cursor<Self> {
        Cursor::new(self.clone())
    }

    /// A cell whose tail is `resume(upstream)`. `upstream` is held by the
    /// cell rather than captured by the thunk, so `Drop` and `force_tail`
    /// can walk chains of such cells without recursion.
    fn resume_from<F>(head: T, upstream: Self, resume: F) -> Self
    where
        F: FnOnce(Self) -> Self + 'static,
    {
        let slot: Upstream<T> = Rc::new(RefCell::new(upstream));
        let captured = Rc::clone(&slot);
        let tail: TailThunk<T> = Box::new(move || resume(captured.take()));
        Self {
            node: Some(Rc::new(StreamNode {
                head,
                tail: Lazy::new(tail),
                upstream: Some(slot),
            })),
        }
    }
}

fn rest_of<T>(stream: &Stream<T>) -> Stream<T> {
    stream.tail().unwrap_or_default()
}

impl Stream<i64> {
    /// The infinite stream `from, from + 1, from + 2, ...`.
    #[must_use]
    pub fn integers_from(from: i64) -> Self {
        Self::cons(from, move || Self::integers_from(from + 1))
    }
}

impl<T: Clone + 'static> Stream<Stream<T>> {
    /// Concatenates the inner streams in order, lazily.
    ///
    /// Runs of empty inner streams are skipped without recursion. The
    /// result is productive as long as a non-empty inner stream follows.
    #[must_use]
    pub fn flatten(&self) -> Stream<T> {
        flatten_from(self.clone())
    }

    /// Same as [`flatten`](Stream::flatten).
    #[must_use]
    pub fn concat(&self) -> Stream<T> {
        self.flatten()
    }
}

fn map_shared<T, B>(stream: &Stream<T>, function: Rc<dyn Fn(&T) -> B>) -> Stream<B>
where
    T: 'static,
    B: 'static,
{
    match &stream.node {
        None => Stream::new(),
        Some(node) => {
            let node = Rc::clone(node);
            let head = function(&node.head);
            Stream::cons(head, move || map_shared(&node.force_tail(), function))
        }
    }
}

fn filter_shared<T>(stream: Stream<T>, predicate: Rc<dyn Fn(&T) -> bool>) -> Stream<T>
where
    T: Clone + 'static,
{
    let mut current = stream;
    loop {
        let Some(node) = current.node.clone() else {
            return Stream::new();
        };
        if predicate(&node.head) {
            return Stream::resume_from(node.head.clone(), current, move |upstream| {
                filter_shared(rest_of(&upstream), predicate)
            });
        }
        current = node.force_tail();
    }
}

fn append_deferred<T>(stream: Stream<T>, later: TailThunk<T>) -> Stream<T>
where
    T: Clone + 'static,
{
    let Some(head) = stream.head().cloned() else {
        return later();
    };
    Stream::resume_from(head, stream, move |upstream| {
        append_deferred(rest_of(&upstream), later)
    })
}

fn flatten_from<T>(outer: Stream<Stream<T>>) -> Stream<T>
where
    T: Clone + 'static,
{
    let mut current = outer;
    loop {
        let Some(node) = current.node.clone() else {
            return Stream::new();
        };
        if node.head.is_empty() {
            current = node.force_tail();
        } else {
            let rest = Rc::clone(&node);
            return append_deferred(
                node.head.clone(),
                Box::new(move || flatten_from(rest.force_tail())),
            );
        }
    }
}

fn zip_with_shared<T, U, V>(
    left: &Stream<T>,
    right: &Stream<U>,
    function: Rc<dyn Fn(&T, &U) -> V>,
) -> Stream<V>
where
    T: 'static,
    U: 'static,
    V: 'static,
{
    match (&left.node, &right.node) {
        (Some(left_node), Some(right_node)) => {
            let left_node = Rc::clone(left_node);
            let right_node = Rc::clone(right_node);
            let head = function(&left_node.head, &right_node.head);
            Stream::cons(head, move || {
                zip_with_shared(&left_node.force_tail(), &right_node.force_tail(), function)
            })
        }
        _ => Stream::new(),
    }
}

fn iterate_shared<T>(seed: T, function: Rc<dyn Fn(&T) -> T>) -> Stream<T>
where
    T: Clone + 'static,
{
    let next = Rc::clone(&function);
    let current = seed.clone();
    Stream::cons(seed, move || iterate_shared(next(&current), function))
}

impl<T: Clone> Pull for Stream<T> {
    type Item = T;

    fn pull(&self) -> Option<(T, Self)> {
        self.node
            .as_ref()
            .map(|node| (node.head.clone(), node.force_tail()))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
        }
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Releases forced tails and the upstream cells of unforced ones with an
/// explicit stack.
impl<T> Drop for Stream<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Rc<StreamNode<T>>> = self.node.take().into_iter().collect();
        while let Some(node) = pending.pop() {
            let Ok(node) = Rc::try_unwrap(node) else {
                continue;
            };
            let StreamNode { tail, upstream, .. } = node;
            if let Some(slot) = upstream {
                pending.extend(slot.take().node.take());
            }
            if let Some(mut rest) = tail.into_evaluated() {
                pending.extend(rest.node.take());
            }
        }
    }
}

/// Shows the cells forced so far, followed by `..` if the rest is pending.
impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = formatter.debug_list();
        let mut current = self.node.clone();
        while let Some(node) = current {
            list.entry(&node.head);
            match node.tail.get() {
                Some(rest) => current = rest.node.clone(),
                None => {
                    list.entry(&format_args!(".."));
                    break;
                }
            }
        }
        list.finish()
    }
}

impl<T: Clone + 'static> From<List<T>> for Stream<T> {
    fn from(list: List<T>) -> Self {
        Self::from_list(&list)
    }
}

impl<T: Clone + 'static> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let list: List<T> = iter.into_iter().collect();
        Self::from_list(&list)
    }
}

// =============================================================================
// Variant Implementation
// =============================================================================

impl<T> Variant for Stream<T> {
    type Tag = SequenceTag;
    type View<'a>
        = StreamView<'a, T>
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

    fn view(&self) -> StreamView<'_, T> {
        Self::view(self)
    }
}

impl<'v, T: 'v, R> Pattern<'v, Stream<T>, R> {
    /// Registers the handler for the empty stream.
    #[must_use]
    pub fn on_empty<H>(self, handler: H) -> Self
    where
        H: FnOnce() -> R + 'v,
    {
        self.on(SequenceTag::Empty, move |_| handler())
    }

    /// Registers the handler for a cons cell, called with the head and the
    /// still-deferred tail.
    #[must_use]
    pub fn on_cons<H>(self, handler: H) -> Self
    where
        H: FnOnce(&'v T, DeferredTail<'v, T>) -> R + 'v,
    {
        self.on(SequenceTag::Cons, move |view| match view {
            StreamView::Cons(head, tail) => handler(head, tail),
            StreamView::Empty => unreachable!("cons handler dispatched on an empty stream"),
        })
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Stream<T> {
    type Inner = T;
    type WithType<B> = Stream<B>;
}

impl<T: Clone + 'static> Functor for Stream<T> {
    fn fmap<B, F>(self, function: F) -> Stream<B>
    where
        B: Clone + 'static,
        F: Fn(T) -> B + 'static,
    {
        self.map(move |element| function(element.clone()))
    }
}

impl<T: Clone + 'static> Monad for Stream<T> {
    fn unit(value: T) -> Self {
        Self::unit(value)
    }

    fn flat_map<B, F>(self, function: F) -> Stream<B>
    where
        B: Clone + 'static,
        F: Fn(T) -> Stream<B> + 'static,
    {
        Self::flat_map(self, function)
    }
}

static_assertions::assert_not_impl_any!(Stream<i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdtError;
    use rstest::rstest;
    use std::cell::Cell;

    fn counted_integers(from: i64, calls: Rc<Cell<usize>>) -> Stream<i64> {
        Stream::cons(from, move || {
            calls.set(calls.get() + 1);
            counted_integers(from + 1, calls)
        })
    }

    #[rstest]
    fn test_empty_stream() {
        let stream: Stream<i32> = Stream::new();
        assert!(stream.is_empty());
        assert_eq!(stream.head(), None);
        assert!(stream.tail().is_none());
        assert!(stream.to_vec().is_empty());
    }

    #[rstest]
    fn test_cons_defers_tail() {
        let calls = Rc::new(Cell::new(0));
        let stream = counted_integers(1, Rc::clone(&calls));
        assert_eq!(stream.head(), Some(&1));
        assert_eq!(calls.get(), 0);
        assert!(!stream.is_tail_forced());
    }

    #[rstest]
    fn test_tail_is_memoized() {
        let calls = Rc::new(Cell::new(0));
        let stream = counted_integers(1, Rc::clone(&calls));
        let first = stream.tail().unwrap();
        let second = stream.tail().unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(first.head(), second.head());
        assert!(stream.is_tail_forced());
    }

    #[rstest]
    fn test_take_forces_only_what_is_needed() {
        let calls = Rc::new(Cell::new(0));
        let stream = counted_integers(1, Rc::clone(&calls));
        assert_eq!(stream.take(3).to_vec(), vec![1, 2, 3]);
        assert_eq!(calls.get(), 2);
        assert_eq!(stream.take(3).to_vec(), vec![1, 2, 3]);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(1, vec![5])]
    #[case(4, vec![5, 6, 7, 8])]
    fn test_take_prefix(#[case] count: usize, #[case] expected: Vec<i64>) {
        assert_eq!(Stream::integers_from(5).take(count).to_vec(), expected);
    }

    #[rstest]
    fn test_take_longer_than_stream() {
        let stream: Stream<i32> = [1, 2].into_iter().collect();
        assert_eq!(stream.take(10).to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_map_on_infinite_stream() {
        let squares = Stream::integers_from(1).map(|n| n * n);
        assert_eq!(squares.take(4).to_vec(), vec![1, 4, 9, 16]);
    }

    #[rstest]
    fn test_map_runs_function_once_per_cell() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mapped = Stream::integers_from(0).map(move |n| {
            counter.set(counter.get() + 1);
            n + 1
        });
        let _ = mapped.take(3).to_vec();
        let _ = mapped.take(3).to_vec();
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    fn test_filter_skips_long_gaps() {
        let sparse = Stream::integers_from(0).filter(|n| n % 100_000 == 0);
        assert_eq!(sparse.take(3).to_vec(), vec![0, 100_000, 200_000]);
    }

    #[rstest]
    fn test_append() {
        let first: Stream<i32> = [1, 2].into_iter().collect();
        let second: Stream<i32> = [3].into_iter().collect();
        assert_eq!(first.append(&second).to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_append_with_defers_second_stream() {
        let built = Rc::new(Cell::new(false));
        let flag = Rc::clone(&built);
        let first: Stream<i32> = [1, 2].into_iter().collect();
        let stream = first.append_with(move || {
            flag.set(true);
            Stream::unit(3)
        });
        assert_eq!(stream.take(2).to_vec(), vec![1, 2]);
        assert!(!built.get());
        assert_eq!(stream.to_vec(), vec![1, 2, 3]);
        assert!(built.get());
    }

    #[rstest]
    fn test_append_infinite_first() {
        let stream = Stream::repeat(1).append(&Stream::repeat(2));
        assert_eq!(stream.take(3).to_vec(), vec![1, 1, 1]);
    }

    #[rstest]
    fn test_flatten_skips_empty_inner_streams() {
        let outer = Stream::integers_from(0).map(|n| {
            if n % 1000 == 999 {
                Stream::unit(*n)
            } else {
                Stream::new()
            }
        });
        assert_eq!(outer.flatten().take(2).to_vec(), vec![999, 1999]);
    }

    #[rstest]
    fn test_flat_map_on_infinite_outer() {
        let stream = Stream::integers_from(1).flat_map(|n| Stream::iterate(n, |x| x * 10).take(2));
        assert_eq!(stream.take(6).to_vec(), vec![1, 10, 2, 20, 3, 30]);
    }

    #[rstest]
    fn test_monad_unit() {
        let stream = <Stream<i32> as Monad>::unit(7);
        assert_eq!(stream.to_vec(), vec![7]);
    }

    #[rstest]
    fn test_foldr() {
        let stream: Stream<i32> = (1..=4).collect();
        assert_eq!(stream.foldr(0, |x, acc| x + acc), 10);
        assert_eq!(
            stream.foldr(String::new(), |x, acc| format!("{x}{acc}")),
            "1234"
        );
    }

    #[rstest]
    fn test_for_all_on_empty_is_false() {
        assert!(!Stream::<i32>::new().for_all(|_| true));
    }

    #[rstest]
    fn test_for_all_stops_at_failure() {
        assert!(!Stream::integers_from(1).for_all(|n| *n < 10));
        let small: Stream<i32> = (1..=3).collect();
        assert!(small.for_all(|n| *n < 10));
    }

    #[rstest]
    fn test_any_stops_at_match() {
        assert!(Stream::integers_from(1).any(|n| *n == 50));
    }

    #[rstest]
    fn test_for_each_visits_in_order() {
        let stream: Stream<i32> = (1..=3).collect();
        let mut seen = Vec::new();
        stream.for_each(|x| seen.push(*x));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_zip_with() {
        let sums = Stream::integers_from(1).zip_with(&Stream::repeat(10), |a, b| a + b);
        assert_eq!(sums.take(3).to_vec(), vec![11, 12, 13]);
    }

    #[rstest]
    fn test_iterate() {
        let powers = Stream::iterate(1_i64, |x| x * 2);
        assert_eq!(powers.take(5).to_vec(), vec![1, 2, 4, 8, 16]);
        assert_eq!(powers.get(10), Some(1024));
    }

    #[rstest]
    fn test_list_round_trip() {
        let list: List<i32> = (1..=3).collect();
        let stream = Stream::from(list.clone());
        assert_eq!(stream.to_list(), list);
    }

    #[rstest]
    fn test_pattern_does_not_force_tail() {
        let calls = Rc::new(Cell::new(0));
        let stream = counted_integers(1, Rc::clone(&calls));
        let head = Pattern::<Stream<i64>, i64>::new()
            .on_empty(|| -1)
            .on_cons(|head, tail| {
                assert!(!tail.is_forced());
                *head
            })
            .apply(&stream);
        assert_eq!(head, Ok(1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_pattern_forces_through_view() {
        let stream = Stream::integers_from(3);
        let second = Pattern::<Stream<i64>, Option<i64>>::new()
            .on_cons(|_, tail| tail.force().head().copied())
            .apply(&stream);
        assert_eq!(second, Ok(Some(4)));
    }

    #[rstest]
    fn test_pattern_non_exhaustive_on_empty() {
        let stream: Stream<i64> = Stream::new();
        let result = Pattern::<Stream<i64>, i64>::new()
            .on_cons(|head, _| *head)
            .apply(&stream);
        assert!(matches!(
            result,
            Err(AdtError::NonExhaustiveMatch { tag: "empty", .. })
        ));
    }

    #[rstest]
    fn test_debug_shows_forced_prefix() {
        let stream = Stream::integers_from(1);
        let _ = stream.take(3).to_vec();
        assert_eq!(format!("{stream:?}"), "[1, 2, 3, ..]");
    }

    #[rstest]
    fn test_long_forced_stream_drops_without_overflow() {
        let stream = Stream::integers_from(0);
        assert_eq!(stream.get(200_000), Some(200_000));
        drop(stream);
    }

    #[rstest]
    fn test_unforced_append_chain_drops_without_overflow() {
        let mut stream = Stream::new();
        for index in 0..50_000 {
            stream = stream.append(&Stream::unit(index));
        }
        assert_eq!(stream.head(), Some(&0));
        assert!(!stream.is_tail_forced());
        drop(stream);
    }

    #[rstest]
    fn test_append_chain_forces_without_overflow() {
        let mut stream = Stream::new();
        for index in 0..5_000 {
            stream = stream.append(&Stream::unit(index));
        }
        assert_eq!(stream.to_vec(), (0..5_000).collect::<Vec<i32>>());
    }

    #[rstest]
    fn test_take_chain_drops_without_overflow() {
        let mut stream = Stream::integers_from(0);
        for _ in 0..50_000 {
            stream = stream.take(3);
        }
        assert_eq!(stream.head(), Some(&0));
        drop(stream);
    }

    #[rstest]
    fn test_take_of_one_does_not_force_tail() {
        let calls = Rc::new(Cell::new(0));
        let stream = counted_integers(7, Rc::clone(&calls));
        assert_eq!(stream.take(1).to_vec(), vec![7]);
        assert_eq!(calls.get(), 0);
    }
}
