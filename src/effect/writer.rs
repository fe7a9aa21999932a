//! Writer Monad - computation with accumulated output.
//!
//! A `Writer<W, A>` pairs a result of type `A` with a log of type `W`. The
//! log must be a [`Monoid`]: `unit` starts with the empty log and
//! `flat_map` appends the log of the continuation after the log of the
//! current step, so entries appear in call order.
//!
//! The canonical log is a [`List`] of entries, written one at a time with
//! [`Writer::tell_entry`].
//!
//! # Laws
//!
//! - Left Identity: `Writer::unit(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(Writer::unit) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//! - Tell Monoid Law: `tell(w1).then(tell(w2)) == tell(w1.combine(w2))`
//!
//! # Examples
//!
//! ```rust
//! use monadkit::effect::Writer;
//! use monadkit::persistent::List;
//!
//! fn factorial(n: u64) -> Writer<List<u64>, u64> {
//!     if n == 0 {
//!         Writer::tell_entry(0).then(Writer::unit(1))
//!     } else {
//!         Writer::tell_entry(n)
//!             .then(factorial(n - 1))
//!             .fmap(move |rest| n * rest)
//!     }
//! }
//!
//! let (result, log) = factorial(5).run();
//! assert_eq!(result, 120);
//! assert_eq!(log.to_vec(), vec![5, 4, 3, 2, 1, 0]);
//! ```

use crate::persistent::{List, Pair};
use crate::typeclass::{Functor, Monad, Monoid, TypeConstructor};

/// A computation that produces a value alongside an accumulated log.
///
/// # Examples
///
/// ```rust
/// use monadkit::effect::Writer;
///
/// let computation: Writer<Vec<String>, i32> = Writer::tell(vec!["log".to_string()])
///     .then(Writer::unit(42));
///
/// let (result, output) = computation.run();
/// assert_eq!(result, 42);
/// assert_eq!(output, vec!["log"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Writer<W, A> {
    value: A,
    log: W,
}

impl<W, A> Writer<W, A> {
    /// Creates a Writer with the given result and log.
    pub const fn new(value: A, log: W) -> Self {
        Self { value, log }
    }

    /// Returns the result and the log.
    pub fn run(self) -> (A, W) {
        (self.value, self.log)
    }

    /// Returns the log and the result as a [`Pair`], log on the left.
    pub fn into_pair(self) -> Pair<W, A> {
        Pair::new(self.log, self.value)
    }

    /// Returns only the result.
    pub fn eval(self) -> A {
        self.value
    }

    /// Returns only the log.
    pub fn exec(self) -> W {
        self.log
    }

    /// Borrows the result.
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Borrows the log.
    pub const fn log(&self) -> &W {
        &self.log
    }

    /// Applies `function` to the result; the log is unchanged.
    pub fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer {
            value: function(self.value),
            log: self.log,
        }
    }
}

impl<W: Monoid, A> Writer<W, A> {
    /// Creates a Writer with the given result and an empty log.
    ///
    /// ```rust
    /// use monadkit::effect::Writer;
    ///
    /// let writer: Writer<String, i32> = Writer::unit(42);
    /// assert_eq!(writer.run(), (42, String::new()));
    /// ```
    pub fn unit(value: A) -> Self {
        Self {
            value,
            log: W::empty(),
        }
    }

    /// Runs `function` on the result and appends its log after this one.
    pub fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        let next = function(self.value);
        Writer {
            value: next.value,
            log: self.log.combine(next.log),
        }
    }

    /// Sequences `next` after `self`, keeping both logs and the result of `next`.
    pub fn then<B>(self, next: Writer<W, B>) -> Writer<W, B> {
        Writer {
            value: next.value,
            log: self.log.combine(next.log),
        }
    }

    /// Makes the log of `self` available as part of the result.
    pub fn listen(self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        Writer {
            value: (self.value, self.log.clone()),
            log: self.log,
        }
    }

    /// Rewrites the log with `modifier`, keeping the result.
    ///
    /// ```rust
    /// use monadkit::effect::Writer;
    ///
    /// let writer: Writer<Vec<&str>, i32> = Writer::new(1, vec!["secret", "public"]);
    /// let censored = writer.censor(|log| log.into_iter().filter(|entry| *entry != "secret").collect());
    /// assert_eq!(censored.exec(), vec!["public"]);
    /// ```
    pub fn censor<F>(self, modifier: F) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Self {
            value: self.value,
            log: modifier(self.log),
        }
    }
}

impl<W> Writer<W, ()> {
    /// Writes `log` with a unit result.
    pub const fn tell(log: W) -> Self {
        Self { value: (), log }
    }
}

impl<E> Writer<List<E>, ()> {
    /// Writes a single entry to a list log.
    pub fn tell_entry(entry: E) -> Self {
        Self {
            value: (),
            log: List::singleton(entry),
        }
    }
}

impl<W, A> From<Writer<W, A>> for Pair<W, A> {
    fn from(writer: Writer<W, A>) -> Self {
        writer.into_pair()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<W, A> TypeConstructor for Writer<W, A> {
    type Inner = A;
    type WithType<B> = Writer<W, B>;
}

impl<W, A> Functor for Writer<W, A> {
    fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        Self::fmap(self, function)
    }
}

impl<W: Monoid, A> Monad for Writer<W, A> {
    fn unit(value: A) -> Self {
        Self::unit(value)
    }

    fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        B: Clone + 'static,
        F: Fn(A) -> Writer<W, B> + 'static,
    {
        Self::flat_map(self, function)
    }
}
