//! Continuation monad for continuation-passing style (CPS).
//!
//! A `Continuation<R, A>` is a computation that produces an `A` by handing
//! it to "the rest of the computation", a function `A -> R`, and returning
//! whatever that function returns. Composition with `flat_map` threads the
//! continuation through each step, and [`call_cc`](Continuation::call_cc)
//! exposes it as a first-class escape function.
//!
//! Continuations here are multi-shot: a computation may be run any number
//! of times and may call its continuation any number of times.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Continuation;
//!
//! fn square(n: i64) -> Continuation<i64, i64> {
//!     Continuation::unit(n * n)
//! }
//!
//! fn add(x: i64, y: i64) -> Continuation<i64, i64> {
//!     Continuation::unit(x + y)
//! }
//!
//! fn pythagoras(x: i64, y: i64) -> Continuation<i64, i64> {
//!     square(x).flat_map(move |xx| square(y).flat_map(move |yy| add(xx, yy)))
//! }
//!
//! assert_eq!(pythagoras(2, 3).eval(), 13);
//! assert_eq!(square(3).run(|n| n), 9);
//! ```
//!
//! ## Early exit with `call_cc`
//!
//! ```rust
//! use monadkit::control::Continuation;
//!
//! fn checked_half(n: i32) -> Continuation<String, i32> {
//!     Continuation::call_cc(move |exit| {
//!         if n % 2 == 0 {
//!             Continuation::unit(n / 2)
//!         } else {
//!             exit(-1)
//!         }
//!     })
//! }
//!
//! assert_eq!(checked_half(10).run(|n| n.to_string()), "5");
//! assert_eq!(checked_half(7).run(|n| n.to_string()), "-1");
//! ```

use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A continuation: the rest of the computation, from a value to the final result.
pub type Continue<A, R> = Rc<dyn Fn(A) -> R>;

/// The escape function handed to [`Continuation::call_cc`]. Calling it with
/// a value abandons the current continuation and resumes the captured one.
pub type Escape<R, A, B> = Rc<dyn Fn(A) -> Continuation<R, B>>;

/// A continuation monad representing computations in CPS.
///
/// The internal representation is `(A -> R) -> R`.
///
/// # Laws
///
/// Equality is observational: run both sides with the same continuation.
///
/// - **Left Identity**: `Continuation::unit(a).flat_map(f).run(k) == f(a).run(k)`
/// - **Right Identity**: `m.flat_map(Continuation::unit).run(k) == m.run(k)`
/// - **Associativity**: `m.flat_map(f).flat_map(g).run(k) == m.flat_map(|x| f(x).flat_map(g)).run(k)`
pub struct Continuation<R, A> {
    run_continuation: Rc<dyn Fn(Continue<A, R>) -> R>,
}

impl<R: 'static, A: 'static> Continuation<R, A> {
    /// Creates a continuation from a function `(A -> R) -> R`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Continuation;
    ///
    /// // Calls its continuation twice and adds the results.
    /// let twice: Continuation<i32, i32> = Continuation::new(|k| k(1) + k(2));
    /// assert_eq!(twice.run(|x| x * 10), 30);
    /// ```
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(Continue<A, R>) -> R + 'static,
    {
        Self {
            run_continuation: Rc::new(run),
        }
    }

    /// Lifts a value: `k => k(value)`.
    pub fn unit(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |continuation| continuation(value.clone()))
    }

    /// Runs the computation with `continuation` as the rest of the program.
    pub fn run<K>(&self, continuation: K) -> R
    where
        K: Fn(A) -> R + 'static,
    {
        self.run_with(Rc::new(continuation))
    }

    /// Runs the computation with an already shared continuation.
    pub fn run_with(&self, continuation: Continue<A, R>) -> R {
        (self.run_continuation)(continuation)
    }

    /// Applies `function` to the produced value before it reaches the continuation.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Continuation<R, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let function = Rc::new(function);
        Continuation::new(move |continuation: Continue<B, R>| {
            let function = Rc::clone(&function);
            self.run_with(Rc::new(move |value: A| continuation(function(value))))
        })
    }

    /// Sequences a continuation-producing function:
    /// `k => self(a => function(a)(k))`.
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> Continuation<R, B>
    where
        B: 'static,
        F: Fn(A) -> Continuation<R, B> + 'static,
    {
        let function = Rc::new(function);
        Continuation::new(move |continuation: Continue<B, R>| {
            let function = Rc::clone(&function);
            self.run_with(Rc::new(move |value: A| {
                function(value).run_with(Rc::clone(&continuation))
            }))
        })
    }

    /// Sequences `next` after `self`, discarding the value of `self`.
    #[must_use]
    pub fn then<B>(self, next: Continuation<R, B>) -> Continuation<R, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Call with current continuation.
    ///
    /// `function` receives an escape function. Calling the escape function
    /// with a value yields a continuation that ignores whatever continuation
    /// it is run with and passes the value to the continuation captured
    /// when `call_cc` ran. Not calling it leaves the computation unchanged.
    ///
    /// The escape function can be called any number of times, including
    /// after `function` has returned.
    pub fn call_cc<B, F>(function: F) -> Self
    where
        A: Clone,
        B: 'static,
        F: Fn(Escape<R, A, B>) -> Self + 'static,
    {
        Self::new(move |outer: Continue<A, R>| {
            let captured = Rc::clone(&outer);
            let escape: Escape<R, A, B> = Rc::new(move |value: A| {
                let captured = Rc::clone(&captured);
                Continuation::new(move |_ignored: Continue<B, R>| captured(value.clone()))
            });
            function(escape).run_with(outer)
        })
    }
}

impl<R: 'static> Continuation<R, R> {
    /// Runs the computation with the identity continuation.
    pub fn eval(&self) -> R {
        self.run(|value| value)
    }
}

impl<R, A> Clone for Continuation<R, A> {
    fn clone(&self) -> Self {
        Self {
            run_continuation: Rc::clone(&self.run_continuation),
        }
    }
}

impl<R, A> fmt::Debug for Continuation<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<Continuation>")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<R, A> TypeConstructor for Continuation<R, A> {
    type Inner = A;
    type WithType<B> = Continuation<R, B>;
}

impl<R: 'static, A: 'static> Functor for Continuation<R, A> {
    fn fmap<B, F>(self, function: F) -> Continuation<R, B>
    where
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        self.map(function)
    }
}

impl<R: 'static, A: Clone + 'static> Monad for Continuation<R, A> {
    fn unit(value: A) -> Self {
        Self::unit(value)
    }

    fn flat_map<B, F>(self, function: F) -> Continuation<R, B>
    where
        B: Clone + 'static,
        F: Fn(A) -> Continuation<R, B> + 'static,
    {
        Self::flat_map(self, function)
    }
}
