//! Reader Monad - computation with a read-only environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composed readers all receive
//! the same environment, which makes the Reader a way to thread
//! configuration or dependencies without passing them explicitly.
//!
//! # Laws
//!
//! Equality is observational: run both sides with the same environment.
//!
//! - Left Identity: `Reader::unit(a).flat_map(f).run(e) == f(a).run(e)`
//! - Right Identity: `m.flat_map(Reader::unit).run(e) == m.run(e)`
//! - Associativity: `m.flat_map(f).flat_map(g).run(e) == m.flat_map(|x| f(x).flat_map(g)).run(e)`
//! - Ask Idempotence: `ask().then(ask()).run(e) == ask().run(e)`
//!
//! # Examples
//!
//! ```rust
//! use monadkit::effect::Reader;
//!
//! let computation: Reader<i32, i32> = Reader::ask().flat_map(|x| Reader::unit(x + 10));
//! assert_eq!(computation.run(1), 11);
//! ```
//!
//! Dependency injection:
//!
//! ```rust
//! use monadkit::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     name: String,
//!     retries: u32,
//! }
//!
//! let banner: Reader<Config, String> = Reader::asks(|config: Config| config.name)
//!     .flat_map(|name| Reader::asks(move |config: Config| format!("{name} x{}", config.retries)));
//!
//! let config = Config { name: "fetch".to_string(), retries: 3 };
//! assert_eq!(banner.run(config), "fetch x3");
//! ```

use std::rc::Rc;

use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A computation that reads from an environment of type `R`.
pub struct Reader<R, A> {
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R: 'static, A: 'static> Reader<R, A> {
    /// Creates a Reader from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation with `environment`. A Reader can be run any
    /// number of times.
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// Ignores the environment and returns `value`.
    pub fn unit(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Applies `function` to the result.
    #[must_use]
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment| function(original_function(environment)))
    }

    /// Runs `function` on the result and then runs the Reader it returns
    /// with the same environment.
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        R: Clone,
        B: 'static,
        F: Fn(A) -> Reader<R, B> + 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment: R| {
            let intermediate = original_function(environment.clone());
            function(intermediate).run(environment)
        })
    }

    /// Sequences `next` after `self`, discarding the result of `self`.
    #[must_use]
    pub fn then<B>(self, next: Reader<R, B>) -> Reader<R, B>
    where
        R: Clone,
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Projects a value out of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs `computation` with an environment rewritten by `modifier`.
    ///
    /// ```rust
    /// use monadkit::effect::Reader;
    ///
    /// let doubled: Reader<i32, i32> = Reader::local(|x| x * 2, Reader::ask());
    /// assert_eq!(doubled.run(21), 42);
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let computation_function = computation.run_function;
        Self::new(move |environment| computation_function(modifier(environment)))
    }
}

impl<R: 'static> Reader<R, R> {
    /// Returns the environment itself.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Clone for Reader<R, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> std::fmt::Debug for Reader<R, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("<Reader>")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<R, A> TypeConstructor for Reader<R, A> {
    type Inner = A;
    type WithType<B> = Reader<R, B>;
}

impl<R: 'static, A: 'static> Functor for Reader<R, A> {
    fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        Self::fmap(self, function)
    }
}

impl<R: Clone + 'static, A: Clone + 'static> Monad for Reader<R, A> {
    fn unit(value: A) -> Self {
        Self::unit(value)
    }

    fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        B: Clone + 'static,
        F: Fn(A) -> Reader<R, B> + 'static,
    {
        Self::flat_map(self, function)
    }
}
