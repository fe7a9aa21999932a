//! State Monad - stateful computation.
//!
//! A `State<S, A>` wraps a transition `S -> (A, S)`: given the current
//! state it produces a result and the next state. `flat_map` feeds the
//! state left by one step into the next, so a chain of `State` values
//! reads like imperative code over a variable while staying pure.
//!
//! # Laws
//!
//! Equality is observational: run both sides from the same initial state.
//!
//! - Left Identity: `State::unit(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(State::unit) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//! - Put Get Law: `put(s).then(get())` returns `s`
//! - Put Put Law: `put(s1).then(put(s2)) == put(s2)`
//!
//! # Examples
//!
//! Counter pattern:
//!
//! ```rust
//! use monadkit::effect::State;
//!
//! let increment = || State::<i32, ()>::modify(|count| count + 1);
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(increment())
//!     .then(State::get());
//!
//! assert_eq!(computation.run(0), (3, 3));
//! ```
//!
//! Fresh names:
//!
//! ```rust
//! use monadkit::effect::State;
//!
//! let three = State::<u32, u32>::fresh()
//!     .flat_map(|a| State::fresh().flat_map(move |b| State::fresh().fmap(move |c| vec![a, b, c])));
//! assert_eq!(three.run(10), (vec![10, 11, 12], 13));
//! ```

use std::rc::Rc;

use crate::persistent::Pair;
use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A computation that threads a state of type `S` and produces an `A`.
pub struct State<S, A> {
    run_function: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S: 'static, A: 'static> State<S, A> {
    /// Creates a State from a transition function returning `(result, next_state)`.
    ///
    /// ```rust
    /// use monadkit::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s| (s * 2, s + 1));
    /// assert_eq!(state.run(10), (20, 11));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation from `initial_state`, returning the result and the final state.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.run_function)(initial_state)
    }

    /// Same as [`run`](Self::run), returning a [`Pair`] of result and state.
    pub fn run_pair(&self, initial_state: S) -> Pair<A, S> {
        self.run(initial_state).into()
    }

    /// Runs the computation and returns only the result.
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the computation and returns only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// Returns `value` and leaves the state unchanged.
    pub fn unit(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Applies `function` to the result.
    #[must_use]
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, next_state) = original_function(state);
            (function(result), next_state)
        })
    }

    /// Runs `self`, passes its result to `function`, and runs the returned
    /// computation from the state `self` left behind.
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A) -> State<S, B> + 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, intermediate_state) = original_function(state);
            function(result).run(intermediate_state)
        })
    }

    /// Sequences `next` after `self`, discarding the result of `self`.
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Returns a projection of the state, leaving it unchanged.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }
}

impl<S: Clone + 'static> State<S, S> {
    /// Returns the current state as the result.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }

    /// Returns the current state and advances it to its successor.
    ///
    /// The counter wraps at the maximum of its type, so `fresh` on
    /// `u8::MAX` yields `255` and leaves the state at `0`.
    ///
    /// ```rust
    /// use monadkit::effect::State;
    ///
    /// assert_eq!(State::<i64, i64>::fresh().run(0), (0, 1));
    /// assert_eq!(State::<u8, u8>::fresh().run(u8::MAX), (u8::MAX, 0));
    /// ```
    #[must_use]
    pub fn fresh() -> Self
    where
        S: Counter,
    {
        Self::new(|state: S| {
            let next = state.successor();
            (state, next)
        })
    }
}

/// A state that [`State::fresh`] can advance.
pub trait Counter {
    /// The next value, wrapping at the maximum.
    #[must_use]
    fn successor(&self) -> Self;
}

macro_rules! impl_counter {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Counter for $integer {
                #[inline]
                fn successor(&self) -> Self {
                    self.wrapping_add(1)
                }
            }
        )*
    };
}

impl_counter!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<S: 'static> State<S, ()> {
    /// Replaces the state.
    #[must_use]
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Rewrites the state with `modifier`.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, A> Clone for State<S, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S, A> std::fmt::Debug for State<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("<State>")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<S, A> TypeConstructor for State<S, A> {
    type Inner = A;
    type WithType<B> = State<S, B>;
}

impl<S: 'static, A: 'static> Functor for State<S, A> {
    fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        Self::fmap(self, function)
    }
}

impl<S: 'static, A: Clone + 'static> Monad for State<S, A> {
    fn unit(value: A) -> Self {
        Self::unit(value)
    }

    fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        B: Clone + 'static,
        F: Fn(A) -> State<S, B> + 'static,
    {
        Self::flat_map(self, function)
    }
}
