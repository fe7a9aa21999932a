//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws, where equality is
//! observational for the function-backed monads (compare the results of
//! running both sides on the same input):
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::unit(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::unit) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! The [`laws`](crate::laws) module checks all three for any implementation.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Maybe;
//! use monadkit::typeclass::Monad;
//!
//! fn halve(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() }
//! }
//!
//! assert_eq!(Maybe::unit(20).flat_map(halve).flat_map(halve), Maybe::just(5));
//! assert_eq!(Maybe::unit(6).flat_map(halve).flat_map(halve), Maybe::nothing());
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for types that support sequencing of computations.
///
/// `unit` lifts a plain value and `flat_map` (bind) feeds the contents of
/// one computation into a function producing the next.
pub trait Monad: Functor {
    /// Lifts a plain value into the monad.
    fn unit(value: Self::Inner) -> Self;

    /// Applies `function` to the contents and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        B: Clone + 'static,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static;

    /// Alias for [`flat_map`](Monad::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        B: Clone + 'static,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the contents of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    /// use monadkit::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::just(1).then(Maybe::just("next")), Maybe::just("next"));
    /// assert_eq!(Maybe::<i32>::nothing().then(Maybe::just("next")), Maybe::nothing());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        B: Clone + 'static,
        Self::WithType<B>: Clone + 'static,
    {
        self.flat_map(move |_| next.clone())
    }
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        Identity(function(self.0))
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn unit(value: A) -> Self {
        Self(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> Identity<B> + 'static,
    {
        function(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_flat_map_chains() {
        let result = Identity::unit(5)
            .flat_map(|x| Identity::new(x + 1))
            .flat_map(|x| Identity::new(x * 2));
        assert_eq!(result, Identity::new(12));
    }

    #[rstest]
    fn and_then_is_flat_map() {
        let function = |x: i32| Identity::new(x.to_string());
        assert_eq!(
            Identity::new(3).and_then(function),
            Identity::new(3).flat_map(function)
        );
    }

    #[rstest]
    fn then_discards_first_value() {
        assert_eq!(Identity::new(1).then(Identity::new("second")), Identity::new("second"));
    }

    #[rstest]
    fn left_identity_law() {
        let function = |x: i32| Identity::new(x * 3);
        assert_eq!(Identity::unit(7).flat_map(function), function(7));
    }

    #[rstest]
    fn right_identity_law() {
        let value = Identity::new("x".to_string());
        assert_eq!(value.clone().flat_map(Identity::unit), value);
    }

    #[rstest]
    fn associativity_law() {
        let function1 = |x: i32| Identity::new(x + 1);
        let function2 = |x: i32| Identity::new(x * 10);
        let value = Identity::new(4);
        assert_eq!(
            value.flat_map(function1).flat_map(function2),
            value.flat_map(move |x| function1(x).flat_map(function2))
        );
    }
}
