//! Identity wrapper type - the identity monad.
//!
//! `Identity` wraps a value and adds no effect. It is the simplest subject
//! for the monad laws and the base case when comparing other monads.

use super::TypeConstructor;

/// The identity monad - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use monadkit::typeclass::{Identity, Monad};
///
/// let wrapped = Identity::new(41).flat_map(|x| Identity::new(x + 1));
/// assert_eq!(wrapped.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_new_creates_wrapper() {
        let wrapped = Identity::new(42);
        assert_eq!(wrapped.0, 42);
    }

    #[rstest]
    fn identity_into_inner_unwraps() {
        let wrapped = Identity::new(String::from("hello"));
        assert_eq!(wrapped.into_inner(), "hello");
    }

    #[rstest]
    fn identity_as_inner_returns_reference() {
        let wrapped = Identity::new(vec![1, 2, 3]);
        assert_eq!(wrapped.as_inner(), &vec![1, 2, 3]);
    }

    #[rstest]
    fn identity_from_value() {
        let wrapped: Identity<char> = 'x'.into();
        assert_eq!(wrapped, Identity('x'));
    }
}
