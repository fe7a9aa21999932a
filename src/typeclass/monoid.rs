//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! The Writer monad requires a monoid log: `unit` starts from `empty()` and
//! `flat_map` joins the two logs with `combine`.

use super::Identity;
use super::semigroup::Semigroup;

/// A semigroup with an identity element.
///
/// # Examples
///
/// ```rust
/// use monadkit::typeclass::Monoid;
///
/// let words = vec![String::from("ab"), String::from("cd")];
/// assert_eq!(String::combine_all(words), "abcd");
/// assert_eq!(String::combine_all(Vec::<String>::new()), "");
/// ```
pub trait Monoid: Semigroup {
    /// The identity element of `combine`.
    fn empty() -> Self;

    /// Combines every element of an iterator, starting from `empty()`.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns `true` if this value equals `empty()`.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self(T::empty())
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}
