//! Functor type class - mapping over the elements of a container.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```

use super::TypeConstructor;

/// A type class for types that can be mapped over.
///
/// The mapping function may be called once per element (List), stored and
/// called later (Stream, Reader, State, Continuation) or called at most
/// once (Maybe, Writer). The `Fn + 'static` bound admits all of these.
///
/// # Examples
///
/// ```rust
/// use monadkit::persistent::List;
/// use monadkit::typeclass::Functor;
///
/// let list: List<i32> = (1..=3).collect();
/// let doubled: List<i32> = list.fmap(|x| x * 2);
/// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
/// ```
pub trait Functor: TypeConstructor + Sized {
    /// Applies `function` to every element, preserving the structure.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        B: Clone + 'static,
        F: Fn(Self::Inner) -> B + 'static;

    /// Replaces every element with `value`.
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the elements, keeping the structure.
    fn void(self) -> Self::WithType<()> {
        self.fmap(|_| ())
    }
}
