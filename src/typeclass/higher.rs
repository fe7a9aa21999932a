//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over a type constructor such as `List<_>` directly.
//! [`TypeConstructor`] names the element type of a container and the same
//! container applied to another element type, which is what [`Functor`]
//! and [`Monad`] need to describe `fmap` and `flat_map`.
//!
//! [`Functor`]: super::Functor
//! [`Monad`]: super::Monad
//!
//! # Example
//!
//! ```rust
//! use monadkit::control::Maybe;
//! use monadkit::typeclass::TypeConstructor;
//!
//! fn discard<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let nothing: Maybe<String> = discard(Maybe::just(42));
//! assert!(nothing.is_nothing());
//! ```

/// A type constructor applied to one element type.
///
/// `Inner` is the element type and `WithType<B>` is the same constructor
/// applied to `B`. For `List<i32>`, `Inner = i32` and
/// `WithType<String> = List<String>`.
pub trait TypeConstructor {
    /// The element type.
    type Inner;

    /// The same type constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;

    #[test]
    fn identity_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Identity<i32>>();
    }

    #[test]
    fn identity_with_type_produces_correct_type() {
        fn assert_with_type<T, B>()
        where
            Identity<T>: TypeConstructor<Inner = T, WithType<B> = Identity<B>>,
        {
        }

        assert_with_type::<i32, String>();
        assert_with_type::<String, Vec<u8>>();
    }

    #[cfg(feature = "persistent")]
    #[test]
    fn list_with_type_changes_element() {
        use crate::persistent::List;

        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<char>
        where
            T::WithType<char>: Default,
        {
            Default::default()
        }

        let result: List<char> = transform(List::unit(1));
        assert!(result.is_empty());
    }

    #[cfg(feature = "control")]
    #[test]
    fn either_with_type_preserves_left() {
        use crate::control::Either;

        fn assert_with_type<L, R, B>()
        where
            Either<L, R>: TypeConstructor<Inner = R, WithType<B> = Either<L, B>>,
        {
        }

        assert_with_type::<String, i32, bool>();
    }
}
