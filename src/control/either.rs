//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is `Left(L)` or `Right(R)`. As a monad it is
//! right-biased: `unit` builds `Right`, and `flat_map` short-circuits on
//! `Left`.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Either;
//!
//! fn parse(text: &str) -> Either<String, i32> {
//!     text.parse::<i32>().map_err(|_| format!("not a number: {text}")).into()
//! }
//!
//! assert_eq!(parse("20").flat_map(|n| Either::Right(n + 1)), Either::Right(21));
//! assert!(parse("x").flat_map(|n| Either::Right(n + 1)).is_left());
//!
//! let result = parse("7").fold(|error| error, |n| format!("got {n}"));
//! assert_eq!(result, "got 7");
//! ```

use std::fmt;

use crate::typeclass::{Functor, Monad, TypeConstructor};
use crate::variant::{Pattern, Tag, Variant};

/// A value that can be one of two types.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, conventionally the failure or first alternative.
    Left(L),
    /// The right variant, conventionally the success or second alternative.
    Right(R),
}

/// The constructor tags of [`Either`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EitherTag {
    /// `Left(value)`.
    Left,
    /// `Right(value)`.
    Right,
}

impl Tag for EitherTag {
    fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl<L, R> Either<L, R> {
    /// Lifts a value into `Right`.
    #[inline]
    pub const fn unit(value: R) -> Self {
        Self::Right(value)
    }

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns the left value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both sides.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms a `Left` value.
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms a `Right` value.
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms whichever side is present.
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Feeds a `Right` value to `function`. A `Left` passes through.
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Collapses both sides into one value.
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exchanges the sides.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Variant Implementation
// =============================================================================

impl<L, R> Variant for Either<L, R> {
    type Tag = EitherTag;
    type View<'a>
        = Either<&'a L, &'a R>
    where
        Self: 'a;

    const TAGS: &'static [EitherTag] = &[EitherTag::Left, EitherTag::Right];

    fn tag(&self) -> EitherTag {
        match self {
            Self::Left(_) => EitherTag::Left,
            Self::Right(_) => EitherTag::Right,
        }
    }

    fn view(&self) -> Either<&L, &R> {
        self.as_ref()
    }
}

impl<'v, L: 'v, R: 'v, T> Pattern<'v, Either<L, R>, T> {
    /// Registers the handler for `Left`.
    #[must_use]
    pub fn on_left<H>(self, handler: H) -> Self
    where
        H: FnOnce(&'v L) -> T + 'v,
    {
        self.on(EitherTag::Left, move |view| view.fold(handler, |_| {
            unreachable!("left handler dispatched on a right value")
        }))
    }

    /// Registers the handler for `Right`.
    #[must_use]
    pub fn on_right<H>(self, handler: H) -> Self
    where
        H: FnOnce(&'v R) -> T + 'v,
    {
        self.on(EitherTag::Right, move |view| view.fold(|_| {
            unreachable!("right handler dispatched on a left value")
        }, handler))
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        B: Clone + 'static,
        F: Fn(R) -> B + 'static,
    {
        self.map(function)
    }
}

impl<L, R> Monad for Either<L, R> {
    fn unit(value: R) -> Self {
        Self::Right(value)
    }

    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        B: Clone + 'static,
        F: Fn(R) -> Either<L, B> + 'static,
    {
        Self::flat_map(self, function)
    }
}
