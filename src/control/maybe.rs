//! Optional values as a monad.
//!
//! [`Maybe`] is a closed sum of `Just(value)` and `Nothing`. Binding on
//! `Nothing` short-circuits: the function is never called.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Maybe;
//!
//! fn safe_div(numerator: i32, denominator: i32) -> Maybe<i32> {
//!     if denominator == 0 { Maybe::nothing() } else { Maybe::just(numerator / denominator) }
//! }
//!
//! assert_eq!(Maybe::just(20).flat_map(|n| safe_div(n, 4)), Maybe::just(5));
//! assert_eq!(Maybe::just(20).flat_map(|n| safe_div(n, 0)).get_or_else(-1), -1);
//! ```

use std::fmt;

use crate::typeclass::{Functor, Monad, TypeConstructor};
use crate::variant::{Pattern, Tag, Variant};

/// A value that may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value.
    Nothing,
}

/// The constructor tags of [`Maybe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaybeTag {
    /// `Just(value)`.
    Just,
    /// `Nothing`.
    Nothing,
}

impl Tag for MaybeTag {
    fn name(self) -> &'static str {
        match self {
            Self::Just => "just",
            Self::Nothing => "nothing",
        }
    }
}

impl<T> Maybe<T> {
    /// Wraps a present value.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// The absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Lifts a value. Same as [`just`](Maybe::just).
    #[inline]
    pub const fn unit(value: T) -> Self {
        Self::Just(value)
    }

    /// Returns `true` for `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies `function` to the contents of a `Just`.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Feeds the contents of a `Just` to `function`. `Nothing` stays
    /// `Nothing` and `function` is not called.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the contents, or `default` for `Nothing`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contents, or the result of `default` for `Nothing`.
    #[inline]
    pub fn get_or_else_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default(),
        }
    }

    /// Structural equality: both `Nothing`, or both `Just` with equal contents.
    #[inline]
    pub fn is_equal(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self == other
    }

    /// Converts into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

// =============================================================================
// Variant Implementation
// =============================================================================

impl<T> Variant for Maybe<T> {
    type Tag = MaybeTag;
    type View<'a>
        = Maybe<&'a T>
    where
        Self: 'a;

    const TAGS: &'static [MaybeTag] = &[MaybeTag::Just, MaybeTag::Nothing];

    fn tag(&self) -> MaybeTag {
        match self {
            Self::Just(_) => MaybeTag::Just,
            Self::Nothing => MaybeTag::Nothing,
        }
    }

    fn view(&self) -> Maybe<&T> {
        self.as_ref()
    }
}

impl<'v, T: 'v, R> Pattern<'v, Maybe<T>, R> {
    /// Registers the handler for `Just`, called with the contents.
    #[must_use]
    pub fn on_just<H>(self, handler: H) -> Self
    where
        H: FnOnce(&'v T) -> R + 'v,
    {
        self.on(MaybeTag::Just, move |view| match view {
            Maybe::Just(value) => handler(value),
            Maybe::Nothing => unreachable!("just handler dispatched on nothing"),
        })
    }

    /// Registers the handler for `Nothing`.
    #[must_use]
    pub fn on_nothing<H>(self, handler: H) -> Self
    where
        H: FnOnce() -> R + 'v,
    {
        self.on(MaybeTag::Nothing, move |_| handler())
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        B: Clone + 'static,
        F: Fn(T) -> B + 'static,
    {
        self.map(function)
    }
}

impl<T> Monad for Maybe<T> {
    fn unit(value: T) -> Self {
        Self::Just(value)
    }

    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        B: Clone + 'static,
        F: Fn(T) -> Maybe<B> + 'static,
    {
        Self::flat_map(self, function)
    }
}
