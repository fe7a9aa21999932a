//! Tagged unions with structural pattern dispatch.
//!
//! Every algebraic type in this crate is a native Rust enum (or a struct
//! with a single shape), so compile-time `match` is always available. The
//! [`Variant`] trait exposes the same information at runtime: the tag a
//! value was constructed with, the closed set of tags of its type, and a
//! borrowed view of its payload. A [`Pattern`] collects one handler per tag
//! and dispatches on a value, reporting [`AdtError::NonExhaustiveMatch`]
//! when the tag of the value has no handler.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::AdtError;
//! use monadkit::persistent::List;
//! use monadkit::variant::Pattern;
//!
//! fn describe(list: &List<i32>) -> Result<String, AdtError> {
//!     Pattern::<List<i32>, _>::new()
//!         .on_empty(|| "empty".to_string())
//!         .on_cons(|head, tail| format!("{head} followed by {} more", tail.len()))
//!         .apply(list)
//! }
//!
//! let list: List<i32> = (1..=3).collect();
//! assert_eq!(describe(&list).unwrap(), "1 followed by 2 more");
//!
//! let partial = Pattern::<List<i32>, _>::new().on_empty(|| 0);
//! assert!(matches!(
//!     partial.apply(&list),
//!     Err(AdtError::NonExhaustiveMatch { tag: "cons", .. })
//! ));
//! ```

use std::fmt;

use crate::error::AdtError;

/// A constructor tag of a closed sum type.
pub trait Tag: Copy + Eq + fmt::Debug + 'static {
    /// The constructor name, as reported in errors.
    fn name(self) -> &'static str;
}

/// A value of a closed sum type whose constructor can be inspected at runtime.
///
/// `View<'a>` is the borrowed payload handed to pattern handlers. It is
/// usually a small enum mirroring the constructors, or the type itself with
/// its payload borrowed (`Maybe<&T>`).
pub trait Variant {
    /// The tag type of this sum type.
    type Tag: Tag;

    /// The borrowed payload of a value.
    type View<'a>
    where
        Self: 'a;

    /// Every tag of the type, in declaration order.
    const TAGS: &'static [Self::Tag];

    /// The tag this value was constructed with.
    fn tag(&self) -> Self::Tag;

    /// Borrows the payload of this value.
    fn view(&self) -> Self::View<'_>;

    /// Returns `true` if this value was constructed with `tag`.
    fn is(&self, tag: Self::Tag) -> bool {
        self.tag() == tag
    }
}

/// The tags shared by [`List`](crate::persistent::List) and
/// [`Stream`](crate::persistent::Stream).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceTag {
    /// The empty sequence.
    Empty,
    /// A head followed by a tail.
    Cons,
}

impl Tag for SequenceTag {
    fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Cons => "cons",
        }
    }
}

/// A set of handlers keyed by tag, applied to one value of `V`.
///
/// Registering a second handler for the same tag replaces the first.
pub struct Pattern<'v, V, R>
where
    V: Variant + 'v,
{
    arms: Vec<(V::Tag, Box<dyn FnOnce(V::View<'v>) -> R + 'v>)>,
}

impl<'v, V, R> Pattern<'v, V, R>
where
    V: Variant + 'v,
{
    /// Creates a pattern with no handlers.
    pub fn new() -> Self {
        Self { arms: Vec::new() }
    }

    /// Registers `handler` for values constructed with `tag`.
    #[must_use]
    pub fn on<H>(mut self, tag: V::Tag, handler: H) -> Self
    where
        H: FnOnce(V::View<'v>) -> R + 'v,
    {
        self.arms.retain(|(existing, _)| *existing != tag);
        self.arms.push((tag, Box::new(handler)));
        self
    }

    /// Returns `true` if a handler is registered for `tag`.
    pub fn handles(&self, tag: V::Tag) -> bool {
        self.arms.iter().any(|(existing, _)| *existing == tag)
    }

    /// Returns `true` if every tag of `V` has a handler.
    pub fn is_exhaustive(&self) -> bool {
        V::TAGS.iter().all(|tag| self.handles(*tag))
    }

    /// Runs the handler registered for the tag of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::NonExhaustiveMatch`] if no handler is registered
    /// for the tag of `value`.
    pub fn apply(mut self, value: &'v V) -> Result<R, AdtError> {
        let tag = value.tag();
        let position = self
            .arms
            .iter()
            .position(|(existing, _)| *existing == tag)
            .ok_or(AdtError::NonExhaustiveMatch {
                type_name: std::any::type_name::<V>(),
                tag: tag.name(),
            })?;
        let (_, handler) = self.arms.swap_remove(position);
        Ok(handler(value.view()))
    }
}

impl<'v, V, R> Default for Pattern<'v, V, R>
where
    V: Variant + 'v,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'v, V, R> fmt::Debug for Pattern<'v, V, R>
where
    V: Variant + 'v,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pattern")
            .field(
                "tags",
                &self.arms.iter().map(|(tag, _)| tag.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Dispatches `value` on `pattern`. Same as [`Pattern::apply`].
///
/// # Errors
///
/// Returns [`AdtError::NonExhaustiveMatch`] if the pattern has no handler
/// for the tag of `value`.
pub fn dispatch<'v, V, R>(value: &'v V, pattern: Pattern<'v, V, R>) -> Result<R, AdtError>
where
    V: Variant + 'v,
{
    pattern.apply(value)
}
