//! Deferred computation with memoization.
//!
//! `Lazy<T, F>` is the cell behind every stream tail: the initializer runs
//! the first time the value is forced and its result is cached for every
//! later access.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Lazy;
//! use std::cell::Cell;
//!
//! let evaluations = Cell::new(0);
//! let lazy = Lazy::new(|| {
//!     evaluations.set(evaluations.get() + 1);
//!     42
//! });
//!
//! assert_eq!(evaluations.get(), 0);
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(evaluations.get(), 1);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;

/// The internal state of a `Lazy` value.
#[derive(Debug)]
pub enum LazyState<T, F> {
    /// Not forced yet. Holds the initializer.
    Uninit(F),
    /// Forced. Holds the cached value.
    Init(T),
    /// The initializer is running, or it panicked.
    Poisoned,
}

/// A lazily evaluated value with memoization.
///
/// `Lazy<T, F>` defers computation until the value is first accessed via
/// [`force`](Lazy::force). The initializer runs at most once.
///
/// This type is NOT thread-safe.
///
/// # Panics
///
/// Forcing a value from inside its own initializer panics, as does forcing
/// a value whose initializer panicked earlier.
pub struct Lazy<T, F = fn() -> T> {
    state: RefCell<LazyState<T, F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a new lazy value. The initializer is not called here.
    #[inline]
    pub const fn new(initializer: F) -> Self {
        Self {
            state: RefCell::new(LazyState::Uninit(initializer)),
        }
    }

    /// Forces evaluation and returns a reference to the cached value.
    ///
    /// # Panics
    ///
    /// Panics if the value is poisoned, which includes forcing it again
    /// while its initializer is still running.
    pub fn force(&self) -> Ref<'_, T> {
        let needs_initialization = match &*self.state.borrow() {
            LazyState::Init(_) => false,
            LazyState::Uninit(_) => true,
            LazyState::Poisoned => panic!("Lazy instance has been poisoned"),
        };

        if needs_initialization {
            self.initialize();
        }

        Ref::map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => value,
            _ => panic!("Lazy should be initialized at this point"),
        })
    }

    /// Runs the initializer with the cell released, so that re-entrant
    /// forcing observes `Poisoned` instead of a borrow conflict.
    fn initialize(&self) {
        let previous = std::mem::replace(&mut *self.state.borrow_mut(), LazyState::Poisoned);
        let initializer = match previous {
            LazyState::Uninit(initializer) => initializer,
            LazyState::Init(value) => {
                *self.state.borrow_mut() = LazyState::Init(value);
                return;
            }
            LazyState::Poisoned => panic!("Lazy instance has been poisoned"),
        };

        let value = initializer();
        *self.state.borrow_mut() = LazyState::Init(value);
    }
}

impl<T, F> Lazy<T, F> {
    /// Returns the value if it has been forced, without forcing it.
    pub fn get(&self) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => Some(value),
            _ => None,
        })
        .ok()
    }

    /// Returns `true` if the value has been forced.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Init(_))
    }

    /// Returns `true` if the initializer panicked or is still running.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Poisoned)
    }

    /// Consumes the cell and returns the value only if it was already
    /// forced. The initializer is dropped without running.
    pub fn into_evaluated(self) -> Option<T> {
        match self.state.into_inner() {
            LazyState::Init(value) => Some(value),
            LazyState::Uninit(_) | LazyState::Poisoned => None,
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            LazyState::Init(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Uninit(_) => formatter.debug_tuple("Lazy").field(&"<uninit>").finish(),
            LazyState::Poisoned => formatter.debug_tuple("Lazy").field(&"<poisoned>").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[rstest]
    fn new_does_not_evaluate() {
        let lazy = Lazy::new(|| 42);
        assert!(!lazy.is_initialized());
        assert!(lazy.get().is_none());
    }

    #[rstest]
    fn force_evaluates_once() {
        let call_count = Cell::new(0);
        let lazy = Lazy::new(|| {
            call_count.set(call_count.get() + 1);
            42
        });

        assert_eq!(*lazy.force(), 42);
        assert_eq!(*lazy.force(), 42);
        assert_eq!(call_count.get(), 1);
        assert_eq!(lazy.get().map(|value| *value), Some(42));
    }

    #[rstest]
    fn into_evaluated_skips_pending_initializer() {
        let pending = Lazy::new(|| 1);
        assert_eq!(pending.into_evaluated(), None);

        let forced = Lazy::new(|| 1);
        let _ = forced.force();
        assert_eq!(forced.into_evaluated(), Some(1));
    }

    #[rstest]
    fn panicking_initializer_poisons() {
        let lazy: Lazy<i32, _> = Lazy::new(|| panic!("initialization failed"));
        let outcome = catch_unwind(AssertUnwindSafe(|| *lazy.force()));
        assert!(outcome.is_err());
        assert!(lazy.is_poisoned());
    }

    #[rstest]
    fn debug_shows_state() {
        let lazy = Lazy::new(|| 5);
        assert_eq!(format!("{lazy:?}"), "Lazy(\"<uninit>\")");
        let _ = lazy.force();
        assert_eq!(format!("{lazy:?}"), "Lazy(5)");
    }
}
