//! Control structures for functional programming.
//!
//! - [`Maybe`]: An optional value as a closed sum type
//! - [`Either`]: A value that can be one of two types
//! - [`Lazy`]: Lazy evaluation with memoization, used for stream tails
//! - [`Continuation`]: Multi-shot continuation monad with `call_cc`
//!
//! # Examples
//!
//! ## Lazy Evaluation
//!
//! ```rust
//! use monadkit::control::Lazy;
//!
//! let lazy = Lazy::new(|| 6 * 7);
//! assert!(!lazy.is_initialized());
//! assert_eq!(*lazy.force(), 42);
//! assert!(lazy.is_initialized());
//! ```
//!
//! ## Optional Values
//!
//! ```rust
//! use monadkit::control::Maybe;
//!
//! let halved = Maybe::just(10).flat_map(|n| if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() });
//! assert_eq!(halved, Maybe::just(5));
//! ```

mod continuation;
mod either;
mod lazy;
mod maybe;

pub use continuation::{Continuation, Continue, Escape};
pub use either::{Either, EitherTag};
pub use lazy::{Lazy, LazyState};
pub use maybe::{Maybe, MaybeTag};
