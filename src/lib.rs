//! # monadkit
//!
//! Algebraic data types and the monads built on them.
//!
//! ## Overview
//!
//! - **Variants**: every sum type exposes its constructor tag and a borrowed
//!   view, and a runtime [`Pattern`](variant::Pattern) dispatches on them,
//!   failing with [`AdtError::NonExhaustiveMatch`] on a missing handler
//! - **Persistent Data Structures**: an immutable [`List`](persistent::List)
//!   with structural sharing and a lazy, memoized, possibly infinite
//!   [`Stream`](persistent::Stream)
//! - **Control Structures**: [`Maybe`](control::Maybe), [`Either`](control::Either),
//!   [`Lazy`](control::Lazy) and the multi-shot
//!   [`Continuation`](control::Continuation) with `call_cc`
//! - **Effects**: [`Writer`](effect::Writer), [`Reader`](effect::Reader)
//!   and [`State`](effect::State), plus the `eff!` do-notation macro
//! - **Type Classes**: [`Functor`](typeclass::Functor) and
//!   [`Monad`](typeclass::Monad) over a GAT encoding of type constructors
//! - **Laws**: executable monad laws with observational equality
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, Monoid)
//! - `control`: Maybe, Either, Lazy and Continuation
//! - `persistent`: List, Stream, Pair and cursors
//! - `effect`: Writer, Reader, State, tree labelling and `eff!`
//! - `laws`: The monad law harness (logs through `tracing`)
//! - `numeric`: gcd, primality, factorisation and the prime stream
//! - `serde`: Serialization of List, Maybe and Pair
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadkit::prelude::*;
//!
//! let list: List<i32> = (1..=3).collect();
//! let mirrored = list.flat_map(|x| List::from_iter([x, -x]));
//! assert_eq!(mirrored.to_vec(), vec![1, -1, 2, -2, 3, -3]);
//!
//! let naturals = Stream::integers_from(1);
//! assert_eq!(naturals.take(4).to_vec(), vec![1, 2, 3, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use monadkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::AdtError;
    pub use crate::variant::{Pattern, SequenceTag, Tag, Variant};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

mod error;
pub mod variant;

pub use error::{AdtError, Result};

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "laws")]
pub mod laws;

#[cfg(feature = "numeric")]
pub mod numeric;
