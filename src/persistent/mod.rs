//! Persistent sequences and products.
//!
//! - [`List`]: a strict, finite, immutable cons-list
//! - [`Stream`]: a lazy, possibly infinite sequence with memoized tails
//! - [`Pair`]: an immutable two-element product
//! - [`Cursor`]: a stateful iterator over a list or a stream
//!
//! All of them share structure through `Rc` and are therefore neither
//! `Send` nor `Sync`.

mod cursor;
mod list;
mod pair;
mod stream;

pub use cursor::{Cursor, Pull};
pub use list::{List, ListIterator, ListView, cons, empty};
pub use pair::{Pair, PairTag};
pub use stream::{DeferredTail, Stream, StreamView};
