//! Derived monads for effects expressed as plain values.
//!
//! - [`Writer`]: Computations that accumulate a log
//! - [`Reader`]: Computations that read from a shared environment
//! - [`State`]: Computations that thread a state, including [`State::fresh`]
//! - [`Tree`]: Leaf-valued binary trees, relabelled through `State`
//!
//! The [`eff!`](crate::eff) macro offers do-notation over all of them.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::effect::{Reader, State, Writer};
//!
//! let reader: Reader<i32, i32> = Reader::ask().flat_map(|x| Reader::unit(x + 10));
//! assert_eq!(reader.run(1), 11);
//!
//! let writer: Writer<String, i32> = Writer::tell("a".to_string()).then(Writer::unit(1));
//! assert_eq!(writer.run(), (1, "a".to_string()));
//!
//! let counter = State::<i32, i32>::fresh().then(State::fresh());
//! assert_eq!(counter.run(0), (1, 2));
//! ```

mod eff_macro;
mod reader;
mod state;
mod tree;
mod writer;

pub use reader::Reader;
pub use state::{Counter, State};
pub use tree::{Tree, TreeTag, TreeView};
pub use writer::Writer;
