//! Type class traits for the algebraic types of this crate.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`] and [`Monad`]: the mapping and sequencing contracts
//! - [`Semigroup`] and [`Monoid`]: the log algebra of the Writer monad
//! - [`Identity`]: the trivial monad, used as the simplest law subject
//!
//! Mapping and binding functions are `Fn + 'static` rather than `FnOnce`:
//! a list applies its function once per element and a stream or a
//! function monad stores it for later, possibly repeated, application.

mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
