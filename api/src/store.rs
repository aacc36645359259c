//! A store is the backend holding quads.
//!
//! This module provides the [`Store`] trait, which is the single extension point
//! for plugging a storage engine, and the errors that stores may raise.
//! Implementations are chosen statically (by type) rather than looked up by name.

#[cfg(any(test, feature = "test_macro"))]
#[macro_use]
pub mod test;

mod _error;
pub use self::_error::*;
mod _traits;
pub use self::_traits::*;
