//! Prefixes, local names and the [`NamespaceManager`],
//! which maintains the bidirectional mapping between prefixes and namespace IRIs
//! used to abbreviate IRIs into QNames (`prefix:local`).

mod _manager;
pub use _manager::*;
mod _prefix;
pub use _prefix::*;
