//! General-use types and traits from the rdfstore API.

pub use crate::prefix::NamespaceManager;
pub use crate::quad::Quad;
pub use crate::store::{Store, StoreError, StoreResult};
pub use crate::term::pattern::{Any, TermPattern, TriplePattern};
pub use crate::term::{BnodeId, Context, Iri, LanguageTag, Literal, Term, TermKind};
pub use crate::triple::Triple;
