//! This crate is part of [rdfstore],
//! an embeddable store for [RDF] triples and quads.
//!
//! It provides an in-memory implementation of the [`Store`](rdfstore_api::store::Store) trait,
//! where quads are indexed in every order so that any pattern is answered by range scans.
//!
//! [rdfstore]: https://docs.rs/rdfstore/latest/rdfstore/
//! [RDF]: https://www.w3.org/TR/rdf-primer/

pub mod index;
pub mod registry;
pub mod store;

pub use registry::Registry;
pub use store::MemoryStore;
