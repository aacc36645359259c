//! This crate is part of [rdfstore],
//! an embeddable store for [RDF] triples and quads.
//!
//! It defines the data model (terms, triples, quads),
//! the patterns used to query a store,
//! the namespace manager,
//! and the [`Store`](store::Store) trait that every backend implements.
//!
//! [rdfstore]: https://docs.rs/rdfstore/latest/rdfstore/
//! [RDF]: https://www.w3.org/TR/rdf-primer/

pub mod ns;
pub mod prefix;
pub mod quad;
pub mod store;
pub mod term;
pub mod triple;

pub mod prelude;
