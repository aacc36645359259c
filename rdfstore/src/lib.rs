//! An embeddable store for [RDF] triples and quads.
//!
//! Each piece of knowledge in RDF (a *statement*)
//! is represented by a [triple], made of three [term]s.
//! A [store] holds *quads*, i.e. triples asserted in a given *context*.
//! A [`Graph`] is a view over the quads of one context of a store,
//! and a [`Dataset`] is a view over all of its contexts.
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [triple]: triple/index.html
//! [term]: term/index.html
//! [store]: store/index.html
//!
//! # Getting Started
//!
//! ```
//! use rdfstore::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let alice: Term = Iri::new("http://example.org/alice")?.into();
//! let bob: Term = Iri::new("http://example.org/bob")?.into();
//! let knows: Term = Iri::new("http://xmlns.com/foaf/0.1/knows")?.into();
//!
//! let mut graph = Graph::new();
//! graph.add([alice.clone(), knows.clone(), bob.clone()])?;
//! graph.add([bob.clone(), knows.clone(), alice.clone()])?;
//! assert_eq!(graph.len()?, 2);
//! assert_eq!(graph.objects(&alice, &knows)?.collect::<Vec<_>>(), vec![bob]);
//! assert!(graph.connected()?);
//!
//! graph.bind("foaf", Iri::new("http://xmlns.com/foaf/0.1/")?, false)?;
//! assert_eq!(graph.qname("http://xmlns.com/foaf/0.1/knows"), "foaf:knows");
//! # Ok(())
//! # }
//! ```

pub use rdfstore_api::ns;
pub use rdfstore_api::prefix;
pub use rdfstore_api::quad;
pub use rdfstore_api::store;
pub use rdfstore_api::term;
pub use rdfstore_api::triple;

pub use rdfstore_inmem as inmem;
pub use rdfstore_inmem::MemoryStore;

pub mod dataset;
pub mod graph;

pub use dataset::Dataset;
pub use graph::Graph;

pub mod prelude {
    //! General-use types and traits.
    pub use crate::dataset::Dataset;
    pub use crate::graph::Graph;
    pub use rdfstore_api::prelude::*;
    pub use rdfstore_inmem::MemoryStore;
}
