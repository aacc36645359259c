//! Standard namespaces.
//!
//! Each module provides the namespace IRI as `NS`,
//! and one function per term of the vocabulary, returning the corresponding [`Iri`].
//!
//! # Example use
//! ```
//! use rdfstore_api::ns::{rdf, xsd};
//! use rdfstore_api::term::Literal;
//!
//! assert_eq!(rdf::type_().as_str(), "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
//! let answer = Literal::typed("42", xsd::integer());
//! ```
//!
//! NB: since `type` is a reserved keyword in Rust,
//! the term `rdf:type` spells `rdf::type_` (with a trailing underscore).

#[cfg(doc)]
use crate::term::Iri;

/// Create a module-level namespace: an `NS` constant and one function per term.
///
/// Terms whose name is a Rust keyword can be given an explicit suffix
/// with the syntax `rust_name = "suffix"`.
#[macro_export]
macro_rules! namespace {
    ($iri_prefix:expr, $($suffix:ident),* ; $($r_id:ident = $r_sf:expr),*) => {
        /// The IRI of this namespace.
        pub const NS: &str = $iri_prefix;
        $(
            #[allow(non_snake_case)]
            pub fn $suffix() -> $crate::term::Iri {
                $crate::term::Iri::new_unchecked(concat!($iri_prefix, stringify!($suffix)))
            }
        )*
        $(
            #[allow(non_snake_case)]
            pub fn $r_id() -> $crate::term::Iri {
                $crate::term::Iri::new_unchecked(concat!($iri_prefix, $r_sf))
            }
        )*
    };
    ($iri_prefix:expr, $($suffix:ident),*) => {
        $crate::namespace!($iri_prefix, $($suffix),*;);
    };
}

/// The standard `rdf:` namespace.
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // classes
        Alt,
        Bag,
        List,
        Property,
        Seq,
        Statement,
        // datatypes
        langString,
        XMLLiteral,
        // properties
        first,
        object,
        predicate,
        rest,
        subject,
        value,
        // individuals
        nil;
        type_ = "type"
    );
}

/// The standard `rdfs:` namespace.
pub mod rdfs {
    namespace!(
        "http://www.w3.org/2000/01/rdf-schema#",
        // types
        Class,
        Container,
        Datatype,
        Literal,
        Resource,
        // properties
        comment,
        domain,
        isDefinedBy,
        label,
        member,
        range,
        seeAlso,
        subClassOf,
        subPropertyOf
    );
}

/// The standard `xsd:` namespace.
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        anyURI,
        boolean,
        date,
        dateTime,
        decimal,
        double,
        float,
        int,
        integer,
        long,
        string,
        time
    );
}

/// The standard `xml:` namespace.
///
/// NB: this namespace IRI does not end with a separator,
/// so it only provides `NS`.
pub mod xml {
    /// The IRI of this namespace.
    pub const NS: &str = "http://www.w3.org/XML/1998/namespace";
}
