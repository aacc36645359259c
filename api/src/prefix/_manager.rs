// this module is transparently re-exported by its parent `prefix`
use super::{is_valid_prefix, split_iri, InvalidPrefix};
use crate::ns::{rdf, rdfs, xml, xsd};
use crate::term::Iri;
use std::collections::HashMap;

/// A bidirectional mapping between prefixes and namespace IRIs.
///
/// * A prefix is bound to at most one namespace.
/// * A namespace may be bound to several prefixes,
///   but exactly one of them (its *canonical* prefix) is used to build QNames.
/// * Bindings are kept in the order in which they were made;
///   rebinding a prefix keeps its position.
#[derive(Clone, Debug, Default)]
pub struct NamespaceManager {
    bindings: Vec<(String, Iri)>,
    canonical: HashMap<Iri, String>,
}

impl NamespaceManager {
    /// Build an empty namespace manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a namespace manager where the `xml`, `rdf`, `rdfs` and `xsd` prefixes are bound.
    pub fn with_defaults() -> Self {
        let mut nm = Self::new();
        for (prefix, ns) in [
            ("xml", xml::NS),
            ("rdf", rdf::NS),
            ("rdfs", rdfs::NS),
            ("xsd", xsd::NS),
        ] {
            nm.bindings.push((prefix.into(), Iri::new_unchecked(ns)));
            nm.canonical.insert(Iri::new_unchecked(ns), prefix.into());
        }
        nm
    }

    /// Bind `prefix` to `namespace`.
    ///
    /// * If `prefix` is already bound to `namespace`, nothing happens.
    /// * If `prefix` is bound to another namespace and `replace` is true,
    ///   it is rebound to `namespace`, and the other namespace loses that prefix.
    /// * If `prefix` is bound to another namespace and `replace` is false,
    ///   the existing binding is kept, and `namespace` receives an alternate prefix
    ///   (`prefix` followed by a number) unless it already has one.
    /// * If `prefix` is not bound, the binding is recorded.
    ///   It becomes the canonical prefix of `namespace`
    ///   if `replace` is true or if `namespace` had no prefix yet.
    pub fn bind(&mut self, prefix: &str, namespace: Iri, replace: bool) -> Result<(), InvalidPrefix> {
        if !is_valid_prefix(prefix) {
            return Err(InvalidPrefix(prefix.to_string()));
        }
        match self.position(prefix) {
            Some(i) if self.bindings[i].1 == namespace => {}
            Some(i) if replace => {
                log::debug!("rebinding prefix '{prefix}' to {namespace}");
                let old = std::mem::replace(&mut self.bindings[i].1, namespace.clone());
                if self.canonical.get(&old).map(String::as_str) == Some(prefix) {
                    self.elect_canonical(&old);
                }
                self.canonical.insert(namespace, prefix.to_string());
            }
            Some(_) => {
                if !self.canonical.contains_key(&namespace) {
                    let alternate = self.fresh_prefix(prefix);
                    log::debug!("prefix '{prefix}' is taken, binding {namespace} to '{alternate}'");
                    self.push(alternate, namespace);
                }
            }
            None => {
                if replace || !self.canonical.contains_key(&namespace) {
                    self.push(prefix.to_string(), namespace);
                } else {
                    self.bindings.push((prefix.to_string(), namespace));
                }
            }
        }
        Ok(())
    }

    /// The namespace bound to `prefix`, if any.
    pub fn namespace(&self, prefix: &str) -> Option<&Iri> {
        self.position(prefix).map(|i| &self.bindings[i].1)
    }

    /// The canonical prefix of `namespace`, if any.
    pub fn prefix(&self, namespace: &str) -> Option<&str> {
        self.canonical.get(namespace).map(String::as_str)
    }

    /// All `(prefix, namespace)` bindings, in binding order.
    ///
    /// The returned iterator can be cloned to restart the enumeration.
    pub fn namespaces(&self) -> impl Iterator<Item = (&str, &Iri)> + Clone + '_ {
        self.bindings.iter().map(|(p, ns)| (p.as_str(), ns))
    }

    /// Split `iri` into its canonical prefix, its namespace and its local name.
    ///
    /// If the namespace has no prefix, a new one (`ns1`, `ns2`...) is generated and bound.
    /// Return `None` if `iri` can not be split into a namespace and a valid local name.
    pub fn compute_qname(&mut self, iri: &str) -> Option<(String, Iri, String)> {
        let (ns, local) = split_iri(iri)?;
        let prefix = match self.canonical.get(ns) {
            Some(prefix) => prefix.clone(),
            None => {
                let prefix = self.fresh_prefix("ns");
                log::debug!("generated prefix '{prefix}' for {ns}");
                self.push(prefix.clone(), Iri::new_unchecked(ns));
                prefix
            }
        };
        Some((prefix, Iri::new_unchecked(ns), local.to_string()))
    }

    /// Abbreviate `iri` into a QName: `prefix:local`,
    /// or `local` alone if the namespace is bound to the empty prefix.
    ///
    /// If `iri` can not be split, it is returned unchanged.
    pub fn qname(&mut self, iri: &str) -> String {
        match self.compute_qname(iri) {
            Some((prefix, _, local)) if prefix.is_empty() => local,
            Some((prefix, _, local)) => format!("{prefix}:{local}"),
            None => iri.to_string(),
        }
    }

    /// Expand a QName into a full IRI, if its prefix is bound.
    ///
    /// A QName without a colon is interpreted with the empty prefix.
    pub fn expand(&self, qname: &str) -> Option<Iri> {
        let (prefix, local) = qname.split_once(':').unwrap_or(("", qname));
        self.namespace(prefix)
            .map(|ns| Iri::new_unchecked(format!("{}{local}", ns.as_str())))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn position(&self, prefix: &str) -> Option<usize> {
        self.bindings.iter().position(|(p, _)| p == prefix)
    }

    /// Record a new binding, and make it canonical for its namespace.
    fn push(&mut self, prefix: String, namespace: Iri) {
        self.canonical.insert(namespace.clone(), prefix.clone());
        self.bindings.push((prefix, namespace));
    }

    /// After `namespace` lost its canonical prefix,
    /// make its most recently bound remaining prefix canonical (if any).
    fn elect_canonical(&mut self, namespace: &Iri) {
        match self.bindings.iter().rev().find(|(_, ns)| ns == namespace) {
            Some((p, _)) => {
                self.canonical.insert(namespace.clone(), p.clone());
            }
            None => {
                self.canonical.remove(namespace);
            }
        }
    }

    /// The first unbound prefix among `{base}1`, `{base}2`...
    fn fresh_prefix(&self, base: &str) -> String {
        let base = if base.is_empty() { "ns" } else { base };
        (1..)
            .map(|n| format!("{base}{n}"))
            .find(|p| self.position(p).is_none())
            .unwrap_or_default()
    }
}
