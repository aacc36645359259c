//! Contains helper functions and macros for testing Store implementations

use crate::quad::Quad;
use crate::store::*;
use crate::term::pattern::TriplePattern;
use crate::term::{Context, Iri, Term};
use crate::triple::Triple;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref MICHEL: Term = iri("michel");
    pub static ref TAREK: Term = iri("tarek");
    pub static ref BOB: Term = iri("bob");
    pub static ref LIKES: Term = iri("likes");
    pub static ref HATES: Term = iri("hates");
    pub static ref PIZZA: Term = iri("pizza");
    pub static ref CHEESE: Term = iri("cheese");
    pub static ref CTX1: Context = iri("http://example.org/ctx1");
    pub static ref CTX2: Context = iri("http://example.org/ctx2");
}

pub fn iri(txt: &str) -> Term {
    Iri::new_unchecked(txt).into()
}

/// Seven triples about who likes or hates what.
pub fn some_triples() -> Vec<Triple> {
    vec![
        [TAREK.clone(), LIKES.clone(), PIZZA.clone()],
        [TAREK.clone(), LIKES.clone(), CHEESE.clone()],
        [MICHEL.clone(), LIKES.clone(), PIZZA.clone()],
        [MICHEL.clone(), LIKES.clone(), CHEESE.clone()],
        [BOB.clone(), LIKES.clone(), CHEESE.clone()],
        [BOB.clone(), HATES.clone(), PIZZA.clone()],
        [BOB.clone(), HATES.clone(), MICHEL.clone()],
    ]
}

pub fn some_quads(ctx: &Context) -> Vec<Quad> {
    some_triples()
        .into_iter()
        .map(|t| (t, ctx.clone()))
        .collect()
}

pub fn add_stuff<S: Store>(store: &S, ctx: &Context) -> StoreResult<()> {
    for q in some_quads(ctx) {
        store.add(q)?;
    }
    store.commit()
}

pub fn remove_stuff<S: Store>(store: &S, ctx: &Context) -> StoreResult<()> {
    for t in some_triples() {
        store.remove(&TriplePattern::from(&t), Some(ctx))?;
    }
    Ok(())
}

/// Generate a test suite for an implementation of [`Store`].
///
/// This macro is only available when the feature `test_macro` is enabled.
///
/// It accepts the following parameters:
/// * `module_name`: the name of the module to generate (defaults to `test`);
/// * `store_factory`: a function (or closure) with no argument, returning a fresh, usable store.
///
/// Each generated module uses its own locators for lifecycle tests,
/// derived from its module path.
#[macro_export]
macro_rules! test_store_impl {
    ($store_factory: expr) => {
        $crate::test_store_impl!(test, $store_factory);
    };
    ($module_name: ident, $store_factory: expr) => {
        #[cfg(test)]
        mod $module_name {
            use $crate::store::test::*;
            use $crate::store::*;
            use $crate::term::pattern::{Any, TriplePattern};
            use $crate::term::{Iri, Literal, Term};

            #[allow(unused_imports)]
            use super::*;

            fn locator(name: &str) -> String {
                format!("memory://{}::{}", module_path!(), name)
            }

            fn count<S: Store>(
                store: &S,
                s: impl Into<$crate::term::pattern::TermPattern>,
                p: impl Into<$crate::term::pattern::TermPattern>,
                o: impl Into<$crate::term::pattern::TermPattern>,
            ) -> usize {
                store
                    .triples(&TriplePattern::new(s, p, o), Some(&CTX1))
                    .unwrap()
                    .count()
            }

            #[test]
            fn test_add() -> Result<(), Box<dyn std::error::Error>> {
                let store = $store_factory();
                add_stuff(&store, &CTX1)?;
                assert_eq!(store.len(Some(&CTX1))?, 7);
                assert_eq!(store.len(None)?, 7);
                Ok(())
            }

            #[test]
            fn test_add_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
                let store = $store_factory();
                let q = (
                    [iri("http://example.org#add"), iri("http://example.org/blah"), iri("http://example.org/cra")],
                    CTX1.clone(),
                );
                assert!(store.add(q.clone())?);
                assert!(!store.add(q.clone())?);
                assert_eq!(store.len(None)?, 1);
                Ok(())
            }

            #[test]
            fn test_add_n_absorbs_duplicates() -> Result<(), Box<dyn std::error::Error>> {
                let store = $store_factory();
                let q = (
                    [iri("http://example.org#addn"), iri("http://example.org/blah"), iri("http://example.org/cra")],
                    CTX1.clone(),
                );
                assert_eq!(store.add_n(vec![q.clone(), q.clone()])?, 1);
                assert_eq!(store.len(None)?, 1);
                assert_eq!(store.add_n(vec![q])?, 0);
                assert_eq!(store.len(None)?, 1);
                Ok(())
            }

            #[test]
            fn test_add_n_is_all_or_nothing() -> Result<(), Box<dyn std::error::Error>> {
                let store = $store_factory();
                let good = ([TAREK.clone(), LIKES.clone(), PIZZA.clone()], CTX1.clone());
                let bad = ([TAREK.clone(), Term::from("likes"), PIZZA.clone()], CTX1.clone());
                assert!(matches!(
                    store.add_n(vec![good, bad]),
                    Err(StoreError::InvalidQuad(_))
                ));
                assert_eq!(store.len(None)?, 0);
                Ok(())
            }

            #[test]
            fn test_invalid_quads() {
                let store = $store_factory();
                let literal_predicate = ([TAREK.clone(), Term::from("likes"), PIZZA.clone()], CTX1.clone());
                assert!(matches!(store.add(literal_predicate), Err(StoreError::InvalidQuad(_))));
                let literal_context = ([TAREK.clone(), LIKES.clone(), PIZZA.clone()], Term::from("ctx"));
                assert!(matches!(store.add(literal_context), Err(StoreError::InvalidQuad(_))));
            }

            #[test]
            fn test_remove() -> Result<(), Box<dyn std::error::Error>> {
                let store = $store_factory();
                add_stuff(&store, &CTX1)?;
                remove_stuff(&store, &CTX1)?;
                assert_eq!(store.triples(&TriplePattern::any(), None)?.count(), 0);
                // removing again is a no-op
                remove_stuff(&store, &CTX1)?;
                assert_eq!(store.remove(&TriplePattern::any(), None)?, 0);
                Ok(())
            }

            #[test]
            fn test_remove_pattern() -> Result<(), Box<dyn std::error::Error>> {
                let store = $store_factory();
                add_stuff(&store, &CTX1)?;
                add_stuff(&store, &CTX2)?;
                assert_eq!(store.remove(&TriplePattern::new(Any, &*LIKES, Any), Some(&CTX1))?, 5);
                assert_eq!(store.len(Some(&CTX1))?, 2);
                assert_eq!(store.len(Some(&CTX2))?, 7);
                assert_eq!(store.remove(&TriplePattern::new(&*BOB, Any, Any), None)?, 5);
                assert_eq!(store.len(None)?, 4);
                Ok(())
            }

            #[test]
            fn test_triples() -> Result<(), Box<dyn std::error::Error>> {
                let store = $store_factory();
                add_stuff(&store, &CTX1)?;
                let (michel, tarek, bob) = (&*MICHEL, &*TAREK, &*BOB);
                let (likes, hates, pizza, cheese) = (&*LIKES, &*HATES, &*PIZZA, &*CHEESE);

                // unbound subjects
                assert_eq!(count(&store, Any, likes, pizza), 2);
                assert_eq!(count(&store, Any, hates, pizza), 1);
                assert_eq!(count(&store, Any, likes, cheese), 3);
                assert_eq!(count(&store, Any, hates, cheese), 0);

                // unbound objects
                assert_eq!(count(&store, michel, likes, Any), 2);
                assert_eq!(count(&store, tarek, likes, Any), 2);
                assert_eq!(count(&store, bob, hates, Any), 2);
                assert_eq!(count(&store, bob, likes, Any), 1);

                // unbound predicates
                assert_eq!(count(&store, michel, Any, cheese), 1);
                assert_eq!(count(&store, tarek, Any, cheese), 1);
                assert_eq!(count(&store, bob, Any, pizza), 1);
                assert_eq!(count(&store, bob, Any, michel), 1);

                // unbound subject, objects
                assert_eq!(count(&store, Any, hates, Any), 2);
                assert_eq!(count(&store, Any, likes, Any), 5);

                // unbound predicates, objects
                assert_eq!(count(&store, michel, Any, Any), 2);
                assert_eq!(count(&store, bob, Any, Any), 3);
                assert_eq!(count(&store, tarek, Any, Any), 2);

                // unbound subjects, predicates
                assert_eq!(count(&store, Any, Any, pizza), 3);
                assert_eq!(count(&store, Any, Any, cheese), 3);
                assert_eq!(count(&store, Any, Any, michel), 1);

                // all bound
                assert_eq!(count(&store, bob, hates, michel), 1);
                assert_eq!(count(&store, michel, hates, bob), 0);

                // all unbound
                assert_eq!(count(&store, Any, Any, Any), 7);
                remove_stuff(&store, &CTX1)?;
                assert_eq!(count(&store, Any, Any, Any), 0);
                Ok(())
            }

            #[test]
            fn test_unknown_terms_match_nothing() -> Result<(), Box<dyn std::error::Error>> {
                let store = $store_factory();
                add_stuff(&store, &CTX1)?;
                let unknown = iri("unknown");
                assert_eq!(count(&store, &unknown, Any, Any), 0);
                assert_eq!(count(&store, Any, Any, vec![unknown.clone()]), 0);
                assert_eq!(count(&store, Any, Any, Vec::<Term>::new()), 0);
                assert_eq!(store.triples(&TriplePattern::any(), Some(&CTX2))?.count(), 0);
                Ok(())
            }

            #[test]
            fn test_triples_choices() -> Result<(), Box<dyn std::error::Error>> {
                let store = $store_factory();
                add_stuff(&store, &CTX1)?;
                let pattern = TriplePattern::new(Any, &*LIKES, vec![PIZZA.clone(), CHEESE.clone()]);
                let mut got: Vec<_> = store.triples_choices(&pattern, None)?.collect();
                got.sort();
                let mut expected = vec![
                    [TAREK.clone(), LIKES.clone(), PIZZA.clone()],
                    [TAREK.clone(), LIKES.clone(), CHEESE.clone()],
                    [MICHEL.clone(), LIKES.clone(), PIZZA.clone()],
                    [MICHEL.clone(), LIKES.clone(), CHEESE.clone()],
                    [BOB.clone(), LIKES.clone(), CHEESE.clone()],
                ];
                expected.sort();
                assert_eq!(got, expected);

                let pattern = TriplePattern::new(vec![BOB.clone(), TAREK.clone()], vec![LIKES.clone(), HATES.clone()], Any);
                assert_eq!(store.triples_choices(&pattern, Some(&CTX1))?.count(), 5);
                Ok(())
            }

            #[test]
            fn test_contexts() -> Result<(), Box<dyn std::error::Error>> {
                let store = $store_factory();
                assert!(store.contexts(None)?.is_empty());
                add_stuff(&store, &CTX1)?;
                store.add(([BOB.clone(), LIKES.clone(), CHEESE.clone()], CTX2.clone()))?;

                let mut contexts = store.contexts(None)?;
                contexts.sort();
                assert_eq!(contexts, vec![CTX1.clone(), CTX2.clone()]);

                let t = [BOB.clone(), LIKES.clone(), CHEESE.clone()];
                assert_eq!(store.contexts(Some(&t))?.len(), 2);
                let t = [BOB.clone(), HATES.clone(), PIZZA.clone()];
                assert_eq!(store.contexts(Some(&t))?, vec![CTX1.clone()]);

                // a triple in two contexts is yielded once per context...
                let pattern = TriplePattern::new(&*BOB, &*LIKES, &*CHEESE);
                assert_eq!(store.triples(&pattern, None)?.count(), 2);
                // ... but once when the context is given
                assert_eq!(store.triples(&pattern, Some(&CTX2))?.count(), 1);

                // the context vanishes with its last quad
                store.remove(&TriplePattern::any(), Some(&CTX2))?;
                assert_eq!(store.contexts(None)?, vec![CTX1.clone()]);
                Ok(())
            }

            #[test]
            fn test_contains() -> Result<(), Box<dyn std::error::Error>> {
                let store = $store_factory();
                add_stuff(&store, &CTX1)?;
                let t = [BOB.clone(), HATES.clone(), MICHEL.clone()];
                assert!(store.contains(&(t.clone(), CTX1.clone()))?);
                assert!(!store.contains(&(t, CTX2.clone()))?);
                Ok(())
            }

            #[test]
            fn test_stable_order() -> Result<(), Box<dyn std::error::Error>> {
                let store = $store_factory();
                add_stuff(&store, &CTX1)?;
                add_stuff(&store, &CTX2)?;
                for pattern in [
                    TriplePattern::any(),
                    TriplePattern::new(Any, &*LIKES, Any),
                    TriplePattern::new(Any, Any, vec![PIZZA.clone(), MICHEL.clone()]),
                ] {
                    let v1: Vec<_> = store.quads(&pattern, None)?.collect();
                    let v2: Vec<_> = store.quads(&pattern, None)?.collect();
                    assert_eq!(v1, v2);
                }
                Ok(())
            }

            #[test]
            fn test_snapshot_iteration() -> Result<(), Box<dyn std::error::Error>> {
                let store = $store_factory();
                add_stuff(&store, &CTX1)?;
                let iter = store.triples(&TriplePattern::any(), Some(&CTX1))?;
                store.remove(&TriplePattern::any(), None)?;
                assert_eq!(iter.count(), 7);
                Ok(())
            }

            #[test]
            fn test_literals() -> Result<(), Box<dyn std::error::Error>> {
                let store = $store_factory();
                let says = iri("says");
                let hello: Term = Literal::lang("hello", "en")?.into();
                let konichiwa: Term = Literal::lang("こんにちは", "ja")?.into();
                let something: Term = Literal::simple("something").into();
                for o in [&hello, &konichiwa, &something] {
                    store.add(([BOB.clone(), says.clone(), o.clone()], CTX1.clone()))?;
                }
                store.commit()?;

                let objs: Vec<Term> = store
                    .triples(&TriplePattern::new(&*BOB, &says, Any), Some(&CTX1))?
                    .map(|[_, _, o]| o)
                    .collect();
                assert_eq!(objs.len(), 3);
                for o in objs {
                    let lit = o.literal().unwrap();
                    match lit.lexical_form() {
                        "hello" => assert_eq!(lit.language().unwrap(), "en"),
                        "こんにちは" => assert_eq!(lit.language().unwrap(), "ja"),
                        "something" => assert!(lit.language().is_none()),
                        other => panic!("unexpected literal {other}"),
                    }
                }

                // language tags are case-insensitive
                let hello_upper: Term = Literal::lang("hello", "EN")?.into();
                assert!(!store.add(([BOB.clone(), says.clone(), hello_upper.clone()], CTX1.clone()))?);
                assert_eq!(store.triples(&TriplePattern::new(Any, Any, &hello_upper), None)?.count(), 1);
                let typed: Term = Literal::typed("hello", Iri::new_unchecked("tag:dt")).into();
                assert_eq!(store.triples(&TriplePattern::new(Any, Any, &typed), None)?.count(), 0);
                Ok(())
            }

            #[test]
            fn test_rollback() -> Result<(), Box<dyn std::error::Error>> {
                let store = $store_factory();
                add_stuff(&store, &CTX1)?;
                store.remove(&TriplePattern::new(&*BOB, Any, Any), None)?;
                store.add(([iri("jeroen"), LIKES.clone(), iri("unconnected")], CTX2.clone()))?;
                assert_eq!(store.len(None)?, 5);
                store.rollback()?;
                assert_eq!(store.len(None)?, 7);
                assert_eq!(store.contexts(None)?, vec![CTX1.clone()]);
                // rollback after commit has nothing to undo
                store.rollback()?;
                assert_eq!(store.len(None)?, 7);
                Ok(())
            }

            #[test]
            fn test_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
                let loc = locator("lifecycle");
                let store = $store_factory();
                assert!(matches!(store.open(&loc, false), Err(StoreError::NotFound { .. })));
                store.open(&loc, true)?;
                add_stuff(&store, &CTX1)?;
                store.add(([iri("jeroen"), LIKES.clone(), iri("unconnected")], CTX1.clone()))?;
                store.close()?;

                // committed data survives, uncommitted data does not
                let other = $store_factory();
                other.open(&loc, false)?;
                assert_eq!(other.len(None)?, 7);
                other.destroy(&loc)?;
                other.close()?;
                assert!(matches!(other.open(&loc, false), Err(StoreError::NotFound { .. })));
                Ok(())
            }

            #[test]
            fn test_commit_visibility() -> Result<(), Box<dyn std::error::Error>> {
                let loc = locator("visibility");
                let writer = $store_factory();
                writer.open(&loc, true)?;
                writer.add(([TAREK.clone(), LIKES.clone(), PIZZA.clone()], CTX1.clone()))?;
                // read-your-writes
                assert_eq!(writer.len(None)?, 1);

                let early = $store_factory();
                early.open(&loc, false)?;
                assert_eq!(early.len(None)?, 0);
                assert!(matches!(early.destroy(&loc), Err(StoreError::Busy { .. })));
                early.close()?;

                writer.commit()?;
                let late = $store_factory();
                late.open(&loc, false)?;
                assert_eq!(late.len(None)?, 1);
                late.close()?;
                writer.destroy(&loc)?;
                Ok(())
            }
        }
    };
}
