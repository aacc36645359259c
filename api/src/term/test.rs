use super::*;
use crate::ns::xsd;

#[test]
fn kinds() -> Result<(), Box<dyn std::error::Error>> {
    let iri: Term = Iri::new("http://example.org/")?.into();
    let bnode: Term = BnodeId::new("b1")?.into();
    let lit: Term = Literal::lang("hello", "en")?.into();

    assert_eq!(iri.kind(), TermKind::Iri);
    assert!(iri.is_iri() && !iri.is_blank_node() && !iri.is_literal());
    assert_eq!(bnode.kind(), TermKind::BlankNode);
    assert!(bnode.is_blank_node());
    assert_eq!(lit.kind(), TermKind::Literal);
    assert!(lit.is_literal());

    assert_eq!(iri.value(), "http://example.org/");
    assert_eq!(bnode.value(), "b1");
    assert_eq!(lit.value(), "hello");

    assert!(iri.iri().is_some() && iri.literal().is_none());
    assert!(bnode.bnode_id().is_some() && bnode.iri().is_none());
    Ok(())
}

#[test]
fn structural_equality() -> Result<(), Box<dyn std::error::Error>> {
    let a: Term = Iri::new("tag:a")?.into();
    assert_eq!(a, Term::from(Iri::new("tag:a")?));
    assert_eq!(a, Iri::new("tag:a")?);
    assert_ne!(a, Term::from(BnodeId::new("a")?));
    assert_ne!(Term::from("tag:a"), a);
    assert_eq!(Term::from("hello"), Literal::simple("hello"));
    Ok(())
}

#[test]
fn display() -> Result<(), Box<dyn std::error::Error>> {
    let cases: Vec<(Term, &str)> = vec![
        (Iri::new("tag:a")?.into(), "<tag:a>"),
        (BnodeId::new("b1")?.into(), "_:b1"),
        (Literal::simple("a \"quoted\"\nline").into(), r#""a \"quoted\"\nline""#),
        (Literal::lang("chat", "fr")?.into(), r#""chat"@fr"#),
        (
            Literal::typed("42", xsd::integer()).into(),
            r#""42"^^<http://www.w3.org/2001/XMLSchema#integer>"#,
        ),
    ];
    for (term, expected) in cases {
        assert_eq!(term.to_string(), expected);
    }
    Ok(())
}

#[test]
fn ordering_is_total_and_consistent() -> Result<(), Box<dyn std::error::Error>> {
    let mut terms: Vec<Term> = vec![
        Literal::simple("b").into(),
        Iri::new("tag:b")?.into(),
        BnodeId::new("x")?.into(),
        Literal::lang("b", "EN")?.into(),
        Iri::new("tag:a")?.into(),
        Literal::lang("b", "en")?.into(),
    ];
    terms.sort();
    terms.dedup();
    assert_eq!(terms.len(), 5);
    assert!(terms[0].is_iri() && terms[1].is_iri());
    assert!(terms[2].is_blank_node());
    assert!(terms[3..].iter().all(Term::is_literal));
    Ok(())
}
