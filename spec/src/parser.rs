//! Turtle, N-Triples and JSON-LD loading into a [`MemoryStore`].
//!
//! Parsing is delegated to `sophia_turtle` and `sophia_jsonld`; each parsed
//! statement is converted into the owned [`Triple`] model. JSON-LD graph names
//! are dropped. Remote contexts are not fetched, so a JSON-LD document must
//! carry its `@context` inline. Blank node labels are kept as written, so
//! they are only meaningful within one loaded document.

use std::path::Path;

use sophia_api::parser::QuadParser;
use sophia_api::quad::Quad as _;
use sophia_api::source::{QuadSource, TripleSource};
use sophia_api::term::TermKind;
use sophia_api::triple::Triple as _;
use sophia_jsonld::JsonLdParser;
use sophia_turtle::parser::{nt, turtle};

use crate::error::{Error, Result};
use crate::model::{Literal, Term, Triple};
use crate::store::MemoryStore;

/// Serialized input formats accepted by [`load_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Terse RDF Triple Language (`.ttl`).
    Turtle,
    /// N-Triples (`.nt`).
    NTriples,
    /// JSON-LD (`.jsonld`, `.json`).
    JsonLd,
}

impl Format {
    /// Guesses the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "ttl" | "turtle" => Some(Format::Turtle),
            "nt" | "ntriples" => Some(Format::NTriples),
            "jsonld" | "json" => Some(Format::JsonLd),
            _ => None,
        }
    }

    /// Lowercase format name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Format::Turtle => "turtle",
            Format::NTriples => "ntriples",
            Format::JsonLd => "jsonld",
        }
    }
}

/// Parses `source` in the given format.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the document is not valid in `format`, or
/// contains a term the model cannot represent.
pub fn load_str(source: &str, format: Format) -> Result<MemoryStore> {
    match format {
        Format::Turtle => parse_turtle(source),
        Format::NTriples => parse_ntriples(source),
        Format::JsonLd => parse_jsonld(source),
    }
}

/// Parses a Turtle document.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the document is not valid Turtle.
pub fn parse_turtle(source: &str) -> Result<MemoryStore> {
    collect(turtle::parse_str(source), Format::Turtle)
}

/// Parses an N-Triples document.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the document is not valid N-Triples.
pub fn parse_ntriples(source: &str) -> Result<MemoryStore> {
    collect(nt::parse_str(source), Format::NTriples)
}

/// Parses a JSON-LD document, merging every named graph into one store.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the document is not valid JSON-LD or refers
/// to a remote context.
pub fn parse_jsonld(source: &str) -> Result<MemoryStore> {
    let mut quads = JsonLdParser::new().parse_str(source);
    let mut collector = Collector::default();
    quads
        .for_each_quad(|q| collector.add(q.s(), q.p(), q.o()))
        .map_err(|e| syntax_error(Format::JsonLd, e))?;
    collector.finish(Format::JsonLd)
}

fn collect<S>(mut triples: S, format: Format) -> Result<MemoryStore>
where
    S: TripleSource,
{
    let mut collector = Collector::default();
    triples
        .for_each_triple(|t| collector.add(t.s(), t.p(), t.o()))
        .map_err(|e| syntax_error(format, e))?;
    collector.finish(format)
}

fn syntax_error(format: Format, error: impl std::fmt::Display) -> Error {
    Error::Parse {
        format: format.name(),
        message: error.to_string(),
    }
}

/// Accumulates converted statements; stops at the first unrepresentable one.
#[derive(Default)]
struct Collector {
    store: MemoryStore,
    conversion: Option<String>,
}

impl Collector {
    fn add<T: sophia_api::term::Term>(&mut self, s: T, p: T, o: T) {
        if self.conversion.is_some() {
            return;
        }
        match convert(s, p, o) {
            Ok(triple) => {
                self.store.insert(triple);
            }
            Err(message) => self.conversion = Some(message),
        }
    }

    fn finish(self, format: Format) -> Result<MemoryStore> {
        match self.conversion {
            Some(message) => Err(syntax_error(format, message)),
            None => Ok(self.store),
        }
    }
}

fn convert<T: sophia_api::term::Term>(
    s: T,
    p: T,
    o: T,
) -> std::result::Result<Triple, String> {
    let predicate = match p.iri() {
        Some(iri) => iri.as_str().to_owned(),
        None => return Err("predicate is not an IRI".to_owned()),
    };
    Ok(Triple::new(term(s)?, predicate, term(o)?))
}

fn term<T: sophia_api::term::Term>(t: T) -> std::result::Result<Term, String> {
    match t.kind() {
        TermKind::Iri => t
            .iri()
            .map(|iri| Term::iri(iri.as_str()))
            .ok_or_else(|| "IRI term without IRI".to_owned()),
        TermKind::BlankNode => t
            .bnode_id()
            .map(|id| Term::blank(id.as_str()))
            .ok_or_else(|| "blank node without label".to_owned()),
        TermKind::Literal => {
            let value = t
                .lexical_form()
                .map(|lex| String::from(&*lex))
                .ok_or_else(|| "literal without lexical form".to_owned())?;
            let literal = match t.language_tag() {
                Some(tag) => Literal::lang(value, tag.as_str()),
                None => match t.datatype() {
                    Some(dt) if !is_plain_string(dt.as_str()) => Literal::typed(value, dt.as_str()),
                    _ => Literal::plain(value),
                },
            };
            Ok(Term::Literal(literal))
        }
        other => Err(format!("unsupported term kind {other:?}")),
    }
}

fn is_plain_string(datatype: &str) -> bool {
    datatype == "http://www.w3.org/2001/XMLSchema#string"
        || datatype == "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::iris;
    use crate::namespaces::NamespaceTable;
    use crate::node::Node;
    use crate::store::Graph;
    use crate::taxonomy::Taxonomy;

    const BUILDINGS: &str = r#"
        @prefix pot: <https://standards.oftrust.net/ontologies/pot.jsonld#> .
        @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

        pot:Building a pot:Class ; rdfs:label "Building"@en .
        pot:House a pot:Class ; rdfs:subClassOf pot:Building .
        pot:floorCount rdfs:domain pot:Building ;
            rdfs:range xsd:integer ;
            xsd:minInclusive "0"^^xsd:integer .
        pot:roofType rdfs:domain pot:House ;
            rdfs:comment [ pot:scope pot:House ; rdf:value "shape of roof"@en ] .
    "#;

    #[test]
    fn turtle_loads_into_store() {
        let store = parse_turtle(BUILDINGS).unwrap();
        let tax = Taxonomy::new(&store, NamespaceTable::default());
        let house = tax.class(&format!("{}House", iris::POT));

        assert_eq!(house.canonical_id().unwrap(), "pot:Building/House");
        let props: Vec<_> = house.properties().iter().map(|p| p.compact_id()).collect();
        assert_eq!(props, vec!["pot:floorCount", "pot:roofType"]);

        let roof = tax.property(&format!("{}roofType", iris::POT));
        assert_eq!(
            roof.comments(Some(&house)).get("en").map(String::as_str),
            Some("shape of roof")
        );
    }

    #[test]
    fn literal_language_and_datatype_survive() {
        let store = parse_turtle(BUILDINGS).unwrap();
        let building = Term::iri(format!("{}Building", iris::POT));
        let label = store.objects(&building, iris::RDFS_LABEL);
        assert_eq!(label, vec![&Term::lang_literal("Building", "en")]);

        let count = Term::iri(format!("{}floorCount", iris::POT));
        let facet = store.objects(&count, &format!("{}minInclusive", iris::XSD));
        assert_eq!(facet.len(), 1);
        assert_eq!(
            facet[0].as_literal().and_then(|l| l.datatype.as_deref()),
            Some("http://www.w3.org/2001/XMLSchema#integer")
        );
    }

    #[test]
    fn ntriples_loads_into_store() {
        let source = "<https://example.org/a#X> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2000/01/rdf-schema#Class> .\n";
        let store = load_str(source, Format::NTriples).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn jsonld_loads_into_store() {
        let source = r#"{
            "@context": {
                "pot": "https://standards.oftrust.net/ontologies/pot.jsonld#",
                "rdfs": "http://www.w3.org/2000/01/rdf-schema#"
            },
            "@graph": [
                {
                    "@id": "pot:Building",
                    "@type": "pot:Class",
                    "rdfs:label": { "@value": "Building", "@language": "en" }
                },
                {
                    "@id": "pot:House",
                    "@type": "pot:Class",
                    "rdfs:subClassOf": { "@id": "pot:Building" }
                }
            ]
        }"#;
        let store = load_str(source, Format::JsonLd).unwrap();
        assert_eq!(store.len(), 4);
        let tax = Taxonomy::new(&store, NamespaceTable::default());
        let house = tax.class(&format!("{}House", iris::POT));
        assert_eq!(house.canonical_id().unwrap(), "pot:Building/House");

        let building = Term::iri(format!("{}Building", iris::POT));
        assert_eq!(
            store.objects(&building, iris::RDFS_LABEL),
            vec![&Term::lang_literal("Building", "en")]
        );
    }

    #[test]
    fn invalid_jsonld_is_a_parse_error() {
        assert!(matches!(
            parse_jsonld("{ not json"),
            Err(Error::Parse { format: "jsonld", .. })
        ));
    }

    #[test]
    fn invalid_turtle_is_a_parse_error() {
        assert!(matches!(
            parse_turtle("this is not turtle"),
            Err(Error::Parse { format: "turtle", .. })
        ));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(Format::from_path(Path::new("pot.ttl")), Some(Format::Turtle));
        assert_eq!(Format::from_path(Path::new("pot.nt")), Some(Format::NTriples));
        assert_eq!(Format::from_path(Path::new("pot.jsonld")), Some(Format::JsonLd));
        assert_eq!(Format::from_path(Path::new("pot.owl")), None);
    }
}
