//! Document building over a small building taxonomy.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde_json::{json, Value};

use pot_codegen::{build, generate, DocumentKind, DocumentSet};
use pot_ontology::{iris, MemoryStore, Settings, Taxonomy, Term, Triple};

fn pot(local: &str) -> Term {
    Term::iri(format!("{}{local}", iris::POT))
}

fn taxonomy_store() -> MemoryStore {
    let class = |local: &str| Triple::new(pot(local), iris::RDF_TYPE, Term::iri(iris::POT_CLASS));
    let mut store = MemoryStore::new();
    store.extend([
        class("Building"),
        class("House"),
        class("Car"),
        Triple::new(pot("House"), iris::RDFS_SUBCLASS_OF, pot("Building")),
        Triple::new(pot("Building"), iris::RDFS_LABEL, Term::lang_literal("Building", "en")),
        Triple::new(pot("floorCount"), iris::RDF_TYPE, Term::iri(format!("{}DatatypeProperty", iris::OWL))),
        Triple::new(pot("floorCount"), iris::RDFS_DOMAIN, pot("Building")),
        Triple::new(pot("floorCount"), iris::RDFS_RANGE, Term::iri(format!("{}integer", iris::XSD))),
        Triple::new(pot("owner"), iris::RDFS_DOMAIN, pot("House")),
        Triple::new(pot("owner"), iris::RDFS_RANGE, pot("Car")),
        Triple::new(pot("owner"), iris::POT_CONTEXT_NAME, Term::literal("houseOwner")),
        Triple::new(pot("roofType"), iris::RDFS_DOMAIN, pot("House")),
        Triple::new(pot("roofType"), iris::RDFS_DOMAIN, pot("Car")),
        Triple::new(pot("roofType"), iris::RDFS_COMMENT, Term::blank("c1")),
        Triple::new(Term::blank("c1"), iris::POT_SCOPE, pot("House")),
        Triple::new(Term::blank("c1"), iris::RDF_VALUE, Term::lang_literal("shape of roof", "en")),
        Triple::new(pot("roofType"), iris::RDFS_COMMENT, Term::blank("c2")),
        Triple::new(Term::blank("c2"), iris::POT_SCOPE, pot("Car")),
        Triple::new(Term::blank("c2"), iris::RDF_VALUE, Term::lang_literal("unused", "en")),
    ]);
    store
}

fn document<'a>(set: &'a DocumentSet, path: &str) -> &'a Value {
    &set
        .documents
        .iter()
        .find(|d| d.path == PathBuf::from(path))
        .unwrap_or_else(|| panic!("missing {path}"))
        .body
}

fn paths(set: &DocumentSet) -> BTreeSet<String> {
    set.documents
        .iter()
        .map(|d| d.path.to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn layout_follows_lineage() {
    let store = taxonomy_store();
    let settings = Settings::default();
    let taxonomy = Taxonomy::new(&store, settings.namespace_table());
    let set = build(&taxonomy, &settings);

    let expected: BTreeSet<String> = [
        "Vocabulary/index.jsonld",
        "Vocabulary/Building.jsonld",
        "Vocabulary/Building/index.jsonld",
        "Vocabulary/Building/House.jsonld",
        "Vocabulary/Car.jsonld",
        "Context/Building.jsonld",
        "Context/Building/House.jsonld",
        "Context/Car.jsonld",
        "ClassDefinitions/Building.jsonld",
        "ClassDefinitions/Building/House.jsonld",
        "ClassDefinitions/Car.jsonld",
        "Ontology/Building.jsonld",
        "Ontology/Building/House.jsonld",
        "Ontology/Car.jsonld",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect();
    assert_eq!(paths(&set), expected);
    assert!(set.failures.is_empty());
}

#[test]
fn vocabulary_lists_descendants_and_scoped_attributes() {
    let store = taxonomy_store();
    let settings = Settings::default();
    let taxonomy = Taxonomy::new(&store, settings.namespace_table());
    let set = build(&taxonomy, &settings);

    let building = document(&set, "Vocabulary/Building.jsonld");
    assert_eq!(building["@id"], "https://standards.oftrust.net/v1/Vocabulary/Building");
    assert_eq!(building["@type"], "pot:Vocabulary");
    let classes: Vec<&str> = building["pot:supportedClass"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["@id"].as_str().unwrap())
        .collect();
    assert_eq!(classes, vec!["pot:Building", "pot:House"]);
    assert_eq!(
        building["pot:supportedClass"][0]["rdfs:label"],
        json!([{ "@language": "en", "@value": "Building" }])
    );
    assert_eq!(building["pot:supportedClass"][1]["rdfs:subClassOf"], "pot:Building");

    let house = document(&set, "Vocabulary/Building/House.jsonld");
    let attributes = house["pot:supportedAttribute"].as_array().unwrap();
    let ids: Vec<&str> = attributes.iter().map(|a| a["@id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["pot:floorCount", "pot:owner", "pot:roofType"]);
    assert_eq!(attributes[0]["@type"], "owl:DatatypeProperty");
    assert_eq!(attributes[0]["range"], json!(["xsd:integer"]));
    assert_eq!(
        attributes[2]["rdfs:comment"],
        json!([{ "@language": "en", "@value": "shape of roof" }])
    );
}

#[test]
fn identity_nests_attributes_and_marks_object_ranges() {
    let store = taxonomy_store();
    let settings = Settings::default();
    let taxonomy = Taxonomy::new(&store, settings.namespace_table());
    let set = build(&taxonomy, &settings);

    let ctx = &document(&set, "Context/Building/House.jsonld")["@context"];
    assert_eq!(ctx["floorCount"], json!({ "@id": "pot:floorCount", "@nest": "data" }));
    assert_eq!(
        ctx["houseOwner"],
        json!({ "@id": "pot:owner", "@nest": "data", "@type": "@id" })
    );
    assert_eq!(ctx["data"], "dli:data");
    assert_eq!(ctx["@version"], json!(1.1));
}

#[test]
fn flat_classes_map_keys_directly() {
    let store = taxonomy_store();
    let settings = Settings::from_toml_str(r#"flat_definition_classes = ["pot:House"]"#).unwrap();
    let taxonomy = Taxonomy::new(&store, settings.namespace_table());
    let set = build(&taxonomy, &settings);

    let ctx = &document(&set, "Context/Building/House.jsonld")["@context"];
    assert_eq!(ctx["floorCount"], "pot:floorCount");
    assert_eq!(ctx["houseOwner"], "pot:owner");
}

#[test]
fn excluded_classes_keep_only_vocabulary() {
    let store = taxonomy_store();
    let settings = Settings::from_toml_str(r#"excluded_classes = ["pot:Building/House"]"#).unwrap();
    let taxonomy = Taxonomy::new(&store, settings.namespace_table());
    let set = build(&taxonomy, &settings);

    let all = paths(&set);
    assert!(all.contains("Vocabulary/Building/House.jsonld"));
    assert!(!all.contains("Context/Building/House.jsonld"));
    assert!(!all.contains("ClassDefinitions/Building/House.jsonld"));
    assert_eq!(set.count(DocumentKind::Identity), 2);
}

#[test]
fn indexes_group_children_by_lineage() {
    let store = taxonomy_store();
    let settings = Settings::default();
    let taxonomy = Taxonomy::new(&store, settings.namespace_table());
    let set = build(&taxonomy, &settings);

    let root = document(&set, "Vocabulary/index.jsonld");
    assert_eq!(
        root["pot:member"],
        json!([
            { "@id": "pot:Building", "url": "https://standards.oftrust.net/v1/Vocabulary/Building" },
            { "@id": "pot:Car", "url": "https://standards.oftrust.net/v1/Vocabulary/Car" }
        ])
    );
    let building = document(&set, "Vocabulary/Building/index.jsonld");
    assert_eq!(
        building["pot:member"],
        json!([{
            "@id": "pot:House",
            "url": "https://standards.oftrust.net/v1/Vocabulary/Building/House"
        }])
    );
}

#[test]
fn definitions_reference_identity_context() {
    let store = taxonomy_store();
    let settings = Settings::default();
    let taxonomy = Taxonomy::new(&store, settings.namespace_table());
    let set = build(&taxonomy, &settings);

    let house = document(&set, "ClassDefinitions/Building/House.jsonld");
    assert_eq!(
        house["@context"],
        "https://standards.oftrust.net/v1/Context/Building/House.jsonld"
    );
    assert_eq!(house["@type"], "pot:ClassDefinition");
    assert_eq!(house["rdfs:subClassOf"], "pot:Building");
    let names: Vec<&str> = house["pot:supportedAttribute"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["pot:contextName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["houseOwner", "roofType", "floorCount"]);
}

#[test]
fn multiple_parents_produce_one_document_per_lineage() {
    let mut store = taxonomy_store();
    store.insert(Triple::new(pot("Asset"), iris::RDF_TYPE, Term::iri(iris::POT_CLASS)));
    store.insert(Triple::new(pot("House"), iris::RDFS_SUBCLASS_OF, pot("Asset")));
    let settings = Settings::default();
    let taxonomy = Taxonomy::new(&store, settings.namespace_table());
    let set = build(&taxonomy, &settings);

    let all = paths(&set);
    assert!(all.contains("Vocabulary/Building/House.jsonld"));
    assert!(all.contains("Vocabulary/Asset/House.jsonld"));
    assert!(all.contains("Vocabulary/Asset/index.jsonld"));
    assert_eq!(
        document(&set, "Vocabulary/Asset/House.jsonld")["@id"],
        "https://standards.oftrust.net/v1/Vocabulary/Building/House"
    );
}

#[test]
fn malformed_class_is_reported_not_fatal() {
    let mut store = taxonomy_store();
    store.insert(Triple::new(
        Term::iri("urn-without-separator"),
        iris::RDF_TYPE,
        Term::iri(iris::POT_CLASS),
    ));
    let settings = Settings::default();
    let taxonomy = Taxonomy::new(&store, settings.namespace_table());
    let set = build(&taxonomy, &settings);

    assert_eq!(set.failures.len(), 1);
    assert_eq!(set.failures[0].iri, "urn-without-separator");
    assert_eq!(set.count(DocumentKind::Vocabulary), 3);
}

#[test]
fn malformed_child_does_not_fail_its_parent() {
    let mut store = taxonomy_store();
    store.insert(Triple::new(
        Term::iri("urn-without-separator"),
        iris::RDF_TYPE,
        Term::iri(iris::POT_CLASS),
    ));
    store.insert(Triple::new(
        Term::iri("urn-without-separator"),
        iris::RDFS_SUBCLASS_OF,
        pot("Building"),
    ));
    let settings = Settings::default();
    let taxonomy = Taxonomy::new(&store, settings.namespace_table());
    let set = build(&taxonomy, &settings);

    let failed: Vec<&str> = set.failures.iter().map(|f| f.iri.as_str()).collect();
    assert_eq!(failed, vec!["urn-without-separator"]);
    let all = paths(&set);
    assert!(all.contains("Vocabulary/Building.jsonld"));
    assert!(all.contains("Context/Building.jsonld"));
    assert!(all.contains("ClassDefinitions/Building.jsonld"));
    assert_eq!(
        document(&set, "Vocabulary/Building/index.jsonld")["pot:member"],
        json!([{
            "@id": "pot:House",
            "url": "https://standards.oftrust.net/v1/Vocabulary/Building/House"
        }])
    );
}

#[test]
fn ontology_fragments_carry_class_and_domain_properties() {
    let store = taxonomy_store();
    let settings = Settings::default();
    let taxonomy = Taxonomy::new(&store, settings.namespace_table());
    let set = build(&taxonomy, &settings);

    let house = document(&set, "Ontology/Building/House.jsonld");
    let ids: Vec<&str> = house["@graph"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["@id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["pot:House", "pot:owner", "pot:roofType", "_:c1", "_:c2"]);
    assert_eq!(house["@graph"][0]["rdfs:subClassOf"], json!([{ "@id": "pot:Building" }]));
    assert_eq!(
        house["@graph"][1]["pot:contextName"],
        json!([{ "@value": "houseOwner" }])
    );

    let excluded = Settings::from_toml_str(r#"excluded_classes = ["pot:Car"]"#).unwrap();
    let set = build(&taxonomy, &excluded);
    assert!(paths(&set).contains("Ontology/Car.jsonld"));
}

#[test]
fn generate_writes_pretty_json() {
    let dir = tempfile::tempdir().unwrap();
    let store = taxonomy_store();
    let settings = Settings::default();
    let taxonomy = Taxonomy::new(&store, settings.namespace_table());

    let report = generate(&taxonomy, &settings, dir.path()).unwrap();
    assert_eq!(report.class_count, 3);
    assert_eq!(report.property_count, 3);
    assert_eq!(report.vocabulary_count, 3);
    assert_eq!(report.identity_count, 3);
    assert_eq!(report.definition_count, 3);
    assert_eq!(report.index_count, 2);
    assert_eq!(report.ontology_count, 3);
    assert_eq!(report.documents_written, 14);

    let written = std::fs::read_to_string(dir.path().join("Context/Building/House.jsonld")).unwrap();
    assert!(written.starts_with("{\n"));
    let parsed: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["@context"]["floorCount"]["@nest"], "data");
}
