use precept::core::catalog::{CatalogOrigin, CatalogSource};
use precept::core::error::PreceptError;
use precept::core::loader;
use precept::core::model::Paradigm;
use std::collections::HashSet;
use std::fs;
use tempfile::tempdir;

#[test]
fn embedded_catalog_loads_and_holds_invariants() {
    let loaded = loader::load_embedded().expect("embedded catalog loads");
    let registry = &loaded.registry;

    assert!(registry.category_count() >= 5);
    assert!(registry.principle_count() >= 20);

    // Identifier uniqueness within each entity type.
    let category_ids: HashSet<&str> = registry
        .categories()
        .iter()
        .map(|c| c.identifier.as_str())
        .collect();
    assert_eq!(category_ids.len(), registry.category_count());
    let principle_ids: HashSet<&str> = registry
        .principles()
        .iter()
        .map(|p| p.identifier.as_str())
        .collect();
    assert_eq!(principle_ids.len(), registry.principle_count());

    // Exactly-one-category membership and dense ordinals.
    for (ordinal, category) in registry.categories().iter().enumerate() {
        assert_eq!(category.ordinal, ordinal);
        for (i, member) in registry
            .principles_in(&category.identifier)
            .expect("listed category resolves")
            .iter()
            .enumerate()
        {
            assert_eq!(member.category_id, category.identifier);
            assert_eq!(member.ordinal, i);
            assert!(!member.description.trim().is_empty());
        }
    }

    // All three paradigms are represented in the shipped catalog.
    for paradigm in [
        Paradigm::Universal,
        Paradigm::Functional,
        Paradigm::ObjectOriented,
    ] {
        assert!(
            !registry.by_paradigm(paradigm).is_empty(),
            "no principles for {}",
            paradigm
        );
    }
}

#[test]
fn embedded_catalog_contains_canonical_entries() {
    let loaded = loader::load_embedded().expect("embedded catalog loads");
    let registry = &loaded.registry;

    let p = registry
        .principle("separation-of-concerns")
        .expect("canonical principle present");
    assert_eq!(p.name, "Separation of Concerns");
    assert_eq!(p.category_id, "structure-modularity");

    let solid = registry.principles_in("solid").expect("SOLID category");
    let names: Vec<&str> = solid.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Single Responsibility",
            "Open/Closed",
            "Liskov Substitution",
            "Interface Segregation",
            "Dependency Inversion"
        ]
    );
}

#[test]
fn rebuilding_from_embedded_source_is_deterministic() {
    let first = loader::load_embedded().expect("first load");
    let second = loader::load_embedded().expect("second load");
    assert_eq!(first.checksum, second.checksum);

    let ids = |l: &loader::LoadedCatalog| -> Vec<String> {
        l.registry
            .principles()
            .iter()
            .map(|p| p.identifier.clone())
            .collect()
    };
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn external_catalog_file_overrides_embedded() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("catalog.md");
    fs::write(
        &path,
        "# Functional Programming Principles\n\n\
         ## Composition & Data\n\n\
         ### Parse, Don't Validate\n\
         Turn unstructured input into a precise type once, at the boundary.\n",
    )
    .expect("write catalog fixture");

    let source = CatalogSource::from_file(&path).expect("read fixture");
    let loaded = loader::load(source).expect("fixture loads");

    assert_eq!(loaded.origin, CatalogOrigin::File(path));
    assert_eq!(loaded.registry.category_count(), 1);
    let p = loaded
        .registry
        .principle("parse-dont-validate")
        .expect("fixture principle");
    assert_eq!(p.category_id, "composition-data");
}

#[test]
fn missing_catalog_file_is_io_error() {
    let tmp = tempdir().expect("tempdir");
    let err = CatalogSource::from_file(&tmp.path().join("absent.md"))
        .expect_err("missing file must fail");
    assert!(matches!(err, PreceptError::IoError(_)));
}

#[test]
fn stray_prose_between_sections_is_rejected_not_merged() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("catalog.md");
    fs::write(
        &path,
        "# Universal Principles\n\n\
         ## Robustness & Errors\n\n\
         ### Fail Fast\n\
         Original description.\n\n\
         # Functional Programming Principles\n\
         Stray intro prose under the section heading.\n\n\
         ## Purity & Effects\n\n\
         ### Immutability\n\
         Model data as values.\n",
    )
    .expect("write fixture");

    let source = CatalogSource::from_file(&path).expect("read fixture");
    let err = loader::load(source).expect_err("unattached prose must fail loudly");
    match err {
        // The error names the offending prose; it must never replace the
        // previous principle's description.
        PreceptError::Construction(msg) => assert!(msg.contains("Stray intro prose")),
        other => panic!("expected Construction, got {:?}", other),
    }

    // The same catalog without the stray prose loads, with the original
    // description intact.
    fs::write(
        &path,
        "# Universal Principles\n\n\
         ## Robustness & Errors\n\n\
         ### Fail Fast\n\
         Original description.\n\n\
         # Functional Programming Principles\n\n\
         ## Purity & Effects\n\n\
         ### Immutability\n\
         Model data as values.\n",
    )
    .expect("rewrite fixture");
    let source = CatalogSource::from_file(&path).expect("read fixture");
    let loaded = loader::load(source).expect("clean fixture loads");
    let p = loaded.registry.principle("fail-fast").expect("present");
    assert_eq!(p.description, "Original description.");
}

#[test]
fn malformed_catalog_file_is_construction_error() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("catalog.md");
    fs::write(&path, "## Category Without Paradigm\n").expect("write fixture");

    let source = CatalogSource::from_file(&path).expect("read fixture");
    let err = loader::load(source).expect_err("orphan category must fail");
    assert!(matches!(err, PreceptError::Construction(_)));
}
