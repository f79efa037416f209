//! Tests for the built-in disease catalog

use healthia_shared::catalog::DiseaseCatalog;
use healthia_shared::text;

#[test]
fn test_builtin_has_twenty_diseases() {
    let catalog = DiseaseCatalog::builtin();
    assert_eq!(catalog.list_diseases().len(), 20);
    assert_eq!(catalog.len(), 197);
}

#[test]
fn test_list_is_sorted_and_unique() {
    let diseases = DiseaseCatalog::builtin().list_diseases();
    let mut expected = diseases.clone();
    expected.sort();
    expected.dedup();
    assert_eq!(diseases, expected);
    assert_eq!(diseases.first().map(String::as_str), Some("Anemia Falciforme"));
    assert_eq!(diseases.last().map(String::as_str), Some("Síndrome de Sjögren"));
}

#[test]
fn test_stats_match_accessors() {
    let catalog = DiseaseCatalog::builtin();
    let stats = catalog.stats();
    assert_eq!(stats.sample_count, catalog.samples().len());
    assert_eq!(stats.disease_count, stats.diseases.len());
    assert_eq!(stats.diseases, catalog.list_diseases());
}

#[test]
fn test_every_disease_has_samples() {
    let catalog = DiseaseCatalog::builtin();
    for disease in catalog.diseases() {
        assert!(
            catalog.samples_for(disease).count() >= 8,
            "{} should have at least 8 samples",
            disease
        );
    }
    assert_eq!(catalog.samples_for("Diabetes Tipo 1").count(), 13);
}

#[test]
fn test_samples_are_already_normalized() {
    for record in DiseaseCatalog::builtin().samples() {
        assert_eq!(
            text::normalize(record.text),
            record.text,
            "sample for {} is not in normalized form",
            record.disease
        );
    }
}
