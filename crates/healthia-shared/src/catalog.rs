//! Disease catalog: the labelled symptom samples the model was fitted on.
//!
//! The table is compiled into the binary and never changes at runtime, so
//! every accessor is infallible.

use crate::catalog_data::SAMPLES;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

static BUILTIN: Lazy<DiseaseCatalog> = Lazy::new(|| DiseaseCatalog::from_samples(SAMPLES));

/// One labelled symptom description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymptomRecord {
    pub text: &'static str,
    pub disease: &'static str,
}

/// Summary counts over the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub sample_count: usize,
    pub disease_count: usize,
    pub diseases: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DiseaseCatalog {
    records: Vec<SymptomRecord>,
    /// Distinct labels, ascending
    diseases: Vec<String>,
}

impl DiseaseCatalog {
    /// The catalog shipped with the service
    pub fn builtin() -> &'static DiseaseCatalog {
        &BUILTIN
    }

    pub fn from_samples(samples: &[(&'static str, &'static str)]) -> Self {
        let records: Vec<SymptomRecord> = samples
            .iter()
            .map(|&(text, disease)| SymptomRecord { text, disease })
            .collect();

        let diseases = records
            .iter()
            .map(|r| r.disease)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        Self { records, diseases }
    }

    /// Distinct disease labels, sorted, without duplicates
    pub fn list_diseases(&self) -> Vec<String> {
        self.diseases.clone()
    }

    pub fn diseases(&self) -> &[String] {
        &self.diseases
    }

    pub fn contains(&self, disease: &str) -> bool {
        self.diseases
            .binary_search_by(|d| d.as_str().cmp(disease))
            .is_ok()
    }

    pub fn samples(&self) -> &[SymptomRecord] {
        &self.records
    }

    /// Samples labelled with `disease`
    pub fn samples_for<'a>(&'a self, disease: &'a str) -> impl Iterator<Item = &'a SymptomRecord> {
        self.records.iter().filter(move |r| r.disease == disease)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            sample_count: self.records.len(),
            disease_count: self.diseases.len(),
            diseases: self.list_diseases(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_samples_dedups_and_sorts() {
        let catalog = DiseaseCatalog::from_samples(&[
            ("tosse seca", "Zika"),
            ("febre alta", "Dengue"),
            ("dor atras dos olhos", "Dengue"),
        ]);
        assert_eq!(catalog.list_diseases(), vec!["Dengue", "Zika"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.samples_for("Dengue").count(), 2);
    }

    #[test]
    fn test_contains() {
        let catalog = DiseaseCatalog::from_samples(&[("febre", "Dengue")]);
        assert!(catalog.contains("Dengue"));
        assert!(!catalog.contains("dengue"));
        assert!(!catalog.contains("Zika"));
    }

    #[test]
    fn test_empty_catalog_stats() {
        let catalog = DiseaseCatalog::from_samples(&[]);
        assert!(catalog.is_empty());
        let stats = catalog.stats();
        assert_eq!(stats.sample_count, 0);
        assert_eq!(stats.disease_count, 0);
        assert!(stats.diseases.is_empty());
    }
}
