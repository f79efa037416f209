//! Model artifact locations and loading.

use crate::classifier::{ClassifierArtifact, LinearClassifier};
use crate::encoder::{EncoderArtifact, LabelEncoder};
use crate::error::{LoadError, LoadResult};
use crate::vectorizer::{TfidfVectorizer, VectorizerArtifact};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_CLASSIFIER_FILE: &str = "classifier_healthia.json";
pub const DEFAULT_VECTORIZER_FILE: &str = "vectorizer_healthia.json";
pub const DEFAULT_ENCODER_FILE: &str = "encoder_healthia.json";

/// Where the three artifacts live on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub classifier: PathBuf,
    pub vectorizer: PathBuf,
    pub encoder: PathBuf,
}

impl ArtifactPaths {
    /// Default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::with_files(
            dir,
            DEFAULT_CLASSIFIER_FILE,
            DEFAULT_VECTORIZER_FILE,
            DEFAULT_ENCODER_FILE,
        )
    }

    pub fn with_files(
        dir: impl AsRef<Path>,
        classifier: &str,
        vectorizer: &str,
        encoder: &str,
    ) -> Self {
        let dir = dir.as_ref();
        Self {
            classifier: dir.join(classifier),
            vectorizer: dir.join(vectorizer),
            encoder: dir.join(encoder),
        }
    }
}

/// Vectorizer, classifier and encoder, checked against each other
#[derive(Debug, Clone)]
pub struct ModelBundle {
    pub vectorizer: TfidfVectorizer,
    pub classifier: LinearClassifier,
    pub encoder: LabelEncoder,
}

impl ModelBundle {
    pub fn load(paths: &ArtifactPaths) -> LoadResult<Self> {
        let classifier = LinearClassifier::from_artifact(read_json::<ClassifierArtifact>(&paths.classifier)?)?;
        info!("Classifier loaded from {}", paths.classifier.display());

        let vectorizer = TfidfVectorizer::from_artifact(read_json::<VectorizerArtifact>(&paths.vectorizer)?)?;
        info!("Vectorizer loaded from {}", paths.vectorizer.display());

        let encoder = LabelEncoder::from_artifact(read_json::<EncoderArtifact>(&paths.encoder)?)?;
        info!("Encoder loaded from {}", paths.encoder.display());

        Self::from_parts(vectorizer, classifier, encoder)
    }

    pub fn from_parts(
        vectorizer: TfidfVectorizer,
        classifier: LinearClassifier,
        encoder: LabelEncoder,
    ) -> LoadResult<Self> {
        if vectorizer.n_features() != classifier.n_features() {
            return Err(LoadError::Invalid(format!(
                "vectorizer produces {} features but classifier expects {}",
                vectorizer.n_features(),
                classifier.n_features()
            )));
        }
        if encoder.len() != classifier.n_classes() {
            return Err(LoadError::Invalid(format!(
                "encoder has {} classes but classifier has {}",
                encoder.len(),
                classifier.n_classes()
            )));
        }
        debug!(
            "Model bundle: {} features, {} terms, {} classes",
            vectorizer.n_features(),
            vectorizer.vocabulary_len(),
            encoder.len()
        );

        Ok(Self {
            vectorizer,
            classifier,
            encoder,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
