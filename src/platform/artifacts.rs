// Placement Predictor - platform/artifacts.rs
//
// Reads the model and scaler artifact files from disk. Parsing and
// validation live in core::inference; this module only adds file access,
// the size bound, and path context for errors.

use crate::core::inference::{Artifacts, Classifier, Scaler};
use crate::platform::fs::{read_text_bounded, BoundedRead};
use crate::util::constants;
use crate::util::error::{ArtifactError, ArtifactKind};
use std::path::Path;

fn read_artifact(kind: ArtifactKind, path: &Path) -> Result<String, ArtifactError> {
    match read_text_bounded(path, constants::MAX_ARTIFACT_FILE_SIZE) {
        Ok(BoundedRead::Text(content)) => Ok(content),
        Ok(BoundedRead::TooLarge { size }) => Err(ArtifactError::FileTooLarge {
            kind,
            path: path.to_path_buf(),
            size,
            max_size: constants::MAX_ARTIFACT_FILE_SIZE,
        }),
        Err(e) => Err(ArtifactError::Io {
            kind,
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Load and validate the scaler artifact.
pub fn load_scaler(path: &Path) -> Result<Scaler, ArtifactError> {
    let content = read_artifact(ArtifactKind::Scaler, path)?;
    Scaler::from_json(&content, path)
}

/// Load and validate the model artifact.
pub fn load_classifier(path: &Path) -> Result<Classifier, ArtifactError> {
    let content = read_artifact(ArtifactKind::Model, path)?;
    Classifier::from_json(&content, path)
}

/// Load both artifacts. The model is read first, matching the order the
/// prediction view has always required them in.
pub fn load_artifacts(model_path: &Path, scaler_path: &Path) -> Result<Artifacts, ArtifactError> {
    let classifier = load_classifier(model_path)?;
    let scaler = load_scaler(scaler_path)?;
    tracing::info!(
        model = %model_path.display(),
        scaler = %scaler_path.display(),
        model_type = classifier.model_type(),
        features = classifier.n_features(),
        "Artifacts loaded"
    );
    Ok(Artifacts { scaler, classifier })
}
