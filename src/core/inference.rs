// Placement Predictor - core/inference.rs
//
// Scaler and classifier artifacts plus the dispatcher that runs a
// feature vector through both. Artifacts are JSON documents describing
// already-fit parameters; nothing here trains or refits anything.
//
// Failures are returned, never retried or papered over: a shape mismatch
// means the artifacts and the feature layout disagree and no prediction
// can be trusted.

use crate::core::features::FeatureVector;
use crate::core::model::PlacementLabel;
use crate::util::constants;
use crate::util::error::{ArtifactError, ArtifactKind, InferenceError};
use serde::{Deserialize, Serialize};
use std::path::Path;

// =============================================================================
// Contracts
// =============================================================================

/// A fitted transform that normalises raw feature ranges.
pub trait FeatureScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError>;
}

/// A fitted binary classifier.
pub trait PlacementClassifier {
    fn predict(&self, features: &[f64]) -> Result<PlacementLabel, InferenceError>;
}

/// Scale the feature vector, then classify it.
pub fn dispatch(
    features: &FeatureVector,
    scaler: &dyn FeatureScaler,
    classifier: &dyn PlacementClassifier,
) -> Result<PlacementLabel, InferenceError> {
    let scaled = scaler.transform(features.as_slice())?;
    tracing::debug!(scaled = ?scaled, "Feature vector scaled");
    classifier.predict(&scaled)
}

// =============================================================================
// Scaler artifact
// =============================================================================

/// Serialised scaler parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaler {
    /// `(x - mean) / scale` per column.
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    /// `x * scale + min` per column.
    MinMax { min: Vec<f64>, scale: Vec<f64> },
}

impl Scaler {
    /// Parse and validate a scaler artifact from JSON text.
    pub fn from_json(content: &str, path: &Path) -> Result<Self, ArtifactError> {
        let scaler: Scaler = serde_json::from_str(content).map_err(|e| ArtifactError::Json {
            kind: ArtifactKind::Scaler,
            path: path.to_path_buf(),
            source: e,
        })?;
        scaler.validate()?;
        Ok(scaler)
    }

    /// Number of columns the scaler was fit on.
    pub fn n_features(&self) -> usize {
        match self {
            Self::Standard { mean, .. } => mean.len(),
            Self::MinMax { min, .. } => min.len(),
        }
    }

    /// Check the parameters are usable for the fixed feature layout.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let kind = ArtifactKind::Scaler;
        let (offset_field, offset, scale) = match self {
            Self::Standard { mean, scale } => ("mean", mean, scale),
            Self::MinMax { min, scale } => ("min", min, scale),
        };

        if offset.is_empty() {
            return Err(ArtifactError::Empty {
                kind,
                field: offset_field,
            });
        }
        if scale.len() != offset.len() {
            return Err(ArtifactError::LengthMismatch {
                kind,
                field: "scale",
                expected: offset.len(),
                found: scale.len(),
            });
        }
        check_finite(kind, offset_field, offset)?;
        check_finite(kind, "scale", scale)?;

        if let Self::Standard { scale, .. } = self {
            if let Some(index) = scale.iter().position(|s| !s.is_normal()) {
                return Err(ArtifactError::ZeroScale { index });
            }
        }

        check_feature_count(kind, offset.len())
    }
}

impl FeatureScaler for Scaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        let expected = self.n_features();
        if features.len() != expected {
            return Err(InferenceError::ShapeMismatch {
                stage: "scaler",
                expected,
                found: features.len(),
            });
        }

        let scaled: Vec<f64> = match self {
            Self::Standard { mean, scale } => features
                .iter()
                .zip(mean.iter().zip(scale.iter()))
                .map(|(x, (m, s))| (x - m) / s)
                .collect(),
            Self::MinMax { min, scale } => features
                .iter()
                .zip(min.iter().zip(scale.iter()))
                .map(|(x, (m, s))| x * s + m)
                .collect(),
        };

        if scaled.iter().any(|v| !v.is_finite()) {
            return Err(InferenceError::NonFinite { stage: "scaler" });
        }
        Ok(scaled)
    }
}

// =============================================================================
// Classifier artifact
// =============================================================================

fn default_classes() -> [i64; 2] {
    [0, 1]
}

fn default_degree() -> u32 {
    3
}

/// SVC kernel function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Kernel {
    Linear,
    Rbf {
        gamma: f64,
    },
    Poly {
        gamma: f64,
        #[serde(default)]
        coef0: f64,
        #[serde(default = "default_degree")]
        degree: u32,
    },
    Sigmoid {
        gamma: f64,
        #[serde(default)]
        coef0: f64,
    },
}

impl Kernel {
    fn eval(&self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            Self::Linear => dot(a, b),
            Self::Rbf { gamma } => {
                let dist: f64 = a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum();
                (-gamma * dist).exp()
            }
            Self::Poly {
                gamma,
                coef0,
                degree,
            } => {
                // Degrees beyond i32 are rejected at load.
                let exponent = i32::try_from(*degree).unwrap_or(i32::MAX);
                (gamma * dot(a, b) + coef0).powi(exponent)
            }
            Self::Sigmoid { gamma, coef0 } => (gamma * dot(a, b) + coef0).tanh(),
        }
    }

    fn params_finite(&self) -> bool {
        match self {
            Self::Linear => true,
            Self::Rbf { gamma } => gamma.is_finite(),
            Self::Poly { gamma, coef0, .. } | Self::Sigmoid { gamma, coef0 } => {
                gamma.is_finite() && coef0.is_finite()
            }
        }
    }
}

/// Serialised binary classifier parameters.
///
/// A positive decision value selects `classes[1]`, anything else
/// `classes[0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classifier {
    /// Linear decision function `w . x + b`.
    Linear {
        coefficients: Vec<f64>,
        intercept: f64,
        #[serde(default = "default_classes")]
        classes: [i64; 2],
    },
    /// Kernel support vector classifier.
    Svc {
        kernel: Kernel,
        support_vectors: Vec<Vec<f64>>,
        dual_coef: Vec<f64>,
        intercept: f64,
        #[serde(default = "default_classes")]
        classes: [i64; 2],
    },
}

impl Classifier {
    /// Parse and validate a model artifact from JSON text.
    pub fn from_json(content: &str, path: &Path) -> Result<Self, ArtifactError> {
        let model: Classifier = serde_json::from_str(content).map_err(|e| ArtifactError::Json {
            kind: ArtifactKind::Model,
            path: path.to_path_buf(),
            source: e,
        })?;
        model.validate()?;
        Ok(model)
    }

    /// Short name of the model family, for logs and the status bar.
    pub fn model_type(&self) -> &'static str {
        match self {
            Self::Linear { .. } => "linear",
            Self::Svc { kernel, .. } => match kernel {
                Kernel::Linear => "svc-linear",
                Kernel::Rbf { .. } => "svc-rbf",
                Kernel::Poly { .. } => "svc-poly",
                Kernel::Sigmoid { .. } => "svc-sigmoid",
            },
        }
    }

    /// Number of columns the model was fit on.
    pub fn n_features(&self) -> usize {
        match self {
            Self::Linear { coefficients, .. } => coefficients.len(),
            Self::Svc {
                support_vectors, ..
            } => support_vectors.first().map_or(0, Vec::len),
        }
    }

    fn classes(&self) -> [i64; 2] {
        match self {
            Self::Linear { classes, .. } | Self::Svc { classes, .. } => *classes,
        }
    }

    /// Check the parameters are usable for the fixed feature layout.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let kind = ArtifactKind::Model;
        match self {
            Self::Linear {
                coefficients,
                intercept,
                ..
            } => {
                if coefficients.is_empty() {
                    return Err(ArtifactError::Empty {
                        kind,
                        field: "coefficients",
                    });
                }
                check_finite(kind, "coefficients", coefficients)?;
                check_finite(kind, "intercept", &[*intercept])?;
            }
            Self::Svc {
                kernel,
                support_vectors,
                dual_coef,
                intercept,
                ..
            } => {
                let first = support_vectors.first().ok_or(ArtifactError::Empty {
                    kind,
                    field: "support_vectors",
                })?;
                if support_vectors.len() > constants::MAX_SUPPORT_VECTORS {
                    return Err(ArtifactError::TooManySupportVectors {
                        count: support_vectors.len(),
                        max: constants::MAX_SUPPORT_VECTORS,
                    });
                }
                if dual_coef.len() != support_vectors.len() {
                    return Err(ArtifactError::LengthMismatch {
                        kind,
                        field: "dual_coef",
                        expected: support_vectors.len(),
                        found: dual_coef.len(),
                    });
                }
                for sv in support_vectors {
                    if sv.len() != first.len() {
                        return Err(ArtifactError::LengthMismatch {
                            kind,
                            field: "support_vectors",
                            expected: first.len(),
                            found: sv.len(),
                        });
                    }
                    check_finite(kind, "support_vectors", sv)?;
                }
                check_finite(kind, "dual_coef", dual_coef)?;
                check_finite(kind, "intercept", &[*intercept])?;
                if !kernel.params_finite() {
                    return Err(ArtifactError::NonFinite {
                        kind,
                        field: "kernel",
                        index: 0,
                    });
                }
                if let Kernel::Poly { degree, .. } = kernel {
                    if i32::try_from(*degree).is_err() {
                        return Err(ArtifactError::KernelDegree { degree: *degree });
                    }
                }
            }
        }

        let [negative, positive] = self.classes();
        if negative == positive {
            return Err(ArtifactError::DuplicateClasses { label: negative });
        }

        check_feature_count(kind, self.n_features())
    }

    /// Signed distance from the decision boundary for an already-scaled
    /// vector.
    pub fn decision_function(&self, features: &[f64]) -> Result<f64, InferenceError> {
        let expected = self.n_features();
        if features.len() != expected {
            return Err(InferenceError::ShapeMismatch {
                stage: "classifier",
                expected,
                found: features.len(),
            });
        }

        let value = match self {
            Self::Linear {
                coefficients,
                intercept,
                ..
            } => dot(coefficients, features) + intercept,
            Self::Svc {
                kernel,
                support_vectors,
                dual_coef,
                intercept,
                ..
            } => {
                support_vectors
                    .iter()
                    .zip(dual_coef)
                    .map(|(sv, alpha)| alpha * kernel.eval(sv, features))
                    .sum::<f64>()
                    + intercept
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(InferenceError::NonFinite {
                stage: "classifier",
            })
        }
    }
}

impl PlacementClassifier for Classifier {
    fn predict(&self, features: &[f64]) -> Result<PlacementLabel, InferenceError> {
        let decision = self.decision_function(features)?;
        let [negative, positive] = self.classes();
        let raw = if decision > 0.0 { positive } else { negative };
        tracing::debug!(decision, raw_label = raw, "Classifier decision");
        PlacementLabel::from_raw(raw).ok_or(InferenceError::UnexpectedLabel { label: raw })
    }
}

// =============================================================================
// Loaded pair
// =============================================================================

/// The scaler and model held for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
    pub scaler: Scaler,
    pub classifier: Classifier,
}

impl Artifacts {
    /// Run the full scale-then-classify pipeline.
    pub fn predict(&self, features: &FeatureVector) -> Result<PlacementLabel, InferenceError> {
        dispatch(features, &self.scaler, &self.classifier)
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn check_finite(kind: ArtifactKind, field: &'static str, values: &[f64]) -> Result<(), ArtifactError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ArtifactError::NonFinite { kind, field, index }),
        None => Ok(()),
    }
}

fn check_feature_count(kind: ArtifactKind, found: usize) -> Result<(), ArtifactError> {
    if found == constants::FEATURE_COUNT {
        Ok(())
    } else {
        Err(ArtifactError::FeatureCount {
            kind,
            expected: constants::FEATURE_COUNT,
            found,
        })
    }
}
