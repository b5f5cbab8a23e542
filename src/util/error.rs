// Placement Predictor - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// User input problems are NOT errors here: they are `ValidationIssue`s
// (core::validate) and never leave the prediction form.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Artifact errors
// ---------------------------------------------------------------------------

/// Which of the two artifacts an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Model,
    Scaler,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model => f.write_str("model"),
            Self::Scaler => f.write_str("scaler"),
        }
    }
}

/// Errors related to loading and validating the model/scaler artifacts.
#[derive(Debug)]
pub enum ArtifactError {
    /// I/O error reading an artifact file.
    Io {
        kind: ArtifactKind,
        path: PathBuf,
        source: io::Error,
    },

    /// Artifact file exceeds the maximum allowed size.
    FileTooLarge {
        kind: ArtifactKind,
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Artifact JSON could not be deserialised.
    Json {
        kind: ArtifactKind,
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A parameter array is empty.
    Empty {
        kind: ArtifactKind,
        field: &'static str,
    },

    /// Two parameter arrays that must agree in length do not.
    LengthMismatch {
        kind: ArtifactKind,
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// A parameter is NaN or infinite.
    NonFinite {
        kind: ArtifactKind,
        field: &'static str,
        index: usize,
    },

    /// A standard-scaler column has zero or subnormal scale; dividing by
    /// it overflows.
    ZeroScale { index: usize },

    /// The artifact was fit on a different number of columns than the
    /// feature vector carries.
    FeatureCount {
        kind: ArtifactKind,
        expected: usize,
        found: usize,
    },

    /// SVC artifact carries more support vectors than allowed.
    TooManySupportVectors { count: usize, max: usize },

    /// Polynomial kernel degree does not fit an integer exponent.
    KernelDegree { degree: u32 },

    /// Binary classifier declared the same label for both classes.
    DuplicateClasses { label: i64 },
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { kind, path, source } => {
                write!(f, "Cannot read {kind} artifact '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                kind,
                path,
                size,
                max_size,
            } => write!(
                f,
                "The {kind} artifact '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Json { kind, path, source } => write!(
                f,
                "Malformed {kind} artifact '{}': {source}",
                path.display()
            ),
            Self::Empty { kind, field } => {
                write!(f, "The {kind} artifact has an empty '{field}'")
            }
            Self::LengthMismatch {
                kind,
                field,
                expected,
                found,
            } => write!(
                f,
                "The {kind} artifact '{field}' has {found} values, expected {expected}"
            ),
            Self::NonFinite { kind, field, index } => write!(
                f,
                "The {kind} artifact '{field}' has a non-finite value at index {index}"
            ),
            Self::ZeroScale { index } => {
                write!(f, "The scaler artifact has a zero or subnormal scale for column {index}")
            }
            Self::FeatureCount {
                kind,
                expected,
                found,
            } => write!(
                f,
                "The {kind} artifact was fit on {found} features, but the input vector has {expected}"
            ),
            Self::TooManySupportVectors { count, max } => write!(
                f,
                "The model artifact has {count} support vectors, maximum is {max}"
            ),
            Self::KernelDegree { degree } => write!(
                f,
                "The model artifact has polynomial degree {degree}, maximum is {}",
                i32::MAX
            ),
            Self::DuplicateClasses { label } => write!(
                f,
                "The model artifact declares label {label} for both classes"
            ),
        }
    }
}

impl std::error::Error for ArtifactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Inference errors
// ---------------------------------------------------------------------------

/// Errors raised while scaling or classifying a feature vector.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// The vector handed to a stage has the wrong number of columns.
    ShapeMismatch {
        stage: &'static str,
        expected: usize,
        found: usize,
    },

    /// A stage produced NaN or infinity.
    NonFinite { stage: &'static str },

    /// The classifier produced a label that is neither placed nor not placed.
    UnexpectedLabel { label: i64 },
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                stage,
                expected,
                found,
            } => write!(
                f,
                "{stage} expected {expected} features but received {found}"
            ),
            Self::NonFinite { stage } => write!(f, "{stage} produced a non-finite value"),
            Self::UnexpectedLabel { label } => write!(
                f,
                "classifier returned label {label}; only 0 (not placed) and 1 (placed) are defined"
            ),
        }
    }
}

impl std::error::Error for InferenceError {}

// ---------------------------------------------------------------------------
// Asset errors
// ---------------------------------------------------------------------------

/// Errors related to static UI assets.
#[derive(Debug)]
pub enum AssetError {
    /// The asset file could not be read.
    Io { path: PathBuf, source: io::Error },

    /// The asset could not be decoded as an image.
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read image '{}': {source}", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "Cannot decode image '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}
