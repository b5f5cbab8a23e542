// Placement Predictor - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name (window title).
pub const APP_NAME: &str = "Placement App";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "PlacementPredictor";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Feature layout
// =============================================================================

/// Number of columns the scaler and model were fit on.
pub const FEATURE_COUNT: usize = 10;

/// Inclusive upper bound for percentage and score inputs.
pub const MAX_PERCENT: f64 = 100.0;

/// Lowest soft-skills rating.
pub const MIN_SOFT_SKILLS: u8 = 1;

/// Highest soft-skills rating.
pub const MAX_SOFT_SKILLS: u8 = 10;

/// Drag step for percentage inputs.
pub const PERCENT_STEP: f64 = 0.1;

/// Drag step for the aptitude score input.
pub const APTITUDE_STEP: f64 = 1.0;

// =============================================================================
// Artifact limits
// =============================================================================

/// Maximum size of a model or scaler artifact file in bytes.
///
/// An RBF SVC stores every support vector, so this is generous, but it
/// still refuses to slurp an accidentally selected multi-gigabyte file.
pub const MAX_ARTIFACT_FILE_SIZE: u64 = 16 * 1024 * 1024; // 16 MB

/// Maximum number of support vectors accepted in an SVC artifact.
pub const MAX_SUPPORT_VECTORS: usize = 100_000;

/// Default model artifact path, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "assets/placement_model.json";

/// Default scaler artifact path, relative to the working directory.
pub const DEFAULT_SCALER_PATH: &str = "assets/placement_scaler.json";

/// Default home view image path, relative to the working directory.
pub const DEFAULT_HOME_IMAGE_PATH: &str = "assets/home.png";

/// Maximum width in points at which the home image is displayed.
pub const HOME_IMAGE_MAX_WIDTH: f32 = 900.0;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
