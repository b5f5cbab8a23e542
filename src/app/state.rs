// Placement Predictor - app/state.rs
//
// Application state management. Holds the active view, the prediction
// form, the current prediction phase, and the artifacts loaded at start-up.
// Owned by the eframe::App implementation.
//
// Panels never mutate the form/phase pair directly in response to a button;
// they raise a request flag that `process_requests` consumes once at the
// top of the next frame.

use crate::app::predict::{submit, PredictionPhase};
use crate::core::inference::Artifacts;
use crate::core::model::PredictionForm;
use crate::platform::config::AppConfig;
use crate::platform::fs::DecodedImage;
use crate::util::error::{ArtifactError, AssetError};

/// The three mutually exclusive views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Prediction,
    DatasetInfo,
}

impl View {
    /// Navigation order.
    pub fn all() -> &'static [View] {
        &[View::Home, View::Prediction, View::DatasetInfo]
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "\u{1f3e0} Home",
            Self::Prediction => "\u{1f50d} Placement Prediction",
            Self::DatasetInfo => "\u{1f4d8} Dataset Information",
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Validated configuration (artifact paths are re-read on reload).
    pub config: AppConfig,

    /// Currently displayed view.
    pub view: View,

    /// Raw prediction form values.
    pub form: PredictionForm,

    /// Outcome of the most recent submission.
    pub phase: PredictionPhase,

    /// Scaler + model loaded at start-up, or why they could not be.
    pub artifacts: Result<Artifacts, ArtifactError>,

    /// Decoded home view image, or why it could not be loaded.
    pub home_image: Result<DecodedImage, AssetError>,

    /// "Clear All Inputs" was pressed this frame.
    pub request_clear: bool,

    /// "Predict Placement" was pressed this frame.
    pub request_predict: bool,

    /// "Reload Artifacts" was chosen; handled by the GUI shell.
    pub request_reload: bool,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings (config validation etc.).
    pub warnings: Vec<String>,

    /// Whether the About dialog is open.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state from everything loaded at start-up.
    pub fn new(
        config: AppConfig,
        artifacts: Result<Artifacts, ArtifactError>,
        home_image: Result<DecodedImage, AssetError>,
        debug_mode: bool,
    ) -> Self {
        let status_message = match &artifacts {
            Ok(a) => format!(
                "Ready. Model: {} ({} features).",
                a.classifier.model_type(),
                a.classifier.n_features()
            ),
            Err(_) => "Model artifacts failed to load.".to_string(),
        };
        Self {
            config,
            view: View::default(),
            form: PredictionForm::default(),
            phase: PredictionPhase::default(),
            artifacts,
            home_image,
            request_clear: false,
            request_predict: false,
            request_reload: false,
            status_message,
            warnings: Vec::new(),
            show_about: false,
            debug_mode,
        }
    }

    /// Consume pending clear/predict requests. Each flag is read once and
    /// reset in the same pass. Clear runs before predict, so pressing both
    /// in one frame scores an empty form and is rejected.
    pub fn process_requests(&mut self) {
        if std::mem::take(&mut self.request_clear) {
            self.clear();
        }
        if std::mem::take(&mut self.request_predict) {
            self.predict();
        }
    }

    /// Reset every form field to its unset sentinel and drop any result.
    pub fn clear(&mut self) {
        self.form.clear();
        self.phase = PredictionPhase::AwaitingInput;
        self.status_message = "Inputs cleared.".to_string();
        tracing::debug!("Prediction form cleared");
    }

    /// Submit the current form against the loaded artifacts.
    ///
    /// Does nothing while the artifacts are missing: the prediction view is
    /// already showing the load failure and has no form to submit.
    pub fn predict(&mut self) {
        let Ok(artifacts) = &self.artifacts else {
            tracing::warn!("Prediction requested without loaded artifacts");
            return;
        };
        self.phase = submit(&self.form, &artifacts.scaler, &artifacts.classifier);
        self.status_message = match &self.phase {
            PredictionPhase::Rejected(issues) => {
                format!("{} required field(s) missing.", issues.len())
            }
            PredictionPhase::Scored { .. } => "Prediction complete.".to_string(),
            PredictionPhase::Failed(_) => "Prediction failed.".to_string(),
            PredictionPhase::AwaitingInput => String::new(),
        };
    }

    /// Replace the artifacts after an explicit reload. Any previous result
    /// was produced by the old model, so it is discarded.
    pub fn set_artifacts(&mut self, artifacts: Result<Artifacts, ArtifactError>) {
        self.status_message = match &artifacts {
            Ok(a) => format!("Artifacts reloaded ({}).", a.classifier.model_type()),
            Err(e) => format!("Artifact reload failed: {e}"),
        };
        self.artifacts = artifacts;
        self.phase = PredictionPhase::AwaitingInput;
    }

    /// Whether the sidebar form can be shown. Only missing artifacts hide
    /// it; a failed prediction leaves it in place so it can be cleared.
    pub fn form_available(&self) -> bool {
        self.artifacts.is_ok()
    }

    /// Startup failure message for the prediction view, if any.
    pub fn artifact_error(&self) -> Option<&ArtifactError> {
        self.artifacts.as_ref().err()
    }
}
