// Placement Predictor - tests/e2e_prediction.rs
//
// End-to-end tests for the prediction pipeline.
//
// These tests read real artifact files from disk (the shipped assets and
// the fixtures under tests/fixtures), run real validation, feature
// assembly, scaling and classification, and drive the same AppState the
// GUI drives. No mocks.

use placement_predictor::app::predict::PredictionPhase;
use placement_predictor::app::state::AppState;
use placement_predictor::core::features::build_features;
use placement_predictor::core::model::{PlacementLabel, PredictionForm, SoftSkills, YesNo};
use placement_predictor::core::validate::validate;
use placement_predictor::platform::artifacts::{load_artifacts, load_classifier, load_scaler};
use placement_predictor::platform::config::AppConfig;
use placement_predictor::platform::fs::load_image;
use placement_predictor::util::error::{ArtifactError, ArtifactKind};
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

fn manifest_path(parts: &[&str]) -> PathBuf {
    parts
        .iter()
        .fold(PathBuf::from(env!("CARGO_MANIFEST_DIR")), |p, part| p.join(part))
}

fn fixture(name: &str) -> PathBuf {
    manifest_path(&["tests", "fixtures", name])
}

fn strong_form() -> PredictionForm {
    PredictionForm {
        degree_percent: 85.5,
        internships: 2,
        projects: 3,
        certifications: 1,
        aptitude_score: 70.0,
        soft_skills: SoftSkills::new(8),
        extracurricular: Some(YesNo::Yes),
        training_attended: Some(YesNo::No),
        ssc_percent: 90.0,
        hsc_percent: 88.0,
    }
}

fn weak_form() -> PredictionForm {
    PredictionForm {
        degree_percent: 50.0,
        internships: 0,
        projects: 0,
        certifications: 0,
        aptitude_score: 40.0,
        soft_skills: SoftSkills::new(2),
        extracurricular: Some(YesNo::No),
        training_attended: Some(YesNo::No),
        ssc_percent: 55.0,
        hsc_percent: 50.0,
    }
}

fn predict_with(model: &str, form: &PredictionForm) -> PlacementLabel {
    let artifacts = load_artifacts(&fixture(model), &fixture("scaler_standard.json"))
        .expect("fixture artifacts load");
    let profile = validate(form).expect("form is complete");
    artifacts
        .predict(&build_features(&profile))
        .expect("inference succeeds")
}

// =============================================================================
// Shipped assets
// =============================================================================

/// The default artifacts shipped in assets/ load and score both extremes.
#[test]
fn e2e_shipped_artifacts_predict_both_outcomes() {
    let artifacts = load_artifacts(
        &manifest_path(&["assets", "placement_model.json"]),
        &manifest_path(&["assets", "placement_scaler.json"]),
    )
    .expect("shipped artifacts load");

    let strong = build_features(&validate(&strong_form()).unwrap());
    let weak = build_features(&validate(&weak_form()).unwrap());
    assert_eq!(artifacts.predict(&strong), Ok(PlacementLabel::Placed));
    assert_eq!(artifacts.predict(&weak), Ok(PlacementLabel::NotPlaced));
}

/// The shipped home image decodes to its known dimensions.
#[test]
fn e2e_shipped_home_image_decodes() {
    let img = load_image(&manifest_path(&["assets", "home.png"])).expect("home.png decodes");
    assert_eq!((img.width, img.height), (900, 300));
    assert_eq!(img.rgba.len(), 900 * 300 * 4);
}

// =============================================================================
// Model families
// =============================================================================

#[test]
fn e2e_linear_model_fixture() {
    assert_eq!(
        predict_with("model_linear.json", &strong_form()),
        PlacementLabel::Placed
    );
    assert_eq!(
        predict_with("model_linear.json", &weak_form()),
        PlacementLabel::NotPlaced
    );
}

#[test]
fn e2e_rbf_svc_fixture() {
    assert_eq!(
        predict_with("model_svc_rbf.json", &strong_form()),
        PlacementLabel::Placed
    );
    assert_eq!(
        predict_with("model_svc_rbf.json", &weak_form()),
        PlacementLabel::NotPlaced
    );

    let model = load_classifier(&fixture("model_svc_rbf.json")).unwrap();
    assert_eq!(model.model_type(), "svc-rbf");
}

// =============================================================================
// Artifact failures
// =============================================================================

/// A model fit on nine columns is rejected at load, before any prediction.
#[test]
fn e2e_wrong_width_model_is_rejected() {
    let err = load_classifier(&fixture("model_wrong_width.json")).unwrap_err();
    assert!(
        matches!(
            err,
            ArtifactError::FeatureCount {
                kind: ArtifactKind::Model,
                expected: 10,
                found: 9
            }
        ),
        "got {err:?}"
    );
}

#[test]
fn e2e_missing_artifact_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_artifacts(
        &dir.path().join("absent_model.json"),
        &fixture("scaler_standard.json"),
    )
    .unwrap_err();
    assert!(
        matches!(
            err,
            ArtifactError::Io {
                kind: ArtifactKind::Model,
                ..
            }
        ),
        "got {err:?}"
    );
}

#[test]
fn e2e_malformed_scaler_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scaler.json");
    fs::write(&path, r#"{ "kind": "robust", "center": [] }"#).unwrap();
    let err = load_scaler(&path).unwrap_err();
    assert!(
        matches!(
            err,
            ArtifactError::Json {
                kind: ArtifactKind::Scaler,
                ..
            }
        ),
        "got {err:?}"
    );
}

// =============================================================================
// Application workflow
// =============================================================================

fn live_state() -> AppState {
    let config = AppConfig::default().with_overrides(
        Some(fixture("model_linear.json")),
        Some(fixture("scaler_standard.json")),
        Some(manifest_path(&["assets", "home.png"])),
    );
    let artifacts = load_artifacts(&config.model_path, &config.scaler_path);
    let image = load_image(&config.home_image_path);
    AppState::new(config, artifacts, image, false)
}

/// Predict, clear, predict again: the second attempt must be rejected.
#[test]
fn e2e_clear_after_prediction_requires_new_input() {
    let mut state = live_state();
    state.form = strong_form();
    state.request_predict = true;
    state.process_requests();

    match &state.phase {
        PredictionPhase::Scored { label, profile } => {
            assert_eq!(*label, PlacementLabel::Placed);
            assert_eq!(profile.soft_skills().get(), 8);
        }
        other => panic!("expected a scored profile, got {other:?}"),
    }

    state.request_clear = true;
    state.process_requests();
    assert_eq!(state.form, PredictionForm::default());

    state.request_predict = true;
    state.process_requests();
    match &state.phase {
        PredictionPhase::Rejected(issues) => assert_eq!(issues.len(), 7),
        other => panic!("expected rejection, got {other:?}"),
    }
}

/// Partially filled forms are rejected no matter how many counts are set.
#[test]
fn e2e_partial_form_is_never_scored() {
    let mut state = live_state();
    state.form = PredictionForm {
        internships: 3,
        projects: 5,
        certifications: 2,
        training_attended: None,
        ..strong_form()
    };
    state.predict();
    assert!(matches!(state.phase, PredictionPhase::Rejected(ref i) if i.len() == 1));
}
