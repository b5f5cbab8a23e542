// Placement Predictor - app/predict.rs
//
// One prediction attempt: validate -> build features -> scale -> classify.
// The phase is rebuilt from scratch on every submission; nothing from a
// previous attempt leaks into the next.

use crate::core::features::build_features;
use crate::core::inference::{dispatch, FeatureScaler, PlacementClassifier};
use crate::core::model::{PlacementLabel, PredictionForm, StudentProfile};
use crate::core::validate::{validate, ValidationIssue};
use crate::util::error::InferenceError;

/// Where the prediction view currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PredictionPhase {
    /// Nothing submitted since start-up or the last clear.
    #[default]
    AwaitingInput,
    /// Submission blocked by missing fields; the form stays editable.
    Rejected(Vec<ValidationIssue>),
    /// A profile was scored.
    Scored {
        profile: StudentProfile,
        label: PlacementLabel,
    },
    /// Scaling or classification failed. Fatal for the prediction view.
    Failed(InferenceError),
}

impl PredictionPhase {
    /// True when the view must stop rendering its normal content.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Run one submission of the form.
///
/// The scaler and classifier are only touched once validation has passed.
pub fn submit(
    form: &PredictionForm,
    scaler: &dyn FeatureScaler,
    classifier: &dyn PlacementClassifier,
) -> PredictionPhase {
    let profile = match validate(form) {
        Ok(profile) => profile,
        Err(issues) => {
            tracing::debug!(issues = issues.len(), "Prediction blocked by validation");
            return PredictionPhase::Rejected(issues);
        }
    };

    let features = build_features(&profile);
    match dispatch(&features, scaler, classifier) {
        Ok(label) => {
            tracing::info!(label = label.raw(), "Placement predicted");
            PredictionPhase::Scored { profile, label }
        }
        Err(e) => {
            tracing::error!(error = %e, "Inference failed");
            PredictionPhase::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{SoftSkills, YesNo};
    use std::cell::Cell;

    /// Scaler that counts calls and passes values through unchanged.
    struct CountingScaler {
        calls: Cell<usize>,
    }

    impl FeatureScaler for CountingScaler {
        fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
            self.calls.set(self.calls.get() + 1);
            Ok(features.to_vec())
        }
    }

    /// Classifier returning a fixed label and counting calls.
    struct FixedClassifier {
        label: PlacementLabel,
        calls: Cell<usize>,
    }

    impl PlacementClassifier for FixedClassifier {
        fn predict(&self, _features: &[f64]) -> Result<PlacementLabel, InferenceError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.label)
        }
    }

    struct BrokenScaler;

    impl FeatureScaler for BrokenScaler {
        fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
            Err(InferenceError::ShapeMismatch {
                stage: "scaler",
                expected: 12,
                found: features.len(),
            })
        }
    }

    fn doubles(label: PlacementLabel) -> (CountingScaler, FixedClassifier) {
        (
            CountingScaler {
                calls: Cell::new(0),
            },
            FixedClassifier {
                label,
                calls: Cell::new(0),
            },
        )
    }

    fn complete_form() -> PredictionForm {
        PredictionForm {
            degree_percent: 85.5,
            internships: 2,
            projects: 3,
            certifications: 1,
            ssc_percent: 90.0,
            hsc_percent: 88.0,
            aptitude_score: 70.0,
            soft_skills: SoftSkills::new(8),
            extracurricular: Some(YesNo::Yes),
            training_attended: Some(YesNo::No),
        }
    }

    #[test]
    fn missing_field_never_reaches_inference() {
        let unset: [fn(&mut PredictionForm); 7] = [
            |f| f.degree_percent = 0.0,
            |f| f.ssc_percent = 0.0,
            |f| f.hsc_percent = 0.0,
            |f| f.aptitude_score = 0.0,
            |f| f.soft_skills = None,
            |f| f.extracurricular = None,
            |f| f.training_attended = None,
        ];
        for clear_field in unset {
            let (scaler, classifier) = doubles(PlacementLabel::Placed);
            let mut form = complete_form();
            clear_field(&mut form);

            let phase = submit(&form, &scaler, &classifier);
            match phase {
                PredictionPhase::Rejected(issues) => assert!(!issues.is_empty()),
                other => panic!("expected rejection, got {other:?}"),
            }
            assert_eq!(scaler.calls.get(), 0);
            assert_eq!(classifier.calls.get(), 0);
        }
    }

    #[test]
    fn counts_never_block_inference() {
        for n in [0, 1, 5, 40] {
            let (scaler, classifier) = doubles(PlacementLabel::NotPlaced);
            let form = PredictionForm {
                internships: n,
                projects: n,
                certifications: n,
                ..complete_form()
            };
            let phase = submit(&form, &scaler, &classifier);
            assert!(matches!(phase, PredictionPhase::Scored { .. }), "{phase:?}");
            assert_eq!(scaler.calls.get(), 1);
            assert_eq!(classifier.calls.get(), 1);
        }
    }

    #[test]
    fn scored_phase_carries_profile_and_label() {
        let (scaler, classifier) = doubles(PlacementLabel::Placed);
        match submit(&complete_form(), &scaler, &classifier) {
            PredictionPhase::Scored { profile, label } => {
                assert_eq!(label, PlacementLabel::Placed);
                assert_eq!(profile.hsc_percent(), 88.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn inference_failure_is_fatal() {
        let (_, classifier) = doubles(PlacementLabel::Placed);
        let phase = submit(&complete_form(), &BrokenScaler, &classifier);
        assert!(phase.is_fatal());
        assert_eq!(classifier.calls.get(), 0);
    }
}
