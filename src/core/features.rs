// Placement Predictor - core/features.rs
//
// Feature vector assembly. The column order is the order the scaler and
// model were fit on; reordering silently corrupts predictions.

use crate::core::model::StudentProfile;
use crate::util::constants::FEATURE_COUNT;

/// Column names in model input order.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "degree_percent",
    "internships",
    "projects",
    "certifications",
    "aptitude_score",
    "soft_skills",
    "extracurricular",
    "training_attended",
    "ssc_percent",
    "hsc_percent",
];

/// Fixed-order numeric model input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Value for a named column, if the name exists.
    pub fn get(&self, column: &str) -> Option<f64> {
        FEATURE_COLUMNS
            .iter()
            .position(|c| *c == column)
            .map(|i| self.0[i])
    }
}

impl From<FeatureVector> for [f64; FEATURE_COUNT] {
    fn from(v: FeatureVector) -> Self {
        v.0
    }
}

/// Build the model input for a validated profile.
pub fn build_features(profile: &StudentProfile) -> FeatureVector {
    FeatureVector([
        profile.degree_percent,
        f64::from(profile.internships),
        f64::from(profile.projects),
        f64::from(profile.certifications),
        profile.aptitude_score,
        f64::from(profile.soft_skills.get()),
        profile.extracurricular.as_flag(),
        profile.training_attended.as_flag(),
        profile.ssc_percent,
        profile.hsc_percent,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{PredictionForm, SoftSkills, YesNo};
    use crate::core::validate::validate;

    #[test]
    fn reference_profile_builds_exact_vector() {
        let form = PredictionForm {
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
        };
        let profile = validate(&form).expect("valid");
        let vector: [f64; FEATURE_COUNT] = build_features(&profile).into();
        assert_eq!(
            vector,
            [85.5, 2.0, 3.0, 1.0, 70.0, 8.0, 1.0, 0.0, 90.0, 88.0]
        );
    }

    #[test]
    fn named_columns_follow_profile_fields() {
        let form = PredictionForm {
            degree_percent: 60.0,
            internships: 4,
            projects: 0,
            certifications: 7,
            aptitude_score: 55.0,
            soft_skills: SoftSkills::new(3),
            extracurricular: Some(YesNo::No),
            training_attended: Some(YesNo::Yes),
            ssc_percent: 71.2,
            hsc_percent: 64.9,
        };
        let features = build_features(&validate(&form).expect("valid"));
        assert_eq!(features.get("certifications"), Some(7.0));
        assert_eq!(features.get("training_attended"), Some(1.0));
        assert_eq!(features.get("extracurricular"), Some(0.0));
        assert_eq!(features.get("ssc_percent"), Some(71.2));
        assert_eq!(features.get("hsc_percent"), Some(64.9));
        assert_eq!(features.get("gpa"), None);
    }
}
