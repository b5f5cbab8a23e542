// Placement Predictor - core/validate.rs
//
// Turns raw form values into a StudentProfile, or the full list of
// reasons why it cannot be scored yet. Pure function; every rule is
// checked so the user sees all missing fields at once.
//
// Zero means "not entered" for the four percentage/score fields even
// though 0 is a legal value. Internships, projects and certifications
// are never flagged. Both behaviours are deliberate carry-overs and are
// tracked as an open product question in DESIGN.md.

use crate::core::model::{PredictionForm, StudentProfile};
use std::fmt;

/// One reason a form cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationIssue {
    DegreeMissing,
    SscMissing,
    HscMissing,
    AptitudeMissing,
    SoftSkillsUnselected,
    ExtracurricularUnselected,
    TrainingUnselected,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::DegreeMissing => "Degree Percentage must be greater than 0",
            Self::SscMissing => "10th Percentage must be greater than 0",
            Self::HscMissing => "12th Percentage must be greater than 0",
            Self::AptitudeMissing => "Aptitude Score must be greater than 0",
            Self::SoftSkillsUnselected => "Please select Soft Skills",
            Self::ExtracurricularUnselected => "Please select Extracurricular",
            Self::TrainingUnselected => "Please select Training Attended",
        };
        f.write_str(msg)
    }
}

/// `true` when a percentage/score counts as entered.
///
/// NaN and negatives fail as well as the zero sentinel.
fn entered(value: f64) -> bool {
    value > 0.0
}

/// Validate the form, collecting every issue in display order.
pub fn validate(form: &PredictionForm) -> Result<StudentProfile, Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if !entered(form.degree_percent) {
        issues.push(ValidationIssue::DegreeMissing);
    }
    if !entered(form.ssc_percent) {
        issues.push(ValidationIssue::SscMissing);
    }
    if !entered(form.hsc_percent) {
        issues.push(ValidationIssue::HscMissing);
    }
    if !entered(form.aptitude_score) {
        issues.push(ValidationIssue::AptitudeMissing);
    }
    if form.soft_skills.is_none() {
        issues.push(ValidationIssue::SoftSkillsUnselected);
    }
    if form.extracurricular.is_none() {
        issues.push(ValidationIssue::ExtracurricularUnselected);
    }
    if form.training_attended.is_none() {
        issues.push(ValidationIssue::TrainingUnselected);
    }

    match (form.soft_skills, form.extracurricular, form.training_attended) {
        (Some(soft_skills), Some(extracurricular), Some(training_attended))
            if issues.is_empty() =>
        {
            Ok(StudentProfile {
                degree_percent: form.degree_percent,
                internships: form.internships,
                projects: form.projects,
                certifications: form.certifications,
                ssc_percent: form.ssc_percent,
                hsc_percent: form.hsc_percent,
                aptitude_score: form.aptitude_score,
                soft_skills,
                extracurricular,
                training_attended,
            })
        }
        _ => Err(issues),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{SoftSkills, YesNo};

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
    fn complete_form_is_valid() {
        let profile = validate(&complete_form()).expect("valid");
        assert_eq!(profile.degree_percent(), 85.5);
        assert_eq!(profile.soft_skills().get(), 8);
        assert_eq!(profile.training_attended(), YesNo::No);
    }

    #[test]
    fn empty_form_reports_all_seven_issues_in_order() {
        let issues = validate(&PredictionForm::default()).unwrap_err();
        assert_eq!(
            issues,
            vec![
                ValidationIssue::DegreeMissing,
                ValidationIssue::SscMissing,
                ValidationIssue::HscMissing,
                ValidationIssue::AptitudeMissing,
                ValidationIssue::SoftSkillsUnselected,
                ValidationIssue::ExtracurricularUnselected,
                ValidationIssue::TrainingUnselected,
            ]
        );
    }

    #[test]
    fn each_required_field_blocks_on_its_own() {
        let unset: [(fn(&mut PredictionForm), ValidationIssue); 7] = [
            (|f| f.degree_percent = 0.0, ValidationIssue::DegreeMissing),
            (|f| f.ssc_percent = 0.0, ValidationIssue::SscMissing),
            (|f| f.hsc_percent = 0.0, ValidationIssue::HscMissing),
            (|f| f.aptitude_score = 0.0, ValidationIssue::AptitudeMissing),
            (|f| f.soft_skills = None, ValidationIssue::SoftSkillsUnselected),
            (
                |f| f.extracurricular = None,
                ValidationIssue::ExtracurricularUnselected,
            ),
            (
                |f| f.training_attended = None,
                ValidationIssue::TrainingUnselected,
            ),
        ];

        for (clear_field, expected) in unset {
            let mut form = complete_form();
            clear_field(&mut form);
            assert_eq!(validate(&form).unwrap_err(), vec![expected]);
        }
    }

    #[test]
    fn zero_counts_never_block() {
        let mut form = complete_form();
        form.internships = 0;
        form.projects = 0;
        form.certifications = 0;
        let profile = validate(&form).expect("zero counts are accepted");
        assert_eq!(profile.internships(), 0);
        assert_eq!(profile.projects(), 0);
        assert_eq!(profile.certifications(), 0);
    }

    #[test]
    fn negative_and_nan_percentages_count_as_missing() {
        let mut form = complete_form();
        form.degree_percent = -5.0;
        form.aptitude_score = f64::NAN;
        assert_eq!(
            validate(&form).unwrap_err(),
            vec![
                ValidationIssue::DegreeMissing,
                ValidationIssue::AptitudeMissing
            ]
        );
    }

    #[test]
    fn validation_is_repeatable() {
        let form = PredictionForm {
            hsc_percent: 60.0,
            extracurricular: Some(YesNo::No),
            ..Default::default()
        };
        assert_eq!(validate(&form), validate(&form));
        let valid = complete_form();
        assert_eq!(validate(&valid), validate(&valid));
    }

    #[test]
    fn messages_match_form_labels() {
        assert_eq!(
            ValidationIssue::SscMissing.to_string(),
            "10th Percentage must be greater than 0"
        );
        assert_eq!(
            ValidationIssue::TrainingUnselected.to_string(),
            "Please select Training Attended"
        );
    }
}
