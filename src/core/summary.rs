// Placement Predictor - core/summary.rs
//
// Presentation text for a scored profile: the two-column input summary
// and the outcome message. No UI types; the prediction panel lays these out.

use crate::core::model::{PlacementLabel, StudentProfile};

/// One read-only line of the profile summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl SummaryLine {
    fn new(icon: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            icon,
            label,
            value: value.into(),
        }
    }
}

/// Shortest round-trip form that always keeps a fractional part, so a
/// whole percentage reads `90.0` rather than `90`.
fn decimal(value: f64) -> String {
    format!("{value:?}")
}

/// Left and right summary columns, in display order.
pub fn profile_columns(profile: &StudentProfile) -> (Vec<SummaryLine>, Vec<SummaryLine>) {
    let left = vec![
        SummaryLine::new("\u{1f393}", "Degree %", decimal(profile.degree_percent())),
        SummaryLine::new("\u{1f4da}", "Internships", profile.internships().to_string()),
        SummaryLine::new("\u{1f6e0}", "Projects", profile.projects().to_string()),
        SummaryLine::new("\u{1f4dc}", "Certifications", profile.certifications().to_string()),
        SummaryLine::new("\u{1f4ca}", "10th %", decimal(profile.ssc_percent())),
    ];
    let right = vec![
        SummaryLine::new("\u{1f9e0}", "Aptitude Score", decimal(profile.aptitude_score())),
        SummaryLine::new(
            "\u{1f5e3}",
            "Soft Skills",
            format!("{}/10", decimal(f64::from(profile.soft_skills().get()))),
        ),
        SummaryLine::new("\u{1f3af}", "Training", profile.training_attended().label()),
        SummaryLine::new("\u{1f3a8}", "Extracurricular", profile.extracurricular().label()),
        SummaryLine::new("\u{1f4ca}", "12th %", decimal(profile.hsc_percent())),
    ];
    (left, right)
}

/// Headline and advice for a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeMessage {
    pub positive: bool,
    pub headline: &'static str,
    pub tip: &'static str,
}

/// The message shown for each of the two possible labels.
pub fn outcome_message(label: PlacementLabel) -> OutcomeMessage {
    match label {
        PlacementLabel::Placed => OutcomeMessage {
            positive: true,
            headline: "\u{1f389} The student is LIKELY to be placed!",
            tip: "\u{1f4a1} Tip: Keep improving technical + communication skills. Great potential!",
        },
        PlacementLabel::NotPlaced => OutcomeMessage {
            positive: false,
            headline: "\u{274c} The student is NOT likely to be placed.",
            tip: "\u{1f4a1} Tip: Focus on projects, aptitude and certifications to improve chances.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{PredictionForm, SoftSkills, YesNo};
    use crate::core::validate::validate;

    #[test]
    fn columns_cover_all_ten_inputs() {
        let form = PredictionForm {
            degree_percent: 72.5,
            internships: 1,
            projects: 4,
            certifications: 2,
            ssc_percent: 81.0,
            hsc_percent: 77.3,
            aptitude_score: 66.0,
            soft_skills: SoftSkills::new(6),
            extracurricular: Some(YesNo::No),
            training_attended: Some(YesNo::Yes),
        };
        let (left, right) = profile_columns(&validate(&form).expect("valid"));
        assert_eq!(left.len() + right.len(), 10);
        assert_eq!(left[0].value, "72.5");
        assert_eq!(left[1].value, "1");
        assert_eq!(left[4].label, "10th %");
        assert_eq!(left[4].value, "81.0");
        assert_eq!(right[0].value, "66.0");
        assert_eq!(right[1].value, "6.0/10");
        assert_eq!(right[2].value, "Yes");
        assert_eq!(right[3].value, "No");
        assert_eq!(right[4].value, "77.3");
    }

    #[test]
    fn each_label_has_its_own_message() {
        let placed = outcome_message(PlacementLabel::Placed);
        let not_placed = outcome_message(PlacementLabel::NotPlaced);
        assert!(placed.positive);
        assert!(placed.headline.contains("LIKELY to be placed"));
        assert!(!not_placed.positive);
        assert!(not_placed.headline.contains("NOT likely"));
        assert_ne!(placed.tip, not_placed.tip);
    }
}
