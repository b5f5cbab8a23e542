// Placement Predictor - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Selections
// =============================================================================

/// Soft-skills self rating, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SoftSkills(u8);

impl SoftSkills {
    /// Build a rating, rejecting values outside `1..=10`.
    pub fn new(value: u8) -> Option<Self> {
        (constants::MIN_SOFT_SKILLS..=constants::MAX_SOFT_SKILLS)
            .contains(&value)
            .then_some(Self(value))
    }

    /// The rating as a plain integer.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Every valid rating in ascending order (drives the selection list).
    pub fn all() -> impl Iterator<Item = SoftSkills> {
        (constants::MIN_SOFT_SKILLS..=constants::MAX_SOFT_SKILLS).map(SoftSkills)
    }
}

impl TryFrom<u8> for SoftSkills {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!(
                "soft skills rating {value} is outside {}..={}",
                constants::MIN_SOFT_SKILLS,
                constants::MAX_SOFT_SKILLS
            )
        })
    }
}

impl From<SoftSkills> for u8 {
    fn from(s: SoftSkills) -> Self {
        s.0
    }
}

impl fmt::Display for SoftSkills {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A yes/no answer to a required question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Both answers in display order.
    pub fn all() -> &'static [YesNo] {
        &[YesNo::Yes, YesNo::No]
    }

    /// Encoded model input: 1.0 for yes, 0.0 for no.
    pub fn as_flag(self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::No => 0.0,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Form and profile
// =============================================================================

/// Raw prediction form values as currently entered by the user.
///
/// The default value is the "unset" state: every number is zero and every
/// selection is `None`. Nothing here is validated; see
/// [`crate::core::validate::validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionForm {
    pub degree_percent: f64,
    pub internships: u32,
    pub projects: u32,
    pub certifications: u32,
    pub ssc_percent: f64,
    pub hsc_percent: f64,
    pub aptitude_score: f64,
    pub soft_skills: Option<SoftSkills>,
    pub extracurricular: Option<YesNo>,
    pub training_attended: Option<YesNo>,
}

impl PredictionForm {
    /// Reset every field to its unset sentinel.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A fully validated student profile.
///
/// Only the validator constructs these, so holding one proves every
/// required field was entered.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfile {
    pub(crate) degree_percent: f64,
    pub(crate) internships: u32,
    pub(crate) projects: u32,
    pub(crate) certifications: u32,
    pub(crate) ssc_percent: f64,
    pub(crate) hsc_percent: f64,
    pub(crate) aptitude_score: f64,
    pub(crate) soft_skills: SoftSkills,
    pub(crate) extracurricular: YesNo,
    pub(crate) training_attended: YesNo,
}

impl StudentProfile {
    pub fn degree_percent(&self) -> f64 {
        self.degree_percent
    }

    pub fn internships(&self) -> u32 {
        self.internships
    }

    pub fn projects(&self) -> u32 {
        self.projects
    }

    pub fn certifications(&self) -> u32 {
        self.certifications
    }

    pub fn ssc_percent(&self) -> f64 {
        self.ssc_percent
    }

    pub fn hsc_percent(&self) -> f64 {
        self.hsc_percent
    }

    pub fn aptitude_score(&self) -> f64 {
        self.aptitude_score
    }

    pub fn soft_skills(&self) -> SoftSkills {
        self.soft_skills
    }

    pub fn extracurricular(&self) -> YesNo {
        self.extracurricular
    }

    pub fn training_attended(&self) -> YesNo {
        self.training_attended
    }
}

// =============================================================================
// Prediction outcome
// =============================================================================

/// Binary placement prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementLabel {
    /// Raw label 1.
    Placed,
    /// Raw label 0.
    NotPlaced,
}

impl PlacementLabel {
    /// Map a raw classifier label; anything other than 0 or 1 is undefined.
    pub fn from_raw(label: i64) -> Option<Self> {
        match label {
            1 => Some(Self::Placed),
            0 => Some(Self::NotPlaced),
            _ => None,
        }
    }

    /// The raw label the classifier was trained with.
    pub fn raw(self) -> i64 {
        match self {
            Self::Placed => 1,
            Self::NotPlaced => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_skills_rejects_out_of_range() {
        assert!(SoftSkills::new(0).is_none());
        assert!(SoftSkills::new(11).is_none());
        assert_eq!(SoftSkills::new(1).map(SoftSkills::get), Some(1));
        assert_eq!(SoftSkills::new(10).map(SoftSkills::get), Some(10));
        assert_eq!(SoftSkills::all().count(), 10);
    }

    #[test]
    fn yes_no_flags() {
        assert_eq!(YesNo::Yes.as_flag(), 1.0);
        assert_eq!(YesNo::No.as_flag(), 0.0);
    }

    #[test]
    fn label_mapping_has_exactly_two_outcomes() {
        assert_eq!(PlacementLabel::from_raw(1), Some(PlacementLabel::Placed));
        assert_eq!(PlacementLabel::from_raw(0), Some(PlacementLabel::NotPlaced));
        assert_eq!(PlacementLabel::from_raw(2), None);
        assert_eq!(PlacementLabel::from_raw(-1), None);
    }

    #[test]
    fn cleared_form_is_all_sentinels() {
        let mut form = PredictionForm {
            degree_percent: 80.0,
            internships: 2,
            soft_skills: SoftSkills::new(5),
            extracurricular: Some(YesNo::Yes),
            ..Default::default()
        };
        form.clear();
        assert_eq!(form, PredictionForm::default());
        assert_eq!(form.degree_percent, 0.0);
        assert!(form.soft_skills.is_none());
    }
}
