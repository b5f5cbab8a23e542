// Placement Predictor - ui/panels/mod.rs

pub mod about;
pub mod dataset_info;
pub mod home;
pub mod navigation;
pub mod prediction;
pub mod student_form;
