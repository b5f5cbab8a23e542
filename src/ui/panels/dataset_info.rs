// Placement Predictor - ui/panels/dataset_info.rs
//
// Dataset information view: static description in a collapsible section.

use crate::ui::theme;

const DATASET_FEATURES: &[&str] = &[
    "Degree Percentage",
    "Internships",
    "Projects",
    "Soft Skills",
    "Aptitude Score",
    "Extracurricular Activities",
    "Training",
    "SSC & HSC Percentage",
];

/// Render the dataset information view.
pub fn render(ui: &mut egui::Ui) {
    theme::page_title(ui, "\u{1f4d8} Dataset Information");

    egui::CollapsingHeader::new("\u{1f4ca} About the Dataset")
        .default_open(false)
        .show(ui, |ui| {
            ui.label(
                "The Placement Dataset contains information about students' academic \
                 performance, skills, internships, workshops, and other factors that \
                 influence placement.",
            );
            ui.add_space(6.0);
            ui.label(egui::RichText::new("Dataset Features").italics().strong());
            for feature in DATASET_FEATURES {
                ui.label(format!("\u{2022} {feature}"));
            }
            ui.add_space(6.0);
            ui.label("This data is used to predict whether a student will be placed.");
        });
}
