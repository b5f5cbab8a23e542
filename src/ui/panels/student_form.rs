// Placement Predictor - ui/panels/student_form.rs
//
// Sidebar input form for the prediction view: ten fields plus the
// Clear and Predict buttons. Buttons only raise request flags; the
// shell consumes them at the start of the next frame.

use crate::app::state::AppState;
use crate::core::model::{SoftSkills, YesNo};
use crate::util::constants::{APTITUDE_STEP, MAX_PERCENT, PERCENT_STEP};

const PLACEHOLDER: &str = "- Select -";

/// Render the student detail inputs.
///
/// Nothing is drawn until the artifacts are usable. A failed prediction
/// keeps the form so Clear can bring the view back.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if !state.form_available() {
        return;
    }

    ui.heading("\u{1f9fe} Enter Student Details");
    ui.add_space(4.0);

    let form = &mut state.form;
    egui::Grid::new("student_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            percent_row(ui, "Degree Percentage", &mut form.degree_percent, PERCENT_STEP);
            count_row(ui, "Internships", &mut form.internships);
            count_row(ui, "Projects", &mut form.projects);
            count_row(ui, "Certifications", &mut form.certifications);
            percent_row(ui, "10th Percentage", &mut form.ssc_percent, PERCENT_STEP);
            percent_row(ui, "12th Percentage", &mut form.hsc_percent, PERCENT_STEP);
            percent_row(ui, "Aptitude Score", &mut form.aptitude_score, APTITUDE_STEP);

            ui.label("Soft Skills (1\u{2013}10)");
            egui::ComboBox::from_id_salt("soft_skills")
                .selected_text(
                    form.soft_skills
                        .map_or_else(|| PLACEHOLDER.to_string(), |s| s.to_string()),
                )
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut form.soft_skills, None, PLACEHOLDER);
                    for rating in SoftSkills::all() {
                        ui.selectable_value(&mut form.soft_skills, Some(rating), rating.to_string());
                    }
                });
            ui.end_row();

            yes_no_row(ui, "Extracurricular", "extracurricular", &mut form.extracurricular);
            yes_no_row(ui, "Training Attended", "training", &mut form.training_attended);
        });

    ui.add_space(6.0);
    ui.separator();

    if ui.button("\u{1f9f9} Clear All Inputs").clicked() {
        state.request_clear = true;
    }
    if ui.button("\u{1f50d} Predict Placement").clicked() {
        state.request_predict = true;
    }
}

fn percent_row(ui: &mut egui::Ui, label: &str, value: &mut f64, step: f64) {
    ui.label(label);
    ui.add(
        egui::DragValue::new(value)
            .range(0.0..=MAX_PERCENT)
            .speed(step)
            .fixed_decimals(if step < 1.0 { 1 } else { 0 }),
    );
    ui.end_row();
}

fn count_row(ui: &mut egui::Ui, label: &str, value: &mut u32) {
    ui.label(label);
    ui.add(egui::DragValue::new(value).range(0..=u32::MAX).speed(1.0));
    ui.end_row();
}

fn yes_no_row(ui: &mut egui::Ui, label: &str, id: &str, value: &mut Option<YesNo>) {
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(value.map_or(PLACEHOLDER, YesNo::label))
        .show_ui(ui, |ui| {
            ui.selectable_value(value, None, PLACEHOLDER);
            for answer in YesNo::all() {
                ui.selectable_value(value, Some(*answer), answer.label());
            }
        });
    ui.end_row();
}
