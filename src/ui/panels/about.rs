// Placement Predictor - ui/panels/about.rs
//
// About dialog: shown from Help > About.
// Rendered as a centred, non-resizable, non-collapsible window.

use crate::app::state::AppState;
use crate::util::constants::APP_VERSION;

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new("About Placement Predictor")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("\u{1f393}  Placement Predictor")
                        .size(26.0)
                        .strong(),
                );
                ui.add_space(4.0);
                ui.label(egui::RichText::new(format!("v{APP_VERSION}")).size(14.0).weak());
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label("Predicts student placement from academic and skill inputs");
                ui.label("using a pre-fit scaler and classifier.");
            });

            ui.add_space(8.0);
            ui.separator();

            egui::Grid::new("about_artifacts")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Model:");
                    ui.label(state.config.model_path.display().to_string());
                    ui.end_row();

                    ui.label("Scaler:");
                    ui.label(state.config.scaler_path.display().to_string());
                    ui.end_row();

                    if let Ok(artifacts) = &state.artifacts {
                        ui.label("Model type:");
                        ui.label(artifacts.classifier.model_type());
                        ui.end_row();
                    }
                });

            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
            });
            ui.add_space(8.0);
        });

    if !open {
        state.show_about = false;
    }
}
