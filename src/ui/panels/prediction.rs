// Placement Predictor - ui/panels/prediction.rs
//
// Central content of the prediction view: validation messages, the
// profile summary, and the final prediction.
//
// Artifact and inference failures are not recoverable from here. When
// either is present the view renders the failure and nothing else.

use crate::app::predict::PredictionPhase;
use crate::app::state::AppState;
use crate::core::summary::{outcome_message, profile_columns, SummaryLine};
use crate::ui::theme;

/// Render the prediction view.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    theme::page_title(ui, "\u{1f50d} Placement Prediction");

    if let Some(err) = state.artifact_error() {
        fatal(ui, "The prediction model could not be loaded.", &err.to_string());
        return;
    }

    match &state.phase {
        PredictionPhase::AwaitingInput => {
            theme::callout(
                ui,
                "Enter the student details in the sidebar, then press Predict Placement.",
                theme::INFO,
                theme::INFO_BG,
            );
        }
        PredictionPhase::Rejected(issues) => {
            theme::callout(
                ui,
                "\u{26a0} Please complete all required fields:",
                theme::ERROR,
                theme::ERROR_BG,
            );
            for issue in issues {
                ui.add_space(2.0);
                theme::callout(
                    ui,
                    format!("\u{2022} {issue}"),
                    theme::WARNING,
                    theme::WARNING_BG,
                );
            }
        }
        PredictionPhase::Scored { profile, label } => {
            ui.separator();
            ui.heading("\u{1f4c4} Student Profile Summary");
            ui.add_space(4.0);

            let (left, right) = profile_columns(profile);
            ui.columns(2, |cols| {
                summary_column(&mut cols[0], &left);
                summary_column(&mut cols[1], &right);
            });

            ui.add_space(8.0);
            ui.separator();
            ui.heading("Final Prediction");
            ui.add_space(4.0);

            let message = outcome_message(*label);
            if message.positive {
                theme::callout(ui, message.headline, theme::SUCCESS, theme::SUCCESS_BG);
                ui.add_space(4.0);
                theme::callout(ui, message.tip, theme::INFO, theme::INFO_BG);
            } else {
                theme::callout(ui, message.headline, theme::ERROR, theme::ERROR_BG);
                ui.add_space(4.0);
                theme::callout(ui, message.tip, theme::WARNING, theme::WARNING_BG);
            }
            ui.add_space(8.0);
            ui.separator();
        }
        PredictionPhase::Failed(err) => {
            fatal(ui, "Prediction failed.", &err.to_string());
        }
    }
}

fn summary_column(ui: &mut egui::Ui, lines: &[SummaryLine]) {
    for line in lines {
        theme::callout(
            ui,
            format!("{} {}: {}", line.icon, line.label, line.value),
            theme::INFO,
            theme::INFO_BG,
        );
        ui.add_space(4.0);
    }
}

fn fatal(ui: &mut egui::Ui, headline: &str, detail: &str) {
    theme::callout(ui, format!("\u{274c} {headline}"), theme::ERROR, theme::ERROR_BG);
    ui.add_space(4.0);
    ui.label(egui::RichText::new(detail).monospace());
}
