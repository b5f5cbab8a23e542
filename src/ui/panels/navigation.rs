// Placement Predictor - ui/panels/navigation.rs
//
// Sidebar navigation: a radio group selecting one of the three views.

use crate::app::state::{AppState, View};

/// Render the navigation section of the sidebar.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("\u{1f4cc} Navigation");
    ui.label("Go to:");
    for view in View::all() {
        if ui
            .radio_value(&mut state.view, *view, view.label())
            .changed()
        {
            tracing::debug!(view = ?view, "View selected");
        }
    }
}
