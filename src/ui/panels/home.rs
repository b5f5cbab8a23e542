// Placement Predictor - ui/panels/home.rs
//
// Home view: static welcome content and the banner image.
// A missing or undecodable image is reported here and only here.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::HOME_IMAGE_MAX_WIDTH;

/// Render the home view. `texture` is the uploaded banner, if it loaded.
pub fn render(ui: &mut egui::Ui, state: &AppState, texture: Option<&egui::TextureHandle>) {
    theme::page_title(ui, "\u{1f3e0} Welcome to Placement Prediction System");

    match (&state.home_image, texture) {
        (Ok(_), Some(texture)) => {
            let sized = egui::load::SizedTexture::from_handle(texture);
            ui.vertical_centered(|ui| {
                ui.add(egui::Image::new(sized).max_width(HOME_IMAGE_MAX_WIDTH));
            });
        }
        (Err(e), _) => {
            theme::callout(ui, format!("\u{26a0} {e}"), theme::ERROR, theme::ERROR_BG);
        }
        (Ok(_), None) => {}
    }

    ui.add_space(12.0);
    ui.heading("\u{1f31f} What This App Does");
    ui.label("\u{2022} Predicts whether a student will be placed");
    ui.label("\u{2022} Uses Machine Learning");
    ui.label("\u{2022} Displays dataset information");

    ui.add_space(8.0);
    ui.separator();
    theme::callout(
        ui,
        "\u{27a1} Select Prediction from the sidebar to test the ML model.",
        theme::INFO,
        theme::INFO_BG,
    );
}
