// Placement Predictor - ui/theme.rs
//
// Colour scheme, outcome colour mapping, and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Page heading colour (indigo).
pub const HEADING: Color32 = Color32::from_rgb(75, 0, 130);

/// Heading colour on a dark background, where indigo is unreadable.
pub const HEADING_DARK: Color32 = Color32::from_rgb(196, 181, 253); // Violet 300

/// Positive outcome banner.
pub const SUCCESS: Color32 = Color32::from_rgb(21, 128, 61); // Green 700
pub const SUCCESS_BG: Color32 = Color32::from_rgba_premultiplied(34, 197, 94, 30);

/// Negative outcome / error banner.
pub const ERROR: Color32 = Color32::from_rgb(185, 28, 28); // Red 800
pub const ERROR_BG: Color32 = Color32::from_rgba_premultiplied(220, 38, 38, 25);

/// Validation warnings and tips.
pub const WARNING: Color32 = Color32::from_rgb(180, 83, 9); // Amber 700
pub const WARNING_BG: Color32 = Color32::from_rgba_premultiplied(217, 119, 6, 20);

/// Informational callouts (summary lines, hints).
pub const INFO: Color32 = Color32::from_rgb(29, 78, 216); // Blue 700
pub const INFO_BG: Color32 = Color32::from_rgba_premultiplied(59, 130, 246, 20);

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 280.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
pub const PAGE_TITLE_SIZE: f32 = 30.0;

/// Heading colour for the active visuals.
pub fn heading_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        HEADING_DARK
    } else {
        HEADING
    }
}

/// Draw a full-width tinted callout box, the building block for the
/// info/success/warning/error messages on every page.
pub fn callout(ui: &mut egui::Ui, text: impl Into<String>, fg: Color32, bg: Color32) {
    egui::Frame::new()
        .fill(bg)
        .corner_radius(egui::CornerRadius::same(4))
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(text.into()).color(fg));
        });
}

/// Centred page title.
pub fn page_title(ui: &mut egui::Ui, text: &str) {
    let colour = heading_colour(ui.visuals().dark_mode);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(PAGE_TITLE_SIZE)
                .strong()
                .color(colour),
        );
    });
    ui.add_space(8.0);
}
