// Placement Predictor - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and owns the GPU texture for the home image.

use crate::app::state::{AppState, View};
use crate::ui;

/// The Placement Predictor application.
pub struct PlacementApp {
    pub state: AppState,
    home_texture: Option<egui::TextureHandle>,
}

impl PlacementApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            home_texture: None,
        }
    }

    /// Upload the decoded home image once; later frames reuse the handle.
    fn home_texture(&mut self, ctx: &egui::Context) -> Option<&egui::TextureHandle> {
        if self.home_texture.is_none() {
            if let Ok(img) = &self.state.home_image {
                let colour_image = egui::ColorImage::from_rgba_unmultiplied(
                    [img.width as usize, img.height as usize],
                    &img.rgba,
                );
                self.home_texture = Some(ctx.load_texture(
                    "home_image",
                    colour_image,
                    egui::TextureOptions::LINEAR,
                ));
            }
        }
        self.home_texture.as_ref()
    }

    fn reload_artifacts(&mut self) {
        let config = &self.state.config;
        let result =
            crate::platform::artifacts::load_artifacts(&config.model_path, &config.scaler_path);
        if let Err(ref e) = result {
            tracing::error!(error = %e, "Artifact reload failed");
        }
        self.state.set_artifacts(result);
    }
}

impl eframe::App for PlacementApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Handle flags raised by panels on the previous frame ----
        self.state.process_requests();
        if std::mem::take(&mut self.state.request_reload) {
            self.reload_artifacts();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Reload Artifacts").clicked() {
                        self.state.request_reload = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(&self.state.status_message);
                    if !self.state.warnings.is_empty() {
                        ui.separator();
                        ui.colored_label(
                            ui::theme::WARNING,
                            format!("{} config warning(s)", self.state.warnings.len()),
                        )
                        .on_hover_text(self.state.warnings.join("\n"));
                    }
                    if self.state.debug_mode {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(egui::RichText::new("DEBUG").weak());
                        });
                    }
                });
            });

        // Left sidebar: navigation, then the form when predicting.
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("sidebar_scroll")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui::panels::navigation::render(ui, &mut self.state);
                        if self.state.view == View::Prediction {
                            ui.separator();
                            ui::panels::student_form::render(ui, &mut self.state);
                        }
                    });
            });

        // Central panel (active view)
        let view = self.state.view;
        let texture = match view {
            View::Home => self.home_texture(ctx).cloned(),
            _ => None,
        };
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("central_scroll")
                .show(ui, |ui| match view {
                    View::Home => ui::panels::home::render(ui, &self.state, texture.as_ref()),
                    View::Prediction => ui::panels::prediction::render(ui, &self.state),
                    View::DatasetInfo => ui::panels::dataset_info::render(ui),
                });
        });

        ui::panels::about::render(ctx, &mut self.state);

        // Buttons only set flags; make sure the next frame runs to act on them.
        if self.state.request_clear || self.state.request_predict || self.state.request_reload {
            ctx.request_repaint();
        }
    }
}
