use super::super::FilterApp;
use super::icons;
use crate::util::safe_u32_to_f32;
use egui::{RichText, TextureId, Vec2};

/// Scale `size` to fill `available_width`, keeping its aspect ratio.
fn fit_to_width(size: [u32; 2], available_width: f32) -> Vec2 {
    let base = egui::vec2(safe_u32_to_f32(size[0]), safe_u32_to_f32(size[1]));
    if base.x <= 0.0 || base.y <= 0.0 {
        return Vec2::ZERO;
    }
    base * (available_width.max(1.0) / base.x)
}

fn image_column(ui: &mut egui::Ui, title: String, texture: TextureId, size: [u32; 2]) {
    ui.heading(title);
    let display_size = fit_to_width(size, ui.available_width());
    ui.add(egui::Image::new((texture, display_size)));
}

impl FilterApp {
    pub(crate) fn ui_central(&mut self, ui: &mut egui::Ui) {
        if let Some(err) = self.render_error.as_deref() {
            ui.add_space(12.0);
            ui.colored_label(
                ui.visuals().error_fg_color,
                format!("Could not open the uploaded file: {err}"),
            );
            ui.label("Upload a valid JPEG or PNG image to continue.");
            return;
        }

        let Some(view) = self.view.as_ref() else {
            ui.add_space(12.0);
            if self.session.upload().is_none() {
                ui.label(
                    RichText::new("Please upload an image from the sidebar to get started.")
                        .strong(),
                );
            }
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.columns(2, |columns| {
                image_column(
                    &mut columns[0],
                    format!("{} Original Image", icons::ICON_ORIGINAL),
                    view.original.id(),
                    view.original_size,
                );
                image_column(
                    &mut columns[1],
                    format!("{} {} Result", icons::ICON_RESULT, view.filter_label),
                    view.processed.id(),
                    view.processed_size,
                );
                let channels = if view.processed_channels == 1 {
                    "grayscale"
                } else {
                    "color"
                };
                columns[1].label(RichText::new(channels).small().weak());
            });
        });
    }
}
