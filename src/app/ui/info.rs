use super::super::FilterApp;
use crate::image::{describe_aspect_ratio, format_system_time, human_readable_bytes};
use egui::{Color32, RichText};

impl FilterApp {
    pub(crate) fn ui_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("Filter: {}", self.session.selection().label()))
                    .small()
                    .color(Color32::from_gray(180)),
            );
            if let Some(msg) = &self.ui.last_status {
                ui.separator();
                ui.label(
                    RichText::new(msg.as_str())
                        .small()
                        .color(Color32::from_gray(200)),
                );
            }
        });
    }

    pub(crate) fn ui_upload_info_window(&mut self, ctx: &egui::Context) {
        if !self.ui.info_window_open {
            return;
        }

        egui::Window::new("Image info")
            .open(&mut self.ui.info_window_open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                let Some(upload) = self.session.upload() else {
                    ui.label("Upload an image to inspect its metadata.");
                    return;
                };
                let meta = upload.meta();
                ui.heading("File");
                ui.label(format!("Source: {}", meta.source_label()));
                ui.label(format!("Name: {}", meta.display_name()));
                if let Some(path) = meta.path() {
                    ui.label(format!("Path: {}", path.display()));
                }
                let bytes = meta.byte_len();
                ui.label(format!(
                    "Size: {} ({bytes} bytes)",
                    human_readable_bytes(bytes),
                ));
                if let Some(modified) = meta.last_modified() {
                    ui.label(format!("Modified: {}", format_system_time(modified)));
                } else {
                    ui.label("Modified: Unknown");
                }

                ui.add_space(6.0);
                ui.heading("Image");
                let Some(view) = self.view.as_ref() else {
                    ui.label("Not decoded.");
                    return;
                };
                let [w, h] = view.original_size;
                ui.label(format!("Dimensions: {w} × {h} px"));
                if let Some(aspect_text) = describe_aspect_ratio(w, h) {
                    ui.label(format!("Aspect ratio: {aspect_text}"));
                } else {
                    ui.label("Aspect ratio: n/a");
                }
                let total_pixels = u64::from(w) * u64::from(h);
                ui.label(format!(
                    "Pixels: {total_pixels} ({:.2} MP)",
                    total_pixels as f64 / 1_000_000.0
                ));
            });
    }
}
