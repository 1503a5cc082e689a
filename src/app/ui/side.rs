//! Side panel UI: upload, filter selection and per-filter settings.

use super::super::FilterApp;
use super::icons;
use crate::filters::{EdgeThresholds, FilterKind, KernelSize};
use egui::RichText;

impl FilterApp {
    pub(crate) fn ui_side_filters(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.heading(format!("{} Filters & Settings", icons::ICON_FILTERS));
        ui.add_space(6.0);

        if ui
            .button(format!("{} Upload an image…", icons::ICON_UPLOAD))
            .on_hover_text("JPEG or PNG (Ctrl+O). You can also drag & drop it into the window.")
            .clicked()
        {
            self.open_upload_dialog();
        }
        if let Some(upload) = self.session.upload() {
            ui.label(RichText::new(upload.meta().display_name()).small().weak());
        }

        ui.separator();
        ui.label("Choose a Filter:");
        let mut selection = self.session.selection();
        for kind in FilterKind::ALL {
            ui.radio_value(&mut selection, kind, kind.label());
        }
        if selection != self.session.selection() {
            self.session.select(selection);
            self.mark_dirty();
        }
        let output = if selection.output_channels() == 1 {
            "Produces a grayscale image."
        } else {
            "Keeps the image in color."
        };
        ui.label(RichText::new(output).small().weak());

        ui.add_space(6.0);
        self.ui_filter_settings(ui);
    }

    fn ui_filter_settings(&mut self, ui: &mut egui::Ui) {
        let kind = self.session.selection();
        let Some(title) = kind.settings_title() else {
            return;
        };

        let mut changed = false;
        let settings = self.session.settings_mut();
        egui::CollapsingHeader::new(format!("{} {title}", icons::ICON_SETTINGS))
            .id_salt(kind.label())
            .show(ui, |ui| {
                ui.spacing_mut().slider_width = 150.0;
                match kind {
                    FilterKind::CannyEdge => {
                        changed |= ui
                            .add(
                                egui::Slider::new(&mut settings.edge.low, EdgeThresholds::LOW_RANGE)
                                    .text("Min Threshold"),
                            )
                            .changed();
                        changed |= ui
                            .add(
                                egui::Slider::new(
                                    &mut settings.edge.high,
                                    EdgeThresholds::HIGH_RANGE,
                                )
                                .text("Max Threshold"),
                            )
                            .changed();
                    }
                    FilterKind::Blur => {
                        let mut k = settings.blur.get();
                        let resp = ui.add(
                            egui::Slider::new(&mut k, KernelSize::MIN..=KernelSize::MAX)
                                .step_by(2.0)
                                .text("Kernel Size"),
                        );
                        if resp.changed() {
                            // The slider step alone does not guarantee an odd value.
                            settings.blur = KernelSize::new(k);
                            changed = true;
                        }
                    }
                    FilterKind::Grayscale
                    | FilterKind::Sepia
                    | FilterKind::Invert
                    | FilterKind::Sketch => {}
                }
            });

        if changed {
            self.mark_dirty();
        }
    }
}
