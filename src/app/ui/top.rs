use super::super::FilterApp;
use super::icons;

impl FilterApp {
    pub(crate) fn ui_top(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Use egui's built-in theme toggle so icon matches current mode.
            egui::widgets::global_theme_preference_switch(ui);
            ui.separator();

            let has_upload = self.session.upload().is_some();
            self.ui_file_menu(ui, has_upload);
            ui.separator();

            let side_label = if self.ui.side_open {
                "Hide side"
            } else {
                "Show side"
            };
            if ui
                .add(
                    egui::Button::new(format!("{} {side_label}", icons::ICON_SIDE_TOGGLE))
                        .shortcut_text("Ctrl+B"),
                )
                .on_hover_text("Toggle the filters panel (Ctrl+B)")
                .clicked()
            {
                self.ui.side_open = !self.ui.side_open;
            }

            let info_resp = ui
                .add_enabled(
                    has_upload,
                    egui::Button::new(format!("{} Image info", icons::ICON_INFO))
                        .shortcut_text("Ctrl+I"),
                )
                .on_hover_text("Show file & image details (Ctrl+I)");
            if info_resp.clicked() && has_upload {
                self.ui.info_window_open = true;
            }
        });
        ui.add_space(2.0);
        ui.heading("Image Processing App");
        ui.label("Upload an image and apply cool filters in real time!");
        ui.add_space(2.0);
    }

    fn ui_file_menu(&mut self, ui: &mut egui::Ui, has_upload: bool) {
        ui.menu_button(format!("{} File", icons::ICON_MENU), |ui| {
            if ui
                .add(egui::Button::new("Upload image…").shortcut_text("Ctrl+O"))
                .on_hover_text("Upload a JPEG or PNG (Ctrl+O). You can also drag & drop it.")
                .clicked()
            {
                self.open_upload_dialog();
                ui.close();
            }

            if ui
                .add_enabled(has_upload, egui::Button::new("Clear image"))
                .on_hover_text("Forget the current upload")
                .clicked()
            {
                self.clear_upload();
                ui.close();
            }
        });
    }
}
