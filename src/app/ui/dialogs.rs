use super::super::FilterApp;
use egui_file_dialog::FileDialog;
use std::path::Path;

impl FilterApp {
    pub(crate) fn open_upload_dialog(&mut self) {
        let mut dialog = Self::make_upload_dialog(self.last_image_dir.as_deref());
        dialog.pick_file();
        self.upload_dialog = Some(dialog);
    }

    fn make_upload_dialog(initial_dir: Option<&Path>) -> FileDialog {
        // Keep in sync with enabled `image` crate features.
        let mut dialog = FileDialog::new()
            .title("Upload an image")
            .add_file_filter_extensions("JPEG or PNG", vec!["jpg", "jpeg", "png"])
            .add_file_filter_extensions("PNG", vec!["png"])
            .add_file_filter_extensions("JPEG/JPG", vec!["jpg", "jpeg"])
            .default_file_filter("JPEG or PNG");
        if let Some(dir) = initial_dir {
            dialog = dialog.initial_directory(dir.to_path_buf());
        }
        dialog
    }
}
