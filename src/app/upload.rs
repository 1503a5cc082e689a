use super::FilterApp;
use crate::image::{UploadMeta, read_upload_bytes};
use crate::session::Upload;
use egui::Context;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info, warn};

impl FilterApp {
    pub(crate) fn upload_from_path(&mut self, path: PathBuf) {
        self.remember_image_dir_from_path(&path);
        match read_upload_bytes(&path) {
            Ok(bytes) => {
                let meta = UploadMeta::from_path(&path, bytes.len());
                self.accept_upload(Upload::new(bytes, meta));
            }
            Err(err) => {
                warn!("{err:#}");
                self.set_status(format!("Upload failed: {err:#}"));
            }
        }
    }

    pub(crate) fn upload_from_bytes(
        &mut self,
        name: Option<String>,
        bytes: Vec<u8>,
        last_modified: Option<SystemTime>,
    ) {
        let meta = UploadMeta::from_dropped_bytes(name.as_deref(), bytes.len(), last_modified);
        self.accept_upload(Upload::new(bytes, meta));
    }

    fn accept_upload(&mut self, upload: Upload) {
        let name = upload.meta().display_name();
        info!(name = %name, bytes = upload.meta().byte_len(), "Upload received");
        self.session.set_upload(upload);
        self.set_status(format!("Loaded {name}"));
        self.mark_dirty();
    }

    pub(crate) fn clear_upload(&mut self) {
        self.session.clear_upload();
        self.ui.info_window_open = false;
        self.set_status("Image cleared.");
        self.mark_dirty();
    }

    /// Accept the first dropped file that carries a path or bytes.
    pub(crate) fn handle_dropped_files(&mut self, ctx: &Context) {
        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped_files.is_empty() {
            return;
        }
        for f in dropped_files {
            if let Some(path) = f.path {
                debug!(path = %path.display(), "Loading dropped path");
                self.upload_from_path(path);
                return;
            }
            if let Some(bytes) = f.bytes {
                debug!(name = %f.name, "Loading dropped bytes");
                self.upload_from_bytes(
                    (!f.name.is_empty()).then_some(f.name),
                    bytes.to_vec(),
                    f.last_modified,
                );
                return;
            }
        }
        self.set_status("Drop failed: no readable bytes/path");
    }

    pub(crate) fn remember_image_dir_from_path(&mut self, path: &Path) {
        let dir = path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        self.last_image_dir = Some(dir);
    }
}
