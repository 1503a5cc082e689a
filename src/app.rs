//! Main egui/eframe application state and UI orchestration.

use crate::config::AppConfig;
use crate::session::Session;
use egui::{Context, Key};
use egui_file_dialog::{DialogState, FileDialog};
use std::path::{Path, PathBuf};
use tracing::warn;

mod render_view;
mod ui;
mod ui_state;
mod upload;

use render_view::RenderView;
use ui_state::UiState;

/// Top-level application state: one session plus the textures of its last render.
pub struct FilterApp {
    session: Session,
    view: Option<RenderView>,
    render_error: Option<String>,
    render_dirty: bool,
    upload_dialog: Option<FileDialog>,
    last_image_dir: Option<PathBuf>,
    config: AppConfig,
    ui: UiState,
}

impl Default for FilterApp {
    fn default() -> Self {
        Self::with_config(AppConfig::load())
    }
}

impl FilterApp {
    fn with_config(config: AppConfig) -> Self {
        let session = Session::new(config.defaults.filter, config.defaults.settings());
        Self {
            session,
            view: None,
            render_error: None,
            render_dirty: false,
            upload_dialog: None,
            last_image_dir: None,
            config,
            ui: UiState::default(),
        }
    }

    /// Create a new app and optionally upload an initial image.
    pub fn new_with_initial_path(initial_path: Option<&Path>) -> Self {
        let mut app = Self::default();
        if let Some(p) = initial_path {
            app.upload_from_path(p.to_owned());
        }
        app
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.ui.last_status = Some(msg.into());
    }

    const fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    /// Recompute the whole output from the session's current inputs.
    fn rerender(&mut self, ctx: &Context) {
        self.render_dirty = false;
        let limits = self.config.effective_image_limits();
        match self.session.render(&limits) {
            Ok(Some(rendered)) => {
                self.render_error = None;
                if let Some(view) = self.view.as_mut() {
                    view.replace(&rendered);
                } else {
                    self.view = Some(RenderView::new(ctx, &rendered));
                }
            }
            Ok(None) => {
                self.render_error = None;
                self.view = None;
            }
            Err(err) => {
                let name = self
                    .session
                    .upload()
                    .map_or_else(|| "upload".to_string(), |u| u.meta().display_name());
                warn!(name = %name, "Render cycle failed: {err}");
                self.view = None;
                self.set_status(format!("Failed to decode {name}: {err}"));
                self.render_error = Some(err.to_string());
            }
        }
    }

    fn handle_hotkeys(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        // Ctrl/Cmd + B: toggle side panel
        if ctx.input(|i| i.key_pressed(Key::B) && i.modifiers.command) {
            self.ui.side_open = !self.ui.side_open;
        }
        // Ctrl/Cmd + O: upload image
        if self.upload_dialog.is_none()
            && ctx.input(|i| i.key_pressed(Key::O) && i.modifiers.command)
        {
            self.open_upload_dialog();
        }
        // Ctrl/Cmd + I: show upload info
        if self.session.upload().is_some()
            && ctx.input(|i| i.key_pressed(Key::I) && i.modifiers.command)
        {
            self.ui.info_window_open = true;
        }
    }

    fn poll_upload_dialog(&mut self, ctx: &Context) {
        let Some(dialog) = self.upload_dialog.as_mut() else {
            return;
        };
        dialog.update(ctx);
        if let Some(path) = dialog.take_picked() {
            self.upload_dialog = None;
            self.upload_from_path(path);
            return;
        }
        let (close_dialog, canceled) = match dialog.state() {
            DialogState::Cancelled => (true, true),
            DialogState::Closed => (true, false),
            _ => (false, false),
        };
        if canceled {
            self.set_status("Upload canceled.");
        }
        if close_dialog {
            self.upload_dialog = None;
        }
    }
}

impl eframe::App for FilterApp {
    // Required by eframe 0.34; all UI is still drawn in `update`, which eframe calls first.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    #[allow(deprecated)]
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_hotkeys(ctx);
        self.handle_dropped_files(ctx);

        egui::TopBottomPanel::top("top").show(ctx, |ui| self.ui_top(ui));
        egui::SidePanel::left("side")
            .resizable(true)
            .default_width(280.0)
            .show_animated(ctx, self.ui.side_open, |ui| self.ui_side_filters(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.ui_status_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.ui_central(ui));
        self.ui_upload_info_window(ctx);

        self.poll_upload_dialog(ctx);

        if self.render_dirty {
            self.rerender(ctx);
            ctx.request_repaint();
        }
    }
}
