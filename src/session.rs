//! Per-session context: the current upload, filter selection and parameters.

use crate::config::ImageLimits;
use crate::filters::{Filter, FilterKind, FilterSettings};
use crate::image::{DecodeError, PixelBuffer, UploadMeta, decode_rgb};
use image::RgbImage;
use tracing::{debug, instrument};

/// Raw bytes of the uploaded file; decoded afresh on every render cycle.
#[derive(Debug, Clone)]
pub struct Upload {
    bytes: Vec<u8>,
    meta: UploadMeta,
}

impl Upload {
    pub const fn new(bytes: Vec<u8>, meta: UploadMeta) -> Self {
        Self { bytes, meta }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub const fn meta(&self) -> &UploadMeta {
        &self.meta
    }
}

/// Result of one successful render cycle.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub original: RgbImage,
    pub filter: Filter,
    pub processed: PixelBuffer,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    upload: Option<Upload>,
    selection: FilterKind,
    settings: FilterSettings,
}

impl Session {
    pub const fn new(selection: FilterKind, settings: FilterSettings) -> Self {
        Self {
            upload: None,
            selection,
            settings,
        }
    }

    pub const fn upload(&self) -> Option<&Upload> {
        self.upload.as_ref()
    }

    pub fn set_upload(&mut self, upload: Upload) {
        self.upload = Some(upload);
    }

    pub fn clear_upload(&mut self) {
        self.upload = None;
    }

    pub const fn selection(&self) -> FilterKind {
        self.selection
    }

    pub const fn select(&mut self, kind: FilterKind) {
        self.selection = kind;
    }

    pub const fn settings_mut(&mut self) -> &mut FilterSettings {
        &mut self.settings
    }

    /// The selected filter paired with its current parameters.
    pub fn active_filter(&self) -> Filter {
        self.settings.filter_for(self.selection)
    }

    /// Run one full render cycle from the current inputs.
    ///
    /// Returns `Ok(None)` when nothing has been uploaded. A decode failure
    /// aborts before any filter runs.
    #[instrument(skip_all, fields(filter = self.selection.label()))]
    pub fn render(&self, limits: &ImageLimits) -> Result<Option<Rendered>, DecodeError> {
        let Some(upload) = self.upload.as_ref() else {
            return Ok(None);
        };
        let original = decode_rgb(limits, upload.bytes())?;
        let filter = self.active_filter();
        let processed = filter.apply(&original);
        let (width, height) = processed.dimensions();
        debug!(width, height, channels = processed.channels(), "Rendered");
        Ok(Some(Rendered {
            original,
            filter,
            processed,
        }))
    }
}
