use egui::ColorImage;
use image::{GrayImage, RgbImage};

/// Output of a filter: single-channel intensities or three-channel color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBuffer {
    Gray(GrayImage),
    Rgb(RgbImage),
}

impl PixelBuffer {
    /// Width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Gray(img) => img.dimensions(),
            Self::Rgb(img) => img.dimensions(),
        }
    }

    pub const fn channels(&self) -> u8 {
        match self {
            Self::Gray(_) => 1,
            Self::Rgb(_) => 3,
        }
    }

    /// Row-major interleaved samples.
    pub fn as_raw(&self) -> &[u8] {
        match self {
            Self::Gray(img) => img.as_raw(),
            Self::Rgb(img) => img.as_raw(),
        }
    }

    /// Convert into an egui image for texture upload.
    pub fn to_color_image(&self) -> ColorImage {
        let (w, h) = self.dimensions();
        let size = [w as usize, h as usize];
        match self {
            Self::Gray(_) => ColorImage::from_gray(size, self.as_raw()),
            Self::Rgb(_) => ColorImage::from_rgb(size, self.as_raw()),
        }
    }
}

impl From<GrayImage> for PixelBuffer {
    fn from(img: GrayImage) -> Self {
        Self::Gray(img)
    }
}

impl From<RgbImage> for PixelBuffer {
    fn from(img: RgbImage) -> Self {
        Self::Rgb(img)
    }
}
