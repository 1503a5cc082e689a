//! The six single-pass filters and their tagged dispatch.

mod blur;
mod color;
mod edge;
mod kind;
mod params;
mod sketch;

pub use kind::FilterKind;
pub use params::{EdgeThresholds, FilterSettings, KernelSize};

use crate::image::PixelBuffer;
use image::RgbImage;

/// A filter together with the parameters it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Grayscale,
    CannyEdge(EdgeThresholds),
    Blur(KernelSize),
    Sepia,
    Invert,
    Sketch,
}

impl Filter {
    pub const fn kind(&self) -> FilterKind {
        match self {
            Self::Grayscale => FilterKind::Grayscale,
            Self::CannyEdge(_) => FilterKind::CannyEdge,
            Self::Blur(_) => FilterKind::Blur,
            Self::Sepia => FilterKind::Sepia,
            Self::Invert => FilterKind::Invert,
            Self::Sketch => FilterKind::Sketch,
        }
    }

    /// Run the filter once over `image`. Height and width are preserved.
    pub fn apply(&self, image: &RgbImage) -> PixelBuffer {
        match *self {
            Self::Grayscale => color::grayscale(image).into(),
            Self::CannyEdge(thresholds) => edge::canny_edges(image, thresholds).into(),
            Self::Blur(kernel) => blur::gaussian_blur(image, kernel.get()).into(),
            Self::Sepia => color::sepia(image).into(),
            Self::Invert => color::invert(&PixelBuffer::Rgb(image.clone())),
            Self::Sketch => sketch::sketch(image).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn sample() -> RgbImage {
        RgbImage::from_fn(13, 9, |x, y| {
            Rgb([(x * 19) as u8, (y * 27) as u8, ((x * y) % 256) as u8])
        })
    }

    #[test]
    fn every_filter_preserves_size_and_reports_its_channels() {
        let src = sample();
        let settings = FilterSettings::default();
        for kind in FilterKind::ALL {
            let out = settings.filter_for(kind).apply(&src);
            assert_eq!(out.dimensions(), src.dimensions(), "{}", kind.label());
            assert_eq!(out.channels(), kind.output_channels(), "{}", kind.label());
        }
    }

    #[test]
    fn filters_are_deterministic() {
        let src = sample();
        let settings = FilterSettings::default();
        for kind in FilterKind::ALL {
            let filter = settings.filter_for(kind);
            assert_eq!(filter.apply(&src), filter.apply(&src));
        }
    }

    #[test]
    fn empty_image_passes_through_every_filter() {
        let src = RgbImage::new(0, 0);
        let settings = FilterSettings::default();
        for kind in FilterKind::ALL {
            let out = settings.filter_for(kind).apply(&src);
            assert_eq!(out.dimensions(), (0, 0));
        }
    }
}
