use crate::session::Rendered;
use egui::{ColorImage, Context, TextureHandle, TextureOptions};

/// Textures mirroring the original and processed buffers of the last render.
pub struct RenderView {
    pub filter_label: &'static str,
    pub original: TextureHandle,
    pub original_size: [u32; 2],
    pub processed: TextureHandle,
    pub processed_size: [u32; 2],
    pub processed_channels: u8,
}

fn original_color_image(rendered: &Rendered) -> ColorImage {
    let (w, h) = rendered.original.dimensions();
    ColorImage::from_rgb([w as usize, h as usize], rendered.original.as_raw())
}

impl RenderView {
    /// Upload both buffers of `rendered` as new textures.
    pub fn new(ctx: &Context, rendered: &Rendered) -> Self {
        let (ow, oh) = rendered.original.dimensions();
        let (pw, ph) = rendered.processed.dimensions();
        let original = ctx.load_texture(
            "original_image",
            original_color_image(rendered),
            TextureOptions::LINEAR,
        );
        let processed = ctx.load_texture(
            "processed_image",
            rendered.processed.to_color_image(),
            TextureOptions::LINEAR,
        );
        Self {
            filter_label: rendered.filter.kind().label(),
            original,
            original_size: [ow, oh],
            processed,
            processed_size: [pw, ph],
            processed_channels: rendered.processed.channels(),
        }
    }

    /// Replace both textures' pixels with a fresh render.
    pub fn replace(&mut self, rendered: &Rendered) {
        let (ow, oh) = rendered.original.dimensions();
        let (pw, ph) = rendered.processed.dimensions();
        self.original
            .set(original_color_image(rendered), TextureOptions::LINEAR);
        self.processed
            .set(rendered.processed.to_color_image(), TextureOptions::LINEAR);
        self.filter_label = rendered.filter.kind().label();
        self.original_size = [ow, oh];
        self.processed_size = [pw, ph];
        self.processed_channels = rendered.processed.channels();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{FilterKind, FilterSettings};
    use image::{Rgb, RgbImage};

    fn rendered(kind: FilterKind) -> Rendered {
        let original = RgbImage::from_pixel(3, 2, Rgb([10, 200, 30]));
        let filter = FilterSettings::default().filter_for(kind);
        let processed = filter.apply(&original);
        Rendered {
            original,
            filter,
            processed,
        }
    }

    #[test]
    fn view_tracks_latest_render() {
        let ctx = Context::default();
        let mut view = RenderView::new(&ctx, &rendered(FilterKind::Sepia));
        assert_eq!(view.filter_label, "Sepia");
        assert_eq!(view.processed_channels, 3);
        assert_eq!(view.original.size(), [3, 2]);

        view.replace(&rendered(FilterKind::Grayscale));
        assert_eq!(view.filter_label, "Grayscale");
        assert_eq!(view.processed_channels, 1);
        assert_eq!(view.processed_size, [3, 2]);
    }
}
