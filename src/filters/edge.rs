use super::EdgeThresholds;
use image::{GrayImage, Luma, RgbImage};
use imageproc::edges::canny;

/// Canny edge map over all three channels: 255 where any channel has an edge,
/// 0 elsewhere.
pub fn canny_edges(image: &RgbImage, thresholds: EdgeThresholds) -> GrayImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return GrayImage::new(width, height);
    }
    let thresholds = thresholds.sanitized();
    let (low, high) = (f32::from(thresholds.low), f32::from(thresholds.high));

    let mut edges = GrayImage::new(width, height);
    for channel in 0..3 {
        let plane = channel_plane(image, channel);
        let found = canny(&plane, low, high);
        for (dst, src) in edges.pixels_mut().zip(found.pixels()) {
            dst.0[0] = dst.0[0].max(src.0[0]);
        }
    }
    edges
}

fn channel_plane(image: &RgbImage, channel: usize) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([image.get_pixel(x, y).0[channel]])
    })
}
