use crate::image::PixelBuffer;
use crate::util::rounded_u8;
use image::{GrayImage, Luma, Rgb, RgbImage};

/// Sepia mixing matrix; row `i` produces output channel `i` from (R, G, B).
/// The warm-weighted row lands on blue, giving a cool cast.
const SEPIA: [[f32; 3]; 3] = [
    [0.272, 0.534, 0.131],
    [0.349, 0.686, 0.168],
    [0.393, 0.769, 0.189],
];

/// BT.601 luma in 14-bit fixed point.
const fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = (r as u32 * 4899 + g as u32 * 9617 + b as u32 * 1868 + (1 << 13)) >> 14;
    if y > 255 { 255 } else { y as u8 }
}

pub fn grayscale(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        Luma([luma(r, g, b)])
    })
}

/// Per-pixel sepia matrix; products above 255 saturate.
pub fn sepia(image: &RgbImage) -> RgbImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let [r, g, b] = pixel.0.map(f32::from);
        let mix = |row: [f32; 3]| rounded_u8(row[2].mul_add(b, row[0].mul_add(r, row[1] * g)));
        *pixel = Rgb([mix(SEPIA[0]), mix(SEPIA[1]), mix(SEPIA[2])]);
    }
    out
}

/// Bitwise complement of every sample; keeps the buffer's shape.
pub fn invert(buffer: &PixelBuffer) -> PixelBuffer {
    let mut out = buffer.clone();
    match &mut out {
        PixelBuffer::Gray(img) => image::imageops::invert(img),
        PixelBuffer::Rgb(img) => image::imageops::invert(img),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> RgbImage {
        RgbImage::from_fn(5, 4, |x, y| {
            Rgb([
                (x * 60) as u8,
                (y * 80) as u8,
                ((x + y) * 30) as u8,
            ])
        })
    }

    #[test]
    fn grayscale_has_one_channel_and_same_size() {
        let src = gradient();
        let gray = PixelBuffer::from(grayscale(&src));
        assert_eq!(gray.channels(), 1);
        assert_eq!(gray.dimensions(), src.dimensions());
    }

    #[test]
    fn grayscale_uses_bt601_weights() {
        let src = RgbImage::from_fn(3, 1, |x, _| match x {
            0 => Rgb([255, 0, 0]),
            1 => Rgb([0, 255, 0]),
            _ => Rgb([255, 255, 255]),
        });
        let gray = grayscale(&src);
        assert_eq!(gray.as_raw(), &[76, 150, 255]);
    }

    #[test]
    fn sepia_saturates_bright_pixels() {
        let src = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
        let out = sepia(&src);
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.get_pixel(0, 0), &Rgb([239, 255, 255]));
    }

    #[test]
    fn sepia_mixes_channels() {
        let src = RgbImage::from_pixel(1, 1, Rgb([100, 50, 20]));
        let out = sepia(&src);
        // 27.2 + 26.7 + 2.62, 34.9 + 34.3 + 3.36, 39.3 + 38.45 + 3.78
        assert_eq!(out.get_pixel(0, 0), &Rgb([57, 73, 82]));
    }

    #[test]
    fn invert_twice_is_identity() {
        let rgb = PixelBuffer::from(gradient());
        assert_eq!(invert(&invert(&rgb)), rgb);
        let gray = PixelBuffer::from(grayscale(&gradient()));
        assert_eq!(invert(&invert(&gray)), gray);
    }

    #[test]
    fn invert_complements_each_sample() {
        let src = PixelBuffer::from(RgbImage::from_pixel(1, 1, Rgb([0, 100, 255])));
        assert_eq!(invert(&src).as_raw(), &[255, 155, 0]);
    }
}
