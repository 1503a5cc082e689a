use super::blur::gaussian_blur;
use super::color::grayscale;
use image::{GrayImage, Luma, RgbImage};

const SKETCH_KERNEL: u32 = 21;

/// Pencil-sketch look: divide the luma by the inverse of its blurred inverse.
///
/// `out = gray * 256 / (255 - blur(255 - gray))`, saturated to 255. A zero
/// divisor yields 0.
pub fn sketch(image: &RgbImage) -> GrayImage {
    let gray = grayscale(image);
    let mut inverted = gray.clone();
    image::imageops::invert(&mut inverted);
    let blurred = gaussian_blur(&inverted, SKETCH_KERNEL);

    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let g = u32::from(gray.get_pixel(x, y).0[0]);
        let divisor = 255 - u32::from(blurred.get_pixel(x, y).0[0]);
        Luma([color_dodge(g, divisor)])
    })
}

fn color_dodge(value: u32, divisor: u32) -> u8 {
    if divisor == 0 {
        return 0;
    }
    let scaled = (value * 256 + divisor / 2) / divisor;
    u8::try_from(scaled).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn uniform_gray_becomes_white() {
        let src = RgbImage::from_pixel(30, 20, Rgb([128, 128, 128]));
        let out = sketch(&src);
        assert_eq!(out.dimensions(), (30, 20));
        assert!(out.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn dark_stroke_stays_darker_than_background() {
        let src = RgbImage::from_fn(40, 40, |x, _| {
            if (18..22).contains(&x) {
                Rgb([30, 30, 30])
            } else {
                Rgb([220, 220, 220])
            }
        });
        let out = sketch(&src);
        let stroke = out.get_pixel(20, 20).0[0];
        let background = out.get_pixel(2, 20).0[0];
        assert!(stroke < background, "stroke {stroke} background {background}");
    }

    #[test]
    fn zero_divisor_yields_black() {
        assert_eq!(color_dodge(0, 0), 0);
        assert_eq!(color_dodge(200, 100), 255);
        assert_eq!(color_dodge(50, 200), 64);
    }
}
