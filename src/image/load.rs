use super::error::DecodeError;
use crate::config::ImageLimits;
use anyhow::Context as _;
use image::{GenericImageView, ImageFormat, ImageReader, Limits, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Decode uploaded JPEG or PNG bytes into an 8-bit RGB buffer.
///
/// The format is sniffed from the content, so a text file renamed to `.jpg`
/// is rejected before any decoding is attempted.
pub fn decode_rgb(limits: &ImageLimits, bytes: &[u8]) -> Result<RgbImage, DecodeError> {
    let il = limits.sanitized();
    let mut reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    match reader.format() {
        Some(ImageFormat::Png | ImageFormat::Jpeg) => {}
        _ => return Err(DecodeError::UnsupportedFormat),
    }

    let mut decode_limits = Limits::default();
    decode_limits.max_image_width = Some(il.image_dim);
    decode_limits.max_image_height = Some(il.image_dim);
    decode_limits.max_alloc = Some(il.alloc_bytes);
    reader.limits(decode_limits);
    let img = reader.decode()?;

    let (w, h) = img.dimensions();
    let total_pixels = u64::from(w) * u64::from(h);
    if total_pixels > il.total_pixels {
        return Err(DecodeError::TooLarge {
            width: w,
            height: h,
            megapixels: total_pixels / 1_000_000,
            limit_megapixels: il.total_pixels / 1_000_000,
        });
    }

    Ok(img.to_rgb8())
}

/// Read an upload from disk without decoding it.
pub fn read_upload_bytes(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, Rgba, RgbaImage};

    fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, format).expect("encode");
        out.into_inner()
    }

    #[test]
    fn decodes_png_to_rgb() {
        let src = RgbImage::from_pixel(4, 3, Rgb([12, 34, 56]));
        let bytes = encode(DynamicImage::ImageRgb8(src.clone()), ImageFormat::Png);
        let decoded = decode_rgb(&ImageLimits::default(), &bytes).expect("decode");
        assert_eq!(decoded, src);
    }

    #[test]
    fn drops_alpha_channel() {
        let src = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 7]));
        let bytes = encode(DynamicImage::ImageRgba8(src), ImageFormat::Png);
        let decoded = decode_rgb(&ImageLimits::default(), &bytes).expect("decode");
        assert_eq!(decoded.get_pixel(1, 1), &Rgb([200, 100, 50]));
    }

    #[test]
    fn decodes_jpeg_with_same_dimensions() {
        let src = RgbImage::from_pixel(16, 8, Rgb([128, 128, 128]));
        let bytes = encode(DynamicImage::ImageRgb8(src), ImageFormat::Jpeg);
        let decoded = decode_rgb(&ImageLimits::default(), &bytes).expect("decode");
        assert_eq!(decoded.dimensions(), (16, 8));
    }

    #[test]
    fn rejects_text_bytes() {
        let err = decode_rgb(&ImageLimits::default(), b"just some notes, not a picture")
            .expect_err("text must not decode");
        assert!(matches!(err, DecodeError::UnsupportedFormat));
    }

    #[test]
    fn rejects_truncated_png() {
        let src = RgbImage::from_pixel(32, 32, Rgb([1, 2, 3]));
        let mut bytes = encode(DynamicImage::ImageRgb8(src), ImageFormat::Png);
        bytes.truncate(bytes.len() / 2);
        let err = decode_rgb(&ImageLimits::default(), &bytes).expect_err("truncated");
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_upload_bytes(Path::new("/definitely/not/here.png")).expect_err("missing");
        assert!(err.to_string().contains("here.png"));
    }
}
