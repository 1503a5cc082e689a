use thiserror::Error;

/// Failure to turn uploaded bytes into an image. Halts the render cycle.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read image data: {0}")]
    Read(#[from] std::io::Error),

    #[error("unsupported image format; expected JPEG or PNG")]
    UnsupportedFormat,

    #[error("failed to decode image data: {0}")]
    Malformed(#[from] image::ImageError),

    #[error("image too large: {width}x{height} (~{megapixels} MP) exceeds limit (~{limit_megapixels} MP)")]
    TooLarge {
        width: u32,
        height: u32,
        megapixels: u64,
        limit_megapixels: u64,
    },
}
