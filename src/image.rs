mod buffer;
mod error;
mod load;
mod meta;

pub use buffer::PixelBuffer;
pub use error::DecodeError;
pub use load::{decode_rgb, read_upload_bytes};
pub use meta::{UploadMeta, describe_aspect_ratio, format_system_time, human_readable_bytes};
