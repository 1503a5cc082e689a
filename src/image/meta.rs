use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Describes where the uploaded bytes came from.
#[derive(Debug, Clone)]
pub enum UploadOrigin {
    File(PathBuf),
    DroppedBytes { suggested_name: Option<String> },
}

impl UploadOrigin {
    /// Human-readable label for UI display.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::File(_) => "File on disk",
            Self::DroppedBytes { .. } => "Dropped bytes",
        }
    }
}

/// Metadata describing an upload and its provenance.
#[derive(Debug, Clone)]
pub struct UploadMeta {
    origin: UploadOrigin,
    byte_len: u64,
    last_modified: Option<SystemTime>,
}

impl UploadMeta {
    /// Metadata for a file read from disk; modified time is best effort.
    pub fn from_path(path: &Path, byte_len: usize) -> Self {
        let last_modified = std::fs::metadata(path)
            .ok()
            .and_then(|meta| meta.modified().ok());
        Self {
            origin: UploadOrigin::File(path.to_owned()),
            byte_len: byte_len as u64,
            last_modified,
        }
    }

    /// Metadata for dropped bytes with optional name and modification time.
    pub fn from_dropped_bytes(
        name: Option<&str>,
        byte_len: usize,
        last_modified: Option<SystemTime>,
    ) -> Self {
        Self {
            origin: UploadOrigin::DroppedBytes {
                suggested_name: name.filter(|s| !s.is_empty()).map(ToOwned::to_owned),
            },
            byte_len: byte_len as u64,
            last_modified,
        }
    }

    /// Best-effort display name for the upload.
    pub fn display_name(&self) -> String {
        match &self.origin {
            UploadOrigin::File(path) => path
                .file_name()
                .and_then(|s| s.to_str())
                .map_or_else(|| path.display().to_string(), ToOwned::to_owned),
            UploadOrigin::DroppedBytes { suggested_name } => suggested_name
                .as_deref()
                .map_or_else(|| "Unnamed drop".to_string(), str::to_owned),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.origin {
            UploadOrigin::File(path) => Some(path.as_path()),
            UploadOrigin::DroppedBytes { .. } => None,
        }
    }

    pub const fn source_label(&self) -> &'static str {
        self.origin.label()
    }

    pub const fn byte_len(&self) -> u64 {
        self.byte_len
    }

    pub const fn last_modified(&self) -> Option<SystemTime> {
        self.last_modified
    }
}

/// Format a byte count with binary units (KiB, MiB, ...).
pub fn human_readable_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit_idx = 0;
    while value >= 1024.0 && unit_idx < UNITS.len() - 1 {
        value /= 1024.0;
        unit_idx += 1;
    }
    if unit_idx == 0 {
        format!("{bytes} {}", UNITS[unit_idx])
    } else {
        format!("{value:.2} {}", UNITS[unit_idx])
    }
}

/// Format a `SystemTime` as a UTC timestamp string.
pub fn format_system_time(time: SystemTime) -> String {
    let datetime: DateTime<Utc> = DateTime::from(time);
    datetime.format("%Y-%m-%d %H:%M:%S %Z").to_string()
}

/// Return a simplified aspect ratio plus an approximate decimal ratio string.
pub fn describe_aspect_ratio(width: u32, height: u32) -> Option<String> {
    if width == 0 || height == 0 {
        return None;
    }
    let divisor = gcd_u32(width, height);
    let approx = f64::from(width) / f64::from(height);
    Some(format!(
        "{}:{} (~{approx:.3}:1)",
        width / divisor,
        height / divisor
    ))
}

const fn gcd_u32(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let tmp = a % b;
        a = b;
        b = tmp;
    }
    if a == 0 { 1 } else { a }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_use_binary_units() {
        assert_eq!(human_readable_bytes(512), "512 B");
        assert_eq!(human_readable_bytes(1536), "1.50 KiB");
        assert_eq!(human_readable_bytes(3 * 1024 * 1024), "3.00 MiB");
    }

    #[test]
    fn aspect_ratio_is_reduced() {
        assert_eq!(
            describe_aspect_ratio(1920, 1080).as_deref(),
            Some("16:9 (~1.778:1)")
        );
        assert_eq!(describe_aspect_ratio(0, 10), None);
    }

    #[test]
    fn dropped_bytes_fall_back_to_placeholder_name() {
        let meta = UploadMeta::from_dropped_bytes(Some(""), 10, None);
        assert_eq!(meta.display_name(), "Unnamed drop");
        assert!(meta.path().is_none());
        assert_eq!(meta.byte_len(), 10);
    }
}
