use std::fs;
use std::path::PathBuf;

use directories::{BaseDirs, ProjectDirs};
use serde::Deserialize;

use crate::filters::{EdgeThresholds, FilterKind, FilterSettings, KernelSize};

const CONFIG_FILE_NAME: &str = "filterlab.toml";

/// Initial control values for a fresh session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterDefaults {
    pub filter: FilterKind,
    pub edge_low: u16,
    pub edge_high: u16,
    pub blur_kernel: u32,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        let edge = EdgeThresholds::default();
        Self {
            filter: FilterKind::default(),
            edge_low: edge.low,
            edge_high: edge.high,
            blur_kernel: KernelSize::default().get(),
        }
    }
}

impl FilterDefaults {
    pub fn settings(&self) -> FilterSettings {
        FilterSettings {
            edge: EdgeThresholds {
                low: self.edge_low,
                high: self.edge_high,
            }
            .sanitized(),
            blur: KernelSize::new(self.blur_kernel),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub image_limits: ImageLimits,
    pub defaults: FilterDefaults,
}

impl AppConfig {
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            if let Ok(contents) = fs::read_to_string(&path) {
                match toml::from_str::<Self>(&contents) {
                    Ok(cfg) => {
                        tracing::info!(path = %path.display(), "Loaded config");
                        return cfg;
                    }
                    Err(err) => {
                        tracing::warn!(path = %path.display(), "Failed to parse config: {err}");
                    }
                }
            }
        }
        Self::default()
    }

    pub fn effective_image_limits(&self) -> ImageLimits {
        self.image_limits.sanitized()
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(exe_path) = std::env::current_exe()
            && let Some(dir) = exe_path.parent()
        {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }

        if let Some(proj_dirs) = ProjectDirs::from("dev", "Filterlab", "Filterlab") {
            paths.push(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
        }

        if let Some(base_dirs) = BaseDirs::new() {
            paths.push(
                base_dirs
                    .config_dir()
                    .join("filterlab")
                    .join(CONFIG_FILE_NAME),
            );
        }

        paths
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImageLimits {
    pub image_dim: u32,
    pub total_pixels: u64,
    pub alloc_bytes: u64,
}

impl Default for ImageLimits {
    fn default() -> Self {
        Self {
            image_dim: 12_000,
            total_pixels: 80_000_000,       // ~80 MP
            alloc_bytes: 512 * 1024 * 1024, // 512 MiB
        }
    }
}

impl ImageLimits {
    pub fn sanitized(&self) -> Self {
        let dim = self.image_dim.clamp(64, 100_000);
        let pixels = self.total_pixels.clamp(1_000_000, 5_000_000_000); // 1 MP .. 5 GP
        let alloc = self
            .alloc_bytes
            .clamp(8 * 1024 * 1024, 8 * 1024 * 1024 * 1024); // 8 MiB .. 8 GiB
        Self {
            image_dim: dim,
            total_pixels: pixels,
            alloc_bytes: alloc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").expect("parse");
        assert_eq!(cfg.defaults.filter, FilterKind::Grayscale);
        assert_eq!(cfg.defaults.settings(), FilterSettings::default());
        assert_eq!(cfg.image_limits.image_dim, 12_000);
    }

    #[test]
    fn defaults_section_is_sanitized() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [defaults]
            filter = "Canny Edge Detection"
            edge_low = 180
            edge_high = 90
            blur_kernel = 8
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.defaults.filter, FilterKind::CannyEdge);
        let settings = cfg.defaults.settings();
        assert_eq!(settings.edge, EdgeThresholds { low: 100, high: 100 });
        assert_eq!(settings.blur.get(), 9);
    }

    #[test]
    fn unknown_filter_name_is_rejected() {
        let parsed = toml::from_str::<AppConfig>("[defaults]\nfilter = \"Emboss\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn image_limits_are_clamped() {
        let limits = ImageLimits {
            image_dim: 1,
            total_pixels: 0,
            alloc_bytes: u64::MAX,
        }
        .sanitized();
        assert_eq!(limits.image_dim, 64);
        assert_eq!(limits.total_pixels, 1_000_000);
        assert_eq!(limits.alloc_bytes, 8 * 1024 * 1024 * 1024);
    }
}
