use serde::Deserialize;

/// The six selectable filters, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum FilterKind {
    #[default]
    #[serde(rename = "Grayscale")]
    Grayscale,
    #[serde(rename = "Canny Edge Detection")]
    CannyEdge,
    #[serde(rename = "Blur")]
    Blur,
    #[serde(rename = "Sepia")]
    Sepia,
    #[serde(rename = "Invert Colors")]
    Invert,
    #[serde(rename = "Sketch")]
    Sketch,
}

impl FilterKind {
    pub const ALL: [Self; 6] = [
        Self::Grayscale,
        Self::CannyEdge,
        Self::Blur,
        Self::Sepia,
        Self::Invert,
        Self::Sketch,
    ];

    /// Label shown in the selector; also the config spelling.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grayscale => "Grayscale",
            Self::CannyEdge => "Canny Edge Detection",
            Self::Blur => "Blur",
            Self::Sepia => "Sepia",
            Self::Invert => "Invert Colors",
            Self::Sketch => "Sketch",
        }
    }

    /// Channel count of the output when applied to an RGB image.
    pub const fn output_channels(self) -> u8 {
        match self {
            Self::Grayscale | Self::CannyEdge | Self::Sketch => 1,
            Self::Blur | Self::Sepia | Self::Invert => 3,
        }
    }

    /// Title of the settings section, for filters that take parameters.
    pub const fn settings_title(self) -> Option<&'static str> {
        match self {
            Self::CannyEdge => Some("Edge Detection Settings"),
            Self::Blur => Some("Blur Settings"),
            Self::Grayscale | Self::Sepia | Self::Invert | Self::Sketch => None,
        }
    }
}
