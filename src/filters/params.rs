use super::{Filter, FilterKind};

/// Hysteresis thresholds for Canny edge detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeThresholds {
    pub low: u16,
    pub high: u16,
}

impl EdgeThresholds {
    pub const LOW_RANGE: std::ops::RangeInclusive<u16> = 0..=100;
    pub const HIGH_RANGE: std::ops::RangeInclusive<u16> = 100..=300;

    /// Clamp both thresholds into their slider ranges. Since the ranges meet
    /// at 100, the result always satisfies `low <= high`.
    pub fn sanitized(self) -> Self {
        Self {
            low: self
                .low
                .clamp(*Self::LOW_RANGE.start(), *Self::LOW_RANGE.end()),
            high: self
                .high
                .clamp(*Self::HIGH_RANGE.start(), *Self::HIGH_RANGE.end()),
        }
    }
}

impl Default for EdgeThresholds {
    fn default() -> Self {
        Self {
            low: 50,
            high: 150,
        }
    }
}

/// Odd Gaussian kernel edge length in `[1, 15]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct KernelSize(u32);

impl KernelSize {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 15;

    /// Clamp into range and bump even values to the next odd one.
    pub const fn new(value: u32) -> Self {
        let clamped = if value < Self::MIN {
            Self::MIN
        } else if value > Self::MAX {
            Self::MAX
        } else {
            value
        };
        if clamped % 2 == 0 {
            Self(clamped + 1)
        } else {
            Self(clamped)
        }
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for KernelSize {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Parameters for the filters that take any, kept across selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSettings {
    pub edge: EdgeThresholds,
    pub blur: KernelSize,
}

impl FilterSettings {
    /// Pair `kind` with its current parameters.
    pub fn filter_for(&self, kind: FilterKind) -> Filter {
        match kind {
            FilterKind::Grayscale => Filter::Grayscale,
            FilterKind::CannyEdge => Filter::CannyEdge(self.edge.sanitized()),
            FilterKind::Blur => Filter::Blur(self.blur),
            FilterKind::Sepia => Filter::Sepia,
            FilterKind::Invert => Filter::Invert,
            FilterKind::Sketch => Filter::Sketch,
        }
    }
}
