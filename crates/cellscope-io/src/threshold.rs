//! Threshold predicates
//!
//! The predicate that decides which 8-bit luma values count as foreground.
//! Choosing the threshold is the caller's job; this module only applies it.

/// Which side of the threshold is foreground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Foreground is `luma >= threshold` (bright objects on dark background)
    #[default]
    Bright,
    /// Foreground is `luma < threshold` (dark objects on bright background)
    Dark,
}

/// Options for thresholding a gray image into a mask
#[derive(Debug, Clone)]
pub struct ThresholdOptions {
    /// Threshold value
    pub threshold: u8,
    /// Which side of the threshold is foreground
    pub polarity: Polarity,
}

impl Default for ThresholdOptions {
    fn default() -> Self {
        Self {
            threshold: 128,
            polarity: Polarity::Bright,
        }
    }
}

impl ThresholdOptions {
    /// Create new options with the specified threshold
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    /// Set the polarity
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Whether `luma` is foreground under these options.
    #[inline]
    pub fn is_foreground(&self, luma: u8) -> bool {
        match self.polarity {
            Polarity::Bright => luma >= self.threshold,
            Polarity::Dark => luma < self.threshold,
        }
    }
}
