use crate::constants::*;
use crate::layout::{CanvasRegion, LayoutStrategy};
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Spacing and sizing knobs for the layout engine.
///
/// All values are in points except the fractions, which are relative to
/// the usable width/height of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    /// Gap between images in a row and between rows (flow)
    pub flow_gap_pt: f32,
    /// Minimum remaining row width / page height to keep filling (flow)
    pub flow_min_remaining_pt: f32,
    /// Maximum image width as a fraction of usable width (flow)
    pub flow_max_width_fraction: f32,
    /// Maximum image height as a fraction of usable height (flow)
    pub flow_max_height_fraction: f32,
    /// Spacing between cells (grid)
    pub grid_spacing_pt: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            flow_gap_pt: FLOW_GAP_PT,
            flow_min_remaining_pt: FLOW_MIN_REMAINING_PT,
            flow_max_width_fraction: FLOW_MAX_WIDTH_FRACTION,
            flow_max_height_fraction: FLOW_MAX_HEIGHT_FRACTION,
            grid_spacing_pt: GRID_SPACING_PT,
        }
    }
}

/// Complete conversion configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CollageOptions {
    // Input / output
    pub input_folder: PathBuf,
    pub output_file: PathBuf,

    // Layout
    pub layout: LayoutStrategy,
    pub spacing: LayoutOptions,

    // Page
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    pub margin_pt: f32,
}

impl Default for CollageOptions {
    fn default() -> Self {
        Self {
            input_folder: PathBuf::new(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            layout: LayoutStrategy::Flow,
            spacing: LayoutOptions::default(),
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            margin_pt: DEFAULT_MARGIN_PT,
        }
    }
}

impl CollageOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| CollageError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CollageError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// The drawing area derived from paper size, orientation and margin
    pub fn canvas(&self) -> CanvasRegion {
        let (width_mm, height_mm) = self
            .paper_size
            .dimensions_with_orientation(self.orientation);
        CanvasRegion::new(mm_to_pt(width_mm), mm_to_pt(height_mm), self.margin_pt)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.input_folder.as_os_str().is_empty() {
            return Err(CollageError::Config("No input folder specified".to_string()));
        }

        if self.output_file.as_os_str().is_empty() {
            return Err(CollageError::Config("No output file specified".to_string()));
        }

        if !(self.margin_pt >= 0.0) {
            return Err(CollageError::Config(
                "Margin must not be negative".to_string(),
            ));
        }

        let canvas = self.canvas();
        if canvas.available_width() <= 0.0 || canvas.available_height() <= 0.0 {
            return Err(CollageError::Config(format!(
                "Margin of {}pt leaves no usable area on a {:.2}x{:.2}pt page",
                self.margin_pt, canvas.width, canvas.height
            )));
        }

        let spacing = &self.spacing;
        for (name, fraction) in [
            ("flow_max_width_fraction", spacing.flow_max_width_fraction),
            ("flow_max_height_fraction", spacing.flow_max_height_fraction),
        ] {
            if !(fraction > 0.0 && fraction <= 1.0) {
                return Err(CollageError::Config(format!(
                    "{} must be in (0, 1], got {}",
                    name, fraction
                )));
            }
        }

        if !(spacing.flow_min_remaining_pt > 0.0) {
            return Err(CollageError::Config(
                "flow_min_remaining_pt must be positive".to_string(),
            ));
        }

        if !(spacing.flow_gap_pt >= 0.0) || !(spacing.grid_spacing_pt >= 0.0) {
            return Err(CollageError::Config(
                "Gaps and spacing must not be negative".to_string(),
            ));
        }

        let shortest_side = canvas.available_width().min(canvas.available_height());
        if spacing.grid_spacing_pt >= shortest_side {
            return Err(CollageError::Config(format!(
                "grid_spacing_pt of {}pt must be smaller than the usable area ({:.2}pt)",
                spacing.grid_spacing_pt, shortest_side
            )));
        }

        Ok(())
    }
}
