//! Shared constants for collage layout
//!
//! This module centralizes magic numbers used by the layout engine and
//! the conversion pipeline.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Page Defaults
// =============================================================================

/// Margin on every side of the page (points, 0.5 inch)
pub const DEFAULT_MARGIN_PT: f32 = 36.0;

/// Output file used when none is given
pub const DEFAULT_OUTPUT_FILE: &str = "images_output.pdf";

/// Single-page layouts above this count produce very small images
pub const CROWDED_PAGE_THRESHOLD: usize = 25;

// =============================================================================
// Flow Layout
// =============================================================================

/// Gap between images in a row and between rows (points)
pub const FLOW_GAP_PT: f32 = 10.0;

/// Rows and pages stop filling once less than this remains (points)
pub const FLOW_MIN_REMAINING_PT: f32 = 50.0;

/// Widest an image may be, as a fraction of the usable width
pub const FLOW_MAX_WIDTH_FRACTION: f32 = 0.8;

/// Tallest an image may be, as a fraction of the usable height
pub const FLOW_MAX_HEIGHT_FRACTION: f32 = 0.6;

// =============================================================================
// Grid Layout
// =============================================================================

/// Spacing between grid cells (points)
pub const GRID_SPACING_PT: f32 = 5.0;

// =============================================================================
// Input
// =============================================================================

/// File extensions (lowercase, no dot) treated as images
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "webp"];
