//! Layout engine
//!
//! This module maps measured images onto pages:
//! - Flow layout (row filling, any number of pages)
//! - Grid layout (rows x cols cells, one page)
//! - Spiral layout (square spiral from the center, one page)

mod flow;
mod grid;
mod spiral;
mod types;

pub use flow::*;
pub use grid::*;
pub use spiral::*;
pub use types::*;

use crate::options::LayoutOptions;

/// Which arrangement algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutStrategy {
    /// Fill rows left-to-right and continue onto new pages
    #[default]
    Flow,
    /// Fixed rows x cols grid on a single page
    Grid,
    /// Center-outward square spiral on a single page
    Spiral,
}

impl LayoutStrategy {
    /// Compute pages for the measured images. Returns no pages when there
    /// is nothing to place.
    pub fn arrange(
        self,
        images: &ImageSet,
        canvas: &CanvasRegion,
        options: &LayoutOptions,
    ) -> Vec<Page> {
        match self {
            LayoutStrategy::Flow => flow_layout(&images.images, canvas, options),
            LayoutStrategy::Grid => grid_layout(&images.images, canvas, options),
            LayoutStrategy::Spiral => spiral_layout(images, canvas),
        }
    }

    /// Whether every image is forced onto one page
    pub fn is_single_page(self) -> bool {
        !matches!(self, LayoutStrategy::Flow)
    }

    pub fn name(self) -> &'static str {
        match self {
            LayoutStrategy::Flow => "flow",
            LayoutStrategy::Grid => "grid",
            LayoutStrategy::Spiral => "spiral",
        }
    }
}
