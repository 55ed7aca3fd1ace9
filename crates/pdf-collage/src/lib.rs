mod constants;
pub mod convert;
pub mod layout;
mod options;
pub mod render;
pub mod source;
mod stats;
mod types;

pub use constants::{DEFAULT_MARGIN_PT, DEFAULT_OUTPUT_FILE, SUPPORTED_EXTENSIONS};
pub use convert::{CollagePlan, ConversionReport, convert, convert_with, plan, plan_with};
pub use layout::{CanvasRegion, ImageSet, LayoutStrategy, Page, Placement, Rect};
pub use options::*;
pub use source::{DimensionProbe, ImageProbe, ProbeError, scan_folder};
pub use stats::calculate_statistics;
pub use types::*;
