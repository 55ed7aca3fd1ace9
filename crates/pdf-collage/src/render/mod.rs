//! Drawing resolved placements
//!
//! The layout engine never touches PDF bytes. A `Renderer` receives pages
//! and placements in order and is responsible for decoding and drawing
//! each image.

mod pdf;

pub use pdf::PdfRenderer;

use crate::layout::Rect;
use crate::types::Result;
use std::path::Path;
use thiserror::Error;

/// Why a single image could not be drawn
#[derive(Error, Debug)]
pub enum DrawError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not decode image: {0}")]
    Decode(String),
    #[error("no page started")]
    NoPage,
}

/// Output surface for a collage
pub trait Renderer {
    /// Start a new page; later draws land on it.
    fn new_page(&mut self);

    /// Draw the image at `source` into `rect` on the current page.
    fn draw_image(&mut self, source: &Path, rect: Rect) -> std::result::Result<(), DrawError>;

    /// Write the finished document.
    fn save(&mut self, output: &Path) -> Result<()>;
}
