//! Folder-to-PDF conversion
//!
//! This module orchestrates a run:
//! 1. Scan the folder for candidate images
//! 2. Probe each candidate's dimensions, dropping failures
//! 3. Arrange the measured images with the selected layout
//! 4. Draw every placement and save the document

use crate::constants::CROWDED_PAGE_THRESHOLD;
use crate::layout::{CanvasRegion, ImageSet, Page};
use crate::options::CollageOptions;
use crate::render::{PdfRenderer, Renderer};
use crate::source::{DimensionProbe, ImageProbe, probe_images, scan_folder};
use crate::stats::calculate_statistics;
use crate::types::*;
use std::path::{Path, PathBuf};

/// Everything computed before drawing
#[derive(Debug, Clone, PartialEq)]
pub struct CollagePlan {
    /// Candidate files in sorted order
    pub sources: Vec<PathBuf>,
    /// Measured subset of `sources`
    pub images: ImageSet,
    pub canvas: CanvasRegion,
    pub pages: Vec<Page>,
}

impl CollagePlan {
    pub fn statistics(&self) -> CollageStatistics {
        calculate_statistics(&self.images, &self.pages)
    }

    /// Whether there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Outcome of a conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub statistics: CollageStatistics,
    /// Images actually drawn
    pub images_added: usize,
    /// Placements the renderer rejected
    pub draw_failures: usize,
    /// Written file, `None` when there was nothing to draw
    pub output: Option<PathBuf>,
}

/// Scan, probe and lay out without drawing anything
pub async fn plan(options: &CollageOptions) -> Result<CollagePlan> {
    let options = options.clone();
    tokio::task::spawn_blocking(move || plan_with(&options, &ImageProbe)).await?
}

/// Convert the folder named in `options` into a PDF
pub async fn convert(options: &CollageOptions) -> Result<ConversionReport> {
    options.validate()?;

    let options = options.clone();
    tokio::task::spawn_blocking(move || {
        let mut renderer = PdfRenderer::new(&document_title(&options.input_folder), &options.canvas());
        convert_with(&options, &ImageProbe, &mut renderer)
    })
    .await?
}

/// Synchronous planning with an explicit dimension probe
pub fn plan_with<P: DimensionProbe + ?Sized>(
    options: &CollageOptions,
    probe: &P,
) -> Result<CollagePlan> {
    options.validate()?;

    let sources = scan_folder(&options.input_folder)?;
    let canvas = options.canvas();
    log::info!("Found {} image files", sources.len());

    let images = probe_images(&sources, probe);
    if images.is_empty() {
        return Ok(CollagePlan {
            sources,
            images,
            canvas,
            pages: Vec::new(),
        });
    }

    if options.layout.is_single_page() && images.images.len() > CROWDED_PAGE_THRESHOLD {
        log::warn!(
            "With {} images on one page, each image will be quite small",
            images.images.len()
        );
    }

    let pages = options.layout.arrange(&images, &canvas, &options.spacing);
    Ok(CollagePlan {
        sources,
        images,
        canvas,
        pages,
    })
}

/// Synchronous conversion with explicit collaborators
pub fn convert_with<P, R>(
    options: &CollageOptions,
    probe: &P,
    renderer: &mut R,
) -> Result<ConversionReport>
where
    P: DimensionProbe + ?Sized,
    R: Renderer + ?Sized,
{
    let plan = plan_with(options, probe)?;
    let statistics = plan.statistics();

    if plan.is_empty() {
        log::info!("No images found in {}", options.input_folder.display());
        return Ok(ConversionReport {
            statistics,
            images_added: 0,
            draw_failures: 0,
            output: None,
        });
    }

    log::info!(
        "Creating PDF: {} ({} layout)",
        options.output_file.display(),
        options.layout.name()
    );
    let (images_added, draw_failures) = render_plan(&plan, renderer);

    renderer.save(&options.output_file)?;
    log::info!("PDF created successfully: {}", options.output_file.display());
    log::info!(
        "Images added: {}/{} on {} page(s)",
        images_added,
        statistics.candidates,
        statistics.pages
    );

    Ok(ConversionReport {
        statistics,
        images_added,
        draw_failures,
        output: Some(options.output_file.clone()),
    })
}

/// Draw every page of the plan in order.
///
/// Returns `(drawn, failed)`. A failed draw is logged and skipped.
pub fn render_plan<R: Renderer + ?Sized>(plan: &CollagePlan, renderer: &mut R) -> (usize, usize) {
    let mut drawn = 0;
    let mut failed = 0;

    for (page_number, page) in plan.pages.iter().enumerate() {
        log::info!("Processing page {}...", page_number + 1);
        renderer.new_page();

        for placement in &page.placements {
            let source = &plan.sources[placement.image];
            let name = display_name(source);
            match renderer.draw_image(source, placement.rect) {
                Ok(()) => {
                    log::info!(
                        "  Added: {} ({:.0}x{:.0})",
                        name,
                        placement.rect.width,
                        placement.rect.height
                    );
                    drawn += 1;
                }
                Err(e) => {
                    log::warn!("  Error adding {}: {}", name, e);
                    failed += 1;
                }
            }
        }
    }

    (drawn, failed)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn document_title(folder: &Path) -> String {
    folder
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Images".to_string())
}
