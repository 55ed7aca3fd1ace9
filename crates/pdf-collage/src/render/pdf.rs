use crate::layout::{CanvasRegion, Rect};
use crate::types::{CollageError, Result};
use printpdf::image::RawImage;
use printpdf::ops::Op;
use printpdf::xobject::{XObject, XObjectTransform};
use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt, XObjectId};
use std::path::Path;

use super::{DrawError, Renderer};

/// Renders pages into a printpdf document.
///
/// Every draw reopens and decodes its source file; nothing is cached
/// between placements.
pub struct PdfRenderer {
    document: PdfDocument,
    page_width_pt: f32,
    page_height_pt: f32,
    current: Option<Vec<Op>>,
}

impl PdfRenderer {
    pub fn new(title: &str, canvas: &CanvasRegion) -> Self {
        Self {
            document: PdfDocument::new(title),
            page_width_pt: canvas.width,
            page_height_pt: canvas.height,
            current: None,
        }
    }

    fn finish_page(&mut self) {
        if let Some(ops) = self.current.take() {
            self.document.pages.push(PdfPage::new(
                Mm::from(Pt(self.page_width_pt)),
                Mm::from(Pt(self.page_height_pt)),
                ops,
            ));
        }
    }

    /// Serialize the document, closing the page in progress.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        self.finish_page();
        if self.document.pages.is_empty() {
            return Err(CollageError::Pdf("document has no pages".to_string()));
        }

        let mut warnings = Vec::new();
        let bytes = self
            .document
            .save(&PdfSaveOptions::default(), &mut warnings);
        for warning in &warnings {
            log::debug!("printpdf: {:?}", warning);
        }
        Ok(bytes)
    }
}

impl Renderer for PdfRenderer {
    fn new_page(&mut self) {
        self.finish_page();
        self.current = Some(Vec::new());
    }

    fn draw_image(&mut self, source: &Path, rect: Rect) -> std::result::Result<(), DrawError> {
        let ops = self.current.as_mut().ok_or(DrawError::NoPage)?;

        let bytes = std::fs::read(source)?;
        let mut warnings = Vec::new();
        let image = RawImage::decode_from_bytes(&bytes, &mut warnings)
            .map_err(|e| DrawError::Decode(e.to_string()))?;
        let (pixel_width, pixel_height) = (image.width as f32, image.height as f32);

        let id = XObjectId::new();
        self.document
            .resources
            .xobjects
            .map
            .insert(id.clone(), XObject::Image(image));

        // At 72 dpi one pixel is one point, so scale maps pixels to the rect
        ops.push(Op::UseXobject {
            id,
            transform: XObjectTransform {
                translate_x: Some(Pt(rect.x)),
                translate_y: Some(Pt(rect.y)),
                scale_x: Some(rect.width / pixel_width),
                scale_y: Some(rect.height / pixel_height),
                rotate: None,
                dpi: Some(72.0),
            },
        });
        Ok(())
    }

    fn save(&mut self, output: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(output, bytes)?;
        Ok(())
    }
}
