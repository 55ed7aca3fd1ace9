//! Layout data types
//!
//! These types sit between dimension probing and PDF rendering. All
//! geometry is in PDF points with the origin at the bottom-left corner
//! of the page.

use crate::types::Dimensions;

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// A rect of the given size centered on this one
    pub fn centered(&self, width: f32, height: f32) -> Rect {
        Rect::new(
            self.center_x() - width / 2.0,
            self.center_y() - height / 2.0,
            width,
            height,
        )
    }

    /// Whether `other` lies inside this rect, allowing `epsilon` of slack
    pub fn contains(&self, other: &Rect, epsilon: f32) -> bool {
        other.x >= self.x - epsilon
            && other.y >= self.y - epsilon
            && other.right() <= self.right() + epsilon
            && other.top() <= self.top() + epsilon
    }

    /// Whether the interiors of the two rects intersect
    pub fn overlaps(&self, other: &Rect, epsilon: f32) -> bool {
        self.x < other.right() - epsilon
            && other.x < self.right() - epsilon
            && self.y < other.top() - epsilon
            && other.y < self.top() - epsilon
    }
}

/// The page and its usable drawing area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRegion {
    /// Page width in points
    pub width: f32,
    /// Page height in points
    pub height: f32,
    /// Margin applied on every side, in points
    pub margin: f32,
}

impl CanvasRegion {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    pub fn available_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn available_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }

    /// The area inside the margins
    pub fn usable_area(&self) -> Rect {
        Rect::new(
            self.margin,
            self.margin,
            self.available_width(),
            self.available_height(),
        )
    }
}

/// An image whose dimensions were read successfully
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredImage {
    /// Position in the candidate list (probe failures keep their index)
    pub index: usize,
    pub dimensions: Dimensions,
}

/// Input to the layout engine
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageSet {
    /// Number of candidate images, including those that failed probing
    pub candidates: usize,
    /// Successfully measured images, in candidate order
    pub images: Vec<MeasuredImage>,
}

impl ImageSet {
    /// Build a set where every candidate was measured
    pub fn from_dimensions(dimensions: impl IntoIterator<Item = Dimensions>) -> Self {
        let images: Vec<MeasuredImage> = dimensions
            .into_iter()
            .enumerate()
            .map(|(index, dimensions)| MeasuredImage { index, dimensions })
            .collect();
        Self {
            candidates: images.len(),
            images,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Number of candidates that could not be measured
    pub fn failures(&self) -> usize {
        self.candidates.saturating_sub(self.images.len())
    }
}

/// Final position of one image on a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index of the image in the candidate list
    pub image: usize,
    /// Position and size on the page in points
    pub rect: Rect,
    /// Points per source pixel
    pub scale: f32,
}

/// One output page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub placements: Vec<Placement>,
}

impl Page {
    pub fn new(placements: Vec<Placement>) -> Self {
        Self { placements }
    }
}

/// Largest aspect-preserving size of `dimensions` that fits the box.
///
/// Returns `(width, height, scale)` where scale is points per pixel.
pub fn fit_within(dimensions: Dimensions, max_width: f32, max_height: f32) -> (f32, f32, f32) {
    let scale_w = max_width.max(0.0) / dimensions.width as f32;
    let scale_h = max_height.max(0.0) / dimensions.height as f32;
    let scale = scale_w.min(scale_h);
    (
        dimensions.width as f32 * scale,
        dimensions.height as f32 * scale,
        scale,
    )
}

/// Fit an image into a cell and center it there.
pub fn place_in_cell(image: &MeasuredImage, cell: &Rect) -> Placement {
    let (width, height, scale) = fit_within(image.dimensions, cell.width, cell.height);
    Placement {
        image: image.index,
        rect: cell.centered(width, height),
        scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_width_limited() {
        let (w, h, scale) = fit_within(Dimensions::new(800, 600), 400.0, 400.0);
        assert!((scale - 0.5).abs() < 0.001);
        assert!((w - 400.0).abs() < 0.01);
        assert!((h - 300.0).abs() < 0.01);
    }

    #[test]
    fn test_fit_height_limited() {
        let (w, h, scale) = fit_within(Dimensions::new(400, 800), 400.0, 400.0);
        assert!((scale - 0.5).abs() < 0.001);
        assert!((w - 200.0).abs() < 0.01);
        assert!((h - 400.0).abs() < 0.01);
    }

    #[test]
    fn test_fit_upscales_small_images() {
        let (w, h, _) = fit_within(Dimensions::new(10, 20), 100.0, 100.0);
        assert!((w - 50.0).abs() < 0.01);
        assert!((h - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_place_in_cell_centers() {
        let image = MeasuredImage {
            index: 3,
            dimensions: Dimensions::new(200, 100),
        };
        let cell = Rect::new(10.0, 20.0, 100.0, 100.0);
        let placement = place_in_cell(&image, &cell);

        assert_eq!(placement.image, 3);
        assert!((placement.rect.x - 10.0).abs() < 0.01);
        assert!((placement.rect.y - 45.0).abs() < 0.01);
        assert!((placement.rect.width - 100.0).abs() < 0.01);
        assert!((placement.rect.height - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_canvas_usable_area() {
        let canvas = CanvasRegion::new(595.0, 842.0, 36.0);
        let area = canvas.usable_area();
        assert_eq!(area.x, 36.0);
        assert_eq!(area.y, 36.0);
        assert_eq!(area.width, 523.0);
        assert_eq!(area.height, 770.0);
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        let crossing = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(!a.overlaps(&touching, 0.001));
        assert!(a.overlaps(&crossing, 0.001));
    }

    #[test]
    fn test_failures_never_underflow() {
        let mut set = ImageSet::from_dimensions([Dimensions::new(10, 10), Dimensions::new(20, 10)]);
        assert_eq!(set.failures(), 0);

        set.candidates = 5;
        assert_eq!(set.failures(), 3);

        set.candidates = 1;
        assert_eq!(set.failures(), 0);
    }

    #[test]
    fn test_fit_into_empty_box() {
        let (w, h, scale) = fit_within(Dimensions::new(10, 20), -5.0, 100.0);
        assert_eq!((w, h, scale), (0.0, 0.0, 0.0));
    }
}
