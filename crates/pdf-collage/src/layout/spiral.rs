//! Spiral layout
//!
//! Images are dropped into square cells along an outward square spiral
//! that starts at the middle of the page. Cells are uniform and touch
//! each other; a slot whose image failed probing stays empty.

use super::{CanvasRegion, ImageSet, Page, Rect, place_in_cell};

/// Integer cell coordinate; +x is right, +y is up the page
pub type SpiralCoord = (i32, i32);

/// First `count` coordinates of a square spiral around (0, 0).
///
/// The walk starts moving +x, turns 90° counter-clockwise after each run,
/// and the run length grows by one every second turn.
pub fn spiral_positions(count: usize) -> Vec<SpiralCoord> {
    let mut positions = Vec::with_capacity(count);
    if count == 0 {
        return positions;
    }
    positions.push((0, 0));

    let (mut x, mut y) = (0, 0);
    let (mut dx, mut dy) = (1, 0);
    let mut run_length = 1;
    let mut steps_taken = 0;
    let mut turns = 0;

    while positions.len() < count {
        x += dx;
        y += dy;
        positions.push((x, y));
        steps_taken += 1;

        if steps_taken == run_length {
            (dx, dy) = (-dy, dx);
            turns += 1;
            steps_taken = 0;
            if turns % 2 == 0 {
                run_length += 1;
            }
        }
    }

    positions
}

/// Inclusive bounds of a set of coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiralBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl SpiralBounds {
    pub fn of(positions: &[SpiralCoord]) -> Option<Self> {
        let (&(x0, y0), rest) = positions.split_first()?;
        let mut bounds = Self {
            min_x: x0,
            max_x: x0,
            min_y: y0,
            max_y: y0,
        };
        for &(x, y) in rest {
            bounds.min_x = bounds.min_x.min(x);
            bounds.max_x = bounds.max_x.max(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_y = bounds.max_y.max(y);
        }
        Some(bounds)
    }

    /// Width in cells
    pub fn grid_width(&self) -> usize {
        (self.max_x - self.min_x + 1) as usize
    }

    /// Height in cells
    pub fn grid_height(&self) -> usize {
        (self.max_y - self.min_y + 1) as usize
    }
}

/// Arrange all images on one page along the spiral.
///
/// Slots are assigned by candidate index, so the spiral covers every
/// candidate even when some were not measured.
pub fn spiral_layout(set: &ImageSet, canvas: &CanvasRegion) -> Vec<Page> {
    if set.is_empty() {
        return Vec::new();
    }

    let slots = set
        .images
        .iter()
        .map(|image| image.index + 1)
        .max()
        .unwrap_or(0)
        .max(set.candidates);
    let positions = spiral_positions(slots);
    let Some(bounds) = SpiralBounds::of(&positions) else {
        return Vec::new();
    };

    let area = canvas.usable_area();
    let cell = (area.width / bounds.grid_width() as f32)
        .min(area.height / bounds.grid_height() as f32);

    log::info!(
        "Arranging {} images in a spiral pattern ({}x{} cells of {:.0}pt)",
        set.images.len(),
        bounds.grid_width(),
        bounds.grid_height(),
        cell
    );

    // Center the spiral's bounding box in the usable area
    let spiral_width = bounds.grid_width() as f32 * cell;
    let spiral_height = bounds.grid_height() as f32 * cell;
    let offset_x = area.x + (area.width - spiral_width) / 2.0 - bounds.min_x as f32 * cell;
    let offset_y = area.y + (area.height - spiral_height) / 2.0 - bounds.min_y as f32 * cell;

    let placements = set
        .images
        .iter()
        .map(|image| {
            let (grid_x, grid_y) = positions[image.index];
            let slot = Rect::new(
                offset_x + grid_x as f32 * cell,
                offset_y + grid_y as f32 * cell,
                cell,
                cell,
            );
            place_in_cell(image, &slot)
        })
        .collect();

    vec![Page::new(placements)]
}
