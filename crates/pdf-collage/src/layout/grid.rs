//! Grid layout calculation
//!
//! Every image goes on a single page in a rows x cols grid sized from the
//! image count. Cells shrink as the count grows; nothing overflows to a
//! second page.

use crate::options::LayoutOptions;

use super::{CanvasRegion, MeasuredImage, Page, Rect, place_in_cell};

// =============================================================================
// Grid Dimensions
// =============================================================================

/// Rows and columns for `count` images.
///
/// Small counts use a fixed table; beyond 25 the grid is the nearest
/// square with enough cells.
pub fn grid_dimensions(count: usize) -> (usize, usize) {
    match count {
        0 | 1 => (1, 1),
        2 => (1, 2),
        3..=4 => (2, 2),
        5..=6 => (2, 3),
        7..=9 => (3, 3),
        10..=12 => (3, 4),
        13..=16 => (4, 4),
        17..=20 => (4, 5),
        21..=25 => (5, 5),
        _ => {
            let cols = (count as f64).sqrt().ceil() as usize;
            let rows = count.div_ceil(cols);
            (rows, cols)
        }
    }
}

/// Gap between cells along one axis holding `count` cells.
///
/// Gaps never take more than half of the axis, so cells keep a positive
/// size however many there are.
pub fn axis_spacing(count: usize, available: f32, spacing: f32) -> f32 {
    if count < 2 {
        return spacing;
    }
    let gaps = (count - 1) as f32;
    spacing.min(available / 2.0 / gaps).max(0.0)
}

/// Cell size for a grid filling the available area.
pub fn cell_size(
    rows: usize,
    cols: usize,
    available_width: f32,
    available_height: f32,
    spacing: f32,
) -> (f32, f32) {
    let spacing_x = axis_spacing(cols, available_width, spacing);
    let spacing_y = axis_spacing(rows, available_height, spacing);
    let width = (available_width - (cols - 1) as f32 * spacing_x) / cols as f32;
    let height = (available_height - (rows - 1) as f32 * spacing_y) / rows as f32;
    (width.max(0.0), height.max(0.0))
}

// =============================================================================
// Layout
// =============================================================================

/// Arrange all images on one page, row-major from the top-left cell.
pub fn grid_layout(
    images: &[MeasuredImage],
    canvas: &CanvasRegion,
    options: &LayoutOptions,
) -> Vec<Page> {
    if images.is_empty() {
        return Vec::new();
    }

    let area = canvas.usable_area();
    let (rows, cols) = grid_dimensions(images.len());
    let spacing_x = axis_spacing(cols, area.width, options.grid_spacing_pt);
    let spacing_y = axis_spacing(rows, area.height, options.grid_spacing_pt);
    let (cell_width, cell_height) =
        cell_size(rows, cols, area.width, area.height, options.grid_spacing_pt);

    log::info!(
        "Arranging {} images in a {}x{} grid",
        images.len(),
        rows,
        cols
    );

    let placements = images
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let row = i / cols;
            let col = i % cols;
            // Row 0 is at the top, so y counts down from the top edge
            let cell = Rect::new(
                area.x + col as f32 * (cell_width + spacing_x),
                area.top() - (row + 1) as f32 * cell_height - row as f32 * spacing_y,
                cell_width,
                cell_height,
            );
            let placement = place_in_cell(image, &cell);
            debug_assert!(area.contains(&placement.rect, 0.01));
            placement
        })
        .collect();

    vec![Page::new(placements)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimensions;

    fn measured(count: usize, width: u32, height: u32) -> Vec<MeasuredImage> {
        (0..count)
            .map(|index| MeasuredImage {
                index,
                dimensions: Dimensions::new(width, height),
            })
            .collect()
    }

    #[test]
    fn test_lookup_table() {
        assert_eq!(grid_dimensions(1), (1, 1));
        assert_eq!(grid_dimensions(2), (1, 2));
        assert_eq!(grid_dimensions(3), (2, 2));
        assert_eq!(grid_dimensions(4), (2, 2));
        assert_eq!(grid_dimensions(6), (2, 3));
        assert_eq!(grid_dimensions(9), (3, 3));
        assert_eq!(grid_dimensions(12), (3, 4));
        assert_eq!(grid_dimensions(16), (4, 4));
        assert_eq!(grid_dimensions(20), (4, 5));
        assert_eq!(grid_dimensions(25), (5, 5));
    }

    #[test]
    fn test_square_fallback() {
        assert_eq!(grid_dimensions(26), (5, 6));
        assert_eq!(grid_dimensions(30), (5, 6));
        assert_eq!(grid_dimensions(36), (6, 6));
        assert_eq!(grid_dimensions(37), (6, 7));
        assert_eq!(grid_dimensions(100), (10, 10));
    }

    #[test]
    fn test_grid_never_grossly_oversized() {
        for n in 1..=200 {
            let (rows, cols) = grid_dimensions(n);
            assert!(rows * cols >= n, "{}: {}x{} too small", n, rows, cols);
            assert!(
                rows * cols < n + rows.max(cols),
                "{}: {}x{} too large",
                n,
                rows,
                cols
            );
        }
    }

    #[test]
    fn test_cell_size_accounts_for_spacing() {
        let (w, h) = cell_size(2, 3, 310.0, 205.0, 5.0);
        assert!((w - 100.0).abs() < 0.001);
        assert!((h - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_row_major_order() {
        let canvas = CanvasRegion::new(320.0, 215.0, 5.0);
        let pages = grid_layout(&measured(5, 100, 100), &canvas, &LayoutOptions::default());

        assert_eq!(pages.len(), 1);
        let placements = &pages[0].placements;
        assert_eq!(placements.len(), 5);

        // 2x3 grid of 100pt cells: first row at the top
        let first = placements[0].rect;
        assert!((first.x - 5.0).abs() < 0.01);
        assert!((first.y - 110.0).abs() < 0.01);

        let third = placements[2].rect;
        assert!((third.x - 215.0).abs() < 0.01);
        assert!((third.y - 110.0).abs() < 0.01);

        let fourth = placements[3].rect;
        assert!((fourth.x - 5.0).abs() < 0.01);
        assert!((fourth.y - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_images_centered_in_cells() {
        let canvas = CanvasRegion::new(210.0, 210.0, 5.0);
        // 2 images -> 1x2 grid, cells 97.5 x 200
        let pages = grid_layout(&measured(2, 100, 50), &canvas, &LayoutOptions::default());
        let rect = pages[0].placements[0].rect;

        assert!((rect.width - 97.5).abs() < 0.01);
        assert!((rect.height - 48.75).abs() < 0.01);
        assert!((rect.center_y() - 105.0).abs() < 0.01);
        assert!((rect.center_x() - (5.0 + 97.5 / 2.0)).abs() < 0.01);
    }

    #[test]
    fn test_many_images_stay_on_one_page() {
        let canvas = CanvasRegion::new(595.2756, 841.8898, 36.0);
        let pages = grid_layout(&measured(400, 640, 480), &canvas, &LayoutOptions::default());

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].placements.len(), 400);
        let area = canvas.usable_area();
        for placement in &pages[0].placements {
            assert!(area.contains(&placement.rect, 0.01));
        }
    }

    #[test]
    fn test_huge_count_keeps_positive_cells() {
        let canvas = CanvasRegion::new(595.2756, 841.8898, 36.0);
        let pages = grid_layout(&measured(12_000, 640, 480), &canvas, &LayoutOptions::default());

        let area = canvas.usable_area();
        assert_eq!(pages[0].placements.len(), 12_000);
        for placement in &pages[0].placements {
            assert!(placement.rect.width > 0.0 && placement.rect.height > 0.0);
            assert!(placement.scale > 0.0);
            assert!(area.contains(&placement.rect, 0.01));
        }
    }

    #[test]
    fn test_large_spacing_is_shrunk() {
        let canvas = CanvasRegion::new(595.2756, 841.8898, 36.0);
        let options = LayoutOptions {
            grid_spacing_pt: 300.0,
            ..Default::default()
        };
        let pages = grid_layout(&measured(9, 640, 480), &canvas, &options);

        let area = canvas.usable_area();
        let placements = &pages[0].placements;
        assert_eq!(placements.len(), 9);
        for (i, a) in placements.iter().enumerate() {
            assert!(a.rect.width > 0.0 && a.rect.height > 0.0);
            assert!(area.contains(&a.rect, 0.01));
            for b in &placements[i + 1..] {
                assert!(!a.rect.overlaps(&b.rect, 0.01));
            }
        }
    }

    #[test]
    fn test_axis_spacing_caps_gaps() {
        assert_eq!(axis_spacing(1, 100.0, 300.0), 300.0);
        assert_eq!(axis_spacing(3, 100.0, 5.0), 5.0);
        assert!((axis_spacing(3, 100.0, 300.0) - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_empty_input_has_no_pages() {
        let canvas = CanvasRegion::new(595.2756, 841.8898, 36.0);
        assert!(grid_layout(&[], &canvas, &LayoutOptions::default()).is_empty());
    }
}
