//! Flow layout
//!
//! Greedy row filling: images are sized against the space left in the
//! current row and page, packed left-to-right into rows, and rows are
//! stacked top-down until the page runs out. No backtracking.

use crate::options::LayoutOptions;

use super::{CanvasRegion, MeasuredImage, Page, Placement, Rect, fit_within};

/// An image sized for its row
#[derive(Debug, Clone, Copy)]
struct RowItem {
    image: usize,
    width: f32,
    height: f32,
    scale: f32,
}

#[derive(Debug, Clone, Default)]
struct Row {
    items: Vec<RowItem>,
    height: f32,
}

impl Row {
    fn width(&self, gap: f32) -> f32 {
        let images: f32 = self.items.iter().map(|item| item.width).sum();
        images + self.items.len().saturating_sub(1) as f32 * gap
    }
}

/// Arrange images into as many pages as needed.
pub fn flow_layout(
    images: &[MeasuredImage],
    canvas: &CanvasRegion,
    options: &LayoutOptions,
) -> Vec<Page> {
    let area = canvas.usable_area();
    let mut pages = Vec::new();
    let mut cursor = 0;

    while cursor < images.len() {
        let (rows, next) = fill_page(images, cursor, &area, options);

        if rows.is_empty() {
            // Nothing fits the row minimums: give the image a page of its own
            let image = &images[cursor];
            let (width, height, scale) = fit_within(image.dimensions, area.width, area.height);
            pages.push(Page::new(vec![Placement {
                image: image.index,
                rect: area.centered(width, height),
                scale,
            }]));
            cursor += 1;
        } else {
            pages.push(place_rows(&rows, &area, options.flow_gap_pt));
            cursor = next;
        }
    }

    pages
}

/// Fill one page with rows starting at `start`.
///
/// Returns the rows and the index of the first image not on this page.
fn fill_page(
    images: &[MeasuredImage],
    start: usize,
    area: &Rect,
    options: &LayoutOptions,
) -> (Vec<Row>, usize) {
    let gap = options.flow_gap_pt;
    let min_remaining = options.flow_min_remaining_pt;
    let max_width = area.width * options.flow_max_width_fraction;
    let max_height = area.height * options.flow_max_height_fraction;

    let mut rows = Vec::new();
    let mut cursor = start;
    let mut remaining_height = area.height;

    while cursor < images.len() && remaining_height > min_remaining {
        let row_start = cursor;
        let mut row = Row::default();
        let mut remaining_width = area.width;

        while cursor < images.len() && remaining_width > min_remaining {
            let image = &images[cursor];
            let (width, height, scale) = fit_within(
                image.dimensions,
                remaining_width.min(max_width),
                remaining_height.min(max_height),
            );

            if width > remaining_width {
                break;
            }

            row.items.push(RowItem {
                image: image.index,
                width,
                height,
                scale,
            });
            row.height = row.height.max(height);
            remaining_width -= width + gap;
            cursor += 1;
        }

        if row.items.is_empty() || row.height > remaining_height {
            // The rejected row's images start the next page
            cursor = row_start;
            break;
        }

        remaining_height -= row.height + gap;
        rows.push(row);
    }

    (rows, cursor)
}

/// Turn rows into placements, each row centered horizontally and its
/// images centered vertically within the row.
fn place_rows(rows: &[Row], area: &Rect, gap: f32) -> Page {
    let mut placements = Vec::new();
    let mut current_y = area.top();

    for row in rows {
        let start_x = area.x + (area.width - row.width(gap)) / 2.0;
        current_y -= row.height;

        let mut current_x = start_x;
        for item in &row.items {
            let y = current_y + (row.height - item.height) / 2.0;
            let rect = Rect::new(current_x, y, item.width, item.height);
            debug_assert!(area.contains(&rect, 0.01), "{:?} outside {:?}", rect, area);
            placements.push(Placement {
                image: item.image,
                rect,
                scale: item.scale,
            });
            current_x += item.width + gap;
        }

        current_y -= gap;
    }

    Page::new(placements)
}
