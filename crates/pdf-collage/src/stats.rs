use crate::layout::{ImageSet, Page};
use crate::types::*;

/// Calculate statistics for a laid-out collage
pub fn calculate_statistics(images: &ImageSet, pages: &[Page]) -> CollageStatistics {
    let placements_per_page: Vec<usize> = pages.iter().map(|page| page.placements.len()).collect();

    CollageStatistics {
        candidates: images.candidates,
        measured: images.images.len(),
        probe_failures: images.failures(),
        pages: pages.len(),
        placements: placements_per_page.iter().sum(),
        placements_per_page,
    }
}
