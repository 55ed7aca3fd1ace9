//! Finding candidate images and reading their dimensions

use crate::constants::SUPPORTED_EXTENSIONS;
use crate::layout::{ImageSet, MeasuredImage};
use crate::types::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why an image's dimensions could not be read
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("{0}")]
    Image(#[from] image::ImageError),
    #[error("image has no area ({width}x{height})")]
    Empty { width: u32, height: u32 },
}

/// Reads the natural pixel size of an image
pub trait DimensionProbe {
    fn probe_dimensions(&self, source: &Path) -> std::result::Result<Dimensions, ProbeError>;
}

/// Probe backed by the `image` crate; reads only the file header.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageProbe;

impl DimensionProbe for ImageProbe {
    fn probe_dimensions(&self, source: &Path) -> std::result::Result<Dimensions, ProbeError> {
        let (width, height) = image::image_dimensions(source)?;
        if width == 0 || height == 0 {
            return Err(ProbeError::Empty { width, height });
        }
        Ok(Dimensions::new(width, height))
    }
}

/// Whether the path has one of the supported image extensions
/// (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// List supported image files directly inside `folder`, sorted by
/// lowercase file name.
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.exists() {
        return Err(CollageError::FolderNotFound(folder.to_path_buf()));
    }
    if !folder.is_dir() {
        return Err(CollageError::NotADirectory(folder.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }

    files.sort_by_cached_key(|path| sort_key(path));
    Ok(files)
}

fn sort_key(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Probe every candidate in order. Failures are logged and left out of
/// the returned set; their indices are not reused.
pub fn probe_images<P: DimensionProbe + ?Sized>(sources: &[PathBuf], probe: &P) -> ImageSet {
    let images = sources
        .iter()
        .enumerate()
        .filter_map(|(index, source)| match probe.probe_dimensions(source) {
            Ok(dimensions) => Some(MeasuredImage { index, dimensions }),
            Err(e) => {
                log::warn!("Error processing {}: {}", source.display(), e);
                None
            }
        })
        .collect();

    ImageSet {
        candidates: sources.len(),
        images,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_image(Path::new("a.jpg")));
        assert!(is_supported_image(Path::new("a.JPEG")));
        assert!(is_supported_image(Path::new("dir/b.Png")));
        assert!(is_supported_image(Path::new("c.tif")));
        assert!(is_supported_image(Path::new("c.TIFF")));
        assert!(is_supported_image(Path::new("d.webp")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
        assert!(!is_supported_image(Path::new("archive.png.zip")));
    }

    struct FixedProbe;

    impl DimensionProbe for FixedProbe {
        fn probe_dimensions(&self, source: &Path) -> std::result::Result<Dimensions, ProbeError> {
            if source.to_string_lossy().contains("bad") {
                Err(ProbeError::Empty {
                    width: 0,
                    height: 0,
                })
            } else {
                Ok(Dimensions::new(40, 30))
            }
        }
    }

    #[test]
    fn test_probe_skips_failures_keeping_indices() {
        let sources: Vec<PathBuf> = ["a.png", "bad.png", "c.png"]
            .iter()
            .map(PathBuf::from)
            .collect();
        let set = probe_images(&sources, &FixedProbe);

        assert_eq!(set.candidates, 3);
        assert_eq!(set.failures(), 1);
        let indices: Vec<usize> = set.images.iter().map(|i| i.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }
}
