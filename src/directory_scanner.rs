// SPDX-License-Identifier: MPL-2.0
//! Directory scanning for geotagged JPEG files.
//!
//! Lists a folder, keeps the JPEG files, and runs the coordinate extractor
//! over each one in listing order. Batch scans keep going past unreadable
//! files so one corrupt photo does not abort a pass over a large collection.

use crate::coordinates::Coordinates;
use crate::error::{Error, Result};
use crate::extractor::{self, ExtractorOptions};
use std::path::{Path, PathBuf};

/// Checks if a file has a supported image extension (`.jpg`/`.jpeg`).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}

/// Lists the JPEG files in a directory.
///
/// The result keeps the operating system's listing order; output coordinate
/// order follows it, so no sorting happens here.
pub fn list_images(directory: &Path) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(Error::Io(format!(
            "Not a directory: {}",
            directory.display()
        )));
    }

    let mut images = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    Ok(images)
}

/// Extracts coordinates from every JPEG in a directory.
///
/// Returns the present coordinate pairs in listing order; files without GPS
/// data are skipped silently.
pub fn scan_folder(directory: &Path, options: ExtractorOptions) -> Result<Vec<Coordinates>> {
    scan_folder_with_progress(directory, options, |_| {})
}

/// Like [`scan_folder`], invoking `progress` once per examined file so a
/// caller can drive a progress display.
pub fn scan_folder_with_progress<F>(
    directory: &Path,
    options: ExtractorOptions,
    mut progress: F,
) -> Result<Vec<Coordinates>>
where
    F: FnMut(&Path),
{
    let mut found = Vec::new();
    for path in list_images(directory)? {
        progress(&path);
        if let Some(coords) = extractor::extract_coordinates(&path, options)? {
            found.push(coords);
        }
    }
    Ok(found)
}
