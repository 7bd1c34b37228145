// SPDX-License-Identifier: MPL-2.0
//! EXIF GPS coordinate extraction for image files.
//!
//! Reads the `GPSInfo` IFD of a file's EXIF block and converts the
//! degree/minute/second rational triples plus hemisphere references into
//! signed decimal degrees. Most photos carry no GPS data at all, so a missing
//! GPS block is a normal absent result, never an error.

use crate::coordinates::{dms_to_decimal, Coordinates};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Per-call extraction configuration.
#[derive(Debug, Clone, Copy)]
pub struct ExtractorOptions {
    /// When set, unreadable images and missing EXIF blocks degrade to an
    /// absent result instead of surfacing an error. A missing input file is
    /// fatal regardless.
    pub ignore_image_errors: bool,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            ignore_image_errors: true,
        }
    }
}

/// Extracts GPS coordinates from an image file's EXIF metadata.
///
/// Returns `Ok(None)` when the file carries no usable GPS data. The path must
/// reference an existing file; anything else is [`Error::FileNotFound`],
/// checked before any decoding attempt.
pub fn extract_coordinates<P: AsRef<Path>>(
    path: P,
    options: ExtractorOptions,
) -> Result<Option<Coordinates>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| Error::Io(e.to_string()))?;
    let mut reader = BufReader::new(file);

    let exif = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(_) if options.ignore_image_errors => return Ok(None),
        Err(err) => return Err(classify_read_error(&err)),
    };

    Ok(coordinates_from_exif(&exif))
}

/// Maps a kamadak-exif read failure onto the crate's error taxonomy.
///
/// `NotFound` means the container parsed fine but holds no EXIF block; every
/// other failure mode is an unreadable image.
fn classify_read_error(err: &exif::Error) -> Error {
    match err {
        exif::Error::NotFound(_) => Error::NoMetadata(err.to_string()),
        _ => Error::UnreadableImage(err.to_string()),
    }
}

/// Reads the GPS latitude/longitude pair from a parsed EXIF block.
fn coordinates_from_exif(exif: &exif::Exif) -> Option<Coordinates> {
    let latitude = signed_coordinate(
        exif,
        exif::Tag::GPSLatitude,
        exif::Tag::GPSLatitudeRef,
        "N",
    )?;
    let longitude = signed_coordinate(
        exif,
        exif::Tag::GPSLongitude,
        exif::Tag::GPSLongitudeRef,
        "E",
    )?;
    Coordinates::checked(latitude, longitude)
}

/// Decodes one coordinate axis: DMS triple plus hemisphere reference.
///
/// The sign flips whenever the reference letter differs from the positive
/// hemisphere (`N` for latitude, `E` for longitude).
fn signed_coordinate(
    exif: &exif::Exif,
    value_tag: exif::Tag,
    ref_tag: exif::Tag,
    positive_ref: &str,
) -> Option<f64> {
    let value_field = exif.get_field(value_tag, exif::In::PRIMARY)?;
    let ref_field = exif.get_field(ref_tag, exif::In::PRIMARY)?;

    let value = parse_dms(&value_field.value)?;
    let reference = ref_field.display_value().to_string();
    if reference.trim_matches('"') == positive_ref {
        Some(value)
    } else {
        Some(-value)
    }
}

/// Parses a GPS coordinate from EXIF rational values (degrees, minutes, seconds).
fn parse_dms(value: &exif::Value) -> Option<f64> {
    match value {
        exif::Value::Rational(rationals) if rationals.len() >= 3 => Some(dms_to_decimal(
            rationals[0].to_f64(),
            rationals[1].to_f64(),
            rationals[2].to_f64(),
        )),
        _ => None,
    }
}
