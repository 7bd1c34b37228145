// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks across the public surface: geotagged JPEG fixtures go
//! through the extractor, the scanner, and the URL builder.

use geo_image_mapper::coordinates::{decimal_to_dms, Coordinates};
use geo_image_mapper::directory_scanner;
use geo_image_mapper::error::Error;
use geo_image_mapper::extractor::{extract_coordinates, ExtractorOptions};
use geo_image_mapper::map_url::{MapProvider, DEFAULT_MARKERS_LIMIT};
use little_exif::exif_tag::ExifTag;
use little_exif::metadata::Metadata;
use little_exif::rational::uR64;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn dms_rationals(decimal: f64) -> Vec<uR64> {
    decimal_to_dms(decimal)
        .iter()
        .map(|&(nominator, denominator)| uR64 {
            nominator,
            denominator,
        })
        .collect()
}

/// Writes a 1x1 JPEG carrying a synthetic EXIF GPS block.
fn create_geotagged_jpeg(dir: &Path, name: &str, lat: f64, lon: f64) -> PathBuf {
    let path = dir.join(name);
    let img = image_rs::RgbImage::new(1, 1);
    image_rs::DynamicImage::ImageRgb8(img)
        .save(&path)
        .expect("failed to encode test jpeg");

    let mut metadata = Metadata::new();
    let lat_ref = if lat >= 0.0 { "N" } else { "S" };
    let lon_ref = if lon >= 0.0 { "E" } else { "W" };
    metadata.set_tag(ExifTag::GPSLatitudeRef(lat_ref.to_string()));
    metadata.set_tag(ExifTag::GPSLatitude(dms_rationals(lat.abs())));
    metadata.set_tag(ExifTag::GPSLongitudeRef(lon_ref.to_string()));
    metadata.set_tag(ExifTag::GPSLongitude(dms_rationals(lon.abs())));
    metadata
        .write_to_file(&path)
        .expect("failed to write test exif");

    path
}

#[test]
fn geotagged_file_maps_to_single_point_urls() {
    let dir = tempdir().expect("temp dir");
    let path = create_geotagged_jpeg(dir.path(), "sydney.jpg", -33.8688, 151.2093);

    let coords = extract_coordinates(&path, ExtractorOptions::default())
        .expect("extraction succeeds")
        .expect("coordinates present");

    assert!((coords.latitude + 33.8688).abs() < 1e-4);
    assert!((coords.longitude - 151.2093).abs() < 1e-4);

    let google = MapProvider::Google.single(&coords);
    assert!(google.starts_with("https://www.google.com/maps?q=-33.86"));

    let yandex = MapProvider::Yandex.single(&coords);
    assert!(yandex.starts_with("https://yandex.ru/maps/?pt=151.20"));
    assert!(yandex.ends_with("&z=12"));
}

#[test]
fn folder_scan_feeds_the_multi_point_builder() {
    let dir = tempdir().expect("temp dir");
    create_geotagged_jpeg(dir.path(), "a.jpg", 10.0, 20.0);
    create_geotagged_jpeg(dir.path(), "b.jpeg", 30.0, 40.0);

    // A JPEG without GPS data and a non-image are both skipped.
    let plain = dir.path().join("plain.jpg");
    image_rs::DynamicImage::ImageRgb8(image_rs::RgbImage::new(1, 1))
        .save(&plain)
        .expect("failed to encode test jpeg");
    std::fs::write(dir.path().join("notes.txt"), "not an image").expect("write");

    let coords_list = directory_scanner::scan_folder(dir.path(), ExtractorOptions::default())
        .expect("scan succeeds");
    assert_eq!(coords_list.len(), 2);

    let url = MapProvider::Yandex
        .multiple(&coords_list, DEFAULT_MARKERS_LIMIT)
        .expect("url builds");
    assert!(url.starts_with("https://yandex.ru/maps/?pt="));
    assert!(url.contains("&ll="));
    assert!(url.ends_with("&z=12"));
}

#[test]
fn missing_file_is_file_not_found_under_both_policies() {
    let missing = Path::new("/nonexistent/photo.jpg");

    for ignore_image_errors in [true, false] {
        let result = extract_coordinates(
            missing,
            ExtractorOptions {
                ignore_image_errors,
            },
        );
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }
}

#[test]
fn encoded_point_round_trips_through_exif() {
    let dir = tempdir().expect("temp dir");
    let point = Coordinates::new(59.9311, 30.3609);
    let path = create_geotagged_jpeg(dir.path(), "spb.jpg", point.latitude, point.longitude);

    let decoded = extract_coordinates(&path, ExtractorOptions::default())
        .expect("extraction succeeds")
        .expect("coordinates present");

    assert!((decoded.latitude - point.latitude).abs() < 1e-4);
    assert!((decoded.longitude - point.longitude).abs() < 1e-4);
}

#[test]
fn unknown_provider_never_defaults() {
    let err = MapProvider::from_selector("openstreetmap").unwrap_err();
    assert!(matches!(err, Error::UnknownProvider(_)));
}
