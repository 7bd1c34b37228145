// SPDX-License-Identifier: MPL-2.0
//! `geo_image_mapper` extracts GPS coordinates from JPEG EXIF metadata and
//! builds URLs that open those coordinates on a web map (Yandex or Google).
//!
//! The crate is split into a small pure core — the coordinate extractor and
//! the map URL builder — plus the thin surfaces that drive it: a command-line
//! tool and a minimal Iced desktop form.

#![doc(html_root_url = "https://docs.rs/geo_image_mapper/0.1.0")]

pub mod app;
pub mod config;
pub mod coordinates;
pub mod directory_scanner;
pub mod error;
pub mod extractor;
pub mod map_url;
