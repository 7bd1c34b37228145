// SPDX-License-Identifier: MPL-2.0
//! Map URL construction for the supported web map providers.
//!
//! Pure string building, no I/O. The produced URLs are consumed verbatim by
//! external services, so every format here is pinned byte-for-byte by tests.
//! Note the provider-mandated axis orders: Google takes `lat,lon`, Yandex
//! takes `lon,lat`.

use crate::coordinates::Coordinates;
use crate::error::{Error, Result};

/// Default maximum number of markers on a multi-point map.
pub const DEFAULT_MARKERS_LIMIT: usize = 200;

const GOOGLE_MULTI_ZOOM: u32 = 10;
const YANDEX_ZOOM: u32 = 12;

/// The closed set of supported map providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapProvider {
    Google,
    Yandex,
}

impl MapProvider {
    /// Resolves a provider from its case-insensitive selector or short alias.
    ///
    /// An unrecognized selector is an error; there is no silent default.
    pub fn from_selector(selector: &str) -> Result<Self> {
        match selector.to_lowercase().as_str() {
            "google" | "g" => Ok(MapProvider::Google),
            "yandex" | "y" => Ok(MapProvider::Yandex),
            _ => Err(Error::UnknownProvider(selector.to_string())),
        }
    }

    /// Builds a URL opening the map on a single point.
    pub fn single(&self, coords: &Coordinates) -> String {
        match self {
            MapProvider::Google => format!(
                "https://www.google.com/maps?q={},{}",
                fmt_coord(coords.latitude),
                fmt_coord(coords.longitude)
            ),
            MapProvider::Yandex => format!(
                "https://yandex.ru/maps/?pt={}%2C{}&z={}",
                fmt_coord(coords.longitude),
                fmt_coord(coords.latitude),
                YANDEX_ZOOM
            ),
        }
    }

    /// Builds a URL placing a marker on each of the first `markers_limit`
    /// coordinates, centered on their arithmetic mean.
    ///
    /// Truncation happens before the center computation, so the displayed
    /// center reflects only the rendered markers. Callers are responsible for
    /// warning the user when the list was cut short.
    pub fn multiple(&self, coords: &[Coordinates], markers_limit: usize) -> Result<String> {
        if coords.is_empty() {
            return Err(Error::EmptyCoordinateList);
        }

        let shown = &coords[..markers_limit.min(coords.len())];
        let center = mean_center(shown);

        let url = match self {
            MapProvider::Google => {
                let mut url = String::from("https://www.google.com/maps/dir/");
                for c in shown {
                    url.push_str(&format!(
                        "{},{}/",
                        fmt_coord(c.latitude),
                        fmt_coord(c.longitude)
                    ));
                }
                // The "/@" forces discrete waypoints instead of a routed path.
                url.push_str("/@");
                url.push_str(&format!(
                    "{},{},{}z",
                    fmt_coord(center.latitude),
                    fmt_coord(center.longitude),
                    GOOGLE_MULTI_ZOOM
                ));
                url
            }
            MapProvider::Yandex => {
                let points: Vec<String> = shown
                    .iter()
                    .map(|c| format!("{},{}", fmt_coord(c.longitude), fmt_coord(c.latitude)))
                    .collect();
                format!(
                    "https://yandex.ru/maps/?pt={}&ll={},{}&z={}",
                    points.join("~"),
                    fmt_coord(center.longitude),
                    fmt_coord(center.latitude),
                    YANDEX_ZOOM
                )
            }
        };

        Ok(url)
    }
}

/// Arithmetic mean of latitudes and longitudes over a non-empty slice.
fn mean_center(coords: &[Coordinates]) -> Coordinates {
    let count = coords.len() as f64;
    let (lat_sum, lon_sum) = coords.iter().fold((0.0, 0.0), |(lat, lon), c| {
        (lat + c.latitude, lon + c.longitude)
    });
    Coordinates::new(lat_sum / count, lon_sum / count)
}

/// Formats a coordinate component the way the reference URLs expect.
///
/// Whole numbers keep a trailing `.0` (`10.0`, not `10`).
fn fmt_coord(value: f64) -> String {
    let rendered = value.to_string();
    if rendered.contains('.') {
        rendered
    } else {
        format!("{rendered}.0")
    }
}
