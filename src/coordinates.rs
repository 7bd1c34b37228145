// SPDX-License-Identifier: MPL-2.0
//! The `Coordinates` value type and degree/minute/second conversion helpers.
//!
//! A coordinate pair is either fully present (both components valid non-zero
//! decimal degrees) or fully absent; the absent state is represented by
//! `Option::None` and [`Coordinates::checked`] is the only way partial input
//! enters the crate, so a half-set pair cannot be constructed.

use std::fmt;

/// A latitude/longitude pair in signed decimal degrees.
///
/// Created once by the extractor and read-only thereafter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees (positive north).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive east).
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `Some` only when both components are finite and non-zero.
    ///
    /// A zero component marks an unset coordinate in the data model, so a
    /// pair with either component at exactly 0.0 counts as absent.
    pub fn checked(latitude: f64, longitude: f64) -> Option<Self> {
        if latitude != 0.0
            && longitude != 0.0
            && latitude.is_finite()
            && longitude.is_finite()
        {
            Some(Self::new(latitude, longitude))
        } else {
            None
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        write!(
            f,
            "{:.6}° {}, {:.6}° {}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir
        )
    }
}

/// Converts a degree/minute/second triple to decimal degrees.
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// Converts unsigned decimal degrees to EXIF-style DMS rationals.
///
/// Degrees and minutes are whole rationals; seconds are stored with 1/100
/// precision, which bounds the round-trip error to well under 1e-4 degrees.
pub fn decimal_to_dms(decimal: f64) -> [(u32, u32); 3] {
    let degrees = decimal.floor();
    let minutes_decimal = (decimal - degrees) * 60.0;
    let minutes = minutes_decimal.floor();
    let seconds = (minutes_decimal - minutes) * 60.0;

    [
        (degrees as u32, 1),
        (minutes as u32, 1),
        ((seconds * 100.0) as u32, 100),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_accepts_ordinary_coordinates() {
        let coords = Coordinates::checked(48.8566, 2.3522).expect("present pair");
        assert_eq!(coords.latitude, 48.8566);
        assert_eq!(coords.longitude, 2.3522);
    }

    #[test]
    fn checked_rejects_zero_components() {
        assert!(Coordinates::checked(0.0, 2.3522).is_none());
        assert!(Coordinates::checked(48.8566, 0.0).is_none());
        assert!(Coordinates::checked(0.0, 0.0).is_none());
    }

    #[test]
    fn checked_rejects_non_finite_components() {
        assert!(Coordinates::checked(f64::NAN, 2.3522).is_none());
        assert!(Coordinates::checked(48.8566, f64::INFINITY).is_none());
    }

    #[test]
    fn display_formats_hemispheres() {
        assert_eq!(
            Coordinates::new(48.8566, 2.3522).to_string(),
            "48.856600° N, 2.352200° E"
        );
        assert_eq!(
            Coordinates::new(-33.8688, 151.2093).to_string(),
            "33.868800° S, 151.209300° E"
        );
        assert_eq!(
            Coordinates::new(40.7128, -74.0060).to_string(),
            "40.712800° N, 74.006000° W"
        );
    }

    #[test]
    fn dms_to_decimal_sums_components() {
        assert_eq!(dms_to_decimal(48.0, 51.0, 23.76), 48.0 + 51.0 / 60.0 + 23.76 / 3600.0);
        assert_eq!(dms_to_decimal(10.0, 0.0, 0.0), 10.0);
    }

    #[test]
    fn decimal_to_dms_splits_components() {
        let [d, m, s] = decimal_to_dms(48.8566);
        assert_eq!(d, (48, 1));
        assert_eq!(m, (51, 1));
        // 0.8566 deg = 51.396 min; 0.396 min = 23.76 sec
        assert_eq!(s.1, 100);
        assert!((f64::from(s.0) / 100.0 - 23.76).abs() < 0.02);
    }

    #[test]
    fn dms_round_trip_is_close() {
        for &value in &[48.8566, 2.3522, 151.2093, 74.0060, 0.0001, 89.9999] {
            let [d, m, s] = decimal_to_dms(value);
            let back = dms_to_decimal(
                f64::from(d.0) / f64::from(d.1),
                f64::from(m.0) / f64::from(m.1),
                f64::from(s.0) / f64::from(s.1),
            );
            assert!(
                (back - value).abs() < 1e-4,
                "round trip drifted for {}: {}",
                value,
                back
            );
        }
    }
}
