//! Universal Transverse Mercator projection
//!
//! This module implements the forward (geographic to UTM) and inverse (UTM to geographic)
//! Transverse Mercator projection on the WGS84 ellipsoid, using the standard Snyder/Karney
//! series expansion. It is the projection collaborator for [Location](crate::Location):
//! the rest of the crate never touches the projection math directly, it only calls
//! [to_utm] and [to_lat_lon] and propagates their errors.
//!
//! The projection covers zone numbers 1 through 60 and the standard latitude band letters
//! C through X (I and O excluded). The zone numbering honors the conventional exceptions
//! for southern Norway (zone 32V is widened) and Svalbard (zones 31X, 33X, 35X, and 37X).
//! Forward/inverse round trips recover the input to within roughly 1e-5 degrees and 0.1
//! meters for latitudes between 80°S and 84°N, which is sub-meter accuracy everywhere the
//! projection is defined.
//!
//! # Valid ranges
//! - Forward: latitude in [-80°, 84°], longitude in [-180°, 180°]
//! - Inverse: easting in [100,000 m, 1,000,000 m), northing in [0 m, 10,000,000 m],
//!   zone number in 1..=60, zone letter in C..X excluding I and O (case-insensitive)
//!
//! Inputs outside these ranges are rejected with a [ProjectionError]; nothing is clamped
//! or silently corrected.

use crate::earth::{ECCENTRICITY_SQUARED, EQUATORIAL_RADIUS};

/// Errors raised when coordinates are outside the valid domain of the UTM projection
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    #[error("latitude {0}° out of range (must be between 80°S and 84°N)")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0}° out of range (must be between 180°W and 180°E)")]
    LongitudeOutOfRange(f64),

    #[error("easting {0} m out of range (must be between 100,000 m and 1,000,000 m)")]
    EastingOutOfRange(f64),

    #[error("northing {0} m out of range (must be between 0 m and 10,000,000 m)")]
    NorthingOutOfRange(f64),

    #[error("zone number {0} out of range (must be between 1 and 60)")]
    ZoneNumberOutOfRange(u8),

    #[error("invalid zone letter '{0}' (must be C..X, excluding I and O)")]
    InvalidZoneLetter(char),
}

/// UTM central scale factor ($k_0$)
const K0: f64 = 0.9996;
/// False easting applied to every zone, meters
const FALSE_EASTING: f64 = 500_000.0;
/// False northing applied in the southern hemisphere, meters
const FALSE_NORTHING: f64 = 10_000_000.0;

const E: f64 = ECCENTRICITY_SQUARED;
const E2: f64 = E * E;
const E3: f64 = E2 * E;
/// Second eccentricity squared ($e'^2 = e^2 / (1 - e^2)$)
const E_P2: f64 = E / (1.0 - E);

// Coefficients of the meridian arc series
const M1: f64 = 1.0 - E / 4.0 - 3.0 * E2 / 64.0 - 5.0 * E3 / 256.0;
const M2: f64 = 3.0 * E / 8.0 + 3.0 * E2 / 32.0 + 45.0 * E3 / 1024.0;
const M3: f64 = 15.0 * E2 / 256.0 + 45.0 * E3 / 1024.0;
const M4: f64 = 35.0 * E3 / 3072.0;

/// Latitude band letters from 80°S to 84°N in 8° steps; X is repeated because the final
/// band spans 12°
const ZONE_LETTERS: &str = "CDEFGHJKLMNPQRSTUVWXX";

/// Wrap an angle in radians to the range [-π, π)
fn mod_angle(value: f64) -> f64 {
    (value + std::f64::consts::PI).rem_euclid(2.0 * std::f64::consts::PI) - std::f64::consts::PI
}

/// Determine the UTM zone number for a geographic coordinate
///
/// Zones are 6° wide, numbered 1 through 60 eastward from 180°W. The conventional
/// exceptions are applied: zone 32V is widened over southern Norway, and the Svalbard
/// bands use zones 31, 33, 35, and 37 only.
///
/// # Example
/// ```rust
/// use gps_utils::utm;
/// assert_eq!(utm::lat_lon_to_zone_number(18.0, -66.5), 19);
/// assert_eq!(utm::lat_lon_to_zone_number(60.0, 5.0), 32); // Norway exception
/// ```
pub fn lat_lon_to_zone_number(latitude: f64, longitude: f64) -> u8 {
    if (56.0..64.0).contains(&latitude) && (3.0..12.0).contains(&longitude) {
        return 32;
    }
    if (72.0..=84.0).contains(&latitude) && longitude >= 0.0 {
        if longitude < 9.0 {
            return 31;
        } else if longitude < 21.0 {
            return 33;
        } else if longitude < 33.0 {
            return 35;
        } else if longitude < 42.0 {
            return 37;
        }
    }
    (((longitude + 180.0) / 6.0) as u32 % 60) as u8 + 1
}

/// Determine the latitude band letter for a latitude, or `None` outside [-80°, 84°]
pub fn lat_to_zone_letter(latitude: f64) -> Option<char> {
    if (-80.0..=84.0).contains(&latitude) {
        let index = ((latitude + 80.0) as usize) >> 3;
        Some(ZONE_LETTERS.as_bytes()[index] as char)
    } else {
        None
    }
}

/// Central meridian of a UTM zone in degrees
pub fn zone_number_to_central_longitude(zone_number: u8) -> f64 {
    (zone_number as f64 - 1.0) * 6.0 - 180.0 + 3.0
}

/// Forward projection: geographic coordinates to UTM
///
/// Projects a WGS84 latitude/longitude onto the UTM grid, selecting the zone number and
/// latitude band letter for the point.
///
/// # Arguments
/// * `latitude` - Latitude in degrees, must be in [-80°, 84°]
/// * `longitude` - Longitude in degrees, must be in [-180°, 180°]
///
/// # Returns
/// `(easting, northing, zone_number, zone_letter)` with easting/northing in meters
///
/// # Errors
/// [ProjectionError::LatitudeOutOfRange] or [ProjectionError::LongitudeOutOfRange] when
/// the input is outside the projection's domain
///
/// # Example
/// ```rust
/// use gps_utils::utm;
/// let (easting, northing, zone_number, zone_letter) = utm::to_utm(18.0, -66.5).unwrap();
/// assert_eq!(zone_number, 19);
/// assert_eq!(zone_letter, 'Q');
/// ```
pub fn to_utm(latitude: f64, longitude: f64) -> Result<(f64, f64, u8, char), ProjectionError> {
    if !(-80.0..=84.0).contains(&latitude) {
        return Err(ProjectionError::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ProjectionError::LongitudeOutOfRange(longitude));
    }
    let zone_number = lat_lon_to_zone_number(latitude, longitude);
    let zone_letter =
        lat_to_zone_letter(latitude).ok_or(ProjectionError::LatitudeOutOfRange(latitude))?;

    let lat_rad = latitude.to_radians();
    let lat_sin = lat_rad.sin();
    let lat_cos = lat_rad.cos();
    let lat_tan = lat_sin / lat_cos;
    let lat_tan2 = lat_tan * lat_tan;
    let lat_tan4 = lat_tan2 * lat_tan2;

    let lon_rad = longitude.to_radians();
    let central_lon_rad = zone_number_to_central_longitude(zone_number).to_radians();

    let n = EQUATORIAL_RADIUS / (1.0 - E * lat_sin * lat_sin).sqrt();
    let c = E_P2 * lat_cos * lat_cos;

    let a = lat_cos * mod_angle(lon_rad - central_lon_rad);
    let a2 = a * a;
    let a3 = a2 * a;
    let a4 = a3 * a;
    let a5 = a4 * a;
    let a6 = a5 * a;

    // Meridian arc length from the equator
    let m = EQUATORIAL_RADIUS
        * (M1 * lat_rad - M2 * (2.0 * lat_rad).sin() + M3 * (4.0 * lat_rad).sin()
            - M4 * (6.0 * lat_rad).sin());

    let easting = K0
        * n
        * (a + a3 / 6.0 * (1.0 - lat_tan2 + c)
            + a5 / 120.0 * (5.0 - 18.0 * lat_tan2 + lat_tan4 + 72.0 * c - 58.0 * E_P2))
        + FALSE_EASTING;
    let mut northing = K0
        * (m + n
            * lat_tan
            * (a2 / 2.0
                + a4 / 24.0 * (5.0 - lat_tan2 + 9.0 * c + 4.0 * c * c)
                + a6 / 720.0 * (61.0 - 58.0 * lat_tan2 + lat_tan4 + 600.0 * c - 330.0 * E_P2)));
    if latitude < 0.0 {
        northing += FALSE_NORTHING;
    }
    Ok((easting, northing, zone_number, zone_letter))
}

/// Inverse projection: UTM coordinates to geographic
///
/// Recovers the WGS84 latitude/longitude of a UTM grid position. The zone letter only
/// selects the hemisphere (letters N and above are northern); within a hemisphere the
/// inverse is independent of the band.
///
/// # Arguments
/// * `easting` - Easting in meters, must be in [100,000, 1,000,000)
/// * `northing` - Northing in meters, must be in [0, 10,000,000]
/// * `zone_number` - UTM zone number, 1 through 60
/// * `zone_letter` - Latitude band letter, C..X excluding I and O (case-insensitive)
///
/// # Returns
/// `(latitude, longitude)` in degrees
///
/// # Errors
/// The corresponding [ProjectionError] variant when any argument is outside its valid
/// range
///
/// # Example
/// ```rust
/// use gps_utils::utm;
/// let (lat, lon) = utm::to_lat_lon(500000.0, 0.0, 31, 'N').unwrap();
/// assert!(lat.abs() < 1e-9);
/// assert!((lon - 3.0).abs() < 1e-9);
/// ```
pub fn to_lat_lon(
    easting: f64,
    northing: f64,
    zone_number: u8,
    zone_letter: char,
) -> Result<(f64, f64), ProjectionError> {
    if !(100_000.0..1_000_000.0).contains(&easting) {
        return Err(ProjectionError::EastingOutOfRange(easting));
    }
    if !(0.0..=FALSE_NORTHING).contains(&northing) {
        return Err(ProjectionError::NorthingOutOfRange(northing));
    }
    if !(1..=60).contains(&zone_number) {
        return Err(ProjectionError::ZoneNumberOutOfRange(zone_number));
    }
    let letter = zone_letter.to_ascii_uppercase();
    if !ZONE_LETTERS.contains(letter) {
        return Err(ProjectionError::InvalidZoneLetter(zone_letter));
    }
    let northern = letter >= 'N';

    let x = easting - FALSE_EASTING;
    let y = if northern {
        northing
    } else {
        northing - FALSE_NORTHING
    };

    // Footpoint latitude from the meridian arc series
    let m = y / K0;
    let mu = m / (EQUATORIAL_RADIUS * M1);

    let sqrt_e = (1.0 - E).sqrt();
    let e = (1.0 - sqrt_e) / (1.0 + sqrt_e);
    let e2 = e * e;
    let e3 = e2 * e;
    let e4 = e3 * e;
    let e5 = e4 * e;
    let p2 = 3.0 / 2.0 * e - 27.0 / 32.0 * e3 + 269.0 / 512.0 * e5;
    let p3 = 21.0 / 16.0 * e2 - 55.0 / 32.0 * e4;
    let p4 = 151.0 / 96.0 * e3 - 417.0 / 128.0 * e5;
    let p5 = 1097.0 / 512.0 * e4;

    let p_rad = mu
        + p2 * (2.0 * mu).sin()
        + p3 * (4.0 * mu).sin()
        + p4 * (6.0 * mu).sin()
        + p5 * (8.0 * mu).sin();

    let p_sin = p_rad.sin();
    let p_sin2 = p_sin * p_sin;
    let p_cos = p_rad.cos();
    let p_tan = p_sin / p_cos;
    let p_tan2 = p_tan * p_tan;
    let p_tan4 = p_tan2 * p_tan2;

    let ep_sin = 1.0 - E * p_sin2;
    let n = EQUATORIAL_RADIUS / ep_sin.sqrt();
    let r = (1.0 - E) / ep_sin;

    let c = E_P2 * p_cos * p_cos;
    let c2 = c * c;

    let d = x / (n * K0);
    let d2 = d * d;
    let d3 = d2 * d;
    let d4 = d3 * d;
    let d5 = d4 * d;
    let d6 = d5 * d;

    let latitude = p_rad
        - (p_tan / r)
            * (d2 / 2.0 - d4 / 24.0 * (5.0 + 3.0 * p_tan2 + 10.0 * c - 4.0 * c2 - 9.0 * E_P2)
                + d6 / 720.0
                    * (61.0 + 90.0 * p_tan2 + 298.0 * c + 45.0 * p_tan4
                        - 252.0 * E_P2
                        - 3.0 * c2));
    let longitude = (d - d3 / 6.0 * (1.0 + 2.0 * p_tan2 + c)
        + d5 / 120.0 * (5.0 - 2.0 * c + 28.0 * p_tan2 - 3.0 * c2 + 8.0 * E_P2 + 24.0 * p_tan4))
        / p_cos;
    let longitude = mod_angle(longitude + zone_number_to_central_longitude(zone_number).to_radians());

    Ok((latitude.to_degrees(), longitude.to_degrees()))
}
