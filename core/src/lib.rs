//! GPS/UTM coordinate utilities for robotic vehicle navigation
//!
//! This crate provides a small set of coordinate types and pure functions for navigation
//! stacks that need to reason about object positions relative to a vehicle and convert
//! them to absolute GPS coordinates. A typical flow: a perception sensor reports an object
//! at some angle relative to the vehicle's bow and some distance away; the vehicle's
//! compass reports its heading; [relative_angle_to_cardinal_angle] turns the detection
//! angle into a bearing from true north, [relative_radial_to_global_coordinates] projects
//! that bearing and distance from the vehicle's [Location] into the object's absolute
//! position, and [distance_between_locations] measures separations anywhere along the way.
//!
//! This crate is primarily built off of three additional dependencies:
//! - [`nalgebra`](https://crates.io/crates/nalgebra): Provides the linear algebra for the
//!   planar rotation and displacement operations.
//! - [`serde`](https://crates.io/crates/serde): Provides serialization of the value types
//!   so downstream stacks can record them.
//! - [`thiserror`](https://crates.io/crates/thiserror): Provides the [ProjectionError]
//!   type raised for coordinates outside the projection's domain.
//!
//! ## Crate overview
//!
//! This crate is organized into the following modules:
//! - [earth]: Earth model constants and the haversine great-circle distance.
//! - [utm]: The Universal Transverse Mercator projection (forward and inverse) and its
//!   error type.
//!
//! The top level holds the two value types and the bearing/projection functions:
//! - [Location]: an immutable coordinate entity carrying both geographic (latitude,
//!   longitude) and projected (easting, northing, zone) representations of one point.
//! - [Attitude]: an immutable yaw/roll/pitch value object carrying both degree and radian
//!   representations.
//! - [normalize_angle], [relative_angle_to_cardinal_angle],
//!   [relative_radial_to_global_coordinates], and [distance_between_locations].
//!
//! ## Coordinate conventions
//!
//! Bearings ("cardinal angles") are measured clockwise from true north and normalized
//! into [0°, 360°), so north is 0°, east is 90°, south is 180°, and west is 270°.
//! Vehicle-relative angles are measured clockwise from the vehicle's own reference axis
//! (by default its bow). Yaw is the heading of that axis, clockwise from true north.
//! Projected coordinates are UTM easting/northing in meters; planar operations treat
//! easting as x (east positive) and northing as y (north positive).
//!
//! ## Known limitations
//!
//! The planar operations ([Location::translate], [Location::rotate], and
//! [relative_radial_to_global_coordinates]) hold the UTM zone fixed and assume the result
//! stays inside it; they do not detect or correct zone crossings. They also rely on the
//! locally-flat-earth approximation, which is adequate for short-range robotic sensing
//! (under roughly 10 km) but not for long-range navigation. Behavior near the poles and
//! the antimeridian is not handled. These match the operating envelope of the vehicles
//! this crate was written for; no silent correction is attempted.
//!
//! All operations are synchronous pure functions over `Copy` value types, so they are
//! safe to call concurrently without synchronization.

use std::fmt::Display;

use nalgebra::{Rotation2, Vector2};
use serde::Serialize;

pub mod earth;
pub mod utm;

pub use utm::ProjectionError;

/// A single geographic point carrying both its GPS and UTM representations
///
/// A `Location` always holds the same physical point in both coordinate systems: latitude
/// and longitude in decimal degrees, and the UTM easting, northing, zone number, and zone
/// letter. The two representations are synchronized at construction and the type exposes
/// no mutators, so they cannot drift apart. Construction goes through [Location::from_gps]
/// or [Location::from_utm]; whichever representation is supplied, the other is derived
/// immediately through the [utm] projection.
///
/// Transforms ([translate](Location::translate) and [rotate](Location::rotate)) operate in
/// projected space and return a new `Location`. Two independently constructed locations
/// for the same point may differ by the projection's round-trip error (about 1e-5 degrees
/// or 0.1 m), so compare coordinates with a tolerance rather than relying on exact
/// equality.
///
/// # Example
/// ```rust
/// use gps_utils::Location;
/// let loc = Location::from_gps(18.0, -66.5).unwrap();
/// assert_eq!(loc.zone_number(), 19);
/// assert_eq!(loc.zone_letter(), 'Q');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Location {
    /// Latitude in decimal degrees
    lat: f64,
    /// Longitude in decimal degrees
    lon: f64,
    /// UTM easting in meters
    easting: f64,
    /// UTM northing in meters
    northing: f64,
    /// UTM zone number, 1 through 60
    zone_number: u8,
    /// UTM latitude band letter
    zone_letter: char,
}

impl Location {
    /// Build a `Location` from GPS coordinates, deriving the UTM representation
    ///
    /// # Arguments
    /// * `lat` - Latitude in decimal degrees
    /// * `lon` - Longitude in decimal degrees
    ///
    /// # Errors
    /// Propagates the [ProjectionError] from the forward projection when the coordinates
    /// are outside the UTM domain (latitude beyond [-80°, 84°] or longitude beyond
    /// [-180°, 180°])
    pub fn from_gps(lat: f64, lon: f64) -> Result<Self, ProjectionError> {
        let (easting, northing, zone_number, zone_letter) = utm::to_utm(lat, lon)?;
        Ok(Location {
            lat,
            lon,
            easting,
            northing,
            zone_number,
            zone_letter,
        })
    }

    /// Build a `Location` from UTM coordinates, deriving the GPS representation
    ///
    /// # Arguments
    /// * `easting` - UTM easting in meters
    /// * `northing` - UTM northing in meters
    /// * `zone_number` - UTM zone number, 1 through 60
    /// * `zone_letter` - UTM latitude band letter
    ///
    /// # Errors
    /// Propagates the [ProjectionError] from the inverse projection when the zone or
    /// coordinates are invalid
    pub fn from_utm(
        easting: f64,
        northing: f64,
        zone_number: u8,
        zone_letter: char,
    ) -> Result<Self, ProjectionError> {
        let (lat, lon) = utm::to_lat_lon(easting, northing, zone_number, zone_letter)?;
        Ok(Location {
            lat,
            lon,
            easting,
            northing,
            zone_number,
            zone_letter,
        })
    }

    /// Latitude in decimal degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }
    /// Longitude in decimal degrees
    pub fn lon(&self) -> f64 {
        self.lon
    }
    /// UTM easting in meters
    pub fn easting(&self) -> f64 {
        self.easting
    }
    /// UTM northing in meters
    pub fn northing(&self) -> f64 {
        self.northing
    }
    /// UTM zone number, 1 through 60
    pub fn zone_number(&self) -> u8 {
        self.zone_number
    }
    /// UTM latitude band letter
    pub fn zone_letter(&self) -> char {
        self.zone_letter
    }

    /// Planar translation of the coordinate in projected space
    ///
    /// Adds the deltas to the easting and northing, holds the zone fixed, and re-derives
    /// the GPS representation. The addition is purely planar, so the Euclidean distance in
    /// projected space between this location and the result is exactly
    /// `sqrt(dx² + dy²)`; no distortion correction is applied. The result is assumed to
    /// stay within the same UTM zone.
    ///
    /// # Arguments
    /// * `dx_meters` - The west-to-east delta in meters
    /// * `dy_meters` - The south-to-north delta in meters
    ///
    /// # Errors
    /// Propagates the [ProjectionError] from the inverse projection when the translated
    /// coordinates leave the valid easting/northing range
    ///
    /// # Example
    /// ```rust
    /// use gps_utils::Location;
    /// let loc = Location::from_utm(100000.0, 100000.0, 19, 'Q').unwrap();
    /// let moved = loc.translate(5.0, 0.0).unwrap();
    /// assert_eq!(moved.easting(), 100005.0);
    /// assert_eq!(moved.northing(), 100000.0);
    /// ```
    pub fn translate(&self, dx_meters: f64, dy_meters: f64) -> Result<Self, ProjectionError> {
        Location::from_utm(
            self.easting + dx_meters,
            self.northing + dy_meters,
            self.zone_number,
            self.zone_letter,
        )
    }

    /// Rotate this point clockwise about a pivot in projected space
    ///
    /// Rotates this location's easting/northing by `angle_cw_deg` degrees clockwise around
    /// the pivot's easting/northing, holds the zone fixed, and re-derives the GPS
    /// representation. A rotation of 0° or 360° is the identity; 90° clockwise maps the
    /// +northing direction onto +easting. Use a negative angle for counter-clockwise
    /// rotation.
    ///
    /// # Arguments
    /// * `pivot` - The location to rotate about
    /// * `angle_cw_deg` - The rotation angle in degrees, clockwise positive
    ///
    /// # Errors
    /// Propagates the [ProjectionError] from the inverse projection when the rotated
    /// coordinates leave the valid easting/northing range
    ///
    /// # Example
    /// ```rust
    /// use gps_utils::Location;
    /// let loc = Location::from_utm(100000.0, 200000.0, 19, 'Q').unwrap();
    /// let pivot = Location::from_utm(100000.0, 100000.0, 19, 'Q').unwrap();
    /// let rotated = loc.rotate(&pivot, 90.0).unwrap();
    /// assert!((rotated.easting() - 200000.0).abs() < 1e-6);
    /// assert!((rotated.northing() - 100000.0).abs() < 1e-6);
    /// ```
    pub fn rotate(&self, pivot: &Location, angle_cw_deg: f64) -> Result<Self, ProjectionError> {
        // Rotation2 is counter-clockwise positive; negate to make the public contract
        // clockwise positive.
        let rotation = Rotation2::new((-angle_cw_deg).to_radians());
        let delta = Vector2::new(self.easting - pivot.easting, self.northing - pivot.northing);
        let rotated = rotation * delta;
        Location::from_utm(
            pivot.easting + rotated.x,
            pivot.northing + rotated.y,
            self.zone_number,
            self.zone_letter,
        )
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GPS(lat: {:.6}, lon: {:.6}) | UTM(east: {:.3}, north: {:.3}, zone: {}{})",
            self.lat, self.lon, self.easting, self.northing, self.zone_number, self.zone_letter
        )
    }
}

/// A vehicle orientation carrying yaw, roll, and pitch in both degrees and radians
///
/// Both unit systems are computed at construction and the type exposes no mutators, so
/// the degree and radian forms are always numerically consistent
/// (`radians = degrees × π/180`). Construction goes through [Attitude::from_degrees] or
/// [Attitude::from_radians]; `Attitude::default()` is all zeros.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Attitude {
    /// Yaw in degrees
    yaw_deg: f64,
    /// Roll in degrees
    roll_deg: f64,
    /// Pitch in degrees
    pitch_deg: f64,
    /// Yaw in radians
    yaw_rad: f64,
    /// Roll in radians
    roll_rad: f64,
    /// Pitch in radians
    pitch_rad: f64,
}

impl Attitude {
    /// Build an `Attitude` from angles in degrees, deriving the radian representation
    pub fn from_degrees(yaw: f64, roll: f64, pitch: f64) -> Self {
        Attitude {
            yaw_deg: yaw,
            roll_deg: roll,
            pitch_deg: pitch,
            yaw_rad: yaw.to_radians(),
            roll_rad: roll.to_radians(),
            pitch_rad: pitch.to_radians(),
        }
    }

    /// Build an `Attitude` from angles in radians, deriving the degree representation
    pub fn from_radians(yaw: f64, roll: f64, pitch: f64) -> Self {
        Attitude {
            yaw_deg: yaw.to_degrees(),
            roll_deg: roll.to_degrees(),
            pitch_deg: pitch.to_degrees(),
            yaw_rad: yaw,
            roll_rad: roll,
            pitch_rad: pitch,
        }
    }

    /// Yaw in degrees
    pub fn yaw_deg(&self) -> f64 {
        self.yaw_deg
    }
    /// Roll in degrees
    pub fn roll_deg(&self) -> f64 {
        self.roll_deg
    }
    /// Pitch in degrees
    pub fn pitch_deg(&self) -> f64 {
        self.pitch_deg
    }
    /// Yaw in radians
    pub fn yaw_rad(&self) -> f64 {
        self.yaw_rad
    }
    /// Roll in radians
    pub fn roll_rad(&self) -> f64 {
        self.roll_rad
    }
    /// Pitch in radians
    pub fn pitch_rad(&self) -> f64 {
        self.pitch_rad
    }
}

impl Display for Attitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "YAW({:.2}°) | ROLL({:.2}°) | PITCH({:.2}°)",
            self.yaw_deg, self.roll_deg, self.pitch_deg
        )
    }
}

/// Normalize an angle in degrees into the range [0°, 360°)
///
/// Uses floored modulo, so negative inputs wrap to positive results and exact multiples
/// of 360 map to zero. The behavior for non-finite inputs is unspecified.
///
/// # Example
/// ```rust
/// use gps_utils::normalize_angle;
/// assert_eq!(normalize_angle(365.0), 5.0);
/// assert_eq!(normalize_angle(270.0), 270.0);
/// assert_eq!(normalize_angle(-45.0), 315.0);
/// ```
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Convert a vehicle-relative angle into a cardinal bearing
///
/// `angle_relative_to_vehicle` is where the object appears relative to the vehicle,
/// measured clockwise from the vehicle's reference axis; `rel_north` is the relative
/// angle that corresponds to the vehicle's front (0 when angles are already measured from
/// the bow); `yaw` is the vehicle's heading, clockwise from true north. The result is the
/// object's bearing measured clockwise from true north:
/// `normalize_angle((angle_relative_to_vehicle - rel_north) + yaw)`.
///
/// All real inputs are accepted, including negatives and values beyond ±360°, and are
/// normalized into [0°, 360°).
///
/// # Example
/// ```rust
/// use gps_utils::relative_angle_to_cardinal_angle;
/// // An object off the starboard side of a vehicle heading east bears south
/// assert_eq!(relative_angle_to_cardinal_angle(90.0, 90.0, 0.0), 180.0);
/// ```
pub fn relative_angle_to_cardinal_angle(
    angle_relative_to_vehicle: f64,
    yaw: f64,
    rel_north: f64,
) -> f64 {
    normalize_angle((angle_relative_to_vehicle - rel_north) + yaw)
}

/// Compute the absolute position of an object given its range and bearing
///
/// Treats the cardinal angle as a bearing clockwise from north in the projected plane and
/// displaces the reference location by `distance · sin(angle)` east and
/// `distance · cos(angle)` north, holding the UTM zone fixed.
///
/// This assumes the object lies in the same UTM zone as the vehicle and that the
/// locally-flat-earth approximation holds at the given distance; both assumptions are
/// sound for short-range sensing (under roughly 10 km) and are not checked.
///
/// # Arguments
/// * `location` - The location of the vehicle
/// * `distance_of_object_meters` - Distance between the object and the vehicle in meters
/// * `cardinal_angle_of_object_degrees` - The object's bearing, clockwise from true north
///
/// # Errors
/// Propagates the [ProjectionError] from the inverse projection when the displaced
/// coordinates leave the valid easting/northing range
pub fn relative_radial_to_global_coordinates(
    location: &Location,
    distance_of_object_meters: f64,
    cardinal_angle_of_object_degrees: f64,
) -> Result<Location, ProjectionError> {
    let angle_rad = cardinal_angle_of_object_degrees.to_radians();
    let displacement = distance_of_object_meters * Vector2::new(angle_rad.sin(), angle_rad.cos());
    location.translate(displacement.x, displacement.y)
}

/// Compute the great-circle distance between two locations in meters
///
/// Applies the haversine formula to the GPS representations only; the projected fields
/// and zones are ignored, so the distance is valid even across UTM zone boundaries.
/// Accurate to the centimeter level for points within a few thousand kilometers.
pub fn distance_between_locations(a: &Location, b: &Location) -> f64 {
    earth::haversine_distance(a.lat, a.lon, b.lat, b.lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_normalize_angle_in_range() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(90.0), 90.0);
        assert_eq!(normalize_angle(180.0), 180.0);
        assert_eq!(normalize_angle(270.0), 270.0);
        assert_eq!(normalize_angle(360.0), 0.0);
    }
    #[test]
    fn test_normalize_angle_over_360() {
        assert_eq!(normalize_angle(365.0), 5.0);
        assert_eq!(normalize_angle(540.0), 180.0);
        assert_eq!(normalize_angle(720.0), 0.0);
    }
    #[test]
    fn test_normalize_angle_negative() {
        assert_eq!(normalize_angle(-45.0), 315.0);
        assert_eq!(normalize_angle(-90.0), 270.0);
        assert_eq!(normalize_angle(-180.0), 180.0);
        assert_eq!(normalize_angle(-270.0), 90.0);
        assert_eq!(normalize_angle(-360.0), 0.0);
    }
    #[test]
    fn test_normalize_angle_periodic() {
        // Whole-degree angles are exact in f64, so full turns wrap exactly
        for a in [0.0, 45.0, 90.0, 135.0, 225.0, 315.0] {
            for k in -3i32..=3 {
                assert_eq!(normalize_angle(a + 360.0 * k as f64), a);
            }
        }
    }
    #[test]
    fn test_cardinal_angle_facing_north() {
        assert_eq!(relative_angle_to_cardinal_angle(0.0, 0.0, 0.0), 0.0);
        assert_eq!(relative_angle_to_cardinal_angle(90.0, 0.0, 0.0), 90.0);
        assert_eq!(relative_angle_to_cardinal_angle(180.0, 0.0, 0.0), 180.0);
        assert_eq!(relative_angle_to_cardinal_angle(270.0, 0.0, 0.0), 270.0);
        assert_eq!(relative_angle_to_cardinal_angle(360.0, 0.0, 0.0), 0.0);
    }
    #[test]
    fn test_cardinal_angle_facing_east() {
        assert_eq!(relative_angle_to_cardinal_angle(0.0, 90.0, 0.0), 90.0);
        assert_eq!(relative_angle_to_cardinal_angle(90.0, 90.0, 0.0), 180.0);
        assert_eq!(relative_angle_to_cardinal_angle(180.0, 90.0, 0.0), 270.0);
        assert_eq!(relative_angle_to_cardinal_angle(270.0, 90.0, 0.0), 0.0);
        assert_eq!(relative_angle_to_cardinal_angle(360.0, 90.0, 0.0), 90.0);
    }
    #[test]
    fn test_cardinal_angle_facing_south() {
        assert_eq!(relative_angle_to_cardinal_angle(0.0, 180.0, 0.0), 180.0);
        assert_eq!(relative_angle_to_cardinal_angle(90.0, 180.0, 0.0), 270.0);
        assert_eq!(relative_angle_to_cardinal_angle(180.0, 180.0, 0.0), 0.0);
        assert_eq!(relative_angle_to_cardinal_angle(270.0, 180.0, 0.0), 90.0);
    }
    #[test]
    fn test_cardinal_angle_facing_west() {
        assert_eq!(relative_angle_to_cardinal_angle(0.0, 270.0, 0.0), 270.0);
        assert_eq!(relative_angle_to_cardinal_angle(90.0, 270.0, 0.0), 0.0);
        assert_eq!(relative_angle_to_cardinal_angle(180.0, 270.0, 0.0), 90.0);
        assert_eq!(relative_angle_to_cardinal_angle(270.0, 270.0, 0.0), 180.0);
    }
    #[test]
    fn test_cardinal_angle_intermediate_heading() {
        assert_eq!(relative_angle_to_cardinal_angle(122.0, 26.0, 0.0), 148.0);
        assert_eq!(relative_angle_to_cardinal_angle(64.0, 26.0, 0.0), 90.0);
        assert_eq!(relative_angle_to_cardinal_angle(90.0, 26.0, 0.0), 116.0);
    }
    #[test]
    fn test_cardinal_angle_negative_relative_angles() {
        assert_eq!(relative_angle_to_cardinal_angle(-90.0, 0.0, 0.0), 270.0);
        assert_eq!(relative_angle_to_cardinal_angle(-180.0, 0.0, 0.0), 180.0);
        assert_eq!(relative_angle_to_cardinal_angle(-270.0, 0.0, 0.0), 90.0);
        assert_eq!(relative_angle_to_cardinal_angle(-360.0, 0.0, 0.0), 0.0);
    }
    #[test]
    fn test_cardinal_angle_offset_reference_axis() {
        // A vehicle whose relative north points to starboard (90°): an object dead ahead
        // at 100° relative is 10° left of the bow
        assert_eq!(relative_angle_to_cardinal_angle(100.0, 0.0, 90.0), 10.0);
    }
    #[test]
    fn test_location_from_gps_stores_input() {
        let loc = Location::from_gps(18.0, -66.5).unwrap();
        assert_eq!(loc.lat(), 18.0);
        assert_eq!(loc.lon(), -66.5);
        assert_eq!(loc.zone_number(), 19);
        assert_eq!(loc.zone_letter(), 'Q');
    }
    #[test]
    fn test_location_from_utm_stores_input() {
        let loc = Location::from_utm(100000.0, 100000.0, 19, 'Q').unwrap();
        assert_eq!(loc.easting(), 100000.0);
        assert_eq!(loc.northing(), 100000.0);
        assert_eq!(loc.zone_number(), 19);
        assert_eq!(loc.zone_letter(), 'Q');
    }
    #[test]
    fn test_location_invalid_inputs_propagate() {
        assert_eq!(
            Location::from_gps(91.0, 0.0),
            Err(ProjectionError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            Location::from_utm(100000.0, 100000.0, 19, 'O'),
            Err(ProjectionError::InvalidZoneLetter('O'))
        );
    }
    #[test]
    fn test_translate_is_planar() {
        let loc = Location::from_utm(100000.0, 100000.0, 19, 'Q').unwrap();
        let moved = loc.translate(3.0, -4.0).unwrap();
        assert_eq!(moved.easting(), 100003.0);
        assert_eq!(moved.northing(), 99996.0);
        assert_eq!(moved.zone_number(), 19);
        assert_eq!(moved.zone_letter(), 'Q');
    }
    #[test]
    fn test_rotate_90_cw_maps_north_to_east() {
        let loc = Location::from_utm(100000.0, 200000.0, 19, 'Q').unwrap();
        let pivot = Location::from_utm(100000.0, 100000.0, 19, 'Q').unwrap();
        let rotated = loc.rotate(&pivot, 90.0).unwrap();
        assert_approx_eq!(rotated.easting(), 200000.0, 1e-6);
        assert_approx_eq!(rotated.northing(), 100000.0, 1e-6);
    }
    #[test]
    fn test_rotate_minus_90_cw_maps_north_to_west() {
        let loc = Location::from_utm(500000.0, 600000.0, 19, 'Q').unwrap();
        let pivot = Location::from_utm(500000.0, 500000.0, 19, 'Q').unwrap();
        let rotated = loc.rotate(&pivot, -90.0).unwrap();
        assert_approx_eq!(rotated.easting(), 400000.0, 1e-6);
        assert_approx_eq!(rotated.northing(), 500000.0, 1e-6);
    }
    #[test]
    fn test_rotate_zero_is_identity() {
        let loc = Location::from_utm(500000.0, 600000.0, 19, 'Q').unwrap();
        let pivot = Location::from_utm(500000.0, 500000.0, 19, 'Q').unwrap();
        let rotated = loc.rotate(&pivot, 0.0).unwrap();
        assert_eq!(rotated.easting(), 500000.0);
        assert_eq!(rotated.northing(), 600000.0);
    }
    #[test]
    fn test_rotate_full_turn_is_identity() {
        let loc = Location::from_utm(500000.0, 600000.0, 19, 'Q').unwrap();
        let pivot = Location::from_utm(500000.0, 500000.0, 19, 'Q').unwrap();
        let rotated = loc.rotate(&pivot, 360.0).unwrap();
        assert_approx_eq!(rotated.easting(), 500000.0, 1e-6);
        assert_approx_eq!(rotated.northing(), 600000.0, 1e-6);
    }
    #[test]
    fn test_rotate_round_trip_inverts() {
        let loc = Location::from_utm(450000.0, 4200000.0, 17, 'R').unwrap();
        let pivot = Location::from_utm(440000.0, 4190000.0, 17, 'R').unwrap();
        let back = loc
            .rotate(&pivot, 37.0)
            .unwrap()
            .rotate(&pivot, -37.0)
            .unwrap();
        assert_approx_eq!(back.easting(), loc.easting(), 1e-6);
        assert_approx_eq!(back.northing(), loc.northing(), 1e-6);
    }
    #[test]
    fn test_radial_projection_cardinal_axes() {
        let loc = Location::from_utm(500000.0, 4000000.0, 17, 'R').unwrap();
        // Due north: pure northing displacement
        let north = relative_radial_to_global_coordinates(&loc, 100.0, 0.0).unwrap();
        assert_eq!(north.easting(), 500000.0);
        assert_eq!(north.northing(), 4000100.0);
        // Due east: pure easting displacement
        let east = relative_radial_to_global_coordinates(&loc, 100.0, 90.0).unwrap();
        assert_approx_eq!(east.easting(), 500100.0, 1e-9);
        assert_approx_eq!(east.northing(), 4000000.0, 1e-9);
        // Due south
        let south = relative_radial_to_global_coordinates(&loc, 100.0, 180.0).unwrap();
        assert_approx_eq!(south.easting(), 500000.0, 1e-9);
        assert_approx_eq!(south.northing(), 3999900.0, 1e-9);
        // Due west
        let west = relative_radial_to_global_coordinates(&loc, 100.0, 270.0).unwrap();
        assert_approx_eq!(west.easting(), 499900.0, 1e-9);
        assert_approx_eq!(west.northing(), 4000000.0, 1e-9);
    }
    #[test]
    fn test_attitude_from_degrees() {
        let att = Attitude::from_degrees(90.0, 45.0, -30.0);
        assert_eq!(att.yaw_deg(), 90.0);
        assert_eq!(att.roll_deg(), 45.0);
        assert_eq!(att.pitch_deg(), -30.0);
        assert_approx_eq!(att.yaw_rad(), std::f64::consts::FRAC_PI_2, 1e-12);
        assert_approx_eq!(att.roll_rad(), std::f64::consts::FRAC_PI_4, 1e-12);
        assert_approx_eq!(att.pitch_rad(), -std::f64::consts::FRAC_PI_6, 1e-12);
    }
    #[test]
    fn test_attitude_from_radians() {
        let att = Attitude::from_radians(std::f64::consts::PI, 0.0, -std::f64::consts::FRAC_PI_2);
        assert_approx_eq!(att.yaw_deg(), 180.0, 1e-12);
        assert_eq!(att.roll_deg(), 0.0);
        assert_approx_eq!(att.pitch_deg(), -90.0, 1e-12);
        assert_eq!(att.yaw_rad(), std::f64::consts::PI);
    }
    #[test]
    fn test_attitude_default_is_zero() {
        let att = Attitude::default();
        assert_eq!(att.yaw_deg(), 0.0);
        assert_eq!(att.roll_deg(), 0.0);
        assert_eq!(att.pitch_deg(), 0.0);
        assert_eq!(att.yaw_rad(), 0.0);
        assert_eq!(att.roll_rad(), 0.0);
        assert_eq!(att.pitch_rad(), 0.0);
    }
    #[test]
    fn test_display_formats() {
        let att = Attitude::from_degrees(15.0, 0.0, 0.0);
        assert_eq!(att.to_string(), "YAW(15.00°) | ROLL(0.00°) | PITCH(0.00°)");
        let loc = Location::from_utm(100000.0, 100000.0, 19, 'Q').unwrap();
        let text = loc.to_string();
        assert!(text.contains("UTM(east: 100000.000, north: 100000.000, zone: 19Q)"));
        assert!(text.starts_with("GPS(lat:"));
    }
}
