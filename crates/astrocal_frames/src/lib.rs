//! Angle and coordinate conversion helpers.
//!
//! Provides sexagesimal ↔ decimal degree conversion, bulk degree ↔ radian
//! scaling, Cartesian ↔ spherical conversion (scalar and `[f64; 3]`
//! forms) and great-circle distance on a sphere.

pub mod angle;
pub mod error;
pub mod geodesic;
pub mod spherical;

pub use angle::{
    DecimalAngle, Sexagesimal, SexagesimalWarning, decimal_to_sexagesimal,
    degrees_to_radians_in_place, radians_to_degrees_in_place, sexagesimal_to_decimal,
    sexagesimal_to_decimal_strict,
};
pub use error::FrameError;
pub use geodesic::{
    EARTH_RADIUS_KM, GeoPoint, great_circle_distance, great_circle_distance_earth,
    great_circle_distance_earth_deg,
};
pub use spherical::{
    SphericalCoords, azimuth, cartesian_to_spherical, cartesian_to_spherical_vec, elevation,
    radius, spherical_degrees_to_radians, spherical_radians_to_degrees, spherical_to_cartesian,
    spherical_to_cartesian_vec,
};
