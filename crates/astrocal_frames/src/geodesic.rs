//! Great-circle distance on a sphere.

/// WGS-84 equatorial radius in km.
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// A latitude/longitude pair in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    pub lat_rad: f64,
    pub lon_rad: f64,
}

impl GeoPoint {
    pub fn new(lat_rad: f64, lon_rad: f64) -> Self {
        Self { lat_rad, lon_rad }
    }

    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> Self {
        Self::new(lat_deg.to_radians(), lon_deg.to_radians())
    }

    /// Great-circle distance to `other` on a sphere of `radius`.
    pub fn distance_to(&self, other: &GeoPoint, radius: f64) -> f64 {
        great_circle_distance(self.lat_rad, self.lon_rad, other.lat_rad, other.lon_rad, radius)
    }
}

/// Haversine distance between two points given in radians.
///
/// The result has the unit of `radius`. The haversine term is clamped to
/// [0, 1] so near-antipodal rounding cannot push `asin` out of its domain.
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64, radius: f64) -> f64 {
    let sin_dlat = ((lat2 - lat1) / 2.0).sin();
    let sin_dlon = ((lon2 - lon1) / 2.0).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    2.0 * radius * h.clamp(0.0, 1.0).sqrt().asin()
}

/// [`great_circle_distance`] on the Earth, in km.
pub fn great_circle_distance_earth(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    great_circle_distance(lat1, lon1, lat2, lon2, EARTH_RADIUS_KM)
}

/// [`great_circle_distance_earth`] with inputs in degrees.
pub fn great_circle_distance_earth_deg(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    great_circle_distance_earth(
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    )
}
