//! Cartesian ↔ Spherical coordinate conversion.
//!
//! Spherical triples are ordered `[radius, elevation, azimuth]`. Elevation
//! is measured from the x-y plane toward +z in [−π/2, π/2]; azimuth is
//! measured in the x-y plane from +x toward +y in (−π, π].

/// Spherical coordinates: radius, elevation, azimuth.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphericalCoords {
    /// Distance from origin, same unit as the Cartesian input.
    pub radius: f64,
    /// Elevation above the x-y plane in radians.
    pub elevation_rad: f64,
    /// Azimuth from +x toward +y in radians.
    pub azimuth_rad: f64,
}

impl SphericalCoords {
    pub fn new(radius: f64, elevation_rad: f64, azimuth_rad: f64) -> Self {
        Self {
            radius,
            elevation_rad,
            azimuth_rad,
        }
    }

    pub fn from_array(p: &[f64; 3]) -> Self {
        Self::new(p[0], p[1], p[2])
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.radius, self.elevation_rad, self.azimuth_rad]
    }

    pub fn to_cartesian(self) -> [f64; 3] {
        spherical_to_cartesian(self.radius, self.elevation_rad, self.azimuth_rad)
    }
}

/// `sqrt(x² + y² + z²)`.
pub fn radius(x: f64, y: f64, z: f64) -> f64 {
    x.hypot(y).hypot(z)
}

/// `atan2(z, sqrt(x² + y²))`.
pub fn elevation(x: f64, y: f64, z: f64) -> f64 {
    (z + 0.0).atan2(x.hypot(y))
}

/// `atan2(y, x)` in (−π, π]; zero on the z axis.
///
/// Signed zeros are folded to +0 so `(-1, -0)` gives π, not −π.
pub fn azimuth(x: f64, y: f64) -> f64 {
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }
    (y + 0.0).atan2(x)
}

/// Convert Cartesian `(x, y, z)` to spherical coordinates.
///
/// The origin maps to radius 0 with elevation and azimuth both 0.
pub fn cartesian_to_spherical(x: f64, y: f64, z: f64) -> SphericalCoords {
    SphericalCoords {
        radius: radius(x, y, z),
        elevation_rad: elevation(x, y, z),
        azimuth_rad: azimuth(x, y),
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(radius: f64, elevation_rad: f64, azimuth_rad: f64) -> [f64; 3] {
    let cos_el = elevation_rad.cos();
    [
        radius * cos_el * azimuth_rad.cos(),
        radius * cos_el * azimuth_rad.sin(),
        radius * elevation_rad.sin(),
    ]
}

/// `[x, y, z]` → `[radius, elevation, azimuth]`.
pub fn cartesian_to_spherical_vec(xyz: &[f64; 3]) -> [f64; 3] {
    cartesian_to_spherical(xyz[0], xyz[1], xyz[2]).to_array()
}

/// `[radius, elevation, azimuth]` → `[x, y, z]`.
pub fn spherical_to_cartesian_vec(rea: &[f64; 3]) -> [f64; 3] {
    spherical_to_cartesian(rea[0], rea[1], rea[2])
}

/// Convert elevation and azimuth of a spherical triple from degrees to radians.
///
/// Index 0 (radius) is left untouched.
pub fn spherical_degrees_to_radians(p: &mut [f64; 3]) {
    crate::angle::degrees_to_radians_in_place(&mut p[1..]);
}

/// Convert elevation and azimuth of a spherical triple from radians to degrees.
///
/// Index 0 (radius) is left untouched.
pub fn spherical_radians_to_degrees(p: &mut [f64; 3]) {
    crate::angle::radians_to_degrees_in_place(&mut p[1..]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPS: f64 = 1e-10;

    #[test]
    fn along_x_axis() {
        let s = cartesian_to_spherical(1.0, 0.0, 0.0);
        assert_eq!(s, SphericalCoords::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn along_y_axis() {
        let s = cartesian_to_spherical(0.0, 2.0, 0.0);
        assert!((s.radius - 2.0).abs() < EPS);
        assert!((s.azimuth_rad - FRAC_PI_2).abs() < EPS);
        assert!(s.elevation_rad.abs() < EPS);
    }

    #[test]
    fn along_negative_x() {
        let s = cartesian_to_spherical(-1.0, 0.0, 0.0);
        assert!((s.azimuth_rad - PI).abs() < EPS);
    }

    #[test]
    fn along_z_axis() {
        let s = cartesian_to_spherical(0.0, 0.0, 1.0);
        assert!((s.radius - 1.0).abs() < EPS);
        assert!((s.elevation_rad - FRAC_PI_2).abs() < EPS);
        assert_eq!(s.azimuth_rad, 0.0);
    }

    #[test]
    fn third_quadrant_azimuth_is_negative() {
        let s = cartesian_to_spherical(-1.0, -1.0, 0.0);
        assert!((s.azimuth_rad + 3.0 * FRAC_PI_4).abs() < EPS);
    }

    #[test]
    fn origin() {
        assert_eq!(cartesian_to_spherical(0.0, 0.0, 0.0), SphericalCoords::default());
        assert_eq!(spherical_to_cartesian(0.0, 1.2, -2.3), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn negative_zero_y_on_negative_x_axis() {
        let s = cartesian_to_spherical(-1.0, -0.0, 0.0);
        assert_eq!(s.azimuth_rad, PI);
        assert!(s.azimuth_rad > -PI);
    }

    #[test]
    fn negative_zero_origin() {
        let s = cartesian_to_spherical(-0.0, -0.0, 0.0);
        assert_eq!(s.azimuth_rad, 0.0);
        assert_eq!(s.elevation_rad, 0.0);
        assert_eq!(cartesian_to_spherical(-0.0, 0.0, -0.0).azimuth_rad, 0.0);
        assert!(elevation(0.0, 0.0, -0.0).is_sign_positive());
    }

    #[test]
    fn focused_variants_match() {
        let (x, y, z) = (3.0, -4.0, 12.0);
        let s = cartesian_to_spherical(x, y, z);
        assert_eq!(radius(x, y, z), s.radius);
        assert_eq!(elevation(x, y, z), s.elevation_rad);
        assert_eq!(azimuth(x, y), s.azimuth_rad);
        assert!((s.radius - 13.0).abs() < EPS);
    }

    #[test]
    fn roundtrip() {
        let xyz = [1.234e8, -5.678e7, 3.456e7];
        let back = spherical_to_cartesian_vec(&cartesian_to_spherical_vec(&xyz));
        for i in 0..3 {
            assert!(
                (xyz[i] - back[i]).abs() < EPS * xyz[i].abs().max(1.0),
                "axis {i}: {:.10e} != {:.10e}",
                xyz[i],
                back[i]
            );
        }
    }

    #[test]
    fn struct_and_vec_forms_agree() {
        let s = SphericalCoords::new(5.0, 0.3, -1.1);
        assert_eq!(s.to_cartesian(), spherical_to_cartesian_vec(&s.to_array()));
        assert_eq!(SphericalCoords::from_array(&s.to_array()), s);
    }

    #[test]
    fn triple_degrees_to_radians_keeps_radius() {
        let mut p = [180.0, 90.0, -45.0];
        spherical_degrees_to_radians(&mut p);
        assert_eq!(p[0], 180.0);
        assert!((p[1] - FRAC_PI_2).abs() < EPS);
        assert!((p[2] + FRAC_PI_4).abs() < EPS);
    }

    #[test]
    fn triple_radians_to_degrees_keeps_radius() {
        let mut p = [PI, PI, FRAC_PI_2];
        spherical_radians_to_degrees(&mut p);
        assert_eq!(p[0], PI);
        assert!((p[1] - 180.0).abs() < EPS);
        assert!((p[2] - 90.0).abs() < EPS);
    }
}
