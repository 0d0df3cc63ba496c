// Copyright (c) 2020-2024 Via Technology Ltd.

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The sphere module contains types and functions for calculating the
//! angular distance between points on the surface of a unit sphere.
//!
//! Points are represented by unit vectors. The angle between two points is
//! calculated from the dot product (the cosine of the angle) and the length
//! of the cross product (the sine of the angle) of their vectors.

extern crate nalgebra as na;
use crate::trig::{polar_to_rect, rect_to_polar, Radians, Units};
use crate::Validate;
use contracts::debug_ensures;

/// A Point is a nalgebra Vector3.
pub type Point = na::Vector3<f64>;

/// Create a Point from longitude and latitude.
/// * `lon` - the longitude.
/// * `lat` - the latitude.
/// * `units` - the units of `lon` and `lat`.
///
/// returns a Point on the unit sphere.
#[debug_ensures(ret.is_valid() || !ret.iter().all(|v| v.is_finite()))]
#[must_use]
pub fn to_sphere(lon: f64, lat: f64, units: Units) -> Point {
    let (rxy, z) = polar_to_rect(1.0, lat, units);
    let (x, y) = polar_to_rect(rxy, lon, units);
    Point::new(x, y, z)
}

/// Determine whether a Point is a unit vector.
///
/// returns true if Point is a unit vector, false otherwise.
#[must_use]
pub fn is_unit(a: &Point) -> bool {
    const MIN_POINT_LENGTH: f64 = 1.0 - 12.0 * f64::EPSILON;
    const MAX_POINT_LENGTH: f64 = 1.0 + 12.0 * f64::EPSILON;

    (MIN_POINT_LENGTH..=MAX_POINT_LENGTH).contains(&(a.norm()))
}

impl Validate for Point {
    /// Test whether a Point is valid.
    /// I.e. whether the Point is a unit vector.
    fn is_valid(&self) -> bool {
        is_unit(self)
    }
}

/// Calculate the angle between two Points.
/// The length of the cross product is calculated with nested `hypot` calls
/// to avoid intermediate overflow and underflow.
///
/// returns the angle in the range: 0 <= angle <= PI
#[debug_ensures((0.0..=std::f64::consts::PI).contains(&ret.0) || ret.0.is_nan())]
#[must_use]
pub fn angle_between(a: &Point, b: &Point) -> Radians {
    let cs = a.dot(b);
    let c = a.cross(b);
    let sn = libm::hypot(c.x, libm::hypot(c.y, c.z));
    rect_to_polar(cs, sn).1
}

/// Calculate the angular distance between two positions on a unit sphere.
/// * `lon1`, `lat1` - the longitude and latitude of the first position.
/// * `lon2`, `lat2` - the longitude and latitude of the second position.
/// * `units` - the units of the arguments and the result.
///
/// returns the angular distance in the range: 0 <= distance <= PI radians
/// (180 degrees).
/// # Examples
/// ```
/// use angular_distance::{angular_distance, is_within_tolerance, Units};
///
/// let d = angular_distance(0.0, 0.0, 180.0, 0.0, Units::Degrees);
/// assert!(is_within_tolerance(180.0, d, 1.0e-12));
///
/// let d = angular_distance(0.0, 0.0, 0.0, std::f64::consts::FRAC_PI_2, Units::default());
/// assert!(is_within_tolerance(std::f64::consts::FRAC_PI_2, d, 1.0e-15));
/// ```
#[must_use]
pub fn angular_distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64, units: Units) -> f64 {
    let a = to_sphere(lon1, lat1, units);
    let b = to_sphere(lon2, lat2, units);
    units.from_radians(angle_between(&a, &b).0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_within_tolerance;
    use crate::trig::Degrees;

    #[test]
    fn test_to_sphere() {
        let greenwich = to_sphere(0.0, 0.0, Units::Degrees);
        assert_eq!(Point::new(1.0, 0.0, 0.0), greenwich);

        let north_pole = to_sphere(0.0, 90.0, Units::Degrees);
        assert!(is_unit(&north_pole));
        assert_eq!(1.0, north_pole.z);
        assert!(is_within_tolerance(0.0, north_pole.x, f64::EPSILON));

        let idl = to_sphere(std::f64::consts::PI, 0.0, Units::Radians);
        assert!(is_unit(&idl));
        assert_eq!(-1.0, idl.x);

        for lat in -90..=90 {
            for lon in (-180..=180).step_by(15) {
                let point = to_sphere(f64::from(lon), f64::from(lat), Units::Degrees);
                assert!(point.is_valid());
            }
        }
    }

    #[test]
    fn test_to_sphere_nan() {
        let point = to_sphere(f64::NAN, 0.0, Units::Radians);
        assert!(!point.is_valid());
    }

    #[test]
    fn test_angle_between() {
        let x_axis = Point::new(1.0, 0.0, 0.0);
        let y_axis = Point::new(0.0, 1.0, 0.0);

        assert_eq!(Radians(0.0), angle_between(&x_axis, &x_axis));
        assert_eq!(
            Radians(std::f64::consts::FRAC_PI_2),
            angle_between(&x_axis, &y_axis)
        );
        assert_eq!(
            Radians(std::f64::consts::PI),
            angle_between(&x_axis, &-x_axis)
        );
    }

    #[test]
    fn test_angular_distance_known_values() {
        // points on the equator 90 degrees apart
        let d = angular_distance(0.0, 0.0, 90.0, 0.0, Units::Degrees);
        assert!(is_within_tolerance(90.0, d, 1.0e-12));

        // antipodal points
        let d = angular_distance(0.0, 0.0, 180.0, 0.0, Units::Degrees);
        assert!(is_within_tolerance(180.0, d, 1.0e-12));

        let d = angular_distance(45.0, 90.0, 0.0, -90.0, Units::Degrees);
        assert!(is_within_tolerance(180.0, d, 1.0e-12));

        // along a meridian
        let d = angular_distance(10.0, 30.0, 10.0, 60.0, Units::Degrees);
        assert!(is_within_tolerance(30.0, d, 1.0e-12));

        // 60N 0E to 60N 30W
        let d = angular_distance(0.0, 60.0, -30.0, 60.0, Units::Degrees);
        assert!(is_within_tolerance(14.870_944_452_263_704, d, 1.0e-12));
    }

    #[test]
    fn test_angular_distance_identity() {
        for (lon, lat) in [(0.0, 0.0), (123.4, -56.7), (-180.0, 90.0), (359.0, -90.0)] {
            assert_eq!(0.0, angular_distance(lon, lat, lon, lat, Units::Degrees));

            let lon = Units::Degrees.to_radians(lon);
            let lat = Units::Degrees.to_radians(lat);
            assert_eq!(0.0, angular_distance(lon, lat, lon, lat, Units::Radians));
        }
    }

    #[test]
    fn test_angular_distance_symmetry_and_range() {
        for lat1 in (-90..=90).step_by(30) {
            for lon1 in (-180..=180).step_by(45) {
                for lat2 in (-90..=90).step_by(30) {
                    for lon2 in (-180..=180).step_by(45) {
                        let (lon1, lat1) = (f64::from(lon1), f64::from(lat1));
                        let (lon2, lat2) = (f64::from(lon2), f64::from(lat2));

                        let d12 = angular_distance(lon1, lat1, lon2, lat2, Units::Degrees);
                        let d21 = angular_distance(lon2, lat2, lon1, lat1, Units::Degrees);
                        assert_eq!(d12, d21);
                        assert!((0.0..=180.0).contains(&d12));
                    }
                }
            }
        }
    }

    #[test]
    fn test_angular_distance_units() {
        let points = [(10.0, 20.0, 30.0, 40.0), (-170.0, 5.0, 170.0, -5.0)];
        for (lon1, lat1, lon2, lat2) in points {
            let degrees = angular_distance(lon1, lat1, lon2, lat2, Units::Degrees);
            let radians = angular_distance(
                Units::Degrees.to_radians(lon1),
                Units::Degrees.to_radians(lat1),
                Units::Degrees.to_radians(lon2),
                Units::Degrees.to_radians(lat2),
                Units::Radians,
            );
            assert!(is_within_tolerance(
                Degrees::from(Radians(radians)).0,
                degrees,
                1.0e-12
            ));
        }
    }

    #[test]
    fn test_angular_distance_small_separation() {
        // an arc-cosine of the dot product would return zero here
        let d = angular_distance(0.0, 0.0, 1.0e-10, 0.0, Units::Radians);
        assert!(is_within_tolerance(1.0e-10, d, 1.0e-24));
    }

    #[test]
    fn test_angular_distance_nan() {
        assert!(angular_distance(f64::NAN, 0.0, 0.0, 0.0, Units::Radians).is_nan());
        assert!(angular_distance(0.0, 0.0, 0.0, f64::INFINITY, Units::Degrees).is_nan());
    }
}
