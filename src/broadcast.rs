// Copyright (c) 2024 Via Technology Ltd.

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

//! The broadcast module applies the angular distance calculation to
//! slices of longitudes and latitudes.
//!
//! A position is either a single longitude and latitude or a pair of
//! equal length slices of longitudes and latitudes.
//! Where both positions are slices they must be the same length and the
//! distances are calculated element by element. Where one position is single,
//! the distances from it to every element of the other position are calculated.
//!
//! With the `rayon` feature the distances are calculated in parallel.

use crate::sphere::{angle_between, to_sphere, Point};
use crate::trig::Units;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The errors returned when positions cannot be combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// A pair of slices have different lengths.
    LengthMismatch { expected: usize, actual: usize },
    /// A position has a single value for one coordinate and a slice for the other.
    MixedShape,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {expected} values, found {actual}")
            }
            Self::MixedShape => write!(f, "position mixes a single value and a slice"),
        }
    }
}

impl std::error::Error for ShapeError {}

/// A longitude or latitude argument: a single value or a slice of values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Values<'a> {
    /// A single value.
    Scalar(f64),
    /// A slice of values.
    Array(&'a [f64]),
}

impl From<f64> for Values<'_> {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<f32> for Values<'_> {
    fn from(value: f32) -> Self {
        Self::Scalar(f64::from(value))
    }
}

impl From<i32> for Values<'_> {
    fn from(value: i32) -> Self {
        Self::Scalar(f64::from(value))
    }
}

impl<'a> From<&'a [f64]> for Values<'a> {
    fn from(values: &'a [f64]) -> Self {
        Self::Array(values)
    }
}

impl<'a> From<&'a Vec<f64>> for Values<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        Self::Array(values.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Values<'a> {
    fn from(values: &'a [f64; N]) -> Self {
        Self::Array(values.as_slice())
    }
}

/// The longitudes and latitudes of one or more positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Positions<'a> {
    /// A single longitude and latitude.
    Single { lon: f64, lat: f64 },
    /// Equal length slices of longitudes and latitudes.
    Many { lons: &'a [f64], lats: &'a [f64] },
}

impl<'a> Positions<'a> {
    /// Construct a `Single` position.
    #[must_use]
    pub const fn single(lon: f64, lat: f64) -> Self {
        Self::Single { lon, lat }
    }

    /// Construct `Positions` from slices of longitudes and latitudes.
    /// # Errors
    /// `ShapeError::LengthMismatch` if the slices are different lengths.
    pub const fn many(lons: &'a [f64], lats: &'a [f64]) -> Result<Self, ShapeError> {
        if lons.len() == lats.len() {
            Ok(Self::Many { lons, lats })
        } else {
            Err(ShapeError::LengthMismatch {
                expected: lons.len(),
                actual: lats.len(),
            })
        }
    }

    /// The number of positions, None for a `Single` position.
    #[must_use]
    pub const fn len(&self) -> Option<usize> {
        match self {
            Self::Single { .. } => None,
            Self::Many { lons, .. } => Some(lons.len()),
        }
    }

    /// true for `Many` positions with empty slices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.len(), Some(0))
    }

    /// `Many` may be constructed directly, so check its lengths again.
    const fn checked_len(&self) -> Result<Option<usize>, ShapeError> {
        match self {
            Self::Single { .. } => Ok(None),
            Self::Many { lons, lats } => {
                if lons.len() == lats.len() {
                    Ok(Some(lons.len()))
                } else {
                    Err(ShapeError::LengthMismatch {
                        expected: lons.len(),
                        actual: lats.len(),
                    })
                }
            }
        }
    }

    /// The point at index, the same point for every index of a `Single`.
    fn point(&self, index: usize, units: Units) -> Point {
        match *self {
            Self::Single { lon, lat } => to_sphere(lon, lat, units),
            Self::Many { lons, lats } => to_sphere(lons[index], lats[index], units),
        }
    }
}

impl<'a> TryFrom<(Values<'a>, Values<'a>)> for Positions<'a> {
    type Error = ShapeError;

    /// Attempt to combine a pair of longitude and latitude `Values`.
    fn try_from(values: (Values<'a>, Values<'a>)) -> Result<Self, Self::Error> {
        match values {
            (Values::Scalar(lon), Values::Scalar(lat)) => Ok(Self::single(lon, lat)),
            (Values::Array(lons), Values::Array(lats)) => Self::many(lons, lats),
            _ => Err(ShapeError::MixedShape),
        }
    }
}

/// The result of a distance calculation: a single distance or a distance
/// for each of the positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distances {
    /// The distance between two single positions.
    Scalar(f64),
    /// A distance for each position, in input order.
    Array(Vec<f64>),
}

impl Distances {
    /// The number of distances, 1 for a `Scalar`.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Array(values) => values.len(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The single distance, None for an `Array`.
    #[must_use]
    pub const fn scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Array(_) => None,
        }
    }

    /// The distances as a slice.
    #[must_use]
    pub const fn as_slice(&self) -> &[f64] {
        match self {
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::Array(values) => values.as_slice(),
        }
    }

    /// The distances as a vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        match self {
            Self::Scalar(value) => vec![value],
            Self::Array(values) => values,
        }
    }
}

#[cfg(not(feature = "rayon"))]
fn calculate_distances(a: &Positions, b: &Positions, len: usize, units: Units) -> Vec<f64> {
    (0..len)
        .map(|i| units.from_radians(angle_between(&a.point(i, units), &b.point(i, units)).0))
        .collect()
}

#[cfg(feature = "rayon")]
fn calculate_distances(a: &Positions, b: &Positions, len: usize, units: Units) -> Vec<f64> {
    use rayon::prelude::*;

    (0..len)
        .into_par_iter()
        .map(|i| units.from_radians(angle_between(&a.point(i, units), &b.point(i, units)).0))
        .collect()
}

/// Calculate the angular distances between two sets of positions.
/// * `a`, `b` - the positions.
/// * `units` - the units of the positions and the result.
///
/// returns a `Scalar` distance if both positions are single, otherwise an
/// `Array` with a distance for each position.
/// # Errors
/// `ShapeError::LengthMismatch` if the positions are different lengths,
/// before any distance is calculated.
/// # Examples
/// ```
/// use angular_distance::{angular_distances, is_within_tolerance, Positions, Units};
///
/// let lons = [0.0, 90.0];
/// let lats = [0.0, 0.0];
/// let a = Positions::many(&lons, &lats).unwrap();
/// let north_pole = Positions::single(0.0, 90.0);
///
/// let result = angular_distances(&a, &north_pole, Units::Degrees).unwrap();
/// assert_eq!(2, result.len());
/// assert!(result.as_slice().iter().all(|&d| is_within_tolerance(90.0, d, 1.0e-12)));
/// ```
pub fn angular_distances(
    a: &Positions,
    b: &Positions,
    units: Units,
) -> Result<Distances, ShapeError> {
    let len = match (a.checked_len()?, b.checked_len()?) {
        (None, None) => {
            let distance = angle_between(&a.point(0, units), &b.point(0, units));
            return Ok(Distances::Scalar(units.from_radians(distance.0)));
        }
        (Some(len), None) | (None, Some(len)) => len,
        (Some(a_len), Some(b_len)) => {
            if a_len != b_len {
                return Err(ShapeError::LengthMismatch {
                    expected: a_len,
                    actual: b_len,
                });
            }
            a_len
        }
    };

    Ok(Distances::Array(calculate_distances(a, b, len, units)))
}

/// Calculate the angular distances between two positions given as single
/// values or slices of longitudes and latitudes.
/// * `lon1`, `lat1` - the longitudes and latitudes of the first position(s).
/// * `lon2`, `lat2` - the longitudes and latitudes of the second position(s).
/// * `units` - the units of the arguments and the result.
///
/// # Errors
/// `ShapeError::MixedShape` if a position has a single value and a slice,
/// `ShapeError::LengthMismatch` if slices are different lengths.
/// # Examples
/// ```
/// use angular_distance::{angular_distance_values, Distances, ShapeError, Units};
///
/// let lons: Vec<f64> = vec![0.0, 90.0];
/// let lats: Vec<f64> = vec![0.0, 0.0, 0.0];
/// let result = angular_distance_values(&lons, &lats, 0.0_f64, 90.0_f64, Units::Degrees);
/// assert_eq!(Err(ShapeError::LengthMismatch { expected: 2, actual: 3 }), result);
///
/// let result = angular_distance_values(0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64, Units::Radians);
/// assert_eq!(Ok(Distances::Scalar(0.0)), result);
/// ```
pub fn angular_distance_values<'a>(
    lon1: impl Into<Values<'a>>,
    lat1: impl Into<Values<'a>>,
    lon2: impl Into<Values<'a>>,
    lat2: impl Into<Values<'a>>,
    units: Units,
) -> Result<Distances, ShapeError> {
    let a = Positions::try_from((lon1.into(), lat1.into()))?;
    let b = Positions::try_from((lon2.into(), lat2.into()))?;
    angular_distances(&a, &b, units)
}
