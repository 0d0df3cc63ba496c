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

//! The trig module contains types and functions for converting angles and
//! for converting between polar and rectangular coordinates.

#![allow(clippy::float_cmp)]

use super::Validate;
use contracts::debug_ensures;
use serde::{Deserialize, Serialize};

/// The Degrees newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Degrees(pub f64);

/// The Radians newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Radians(pub f64);

impl From<Radians> for Degrees {
    /// Construct an angle in Degrees from an angle in Radians.
    /// # Examples
    /// ```
    /// use angular_distance::trig::Degrees;
    /// use angular_distance::trig::Radians;
    ///
    /// let arg = Radians(std::f64::consts::FRAC_PI_2);
    /// let answer = Degrees::from(arg);
    /// assert_eq!(90.0, answer.0);
    /// ```
    fn from(a: Radians) -> Self {
        Self(a.0.to_degrees())
    }
}

impl Radians {
    /// Normalise a Radians into the range: `-PI < value <= PI`
    /// # Examples
    /// ```
    /// use angular_distance::trig::Radians;
    ///
    /// assert_eq!(0.0, Radians(-2.0 * std::f64::consts::PI).normalise().0);
    /// assert_eq!(std::f64::consts::PI, Radians(-std::f64::consts::PI).normalise().0);
    /// assert_eq!(std::f64::consts::PI, Radians(std::f64::consts::PI).normalise().0);
    /// assert_eq!(0.0, Radians(2.0 * std::f64::consts::PI).normalise().0);
    /// ```
    #[must_use]
    pub fn normalise(self) -> Self {
        if self.0 <= -std::f64::consts::PI {
            Self(self.0 + std::f64::consts::TAU)
        } else if self.0 <= std::f64::consts::PI {
            self
        } else {
            Self(self.0 - std::f64::consts::TAU)
        }
    }
}

impl Validate for Radians {
    /// Test whether a Radians is valid.
    /// I.e. whether it lies in the range: -PI <= value <= PI
    /// # Examples
    /// ```
    /// use angular_distance::trig::Radians;
    /// use angular_distance::Validate;
    ///
    /// assert!(!Radians(-std::f64::consts::PI * (1.0 + f64::EPSILON)).is_valid());
    /// assert!(Radians(-std::f64::consts::PI).is_valid());
    /// assert!(Radians(std::f64::consts::PI).is_valid());
    /// assert!(!(Radians(std::f64::consts::PI * (1.0 + f64::EPSILON)).is_valid()));
    /// ```
    fn is_valid(&self) -> bool {
        (-std::f64::consts::PI..=std::f64::consts::PI).contains(&self.0)
    }
}

impl From<Degrees> for Radians {
    /// Construct an angle in Radians from an angle in Degrees.
    /// # Examples
    /// ```
    /// use angular_distance::trig::Degrees;
    /// use angular_distance::trig::Radians;
    ///
    /// let arg = Degrees(-90.0);
    /// let answer = Radians::from(arg);
    /// assert_eq!(-std::f64::consts::FRAC_PI_2, answer.0);
    /// ```
    fn from(a: Degrees) -> Self {
        Self(a.0.to_radians())
    }
}

/// The units of the angles passed to and returned from the distance functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Angles in radians.
    #[default]
    Radians,
    /// Angles in degrees.
    Degrees,
}

impl Units {
    /// Convert a value in these units to radians.
    /// # Examples
    /// ```
    /// use angular_distance::Units;
    ///
    /// assert_eq!(std::f64::consts::PI, Units::Degrees.to_radians(180.0));
    /// assert_eq!(1.0, Units::Radians.to_radians(1.0));
    /// ```
    #[must_use]
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Radians => value,
            Self::Degrees => Radians::from(Degrees(value)).0,
        }
    }

    /// Convert a value in radians to these units.
    #[must_use]
    pub fn from_radians(self, value: f64) -> f64 {
        match self {
            Self::Radians => value,
            Self::Degrees => Degrees::from(Radians(value)).0,
        }
    }
}

impl From<bool> for Units {
    /// `true` selects degrees, `false` radians.
    fn from(degrees: bool) -> Self {
        if degrees {
            Self::Degrees
        } else {
            Self::Radians
        }
    }
}

/// Convert polar coordinates to rectangular coordinates.
/// * `radius` - the distance from the origin.
/// * `angle` - the angle from the x axis, in `units`.
/// * `units` - the units of `angle`.
///
/// returns the x and y coordinates.
/// # Examples
/// ```
/// use angular_distance::trig::polar_to_rect;
/// use angular_distance::Units;
///
/// let (x, y) = polar_to_rect(2.0, 0.0, Units::Degrees);
/// assert_eq!(2.0, x);
/// assert_eq!(0.0, y);
/// ```
#[must_use]
pub fn polar_to_rect(radius: f64, angle: f64, units: Units) -> (f64, f64) {
    let (sin, cos) = libm::sincos(units.to_radians(angle));
    (radius * cos, radius * sin)
}

/// Convert rectangular coordinates to polar coordinates.
/// The angle at the origin is zero.
/// * `x`, `y` - the rectangular coordinates.
///
/// returns the distance from the origin and the angle from the x axis
/// in the range: -PI < angle <= PI
/// # Examples
/// ```
/// use angular_distance::trig::{rect_to_polar, Radians};
///
/// let (r, angle) = rect_to_polar(0.0, -2.0);
/// assert_eq!(2.0, r);
/// assert_eq!(Radians(-std::f64::consts::FRAC_PI_2), angle);
/// ```
#[debug_ensures(ret.1.is_valid() || (ret.1).0.is_nan())]
#[must_use]
pub fn rect_to_polar(x: f64, y: f64) -> (f64, Radians) {
    let radius = libm::hypot(x, y);
    if x == 0.0 && y == 0.0 {
        (radius, Radians(0.0))
    } else {
        // atan2 returns -PI for a negative zero y and negative x
        (radius, Radians(libm::atan2(y, x)).normalise())
    }
}
