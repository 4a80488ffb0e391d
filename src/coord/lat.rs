use std::{convert::TryFrom, error::Error, fmt, ops::Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::{Dms, DEGREE_SIGN},
    bool_enum,
};

bool_enum!(Pole: North and South; parse from 'N':'S' with ParsePoleError);

/// The angle measured between the equatorial plane and the point along the meridian.
/// [Read more](https://en.wikipedia.org/wiki/Latitude).
///
/// Stored in the Maidenhead absolute form: degrees north of the south pole,
/// 0 at the south pole, 90 at the equator, 180 at the north pole.
/// The convention keeps the working value non-negative,
/// so the locator encoder can subdivide it without any sign handling.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Latitude(f64);

impl Latitude {
    /// Combine a sexagesimal angle with the pole it points to.
    /// No range validation happens here (nor anywhere in the pipeline):
    /// an angle beyond 90° simply produces an absolute value beyond the grid.
    pub fn new(angle: Dms, pole: Pole) -> Self {
        Self::from_degrees(angle.to_degrees(), pole)
    }

    /// Combine already-decimal degrees with the pole they point to
    pub fn from_degrees(value: f64, pole: Pole) -> Self {
        let from_south_pole = match pole {
            North => 90.0 + value,
            South => 90.0 - value,
        };
        Self(from_south_pole)
    }

    /// Construct a northern latitude
    pub fn north<T: Into<Dms>>(angle: T) -> Self {
        Self::new(angle.into(), North)
    }

    /// Construct a southern latitude
    pub fn south<T: Into<Dms>>(angle: T) -> Self {
        Self::new(angle.into(), South)
    }

    /// The central latitude of the sphere equidistant from the poles
    pub fn equator() -> Self {
        Self(90.0)
    }

    /// The normalized (absolute) value: degrees north of the south pole,
    /// in `[0, 180]` for any physical latitude
    pub fn from_south_pole(self) -> f64 {
        self.0
    }

    /// Signed decimal degrees with the common convention:
    /// positive to the north, negative to the south
    pub fn degrees(self) -> f64 {
        self.0 - 90.0
    }

    /// Which pole are closer to the given latitude
    pub fn hemisphere(self) -> Option<Pole> {
        if self.0 > 90.0 {
            Some(North)
        } else if self.0 < 90.0 {
            Some(South)
        } else {
            None
        }
    }
}

impl Default for Latitude {
    fn default() -> Self {
        Self::equator()
    }
}

impl Neg for Latitude {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(180.0 - self.0)
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:.6}{}", self.degrees().abs(), DEGREE_SIGN)?;
            if let Some(pole) = self.hemisphere() {
                write!(f, "{}", pole)?;
            }
            Ok(())
        } else {
            write!(f, "{:.6}{}", self.degrees(), DEGREE_SIGN)
        }
    }
}
