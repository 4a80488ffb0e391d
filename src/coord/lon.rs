use std::{convert::TryFrom, error::Error, fmt, ops::Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::{Dms, DEGREE_SIGN},
    bool_enum,
};

bool_enum!(RotationalDirection: East and West; parse from 'E':'W' with ParseDirectionError);

/// The angle measured on the equatorial plane between the meridian of the point
/// and the prime meridian (Greenwich, UK).
/// [Read more](https://en.wikipedia.org/wiki/Longitude).
///
/// Stored in the Maidenhead absolute form: degrees east of the antimeridian,
/// 0 at the antimeridian, 180 at Greenwich, 360 back at the antimeridian.
/// Like the latitude, the value stays non-negative for the locator encoder.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Longitude(f64);

impl Longitude {
    /// Combine a sexagesimal angle with the rotational direction.
    /// No range validation happens here: an angle beyond 180°
    /// simply produces an absolute value outside the grid.
    pub fn new(angle: Dms, direction: RotationalDirection) -> Self {
        Self::from_degrees(angle.to_degrees(), direction)
    }

    /// Combine already-decimal degrees with the rotational direction
    pub fn from_degrees(value: f64, direction: RotationalDirection) -> Self {
        let from_antimeridian = match direction {
            West => 180.0 - value,
            East => 180.0 + value,
        };
        Self(from_antimeridian)
    }

    /// Construct an eastern longitude
    pub fn east<T: Into<Dms>>(angle: T) -> Self {
        Self::new(angle.into(), East)
    }

    /// Construct a western longitude
    pub fn west<T: Into<Dms>>(angle: T) -> Self {
        Self::new(angle.into(), West)
    }

    /// The chosen by convention [0-meridian](https://en.wikipedia.org/wiki/Prime_meridian)
    pub fn prime() -> Self {
        Self(180.0)
    }

    /// The normalized (absolute) value: degrees east of the antimeridian,
    /// in `[0, 360]` for any physical longitude
    pub fn from_antimeridian(self) -> f64 {
        self.0
    }

    /// Signed decimal degrees with the common convention:
    /// positive to the east, negative to the west
    pub fn degrees(self) -> f64 {
        self.0 - 180.0
    }

    /// In which direction (from the prime meridian)
    /// should we move to reach the longitude faster.
    /// `None` for the prime meridian and the antimeridian themselves.
    pub fn direction(self) -> Option<RotationalDirection> {
        if self.0 == 0.0 || self.0 == 180.0 || self.0 == 360.0 {
            None
        } else if self.0 > 180.0 {
            Some(East)
        } else {
            Some(West)
        }
    }
}

impl Default for Longitude {
    fn default() -> Self {
        Self::prime()
    }
}

impl Neg for Longitude {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(360.0 - self.0)
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:.6}{}", self.degrees().abs(), DEGREE_SIGN)?;
            if let Some(direction) = self.direction() {
                write!(f, "{}", direction)?;
            }
            Ok(())
        } else {
            write!(f, "{:.6}{}", self.degrees(), DEGREE_SIGN)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prime_from_both_directions() {
        assert_eq!(Longitude::from_degrees(0.0, West).from_antimeridian(), 180.0);
        assert_eq!(Longitude::from_degrees(0.0, East).from_antimeridian(), 180.0);
        assert_eq!(Longitude::from_degrees(0.0, East), Longitude::prime());
    }

    #[test]
    fn antimeridian_endpoints() {
        // the same meridian reached from either side,
        // mapped to the two ends of the [0, 360] scale
        assert_eq!(Longitude::from_degrees(180.0, West).from_antimeridian(), 0.0);
        assert_eq!(
            Longitude::from_degrees(180.0, East).from_antimeridian(),
            360.0
        );
    }

    #[test]
    fn from_dms() {
        let hamburg = Longitude::east((9, 57, 60));
        assert!((hamburg.from_antimeridian() - 189.966_666_666_667).abs() < 1e-9);
        assert!((hamburg.degrees() - 9.966_666_666_667).abs() < 1e-9);
    }

    #[test]
    fn direction_of_hemispheres() {
        assert_eq!(Longitude::east((30, 18, 31)).direction(), Some(East));
        assert_eq!(Longitude::west((70, 40)).direction(), Some(West));
        assert_eq!(Longitude::prime().direction(), None);
        assert_eq!(Longitude::from_degrees(180.0, West).direction(), None);
        assert_eq!(Longitude::from_degrees(180.0, East).direction(), None);
    }

    #[test]
    fn opposite() {
        let l = Longitude::east((30, 18, 31));
        let opp = -l;
        assert_eq!(opp.direction(), Some(West));
        assert_eq!(opp.degrees(), -l.degrees());
        assert_eq!(-opp, l);
    }

    #[test]
    fn no_validation_beyond_the_antimeridian() {
        let too_far = Longitude::from_degrees(200.0, East);
        assert_eq!(too_far.from_antimeridian(), 380.0);
    }

    #[test]
    fn parse_direction_letter() {
        assert_eq!(RotationalDirection::try_from('E').unwrap(), East);
        assert_eq!(RotationalDirection::try_from('W').unwrap(), West);
        assert!(RotationalDirection::try_from('N').is_err());
        assert!(RotationalDirection::try_from('e').is_err());
    }

    #[test]
    fn display() {
        let santiago = Longitude::west((70, 40, 0));
        assert_eq!(santiago.to_string(), "-70.666667°");
        assert_eq!(format!("{:#}", santiago), "70.666667°W");

        assert_eq!(format!("{:#}", Longitude::prime()), "0.000000°");
    }
}
