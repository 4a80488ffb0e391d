//! Sexagesimal angles: the degree-minute-second triple
//! and its conversion into decimal degrees.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, Sub},
};

use num_traits::{CheckedAdd, CheckedSub};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) const MINUTES_IN_DEGREE: u16 = 60;
pub(crate) const SECONDS_IN_MINUTE: u16 = 60;
pub(crate) const SECONDS_IN_DEGREE: u16 = MINUTES_IN_DEGREE * SECONDS_IN_MINUTE;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';

/// An angle in the sexagesimal notation:
/// whole degrees, arc minutes and arc seconds.
/// <https://en.wikipedia.org/wiki/Minute_and_second_of_arc>
///
/// No range invariant is imposed on the parts: the angle is taken
/// exactly as the caller provides it, so 9°57′60″ is a legitimate
/// value equal to 9°58′. Comparisons and arithmetic work on the
/// total amount of arc seconds, which makes the two spellings equal.
#[derive(Debug, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dms {
    degrees: u16,
    minutes: u16,
    seconds: u16,
}

impl Dms {
    /// Construct an angle from its sexagesimal parts
    pub const fn new(degrees: u16, minutes: u16, seconds: u16) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    /// The whole degrees part of the angle
    pub const fn degrees(self) -> u16 {
        self.degrees
    }

    /// The arc minutes part of the angle
    pub const fn minutes(self) -> u16 {
        self.minutes
    }

    /// The arc seconds part of the angle
    pub const fn seconds(self) -> u16 {
        self.seconds
    }

    /// The angle as decimal degrees: `degrees + minutes/60 + seconds/3600`.
    ///
    /// The fractions are computed in floating point,
    /// so exact sexagesimal values convert exactly
    /// (1′ is precisely 1/60 of a degree).
    pub fn to_degrees(self) -> f64 {
        f64::from(self.degrees)
            + f64::from(self.minutes) / f64::from(MINUTES_IN_DEGREE)
            + f64::from(self.seconds) / f64::from(SECONDS_IN_DEGREE)
    }

    fn total_seconds(self) -> u32 {
        u32::from(self.degrees) * u32::from(SECONDS_IN_DEGREE)
            + u32::from(self.minutes) * u32::from(SECONDS_IN_MINUTE)
            + u32::from(self.seconds)
    }

    /// Rebuild a (normalized) angle from the total amount of arc seconds.
    /// `None` when the degrees part overflows its type.
    fn from_total_seconds(total: u32) -> Option<Self> {
        let degrees = total / u32::from(SECONDS_IN_DEGREE);
        let degrees = degrees.try_into().ok()?;

        let in_degree = total % u32::from(SECONDS_IN_DEGREE);
        let minutes = (in_degree / u32::from(SECONDS_IN_MINUTE)) as u16;
        let seconds = (in_degree % u32::from(SECONDS_IN_MINUTE)) as u16;
        Some(Self {
            degrees,
            minutes,
            seconds,
        })
    }
}

impl PartialEq for Dms {
    fn eq(&self, other: &Self) -> bool {
        self.total_seconds() == other.total_seconds()
    }
}

impl Eq for Dms {}

impl PartialOrd for Dms {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dms {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_seconds().cmp(&other.total_seconds())
    }
}

impl Hash for Dms {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_seconds().hash(state);
    }
}

impl Add for Dms {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs)
            .expect("The sum overflows the degrees range")
    }
}

impl CheckedAdd for Dms {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        // both totals fit far below u32::MAX, the sum cannot wrap
        Self::from_total_seconds(self.total_seconds() + rhs.total_seconds())
    }
}

impl Sub for Dms {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs)
            .expect("The subtrahend is bigger than the angle itself")
    }
}

impl CheckedSub for Dms {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        let diff = self.total_seconds().checked_sub(rhs.total_seconds())?;
        Self::from_total_seconds(diff)
    }
}

impl From<u16> for Dms {
    fn from(degrees: u16) -> Self {
        Self::new(degrees, 0, 0)
    }
}

impl From<(u16, u16)> for Dms {
    fn from(value: (u16, u16)) -> Self {
        let (degrees, minutes) = value;
        Self::new(degrees, minutes, 0)
    }
}

impl From<(u16, u16, u16)> for Dms {
    fn from(value: (u16, u16, u16)) -> Self {
        let (degrees, minutes, seconds) = value;
        Self::new(degrees, minutes, seconds)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.degrees, DEGREE_SIGN)?;

        if (self.minutes != 0) || (self.seconds != 0) {
            write!(f, "{}{}", self.minutes, ARC_MINUTE_SIGN)?;
        }

        if self.seconds != 0 {
            write!(f, "{}{}", self.seconds, ARC_SECOND_SIGN)?;
        }

        Ok(())
    }
}
