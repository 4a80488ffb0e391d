use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::locator::{encode, Locator};

use super::{lat::Latitude, lon::Longitude};

/// The point on the surface, represented as the pair (latitude, longitude)
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    lat: Latitude,
    lon: Longitude,
}

impl Point {
    /// Construct a point from the given latitude and longitude
    pub fn new(lat: Latitude, lon: Longitude) -> Self {
        Self { lat, lon }
    }

    /// The latitude of the point
    pub fn lat(&self) -> Latitude {
        self.lat
    }

    /// The longitude of the point
    pub fn lon(&self) -> Longitude {
        self.lon
    }

    /// The full four-level (eight characters) locator of the point
    pub fn locator(&self) -> Locator {
        self.locator_with_capacity(Locator::FULL_CAPACITY)
    }

    /// The locator of the point, truncated to whatever number
    /// of whole character pairs fits into `capacity - 1` characters
    pub fn locator_with_capacity(&self, capacity: usize) -> Locator {
        encode(
            self.lon.from_antimeridian(),
            self.lat.from_south_pole(),
            capacity,
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Lat: {:#}, Long: {:#}", self.lat, self.lon)
        } else {
            write!(f, "({},{})", self.lat, self.lon)
        }
    }
}
