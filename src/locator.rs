//! The Maidenhead locator encoding.
//!
//! The grid divides the world into nested cells of four levels:
//! fields (A–R, 20°×10°), squares (0–9, 2°×1°),
//! subsquares (a–x, 5′×2.5′) and extended squares (0–9).
//! A locator interleaves one longitude and one latitude character
//! per level, from the coarsest to the finest.
//! <https://en.wikipedia.org/wiki/Maidenhead_Locator_System>

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One subdivision level of the grid:
/// the first character of its alphabet
/// and the number of cells the level divides its parent into.
struct Level {
    start: u8,
    base: u8,
}

/// Field, square, subsquare, extended square
const LEVELS: [Level; 4] = [
    Level {
        start: b'A',
        base: 18,
    },
    Level {
        start: b'0',
        base: 10,
    },
    Level {
        start: b'a',
        base: 24,
    },
    Level {
        start: b'0',
        base: 10,
    },
];

/// A Maidenhead locator string, at most four character pairs long
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Locator(String);

impl Locator {
    /// The buffer capacity producing a full four-level locator:
    /// eight characters plus the terminator slot
    /// (the capacity is counted in C string fashion).
    pub const FULL_CAPACITY: usize = 9;

    /// The locator as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The number of characters in the locator (always even)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A zero-capacity buffer produces an empty locator
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Locator {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pick the cell of the current level the value falls into:
/// emit the cell's character, leave the distance into the cell
/// in `remainder` and shrink `grid_size` to the cell's size.
fn subdivide(level: &Level, remainder: &mut f64, grid_size: &mut f64) -> char {
    let base = f64::from(level.base);

    // the index reaches `base` exactly when the value sits
    // on the far edge of the scale (e.g. 180°N or 360° of longitude);
    // fold such a value back into the last cell
    let index = (*remainder / *grid_size * base)
        .floor()
        .clamp(0.0, base - 1.0);

    *remainder -= index / base * *grid_size;
    *grid_size /= base;

    char::from(level.start + index as u8)
}

/// Encode a pair of absolute coordinates
/// (degrees east of the antimeridian, degrees north of the south pole)
/// into a locator of at most `capacity - 1` characters.
///
/// The capacity is counted the C way: one slot is reserved
/// for the terminator, the rest hold whole character pairs.
/// Levels which do not fit are silently dropped,
/// so a short buffer truncates the locator instead of failing;
/// `capacity >= FULL_CAPACITY` emits all four levels.
pub fn encode(lon: f64, lat: f64, capacity: usize) -> Locator {
    let mut out = String::with_capacity(capacity.saturating_sub(1));

    let mut lon_remainder = lon;
    let mut lat_remainder = lat;
    let mut lon_grid_size = 360.0;
    let mut lat_grid_size = 180.0;

    for level in &LEVELS {
        // the pair plus the terminator must fit
        if out.len() + 2 >= capacity {
            break;
        }

        out.push(subdivide(level, &mut lon_remainder, &mut lon_grid_size));
        out.push(subdivide(level, &mut lat_remainder, &mut lat_grid_size));
    }

    Locator(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAMBURG_LON: f64 = 180.0 + (9.0 + 57.0 / 60.0 + 60.0 / 3600.0);
    const HAMBURG_LAT: f64 = 90.0 + (53.0 + 32.0 / 60.0 + 37.0 / 3600.0);

    #[test]
    fn reference_locator() {
        let locator = encode(HAMBURG_LON, HAMBURG_LAT, Locator::FULL_CAPACITY);
        assert_eq!(locator, "JO43xn60");
    }

    #[test]
    fn deterministic() {
        let first = encode(HAMBURG_LON, HAMBURG_LAT, Locator::FULL_CAPACITY);
        let second = encode(HAMBURG_LON, HAMBURG_LAT, Locator::FULL_CAPACITY);
        assert_eq!(first, second);
    }

    #[test]
    fn centre_of_the_grid() {
        // the crossing of the prime meridian and the equator
        let locator = encode(180.0, 90.0, Locator::FULL_CAPACITY);
        assert_eq!(locator, "JJ00aa00");
    }

    #[test]
    fn origin_of_the_grid() {
        // the antimeridian at the south pole opens the first cell of every level
        let locator = encode(0.0, 0.0, Locator::FULL_CAPACITY);
        assert_eq!(locator, "AA00aa00");
    }

    #[test]
    fn far_edge_is_clamped_into_the_last_field() {
        // the exact upper boundary belongs to the last cell, not past it
        let locator = encode(360.0, 180.0, Locator::FULL_CAPACITY);
        assert_eq!(locator, "RR99xx99");
    }

    #[test]
    fn truncation_to_three_pairs() {
        let full = encode(HAMBURG_LON, HAMBURG_LAT, Locator::FULL_CAPACITY);
        let truncated = encode(HAMBURG_LON, HAMBURG_LAT, 7);
        assert_eq!(truncated.len(), 6);
        assert_eq!(truncated.as_str(), &full.as_str()[..6]);
    }

    #[test]
    fn truncation_to_two_pairs() {
        let truncated = encode(HAMBURG_LON, HAMBURG_LAT, 5);
        assert_eq!(truncated, "JO43");
    }

    #[test]
    fn truncation_to_one_pair() {
        let truncated = encode(HAMBURG_LON, HAMBURG_LAT, 3);
        assert_eq!(truncated, "JO");
    }

    #[test]
    fn no_room_for_a_pair() {
        // a buffer of two slots holds one character plus the terminator,
        // which is not enough for a whole pair
        assert!(encode(HAMBURG_LON, HAMBURG_LAT, 2).is_empty());
        assert!(encode(HAMBURG_LON, HAMBURG_LAT, 0).is_empty());
    }

    #[test]
    fn odd_capacity_still_produces_whole_pairs() {
        let truncated = encode(HAMBURG_LON, HAMBURG_LAT, 6);
        assert_eq!(truncated, "JO43");
    }

    #[test]
    fn well_known_squares() {
        // Munich, 11.6°E 48.15°N
        assert_eq!(encode(191.6, 138.15, 5), "JN58");
        // Buenos Aires, 58.4°W 34.6°S
        assert_eq!(encode(180.0 - 58.4, 90.0 - 34.6, 5), "GF05");
    }

    #[test]
    fn display_and_accessors() {
        let locator = encode(HAMBURG_LON, HAMBURG_LAT, Locator::FULL_CAPACITY);
        assert_eq!(locator.to_string(), "JO43xn60");
        assert_eq!(locator.as_ref(), "JO43xn60");
        assert_eq!(locator.len(), 8);
        assert!(!locator.is_empty());
    }
}
