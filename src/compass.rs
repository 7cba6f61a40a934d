//! Cardinal directions and the rotating compass every rover carries.

use crate::error::{MissionError, Result};
use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal points, ordered clockwise N → E → S → W.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Direction {
    /// All directions in clockwise order, starting at North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The next direction clockwise.
    pub fn clockwise(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The next direction counter-clockwise.
    pub fn counterclockwise(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Unit step on the plateau grid. North is +y, East is +x.
    pub fn offset(self) -> I64Vec2 {
        match self {
            Self::North => I64Vec2::Y,
            Self::South => I64Vec2::NEG_Y,
            Self::East => I64Vec2::X,
            Self::West => I64Vec2::NEG_X,
        }
    }

    /// The single-letter symbol used on landing lines.
    pub fn symbol(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Direction {
    type Err = MissionError;

    /// Accepts exactly `N`, `E`, `S` or `W`. Case-sensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "N" => Ok(Self::North),
            "E" => Ok(Self::East),
            "S" => Ok(Self::South),
            "W" => Ok(Self::West),
            other => Err(MissionError::UnknownDirection(other.to_owned())),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = MissionError;

    fn try_from(c: char) -> Result<Self> {
        let mut buf = [0u8; 4];
        c.encode_utf8(&mut buf).parse()
    }
}

/// Holds the heading of a single rover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compass {
    direction: Direction,
}

impl Compass {
    /// Creates a compass pointing at `direction`.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// Builds a compass from a textual symbol, failing with
    /// [`MissionError::UnknownDirection`] for anything but `N`, `E`, `S`, `W`.
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        Ok(Self::new(symbol.parse()?))
    }

    /// Rotates a quarter turn clockwise and returns the new heading.
    pub fn rotate_clockwise(&mut self) -> Direction {
        self.direction = self.direction.clockwise();
        self.direction
    }

    /// Rotates a quarter turn counter-clockwise and returns the new heading.
    pub fn rotate_counterclockwise(&mut self) -> Direction {
        self.direction = self.direction.counterclockwise();
        self.direction
    }

    /// Current heading.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Uniform choice over the four directions, shared by the property tests.
#[cfg(test)]
pub(crate) fn arb_direction() -> impl proptest::strategy::Strategy<Value = Direction> {
    proptest::sample::select(Direction::ALL.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rotation_sequence() {
        let mut compass = Compass::default();
        assert_eq!(compass.direction(), Direction::North);
        assert_eq!(compass.rotate_clockwise(), Direction::East);
        assert_eq!(compass.rotate_counterclockwise(), Direction::North);
        assert_eq!(compass.rotate_counterclockwise(), Direction::West);
        assert_eq!(compass.rotate_counterclockwise(), Direction::South);
        assert_eq!(compass.rotate_counterclockwise(), Direction::East);
        assert_eq!(compass.rotate_counterclockwise(), Direction::North);
    }

    #[test]
    fn from_symbol_rejects_unknown_letters() {
        assert!(matches!(
            Compass::from_symbol("A"),
            Err(MissionError::UnknownDirection(s)) if s == "A"
        ));
        assert!(Compass::from_symbol("n").is_err());
        assert!(Compass::from_symbol("").is_err());
        assert!(Compass::from_symbol("NE").is_err());

        assert_eq!(Compass::from_symbol("E").unwrap().direction(), Direction::East);
        assert_eq!(Compass::from_symbol("S").unwrap().direction(), Direction::South);
    }

    #[test]
    fn char_conversion_matches_symbol() {
        for d in Direction::ALL {
            assert_eq!(Direction::try_from(d.symbol()).unwrap(), d);
            assert_eq!(d.to_string(), d.symbol().to_string());
        }
        assert!(Direction::try_from('X').is_err());
    }

    #[test]
    fn offsets_are_unit_steps() {
        assert_eq!(Direction::North.offset(), I64Vec2::new(0, 1));
        assert_eq!(Direction::South.offset(), I64Vec2::new(0, -1));
        assert_eq!(Direction::East.offset(), I64Vec2::new(1, 0));
        assert_eq!(Direction::West.offset(), I64Vec2::new(-1, 0));
    }

    proptest! {
        #[test]
        fn four_quarter_turns_return_home(d in arb_direction()) {
            let mut cw = Compass::new(d);
            let mut ccw = Compass::new(d);
            for _ in 0..4 {
                cw.rotate_clockwise();
                ccw.rotate_counterclockwise();
            }
            prop_assert_eq!(cw.direction(), d);
            prop_assert_eq!(ccw.direction(), d);
        }

        #[test]
        fn two_lefts_then_two_rights_is_identity(d in arb_direction()) {
            let mut compass = Compass::new(d);
            compass.rotate_counterclockwise();
            compass.rotate_counterclockwise();
            compass.rotate_clockwise();
            compass.rotate_clockwise();
            prop_assert_eq!(compass.direction(), d);
        }

        #[test]
        fn rotations_are_inverse(d in arb_direction()) {
            prop_assert_eq!(d.clockwise().counterclockwise(), d);
            prop_assert_eq!(d.counterclockwise().clockwise(), d);
        }
    }
}
