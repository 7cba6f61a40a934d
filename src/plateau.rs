//! The bounded grid rovers land on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular plateau with inclusive bounds `[0, width] × [0, length]`.
///
/// A `Plateau(5, 5)` therefore has 36 reachable cells. Dimensions are fixed at
/// construction; a plateau of `0 × 0` still holds the single cell `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Plateau {
    width: u32,
    length: u32,
}

impl Plateau {
    /// Creates a plateau spanning `[0, width] × [0, length]`.
    pub fn new(width: u32, length: u32) -> Self {
        Self { width, length }
    }

    /// Largest valid x coordinate.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Largest valid y coordinate.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns `true` iff `0 <= x <= width` and `0 <= y <= length`.
    pub fn is_in_range(&self, x: i64, y: i64) -> bool {
        (0..=i64::from(self.width)).contains(&x) && (0..=i64::from(self.length)).contains(&y)
    }
}

impl fmt::Display for Plateau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plateau {} {}", self.width, self.length)
    }
}
