//! Rover instructions and the three line matchers understood by mission control.
//!
//! Each matcher is independent and returns `None` when its grammar does not
//! apply, so [`MissionControl`](crate::MissionControl) can try them in a fixed
//! order and tell a malformed line apart from a well-formed one that refers to
//! missing state.

use crate::compass::Direction;
use crate::error::{MissionError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A single step in an instruction batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Quarter turn counter-clockwise (`L`).
    Left,
    /// Quarter turn clockwise (`R`).
    Right,
    /// One cell forward (`M`).
    Move,
}

impl Instruction {
    /// Permissive decoding: `L` and `R` turn, every other character moves.
    pub fn from_char_lossy(c: char) -> Self {
        match c {
            'L' => Self::Left,
            'R' => Self::Right,
            _ => Self::Move,
        }
    }

    /// Strict decoding of a whole sequence. Rejects anything outside `M`, `L`, `R`.
    pub fn parse_sequence(sequence: &str) -> Result<Vec<Self>> {
        sequence.chars().map(Self::try_from).collect()
    }

    /// The letter used on instruction lines.
    pub fn symbol(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Move => 'M',
        }
    }
}

impl TryFrom<char> for Instruction {
    type Error = MissionError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'L' => Ok(Self::Left),
            'R' => Ok(Self::Right),
            'M' => Ok(Self::Move),
            other => Err(MissionError::UnknownInstruction(other)),
        }
    }
}

static PLATEAU_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*Plateau\s*:\s*(\d+)\s+(\d+)\s*$").expect("plateau pattern is valid")
});

static LANDING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(.*?)\s+Landing\s*:\s*(\d+)\s+(\d+)\s+([NESW])\s*$")
        .expect("landing pattern is valid")
});

static INSTRUCTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(.*?)\s+Instructions\s*:\s*([MLR]+)\s*$")
        .expect("instruction pattern is valid")
});

/// `Plateau: <width> <length>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlateauLine {
    /// Largest x coordinate.
    pub width: u32,
    /// Largest y coordinate.
    pub length: u32,
}

/// `<name> Landing: <x> <y> <N|E|S|W>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandingLine {
    /// Rover name; may contain spaces.
    pub name: String,
    /// Landing column.
    pub x: i64,
    /// Landing row.
    pub y: i64,
    /// Raw direction symbol; validated when the compass is built.
    pub direction: String,
}

/// `<name> Instructions: <M|L|R>+`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionLine {
    /// Rover the batch is addressed to.
    pub name: String,
    /// The `M`/`L`/`R` sequence, in order.
    pub instructions: String,
}

/// Matches a plateau definition. Dimensions beyond `u32::MAX` saturate.
pub fn parse_plateau_line(line: &str) -> Option<PlateauLine> {
    let caps = PLATEAU_LINE.captures(line)?;
    Some(PlateauLine {
        width: caps[1].parse().unwrap_or(u32::MAX),
        length: caps[2].parse().unwrap_or(u32::MAX),
    })
}

/// Matches a landing line. The name is the shortest prefix before `Landing`.
///
/// Coordinates beyond `i64::MAX` saturate; they are off every plateau, so the
/// landing still fails with the usual state or range error.
pub fn parse_landing_line(line: &str) -> Option<LandingLine> {
    let caps = LANDING_LINE.captures(line)?;
    Some(LandingLine {
        name: caps[1].to_owned(),
        x: caps[2].parse().unwrap_or(i64::MAX),
        y: caps[3].parse().unwrap_or(i64::MAX),
        direction: caps[4].to_owned(),
    })
}

/// Matches an instruction batch.
pub fn parse_instruction_line(line: &str) -> Option<InstructionLine> {
    let caps = INSTRUCTION_LINE.captures(line)?;
    Some(InstructionLine {
        name: caps[1].to_owned(),
        instructions: caps[2].to_owned(),
    })
}

impl LandingLine {
    /// Parses the direction symbol, failing with `UnknownDirection`.
    pub fn heading(&self) -> Result<Direction> {
        self.direction.parse()
    }
}
