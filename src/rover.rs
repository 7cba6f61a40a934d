//! Rover state and the turn/move operations that drive it.

use crate::command::Instruction;
use crate::compass::{Compass, Direction};
use crate::error::{MissionError, Placement, Result};
use crate::plateau::Plateau;
use glam::I64Vec2;
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of a rover: `(name, x, y, direction)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverStatus {
    /// Rover name.
    pub name: String,
    /// Column, growing East.
    pub x: i64,
    /// Row, growing North.
    pub y: i64,
    /// Heading at the time of the snapshot.
    pub direction: Direction,
}

impl fmt::Display for RoverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.name, self.x, self.y, self.direction)
    }
}

/// A named rover standing on a plateau.
///
/// The position is always inside the plateau: construction rejects an
/// out-of-range landing and a move that would step off the edge fails without
/// touching the rover.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rover {
    name: String,

    /// Grid cell the rover occupies. `x` grows East, `y` grows North.
    position: I64Vec2,

    compass: Compass,

    /// The plateau this rover landed on. A later plateau definition does not move it.
    plateau: Plateau,
}

impl Rover {
    /// Lands a rover at `(x, y)`.
    ///
    /// Returns `Err(MissionError::OutsideOfThePlateau)` if the coordinates are
    /// not in range of `plateau`.
    pub fn new(
        name: impl Into<String>,
        x: i64,
        y: i64,
        compass: Compass,
        plateau: Plateau,
    ) -> Result<Self> {
        if !plateau.is_in_range(x, y) {
            return Err(out_of_range(Placement::Landing, x, y, &plateau));
        }
        Ok(Self {
            name: name.into(),
            position: I64Vec2::new(x, y),
            compass,
            plateau,
        })
    }

    /// Name the rover was landed under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current cell as a vector.
    pub fn position(&self) -> I64Vec2 {
        self.position
    }

    /// Current x coordinate.
    pub fn x(&self) -> i64 {
        self.position.x
    }

    /// Current y coordinate.
    pub fn y(&self) -> i64 {
        self.position.y
    }

    /// Current heading.
    pub fn direction(&self) -> Direction {
        self.compass.direction()
    }

    /// The rover's compass.
    pub fn compass(&self) -> &Compass {
        &self.compass
    }

    /// The plateau the rover landed on.
    pub fn plateau(&self) -> &Plateau {
        &self.plateau
    }

    /// Quarter turn counter-clockwise.
    pub fn turn_left(&mut self) -> Direction {
        self.compass.rotate_counterclockwise()
    }

    /// Quarter turn clockwise.
    pub fn turn_right(&mut self) -> Direction {
        self.compass.rotate_clockwise()
    }

    /// Steps one cell in the current heading and returns the new `(x, y)`.
    ///
    /// If the destination is off the plateau the rover stays put and
    /// `Err(MissionError::OutsideOfThePlateau)` is returned.
    pub fn move_forward(&mut self) -> Result<(i64, i64)> {
        let target = self.position + self.compass.direction().offset();
        if !self.plateau.is_in_range(target.x, target.y) {
            return Err(out_of_range(
                Placement::Destination,
                target.x,
                target.y,
                &self.plateau,
            ));
        }
        self.position = target;
        Ok((target.x, target.y))
    }

    /// Applies one decoded instruction.
    pub fn step(&mut self, instruction: Instruction) -> Result<()> {
        match instruction {
            Instruction::Left => {
                self.turn_left();
            }
            Instruction::Right => {
                self.turn_right();
            }
            Instruction::Move => {
                self.move_forward()?;
            }
        }
        trace!(
            "{} {} -> ({}, {}) {}",
            self.name,
            instruction.symbol(),
            self.position.x,
            self.position.y,
            self.direction()
        );
        Ok(())
    }

    /// Runs a textual command batch left to right.
    ///
    /// `L` turns left, `R` turns right and any other character moves. The first
    /// failing move aborts the batch; the rover keeps whatever state the
    /// preceding commands produced.
    pub fn process_commands(&mut self, commands: &str) -> Result<RoverStatus> {
        for c in commands.chars() {
            self.step(Instruction::from_char_lossy(c))?;
        }
        Ok(self.report_status())
    }

    /// Typed counterpart of [`process_commands`](Self::process_commands).
    pub fn execute(&mut self, instructions: &[Instruction]) -> Result<RoverStatus> {
        for &instruction in instructions {
            self.step(instruction)?;
        }
        Ok(self.report_status())
    }

    /// Snapshot of name, position and heading.
    pub fn report_status(&self) -> RoverStatus {
        RoverStatus {
            name: self.name.clone(),
            x: self.position.x,
            y: self.position.y,
            direction: self.compass.direction(),
        }
    }
}

fn out_of_range(placement: Placement, x: i64, y: i64, plateau: &Plateau) -> MissionError {
    MissionError::OutsideOfThePlateau {
        placement,
        x,
        y,
        width: plateau.width(),
        length: plateau.length(),
    }
}
