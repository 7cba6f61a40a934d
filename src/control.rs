//! Mission control: turns input lines into plateau and rover state changes.
//!
//! The entry point is [`MissionControl::parse_line`]. Each line is classified by
//! trying the matchers from [`crate::command`] in a fixed order:
//!
//! 1. plateau definition
//! 2. rover landing
//! 3. instruction batch
//!
//! The first matcher that applies wins. A line none of them accepts is a
//! [`MissionError::ParseError`]. State errors (no plateau yet, unknown rover)
//! are only raised once the line itself has been recognised.

use crate::command::{parse_instruction_line, parse_landing_line, parse_plateau_line};
use crate::compass::Compass;
use crate::error::{MissionError, Result};
use crate::plateau::Plateau;
use crate::rover::{Rover, RoverStatus};
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// What a successfully processed line produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Outcome {
    /// A plateau definition; the new current plateau.
    Plateau(Plateau),
    /// A landing; a copy of the freshly registered rover.
    Landed(Rover),
    /// An instruction batch; the rover's status after the last command.
    Moved(RoverStatus),
}

impl Outcome {
    /// The rover status for landings and batches, `None` for plateau lines.
    pub fn status(&self) -> Option<RoverStatus> {
        match self {
            Self::Plateau(_) => None,
            Self::Landed(rover) => Some(rover.report_status()),
            Self::Moved(status) => Some(status.clone()),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plateau(plateau) => write!(f, "{plateau}"),
            Self::Landed(rover) => write!(f, "{}", rover.report_status()),
            Self::Moved(status) => write!(f, "{status}"),
        }
    }
}

/// Owns the current plateau and every rover landed so far.
///
/// Both only grow: a new plateau line replaces the current plateau, a new
/// landing under an existing name replaces that rover, and nothing is ever
/// removed.
#[derive(Clone, Debug, Default)]
pub struct MissionControl {
    plateau: Option<Plateau>,
    rovers: HashMap<String, Rover>,
}

impl MissionControl {
    /// Creates a control unit with no plateau and no rovers.
    pub fn new() -> Self {
        Self::default()
    }

    /// The plateau set by the most recent plateau line, if any.
    pub fn plateau(&self) -> Option<&Plateau> {
        self.plateau.as_ref()
    }

    /// Looks up a landed rover by name.
    pub fn rover(&self, name: &str) -> Option<&Rover> {
        self.rovers.get(name)
    }

    /// All registered rovers, in no particular order.
    pub fn rovers(&self) -> impl Iterator<Item = &Rover> {
        self.rovers.values()
    }

    /// Processes a single input line.
    ///
    /// # Errors
    ///
    /// - [`MissionError::PlateauIsUndefined`] for a landing before any plateau line.
    /// - [`MissionError::UnknownDirection`] / [`MissionError::OutsideOfThePlateau`]
    ///   propagated from landing or moving.
    /// - [`MissionError::RoverIsUndefined`] for instructions to a rover never landed.
    /// - [`MissionError::ParseError`] when no grammar matches.
    pub fn parse_line(&mut self, line: &str) -> Result<Outcome> {
        if let Some(def) = parse_plateau_line(line) {
            let plateau = Plateau::new(def.width, def.length);
            debug!("plateau defined: {} x {}", def.width, def.length);
            self.plateau = Some(plateau);
            return Ok(Outcome::Plateau(plateau));
        }

        if let Some(landing) = parse_landing_line(line) {
            let plateau = self.plateau.ok_or(MissionError::PlateauIsUndefined)?;
            let compass = Compass::new(landing.heading()?);
            let rover = Rover::new(landing.name, landing.x, landing.y, compass, plateau)?;
            debug!(
                "rover {:?} landed at ({}, {}) facing {}",
                rover.name(),
                rover.x(),
                rover.y(),
                rover.direction()
            );
            self.rovers.insert(rover.name().to_owned(), rover.clone());
            return Ok(Outcome::Landed(rover));
        }

        if let Some(batch) = parse_instruction_line(line) {
            let rover = self
                .rovers
                .get_mut(&batch.name)
                .ok_or_else(|| MissionError::RoverIsUndefined(batch.name.clone()))?;
            let status = rover.process_commands(&batch.instructions)?;
            debug!(
                "rover {:?} ran {} instructions, now at {}",
                status.name,
                batch.instructions.len(),
                status
            );
            return Ok(Outcome::Moved(status));
        }

        Err(MissionError::ParseError(line.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compass::Direction;
    use crate::error::Placement;

    #[test]
    fn parse_line_walkthrough() {
        let mut control = MissionControl::new();

        assert!(matches!(
            control.parse_line(""),
            Err(MissionError::ParseError(s)) if s.is_empty()
        ));
        assert!(matches!(
            control.parse_line("21900b86b9de9288b4adbf5b05b3826c"),
            Err(MissionError::ParseError(_))
        ));
        assert!(matches!(
            control.parse_line("Rover1 Instructions:LMLMLMLMM"),
            Err(MissionError::RoverIsUndefined(name)) if name == "Rover1"
        ));
        assert!(matches!(
            control.parse_line("Rover1 Landing:1 2 N"),
            Err(MissionError::PlateauIsUndefined)
        ));

        let Outcome::Plateau(plateau) = control.parse_line("Plateau:5 7").unwrap() else {
            panic!("expected a plateau");
        };
        assert_eq!((plateau.width(), plateau.length()), (5, 7));

        let Outcome::Landed(rover) = control.parse_line("Rover1 Landing:1 2 N").unwrap() else {
            panic!("expected a landing");
        };
        assert_eq!(rover.name(), "Rover1");
        assert_eq!((rover.x(), rover.y()), (1, 2));
        assert_eq!(rover.compass().direction(), Direction::North);

        let Outcome::Moved(status) = control.parse_line("Rover1 Instructions:LMLMLMLMM").unwrap()
        else {
            panic!("expected a status");
        };
        assert_eq!(status.name, "Rover1");
        assert_eq!((status.x, status.y), (1, 3));
        assert_eq!(status.direction, Direction::North);
    }

    #[test]
    fn failed_landing_is_not_registered() {
        let mut control = MissionControl::new();
        control.parse_line("Plateau:5 5").unwrap();
        assert!(matches!(
            control.parse_line("Rover1 Landing:6 6 N"),
            Err(MissionError::OutsideOfThePlateau {
                placement: Placement::Landing,
                x: 6,
                y: 6,
                ..
            })
        ));
        assert!(control.rover("Rover1").is_none());
    }

    #[test]
    fn oversized_landing_keeps_its_error_kind() {
        let line = "Rover1 Landing:99999999999999999999 0 N";
        let mut control = MissionControl::new();
        assert!(matches!(
            control.parse_line(line),
            Err(MissionError::PlateauIsUndefined)
        ));

        control.parse_line("Plateau:5 5").unwrap();
        assert!(matches!(
            control.parse_line(line),
            Err(MissionError::OutsideOfThePlateau {
                placement: Placement::Landing,
                x: i64::MAX,
                y: 0,
                ..
            })
        ));
        assert!(control.rover("Rover1").is_none());
    }

    #[test]
    fn oversized_plateau_saturates() {
        let mut control = MissionControl::new();
        assert_eq!(
            control.parse_line("Plateau:5000000000 5").unwrap(),
            Outcome::Plateau(Plateau::new(u32::MAX, 5))
        );
        let Outcome::Landed(rover) = control.parse_line("Rover1 Landing:4294967295 5 E").unwrap()
        else {
            panic!("expected a landing");
        };
        assert_eq!((rover.x(), rover.y()), (i64::from(u32::MAX), 5));
    }

    #[test]
    fn relanding_overwrites() {
        let mut control = MissionControl::new();
        control.parse_line("Plateau:5 5").unwrap();
        control.parse_line("Rover1 Landing:1 1 N").unwrap();
        control.parse_line("Rover1 Landing:4 4 S").unwrap();

        let rover = control.rover("Rover1").unwrap();
        assert_eq!((rover.x(), rover.y()), (4, 4));
        assert_eq!(rover.direction(), Direction::South);
        assert_eq!(control.rovers().count(), 1);
    }

    #[test]
    fn new_plateau_leaves_landed_rovers_alone() {
        let mut control = MissionControl::new();
        control.parse_line("Plateau:5 5").unwrap();
        control.parse_line("Rover1 Landing:5 5 N").unwrap();
        control.parse_line("Plateau:1 1").unwrap();

        assert_eq!(control.plateau(), Some(&Plateau::new(1, 1)));
        let rover = control.rover("Rover1").unwrap();
        assert_eq!(rover.plateau(), &Plateau::new(5, 5));

        // Rovers landed afterwards use the new bounds.
        assert!(control.parse_line("Rover2 Landing:2 2 N").is_err());
        assert!(control.parse_line("Rover2 Landing:1 1 N").is_ok());
    }

    #[test]
    fn failed_batch_keeps_partial_progress() {
        let mut control = MissionControl::new();
        control.parse_line("Plateau:2 2").unwrap();
        control.parse_line("Rover1 Landing:0 0 N").unwrap();
        assert!(matches!(
            control.parse_line("Rover1 Instructions:MMMRM"),
            Err(MissionError::OutsideOfThePlateau {
                placement: Placement::Destination,
                x: 0,
                y: 3,
                ..
            })
        ));
        let rover = control.rover("Rover1").unwrap();
        assert_eq!((rover.x(), rover.y()), (0, 2));
        assert_eq!(rover.direction(), Direction::North);
    }

    #[test]
    fn plateau_line_tolerates_whitespace() {
        let mut control = MissionControl::new();
        assert!(matches!(
            control.parse_line("  Plateau : 12    35   ").unwrap(),
            Outcome::Plateau(p) if p == Plateau::new(12, 35)
        ));
    }

    #[test]
    fn outcome_display() {
        let mut control = MissionControl::new();
        let plateau = control.parse_line("Plateau:5 5").unwrap();
        assert_eq!(plateau.to_string(), "Plateau 5 5");
        assert_eq!(plateau.status(), None);

        let landed = control.parse_line("Rover2 Landing:3 3 E").unwrap();
        assert_eq!(landed.to_string(), "Rover2 3 3 E");

        let moved = control.parse_line("Rover2 Instructions:MMRMMRMRRM").unwrap();
        assert_eq!(moved.to_string(), "Rover2 5 1 E");
    }
}
