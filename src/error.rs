//! Error types for mission control.

use thiserror::Error;

/// Which check rejected a rover position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The coordinates given on a landing line.
    Landing,
    /// The cell a move would step onto.
    Destination,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Landing => write!(f, "landing coordinates"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

impl Placement {
    fn verb(self) -> &'static str {
        match self {
            Self::Landing => "are",
            Self::Destination => "is",
        }
    }
}

/// Every way a line can fail to apply.
///
/// All variants are terminal for the line being processed; nothing is retried.
#[derive(Error, Debug)]
pub enum MissionError {
    /// A direction symbol other than `N`, `E`, `S`, `W`.
    #[error("{0} is not in the range N, E, S, W")]
    UnknownDirection(String),

    /// A landing or move target outside the plateau bounds.
    #[error(
        "Expected rover's {placement} ({x},{y}) {} out of plateau's range ({width},{length})",
        .placement.verb()
    )]
    OutsideOfThePlateau {
        /// Whether a landing or a move was rejected.
        placement: Placement,
        /// Rejected x coordinate.
        x: i64,
        /// Rejected y coordinate.
        y: i64,
        /// Plateau width at the time.
        width: u32,
        /// Plateau length at the time.
        length: u32,
    },

    /// A landing line arrived before any plateau line.
    #[error("Plateau must be defined before landing")]
    PlateauIsUndefined,

    /// Instructions for a rover name that never landed.
    #[error("Rover \"{0}\" must be landed before accepting any instructions")]
    RoverIsUndefined(String),

    /// The line matches none of the grammars.
    #[error("Unable to parse - \"{0}\"")]
    ParseError(String),

    /// Only produced by strict instruction parsing.
    #[error("{0:?} is not one of the instructions M, L, R")]
    UnknownInstruction(char),

    /// Reading the input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MissionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = MissionError::OutsideOfThePlateau {
            placement: Placement::Landing,
            x: 6,
            y: 6,
            width: 5,
            length: 5,
        };
        assert_eq!(
            err.to_string(),
            "Expected rover's landing coordinates (6,6) are out of plateau's range (5,5)"
        );

        let err = MissionError::OutsideOfThePlateau {
            placement: Placement::Destination,
            x: 0,
            y: -1,
            width: 0,
            length: 0,
        };
        assert_eq!(
            err.to_string(),
            "Expected rover's destination (0,-1) is out of plateau's range (0,0)"
        );

        let err = MissionError::RoverIsUndefined("Rover1".into());
        assert_eq!(
            err.to_string(),
            "Rover \"Rover1\" must be landed before accepting any instructions"
        );

        let err = MissionError::ParseError("garbage".into());
        assert_eq!(err.to_string(), "Unable to parse - \"garbage\"");
    }
}
