//! # plateau-rover
//!
//! Simulates rovers landing on and driving across a bounded rectangular
//! plateau, controlled by a stream of text lines:
//!
//! ```text
//! Plateau:5 5
//! Rover1 Landing:1 2 N
//! Rover1 Instructions:LMLMLMLMM
//! ```
//!
//! [`MissionControl`] classifies and applies each line, returning an
//! [`Outcome`] or a [`MissionError`]. [`Session`] is a thin driver that feeds
//! it a whole input and collects per-line reports.

pub mod command;
pub mod compass;
pub mod control;
pub mod error;
pub mod plateau;
pub mod rover;
pub mod session;

pub use command::*;
pub use compass::*;
pub use control::*;
pub use error::*;
pub use plateau::*;
pub use rover::*;
pub use session::*;
