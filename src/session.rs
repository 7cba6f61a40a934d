//! Line-by-line driver on top of [`MissionControl`].

use crate::control::{MissionControl, Outcome};
use crate::error::Result;
use log::warn;
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// Configuration for a session run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Stop at the first line that fails. Default: `false` (report and continue).
    pub halt_on_error: bool,
    /// Do not feed blank or whitespace-only lines to mission control. Default: `true`.
    pub skip_blank_lines: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            halt_on_error: false,
            skip_blank_lines: true,
        }
    }
}

/// The result of one processed input line.
#[derive(Debug)]
pub struct LineReport {
    /// 1-based line number in the input.
    pub line_number: usize,
    /// What mission control made of the line.
    pub result: Result<Outcome>,
}

/// Feeds lines to a [`MissionControl`] and collects the outcome of each.
#[derive(Debug, Default)]
pub struct Session {
    control: MissionControl,
    config: SessionConfig,
}

impl Session {
    /// Creates a session with a fresh [`MissionControl`].
    pub fn new(config: SessionConfig) -> Self {
        Self {
            control: MissionControl::new(),
            config,
        }
    }

    /// Mission state so far.
    pub fn control(&self) -> &MissionControl {
        &self.control
    }

    /// The configuration this session runs with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Processes every line of `input`.
    ///
    /// Returns one [`LineReport`] per line handed to mission control. With
    /// `halt_on_error` the last report is the failing one. Only an I/O failure
    /// while reading is returned as `Err`.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<Vec<LineReport>> {
        let mut reports = Vec::new();
        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            if self.config.skip_blank_lines && line.trim().is_empty() {
                continue;
            }

            let report = LineReport {
                line_number: idx + 1,
                result: self.control.parse_line(&line),
            };
            let failed = match &report.result {
                Ok(_) => false,
                Err(err) => {
                    warn!("line {}: {err}", report.line_number);
                    true
                }
            };
            reports.push(report);

            if failed && self.config.halt_on_error {
                break;
            }
        }
        Ok(reports)
    }

    /// Consumes the session, handing back the final mission state.
    pub fn into_control(self) -> MissionControl {
        self.control
    }
}
