//! Slot value to remote command mapping

use device_api::RemoteCommand;
use std::fmt;
use thiserror::Error;

/// Operation families the skill controls. Each has its own closed vocabulary.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Domain {
    Claw,
    Move,
}

const CLAW_OPERATIONS: &[(&str, RemoteCommand)] = &[
    ("close", RemoteCommand::ClawClose),
    ("open", RemoteCommand::ClawOpen),
];

const MOVE_OPERATIONS: &[(&str, RemoteCommand)] = &[
    ("forward", RemoteCommand::MoveForward),
    ("backward", RemoteCommand::MoveBackward),
];

impl Domain {
    pub fn name(&self) -> &'static str {
        match self {
            Domain::Claw => "claw",
            Domain::Move => "move",
        }
    }

    /// Slot carrying the operation for this domain
    pub fn slot_name(&self) -> &'static str {
        match self {
            Domain::Claw => "ClawOperation",
            Domain::Move => "MoveOperation",
        }
    }

    fn vocabulary(&self) -> &'static [(&'static str, RemoteCommand)] {
        match self {
            Domain::Claw => CLAW_OPERATIONS,
            Domain::Move => MOVE_OPERATIONS,
        }
    }

    pub fn accepted_values(&self) -> impl Iterator<Item = &'static str> {
        self.vocabulary().iter().map(|(raw, _)| *raw)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("{domain} operation not recognized: {value:?}")]
    NotRecognized { domain: Domain, value: String },
}

/// Exact, case-sensitive lookup of a raw slot value. The host's value is used as delivered.
pub fn translate(domain: Domain, raw: &str) -> Result<RemoteCommand, CommandError> {
    domain
        .vocabulary()
        .iter()
        .find(|(value, _)| *value == raw)
        .map(|(_, command)| *command)
        .ok_or_else(|| CommandError::NotRecognized {
            domain,
            value: raw.to_string(),
        })
}
