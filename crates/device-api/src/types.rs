use crate::ApiError;
use core::fmt;

/// A command the remote device API understands. Each maps to exactly one request path.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RemoteCommand {
    ClawOpen,
    ClawClose,
    MoveForward,
    MoveBackward,
    MoveStop,
    DoItDude,
}

impl RemoteCommand {
    pub const ALL: [RemoteCommand; 6] = [
        RemoteCommand::ClawOpen,
        RemoteCommand::ClawClose,
        RemoteCommand::MoveForward,
        RemoteCommand::MoveBackward,
        RemoteCommand::MoveStop,
        RemoteCommand::DoItDude,
    ];

    /// Path relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            RemoteCommand::ClawOpen => "claw/open",
            RemoteCommand::ClawClose => "claw/close",
            RemoteCommand::MoveForward => "move/forward",
            RemoteCommand::MoveBackward => "move/backward",
            RemoteCommand::MoveStop => "move/stop",
            RemoteCommand::DoItDude => "doitdude",
        }
    }
}

impl fmt::Display for RemoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Result of a remote call as far as the voice response is concerned
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RemoteOutcome {
    Success,
    Failure,
}

impl RemoteOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RemoteOutcome::Success)
    }
}

/// Only an exact 200 is a success. Other 2xx codes and redirects left unresolved are failures.
pub fn classify_status(status: u16) -> RemoteOutcome {
    if status == 200 {
        RemoteOutcome::Success
    } else {
        RemoteOutcome::Failure
    }
}

/// Transport errors never reach a status code and always count as failures.
pub fn classify_response(result: &Result<u16, ApiError>) -> RemoteOutcome {
    match result {
        Ok(status) => classify_status(*status),
        Err(_) => RemoteOutcome::Failure,
    }
}
