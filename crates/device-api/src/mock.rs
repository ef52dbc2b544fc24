use crate::{ApiError, CommandExecutor, RemoteCommand, Result};
use async_trait::async_trait;
use std::sync::Mutex;
use time::OffsetDateTime;

/// A call the mock executor received
#[derive(Clone, Debug)]
pub struct CallRecord {
    pub command: RemoteCommand,
    pub at: OffsetDateTime,
}

/// In-process executor that answers every command with a fixed status and records calls.
pub struct MockExecutor {
    status: Option<u16>,
    calls: Mutex<Vec<CallRecord>>,
}

impl MockExecutor {
    /// Answer every call with `status`
    pub fn with_status(status: u16) -> Self {
        Self {
            status: Some(status),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::with_status(200)
    }

    pub fn failing() -> Self {
        Self::with_status(500)
    }

    /// Fail every call at the transport level
    pub fn unreachable() -> Self {
        Self {
            status: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<CallRecord> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn commands(&self) -> Vec<RemoteCommand> {
        self.calls().into_iter().map(|c| c.command).collect()
    }
}

#[async_trait]
impl CommandExecutor for MockExecutor {
    async fn call(&self, command: RemoteCommand) -> Result<u16> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(CallRecord {
                command,
                at: OffsetDateTime::now_utc(),
            });
        }
        self.status.ok_or(ApiError::Transport {
            path: command.path(),
            reason: "mock executor is unreachable".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RemoteOutcome;

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let exec = MockExecutor::succeeding();
        assert_eq!(exec.execute(RemoteCommand::ClawOpen).await, RemoteOutcome::Success);
        assert_eq!(exec.execute(RemoteCommand::MoveStop).await, RemoteOutcome::Success);
        assert_eq!(
            exec.commands(),
            vec![RemoteCommand::ClawOpen, RemoteCommand::MoveStop]
        );
        let calls = exec.calls();
        assert!(calls[0].at <= calls[1].at);
    }

    #[tokio::test]
    async fn test_failure_modes() {
        assert_eq!(
            MockExecutor::failing().execute(RemoteCommand::DoItDude).await,
            RemoteOutcome::Failure
        );
        assert_eq!(
            MockExecutor::with_status(404).execute(RemoteCommand::DoItDude).await,
            RemoteOutcome::Failure
        );

        let exec = MockExecutor::unreachable();
        assert!(exec.call(RemoteCommand::MoveForward).await.is_err());
        assert_eq!(exec.commands(), vec![RemoteCommand::MoveForward]);
    }
}
