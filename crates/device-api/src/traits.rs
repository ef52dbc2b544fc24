use crate::{classify_response, RemoteCommand, RemoteOutcome, Result};
use async_trait::async_trait;

/// Something that can deliver a command to the remote device API.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Issue the request for `command` and return the raw HTTP status.
    async fn call(&self, command: RemoteCommand) -> Result<u16>;

    /// Issue the request once and classify it. No retries.
    async fn execute(&self, command: RemoteCommand) -> RemoteOutcome {
        let result = self.call(command).await;
        match &result {
            Ok(status) => tracing::debug!(%command, status, "remote api responded"),
            Err(e) => tracing::warn!(%command, error = %e, "remote api unreachable"),
        }
        classify_response(&result)
    }
}
