//! Intent dispatch: slot validation, remote call, phrase selection

use crate::commands::{translate, Domain};
use crate::{Intent, MessageKey, PhraseCatalog, Reply, ResponseDirective};
use crate::{SkillError, SkillMetrics};
use device_api::{CommandExecutor, RemoteCommand, RemoteOutcome};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Routes intents to their handlers. Holds no per-request state, so one instance can serve
/// concurrent requests.
pub struct IntentDispatcher {
    catalog: PhraseCatalog,
    executor: Arc<dyn CommandExecutor>,
    metrics: Option<SkillMetrics>,
}

impl IntentDispatcher {
    /// Fails if the catalog is missing a phrase for any supported locale.
    pub fn new(
        catalog: PhraseCatalog,
        executor: Arc<dyn CommandExecutor>,
    ) -> Result<Self, SkillError> {
        catalog.validate()?;
        Ok(Self {
            catalog,
            executor,
            metrics: None,
        })
    }

    pub fn with_metrics(mut self, metrics: SkillMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn catalog(&self) -> &PhraseCatalog {
        &self.catalog
    }

    /// Decide and render the response for one intent.
    pub async fn handle(
        &self,
        locale: Option<&str>,
        intent: &Intent,
    ) -> Result<ResponseDirective, SkillError> {
        let reply = self.decide(intent).await;
        self.render(locale, reply)
    }

    /// Pick the reply for an intent. Every branch yields exactly one reply.
    pub async fn decide(&self, intent: &Intent) -> Reply {
        if let Some(m) = &self.metrics {
            m.intents.inc();
        }
        let reply = match intent {
            Intent::Launch => Reply::ask(MessageKey::Welcome),
            Intent::Claw { operation } => self.operate(Domain::Claw, operation.as_deref()).await,
            Intent::Move { operation } => self.operate(Domain::Move, operation.as_deref()).await,
            Intent::StopMotion => {
                self.invoke(RemoteCommand::MoveStop, Reply::ask(MessageKey::Ok))
                    .await
            }
            Intent::DoItDude => {
                self.invoke(RemoteCommand::DoItDude, Reply::tell(MessageKey::DoItDude))
                    .await
            }
            Intent::Help | Intent::Unhandled { .. } => {
                Reply::ask_with_reprompt(MessageKey::HelpMessage, MessageKey::HelpReprompt)
            }
            Intent::Cancel | Intent::Stop => Reply::tell(MessageKey::StopMessage),
        };
        info!(
            intent = intent.name(),
            speech = %reply.speech,
            mode = ?reply.mode,
            "intent handled"
        );
        reply
    }

    pub fn render(
        &self,
        locale: Option<&str>,
        reply: Reply,
    ) -> Result<ResponseDirective, SkillError> {
        let text = self.catalog.lookup(locale, reply.speech)?.to_string();
        let reprompt = match reply.reprompt {
            Some(key) => Some(self.catalog.lookup(locale, key)?.to_string()),
            None => None,
        };
        Ok(ResponseDirective {
            mode: reply.mode,
            text,
            reprompt,
        })
    }

    /// Slot presence, then vocabulary, then the remote call.
    async fn operate(&self, domain: Domain, value: Option<&str>) -> Reply {
        let (missing, unrecognized) = match domain {
            Domain::Claw => (
                MessageKey::ClawNotPossible,
                MessageKey::ClawValueNotPossible,
            ),
            Domain::Move => (
                MessageKey::MoveNotPossible,
                MessageKey::MoveValueNotPossible,
            ),
        };

        let Some(value) = value else {
            debug!(%domain, slot = domain.slot_name(), "slot value missing");
            self.count_rejection();
            return Reply::ask(missing);
        };

        let command = match translate(domain, value) {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "slot value rejected");
                self.count_rejection();
                return Reply::ask(unrecognized);
            }
        };

        let on_success = if command == RemoteCommand::ClawOpen {
            Reply::ask(MessageKey::ClawOpen)
        } else {
            Reply::ask(MessageKey::Ok)
        };
        self.invoke(command, on_success).await
    }

    /// A failed call ends the session; the device state is unknown afterwards.
    async fn invoke(&self, command: RemoteCommand, on_success: Reply) -> Reply {
        if let Some(m) = &self.metrics {
            m.remote_calls.inc();
        }
        match self.executor.execute(command).await {
            RemoteOutcome::Success => on_success,
            RemoteOutcome::Failure => {
                warn!(%command, "remote command failed");
                if let Some(m) = &self.metrics {
                    m.remote_failures.inc();
                }
                Reply::tell(MessageKey::ErrorInvokingApi)
            }
        }
    }

    fn count_rejection(&self) {
        if let Some(m) = &self.metrics {
            m.rejected_parameters.inc();
        }
    }
}
