//! Host-facing entry point: envelope in, envelope out

use crate::{
    IntentDispatcher, RequestEnvelope, ResponseDirective, ResponseEnvelope, SkillConfig,
    SkillError,
};

/// Dispatcher plus the host-level checks configured for this deployment
pub struct RemoteControlSkill {
    config: SkillConfig,
    dispatcher: IntentDispatcher,
}

impl RemoteControlSkill {
    pub fn new(config: SkillConfig, dispatcher: IntentDispatcher) -> Self {
        Self { config, dispatcher }
    }

    pub fn config(&self) -> &SkillConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &IntentDispatcher {
        &self.dispatcher
    }

    /// Verify the application id, then dispatch. A rejected request never reaches a handler.
    pub async fn handle_envelope(
        &self,
        envelope: &RequestEnvelope,
    ) -> Result<ResponseDirective, SkillError> {
        envelope.verify_application(self.config.app_id())?;
        let intent = envelope.intent();
        tracing::debug!(
            request_id = envelope.request.request_id.as_deref().unwrap_or("-"),
            locale = envelope.locale().unwrap_or("-"),
            intent = intent.name(),
            "request accepted"
        );
        self.dispatcher.handle(envelope.locale(), &intent).await
    }

    /// Raw JSON request to serialized JSON response
    pub async fn handle_json(&self, raw: &str) -> Result<String, SkillError> {
        let envelope = RequestEnvelope::from_json(raw)?;
        let directive = self.handle_envelope(&envelope).await?;
        Ok(serde_json::to_string(&ResponseEnvelope::from(&directive))?)
    }
}
