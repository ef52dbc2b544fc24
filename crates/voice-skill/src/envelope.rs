//! JSON envelopes exchanged with the voice host
//!
//! Only the fields the skill reads are modelled; everything else in the host's request is
//! ignored. Responses carry SSML speech because the phrase templates embed markup.

use crate::{Intent, IntentEvent, ResponseDirective, SkillError};
use serde::{Deserialize, Serialize};

pub const LAUNCH_REQUEST: &str = "LaunchRequest";
pub const INTENT_REQUEST: &str = "IntentRequest";

#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Option<Context>,
    pub request: RequestBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub application: Option<Application>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default)]
    pub system: Option<SystemState>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemState {
    #[serde(default)]
    pub application: Option<Application>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Application {
    #[serde(rename = "applicationId")]
    pub application_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub intent: Option<IntentEvent>,
}

impl RequestEnvelope {
    pub fn from_json(raw: &str) -> Result<Self, SkillError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Application id from the session, falling back to the device context
    pub fn application_id(&self) -> Option<&str> {
        let from_session = self
            .session
            .as_ref()
            .and_then(|s| s.application.as_ref());
        let from_context = || {
            self.context
                .as_ref()
                .and_then(|c| c.system.as_ref())
                .and_then(|s| s.application.as_ref())
        };
        from_session
            .or_else(from_context)
            .map(|a| a.application_id.as_str())
    }

    pub fn locale(&self) -> Option<&str> {
        self.request.locale.as_deref()
    }

    /// Launch requests open the session; intent requests carry the intent; any other request
    /// type is answered like an unknown intent.
    pub fn intent(&self) -> Intent {
        match (self.request.kind.as_str(), &self.request.intent) {
            (LAUNCH_REQUEST, _) => Intent::Launch,
            (INTENT_REQUEST, Some(event)) => Intent::from_event(event),
            (kind, _) => Intent::Unhandled {
                name: kind.to_string(),
            },
        }
    }

    /// With no expected id every request is accepted.
    pub fn verify_application(&self, expected: Option<&str>) -> Result<(), SkillError> {
        let Some(expected) = expected else {
            tracing::warn!("no application id configured, accepting request unchecked");
            return Ok(());
        };
        match self.application_id() {
            Some(actual) if actual == expected => Ok(()),
            actual => Err(SkillError::ApplicationIdMismatch {
                expected: expected.to_string(),
                actual: actual.map(str::to_string),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub ssml: String,
}

impl OutputSpeech {
    pub fn ssml(text: &str) -> Self {
        Self {
            kind: "SSML".to_string(),
            ssml: format!("<speak> {text} </speak>"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl From<&ResponseDirective> for ResponseEnvelope {
    fn from(directive: &ResponseDirective) -> Self {
        Self {
            version: "1.0".to_string(),
            response: ResponseBody {
                output_speech: OutputSpeech::ssml(&directive.text),
                reprompt: directive.reprompt.as_deref().map(|text| Reprompt {
                    output_speech: OutputSpeech::ssml(text),
                }),
                should_end_session: directive.mode.ends_session(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DirectiveMode;

    const CLAW_REQUEST: &str = r#"{
        "version": "1.0",
        "session": {
            "new": true,
            "sessionId": "amzn1.echo-api.session.1",
            "application": { "applicationId": "amzn1.ask.skill.arm" }
        },
        "context": {
            "System": { "application": { "applicationId": "amzn1.ask.skill.arm" } }
        },
        "request": {
            "type": "IntentRequest",
            "requestId": "amzn1.echo-api.request.1",
            "locale": "en-US",
            "timestamp": "2026-10-16T10:00:00Z",
            "intent": {
                "name": "ClawIntent",
                "confirmationStatus": "NONE",
                "slots": { "ClawOperation": { "name": "ClawOperation", "value": "open" } }
            }
        }
    }"#;

    #[test]
    fn test_parse_intent_request() {
        let envelope = RequestEnvelope::from_json(CLAW_REQUEST).unwrap();
        assert_eq!(envelope.application_id(), Some("amzn1.ask.skill.arm"));
        assert_eq!(envelope.locale(), Some("en-US"));
        assert_eq!(
            envelope.intent(),
            Intent::Claw {
                operation: Some("open".to_string())
            }
        );
    }

    #[test]
    fn test_request_types() {
        let launch = r#"{ "request": { "type": "LaunchRequest" } }"#;
        assert_eq!(RequestEnvelope::from_json(launch).unwrap().intent(), Intent::Launch);

        let ended = r#"{ "request": { "type": "SessionEndedRequest", "reason": "USER_INITIATED" } }"#;
        assert_eq!(
            RequestEnvelope::from_json(ended).unwrap().intent(),
            Intent::Unhandled {
                name: "SessionEndedRequest".to_string()
            }
        );

        let no_intent = r#"{ "request": { "type": "IntentRequest" } }"#;
        assert!(matches!(
            RequestEnvelope::from_json(no_intent).unwrap().intent(),
            Intent::Unhandled { .. }
        ));
    }

    #[test]
    fn test_application_id_from_context() {
        let raw = r#"{
            "context": { "System": { "application": { "applicationId": "ctx-app" } } },
            "request": { "type": "LaunchRequest" }
        }"#;
        let envelope = RequestEnvelope::from_json(raw).unwrap();
        assert_eq!(envelope.application_id(), Some("ctx-app"));
        envelope.verify_application(Some("ctx-app")).unwrap();
    }

    #[test]
    fn test_verify_application() {
        let envelope = RequestEnvelope::from_json(CLAW_REQUEST).unwrap();
        envelope.verify_application(None).unwrap();
        envelope
            .verify_application(Some("amzn1.ask.skill.arm"))
            .unwrap();
        assert!(matches!(
            envelope.verify_application(Some("amzn1.ask.skill.other")),
            Err(SkillError::ApplicationIdMismatch { .. })
        ));

        let anonymous =
            RequestEnvelope::from_json(r#"{ "request": { "type": "LaunchRequest" } }"#).unwrap();
        assert!(matches!(
            anonymous.verify_application(Some("amzn1.ask.skill.arm")),
            Err(SkillError::ApplicationIdMismatch { actual: None, .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            RequestEnvelope::from_json("{ \"request\": 42 }"),
            Err(SkillError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn test_response_envelope_shape() {
        let ask = ResponseDirective {
            mode: DirectiveMode::Ask,
            text: "Need help?".to_string(),
            reprompt: Some("Still there?".to_string()),
        };
        let json = serde_json::to_value(ResponseEnvelope::from(&ask)).unwrap();
        assert_eq!(json["version"], "1.0");
        assert_eq!(json["response"]["outputSpeech"]["type"], "SSML");
        assert_eq!(
            json["response"]["outputSpeech"]["ssml"],
            "<speak> Need help? </speak>"
        );
        assert_eq!(
            json["response"]["reprompt"]["outputSpeech"]["ssml"],
            "<speak> Still there? </speak>"
        );
        assert_eq!(json["response"]["shouldEndSession"], false);

        let tell = ResponseDirective {
            mode: DirectiveMode::Tell,
            text: "Bye".to_string(),
            reprompt: None,
        };
        let json = serde_json::to_value(ResponseEnvelope::from(&tell)).unwrap();
        assert_eq!(json["response"]["shouldEndSession"], true);
        assert!(json["response"].get("reprompt").is_none());
    }
}
