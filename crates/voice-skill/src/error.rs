use crate::MessageKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("no phrase {key} for locale {locale}")]
    MissingPhrase { locale: String, key: MessageKey },
    #[error("phrase catalog has no locale {0}")]
    UnknownLocale(String),
    #[error("application id mismatch: expected {expected}, got {actual:?}")]
    ApplicationIdMismatch {
        expected: String,
        actual: Option<String>,
    },
    #[error("malformed request envelope: {0}")]
    MalformedEnvelope(#[from] serde_json::Error),
    #[error(transparent)]
    Api(#[from] device_api::ApiError),
}
