use crate::MessageKey;
use serde::{Deserialize, Serialize};

/// Whether the host keeps listening after speaking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveMode {
    /// Speak and keep the session open
    Ask,
    /// Speak and close the session
    Tell,
}

impl DirectiveMode {
    pub fn ends_session(&self) -> bool {
        matches!(self, DirectiveMode::Tell)
    }
}

/// The phrase selection a handler made, before locale rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reply {
    pub mode: DirectiveMode,
    pub speech: MessageKey,
    pub reprompt: Option<MessageKey>,
}

impl Reply {
    pub fn ask(speech: MessageKey) -> Self {
        Self {
            mode: DirectiveMode::Ask,
            speech,
            reprompt: None,
        }
    }

    pub fn ask_with_reprompt(speech: MessageKey, reprompt: MessageKey) -> Self {
        Self {
            mode: DirectiveMode::Ask,
            speech,
            reprompt: Some(reprompt),
        }
    }

    pub fn tell(speech: MessageKey) -> Self {
        Self {
            mode: DirectiveMode::Tell,
            speech,
            reprompt: None,
        }
    }

    pub fn ends_session(&self) -> bool {
        self.mode.ends_session()
    }
}

/// Rendered response handed back to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDirective {
    pub mode: DirectiveMode,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<String>,
}
