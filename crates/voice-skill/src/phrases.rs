//! Locale-keyed phrase catalog for every spoken response

use crate::SkillError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Keys of every phrase the skill can speak
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKey {
    SkillName,
    Welcome,
    ClawNotPossible,
    ClawOpen,
    ClawValueNotPossible,
    MoveNotPossible,
    MoveValueNotPossible,
    HelpMessage,
    HelpReprompt,
    Ok,
    DoItDude,
    ErrorInvokingApi,
    StopMessage,
}

impl MessageKey {
    pub const ALL: [MessageKey; 13] = [
        MessageKey::SkillName,
        MessageKey::Welcome,
        MessageKey::ClawNotPossible,
        MessageKey::ClawOpen,
        MessageKey::ClawValueNotPossible,
        MessageKey::MoveNotPossible,
        MessageKey::MoveValueNotPossible,
        MessageKey::HelpMessage,
        MessageKey::HelpReprompt,
        MessageKey::Ok,
        MessageKey::DoItDude,
        MessageKey::ErrorInvokingApi,
        MessageKey::StopMessage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::SkillName => "SKILL_NAME",
            MessageKey::Welcome => "WELCOME",
            MessageKey::ClawNotPossible => "CLAW_NOT_POSSIBLE",
            MessageKey::ClawOpen => "CLAW_OPEN",
            MessageKey::ClawValueNotPossible => "CLAW_VALUE_NOT_POSSIBLE",
            MessageKey::MoveNotPossible => "MOVE_NOT_POSSIBLE",
            MessageKey::MoveValueNotPossible => "MOVE_VALUE_NOT_POSSIBLE",
            MessageKey::HelpMessage => "HELP_MESSAGE",
            MessageKey::HelpReprompt => "HELP_REPROMPT",
            MessageKey::Ok => "OK",
            MessageKey::DoItDude => "DO_IT_DUDE",
            MessageKey::ErrorInvokingApi => "ERROR_INVOKING_API",
            MessageKey::StopMessage => "STOP_MESSAGE",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

const EN: [(MessageKey, &str); 13] = [
    (MessageKey::SkillName, "Remote control"),
    (
        MessageKey::Welcome,
        "<say-as interpret-as=\"interjection\">moin.</say-as> Use language to control your world.",
    ),
    (
        MessageKey::ClawNotPossible,
        "Unfortunately, I did not understand what to do with the pliers.",
    ),
    (
        MessageKey::ClawOpen,
        "<say-as interpret-as=\"interjection\">open Sesame</say-as>",
    ),
    (
        MessageKey::ClawValueNotPossible,
        "The pliers can only be opened or closed.",
    ),
    (
        MessageKey::MoveNotPossible,
        "Unfortunately I did not understand how to move.",
    ),
    (
        MessageKey::MoveValueNotPossible,
        "The movement can only be forward or backward.",
    ),
    (
        MessageKey::HelpMessage,
        "You can say commands such as \"Open Forceps,\" \"Move Forward,\" or \"I'm thirsty.\"",
    ),
    (MessageKey::HelpReprompt, "It does not work? Do not give it!"),
    (
        MessageKey::Ok,
        "<say-as interpret-as=\"interjection\">voila.</say-as>",
    ),
    (
        MessageKey::DoItDude,
        "<prosody volume=\"x-loud\"><say-as interpret-as=\"interjection\">donnerwetter.</say-as></prosody> Off the wild ride. <say-as interpret-as=\"interjection\">juhu.</say-as>",
    ),
    (
        MessageKey::ErrorInvokingApi,
        "<say-as interpret-as=\"interjection\">damned.</say-as> Unfortunately I could not reach the API.",
    ),
    (
        MessageKey::StopMessage,
        "<say-as interpret-as=\"interjection\">stop.</say-as>",
    ),
];

/// Locale -> key -> text. Immutable once the dispatcher holds it.
#[derive(Debug, Clone)]
pub struct PhraseCatalog {
    locales: HashMap<String, HashMap<MessageKey, String>>,
    default_locale: String,
}

impl Default for PhraseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PhraseCatalog {
    /// The shipped catalog (English only)
    pub fn builtin() -> Self {
        let mut catalog = Self::empty("en");
        catalog.insert_locale(
            "en",
            EN.iter().map(|(key, text)| (*key, text.to_string())),
        );
        catalog
    }

    pub fn empty(default_locale: &str) -> Self {
        Self {
            locales: HashMap::new(),
            default_locale: default_locale.to_string(),
        }
    }

    pub fn insert_locale(
        &mut self,
        locale: &str,
        phrases: impl IntoIterator<Item = (MessageKey, String)>,
    ) {
        self.locales
            .insert(locale.to_string(), phrases.into_iter().collect());
    }

    pub fn with_default_locale(mut self, locale: &str) -> Self {
        self.default_locale = locale.to_string();
        self
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Supported locales, sorted
    pub fn locales(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        out.sort_unstable();
        out
    }

    /// Every locale must carry every key, and the default locale must exist.
    pub fn validate(&self) -> Result<(), SkillError> {
        if !self.locales.contains_key(&self.default_locale) {
            return Err(SkillError::UnknownLocale(self.default_locale.clone()));
        }
        for locale in self.locales() {
            let table = &self.locales[locale];
            if let Some(key) = MessageKey::ALL.iter().find(|k| !table.contains_key(*k)) {
                return Err(SkillError::MissingPhrase {
                    locale: locale.to_string(),
                    key: *key,
                });
            }
        }
        Ok(())
    }

    /// Pick the table for a host locale tag: exact match, then the language subtag
    /// (`en-US` -> `en`), then the default locale.
    pub fn resolve_locale<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        let Some(tag) = requested else {
            return &self.default_locale;
        };
        if self.locales.contains_key(tag) {
            return tag;
        }
        let language = tag.split(['-', '_']).next().unwrap_or(tag);
        if self.locales.contains_key(language) {
            return language;
        }
        tracing::debug!(locale = tag, fallback = %self.default_locale, "unsupported locale");
        &self.default_locale
    }

    pub fn lookup(&self, locale: Option<&str>, key: MessageKey) -> Result<&str, SkillError> {
        let resolved = self.resolve_locale(locale);
        let table = self
            .locales
            .get(resolved)
            .ok_or_else(|| SkillError::UnknownLocale(resolved.to_string()))?;
        table
            .get(&key)
            .map(String::as_str)
            .ok_or_else(|| SkillError::MissingPhrase {
                locale: resolved.to_string(),
                key,
            })
    }

    /// All phrases of a locale in key order
    pub fn entries(&self, locale: Option<&str>) -> Result<Vec<(MessageKey, &str)>, SkillError> {
        MessageKey::ALL
            .iter()
            .map(|key| self.lookup(locale, *key).map(|text| (*key, text)))
            .collect()
    }
}
