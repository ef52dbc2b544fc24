//! Intent events delivered by the voice host

use crate::Domain;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const CLAW_INTENT: &str = "ClawIntent";
pub const MOVE_INTENT: &str = "MoveIntent";
pub const STOP_MOTION_INTENT: &str = "StopIntent";
pub const DO_IT_DUDE_INTENT: &str = "DoItDudeIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";

/// A named parameter the host extracted from the utterance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Intent name plus slots, as produced by the host for one utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentEvent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl IntentEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: HashMap::new(),
        }
    }

    pub fn with_slot(mut self, slot: &str, value: impl Into<String>) -> Self {
        self.slots.insert(
            slot.to_string(),
            Slot {
                value: Some(value.into()),
            },
        );
        self
    }

    /// Value of a slot. A missing slot, a slot without value and an empty value are all absent.
    pub fn slot_value(&self, slot: &str) -> Option<&str> {
        self.slots
            .get(slot)
            .and_then(|s| s.value.as_deref())
            .filter(|v| !v.is_empty())
    }
}

/// Everything the dispatcher knows how to answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Session opened without a command
    Launch,
    Claw { operation: Option<String> },
    Move { operation: Option<String> },
    /// Halt the drive (`StopIntent`)
    StopMotion,
    DoItDude,
    Help,
    Cancel,
    /// End the conversation (`AMAZON.StopIntent`)
    Stop,
    Unhandled { name: String },
}

impl Intent {
    pub fn from_event(event: &IntentEvent) -> Self {
        let operation = |slot: &str| event.slot_value(slot).map(str::to_string);
        match event.name.as_str() {
            CLAW_INTENT => Intent::Claw {
                operation: operation(Domain::Claw.slot_name()),
            },
            MOVE_INTENT => Intent::Move {
                operation: operation(Domain::Move.slot_name()),
            },
            STOP_MOTION_INTENT => Intent::StopMotion,
            DO_IT_DUDE_INTENT => Intent::DoItDude,
            HELP_INTENT => Intent::Help,
            CANCEL_INTENT => Intent::Cancel,
            STOP_INTENT => Intent::Stop,
            other => Intent::Unhandled {
                name: other.to_string(),
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Intent::Launch => "LaunchRequest",
            Intent::Claw { .. } => CLAW_INTENT,
            Intent::Move { .. } => MOVE_INTENT,
            Intent::StopMotion => STOP_MOTION_INTENT,
            Intent::DoItDude => DO_IT_DUDE_INTENT,
            Intent::Help => HELP_INTENT,
            Intent::Cancel => CANCEL_INTENT,
            Intent::Stop => STOP_INTENT,
            Intent::Unhandled { name } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_event() {
        let event = IntentEvent::new(CLAW_INTENT).with_slot("ClawOperation", "open");
        assert_eq!(
            Intent::from_event(&event),
            Intent::Claw {
                operation: Some("open".to_string())
            }
        );
        assert_eq!(
            Intent::from_event(&IntentEvent::new(STOP_MOTION_INTENT)),
            Intent::StopMotion
        );
        assert_eq!(Intent::from_event(&IntentEvent::new(STOP_INTENT)), Intent::Stop);
        assert_eq!(
            Intent::from_event(&IntentEvent::new("AMAZON.FallbackIntent")),
            Intent::Unhandled {
                name: "AMAZON.FallbackIntent".to_string()
            }
        );
    }

    #[test]
    fn test_absent_slot_values() {
        let json = r#"{
            "name": "MoveIntent",
            "confirmationStatus": "NONE",
            "slots": { "MoveOperation": { "name": "MoveOperation", "value": "" } }
        }"#;
        let event: IntentEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.slot_value("MoveOperation"), None);
        assert_eq!(Intent::from_event(&event), Intent::Move { operation: None });

        let json = r#"{ "name": "ClawIntent", "slots": { "ClawOperation": { "name": "ClawOperation" } } }"#;
        let event: IntentEvent = serde_json::from_str(json).unwrap();
        assert_eq!(Intent::from_event(&event), Intent::Claw { operation: None });

        let event: IntentEvent = serde_json::from_str(r#"{ "name": "ClawIntent" }"#).unwrap();
        assert_eq!(Intent::from_event(&event), Intent::Claw { operation: None });
    }

    #[test]
    fn test_slot_from_other_intent_ignored() {
        let event = IntentEvent::new(MOVE_INTENT).with_slot("ClawOperation", "open");
        assert_eq!(Intent::from_event(&event), Intent::Move { operation: None });
    }

    #[test]
    fn test_names_round_trip() {
        for name in [
            CLAW_INTENT,
            MOVE_INTENT,
            STOP_MOTION_INTENT,
            DO_IT_DUDE_INTENT,
            HELP_INTENT,
            CANCEL_INTENT,
            STOP_INTENT,
            "Whatever",
        ] {
            assert_eq!(Intent::from_event(&IntentEvent::new(name)).name(), name);
        }
    }
}
