//! Voice-platform request and response envelope models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Opaque per-session data round-tripped by the platform.
pub type SessionAttributes = Map<String, Value>;

/// Incoming skill event.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillEvent {
    pub session: Session,
    pub request: SkillRequest,
}

/// Session information attached to every event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// True on the first event of a conversation
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: String,
    pub application: Application,
    #[serde(default)]
    pub attributes: Option<SessionAttributes>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

/// The request half of a skill event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequest {
    #[serde(rename = "type", default)]
    pub request_type: RequestType,
    #[serde(default)]
    pub request_id: String,
    /// Present on `IntentRequest`
    #[serde(default)]
    pub intent: Option<Intent>,
    /// Present on `SessionEndedRequest`
    #[serde(default)]
    pub reason: Option<String>,
}

/// Request types the router knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum RequestType {
    LaunchRequest,
    IntentRequest,
    SessionEndedRequest,
    #[default]
    #[serde(other)]
    Unsupported,
}

/// A user intent with its slot values.
#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: Option<HashMap<String, Slot>>,
}

impl Intent {
    /// Value of the named slot, if present and not blank.
    pub fn slot_value(&self, slot: &str) -> Option<&str> {
        self.slots
            .as_ref()?
            .get(slot)?
            .value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// Top-level response returned to the platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub version: String,
    pub session_attributes: SessionAttributes,
    pub response: SpeechletResponse,
}

/// Speech, card and session-continuation state for one turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    pub output_speech: OutputSpeech,
    pub card: Card,
    pub reprompt: Reprompt,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    /// `None` serializes as `null`, which the platform reads as "no speech"
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub card_type: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_intent_event() {
        let event: SkillEvent = serde_json::from_value(json!({
            "version": "1.0",
            "session": {
                "new": true,
                "sessionId": "amzn1.echo-api.session.1",
                "application": { "applicationId": "amzn1.ask.skill.1" },
                "attributes": {}
            },
            "request": {
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.1",
                "intent": {
                    "name": "FindFood",
                    "slots": { "food": { "name": "food", "value": "samosa" } }
                }
            }
        }))
        .unwrap();

        assert!(event.session.new);
        assert_eq!(event.session.application.application_id, "amzn1.ask.skill.1");
        assert_eq!(event.request.request_type, RequestType::IntentRequest);
        let intent = event.request.intent.unwrap();
        assert_eq!(intent.name, "FindFood");
        assert_eq!(intent.slot_value("food"), Some("samosa"));
    }

    #[test]
    fn test_unknown_and_missing_request_type() {
        let request: SkillRequest = serde_json::from_value(json!({
            "type": "Display.ElementSelected",
            "requestId": "r-1"
        }))
        .unwrap();
        assert_eq!(request.request_type, RequestType::Unsupported);

        let request: SkillRequest = serde_json::from_value(json!({ "requestId": "r-2" })).unwrap();
        assert_eq!(request.request_type, RequestType::Unsupported);
    }

    #[test]
    fn test_blank_slot_values_are_absent() {
        let intent: Intent = serde_json::from_value(json!({
            "name": "FindFood",
            "slots": { "food": { "name": "food", "value": "   " } }
        }))
        .unwrap();
        assert_eq!(intent.slot_value("food"), None);

        let intent: Intent = serde_json::from_value(json!({
            "name": "FindFood",
            "slots": { "food": { "name": "food" } }
        }))
        .unwrap();
        assert_eq!(intent.slot_value("food"), None);

        let intent: Intent = serde_json::from_value(json!({ "name": "FindFood" })).unwrap();
        assert_eq!(intent.slot_value("food"), None);
    }

    #[test]
    fn test_missing_application_is_rejected() {
        let result = serde_json::from_value::<SkillEvent>(json!({
            "session": { "new": false },
            "request": { "type": "LaunchRequest" }
        }));
        assert!(result.is_err());
    }
}
