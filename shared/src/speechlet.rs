//! Builders for the platform response envelope.

use tracing::debug;

use crate::models::{
    Card, OutputSpeech, Reprompt, SessionAttributes, SkillResponse, SpeechletResponse,
};

/// Envelope version expected by the platform.
pub const RESPONSE_VERSION: &str = "1.0";

const PLAIN_TEXT: &str = "PlainText";
const SIMPLE_CARD: &str = "Simple";

/// Build the speech, card and reprompt for one turn.
///
/// A `None` reprompt is kept as a `null` reprompt text, which tells the
/// platform not to reprompt the user.
pub fn build_speechlet_response(
    title: &str,
    card_body: &str,
    speech_text: &str,
    reprompt_text: Option<&str>,
    should_end_session: bool,
) -> SpeechletResponse {
    debug!(title, should_end_session, "Building speechlet response");

    SpeechletResponse {
        output_speech: OutputSpeech {
            speech_type: PLAIN_TEXT.to_string(),
            text: Some(speech_text.to_string()),
        },
        card: Card {
            card_type: SIMPLE_CARD.to_string(),
            title: title.to_string(),
            content: card_body.to_string(),
        },
        reprompt: Reprompt {
            output_speech: OutputSpeech {
                speech_type: PLAIN_TEXT.to_string(),
                text: reprompt_text.map(String::from),
            },
        },
        should_end_session,
    }
}

/// Wrap a speechlet response in the versioned top-level envelope.
pub fn build_response(
    session_attributes: SessionAttributes,
    speechlet_response: SpeechletResponse,
) -> SkillResponse {
    SkillResponse {
        version: RESPONSE_VERSION.to_string(),
        session_attributes,
        response: speechlet_response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shape() {
        let speechlet = build_speechlet_response(
            "Welcome",
            "Card body",
            "Spoken text",
            Some("Anything else?"),
            false,
        );
        let response = build_response(SessionAttributes::new(), speechlet);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "version": "1.0",
                "sessionAttributes": {},
                "response": {
                    "outputSpeech": { "type": "PlainText", "text": "Spoken text" },
                    "card": { "type": "Simple", "title": "Welcome", "content": "Card body" },
                    "reprompt": {
                        "outputSpeech": { "type": "PlainText", "text": "Anything else?" }
                    },
                    "shouldEndSession": false
                }
            })
        );
    }

    #[test]
    fn test_null_reprompt_passes_through() {
        let speechlet = build_speechlet_response("Bye", "Bye", "Bye", None, true);
        let value = serde_json::to_value(&speechlet).unwrap();

        assert!(value["reprompt"]["outputSpeech"]["text"].is_null());
        assert_eq!(value["shouldEndSession"], json!(true));
    }

    #[test]
    fn test_builders_are_pure() {
        let build = || {
            build_response(
                SessionAttributes::new(),
                build_speechlet_response("Title", "Body", "Speech", None, true),
            )
        };
        assert_eq!(build(), build());
        assert_eq!(
            serde_json::to_string(&build()).unwrap(),
            serde_json::to_string(&build()).unwrap()
        );
    }

    #[test]
    fn test_session_attributes_are_kept() {
        let mut attributes = SessionAttributes::new();
        attributes.insert("lastFood".to_string(), json!("samosa"));

        let response = build_response(
            attributes.clone(),
            build_speechlet_response("Title", "Body", "Speech", None, false),
        );
        assert_eq!(response.session_attributes, attributes);
    }
}
