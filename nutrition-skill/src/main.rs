//! Indian Food Skill Lambda - Answers nutrition questions over Alexa.
//!
//! Routes launch, intent and session-ended events. The food intents make a
//! single call to the nutrition facts service and speak the result.

mod intents;
mod router;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use shared::{Config, SkillEvent, SkillResponse};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::router::Skill;

async fn handler(
    skill: Arc<Skill>,
    event: LambdaEvent<SkillEvent>,
) -> Result<Option<SkillResponse>, Error> {
    let (payload, context) = event.into_parts();

    match skill.route(payload).await {
        Ok(response) => Ok(response),
        Err(e) => {
            error!("Request {} failed: {}", context.request_id, e);
            Err(e.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;
    info!(
        "Using food service at {} (timeout {:?})",
        config.food_api_base_url, config.food_api_timeout
    );

    let skill = Arc::new(Skill::from_config(&config)?);

    run(service_fn(move |event| {
        let skill = Arc::clone(&skill);
        async move { handler(skill, event).await }
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    fn lambda_event(request: serde_json::Value) -> LambdaEvent<SkillEvent> {
        let payload = serde_json::from_value(json!({
            "session": {
                "new": false,
                "sessionId": "amzn1.echo-api.session.1",
                "application": { "applicationId": "amzn1.ask.skill.indian-food" }
            },
            "request": request
        }))
        .unwrap();
        LambdaEvent::new(payload, Context::default())
    }

    #[tokio::test]
    async fn test_handler_returns_welcome_on_launch() {
        let skill = Arc::new(Skill::from_config(&Config::default()).unwrap());
        let response = handler(
            skill,
            lambda_event(json!({ "type": "LaunchRequest", "requestId": "r-1" })),
        )
        .await
        .unwrap();

        let response = response.unwrap();
        assert_eq!(response.version, "1.0");
        assert!(!response.response.should_end_session);
    }

    #[tokio::test]
    async fn test_handler_reports_invalid_intent() {
        let skill = Arc::new(Skill::from_config(&Config::default()).unwrap());
        let result = handler(
            skill,
            lambda_event(json!({
                "type": "IntentRequest",
                "requestId": "r-2",
                "intent": { "name": "AMAZON.FallbackIntent" }
            })),
        )
        .await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid intent"));
    }
}
